pub mod generator;
pub mod primitives;
pub mod scene;
pub mod svg;
pub mod visual_config;

pub use generator::ChartSceneGenerator;
pub use scene::{ChartScene, HitRegion};
pub use visual_config::VisualConfig;
