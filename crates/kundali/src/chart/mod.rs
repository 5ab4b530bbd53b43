pub mod data;
pub mod loader;

pub use data::{AspectDefinition, ChartVisualizationData, HouseDefinition, PlanetPlacement};
pub use loader::{load_chart_data_from_json, validate_chart_data, PayloadError};
