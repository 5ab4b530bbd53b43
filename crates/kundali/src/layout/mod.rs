pub mod assembler;
pub mod houses;
pub mod placement;
pub mod types;

pub use assembler::{layout_chart, ChartAssembler};
pub use houses::{compute_house_geometry, compute_sign_rotation};
pub use placement::{assign_planets_to_houses, stack_positions, PlanetAssignment};
pub use types::{
    label_box_width, CellKind, ChartLayout, HouseCell, HouseGeometry, LayoutError, LayoutSettings,
    LayoutWarning, PlacedPlanet, Point, Segment,
};
