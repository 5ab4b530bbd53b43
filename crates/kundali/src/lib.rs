//! North-Indian Vedic birth chart layout and rendering.
//!
//! A precomputed chart payload goes through the layout engine
//! ([`layout::layout_chart`]), which rotates the signs from the ascendant and
//! places planets into the fixed diamond cells, and then through
//! [`interaction::ChartRenderer`], which builds the drawable scene, serializes
//! it to SVG and drives the hover tooltip.

pub mod chart;
pub mod interaction;
pub mod layout;
pub mod rendering;
pub mod vedic;

pub use chart::{load_chart_data_from_json, ChartVisualizationData, PayloadError};
pub use interaction::{ChartRenderer, Document, DrawOutcome, PointerEvent};
pub use layout::{layout_chart, ChartLayout, LayoutError, LayoutSettings, LayoutWarning};
pub use rendering::{ChartScene, VisualConfig};
pub use vedic::{Graha, ZodiacSign};
