pub mod document;
pub mod hit;
pub mod renderer;
pub mod tooltip;

pub use document::{BodyNode, Document, NodeId, TooltipHost};
pub use hit::{hit_test, HoverTransition, PointerEvent};
pub use renderer::{ChartRenderer, DrawOutcome};
pub use tooltip::{Tooltip, TooltipContent, TOOLTIP_MARKER};
