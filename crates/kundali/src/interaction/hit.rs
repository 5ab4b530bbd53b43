use crate::layout::types::Point;
use crate::rendering::scene::HitRegion;
use serde::{Deserialize, Serialize};

/// Pointer position in both coordinate spaces the renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position inside the chart scene
    pub scene: Point,
    /// Absolute page position, used to place the tooltip
    pub page: Point,
}

impl PointerEvent {
    pub fn new(scene: Point, page: Point) -> Self {
        Self { scene, page }
    }

    /// Event for a chart whose scene origin sits at `chart_origin` on the page
    pub fn at_page(page: Point, chart_origin: Point) -> Self {
        Self {
            scene: Point::new(page.x - chart_origin.x, page.y - chart_origin.y),
            page,
        }
    }
}

/// Hover state change produced by a pointer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Unchanged,
    Entered(usize),
    Left(usize),
    Moved { from: usize, to: usize },
}

/// Index of the topmost region under `point`.
///
/// Later regions are drawn above earlier ones, so the search runs backwards.
pub fn hit_test(regions: &[HitRegion], point: Point) -> Option<usize> {
    regions.iter().rposition(|r| r.bounds.contains(point))
}

/// Compare the previous hover target with the current one.
pub fn transition(previous: Option<usize>, current: Option<usize>) -> HoverTransition {
    match (previous, current) {
        (None, None) => HoverTransition::Unchanged,
        (Some(a), Some(b)) if a == b => HoverTransition::Unchanged,
        (None, Some(b)) => HoverTransition::Entered(b),
        (Some(a), None) => HoverTransition::Left(a),
        (Some(a), Some(b)) => HoverTransition::Moved { from: a, to: b },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition() {
        assert_eq!(transition(None, None), HoverTransition::Unchanged);
        assert_eq!(transition(Some(1), Some(1)), HoverTransition::Unchanged);
        assert_eq!(transition(None, Some(2)), HoverTransition::Entered(2));
        assert_eq!(transition(Some(2), None), HoverTransition::Left(2));
        assert_eq!(
            transition(Some(0), Some(3)),
            HoverTransition::Moved { from: 0, to: 3 }
        );
    }

    #[test]
    fn test_page_to_scene() {
        let event = PointerEvent::at_page(Point::new(150.0, 220.0), Point::new(100.0, 200.0));
        assert_eq!(event.scene, Point::new(50.0, 20.0));
        assert_eq!(event.page, Point::new(150.0, 220.0));
    }
}
