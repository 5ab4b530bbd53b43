use crate::interaction::tooltip::TooltipContent;
use crate::rendering::primitives::{Color, Point, Rect, Shape};
use crate::rendering::svg;
use serde::{Deserialize, Serialize};

/// Pointer-sensitive area around one planet label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub planet: String,
    pub house: u8,
    pub bounds: Rect,
    pub tooltip: TooltipContent,
}

/// Scene description - declarative list of shapes to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub hit_regions: Vec<HitRegion>,
}

impl ChartScene {
    /// Create a new empty scene
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            background_color: Color::WHITE,
            shapes: Vec::new(),
            hit_regions: Vec::new(),
        }
    }

    /// True when nothing has been drawn
    pub fn is_blank(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Planet labels in draw order
    pub fn planet_labels(&self) -> impl Iterator<Item = (&str, Point)> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::PlanetLabel {
                planet, position, ..
            } => Some((planet.as_str(), *position)),
            _ => None,
        })
    }

    /// Every text shape's content, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Serialize as a standalone SVG document
    pub fn to_svg(&self) -> String {
        svg::scene_to_svg(self, None)
    }
}
