use crate::chart::data::{AspectDefinition, PlanetPlacement};
use crate::vedic::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Point in 2D scene space (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Shape class of a house cell in the North-Indian diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Inner diamond cell (houses 1, 4, 7, 10)
    Kendra,
    /// Triangle resting on the top or bottom edge (houses 2, 6, 8, 12)
    Horizontal,
    /// Triangle resting on the left or right edge (houses 3, 5, 9, 11)
    Vertical,
}

/// One fixed house cell, already scaled into scene space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCell {
    pub number: u8,
    pub kind: CellKind,
    pub center: Point,
    pub polygon: Vec<Point>,
}

impl HouseCell {
    /// Whether `p` lies inside or on the edge of the cell. Cells are convex.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.polygon.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0f32;
        for i in 0..n {
            let a = self.polygon[i];
            let b = self.polygon[(i + 1) % n];
            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if cross.abs() <= 1e-3 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Whether an axis-aligned box of the given size centered on `center`
    /// fits entirely inside the cell.
    pub fn contains_box(&self, center: Point, width: f32, height: f32) -> bool {
        let (hw, hh) = (width / 2.0, height / 2.0);
        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
            .into_iter()
            .all(|(dx, dy)| self.contains(center.offset(dx, dy)))
    }
}

/// Chart-independent diamond geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseGeometry {
    pub origin: Point,
    pub size: f32,
    pub center: Point,
    /// Outer square
    pub frame: Vec<Point>,
    /// Diamond joining the midpoints of the frame
    pub diamond: Vec<Point>,
    pub diagonals: [Segment; 2],
    /// Indexed by house number - 1
    pub cells: Vec<HouseCell>,
}

impl HouseGeometry {
    pub fn cell(&self, house: u8) -> Option<&HouseCell> {
        self.cells.get(usize::from(house).checked_sub(1)?)
    }
}

/// Rough advance width of one label character relative to the font size.
pub const CHAR_WIDTH_RATIO: f32 = 0.62;

/// Planet labels are at most two characters.
pub const MAX_LABEL_CHARS: usize = 2;

/// Width reserved for a planet label drawn at `font_size`.
pub fn label_box_width(font_size: f32) -> f32 {
    MAX_LABEL_CHARS as f32 * font_size * CHAR_WIDTH_RATIO
}

/// Spacing rules for the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Top-left corner of the chart square
    pub origin: Point,
    /// Side of the chart square
    pub size: f32,
    /// Vertical offset of the first planet from the cell center
    pub planet_start_offset: f32,
    /// Vertical distance between stacked planets
    pub planet_spacing: f32,
    /// Box every planet label must fit in
    pub label_width: f32,
    pub label_height: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            origin: Point::new(40.0, 40.0),
            size: 520.0,
            planet_start_offset: 10.0,
            planet_spacing: 16.0,
            label_width: label_box_width(13.0),
            label_height: 13.0,
        }
    }
}

/// A planet assigned to a house cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlanet {
    pub placement: PlanetPlacement,
    /// Position of the planet in the payload
    pub input_index: usize,
    /// House derived from the sign rotation
    pub house: u8,
    pub sign: ZodiacSign,
    /// Stack position inside the cell, 0 for the first
    pub stack_index: usize,
    pub position: Point,
}

/// Draw-ready layout of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub ascendant: ZodiacSign,
    /// `chart_signs[i]` occupies house `i + 1`
    pub chart_signs: [ZodiacSign; 12],
    pub geometry: HouseGeometry,
    pub planets: Vec<PlacedPlanet>,
    pub warnings: Vec<LayoutWarning>,
    pub aspects: Vec<AspectDefinition>,
}

impl ChartLayout {
    pub fn sign_of_house(&self, house: u8) -> Option<ZodiacSign> {
        self.chart_signs
            .get(usize::from(house).checked_sub(1)?)
            .copied()
    }

    pub fn planets_in_house(&self, house: u8) -> impl Iterator<Item = &PlacedPlanet> {
        self.planets.iter().filter(move |p| p.house == house)
    }

    pub fn find_planet(&self, name: &str) -> Option<&PlacedPlanet> {
        self.planets.iter().find(|p| p.placement.planet == name)
    }
}

/// Fatal layout errors; nothing is drawn
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid ascendant: {}", .found.as_deref().unwrap_or("house 1 missing"))]
    InvalidAscendant { found: Option<String> },
    #[error("Empty payload: no houses supplied")]
    EmptyPayload,
}

/// Non-fatal layout problems; the rest of the chart still renders
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutWarning {
    #[error("Orphan planet: {planet} (planets[{index}]) has unrecognized sign {sign:?}")]
    OrphanPlanet {
        planet: String,
        sign: String,
        index: usize,
    },
}
