//! Sign rotation and the fixed North-Indian house diagram.
//!
//! Houses occupy fixed screen cells; the signs rotate through them starting
//! from the ascendant. The cell table below is a frozen visual contract:
//! house 1 is the top inner diamond, house 12 the top-left triangle, and the
//! numbers advance one cell at a time around the diamond (2 top-right,
//! 4 right, 7 bottom, 10 left).
//!
//! This is the mirror image of the common North-Indian drawing, where house 2
//! sits top-left and house 4 on the left. The mirrored order is intentional:
//! it keeps house 12 in the top-left triangle. Do not flip it.

use crate::layout::types::{CellKind, HouseCell, HouseGeometry, LayoutError, Point, Segment};
use crate::vedic::zodiac::ZodiacSign;

/// (house, kind, center, polygon) in units of half the chart side, relative
/// to the chart center.
type CellTemplate = (u8, CellKind, (f32, f32), &'static [(f32, f32)]);

const HOUSE_TABLE: [CellTemplate; 12] = [
    (1, CellKind::Kendra, (0.0, -0.5), &[(0.0, -1.0), (0.5, -0.5), (0.0, 0.0), (-0.5, -0.5)]),
    (2, CellKind::Horizontal, (0.5, -0.8), &[(0.0, -1.0), (1.0, -1.0), (0.5, -0.5)]),
    (3, CellKind::Vertical, (0.8, -0.5), &[(1.0, -1.0), (1.0, 0.0), (0.5, -0.5)]),
    (4, CellKind::Kendra, (0.5, 0.0), &[(0.5, -0.5), (1.0, 0.0), (0.5, 0.5), (0.0, 0.0)]),
    (5, CellKind::Vertical, (0.8, 0.5), &[(1.0, 0.0), (1.0, 1.0), (0.5, 0.5)]),
    (6, CellKind::Horizontal, (0.5, 0.8), &[(1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]),
    (7, CellKind::Kendra, (0.0, 0.5), &[(0.0, 0.0), (0.5, 0.5), (0.0, 1.0), (-0.5, 0.5)]),
    (8, CellKind::Horizontal, (-0.5, 0.8), &[(0.0, 1.0), (-1.0, 1.0), (-0.5, 0.5)]),
    (9, CellKind::Vertical, (-0.8, 0.5), &[(-1.0, 1.0), (-1.0, 0.0), (-0.5, 0.5)]),
    (10, CellKind::Kendra, (-0.5, 0.0), &[(-0.5, -0.5), (0.0, 0.0), (-0.5, 0.5), (-1.0, 0.0)]),
    (11, CellKind::Vertical, (-0.8, -0.5), &[(-1.0, 0.0), (-1.0, -1.0), (-0.5, -0.5)]),
    (12, CellKind::Horizontal, (-0.5, -0.8), &[(-1.0, -1.0), (0.0, -1.0), (-0.5, -0.5)]),
];

const FRAME: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
const DIAMOND: [(f32, f32); 4] = [(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)];

/// Rotate the zodiac so that the ascendant occupies house 1.
///
/// `ascendant` must be an exact, case-sensitive canonical sign name.
pub fn compute_sign_rotation(ascendant: &str) -> Result<[ZodiacSign; 12], LayoutError> {
    let asc: ZodiacSign = ascendant
        .parse()
        .map_err(|_| LayoutError::InvalidAscendant {
            found: Some(ascendant.to_string()),
        })?;

    Ok(std::array::from_fn(|i| asc.offset(i)))
}

/// Scale the fixed house table into a square of side `size` whose top-left
/// corner is `origin`.
pub fn compute_house_geometry(origin: Point, size: f32) -> HouseGeometry {
    let half = size / 2.0;
    let center = origin.offset(half, half);
    let scale = |(ux, uy): (f32, f32)| center.offset(ux * half, uy * half);

    let cells = HOUSE_TABLE
        .iter()
        .map(|(number, kind, c, polygon)| HouseCell {
            number: *number,
            kind: *kind,
            center: scale(*c),
            polygon: polygon.iter().copied().map(scale).collect(),
        })
        .collect();

    let frame: Vec<Point> = FRAME.iter().copied().map(scale).collect();

    HouseGeometry {
        origin,
        size,
        center,
        diagonals: [
            Segment {
                from: frame[0],
                to: frame[2],
            },
            Segment {
                from: frame[1],
                to: frame[3],
            },
        ],
        diamond: DIAMOND.iter().copied().map(scale).collect(),
        frame,
        cells,
    }
}
