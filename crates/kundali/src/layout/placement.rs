use crate::chart::data::PlanetPlacement;
use crate::layout::types::{
    HouseCell, HouseGeometry, LayoutSettings, LayoutWarning, PlacedPlanet, Point,
};
use crate::vedic::zodiac::ZodiacSign;

/// Result of assigning planets to house cells
#[derive(Debug, Clone, Default)]
pub struct PlanetAssignment {
    pub placed: Vec<PlacedPlanet>,
    pub warnings: Vec<LayoutWarning>,
}

/// Place each planet in the cell of the house its sign occupies.
///
/// The payload's own `house` field is ignored here. Planets sharing a cell
/// stack downward in input order (see [`stack_positions`]). A planet whose
/// sign is not in `chart_signs` is dropped with an
/// [`LayoutWarning::OrphanPlanet`].
pub fn assign_planets_to_houses(
    planets: &[PlanetPlacement],
    chart_signs: &[ZodiacSign; 12],
    geometry: &HouseGeometry,
    settings: &LayoutSettings,
) -> PlanetAssignment {
    let mut assignment = PlanetAssignment::default();
    let mut slots = Vec::with_capacity(planets.len());
    let mut counts = [0usize; 12];

    for (index, planet) in planets.iter().enumerate() {
        let slot = planet
            .zodiac_sign()
            .and_then(|sign| chart_signs.iter().position(|s| *s == sign).map(|i| (i, sign)));

        match slot {
            Some((house_index, sign)) => {
                counts[house_index] += 1;
                slots.push((index, house_index, sign));
            }
            None => {
                log::warn!(
                    "Skipping {} (planets[{}]): sign {:?} does not map to any house",
                    planet.planet,
                    index,
                    planet.sign
                );
                assignment.warnings.push(LayoutWarning::OrphanPlanet {
                    planet: planet.planet.clone(),
                    sign: planet.sign.clone(),
                    index,
                });
            }
        }
    }

    let positions: Vec<Vec<Point>> = geometry
        .cells
        .iter()
        .zip(counts)
        .map(|(cell, count)| stack_positions(cell, count, settings))
        .collect();

    let mut stack_depth = [0usize; 12];
    for (index, house_index, sign) in slots {
        let (Some(cell), Some(cell_positions)) =
            (geometry.cells.get(house_index), positions.get(house_index))
        else {
            continue;
        };
        let stack_index = stack_depth[house_index];
        stack_depth[house_index] += 1;

        assignment.placed.push(PlacedPlanet {
            placement: planets[index].clone(),
            input_index: index,
            house: cell.number,
            sign,
            stack_index,
            position: cell_positions
                .get(stack_index)
                .copied()
                .unwrap_or(cell.center),
        });
    }

    assignment
}

/// Label anchors for `count` planets sharing `cell`.
///
/// Labels form a single column below the cell center, one
/// `planet_spacing` apart. When that column would leave the cell, the stack
/// is split into as few side-by-side columns as keep every label box inside
/// the cell. Columns fill top to bottom, left to right, so input order reads
/// down each column.
pub fn stack_positions(cell: &HouseCell, count: usize, settings: &LayoutSettings) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let fits = |positions: &[Point]| {
        positions
            .iter()
            .all(|p| cell.contains_box(*p, settings.label_width, settings.label_height))
    };

    for columns in 1..=count {
        let positions = grid(cell.center, count, columns, settings);
        if fits(&positions) {
            return positions;
        }
    }

    let columns = (count as f32).sqrt().ceil() as usize;
    log::warn!(
        "House {}: {} planet labels do not fit inside the cell at label size {}",
        cell.number,
        count,
        settings.label_height
    );
    grid(cell.center, count, columns, settings)
}

fn grid(center: Point, count: usize, columns: usize, settings: &LayoutSettings) -> Vec<Point> {
    let rows = count.div_ceil(columns);
    let gap = (settings.planet_spacing - settings.label_height).max(0.0);
    let pitch = settings.label_width + gap;
    let first_x = -(columns as f32 - 1.0) * pitch / 2.0;

    (0..count)
        .map(|k| {
            let (column, row) = (k / rows, k % rows);
            center.offset(
                first_x + column as f32 * pitch,
                settings.planet_start_offset + row as f32 * settings.planet_spacing,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::houses::compute_house_geometry;

    #[test]
    fn test_single_column_when_it_fits() {
        let settings = LayoutSettings::default();
        let geometry = compute_house_geometry(settings.origin, settings.size);
        let cell = geometry.cell(4).unwrap();

        let positions = stack_positions(cell, 3, &settings);
        assert_eq!(positions.len(), 3);
        assert!(positions.iter().all(|p| p.x == cell.center.x));
        assert_eq!(positions[1].y - positions[0].y, settings.planet_spacing);
    }

    #[test]
    fn test_crowded_edge_cell_splits_into_columns() {
        let settings = LayoutSettings::default();
        let geometry = compute_house_geometry(settings.origin, settings.size);
        let cell = geometry.cell(2).unwrap();

        let positions = stack_positions(cell, 6, &settings);
        assert!(positions.iter().any(|p| p.x != cell.center.x));
        for p in &positions {
            assert!(cell.contains_box(*p, settings.label_width, settings.label_height));
        }
    }

    #[test]
    fn test_no_planets_no_positions() {
        let settings = LayoutSettings::default();
        let geometry = compute_house_geometry(settings.origin, settings.size);
        assert!(stack_positions(geometry.cell(1).unwrap(), 0, &settings).is_empty());
    }
}
