use crate::chart::data::ChartVisualizationData;
use crate::layout::houses::{compute_house_geometry, compute_sign_rotation};
use crate::layout::placement::assign_planets_to_houses;
use crate::layout::types::{ChartLayout, LayoutError, LayoutSettings};

/// Chart assembler
pub struct ChartAssembler;

impl ChartAssembler {
    /// Build the complete layout for one payload.
    ///
    /// Fails only when no ascendant can be established. Planet-level
    /// problems are reported through `ChartLayout::warnings`.
    pub fn build_chart(
        data: &ChartVisualizationData,
        settings: &LayoutSettings,
    ) -> Result<ChartLayout, LayoutError> {
        if data.houses.is_empty() {
            return Err(LayoutError::EmptyPayload);
        }

        let ascendant = data
            .ascendant()
            .ok_or(LayoutError::InvalidAscendant { found: None })?;
        let chart_signs = compute_sign_rotation(ascendant)?;
        log::debug!(
            "Ascendant {} (lord {}), {} planet(s)",
            chart_signs[0],
            chart_signs[0].lord(),
            data.planets.len()
        );

        let geometry = compute_house_geometry(settings.origin, settings.size);
        let assignment =
            assign_planets_to_houses(&data.planets, &chart_signs, &geometry, settings);

        for placed in &assignment.placed {
            let planet = &placed.placement;
            if planet.graha().is_none() {
                log::debug!(
                    "{}: not one of the nine grahas, labelled {:?}",
                    planet.planet,
                    planet.label()
                );
            }
            if planet.house != placed.house {
                log::debug!(
                    "{}: payload house {} differs from whole-sign house {}",
                    planet.planet,
                    planet.house,
                    placed.house
                );
            }
            let implied = planet.longitude_sign();
            if implied != placed.sign {
                log::debug!(
                    "{}: longitude {:.2} implies {} but payload sign is {}",
                    planet.planet,
                    planet.degree,
                    implied,
                    placed.sign
                );
            }
        }

        Ok(ChartLayout {
            ascendant: chart_signs[0],
            chart_signs,
            geometry,
            planets: assignment.placed,
            warnings: assignment.warnings,
            aspects: data.aspects.clone(),
        })
    }
}

/// Shorthand for [`ChartAssembler::build_chart`].
pub fn layout_chart(
    data: &ChartVisualizationData,
    settings: &LayoutSettings,
) -> Result<ChartLayout, LayoutError> {
    ChartAssembler::build_chart(data, settings)
}
