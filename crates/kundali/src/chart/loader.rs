use crate::chart::data::ChartVisualizationData;
use thiserror::Error;

/// Errors that can occur when loading a chart payload
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
    #[error("Duplicate house number: {0}")]
    DuplicateHouse(u8),
}

/// Load a chart payload from a JSON string.
///
/// Only structural problems are rejected here. An unknown ascendant or planet
/// sign is left for the layout engine, which degrades instead of failing.
pub fn load_chart_data_from_json(json: &str) -> Result<ChartVisualizationData, PayloadError> {
    let data: ChartVisualizationData =
        serde_json::from_str(json).map_err(|e| PayloadError::InvalidJson(e.to_string()))?;

    validate_chart_data(&data)?;

    Ok(data)
}

/// Validate a chart payload
pub fn validate_chart_data(data: &ChartVisualizationData) -> Result<(), PayloadError> {
    let mut seen = [false; 12];

    for (index, house) in data.houses.iter().enumerate() {
        if !(1..=12).contains(&house.house_number) {
            return Err(PayloadError::InvalidFieldValue(format!(
                "houses[{}].houseNumber must be between 1 and 12, got {}",
                index, house.house_number
            )));
        }
        let slot = &mut seen[usize::from(house.house_number - 1)];
        if *slot {
            return Err(PayloadError::DuplicateHouse(house.house_number));
        }
        *slot = true;
    }

    for (index, planet) in data.planets.iter().enumerate() {
        if planet.planet.trim().is_empty() {
            return Err(PayloadError::InvalidFieldValue(format!(
                "planets[{}].planet must be a non-empty string",
                index
            )));
        }
        if !planet.degree.is_finite() {
            return Err(PayloadError::InvalidFieldValue(format!(
                "planets[{}].degree must be a finite number",
                index
            )));
        }
    }

    for (index, aspect) in data.aspects.iter().enumerate() {
        if aspect.from_planet.is_empty() || aspect.to_planet.is_empty() {
            return Err(PayloadError::InvalidFieldValue(format!(
                "aspects[{}] must name both planets",
                index
            )));
        }
    }

    Ok(())
}
