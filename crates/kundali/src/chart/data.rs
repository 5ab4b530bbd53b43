//! Chart payload handed over by the external astrology engine.
//!
//! Field names follow the camelCase JSON contract. All quantities are
//! precomputed; nothing here performs ephemeris work.

use crate::vedic::nakshatra::normalize_degrees;
use crate::vedic::zodiac::{Graha, ZodiacSign, SIGN_SPAN_DEGREES};
use serde::{Deserialize, Serialize};

/// One planet's computed state.
///
/// `degree` is an absolute ecliptic longitude; the in-sign degree is derived
/// from it. `house` is the external engine's value and is never used for
/// placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub planet: String,
    pub degree: f64,
    pub sign: String,
    pub house: u8,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "isRetrograde", default)]
    pub is_retrograde: bool,
}

impl PlanetPlacement {
    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        self.sign.parse().ok()
    }

    pub fn graha(&self) -> Option<Graha> {
        self.planet.parse().ok()
    }

    /// Longitude normalized to [0, 360).
    pub fn longitude(&self) -> f64 {
        normalize_degrees(self.degree)
    }

    pub fn degree_in_sign(&self) -> f64 {
        self.longitude() % SIGN_SPAN_DEGREES
    }

    /// Sign implied by the longitude, which may disagree with `sign`.
    pub fn longitude_sign(&self) -> ZodiacSign {
        ZodiacSign::from_longitude(self.degree)
    }

    /// Short chart label: the graha abbreviation, or the first two
    /// characters of an unrecognized name.
    pub fn label(&self) -> String {
        match self.graha() {
            Some(graha) => graha.label().to_string(),
            None => self.planet.chars().take(2).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseDefinition {
    #[serde(rename = "houseNumber")]
    pub house_number: u8,
    pub sign: String,
    #[serde(rename = "startDegree", default)]
    pub start_degree: f64,
    #[serde(default)]
    pub lord: String,
    #[serde(default)]
    pub meaning: String,
}

/// Carried through layout untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    #[serde(rename = "fromPlanet")]
    pub from_planet: String,
    #[serde(rename = "toPlanet")]
    pub to_planet: String,
    #[serde(rename = "aspectType")]
    pub aspect_type: String,
    #[serde(default)]
    pub orb: f64,
    #[serde(default)]
    pub strength: String,
}

/// The whole payload for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartVisualizationData {
    #[serde(default)]
    pub planets: Vec<PlanetPlacement>,
    #[serde(default)]
    pub houses: Vec<HouseDefinition>,
    #[serde(default)]
    pub aspects: Vec<AspectDefinition>,
}

impl ChartVisualizationData {
    pub fn house(&self, number: u8) -> Option<&HouseDefinition> {
        self.houses.iter().find(|h| h.house_number == number)
    }

    /// Sign string of the house-1 entry, if present.
    pub fn ascendant(&self) -> Option<&str> {
        self.house(1).map(|h| h.sign.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(planet: &str, degree: f64, sign: &str) -> PlanetPlacement {
        PlanetPlacement {
            planet: planet.to_string(),
            degree,
            sign: sign.to_string(),
            house: 1,
            color: String::new(),
            is_retrograde: false,
        }
    }

    #[test]
    fn test_degree_in_sign_uses_absolute_longitude() {
        let mars = placement("Mars", 222.5, "Scorpio");
        assert!((mars.degree_in_sign() - 12.5).abs() < 1e-9);
        assert_eq!(mars.longitude_sign(), ZodiacSign::Scorpio);

        let wrapped = placement("Moon", 365.0, "Aries");
        assert!((wrapped.degree_in_sign() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_falls_back_to_name_prefix() {
        assert_eq!(placement("Jupiter", 0.0, "Aries").label(), "Ju");
        assert_eq!(placement("Uranus", 0.0, "Aries").label(), "Ur");
    }
}
