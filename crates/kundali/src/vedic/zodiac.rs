//! Zodiac sign and graha vocabularies.
//!
//! Sign names are matched case-sensitively against the canonical list; the
//! order of [`ZODIAC_SIGNS`] is the natural zodiacal order and drives the
//! house rotation.

use crate::vedic::nakshatra::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SIGN_SPAN_DEGREES: f64 = 30.0;

/// Canonical sign names in zodiacal order.
pub const ZODIAC_SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown zodiac sign: {0:?}")]
pub struct UnknownSign(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown graha: {0:?}")]
pub struct UnknownGraha(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in the zodiac, 0 for Aries through 11 for Pisces.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    /// Sign containing an absolute ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let lon = normalize_degrees(longitude);
        Self::from_index((lon / SIGN_SPAN_DEGREES) as usize)
    }

    /// The sign `steps` places later in zodiacal order.
    pub fn offset(self, steps: usize) -> ZodiacSign {
        Self::from_index(self.index() + steps)
    }

    pub fn name(self) -> &'static str {
        ZODIAC_SIGNS[self.index()]
    }

    /// Two-letter label drawn inside a house cell. All twelve are distinct.
    pub fn abbreviation(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Ar",
            ZodiacSign::Taurus => "Ta",
            ZodiacSign::Gemini => "Ge",
            ZodiacSign::Cancer => "Cn",
            ZodiacSign::Leo => "Le",
            ZodiacSign::Virgo => "Vi",
            ZodiacSign::Libra => "Li",
            ZodiacSign::Scorpio => "Sc",
            ZodiacSign::Sagittarius => "Sg",
            ZodiacSign::Capricorn => "Cp",
            ZodiacSign::Aquarius => "Aq",
            ZodiacSign::Pisces => "Pi",
        }
    }

    /// Traditional (Parashari) sign ruler.
    pub fn lord(self) -> Graha {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => Graha::Mars,
            ZodiacSign::Taurus | ZodiacSign::Libra => Graha::Venus,
            ZodiacSign::Gemini | ZodiacSign::Virgo => Graha::Mercury,
            ZodiacSign::Cancer => Graha::Moon,
            ZodiacSign::Leo => Graha::Sun,
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => Graha::Jupiter,
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => Graha::Saturn,
        }
    }
}

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZODIAC_SIGNS
            .iter()
            .position(|name| *name == s)
            .map(Self::from_index)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine grahas of a Vedic chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl Graha {
    pub const ALL: [Graha; 9] = [
        Graha::Sun,
        Graha::Moon,
        Graha::Mercury,
        Graha::Venus,
        Graha::Mars,
        Graha::Jupiter,
        Graha::Saturn,
        Graha::Rahu,
        Graha::Ketu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Graha::Sun => "Sun",
            Graha::Moon => "Moon",
            Graha::Mercury => "Mercury",
            Graha::Venus => "Venus",
            Graha::Mars => "Mars",
            Graha::Jupiter => "Jupiter",
            Graha::Saturn => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// Short label used inside the chart.
    pub fn label(self) -> &'static str {
        match self {
            Graha::Sun => "Su",
            Graha::Moon => "Mo",
            Graha::Mercury => "Me",
            Graha::Venus => "Ve",
            Graha::Mars => "Ma",
            Graha::Jupiter => "Ju",
            Graha::Saturn => "Sa",
            Graha::Rahu => "Ra",
            Graha::Ketu => "Ke",
        }
    }
}

impl FromStr for Graha {
    type Err = UnknownGraha;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == s)
            .ok_or_else(|| UnknownGraha(s.to_string()))
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_parse_is_case_sensitive() {
        assert_eq!("Leo".parse::<ZodiacSign>(), Ok(ZodiacSign::Leo));
        assert!("leo".parse::<ZodiacSign>().is_err());
        assert!("Unknownsign".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_sign_from_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(215.5), ZodiacSign::Scorpio);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
    }

    #[test]
    fn test_abbreviations_are_unique() {
        let mut seen: Vec<&str> = ZodiacSign::ALL.iter().map(|s| s.abbreviation()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_graha_roundtrip_names() {
        for graha in Graha::ALL {
            assert_eq!(graha.name().parse::<Graha>(), Ok(graha));
        }
        assert!("Pluto".parse::<Graha>().is_err());
    }
}
