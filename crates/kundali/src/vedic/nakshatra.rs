//! Nakshatra lookup for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters). Only the lookup is
//! provided here; longitudes come precomputed in the chart payload.

use crate::vedic::zodiac::Graha;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (display_name, planetary lord)
pub const NAKSHATRA_ORDER: &[(&str, Graha)] = &[
    ("Ashwini", Graha::Ketu),
    ("Bharani", Graha::Venus),
    ("Krittika", Graha::Sun),
    ("Rohini", Graha::Moon),
    ("Mrigashira", Graha::Mars),
    ("Ardra", Graha::Rahu),
    ("Punarvasu", Graha::Jupiter),
    ("Pushya", Graha::Saturn),
    ("Ashlesha", Graha::Mercury),
    ("Magha", Graha::Ketu),
    ("Purva Phalguni", Graha::Venus),
    ("Uttara Phalguni", Graha::Sun),
    ("Hasta", Graha::Moon),
    ("Chitra", Graha::Mars),
    ("Swati", Graha::Rahu),
    ("Vishakha", Graha::Jupiter),
    ("Anuradha", Graha::Saturn),
    ("Jyeshtha", Graha::Mercury),
    ("Mula", Graha::Ketu),
    ("Purva Ashadha", Graha::Venus),
    ("Uttara Ashadha", Graha::Sun),
    ("Shravana", Graha::Moon),
    ("Dhanishta", Graha::Mars),
    ("Shatabhisha", Graha::Rahu),
    ("Purva Bhadrapada", Graha::Jupiter),
    ("Uttara Bhadrapada", Graha::Saturn),
    ("Revati", Graha::Mercury),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraRecord {
    pub index: usize,
    pub name: String,
    pub lord: Graha,
    pub start: f64,
    pub end: f64,
}

/// Nakshatra and pada occupied by a longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPosition {
    #[serde(flatten)]
    pub record: NakshatraRecord,
    pub offset: f64,
    pub pada: u8,
    #[serde(rename = "padaFraction")]
    pub pada_fraction: f64,
}

fn build_nakshatra_table() -> Vec<NakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (name, lord))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            NakshatraRecord {
                index: idx,
                name: name.to_string(),
                lord: *lord,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<NakshatraRecord> = build_nakshatra_table();
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // -1e-15 + 360.0 rounds to 360.0
    if normalized >= 360.0 {
        normalized = 0.0;
    }
    normalized
}

/// Return the nakshatra containing the given absolute longitude.
pub fn nakshatra_for_longitude(longitude: f64) -> NakshatraPosition {
    let lon = normalize_degrees(longitude);
    let index = (lon / NAKSHATRA_SEGMENT_SIZE) as usize % NAKSHATRA_TABLE.len();
    let record = NAKSHATRA_TABLE[index].clone();

    let offset = lon - record.start;
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;
    let pada_offset = offset - f64::from(pada - 1) * PADA_SIZE;

    NakshatraPosition {
        record,
        offset,
        pada,
        pada_fraction: pada_offset / PADA_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-1e-15), 0.0);
    }

    #[test]
    fn test_nakshatra_for_longitude() {
        let meta = nakshatra_for_longitude(0.0);
        assert_eq!(meta.record.name, "Ashwini");
        assert_eq!(meta.record.lord, Graha::Ketu);
        assert_eq!(meta.pada, 1);

        let meta2 = nakshatra_for_longitude(13.33);
        assert_eq!(meta2.record.name, "Ashwini");
        assert_eq!(meta2.pada, 4);

        // Anuradha spans 213°20' - 226°40'.
        let meta3 = nakshatra_for_longitude(221.0);
        assert_eq!(meta3.record.name, "Anuradha");
        assert_eq!(meta3.pada, 3);
    }

    #[test]
    fn test_last_nakshatra_wraps() {
        let meta = nakshatra_for_longitude(359.99);
        assert_eq!(meta.record.name, "Revati");
        assert_eq!(meta.pada, 4);
    }

    #[test]
    fn test_tiny_negative_longitude_is_first_pada() {
        let meta = nakshatra_for_longitude(-1e-15);
        assert_eq!(meta.record.name, "Ashwini");
        assert_eq!(meta.pada, 1);
        assert!(meta.offset >= 0.0);
    }
}
