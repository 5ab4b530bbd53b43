pub mod nakshatra;
pub mod zodiac;

pub use nakshatra::{nakshatra_for_longitude, normalize_degrees, NakshatraPosition, NakshatraRecord};
pub use zodiac::{Graha, UnknownGraha, UnknownSign, ZodiacSign, ZODIAC_SIGNS};
