//! Sample locations and voyages.
//!
//! A small fixed network used by the demo binary and by tests elsewhere.
//! Every location goes through [`LocationCode::parse`], so the constructors
//! return `Result` like any other application code building domain values.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{LocationCode, ValidationError, Voyage, VoyageBuilder, VoyageIdentifier};

/// UN/LOCODEs of every sample location.
pub const LOCATION_CODES: [&str; 10] = [
    "CNHKG", "AUMEL", "SESTO", "FIHEL", "USCHI", "JNTKO", "DEHAM", "NLRTM", "USNYC", "CNHGH",
];

/// Hong Kong.
pub fn hongkong() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("CNHKG")
}

/// Melbourne.
pub fn melbourne() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("AUMEL")
}

/// Stockholm.
pub fn stockholm() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("SESTO")
}

/// Helsinki.
pub fn helsinki() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("FIHEL")
}

/// Chicago.
pub fn chicago() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("USCHI")
}

/// Tokyo.
pub fn tokyo() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("JNTKO")
}

/// Hamburg.
pub fn hamburg() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("DEHAM")
}

/// Rotterdam.
pub fn rotterdam() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("NLRTM")
}

/// New York.
pub fn new_york() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("USNYC")
}

/// Hangzhou.
pub fn hangzhou() -> Result<LocationCode, ValidationError> {
    LocationCode::parse("CNHGH")
}

/// The given hour (UTC) of a day in March 2009.
fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 3, day, hour, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Hong Kong - Tokyo - New York.
pub fn v100() -> Result<Voyage, ValidationError> {
    Ok(VoyageBuilder::new(VoyageIdentifier::new("V100"), hongkong()?)
        .add_movement(tokyo()?, march(3, 0), march(5, 0))
        .add_movement(new_york()?, march(6, 0), march(9, 0))
        .build())
}

/// Tokyo - New York - Chicago - Stockholm.
pub fn v200() -> Result<Voyage, ValidationError> {
    Ok(VoyageBuilder::new(VoyageIdentifier::new("V200"), tokyo()?)
        .add_movement(new_york()?, march(6, 0), march(8, 0))
        .add_movement(chicago()?, march(10, 0), march(14, 0))
        .add_movement(stockholm()?, march(14, 0), march(16, 0))
        .build())
}

/// Tokyo - Rotterdam - Hamburg - Melbourne - Tokyo.
pub fn v300() -> Result<Voyage, ValidationError> {
    Ok(VoyageBuilder::new(VoyageIdentifier::new("V300"), tokyo()?)
        .add_movement(rotterdam()?, march(8, 0), march(11, 0))
        .add_movement(hamburg()?, march(11, 0), march(12, 0))
        .add_movement(melbourne()?, march(14, 0), march(18, 0))
        .add_movement(tokyo()?, march(19, 0), march(21, 0))
        .build())
}

/// Hamburg - Stockholm - Helsinki - Hamburg.
pub fn v400() -> Result<Voyage, ValidationError> {
    Ok(VoyageBuilder::new(VoyageIdentifier::new("V400"), hamburg()?)
        .add_movement(stockholm()?, march(14, 0), march(15, 0))
        .add_movement(helsinki()?, march(15, 0), march(16, 0))
        .add_movement(hamburg()?, march(20, 0), march(22, 0))
        .build())
}

/// All sample voyages.
pub fn voyages() -> Result<Vec<Voyage>, ValidationError> {
    Ok(vec![v100()?, v200()?, v300()?, v400()?])
}
