//! Carrier movement (one transport leg of a voyage).

use chrono::{DateTime, Duration, Utc};

use super::LocationCode;

/// A vessel voyage from one location to another.
///
/// Plain value: two movements are equal when all four fields are. Whether
/// consecutive movements connect is the business of
/// [`VoyageBuilder`](super::VoyageBuilder), not of the movement itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarrierMovement {
    departure_location: LocationCode,
    arrival_location: LocationCode,
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
}

impl CarrierMovement {
    /// Creates a movement between two locations.
    pub fn new(
        departure_location: LocationCode,
        arrival_location: LocationCode,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> Self {
        Self {
            departure_location,
            arrival_location,
            departure_time,
            arrival_time,
        }
    }

    /// Returns the departure location.
    pub fn departure_location(&self) -> &LocationCode {
        &self.departure_location
    }

    /// Returns the arrival location.
    pub fn arrival_location(&self) -> &LocationCode {
        &self.arrival_location
    }

    /// Returns the departure time.
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.departure_time
    }

    /// Returns the arrival time.
    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.arrival_time
    }

    /// Returns the time spent at sea.
    ///
    /// Negative if the movement arrives before it departs; no ordering of
    /// the two times is enforced.
    pub fn duration(&self) -> Duration {
        self.arrival_time.signed_duration_since(self.departure_time)
    }

    /// Returns true if all four fields are equal.
    pub fn same_value_as(&self, other: &CarrierMovement) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn loc(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2008, 10, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn accessors() {
        let m = CarrierMovement::new(loc("SESTO"), loc("AUMEL"), at(1, 12), at(3, 18));
        assert_eq!(m.departure_location(), &loc("SESTO"));
        assert_eq!(m.arrival_location(), &loc("AUMEL"));
        assert_eq!(m.departure_time(), at(1, 12));
        assert_eq!(m.arrival_time(), at(3, 18));
    }

    #[test]
    fn duration() {
        let m = CarrierMovement::new(loc("SESTO"), loc("AUMEL"), at(1, 12), at(3, 18));
        assert_eq!(m.duration(), Duration::hours(54));
    }

    #[test]
    fn same_value_compares_all_fields() {
        let a = CarrierMovement::new(loc("SESTO"), loc("AUMEL"), at(1, 12), at(3, 18));
        let b = CarrierMovement::new(loc("sesto"), loc("aumel"), at(1, 12), at(3, 18));
        let later = CarrierMovement::new(loc("SESTO"), loc("AUMEL"), at(2, 12), at(3, 18));
        let elsewhere = CarrierMovement::new(loc("SESTO"), loc("CNHGH"), at(1, 12), at(3, 18));

        assert!(a.same_value_as(&b));
        assert!(!a.same_value_as(&later));
        assert!(!a.same_value_as(&elsewhere));
    }
}
