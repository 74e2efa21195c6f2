//! Voyage entity.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{LocationCode, Schedule, VoyageBuilder, VoyageIdentifier};

static NONE: Voyage = Voyage {
    voyage_number: VoyageIdentifier::EMPTY,
    schedule: Schedule::EMPTY,
};

/// A scheduled carrier voyage.
///
/// A voyage is an entity: its identity is its voyage number. Two voyages
/// with the same number are the same voyage even if their schedules
/// differ, so `==` and `Hash` look only at the number.
///
/// Use [`Voyage::none`] rather than `Option<Voyage>` where a cargo has not
/// been assigned a voyage yet.
///
/// # Examples
///
/// ```
/// use shipping_domain::domain::{LocationCode, Schedule, Voyage, VoyageIdentifier};
///
/// let id = VoyageIdentifier::new("V001");
/// let a = Voyage::new(id.clone(), Schedule::default());
///
/// let b = Voyage::builder(id, LocationCode::parse("SESTO").unwrap()).build();
///
/// // Same voyage number, so the same voyage
/// assert!(a.same_identity_as(&b));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Voyage {
    voyage_number: VoyageIdentifier,
    schedule: Schedule,
}

impl Voyage {
    /// Creates a voyage with a complete schedule.
    pub fn new(voyage_number: VoyageIdentifier, schedule: Schedule) -> Self {
        Self {
            voyage_number,
            schedule,
        }
    }

    /// Starts building a voyage that departs from `departure_location`.
    pub fn builder(
        voyage_number: VoyageIdentifier,
        departure_location: LocationCode,
    ) -> VoyageBuilder {
        VoyageBuilder::new(voyage_number, departure_location)
    }

    /// The shared "no voyage" value.
    ///
    /// It has the empty voyage number and the empty schedule.
    pub fn none() -> &'static Voyage {
        &NONE
    }

    /// Returns true if this voyage matches the "no voyage" value in full:
    /// the reserved empty number and an empty schedule.
    ///
    /// A voyage with the empty number but real movements is not the
    /// sentinel, even though it compares equal to it by identity.
    pub fn is_none(&self) -> bool {
        self.voyage_number.is_empty() && self.schedule.is_empty()
    }

    /// Returns the voyage number (the identity of this voyage).
    pub fn voyage_number(&self) -> &VoyageIdentifier {
        &self.voyage_number
    }

    /// Returns the schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Entities compare by identity: two voyages are the same when their
    /// voyage numbers are the same value.
    pub fn same_identity_as(&self, other: &Voyage) -> bool {
        self.voyage_number.same_value_as(&other.voyage_number)
    }
}

impl PartialEq for Voyage {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Voyage {}

impl Hash for Voyage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.voyage_number.hash(state);
    }
}

impl fmt::Display for Voyage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Voyage {}", self.voyage_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CarrierMovement;
    use chrono::{DateTime, TimeZone, Utc};

    fn loc(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2008, 10, day, 0, 0, 0).unwrap()
    }

    fn one_leg() -> Schedule {
        Schedule::new(vec![CarrierMovement::new(
            loc("SESTO"),
            loc("AUMEL"),
            at(1),
            at(3),
        )])
    }

    #[test]
    fn accessors_return_what_was_given() {
        let id = VoyageIdentifier::new("V001");
        let schedule = one_leg();
        let voyage = Voyage::new(id.clone(), schedule.clone());

        assert!(voyage.voyage_number().same_value_as(&id));
        assert!(voyage.schedule().same_value_as(&schedule));
        // Repeated reads see the same data
        assert!(std::ptr::eq(voyage.schedule(), voyage.schedule()));
    }

    #[test]
    fn same_number_different_schedule_is_same_voyage() {
        let a = Voyage::new(VoyageIdentifier::new("V001"), one_leg());
        let b = Voyage::new(VoyageIdentifier::new("V001"), Schedule::default());

        assert!(a.same_identity_as(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn different_number_same_schedule_is_different_voyage() {
        let a = Voyage::new(VoyageIdentifier::new("V001"), one_leg());
        let b = Voyage::new(VoyageIdentifier::new("V002"), one_leg());

        assert!(!a.same_identity_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_follows_identity() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Voyage::new(VoyageIdentifier::new("V001"), one_leg()));

        assert!(set.contains(&Voyage::new(
            VoyageIdentifier::new("V001"),
            Schedule::default()
        )));
        assert!(!set.contains(&Voyage::new(VoyageIdentifier::new("V002"), one_leg())));
    }

    #[test]
    fn none_sentinel() {
        let none = Voyage::none();
        assert!(none.same_identity_as(Voyage::none()));
        assert!(none.is_none());
        assert!(none.voyage_number().is_empty());
        assert!(none.schedule().is_empty());
        assert!(std::ptr::eq(none, Voyage::none()));
    }

    #[test]
    fn real_voyage_is_not_none() {
        let voyage = Voyage::new(VoyageIdentifier::new("V001"), one_leg());
        assert!(!voyage.is_none());
        assert_ne!(&voyage, Voyage::none());
    }

    #[test]
    fn empty_number_with_movements_is_not_none() {
        let voyage = Voyage::new(VoyageIdentifier::new(""), one_leg());
        assert!(!voyage.is_none());

        let bare = Voyage::new(VoyageIdentifier::new(""), Schedule::default());
        assert!(bare.is_none());
    }

    #[test]
    fn display() {
        let voyage = Voyage::new(VoyageIdentifier::new("0101"), Schedule::default());
        assert_eq!(voyage.to_string(), "Voyage 0101");
    }
}
