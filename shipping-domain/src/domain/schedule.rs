//! Voyage schedule type.

use chrono::{DateTime, Utc};

use super::{CarrierMovement, LocationCode};

static EMPTY_SCHEDULE: Schedule = Schedule::EMPTY;

/// An ordered sequence of carrier movements, in travel order.
///
/// Schedules are values: two schedules are equal only when they hold the
/// same movements in the same order. A schedule built directly from a list
/// of movements is taken as given; use [`Schedule::is_continuous`] to check
/// one that did not come from a [`VoyageBuilder`](super::VoyageBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Schedule {
    movements: Vec<CarrierMovement>,
}

impl Schedule {
    pub(crate) const EMPTY: Schedule = Schedule {
        movements: Vec::new(),
    };

    /// Creates a schedule from movements in travel order.
    pub fn new(movements: Vec<CarrierMovement>) -> Self {
        Self { movements }
    }

    /// The shared empty schedule.
    pub fn empty() -> &'static Schedule {
        &EMPTY_SCHEDULE
    }

    /// Returns all movements in order.
    pub fn carrier_movements(&self) -> &[CarrierMovement] {
        &self.movements
    }

    /// Returns the number of movements.
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Returns true if the schedule has no movements.
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Returns true if both schedules hold equal movements in the same order.
    pub fn same_value_as(&self, other: &Schedule) -> bool {
        self.movements == other.movements
    }

    /// Returns where the first movement departs from.
    pub fn departure_location(&self) -> Option<&LocationCode> {
        self.movements.first().map(CarrierMovement::departure_location)
    }

    /// Returns where the last movement arrives.
    pub fn arrival_location(&self) -> Option<&LocationCode> {
        self.movements.last().map(CarrierMovement::arrival_location)
    }

    /// Returns when the first movement departs.
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        self.movements.first().map(CarrierMovement::departure_time)
    }

    /// Returns when the last movement arrives.
    pub fn arrival_time(&self) -> Option<DateTime<Utc>> {
        self.movements.last().map(CarrierMovement::arrival_time)
    }

    /// Returns true if every movement departs from where the previous one
    /// arrived. Empty and single-movement schedules are trivially continuous.
    pub fn is_continuous(&self) -> bool {
        self.movements
            .windows(2)
            .all(|pair| pair[0].arrival_location() == pair[1].departure_location())
    }
}
