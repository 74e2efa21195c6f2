//! Incremental voyage construction.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::{CarrierMovement, LocationCode, Schedule, Voyage, VoyageIdentifier};

/// Builds a [`Voyage`] one movement at a time.
///
/// The builder keeps a cursor on the current location. Each movement
/// departs from the cursor and moves it to the movement's arrival, so a
/// schedule built this way always connects: movement `i + 1` departs from
/// where movement `i` arrived.
///
/// # Examples
///
/// ```
/// use shipping_domain::domain::{LocationCode, VoyageBuilder, VoyageIdentifier};
/// use chrono::{TimeZone, Utc};
///
/// let t = |day| Utc.with_ymd_and_hms(2008, 10, day, 0, 0, 0).unwrap();
/// let sesto = LocationCode::parse("SESTO").unwrap();
/// let aumel = LocationCode::parse("AUMEL").unwrap();
/// let cnhgh = LocationCode::parse("CNHGH").unwrap();
///
/// let voyage = VoyageBuilder::new(VoyageIdentifier::new("V001"), sesto)
///     .add_movement(aumel.clone(), t(1), t(3))
///     .add_movement(cnhgh, t(4), t(9))
///     .build();
///
/// let movements = voyage.schedule().carrier_movements();
/// assert_eq!(movements.len(), 2);
/// assert_eq!(movements[1].departure_location(), &aumel);
/// ```
#[derive(Debug, Clone)]
pub struct VoyageBuilder {
    voyage_number: VoyageIdentifier,
    current_location: LocationCode,
    movements: Vec<CarrierMovement>,
}

impl VoyageBuilder {
    /// Starts a voyage departing from `departure_location`, with no movements yet.
    pub fn new(voyage_number: VoyageIdentifier, departure_location: LocationCode) -> Self {
        Self {
            voyage_number,
            current_location: departure_location,
            movements: Vec::new(),
        }
    }

    /// Appends a movement from the current location to `arrival_location`
    /// and moves the cursor there.
    pub fn add_movement(
        &mut self,
        arrival_location: LocationCode,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> &mut Self {
        trace!(
            voyage = %self.voyage_number,
            from = %self.current_location,
            to = %arrival_location,
            "adding carrier movement"
        );

        // Next departure is from where this one arrives
        let departure_location =
            std::mem::replace(&mut self.current_location, arrival_location.clone());
        self.movements.push(CarrierMovement::new(
            departure_location,
            arrival_location,
            departure_time,
            arrival_time,
        ));
        self
    }

    /// Where the next movement will depart from.
    pub fn current_location(&self) -> &LocationCode {
        &self.current_location
    }

    /// Returns how many movements have been added.
    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    /// Produces a voyage from the movements added so far.
    ///
    /// The builder is left untouched, so it can keep accumulating and
    /// be built again.
    pub fn build(&self) -> Voyage {
        debug!(
            voyage = %self.voyage_number,
            movements = self.movements.len(),
            "built voyage"
        );
        Voyage::new(
            self.voyage_number.clone(),
            Schedule::new(self.movements.clone()),
        )
    }
}
