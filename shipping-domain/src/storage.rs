//! Storage records for voyages.
//!
//! A persistence collaborator writes a [`VoyageRecord`] snapshot of a
//! voyage and later turns it back into a [`Voyage`]. Two ways back exist:
//!
//! - `Voyage::try_from(record)` validates everything, and is the right
//!   choice for records from any source that is not this system's own store.
//! - [`VoyageRecord::rehydrate`] trusts location codes the store wrote
//!   itself and skips the UN/LOCODE check. Only required-field presence is
//!   checked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    CarrierMovement, LocationCode, Schedule, ValidationError, Voyage, VoyageIdentifier,
};

/// Errors reading or writing stored voyages.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Record could not be (de)serialised
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record was read but does not describe a valid voyage
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

/// Stored form of a [`CarrierMovement`].
///
/// Fields are filled only by deserialisation or from a live movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierMovementRecord {
    departure_location: Option<String>,
    arrival_location: Option<String>,
    departure_time: Option<DateTime<Utc>>,
    arrival_time: Option<DateTime<Utc>>,
}

/// Stored form of a [`Voyage`].
///
/// Fields are filled only by deserialisation or from a live voyage; code
/// outside this module cannot assemble a record field by field and hand
/// it to [`VoyageRecord::rehydrate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyageRecord {
    voyage_number: Option<String>,
    movements: Option<Vec<CarrierMovementRecord>>,
}

type MakeLocation = fn(String) -> Result<LocationCode, ValidationError>;

fn parse_location(code: String) -> Result<LocationCode, ValidationError> {
    LocationCode::parse(&code)
}

fn trusted_location(code: String) -> Result<LocationCode, ValidationError> {
    Ok(LocationCode::from_trusted(code))
}

impl CarrierMovementRecord {
    /// Returns the stored departure location code, if present.
    pub fn departure_location(&self) -> Option<&str> {
        self.departure_location.as_deref()
    }

    /// Returns the stored arrival location code, if present.
    pub fn arrival_location(&self) -> Option<&str> {
        self.arrival_location.as_deref()
    }

    /// Returns the stored departure time, if present.
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        self.departure_time
    }

    /// Returns the stored arrival time, if present.
    pub fn arrival_time(&self) -> Option<DateTime<Utc>> {
        self.arrival_time
    }

    fn into_movement(self, location: MakeLocation) -> Result<CarrierMovement, ValidationError> {
        let departure_location = self
            .departure_location
            .ok_or(ValidationError::Missing("departure location"))?;
        let arrival_location = self
            .arrival_location
            .ok_or(ValidationError::Missing("arrival location"))?;
        let departure_time = self
            .departure_time
            .ok_or(ValidationError::Missing("departure time"))?;
        let arrival_time = self
            .arrival_time
            .ok_or(ValidationError::Missing("arrival time"))?;

        Ok(CarrierMovement::new(
            location(departure_location)?,
            location(arrival_location)?,
            departure_time,
            arrival_time,
        ))
    }
}

impl VoyageRecord {
    /// Returns the stored voyage number, if present.
    pub fn voyage_number(&self) -> Option<&str> {
        self.voyage_number.as_deref()
    }

    /// Returns the stored movements, if present.
    pub fn movements(&self) -> Option<&[CarrierMovementRecord]> {
        self.movements.as_deref()
    }

    fn into_voyage(self, location: MakeLocation) -> Result<Voyage, ValidationError> {
        let voyage_number = self
            .voyage_number
            .ok_or(ValidationError::Missing("voyage number"))?;
        let movements = self
            .movements
            .ok_or(ValidationError::Missing("schedule"))?
            .into_iter()
            .map(|m| m.into_movement(location))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Voyage::new(
            VoyageIdentifier::new(voyage_number),
            Schedule::new(movements),
        ))
    }

    /// Materialises a voyage this system stored earlier.
    ///
    /// Location codes are taken as stored, without the UN/LOCODE check,
    /// and brought to canonical uppercase form.
    /// Records from anywhere else must go through `Voyage::try_from`.
    pub fn rehydrate(self) -> Result<Voyage, ValidationError> {
        let voyage = self.into_voyage(trusted_location)?;
        debug!(
            voyage = %voyage.voyage_number(),
            movements = voyage.schedule().len(),
            "rehydrated voyage"
        );
        Ok(voyage)
    }

    /// Serialises the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a record from JSON. Missing fields read as absent.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reads a voyage back from JSON this system wrote.
pub fn rehydrate_json(json: &str) -> Result<Voyage, StorageError> {
    Ok(VoyageRecord::from_json(json)?.rehydrate()?)
}

impl TryFrom<VoyageRecord> for Voyage {
    type Error = ValidationError;

    fn try_from(record: VoyageRecord) -> Result<Self, Self::Error> {
        record.into_voyage(parse_location)
    }
}

impl From<&CarrierMovement> for CarrierMovementRecord {
    fn from(movement: &CarrierMovement) -> Self {
        Self {
            departure_location: Some(movement.departure_location().to_string()),
            arrival_location: Some(movement.arrival_location().to_string()),
            departure_time: Some(movement.departure_time()),
            arrival_time: Some(movement.arrival_time()),
        }
    }
}

impl From<&Voyage> for VoyageRecord {
    fn from(voyage: &Voyage) -> Self {
        Self {
            voyage_number: Some(voyage.voyage_number().to_string()),
            movements: Some(
                voyage
                    .schedule()
                    .carrier_movements()
                    .iter()
                    .map(CarrierMovementRecord::from)
                    .collect(),
            ),
        }
    }
}
