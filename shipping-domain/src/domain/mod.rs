//! Domain types for voyages and their schedules.
//!
//! Value objects (`LocationCode`, `VoyageIdentifier`, `CarrierMovement`,
//! `Schedule`) compare by value. `Voyage` is an entity and compares by its
//! voyage number alone. Fallible constructors enforce their invariants, so
//! code that receives these types can trust their validity.

mod builder;
mod carrier_movement;
mod error;
mod location;
mod schedule;
mod voyage;
mod voyage_identifier;

pub use builder::VoyageBuilder;
pub use carrier_movement::CarrierMovement;
pub use error::ValidationError;
pub use location::LocationCode;
pub use schedule::Schedule;
pub use voyage::Voyage;
pub use voyage_identifier::VoyageIdentifier;
