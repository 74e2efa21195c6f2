//! Cargo shipping domain model.
//!
//! Validated UN/LOCODE location codes and scheduled carrier voyages,
//! assembled leg by leg so that every schedule connects.

pub mod domain;
pub mod sample;
pub mod storage;
