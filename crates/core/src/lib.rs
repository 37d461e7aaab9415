//! Venue domain rules shared by the database and HTTP layers.
//!
//! This crate has no internal dependencies so the same rules can be used by
//! the repositories, the API handlers, and any future tooling.

pub mod admission;
pub mod error;
pub mod reservation;
pub mod types;
pub mod zone;
