//! Shared event and report types for the alien invasion simulation.
//!
//! This crate contains pure data structures with no simulation logic.

pub mod event;
pub mod report;

pub use event::CityDestroyed;
pub use report::{AlienReport, CityReport, WorldReport};
