//! Core invasion simulation: the world graph, aliens, and the round engine.

pub mod alien;
pub mod city;
pub mod direction;
pub mod engine;
pub mod error;
pub mod events;
pub mod mapfile;
pub mod rng;
pub mod world;

pub use alien::{Alien, STEP_THRESHOLD};
pub use city::{AlienId, City};
pub use direction::Direction;
pub use engine::{EngineState, RoundOutcome, SimulationEngine};
pub use error::{ConfigError, MapError, MapViolation, ValidationReport};
pub use events::EventLog;
pub use mapfile::parse_map;
pub use rng::{RandomSource, ScriptedRandom, SmallRngSource};
pub use world::{CityRecord, World};
