//! Error taxonomy.
//!
//! Map and validation problems are collected and reported in aggregate so
//! a user can fix every defect in one pass; configuration errors halt
//! startup immediately. Engine operations themselves have no failure path.

use std::fmt;
use thiserror::Error;

use crate::direction::{Direction, ParseDirectionError};

/// A defect in one line of the map input. Non-fatal: the offending line
/// (or duplicate entry) is dropped and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("line {line}: city name is empty")]
    EmptyCityName { line: usize },

    #[error("line {line}: edge token '{token}' has no '=' separator")]
    MalformedEdge { line: usize, token: String },

    #[error("line {line}: {source}")]
    UnknownDirection {
        line: usize,
        #[source]
        source: ParseDirectionError,
    },

    #[error("line {line}: city '{name}' already defined, duplicate entry ignored")]
    DuplicateCity { line: usize, name: String },
}

/// A structural defect found by [`World::validate`](crate::world::World::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapViolation {
    #[error("city {city} points {direction} at itself")]
    SelfLoop { city: String, direction: Direction },

    #[error("city {city} points {direction} at unknown city {target}")]
    MissingNeighbor {
        city: String,
        direction: Direction,
        target: String,
    },

    #[error("city {city} points {direction} at {target}, which does not point {back} back")]
    AsymmetricEdge {
        city: String,
        direction: Direction,
        target: String,
        back: Direction,
    },
}

/// Every violation found in one validation pass. The engine refuses to
/// run while this is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport(pub Vec<MapViolation>);

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "map validation found {} violation(s):", self.0.len())?;
        for violation in &self.0 {
            writeln!(f, "  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// A fatal startup problem, reported before any simulation state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one alien is required")]
    NoAliens,

    #[error("the map has no cities to invade")]
    EmptyWorld,
}
