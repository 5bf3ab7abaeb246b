//! Destruction events emitted by the simulation engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A city was destroyed by a battle between two or more aliens.
///
/// Emitted once per destroyed city during collision resolution; the alien
/// ids are listed in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDestroyed {
    /// Round in which the battle happened (1-based)
    pub round: u64,
    /// Name of the destroyed city
    pub city: String,
    /// Aliens that perished in the battle, in arrival order
    pub aliens: Vec<u32>,
}

impl fmt::Display for CityDestroyed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been destroyed by ", self.city)?;
        let last = self.aliens.len().saturating_sub(1);
        for (i, alien) in self.aliens.iter().enumerate() {
            write!(f, "alien {}", alien)?;
            if i + 2 == self.aliens.len() {
                write!(f, " and ")?;
            } else if i < last {
                write!(f, ", ")?;
            }
        }
        Ok(())
    }
}
