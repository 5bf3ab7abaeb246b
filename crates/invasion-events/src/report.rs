//! End-of-run world report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one surviving city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityReport {
    pub name: String,
    /// True when every road into the city has been severed
    pub cut_off: bool,
}

/// State of one surviving alien.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienReport {
    pub id: u32,
    /// City the alien currently occupies
    pub city: String,
    /// Rounds the alien has walked
    pub steps: u64,
}

/// Snapshot of everything left standing after the simulation stops.
///
/// Cities appear in the original map order; aliens in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldReport {
    /// Rounds played before the engine stopped
    pub rounds: u64,
    /// True when no cities remain
    pub desolate: bool,
    pub cities: Vec<CityReport>,
    pub aliens: Vec<AlienReport>,
}

impl fmt::Display for WorldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.desolate {
            return writeln!(f, "World was fully destroyed");
        }
        writeln!(f, "Remaining cities:")?;
        for city in &self.cities {
            if city.cut_off {
                writeln!(f, "{} <LOST>", city.name)?;
            } else {
                writeln!(f, "{}", city.name)?;
            }
        }
        if !self.aliens.is_empty() {
            writeln!(f, "Remaining aliens:")?;
            for alien in &self.aliens {
                writeln!(f, "alien {} rest in city {}", alien.id, alien.city)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_desolate() {
        let report = WorldReport {
            rounds: 3,
            desolate: true,
            cities: vec![],
            aliens: vec![],
        };
        assert_eq!(report.to_string(), "World was fully destroyed\n");
    }

    #[test]
    fn test_display_lost_marker() {
        let report = WorldReport {
            rounds: 1,
            desolate: false,
            cities: vec![
                CityReport { name: "Foo".into(), cut_off: false },
                CityReport { name: "Bar".into(), cut_off: true },
            ],
            aliens: vec![AlienReport { id: 2, city: "Foo".into(), steps: 5 }],
        };
        let text = report.to_string();
        assert!(text.contains("Foo\n"));
        assert!(text.contains("Bar <LOST>\n"));
        assert!(text.contains("alien 2 rest in city Foo"));
    }
}
