//! The world graph store.
//!
//! Owns every [`City`] and the edge-consistency invariant. Cities are
//! looked up by name; the ordered list fixed at build time gives every
//! pass over the map a stable iteration order even as cities are removed.

use std::collections::HashMap;

use crate::city::City;
use crate::direction::Direction;
use crate::error::{MapError, MapViolation, ValidationReport};

/// One parsed map line: a city and its directional roads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    /// Source line number, kept for error reporting
    pub line: usize,
    pub name: String,
    pub edges: Vec<(Direction, String)>,
}

/// The full collection of cities.
#[derive(Debug, Clone, Default)]
pub struct World {
    cities: HashMap<String, City>,
    /// City names in map order, fixed at build time. Entries of destroyed
    /// cities go stale rather than being removed.
    order: Vec<String>,
}

impl World {
    /// Builds the graph from parsed records. Duplicate city names are
    /// dropped with a collected error; the rest of the map still loads.
    pub fn build(records: Vec<CityRecord>) -> (Self, Vec<MapError>) {
        let mut world = World::default();
        let mut errors = Vec::new();
        for record in records {
            if world.cities.contains_key(&record.name) {
                errors.push(MapError::DuplicateCity {
                    line: record.line,
                    name: record.name,
                });
                continue;
            }
            let mut city = City::new(record.name.clone());
            for (direction, target) in record.edges {
                city.insert_edge(direction, target);
            }
            world.order.push(record.name.clone());
            world.cities.insert(record.name, city);
        }
        (world, errors)
    }

    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn city_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    /// City names in map order; may contain stale entries for destroyed
    /// cities.
    pub fn city_order(&self) -> &[String] {
        &self.order
    }

    /// Live cities, in map order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.order.iter().filter_map(|name| self.cities.get(name))
    }

    pub fn live_count(&self) -> usize {
        self.cities.len()
    }

    pub fn is_desolate(&self) -> bool {
        self.cities.is_empty()
    }

    /// Checks every road of every live city: no self-loops, the neighbor
    /// must exist and must point the opposite direction back. All
    /// violations are collected, not just the first.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut violations = Vec::new();
        for city in self.cities() {
            for (direction, target) in city.edges() {
                if target == city.name() {
                    violations.push(MapViolation::SelfLoop {
                        city: city.name().to_string(),
                        direction,
                    });
                    continue;
                }
                let back = direction.opposite();
                match self.cities.get(target) {
                    None => violations.push(MapViolation::MissingNeighbor {
                        city: city.name().to_string(),
                        direction,
                        target: target.to_string(),
                    }),
                    Some(neighbor) if neighbor.edge(back) != Some(city.name()) => {
                        violations.push(MapViolation::AsymmetricEdge {
                            city: city.name().to_string(),
                            direction,
                            target: target.to_string(),
                            back,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport(violations))
        }
    }

    /// Removes a city and severs every neighbor's reciprocal road.
    /// Calling it on an already-removed name is a no-op.
    pub fn destroy(&mut self, name: &str) {
        let Some(city) = self.cities.remove(name) else {
            return;
        };
        for (direction, target) in city.edges() {
            if let Some(neighbor) = self.cities.get_mut(target) {
                neighbor.remove_edge(direction.opposite());
            }
        }
    }
}
