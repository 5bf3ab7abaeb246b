//! A single city node in the world graph.

use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::rng::RandomSource;

/// Stable handle of an alien.
pub type AlienId = u32;

/// A named vertex with up to four directional roads and the aliens
/// currently occupying it.
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    /// Roads out of the city. BTreeMap keeps them in listing order.
    edges: BTreeMap<Direction, String>,
    /// Occupying aliens in arrival order. Two or more means the city is
    /// destroyed when the round is resolved.
    occupants: Vec<AlienId>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edges: BTreeMap::new(),
            occupants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds or replaces the road in the given direction.
    pub fn insert_edge(&mut self, direction: Direction, target: impl Into<String>) {
        self.edges.insert(direction, target.into());
    }

    /// Severs the road in the given direction, if present.
    pub fn remove_edge(&mut self, direction: Direction) {
        self.edges.remove(&direction);
    }

    pub fn edge(&self, direction: Direction) -> Option<&str> {
        self.edges.get(&direction).map(String::as_str)
    }

    /// Roads out of the city, in listing order.
    pub fn edges(&self) -> impl Iterator<Item = (Direction, &str)> {
        self.edges.iter().map(|(d, name)| (*d, name.as_str()))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// A city with no roads left; aliens here are stranded.
    pub fn is_cut_off(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn occupants(&self) -> &[AlienId] {
        &self.occupants
    }

    /// Records an alien arriving at the city.
    pub fn arrive(&mut self, alien: AlienId) {
        self.occupants.push(alien);
    }

    /// Removes and returns the earliest arrival.
    pub fn depart_first(&mut self) -> Option<AlienId> {
        if self.occupants.is_empty() {
            None
        } else {
            Some(self.occupants.remove(0))
        }
    }

    /// Draws the next destination: one uniform choice over the city's
    /// roads plus staying in place. `None` means stay.
    pub fn draw_destination(&self, rng: &mut dyn RandomSource) -> Option<&str> {
        let pick = rng.next(self.edges.len() + 1);
        self.edges.values().nth(pick).map(String::as_str)
    }
}
