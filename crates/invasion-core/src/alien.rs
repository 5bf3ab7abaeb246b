//! Alien records.

/// Maximum number of steps an alien walks before it is considered to have
/// walked enough.
pub const STEP_THRESHOLD: u64 = 10_000;

/// A mobile occupant of exactly one city.
///
/// The engine owns the registry of aliens; a city is referenced by name,
/// never by pointer, so a destroyed city simply fails lookup.
#[derive(Debug, Clone)]
pub struct Alien {
    city: String,
    steps: u64,
}

impl Alien {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            steps: 0,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Completes one move. Staying in place still counts as a step;
    /// stranded aliens never reach this call.
    pub fn relocate(&mut self, city: impl Into<String>) {
        self.steps += 1;
        self.city = city.into();
    }

    pub fn exceeded_threshold(&self) -> bool {
        self.steps > STEP_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocate_counts_steps() {
        let mut alien = Alien::new("A");
        alien.relocate("B");
        alien.relocate("B");
        assert_eq!(alien.city(), "B");
        assert_eq!(alien.steps(), 2);
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let mut alien = Alien::new("A");
        for _ in 0..STEP_THRESHOLD {
            alien.relocate("A");
        }
        assert!(!alien.exceeded_threshold());
        alien.relocate("A");
        assert!(alien.exceeded_threshold());
    }
}
