use felt_core::B_BLIND;
use felt_core::Chips;
use felt_core::RAKE_BPS;
use felt_core::RAKE_CAP;
use felt_core::S_BLIND;
use serde::Deserialize;
use serde::Serialize;

/// Blind and rake configuration for a table.
///
/// Rake is expressed in basis points of each awarded pot so that all
/// accounting stays in integers; the cut is floored, and a cap of zero
/// means uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakes {
    small_blind: Chips,
    big_blind: Chips,
    rake_bps: u32,
    rake_cap: Chips,
}

impl Stakes {
    /// Rake-free stakes at the given blinds.
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        assert!(small_blind > 0);
        assert!(big_blind >= small_blind);
        Self {
            small_blind,
            big_blind,
            rake_bps: 0,
            rake_cap: 0,
        }
    }
    /// Default blinds with the house rake schedule.
    pub fn house() -> Self {
        Self::default().with_rake(RAKE_BPS, RAKE_CAP)
    }
    pub fn with_rake(mut self, rake_bps: u32, rake_cap: Chips) -> Self {
        self.rake_bps = rake_bps;
        self.rake_cap = rake_cap;
        self
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// The house cut of one awarded pot.
    pub fn rake(&self, pot: Chips) -> Chips {
        let cut = (pot as i64 * self.rake_bps as i64 / 10_000) as Chips;
        match self.rake_cap {
            0 => cut,
            cap => cut.min(cap),
        }
    }
}

impl Default for Stakes {
    fn default() -> Self {
        Self::new(S_BLIND, B_BLIND)
    }
}

impl std::fmt::Display for Stakes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.small_blind, self.big_blind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rake_floors() {
        let stakes = Stakes::new(1, 2).with_rake(500, 0);
        assert!(stakes.rake(19) == 0);
        assert!(stakes.rake(20) == 1);
        assert!(stakes.rake(39) == 1);
    }

    #[test]
    fn rake_caps() {
        let stakes = Stakes::new(1, 2).with_rake(500, 3);
        assert!(stakes.rake(1_000) == 3);
    }

    #[test]
    fn zero_cap_means_uncapped() {
        let stakes = Stakes::new(1, 2).with_rake(500, 0);
        assert!(stakes.rake(1_000) == 50);
    }

    #[test]
    fn default_is_rake_free() {
        assert!(Stakes::default().rake(1_000) == 0);
    }
}
