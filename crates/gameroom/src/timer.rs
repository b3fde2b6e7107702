use felt_core::DECISION_TIMEOUT;
use felt_core::Position;
use felt_core::SHOWDOWN_TIMEOUT;
use felt_gameplay::TableView;
use std::time::Duration;
use tokio::time::Instant;

/// Configuration for table timeouts.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub decision: Duration,
    pub showdown: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            decision: Duration::from_secs(DECISION_TIMEOUT),
            showdown: Duration::from_secs(SHOWDOWN_TIMEOUT),
        }
    }
}

/// Deadline tracking for player decisions and showdown phases.
#[derive(Debug)]
pub struct Timer {
    config: TimerConfig,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }
    pub fn start_decision(&mut self) {
        self.deadline = Some(Instant::now() + self.config.decision);
    }
    pub fn start_showdown(&mut self) {
        self.deadline = Some(Instant::now() + self.config.showdown);
    }
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
}

/// The identity of one pending decision, captured when a timer is
/// armed.
///
/// A timeout callback races the player it polices: by the time it
/// fires, the action may have been taken, the street advanced, or the
/// whole hand finished. Comparing the armed `(hand, actor)` pair
/// against the current view makes a late timeout a no-op instead of a
/// misfire against whoever acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    hand: u64,
    actor: Option<Position>,
}

impl Token {
    /// Captures the decision currently pending, if any.
    pub fn arm(view: &TableView) -> Self {
        Self {
            hand: view.hand,
            actor: view.actor,
        }
    }
    /// True when the decision this token was armed for is no longer
    /// the pending one.
    pub fn stale(&self, view: &TableView) -> bool {
        self.actor.is_none() || self.hand != view.hand || self.actor != view.actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_core::Chips;
    use felt_gameplay::Action;
    use felt_gameplay::Stakes;
    use felt_gameplay::Table;

    fn table() -> Table {
        Table::new(Stakes::new(1, 2), vec![100 as Chips, 100, 100], 1)
    }

    #[test]
    fn timer_starts_cleared() {
        let timer = Timer::with_defaults();
        assert!(timer.deadline().is_none());
        assert!(!timer.expired());
    }

    #[test]
    fn timer_sets_and_clears_deadline() {
        let mut timer = Timer::with_defaults();
        timer.start_decision();
        assert!(timer.deadline().is_some());
        assert!(!timer.expired());
        timer.clear();
        assert!(timer.deadline().is_none());
    }

    /// a token is fresh until the table moves on
    #[test]
    fn token_fresh_while_pending() {
        let mut table = table();
        table.begin().unwrap();
        let token = Token::arm(&table.snapshot());
        assert!(!token.stale(&table.snapshot()));
    }

    /// the same seat acting again later is a different decision
    #[test]
    fn token_stale_after_action() {
        let mut table = table();
        table.begin().unwrap();
        let token = Token::arm(&table.snapshot());
        table.act(0, Action::Fold).unwrap();
        assert!(token.stale(&table.snapshot()));
    }

    /// tokens from a previous hand never apply to the next one
    #[test]
    fn token_stale_across_hands() {
        let mut table = table();
        table.begin().unwrap();
        table.act(0, Action::Fold).unwrap();
        table.act(1, Action::Fold).unwrap();
        let token = Token::arm(&table.snapshot());
        assert!(token.stale(&table.snapshot())); // no actor: nothing to time out
        table.begin().unwrap();
        assert!(token.stale(&table.snapshot()));
    }
}
