use super::player::Player;
use async_trait::async_trait;
use felt_gameplay::Action;
use felt_gameplay::Event;
use felt_gameplay::TableView;

/// A zero-intelligence seat: calls when owed, checks when free.
///
/// Exists to keep tables live in tests and smoke runs; it encodes no
/// strategy at all.
#[derive(Debug, Default)]
pub struct Station;

#[async_trait]
impl Player for Station {
    async fn decide(&mut self, _: &TableView, legal: &[Action]) -> Action {
        legal
            .iter()
            .copied()
            .find(|a| matches!(a, Action::Check | Action::Call))
            .unwrap_or(Action::Fold)
    }
    async fn notify(&mut self, _: &Event) {}
}
