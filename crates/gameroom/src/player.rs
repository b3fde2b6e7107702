use async_trait::async_trait;
use felt_gameplay::Action;
use felt_gameplay::Event;
use felt_gameplay::TableView;

/// What the room sends a seated player.
#[derive(Debug, Clone)]
pub enum Prompt {
    /// Something happened at the table.
    Event(Event),
    /// It is this player's turn; the view is already redacted to their
    /// perspective and `legal` is what the engine will accept.
    Decision {
        view: TableView,
        legal: Vec<Action>,
    },
}

/// A seat implementation: human bridge, bot, or test stub.
///
/// Implementations only ever see redacted views and reply with an
/// [`Action`]; the engine re-validates whatever comes back, so a
/// misbehaving player can stall its own seat but never corrupt the
/// table.
#[async_trait]
pub trait Player: Send {
    /// Chooses an action for the decision described by `view`.
    async fn decide(&mut self, view: &TableView, legal: &[Action]) -> Action;
    /// Observes a table event.
    async fn notify(&mut self, event: &Event);
    /// False once the player is gone for good; the room stops waiting
    /// on them.
    fn alive(&self) -> bool {
        true
    }
}
