use super::player::Player;
use super::player::Prompt;
use felt_core::Position;
use felt_gameplay::Action;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Runs one [`Player`] in its own task.
///
/// The room unicasts a [`Prompt::Decision`] when it is this seat's
/// turn; the actor asks its player and sends the chosen action back.
/// Every other prompt is forwarded to the player as a notification.
pub struct Actor {
    position: Position,
    player: Box<dyn Player>,
    inbox: UnboundedReceiver<Prompt>,
    outbox: UnboundedSender<(Position, Action)>,
}

impl Actor {
    /// Spawns the actor task and returns the channel the room should
    /// address this seat through.
    pub fn spawn(
        position: Position,
        player: Box<dyn Player>,
        outbox: UnboundedSender<(Position, Action)>,
    ) -> UnboundedSender<Prompt> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            position,
            player,
            inbox: rx,
            outbox,
        };
        tokio::spawn(actor.run());
        tx
    }

    async fn run(mut self) {
        while let Some(prompt) = self.inbox.recv().await {
            match prompt {
                Prompt::Event(ref event) => self.player.notify(event).await,
                Prompt::Decision { view, legal } => {
                    log::debug!("[actor P{}] deciding", self.position);
                    let action = self.player.decide(&view, &legal).await;
                    if self.outbox.send((self.position, action)).is_err() {
                        break;
                    }
                    if !self.player.alive() {
                        log::info!("[actor P{}] player left", self.position);
                        break;
                    }
                }
            }
        }
    }
}
