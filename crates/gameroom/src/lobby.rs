use super::player::Prompt;
use felt_core::Position;
use felt_gameplay::Event;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;

/// Seat presence and message routing for one table.
///
/// Separates who-is-connected bookkeeping from game logic. Publishing
/// respects information boundaries: an event private to a seat (hole
/// cards) is delivered to that seat alone, everything else goes to
/// everyone.
#[derive(Debug, Default)]
pub struct Lobby {
    senders: Vec<Option<UnboundedSender<Prompt>>>,
    disconnected: HashSet<Position>,
}

impl Lobby {
    /// A lobby with capacity for n seats.
    pub fn new(n: usize) -> Self {
        Self {
            senders: vec![None; n],
            disconnected: HashSet::new(),
        }
    }
    /// Seats a channel at the given position.
    pub fn sit(&mut self, position: Position, sender: UnboundedSender<Prompt>) {
        if position < self.senders.len() {
            self.senders[position] = Some(sender);
        }
    }
    pub fn disconnect(&mut self, position: Position) {
        self.disconnected.insert(position);
    }
    pub fn is_disconnected(&self, position: Position) -> bool {
        self.disconnected.contains(&position)
    }
    pub fn seats(&self) -> usize {
        self.senders.len()
    }
    pub fn connected(&self) -> usize {
        self.senders
            .iter()
            .enumerate()
            .filter(|(i, s)| s.is_some() && !self.disconnected.contains(i))
            .count()
    }

    /// Sends a prompt to one seat.
    pub fn unicast(&self, position: Position, prompt: Prompt) {
        match self.senders.get(position).and_then(|s| s.as_ref()) {
            Some(inbox) => match inbox.send(prompt) {
                Ok(()) => {}
                Err(e) => log::warn!("[lobby] send to P{} failed: {:?}", position, e),
            },
            None => log::warn!("[lobby] no such seat P{}", position),
        }
    }
    /// Routes one event: private events to their seat, the rest to all.
    pub fn publish(&self, event: &Event) {
        log::trace!("[lobby] {}", event);
        match event.private_to() {
            Some(seat) => self.unicast(seat, Prompt::Event(event.clone())),
            None => {
                for (position, sender) in self.senders.iter().enumerate() {
                    if let Some(inbox) = sender {
                        if let Err(e) = inbox.send(Prompt::Event(event.clone())) {
                            log::warn!("[lobby] send to P{} failed: {:?}", position, e);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_cards::Hole;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn seats_and_presence() {
        let mut lobby = Lobby::new(2);
        assert!(lobby.seats() == 2);
        assert!(lobby.connected() == 0);
        let (tx, _rx) = unbounded_channel();
        lobby.sit(0, tx);
        assert!(lobby.connected() == 1);
        lobby.disconnect(0);
        assert!(lobby.is_disconnected(0));
        assert!(lobby.connected() == 0);
    }

    /// hole cards reach their owner and nobody else
    #[test]
    fn hole_cards_stay_private() {
        let mut lobby = Lobby::new(2);
        let (tx0, mut rx0) = unbounded_channel();
        let (tx1, mut rx1) = unbounded_channel();
        lobby.sit(0, tx0);
        lobby.sit(1, tx1);
        lobby.publish(&Event::HoleCards {
            hand: 1,
            seat: 1,
            hole: Hole::try_from("As Ks").unwrap(),
        });
        assert!(rx0.try_recv().is_err());
        assert!(rx1.try_recv().is_ok());
        lobby.publish(&Event::HandEnd { hand: 1 });
        assert!(rx0.try_recv().is_ok());
        assert!(rx1.try_recv().is_ok());
    }
}
