use super::actor::Actor;
use super::lobby::Lobby;
use super::player::Player;
use super::player::Prompt;
use super::timer::Timer;
use super::timer::TimerConfig;
use super::timer::Token;
use felt_core::Chips;
use felt_core::ID;
use felt_core::Position;
use felt_core::Unique;
use felt_gameplay::Action;
use felt_gameplay::Event;
use felt_gameplay::Stakes;
use felt_gameplay::Status;
use felt_gameplay::Table;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Live table coordinator.
///
/// Imperative shell around the functional core: the room owns the
/// [`Table`] outright and is the only code that ever calls into it, so
/// per-table serialization holds by construction. Players live in
/// their own tasks and talk to the room through channels; a player
/// that stalls past the deadline is checked or folded out by the
/// room's timeout, guarded by a [`Token`] staleness check.
pub struct Room {
    id: ID<Self>,
    table: Table,
    lobby: Lobby,
    timer: Timer,
    outbox: UnboundedSender<(Position, Action)>,
    inbox: UnboundedReceiver<(Position, Action)>,
}

impl Room {
    /// A room whose deck order is drawn from ambient entropy.
    pub fn new(stakes: Stakes, stacks: Vec<Chips>) -> Self {
        Self::seeded(stakes, stacks, rand::random())
    }
    /// A room that will replay exactly given the same seed and inputs.
    pub fn seeded(stakes: Stakes, stacks: Vec<Chips>, seed: u64) -> Self {
        let seats = stacks.len();
        let (outbox, inbox) = unbounded_channel();
        Self {
            id: ID::default(),
            table: Table::new(stakes, stacks, seed),
            lobby: Lobby::new(seats),
            timer: Timer::new(TimerConfig::default()),
            outbox,
            inbox,
        }
    }
    pub fn with_timers(mut self, config: TimerConfig) -> Self {
        self.timer = Timer::new(config);
        self
    }

    /// Seats a player, spawning its actor task.
    pub fn sit<P>(&mut self, position: Position, player: P)
    where
        P: Player + 'static,
    {
        let sender = Actor::spawn(position, Box::new(player), self.outbox.clone());
        self.lobby.sit(position, sender);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Plays hands until the game is over or the table cannot start.
    pub async fn run(mut self) {
        log::info!("[room {}] starting", self.id);
        while self.play().await {}
        log::info!("[room {}] done after hand #{}", self.id, self.table.hand());
    }

    /// Plays one hand to completion. Returns false once no further
    /// hand can start.
    pub async fn play(&mut self) -> bool {
        let events = match self.table.begin() {
            Ok(events) => events,
            Err(e) => {
                log::info!("[room {}] cannot deal: {}", self.id, e);
                return false;
            }
        };
        self.publish(&events);
        while self.table.status() == Status::InHand {
            self.turn().await;
        }
        !self.table.over()
    }

    /// One decision: prompt the actor, wait out the clock, apply.
    async fn turn(&mut self) {
        let actor = self.table.actor().expect("a hand in progress has an actor");
        let view = self.table.snapshot();
        let token = Token::arm(&view);
        let legal = self.table.legal(actor);
        self.timer.start_decision();
        self.lobby.unicast(
            actor,
            Prompt::Decision {
                view: view.redact(Some(actor)),
                legal,
            },
        );
        let action = self.collect(actor).await;
        self.timer.clear();
        let events = match action {
            Some(action) => match self.table.act(actor, action) {
                Ok(events) => events,
                Err(e) => {
                    // illegal reply burns the turn like a timeout would
                    log::warn!("[room {}] P{} sent {}: {}", self.id, actor, action, e);
                    self.force_timeout(token).expect("token is fresh")
                }
            },
            None => self.force_timeout(token).expect("token is fresh"),
        };
        self.publish(&events);
    }

    /// Waits for the actor's reply until the deadline. Replies from
    /// other seats are stale leftovers and are dropped.
    async fn collect(&mut self, actor: Position) -> Option<Action> {
        loop {
            let remaining = self.timer.remaining().unwrap_or_default();
            match tokio::time::timeout(remaining, self.inbox.recv()).await {
                Ok(Some((seat, action))) if seat == actor => return Some(action),
                Ok(Some((seat, _))) => log::debug!("[room {}] dropping stale reply from P{}", self.id, seat),
                Ok(None) => return None,
                Err(_) => return None,
            }
        }
    }

    /// Applies the timeout action for a decision armed earlier: check
    /// when free, fold when owed. A token armed before the table
    /// advanced no longer names the pending decision and does nothing.
    pub fn force_timeout(&mut self, token: Token) -> Option<Vec<Event>> {
        let view = self.table.snapshot();
        if token.stale(&view) {
            log::debug!("[room {}] stale timeout ignored", self.id);
            return None;
        }
        let actor = view.actor.expect("a fresh token names an actor");
        let action = match self.table.legal(actor).contains(&Action::Check) {
            true => Action::Check,
            false => Action::Fold,
        };
        log::info!("[room {}] P{} timed out: {}", self.id, actor, action);
        Some(self.table.act(actor, action).expect("timeout action is legal"))
    }

    fn publish(&self, events: &[Event]) {
        for event in events {
            self.lobby.publish(event);
        }
    }
}

impl Unique for Room {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::station::Station;
    use felt_core::Chips;
    use std::time::Duration;

    fn quick_timers() -> TimerConfig {
        TimerConfig {
            decision: Duration::from_millis(200),
            showdown: Duration::from_millis(50),
        }
    }

    /// two stations check and call a whole hand through the mailbox
    #[tokio::test]
    async fn stations_play_a_hand() {
        let mut room =
            Room::seeded(Stakes::new(1, 2), vec![100, 100], 99).with_timers(quick_timers());
        room.sit(0, Station);
        room.sit(1, Station);
        room.play().await;
        let table = room.table();
        assert!(table.status() == Status::HandOver);
        assert!(table.seats().iter().map(|s| s.stack()).sum::<Chips>() == 200);
    }

    /// an empty seat times out and is folded or checked by the room
    #[tokio::test]
    async fn absent_player_is_timed_out() {
        let mut room =
            Room::seeded(Stakes::new(1, 2), vec![100, 100], 7).with_timers(quick_timers());
        room.sit(1, Station);
        // seat 0 never answers: the clock plays for them every turn
        room.play().await;
        assert!(room.table().status() == Status::HandOver);
    }

    /// a stale token is a guaranteed no-op
    #[tokio::test]
    async fn stale_timeout_is_a_no_op() {
        let mut room =
            Room::seeded(Stakes::new(1, 2), vec![100, 100, 100], 3).with_timers(quick_timers());
        let events = room.table.begin().unwrap();
        room.publish(&events);
        let token = Token::arm(&room.table.snapshot());
        let before = room.table.snapshot();
        room.table.act(0, Action::Fold).unwrap();
        let after = room.table.snapshot();
        assert!(room.force_timeout(token).is_none());
        assert!(room.table.snapshot() == after);
        assert!(before != after);
    }

    /// snapshots and events serialize for external consumers
    #[tokio::test]
    async fn views_serialize() {
        let mut room = Room::seeded(Stakes::new(1, 2), vec![100, 100], 11);
        let events = room.table.begin().unwrap();
        let view = room.table.snapshot().redact(None);
        assert!(serde_json::to_string(&view).is_ok());
        assert!(events.iter().all(|e| serde_json::to_string(e).is_ok()));
        assert!(view.seats.iter().all(|s| s.hole.is_none()));
    }
}
