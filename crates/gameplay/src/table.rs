use super::action::Action;
use super::error::ActionError;
use super::event::Event;
use super::pots::Pot;
use super::seat::Seat;
use super::settlement::Settlement;
use super::showdown::Showdown;
use super::stakes::Stakes;
use super::view::SeatView;
use super::view::TableView;
use felt_core::Chips;
use felt_core::MAX_SEATS;
use felt_core::MIN_SEATS;
use felt_core::Position;
use felt_cards::Board;
use felt_cards::Deck;
use felt_cards::Hand;
use felt_cards::Street;
use felt_cards::Strength;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

/// Where the table is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// No hand has been dealt yet.
    Idle,
    /// A hand is in progress.
    InHand,
    /// The last hand settled; waiting for the next deal.
    HandOver,
}

/// One poker table: seats, cards, and the betting state machine.
///
/// The table is the single mutable owner of everything at it: seats
/// are mutated only by the executor here, callers observe through
/// [`TableView`] snapshots, and a rejected action touches nothing.
/// All randomness flows through the seeded RNG handed to the
/// constructor, so equal seeds replay equal hands.
///
/// Within a hand the live pot always equals the sum of seat
/// commitments; that equality is asserted after every action and again
/// at settlement, because a violation means corrupted state, not a
/// condition to recover from.
pub struct Table {
    hand: u64,
    rng: SmallRng,
    deck: Deck,
    board: Board,
    seats: Vec<Seat>,
    dealer: Position,
    actor: Option<Position>,
    /// Closure sentinel: the last aggressor, or on a bet-less street the
    /// seat that acts last. Detects check-around closure, which amount
    /// matching alone cannot.
    sentinel: Option<Position>,
    to_call: Chips,
    last_raise: Chips,
    pot: Chips,
    stakes: Stakes,
    status: Status,
    results: Vec<Settlement>,
    over: bool,
}

impl Table {
    pub fn new(stakes: Stakes, stacks: Vec<Chips>, seed: u64) -> Self {
        assert!(stacks.len() >= MIN_SEATS);
        assert!(stacks.len() <= MAX_SEATS);
        assert!(stacks.iter().all(|stack| *stack >= 0));
        Self {
            hand: 0,
            rng: SmallRng::seed_from_u64(seed),
            deck: Deck::new(),
            board: Board::empty(),
            seats: stacks
                .into_iter()
                .enumerate()
                .map(|(position, stack)| Seat::new(position, stack))
                .collect(),
            dealer: 0,
            actor: None,
            sentinel: None,
            to_call: 0,
            last_raise: 0,
            pot: 0,
            stakes,
            status: Status::Idle,
            results: Vec::new(),
            over: false,
        }
    }

    //

    pub fn hand(&self) -> u64 {
        self.hand
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn street(&self) -> Option<Street> {
        match self.status {
            Status::InHand => Some(self.board.street()),
            _ => None,
        }
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn to_call(&self) -> Chips {
        self.to_call
    }
    pub fn last_raise(&self) -> Chips {
        self.last_raise
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    pub fn actor(&self) -> Option<Position> {
        self.actor
    }
    pub fn sentinel(&self) -> Option<Position> {
        self.sentinel
    }
    pub fn stakes(&self) -> Stakes {
        self.stakes
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn over(&self) -> bool {
        self.over
    }
    /// Outcome of the last settled hand.
    pub fn settlements(&self) -> &[Settlement] {
        &self.results
    }
    /// The current pot layering.
    pub fn pots(&self) -> Vec<Pot> {
        Pot::build(&self.seats)
    }

    pub fn snapshot(&self) -> TableView {
        TableView {
            hand: self.hand,
            status: self.status,
            street: self.street(),
            board: self.board.cards(),
            pot: self.pot,
            to_call: self.to_call,
            last_raise: self.last_raise,
            dealer: self.dealer,
            actor: self.actor,
            sentinel: self.sentinel,
            seats: self
                .seats
                .iter()
                .map(|s| SeatView {
                    position: s.position(),
                    stack: s.stack(),
                    stake: s.stake(),
                    spent: s.spent(),
                    state: s.state(),
                    hole: s.hole(),
                })
                .collect(),
            pots: self.pots(),
            over: self.over,
        }
    }

    //

    /// Starts the next hand: shuffles, posts blinds, deals holes, and
    /// hands the action to the first seat that owes a decision. Stacks
    /// persist from the previous hand; everything else resets.
    pub fn begin(&mut self) -> Result<Vec<Event>, ActionError> {
        if self.status == Status::InHand {
            return Err(ActionError::Busy);
        }
        if self.funded() < 2 {
            return Err(ActionError::ShortHanded);
        }
        self.hand += 1;
        self.deck = Deck::new();
        self.board.clear();
        self.pot = 0;
        self.to_call = 0;
        self.last_raise = 0;
        self.results.clear();
        self.status = Status::InHand;
        log::debug!("[table] hand #{} begins", self.hand);
        let mut events = vec![Event::HandStart {
            hand: self.hand,
            dealer: self.dealer,
            stacks: self.seats.iter().map(Seat::stack).collect(),
        }];
        let mut holes = Vec::new();
        for position in 0..self.seats.len() {
            match self.seats[position].funded() {
                true => {
                    let hole = self.deck.hole(&mut self.rng);
                    self.seats[position].reset(Some(hole));
                    holes.push(Event::HoleCards {
                        hand: self.hand,
                        seat: position,
                        hole,
                    });
                }
                false => self.seats[position].reset(None),
            }
        }
        let (sb, bb) = self.blind_seats();
        self.post(sb, self.stakes.small_blind(), &mut events);
        self.post(bb, self.stakes.big_blind(), &mut events);
        self.to_call = self.stakes.big_blind();
        self.last_raise = self.stakes.big_blind();
        self.sentinel = Some(bb);
        events.extend(holes);
        self.advance(bb, &mut events);
        Ok(events)
    }

    /// Blind positions for this hand. With the button on one of exactly
    /// two live seats it posts the small blind itself; otherwise the
    /// blinds are the first two live seats past the button.
    fn blind_seats(&self) -> (Position, Position) {
        let dealt = self
            .order_from(self.dealer)
            .filter(|p| self.seats[*p].dealt())
            .collect::<Vec<Position>>();
        match dealt.len() == 2 && self.seats[self.dealer].dealt() {
            true => (dealt[1], dealt[0]),
            false => (dealt[0], dealt[1]),
        }
    }

    fn post(&mut self, seat: Position, blind: Chips, events: &mut Vec<Event>) {
        let paid = self.seats[seat].commit(blind);
        self.pot += paid;
        events.push(Event::Blind {
            hand: self.hand,
            seat,
            amount: paid,
        });
    }

    //

    /// Checks an action against the rules without touching anything.
    pub fn validate(&self, seat: Position, action: Action) -> Result<(), ActionError> {
        if self.status != Status::InHand {
            return Err(ActionError::Idle);
        }
        if seat >= self.seats.len() {
            return Err(ActionError::BadSeat(seat));
        }
        if self.actor != Some(seat) {
            return Err(ActionError::OutOfTurn(seat));
        }
        let player = &self.seats[seat];
        debug_assert!(player.active());
        let owed = self.to_call - player.stake();
        match action {
            Action::Fold => Ok(()),
            Action::Check => match owed {
                0 => Ok(()),
                _ => Err(ActionError::CheckFacingBet { owed }),
            },
            Action::Call => match owed {
                0 => Err(ActionError::NothingToCall),
                _ => Ok(()),
            },
            Action::Bet(amount) => {
                if self.to_call > 0 {
                    Err(ActionError::BetIntoBet)
                } else if amount < self.stakes.big_blind() {
                    Err(ActionError::BetTooSmall {
                        amount,
                        minimum: self.stakes.big_blind(),
                    })
                } else if amount > player.stack() {
                    Err(ActionError::OverStack {
                        amount,
                        stack: player.stack(),
                    })
                } else {
                    Ok(())
                }
            }
            Action::Raise(extra) => {
                let minimum = self.last_raise.max(self.stakes.big_blind());
                if owed == 0 {
                    Err(ActionError::NothingToRaise)
                } else if extra <= 0 {
                    Err(ActionError::RaiseTooSmall { amount: extra, minimum })
                } else if owed + extra > player.stack() {
                    Err(ActionError::OverStack {
                        amount: owed + extra,
                        stack: player.stack(),
                    })
                } else if extra < minimum && owed + extra < player.stack() {
                    // an under-minimum raise is legal only as an all-in
                    Err(ActionError::RaiseTooSmall { amount: extra, minimum })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Every action [`Self::validate`] would accept for the seat right
    /// now, with bets and raises carrying their minimums.
    pub fn legal(&self, seat: Position) -> Vec<Action> {
        let mut options = Vec::new();
        if self.actor != Some(seat) {
            return options;
        }
        let player = &self.seats[seat];
        let owed = self.to_call - player.stake();
        if owed > 0 {
            options.push(Action::Fold);
            options.push(Action::Call);
            if player.stack() > owed {
                let headroom = player.stack() - owed;
                let minimum = self.last_raise.max(self.stakes.big_blind());
                options.push(Action::Raise(headroom.min(minimum)));
            }
        } else {
            options.push(Action::Check);
            if player.stack() >= self.stakes.big_blind() {
                options.push(Action::Bet(self.stakes.big_blind()));
            }
        }
        options
    }

    /// Validates and applies one action, then drives the machine: turn
    /// rotation, street closure, dealing, and settlement all happen
    /// here. Returns the events the action produced.
    pub fn act(&mut self, seat: Position, action: Action) -> Result<Vec<Event>, ActionError> {
        self.validate(seat, action)?;
        let mut events = Vec::new();
        self.execute(seat, action, &mut events);
        self.advance(seat, &mut events);
        Ok(events)
    }

    fn execute(&mut self, seat: Position, action: Action, events: &mut Vec<Event>) {
        let owed = self.to_call - self.seats[seat].stake();
        match action {
            Action::Fold => self.seats[seat].fold(),
            Action::Check => {}
            Action::Call => {
                let paid = self.seats[seat].commit(owed);
                self.pot += paid;
            }
            Action::Bet(amount) => {
                let paid = self.seats[seat].commit(amount);
                self.pot += paid;
                self.to_call = self.seats[seat].stake();
                self.last_raise = paid;
                self.sentinel = Some(seat);
            }
            Action::Raise(extra) => {
                let paid = self.seats[seat].commit(owed + extra);
                self.pot += paid;
                let jump = self.seats[seat].stake() - self.to_call;
                self.to_call = self.to_call.max(self.seats[seat].stake());
                // a short all-in lifts the price of the call but does
                // not reopen action for seats that already acted
                if jump >= self.last_raise.max(self.stakes.big_blind()) {
                    self.last_raise = jump;
                    self.sentinel = Some(seat);
                }
            }
        }
        events.push(Event::Action {
            hand: self.hand,
            seat,
            action,
            pot: self.pot,
        });
        log::debug!("[table] P{}: {} (pot {})", seat, action, self.pot);
    }

    /// The transition step run after every executed action (and once
    /// after the blinds): settle an uncontested hand, close the street,
    /// or pass the action along.
    fn advance(&mut self, last: Position, events: &mut Vec<Event>) {
        debug_assert!(self.pot == self.committed(), "live pot drifted");
        if self.contenders() <= 1 {
            return self.finish_uncontested(events);
        }
        let actives = self.actives();
        let matched = actives
            .iter()
            .all(|p| self.seats[*p].stake() == self.to_call);
        let closed =
            matched && (self.to_call > 0 || Some(last) == self.sentinel || actives.is_empty());
        if !closed {
            self.actor = self.next_active_after(last);
            debug_assert!(self.actor.is_some(), "open street with nobody to act");
        } else if self.board.street() == Street::Rive || actives.len() < 2 {
            self.finish_showdown(events);
        } else {
            self.open(self.board.street().next(), events);
        }
    }

    /// Deals the next street and hands the action to the first live
    /// seat past the button, with the last such seat as the sentinel.
    fn open(&mut self, street: Street, events: &mut Vec<Event>) {
        let cards = self.deck.deal(street, &mut self.rng);
        self.board.add(cards);
        events.push(Event::Deal {
            hand: self.hand,
            street,
            cards,
            board: Hand::from(self.board),
        });
        for seat in self.seats.iter_mut() {
            seat.clear_stake();
        }
        self.to_call = 0;
        self.last_raise = 0;
        self.actor = self.next_active_after(self.dealer);
        self.sentinel = self.order_from(self.dealer).filter(|p| self.seats[*p].active()).last();
        log::debug!("[table] {}: {}", street, self.board);
    }

    //

    fn finish_uncontested(&mut self, events: &mut Vec<Event>) {
        assert!(self.pot == self.committed(), "settling a drifted pot");
        let winner = self
            .seats
            .iter()
            .find(|s| s.contending())
            .map(Seat::position)
            .expect("exactly one contender remains");
        let rake = self.stakes.rake(self.pot);
        let reward = self.pot - rake;
        self.seats[winner].win(reward);
        self.results = self
            .seats
            .iter()
            .map(|s| {
                Settlement::from((
                    if s.position() == winner { reward } else { 0 },
                    s.spent(),
                    s.state(),
                    None,
                ))
            })
            .collect();
        events.push(Event::Results {
            hand: self.hand,
            rewards: vec![(winner, reward)],
            rake,
        });
        self.finish(events);
    }

    fn finish_showdown(&mut self, events: &mut Vec<Event>) {
        // multi-way all-ins run out whatever board is missing
        while self.board.street() != Street::Rive {
            let street = self.board.street().next();
            let cards = self.deck.deal(street, &mut self.rng);
            self.board.add(cards);
            events.push(Event::Deal {
                hand: self.hand,
                street,
                cards,
                board: Hand::from(self.board),
            });
        }
        assert!(self.pot == self.committed(), "settling a drifted pot");
        let pots = self.pots();
        assert!(
            pots.iter().map(|p| p.amount).sum::<Chips>() == self.pot,
            "pot layering must cover the live pot"
        );
        let community = Hand::from(self.board);
        let strengths = self
            .seats
            .iter()
            .map(|s| {
                s.contending().then(|| {
                    let hole = s.hole().expect("contenders hold cards");
                    Strength::from(Hand::add(Hand::from(hole), community))
                })
            })
            .collect::<Vec<Option<Strength>>>();
        for seat in self.seats.iter().filter(|s| s.contending()) {
            events.push(Event::Showdown {
                hand: self.hand,
                seat: seat.position(),
                hole: seat.hole().expect("contenders hold cards"),
                strength: strengths[seat.position()].expect("contenders were evaluated"),
            });
        }
        let (rewards, rake) =
            Showdown::new(pots, strengths.clone(), self.dealer, self.stakes).settle();
        for (position, reward) in rewards.iter().enumerate() {
            self.seats[position].win(*reward);
        }
        self.results = self
            .seats
            .iter()
            .map(|s| {
                Settlement::from((
                    rewards[s.position()],
                    s.spent(),
                    s.state(),
                    strengths[s.position()],
                ))
            })
            .collect();
        events.push(Event::Results {
            hand: self.hand,
            rewards: rewards
                .into_iter()
                .enumerate()
                .filter(|(_, reward)| *reward > 0)
                .collect(),
            rake,
        });
        self.finish(events);
    }

    /// Common epilogue: park the table, move the button past busted
    /// seats, and flag game over when fewer than two seats have chips.
    fn finish(&mut self, events: &mut Vec<Event>) {
        self.pot = 0;
        self.actor = None;
        self.sentinel = None;
        self.status = Status::HandOver;
        events.push(Event::HandEnd { hand: self.hand });
        self.dealer = self
            .order_from(self.dealer)
            .find(|p| self.seats[*p].funded())
            .unwrap_or(self.dealer);
        if self.funded() < 2 {
            self.over = true;
            log::debug!("[table] game over after hand #{}", self.hand);
        }
    }

    //

    /// Seat positions once around, clockwise, starting after `start`
    /// and ending on it.
    fn order_from(&self, start: Position) -> impl Iterator<Item = Position> + use<> {
        let n = self.seats.len();
        (1..=n).map(move |i| (start + i) % n)
    }
    fn next_active_after(&self, start: Position) -> Option<Position> {
        self.order_from(start).find(|p| self.seats[*p].active())
    }
    fn actives(&self) -> Vec<Position> {
        self.seats
            .iter()
            .filter(|s| s.active())
            .map(Seat::position)
            .collect()
    }
    fn contenders(&self) -> usize {
        self.seats.iter().filter(|s| s.contending()).count()
    }
    fn funded(&self) -> usize {
        self.seats.iter().filter(|s| s.funded()).count()
    }
    fn committed(&self) -> Chips {
        self.seats.iter().map(Seat::spent).sum()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for seat in self.seats.iter() {
            write!(f, "{}  ", seat)?;
        }
        write!(f, "@ {:>6} {}", self.pot, self.board)
    }
}
