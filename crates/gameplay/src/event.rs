use super::action::Action;
use felt_core::Chips;
use felt_core::Position;
use felt_cards::Hand;
use felt_cards::Hole;
use felt_cards::Street;
use felt_cards::Strength;
use serde::Serialize;

/// Domain events emitted by table operations.
///
/// Every per-hand event carries the hand number so consumers can
/// sequence correctly and discard stale events from previous hands.
/// The engine owns emission only; history, transport, and formatting
/// belong to whoever consumes these.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// New hand starting with the stacks as dealt.
    HandStart {
        hand: u64,
        dealer: Position,
        stacks: Vec<Chips>,
    },
    /// A blind was posted (possibly short, possibly all-in).
    Blind {
        hand: u64,
        seat: Position,
        amount: Chips,
    },
    /// A seat's private cards. Route to that seat only.
    HoleCards {
        hand: u64,
        seat: Position,
        hole: Hole,
    },
    /// Community cards revealed entering a street.
    Deal {
        hand: u64,
        street: Street,
        cards: Hand,
        board: Hand,
    },
    /// A player acted.
    Action {
        hand: u64,
        seat: Position,
        action: Action,
        pot: Chips,
    },
    /// A contender's cards revealed at showdown.
    Showdown {
        hand: u64,
        seat: Position,
        hole: Hole,
        strength: Strength,
    },
    /// Chips awarded, rake taken.
    Results {
        hand: u64,
        rewards: Vec<(Position, Chips)>,
        rake: Chips,
    },
    /// The hand is over; the table is idle until the next deal.
    HandEnd { hand: u64 },
}

impl Event {
    pub fn hand(&self) -> u64 {
        match self {
            Event::HandStart { hand, .. }
            | Event::Blind { hand, .. }
            | Event::HoleCards { hand, .. }
            | Event::Deal { hand, .. }
            | Event::Action { hand, .. }
            | Event::Showdown { hand, .. }
            | Event::Results { hand, .. }
            | Event::HandEnd { hand } => *hand,
        }
    }
    /// The seat this event is private to, if any.
    pub fn private_to(&self) -> Option<Position> {
        match self {
            Event::HoleCards { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::HandStart { hand, dealer, .. } => {
                write!(f, "hand #{} (button P{})", hand, dealer)
            }
            Event::Blind { seat, amount, .. } => write!(f, "P{} posts {}", seat, amount),
            Event::HoleCards { seat, hole, .. } => write!(f, "P{} holds {}", seat, hole),
            Event::Deal { street, board, .. } => write!(f, "{}: {}", street, board),
            Event::Action {
                seat, action, pot, ..
            } => write!(f, "P{}: {} (pot {})", seat, action, pot),
            Event::Showdown {
                seat,
                hole,
                strength,
                ..
            } => write!(f, "P{} shows {} {}", seat, hole, strength),
            Event::Results { rewards, rake, .. } => {
                let wins = rewards
                    .iter()
                    .map(|(seat, chips)| format!("P{} wins {}", seat, chips))
                    .collect::<Vec<String>>()
                    .join(", ");
                match rake {
                    0 => write!(f, "{}", wins),
                    _ => write!(f, "{} (rake {})", wins, rake),
                }
            }
            Event::HandEnd { hand } => write!(f, "hand #{} over", hand),
        }
    }
}
