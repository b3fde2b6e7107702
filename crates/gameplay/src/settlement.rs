use super::seat::State;
use felt_core::Chips;
use felt_cards::Strength;
use serde::Serialize;

/// One seat's outcome for a finished hand.
///
/// `strength` is present only for seats that reached showdown with live
/// cards; an uncontested winner never reveals and never evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub reward: Chips,
    pub risked: Chips,
    pub status: State,
    pub strength: Option<Strength>,
}

impl Settlement {
    /// Net chips won or lost over the hand.
    pub fn pnl(&self) -> Chips {
        self.reward - self.risked
    }
}

impl From<(Chips, Chips, State, Option<Strength>)> for Settlement {
    fn from((reward, risked, status, strength): (Chips, Chips, State, Option<Strength>)) -> Self {
        Self {
            reward,
            risked,
            status,
            strength,
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.pnl() {
            pnl if pnl > 0 => write!(f, "+{:<6}", pnl)?,
            pnl => write!(f, "{:<7}", pnl)?,
        }
        match self.strength {
            Some(strength) => write!(f, " {}", strength),
            None => Ok(()),
        }
    }
}
