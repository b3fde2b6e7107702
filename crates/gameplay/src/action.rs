use felt_core::Chips;
use serde::Deserialize;
use serde::Serialize;

/// A player's betting decision.
///
/// # Amount contract
///
/// - `Bet(n)` — `n` is the **total** number of chips the seat commits to
///   the street; legal only when nothing is owed, so it equals the chips
///   that leave the stack.
/// - `Raise(n)` — `n` is the **extra** chips above the amount needed to
///   call; the seat pays the call plus `n`.
///
/// Call amounts are implicit (the engine computes the shortfall, capped
/// by stack). The same convention is applied by validation, execution,
/// and [`super::Table::legal`]; there is no second interpretation
/// anywhere.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
}

impl Action {
    /// True if this action puts new chips into the pot beyond a call.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_))
    }
    /// True if this is a fold or check (no chips added).
    pub fn is_passive(&self) -> bool {
        matches!(self, Action::Fold | Action::Check)
    }
    /// The declared amount, where the variant carries one.
    pub fn amount(&self) -> Option<Chips> {
        match *self {
            Action::Bet(amount) | Action::Raise(amount) => Some(amount),
            _ => None,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Bet(_) => "Bet",
            Action::Raise(_) => "Raise",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("FOLD") => Ok(Action::Fold),
            Some("CHECK") => Ok(Action::Check),
            Some("CALL") => Ok(Action::Call),
            Some("BET") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Bet)
                .ok_or_else(|| anyhow::anyhow!("invalid bet amount")),
            Some("RAISE") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Raise)
                .ok_or_else(|| anyhow::anyhow!("invalid raise amount")),
            _ => Err(anyhow::anyhow!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call => write!(f, "CALL"),
            Action::Bet(amount) => write!(f, "BET   {}", amount),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}
