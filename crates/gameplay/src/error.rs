use felt_core::Chips;
use felt_core::Position;

/// A rejected request, reported without mutating anything.
///
/// These are the recoverable tier of failures: the caller decides
/// whether to retry, reject, or surface them. Corrupted-state
/// conditions (deck exhaustion, pot drift) are not errors, they panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no hand in progress")]
    Idle,
    #[error("hand already in progress")]
    Busy,
    #[error("need at least two funded seats")]
    ShortHanded,
    #[error("seat {0} does not exist")]
    BadSeat(Position),
    #[error("not seat {0}'s turn")]
    OutOfTurn(Position),
    #[error("cannot check facing a bet of {owed}")]
    CheckFacingBet { owed: Chips },
    #[error("nothing to call")]
    NothingToCall,
    #[error("cannot bet into a live bet")]
    BetIntoBet,
    #[error("nothing to raise over")]
    NothingToRaise,
    #[error("bet of {amount} below minimum {minimum}")]
    BetTooSmall { amount: Chips, minimum: Chips },
    #[error("raise of {amount} below minimum {minimum}")]
    RaiseTooSmall { amount: Chips, minimum: Chips },
    #[error("{amount} chips exceeds stack of {stack}")]
    OverStack { amount: Chips, stack: Chips },
}
