//! Traffic signal states and their handler.

use crate::core::Outcome;
use crate::state_enum;
use std::convert::Infallible;

state_enum! {
    /// Colour currently shown by a traffic signal.
    pub enum SignalState {
        Red,
        Yellow,
        Green,
    }
}

impl SignalState {
    /// Line announced when the signal leaves this colour.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Red => "Red signal, stop!",
            Self::Yellow => "Yellow signal, get ready to go!",
            Self::Green => "Green signal, go!",
        }
    }

    /// Colour that follows this one.
    ///
    /// Yellow always advances to Green, so Red is only ever the initial
    /// colour: the cycle after the first change is Yellow, Green, Yellow...
    pub fn next(self) -> Self {
        match self {
            Self::Red => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Yellow,
        }
    }
}

/// Handle `change_signal` for the given colour.
///
/// Every colour accepts the operation, so the outcome is always `Moved`.
pub(crate) fn change_signal(state: SignalState) -> Outcome<SignalState, Infallible> {
    Outcome::Moved {
        from: state,
        to: state.next(),
        message: state.announcement().to_string(),
    }
}
