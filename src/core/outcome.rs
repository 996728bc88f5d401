//! Result of driving one operation through a context.

use super::state::State;
use std::fmt::Display;

/// What a handler did with an operation.
///
/// Operations never fail. An action that is invalid for the current state is
/// `Rejected`: nothing is mutated and the reason is reported instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<S: State, R> {
    /// The handler switched the context to another state
    Moved { from: S, to: S, message: String },

    /// The action was accepted without a state change
    Held { state: S, message: String },

    /// The action is not valid in this state
    Rejected { state: S, reason: R },
}

impl<S: State, R: Display> Outcome<S, R> {
    /// The line emitted on the reporting channel.
    pub fn message(&self) -> String {
        match self {
            Self::Moved { message, .. } | Self::Held { message, .. } => message.clone(),
            Self::Rejected { reason, .. } => reason.to_string(),
        }
    }
}

impl<S: State, R> Outcome<S, R> {
    /// State the context is in once the operation completed.
    pub fn state(&self) -> &S {
        match self {
            Self::Moved { to, .. } => to,
            Self::Held { state, .. } | Self::Rejected { state, .. } => state,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
