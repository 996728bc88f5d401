//! State transition history.
//!
//! Both contexts keep an immutable log of the transitions their handlers
//! performed. Rejected and same-state operations never appear here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateTransition;
/// use statewise::signal::SignalState;
///
/// let transition = StateTransition::now(SignalState::Red, SignalState::Yellow, "change_signal");
/// assert_eq!(transition.trigger, "change_signal");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Operation that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Build a transition stamped with the current time.
    pub fn now(from: S, to: S, trigger: impl Into<String>) -> Self {
        Self {
            from,
            to,
            trigger: trigger.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// The public API is immutable: `record` returns a new history with the
/// transition appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use statewise::core::{StateHistory, StateTransition};
/// use statewise::signal::SignalState;
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(SignalState::Red, SignalState::Yellow, "change_signal"))
///     .record(StateTransition::now(SignalState::Yellow, SignalState::Green, "change_signal"));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&SignalState::Red, &SignalState::Yellow, &SignalState::Green]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place. Contexts own their history and grow it
    /// one step at a time.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
