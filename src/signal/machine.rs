//! The traffic signal context.

use crate::core::{Console, Outcome, Report, State, StateHistory, StateTransition};
use crate::signal::state::{self, SignalState};
use std::convert::Infallible;
use tracing::debug;

/// A traffic signal that starts at Red and changes colour on request.
///
/// ```rust
/// use statewise::signal::{SignalState, TrafficSignal};
///
/// let mut signal = TrafficSignal::with_reporter(Vec::new());
/// signal.change_signal();
/// signal.change_signal();
///
/// assert_eq!(signal.state(), SignalState::Green);
/// assert_eq!(signal.reporter(), &["Red signal, stop!", "Yellow signal, get ready to go!"]);
/// ```
#[derive(Debug)]
pub struct TrafficSignal<R: Report = Console> {
    state: SignalState,
    history: StateHistory<SignalState>,
    reporter: R,
}

impl TrafficSignal<Console> {
    /// Create a signal that prints to stdout.
    pub fn new() -> Self {
        Self::with_reporter(Console)
    }
}

impl Default for TrafficSignal<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Report> TrafficSignal<R> {
    pub fn with_reporter(reporter: R) -> Self {
        Self {
            state: SignalState::Red,
            history: StateHistory::new(),
            reporter,
        }
    }

    pub(crate) fn from_parts(
        state: SignalState,
        history: StateHistory<SignalState>,
        reporter: R,
    ) -> Self {
        Self {
            state,
            history,
            reporter,
        }
    }

    /// Forward to the current colour's handler.
    pub fn change_signal(&mut self) -> Outcome<SignalState, Infallible> {
        let outcome = state::change_signal(self.state);
        self.apply(&outcome);
        outcome
    }

    pub fn state(&self) -> SignalState {
        self.state
    }

    pub fn history(&self) -> &StateHistory<SignalState> {
        &self.history
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub(crate) fn set_state(&mut self, state: SignalState) {
        self.state = state;
    }

    fn apply(&mut self, outcome: &Outcome<SignalState, Infallible>) {
        if let Outcome::Moved { from, to, .. } = outcome {
            debug!(from = from.name(), to = to.name(), trigger = "change_signal", "signal changed");
            self.history.push(StateTransition::now(*from, *to, "change_signal"));
            self.set_state(*to);
        }
        self.reporter.line(&outcome.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_red_with_empty_history() {
        let signal = TrafficSignal::with_reporter(());
        assert_eq!(signal.state(), SignalState::Red);
        assert!(signal.history().is_empty());
    }

    #[test]
    fn six_changes_follow_the_asymmetric_cycle() {
        let mut signal = TrafficSignal::with_reporter(Vec::new());
        let states: Vec<SignalState> = (0..6).map(|_| *signal.change_signal().state()).collect();

        assert_eq!(
            states,
            vec![
                SignalState::Yellow,
                SignalState::Green,
                SignalState::Yellow,
                SignalState::Green,
                SignalState::Yellow,
                SignalState::Green,
            ]
        );
        assert_eq!(
            signal.into_reporter(),
            vec![
                "Red signal, stop!",
                "Yellow signal, get ready to go!",
                "Green signal, go!",
                "Yellow signal, get ready to go!",
                "Green signal, go!",
                "Yellow signal, get ready to go!",
            ]
        );
    }

    #[test]
    fn long_runs_keep_every_transition() {
        let mut signal = TrafficSignal::with_reporter(());
        for _ in 0..50_000 {
            signal.change_signal();
        }

        assert_eq!(signal.history().len(), 50_000);
        assert_eq!(signal.state(), SignalState::Green);
        assert_eq!(signal.history().transitions()[0].from, SignalState::Red);
    }

    #[test]
    fn every_change_is_recorded() {
        let mut signal = TrafficSignal::with_reporter(());
        signal.change_signal();
        signal.change_signal();
        signal.change_signal();

        let history = signal.history();
        assert_eq!(history.len(), 3);
        assert_eq!(
            history.get_path(),
            vec![
                &SignalState::Red,
                &SignalState::Yellow,
                &SignalState::Green,
                &SignalState::Yellow,
            ]
        );
        assert!(history
            .transitions()
            .iter()
            .all(|t| t.trigger == "change_signal"));
    }
}
