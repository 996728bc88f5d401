//! Traffic signal simulator.
//!
//! Three colours, one operation. The colour is a plain `SignalState` tag and
//! `change_signal` is a pure handler returning the next tag; the
//! `TrafficSignal` context applies it, records it, and reports it.

mod machine;
mod state;

pub use machine::TrafficSignal;
pub use state::SignalState;
