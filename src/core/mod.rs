//! Core types shared by both simulators.
//!
//! This module is the pure core every context is built on:
//! - State definitions via the `State` trait
//! - Immutable transition history
//! - The `Outcome` an operation produces and the `Report` channel it is
//!   announced on
//! - `Money` amounts

mod history;
mod money;
mod outcome;
mod report;
mod state;

pub use history::{StateHistory, StateTransition};
pub use money::Money;
pub use outcome::Outcome;
pub use report::{Console, Report};
pub use state::State;
