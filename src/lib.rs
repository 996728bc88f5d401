//! Statewise: the State pattern as pure state machines
//!
//! Two small simulators whose behaviour depends on an internal state: a
//! traffic signal and a vending machine. Each keeps its current state as a
//! plain enum tag. A pure handler function decides what an operation does in
//! that state and returns the next tag; the context applies the result,
//! records the transition, and reports one line.
//!
//! # Core Concepts
//!
//! - **State**: the `State` trait, implemented by `SignalState` and
//!   `VendingState`
//! - **Outcome**: every operation either moves, holds, or is rejected; it
//!   never fails
//! - **Report**: the channel each outcome's message is written to
//! - **History**: immutable log of the transitions a context went through
//!
//! # Example
//!
//! ```rust
//! use statewise::core::Money;
//! use statewise::vending::{
//!     Catalog, ProductId, Rejection, VendingMachine, VendingOutcome, VendingState,
//! };
//!
//! let mut machine = VendingMachine::with_reporter(Catalog::standard(), Vec::new());
//!
//! let outcome = machine.select_product(ProductId(1));
//! assert_eq!(
//!     outcome,
//!     VendingOutcome::Rejected {
//!         state: VendingState::NoMoney,
//!         reason: Rejection::InsertMoneyFirst,
//!     }
//! );
//!
//! machine.insert_money(2.0);
//! machine.select_product(ProductId(1));
//! machine.dispense_product();
//! assert_eq!(machine.balance(), Money::new(0.5));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod signal;
pub mod vending;

// Re-export commonly used types
pub use crate::builder::{BuildError, VendingMachineBuilder};
pub use crate::core::{Money, Outcome, Report, State, StateHistory, StateTransition};
pub use crate::signal::{SignalState, TrafficSignal};
pub use crate::vending::{Catalog, ProductId, VendingMachine, VendingState};
