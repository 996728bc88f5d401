//! Builder API for ergonomic construction.
//!
//! `VendingMachineBuilder` validates a catalog before handing out a machine,
//! and `state_enum!` declares fieldless state enums with their `State`
//! implementation.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::VendingMachineBuilder;
