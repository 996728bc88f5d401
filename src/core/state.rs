//! Core State trait shared by every simulator.
//!
//! A state is a plain value describing which handler is current. Behaviour
//! lives in the pure handler functions of each simulator, never in the state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for simulator states.
///
/// All methods are pure. States are cheap values that a context swaps when a
/// handler asks for a transition.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: states are compared by tests and checkpoint validation
/// - `Debug`: states are printed in diagnostics
/// - `Serialize` + `Deserialize`: states travel inside checkpoints
///
/// # Example
///
/// ```rust
/// use statewise::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Jammed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert!(!Door::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Default implementation returns `false`. Neither simulator in this
    /// crate has one: both cycle forever.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
