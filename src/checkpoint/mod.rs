//! Checkpoint and restore for both simulators.
//!
//! A checkpoint captures a context's state, its domain data and its
//! transition history as a plain value that can be encoded to JSON or a
//! compact binary form. Where the bytes go is the caller's business; nothing
//! here touches the filesystem. The reporter is not captured and must be
//! supplied again on restore.

use crate::core::{Money, Report, State, StateHistory};
use crate::signal::{SignalState, TrafficSignal};
use crate::vending::{Catalog, VendingMachine, VendingState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Encoding};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a context.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "D: Serialize",
    deserialize = "D: serde::de::DeserializeOwned"
))]
pub struct Checkpoint<S: State, D> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State the context was in
    pub current_state: S,

    /// Domain data owned by the context
    pub data: D,

    /// Complete transition history
    pub history: StateHistory<S>,
}

/// Domain data of a vending machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendingLedger {
    pub balance: Money,
    pub catalog: Catalog,
}

pub type SignalCheckpoint = Checkpoint<SignalState, ()>;
pub type VendingCheckpoint = Checkpoint<VendingState, VendingLedger>;

type Check = Validation<(), NonEmptyVec<String>>;

impl<S: State, D: Serialize + serde::de::DeserializeOwned> Checkpoint<S, D> {
    pub fn new(current_state: S, data: D, history: StateHistory<S>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current_state,
            data,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::encode(Encoding::Json, e))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::decode(Encoding::Json, e))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode(Encoding::Binary, e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::decode(Encoding::Binary, e))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// The history must start at `initial` and end in the current state. An
    /// empty history means the context never left `initial`.
    fn history_checks(&self, initial: &S) -> Vec<Check> {
        let (Some(first), Some(last)) = (self.history.transitions().first(), self.history.last())
        else {
            return vec![if self.current_state == *initial {
                Validation::success(())
            } else {
                Validation::fail(format!(
                    "history is empty but current state is {} rather than {}",
                    self.current_state.name(),
                    initial.name()
                ))
            }];
        };

        let start = if first.from == *initial {
            Validation::success(())
        } else {
            Validation::fail(format!(
                "history starts in {} rather than {}",
                first.from.name(),
                initial.name()
            ))
        };
        let end = if last.to == self.current_state {
            Validation::success(())
        } else {
            Validation::fail(format!(
                "history ends in {} but current state is {}",
                last.to.name(),
                self.current_state.name()
            ))
        };
        vec![start, end]
    }
}

/// Run every check and fold the failures into one error.
fn settle(checks: Vec<Check>) -> Result<(), CheckpointError> {
    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(problems) => Err(CheckpointError::Inconsistent(
            problems.iter().cloned().collect::<Vec<_>>().join("; "),
        )),
    }
}

impl<R: Report> TrafficSignal<R> {
    pub fn checkpoint(&self) -> SignalCheckpoint {
        Checkpoint::new(self.state(), (), self.history().clone())
    }

    /// Rebuild a signal from a checkpoint.
    pub fn restore(checkpoint: SignalCheckpoint, reporter: R) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;
        settle(checkpoint.history_checks(&SignalState::Red))?;
        Ok(TrafficSignal::from_parts(
            checkpoint.current_state,
            checkpoint.history,
            reporter,
        ))
    }
}

impl<R: Report> VendingMachine<R> {
    pub fn checkpoint(&self) -> VendingCheckpoint {
        Checkpoint::new(
            self.state().clone(),
            VendingLedger {
                balance: self.balance(),
                catalog: self.catalog().clone(),
            },
            self.history().clone(),
        )
    }

    /// Rebuild a machine from a checkpoint.
    ///
    /// The balance must be finite and a selected product must match its
    /// catalog entry exactly. The catalog itself was validated when it was
    /// decoded.
    pub fn restore(checkpoint: VendingCheckpoint, reporter: R) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;

        let ledger = &checkpoint.data;
        let mut checks = checkpoint.history_checks(&VendingState::NoMoney);

        checks.push(if ledger.balance.is_finite() {
            Validation::success(())
        } else {
            Validation::fail(format!("balance {} is not a finite amount", ledger.balance))
        });

        if let VendingState::ProductSelected { id, product } = &checkpoint.current_state {
            checks.push(match ledger.catalog.get(*id) {
                Some(listed) if listed == product => Validation::success(()),
                Some(_) => Validation::fail(format!(
                    "selected product {id} differs from its catalog entry"
                )),
                None => Validation::fail(format!("selected product {id} is not in the catalog")),
            });
        }

        settle(checks)?;

        let Checkpoint {
            current_state,
            data,
            history,
            ..
        } = checkpoint;
        Ok(VendingMachine::from_parts(
            current_state,
            data.balance,
            data.catalog,
            history,
            reporter,
        ))
    }
}
