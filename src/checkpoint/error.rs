//! Checkpoint error types.

use std::fmt;
use thiserror::Error;

/// Wire form of a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Binary,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Binary => "binary",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint as {encoding}: {reason}")]
    Encode { encoding: Encoding, reason: String },

    #[error("Could not decode {encoding} checkpoint: {reason}")]
    Decode { encoding: Encoding, reason: String },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot decoded but describes a context that cannot exist
    #[error("Checkpoint is inconsistent: {0}")]
    Inconsistent(String),
}

impl CheckpointError {
    pub(crate) fn encode(encoding: Encoding, reason: impl fmt::Display) -> Self {
        Self::Encode {
            encoding,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(encoding: Encoding, reason: impl fmt::Display) -> Self {
        Self::Decode {
            encoding,
            reason: reason.to_string(),
        }
    }
}
