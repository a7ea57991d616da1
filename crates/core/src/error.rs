//! Error taxonomy for attribute operations
//!
//! All failures are returned as values, never panics. Allocation failure is
//! the only expected runtime failure mode; every mutating operation either
//! rolls back to the previous state or completes fully before it can fail.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | System | Allocation failure while copying or growing a value |
//! | BadValue | Input rejected by validation before any mutation |
//! | Internal | Programmer error (bad range, mismatched dispatch) |
//! | NotSet | Comparison requested against an absent value |

use std::collections::TryReserveError;
use thiserror::Error;

/// All attribute protocol errors.
#[derive(Debug, Error)]
pub enum AttrError {
    /// Allocation failure. The cell is left either fully intact or fully
    /// replaced, never half-written.
    #[error("allocation failure: {0}")]
    System(#[from] TryReserveError),

    /// Input failed validation (for example a length-constrained decode).
    /// Produced before any mutation, so the cell is unchanged.
    #[error("bad attribute value: {0}")]
    BadValue(String),

    /// Programmer error: an operation was invoked in a way the caller is
    /// required to prevent.
    #[error("internal error: {0}")]
    Internal(String),

    /// A comparison was requested on a value that is not set. This is a
    /// policy signal, not a fatal condition.
    #[error("attribute value is not set")]
    NotSet,
}

/// Result type for attribute operations.
pub type Result<T> = std::result::Result<T, AttrError>;

impl AttrError {
    /// Check if this is an allocation failure.
    pub fn is_system(&self) -> bool {
        matches!(self, AttrError::System(_))
    }

    /// Check if this is a validation rejection.
    pub fn is_bad_value(&self) -> bool {
        matches!(self, AttrError::BadValue(_))
    }

    /// Check if this is a programmer error.
    pub fn is_internal(&self) -> bool {
        matches!(self, AttrError::Internal(_))
    }

    /// Check if this is the not-set comparison signal.
    pub fn is_not_set(&self) -> bool {
        matches!(self, AttrError::NotSet)
    }
}
