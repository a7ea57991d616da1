//! Unified error type for attrkit.
//!
//! Wraps the internal error taxonomy and presents one stable surface to
//! users of the facade.

use attrkit_core::AttrError;
use thiserror::Error;

/// All attrkit errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Allocation failure while copying or growing a value.
    #[error("system error: {0}")]
    System(String),

    /// Input rejected by validation before any mutation.
    #[error("bad value: {0}")]
    BadValue(String),

    /// Programmer error (bad range, mismatched dispatch).
    #[error("internal error: {0}")]
    Internal(String),

    /// A comparison was requested on a value that is not set.
    #[error("value is not set")]
    NotSet,
}

/// Result type for attrkit operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error reports an unset value, the one condition
    /// callers routinely branch on.
    pub fn is_not_set(&self) -> bool {
        matches!(self, Error::NotSet)
    }
}

// Convert from internal protocol errors
impl From<AttrError> for Error {
    fn from(e: AttrError) -> Self {
        match e {
            AttrError::System(reserve) => Error::System(reserve.to_string()),
            AttrError::BadValue(msg) => Error::BadValue(msg),
            AttrError::Internal(msg) => Error::Internal(msg),
            AttrError::NotSet => Error::NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_core_variants() {
        let err: Error = AttrError::BadValue("too long".into()).into();
        assert!(matches!(err, Error::BadValue(_)));

        let err: Error = AttrError::NotSet.into();
        assert!(err.is_not_set());
    }

    #[test]
    fn test_display_messages() {
        let err: Error = AttrError::Internal("bad range".into()).into();
        assert_eq!(err.to_string(), "internal error: bad range");
    }
}
