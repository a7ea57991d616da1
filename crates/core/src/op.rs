//! The operator algebra for merging attribute values
//!
//! A merge combines a destination cell with a source cell under one of
//! three operators:
//!
//! | Operator | Effect on a string value |
//! |----------|--------------------------|
//! | Set | destination := source |
//! | Incr | destination := destination ++ source |
//! | Decr | occurrences of source are stripped from the destination |
//!
//! The operator is a transient instruction, not stored state: it travels
//! with a single merge call and is gone.

use serde::{Deserialize, Serialize};

/// Update operator applied between two attribute cells.
///
/// The set is closed; an operator outside it is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetOp {
    /// Replace the destination value with the source value.
    Set,
    /// Append the source value to the destination value. On a destination
    /// holding no value this degrades to [`SetOp::Set`].
    Incr,
    /// Strip occurrences of the source value from the destination value,
    /// scanning from the tail. On a destination holding no value this is a
    /// no-op.
    Decr,
}

impl SetOp {
    /// All operators (for iteration).
    pub const ALL: [SetOp; 3] = [SetOp::Set, SetOp::Incr, SetOp::Decr];

    /// Short identifier (for request records, logs).
    pub const fn name(&self) -> &'static str {
        match self {
            SetOp::Set => "set",
            SetOp::Incr => "incr",
            SetOp::Decr => "decr",
        }
    }

    /// Parse from a short identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "set" => Some(SetOp::Set),
            "incr" => Some(SetOp::Incr),
            "decr" => Some(SetOp::Decr),
            _ => None,
        }
    }
}

impl std::fmt::Display for SetOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
