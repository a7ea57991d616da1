//! Lifecycle flags for attribute cells
//!
//! Every attribute cell carries the same small bitset describing where its
//! value is in its lifecycle:
//!
//! | Bit | Meaning |
//! |-----|---------|
//! | SET | A meaningful (non-empty) value is present |
//! | MODIFY | The value changed since it was last encoded |
//! | MODCACHE | Cached state derived from the value is stale |
//! | DEFAULT | The value was populated from a default, not a caller |
//!
//! The bits are never exposed as raw masks; call sites go through the named
//! accessors so the invariant "SET iff a non-empty value is present" stays
//! enforced by the owning cell.

use serde::{Deserialize, Serialize};

const SET: u8 = 0x01;
const MODIFY: u8 = 0x02;
const DEFAULT: u8 = 0x04;
const MODCACHE: u8 = 0x08;

/// Lifecycle flag bitset for one attribute cell.
///
/// A freshly created cell has no flags raised. The flags are mutated only by
/// the owning cell's decode/merge/clear paths; encode copies a snapshot onto
/// the produced list entry and never mutates the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttrFlags(u8);

impl AttrFlags {
    /// A flag set with no bits raised.
    pub fn new() -> Self {
        AttrFlags(0)
    }

    /// Reconstruct from a raw snapshot previously taken with [`bits`].
    ///
    /// Unknown bits are preserved so snapshots round-trip unchanged.
    ///
    /// [`bits`]: AttrFlags::bits
    pub fn from_bits(bits: u8) -> Self {
        AttrFlags(bits)
    }

    /// Raw snapshot of the bitset, for carrying on an encoded entry.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Whether a meaningful value is present.
    pub fn is_set(&self) -> bool {
        self.0 & SET != 0
    }

    /// Whether the value changed since it was last encoded.
    pub fn is_dirty(&self) -> bool {
        self.0 & MODIFY != 0
    }

    /// Whether cached state derived from the value is stale.
    pub fn is_cache_stale(&self) -> bool {
        self.0 & MODCACHE != 0
    }

    /// Whether the value came from a default rather than a caller.
    pub fn is_default(&self) -> bool {
        self.0 & DEFAULT != 0
    }

    /// Record that a meaningful value is now present. Also marks the value
    /// dirty, since presence only changes through mutation.
    pub fn mark_set(&mut self) {
        self.0 |= SET | MODIFY | MODCACHE;
    }

    /// Record that the value became absent through mutation: presence is
    /// cleared and the change itself is marked dirty.
    pub fn mark_unset(&mut self) {
        self.0 = (self.0 & !SET) | MODIFY | MODCACHE;
    }

    /// Drop only the presence bit, leaving dirtiness as-is.
    pub fn clear_set(&mut self) {
        self.0 &= !SET;
    }

    /// Mark the value as changed without touching presence.
    pub fn mark_dirty(&mut self) {
        self.0 |= MODIFY | MODCACHE;
    }

    /// Record that the value was populated from a default.
    pub fn mark_default(&mut self) {
        self.0 |= DEFAULT;
    }
}

impl std::fmt::Display for AttrFlags {
    /// Display as a compact letter set, e.g. `[SMC]` for set+modify+modcache.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        if self.is_set() {
            write!(f, "S")?;
        }
        if self.is_dirty() {
            write!(f, "M")?;
        }
        if self.is_cache_stale() {
            write!(f, "C")?;
        }
        if self.is_default() {
            write!(f, "D")?;
        }
        write!(f, "]")
    }
}
