//! Core types for attrkit
//!
//! This crate defines the leaf types shared by every attribute
//! implementation:
//!
//! - [`AttrFlags`]: lifecycle flag bitset (presence, dirtiness, cache state)
//! - [`TextBuf`]: owned growable text buffer with fallible allocation
//! - [`SetOp`]: the operator algebra for merging attribute values
//! - [`AttrEntry`] / [`EntryList`]: the external list representation
//! - [`AttrError`]: the error taxonomy for all attribute operations
//!
//! The protocol itself (decode, encode, merge, compare) lives in
//! `attrkit-protocol`; this crate carries no behavior beyond the types'
//! own invariants.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod flags;
pub mod op;
pub mod text;

// Re-export main types
pub use entry::{AttrEntry, EntryList};
pub use error::{AttrError, Result};
pub use flags::AttrFlags;
pub use op::SetOp;
pub use text::TextBuf;
