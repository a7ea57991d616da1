//! # attrkit
//!
//! Typed-attribute value protocol for resource-management systems.
//!
//! Every attribute in a job or resource table is a flagged value cell that
//! supports the same five operations: decode external text, encode to an
//! external list entry, merge with another cell under a small operator
//! algebra, compare, and clear. attrkit implements that protocol for
//! string-valued attributes and exposes the capability surface a dispatch
//! table drives any attribute type through.
//!
//! ## Quick Start
//!
//! ```
//! use attrkit::{EntryList, SetOp, StrAttr};
//!
//! // Decode external text into a cell.
//! let mut out_path = StrAttr::new();
//! out_path.decode(Some("job.output"))?;
//!
//! // Merge: strip a suffix off the current value.
//! let mut suffix = StrAttr::new();
//! suffix.decode(Some(".output"))?;
//! out_path.merge(&suffix, SetOp::Decr)?;
//! assert_eq!(out_path.value(), Some("job"));
//!
//! // Encode into an ordered list of external entries.
//! let mut batch = EntryList::new();
//! out_path.encode_into("Output_Path", None, &mut batch)?;
//! assert_eq!(batch.len(), 1);
//! # Ok::<(), attrkit::AttrError>(())
//! ```
//!
//! ## Crates
//!
//! - `attrkit-core`: flags, text buffer, operator, list entries, errors
//! - `attrkit-protocol`: the string cell and the [`AttrCodec`] dispatch
//!   surface

#![warn(missing_docs)]

mod error;

pub use error::{Error, Result};

// Re-export core types
pub use attrkit_core::{AttrEntry, AttrError, AttrFlags, EntryList, SetOp, TextBuf};

// Re-export the protocol
pub use attrkit_protocol::{AttrCodec, AttrValue, StrAttr, MAX_NAME_LEN};
