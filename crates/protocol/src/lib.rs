//! The attribute value protocol
//!
//! Every attribute type in the system implements the same five operations
//! over a flagged value cell:
//!
//! - **decode**: external text into the cell
//! - **encode**: the cell into an external list entry (or nothing)
//! - **merge**: combine two cells under a [`SetOp`](attrkit_core::SetOp)
//! - **compare**: order one cell against another
//! - **clear**: release the cell's value, idempotently
//!
//! This crate implements the string-valued attribute ([`StrAttr`]) and the
//! capability surface a dispatch table calls without knowing the concrete
//! type ([`AttrCodec`], [`AttrValue`]).
//!
//! ## Examples
//!
//! ```
//! use attrkit_core::{EntryList, SetOp};
//! use attrkit_protocol::StrAttr;
//!
//! let mut cell = StrAttr::new();
//! cell.decode(Some("job.output"))?;
//!
//! let mut strip = StrAttr::new();
//! strip.decode(Some(".output"))?;
//! cell.merge(&strip, SetOp::Decr)?;
//!
//! let mut list = EntryList::new();
//! cell.encode_into("Job_Name", None, &mut list)?;
//! assert_eq!(list.last().unwrap().value, "job");
//! # Ok::<(), attrkit_core::AttrError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod str_attr;

// Re-export main types
pub use codec::{AttrCodec, AttrValue};
pub use str_attr::{StrAttr, MAX_NAME_LEN};
