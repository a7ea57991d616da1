//! Capability dispatch over attribute types
//!
//! A dispatch table (the attribute dictionary, external to this crate)
//! looks an attribute up by name and drives it through a uniform surface
//! without knowing the concrete type. Two pieces provide that surface:
//!
//! - [`AttrCodec`]: the object-safe trait with the five protocol
//!   operations, every signature threading `(name, resource)` even where a
//!   given type ignores them.
//! - [`AttrValue`]: the closed set of attribute type variants. Only the
//!   string arm exists today; further types (numeric, list,
//!   access-control) slot in as new variants implementing the same
//!   operations.
//!
//! Merging or comparing across different variants is a programmer error
//! surfaced as [`AttrError::Internal`], never a coercion.

use std::cmp::Ordering;

use attrkit_core::{AttrError, EntryList, Result, SetOp};

use crate::str_attr::StrAttr;

/// The uniform attribute protocol: decode, encode, merge, compare, clear.
///
/// Object-safe, so a dispatch table can hold `Box<dyn AttrCodec>` entries
/// and drive any attribute type through the same calls.
pub trait AttrCodec {
    /// Populate the value from external text. `name` and `resource` are
    /// part of the uniform signature; types that do not index by resource
    /// ignore them.
    fn decode(&mut self, name: &str, resource: Option<&str>, input: Option<&str>) -> Result<()>;

    /// Encode the value and append the entry to `list`, returning whether
    /// an entry was produced. An absent value produces nothing and is not
    /// an error.
    fn encode_into(&self, name: &str, resource: Option<&str>, list: &mut EntryList)
        -> Result<bool>;

    /// Combine this value with `src` under `op`. `src` must hold the same
    /// variant; a mismatch is [`AttrError::Internal`].
    fn merge(&mut self, src: &AttrValue, op: SetOp) -> Result<()>;

    /// Order this value against `with`. Same-variant requirement as
    /// [`merge`](AttrCodec::merge); an unset receiver is
    /// [`AttrError::NotSet`].
    fn compare(&self, with: &AttrValue) -> Result<Ordering>;

    /// Release the value, idempotently.
    fn clear(&mut self);
}

/// Closed set of attribute value variants, one per attribute type.
///
/// This replaces a raw tagged union: each variant owns its representation,
/// and every operation dispatches to the variant's implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttrValue {
    /// String-valued attribute.
    Str(StrAttr),
    /// No value has been attached yet; every operation except decode and
    /// clear treats this as a mismatched variant.
    #[default]
    Unset,
}

impl AttrValue {
    /// A fresh string-valued cell.
    pub fn new_str() -> Self {
        AttrValue::Str(StrAttr::new())
    }

    /// Variant name (for error messages).
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Str(_) => "Str",
            AttrValue::Unset => "Unset",
        }
    }

    /// Borrow the string cell, when this is the string variant.
    pub fn as_str_attr(&self) -> Option<&StrAttr> {
        match self {
            AttrValue::Str(cell) => Some(cell),
            _ => None,
        }
    }

    /// Mutably borrow the string cell, when this is the string variant.
    pub fn as_str_attr_mut(&mut self) -> Option<&mut StrAttr> {
        match self {
            AttrValue::Str(cell) => Some(cell),
            _ => None,
        }
    }

}

fn mismatch(dst: &AttrValue, src: &AttrValue, what: &str) -> AttrError {
    AttrError::Internal(format!(
        "cannot {} {} value with {} value",
        what,
        dst.type_name(),
        src.type_name()
    ))
}

impl AttrCodec for AttrValue {
    fn decode(&mut self, _name: &str, _resource: Option<&str>, input: Option<&str>) -> Result<()> {
        match self {
            AttrValue::Str(cell) => cell.decode(input),
            // Decoding into an unattached slot attaches the string type;
            // the dictionary chooses richer types before decode.
            AttrValue::Unset => {
                let mut cell = StrAttr::new();
                cell.decode(input)?;
                *self = AttrValue::Str(cell);
                Ok(())
            }
        }
    }

    fn encode_into(
        &self,
        name: &str,
        resource: Option<&str>,
        list: &mut EntryList,
    ) -> Result<bool> {
        match self {
            AttrValue::Str(cell) => cell.encode_into(name, resource, list),
            AttrValue::Unset => Ok(false),
        }
    }

    fn merge(&mut self, src: &AttrValue, op: SetOp) -> Result<()> {
        match (self, src) {
            (AttrValue::Str(dst), AttrValue::Str(b)) => dst.merge(b, op),
            (dst, other) => Err(mismatch(dst, other, "merge")),
        }
    }

    fn compare(&self, with: &AttrValue) -> Result<Ordering> {
        match (self, with) {
            (AttrValue::Str(a), AttrValue::Str(b)) => a.compare(b),
            (a, other) => Err(mismatch(a, other, "compare")),
        }
    }

    fn clear(&mut self) {
        match self {
            AttrValue::Str(cell) => cell.clear(),
            AttrValue::Unset => {}
        }
    }
}
