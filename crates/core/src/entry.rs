//! External list entries
//!
//! An [`AttrEntry`] is the external form of one attribute value: the
//! name/value record a cell encodes to before transmission or storage. An
//! [`EntryList`] is the ordered, append-only sequence those entries are
//! collected into. Once appended, an entry is owned by its list.
//!
//! Entries are only ever produced for cells that are set and non-empty;
//! a cell with nothing to say contributes nothing to the list.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::flags::AttrFlags;
use crate::text::TextBuf;

/// External form of one attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrEntry {
    /// Attribute name.
    pub name: String,
    /// Resource name, for attributes indexed by resource.
    pub resource: Option<String>,
    /// The value text.
    pub value: String,
    /// Snapshot of the source cell's lifecycle flags at encode time.
    pub flags: AttrFlags,
}

impl AttrEntry {
    /// Build an entry, copying all text fields.
    ///
    /// Copies are made through [`TextBuf`] so an allocation failure comes
    /// back as [`AttrError::System`](crate::AttrError::System) with nothing
    /// constructed.
    pub fn create(
        name: &str,
        resource: Option<&str>,
        value: &str,
        flags: AttrFlags,
    ) -> Result<Self> {
        let name = TextBuf::copy_of(name)?;
        let resource = match resource {
            Some(r) => Some(TextBuf::copy_of(r)?),
            None => None,
        };
        let value = TextBuf::copy_of(value)?;
        Ok(AttrEntry {
            name: name.into_string(),
            resource: resource.map(TextBuf::into_string),
            value: value.into_string(),
            flags,
        })
    }
}

impl std::fmt::Display for AttrEntry {
    /// Display as `name=value` or `name.resource=value`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.resource {
            Some(r) => write!(f, "{}.{}={}", self.name, r, self.value),
            None => write!(f, "{}={}", self.name, self.value),
        }
    }
}

/// Ordered, append-only sequence of encoded entries.
///
/// Entries keep the order they were appended in; the list never reorders or
/// removes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryList(Vec<AttrEntry>);

impl EntryList {
    /// An empty list.
    pub fn new() -> Self {
        EntryList(Vec::new())
    }

    /// Append an entry, taking ownership of it.
    pub fn push(&mut self, entry: AttrEntry) -> Result<()> {
        self.0.try_reserve(1)?;
        self.0.push(entry);
        Ok(())
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttrEntry> {
        self.0.iter()
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<&AttrEntry> {
        self.0.last()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a AttrEntry;
    type IntoIter = std::slice::Iter<'a, AttrEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for EntryList {
    type Item = AttrEntry;
    type IntoIter = std::vec::IntoIter<AttrEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
