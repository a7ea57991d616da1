//! String-valued attribute cells
//!
//! [`StrAttr`] is the reference implementation of the attribute protocol:
//! an optional owned text value plus lifecycle flags, mutated only through
//! decode and merge, encoded to an external list entry on demand.
//!
//! ## Flag invariant
//!
//! `SET` is raised if and only if the cell holds non-empty text. Empty text
//! is normalized to "absent": decode of `""` clears the value, and a merge
//! that strips a value down to nothing drops the buffer and clears `SET`.
//!
//! ## Failure discipline
//!
//! Allocation failure is the only runtime failure mode. Each mutating
//! branch secures capacity before touching the value, so a failed call
//! leaves the cell either unchanged or in the last fully-applied state,
//! never half-written.

use std::cmp::Ordering;

use attrkit_core::{AttrEntry, AttrError, AttrFlags, EntryList, Result, SetOp, TextBuf};
use tracing::{debug, trace};

/// Longest accepted text for name-like attributes, in bytes.
///
/// Used by [`StrAttr::decode_bounded`] callers that populate job or queue
/// names.
pub const MAX_NAME_LEN: usize = 236;

/// A string-valued attribute cell: optional owned text plus lifecycle flags.
///
/// Freshly created cells are absent with all flags clear. See the module
/// docs for the flag invariant and failure discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrAttr {
    value: Option<TextBuf>,
    flags: AttrFlags,
}

impl StrAttr {
    /// An absent cell with no flags raised.
    pub fn new() -> Self {
        StrAttr {
            value: None,
            flags: AttrFlags::new(),
        }
    }

    /// The cell's text, when a meaningful value is present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_ref().map(TextBuf::as_str)
    }

    /// Snapshot of the lifecycle flags.
    pub fn flags(&self) -> AttrFlags {
        self.flags
    }

    /// Whether a meaningful (non-empty) value is present.
    pub fn is_set(&self) -> bool {
        self.flags.is_set()
    }

    /// Populate the cell from external text.
    ///
    /// Absent or empty input releases any previous value and leaves the
    /// cell absent; anything else replaces the value with a copy of the
    /// input. Both paths mark the cell dirty.
    ///
    /// On allocation failure the old value has already been released and
    /// the cell is absent, a well-defined state rather than a partial one.
    pub fn decode(&mut self, input: Option<&str>) -> Result<()> {
        // The previous value goes first on every path.
        self.value = None;
        match input {
            Some(text) if !text.is_empty() => {
                let buf = match TextBuf::copy_of(text) {
                    Ok(buf) => buf,
                    Err(e) => {
                        // Old value already released; stay well-defined.
                        self.flags.mark_unset();
                        return Err(e);
                    }
                };
                self.value = Some(buf);
                self.flags.mark_set();
                trace!(len = text.len(), "decoded string attribute");
            }
            _ => {
                self.flags.mark_unset();
                trace!("decoded absent string attribute");
            }
        }
        Ok(())
    }

    /// Length-constrained decode for name-like attributes.
    ///
    /// Input longer than `limit` bytes is rejected with
    /// [`AttrError::BadValue`] before any mutation; the cell is unchanged
    /// on rejection. Within the limit this is exactly [`decode`].
    ///
    /// [`decode`]: StrAttr::decode
    pub fn decode_bounded(&mut self, input: Option<&str>, limit: usize) -> Result<()> {
        if let Some(text) = input {
            if text.len() > limit {
                debug!(
                    len = text.len(),
                    limit, "rejecting over-limit attribute value"
                );
                return Err(AttrError::BadValue(format!(
                    "value length {} exceeds limit {}",
                    text.len(),
                    limit
                )));
            }
        }
        self.decode(input)
    }

    /// Produce the cell's external list entry, if it has one.
    ///
    /// An absent, unset or empty cell yields `Ok(None)`: nothing to encode,
    /// which is not an error. The cell itself is never mutated; the entry
    /// carries a copy of the text and a snapshot of the flags.
    pub fn encode(&self, name: &str, resource: Option<&str>) -> Result<Option<AttrEntry>> {
        let text = match self.value() {
            Some(text) if self.is_set() && !text.is_empty() => text,
            _ => return Ok(None),
        };
        let entry = AttrEntry::create(name, resource, text, self.flags)?;
        Ok(Some(entry))
    }

    /// Encode and append to a caller-supplied list.
    ///
    /// Returns whether an entry was produced. Appending to `list` is the
    /// only observable mutation.
    pub fn encode_into(
        &self,
        name: &str,
        resource: Option<&str>,
        list: &mut EntryList,
    ) -> Result<bool> {
        match self.encode(name, resource)? {
            Some(entry) => {
                list.push(entry)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Combine this cell with `src` under `op`.
    ///
    /// - [`SetOp::Set`] replaces this cell's text with `src`'s.
    /// - [`SetOp::Incr`] appends `src`'s text; with no current value it
    ///   degrades to `Set`.
    /// - [`SetOp::Decr`] strips every non-overlapping occurrence of `src`'s
    ///   text found in one right-to-left scan of the current text. Matching
    ///   runs against the original text only, so a removal never joins its
    ///   neighbors into a new match. Absent cell or no match: no-op.
    ///
    /// The caller must ensure `src` is set with a non-empty value; this is
    /// an assertion-level contract, checked in debug builds.
    ///
    /// After any successful branch the `SET` flag is recomputed: non-empty
    /// text raises `SET` and marks the cell dirty, empty text drops the
    /// value and clears `SET`.
    pub fn merge(&mut self, src: &StrAttr, op: SetOp) -> Result<()> {
        debug_assert!(
            src.is_set() && src.value().is_some(),
            "merge source must be set and non-empty"
        );
        let text = src.value().unwrap_or("");

        match op {
            SetOp::Set => {
                self.value = Some(TextBuf::copy_of(text)?);
            }
            SetOp::Incr => match self.value.as_mut() {
                Some(existing) => existing.append(text)?,
                // No current value: Incr degrades to Set.
                None => self.value = Some(TextBuf::copy_of(text)?),
            },
            SetOp::Decr => {
                if let Some(existing) = self.value.as_mut() {
                    if !text.is_empty() {
                        strip_occurrences(existing, text)?;
                    }
                }
            }
        }
        self.recompute_set();
        trace!(%op, set = self.is_set(), "merged string attribute");
        Ok(())
    }

    /// Order this cell's text against another cell's.
    ///
    /// An absent or unset receiver yields [`AttrError::NotSet`] without
    /// looking at either value; `with` is assumed set by the caller, and an
    /// unset `with` compares as empty text. This defines strict
    /// lexicographic ordering only; no multi-valued subset semantics exist.
    pub fn compare(&self, with: &StrAttr) -> Result<Ordering> {
        match self.value() {
            Some(mine) => Ok(mine.cmp(with.value().unwrap_or(""))),
            None => Err(AttrError::NotSet),
        }
    }

    /// Release the cell's value and mark it absent.
    ///
    /// Idempotent: clearing an already-absent cell is a no-op release, but
    /// the flags are normalized either way.
    pub fn clear(&mut self) {
        self.value = None;
        self.flags.mark_unset();
    }

    /// Re-establish the flag invariant after a merge branch: `SET` iff the
    /// text is present and non-empty. Empty text drops the buffer so
    /// callers cannot observe an allocated-but-unset value.
    fn recompute_set(&mut self) {
        let non_empty = self.value.as_ref().map_or(false, |buf| !buf.is_empty());
        if non_empty {
            self.flags.mark_set();
        } else {
            self.flags.clear_set();
            self.value = None;
        }
    }
}

impl std::fmt::Display for StrAttr {
    /// Display as the value text, or `<unset>` for an absent cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "<unset>"),
        }
    }
}

/// Remove occurrences of `needle` from `buf`, scanning right to left.
///
/// One scan over the original text collects non-overlapping matches from
/// the tail backward; the surviving spans are then rebuilt into a fresh
/// buffer in a single pass. Because matching happens entirely against the
/// original text, a removal never joins its neighbors into a *new* match:
/// stripping `"ab"` from `"aabb"` yields `"ab"`, not `""`.
///
/// On allocation failure the original buffer is untouched.
fn strip_occurrences(buf: &mut TextBuf, needle: &str) -> Result<()> {
    let text = buf.as_str();
    if needle.is_empty() || needle.len() > text.len() {
        return Ok(());
    }

    let bytes = text.as_bytes();
    let nb = needle.as_bytes();
    let mut matches: Vec<usize> = Vec::new();
    let mut pos = bytes.len() - nb.len();
    loop {
        if &bytes[pos..pos + nb.len()] == nb {
            matches.push(pos);
            if pos < nb.len() {
                break;
            }
            // The next candidate must not overlap the match just taken.
            pos -= nb.len();
        } else {
            if pos == 0 {
                break;
            }
            pos -= 1;
        }
    }
    if matches.is_empty() {
        return Ok(());
    }

    let kept_len = text.len() - matches.len() * needle.len();
    let mut kept = TextBuf::with_capacity(kept_len)?;
    let mut start = 0;
    for &m in matches.iter().rev() {
        kept.append(&text[start..m])?;
        start = m + needle.len();
    }
    kept.append(&text[start..])?;
    *buf = kept;
    Ok(())
}
