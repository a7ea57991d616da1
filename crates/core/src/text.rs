//! Owned text buffer with fallible allocation
//!
//! [`TextBuf`] is the storage behind every string-valued attribute cell. It
//! replaces raw allocate/copy/reallocate/free sequences with a small set of
//! mutation methods that reserve capacity *before* touching the contents, so
//! an allocation failure surfaces as [`AttrError::System`] and never leaves
//! a half-written value behind.

use std::ops::Range;

use crate::error::{AttrError, Result};

/// Owned, growable text storage for one attribute value.
///
/// All mutation goes through [`assign`], [`append`] and [`remove_range`];
/// each either completes fully or fails with the buffer unchanged.
///
/// [`assign`]: TextBuf::assign
/// [`append`]: TextBuf::append
/// [`remove_range`]: TextBuf::remove_range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuf(String);

impl TextBuf {
    /// An empty buffer. Does not allocate.
    pub fn new() -> Self {
        TextBuf(String::new())
    }

    /// An empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut inner = String::new();
        inner.try_reserve_exact(capacity)?;
        Ok(TextBuf(inner))
    }

    /// A buffer holding a copy of `text`.
    pub fn copy_of(text: &str) -> Result<Self> {
        let mut buf = TextBuf::with_capacity(text.len())?;
        buf.0.push_str(text);
        Ok(buf)
    }

    /// Replace the contents with a copy of `text`.
    ///
    /// The existing contents are only dropped once the needed capacity is
    /// secured, so on failure the buffer still holds its previous value.
    pub fn assign(&mut self, text: &str) -> Result<()> {
        if text.len() > self.0.capacity() {
            self.0.try_reserve(text.len() - self.0.len())?;
        }
        self.0.clear();
        self.0.push_str(text);
        Ok(())
    }

    /// Append a copy of `text` to the end of the buffer.
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.0.try_reserve(text.len())?;
        self.0.push_str(text);
        Ok(())
    }

    /// Remove the byte range `range`, shifting the tail left in place.
    ///
    /// The range must lie within the buffer and fall on character
    /// boundaries; violating either is a programmer error reported as
    /// [`AttrError::Internal`] with the buffer unchanged.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<()> {
        if range.start > range.end
            || range.end > self.0.len()
            || !self.0.is_char_boundary(range.start)
            || !self.0.is_char_boundary(range.end)
        {
            return Err(AttrError::Internal(format!(
                "invalid removal range {}..{} for buffer of length {}",
                range.start,
                range.end,
                self.0.len()
            )));
        }
        self.0.drain(range);
        Ok(())
    }

    /// The buffered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the buffered text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the buffer, handing its storage over without copying.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TextBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TextBuf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
