use std::ffi::{CStr, OsStr, OsString};
use std::fmt::{self, Debug, Display, Formatter};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::slice;

use derive_more::IsVariant;

pub(crate) const DOT_DOT: &[u8] = b"..";

/// A single piece of a normalized path. Concatenating all segments of a [`Segments`] list, in
/// order, reconstructs the cleaned path.
#[derive(Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Segment<'a> {
    /// A non-empty run of bytes containing no `/`. May be the literal `..` when it couldn't be
    /// cancelled lexically.
    Literal(&'a [u8]),
    /// A single `/`.
    Separator,
}

impl<'a> Segment<'a> {
    pub const fn as_bytes(&self) -> &'a [u8] {
        match self {
            Segment::Literal(bytes) => *bytes,
            Segment::Separator => b"/",
        }
    }

    pub fn is_dot_dot(&self) -> bool {
        matches!(self, Segment::Literal(bytes) if *bytes == DOT_DOT)
    }
}

impl Debug for Segment<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(bytes) => f.debug_tuple("Literal")
                .field(&OsStr::from_bytes(bytes))
                .finish(),
            Segment::Separator => write!(f, "Separator"),
        }
    }
}

/// The working stack used during normalization. Conceptually a stack, but indexable from the top
/// so that `..` handling can look at the entry below the trailing separator.
#[derive(Debug, Default)]
pub(crate) struct SegmentStack<'a> {
    inner: Vec<Segment<'a>>,
}

impl<'a> SegmentStack<'a> {
    pub fn with_cap(cap: usize) -> SegmentStack<'a> {
        SegmentStack {
            inner: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, segment: Segment<'a>) {
        self.inner.push(segment);
    }

    pub fn push_literal(&mut self, bytes: &'a [u8]) {
        if !bytes.is_empty() {
            self.inner.push(Segment::Literal(bytes));
        }
    }

    pub fn pop(&mut self) -> Option<Segment<'a>> {
        self.inner.pop()
    }

    /// Removes the top two entries, a trailing separator and the literal it terminated.
    pub fn pop_pair(&mut self) {
        let len = self.inner.len().saturating_sub(2);
        self.inner.truncate(len);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns the entry `depth` places below the top, where a depth of 0 is the top itself.
    pub fn from_top(&self, depth: usize) -> Option<&Segment<'a>> {
        self.inner.len()
            .checked_sub(depth + 1)
            .and_then(|index| self.inner.get(index))
    }

    pub fn into_segments(self) -> Segments<'a> {
        Segments {
            inner: self.inner,
        }
    }
}

/// An ordered list of [`Segment`]s produced by [`normalize`](super::normalize).
///
/// # Invariants
/// - The list is non-empty.
/// - No two separators are adjacent.
/// - Only the first segment may be a leading separator, representing the root.
/// - The last segment is a literal other than `..`.
/// - No literal is `.`, and a `..` literal is only ever preceded by other `..` literals (or the
///   start of the path).
#[derive(Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    pub(crate) inner: Vec<Segment<'a>>,
}

impl<'a> Segments<'a> {
    pub fn iter(&self) -> slice::Iter<'_, Segment<'a>> {
        self.inner.iter()
    }

    /// The length of the cleaned path in bytes.
    pub fn byte_len(&self) -> usize {
        self.inner.iter().map(|segment| segment.as_bytes().len()).sum()
    }

    pub fn is_absolute(&self) -> bool {
        self.inner.first().is_some_and(Segment::is_separator)
    }

    /// Iterates over every cumulative prefix of this path, in the order they need to exist.
    pub fn prefixes<'s>(&'s self) -> Prefixes<'s, 'a> {
        Prefixes {
            segments: &self.inner,
            index: 0,
            buf: Vec::with_capacity(self.byte_len() + 1),
        }
    }

    /// Reconstructs the cleaned path by concatenating every segment.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.byte_len());
        for segment in self.inner.iter() {
            buf.extend_from_slice(segment.as_bytes());
        }
        buf
    }

    pub fn to_os_string(&self) -> OsString {
        OsString::from_vec(self.to_bytes())
    }
}

impl<'s, 'a> IntoIterator for &'s Segments<'a> {
    type Item = &'s Segment<'a>;
    type IntoIter = slice::Iter<'s, Segment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Segments<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl Display for Segments<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_os_string().to_string_lossy())
    }
}

/// A single cumulative prefix yielded by [`Prefixes`].
#[derive(Debug, Clone, Copy)]
pub struct Prefix<'p, 'a> {
    with_nul: &'p [u8],
    pub segment: Segment<'a>,
    pub is_last: bool,
}

impl<'p> Prefix<'p, '_> {
    /// All bytes from the start of the path up to and including this prefix's segment.
    pub fn as_bytes(&self) -> &'p [u8] {
        &self.with_nul[..self.with_nul.len() - 1]
    }

    pub fn as_c_str(&self) -> &'p CStr {
        // SAFETY: Prefixes always terminates its buffer with a single nul, and normalization
        // rejects any path containing a nul byte before its end.
        unsafe { CStr::from_bytes_with_nul_unchecked(self.with_nul) }
    }

    /// Whether this prefix names something that should exist as a directory. Separators and
    /// `..` literals in the middle of a path don't; the full path always does.
    pub fn needs_check(&self) -> bool {
        self.is_last || !(self.segment.is_separator() || self.segment.is_dot_dot())
    }
}

/// A lending iterator over the cumulative prefixes of a [`Segments`] list. Each call to
/// [`next`](Prefixes::next) appends one more segment to an internal, nul-terminated buffer, which
/// is reused for the whole walk.
pub struct Prefixes<'s, 'a> {
    segments: &'s [Segment<'a>],
    index: usize,
    buf: Vec<u8>,
}

impl<'s, 'a> Prefixes<'s, 'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Prefix<'_, 'a>> {
        let segment = *self.segments.get(self.index)?;
        self.index += 1;

        self.buf.pop();
        self.buf.extend_from_slice(segment.as_bytes());
        self.buf.push(b'\0');

        Some(Prefix {
            with_nul: &self.buf,
            segment,
            is_last: self.index == self.segments.len(),
        })
    }
}
