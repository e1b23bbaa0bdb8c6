//! Caret and selection representation.

/// A caret or selection as a range of character offsets.
///
/// The range is always normalized such that `start <= end`. A collapsed range
/// (`start == end`) is a plain caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Start offset of the selection (inclusive).
    pub start: usize,
    /// End offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalizing so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width range at `at`.
    #[inline]
    pub fn collapsed(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns `true` if the range is a bare caret.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends into `[0, len]`.
    #[inline]
    pub fn clamp_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

impl std::fmt::Display for SelectionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
