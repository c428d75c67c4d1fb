//! Character ranges and selection intersection.
//!
//! Row text is addressed by character offsets (Unicode scalar values).
//! [`CharRange::split_around`] is the selection intersector: it carves an
//! element's range into the sub-ranges lying before, inside, and after the
//! active selection so the renderer can restyle just the selected span.

/// A contiguous character range: `(first, len)`.
///
/// Length 0 is the empty/no-op case; an empty range never draws or measures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharRange {
    pub first: usize,
    pub len: usize,
}

impl CharRange {
    /// The empty range at offset 0.
    pub const EMPTY: Self = Self { first: 0, len: 0 };

    /// Create a new range.
    #[must_use]
    pub const fn new(first: usize, len: usize) -> Self {
        Self { first, len }
    }

    /// One-past-the-end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.first + self.len
    }

    /// Check whether the range is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximal overlap of two ranges, or the empty range when disjoint.
    #[must_use]
    pub fn intersect(&self, other: Self) -> Self {
        let start = self.first.max(other.first);
        let end = self.end().min(other.end());
        if end > start {
            Self::new(start, end - start)
        } else {
            Self::EMPTY
        }
    }

    /// Return the range re-based relative to `origin`.
    ///
    /// Empty ranges stay empty; non-empty ranges must start at or after
    /// `origin`.
    #[must_use]
    pub fn rebased(&self, origin: usize) -> Self {
        if self.is_empty() {
            Self::EMPTY
        } else {
            Self::new(self.first - origin, self.len)
        }
    }

    /// Extract the substring of `text` covered by this range.
    ///
    /// Offsets are in characters; ranges reaching past the end of `text`
    /// are truncated.
    #[must_use]
    pub fn substring_of(&self, text: &str) -> String {
        text.chars().skip(self.first).take(self.len).collect()
    }

    /// Split this range against a selection range on the same row.
    ///
    /// When the selection is empty or wholly before/after this range, the
    /// whole range lands in `before` and the other two are empty. Otherwise
    /// the result is (prefix, maximal overlap, suffix); prefix and suffix
    /// may be empty but the overlap is non-empty. The three lengths always
    /// sum to `self.len`, and the operation is idempotent.
    ///
    /// Offsets in the result are row-absolute; use [`RangeTrio::rebased`]
    /// before addressing an element's extracted substring.
    #[must_use]
    pub fn split_around(&self, selection: Self) -> RangeTrio {
        let mut trio = RangeTrio::default();

        if selection.is_empty() || self.first >= selection.end() || self.end() <= selection.first {
            trio.before = *self;
            return trio;
        }

        if self.first < selection.first {
            trio.before = Self::new(self.first, selection.first - self.first);
        }

        trio.inside = self.intersect(selection);

        if !trio.inside.is_empty() && trio.inside.end() < self.end() {
            trio.after = Self::new(trio.inside.end(), self.end() - trio.inside.end());
        }

        trio
    }
}

/// The three sub-ranges produced by intersecting an element with a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeTrio {
    /// Portion before the selection (or the whole element when disjoint).
    pub before: CharRange,
    /// Portion covered by the selection.
    pub inside: CharRange,
    /// Portion after the selection.
    pub after: CharRange,
}

impl RangeTrio {
    /// Re-base all three sub-ranges relative to `origin`.
    #[must_use]
    pub fn rebased(&self, origin: usize) -> Self {
        Self {
            before: self.before.rebased(origin),
            inside: self.inside.rebased(origin),
            after: self.after.rebased(origin),
        }
    }

    /// The sub-ranges in draw order, paired with their selection flag.
    #[must_use]
    pub fn parts(&self) -> [(CharRange, bool); 3] {
        [
            (self.before, false),
            (self.inside, true),
            (self.after, false),
        ]
    }

    /// Sum of the three lengths.
    #[must_use]
    pub const fn total_len(&self) -> usize {
        self.before.len + self.inside.len + self.after.len
    }
}
