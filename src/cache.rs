//! Per-row layout cache.
//!
//! Row views are created lazily on first draw and re-measured lazily after
//! invalidation. The cache itself never evicts; bulk clearing on structural
//! document change is the caller's responsibility. Row indices are
//! contiguous integers, so the cache is a dense `Vec<Option<_>>` rather
//! than a hash map.

use crate::document::{Document, DocumentRow, StylizedRowElement};
use crate::geometry::{RectF, SizeF};

/// Cached layout for one row.
///
/// The element, substring, and size arrays are parallel. A view starts
/// dirty and stays dirty until measured at least once after creation or
/// invalidation; `bounds` is only meaningful while clean.
#[derive(Clone, Debug)]
pub struct RowView {
    /// The document row this view was created for.
    pub row: DocumentRow,
    /// Style runs, fetched at measure time.
    pub elements: Vec<StylizedRowElement>,
    /// Extracted substring per element.
    pub part_texts: Vec<String>,
    /// Measured size per element.
    pub part_sizes: Vec<SizeF>,
    /// Cumulative bounding rectangle; rows stack with no gap or overlap.
    pub bounds: RectF,
    /// Whether the view needs (re-)measurement.
    pub dirty: bool,
}

impl RowView {
    /// Create an unmeasured view for a row.
    #[must_use]
    pub fn new(row: DocumentRow) -> Self {
        Self {
            row,
            elements: Vec::new(),
            part_texts: Vec::new(),
            part_sizes: Vec::new(),
            bounds: RectF::EMPTY,
            dirty: true,
        }
    }

    /// Create a view for the row at `index`.
    ///
    /// `None` means the document has no such row: the normal
    /// end-of-document signal, not an error.
    #[must_use]
    pub fn create<D: Document + ?Sized>(document: &D, index: usize) -> Option<Self> {
        document.row(index).map(Self::new)
    }
}

/// Dense row-index-keyed cache of [`RowView`] records.
#[derive(Debug, Default)]
pub struct RowViewCache {
    views: Vec<Option<RowView>>,
}

impl RowViewCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached view for a row, or `None` if never created.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RowView> {
        self.views.get(index).and_then(Option::as_ref)
    }

    /// Mutable access to the cached view for a row.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut RowView> {
        self.views.get_mut(index).and_then(Option::as_mut)
    }

    /// Store a view for a row, growing the index space as needed.
    pub fn insert(&mut self, index: usize, view: RowView) {
        if index >= self.views.len() {
            self.views.resize_with(index + 1, || None);
        }
        self.views[index] = Some(view);
    }

    /// Mark a cached view dirty; no-op when the row was never created.
    pub fn invalidate(&mut self, index: usize) {
        if let Some(view) = self.get_mut(index) {
            view.dirty = true;
        }
    }

    /// Discard every cached view (structural document change).
    pub fn clear(&mut self) {
        self.views.clear();
    }

    /// Number of row slots currently held (including never-created gaps).
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Bottom edge of the row above `index`, or 0 for the first row and for
    /// rows whose predecessor was never measured.
    #[must_use]
    pub fn stack_top(&self, index: usize) -> f32 {
        if index == 0 {
            return 0.0;
        }
        self.get(index - 1).map_or(0.0, |view| view.bounds.bottom())
    }
}
