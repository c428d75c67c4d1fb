//! Document capability interface and row data model.
//!
//! The engine never owns document content. It pulls rows and pre-computed
//! style runs through the narrow [`Document`] trait, so any concrete
//! document/style implementation can be substituted without touching the
//! rendering core. [`PlainDocument`] is a vec-backed implementation used by
//! tests, benches, and simple hosts.

use crate::range::CharRange;
use crate::style::Style;

/// One logical line of the viewed document, addressed by index.
///
/// Treated as immutable while the corresponding cached row view is clean.
/// Offsets and lengths are in characters (Unicode scalar values).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRow {
    /// Row index within the document.
    pub index: usize,
    /// Raw row text, without a trailing line break.
    pub text: String,
}

impl DocumentRow {
    /// Create a new row.
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Row length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Extract the substring covered by a character range.
    ///
    /// Ranges reaching past the end of the row are truncated.
    #[must_use]
    pub fn substring(&self, range: CharRange) -> String {
        range.substring_of(&self.text)
    }
}

/// A contiguous sub-range of row text carrying one resolved visual style.
///
/// Produced externally; for any row the elements are ordered, gap-free, and
/// non-overlapping, and together cover the row's full length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StylizedRowElement {
    /// Row-absolute character range.
    pub range: CharRange,
    /// Resolved style for the range.
    pub style: Style,
}

impl StylizedRowElement {
    /// Create a new element.
    #[must_use]
    pub const fn new(range: CharRange, style: Style) -> Self {
        Self { range, style }
    }
}

/// Read-only document capability consumed by the rendering core.
///
/// Row-change notifications do not go through this trait; the host forwards
/// them to [`DocumentView::row_changed`](crate::DocumentView::row_changed).
pub trait Document {
    /// Total number of rows.
    fn row_count(&self) -> usize;

    /// Fetch a row, or `None` past the end of the document.
    ///
    /// `None` is the normal end-of-document signal, not an error.
    fn row(&self, index: usize) -> Option<DocumentRow>;

    /// Pre-computed style runs for a row.
    ///
    /// Returns an empty sequence for indices past the end of the document.
    fn stylized_row(&self, index: usize) -> Vec<StylizedRowElement>;
}

#[derive(Clone, Debug)]
struct PlainRow {
    text: String,
    runs: Vec<StylizedRowElement>,
}

/// Vec-backed [`Document`] with per-row style runs.
///
/// Rows are appended with [`push_plain`](Self::push_plain) (one run covering
/// the row) or [`push_styled`](Self::push_styled) (run lengths, converted to
/// contiguous ranges so the gap-free contract holds by construction).
#[derive(Clone, Debug, Default)]
pub struct PlainDocument {
    rows: Vec<PlainRow>,
}

impl PlainDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row rendered entirely in one style.
    pub fn push_plain(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        let len = text.chars().count();
        let runs = vec![StylizedRowElement::new(CharRange::new(0, len), style)];
        self.rows.push(PlainRow { text, runs });
    }

    /// Append a row split into consecutive runs of the given lengths.
    ///
    /// Run lengths must sum to the row's character length.
    pub fn push_styled(&mut self, text: impl Into<String>, runs: &[(usize, Style)]) {
        let text = text.into();
        let total: usize = runs.iter().map(|(len, _)| len).sum();
        debug_assert_eq!(total, text.chars().count(), "runs must cover the row");

        let mut first = 0;
        let mut elements = Vec::with_capacity(runs.len());
        for &(len, style) in runs {
            elements.push(StylizedRowElement::new(CharRange::new(first, len), style));
            first += len;
        }
        self.rows.push(PlainRow {
            text,
            runs: elements,
        });
    }

    /// Replace a row's text, keeping a single run in the given style.
    ///
    /// No-op for indices past the end. The caller is responsible for
    /// invalidating any cached row view afterwards.
    pub fn replace_plain(&mut self, index: usize, text: impl Into<String>, style: Style) {
        if let Some(row) = self.rows.get_mut(index) {
            row.text = text.into();
            let len = row.text.chars().count();
            row.runs = vec![StylizedRowElement::new(CharRange::new(0, len), style)];
        }
    }
}

impl Document for PlainDocument {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<DocumentRow> {
        self.rows
            .get(index)
            .map(|row| DocumentRow::new(index, row.text.clone()))
    }

    fn stylized_row(&self, index: usize) -> Vec<StylizedRowElement> {
        self.rows.get(index).map_or_else(Vec::new, |row| row.runs.clone())
    }
}
