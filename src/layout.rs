//! Row measurement and the per-pass layout context.
//!
//! [`LayoutContext`] owns the shared tab-stop width for a draw pass. The
//! tab stop is a single value, not per-element: whenever a part about to be
//! measured or drawn contains a tab character, the stop is recomputed as
//! the width of `tab_size` spaces in that part's style, and every
//! subsequent call shares the result until another tabbed part triggers a
//! recompute. Keeping it on the context (rather than ambient state on the
//! surface) makes the coupling between parts explicit.

use crate::cache::RowView;
use crate::document::Document;
use crate::geometry::{RectF, SizeF};
use crate::range::CharRange;
use crate::style::Style;
use crate::surface::{Surface, TextFormat};

/// Per-draw-pass measurement state.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext {
    tab_size: u8,
    tab_stop: f32,
}

impl LayoutContext {
    /// Create a context for the given tab size (in space characters).
    #[must_use]
    pub fn new(tab_size: u8) -> Self {
        Self {
            tab_size,
            tab_stop: 0.0,
        }
    }

    /// Current shared tab-stop width in pixels.
    #[must_use]
    pub fn tab_stop(&self) -> f32 {
        self.tab_stop
    }

    /// Build the text format for a style under the current tab stop.
    #[must_use]
    pub fn format(&self, style: Style) -> TextFormat {
        TextFormat::new(style, self.tab_stop)
    }

    /// Recompute the shared tab stop if `part` contains a tab character.
    ///
    /// The stop becomes the width of `tab_size` spaces measured in `style`;
    /// it reflects whichever style most recently triggered a recompute.
    pub fn update_tab_stop<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        part: &str,
        style: Style,
    ) {
        if !part.contains('\t') {
            return;
        }

        let spaces = " ".repeat(usize::from(self.tab_size));
        let range = CharRange::new(0, usize::from(self.tab_size));
        let format = TextFormat::new(style, self.tab_stop);
        let rects = surface.measure(&spaces, &format, &[range]);
        self.tab_stop = rects.first().map_or(0.0, |rect| rect.width);
    }

    /// Measure one character range of `text` in the given style.
    ///
    /// A zero-length range short-circuits to the empty rectangle without
    /// invoking the host measurer, which is known to degenerate on empty
    /// input.
    pub fn measure_part<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: &str,
        style: Style,
        range: CharRange,
    ) -> RectF {
        if range.is_empty() {
            return RectF::EMPTY;
        }
        let format = self.format(style);
        surface
            .measure(text, &format, &[range])
            .first()
            .copied()
            .unwrap_or(RectF::EMPTY)
    }

    /// Measure a dirty row view and mark it clean.
    ///
    /// Refetches the row text and its style runs, measures each element's
    /// own sub-range of the row text, records the extracted substring and
    /// size per element, and sets the view bounds: width is the sum of part
    /// widths, height the maximum part height, and the top edge is
    /// `stack_top` so consecutive rows stack with no gap or overlap.
    pub fn populate<S, D>(
        &mut self,
        surface: &mut S,
        document: &D,
        view: &mut RowView,
        stack_top: f32,
    ) where
        S: Surface + ?Sized,
        D: Document + ?Sized,
    {
        // The row snapshot predates the invalidation that made the view
        // dirty; the document is the source of truth.
        if let Some(row) = document.row(view.row.index) {
            view.row = row;
        }
        let elements = document.stylized_row(view.row.index);

        let mut sum = SizeF::EMPTY;
        let mut part_texts = Vec::with_capacity(elements.len());
        let mut part_sizes = Vec::with_capacity(elements.len());

        for element in &elements {
            let part = view.row.substring(element.range);
            self.update_tab_stop(surface, &part, element.style);

            let size = self
                .measure_part(surface, &view.row.text, element.style, element.range)
                .size();
            sum.width += size.width;
            if sum.height < size.height {
                sum.height = size.height;
            }

            part_texts.push(part);
            part_sizes.push(size);
        }

        view.elements = elements;
        view.part_texts = part_texts;
        view.part_sizes = part_sizes;
        view.bounds = RectF::new(0.0, stack_top, sum.width, sum.height);
        view.dirty = false;
    }
}
