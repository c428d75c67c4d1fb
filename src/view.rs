//! Document view: the draw-pass orchestrator.
//!
//! [`DocumentView`] walks the visible rows starting at the scroll
//! coordinator's first row, lazily creating and re-measuring cached row
//! views, drawing each row's style runs split around the selection, and
//! overlaying the caret on its row. After the pass it records the last
//! fully visible row and republishes the scroll range.
//!
//! The view is read-only: it never mutates document content, only its own
//! layout cache and scroll state.

use crate::cache::{RowView, RowViewCache};
use crate::document::Document;
use crate::geometry::{PointF, RectF, SizeF};
use crate::layout::LayoutContext;
use crate::options::ViewOptions;
use crate::range::CharRange;
use crate::scroll::ScrollCoordinator;
use crate::style::Style;
use crate::surface::Surface;
use crate::trace::{NoopTrace, PaintTrace};

/// Insertion-point indicator: (row index, character offset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Caret {
    /// Row index.
    pub row: usize,
    /// Character offset within the row.
    pub column: usize,
}

impl Caret {
    /// Create a new caret position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A possibly multi-row selection between two caret positions.
///
/// Anchor and focus are unordered; rendering works on the normalized form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Caret,
    pub focus: Caret,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(anchor: Caret, focus: Caret) -> Self {
        Self { anchor, focus }
    }

    /// Check if the selection is collapsed to a point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.focus
    }

    /// Get (start, end) with start ≤ end.
    #[must_use]
    pub fn normalized(&self) -> (Caret, Caret) {
        if self.anchor <= self.focus {
            (self.anchor, self.focus)
        } else {
            (self.focus, self.anchor)
        }
    }

    /// The portion of the selection visible within one row, clipped to the
    /// row's span. Empty when the row lies outside the selection.
    #[must_use]
    pub fn row_range(&self, row: usize, row_len: usize) -> CharRange {
        if self.is_empty() {
            return CharRange::EMPTY;
        }

        let (start, end) = self.normalized();
        if row < start.row || row > end.row {
            return CharRange::EMPTY;
        }

        let from = if row == start.row {
            start.column.min(row_len)
        } else {
            0
        };
        let to = if row == end.row {
            end.column.min(row_len)
        } else {
            row_len
        };

        if to > from {
            CharRange::new(from, to - from)
        } else {
            CharRange::EMPTY
        }
    }
}

/// Virtualized, read-only renderer for a [`Document`].
pub struct DocumentView<D: Document> {
    document: D,
    options: ViewOptions,
    cache: RowViewCache,
    scroll: ScrollCoordinator,
    caret: Caret,
    selection: Option<Selection>,
    trace: Box<dyn PaintTrace>,
}

impl<D: Document> DocumentView<D> {
    /// Create a view over a document with validated options.
    pub fn new(document: D, options: ViewOptions) -> crate::Result<Self> {
        options.validate()?;
        Ok(Self {
            document,
            cache: RowViewCache::new(),
            scroll: ScrollCoordinator::new(options.granularity),
            caret: Caret::default(),
            selection: None,
            trace: Box::new(NoopTrace),
            options,
        })
    }

    /// Replace the paint trace hook.
    pub fn set_trace(&mut self, trace: Box<dyn PaintTrace>) {
        self.trace = trace;
    }

    /// The viewed document.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the viewed document.
    ///
    /// After changing row content, notify the view through
    /// [`row_changed`](Self::row_changed) (or [`reset`](Self::reset) for
    /// structural changes) so the cached layout is re-measured.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// View configuration.
    #[must_use]
    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Scroll state (first/last row, offsets, caret rectangle).
    #[must_use]
    pub fn scroll(&self) -> &ScrollCoordinator {
        &self.scroll
    }

    /// Layout cache, exposed for inspection.
    #[must_use]
    pub fn cache(&self) -> &RowViewCache {
        &self.cache
    }

    /// Current caret position.
    #[must_use]
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Move the caret. The host repaints on its own schedule.
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = caret;
    }

    /// Current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Replace the selection. The host repaints on its own schedule.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    /// React to a row-changed notification from the document.
    ///
    /// Marks the cached view dirty (no-op when the row was never drawn)
    /// and asks the host for a repaint; re-measurement happens lazily on
    /// the next draw.
    pub fn row_changed<S: Surface + ?Sized>(&mut self, surface: &mut S, index: usize) {
        self.cache.invalidate(index);
        surface.request_redraw();
    }

    /// React to a structural document change.
    ///
    /// Discards every cached row view, resets scroll state, publishes an
    /// empty scroll range, and asks for a repaint.
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.cache.clear();
        self.scroll.clear(surface);
        surface.request_redraw();
    }

    /// React to a host-driven scroll notification.
    pub fn scrolled<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        h: u32,
        v: usize,
        viewport_width: f32,
    ) {
        self.scroll
            .set_scroll(surface, h, v, viewport_width, self.document.row_count());
        surface.request_redraw();
    }

    /// Scroll so `row` becomes the first visible row and republish.
    pub fn scroll_to_row<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        row: usize,
        viewport_width: f32,
    ) {
        self.scroll
            .set_first_row(surface, row, viewport_width, self.document.row_count());
        surface.request_redraw();
    }

    /// Run one draw pass over the viewport rectangle.
    ///
    /// Walks rows from the first visible one, stopping at end-of-document
    /// or once the viewport height is filled, then records the last fully
    /// visible row and republishes the scroll range.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, clip: RectF) {
        surface.fill_rect(clip, self.options.background);
        self.trace.begin_paint(clip);

        let mut ctx = LayoutContext::new(self.options.tab_size);
        let focus = surface.has_focus();
        let hide_selection = self.options.hide_inactive_selection && !focus;
        let hide_caret = self.options.hide_inactive_cursor && !focus;

        let mut y = 0.0;
        let mut row = self.scroll.first_row();

        while y < clip.height {
            if self.cache.get(row).is_none() {
                match RowView::create(&self.document, row) {
                    Some(view) => {
                        self.trace.row_view_created(row);
                        self.cache.insert(row, view);
                    }
                    // End of document, not an error.
                    None => break,
                }
            }

            let stack_top = self.cache.stack_top(row);
            if let Some(view) = self.cache.get_mut(row) {
                if view.dirty {
                    ctx.populate(surface, &self.document, view, stack_top);
                }
            }

            let Some(view) = self.cache.get(row) else {
                break;
            };

            let selection_range = if hide_selection {
                CharRange::EMPTY
            } else {
                self.selection
                    .map_or(CharRange::EMPTY, |s| s.row_range(row, view.row.len_chars()))
            };

            let origin = -self.scroll.left_offset();
            if !hide_caret && row == self.caret.row {
                Self::render_caret_row(
                    &mut self.scroll,
                    &mut ctx,
                    surface,
                    &self.options,
                    view,
                    origin,
                    y,
                    self.caret.column,
                    selection_range,
                );
            } else {
                Self::render_row(
                    &mut self.scroll,
                    &mut ctx,
                    surface,
                    &self.options,
                    view,
                    origin,
                    y,
                    selection_range,
                );
            }

            y += view.bounds.height;
            if y < clip.height {
                row += 1;
            } else {
                break;
            }
        }

        // `row` is either the partially clipped row or the first missing
        // one; the row before it is the last fully visible.
        self.scroll.set_last_row(row.saturating_sub(1));
        self.scroll
            .update_scroll(surface, clip.width, self.document.row_count());

        self.trace.end_paint();
    }

    /// Draw one row without a caret overlay.
    #[allow(clippy::too_many_arguments)]
    fn render_row<S: Surface + ?Sized>(
        scroll: &mut ScrollCoordinator,
        ctx: &mut LayoutContext,
        surface: &mut S,
        options: &ViewOptions,
        view: &RowView,
        mut offset: f32,
        y: f32,
        selection: CharRange,
    ) {
        for (element, part_text) in view.elements.iter().zip(&view.part_texts) {
            let trio = element
                .range
                .split_around(selection)
                .rebased(element.range.first);

            for (range, selected) in trio.parts() {
                if range.is_empty() {
                    continue;
                }
                let style = if selected {
                    element.style.merge(options.selection_style)
                } else {
                    element.style
                };
                offset += Self::draw_part(ctx, surface, part_text, range, style, offset, y).width;
            }
        }
        scroll.observe_line_width(offset);
    }

    /// Draw one row with the caret overlaid.
    ///
    /// A remaining-offset counter starts at the caret column and is
    /// consumed by each sub-range left to right; the caret draws inside
    /// the sub-range the counter lands in. A caret at or past the row
    /// length clamps to the last element's final character, and a caret
    /// precisely on a sub-range boundary renders at the start of the
    /// following sub-range.
    #[allow(clippy::too_many_arguments)]
    fn render_caret_row<S: Surface + ?Sized>(
        scroll: &mut ScrollCoordinator,
        ctx: &mut LayoutContext,
        surface: &mut S,
        options: &ViewOptions,
        view: &RowView,
        mut offset: f32,
        y: f32,
        caret_column: usize,
        selection: CharRange,
    ) {
        let mut remaining = caret_column as isize;
        let last = view.elements.len().saturating_sub(1);

        for (i, (element, part_text)) in view.elements.iter().zip(&view.part_texts).enumerate() {
            if i == last && remaining >= element.range.len as isize {
                remaining = element.range.len as isize - 1;
            }

            let element_origin = offset;
            let trio = element
                .range
                .split_around(selection)
                .rebased(element.range.first);

            for (range, selected) in trio.parts() {
                if range.is_empty() {
                    continue;
                }
                let style = if selected {
                    element.style.merge(options.selection_style)
                } else {
                    element.style
                };

                let size = Self::draw_part(ctx, surface, part_text, range, style, offset, y);

                if remaining >= 0 && (remaining as usize) < range.len {
                    let caret_char = CharRange::new(range.first + remaining as usize, 1);
                    let rect = ctx
                        .measure_part(surface, part_text, style, caret_char)
                        .translated(element_origin, y);
                    scroll.set_caret_rect(rect);
                    surface.draw_line(
                        PointF::new(rect.x, rect.y),
                        PointF::new(rect.x, rect.bottom()),
                        options.caret_color,
                        options.caret_width,
                    );
                }

                remaining -= range.len as isize;
                offset += size.width;
            }
        }
        scroll.observe_line_width(offset);
    }

    /// Draw one sub-range of an element: background fill, then the text
    /// run. Returns the measured size, which advances the horizontal
    /// accumulator.
    fn draw_part<S: Surface + ?Sized>(
        ctx: &mut LayoutContext,
        surface: &mut S,
        text: &str,
        range: CharRange,
        style: Style,
        offset: f32,
        y: f32,
    ) -> SizeF {
        let part = range.substring_of(text);
        ctx.update_tab_stop(surface, &part, style);

        let rect = ctx.measure_part(surface, text, style, range);

        if let Some(bg) = style.bg {
            if !bg.is_transparent() {
                surface.fill_rect(RectF::new(offset, y, rect.width, rect.height), bg);
            }
        }
        surface.draw_text(&part, &ctx.format(style), PointF::new(offset, y));

        rect.size()
    }
}
