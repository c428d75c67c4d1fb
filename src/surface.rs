//! Host surface capability interface.
//!
//! The engine draws by delegating to whatever windowing or graphics layer
//! hosts it. [`Surface`] is the narrow seam for that: text measurement,
//! three draw primitives, a focus query, scroll-range publication, and
//! redraw requests. Every call is synchronous; a failing host primitive is
//! a collaborator-contract violation, not something the engine retries.

use crate::color::Rgba;
use crate::geometry::{PointF, RectF};
use crate::range::CharRange;
use crate::style::Style;

/// Parameters for one text measurement or draw call.
///
/// The tab stop is the pixel width assigned to a single `'\t'` character;
/// the layout context recomputes it per draw pass (see
/// [`LayoutContext`](crate::LayoutContext)) and threads it through here so
/// measurement and drawing agree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextFormat {
    /// Resolved style for the run.
    pub style: Style,
    /// Pixel width of one tab character.
    pub tab_stop: f32,
}

impl TextFormat {
    /// Create a new format.
    #[must_use]
    pub const fn new(style: Style, tab_stop: f32) -> Self {
        Self { style, tab_stop }
    }
}

/// Scroll range published to the host scrollbar.
///
/// Width is in quantized horizontal scroll units, height in document rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollRange {
    /// Horizontal extent in scroll units.
    pub width: u32,
    /// Vertical extent in rows.
    pub height: usize,
}

impl ScrollRange {
    /// The empty range.
    pub const EMPTY: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new range.
    #[must_use]
    pub const fn new(width: u32, height: usize) -> Self {
        Self { width, height }
    }
}

/// Host surface consumed by the rendering core.
///
/// Inverse user-scroll input arrives through
/// [`DocumentView::scrolled`](crate::DocumentView::scrolled), not through
/// this trait.
pub trait Surface {
    /// Measure sub-ranges of `text`, one rectangle per requested range.
    ///
    /// Rectangles are positioned relative to the start of `text`. The
    /// engine never calls this with an empty range list.
    fn measure(&mut self, text: &str, format: &TextFormat, ranges: &[CharRange]) -> Vec<RectF>;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: RectF, color: Rgba);

    /// Draw a text run with its origin at `origin` (top-left).
    fn draw_text(&mut self, text: &str, format: &TextFormat, origin: PointF);

    /// Draw a straight line of the given stroke width.
    fn draw_line(&mut self, from: PointF, to: PointF, color: Rgba, width: f32);

    /// Whether the view currently has input focus.
    fn has_focus(&self) -> bool;

    /// Publish the scroll range and thumb positions to the host scrollbar.
    fn set_scroll(&mut self, range: ScrollRange, h_pos: u32, v_pos: usize);

    /// Ask the host to schedule a repaint.
    fn request_redraw(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_range_empty() {
        assert_eq!(ScrollRange::EMPTY, ScrollRange::new(0, 0));
    }

    #[test]
    fn test_text_format_carries_tab_stop() {
        let fmt = TextFormat::new(Style::NONE, 32.0);
        assert_eq!(fmt.tab_stop, 32.0);
        assert_eq!(fmt.style, Style::NONE);
    }
}
