//! Shared test harness: a recording surface with fixed font metrics and
//! fixture documents.

#![allow(dead_code)] // Not every test binary uses every helper

use docpane::{
    CharRange, PlainDocument, PointF, RectF, Rgba, ScrollRange, Style, Surface, TextFormat,
};

/// Character cell width used by the fake font.
pub const CHAR_W: f32 = 8.0;
/// Line height used by the fake font.
pub const LINE_H: f32 = 16.0;

/// One recorded draw primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: RectF,
        color: Rgba,
    },
    Text {
        text: String,
        style: Style,
        tab_stop: f32,
        origin: PointF,
    },
    Line {
        from: PointF,
        to: PointF,
        color: Rgba,
        width: f32,
    },
}

/// Surface with deterministic metrics that records every call.
///
/// Every character measures `CHAR_W` wide except tabs, which take the
/// format's tab stop; every run is `LINE_H` tall.
pub struct RecordingSurface {
    pub focused: bool,
    pub ops: Vec<DrawOp>,
    pub published: Vec<(ScrollRange, u32, usize)>,
    pub redraws: usize,
    pub measure_calls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            focused: true,
            ops: Vec::new(),
            published: Vec::new(),
            redraws: 0,
            measure_calls: 0,
        }
    }

    pub fn unfocused() -> Self {
        Self {
            focused: false,
            ..Self::new()
        }
    }

    fn width_of(text: &str, range: CharRange, tab_stop: f32) -> f32 {
        text.chars()
            .skip(range.first)
            .take(range.len)
            .map(|c| if c == '\t' { tab_stop } else { CHAR_W })
            .sum()
    }

    /// Texts of all recorded `Text` ops, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All recorded `Text` ops, in draw order.
    pub fn text_ops(&self) -> Vec<(&str, Style, PointF)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    style,
                    origin,
                    ..
                } => Some((text.as_str(), *style, *origin)),
                _ => None,
            })
            .collect()
    }

    /// All recorded caret/line strokes.
    pub fn lines(&self) -> Vec<(PointF, PointF)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Background fills of the given color.
    pub fn fills_with(&self, color: Rgba) -> Vec<RectF> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Last published scroll state.
    pub fn last_published(&self) -> Option<(ScrollRange, u32, usize)> {
        self.published.last().copied()
    }

    /// Forget recorded ops (but keep published scroll states).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn measure(&mut self, text: &str, format: &TextFormat, ranges: &[CharRange]) -> Vec<RectF> {
        self.measure_calls += 1;
        ranges
            .iter()
            .map(|range| {
                let x = Self::width_of(text, CharRange::new(0, range.first), format.tab_stop);
                let w = Self::width_of(text, *range, format.tab_stop);
                RectF::new(x, 0.0, w, LINE_H)
            })
            .collect()
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn draw_text(&mut self, text: &str, format: &TextFormat, origin: PointF) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            style: format.style,
            tab_stop: format.tab_stop,
            origin,
        });
    }

    fn draw_line(&mut self, from: PointF, to: PointF, color: Rgba, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_scroll(&mut self, range: ScrollRange, h: u32, v: usize) {
        self.published.push((range, h, v));
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// A viewport `rows` lines tall and `width` pixels wide.
pub fn viewport(width: f32, rows: usize) -> RectF {
    RectF::new(0.0, 0.0, width, rows as f32 * LINE_H)
}

/// Document of `count` single-style rows: "row 0", "row 1", ...
pub fn numbered_doc(count: usize) -> PlainDocument {
    let mut doc = PlainDocument::new();
    for i in 0..count {
        doc.push_plain(format!("row {i}"), Style::NONE);
    }
    doc
}

/// Small source-like fixture with multi-run rows and a tabbed row.
pub fn code_doc() -> PlainDocument {
    let keyword = Style::fg(Rgba::BLUE).with_bold();
    let ident = Style::fg(Rgba::BLACK);
    let comment = Style::fg(Rgba::GREEN).with_italic();

    let mut doc = PlainDocument::new();
    // "fn main() {" split as keyword + rest
    doc.push_styled("fn main() {", &[(2, keyword), (9, ident)]);
    doc.push_plain("\tlet x = 1;", ident);
    doc.push_styled("\t// done", &[(1, ident), (7, comment)]);
    doc.push_plain("}", ident);
    doc
}
