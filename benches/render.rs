//! Draw-pass performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use docpane::{
    Caret, CharRange, DocumentView, PlainDocument, PointF, RectF, Rgba, ScrollRange, Selection,
    Style, Surface, TextFormat, ViewOptions,
};
use std::hint::black_box;

const CHAR_W: f32 = 8.0;
const LINE_H: f32 = 16.0;

/// Surface with fixed metrics that discards all output.
struct NullSurface;

impl Surface for NullSurface {
    fn measure(&mut self, text: &str, format: &TextFormat, ranges: &[CharRange]) -> Vec<RectF> {
        ranges
            .iter()
            .map(|range| {
                let w: f32 = text
                    .chars()
                    .skip(range.first)
                    .take(range.len)
                    .map(|c| if c == '\t' { format.tab_stop } else { CHAR_W })
                    .sum();
                RectF::new(range.first as f32 * CHAR_W, 0.0, w, LINE_H)
            })
            .collect()
    }

    fn fill_rect(&mut self, _rect: RectF, _color: Rgba) {}
    fn draw_text(&mut self, _text: &str, _format: &TextFormat, _origin: PointF) {}
    fn draw_line(&mut self, _from: PointF, _to: PointF, _color: Rgba, _width: f32) {}

    fn has_focus(&self) -> bool {
        true
    }

    fn set_scroll(&mut self, _range: ScrollRange, _h: u32, _v: usize) {}
    fn request_redraw(&mut self) {}
}

fn source_doc(rows: usize) -> PlainDocument {
    let keyword = Style::fg(Rgba::BLUE).with_bold();
    let ident = Style::fg(Rgba::BLACK);
    let comment = Style::fg(Rgba::GREEN).with_italic();

    let mut doc = PlainDocument::new();
    for i in 0..rows {
        match i % 3 {
            0 => doc.push_styled(
                "fn handler(request: Request) -> Response {",
                &[(2, keyword), (40, ident)],
            ),
            1 => doc.push_plain("\tlet body = request.body().to_owned();", ident),
            _ => doc.push_styled("\t// forwarded unchanged", &[(1, ident), (22, comment)]),
        }
    }
    doc
}

fn viewport(rows: usize) -> RectF {
    RectF::new(0.0, 0.0, 800.0, rows as f32 * LINE_H)
}

fn draw_warm_cache(c: &mut Criterion) {
    let mut view =
        DocumentView::new(source_doc(1000), ViewOptions::default()).expect("valid options");
    let mut surface = NullSurface;
    let clip = viewport(40);
    view.draw(&mut surface, clip);

    c.bench_function("draw_40_rows_warm", |b| {
        b.iter(|| view.draw(&mut surface, black_box(clip)))
    });
}

fn draw_cold_cache(c: &mut Criterion) {
    let mut view =
        DocumentView::new(source_doc(1000), ViewOptions::default()).expect("valid options");
    let mut surface = NullSurface;
    let clip = viewport(40);

    c.bench_function("draw_40_rows_cold", |b| {
        b.iter(|| {
            view.reset(&mut surface);
            view.draw(&mut surface, black_box(clip));
        })
    });
}

fn draw_with_selection(c: &mut Criterion) {
    let mut view =
        DocumentView::new(source_doc(1000), ViewOptions::default()).expect("valid options");
    view.set_caret(Caret::new(20, 5));
    view.set_selection(Some(Selection::new(Caret::new(5, 3), Caret::new(30, 10))));
    let mut surface = NullSurface;
    let clip = viewport(40);
    view.draw(&mut surface, clip);

    c.bench_function("draw_40_rows_selected", |b| {
        b.iter(|| view.draw(&mut surface, black_box(clip)))
    });
}

fn invalidate_one_row(c: &mut Criterion) {
    let mut view =
        DocumentView::new(source_doc(1000), ViewOptions::default()).expect("valid options");
    let mut surface = NullSurface;
    let clip = viewport(40);
    view.draw(&mut surface, clip);

    c.bench_function("redraw_after_row_change", |b| {
        b.iter(|| {
            view.row_changed(&mut surface, black_box(20));
            view.draw(&mut surface, clip);
        })
    });
}

criterion_group!(
    benches,
    draw_warm_cache,
    draw_cold_cache,
    draw_with_selection,
    invalidate_one_row
);
criterion_main!(benches);
