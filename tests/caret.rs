//! Caret overlay behavior: placement, end-of-row clamping, boundary
//! handling, and focus gating.

mod common;

use common::{CHAR_W, LINE_H, RecordingSurface, viewport};
use docpane::{Caret, DocumentView, PlainDocument, RectF, Rgba, Selection, Style, ViewOptions};

fn single_row(text: &str) -> PlainDocument {
    let mut doc = PlainDocument::new();
    doc.push_plain(text, Style::NONE);
    doc
}

fn view_over(doc: PlainDocument) -> DocumentView<PlainDocument> {
    DocumentView::new(doc, ViewOptions::default()).expect("valid options")
}

#[test]
fn caret_draws_before_its_character() {
    let mut view = view_over(single_row("abcdef"));
    view.set_caret(Caret::new(0, 2));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    let (from, to) = lines[0];
    assert_eq!(from.x, 2.0 * CHAR_W);
    assert_eq!(from.y, 0.0);
    assert_eq!(to.x, 2.0 * CHAR_W);
    assert_eq!(to.y, LINE_H);
}

#[test]
fn caret_uses_configured_color_and_width() {
    let mut view = view_over(single_row("abc"));
    view.set_caret(Caret::new(0, 1));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    let caret = surface
        .ops
        .iter()
        .find_map(|op| match op {
            common::DrawOp::Line { color, width, .. } => Some((*color, *width)),
            _ => None,
        })
        .expect("caret stroke drawn");
    assert_eq!(caret, (Rgba::BLACK, 2.0));
}

#[test]
fn caret_past_row_end_clamps_to_last_character() {
    // Row "abcdef" (6 chars), caret at column 6: one past the end.
    let mut view = view_over(single_row("abcdef"));
    view.set_caret(Caret::new(0, 6));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    // Clamped onto 'f' at x = 5 * 8 = 40.
    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.x, 5.0 * CHAR_W);
}

#[test]
fn caret_rect_is_stored_for_the_host() {
    let mut view = view_over(single_row("abcdef"));
    view.set_caret(Caret::new(0, 6));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    assert_eq!(
        view.scroll().caret_rect(),
        RectF::new(5.0 * CHAR_W, 0.0, CHAR_W, LINE_H)
    );
}

#[test]
fn caret_on_element_boundary_lands_in_next_element() {
    // Two runs of three characters each; caret at the seam.
    let mut doc = PlainDocument::new();
    doc.push_styled(
        "abcdef",
        &[(3, Style::fg(Rgba::BLUE)), (3, Style::fg(Rgba::BLACK))],
    );
    let mut view = view_over(doc);
    view.set_caret(Caret::new(0, 3));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    // Drawn at the start of the second run, not the end of the first.
    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.x, 3.0 * CHAR_W);
}

#[test]
fn caret_clamp_applies_in_last_element_of_many() {
    let mut doc = PlainDocument::new();
    doc.push_styled(
        "abcdef",
        &[(3, Style::fg(Rgba::BLUE)), (3, Style::fg(Rgba::BLACK))],
    );
    let mut view = view_over(doc);
    view.set_caret(Caret::new(0, 99));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    // Clamped onto the final 'f' at x = 5 * 8 = 40.
    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.x, 5.0 * CHAR_W);
}

#[test]
fn caret_inside_selection_uses_selected_run() {
    let mut view = view_over(single_row("abcdefghij"));
    view.set_caret(Caret::new(0, 6));
    view.set_selection(Some(Selection::new(Caret::new(0, 4), Caret::new(0, 8))));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    // The selected sub-range starts at column 4; the caret column lands two
    // characters into it, at the same x it would have unselected.
    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.x, 6.0 * CHAR_W);
}

#[test]
fn empty_row_draws_no_caret() {
    let mut view = view_over(single_row(""));
    view.set_caret(Caret::new(0, 0));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 2));

    assert!(surface.lines().is_empty());
    assert!(surface.texts().is_empty());
}

#[test]
fn unfocused_view_hides_caret_by_default() {
    let mut view = view_over(single_row("abcdef"));
    view.set_caret(Caret::new(0, 2));
    let mut surface = RecordingSurface::unfocused();

    view.draw(&mut surface, viewport(200.0, 2));

    assert!(surface.lines().is_empty());
    // The row itself still renders.
    assert_eq!(surface.texts(), vec!["abcdef"]);
}

#[test]
fn selection_and_caret_hiding_are_independent() {
    let options = ViewOptions {
        hide_inactive_selection: false,
        hide_inactive_cursor: true,
        ..ViewOptions::default()
    };

    let mut view =
        DocumentView::new(single_row("abcdef"), options).expect("valid options");
    view.set_caret(Caret::new(0, 2));
    view.set_selection(Some(Selection::new(Caret::new(0, 1), Caret::new(0, 3))));
    let mut surface = RecordingSurface::unfocused();

    view.draw(&mut surface, viewport(200.0, 2));

    // Selection still splits the row; the caret stays hidden.
    assert_eq!(surface.texts(), vec!["a", "bc", "def"]);
    assert!(surface.lines().is_empty());
}

#[test]
fn caret_only_draws_on_its_own_row() {
    let mut doc = PlainDocument::new();
    doc.push_plain("first", Style::NONE);
    doc.push_plain("second", Style::NONE);
    doc.push_plain("third", Style::NONE);
    let mut view = view_over(doc);
    view.set_caret(Caret::new(1, 0));
    let mut surface = RecordingSurface::new();

    view.draw(&mut surface, viewport(200.0, 4));

    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0.y, LINE_H);
}
