//! `demo_view` — docpane demonstration binary
//!
//! Renders a small styled document through a text-based [`Surface`] that
//! prints every draw call, so the draw pass can be inspected without a
//! graphical host.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo_view
//! cargo run --bin demo_view -- --rows 6 --scroll 2
//! ```

use docpane::{
    Caret, CharRange, DocumentView, PlainDocument, PointF, RectF, Rgba, ScrollRange, Selection,
    Style, Surface, TextFormat, ViewOptions,
};
use std::ffi::OsString;

const HELP_TEXT: &str = "demo_view - docpane demonstration binary

USAGE:
    demo_view [OPTIONS]

OPTIONS:
    -h, --help          Print this help message and exit
    --rows <N>          Viewport height in rows (default: 8)
    --scroll <N>        First visible row (default: 0)
    --no-selection      Skip the selection overlay
";

const CHAR_W: f32 = 8.0;
const LINE_H: f32 = 16.0;

struct DemoArgs {
    rows: usize,
    scroll: usize,
    selection: bool,
}

impl DemoArgs {
    fn parse(args: impl Iterator<Item = OsString>) -> Result<Self, String> {
        let mut parsed = Self {
            rows: 8,
            scroll: 0,
            selection: true,
        };

        let mut args = args.map(|a| a.to_string_lossy().into_owned());
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    print!("{HELP_TEXT}");
                    std::process::exit(0);
                }
                "--rows" => parsed.rows = take_number(&mut args, "--rows")?,
                "--scroll" => parsed.scroll = take_number(&mut args, "--scroll")?,
                "--no-selection" => parsed.selection = false,
                other => return Err(format!("unknown option: {other}")),
            }
        }
        Ok(parsed)
    }
}

fn take_number(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<usize, String> {
    let value = args.next().ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag}: not a number: {value}"))
}

/// Surface that narrates every draw call on stdout.
struct ConsoleSurface;

impl ConsoleSurface {
    fn describe(color: Rgba) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8
        )
    }
}

impl Surface for ConsoleSurface {
    fn measure(&mut self, text: &str, format: &TextFormat, ranges: &[CharRange]) -> Vec<RectF> {
        ranges
            .iter()
            .map(|range| {
                let before: f32 = text
                    .chars()
                    .take(range.first)
                    .map(|c| if c == '\t' { format.tab_stop } else { CHAR_W })
                    .sum();
                let width: f32 = text
                    .chars()
                    .skip(range.first)
                    .take(range.len)
                    .map(|c| if c == '\t' { format.tab_stop } else { CHAR_W })
                    .sum();
                RectF::new(before, 0.0, width, LINE_H)
            })
            .collect()
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) {
        println!(
            "fill   {:>4}x{:<4} at ({:>5}, {:>5})  {}",
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            Self::describe(color)
        );
    }

    fn draw_text(&mut self, text: &str, format: &TextFormat, origin: PointF) {
        let fg = format
            .style
            .fg
            .map_or_else(|| "default".to_owned(), Self::describe);
        println!(
            "text   ({:>5}, {:>5})  fg {}  {:?}",
            origin.x, origin.y, fg, text
        );
    }

    fn draw_line(&mut self, from: PointF, to: PointF, color: Rgba, width: f32) {
        println!(
            "caret  ({:>5}, {:>5}) -> ({:>5}, {:>5})  {} w{}",
            from.x,
            from.y,
            to.x,
            to.y,
            Self::describe(color),
            width
        );
    }

    fn has_focus(&self) -> bool {
        true
    }

    fn set_scroll(&mut self, range: ScrollRange, h: u32, v: usize) {
        println!(
            "scroll range {}x{} at h={h} v={v}",
            range.width, range.height
        );
    }

    fn request_redraw(&mut self) {
        println!("redraw requested");
    }
}

fn sample_document() -> PlainDocument {
    let keyword = Style::fg(Rgba::BLUE).with_bold();
    let ident = Style::fg(Rgba::BLACK);
    let string = Style::fg(Rgba::RED);
    let comment = Style::fg(Rgba::GREEN).with_italic();

    let mut doc = PlainDocument::new();
    doc.push_styled("// docpane demo", &[(15, comment)]);
    doc.push_styled("fn main() {", &[(2, keyword), (9, ident)]);
    doc.push_styled(
        "\tlet greeting = \"hello\";",
        &[(16, ident), (7, string), (1, ident)],
    );
    doc.push_styled("\tprintln!(\"{greeting}\");", &[(10, ident), (12, string), (2, ident)]);
    doc.push_styled("}", &[(1, ident)]);
    doc.push_plain("", ident);
    for i in 1..=20 {
        doc.push_plain(format!("appendix line {i}"), ident);
    }
    doc
}

fn main() {
    let args = match DemoArgs::parse(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("demo_view: {message}");
            eprintln!("try: demo_view --help");
            std::process::exit(2);
        }
    };

    let mut view = match DocumentView::new(sample_document(), ViewOptions::default()) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("demo_view: {err}");
            std::process::exit(1);
        }
    };
    view.set_caret(Caret::new(2, 5));
    if args.selection {
        view.set_selection(Some(Selection::new(Caret::new(1, 3), Caret::new(2, 8))));
    }

    let mut surface = ConsoleSurface;
    let clip = RectF::new(0.0, 0.0, 640.0, args.rows as f32 * LINE_H);

    if args.scroll > 0 {
        view.scrolled(&mut surface, 0, args.scroll, clip.width);
    }

    println!("-- draw pass ({} rows from row {}) --", args.rows, args.scroll);
    view.draw(&mut surface, clip);

    println!(
        "-- visible rows {}..={}, widest line {}px --",
        view.scroll().first_row(),
        view.scroll().last_row(),
        view.scroll().line_frame()
    );
}
