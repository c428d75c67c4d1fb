//! `docpane` - Virtualized read-only document rendering engine
//!
//! Lazily materializes per-row text layout, draws stylized text runs,
//! overlays selection highlighting and a caret, and keeps a host scrollbar
//! synchronized with a quantized viewport. Document storage and text
//! measurement live behind narrow capability traits ([`Document`] and
//! [`Surface`]) so the engine stays independent of any concrete toolkit.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for pixel math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow RowViewCache etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::float_cmp)] // Geometry tests compare exact pixel values

pub mod cache;
pub mod color;
pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod options;
pub mod range;
pub mod scroll;
pub mod style;
pub mod surface;
pub mod trace;
pub mod view;

// Re-export core types at crate root
pub use cache::{RowView, RowViewCache};
pub use color::Rgba;
pub use document::{Document, DocumentRow, PlainDocument, StylizedRowElement};
pub use error::{Error, Result};
pub use geometry::{PointF, RectF, SizeF};
pub use layout::LayoutContext;
pub use options::ViewOptions;
pub use range::{CharRange, RangeTrio};
pub use scroll::{ScrollCoordinator, ScrollPhase};
pub use style::{FontId, Style, TextAttributes};
pub use surface::{ScrollRange, Surface, TextFormat};
pub use trace::{CountingTrace, NoopTrace, PaintTrace};
pub use view::{Caret, DocumentView, Selection};
