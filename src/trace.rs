//! Paint instrumentation hooks.
//!
//! The renderer reports each draw pass and each row-view creation through a
//! [`PaintTrace`] implementation owned by the view. Hosts can plug in their
//! own tracing; [`NoopTrace`] is the default and [`CountingTrace`] backs the
//! test suite.

use crate::geometry::RectF;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Observer for renderer activity.
///
/// All methods default to no-ops so implementations only override what they
/// care about.
pub trait PaintTrace {
    /// A draw pass is starting for the given clip rectangle.
    fn begin_paint(&mut self, clip: RectF) {
        let _ = clip;
    }

    /// The draw pass finished.
    fn end_paint(&mut self) {}

    /// A row view was created for the given row index.
    fn row_view_created(&mut self, index: usize) {
        let _ = index;
    }
}

/// Trace that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTrace;

impl PaintTrace for NoopTrace {}

/// Shared counters recorded by [`CountingTrace`].
#[derive(Debug, Default)]
pub struct TraceCounters {
    paints_begun: AtomicUsize,
    paints_ended: AtomicUsize,
    row_views_created: AtomicUsize,
}

impl TraceCounters {
    /// Number of `begin_paint` calls.
    #[must_use]
    pub fn paints_begun(&self) -> usize {
        self.paints_begun.load(Ordering::SeqCst)
    }

    /// Number of `end_paint` calls.
    #[must_use]
    pub fn paints_ended(&self) -> usize {
        self.paints_ended.load(Ordering::SeqCst)
    }

    /// Number of row views created.
    #[must_use]
    pub fn row_views_created(&self) -> usize {
        self.row_views_created.load(Ordering::SeqCst)
    }
}

/// Trace that counts renderer activity, for tests and diagnostics.
#[derive(Clone, Debug, Default)]
pub struct CountingTrace {
    counters: Arc<TraceCounters>,
}

impl CountingTrace {
    /// Create a trace along with a handle to its counters.
    #[must_use]
    pub fn new() -> (Self, Arc<TraceCounters>) {
        let trace = Self::default();
        let counters = Arc::clone(&trace.counters);
        (trace, counters)
    }
}

impl PaintTrace for CountingTrace {
    fn begin_paint(&mut self, _clip: RectF) {
        self.counters.paints_begun.fetch_add(1, Ordering::SeqCst);
    }

    fn end_paint(&mut self) {
        self.counters.paints_ended.fetch_add(1, Ordering::SeqCst);
    }

    fn row_view_created(&mut self, _index: usize) {
        self.counters.row_views_created.fetch_add(1, Ordering::SeqCst);
    }
}
