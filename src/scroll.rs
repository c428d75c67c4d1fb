//! Scrollbar synchronization.
//!
//! [`ScrollCoordinator`] owns the scroll state (first visible row,
//! horizontal pixel offset, line frame, last caret rectangle) and maps it
//! to and from the host scrollbar's quantized units. Host-driven scroll
//! input and self-triggered range publication would otherwise feed back
//! into each other; the [`ScrollPhase`] flag makes the "ignore
//! self-triggered updates" rule an explicit state transition.

use crate::geometry::RectF;
use crate::surface::{ScrollRange, Surface};

/// Who is currently driving the scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Normal operation: publications go out to the host.
    #[default]
    Idle,
    /// A host scroll notification is being applied; publications are
    /// suppressed so the resulting state change cannot recurse.
    HostDriven,
}

/// Maps pixel/row scroll state to and from the host scrollbar.
#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    first_row: usize,
    last_row: usize,
    left_offset: f32,
    line_frame: f32,
    caret_rect: RectF,
    granularity: f32,
    phase: ScrollPhase,
}

impl ScrollCoordinator {
    /// Create a coordinator with the given horizontal granularity
    /// (pixels per scroll unit).
    #[must_use]
    pub fn new(granularity: f32) -> Self {
        Self {
            first_row: 0,
            last_row: 0,
            left_offset: 0.0,
            line_frame: 0.0,
            caret_rect: RectF::EMPTY,
            granularity,
            phase: ScrollPhase::Idle,
        }
    }

    /// First visible row.
    #[must_use]
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Last fully visible row from the most recent draw pass.
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.last_row
    }

    /// Horizontal pixel offset (always ≥ 0).
    #[must_use]
    pub fn left_offset(&self) -> f32 {
        self.left_offset
    }

    /// Running maximum line pixel width.
    #[must_use]
    pub fn line_frame(&self) -> f32 {
        self.line_frame
    }

    /// Caret rectangle computed by the most recent caret-bearing draw.
    #[must_use]
    pub fn caret_rect(&self) -> RectF {
        self.caret_rect
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Record the last fully visible row.
    pub fn set_last_row(&mut self, row: usize) {
        self.last_row = row;
    }

    /// Set the horizontal pixel offset, clamped to ≥ 0.
    pub fn set_left_offset(&mut self, offset: f32) {
        self.left_offset = offset.max(0.0);
    }

    /// Grow the line frame; it only ever increases within a pass.
    pub fn observe_line_width(&mut self, width: f32) {
        if width > self.line_frame {
            self.line_frame = width;
        }
    }

    /// Store the caret rectangle for the host to query.
    pub fn set_caret_rect(&mut self, rect: RectF) {
        self.caret_rect = rect;
    }

    /// Set the first visible row and republish the scroll range.
    pub fn set_first_row<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        row: usize,
        viewport_width: f32,
        row_count: usize,
    ) {
        self.first_row = row;
        self.update_scroll(surface, viewport_width, row_count);
    }

    /// Quantization factor: `floor(viewport width / granularity)`, held at
    /// 1 for degenerate viewports so divisions stay well-defined.
    #[must_use]
    pub fn quantization(&self, viewport_width: f32) -> u32 {
        if viewport_width <= 0.0 {
            return 1;
        }
        (viewport_width / self.granularity).floor().max(1.0) as u32
    }

    /// Publish the current scroll state to the host.
    ///
    /// Offset and line frame are converted to host scroll units via the
    /// quantization factor; the vertical range is the document row count.
    /// Suppressed while a host scroll notification is being applied.
    pub fn update_scroll<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        viewport_width: f32,
        row_count: usize,
    ) {
        if self.phase == ScrollPhase::HostDriven {
            return;
        }

        let k = self.quantization(viewport_width);
        let width = (self.line_frame.ceil() as u32) / k;
        let h = (self.left_offset.floor() as u32) / k;

        surface.set_scroll(ScrollRange::new(width, row_count), h, self.first_row);
    }

    /// Apply a host-driven scroll notification.
    ///
    /// Sets first row to `v` and the pixel offset to `h` scroll units; runs
    /// in the `HostDriven` phase so the nested republish is suppressed.
    pub fn set_scroll<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        h: u32,
        v: usize,
        viewport_width: f32,
        row_count: usize,
    ) {
        self.phase = ScrollPhase::HostDriven;

        let k = self.quantization(viewport_width);
        self.set_first_row(surface, v, viewport_width, row_count);
        self.set_left_offset((h * k) as f32);

        self.phase = ScrollPhase::Idle;
    }

    /// Reset all scroll state and publish an empty range.
    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.first_row = 0;
        self.last_row = 0;
        self.left_offset = 0.0;
        self.line_frame = 0.0;
        self.caret_rect = RectF::EMPTY;
        surface.set_scroll(ScrollRange::EMPTY, 0, 0);
    }
}
