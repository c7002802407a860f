//! Proportional-resize engine
//!
//! A container captures its size at the first layout pass and keeps it as an
//! immutable baseline. Every later resize derives a per-axis ratio between
//! the current and original size; child geometry is recomputed from its own
//! recorded baseline by those ratios, never mutated incrementally, so
//! repeating a resize derives the same geometry.

use std::cell::Cell;

use vitrine_core::{Anchor, Point, Rect, Size};

/// Lower bound for a scale ratio, keeping degenerate resizes from producing
/// zero or negative geometry.
pub const MIN_RATIO: f32 = 0.01;

/// A child's recorded geometry: an anchor point, a size, and the anchor
/// naming which part of the child that point refers to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub anchor: Anchor,
}

impl Placement {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            anchor: Anchor::Nw,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The on-screen rect at 1:1 scale.
    pub fn rect(&self) -> Rect {
        self.scaled((1.0, 1.0))
    }

    /// Derive a fresh on-screen rect for the given per-axis ratios.
    ///
    /// The anchor point and the size scale independently; the anchor then
    /// determines the derived origin, so the named corner/edge/center keeps
    /// its proportional position under scaling.
    pub fn scaled(&self, ratios: (f32, f32)) -> Rect {
        let (rx, ry) = ratios;
        let size = Size::new(self.width * rx, self.height * ry);
        let anchor_point = Point::new(self.x * rx, self.y * ry);
        let origin = self.anchor.origin(anchor_point, size);
        Rect::new(origin.x, origin.y, size.width, size.height)
    }
}

/// Baseline/ratio state for one container.
///
/// Two states: *uninitialized* (no baseline) and *initialized*. The first
/// layout pass captures the baseline; it is immutable afterwards. Ratios are
/// computed on demand and cached until the next resize. Single-threaded by
/// design: the cache is a `Cell`, mutated only on the UI thread.
#[derive(Clone, Debug, Default)]
pub struct ZoomEngine {
    baseline: Option<Size>,
    current: Size,
    cached_ratios: Cell<Option<(f32, f32)>>,
}

impl ZoomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.baseline.is_some()
    }

    /// The baseline captured at the first layout pass, if any.
    pub fn baseline(&self) -> Option<Size> {
        self.baseline
    }

    /// The current on-screen size.
    pub fn current(&self) -> Size {
        self.current
    }

    /// Capture the baseline. Later calls leave the baseline untouched and
    /// only update the current size.
    pub fn initialize(&mut self, size: Size) {
        if self.baseline.is_none() {
            tracing::debug!(?size, "zoom baseline captured");
            self.baseline = Some(size);
        }
        self.current = size;
        self.cached_ratios.set(None);
    }

    /// Record a new on-screen size, invalidating the ratio cache. The first
    /// call doubles as the initializing layout pass.
    pub fn resize(&mut self, size: Size) {
        if self.baseline.is_none() {
            self.initialize(size);
            return;
        }
        self.current = size;
        self.cached_ratios.set(None);
    }

    /// Per-axis `current / original` ratios, computed on demand and cached
    /// until the next resize. Returns `(1.0, 1.0)` while uninitialized.
    pub fn ratios(&self) -> (f32, f32) {
        if let Some(cached) = self.cached_ratios.get() {
            return cached;
        }
        let ratios = match self.baseline {
            Some(baseline) => (
                axis_ratio(self.current.width, baseline.width),
                axis_ratio(self.current.height, baseline.height),
            ),
            None => (1.0, 1.0),
        };
        self.cached_ratios.set(Some(ratios));
        ratios
    }
}

/// Ratio along one axis. A zero or negative baseline axis would divide by
/// zero, so it falls back to 1.0; valid ratios clamp at [`MIN_RATIO`].
fn axis_ratio(current: f32, original: f32) -> f32 {
    if original <= 0.0 {
        return 1.0;
    }
    (current / original).max(MIN_RATIO)
}
