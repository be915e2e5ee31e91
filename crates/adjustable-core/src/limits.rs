//! Per-edge legal ranges for a resize gesture.
//!
//! The four edges are limited independently; horizontal and vertical ranges
//! never interact. Limits are computed once when a resize starts and reused
//! for every move of that gesture.

use crate::geometry::{MAX_DIMENSION, Point, Rect, Size};
use crate::mode::{Edge, Mode};

/// Inclusive range of coordinates one edge may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRange {
    pub min: i32,
    pub max: i32,
}

impl EdgeRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamp with the lower bound taking precedence if the range is inverted.
    pub fn clamp_low(&self, value: i32) -> i32 {
        value.min(self.max).max(self.min)
    }

    /// Clamp with the upper bound taking precedence if the range is inverted.
    pub fn clamp_high(&self, value: i32) -> i32 {
        value.max(self.min).min(self.max)
    }
}

/// Frozen snapshot of a widget's geometry and the legal range of each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLimits {
    /// Geometry at gesture start.
    pub origin: Rect,
    pub x1: EdgeRange,
    pub y1: EdgeRange,
    pub x2: EdgeRange,
    pub y2: EdgeRange,
}

/// Compute the legal range of each edge of `rect`.
///
/// Size limits come first: the left edge may travel between `x2 - max_width`
/// and `x2 - min_width`, the right edge between `x1 + min_width` and
/// `x1 + max_width`, and likewise vertically. The container then floors the
/// near edges at 0 and caps the far edges at the container's far bound.
/// Size limits outside `0..=MAX_DIMENSION` are clamped into it first.
pub fn compute_limits(rect: Rect, min: Size, max: Size, container: Rect) -> EdgeLimits {
    let Rect { x1, y1, x2, y2 } = rect;
    let (min, max) = (bounded(min), bounded(max));

    EdgeLimits {
        origin: rect,
        x1: EdgeRange::new((x2 - max.width).max(0), x2 - min.width),
        y1: EdgeRange::new((y2 - max.height).max(0), y2 - min.height),
        x2: EdgeRange::new(x1 + min.width, (x1 + max.width).min(container.x2)),
        y2: EdgeRange::new(y1 + min.height, (y1 + max.height).min(container.y2)),
    }
}

fn bounded(size: Size) -> Size {
    Size::new(
        size.width.clamp(0, MAX_DIMENSION),
        size.height.clamp(0, MAX_DIMENSION),
    )
}

impl EdgeLimits {
    /// Geometry produced by dragging the edges implicated by `mode` to
    /// `pointer` (parent-local), clamped into the frozen ranges.
    ///
    /// Edges the mode does not touch keep their gesture-start coordinate.
    pub fn resize(&self, mode: Mode, pointer: Point) -> Rect {
        let Rect {
            mut x1,
            mut y1,
            mut x2,
            mut y2,
        } = self.origin;

        match mode.horizontal() {
            Edge::Negative => x1 = self.x1.clamp_low(pointer.x),
            Edge::Positive => x2 = self.x2.clamp_high(pointer.x),
            Edge::Zero | Edge::Disabled => {}
        }
        match mode.vertical() {
            Edge::Negative => y1 = self.y1.clamp_low(pointer.y),
            Edge::Positive => y2 = self.y2.clamp_high(pointer.y),
            Edge::Zero | Edge::Disabled => {}
        }

        Rect::new(x1, y1, x2, y2)
    }
}
