//! Hit-zone classification.

use crate::geometry::{Point, Size};
use crate::mode::{Edge, Mode, ModeSet};

/// Distance from a widget border, in pixels, that counts as "on the edge".
pub const DEFAULT_BUFFER: i32 = 3;

/// Determine which mode a widget-local pointer position selects.
///
/// Each axis is evaluated independently; a corner is the combination of two
/// edge zones. A candidate outside `allowed` falls back to `MOVE` when dragging
/// is allowed, otherwise to `NONE`.
pub fn classify(position: Point, size: Size, buffer: i32, allowed: ModeSet) -> Mode {
    let candidate = Mode::new(
        edge_along(position.x, size.width, buffer),
        edge_along(position.y, size.height, buffer),
    );

    if allowed.contains(candidate) {
        candidate
    } else if allowed.contains(Mode::MOVE) {
        Mode::MOVE
    } else {
        Mode::NONE
    }
}

fn edge_along(coord: i32, extent: i32, buffer: i32) -> Edge {
    if 0 <= coord && coord < buffer {
        Edge::Negative
    } else if extent - buffer < coord && coord <= extent {
        Edge::Positive
    } else {
        Edge::Zero
    }
}
