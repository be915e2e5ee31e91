//! The boundary between the adjuster and a concrete widget.
//!
//! Any widget becomes adjustable by implementing [`AdjustableWidget`] and
//! routing its pointer events through an [`Adjuster`](crate::Adjuster). The
//! adjuster knows nothing about concrete widget types or the host toolkit.

use crate::cursor::CursorKind;
use crate::geometry::{Point, Rect, Size};
use crate::input::PointerEvent;

/// Geometry access and host services the adjuster needs from a widget.
///
/// Positions and geometry are expressed in the parent's coordinate space.
pub trait AdjustableWidget {
    /// Top-left corner in parent coordinates.
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    fn size(&self) -> Size;

    fn geometry(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    fn set_geometry(&mut self, geometry: Rect);

    fn min_size(&self) -> Size {
        Size::ZERO
    }

    fn max_size(&self) -> Size {
        Size::UNBOUNDED
    }

    /// Area the widget must stay inside, in the same space as `position`.
    ///
    /// This is the parent's content area, or the available screen area for a
    /// top-level widget. `None` when neither can be resolved.
    fn container_rect(&self) -> Option<Rect>;

    /// Map a widget-local point into parent coordinates.
    fn map_to_parent(&self, point: Point) -> Point;

    fn set_cursor(&mut self, cursor: CursorKind);

    fn clear_cursor(&mut self);

    fn request_focus(&mut self) {}

    /// Name used in log messages.
    fn name(&self) -> &str {
        "widget"
    }

    /// Default handling for a press the adjuster does not claim.
    fn forward_press(&mut self, _event: &mut PointerEvent) {}

    /// Default handling for a move the adjuster does not claim.
    fn forward_move(&mut self, _event: &mut PointerEvent) {}

    /// Default handling for a release the adjuster does not claim.
    fn forward_release(&mut self, _event: &mut PointerEvent) {}
}
