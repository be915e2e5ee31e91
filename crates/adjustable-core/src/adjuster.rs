//! Interaction state machine.
//!
//! An [`Adjuster`] turns the press/move/release stream of one widget into
//! position and geometry updates. A press on an allowed zone opens a gesture
//! (a drag for the interior, a resize for edges and corners), moves update the
//! widget while the configured button is held, and the release closes the
//! gesture. Without a gesture, moves only refresh the hover cursor.
//!
//! The adjuster never holds on to the widget: every handler borrows it for
//! the duration of one event, so dropping a widget mid-gesture leaves nothing
//! behind to apply.

use crate::classify::classify;
use crate::config::{AdjusterConfig, ContainerRectFn};
use crate::cursor::CursorMap;
use crate::error::{AdjustError, AdjustResult};
use crate::geometry::{MAX_DIMENSION, Point, Rect, Size};
use crate::input::{ButtonSet, Modifiers, PointerEvent};
use crate::limits::{EdgeLimits, compute_limits};
use crate::mode::{Mode, ModeSet};
use crate::widget::AdjustableWidget;
use serde::Serialize;
use std::fmt;

/// Observable state of an adjuster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    /// Pointer moving over the widget with no gesture active.
    HoverOnly,
    Dragging,
    Resizing,
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureOutcome {
    /// The widget was repositioned by more than the click threshold.
    Moved { from: Point, to: Point },
    /// The widget's geometry changed.
    Resized { from: Rect, to: Rect },
    /// Press and release without a meaningful change.
    Click,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Widget position at press.
    start: Point,
    /// Widget-local pointer position at press.
    anchor: Point,
    /// Container snapshot taken at press.
    container: Rect,
}

#[derive(Debug, Clone, Copy)]
struct ResizeSession {
    limits: EdgeLimits,
}

#[derive(Debug, Clone, Copy, Default)]
enum Phase {
    #[default]
    Idle,
    Hover,
    Drag(DragSession),
    Resize(ResizeSession),
}

/// Drag and resize behavior for a single widget.
pub struct Adjuster {
    buttons: ButtonSet,
    modifiers: Modifiers,
    allowed: ModeSet,
    /// Modes removed by `set_fixed_*`; `enable_modes` cannot bring them back.
    locked: ModeSet,
    container_rect: Option<ContainerRectFn>,
    cursors: CursorMap,
    min_size: Option<Size>,
    max_size: Option<Size>,
    buffer: i32,
    click_threshold: i32,
    mode: Mode,
    phase: Phase,
}

impl fmt::Debug for Adjuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adjuster")
            .field("buttons", &self.buttons)
            .field("allowed", &self.allowed)
            .field("locked", &self.locked)
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Adjuster {
    /// Create an adjuster, rejecting invalid configurations.
    pub fn new(config: AdjusterConfig) -> AdjustResult<Self> {
        config.validate()?;

        let mut cursors = CursorMap::new();
        if let Some(cursor) = config.default_cursor {
            cursors.set_override(Mode::NONE, cursor);
        }
        if let Some(cursor) = config.drag_cursor {
            cursors.set_override(Mode::MOVE, cursor);
        }

        Ok(Self {
            buttons: config.buttons,
            modifiers: config.modifiers,
            allowed: config.allowed_modes,
            locked: ModeSet::EMPTY,
            container_rect: config.container_rect,
            cursors,
            min_size: config.min_size,
            max_size: config.max_size,
            buffer: config.buffer,
            click_threshold: config.click_threshold,
            mode: Mode::NONE,
            phase: Phase::Idle,
        })
    }

    pub fn state(&self) -> InteractionState {
        match self.phase {
            Phase::Idle => InteractionState::Idle,
            Phase::Hover => InteractionState::HoverOnly,
            Phase::Drag(_) => InteractionState::Dragging,
            Phase::Resize(_) => InteractionState::Resizing,
        }
    }

    /// Mode selected by the last press or hover.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a drag or resize gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Drag(_) | Phase::Resize(_))
    }

    pub fn allowed_modes(&self) -> ModeSet {
        self.allowed
    }

    pub fn cursors(&self) -> &CursorMap {
        &self.cursors
    }

    pub fn cursors_mut(&mut self) -> &mut CursorMap {
        &mut self.cursors
    }

    /// Replace the permission set, lifting every lock from `set_fixed_*`.
    pub fn set_allowed_modes(&mut self, modes: ModeSet) {
        self.allowed = modes;
        self.locked = ModeSet::EMPTY;
    }

    /// Allow additional modes. Modes locked by `set_fixed_*` stay disabled.
    pub fn enable_modes(&mut self, modes: ModeSet) {
        self.allowed = self.allowed | (modes - self.locked);
    }

    pub fn disable_modes(&mut self, modes: ModeSet) {
        self.allowed = self.allowed - modes;
    }

    /// Minimum size in effect for `widget`.
    pub fn min_size_for<W: AdjustableWidget + ?Sized>(&self, widget: &W) -> Size {
        self.min_size.unwrap_or_else(|| widget.min_size())
    }

    /// Maximum size in effect for `widget`.
    pub fn max_size_for<W: AdjustableWidget + ?Sized>(&self, widget: &W) -> Size {
        self.max_size.unwrap_or_else(|| widget.max_size())
    }

    /// Pin the width to `width` and resize the widget to it.
    ///
    /// `None` or `0` unpins the width instead. Either way horizontal resizing
    /// is disabled until the permission set is reassigned.
    pub fn set_fixed_width<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        width: Option<i32>,
    ) {
        self.lock(ModeSet::EDGE_LEFT | ModeSet::EDGE_RIGHT);
        self.pin(widget, Some(width), None);
    }

    /// Pin the height to `height` and resize the widget to it.
    ///
    /// `None` or `0` unpins the height. Vertical resizing is disabled either way.
    pub fn set_fixed_height<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        height: Option<i32>,
    ) {
        self.lock(ModeSet::EDGE_TOP | ModeSet::EDGE_BOTTOM);
        self.pin(widget, None, Some(height));
    }

    /// Pin both dimensions. `None` unpins both; resizing is disabled either way.
    pub fn set_fixed_size<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        size: Option<Size>,
    ) {
        self.lock(ModeSet::SIZE);
        self.pin(
            widget,
            Some(size.map(|s| s.width)),
            Some(size.map(|s| s.height)),
        );
    }

    fn lock(&mut self, modes: ModeSet) {
        self.allowed = self.allowed - modes;
        self.locked = self.locked | modes;
    }

    /// Pin the axes that are `Some`, leaving the others untouched.
    fn pin<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        width: Option<Option<i32>>,
        height: Option<Option<i32>>,
    ) {
        let mut min = self.min_size_for(widget);
        let mut max = self.max_size_for(widget);
        let mut target = widget.size();

        if let Some(width) = width {
            if let Some(width) = pin_axis(&mut min.width, &mut max.width, width) {
                target.width = width;
            }
        }
        if let Some(height) = height {
            if let Some(height) = pin_axis(&mut min.height, &mut max.height, height) {
                target.height = height;
            }
        }

        self.min_size = Some(min);
        self.max_size = Some(max);

        let geometry = Rect::from_origin_size(widget.position(), target);
        if geometry != widget.geometry() {
            log::debug!("{} pinned to {:?}", widget.name(), target);
            widget.set_geometry(geometry);
        }
    }

    fn container_for<W: AdjustableWidget + ?Sized>(&self, widget: &W) -> AdjustResult<Rect> {
        match &self.container_rect {
            Some(container_rect) => Ok(container_rect()),
            None => widget
                .container_rect()
                .ok_or_else(|| AdjustError::ContainerUnresolved {
                    widget: widget.name().to_string(),
                }),
        }
    }

    fn triggered_by(&self, event: &PointerEvent) -> bool {
        event.button.is_some_and(|button| self.buttons.contains(button))
            && event.modifiers.satisfies(&self.modifiers)
    }

    /// Handle a button press.
    ///
    /// Fails only when a gesture would start but no container rectangle can be
    /// resolved for the widget.
    pub fn handle_press<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        event: &mut PointerEvent,
    ) -> AdjustResult<()> {
        widget.request_focus();

        if !self.triggered_by(event) {
            self.phase = Phase::Idle;
            self.mode = Mode::NONE;
            widget.clear_cursor();
            event.ignore();
            widget.forward_press(event);
            return Ok(());
        }

        self.mode = classify(event.position, widget.size(), self.buffer, self.allowed);
        if self.mode == Mode::NONE {
            self.phase = Phase::Idle;
            event.ignore();
            widget.forward_press(event);
            return Ok(());
        }

        let container = match self.container_for(widget) {
            Ok(container) => container,
            Err(err) => {
                self.mode = Mode::NONE;
                self.phase = Phase::Idle;
                return Err(err);
            }
        };

        if self.mode == Mode::MOVE {
            let start = widget.position();
            log::debug!("{} drag started at {:?}", widget.name(), start);
            self.phase = Phase::Drag(DragSession {
                start,
                anchor: event.position,
                container,
            });
            widget.set_cursor(self.cursors.dragging());
        } else {
            let limits = compute_limits(
                widget.geometry(),
                self.min_size_for(widget),
                self.max_size_for(widget),
                container,
            );
            log::debug!("{} resize started ({})", widget.name(), self.mode);
            self.phase = Phase::Resize(ResizeSession { limits });
            widget.set_cursor(self.cursors.get(self.mode));
        }

        event.accept();
        Ok(())
    }

    /// Handle pointer motion, with or without buttons held.
    pub fn handle_move<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        event: &mut PointerEvent,
    ) {
        let held = event.buttons.intersects(self.buttons);
        let phase = self.phase;

        match phase {
            Phase::Drag(session) if held => {
                drag_to(widget, &session, event.position);
                event.accept();
            }
            Phase::Resize(session) if held => {
                resize_to(widget, &session, self.mode, event.position);
                event.accept();
            }
            _ => self.hover(widget, event),
        }
    }

    fn hover<W: AdjustableWidget + ?Sized>(&mut self, widget: &mut W, event: &mut PointerEvent) {
        // A gesture whose button is no longer held ends here.
        let was_active = self.is_active();
        let previous = self.mode;

        self.phase = Phase::Hover;
        self.mode = classify(event.position, widget.size(), self.buffer, self.allowed);
        if was_active || self.mode != previous {
            widget.set_cursor(self.cursors.hover(self.mode));
        }

        event.ignore();
        widget.forward_move(event);
    }

    /// Handle a button release, reporting how a gesture ended.
    ///
    /// Returns `None` when no gesture was active or the released button does
    /// not belong to it; the event is then passed on unclaimed.
    pub fn handle_release<W: AdjustableWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        event: &mut PointerEvent,
    ) -> Option<GestureOutcome> {
        let ends_gesture = event
            .button
            .is_some_and(|button| self.buttons.contains(button));

        let phase = self.phase;
        let outcome = match phase {
            Phase::Drag(session) if ends_gesture => {
                let to = widget.position();
                if (to - session.start).manhattan_length() > self.click_threshold {
                    log::debug!("{} moved from {:?} to {:?}", widget.name(), session.start, to);
                    GestureOutcome::Moved {
                        from: session.start,
                        to,
                    }
                } else {
                    log::debug!("{} clicked", widget.name());
                    GestureOutcome::Click
                }
            }
            Phase::Resize(session) if ends_gesture => {
                let from = session.limits.origin;
                let to = widget.geometry();
                if corner_travel(from, to) > self.click_threshold {
                    log::debug!("{} resized from {:?} to {:?}", widget.name(), from, to);
                    GestureOutcome::Resized { from, to }
                } else {
                    log::debug!("{} clicked", widget.name());
                    GestureOutcome::Click
                }
            }
            _ => {
                event.ignore();
                widget.forward_release(event);
                return None;
            }
        };

        self.phase = Phase::Idle;
        self.mode = Mode::NONE;
        widget.clear_cursor();
        event.accept();
        Some(outcome)
    }

    /// Handle the pointer leaving the widget.
    ///
    /// Clears the hover cursor so the next hover sets it afresh. An active
    /// gesture keeps running, as the pointer is grabbed until release.
    pub fn handle_leave<W: AdjustableWidget + ?Sized>(&mut self, widget: &mut W) {
        if self.is_active() {
            return;
        }
        self.phase = Phase::Idle;
        self.mode = Mode::NONE;
        widget.clear_cursor();
    }

    /// Drop any gesture without touching the widget.
    ///
    /// Returns whether a gesture was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            log::debug!("gesture cancelled ({})", self.mode);
        }
        self.phase = Phase::Idle;
        self.mode = Mode::NONE;
        was_active
    }
}

/// Pin one axis to `value`, or unpin it for `None`/`0`. Returns the pinned value.
fn pin_axis(min: &mut i32, max: &mut i32, value: Option<i32>) -> Option<i32> {
    match value.filter(|v| *v > 0) {
        Some(v) => {
            *min = v;
            *max = v;
            Some(v)
        }
        None => {
            *min = 0;
            *max = MAX_DIMENSION;
            None
        }
    }
}

/// Manhattan distance travelled by both corners of a rectangle.
fn corner_travel(from: Rect, to: Rect) -> i32 {
    let near = to.origin() - from.origin();
    let far = Point::new(to.x2, to.y2) - Point::new(from.x2, from.y2);
    near.manhattan_length() + far.manhattan_length()
}

fn drag_to<W: AdjustableWidget + ?Sized>(widget: &mut W, session: &DragSession, pointer: Point) {
    let position = widget.position();
    let target = pointer + position - session.anchor;
    let next = session.container.clamp_origin(target, widget.size());

    if next != position {
        log::trace!("{} drag to {:?}", widget.name(), next);
        widget.set_position(next);
    }
}

fn resize_to<W: AdjustableWidget + ?Sized>(
    widget: &mut W,
    session: &ResizeSession,
    mode: Mode,
    pointer: Point,
) {
    let pointer = widget.map_to_parent(pointer);
    let geometry = session.limits.resize(mode, pointer).normalized();

    if geometry != widget.geometry().normalized() {
        log::trace!("{} resize to {:?}", widget.name(), geometry);
        widget.set_geometry(geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorKind;
    use crate::input::Button;

    const CONTAINER: Rect = Rect::new(0, 0, 400, 500);

    #[derive(Debug, Default)]
    struct TestWidget {
        geometry: Rect,
        container: Option<Rect>,
        cursor: Option<CursorKind>,
        focus_requests: usize,
        forwarded: usize,
        mutations: usize,
    }

    impl TestWidget {
        fn new(geometry: Rect) -> Self {
            Self {
                geometry,
                container: Some(CONTAINER),
                ..Default::default()
            }
        }
    }

    impl AdjustableWidget for TestWidget {
        fn position(&self) -> Point {
            self.geometry.origin()
        }

        fn set_position(&mut self, position: Point) {
            self.geometry = self.geometry.with_origin(position);
            self.mutations += 1;
        }

        fn size(&self) -> Size {
            self.geometry.size()
        }

        fn set_geometry(&mut self, geometry: Rect) {
            self.geometry = geometry;
            self.mutations += 1;
        }

        fn container_rect(&self) -> Option<Rect> {
            self.container
        }

        fn map_to_parent(&self, point: Point) -> Point {
            point + self.geometry.origin()
        }

        fn set_cursor(&mut self, cursor: CursorKind) {
            self.cursor = Some(cursor);
        }

        fn clear_cursor(&mut self) {
            self.cursor = None;
        }

        fn request_focus(&mut self) {
            self.focus_requests += 1;
        }

        fn forward_press(&mut self, _event: &mut PointerEvent) {
            self.forwarded += 1;
        }

        fn forward_move(&mut self, _event: &mut PointerEvent) {
            self.forwarded += 1;
        }

        fn forward_release(&mut self, _event: &mut PointerEvent) {
            self.forwarded += 1;
        }
    }

    fn left_button_adjuster() -> Adjuster {
        Adjuster::new(AdjusterConfig::new().with_buttons([Button::Left])).unwrap()
    }

    fn press(adjuster: &mut Adjuster, widget: &mut TestWidget, x: i32, y: i32) -> PointerEvent {
        let mut event = PointerEvent::press(Point::new(x, y), Button::Left);
        adjuster.handle_press(widget, &mut event).unwrap();
        event
    }

    fn drag(adjuster: &mut Adjuster, widget: &mut TestWidget, x: i32, y: i32) -> PointerEvent {
        let mut event = PointerEvent::moved(Point::new(x, y), ButtonSet::single(Button::Left));
        adjuster.handle_move(widget, &mut event);
        event
    }

    fn hover(adjuster: &mut Adjuster, widget: &mut TestWidget, x: i32, y: i32) -> PointerEvent {
        let mut event = PointerEvent::moved(Point::new(x, y), ButtonSet::EMPTY);
        adjuster.handle_move(widget, &mut event);
        event
    }

    fn release(adjuster: &mut Adjuster, widget: &mut TestWidget) -> Option<GestureOutcome> {
        let mut event = PointerEvent::release(Point::ZERO, Button::Left);
        adjuster.handle_release(widget, &mut event)
    }

    #[test]
    fn test_press_interior_starts_drag() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        let event = press(&mut adjuster, &mut widget, 50, 40);

        assert!(event.is_accepted());
        assert_eq!(adjuster.state(), InteractionState::Dragging);
        assert_eq!(adjuster.mode(), Mode::MOVE);
        assert_eq!(widget.cursor, Some(CursorKind::Grabbing));
        assert_eq!(widget.focus_requests, 1);
    }

    #[test]
    fn test_drag_clamps_and_skips_redundant_updates() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        press(&mut adjuster, &mut widget, 50, 40);
        let event = drag(&mut adjuster, &mut widget, -30, 40);
        assert!(event.is_accepted());
        assert_eq!(widget.position(), Point::new(0, 50));
        assert_eq!(widget.mutations, 1);

        // Same target again: no second mutation.
        drag(&mut adjuster, &mut widget, 50, 40);
        assert_eq!(widget.position(), Point::new(0, 50));
        assert_eq!(widget.mutations, 1);

        let outcome = release(&mut adjuster, &mut widget);
        assert_eq!(
            outcome,
            Some(GestureOutcome::Moved {
                from: Point::new(50, 50),
                to: Point::new(0, 50),
            })
        );
        assert_eq!(adjuster.state(), InteractionState::Idle);
        assert_eq!(widget.cursor, None);
    }

    #[test]
    fn test_small_drag_is_click() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        press(&mut adjuster, &mut widget, 50, 40);
        drag(&mut adjuster, &mut widget, 52, 40);
        assert_eq!(widget.position(), Point::new(52, 50));

        assert_eq!(release(&mut adjuster, &mut widget), Some(GestureOutcome::Click));
    }

    #[test]
    fn test_unconfigured_button_passes_through() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));
        widget.cursor = Some(CursorKind::HorizontalResize);

        let mut event = PointerEvent::press(Point::new(1, 40), Button::Right);
        adjuster.handle_press(&mut widget, &mut event).unwrap();

        assert!(!event.is_accepted());
        assert_eq!(adjuster.state(), InteractionState::Idle);
        assert_eq!(widget.forwarded, 1);
        assert_eq!(widget.cursor, None);
        assert_eq!(widget.focus_requests, 1);
    }

    #[test]
    fn test_unconfigured_press_resets_hover_mode() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        hover(&mut adjuster, &mut widget, 1, 40);
        assert_eq!(adjuster.mode(), Mode::LEFT);

        let mut event = PointerEvent::press(Point::new(1, 40), Button::Right);
        adjuster.handle_press(&mut widget, &mut event).unwrap();
        assert_eq!(adjuster.mode(), Mode::NONE);
        assert_eq!(widget.cursor, None);

        // Same zone again: the cleared cursor comes back.
        hover(&mut adjuster, &mut widget, 1, 40);
        assert_eq!(widget.cursor, Some(CursorKind::HorizontalResize));
    }

    #[test]
    fn test_leave_clears_hover() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        hover(&mut adjuster, &mut widget, 1, 40);
        adjuster.handle_leave(&mut widget);
        assert_eq!(adjuster.state(), InteractionState::Idle);
        assert_eq!(adjuster.mode(), Mode::NONE);
        assert_eq!(widget.cursor, None);

        hover(&mut adjuster, &mut widget, 1, 40);
        assert_eq!(widget.cursor, Some(CursorKind::HorizontalResize));
    }

    #[test]
    fn test_leave_keeps_active_gesture() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        press(&mut adjuster, &mut widget, 50, 40);
        adjuster.handle_leave(&mut widget);

        assert_eq!(adjuster.state(), InteractionState::Dragging);
        assert_eq!(widget.cursor, Some(CursorKind::Grabbing));
    }

    #[test]
    fn test_hover_updates_cursor_on_mode_change_only() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        let event = hover(&mut adjuster, &mut widget, 1, 40);
        assert!(!event.is_accepted());
        assert_eq!(adjuster.state(), InteractionState::HoverOnly);
        assert_eq!(widget.cursor, Some(CursorKind::HorizontalResize));

        widget.cursor = None;
        hover(&mut adjuster, &mut widget, 1, 41);
        assert_eq!(widget.cursor, None);

        hover(&mut adjuster, &mut widget, 50, 40);
        assert_eq!(widget.cursor, Some(CursorKind::Default));
        assert_eq!(widget.forwarded, 3);
        assert_eq!(widget.mutations, 0);
    }

    #[test]
    fn test_default_cursor_override() {
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_default_cursor(CursorKind::Grab);
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        hover(&mut adjuster, &mut widget, 50, 40);
        assert_eq!(widget.cursor, Some(CursorKind::Grab));
    }

    #[test]
    fn test_disallowed_zone_is_not_claimed() {
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_allowed_modes(ModeSet::SIZE);
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        let event = press(&mut adjuster, &mut widget, 50, 40);

        assert!(!event.is_accepted());
        assert_eq!(adjuster.mode(), Mode::NONE);
        assert_eq!(adjuster.state(), InteractionState::Idle);
        assert_eq!(widget.forwarded, 1);
    }

    #[test]
    fn test_empty_permission_set_never_fails() {
        let mut adjuster = left_button_adjuster();
        adjuster.disable_modes(ModeSet::ALL);
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));
        widget.container = None;

        for (x, y) in [(0, 0), (50, 40), (99, 79)] {
            let event = press(&mut adjuster, &mut widget, x, y);
            assert!(!event.is_accepted());
            assert_eq!(adjuster.state(), InteractionState::Idle);
        }
    }

    #[test]
    fn test_unresolved_container_is_error() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));
        widget.container = None;

        let mut event = PointerEvent::press(Point::new(50, 40), Button::Left);
        let result = adjuster.handle_press(&mut widget, &mut event);

        assert_eq!(
            result,
            Err(AdjustError::ContainerUnresolved {
                widget: "widget".to_string()
            })
        );
        assert_eq!(adjuster.state(), InteractionState::Idle);
        assert!(!event.is_accepted());
    }

    #[test]
    fn test_container_override_wins() {
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_container_rect(|| Rect::new(0, 0, 120, 100));
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));
        widget.container = None;

        press(&mut adjuster, &mut widget, 50, 40);
        drag(&mut adjuster, &mut widget, 90, 40);

        assert_eq!(widget.position(), Point::new(20, 0));
    }

    #[test]
    fn test_resize_bottom_right() {
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_min_size(Size::new(20, 20))
            .with_max_size(Size::new(150, 120));
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(10, 10, 110, 90));

        press(&mut adjuster, &mut widget, 99, 79);
        assert_eq!(adjuster.state(), InteractionState::Resizing);
        assert_eq!(adjuster.mode(), Mode::BOTTOM_RIGHT);
        assert_eq!(widget.cursor, Some(CursorKind::DiagonalResizeBack));

        drag(&mut adjuster, &mut widget, 300, 300);
        assert_eq!(widget.geometry, Rect::new(10, 10, 160, 130));

        // Pointer is widget-local; the widget origin did not move.
        drag(&mut adjuster, &mut widget, 0, 0);
        assert_eq!(widget.geometry, Rect::new(10, 10, 30, 30));

        let outcome = release(&mut adjuster, &mut widget);
        assert_eq!(
            outcome,
            Some(GestureOutcome::Resized {
                from: Rect::new(10, 10, 110, 90),
                to: Rect::new(10, 10, 30, 30),
            })
        );
    }

    #[test]
    fn test_one_pixel_resize_is_click() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(10, 10, 110, 90));

        press(&mut adjuster, &mut widget, 99, 40);
        assert_eq!(adjuster.mode(), Mode::RIGHT);
        drag(&mut adjuster, &mut widget, 101, 40);
        assert_eq!(widget.geometry, Rect::new(10, 10, 111, 90));

        assert_eq!(release(&mut adjuster, &mut widget), Some(GestureOutcome::Click));
    }

    #[test]
    fn test_unbounded_max_size_resizes_to_container() {
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_max_size(Size::new(i32::MAX, i32::MAX));
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(10, 10, 110, 90));

        press(&mut adjuster, &mut widget, 99, 79);
        assert_eq!(adjuster.mode(), Mode::BOTTOM_RIGHT);
        drag(&mut adjuster, &mut widget, 1000, 1000);
        assert_eq!(widget.geometry, Rect::new(10, 10, 400, 500));
    }

    #[test]
    fn test_fixed_width_lock_survives_enable() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        adjuster.set_fixed_width(&mut widget, Some(0));
        adjuster.enable_modes(ModeSet::ALL);

        let allowed = adjuster.allowed_modes();
        for mode in [Mode::LEFT, Mode::RIGHT, Mode::TOP_LEFT, Mode::BOTTOM_RIGHT] {
            assert!(!allowed.contains(mode), "{mode} restored");
        }
        assert!(allowed.contains(Mode::TOP));
        assert!(allowed.contains(Mode::MOVE));
        assert_eq!(widget.mutations, 0);

        adjuster.set_allowed_modes(ModeSet::ALL);
        assert_eq!(adjuster.allowed_modes(), ModeSet::ALL);
    }

    #[test]
    fn test_fixed_width_pins_and_resizes() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(5, 5, 105, 85));

        adjuster.set_fixed_width(&mut widget, Some(60));

        assert_eq!(widget.geometry, Rect::new(5, 5, 65, 85));
        assert_eq!(adjuster.min_size_for(&widget).width, 60);
        assert_eq!(adjuster.max_size_for(&widget).width, 60);
        assert_eq!(adjuster.max_size_for(&widget).height, MAX_DIMENSION);
    }

    #[test]
    fn test_fixed_height_unpins_on_none() {
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_min_size(Size::new(10, 40))
            .with_max_size(Size::new(200, 40));
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 40));

        adjuster.set_fixed_height(&mut widget, None);

        assert_eq!(adjuster.min_size_for(&widget), Size::new(10, 0));
        assert_eq!(adjuster.max_size_for(&widget), Size::new(200, MAX_DIMENSION));
        assert!(!adjuster.allowed_modes().contains(Mode::BOTTOM));
    }

    #[test]
    fn test_fixed_size_only_drags() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        adjuster.set_fixed_size(&mut widget, Some(Size::new(80, 40)));
        assert_eq!(widget.geometry, Rect::new(50, 50, 130, 90));

        for (x, y) in [(0, 0), (79, 39), (1, 20), (40, 0), (79, 0), (0, 39)] {
            press(&mut adjuster, &mut widget, x, y);
            assert_eq!(adjuster.mode(), Mode::MOVE, "at ({x}, {y})");
            assert!(adjuster.cancel());
        }
    }

    #[test]
    fn test_cancel_drops_session_without_touching_widget() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        press(&mut adjuster, &mut widget, 50, 40);
        assert!(adjuster.cancel());
        assert!(!adjuster.cancel());
        assert_eq!(adjuster.state(), InteractionState::Idle);

        let event = drag(&mut adjuster, &mut widget, 0, 0);
        assert!(!event.is_accepted());
        assert_eq!(widget.mutations, 0);
        assert_eq!(release(&mut adjuster, &mut widget), None);
    }

    #[test]
    fn test_modifier_chord_required() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        let config = AdjusterConfig::new()
            .with_buttons([Button::Left])
            .with_modifiers(ctrl);
        let mut adjuster = Adjuster::new(config).unwrap();
        let mut widget = TestWidget::new(Rect::new(0, 0, 100, 80));

        let event = press(&mut adjuster, &mut widget, 50, 40);
        assert!(!event.is_accepted());
        assert_eq!(adjuster.state(), InteractionState::Idle);

        let mut event = PointerEvent::press(Point::new(50, 40), Button::Left).with_modifiers(ctrl);
        adjuster.handle_press(&mut widget, &mut event).unwrap();
        assert!(event.is_accepted());
        assert_eq!(adjuster.state(), InteractionState::Dragging);
    }

    #[test]
    fn test_other_button_release_keeps_gesture() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        press(&mut adjuster, &mut widget, 50, 40);
        let mut event = PointerEvent::release(Point::new(50, 40), Button::Right);
        assert_eq!(adjuster.handle_release(&mut widget, &mut event), None);
        assert!(!event.is_accepted());
        assert_eq!(adjuster.state(), InteractionState::Dragging);
    }

    #[test]
    fn test_lost_button_ends_gesture_on_hover() {
        let mut adjuster = left_button_adjuster();
        let mut widget = TestWidget::new(Rect::new(50, 50, 150, 130));

        press(&mut adjuster, &mut widget, 50, 40);
        hover(&mut adjuster, &mut widget, 50, 40);

        assert_eq!(adjuster.state(), InteractionState::HoverOnly);
        assert_eq!(widget.cursor, Some(CursorKind::Default));
        assert_eq!(widget.mutations, 0);
    }
}
