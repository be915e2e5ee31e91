//! Adjustable Core Library
//!
//! Toolkit-agnostic drag and resize behavior for rectangular widgets. A host
//! implements [`AdjustableWidget`] for its widgets and feeds their pointer
//! events through an [`Adjuster`], which classifies the press location into a
//! [`Mode`], enforces size and container limits, and updates the widget.

pub mod adjuster;
pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod limits;
pub mod mode;
pub mod widget;

pub use adjuster::{Adjuster, GestureOutcome, InteractionState};
pub use classify::{DEFAULT_BUFFER, classify};
pub use config::{AdjusterConfig, ContainerRectFn, DEFAULT_CLICK_THRESHOLD};
pub use cursor::{CursorKind, CursorMap, base_cursor};
pub use error::{AdjustError, AdjustResult};
pub use geometry::{MAX_DIMENSION, Point, Rect, Size};
pub use input::{Button, ButtonSet, Modifiers, PointerEvent, PointerEventKind};
pub use limits::{EdgeLimits, EdgeRange, compute_limits};
pub use mode::{Edge, Mode, ModeSet};
pub use widget::AdjustableWidget;
