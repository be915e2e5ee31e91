//! Cursor feedback for adjustment modes.

use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use winit::window::CursorIcon;

/// Pointer shape requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    /// Regular arrow.
    #[default]
    Default,
    /// Left/right resize.
    HorizontalResize,
    /// Up/down resize.
    VerticalResize,
    /// Diagonal resize along `\` (top-left to bottom-right).
    DiagonalResizeBack,
    /// Diagonal resize along `/` (top-right to bottom-left).
    DiagonalResizeForward,
    /// Open hand.
    Grab,
    /// Closed hand.
    Grabbing,
}

/// Shared cursor table used when an instance has no override.
pub fn base_cursor(mode: Mode) -> CursorKind {
    match mode {
        Mode::LEFT | Mode::RIGHT => CursorKind::HorizontalResize,
        Mode::TOP | Mode::BOTTOM => CursorKind::VerticalResize,
        Mode::TOP_LEFT | Mode::BOTTOM_RIGHT => CursorKind::DiagonalResizeBack,
        Mode::TOP_RIGHT | Mode::BOTTOM_LEFT => CursorKind::DiagonalResizeForward,
        Mode::MOVE => CursorKind::Grabbing,
        _ => CursorKind::Default,
    }
}

/// Per-instance cursor overrides layered over [`base_cursor`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorMap {
    overrides: HashMap<Mode, CursorKind>,
}

impl CursorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cursor shown for `mode` on this instance only.
    pub fn set_override(&mut self, mode: Mode, cursor: CursorKind) {
        self.overrides.insert(mode, cursor);
    }

    pub fn get(&self, mode: Mode) -> CursorKind {
        self.overrides
            .get(&mode)
            .copied()
            .unwrap_or_else(|| base_cursor(mode))
    }

    /// Cursor while hovering without a gesture.
    ///
    /// The interior and disallowed zones both show the `NONE` cursor; the
    /// drag cursor only appears once a drag is under way.
    pub fn hover(&self, mode: Mode) -> CursorKind {
        if mode == Mode::MOVE {
            self.get(Mode::NONE)
        } else {
            self.get(mode)
        }
    }

    /// Cursor while a drag gesture is active.
    pub fn dragging(&self) -> CursorKind {
        self.get(Mode::MOVE)
    }
}

impl From<CursorKind> for CursorIcon {
    fn from(kind: CursorKind) -> Self {
        match kind {
            CursorKind::Default => CursorIcon::Default,
            CursorKind::HorizontalResize => CursorIcon::EwResize,
            CursorKind::VerticalResize => CursorIcon::NsResize,
            CursorKind::DiagonalResizeBack => CursorIcon::NwseResize,
            CursorKind::DiagonalResizeForward => CursorIcon::NeswResize,
            CursorKind::Grab => CursorIcon::Grab,
            CursorKind::Grabbing => CursorIcon::Grabbing,
        }
    }
}
