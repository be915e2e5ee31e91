//! Adjuster configuration.

use crate::classify::DEFAULT_BUFFER;
use crate::cursor::CursorKind;
use crate::error::{AdjustError, AdjustResult};
use crate::geometry::{Rect, Size};
use crate::input::{Button, ButtonSet, Modifiers};
use crate::mode::ModeSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Net displacement (Manhattan distance, pixels) above which a drag counts as
/// a reposition rather than a click.
pub const DEFAULT_CLICK_THRESHOLD: i32 = 2;

/// Callback that replaces [`AdjustableWidget::container_rect`](crate::AdjustableWidget::container_rect).
pub type ContainerRectFn = Rc<dyn Fn() -> Rect>;

/// Everything an [`Adjuster`](crate::Adjuster) is constructed from.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjusterConfig {
    /// Buttons that start a drag or resize.
    pub buttons: ButtonSet,
    /// Modifier chord that must be held together with the button.
    pub modifiers: Modifiers,
    /// Modes permitted initially.
    pub allowed_modes: ModeSet,
    /// Overrides the widget's own container rectangle.
    #[serde(skip)]
    pub container_rect: Option<ContainerRectFn>,
    /// Cursor shown over the interior and disallowed zones.
    pub default_cursor: Option<CursorKind>,
    /// Cursor shown while dragging.
    pub drag_cursor: Option<CursorKind>,
    /// Overrides the widget's own minimum size.
    pub min_size: Option<Size>,
    /// Overrides the widget's own maximum size.
    pub max_size: Option<Size>,
    /// Edge detection distance in pixels.
    pub buffer: i32,
    pub click_threshold: i32,
}

impl Default for AdjusterConfig {
    fn default() -> Self {
        Self {
            buttons: ButtonSet::single(Button::Right),
            modifiers: Modifiers::NONE,
            allowed_modes: ModeSet::ALL,
            container_rect: None,
            default_cursor: None,
            drag_cursor: None,
            min_size: None,
            max_size: None,
            buffer: DEFAULT_BUFFER,
            click_threshold: DEFAULT_CLICK_THRESHOLD,
        }
    }
}

impl fmt::Debug for AdjusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjusterConfig")
            .field("buttons", &self.buttons)
            .field("modifiers", &self.modifiers)
            .field("allowed_modes", &self.allowed_modes)
            .field("container_rect", &self.container_rect.as_ref().map(|_| "<callback>"))
            .field("default_cursor", &self.default_cursor)
            .field("drag_cursor", &self.drag_cursor)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("buffer", &self.buffer)
            .field("click_threshold", &self.click_threshold)
            .finish()
    }
}

impl AdjusterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buttons(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.buttons = buttons.into_iter().collect();
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_allowed_modes(mut self, modes: ModeSet) -> Self {
        self.allowed_modes = modes;
        self
    }

    pub fn with_container_rect(mut self, container_rect: impl Fn() -> Rect + 'static) -> Self {
        self.container_rect = Some(Rc::new(container_rect));
        self
    }

    pub fn with_default_cursor(mut self, cursor: CursorKind) -> Self {
        self.default_cursor = Some(cursor);
        self
    }

    pub fn with_drag_cursor(mut self, cursor: CursorKind) -> Self {
        self.drag_cursor = Some(cursor);
        self
    }

    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn with_max_size(mut self, size: Size) -> Self {
        self.max_size = Some(size);
        self
    }

    pub fn with_buffer(mut self, buffer: i32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Check the configuration for programmer errors.
    pub fn validate(&self) -> AdjustResult<()> {
        if self.buttons.is_empty() {
            return Err(AdjustError::NoButtons);
        }
        if self.buffer < 0 {
            return Err(AdjustError::InvalidBuffer(self.buffer));
        }
        for size in [self.min_size, self.max_size].into_iter().flatten() {
            if size.width < 0 || size.height < 0 {
                return Err(AdjustError::NegativeSize(size));
            }
        }
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min.width > max.width || min.height > max.height {
                return Err(AdjustError::InvertedSizeLimits { min, max });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdjusterConfig::default();
        assert_eq!(config.buttons, ButtonSet::single(Button::Right));
        assert_eq!(config.allowed_modes, ModeSet::ALL);
        assert_eq!(config.buffer, 3);
        assert_eq!(config.click_threshold, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let no_buttons = AdjusterConfig::new().with_buttons(Vec::<Button>::new());
        assert_eq!(no_buttons.validate(), Err(AdjustError::NoButtons));

        let negative = AdjusterConfig::new().with_buffer(-1);
        assert_eq!(negative.validate(), Err(AdjustError::InvalidBuffer(-1)));

        let inverted = AdjusterConfig::new()
            .with_min_size(Size::new(50, 10))
            .with_max_size(Size::new(40, 100));
        assert!(matches!(
            inverted.validate(),
            Err(AdjustError::InvertedSizeLimits { .. })
        ));
    }

    #[test]
    fn test_negative_size_limits_rejected() {
        let negative_max = AdjusterConfig::new().with_max_size(Size::new(-1, 100));
        assert_eq!(
            negative_max.validate(),
            Err(AdjustError::NegativeSize(Size::new(-1, 100)))
        );

        let negative_min = AdjusterConfig::new().with_min_size(Size::new(10, -5));
        assert_eq!(
            negative_min.validate(),
            Err(AdjustError::NegativeSize(Size::new(10, -5)))
        );

        let huge = AdjusterConfig::new().with_max_size(Size::new(i32::MAX, i32::MAX));
        assert_eq!(huge.validate(), Ok(()));
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{
            "buttons": ["middle"],
            "allowed_modes": "anchor_top",
            "min_size": { "width": 50, "height": 20 },
            "default_cursor": "grab"
        }"#;
        let config: AdjusterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.buttons, ButtonSet::single(Button::Middle));
        assert_eq!(config.allowed_modes, ModeSet::ANCHOR_TOP);
        assert_eq!(config.min_size, Some(Size::new(50, 20)));
        assert_eq!(config.default_cursor, Some(CursorKind::Grab));
        assert_eq!(config.buffer, DEFAULT_BUFFER);
        assert!(config.container_rect.is_none());
    }

    #[test]
    fn test_invalid_button_in_config() {
        let json = r#"{ "buttons": ["thumb"] }"#;
        let err = serde_json::from_str::<AdjusterConfig>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid button 'thumb'"));
    }
}
