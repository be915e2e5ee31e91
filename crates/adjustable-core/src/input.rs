//! Pointer input delivered by the host.

use crate::error::AdjustError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Button {
    Left,
    Right,
    Middle,
    Back,
    Forward,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::Left,
        Button::Right,
        Button::Middle,
        Button::Back,
        Button::Forward,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Button::Left => "left",
            Button::Right => "right",
            Button::Middle => "middle",
            Button::Back => "back",
            Button::Forward => "forward",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Map a winit button, `None` for vendor-specific buttons.
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Button> {
        use winit::event::MouseButton;

        match button {
            MouseButton::Left => Some(Button::Left),
            MouseButton::Right => Some(Button::Right),
            MouseButton::Middle => Some(Button::Middle),
            MouseButton::Back => Some(Button::Back),
            MouseButton::Forward => Some(Button::Forward),
            MouseButton::Other(_) => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Button {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Button::Left),
            "right" => Ok(Button::Right),
            // "mid" is accepted as an alias.
            "middle" | "mid" => Ok(Button::Middle),
            "back" => Ok(Button::Back),
            "forward" => Ok(Button::Forward),
            other => Err(AdjustError::InvalidButton(other.to_string())),
        }
    }
}

impl TryFrom<String> for Button {
    type Error = AdjustError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Button> for String {
    fn from(button: Button) -> Self {
        button.name().to_string()
    }
}

/// A set of mouse buttons.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Button>", into = "Vec<Button>")]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub const fn single(button: Button) -> Self {
        ButtonSet(button.bit())
    }

    pub const fn with(self, button: Button) -> Self {
        ButtonSet(self.0 | button.bit())
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub const fn intersects(self, other: ButtonSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL
            .into_iter()
            .filter(move |button| self.contains(*button))
    }
}

impl fmt::Debug for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(ButtonSet::EMPTY, ButtonSet::with)
    }
}

impl From<Vec<Button>> for ButtonSet {
    fn from(buttons: Vec<Button>) -> Self {
        buttons.into_iter().collect()
    }
}

impl From<ButtonSet> for Vec<Button> {
    fn from(set: ButtonSet) -> Self {
        set.iter().collect()
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Whether every modifier set in `required` is also set here.
    pub fn satisfies(&self, required: &Modifiers) -> bool {
        (!required.shift || self.shift)
            && (!required.ctrl || self.ctrl)
            && (!required.alt || self.alt)
            && (!required.meta || self.meta)
    }
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
}

/// A pointer event in widget-local coordinates.
///
/// Handlers mark the event accepted when they claim it; ignored events are
/// free to propagate to the widget's parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position relative to the receiving widget's origin.
    pub position: Point,
    /// Button that changed state (press and release only).
    pub button: Option<Button>,
    /// Buttons held after this event.
    pub buttons: ButtonSet,
    pub modifiers: Modifiers,
    accepted: bool,
}

impl PointerEvent {
    pub fn press(position: Point, button: Button) -> Self {
        Self {
            kind: PointerEventKind::Press,
            position,
            button: Some(button),
            buttons: ButtonSet::single(button),
            modifiers: Modifiers::NONE,
            accepted: false,
        }
    }

    /// A move with `buttons` held (empty for hovering).
    pub fn moved(position: Point, buttons: ButtonSet) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
            button: None,
            buttons,
            modifiers: Modifiers::NONE,
            accepted: false,
        }
    }

    pub fn release(position: Point, button: Button) -> Self {
        Self {
            kind: PointerEventKind::Release,
            position,
            button: Some(button),
            buttons: ButtonSet::EMPTY,
            modifiers: Modifiers::NONE,
            accepted: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The same event re-expressed relative to a different origin.
    pub fn relocated(&self, position: Point) -> Self {
        Self {
            position,
            accepted: false,
            ..self.clone()
        }
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}
