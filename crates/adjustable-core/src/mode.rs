//! Edge and mode model.
//!
//! A [`Mode`] pairs a horizontal and a vertical [`Edge`]. Eight of the nine
//! canonical modes resize the widget by pulling one or two edges; the ninth
//! (`MOVE`) drags the whole widget. `Mode::NONE` marks a pointer position
//! where no interaction is permitted.
//!
//! [`ModeSet`] is a bit set over the nine canonical modes. All named sets are
//! compile-time constants built with the `const` set algebra below.

use crate::error::AdjustError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};
use std::str::FromStr;

/// Per-axis edge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Edge pulled toward the decreasing coordinate (left or top).
    Negative,
    /// Axis not resized; the widget moves as a whole on this axis.
    Zero,
    /// Edge pulled toward the increasing coordinate (right or bottom).
    Positive,
    /// Adjustment disabled on this axis.
    Disabled,
}

impl Edge {
    const fn index(self) -> Option<u16> {
        match self {
            Edge::Negative => Some(0),
            Edge::Zero => Some(1),
            Edge::Positive => Some(2),
            Edge::Disabled => None,
        }
    }
}

/// A (horizontal, vertical) edge pair identifying a geometry operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mode {
    horizontal: Edge,
    vertical: Edge,
}

impl Mode {
    pub const LEFT: Mode = Mode::new(Edge::Negative, Edge::Zero);
    pub const RIGHT: Mode = Mode::new(Edge::Positive, Edge::Zero);
    pub const TOP: Mode = Mode::new(Edge::Zero, Edge::Negative);
    pub const BOTTOM: Mode = Mode::new(Edge::Zero, Edge::Positive);
    pub const TOP_LEFT: Mode = Mode::new(Edge::Negative, Edge::Negative);
    pub const TOP_RIGHT: Mode = Mode::new(Edge::Positive, Edge::Negative);
    pub const BOTTOM_LEFT: Mode = Mode::new(Edge::Negative, Edge::Positive);
    pub const BOTTOM_RIGHT: Mode = Mode::new(Edge::Positive, Edge::Positive);
    pub const MOVE: Mode = Mode::new(Edge::Zero, Edge::Zero);
    pub const NONE: Mode = Mode::new(Edge::Disabled, Edge::Disabled);

    /// The nine real modes, in no particular priority.
    pub const CANONICAL: [Mode; 9] = [
        Mode::LEFT,
        Mode::RIGHT,
        Mode::TOP,
        Mode::BOTTOM,
        Mode::TOP_LEFT,
        Mode::TOP_RIGHT,
        Mode::BOTTOM_LEFT,
        Mode::BOTTOM_RIGHT,
        Mode::MOVE,
    ];

    pub(crate) const fn new(horizontal: Edge, vertical: Edge) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(self) -> Edge {
        self.horizontal
    }

    pub fn vertical(self) -> Edge {
        self.vertical
    }

    /// Whether this mode changes the widget's size.
    pub fn is_resize(self) -> bool {
        self != Mode::MOVE && self.bit() != 0
    }

    /// Bit of this mode inside a [`ModeSet`], zero for non-canonical pairs.
    const fn bit(self) -> u16 {
        match (self.horizontal.index(), self.vertical.index()) {
            (Some(h), Some(v)) => 1 << (h * 3 + v),
            _ => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::LEFT => "left",
            Mode::RIGHT => "right",
            Mode::TOP => "top",
            Mode::BOTTOM => "bottom",
            Mode::TOP_LEFT => "top_left",
            Mode::TOP_RIGHT => "top_right",
            Mode::BOTTOM_LEFT => "bottom_left",
            Mode::BOTTOM_RIGHT => "bottom_right",
            Mode::MOVE => "move",
            _ => "none",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::CANONICAL
            .into_iter()
            .chain([Mode::NONE])
            .find(|mode| mode.name() == s)
            .ok_or_else(|| AdjustError::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for Mode {
    type Error = AdjustError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.name().to_string()
    }
}

/// A set of canonical modes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ModeSetRepr", into = "Vec<Mode>")]
pub struct ModeSet(u16);

impl ModeSet {
    pub const EMPTY: ModeSet = ModeSet(0);

    pub const SIZE: ModeSet = ModeSet::EMPTY
        .with(Mode::LEFT)
        .with(Mode::RIGHT)
        .with(Mode::TOP)
        .with(Mode::BOTTOM)
        .with(Mode::TOP_LEFT)
        .with(Mode::TOP_RIGHT)
        .with(Mode::BOTTOM_LEFT)
        .with(Mode::BOTTOM_RIGHT);
    pub const DRAG: ModeSet = ModeSet::EMPTY.with(Mode::MOVE);
    pub const ALL: ModeSet = ModeSet::SIZE.union(ModeSet::DRAG);

    pub const WIDTH_ONLY: ModeSet = ModeSet::EMPTY.with(Mode::LEFT).with(Mode::RIGHT);
    pub const HEIGHT_ONLY: ModeSet = ModeSet::EMPTY.with(Mode::TOP).with(Mode::BOTTOM);

    pub const EDGE_LEFT: ModeSet = ModeSet::EMPTY
        .with(Mode::LEFT)
        .with(Mode::TOP_LEFT)
        .with(Mode::BOTTOM_LEFT);
    pub const EDGE_RIGHT: ModeSet = ModeSet::EMPTY
        .with(Mode::RIGHT)
        .with(Mode::TOP_RIGHT)
        .with(Mode::BOTTOM_RIGHT);
    pub const EDGE_TOP: ModeSet = ModeSet::EMPTY
        .with(Mode::TOP)
        .with(Mode::TOP_LEFT)
        .with(Mode::TOP_RIGHT);
    pub const EDGE_BOTTOM: ModeSet = ModeSet::EMPTY
        .with(Mode::BOTTOM)
        .with(Mode::BOTTOM_LEFT)
        .with(Mode::BOTTOM_RIGHT);

    pub const ANCHOR_TOP: ModeSet = ModeSet::ALL.difference(ModeSet::EDGE_TOP);
    pub const ANCHOR_BOTTOM: ModeSet = ModeSet::ALL.difference(ModeSet::EDGE_BOTTOM);
    pub const ANCHOR_LEFT: ModeSet = ModeSet::ALL.difference(ModeSet::EDGE_LEFT);
    pub const ANCHOR_RIGHT: ModeSet = ModeSet::ALL.difference(ModeSet::EDGE_RIGHT);

    pub const ANCHOR_TOP_LEFT: ModeSet = ModeSet::SIZE
        .difference(ModeSet::EDGE_LEFT)
        .difference(ModeSet::EDGE_TOP);
    pub const ANCHOR_TOP_RIGHT: ModeSet = ModeSet::SIZE
        .difference(ModeSet::EDGE_RIGHT)
        .difference(ModeSet::EDGE_TOP);
    pub const ANCHOR_BOTTOM_LEFT: ModeSet = ModeSet::SIZE
        .difference(ModeSet::EDGE_LEFT)
        .difference(ModeSet::EDGE_BOTTOM);
    pub const ANCHOR_BOTTOM_RIGHT: ModeSet = ModeSet::SIZE
        .difference(ModeSet::EDGE_RIGHT)
        .difference(ModeSet::EDGE_BOTTOM);

    const NAMED: [(&'static str, ModeSet); 18] = [
        ("empty", ModeSet::EMPTY),
        ("size", ModeSet::SIZE),
        ("drag", ModeSet::DRAG),
        ("all", ModeSet::ALL),
        ("width_only", ModeSet::WIDTH_ONLY),
        ("height_only", ModeSet::HEIGHT_ONLY),
        ("edge_left", ModeSet::EDGE_LEFT),
        ("edge_right", ModeSet::EDGE_RIGHT),
        ("edge_top", ModeSet::EDGE_TOP),
        ("edge_bottom", ModeSet::EDGE_BOTTOM),
        ("anchor_top", ModeSet::ANCHOR_TOP),
        ("anchor_bottom", ModeSet::ANCHOR_BOTTOM),
        ("anchor_left", ModeSet::ANCHOR_LEFT),
        ("anchor_right", ModeSet::ANCHOR_RIGHT),
        ("anchor_top_left", ModeSet::ANCHOR_TOP_LEFT),
        ("anchor_top_right", ModeSet::ANCHOR_TOP_RIGHT),
        ("anchor_bottom_left", ModeSet::ANCHOR_BOTTOM_LEFT),
        ("anchor_bottom_right", ModeSet::ANCHOR_BOTTOM_RIGHT),
    ];

    /// This set plus `mode`. `Mode::NONE` is never added.
    pub const fn with(self, mode: Mode) -> ModeSet {
        ModeSet(self.0 | mode.bit())
    }

    pub const fn union(self, other: ModeSet) -> ModeSet {
        ModeSet(self.0 | other.0)
    }

    pub const fn difference(self, other: ModeSet) -> ModeSet {
        ModeSet(self.0 & !other.0)
    }

    pub const fn intersection(self, other: ModeSet) -> ModeSet {
        ModeSet(self.0 & other.0)
    }

    pub const fn contains(self, mode: Mode) -> bool {
        let bit = mode.bit();
        bit != 0 && self.0 & bit == bit
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Mode> {
        Mode::CANONICAL
            .into_iter()
            .filter(move |mode| self.contains(*mode))
    }
}

impl fmt::Debug for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for ModeSet {
    type Output = ModeSet;

    fn bitor(self, rhs: ModeSet) -> ModeSet {
        self.union(rhs)
    }
}

impl BitAnd for ModeSet {
    type Output = ModeSet;

    fn bitand(self, rhs: ModeSet) -> ModeSet {
        self.intersection(rhs)
    }
}

impl Sub for ModeSet {
    type Output = ModeSet;

    fn sub(self, rhs: ModeSet) -> ModeSet {
        self.difference(rhs)
    }
}

impl FromIterator<Mode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        iter.into_iter().fold(ModeSet::EMPTY, ModeSet::with)
    }
}

impl FromStr for ModeSet {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeSet::NAMED
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, set)| *set)
            .ok_or_else(|| AdjustError::UnknownModeSet(s.to_string()))
    }
}

/// Serialized form: either a named set or an explicit list of modes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModeSetRepr {
    Named(String),
    Modes(Vec<Mode>),
}

impl TryFrom<ModeSetRepr> for ModeSet {
    type Error = AdjustError;

    fn try_from(repr: ModeSetRepr) -> Result<Self, Self::Error> {
        match repr {
            ModeSetRepr::Named(name) => name.parse(),
            ModeSetRepr::Modes(modes) => Ok(modes.into_iter().collect()),
        }
    }
}

impl From<ModeSet> for Vec<Mode> {
    fn from(set: ModeSet) -> Self {
        set.iter().collect()
    }
}
