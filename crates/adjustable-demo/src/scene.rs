//! Scene files: a widget tree plus a scripted pointer sequence.

use crate::error::{DemoError, DemoResult};
use adjustable_core::{AdjusterConfig, Button, ButtonSet, Modifiers, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Scene replayed when no file is given.
const BUILTIN_SCENE: &str = include_str!("../scenes/generic.json");

fn default_screen() -> Rect {
    Rect::new(0, 0, 1920, 1080)
}

/// A complete scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    /// Available screen area; the container of the root widget.
    #[serde(default = "default_screen")]
    pub screen: Rect,
    pub root: WidgetSpec,
    /// Pointer steps in screen coordinates.
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

/// One widget and its children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub name: String,
    /// Position in the parent's coordinates (screen coordinates for the root).
    #[serde(default)]
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub min_size: Option<Size>,
    #[serde(default)]
    pub max_size: Option<Size>,
    /// Adjuster settings; widgets without one cannot be dragged or resized.
    #[serde(default)]
    pub adjust: Option<AdjusterConfig>,
    #[serde(default)]
    pub fixed_width: Option<i32>,
    #[serde(default)]
    pub fixed_height: Option<i32>,
    #[serde(default)]
    pub fixed_size: Option<Size>,
    #[serde(default)]
    pub children: Vec<WidgetSpec>,
}

impl WidgetSpec {
    pub fn new(name: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            name: name.into(),
            position,
            size,
            min_size: None,
            max_size: None,
            adjust: None,
            fixed_width: None,
            fixed_height: None,
            fixed_size: None,
            children: Vec::new(),
        }
    }

    pub fn with_adjust(mut self, config: AdjusterConfig) -> Self {
        self.adjust = Some(config);
        self
    }

    pub fn with_child(mut self, child: WidgetSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn geometry(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Iterate over this widget and all descendants, depth first.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &WidgetSpec> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(|c| c.walk())))
    }
}

/// A scripted pointer action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Press {
        at: Point,
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Move {
        at: Point,
        /// Buttons held during the move; empty for hovering.
        #[serde(default)]
        buttons: ButtonSet,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Release {
        at: Point,
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Destroy a widget and its children.
    Remove { widget: String },
}

impl Scene {
    /// Parse a scene from JSON and check widget names are unique.
    pub fn from_json(json: &str) -> DemoResult<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.check_names()?;
        Ok(scene)
    }

    /// Load a scene file.
    pub fn load(path: impl AsRef<Path>) -> DemoResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// The scene bundled with the binary.
    pub fn builtin() -> DemoResult<Self> {
        Self::from_json(BUILTIN_SCENE)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn check_names(&self) -> DemoResult<()> {
        let mut seen = HashSet::new();
        for spec in self.root.walk() {
            if !seen.insert(spec.name.as_str()) {
                return Err(DemoError::DuplicateWidget(spec.name.clone()));
            }
        }
        Ok(())
    }
}
