//! Pointer routing and scripted replay.
//!
//! Presses go to the topmost widget under the pointer and travel up the
//! parent chain until an adjuster accepts them; the accepting widget then
//! grabs the pointer until its gesture ends. Hover moves go to the widget
//! under the pointer only, and the widget the pointer left gets a leave.

use crate::error::{DemoError, DemoResult};
use crate::host::{NodeId, SceneTree};
use crate::scene::{Scene, ScriptStep, WidgetSpec};
use adjustable_core::{
    AdjustableWidget, Adjuster, Button, ButtonSet, CursorKind, GestureOutcome, InteractionState,
    Modifiers, Point, PointerEvent, Rect,
};
use serde::Serialize;
use std::collections::HashMap;

/// A finished gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeRecord {
    pub widget: String,
    pub outcome: GestureOutcome,
}

/// Final state of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetReport {
    pub name: String,
    pub geometry: Rect,
    pub cursor: Option<CursorKind>,
    pub mutations: usize,
    /// `None` for widgets without an adjuster.
    pub state: Option<InteractionState>,
}

/// Everything a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scene: String,
    pub focused: Option<String>,
    pub widgets: Vec<WidgetReport>,
    pub outcomes: Vec<OutcomeRecord>,
}

/// A live scene driven by pointer events in screen coordinates.
pub struct Replay {
    name: String,
    tree: SceneTree,
    adjusters: HashMap<NodeId, Adjuster>,
    /// Widget holding the pointer grab during a gesture.
    grab: Option<NodeId>,
    /// Widget under the pointer at the last ungrabbed move.
    hovered: Option<NodeId>,
    outcomes: Vec<OutcomeRecord>,
}

impl Replay {
    /// Build the widget tree and one adjuster per adjustable widget.
    pub fn new(scene: &Scene) -> DemoResult<Self> {
        let mut replay = Self {
            name: scene.name.clone(),
            tree: SceneTree::new(scene.screen),
            adjusters: HashMap::new(),
            grab: None,
            hovered: None,
            outcomes: Vec::new(),
        };
        replay.add(None, &scene.root)?;
        Ok(replay)
    }

    fn add(&mut self, parent: Option<NodeId>, spec: &WidgetSpec) -> DemoResult<()> {
        let id = self.tree.insert(parent, spec);

        if let Some(config) = &spec.adjust {
            let mut adjuster = Adjuster::new(config.clone())?;
            if let Some(mut widget) = self.tree.handle(id) {
                if let Some(size) = spec.fixed_size {
                    adjuster.set_fixed_size(&mut widget, Some(size));
                }
                if spec.fixed_width.is_some() {
                    adjuster.set_fixed_width(&mut widget, spec.fixed_width);
                }
                if spec.fixed_height.is_some() {
                    adjuster.set_fixed_height(&mut widget, spec.fixed_height);
                }
            }
            log::debug!("{} adjustable: {:?}", spec.name, adjuster.allowed_modes());
            self.adjusters.insert(id, adjuster);
        }

        for child in &spec.children {
            self.add(Some(id), child)?;
        }
        Ok(())
    }

    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    pub fn adjuster(&self, name: &str) -> Option<&Adjuster> {
        self.tree.find(name).and_then(|id| self.adjusters.get(&id))
    }

    pub fn geometry(&self, name: &str) -> Option<Rect> {
        self.tree.find(name).and_then(|id| self.tree.geometry(id))
    }

    /// Name of the widget holding the pointer grab.
    pub fn grabbed(&self) -> Option<&str> {
        self.grab.and_then(|id| self.tree.name(id))
    }

    pub fn outcomes(&self) -> &[OutcomeRecord] {
        &self.outcomes
    }

    /// Replay every step in order, stopping at the first error.
    pub fn run(&mut self, script: &[ScriptStep]) -> DemoResult<()> {
        for step in script {
            self.step(step)?;
        }
        Ok(())
    }

    pub fn step(&mut self, step: &ScriptStep) -> DemoResult<()> {
        match step {
            ScriptStep::Press {
                at,
                button,
                modifiers,
            } => self.press(*at, *button, *modifiers)?,
            ScriptStep::Move {
                at,
                buttons,
                modifiers,
            } => self.pointer_move(*at, *buttons, *modifiers),
            ScriptStep::Release {
                at,
                button,
                modifiers,
            } => {
                self.release(*at, *button, *modifiers);
            }
            ScriptStep::Remove { widget } => self.remove(widget)?,
        }
        Ok(())
    }

    /// Deliver a press, propagating it to parents until one accepts.
    pub fn press(&mut self, at: Point, button: Button, modifiers: Modifiers) -> DemoResult<()> {
        let Some(target) = self.grab.or_else(|| self.tree.hit_test(at)) else {
            log::debug!("press at {at:?} outside every widget");
            return Ok(());
        };
        let event = PointerEvent::press(at, button).with_modifiers(modifiers);

        for id in self.tree.ancestry(target) {
            let local = self.tree.to_local(id, at);
            let (Some(adjuster), Some(mut widget)) =
                (self.adjusters.get_mut(&id), self.tree.handle(id))
            else {
                continue;
            };

            let mut event = event.relocated(local);
            adjuster.handle_press(&mut widget, &mut event)?;
            if event.is_accepted() {
                self.grab = Some(id);
                return Ok(());
            }
        }
        Ok(())
    }

    /// Deliver a move to the grabbing widget, or to the widget under the pointer.
    pub fn pointer_move(&mut self, at: Point, buttons: ButtonSet, modifiers: Modifiers) {
        let event = PointerEvent::moved(at, buttons).with_modifiers(modifiers);

        let target = match self.grab {
            Some(id) => Some(id),
            None => {
                let hit = self.tree.hit_test(at);
                self.hover_enter(hit);
                hit
            }
        };
        let Some(target) = target else {
            return;
        };
        let local = self.tree.to_local(target, at);
        let (Some(adjuster), Some(mut widget)) =
            (self.adjusters.get_mut(&target), self.tree.handle(target))
        else {
            return;
        };

        let mut event = event.relocated(local);
        adjuster.handle_move(&mut widget, &mut event);
        if !adjuster.is_active() && self.grab == Some(target) {
            self.grab = None;
            self.hovered = Some(target);
        }
    }

    /// Record the widget now under the pointer and send a leave to the previous one.
    fn hover_enter(&mut self, hit: Option<NodeId>) {
        if self.hovered == hit {
            return;
        }
        if let Some(left) = self.hovered.take() {
            if let (Some(adjuster), Some(mut widget)) =
                (self.adjusters.get_mut(&left), self.tree.handle(left))
            {
                adjuster.handle_leave(&mut widget);
            }
        }
        self.hovered = hit;
    }

    /// Deliver a release, returning the outcome of the gesture it ended.
    pub fn release(
        &mut self,
        at: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Option<GestureOutcome> {
        let event = PointerEvent::release(at, button).with_modifiers(modifiers);
        let targets = match self.grab {
            Some(id) => vec![id],
            None => self
                .tree
                .hit_test(at)
                .map(|id| self.tree.ancestry(id))
                .unwrap_or_default(),
        };

        for id in targets {
            let local = self.tree.to_local(id, at);
            let (Some(adjuster), Some(mut widget)) =
                (self.adjusters.get_mut(&id), self.tree.handle(id))
            else {
                continue;
            };

            let mut event = event.relocated(local);
            if let Some(outcome) = adjuster.handle_release(&mut widget, &mut event) {
                let name = widget.name().to_string();
                log::info!("{name}: {outcome:?}");
                self.outcomes.push(OutcomeRecord {
                    widget: name,
                    outcome,
                });
                self.grab = None;
                return Some(outcome);
            }
        }
        None
    }

    /// Destroy a widget and its children, dropping any gesture they own.
    pub fn remove(&mut self, name: &str) -> DemoResult<()> {
        let id = self
            .tree
            .find(name)
            .ok_or_else(|| DemoError::UnknownWidget(name.to_string()))?;

        for removed in self.tree.remove(id) {
            if let Some(mut adjuster) = self.adjusters.remove(&removed) {
                if adjuster.cancel() {
                    log::debug!("gesture dropped with removed widget {removed}");
                }
            }
            if self.grab == Some(removed) {
                self.grab = None;
            }
            if self.hovered == Some(removed) {
                self.hovered = None;
            }
        }
        log::info!("{name} removed");
        Ok(())
    }

    pub fn report(&self) -> Report {
        let widgets = self
            .tree
            .ids()
            .filter_map(|id| {
                Some(WidgetReport {
                    name: self.tree.name(id)?.to_string(),
                    geometry: self.tree.geometry(id)?,
                    cursor: self.tree.cursor(id),
                    mutations: self.tree.mutations(id),
                    state: self.adjusters.get(&id).map(Adjuster::state),
                })
            })
            .collect();

        Report {
            scene: self.name.clone(),
            focused: self
                .tree
                .focused()
                .and_then(|id| self.tree.name(id))
                .map(str::to_string),
            widgets,
            outcomes: self.outcomes.clone(),
        }
    }
}
