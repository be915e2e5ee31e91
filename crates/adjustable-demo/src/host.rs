//! In-memory widget tree standing in for a desktop toolkit.

use crate::scene::WidgetSpec;
use adjustable_core::{AdjustableWidget, CursorKind, Point, Rect, Size};

/// Index of a widget in a [`SceneTree`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Geometry in the parent's coordinates.
    geometry: Rect,
    min_size: Size,
    max_size: Size,
    cursor: Option<CursorKind>,
    /// Number of position/geometry updates applied.
    mutations: usize,
}

/// Arena of widgets. Removed widgets leave an empty slot so ids stay stable.
#[derive(Debug, Clone)]
pub struct SceneTree {
    nodes: Vec<Option<Node>>,
    root: Option<NodeId>,
    screen: Rect,
    focused: Option<NodeId>,
}

impl SceneTree {
    pub fn new(screen: Rect) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            screen,
            focused: None,
        }
    }

    /// Add `spec` and its children under `parent`, returning the new id.
    pub fn insert(&mut self, parent: Option<NodeId>, spec: &WidgetSpec) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Some(Node {
            name: spec.name.clone(),
            parent,
            children: Vec::new(),
            geometry: spec.geometry(),
            min_size: spec.min_size.unwrap_or(Size::ZERO),
            max_size: spec.max_size.unwrap_or(Size::UNBOUNDED),
            cursor: None,
            mutations: 0,
        }));

        match parent.and_then(|p| self.node_mut(p)) {
            Some(parent) => parent.children.push(id),
            None => self.root = Some(id),
        }
        id
    }

    /// Remove a widget and its whole subtree, returning the removed ids.
    pub fn remove(&mut self, id: NodeId) -> Vec<NodeId> {
        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(next).and_then(Option::take) {
                stack.extend(node.children);
                removed.push(next);
            }
        }

        for parent in self.nodes.iter_mut().flatten() {
            parent.children.retain(|child| *child != id);
        }
        if self.root == Some(id) {
            self.root = None;
        }
        if self.focused.is_some_and(|f| removed.contains(&f)) {
            self.focused = None;
        }
        removed
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.ids().find(|id| self.name(*id) == Some(name))
    }

    /// Ids of all live widgets in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, node)| node.as_ref().map(|_| id))
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn geometry(&self, id: NodeId) -> Option<Rect> {
        self.node(id).map(|n| n.geometry)
    }

    pub fn cursor(&self, id: NodeId) -> Option<CursorKind> {
        self.node(id).and_then(|n| n.cursor)
    }

    pub fn mutations(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, |n| n.mutations)
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Origin of a widget in screen coordinates.
    pub fn screen_origin(&self, id: NodeId) -> Point {
        let mut origin = Point::ZERO;
        let mut current = self.node(id);
        while let Some(node) = current {
            origin = origin + node.geometry.origin();
            current = node.parent.and_then(|p| self.node(p));
        }
        origin
    }

    /// Translate a screen point into a widget's local coordinates.
    pub fn to_local(&self, id: NodeId, screen: Point) -> Point {
        screen - self.screen_origin(id)
    }

    /// Topmost widget under a screen point. Later siblings paint over earlier ones.
    pub fn hit_test(&self, screen: Point) -> Option<NodeId> {
        let root = self.root?;
        let root_rect = self.geometry(root)?;
        if !root_rect.contains(screen) {
            return None;
        }

        let mut hit = root;
        'descend: loop {
            let Some(node) = self.node(hit) else {
                break;
            };
            let local = self.to_local(hit, screen);
            for child in node.children.iter().rev() {
                if self.geometry(*child).is_some_and(|g| g.contains(local)) {
                    hit = *child;
                    continue 'descend;
                }
            }
            break;
        }
        Some(hit)
    }

    /// `id` followed by its ancestors up to the root.
    pub fn ancestry(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(id).filter(|id| self.contains(*id));
        while let Some(next) = current {
            chain.push(next);
            current = self.parent(next);
        }
        chain
    }

    /// Borrow a widget through the adjuster interface.
    pub fn handle(&mut self, id: NodeId) -> Option<WidgetHandle<'_>> {
        let container = match self.node(id)?.parent {
            Some(parent) => self
                .geometry(parent)
                .map(|g| Rect::from_origin_size(Point::ZERO, g.size())),
            None => Some(self.screen),
        };
        let node = self.nodes.get_mut(id)?.as_mut()?;
        Some(WidgetHandle {
            id,
            node,
            container,
            focused: &mut self.focused,
        })
    }
}

/// A live widget seen through [`AdjustableWidget`], valid for one event.
pub struct WidgetHandle<'a> {
    id: NodeId,
    node: &'a mut Node,
    /// The parent's content area, or the screen for the root.
    container: Option<Rect>,
    focused: &'a mut Option<NodeId>,
}

impl WidgetHandle<'_> {
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl AdjustableWidget for WidgetHandle<'_> {
    fn position(&self) -> Point {
        self.node.geometry.origin()
    }

    fn set_position(&mut self, position: Point) {
        self.node.geometry = self.node.geometry.with_origin(position);
        self.node.mutations += 1;
    }

    fn size(&self) -> Size {
        self.node.geometry.size()
    }

    fn set_geometry(&mut self, geometry: Rect) {
        self.node.geometry = geometry;
        self.node.mutations += 1;
    }

    fn min_size(&self) -> Size {
        self.node.min_size
    }

    fn max_size(&self) -> Size {
        self.node.max_size
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn map_to_parent(&self, point: Point) -> Point {
        point + self.position()
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        self.node.cursor = Some(cursor);
    }

    fn clear_cursor(&mut self) {
        self.node.cursor = None;
    }

    fn request_focus(&mut self) {
        *self.focused = Some(self.id);
    }

    fn name(&self) -> &str {
        &self.node.name
    }
}
