//! Layout engine: node tree in, absolute geometry out.
//!
//! Layout is a pure pass. [`layout_tree`] computes the dock layout first, then
//! walks the node tree with a [`LayoutContext`] describing the space each node
//! must fit into. Each node kind has its own strategy (stack, layer, window,
//! dock container, leaves) selected by an exhaustive match in [`layout`].
//!
//! The result borrows the node tree, so a [`LayoutTree`] cannot outlive the
//! frame it was built for.

mod dock;
mod leaf;
mod minimap;
mod stack;
mod window;

pub use leaf::{intrinsic_size, measure, window_min_size};
pub use minimap::MinimapTransform;

use nebula_core::geometry::Rect;
use nebula_core::profiling::profile_function;

use crate::config::UiConfig;
use crate::docking::{DockLayout, DockSide, DockingState, compute_dock_layout};
use crate::node::{Node, NodeKind, WindowId, WindowProps};
use crate::viewport::Viewport;

/// Space a node must fit into, plus the frame-wide inputs layout needs.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'c> {
    /// Slot assigned by the parent.
    pub bounds: Rect<f32>,
    /// Logical viewport.
    pub viewport: Rect<f32>,
    pub docking: &'c DockingState,
    pub dock_layout: &'c DockLayout,
    pub config: &'c UiConfig,
    /// Set when the parent is a dock container for this side.
    pub docked: Option<DockSide>,
}

impl<'c> LayoutContext<'c> {
    /// Context for a child placed in `bounds`.
    pub fn child(&self, bounds: Rect<f32>) -> Self {
        Self {
            bounds,
            docked: None,
            ..*self
        }
    }

    /// Context for the visible child of a dock container.
    pub fn docked_child(&self, bounds: Rect<f32>, side: DockSide) -> Self {
        Self {
            bounds,
            docked: Some(side),
            ..*self
        }
    }
}

/// Window sub-geometry. `header` and `content` are disjoint; the minimize
/// button sits inside the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    pub header: Rect<f32>,
    pub content: Rect<f32>,
    /// Only floating windows can be minimized.
    pub minimize_button: Option<Rect<f32>>,
}

/// One tab of a dock container's tab bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TabLayout {
    /// Index of the tab's node among the container's children.
    pub child_index: usize,
    pub bounds: Rect<f32>,
    pub title: String,
    pub window: Option<WindowId>,
    pub active: bool,
}

/// Dock container sub-geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DockTabsLayout {
    pub tab_bar: Rect<f32>,
    pub content: Rect<f32>,
    /// Tabs left to right, all inside `tab_bar`.
    pub tabs: Vec<TabLayout>,
    /// Child index of the visible tab.
    pub active: Option<usize>,
}

/// Type-specific geometry attached to a laid-out node.
#[derive(Debug, Clone, PartialEq)]
pub enum SubLayout {
    None,
    Slider { track: Rect<f32> },
    Window(WindowLayout),
    Dock(DockTabsLayout),
    /// `None` when the minimap has no usable world bounds.
    Minimap(Option<MinimapTransform>),
}

/// A node with its computed geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<'a> {
    pub node: &'a Node,
    /// Child indices from the root of the source tree.
    pub path: Vec<usize>,
    pub bounds: Rect<f32>,
    pub sub: SubLayout,
    /// Dock side for docked windows and dock containers.
    pub docked: Option<DockSide>,
    /// Laid-out children in paint order. Hidden children are absent.
    pub children: Vec<LayoutNode<'a>>,
}

impl<'a> LayoutNode<'a> {
    pub(crate) fn leaf(node: &'a Node, path: Vec<usize>, bounds: Rect<f32>, sub: SubLayout) -> Self {
        Self {
            node,
            path,
            bounds: bounds.non_negative(),
            sub,
            docked: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.node.kind
    }

    pub fn window(&self) -> Option<&'a WindowProps> {
        match &self.node.kind {
            NodeKind::Window(window) => Some(window),
            _ => None,
        }
    }

    pub fn window_layout(&self) -> Option<&WindowLayout> {
        match &self.sub {
            SubLayout::Window(window) => Some(window),
            _ => None,
        }
    }

    pub fn dock_tabs(&self) -> Option<&DockTabsLayout> {
        match &self.sub {
            SubLayout::Dock(dock) => Some(dock),
            _ => None,
        }
    }

    pub fn slider_track(&self) -> Option<Rect<f32>> {
        match self.sub {
            SubLayout::Slider { track } => Some(track),
            _ => None,
        }
    }

    pub fn minimap_transform(&self) -> Option<MinimapTransform> {
        match self.sub {
            SubLayout::Minimap(transform) => transform,
            _ => None,
        }
    }

    /// This node and its descendants, pre-order.
    pub fn descendants(&self) -> PreOrder<'_, 'a> {
        PreOrder { stack: vec![self] }
    }

    /// Descendant at `relative`, a child-index path starting below this node.
    pub fn find_below(&self, relative: &[usize]) -> Option<&LayoutNode<'a>> {
        let depth = self.path.len();
        self.descendants()
            .find(|node| node.path.len() == depth + relative.len() && node.path[depth..] == *relative)
    }
}

/// Pre-order iterator over a layout subtree.
pub struct PreOrder<'t, 'a> {
    stack: Vec<&'t LayoutNode<'a>>,
}

impl<'t, 'a> Iterator for PreOrder<'t, 'a> {
    type Item = &'t LayoutNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Frame-stable way to find a node again in a later layout pass.
///
/// Windows are found by id and dock containers by side, so neither loses
/// track when the tree around it changes shape. Other nodes use their key.
/// Unkeyed nodes fall back to their child-index path below the closest
/// enclosing window or dock container, and only use the path from the root
/// when neither exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Window(WindowId),
    Dock(DockSide),
    Key(String),
    InWindow { window: WindowId, path: Vec<usize> },
    InDock { side: DockSide, path: Vec<usize> },
    Path(Vec<usize>),
}

impl NodeRef {
    /// Anchor of a window or dock container node; `None` for other kinds.
    fn anchor(node: &LayoutNode<'_>) -> Option<Self> {
        match &node.node.kind {
            NodeKind::Window(window) => Some(NodeRef::Window(window.id.clone())),
            NodeKind::DockContainer(dock) => Some(NodeRef::Dock(dock.side)),
            _ => None,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTree<'a> {
    root: Option<LayoutNode<'a>>,
    viewport: Rect<f32>,
    dock_layout: DockLayout,
    config: UiConfig,
}

impl<'a> LayoutTree<'a> {
    pub fn root(&self) -> Option<&LayoutNode<'a>> {
        self.root.as_ref()
    }

    /// Logical viewport the tree was laid out in.
    pub fn viewport(&self) -> Rect<f32> {
        self.viewport
    }

    pub fn dock_layout(&self) -> &DockLayout {
        &self.dock_layout
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// All laid-out nodes, pre-order (paint order).
    pub fn iter(&self) -> PreOrder<'_, 'a> {
        PreOrder {
            stack: self.root.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn find(&self, target: &NodeRef) -> Option<&LayoutNode<'a>> {
        match target {
            NodeRef::Window(id) => self.iter().find(|node| node.window().is_some_and(|w| &w.id == id)),
            NodeRef::Dock(side) => self.iter().find(|node| {
                matches!(node.kind(), NodeKind::DockContainer(dock) if dock.side == *side)
            }),
            NodeRef::Key(key) => self
                .iter()
                .find(|node| node.node.props.key.as_ref() == Some(key)),
            NodeRef::InWindow { window, path } => self
                .find(&NodeRef::Window(window.clone()))
                .and_then(|anchor| anchor.find_below(path)),
            NodeRef::InDock { side, path } => self
                .find(&NodeRef::Dock(*side))
                .and_then(|anchor| anchor.find_below(path)),
            NodeRef::Path(path) => self.iter().find(|node| &node.path == path),
        }
    }

    /// Stable reference to `node`, which must come from this tree.
    pub fn node_ref(&self, node: &LayoutNode<'_>) -> NodeRef {
        if let Some(anchor) = NodeRef::anchor(node) {
            return anchor;
        }
        if let Some(key) = &node.node.props.key {
            return NodeRef::Key(key.clone());
        }

        // Walk down to the node, remembering the innermost anchor passed.
        let mut anchor = None;
        let mut current = self.root.as_ref();
        for (depth, index) in node.path.iter().enumerate() {
            let Some(parent) = current else {
                break;
            };
            if let Some(found) = NodeRef::anchor(parent) {
                anchor = Some((found, depth));
            }
            current = parent.children.iter().find(|child| child.path.last() == Some(index));
        }

        match anchor {
            Some((NodeRef::Window(window), depth)) => NodeRef::InWindow {
                window,
                path: node.path[depth..].to_vec(),
            },
            Some((NodeRef::Dock(side), depth)) => NodeRef::InDock {
                side,
                path: node.path[depth..].to_vec(),
            },
            _ => NodeRef::Path(node.path.clone()),
        }
    }

    pub fn find_key(&self, key: &str) -> Option<&LayoutNode<'a>> {
        self.find(&NodeRef::Key(key.to_string()))
    }

    pub fn find_window(&self, id: &WindowId) -> Option<&LayoutNode<'a>> {
        self.find(&NodeRef::Window(id.clone()))
    }
}

/// Lay out `node` and its subtree into `ctx.bounds`.
///
/// Returns `None` for node kinds the engine does not know.
pub fn layout<'a>(node: &'a Node, ctx: &LayoutContext<'_>) -> Option<LayoutNode<'a>> {
    layout_at(node, ctx, Vec::new())
}

pub(crate) fn layout_at<'a>(
    node: &'a Node,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> Option<LayoutNode<'a>> {
    let laid_out = match &node.kind {
        NodeKind::Stack(direction) => stack::layout_stack(node, *direction, ctx, path),
        NodeKind::Layer => stack::layout_layer(node, ctx, path),
        NodeKind::Window(window) => window::layout_window(node, window, ctx, path),
        NodeKind::DockContainer(dock) => dock::layout_dock(node, dock, ctx, path),
        NodeKind::Slider(slider) => leaf::layout_slider(node, slider, ctx, path),
        NodeKind::Minimap(minimap) => leaf::layout_minimap(node, minimap, ctx, path),
        NodeKind::Button(_)
        | NodeKind::Label(_)
        | NodeKind::BarChart(_)
        | NodeKind::Image(_)
        | NodeKind::Spacer => leaf::layout_leaf(node, ctx, path),
        NodeKind::Unknown(tag) => {
            tracing::debug!(tag = %tag, ?path, "Skipping node of unknown kind");
            return None;
        }
    };
    Some(laid_out)
}

pub(crate) fn child_path(path: &[usize], index: usize) -> Vec<usize> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(index);
    child
}

/// Slot for a freely positioned node: props offset from `area`, explicit
/// size or the rest of the area.
pub(crate) fn free_slot(node: &Node, area: Rect<f32>) -> Rect<f32> {
    let props = &node.props;
    let dx = props.x.unwrap_or(0.0);
    let dy = props.y.unwrap_or(0.0);
    Rect::new(
        area.x + dx,
        area.y + dy,
        props.width.unwrap_or(area.width - dx).max(0.0),
        props.height.unwrap_or(area.height - dy).max(0.0),
    )
}

/// Run a full layout pass for one frame.
pub fn layout_tree<'a>(
    tree: &'a Node,
    docking: &DockingState,
    viewport: Viewport,
    config: &UiConfig,
) -> LayoutTree<'a> {
    profile_function!();

    let logical = viewport.logical();
    let dock_layout = compute_dock_layout(logical, docking, config);
    let ctx = LayoutContext {
        bounds: free_slot(tree, logical),
        viewport: logical,
        docking,
        dock_layout: &dock_layout,
        config,
        docked: None,
    };
    let root = layout(tree, &ctx);

    LayoutTree {
        root,
        viewport: logical,
        dock_layout,
        config: *config,
    }
}
