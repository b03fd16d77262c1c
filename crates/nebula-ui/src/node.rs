//! Immutable node tree handed to the engine every frame.
//!
//! A [`Node`] is a plain value: a [`NodeKind`] tag carrying the kind-specific
//! properties, the common [`Props`] and the ordered children. Children order is
//! both layout order and paint order (later children are drawn on top).
//!
//! ```
//! use nebula_ui::node::{Node, SliderProps};
//!
//! let panel = Node::vstack()
//!     .padding(8.0)
//!     .gap(4.0)
//!     .child(Node::label("Star density"))
//!     .child(Node::slider(SliderProps::new(0.4, 4.0).step(0.1).value(1.0)));
//! assert_eq!(panel.children.len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use nebula_core::geometry::Rect;
use nebula_core::math::Vec2;

use crate::color::Color;
use crate::docking::DockSide;
use crate::event::Action;

/// Stable identifier of a window across frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(Arc<str>);

impl WindowId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to an image owned by the graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);

/// Main axis of a stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Stroke drawn around a node's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

/// Properties every node kind understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    /// Identity used to find the node again in a later frame's layout.
    pub key: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Option<f32>,
    pub gap: Option<f32>,
    /// Take a share of the leftover main-axis space in a sized stack.
    pub grow: bool,
    /// Paint/hit order inside a layer; higher is on top.
    pub z_index: i32,
    pub background: Option<Color>,
    pub border: Option<Border>,
}

/// A floating or docked window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowProps {
    pub id: WindowId,
    pub title: String,
    /// Stored bounds. Ignored while the window is docked.
    pub bounds: Option<Rect<f32>>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub minimized: bool,
    pub resizable: bool,
}

impl WindowProps {
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            bounds: None,
            min_width: None,
            min_height: None,
            minimized: false,
            resizable: true,
        }
    }

    pub fn bounds(mut self, bounds: Rect<f32>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    pub fn minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// A tabbed container bound to one dock side.
#[derive(Debug, Clone, PartialEq)]
pub struct DockContainerProps {
    pub side: DockSide,
    /// Index of the visible child. Falls back to the side's active window.
    pub active: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Option<Action>,
    pub enabled: bool,
    pub font_size: Option<f32>,
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            enabled: true,
            font_size: None,
        }
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelProps {
    pub text: String,
    pub font_size: Option<f32>,
    pub color: Option<Color>,
    pub align: TextAlign,
}

impl LabelProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: None,
            color: None,
            align: TextAlign::Left,
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A horizontal value slider. `min` and `max` are required; a slider
/// missing either lays out as a degenerate, non-interactive element.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderProps {
    /// Name of the setting the slider drives.
    pub binding: Option<String>,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub step: Option<f32>,
    pub value: f32,
}

impl SliderProps {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            binding: None,
            min: Some(min),
            max: Some(max),
            step: None,
            value: min,
        }
    }

    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }

    /// `(min, max)` when both are present, finite and ordered.
    pub fn range(&self) -> Option<(f32, f32)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min.is_finite() && max.is_finite() && min <= max => {
                Some((min, max))
            }
            _ => None,
        }
    }
}

/// A star shown on the minimap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapMarker {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Overview map of the galaxy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinimapProps {
    /// World-space extent mapped into the node's bounds. Required.
    pub world_bounds: Option<Rect<f32>>,
    /// World-space rectangle the main camera currently shows.
    pub viewport_rect: Option<Rect<f32>>,
    pub markers: Vec<MinimapMarker>,
    /// Hyperlanes as world-space segments.
    pub lanes: Vec<[Vec2; 2]>,
    /// Index into `markers` of the selected star.
    pub selected: Option<usize>,
}

impl MinimapProps {
    pub fn new(world_bounds: Rect<f32>) -> Self {
        Self {
            world_bounds: Some(world_bounds),
            ..Self::default()
        }
    }

    pub fn viewport_rect(mut self, rect: Rect<f32>) -> Self {
        self.viewport_rect = Some(rect);
        self
    }

    pub fn marker(mut self, position: Vec2, radius: f32, color: Color) -> Self {
        self.markers.push(MinimapMarker {
            position,
            radius,
            color,
        });
        self
    }

    pub fn lane(mut self, from: Vec2, to: Vec2) -> Self {
        self.lanes.push([from, to]);
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChartProps {
    pub values: Vec<f32>,
    /// Value mapped to full height. Defaults to the largest value.
    pub max: Option<f32>,
    pub bar_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageProps {
    pub image: ImageHandle,
    /// Rotation in radians about the image centre.
    pub rotation: Option<f32>,
    pub tint: Color,
}

/// Closed set of node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Stack(StackDirection),
    /// Free-positioning container for floating windows and dock containers.
    Layer,
    DockContainer(DockContainerProps),
    Window(WindowProps),
    Button(ButtonProps),
    Label(LabelProps),
    Slider(SliderProps),
    Minimap(MinimapProps),
    BarChart(BarChartProps),
    Image(ImageProps),
    Spacer,
    /// A tag the engine does not know, e.g. from a data-driven tree.
    /// Skipped by layout, hit-testing and painting.
    Unknown(String),
}

impl NodeKind {
    /// Short tag for logging.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Stack(StackDirection::Vertical) => "vstack",
            NodeKind::Stack(StackDirection::Horizontal) => "hstack",
            NodeKind::Layer => "layer",
            NodeKind::DockContainer(_) => "dock-container",
            NodeKind::Window(_) => "window",
            NodeKind::Button(_) => "button",
            NodeKind::Label(_) => "label",
            NodeKind::Slider(_) => "slider",
            NodeKind::Minimap(_) => "minimap",
            NodeKind::BarChart(_) => "bar-chart",
            NodeKind::Image(_) => "image",
            NodeKind::Spacer => "spacer",
            NodeKind::Unknown(tag) => tag,
        }
    }
}

/// One element of the UI tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub props: Props,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: Props::default(),
            children: Vec::new(),
        }
    }

    pub fn vstack() -> Self {
        Self::new(NodeKind::Stack(StackDirection::Vertical))
    }

    pub fn hstack() -> Self {
        Self::new(NodeKind::Stack(StackDirection::Horizontal))
    }

    pub fn layer() -> Self {
        Self::new(NodeKind::Layer)
    }

    pub fn window(props: WindowProps) -> Self {
        Self::new(NodeKind::Window(props))
    }

    pub fn dock(side: DockSide) -> Self {
        Self::new(NodeKind::DockContainer(DockContainerProps { side, active: None }))
    }

    pub fn button(label: impl Into<String>, on_click: Action) -> Self {
        Self::new(NodeKind::Button(ButtonProps::new(label).on_click(on_click)))
    }

    pub fn button_with(props: ButtonProps) -> Self {
        Self::new(NodeKind::Button(props))
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Label(LabelProps::new(text)))
    }

    pub fn label_with(props: LabelProps) -> Self {
        Self::new(NodeKind::Label(props))
    }

    pub fn slider(props: SliderProps) -> Self {
        Self::new(NodeKind::Slider(props))
    }

    pub fn minimap(props: MinimapProps) -> Self {
        Self::new(NodeKind::Minimap(props))
    }

    pub fn bar_chart(values: Vec<f32>) -> Self {
        Self::new(NodeKind::BarChart(BarChartProps {
            values,
            ..BarChartProps::default()
        }))
    }

    pub fn image(image: ImageHandle) -> Self {
        Self::new(NodeKind::Image(ImageProps {
            image,
            rotation: None,
            tint: Color::WHITE,
        }))
    }

    pub fn spacer() -> Self {
        Self::new(NodeKind::Spacer)
    }

    pub fn unknown(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Unknown(tag.into()))
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.props.key = Some(key.into());
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.props.x = Some(x);
        self.props.y = Some(y);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.props.width = Some(width);
        self.props.height = Some(height);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.props.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.props.height = Some(height);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.props.padding = Some(padding);
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.props.gap = Some(gap);
        self
    }

    pub fn grow(mut self) -> Self {
        self.props.grow = true;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.props.z_index = z_index;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.props.background = Some(color);
        self
    }

    pub fn border(mut self, color: Color, width: f32) -> Self {
        self.props.border = Some(Border { color, width });
        self
    }

    /// Select the visible tab of a dock container. No effect on other kinds.
    pub fn active_tab(mut self, index: usize) -> Self {
        if let NodeKind::DockContainer(dock) = &mut self.kind {
            dock.active = Some(index);
        }
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Window id when this node is a window.
    pub fn window_id(&self) -> Option<&WindowId> {
        match &self.kind {
            NodeKind::Window(window) => Some(&window.id),
            _ => None,
        }
    }

    /// Text shown on this node's tab when it sits in a dock container.
    pub fn tab_title(&self) -> &str {
        match &self.kind {
            NodeKind::Window(window) => &window.title,
            NodeKind::Label(label) => &label.text,
            NodeKind::Button(button) => &button.label,
            other => other.name(),
        }
    }
}
