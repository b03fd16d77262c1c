//! Nebula UI - retained-mode UI engine for the galaxy client
//!
//! The application rebuilds an immutable [`Node`] tree every frame. The engine
//! then runs three pure passes over it:
//! - **Layout**: node tree + docking state + viewport into absolute geometry
//!   ([`layout::layout_tree`])
//! - **Interaction**: pointer input against that geometry into [`UiEvent`]s,
//!   with pointer capture for drags ([`interaction::Interaction`])
//! - **Painting**: geometry into an ordered [`CommandList`] for the graphics
//!   backend ([`command_builder::build_commands`])
//!
//! Application state (window bounds, docking, settings, camera) stays with the
//! application and only changes through an [`EventDispatcher`];
//! [`workspace::Workspace`] is a ready-made one.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_ui::docking::DockSide;
//! use nebula_ui::event::EventDispatcher;
//! use nebula_ui::workspace::Workspace;
//! use nebula_ui::{Node, Rect, UiContext, Vec2, Viewport};
//!
//! let mut workspace = Workspace::new();
//! workspace.add_window("log", "Event Log", Rect::new(40.0, 40.0, 240.0, 160.0));
//!
//! let mut ui = UiContext::new();
//! let tree = Node::layer()
//!     .child(Node::dock(DockSide::Bottom))
//!     .child(Node::window(workspace.window_props(&"log".into()).unwrap()));
//!
//! let layout = ui.layout(&tree, workspace.docking(), Viewport::new(1280.0, 720.0, 1.0));
//! // Press on the title bar, drag, release.
//! let mut events = ui.pointer_down(&layout, Vec2::new(60.0, 50.0)).events;
//! events.extend(ui.pointer_drag(&layout, Vec2::new(80.0, 60.0)).events);
//! events.extend(ui.pointer_up(&layout, Vec2::new(80.0, 60.0)).events);
//! assert!(workspace.dispatch_all(events).is_empty());
//! assert_eq!(workspace.window(&"log".into()).unwrap().bounds.x, 60.0);
//!
//! let commands = ui.build_commands(&layout, 0.0);
//! # assert!(!commands.is_empty());
//! ```

pub mod color;
pub mod command;
pub mod command_builder;
pub mod config;
pub mod context;
pub mod docking;
pub mod event;
pub mod interaction;
pub mod layout;
pub mod node;
pub mod theme;
pub mod viewport;
pub mod workspace;

pub use color::Color;
pub use command::{Command, CommandExecutor, CommandList, ShapeStyle, Stroke};
pub use config::UiConfig;
pub use context::UiContext;
pub use event::{Action, Dispatch, EventDispatcher, UiEvent};
pub use interaction::{InteractionState, PointerResponse};
pub use layout::{LayoutNode, LayoutTree, NodeRef};
pub use node::{Node, NodeKind, WindowId};
pub use theme::Theme;
pub use viewport::Viewport;

// Re-export common types from dependencies
pub use nebula_core::geometry::{Rect, Size};
pub use nebula_core::math::{Vec2, vec2};
