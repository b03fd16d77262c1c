//! Docking workspace: which windows live on which side, and how the viewport
//! is partitioned between the sides.
//!
//! [`DockingState`] is owned by the application and changed only through
//! event dispatch. [`compute_dock_layout`] is a pure function of that state
//! and the viewport; it runs before node layout so docked windows can take
//! their bounds from the dock instead of their stored props.
//!
//! ```
//! use nebula_core::geometry::Rect;
//! use nebula_ui::UiConfig;
//! use nebula_ui::docking::{DockSide, DockingState, compute_dock_layout};
//!
//! let mut docking = DockingState::new();
//! docking.dock("log".into(), DockSide::Bottom);
//! docking.set_size(DockSide::Bottom, 200.0);
//!
//! let layout = compute_dock_layout(
//!     Rect::new(0.0, 0.0, 1000.0, 800.0),
//!     &docking,
//!     &UiConfig::default(),
//! );
//! assert_eq!(layout.bottom.y, 600.0);
//! assert!(layout.left.is_empty());
//! ```

pub mod layout;
pub mod types;

pub use layout::{DockLayout, compute_dock_layout};
pub use types::{DEFAULT_DOCK_SIZE, DockError, DockResult, DockSide, DockSlot, DockingState};
