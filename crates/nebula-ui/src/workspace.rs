//! Reference application state: windows, docking, settings and camera.
//!
//! The engine never writes application state itself. [`Workspace`] is the
//! state a client typically keeps and the [`EventDispatcher`] that applies
//! the engine's events to it. Clients with their own state can implement the
//! trait on their own types instead.

use indexmap::IndexMap;
use nebula_core::alloc::HashMap;
use nebula_core::geometry::Rect;
use nebula_core::math::Vec2;

use crate::docking::{DockError, DockResult, DockSide, DockingState};
use crate::event::{Action, Dispatch, EventDispatcher, UiEvent};
use crate::node::{WindowId, WindowProps};

/// Stored state of one window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    pub title: String,
    /// Floating bounds, kept while the window is docked.
    pub bounds: Rect<f32>,
    pub minimized: bool,
    pub open: bool,
    /// Higher is drawn on top.
    pub z_order: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    docking: DockingState,
    windows: IndexMap<WindowId, WindowState>,
    settings: HashMap<String, f32>,
    camera_target: Option<Vec2>,
    next_z: u32,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an open, floating window on top of the others.
    pub fn add_window(&mut self, id: impl Into<WindowId>, title: impl Into<String>, bounds: Rect<f32>) {
        self.next_z += 1;
        let id = id.into();
        tracing::debug!(window = %id, ?bounds, "Adding window");
        self.windows.insert(
            id,
            WindowState {
                title: title.into(),
                bounds: bounds.non_negative(),
                minimized: false,
                open: true,
                z_order: self.next_z,
            },
        );
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.get(id)
    }

    /// All windows in registration order.
    pub fn windows(&self) -> impl Iterator<Item = (&WindowId, &WindowState)> {
        self.windows.iter()
    }

    /// Open windows not held by any dock side, back to front.
    pub fn floating_windows(&self) -> Vec<(&WindowId, &WindowState)> {
        let mut floating: Vec<_> = self
            .windows
            .iter()
            .filter(|(id, state)| state.open && !self.docking.is_docked(id))
            .collect();
        floating.sort_by_key(|(_, state)| state.z_order);
        floating
    }

    /// Props for building `id`'s window node from the stored state.
    pub fn window_props(&self, id: &WindowId) -> DockResult<WindowProps> {
        let state = self
            .windows
            .get(id)
            .ok_or_else(|| DockError::UnknownWindow(id.clone()))?;
        Ok(WindowProps::new(id.clone(), state.title.clone())
            .bounds(state.bounds)
            .minimized(state.minimized))
    }

    pub fn docking(&self) -> &DockingState {
        &self.docking
    }

    pub fn docking_mut(&mut self) -> &mut DockingState {
        &mut self.docking
    }

    /// Dock a known window on `side`, opening it if needed.
    pub fn dock_window(&mut self, id: &WindowId, side: DockSide) -> DockResult<()> {
        let state = self
            .windows
            .get_mut(id)
            .ok_or_else(|| DockError::UnknownWindow(id.clone()))?;
        state.open = true;
        self.docking.dock(id.clone(), side);
        Ok(())
    }

    /// Register a slider-bound setting with its initial value.
    pub fn register_setting(&mut self, name: impl Into<String>, value: f32) {
        self.settings.insert(name.into(), value);
    }

    pub fn setting(&self, name: &str) -> Option<f32> {
        self.settings.get(name).copied()
    }

    /// Where the last minimap interaction asked the camera to go.
    pub fn camera_target(&self) -> Option<Vec2> {
        self.camera_target
    }

    fn apply_action(&mut self, action: Action) -> Dispatch {
        match action {
            Action::ToggleWindow(id) => match self.windows.get_mut(&id) {
                Some(state) => {
                    state.open = !state.open;
                    if !state.open {
                        self.docking.undock(&id);
                    }
                    Dispatch::Handled
                }
                None => unknown_window(UiEvent::Action(Action::ToggleWindow(id))),
            },
            Action::DockWindow { window, side } => match self.dock_window(&window, side) {
                Ok(()) => Dispatch::Handled,
                Err(err) => {
                    tracing::warn!("{}", err);
                    Dispatch::Unhandled(UiEvent::Action(Action::DockWindow { window, side }))
                }
            },
            Action::UndockWindow(id) => {
                if !self.windows.contains_key(&id) {
                    return unknown_window(UiEvent::Action(Action::UndockWindow(id)));
                }
                if self.docking.undock(&id).is_none() {
                    tracing::debug!(window = %id, "Undock requested for a floating window");
                }
                Dispatch::Handled
            }
            Action::Named(name) => {
                tracing::warn!(action = %name, "No handler for named action");
                Dispatch::Unhandled(UiEvent::Action(Action::Named(name)))
            }
        }
    }
}

fn unknown_window(event: UiEvent) -> Dispatch {
    tracing::warn!(?event, "Event names an unknown window");
    Dispatch::Unhandled(event)
}

impl EventDispatcher for Workspace {
    fn dispatch(&mut self, event: UiEvent) -> Dispatch {
        match event {
            UiEvent::WindowSetBounds { window, bounds } => match self.windows.get_mut(&window) {
                Some(state) => {
                    state.bounds = bounds.non_negative();
                    Dispatch::Handled
                }
                None => unknown_window(UiEvent::WindowSetBounds { window, bounds }),
            },
            UiEvent::WindowRaise(window) => match self.windows.get_mut(&window) {
                Some(state) => {
                    // The top window keeps its z.
                    if state.z_order != self.next_z {
                        self.next_z += 1;
                        state.z_order = self.next_z;
                    }
                    Dispatch::Handled
                }
                None => unknown_window(UiEvent::WindowRaise(window)),
            },
            UiEvent::WindowToggleMinimized(window) => match self.windows.get_mut(&window) {
                Some(state) => {
                    state.minimized = !state.minimized;
                    Dispatch::Handled
                }
                None => unknown_window(UiEvent::WindowToggleMinimized(window)),
            },
            UiEvent::DockResize { side, size } => {
                self.docking.set_size(side, size);
                Dispatch::Handled
            }
            UiEvent::DockSelectTab {
                side,
                child_index,
                window: Some(id),
            } => match self.docking.set_active(side, &id) {
                Ok(()) => Dispatch::Handled,
                Err(err) => {
                    tracing::warn!("{}", err);
                    Dispatch::Unhandled(UiEvent::DockSelectTab {
                        side,
                        child_index,
                        window: Some(id),
                    })
                }
            },
            UiEvent::DockSelectTab {
                side,
                child_index,
                window: None,
            } => {
                // Non-window tabs belong to whoever built the container.
                tracing::debug!(%side, child_index, "Tab without a window left to the caller");
                Dispatch::Unhandled(UiEvent::DockSelectTab {
                    side,
                    child_index,
                    window: None,
                })
            }
            UiEvent::SliderChanged { binding, value } => {
                let setting = binding.as_deref().and_then(|name| self.settings.get_mut(name));
                match setting {
                    Some(setting) => {
                        *setting = value;
                        Dispatch::Handled
                    }
                    None => {
                        tracing::warn!(?binding, value, "Slider change for an unknown setting");
                        Dispatch::Unhandled(UiEvent::SliderChanged { binding, value })
                    }
                }
            }
            UiEvent::CameraPanTo(point) => {
                self.camera_target = Some(point);
                Dispatch::Handled
            }
            UiEvent::Action(action) => self.apply_action(action),
        }
    }
}
