//! Semantic events produced by the interaction layer.
//!
//! The engine never mutates application state. Pointer handling turns raw
//! input into [`UiEvent`]s and hands them to an [`EventDispatcher`] owned by
//! the application, which answers with [`Dispatch::Handled`] or hands the
//! event back as [`Dispatch::Unhandled`] so dead bindings stay visible.

use nebula_core::geometry::Rect;
use nebula_core::math::Vec2;

use crate::docking::DockSide;
use crate::node::WindowId;

/// Opaque action attached to a button.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open a closed window or close an open one.
    ToggleWindow(WindowId),
    /// Move a window into a dock side and make it the active tab.
    DockWindow { window: WindowId, side: DockSide },
    /// Take a window out of whatever dock side holds it.
    UndockWindow(WindowId),
    /// Application-defined action the workspace does not interpret.
    Named(String),
}

/// Events emitted to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Store new bounds for a floating window.
    WindowSetBounds { window: WindowId, bounds: Rect<f32> },
    /// Bring a floating window to the front.
    WindowRaise(WindowId),
    /// Flip a window's minimized flag.
    WindowToggleMinimized(WindowId),
    /// Store a new size for a dock side.
    DockResize { side: DockSide, size: f32 },
    /// A tab of `side` was pressed. `child_index` is the tab's index among
    /// the dock container's children; `window` is set for window tabs.
    DockSelectTab {
        side: DockSide,
        child_index: usize,
        window: Option<WindowId>,
    },
    /// A slider moved. `binding` is `None` for an unbound slider.
    SliderChanged { binding: Option<String>, value: f32 },
    /// Move the main camera so it centres on a world-space point.
    CameraPanTo(Vec2),
    /// A button fired its action.
    Action(Action),
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Handled,
    /// Nobody owns this event; returned as-is to the caller.
    Unhandled(UiEvent),
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled)
    }
}

/// Application-side sink for [`UiEvent`]s.
pub trait EventDispatcher {
    /// Apply one event to application state.
    fn dispatch(&mut self, event: UiEvent) -> Dispatch;

    /// Dispatch events in order and collect the ones nobody handled.
    fn dispatch_all(&mut self, events: impl IntoIterator<Item = UiEvent>) -> Vec<UiEvent>
    where
        Self: Sized,
    {
        events
            .into_iter()
            .filter_map(|event| match self.dispatch(event) {
                Dispatch::Handled => None,
                Dispatch::Unhandled(event) => Some(event),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CameraOnly {
        target: Option<Vec2>,
    }

    impl EventDispatcher for CameraOnly {
        fn dispatch(&mut self, event: UiEvent) -> Dispatch {
            match event {
                UiEvent::CameraPanTo(point) => {
                    self.target = Some(point);
                    Dispatch::Handled
                }
                other => Dispatch::Unhandled(other),
            }
        }
    }

    #[test]
    fn test_dispatch_all_returns_unhandled_in_order() {
        let mut dispatcher = CameraOnly { target: None };
        let unhandled = dispatcher.dispatch_all(vec![
            UiEvent::Action(Action::Named("save".into())),
            UiEvent::CameraPanTo(Vec2::new(3.0, 4.0)),
            UiEvent::WindowRaise("log".into()),
        ]);

        assert_eq!(dispatcher.target, Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            unhandled,
            vec![
                UiEvent::Action(Action::Named("save".into())),
                UiEvent::WindowRaise("log".into()),
            ]
        );
    }
}
