//! Dock sides and the per-side window lists.

use std::fmt;

use crate::node::WindowId;

/// Default stored size of a dock side before the user resizes it.
pub const DEFAULT_DOCK_SIZE: f32 = 240.0;

/// One region of the docking workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockSide {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl DockSide {
    pub const ALL: [DockSide; 5] = [
        DockSide::Left,
        DockSide::Right,
        DockSide::Top,
        DockSide::Bottom,
        DockSide::Center,
    ];

    fn index(self) -> usize {
        match self {
            DockSide::Left => 0,
            DockSide::Right => 1,
            DockSide::Top => 2,
            DockSide::Bottom => 3,
            DockSide::Center => 4,
        }
    }

    /// The center region has no stored size and no resize handle.
    pub fn is_resizable(self) -> bool {
        !matches!(self, DockSide::Center)
    }
}

impl fmt::Display for DockSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DockSide::Left => "left",
            DockSide::Right => "right",
            DockSide::Top => "top",
            DockSide::Bottom => "bottom",
            DockSide::Center => "center",
        };
        f.write_str(name)
    }
}

/// Error types for docking state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// The window is not docked on the given side.
    NotDocked { window: WindowId, side: DockSide },
    /// The window is not known to the workspace.
    UnknownWindow(WindowId),
}

impl fmt::Display for DockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockError::NotDocked { window, side } => {
                write!(f, "Window {} is not docked on the {} side", window, side)
            }
            DockError::UnknownWindow(window) => write!(f, "Window {} not found", window),
        }
    }
}

impl std::error::Error for DockError {}

/// Result type for docking operations.
pub type DockResult<T> = Result<T, DockError>;

/// Windows docked on one side.
#[derive(Debug, Clone, PartialEq)]
pub struct DockSlot {
    /// Tab order.
    pub windows: Vec<WindowId>,
    /// Visible tab. Always a member of `windows` when set.
    pub active: Option<WindowId>,
    /// Stored extent across the side's axis (width for left/right,
    /// height for top/bottom). Unused for the center.
    pub size: f32,
}

impl DockSlot {
    fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            size: DEFAULT_DOCK_SIZE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, window: &WindowId) -> bool {
        self.windows.contains(window)
    }

    fn remove(&mut self, window: &WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| w == window) else {
            return false;
        };
        self.windows.remove(index);
        if self.active.as_ref() == Some(window) {
            // Neighbouring tab takes over, preferring the one that slid into place.
            self.active = self
                .windows
                .get(index)
                .or_else(|| self.windows.last())
                .cloned();
        }
        true
    }
}

/// Per-side docking state.
///
/// Every mutation keeps two invariants: a window id appears in at most one
/// side, and a side's `active` window is one of its `windows`.
#[derive(Debug, Clone, PartialEq)]
pub struct DockingState {
    slots: [DockSlot; 5],
}

impl DockingState {
    pub fn new() -> Self {
        Self {
            slots: [
                DockSlot::new(),
                DockSlot::new(),
                DockSlot::new(),
                DockSlot::new(),
                DockSlot::new(),
            ],
        }
    }

    pub fn slot(&self, side: DockSide) -> &DockSlot {
        &self.slots[side.index()]
    }

    fn slot_mut(&mut self, side: DockSide) -> &mut DockSlot {
        &mut self.slots[side.index()]
    }

    /// Builder form of [`DockingState::dock`] + [`DockingState::set_size`].
    pub fn with_dock(
        mut self,
        side: DockSide,
        windows: impl IntoIterator<Item = WindowId>,
        size: f32,
    ) -> Self {
        for window in windows {
            self.dock(window, side);
        }
        self.set_size(side, size);
        self
    }

    /// Side currently holding `window`.
    pub fn side_of(&self, window: &WindowId) -> Option<DockSide> {
        DockSide::ALL
            .into_iter()
            .find(|side| self.slot(*side).contains(window))
    }

    pub fn is_docked(&self, window: &WindowId) -> bool {
        self.side_of(window).is_some()
    }

    /// Dock `window` on `side` as the active tab, removing it from any other side.
    pub fn dock(&mut self, window: WindowId, side: DockSide) {
        if let Some(previous) = self.side_of(&window) {
            if previous != side {
                self.slot_mut(previous).remove(&window);
            }
        }
        let slot = self.slot_mut(side);
        if !slot.contains(&window) {
            slot.windows.push(window.clone());
        }
        slot.active = Some(window);
    }

    /// Remove `window` from whichever side holds it.
    pub fn undock(&mut self, window: &WindowId) -> Option<DockSide> {
        let side = self.side_of(window)?;
        self.slot_mut(side).remove(window);
        Some(side)
    }

    /// Make `window` the active tab of `side`.
    pub fn set_active(&mut self, side: DockSide, window: &WindowId) -> DockResult<()> {
        let slot = self.slot_mut(side);
        if !slot.contains(window) {
            return Err(DockError::NotDocked {
                window: window.clone(),
                side,
            });
        }
        slot.active = Some(window.clone());
        Ok(())
    }

    /// Store a new size for `side`. Negative and non-finite sizes become zero;
    /// the layout calculator applies the min/available clamps.
    pub fn set_size(&mut self, side: DockSide, size: f32) {
        self.slot_mut(side).size = if size.is_finite() { size.max(0.0) } else { 0.0 };
    }

    /// All docked windows, side by side in [`DockSide::ALL`] order.
    pub fn docked_windows(&self) -> impl Iterator<Item = (DockSide, &WindowId)> {
        DockSide::ALL
            .into_iter()
            .flat_map(move |side| self.slot(side).windows.iter().map(move |w| (side, w)))
    }
}

impl Default for DockingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> WindowId {
        WindowId::from(name)
    }

    #[test]
    fn test_dock_moves_between_sides() {
        let mut state = DockingState::new();
        state.dock(id("log"), DockSide::Left);
        state.dock(id("log"), DockSide::Bottom);

        assert!(state.slot(DockSide::Left).is_empty());
        assert_eq!(state.slot(DockSide::Left).active, None);
        assert_eq!(state.side_of(&id("log")), Some(DockSide::Bottom));
        assert_eq!(state.slot(DockSide::Bottom).active, Some(id("log")));
    }

    #[test]
    fn test_docking_twice_on_same_side_keeps_one_entry() {
        let mut state = DockingState::new();
        state.dock(id("a"), DockSide::Left);
        state.dock(id("b"), DockSide::Left);
        state.dock(id("a"), DockSide::Left);

        assert_eq!(state.slot(DockSide::Left).windows, vec![id("a"), id("b")]);
        assert_eq!(state.slot(DockSide::Left).active, Some(id("a")));
    }

    #[test]
    fn test_undock_active_promotes_neighbour() {
        let mut state = DockingState::new()
            .with_dock(DockSide::Right, [id("a"), id("b"), id("c")], 300.0);
        state.set_active(DockSide::Right, &id("b")).unwrap();

        assert_eq!(state.undock(&id("b")), Some(DockSide::Right));
        assert_eq!(state.slot(DockSide::Right).active, Some(id("c")));

        state.undock(&id("c"));
        assert_eq!(state.slot(DockSide::Right).active, Some(id("a")));

        state.undock(&id("a"));
        assert_eq!(state.slot(DockSide::Right).active, None);
        assert_eq!(state.undock(&id("a")), None);
    }

    #[test]
    fn test_set_active_requires_membership() {
        let mut state = DockingState::new().with_dock(DockSide::Top, [id("a")], 120.0);
        let err = state.set_active(DockSide::Top, &id("zzz")).unwrap_err();
        assert_eq!(
            err,
            DockError::NotDocked {
                window: id("zzz"),
                side: DockSide::Top
            }
        );
        assert_eq!(state.slot(DockSide::Top).active, Some(id("a")));
    }

    #[test]
    fn test_set_size_sanitizes() {
        let mut state = DockingState::new();
        state.set_size(DockSide::Left, -10.0);
        assert_eq!(state.slot(DockSide::Left).size, 0.0);
        state.set_size(DockSide::Left, f32::NAN);
        assert_eq!(state.slot(DockSide::Left).size, 0.0);
    }
}
