//! Viewport partitioning for the dock sides.

use nebula_core::geometry::Rect;
use nebula_core::profiling::profile_function;

use super::types::{DockSide, DockingState};
use crate::config::UiConfig;

/// Regions of the viewport assigned to each dock side.
///
/// Unoccupied sides get a zero-width (left/right) or zero-height (top/bottom)
/// region and are not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DockLayout {
    pub left: Rect<f32>,
    pub right: Rect<f32>,
    pub top: Rect<f32>,
    pub bottom: Rect<f32>,
    pub center: Rect<f32>,
}

impl DockLayout {
    pub fn region(&self, side: DockSide) -> Rect<f32> {
        match side {
            DockSide::Left => self.left,
            DockSide::Right => self.right,
            DockSide::Top => self.top,
            DockSide::Bottom => self.bottom,
            DockSide::Center => self.center,
        }
    }

    /// The part of a side's region below its tab bar.
    pub fn content(&self, side: DockSide, tab_bar_height: f32) -> Rect<f32> {
        self.region(side).split_top(tab_bar_height).1
    }

    /// The strip along the edge a side shares with the center, used to
    /// resize the side. `None` for the center and for empty sides.
    pub fn resize_handle(&self, side: DockSide, margin: f32) -> Option<Rect<f32>> {
        let region = self.region(side);
        if region.is_empty() || !side.is_resizable() {
            return None;
        }
        let margin = margin.max(0.0);
        let handle = match side {
            DockSide::Left => Rect::new(region.right() - margin, region.y, margin, region.height),
            DockSide::Right => Rect::new(region.x, region.y, margin, region.height),
            DockSide::Top => Rect::new(region.x, region.bottom() - margin, region.width, margin),
            DockSide::Bottom => Rect::new(region.x, region.y, region.width, margin),
            DockSide::Center => return None,
        };
        Some(handle.intersect(&region))
    }
}

/// Clamp a stored side size to the configured minimum and to what is available.
/// Available space wins over the minimum.
fn clamp_side(size: f32, min: f32, available: f32) -> f32 {
    size.max(min).min(available.max(0.0))
}

/// Partition `viewport` between the dock sides.
///
/// Left and right are carved from the horizontal extent first, each keeping
/// `center_min_size` free for the center. Top and bottom are then carved from
/// the remaining vertical extent, spanning only the width between left and
/// right. The center gets whatever is left.
pub fn compute_dock_layout(
    viewport: Rect<f32>,
    docking: &DockingState,
    config: &UiConfig,
) -> DockLayout {
    profile_function!();

    let viewport = viewport.non_negative();
    let occupied = |side: DockSide| !docking.slot(side).is_empty();
    let min = config.dock_min_size;
    let keep = config.center_min_size;

    let left_width = if occupied(DockSide::Left) {
        clamp_side(docking.slot(DockSide::Left).size, min, viewport.width - keep)
    } else {
        0.0
    };
    let right_width = if occupied(DockSide::Right) {
        clamp_side(
            docking.slot(DockSide::Right).size,
            min,
            viewport.width - left_width - keep,
        )
    } else {
        0.0
    };

    let inner_x = viewport.x + left_width;
    let inner_width = (viewport.width - left_width - right_width).max(0.0);

    let top_height = if occupied(DockSide::Top) {
        clamp_side(docking.slot(DockSide::Top).size, min, viewport.height - keep)
    } else {
        0.0
    };
    let bottom_height = if occupied(DockSide::Bottom) {
        clamp_side(
            docking.slot(DockSide::Bottom).size,
            min,
            viewport.height - top_height - keep,
        )
    } else {
        0.0
    };

    let layout = DockLayout {
        left: Rect::new(viewport.x, viewport.y, left_width, viewport.height),
        right: Rect::new(
            viewport.right() - right_width,
            viewport.y,
            right_width,
            viewport.height,
        ),
        top: Rect::new(inner_x, viewport.y, inner_width, top_height),
        bottom: Rect::new(
            inner_x,
            viewport.bottom() - bottom_height,
            inner_width,
            bottom_height,
        ),
        center: Rect::new(
            inner_x,
            viewport.y + top_height,
            inner_width,
            (viewport.height - top_height - bottom_height).max(0.0),
        ),
    };

    tracing::trace!(?layout, "Computed dock layout");
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::WindowId;

    fn viewport() -> Rect<f32> {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn docked(sides: &[(DockSide, f32)]) -> DockingState {
        let mut state = DockingState::new();
        for (i, (side, size)) in sides.iter().enumerate() {
            state.dock(WindowId::from(format!("w{}", i)), *side);
            state.set_size(*side, *size);
        }
        state
    }

    #[test]
    fn test_empty_state_gives_center_everything() {
        let layout = compute_dock_layout(viewport(), &DockingState::new(), &UiConfig::default());
        assert_eq!(layout.center, viewport());
        assert!(layout.left.is_empty());
        assert!(layout.right.is_empty());
        assert!(layout.top.is_empty());
        assert!(layout.bottom.is_empty());
    }

    #[test]
    fn test_top_and_bottom_span_between_left_and_right() {
        let state = docked(&[
            (DockSide::Left, 200.0),
            (DockSide::Right, 150.0),
            (DockSide::Top, 100.0),
            (DockSide::Bottom, 120.0),
        ]);
        let layout = compute_dock_layout(viewport(), &state, &UiConfig::default());

        assert_eq!(layout.left, Rect::new(0.0, 0.0, 200.0, 800.0));
        assert_eq!(layout.right, Rect::new(850.0, 0.0, 150.0, 800.0));
        assert_eq!(layout.top, Rect::new(200.0, 0.0, 650.0, 100.0));
        assert_eq!(layout.bottom, Rect::new(200.0, 680.0, 650.0, 120.0));
        assert_eq!(layout.center, Rect::new(200.0, 100.0, 650.0, 580.0));
    }

    #[test]
    fn test_sizes_clamp_to_minimum_and_leave_center_room() {
        let config = UiConfig::default();
        let state = docked(&[(DockSide::Left, 10.0), (DockSide::Right, 5000.0)]);
        let layout = compute_dock_layout(viewport(), &state, &config);

        assert_eq!(layout.left.width, config.dock_min_size);
        assert_eq!(
            layout.right.width,
            1000.0 - config.dock_min_size - config.center_min_size
        );
        assert_eq!(layout.center.width, config.center_min_size);
    }

    #[test]
    fn test_regions_never_negative_in_tiny_viewport() {
        let state = docked(&[(DockSide::Left, 300.0), (DockSide::Bottom, 300.0)]);
        let layout = compute_dock_layout(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            &state,
            &UiConfig::default(),
        );
        for side in DockSide::ALL {
            let region = layout.region(side);
            assert!(region.width >= 0.0 && region.height >= 0.0, "{side}: {region:?}");
        }
    }

    #[test]
    fn test_bottom_dock_content_top() {
        let config = UiConfig::default();
        let state = docked(&[(DockSide::Bottom, 200.0)]);
        let layout = compute_dock_layout(viewport(), &state, &config);
        let content = layout.content(DockSide::Bottom, config.tab_bar_height);
        assert_eq!(content.y, 800.0 - 200.0 + config.tab_bar_height);
    }

    #[test]
    fn test_resize_handle_on_inner_edge() {
        let state = docked(&[(DockSide::Left, 200.0), (DockSide::Bottom, 200.0)]);
        let layout = compute_dock_layout(viewport(), &state, &UiConfig::default());

        let left = layout.resize_handle(DockSide::Left, 4.0).unwrap();
        assert_eq!(left.x, 196.0);
        let bottom = layout.resize_handle(DockSide::Bottom, 4.0).unwrap();
        assert_eq!(bottom.y, 600.0);
        assert!(layout.resize_handle(DockSide::Center, 4.0).is_none());
        assert!(layout.resize_handle(DockSide::Right, 4.0).is_none());
    }
}
