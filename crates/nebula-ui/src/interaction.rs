//! Pointer capture state machine.
//!
//! A press over an interactive node captures the pointer. Until release,
//! drags go to the captured target no matter what lies under the pointer,
//! and the target is looked up again in each frame's layout through a
//! [`NodeRef`], so windows keep tracking the pointer while they move.
//!
//! The machine only produces [`UiEvent`]s; applying them is the
//! application's job.

use nebula_core::geometry::{Rect, Size};
use nebula_core::math::Vec2;
use nebula_core::profiling::profile_function;

use crate::docking::DockSide;
use crate::event::UiEvent;
use crate::hit_test::{HitTarget, hit_test};
use crate::layout::{LayoutNode, LayoutTree, NodeRef, window_min_size};
use crate::node::{NodeKind, SliderProps};

pub use crate::hit_test::ResizeEdges;

/// What a capture does while the pointer moves.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureKind {
    WindowDrag,
    /// `start` is the window's bounds at press time.
    WindowResize { edges: ResizeEdges, start: Rect<f32> },
    Slider,
    MinimapPan,
    MinimapClick,
    DockResize { side: DockSide },
    DockTabSelect,
    ButtonPress,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    pub kind: CaptureKind,
    pub target: NodeRef,
    /// Pointer position at press time.
    pub origin: Vec2,
    /// Pointer position at the previous down/drag call.
    pub last: Vec2,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Captured(Capture),
}

/// Outcome of a pointer call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerResponse {
    /// The UI used the pointer; the application should not also act on it.
    pub consumed: bool,
    pub events: Vec<UiEvent>,
}

impl PointerResponse {
    pub fn consumed(events: Vec<UiEvent>) -> Self {
        Self {
            consumed: true,
            events,
        }
    }

    pub fn ignored() -> Self {
        Self::default()
    }
}

/// Value of a slider for a pointer at `x` over `track`.
///
/// The pointer position maps linearly onto `[min, max]` and snaps to the
/// nearest step from `min`. The track ends map to `min` and `max` exactly.
/// `None` when the slider has no valid range or the track has no width.
pub fn slider_value(slider: &SliderProps, track: Rect<f32>, x: f32) -> Option<f32> {
    let (min, max) = slider.range()?;
    if track.width <= 0.0 {
        return None;
    }

    let t = ((x - track.x) / track.width).clamp(0.0, 1.0);
    if t <= 0.0 {
        return Some(min);
    }
    if t >= 1.0 {
        return Some(max);
    }

    let raw = min + t * (max - min);
    let snapped = match slider.step {
        Some(step) if step.is_finite() && step > 0.0 => min + ((raw - min) / step).round() * step,
        _ => raw,
    };
    Some(snapped.clamp(min, max))
}

/// Move the grabbed edges of `start` by `delta`, keeping at least `min`.
/// The opposite edges stay put.
pub fn resize_bounds(start: Rect<f32>, edges: ResizeEdges, delta: Vec2, min: Size<f32>) -> Rect<f32> {
    let mut left = start.x;
    let mut top = start.y;
    let mut right = start.right();
    let mut bottom = start.bottom();

    if edges.contains(ResizeEdges::LEFT) {
        left = (left + delta.x).min(right - min.width);
    }
    if edges.contains(ResizeEdges::RIGHT) {
        right = (right + delta.x).max(left + min.width);
    }
    if edges.contains(ResizeEdges::TOP) {
        top = (top + delta.y).min(bottom - min.height);
    }
    if edges.contains(ResizeEdges::BOTTOM) {
        bottom = (bottom + delta.y).max(top + min.height);
    }
    Rect::new(left, top, right - left, bottom - top)
}

/// Bounds to store for a window moved from its current layout: a minimized
/// window keeps its stored height so restoring it does not shrink it.
fn stored_bounds(node: &LayoutNode<'_>) -> Rect<f32> {
    let mut bounds = node.bounds;
    if let Some(window) = node.window() {
        if window.minimized {
            if let Some(stored) = window.bounds {
                bounds.height = stored.height;
            }
        }
    }
    bounds
}

fn slider_event(node: &LayoutNode<'_>, x: f32) -> Option<UiEvent> {
    let NodeKind::Slider(slider) = node.kind() else {
        return None;
    };
    let value = slider_value(slider, node.slider_track()?, x)?;
    Some(UiEvent::SliderChanged {
        binding: slider.binding.clone(),
        value,
    })
}

/// Pointer capture tracking for one UI surface.
#[derive(Debug, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn capture(&self) -> Option<&Capture> {
        match &self.state {
            InteractionState::Captured(capture) => Some(capture),
            InteractionState::Idle => None,
        }
    }

    pub fn is_captured(&self) -> bool {
        self.capture().is_some()
    }

    /// Drop any capture without emitting events.
    pub fn release_capture(&mut self) {
        if let InteractionState::Captured(capture) = &self.state {
            tracing::trace!(target_ref = ?capture.target, "Capture released");
        }
        self.state = InteractionState::Idle;
    }

    /// Handle a press at `point` (logical coordinates).
    pub fn pointer_down(&mut self, tree: &LayoutTree<'_>, point: Vec2) -> PointerResponse {
        profile_function!();

        if self.is_captured() {
            tracing::debug!("Pointer down while captured; dropping previous capture");
            self.release_capture();
        }

        let Some(hit) = hit_test(tree, point) else {
            return PointerResponse::ignored();
        };
        let node = hit.node;

        let mut events = Vec::new();
        if let Some(window) = &hit.window {
            events.push(UiEvent::WindowRaise(window.clone()));
        }

        let kind = match &hit.target {
            HitTarget::WindowHeader => node.docked.is_none().then_some(CaptureKind::WindowDrag),
            HitTarget::WindowMinimize => {
                if let Some(window) = node.window() {
                    events.push(UiEvent::WindowToggleMinimized(window.id.clone()));
                }
                None
            }
            HitTarget::WindowEdge(edges) => Some(CaptureKind::WindowResize {
                edges: *edges,
                start: node.bounds,
            }),
            HitTarget::WindowBody | HitTarget::DockBody => None,
            HitTarget::DockTab { child_index, window } => {
                if let Some(side) = node.docked {
                    events.push(UiEvent::DockSelectTab {
                        side,
                        child_index: *child_index,
                        window: window.clone(),
                    });
                }
                Some(CaptureKind::DockTabSelect)
            }
            HitTarget::DockResize => node.docked.map(|side| CaptureKind::DockResize { side }),
            HitTarget::Button => {
                if let NodeKind::Button(button) = node.kind() {
                    match &button.on_click {
                        Some(action) => events.push(UiEvent::Action(action.clone())),
                        None => tracing::debug!(label = %button.label, "Button without action pressed"),
                    }
                }
                Some(CaptureKind::ButtonPress)
            }
            HitTarget::Slider => {
                events.extend(slider_event(node, point.x));
                Some(CaptureKind::Slider)
            }
            HitTarget::Minimap { inside_view: true } => Some(CaptureKind::MinimapPan),
            HitTarget::Minimap { inside_view: false } => {
                if let Some(transform) = node.minimap_transform() {
                    let pixel = node.bounds.clamp_point(point);
                    events.push(UiEvent::CameraPanTo(transform.pixel_to_world(pixel)));
                }
                Some(CaptureKind::MinimapClick)
            }
        };

        if let Some(kind) = kind {
            let target = tree.node_ref(node);
            tracing::trace!(?kind, target_ref = ?target, "Pointer captured");
            self.state = InteractionState::Captured(Capture {
                kind,
                target,
                origin: point,
                last: point,
            });
        }

        PointerResponse::consumed(events)
    }

    /// Handle pointer movement with the button held.
    pub fn pointer_drag(&mut self, tree: &LayoutTree<'_>, point: Vec2) -> PointerResponse {
        profile_function!();

        let InteractionState::Captured(capture) = &mut self.state else {
            return PointerResponse::ignored();
        };
        let Some(node) = tree.find(&capture.target) else {
            tracing::debug!(target_ref = ?capture.target, "Capture target left the layout; releasing");
            self.state = InteractionState::Idle;
            return PointerResponse::ignored();
        };

        let delta = point - capture.last;
        let mut events = Vec::new();
        match &capture.kind {
            CaptureKind::WindowDrag => {
                if let Some(window) = node.window() {
                    events.push(UiEvent::WindowSetBounds {
                        window: window.id.clone(),
                        bounds: stored_bounds(node).translate(delta),
                    });
                }
            }
            CaptureKind::WindowResize { edges, start } => {
                if let Some(window) = node.window() {
                    let min = window_min_size(window, tree.config());
                    events.push(UiEvent::WindowSetBounds {
                        window: window.id.clone(),
                        bounds: resize_bounds(*start, *edges, point - capture.origin, min),
                    });
                }
            }
            CaptureKind::Slider => events.extend(slider_event(node, point.x)),
            CaptureKind::MinimapPan => {
                if let (NodeKind::Minimap(minimap), Some(transform)) =
                    (node.kind(), node.minimap_transform())
                {
                    if let Some(view) = minimap.viewport_rect {
                        let centre = view.center() + transform.pixel_delta_to_world(delta);
                        events.push(UiEvent::CameraPanTo(centre));
                    }
                }
            }
            CaptureKind::MinimapClick => {
                if let Some(transform) = node.minimap_transform() {
                    let pixel = node.bounds.clamp_point(point);
                    events.push(UiEvent::CameraPanTo(transform.pixel_to_world(pixel)));
                }
            }
            CaptureKind::DockResize { side } => {
                let region = tree.dock_layout().region(*side);
                let size = match side {
                    DockSide::Left => point.x - region.x,
                    DockSide::Right => region.right() - point.x,
                    DockSide::Top => point.y - region.y,
                    DockSide::Bottom => region.bottom() - point.y,
                    DockSide::Center => region.width,
                };
                events.push(UiEvent::DockResize {
                    side: *side,
                    size: size.max(tree.config().dock_min_size),
                });
            }
            CaptureKind::DockTabSelect | CaptureKind::ButtonPress => {}
        }

        capture.last = point;
        PointerResponse::consumed(events)
    }

    /// Handle a release. Always ends the capture.
    pub fn pointer_up(&mut self, tree: &LayoutTree<'_>, point: Vec2) -> PointerResponse {
        profile_function!();

        let InteractionState::Captured(capture) = std::mem::take(&mut self.state) else {
            return PointerResponse::ignored();
        };
        let Some(node) = tree.find(&capture.target) else {
            // The press was ours, so the release is too.
            tracing::debug!(target_ref = ?capture.target, "Capture target left the layout before release");
            return PointerResponse::consumed(Vec::new());
        };

        let events = match capture.kind {
            CaptureKind::Slider => slider_event(node, point.x).into_iter().collect(),
            _ => Vec::new(),
        };
        tracing::trace!(kind = ?capture.kind, "Pointer released");
        PointerResponse::consumed(events)
    }
}
