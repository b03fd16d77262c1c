use nebula_core::geometry::Rect;

use super::leaf::window_min_size;
use super::stack::place_children;
use super::{LayoutContext, LayoutNode, SubLayout, WindowLayout};
use crate::config::UiConfig;
use crate::node::{Node, StackDirection, WindowProps};

/// Bounds of a floating window: stored bounds (or the parent slot when the
/// application has not stored any yet) grown to the minimum size. A minimized
/// window keeps only its header.
fn floating_bounds(window: &WindowProps, slot: Rect<f32>, config: &UiConfig) -> Rect<f32> {
    let stored = window.bounds.unwrap_or(slot);
    let min = window_min_size(window, config);
    let height = if window.minimized {
        config.window_header_height
    } else {
        stored.height.max(min.height)
    };
    Rect::new(stored.x, stored.y, stored.width.max(min.width), height)
}

pub(super) fn layout_window<'a>(
    node: &'a Node,
    window: &WindowProps,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    let config = ctx.config;

    // Docking state wins over the tree: a docked window takes its side's
    // content region wherever it sits. Inside a dock container it fills the
    // container's content slot.
    let member_of = ctx.docking.side_of(&window.id);
    let docked = member_of.or(ctx.docked);
    let bounds = match (member_of, ctx.docked) {
        (Some(side), _) => ctx.dock_layout.content(side, config.tab_bar_height),
        (None, Some(_)) => ctx.bounds,
        (None, None) => floating_bounds(window, ctx.bounds, config),
    }
    .non_negative();

    let (header, content) = bounds.split_top(config.window_header_height);
    let minimize_button = if docked.is_none() && !header.is_empty() {
        let size = header.height.min(header.width);
        Some(header.split_right(size).1)
    } else {
        None
    };

    // Docked windows ignore the minimized flag.
    let collapsed = window.minimized && docked.is_none();
    let children = if collapsed {
        Vec::new()
    } else {
        let padding = node.props.padding.unwrap_or(config.window_padding).max(0.0);
        let gap = node.props.gap.unwrap_or(0.0).max(0.0);
        place_children(
            &node.children,
            StackDirection::Vertical,
            content.inset(padding),
            gap,
            true,
            ctx,
            &path,
        )
    };

    LayoutNode {
        node,
        path,
        bounds,
        sub: SubLayout::Window(WindowLayout {
            header,
            content,
            minimize_button,
        }),
        docked,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docking::{DockLayout, DockSide, DockingState, compute_dock_layout};

    fn run<'a>(
        node: &'a Node,
        docking: &DockingState,
        docked: Option<DockSide>,
        slot: Rect<f32>,
    ) -> LayoutNode<'a> {
        let config = UiConfig::default();
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let dock_layout: DockLayout = compute_dock_layout(viewport, docking, &config);
        let ctx = LayoutContext {
            bounds: slot,
            viewport,
            docking,
            dock_layout: &dock_layout,
            config: &config,
            docked,
        };
        super::super::layout(node, &ctx).unwrap()
    }

    fn window(id: &str) -> WindowProps {
        WindowProps::new(id, "Fleet").bounds(Rect::new(50.0, 60.0, 300.0, 200.0))
    }

    #[test]
    fn test_floating_window_splits_header_and_content() {
        let node = Node::window(window("fleet")).child(Node::label("Ships"));
        let layout = run(&node, &DockingState::new(), None, Rect::ZERO);
        let chrome = layout.window_layout().unwrap();

        assert_eq!(layout.bounds, Rect::new(50.0, 60.0, 300.0, 200.0));
        assert_eq!(chrome.header, Rect::new(50.0, 60.0, 300.0, 24.0));
        assert_eq!(chrome.content, Rect::new(50.0, 84.0, 300.0, 176.0));
        assert_eq!(chrome.minimize_button, Some(Rect::new(326.0, 60.0, 24.0, 24.0)));
        assert_eq!(layout.children[0].bounds.x, 58.0);
        assert_eq!(layout.children[0].bounds.y, 92.0);
        assert!(!chrome.header.overlaps(&chrome.content));
    }

    #[test]
    fn test_min_size_clamps_stored_bounds() {
        let props = WindowProps::new("tiny", "Tiny")
            .bounds(Rect::new(0.0, 0.0, 10.0, 10.0))
            .min_size(150.0, 90.0);
        let node = Node::window(props);
        let layout = run(&node, &DockingState::new(), None, Rect::ZERO);
        assert_eq!(layout.bounds.size().width, 150.0);
        assert_eq!(layout.bounds.size().height, 90.0);
    }

    #[test]
    fn test_minimized_window_collapses_to_header() {
        let node = Node::window(window("fleet").minimized(true)).child(Node::label("Ships"));
        let layout = run(&node, &DockingState::new(), None, Rect::ZERO);

        assert_eq!(layout.bounds.height, 24.0);
        assert!(layout.children.is_empty());
        assert!(layout.window_layout().unwrap().content.is_empty());
    }

    #[test]
    fn test_docked_window_takes_dock_content() {
        let docking = DockingState::new().with_dock(DockSide::Top, ["fleet".into()], 200.0);
        let node = Node::window(window("fleet").minimized(true)).child(Node::label("Ships"));
        let layout = run(&node, &docking, None, Rect::ZERO);

        // Top spans the full width when no left/right dock is occupied.
        assert_eq!(layout.bounds, Rect::new(0.0, 28.0, 1000.0, 172.0));
        assert_eq!(layout.docked, Some(DockSide::Top));
        assert_eq!(layout.window_layout().unwrap().minimize_button, None);
        assert_eq!(layout.children.len(), 1);
    }

    #[test]
    fn test_window_in_dock_container_fills_slot() {
        let node = Node::window(window("fleet"));
        let slot = Rect::new(0.0, 500.0, 400.0, 100.0);
        let layout = run(&node, &DockingState::new(), Some(DockSide::Bottom), slot);
        assert_eq!(layout.bounds, slot);
    }
}
