use nebula_core::geometry::Rect;

use super::{DockTabsLayout, LayoutContext, LayoutNode, SubLayout, TabLayout, child_path, layout_at};
use crate::docking::DockingState;
use crate::node::{DockContainerProps, Node, NodeKind};

/// Child index of the visible tab: the container's own choice when valid,
/// else the side's active window, else the first child.
fn resolve_active(node: &Node, dock: &DockContainerProps, docking: &DockingState) -> Option<usize> {
    let is_tab = |index: usize| {
        node.children
            .get(index)
            .is_some_and(|child| !matches!(child.kind, NodeKind::Unknown(_)))
    };

    if let Some(index) = dock.active {
        if is_tab(index) {
            return Some(index);
        }
        tracing::warn!(
            side = %dock.side,
            index,
            tabs = node.children.len(),
            "Dock container active tab out of range; falling back"
        );
    }

    let from_state = docking.slot(dock.side).active.as_ref().and_then(|active| {
        node.children
            .iter()
            .position(|child| child.window_id() == Some(active))
    });

    from_state.or_else(|| (0..node.children.len()).find(|&index| is_tab(index)))
}

pub(super) fn layout_dock<'a>(
    node: &'a Node,
    dock: &DockContainerProps,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    let config = ctx.config;
    let bounds = ctx.dock_layout.region(dock.side).non_negative();

    if bounds.is_empty() {
        return LayoutNode {
            node,
            path,
            bounds,
            sub: SubLayout::Dock(DockTabsLayout {
                tab_bar: Rect::new(bounds.x, bounds.y, 0.0, 0.0),
                content: Rect::new(bounds.x, bounds.y, 0.0, 0.0),
                tabs: Vec::new(),
                active: None,
            }),
            docked: Some(dock.side),
            children: Vec::new(),
        };
    }

    let (tab_bar, content) = bounds.split_top(config.tab_bar_height);
    let active = resolve_active(node, dock, ctx.docking);

    let mut tabs = Vec::new();
    let mut x = tab_bar.x;
    for (index, child) in node.children.iter().enumerate() {
        if matches!(child.kind, NodeKind::Unknown(_)) {
            continue;
        }
        let title = child.tab_title();
        let wanted = config.text_width(title, config.default_font_size) + config.tab_padding * 2.0;
        let width = wanted.min((tab_bar.right() - x).max(0.0));
        tabs.push(TabLayout {
            child_index: index,
            bounds: Rect::new(x, tab_bar.y, width, tab_bar.height),
            title: title.to_string(),
            window: child.window_id().cloned(),
            active: active == Some(index),
        });
        x += width;
    }

    let children = active
        .and_then(|index| {
            layout_at(
                &node.children[index],
                &ctx.docked_child(content, dock.side),
                child_path(&path, index),
            )
        })
        .into_iter()
        .collect();

    LayoutNode {
        node,
        path,
        bounds,
        sub: SubLayout::Dock(DockTabsLayout {
            tab_bar,
            content,
            tabs,
            active,
        }),
        docked: Some(dock.side),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::docking::{DockSide, compute_dock_layout};
    use crate::node::WindowProps;

    fn run<'a>(node: &'a Node, docking: &DockingState) -> LayoutNode<'a> {
        let config = UiConfig::default();
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let dock_layout = compute_dock_layout(viewport, docking, &config);
        let ctx = LayoutContext {
            bounds: viewport,
            viewport,
            docking,
            dock_layout: &dock_layout,
            config: &config,
            docked: None,
        };
        super::super::layout(node, &ctx).unwrap()
    }

    fn left_dock() -> (Node, DockingState) {
        let node = Node::dock(DockSide::Left)
            .child(Node::window(WindowProps::new("systems", "Systems")))
            .child(Node::window(WindowProps::new("fleets", "Fleets")));
        let docking = DockingState::new().with_dock(
            DockSide::Left,
            ["systems".into(), "fleets".into()],
            300.0,
        );
        (node, docking)
    }

    #[test]
    fn test_tabs_laid_out_left_to_right() {
        let (node, docking) = left_dock();
        let layout = run(&node, &docking);
        let tabs = layout.dock_tabs().unwrap();

        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 300.0, 800.0));
        assert_eq!(tabs.tab_bar, Rect::new(0.0, 0.0, 300.0, 28.0));
        assert_eq!(tabs.tabs.len(), 2);
        // "Systems" is 7 chars: 7 * 13 * 0.6 + 24
        assert_eq!(tabs.tabs[0].bounds.width, 7.0 * 13.0 * 0.6 + 24.0);
        assert_eq!(tabs.tabs[1].bounds.x, tabs.tabs[0].bounds.right());
        assert!(!tabs.tab_bar.overlaps(&tabs.content));
    }

    #[test]
    fn test_active_tab_defaults_to_docking_state() {
        let (node, docking) = left_dock();
        let layout = run(&node, &docking);

        // Docking "fleets" last made it the active tab.
        assert_eq!(layout.dock_tabs().unwrap().active, Some(1));
        assert_eq!(layout.children.len(), 1);
        assert_eq!(layout.children[0].path, vec![1]);
        assert_eq!(layout.children[0].bounds, Rect::new(0.0, 28.0, 300.0, 772.0));
    }

    #[test]
    fn test_explicit_active_tab_wins() {
        let (node, docking) = left_dock();
        let node = node.active_tab(0);
        let layout = run(&node, &docking);
        assert_eq!(layout.dock_tabs().unwrap().active, Some(0));
        assert!(layout.dock_tabs().unwrap().tabs[0].active);
    }

    #[test]
    fn test_out_of_range_active_falls_back() {
        let node = Node::dock(DockSide::Center)
            .active_tab(9)
            .child(Node::label("Galaxy"));
        let layout = run(&node, &DockingState::new());
        assert_eq!(layout.dock_tabs().unwrap().active, Some(0));
    }

    #[test]
    fn test_empty_side_has_no_children() {
        let node = Node::dock(DockSide::Right).child(Node::label("Nothing docked"));
        let layout = run(&node, &DockingState::new());
        assert!(layout.bounds.is_empty());
        assert!(layout.children.is_empty());
        assert!(layout.dock_tabs().unwrap().tabs.is_empty());
    }
}
