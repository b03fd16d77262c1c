use nebula_core::geometry::{Rect, Size};

use super::{LayoutContext, LayoutNode, SubLayout, child_path, free_slot, layout_at, measure};
use crate::node::{Node, NodeKind, StackDirection};

fn main_extent(rect: &Rect<f32>, direction: StackDirection) -> f32 {
    match direction {
        StackDirection::Vertical => rect.height,
        StackDirection::Horizontal => rect.width,
    }
}

fn explicit_main(node: &Node, direction: StackDirection) -> Option<f32> {
    match direction {
        StackDirection::Vertical => node.props.height,
        StackDirection::Horizontal => node.props.width,
    }
}

fn explicit_cross(node: &Node, direction: StackDirection) -> Option<f32> {
    match direction {
        StackDirection::Vertical => node.props.width,
        StackDirection::Horizontal => node.props.height,
    }
}

pub(super) fn layout_stack<'a>(
    node: &'a Node,
    direction: StackDirection,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    let slot = ctx.bounds.non_negative();
    let padding = node.props.padding.unwrap_or(0.0).max(0.0);
    let gap = node.props.gap.unwrap_or(0.0).max(0.0);
    let explicit = explicit_main(node, direction);
    let sized = explicit.is_some();

    // Sized stacks keep their size and auto-sized ones shrink to their
    // content, neither past the slot. A growing stack takes its whole slot.
    let extent = match explicit {
        _ if node.props.grow => main_extent(&slot, direction),
        Some(size) => size.max(0.0),
        None => main_extent_of_size(measure(node, ctx.config), direction),
    };
    let bounds = match direction {
        StackDirection::Vertical => Rect::new(slot.x, slot.y, slot.width, extent.min(slot.height)),
        StackDirection::Horizontal => Rect::new(slot.x, slot.y, extent.min(slot.width), slot.height),
    };

    let children = place_children(
        &node.children,
        direction,
        bounds.inset(padding),
        gap,
        sized,
        ctx,
        &path,
    );

    LayoutNode {
        node,
        path,
        bounds,
        sub: SubLayout::None,
        docked: None,
        children,
    }
}

fn main_extent_of_size(size: Size<f32>, direction: StackDirection) -> f32 {
    match direction {
        StackDirection::Vertical => size.height,
        StackDirection::Horizontal => size.width,
    }
}

/// Place `children` one after another along `direction` inside `inner`.
///
/// With `stretch`, children marked `grow` share whatever main-axis space the
/// others leave. Extents are clipped as they accumulate, so the children
/// never reach past `inner`.
pub(super) fn place_children<'a>(
    children: &'a [Node],
    direction: StackDirection,
    inner: Rect<f32>,
    gap: f32,
    stretch: bool,
    ctx: &LayoutContext<'_>,
    path: &[usize],
) -> Vec<LayoutNode<'a>> {
    let visible: Vec<(usize, &'a Node)> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| !matches!(child.kind, NodeKind::Unknown(_)))
        .collect();
    if visible.is_empty() {
        return Vec::new();
    }

    let available = main_extent(&inner, direction);
    let cross_available = match direction {
        StackDirection::Vertical => inner.width,
        StackDirection::Horizontal => inner.height,
    };

    let mut extents: Vec<f32> = visible
        .iter()
        .map(|(_, child)| main_extent_of_size(measure(child, ctx.config), direction))
        .collect();

    if stretch {
        let used = extents.iter().sum::<f32>() + gap * (visible.len() - 1) as f32;
        let growers = visible.iter().filter(|(_, child)| child.props.grow).count();
        let leftover = available - used;
        if leftover > 0.0 && growers > 0 {
            let share = leftover / growers as f32;
            for (extent, (_, child)) in extents.iter_mut().zip(&visible) {
                if child.props.grow {
                    *extent += share;
                }
            }
        }
    }

    let mut offset = 0.0f32;
    let mut placed = Vec::with_capacity(visible.len());
    for (n, ((index, child), extent)) in visible.into_iter().zip(extents).enumerate() {
        if n > 0 {
            offset = (offset + gap).min(available);
        }
        let extent = extent.max(0.0).min((available - offset).max(0.0));
        let cross = explicit_cross(child, direction)
            .map(|c| c.max(0.0).min(cross_available))
            .unwrap_or(cross_available);

        let slot = match direction {
            StackDirection::Vertical => Rect::new(inner.x, inner.y + offset, cross, extent),
            StackDirection::Horizontal => Rect::new(inner.x + offset, inner.y, extent, cross),
        };
        offset += extent;

        if let Some(laid_out) = layout_at(child, &ctx.child(slot), child_path(path, index)) {
            placed.push(laid_out);
        }
    }
    placed
}

pub(super) fn layout_layer<'a>(
    node: &'a Node,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    let bounds = ctx.bounds.non_negative();
    let inner = bounds.inset(node.props.padding.unwrap_or(0.0).max(0.0));

    let mut order: Vec<(usize, &'a Node)> = node.children.iter().enumerate().collect();
    // Stable, so equal z keeps tree order.
    order.sort_by_key(|(_, child)| child.props.z_index);

    let children = order
        .into_iter()
        .filter_map(|(index, child)| {
            layout_at(child, &ctx.child(free_slot(child, inner)), child_path(&path, index))
        })
        .collect();

    LayoutNode {
        node,
        path,
        bounds,
        sub: SubLayout::None,
        docked: None,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::docking::{DockLayout, DockingState};

    fn run<'a>(node: &'a Node, bounds: Rect<f32>) -> LayoutNode<'a> {
        let docking = DockingState::new();
        let dock_layout = DockLayout::default();
        let config = UiConfig::default();
        let ctx = LayoutContext {
            bounds,
            viewport: bounds,
            docking: &docking,
            dock_layout: &dock_layout,
            config: &config,
            docked: None,
        };
        super::super::layout(node, &ctx).unwrap()
    }

    #[test]
    fn test_vertical_stack_offsets_with_gap_and_padding() {
        let stack = Node::vstack()
            .padding(5.0)
            .gap(3.0)
            .child(Node::spacer().height(10.0))
            .child(Node::spacer().height(20.0));
        let layout = run(&stack, Rect::new(0.0, 0.0, 100.0, 500.0));

        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 100.0, 43.0));
        assert_eq!(layout.children[0].bounds, Rect::new(5.0, 5.0, 90.0, 10.0));
        assert_eq!(layout.children[1].bounds, Rect::new(5.0, 18.0, 90.0, 20.0));
    }

    #[test]
    fn test_sized_stack_keeps_its_height_in_a_larger_slot() {
        let stack = Node::vstack().height(100.0).child(Node::spacer().grow());
        let layout = run(&stack, Rect::new(0.0, 28.0, 220.0, 772.0));

        assert_eq!(layout.bounds, Rect::new(0.0, 28.0, 220.0, 100.0));
        assert_eq!(layout.children[0].bounds.height, 100.0);
    }

    #[test]
    fn test_cross_size_clamped_to_inner() {
        let stack = Node::hstack()
            .child(Node::spacer().size(10.0, 500.0))
            .child(Node::spacer().size(10.0, 8.0));
        let layout = run(&stack, Rect::new(0.0, 0.0, 100.0, 40.0));

        assert_eq!(layout.children[0].bounds.height, 40.0);
        assert_eq!(layout.children[1].bounds.height, 8.0);
    }

    #[test]
    fn test_grow_children_share_leftover() {
        let stack = Node::hstack()
            .width(100.0)
            .gap(10.0)
            .child(Node::spacer().width(20.0))
            .child(Node::spacer().grow())
            .child(Node::spacer().grow());
        let layout = run(&stack, Rect::new(0.0, 0.0, 100.0, 30.0));

        let widths: Vec<f32> = layout.children.iter().map(|c| c.bounds.width).collect();
        assert_eq!(widths, vec![20.0, 30.0, 30.0]);
        assert_eq!(layout.children[2].bounds.right(), 100.0);
    }

    #[test]
    fn test_overflow_is_clipped_to_container() {
        let stack = Node::vstack()
            .height(50.0)
            .gap(5.0)
            .child(Node::spacer().height(30.0))
            .child(Node::spacer().height(30.0))
            .child(Node::spacer().height(30.0));
        let layout = run(&stack, Rect::new(0.0, 0.0, 80.0, 50.0));

        for child in &layout.children {
            assert!(child.bounds.bottom() <= 50.0, "{:?}", child.bounds);
        }
        assert_eq!(layout.children[1].bounds.height, 15.0);
        assert_eq!(layout.children[2].bounds.height, 0.0);
    }

    #[test]
    fn test_layer_orders_by_z_index_stably() {
        let layer = Node::layer()
            .child(Node::spacer().key("a").z_index(1))
            .child(Node::spacer().key("b"))
            .child(Node::spacer().key("c").z_index(1))
            .child(Node::spacer().key("d").z_index(-1));
        let layout = run(&layer, Rect::new(0.0, 0.0, 100.0, 100.0));

        let keys: Vec<&str> = layout
            .children
            .iter()
            .filter_map(|c| c.node.props.key.as_deref())
            .collect();
        assert_eq!(keys, vec!["d", "b", "a", "c"]);
        assert_eq!(layout.children[0].path, vec![3]);
    }

    #[test]
    fn test_layer_offsets_children() {
        let layer = Node::layer()
            .position(0.0, 0.0)
            .child(Node::spacer().position(10.0, 20.0).size(30.0, 40.0))
            .child(Node::spacer().position(50.0, 60.0));
        let layout = run(&layer, Rect::new(100.0, 100.0, 200.0, 200.0));

        assert_eq!(layout.children[0].bounds, Rect::new(110.0, 120.0, 30.0, 40.0));
        assert_eq!(layout.children[1].bounds, Rect::new(150.0, 160.0, 150.0, 140.0));
    }
}
