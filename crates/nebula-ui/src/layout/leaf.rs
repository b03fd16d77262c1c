use nebula_core::geometry::{Rect, Size};

use super::{LayoutContext, LayoutNode, MinimapTransform, SubLayout};
use crate::config::UiConfig;
use crate::node::{MinimapProps, Node, NodeKind, SliderProps, StackDirection, WindowProps};

const BUTTON_PADDING_X: f32 = 10.0;
const BUTTON_PADDING_Y: f32 = 5.0;
const BUTTON_MIN_HEIGHT: f32 = 24.0;
const SLIDER_SIZE: Size<f32> = Size {
    width: 160.0,
    height: 20.0,
};
const MINIMAP_SIZE: Size<f32> = Size {
    width: 160.0,
    height: 160.0,
};
const BAR_CHART_SIZE: Size<f32> = Size {
    width: 160.0,
    height: 80.0,
};
const IMAGE_SIZE: Size<f32> = Size {
    width: 32.0,
    height: 32.0,
};

/// Size a node would like, ignoring its explicit `width`/`height`.
///
/// Text is estimated with [`UiConfig::text_width`]; widgets without content
/// use fixed defaults. Layers and dock containers take whatever they are
/// given and report zero.
pub fn intrinsic_size(node: &Node, config: &UiConfig) -> Size<f32> {
    let padding = node.props.padding.unwrap_or(0.0).max(0.0);
    match &node.kind {
        NodeKind::Label(label) => {
            let font = label.font_size.unwrap_or(config.default_font_size);
            Size::new(
                config.text_width(&label.text, font) + padding * 2.0,
                config.line_height(font) + padding * 2.0,
            )
        }
        NodeKind::Button(button) => {
            let font = button.font_size.unwrap_or(config.default_font_size);
            let height = (config.line_height(font) + BUTTON_PADDING_Y * 2.0).max(BUTTON_MIN_HEIGHT);
            Size::new(
                config.text_width(&button.label, font) + (BUTTON_PADDING_X + padding) * 2.0,
                height + padding * 2.0,
            )
        }
        NodeKind::Stack(direction) => stack_content_size(node, *direction, config),
        NodeKind::Window(window) => {
            let min = window_min_size(window, config);
            let stored = window.bounds.map(|b| b.size()).unwrap_or(min);
            let height = if window.minimized {
                config.window_header_height
            } else {
                stored.height.max(min.height)
            };
            Size::new(stored.width.max(min.width), height)
        }
        NodeKind::Slider(_) => SLIDER_SIZE,
        NodeKind::Minimap(_) => MINIMAP_SIZE,
        NodeKind::BarChart(_) => BAR_CHART_SIZE,
        NodeKind::Image(_) => IMAGE_SIZE,
        NodeKind::Layer | NodeKind::DockContainer(_) | NodeKind::Spacer | NodeKind::Unknown(_) => {
            Size::new(0.0, 0.0)
        }
    }
}

/// Size a node takes in a stack: explicit extents win over intrinsic ones.
pub fn measure(node: &Node, config: &UiConfig) -> Size<f32> {
    let intrinsic = intrinsic_size(node, config);
    Size::new(
        node.props.width.unwrap_or(intrinsic.width).max(0.0),
        node.props.height.unwrap_or(intrinsic.height).max(0.0),
    )
}

/// Minimum floating size of `window`: its own limits or the configured default.
pub fn window_min_size(window: &WindowProps, config: &UiConfig) -> Size<f32> {
    Size::new(
        window.min_width.unwrap_or(config.window_min_size.width).max(0.0),
        window.min_height.unwrap_or(config.window_min_size.height).max(0.0),
    )
}

fn stack_content_size(node: &Node, direction: StackDirection, config: &UiConfig) -> Size<f32> {
    let padding = node.props.padding.unwrap_or(0.0).max(0.0);
    let gap = node.props.gap.unwrap_or(0.0).max(0.0);

    let mut main = 0.0f32;
    let mut cross = 0.0f32;
    let mut count = 0usize;
    for child in node.children.iter().filter(|c| !matches!(c.kind, NodeKind::Unknown(_))) {
        let size = measure(child, config);
        let (child_main, child_cross) = match direction {
            StackDirection::Vertical => (size.height, size.width),
            StackDirection::Horizontal => (size.width, size.height),
        };
        main += child_main;
        cross = cross.max(child_cross);
        count += 1;
    }
    main += gap * count.saturating_sub(1) as f32;

    let (width, height) = match direction {
        StackDirection::Vertical => (cross, main),
        StackDirection::Horizontal => (main, cross),
    };
    Size::new(width + padding * 2.0, height + padding * 2.0)
}

pub(super) fn layout_leaf<'a>(
    node: &'a Node,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    LayoutNode::leaf(node, path, ctx.bounds, SubLayout::None)
}

pub(super) fn layout_slider<'a>(
    node: &'a Node,
    slider: &SliderProps,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    let bounds = ctx.bounds.non_negative();
    let track = if slider.range().is_some() {
        bounds.inset(
            node.props
                .padding
                .unwrap_or(ctx.config.slider_handle_radius)
                .max(0.0),
        )
    } else {
        tracing::warn!(
            binding = ?slider.binding,
            min = ?slider.min,
            max = ?slider.max,
            "Slider without a valid range; laying out as inert"
        );
        Rect::new(bounds.x, bounds.y, 0.0, 0.0)
    };
    LayoutNode::leaf(node, path, bounds, SubLayout::Slider { track })
}

pub(super) fn layout_minimap<'a>(
    node: &'a Node,
    minimap: &MinimapProps,
    ctx: &LayoutContext<'_>,
    path: Vec<usize>,
) -> LayoutNode<'a> {
    let bounds = ctx.bounds.non_negative();
    let transform = minimap
        .world_bounds
        .and_then(|world| MinimapTransform::fit(world, bounds));
    if transform.is_none() {
        tracing::warn!(
            world_bounds = ?minimap.world_bounds,
            ?bounds,
            "Minimap has no usable world bounds; drawing background only"
        );
    }
    LayoutNode::leaf(node, path, bounds, SubLayout::Minimap(transform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ButtonProps;

    #[test]
    fn test_label_size_from_text_estimate() {
        let config = UiConfig::default();
        let size = intrinsic_size(&Node::label("Fleet"), &config);
        assert_eq!(size.width, 5.0 * 13.0 * 0.6);
        assert_eq!(size.height, config.line_height(13.0));
    }

    #[test]
    fn test_button_has_minimum_height() {
        let config = UiConfig::default();
        let size = intrinsic_size(&Node::button_with(ButtonProps::new("Go")), &config);
        assert!(size.height >= BUTTON_MIN_HEIGHT);
        assert!(size.width > config.text_width("Go", 13.0));
    }

    #[test]
    fn test_explicit_size_overrides_intrinsic() {
        let config = UiConfig::default();
        let size = measure(&Node::label("Fleet").width(300.0), &config);
        assert_eq!(size.width, 300.0);
        assert_eq!(size.height, config.line_height(13.0));
    }

    #[test]
    fn test_stack_sums_children_with_gaps_and_padding() {
        let config = UiConfig::default();
        let stack = Node::vstack()
            .padding(4.0)
            .gap(2.0)
            .child(Node::spacer().size(10.0, 10.0))
            .child(Node::spacer().size(30.0, 20.0))
            .child(Node::unknown("ghost"));
        let size = intrinsic_size(&stack, &config);
        assert_eq!(size, Size::new(38.0, 40.0));
    }

    #[test]
    fn test_minimized_window_measures_header_only() {
        let config = UiConfig::default();
        let window = Node::window(
            WindowProps::new("w", "W")
                .bounds(Rect::new(0.0, 0.0, 300.0, 200.0))
                .minimized(true),
        );
        assert_eq!(
            intrinsic_size(&window, &config),
            Size::new(300.0, config.window_header_height)
        );
    }
}
