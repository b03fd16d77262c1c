//! Layout tree to [`CommandList`].
//!
//! Painting is a pre-order walk: a node's own chrome is emitted before its
//! children, and children in layout order, so later siblings draw on top.
//! Content that must not spill (window bodies, dock content, the minimap) is
//! bracketed with `Save`/`ClipRect`/`Restore`.

use nebula_core::geometry::Rect;
use nebula_core::math::{Vec2, inverse_lerp, vec2};
use nebula_core::profiling::{profile_function, profile_scope};

use crate::color::Color;
use crate::command::{Command, CommandList, ShapeStyle};
use crate::config::UiConfig;
use crate::docking::{DockLayout, DockSide};
use crate::layout::{
    DockTabsLayout, LayoutNode, LayoutTree, MinimapTransform, SubLayout, WindowLayout,
};
use crate::node::{
    BarChartProps, ButtonProps, ImageProps, LabelProps, MinimapProps, NodeKind, SliderProps,
    TextAlign, WindowProps,
};
use crate::theme::Theme;

const SHADOW_OFFSET: f32 = 3.0;
const TITLE_INSET: f32 = 8.0;
const TAB_UNDERLINE_WIDTH: f32 = 2.0;
const BAR_FILL_RATIO: f32 = 0.7;
const SELECTION_SPIN: f32 = 1.5;
const SELECTION_MARGIN: f32 = 4.0;

/// Per-frame paint inputs.
#[derive(Debug, Clone, Copy)]
pub struct PaintContext<'p> {
    pub theme: &'p Theme,
    /// Seconds since start-up; drives animated decorations.
    pub time: f32,
}

/// Build the command list for a laid-out tree.
pub fn build_commands(tree: &LayoutTree<'_>, paint: &PaintContext<'_>) -> CommandList {
    profile_function!();

    let mut builder = CommandBuilder {
        list: CommandList::new(),
        theme: paint.theme,
        config: tree.config(),
        dock_layout: tree.dock_layout(),
        time: paint.time,
    };
    builder.list.push(Command::Clear {
        color: paint.theme.palette.background,
    });
    if let Some(root) = tree.root() {
        builder.node(root);
    }

    tracing::trace!(commands = builder.list.len(), "Built command list");
    builder.list
}

struct CommandBuilder<'b> {
    list: CommandList,
    theme: &'b Theme,
    config: &'b UiConfig,
    dock_layout: &'b DockLayout,
    time: f32,
}

impl CommandBuilder<'_> {
    fn node(&mut self, node: &LayoutNode<'_>) {
        match (&node.node.kind, &node.sub) {
            (NodeKind::Window(props), SubLayout::Window(chrome)) => self.window(node, props, chrome),
            (NodeKind::DockContainer(_), SubLayout::Dock(tabs)) => self.dock(node, tabs),
            (NodeKind::Button(button), _) => self.button(node, button),
            (NodeKind::Label(label), _) => self.label(node, label),
            (NodeKind::Slider(slider), SubLayout::Slider { track }) => {
                self.slider(node, slider, *track)
            }
            (NodeKind::Minimap(minimap), SubLayout::Minimap(transform)) => {
                self.minimap(node, minimap, *transform)
            }
            (NodeKind::BarChart(chart), _) => self.bar_chart(node, chart),
            (NodeKind::Image(image), _) => self.image(node, image),
            _ => {
                self.background(node);
                self.children(node);
            }
        }
    }

    fn children(&mut self, node: &LayoutNode<'_>) {
        for child in &node.children {
            self.node(child);
        }
    }

    fn clipped_children(&mut self, node: &LayoutNode<'_>, clip: Rect<f32>) {
        if node.children.is_empty() || clip.is_empty() {
            return;
        }
        self.list.push(Command::Save);
        self.list.push(Command::ClipRect { rect: clip });
        self.children(node);
        self.list.push(Command::Restore);
    }

    fn rect(&mut self, rect: Rect<f32>, style: ShapeStyle, radius: f32) {
        self.list.push(Command::Rect {
            rect,
            style,
            radius,
        });
    }

    fn text(&mut self, text: &str, position: Vec2, size: f32, color: Color, align: TextAlign) {
        if text.is_empty() {
            return;
        }
        self.list.push(Command::Text {
            text: text.to_string(),
            position,
            size,
            color,
            align,
        });
    }

    /// Top of a text line vertically centred in `rect`.
    fn text_top(&self, rect: Rect<f32>, size: f32) -> f32 {
        rect.y + (rect.height - self.config.line_height(size)) * 0.5
    }

    fn background(&mut self, node: &LayoutNode<'_>) {
        let props = &node.node.props;
        if props.background.is_none() && props.border.is_none() {
            return;
        }
        let mut style = ShapeStyle {
            fill: props.background,
            stroke: None,
        };
        if let Some(border) = props.border {
            style = style.with_stroke(border.color, border.width);
        }
        self.rect(node.bounds, style, 0.0);
    }

    fn window(&mut self, node: &LayoutNode<'_>, props: &WindowProps, chrome: &WindowLayout) {
        profile_scope!("window");
        let theme = self.theme;
        let palette = &theme.palette;
        let floating = node.docked.is_none();
        let radius = if floating { self.theme.corner_radius } else { 0.0 };
        let border = node.node.props.border;

        if floating {
            self.rect(
                node.bounds.translate(vec2(0.0, SHADOW_OFFSET)),
                ShapeStyle::fill(palette.shadow),
                radius,
            );
        }
        self.rect(
            node.bounds,
            ShapeStyle::fill(node.node.props.background.unwrap_or(palette.surface)).with_stroke(
                border.map_or(palette.border, |b| b.color),
                border.map_or(self.theme.border_width, |b| b.width),
            ),
            radius,
        );
        self.rect(chrome.header, ShapeStyle::fill(palette.header), radius);

        let title_size = self.theme.title_font_size;
        let title_top = self.text_top(chrome.header, title_size);
        let text_primary = palette.text_primary;
        self.text(
            &props.title,
            vec2(chrome.header.x + TITLE_INSET, title_top),
            title_size,
            text_primary,
            TextAlign::Left,
        );

        if let Some(button) = chrome.minimize_button {
            self.list.push(Command::PolygonFill {
                points: minimize_glyph(button, props.minimized),
                color: text_primary,
            });
        }

        self.clipped_children(node, chrome.content);
    }

    fn dock(&mut self, node: &LayoutNode<'_>, tabs: &DockTabsLayout) {
        profile_scope!("dock");
        if node.bounds.is_empty() {
            return;
        }
        let theme = self.theme;
        let palette = &theme.palette;
        let (surface, tab_bar, accent, border) =
            (palette.surface, palette.tab_bar, palette.accent, palette.border);
        let (tab_active, tab_inactive) = (palette.tab_active, palette.tab_inactive);
        let (text_primary, text_secondary) = (palette.text_primary, palette.text_secondary);

        self.rect(node.bounds, ShapeStyle::fill(surface), 0.0);
        self.rect(tabs.tab_bar, ShapeStyle::fill(tab_bar), 0.0);

        let title_size = self.theme.title_font_size;
        for tab in &tabs.tabs {
            if tab.bounds.is_empty() {
                continue;
            }
            let fill = if tab.active { tab_active } else { tab_inactive };
            self.rect(tab.bounds, ShapeStyle::fill(fill), self.theme.corner_radius);
            let top = self.text_top(tab.bounds, title_size);
            self.text(
                &tab.title,
                vec2(tab.bounds.center().x, top),
                title_size,
                if tab.active { text_primary } else { text_secondary },
                TextAlign::Center,
            );
            if tab.active {
                let y = tab.bounds.bottom() - TAB_UNDERLINE_WIDTH * 0.5;
                self.list.push(Command::Line {
                    from: vec2(tab.bounds.x, y),
                    to: vec2(tab.bounds.right(), y),
                    color: accent,
                    width: TAB_UNDERLINE_WIDTH,
                });
            }
        }

        if let Some(side) = node.docked {
            if let Some(handle) = self.dock_layout.resize_handle(side, self.config.dock_resize_margin) {
                let centre = handle.center();
                let (from, to) = if matches!(side, DockSide::Left | DockSide::Right) {
                    (vec2(centre.x, handle.y), vec2(centre.x, handle.bottom()))
                } else {
                    (vec2(handle.x, centre.y), vec2(handle.right(), centre.y))
                };
                self.list.push(Command::Line {
                    from,
                    to,
                    color: border,
                    width: 1.0,
                });
            }
        }

        self.clipped_children(node, tabs.content);
    }

    fn button(&mut self, node: &LayoutNode<'_>, button: &ButtonProps) {
        let theme = self.theme;
        let palette = &theme.palette;
        let base = node.node.props.background.unwrap_or(palette.button);
        let (fill, text_color) = if button.enabled {
            (base, palette.text_primary)
        } else {
            (base.with_alpha(base.a * 0.5), palette.text_secondary)
        };
        let mut style = ShapeStyle::fill(fill);
        if let Some(border) = node.node.props.border {
            style = style.with_stroke(border.color, border.width);
        }
        self.rect(node.bounds, style, self.theme.corner_radius);

        let size = button.font_size.unwrap_or(self.theme.font_size);
        let top = self.text_top(node.bounds, size);
        self.text(
            &button.label,
            vec2(node.bounds.center().x, top),
            size,
            text_color,
            TextAlign::Center,
        );
    }

    fn label(&mut self, node: &LayoutNode<'_>, label: &LabelProps) {
        self.background(node);
        let inner = node.bounds.inset(node.node.props.padding.unwrap_or(0.0).max(0.0));
        let size = label.font_size.unwrap_or(self.theme.font_size);
        let x = match label.align {
            TextAlign::Left => inner.x,
            TextAlign::Center => inner.center().x,
            TextAlign::Right => inner.right(),
        };
        let top = self.text_top(inner, size);
        let color = label.color.unwrap_or(self.theme.palette.text_primary);
        self.text(&label.text, vec2(x, top), size, color, label.align);
    }

    fn slider(&mut self, node: &LayoutNode<'_>, slider: &SliderProps, track: Rect<f32>) {
        self.background(node);
        let Some((min, max)) = slider.range() else {
            return;
        };
        if track.width <= 0.0 {
            return;
        }
        let theme = self.theme;
        let palette = &theme.palette;
        let (track_color, accent, handle) = (palette.slider_track, palette.accent, palette.text_primary);

        let fraction = inverse_lerp(min, max, slider.value.clamp(min, max));
        let radius = track.height * 0.5;
        self.rect(track, ShapeStyle::fill(track_color), radius);
        self.rect(
            Rect::new(track.x, track.y, track.width * fraction, track.height),
            ShapeStyle::fill(accent),
            radius,
        );
        self.list.push(Command::Circle {
            center: vec2(track.x + track.width * fraction, track.center().y),
            radius: self.config.slider_handle_radius,
            style: ShapeStyle::fill(handle).with_stroke(accent, 1.0),
        });
    }

    fn minimap(
        &mut self,
        node: &LayoutNode<'_>,
        minimap: &MinimapProps,
        transform: Option<MinimapTransform>,
    ) {
        profile_scope!("minimap");
        let theme = self.theme;
        let palette = &theme.palette;
        let (background, lane, view, accent, border) = (
            palette.minimap_background,
            palette.minimap_lane,
            palette.minimap_view,
            palette.accent,
            palette.border,
        );

        self.list.push(Command::Save);
        self.list.push(Command::ClipRect { rect: node.bounds });
        self.rect(node.bounds, ShapeStyle::fill(background), 0.0);

        if let Some(transform) = transform {
            // Lanes are drawn in world units under the map transform.
            if !minimap.lanes.is_empty() {
                self.list.push(Command::Save);
                self.list.push(Command::Translate {
                    x: transform.offset.x,
                    y: transform.offset.y,
                });
                self.list.push(Command::Scale {
                    x: transform.scale,
                    y: transform.scale,
                });
                for [from, to] in &minimap.lanes {
                    self.list.push(Command::Line {
                        from: *from,
                        to: *to,
                        color: lane,
                        width: 1.0 / transform.scale,
                    });
                }
                self.list.push(Command::Restore);
            }

            for marker in &minimap.markers {
                self.list.push(Command::Circle {
                    center: transform.world_to_pixel(marker.position),
                    radius: marker.radius,
                    style: ShapeStyle::fill(marker.color),
                });
            }

            if let Some(index) = minimap.selected {
                match minimap.markers.get(index) {
                    Some(marker) => {
                        let centre = transform.world_to_pixel(marker.position);
                        let half = marker.radius + SELECTION_MARGIN;
                        self.list.push(Command::Save);
                        self.list.push(Command::Translate {
                            x: centre.x,
                            y: centre.y,
                        });
                        self.list.push(Command::Rotate {
                            radians: self.time * SELECTION_SPIN,
                        });
                        self.list.push(Command::PolygonStroke {
                            points: vec![
                                vec2(-half, -half),
                                vec2(half, -half),
                                vec2(half, half),
                                vec2(-half, half),
                            ],
                            color: accent,
                            width: 1.5,
                        });
                        self.list.push(Command::Restore);
                    }
                    None => tracing::debug!(
                        index,
                        markers = minimap.markers.len(),
                        "Selected minimap marker out of range"
                    ),
                }
            }

            if let Some(viewport) = minimap.viewport_rect {
                self.rect(
                    transform.world_rect_to_pixel(viewport),
                    ShapeStyle::stroke(view, 1.0),
                    0.0,
                );
            }
        }

        self.rect(node.bounds, ShapeStyle::stroke(border, 1.0), 0.0);
        self.list.push(Command::Restore);
    }

    fn bar_chart(&mut self, node: &LayoutNode<'_>, chart: &BarChartProps) {
        self.background(node);
        let inner = node.bounds.inset(node.node.props.padding.unwrap_or(4.0).max(0.0));
        let theme = self.theme;
        let palette = &theme.palette;
        let (bar_color, baseline) = (chart.bar_color.unwrap_or(palette.chart_bar), palette.border);

        if !chart.values.is_empty() && !inner.is_empty() {
            let largest = chart.values.iter().copied().fold(0.0f32, f32::max);
            let max = chart
                .max
                .filter(|max| max.is_finite() && *max > 0.0)
                .unwrap_or(largest);
            let max = if max > 0.0 { max } else { 1.0 };

            let slot = inner.width / chart.values.len() as f32;
            let width = slot * BAR_FILL_RATIO;
            for (i, value) in chart.values.iter().enumerate() {
                let height = (value.max(0.0) / max).min(1.0) * inner.height;
                if height <= 0.0 {
                    continue;
                }
                self.rect(
                    Rect::new(
                        inner.x + slot * i as f32 + (slot - width) * 0.5,
                        inner.bottom() - height,
                        width,
                        height,
                    ),
                    ShapeStyle::fill(bar_color),
                    0.0,
                );
            }
        }

        self.list.push(Command::Line {
            from: vec2(inner.x, inner.bottom()),
            to: vec2(inner.right(), inner.bottom()),
            color: baseline,
            width: 1.0,
        });
    }

    fn image(&mut self, node: &LayoutNode<'_>, image: &ImageProps) {
        self.background(node);
        if node.bounds.is_empty() {
            return;
        }
        self.list.push(Command::ImageRect {
            image: image.image,
            rect: node.bounds,
            tint: image.tint,
            rotation: image.rotation,
        });
    }
}

/// Triangle inside the minimize button: pointing down while open, right
/// while minimized.
fn minimize_glyph(button: Rect<f32>, minimized: bool) -> Vec<Vec2> {
    let c = button.center();
    let r = button.width.min(button.height) * 0.2;
    if minimized {
        vec![vec2(c.x - r, c.y - r), vec2(c.x + r, c.y), vec2(c.x - r, c.y + r)]
    } else {
        vec![vec2(c.x - r, c.y - r), vec2(c.x + r, c.y - r), vec2(c.x, c.y + r)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docking::DockingState;
    use crate::layout::layout_tree;
    use crate::node::{Node, WindowProps};
    use crate::viewport::Viewport;

    fn build(tree: &Node, docking: &DockingState, time: f32) -> CommandList {
        let config = UiConfig::default();
        let theme = Theme::dark();
        let layout = layout_tree(tree, docking, Viewport::new(1000.0, 800.0, 1.0), &config);
        build_commands(&layout, &PaintContext { theme: &theme, time })
    }

    fn balanced(list: &CommandList) -> bool {
        let mut depth = 0i32;
        for command in list {
            match command {
                Command::Save => depth += 1,
                Command::Restore => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return false;
            }
        }
        depth == 0
    }

    #[test]
    fn test_clear_comes_first() {
        let list = build(&Node::unknown("nothing"), &DockingState::new(), 0.0);
        assert_eq!(list.len(), 1);
        assert!(matches!(list.as_slice()[0], Command::Clear { .. }));
    }

    #[test]
    fn test_window_content_is_clipped() {
        let tree = Node::layer().child(
            Node::window(
                WindowProps::new("fleet", "Fleet").bounds(Rect::new(10.0, 10.0, 200.0, 150.0)),
            )
            .child(Node::label("Ships")),
        );
        let list = build(&tree, &DockingState::new(), 0.0);
        let commands = list.as_slice();

        let clip = commands
            .iter()
            .position(|c| matches!(c, Command::ClipRect { .. }))
            .unwrap();
        assert_eq!(commands[clip - 1], Command::Save);
        assert!(matches!(&commands[clip + 1], Command::Text { text, .. } if text == "Ships"));
        assert_eq!(commands[clip + 2], Command::Restore);
        assert!(balanced(&list));
    }

    #[test]
    fn test_minimized_window_has_no_content() {
        let tree = Node::window(
            WindowProps::new("fleet", "Fleet")
                .bounds(Rect::new(10.0, 10.0, 200.0, 150.0))
                .minimized(true),
        )
        .child(Node::label("Ships"));
        let list = build(&tree, &DockingState::new(), 0.0);
        assert!(!list.iter().any(|c| matches!(c, Command::ClipRect { .. })));
        assert!(list.iter().any(|c| matches!(c, Command::PolygonFill { .. })));
    }

    #[test]
    fn test_selected_marker_rotates_with_time() {
        let minimap = MinimapProps::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .marker(Vec2::new(50.0, 50.0), 3.0, Color::WHITE)
            .selected(0);
        let tree = Node::minimap(minimap).size(100.0, 100.0);
        let list = build(&tree, &DockingState::new(), 2.0);

        assert!(list.iter().any(|c| *c == Command::Rotate { radians: 3.0 }));
        assert!(balanced(&list));
    }

    #[test]
    fn test_empty_dock_emits_nothing() {
        let tree = Node::dock(DockSide::Left).child(Node::label("Log"));
        let list = build(&tree, &DockingState::new(), 0.0);
        assert_eq!(list.len(), 1);
    }
}
