use nebula_core::math::Vec2;

use crate::command::CommandList;
use crate::command_builder::{PaintContext, build_commands};
use crate::config::UiConfig;
use crate::docking::DockingState;
use crate::interaction::{Interaction, InteractionState, PointerResponse};
use crate::layout::{LayoutTree, layout_tree};
use crate::node::Node;
use crate::theme::Theme;
use crate::viewport::Viewport;

/// Everything the engine keeps between frames.
///
/// Create one at start-up and drive it once per frame:
///
/// ```
/// use nebula_ui::docking::DockingState;
/// use nebula_ui::{Node, UiContext, Vec2, Viewport};
///
/// let mut ui = UiContext::new();
/// let tree = Node::vstack().child(Node::label("Sector 7"));
/// let docking = DockingState::new();
///
/// let layout = ui.layout(&tree, &docking, Viewport::new(800.0, 600.0, 1.0));
/// let response = ui.pointer_down(&layout, Vec2::new(4.0, 4.0));
/// assert!(!response.consumed);
/// let commands = ui.build_commands(&layout, 0.0);
/// assert!(!commands.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct UiContext {
    config: UiConfig,
    theme: Theme,
    interaction: Interaction,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn interaction_state(&self) -> &InteractionState {
        self.interaction.state()
    }

    /// Lay out `tree` for this frame. The result borrows the tree, not the context.
    pub fn layout<'a>(
        &self,
        tree: &'a Node,
        docking: &DockingState,
        viewport: Viewport,
    ) -> LayoutTree<'a> {
        layout_tree(tree, docking, viewport, &self.config)
    }

    pub fn pointer_down(&mut self, layout: &LayoutTree<'_>, point: Vec2) -> PointerResponse {
        self.interaction.pointer_down(layout, point)
    }

    pub fn pointer_drag(&mut self, layout: &LayoutTree<'_>, point: Vec2) -> PointerResponse {
        self.interaction.pointer_drag(layout, point)
    }

    pub fn pointer_up(&mut self, layout: &LayoutTree<'_>, point: Vec2) -> PointerResponse {
        self.interaction.pointer_up(layout, point)
    }

    pub fn release_capture(&mut self) {
        self.interaction.release_capture();
    }

    /// Paint `layout`. `time` is seconds since start-up.
    pub fn build_commands(&self, layout: &LayoutTree<'_>, time: f32) -> CommandList {
        build_commands(
            layout,
            &PaintContext {
                theme: &self.theme,
                time,
            },
        )
    }
}
