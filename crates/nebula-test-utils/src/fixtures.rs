//! A small galaxy HUD used across tests, benches and demos.

use nebula_core::geometry::Rect;
use nebula_core::math::vec2;
use nebula_ui::docking::{DockSide, DockingState};
use nebula_ui::event::Action;
use nebula_ui::node::{MinimapProps, SliderProps, WindowId};
use nebula_ui::workspace::Workspace;
use nebula_ui::{Color, Node, Viewport};

pub const SYSTEMS: &str = "systems";
pub const FLEETS: &str = "fleets";
pub const EVENT_LOG: &str = "log";
pub const RESEARCH: &str = "research";

/// Setting driven by the star density slider.
pub const STAR_DENSITY: &str = "star_density";

/// 1000x800 logical pixels at scale 1.
pub fn viewport() -> Viewport {
    Viewport::new(1000.0, 800.0, 1.0)
}

/// World extent shown by the minimap.
pub fn galaxy_bounds() -> Rect<f32> {
    Rect::new(-1000.0, -1000.0, 2000.0, 2000.0)
}

/// Two floating windows plus an event log docked at the bottom (200px) and
/// research docked on the left (220px).
pub fn galaxy_workspace() -> Workspace {
    let mut workspace = Workspace::new();
    workspace.add_window(SYSTEMS, "Star Systems", Rect::new(300.0, 60.0, 260.0, 320.0));
    workspace.add_window(FLEETS, "Fleets", Rect::new(600.0, 80.0, 240.0, 200.0));
    workspace.add_window(EVENT_LOG, "Event Log", Rect::new(0.0, 0.0, 300.0, 200.0));
    workspace.add_window(RESEARCH, "Research", Rect::new(0.0, 0.0, 220.0, 300.0));
    workspace.register_setting(STAR_DENSITY, 1.0);

    for (id, side, size) in [
        (EVENT_LOG, DockSide::Bottom, 200.0),
        (RESEARCH, DockSide::Left, 220.0),
    ] {
        // Every id above was just registered.
        if workspace.dock_window(&WindowId::from(id), side).is_ok() {
            workspace.docking_mut().set_size(side, size);
        }
    }
    workspace
}

/// Minimap of a handful of stars, centred on the origin.
pub fn minimap() -> Node {
    let props = MinimapProps::new(galaxy_bounds())
        .viewport_rect(Rect::new(-200.0, -150.0, 400.0, 300.0))
        .marker(vec2(0.0, 0.0), 3.0, Color::YELLOW)
        .marker(vec2(400.0, -250.0), 2.0, Color::WHITE)
        .marker(vec2(-600.0, 500.0), 2.0, Color::BLUE)
        .lane(vec2(0.0, 0.0), vec2(400.0, -250.0))
        .lane(vec2(0.0, 0.0), vec2(-600.0, 500.0))
        .selected(0);
    Node::minimap(props).key("minimap")
}

fn window_content(workspace: &Workspace, id: &WindowId) -> Vec<Node> {
    match id.as_str() {
        SYSTEMS => {
            let density = workspace.setting(STAR_DENSITY).unwrap_or(1.0);
            vec![
                Node::label("Star density"),
                Node::slider(
                    SliderProps::new(0.4, 4.0)
                        .step(0.1)
                        .value(density)
                        .binding(STAR_DENSITY),
                )
                .key("star-density"),
                minimap(),
            ]
        }
        FLEETS => vec![
            Node::bar_chart(vec![4.0, 7.0, 2.0, 9.0]).key("fleet-strength"),
            Node::hstack().gap(4.0).children([
                Node::button("Dock", Action::DockWindow {
                    window: id.clone(),
                    side: DockSide::Right,
                })
                .key("dock-fleets"),
                Node::button("Close", Action::ToggleWindow(id.clone())).key("close-fleets"),
            ]),
        ],
        EVENT_LOG => vec![
            Node::label("Colony founded at Vega"),
            Node::label("Fleet 3 arrived at Sol"),
        ],
        _ => vec![Node::label(id.as_str())],
    }
}

/// Window node for `id` from the workspace's stored state.
pub fn window_node(workspace: &Workspace, id: &WindowId) -> Option<Node> {
    let props = workspace.window_props(id).ok()?;
    let z = workspace.window(id).map_or(0, |state| state.z_order as i32);
    Some(
        Node::window(props)
            .z_index(z)
            .children(window_content(workspace, id)),
    )
}

/// The whole HUD: one dock container per occupied side, then the floating
/// windows in z order.
pub fn galaxy_hud(workspace: &Workspace) -> Node {
    let docking: &DockingState = workspace.docking();
    let docks = DockSide::ALL
        .into_iter()
        .filter(|side| !docking.slot(*side).is_empty())
        .map(|side| {
            Node::dock(side).children(
                docking
                    .slot(side)
                    .windows
                    .iter()
                    .filter_map(|id| window_node(workspace, id)),
            )
        });
    let floating = workspace
        .floating_windows()
        .into_iter()
        .filter_map(|(id, _)| window_node(workspace, id));

    Node::layer().children(docks.chain(floating).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_holds_every_open_window() {
        let workspace = galaxy_workspace();
        let hud = galaxy_hud(&workspace);
        // Bottom and left docks, then two floating windows.
        assert_eq!(hud.children.len(), 4);
        let ids: Vec<&str> = hud
            .children
            .iter()
            .flat_map(|child| std::iter::once(child).chain(child.children.iter()))
            .filter_map(|node| node.window_id())
            .map(|id| id.as_str())
            .collect();
        for id in [SYSTEMS, FLEETS, EVENT_LOG, RESEARCH] {
            assert!(ids.contains(&id), "missing {id}");
        }
    }
}
