//! Galaxy HUD Example - Headless Frame Loop
//!
//! Drives the engine the way the client does, without a window:
//! - Rebuild the node tree from workspace state each frame
//! - Lay it out, feed a scripted pointer, dispatch the resulting events
//! - Build the command list and hand it to a recording executor
//!
//! Run with `--profile` and connect puffin_viewer to inspect the passes.

use nebula_core::logging;
use nebula_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use nebula_test_utils::RecordingExecutor;
use nebula_test_utils::fixtures::{self, STAR_DENSITY, SYSTEMS};
use nebula_ui::{EventDispatcher, UiContext, Vec2, vec2};

#[derive(Debug, Clone, Copy)]
enum Pointer {
    Down(Vec2),
    Drag(Vec2),
    Up(Vec2),
}

fn script() -> Vec<Pointer> {
    vec![
        // Drag the systems window by its title bar.
        Pointer::Down(vec2(350.0, 70.0)),
        Pointer::Drag(vec2(380.0, 90.0)),
        Pointer::Drag(vec2(400.0, 110.0)),
        Pointer::Up(vec2(400.0, 110.0)),
        // Push the density slider towards its maximum.
        Pointer::Down(vec2(430.0, 161.0)),
        Pointer::Drag(vec2(560.0, 161.0)),
        Pointer::Up(vec2(560.0, 161.0)),
        // Grow the bottom dock.
        Pointer::Down(vec2(600.0, 601.0)),
        Pointer::Drag(vec2(600.0, 520.0)),
        Pointer::Up(vec2(600.0, 520.0)),
    ]
}

fn main() {
    logging::init();
    if std::env::args().any(|arg| arg == "--profile") {
        init_profiling(ProfilingBackend::PuffinHttp);
    }

    let mut workspace = fixtures::galaxy_workspace();
    let mut ui = UiContext::new();
    let recorder = RecordingExecutor::new();

    for (frame, pointer) in script().into_iter().enumerate() {
        new_frame();

        let hud = fixtures::galaxy_hud(&workspace);
        let layout = ui.layout(&hud, workspace.docking(), fixtures::viewport());
        let response = match pointer {
            Pointer::Down(point) => ui.pointer_down(&layout, point),
            Pointer::Drag(point) => ui.pointer_drag(&layout, point),
            Pointer::Up(point) => ui.pointer_up(&layout, point),
        };

        for event in workspace.dispatch_all(response.events) {
            tracing::warn!(?event, "Unhandled UI event");
        }

        ui.build_commands(&layout, frame as f32 / 60.0)
            .execute(&mut recorder.clone());
        tracing::info!(
            frame,
            ?pointer,
            consumed = response.consumed,
            nodes = layout.len(),
            commands = recorder.commands().len(),
            "Frame done"
        );
    }

    let systems = workspace.window(&SYSTEMS.into()).map(|state| state.bounds);
    tracing::info!(
        ?systems,
        density = ?workspace.setting(STAR_DENSITY),
        frames = recorder.frames(),
        "Script finished"
    );
}
