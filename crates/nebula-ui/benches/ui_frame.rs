//! Benchmarks for one UI frame.
//!
//! Measures each pure pass separately on HUDs of growing size:
//! - Layout
//! - Hit testing
//! - Command building

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nebula_test_utils::fixtures;
use nebula_ui::hit_test::hit_test;
use nebula_ui::workspace::Workspace;
use nebula_ui::{Rect, UiContext, vec2};

/// The galaxy fixture plus `extra` floating windows in a cascade.
fn workspace(extra: usize) -> Workspace {
    let mut workspace = fixtures::galaxy_workspace();
    for i in 0..extra {
        let offset = (i % 20) as f32 * 12.0;
        workspace.add_window(
            format!("sector-{}", i),
            format!("Sector {}", i),
            Rect::new(240.0 + offset, 40.0 + offset, 220.0, 180.0),
        );
    }
    workspace
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/layout");
    let ui = UiContext::new();

    for windows in [0, 10, 50, 200] {
        let workspace = workspace(windows);
        let hud = fixtures::galaxy_hud(&workspace);
        group.bench_with_input(BenchmarkId::from_parameter(windows), &hud, |b, hud| {
            b.iter(|| black_box(ui.layout(hud, workspace.docking(), fixtures::viewport())));
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/hit_test");
    let ui = UiContext::new();

    for windows in [0, 10, 50, 200] {
        let workspace = workspace(windows);
        let hud = fixtures::galaxy_hud(&workspace);
        let layout = ui.layout(&hud, workspace.docking(), fixtures::viewport());
        group.bench_with_input(BenchmarkId::from_parameter(windows), &layout, |b, layout| {
            b.iter(|| {
                for point in [vec2(10.0, 10.0), vec2(320.0, 121.0), vec2(900.0, 500.0), vec2(500.0, 700.0)] {
                    black_box(hit_test(layout, point));
                }
            });
        });
    }

    group.finish();
}

fn bench_build_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/build_commands");
    let ui = UiContext::new();

    for windows in [0, 10, 50, 200] {
        let workspace = workspace(windows);
        let hud = fixtures::galaxy_hud(&workspace);
        let layout = ui.layout(&hud, workspace.docking(), fixtures::viewport());
        group.bench_with_input(BenchmarkId::from_parameter(windows), &layout, |b, layout| {
            b.iter(|| black_box(ui.build_commands(layout, 1.0)));
        });
    }

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let workspace = workspace(10);
    let ui = UiContext::new();

    c.bench_function("frame/full", |b| {
        b.iter(|| {
            let hud = fixtures::galaxy_hud(&workspace);
            let layout = ui.layout(&hud, workspace.docking(), fixtures::viewport());
            black_box(ui.build_commands(&layout, 1.0))
        });
    });
}

criterion_group!(
    benches,
    bench_layout,
    bench_hit_test,
    bench_build_commands,
    bench_full_frame
);
criterion_main!(benches);
