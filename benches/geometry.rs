use criterion::{black_box, criterion_group, criterion_main, Criterion};

use circle_progress_render::geometry::{compute_arc_sweep, compute_line_segments, DrawingFrame};
use circle_progress_render::CircleProgress;
use circle_progress_types::{GeometryConfig, ProgressState, ProgressStyle, ShaderMode};

fn bench_line_segments(c: &mut Criterion) {
    let frame = DrawingFrame::new(400, 400, 1.0);
    let state = ProgressState::new(50, 60, 100).unwrap();
    let geometry = GeometryConfig {
        line_count: 120,
        ..Default::default()
    };

    c.bench_function("compute_line_segments_120", |b| {
        b.iter(|| compute_line_segments(black_box(&state), black_box(&geometry), &frame))
    });
}

fn bench_arc_sweep(c: &mut Criterion) {
    let state = ProgressState::new(50, 60, 100).unwrap();

    c.bench_function("compute_arc_sweep", |b| {
        b.iter(|| compute_arc_sweep(black_box(&state), black_box(true)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut progress = CircleProgress::new();
    progress.on_resize(400, 400);
    progress.set_progress_first(50);
    progress.set_progress_second(60);

    c.bench_function("render_line", |b| b.iter(|| progress.render()));

    progress.set_style(ProgressStyle::SolidLine);
    progress.set_shader_mode(ShaderMode::Sweep);
    c.bench_function("render_solid_line_sweep", |b| b.iter(|| progress.render()));
}

criterion_group!(benches, bench_line_segments, bench_arc_sweep, bench_render);
criterion_main!(benches);
