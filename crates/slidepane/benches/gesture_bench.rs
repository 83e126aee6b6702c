//! Benchmarks for the gesture and settle hot paths.
//!
//! Run with: cargo bench -p slidepane

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use slidepane::settle::{SettleAnimator, SettleTiming, plan_settle};
use slidepane::{Gravity, PanelConfig, PanelGeometry, PointerEvent, SlidingPanel, SurfaceMetrics};
use std::hint::black_box;
use std::time::Duration;
use web_time::Instant;

fn mounted(anchor: Option<f32>) -> SlidingPanel {
    let mut config = PanelConfig::new(Gravity::Bottom);
    if let Some(anchor) = anchor {
        config = config.with_anchor_point(anchor);
    }
    let mut panel = match SlidingPanel::new(config, ()) {
        Ok(panel) => panel,
        Err(err) => panic!("bench config rejected: {err}"),
    };
    panel.on_measure_complete(
        PanelGeometry::new(1080, 1920).with_slideable(SurfaceMetrics::new(1080, 1600)),
    );
    panel
}

/// Pointer stream that drags the collapsed panel up by `moves * 12` px.
fn drag_stream(top: f32, moves: usize) -> Vec<PointerEvent> {
    let t0 = Instant::now();
    let mut events = Vec::with_capacity(moves + 2);
    events.push(PointerEvent::down(540.0, top + 20.0, t0));
    for i in 1..=moves {
        let t = t0 + Duration::from_millis(8 * i as u64);
        events.push(PointerEvent::moved(540.0, top + 20.0 - 12.0 * i as f32, t));
    }
    let end = t0 + Duration::from_millis(8 * (moves as u64 + 1));
    events.push(PointerEvent::up(
        540.0,
        top + 20.0 - 12.0 * moves as f32,
        end,
    ));
    events
}

fn bench_drag_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/drag_dispatch");
    for moves in [8usize, 32, 120] {
        group.bench_with_input(BenchmarkId::new("moves", moves), &moves, |b, &moves| {
            b.iter_batched(
                || {
                    let panel = mounted(Some(0.4));
                    let events = drag_stream(panel.slideable_top() as f32, moves);
                    (panel, events)
                },
                |(mut panel, events)| {
                    for event in &events {
                        black_box(panel.dispatch_pointer_event(event, true));
                    }
                    panel
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_settle_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/settle_frames");
    for (label, anchor) in [("no_anchor", None), ("anchor", Some(0.5))] {
        group.bench_function(label, |b| {
            b.iter_batched(
                || {
                    let mut panel = mounted(anchor);
                    panel.expand();
                    panel
                },
                |mut panel| {
                    while panel.on_frame(Duration::from_millis(16)) {}
                    black_box(panel.slide_offset())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_settle_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/settle_planning");
    let timing = SettleTiming::from_millis(120, 600);

    group.bench_function("plan_settle", |b| {
        b.iter(|| {
            for i in 0..64 {
                let offset = i as f32 / 64.0;
                black_box(plan_settle(black_box(0.0), offset, Some(0.3)));
                black_box(plan_settle(black_box(-2400.0), offset, None));
            }
        })
    });

    group.bench_function("animator_ticks", |b| {
        b.iter(|| {
            let mut animator = SettleAnimator::new(1532, 0, -3200.0, 1532, timing);
            let mut frames = 0u32;
            while !animator.tick(Duration::from_millis(16)).finished {
                frames += 1;
            }
            black_box(frames)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_drag_dispatch,
    bench_settle_frames,
    bench_settle_planning,
);

criterion_main!(benches);
