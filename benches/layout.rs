use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use daygrid::{DayEvent, GridConfig, compute_layout, parse_clock_time};
use std::hint::black_box;

/// Deterministic day schedule with plenty of overlap: starts march across
/// the working day in 7-minute strides, durations cycle 15-120 minutes.
fn dense_day(count: usize) -> Vec<DayEvent> {
    (0..count)
        .map(|i| {
            let minutes_in = (i * 7) % (12 * 60);
            let hour = 8 + minutes_in / 60;
            let minute = minutes_in % 60;
            let duration = 0.25 + (i % 8) as f32 * 0.25;
            DayEvent::new(format!("e{i}"), format!("{hour:02}:{minute:02}"))
                .with_duration(duration)
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_clock_time");
    for input in ["14:30", "2:30 pm", "  9:05 AM ", "not a time"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, data| {
            b.iter(|| black_box(parse_clock_time(black_box(data), 8)));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");
    let config = GridConfig {
        day_start_hour: 8,
        ..GridConfig::default()
    };
    for count in [8usize, 32, 128] {
        let events = dense_day(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &events,
            |b, events| {
                b.iter(|| {
                    let layout = compute_layout(black_box(events), &config);
                    black_box(layout.len());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_layout
);
criterion_main!(benches);
