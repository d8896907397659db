use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inspection_formation::{GoalSequence, InspectionParams, InspectionPlanner, State};
use nalgebra::Point3;

fn goals(n: usize) -> GoalSequence {
    GoalSequence::from_states(
        (0..n)
            .map(|i| {
                let t = i as f64 * 0.01;
                State::at(Point3::new(5.0 * t.cos(), 4.0 * t.sin(), 1.0 + t))
            })
            .collect(),
    )
}

fn bench_refresh(c: &mut Criterion) {
    let mut planner = InspectionPlanner::new(InspectionParams::default()).expect("params");
    planner.set_goals(goals(1000));

    c.bench_function("refresh_1000_goals", |b| {
        b.iter(|| {
            planner.increment_relative_angle(true);
            planner.refresh();
            black_box(planner.goals());
        })
    });
}

criterion_group!(benches, bench_refresh);
criterion_main!(benches);
