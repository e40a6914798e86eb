use criterion::{black_box, criterion_group, criterion_main, Criterion};
use colour_clicker::core::{DifficultyCurve, GameSession, Round, SimpleRng};
use colour_clicker::term::{GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::seeded(12345);
    session.start().unwrap();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            black_box(session.tick());
        })
    });
}

fn bench_round_generate(c: &mut Criterion) {
    let curve = DifficultyCurve::standard();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("round_generate_r25", |b| {
        b.iter(|| Round::generate(black_box(25), &curve, &mut rng))
    });
}

fn bench_correct_select(c: &mut Criterion) {
    let mut session = GameSession::seeded(12345);
    let mut snap = session.start().unwrap();

    c.bench_function("select_correct", |b| {
        b.iter(|| {
            if !snap.playable() {
                snap = session.start().unwrap();
            }
            snap = session.select(black_box(snap.divergent_index)).unwrap();
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut session = GameSession::seeded(12345);
    let mut snap = session.start().unwrap();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = GameSession::seeded(12345);
    let snap = session.start().unwrap();
    let view = GameView::default();

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render(black_box(&snap), Viewport::new(80, 24)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_round_generate,
    bench_correct_select,
    bench_snapshot_into,
    bench_render
);
criterion_main!(benches);
