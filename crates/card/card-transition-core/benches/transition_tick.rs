use card_test_fixtures::sessions;
use card_transition_core::{CardConfig, CardTransitionController, GestureEvent, Session};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("update_in_flight", |b| {
        let mut ctl = CardTransitionController::new(CardConfig::default()).unwrap();
        b.iter(|| {
            if ctl.running_animations() == 0 {
                ctl.handle(GestureEvent::PanBegan);
                ctl.handle(GestureEvent::PanEnded);
            }
            black_box(ctl.update(black_box(1.0 / 120.0)));
        })
    });
}

fn bench_scrub(c: &mut Criterion) {
    c.bench_function("scrub_drag", |b| {
        let mut ctl = CardTransitionController::new(CardConfig::default()).unwrap();
        ctl.handle(GestureEvent::PanBegan);
        let mut dy = 0.0f32;
        b.iter(|| {
            dy = (dy - 7.0) % 600.0;
            black_box(ctl.handle(GestureEvent::PanChanged { translation_y: dy }));
        })
    });
}

fn bench_session(c: &mut Criterion) {
    let json = sessions::json("collapse-after-expand").unwrap();
    let session = Session::from_json(&json).unwrap();
    c.bench_function("session_collapse_after_expand", |b| {
        b.iter(|| black_box(session.run().unwrap()))
    });
}

criterion_group!(benches, bench_tick, bench_scrub, bench_session);
criterion_main!(benches);
