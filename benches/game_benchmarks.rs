use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use charades::{GameEngine, WordProvider, catalog};

/// Helper to create an engine with a running game
fn setup_running_game() -> GameEngine {
    let mut engine = GameEngine::new(WordProvider::seeded(42));
    engine.select_category(catalog::get(1).unwrap());
    engine.start_game();
    engine
}

/// Benchmark the full turn-advancement path (score, flag bookkeeping,
/// word draw, snapshot replacement)
fn bench_correct_answer(c: &mut Criterion) {
    c.bench_function("correct_answer", |b| {
        b.iter_batched(
            setup_running_game,
            |mut engine| engine.correct_answer(),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark a plain countdown tick
fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick", |b| {
        b.iter_batched(
            setup_running_game,
            |mut engine| engine.tick(),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark a random word draw from the catalog
fn bench_random_word(c: &mut Criterion) {
    let mut words = WordProvider::seeded(42);

    c.bench_function("random_word", |b| {
        b.iter(|| words.random_word(1));
    });
}

/// Benchmark playing a complete 10-round game of correct answers
fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_20_turns", |b| {
        b.iter_batched(
            setup_running_game,
            |mut engine| {
                while !engine.state().is_finished {
                    engine.correct_answer();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_correct_answer,
    bench_tick,
    bench_random_word,
    bench_full_game
);
criterion_main!(benches);
