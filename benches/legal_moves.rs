use rust_klondike::{Game, GameRng, SolitaireEnv, GameConfig};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        dealing_new_game,
        enumerating_legal_moves,
        building_observation,
        cloning_game,
        playing_random_episode,
}

fn dealing_new_game(c: &mut criterion::Criterion) {
    c.bench_function("deal a seeded Game", |b| b.iter(|| Game::new(Some(42))));
}

fn enumerating_legal_moves(c: &mut criterion::Criterion) {
    let mut game = Game::new(Some(42));
    game.draw();
    c.bench_function("enumerate legal moves", |b| b.iter(|| game.legal_moves()));
}

fn building_observation(c: &mut criterion::Criterion) {
    let game = Game::new(Some(42));
    c.bench_function("build and flatten an Observation", |b| {
        b.iter(|| game.state().flatten())
    });
}

fn cloning_game(c: &mut criterion::Criterion) {
    let game = Game::new(Some(42));
    c.bench_function("clone a Game", |b| b.iter(|| game.clone()));
}

fn playing_random_episode(c: &mut criterion::Criterion) {
    c.bench_function("play 200 random env steps", |b| {
        b.iter(|| {
            let mut env = SolitaireEnv::new(GameConfig::new().with_seed(7));
            let mut rng = GameRng::new(7);
            for _ in 0..200 {
                let action = env.random_action(&mut rng);
                if env.step(action).map_or(true, |step| step.done) {
                    break;
                }
            }
            env.game().score()
        })
    });
}
