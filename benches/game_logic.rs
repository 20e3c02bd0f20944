use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pairs::core::{Board, GameSession};
use tui_pairs::engine::App;
use tui_pairs::term::{GameView, Viewport};

fn bench_deal(c: &mut Criterion) {
    let mut seed = 0u32;
    c.bench_function("deal_board", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            Board::new(black_box(seed))
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_perfect_game", |b| {
        b.iter(|| {
            let mut session = GameSession::with_seed("bench", black_box(12345));
            for index in 0..16 {
                if session.board().get(index).is_some_and(|c| c.is_active) {
                    continue;
                }
                let partner = session.board().partner_of(index).unwrap_or(index);
                let _ = session.current_turn().select_first(index);
                let _ = session.current_turn().select_second(partner);
            }
            session.is_won()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut app = App::default();
    app.start_game("bench");
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    c.bench_function("render_table", |b| {
        b.iter(|| view.render(black_box(&app.view()), "", vp))
    });
}

criterion_group!(benches, bench_deal, bench_full_game, bench_render);
criterion_main!(benches);
