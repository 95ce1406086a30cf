use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use ttt_common::games::tictactoe::{best_move, Grid, Mark, Move, Side, TicTacToeGameState};

fn bench_best_move_empty_grid() {
    let grid = Grid::new();
    black_box(best_move(black_box(&grid)).ok());
}

fn bench_best_move_mid_game() {
    let mut grid = Grid::new();
    let moves = [
        (1, 1, Mark::Human),
        (0, 0, Mark::Computer),
        (2, 2, Mark::Human),
    ];
    for (row, col, mark) in moves {
        grid.set(Move::new(row, col), mark);
    }
    black_box(best_move(black_box(&grid)).ok());
}

fn bench_self_play_game() {
    // The human side mirrors the engine by always taking the first free cell.
    let mut state = TicTacToeGameState::new(Side::Computer);
    while !state.outcome().is_over() {
        match state.current_side() {
            Side::Computer => {
                if state.play_computer_move().is_err() {
                    break;
                }
            }
            Side::Human => {
                let Some((free, _)) = state.grid().cells().find(|&(_, mark)| mark == Mark::Empty)
                else {
                    break;
                };
                if state.place_mark(Side::Human, free).is_err() {
                    break;
                }
            }
        }
    }
    black_box(state.outcome());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("best_move_empty", |b| {
        b.iter(bench_best_move_empty_grid)
    });

    group.bench_function("best_move_mid_game", |b| {
        b.iter(bench_best_move_mid_game)
    });

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
