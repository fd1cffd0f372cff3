//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known totals.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! [`Grid`] has no notion of turns, so passes are simulated here: a player
//! with no legal move passes, and two passes in a row end the game.

use crate::{Color, Grid, STANDARD_EDGE_LENGTH};

/// Count leaves `depth` plies below the standard 8x8 start, dark to move.
pub fn run_perft(depth: u64) -> u64 {
    let grid = Grid::with_initial_layout(STANDARD_EDGE_LENGTH, STANDARD_EDGE_LENGTH)
        .expect("the standard board has valid dimensions");
    perft(&grid, Color::Dark, depth)
}

/// Count leaves `depth` plies below `grid`, with `mover` to play.
pub fn perft(grid: &Grid, mover: Color, depth: u64) -> u64 {
    leaves_below(grid, mover, depth, false)
}

fn leaves_below(grid: &Grid, mover: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = grid.legal_moves(mover);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(grid, !mover, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|loc| {
            let mut next = grid.clone();
            next.play(loc, mover)
                .expect("moves from legal_moves are playable");
            leaves_below(&next, !mover, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_small_board() {
    // On a 4x4 board every first move is symmetric.
    let grid = Grid::with_initial_layout(4, 4).unwrap();
    assert_eq!(perft(&grid, Color::Dark, 1), 4);
    assert_eq!(perft(&grid, Color::Light, 1), 4);
}
