// SPDX-License-Identifier: MIT OR Apache-2.0

//! Win and draw evaluation
//!
//! Every check is centered on the stone just placed, so each accepted
//! move costs at most four bounded directional probes.

use crate::{board::Board, Color, Coord, GameStatus, WIN_LENGTH};

/// The four axes a run can lie on: horizontal, vertical and both diagonals
const AXES: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Evaluate the position after `placed` went down for `color`.
///
/// A move that both fills the board and completes five-in-a-row counts
/// as a win, so the directional probes run before the draw check.
pub fn evaluate(board: &Board, placed: Coord, color: Color) -> GameStatus {
    if is_winning_move(board, placed, color) {
        tracing::debug!(?placed, ?color, "five-in-a-row completed");
        return GameStatus::Won(color);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

/// Whether the stone at `placed` completes a run of five or more
pub fn is_winning_move(board: &Board, placed: Coord, color: Color) -> bool {
    AXES.iter()
        .any(|&(dx, dy)| run_length(board, placed, color, dx, dy) >= WIN_LENGTH)
}

/// Length of the contiguous run through `placed` along `(dx, dy)`:
/// the placed stone plus up to four neighbors in each direction.
fn run_length(board: &Board, placed: Coord, color: Color, dx: i8, dy: i8) -> usize {
    1 + probe(board, placed, color, dx, dy) + probe(board, placed, color, -dx, -dy)
}

/// Count consecutive same-color stones out from `placed`, stopping at the
/// first empty, opposing or off-board intersection
fn probe(board: &Board, placed: Coord, color: Color, dx: i8, dy: i8) -> usize {
    let points = board.points(color);
    (1..WIN_LENGTH as u8)
        .map_while(|step| placed.offset(dx, dy, step))
        .take_while(|c| points.contains(c))
        .count()
}
