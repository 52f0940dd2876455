// SPDX-License-Identifier: MIT OR Apache-2.0

//! The game engine: owns all mutable state, driven entirely by its caller

use crate::{board::Board, rules, Color, Coord, GameError, GameStatus, MoveOutcome};
use serde::{Deserialize, Serialize};

/// Rule engine for a single Gomoku game.
///
/// All state lives on the instance; construction and [`reset`] are the
/// only ways to reach the initial position. The engine never initiates
/// anything: the presentation layer calls [`attempt_move`], reads
/// [`snapshot`] to redraw, and calls [`reset`] on an explicit restart.
///
/// [`attempt_move`]: GameEngine::attempt_move
/// [`snapshot`]: GameEngine::snapshot
/// [`reset`]: GameEngine::reset
#[derive(Debug, Clone)]
pub struct GameEngine {
    /// Current stone placement
    board: Board,
    /// The color to move next
    turn: Color,
    /// Current game status
    status: GameStatus,
}

/// Full copy of engine state, sufficient to render the board and to
/// survive a host suspend/resume round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Intersections occupied by black stones, sorted
    pub black: Vec<Coord>,
    /// Intersections occupied by white stones, sorted
    pub white: Vec<Coord>,
    /// Game status at the time of the snapshot
    pub status: GameStatus,
    /// The color to move next
    pub turn: Color,
}

impl GameEngine {
    /// Create an engine at the initial position: empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
            status: GameStatus::InProgress,
        }
    }

    /// Attempt to place a stone for the color whose turn it is.
    ///
    /// Rejections leave the engine untouched: `GameOver` once the status
    /// is terminal, `OccupiedPosition` when either color holds the cell,
    /// `InvalidCoordinate` for off-board input (a caller bug, but checked
    /// rather than assumed away).
    ///
    /// On acceptance the stone is placed, the status is re-evaluated and
    /// the turn flips unless the move ended the game.
    pub fn attempt_move(&mut self, coord: Coord) -> Result<MoveOutcome, GameError> {
        if !coord.is_valid() {
            return Err(GameError::InvalidCoordinate);
        }
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.board.get(coord).is_some() {
            return Err(GameError::OccupiedPosition);
        }

        let color = self.turn;
        self.board.place(coord, color);
        self.status = rules::evaluate(&self.board, coord, color);

        if self.status == GameStatus::InProgress {
            self.turn = color.opposite();
        }
        tracing::debug!(?coord, ?color, status = ?self.status, "move applied");

        Ok(MoveOutcome {
            color,
            status: self.status,
        })
    }

    /// Start a fresh game: empty board, Black to move, in progress.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Color::Black;
        self.status = GameStatus::InProgress;
        tracing::debug!("game reset");
    }

    /// Force a terminal status back to `InProgress`, leaving board and
    /// turn alone.
    ///
    /// Exists for hosts that unfreeze a finished game when returning to
    /// the foreground; when that policy is unwanted, simply never call it.
    pub fn resume(&mut self) {
        self.status = GameStatus::InProgress;
    }

    /// Read-only copy of the full engine state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut black: Vec<Coord> = self.board.points(Color::Black).iter().copied().collect();
        let mut white: Vec<Coord> = self.board.points(Color::White).iter().copied().collect();
        black.sort_unstable();
        white.sort_unstable();
        GameSnapshot {
            black,
            white,
            status: self.status,
            turn: self.turn,
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// The snapshot is not trusted: out-of-board coordinates, duplicates
    /// and intersections claimed by both colors are rejected as
    /// `CorruptSnapshot`.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, GameError> {
        let mut board = Board::new();
        let stones = snapshot
            .black
            .iter()
            .map(|&c| (c, Color::Black))
            .chain(snapshot.white.iter().map(|&c| (c, Color::White)));
        for (coord, color) in stones {
            if !board.place(coord, color) {
                return Err(GameError::CorruptSnapshot(format!(
                    "unplaceable stone at ({}, {})",
                    coord.x, coord.y
                )));
            }
        }
        Ok(Self {
            board,
            turn: snapshot.turn,
            status: snapshot.status,
        })
    }

    /// Current game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The color to move next (unchanged once the game is terminal)
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
