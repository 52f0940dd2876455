// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gomoku Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Board representation for the fixed 15x15 grid
//! - Move legality, turn alternation and win/draw detection
//! - Snapshot/restore of full game state
//! - CBOR serialization helpers for snapshots
//!
//! Rendering, input translation and host lifecycle are the caller's
//! concern; the engine only reports outcomes.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod cbor;
pub mod engine;
pub mod rules;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of playable lines per axis (coordinates range over `0..BOARD_SIZE`)
pub const BOARD_SIZE: u8 = 15;

/// Run length that wins the game
pub const WIN_LENGTH: usize = 5;

/// Player color (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (always moves first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board coordinate representing an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on the board
    pub fn is_valid(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Step `distance` intersections along `(dx, dy)`, or `None` if that
    /// leaves the board
    pub fn offset(&self, dx: i8, dy: i8, distance: u8) -> Option<Coord> {
        let x = self.x as i16 + dx as i16 * distance as i16;
        let y = self.y as i16 + dy as i16 * distance as i16;
        if (0..BOARD_SIZE as i16).contains(&x) && (0..BOARD_SIZE as i16).contains(&y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

/// Outcome of the game as seen after any accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game is still being played
    InProgress,
    /// The given color completed five-in-a-row
    Won(Color),
    /// The board filled with no five-in-a-row
    Draw,
}

impl GameStatus {
    /// Terminal states accept no further moves until reset
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The color that made the move
    pub color: Color,
    /// Game status after the move was applied
    pub status: GameStatus,
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Invalid coordinate")]
    InvalidCoordinate,

    /// The intersection is already occupied
    #[error("Position already occupied")]
    OccupiedPosition,

    /// The game has ended; reset before playing again
    #[error("Game is over")]
    GameOver,

    /// A restored snapshot violated a board invariant
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

// Re-export the engine types for convenience
pub use engine::{GameEngine, GameSnapshot};
