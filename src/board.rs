// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{Color, Coord};
use std::collections::HashSet;

/// The board, kept as one occupied set per color.
///
/// The two sets are disjoint: an intersection holds at most one stone.
/// Lookups for a single color go through [`Board::points`] so the rule
/// checks never branch on color themselves.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Intersections occupied by black stones
    black: HashSet<Coord>,
    /// Intersections occupied by white stones
    white: HashSet<Coord>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stone at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if self.black.contains(&coord) {
            Some(Color::Black)
        } else if self.white.contains(&coord) {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Place a stone at the specified coordinate.
    ///
    /// Returns `false` without mutating when the coordinate is off the
    /// board or already occupied by either color.
    pub fn place(&mut self, coord: Coord, color: Color) -> bool {
        if !coord.is_valid() || self.get(coord).is_some() {
            return false;
        }
        self.points_mut(color).insert(coord)
    }

    /// The occupied set for one color
    pub fn points(&self, color: Color) -> &HashSet<Coord> {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    fn points_mut(&mut self, color: Color) -> &mut HashSet<Coord> {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Whether the given color holds the given intersection
    pub fn contains(&self, coord: Coord, color: Color) -> bool {
        self.points(color).contains(&coord)
    }

    /// Total number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.black.len() + self.white.len()
    }

    /// Whether every intersection holds a stone
    pub fn is_full(&self) -> bool {
        self.stone_count() == (crate::BOARD_SIZE as usize) * (crate::BOARD_SIZE as usize)
    }

    /// Remove all stones
    pub fn clear(&mut self) {
        self.black.clear();
        self.white.clear();
    }
}
