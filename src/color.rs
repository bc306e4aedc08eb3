/*
  Castellan, an in-process chess rules engine.
  Copyright (C) 2022 The Castellan Authors

  Castellan is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Castellan is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Representation of player colors.

use super::Direction;

use std::{
    fmt::{Display, Formatter},
    ops::Not,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// An enum representing the possible colors that a piece or player can be.
pub enum Color {
    /// The white player, a.k.a. the first player to move in a game.
    White = 0,
    /// The black player, a.k.a. the second player to move in a game.
    Black = 1,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[must_use]
    /// Get the direction that a pawn of the given color normally moves.
    pub const fn pawn_direction(self) -> Direction {
        match self {
            Color::White => Direction::NORTH,
            Color::Black => Direction::SOUTH,
        }
    }

    #[must_use]
    /// Get the rank on which pawns of this color promote, for a board of the
    /// given height.
    pub const fn promotion_rank(self, height: i8) -> i8 {
        match self {
            Color::White => height - 1,
            Color::Black => 0,
        }
    }

    #[must_use]
    /// Get the rank on which the pieces of this color start, for a board of
    /// the given height.
    pub const fn home_rank(self, height: i8) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => height - 1,
        }
    }

    #[must_use]
    /// Get the index of this color, for use in arrays indexed by color.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Color::White => "white",
                Color::Black => "black",
            }
        )
    }
}
