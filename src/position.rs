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

//! Coordinates of tiles on a board.

use super::Direction;

use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A coordinate on a board.
/// `x` counts files from White's left and `y` counts ranks from White's side,
/// both starting at zero.
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    /// The position of a piece which is not on the board, such as one which
    /// has been captured.
    pub const NONE: Position = Position::new(-1, -1);

    #[must_use]
    pub const fn new(x: i8, y: i8) -> Position {
        Position { x, y }
    }

    #[must_use]
    /// Get the position `dx` files and `dy` ranks away from this one.
    /// Coordinates wrap around at the limits of `i8`, which is off any board.
    pub const fn translate(self, dx: i8, dy: i8) -> Position {
        Position::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    #[must_use]
    pub const fn translate_x(self, dx: i8) -> Position {
        self.translate(dx, 0)
    }

    #[must_use]
    pub const fn translate_y(self, dy: i8) -> Position {
        self.translate(0, dy)
    }

    #[must_use]
    /// Determine whether this is the off-board sentinel `Position::NONE`.
    pub const fn is_none(self) -> bool {
        self.x == Position::NONE.x && self.y == Position::NONE.y
    }

    #[must_use]
    /// Determine whether `other` is exactly one `direction` step away from
    /// this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use castellan::{Direction, Position};
    ///
    /// let b2 = Position::new(1, 1);
    /// assert!(b2.is_adjacent_to(Position::new(0, 1), Direction::WEST));
    /// assert!(b2.is_adjacent_to(Position::new(2, 2), Direction::NORTHEAST));
    /// assert!(!b2.is_adjacent_to(Position::new(2, 2), Direction::NORTH));
    /// ```
    pub fn is_adjacent_to(self, other: Position, direction: Direction) -> bool {
        self + direction == other
    }

    #[must_use]
    /// Get the single step leading from this position toward `other`, if the
    /// two share a rank, file, or diagonal.
    pub const fn direction_to(self, other: Position) -> Option<Direction> {
        let (Some(dx), Some(dy)) = (other.x.checked_sub(self.x), other.y.checked_sub(self.y))
        else {
            return None;
        };
        Direction::toward(dx, dy)
    }

    #[must_use]
    /// Get the offset `(dx, dy)` from this position to `other`.
    pub fn offset_to(self, other: Position) -> (i16, i16) {
        (
            i16::from(other.x) - i16::from(self.x),
            i16::from(other.y) - i16::from(self.y),
        )
    }

    #[must_use]
    /// Get the number of king steps needed to get from this position to
    /// `other`.
    pub fn king_distance(self, other: Position) -> u16 {
        let (dx, dy) = self.offset_to(other);
        dx.unsigned_abs().max(dy.unsigned_abs())
    }
}

impl Add<Direction> for Position {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        self.translate(rhs.dx(), rhs.dy())
    }
}

impl AddAssign<Direction> for Position {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
