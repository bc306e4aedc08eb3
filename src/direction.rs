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

//! Directions, which are the steps between positions on a board.

use std::ops::{Mul, Neg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A difference between two positions, measured in files (`dx`) and ranks
/// (`dy`).
/// White pawns travel north, which is toward increasing `dy`.
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    /* Basic directions */

    /// A `Direction` corresponding to a move "north" from White's point of
    /// view, in the direction a white pawn would travel.
    pub const NORTH: Direction = Direction::new(0, 1);

    /// A `Direction` corresponding to a move "east" from White's point of view.
    pub const EAST: Direction = Direction::new(1, 0);

    /// A `Direction` corresponding to a move "south" from White's point of
    /// view.
    pub const SOUTH: Direction = Direction::new(0, -1);

    /// A `Direction` corresponding to a move "west" from White's point of view.
    pub const WEST: Direction = Direction::new(-1, 0);

    /* Composite directions */

    /// A `Direction` corresponding to a move "northwest" from White's point of
    /// view.
    pub const NORTHWEST: Direction = Direction::new(-1, 1);
    /// A `Direction` corresponding to a move "northeast" from White's point of
    /// view.
    pub const NORTHEAST: Direction = Direction::new(1, 1);
    /// A `Direction` corresponding to a move "southeast" from White's point of
    /// view.
    pub const SOUTHEAST: Direction = Direction::new(1, -1);
    /// A `Direction` corresponding to a move "southwest" from White's point of
    /// view.
    pub const SOUTHWEST: Direction = Direction::new(-1, -1);

    /* Knight directions */

    /// A `Direction` corresponding to a move "north-by-northwest" from White's
    /// point of view.
    pub const NNW: Direction = Direction::new(-1, 2);

    /// A `Direction` corresponding to a move "north-by-northeast" from White's
    /// point of view.
    pub const NNE: Direction = Direction::new(1, 2);

    /// A `Direction` corresponding to a move "east-by-northeast" from White's
    /// point of view.
    pub const ENE: Direction = Direction::new(2, 1);

    /// A `Direction` corresponding to a move "east-by-southeast" from White's
    /// point of view.
    pub const ESE: Direction = Direction::new(2, -1);

    /// A `Direction` corresponding to a move "south-by-southeast" from White's
    /// point of view.
    pub const SSE: Direction = Direction::new(1, -2);

    /// A `Direction` corresponding to a move "south-by-southwest" from White's
    /// point of view.
    pub const SSW: Direction = Direction::new(-1, -2);

    /// A `Direction` corresponding to a move "west-by-southwest" from White's
    /// point of view.
    pub const WSW: Direction = Direction::new(-2, -1);

    /// A `Direction` corresponding to a move "west-by-northwest" from White's
    /// point of view.
    pub const WNW: Direction = Direction::new(-2, 1);

    /// The directions that a rook can move, along only one step.
    pub const ROOK_DIRECTIONS: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// The directions that a bishop can move, along only one step.
    pub const BISHOP_DIRECTIONS: [Direction; 4] = [
        Direction::NORTHWEST,
        Direction::NORTHEAST,
        Direction::SOUTHWEST,
        Direction::SOUTHEAST,
    ];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Direction; 8] = [
        Direction::NNW,
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
    ];

    /// The steps that a king can make.
    pub const KING_STEPS: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTHEAST,
        Direction::EAST,
        Direction::SOUTHEAST,
        Direction::SOUTH,
        Direction::SOUTHWEST,
        Direction::WEST,
        Direction::NORTHWEST,
    ];

    #[must_use]
    /// Create a new `Direction` based on how far it moves in file and rank.
    pub const fn new(dx: i8, dy: i8) -> Direction {
        Direction { dx, dy }
    }

    #[must_use]
    /// Get the single step which travels along the line from the origin to
    /// the offset `(dx, dy)`.
    /// Returns `None` if the offset is zero or does not lie on a rank, file,
    /// or diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// use castellan::Direction;
    ///
    /// assert_eq!(Direction::toward(0, 5), Some(Direction::NORTH));
    /// assert_eq!(Direction::toward(-3, -3), Some(Direction::SOUTHWEST));
    /// assert_eq!(Direction::toward(1, 2), None);
    /// ```
    pub const fn toward(dx: i8, dy: i8) -> Option<Direction> {
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx == 0 || dy == 0 || dx.unsigned_abs() == dy.unsigned_abs() {
            return Some(Direction::new(dx.signum(), dy.signum()));
        }
        None
    }

    #[must_use]
    /// Get the difference moved by this direction in a file.
    pub const fn dx(self) -> i8 {
        self.dx
    }

    #[must_use]
    /// Get the difference moved by this direction in a rank.
    pub const fn dy(self) -> i8 {
        self.dy
    }

    #[must_use]
    /// Determine whether this is a single step along a rank or file.
    pub const fn is_orthogonal(self) -> bool {
        (self.dx == 0 && self.dy.abs() == 1) || (self.dy == 0 && self.dx.abs() == 1)
    }

    #[must_use]
    /// Determine whether this is a single step along a diagonal.
    pub const fn is_diagonal(self) -> bool {
        self.dx.abs() == 1 && self.dy.abs() == 1
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Direction::new(-self.dx, -self.dy)
    }
}

impl Mul<i8> for Direction {
    type Output = Self;

    fn mul(self, rhs: i8) -> Self::Output {
        Direction::new(self.dx * rhs, self.dy * rhs)
    }
}
