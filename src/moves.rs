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

//! Relocations of single pieces.

use super::{PieceId, Position};

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The relocation of one piece from one tile to another.
///
/// A move whose destination is `Position::NONE` removes a captured piece from
/// the board.
pub struct Move {
    piece_id: PieceId,
    from: Position,
    to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(piece_id: PieceId, from: Position, to: Position) -> Move {
        Move { piece_id, from, to }
    }

    #[must_use]
    /// Create a move which takes the piece on `from` off the board.
    pub const fn removal(piece_id: PieceId, from: Position) -> Move {
        Move::new(piece_id, from, Position::NONE)
    }

    #[must_use]
    /// Get the id of the piece being moved.
    pub const fn piece_id(self) -> PieceId {
        self.piece_id
    }

    #[must_use]
    /// Get the tile the piece moves from.
    pub const fn from(self) -> Position {
        self.from
    }

    #[must_use]
    /// Get the tile the piece moves to.
    pub const fn to(self) -> Position {
        self.to
    }

    #[must_use]
    /// Determine whether this move takes its piece off the board.
    pub const fn is_removal(self) -> bool {
        self.to.is_none()
    }

    #[must_use]
    /// Get the move which undoes this one.
    pub const fn reversed(self) -> Move {
        Move::new(self.piece_id, self.to, self.from)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.piece_id, self.from, self.to)
    }
}
