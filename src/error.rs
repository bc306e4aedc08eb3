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

//! Reasons a game may refuse an operation.

use super::{ActionId, PieceId, PieceType, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
/// The reason an operation on a `ChessGame` was rejected.
/// A rejected operation never changes the game.
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("no piece has id {0}")]
    UnknownPiece(PieceId),
    #[error("piece {id} is not on {from}")]
    PieceNotAtOrigin { id: PieceId, from: Position },
    #[error("the action is not legal in the current position")]
    IllegalAction,
    #[error("a pawn cannot be promoted to {0}")]
    InvalidPromotionType(PieceType),
    #[error("piece {0} is not a pawn")]
    NotAPawn(PieceId),
    #[error("no action has id {0}")]
    ActionOutOfRange(ActionId),
    #[error("the game already reflects the requested action")]
    AlreadyAtAction,
}
