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

//! Queens slide along ranks, files, and diagonals.

use super::{line_path, ray_actions, ray_attacks, ALL_DIRECTIONS};
use crate::{Board, ChessAction, ChessGame, Piece, Position};

pub(crate) fn can_attack_tile<B: Board>(
    piece: &Piece,
    game: &ChessGame<B>,
    target: Position,
) -> bool {
    ray_attacks(game, piece.position(), target, &ALL_DIRECTIONS)
}

pub(crate) fn possible_actions<B: Board>(piece: &Piece, game: &ChessGame<B>) -> Vec<ChessAction> {
    ray_actions(piece, game, &ALL_DIRECTIONS)
}

pub(crate) fn path(from: Position, to: Position) -> Vec<Position> {
    line_path(from, to, &ALL_DIRECTIONS)
}
