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

//! Knights jump in an L shape over any pieces in the way.

use crate::{Board, ChessAction, ChessGame, Move, Piece, Position};

pub(crate) fn can_attack_tile<B: Board>(
    piece: &Piece,
    game: &ChessGame<B>,
    target: Position,
) -> bool {
    game.l_shape_tiles(piece.position()).contains(&target)
}

pub(crate) fn possible_actions<B: Board>(piece: &Piece, game: &ChessGame<B>) -> Vec<ChessAction> {
    let id = game.next_action_id();
    let from = piece.position();

    game.l_shape_tiles(from)
        .into_iter()
        .filter_map(|to| match game.find_piece_by_position(to) {
            None => Some(ChessAction::basic_move(
                id,
                Move::new(piece.id(), from, to),
                false,
            )),
            Some(other) if other.color() != piece.color() => Some(ChessAction::capture(
                id,
                Move::removal(other.id(), to),
                Move::new(piece.id(), from, to),
                false,
            )),
            Some(_) => None,
        })
        .collect()
}

pub(crate) fn path(from: Position, to: Position) -> Vec<Position> {
    let (dx, dy) = from.offset_to(to);
    let (dx, dy) = (dx.unsigned_abs(), dy.unsigned_abs());
    if (dx, dy) == (1, 2) || (dx, dy) == (2, 1) {
        vec![from, to]
    } else {
        Vec::new()
    }
}
