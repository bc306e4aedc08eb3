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

//! Kings step to any adjacent tile which is not attacked, and may castle.

use super::{line_path, ALL_DIRECTIONS};
use crate::{
    ActionId, Board, ChessAction, ChessGame, Direction, Move, Piece, PieceType, Position,
};

pub(crate) fn can_attack_tile(king: &Piece, target: Position) -> bool {
    king.position().king_distance(target) == 1
}

pub(crate) fn possible_actions<B: Board>(king: &Piece, game: &ChessGame<B>) -> Vec<ChessAction> {
    let id = game.next_action_id();
    let from = king.position();
    let enemy = !king.color();
    let mut actions = Vec::new();

    for to in game.surrounding_tiles(from) {
        let occupant = game.find_piece_by_position(to);
        if occupant.map_or(false, |p| p.color() == king.color())
            || game.is_tile_under_attack(to, enemy)
        {
            continue;
        }
        let m = Move::new(king.id(), from, to);
        actions.push(match occupant {
            Some(victim) => ChessAction::capture(id, Move::removal(victim.id(), to), m, false),
            None => ChessAction::basic_move(id, m, false),
        });
    }

    actions.extend(castle(king, game, id, Direction::EAST));
    actions.extend(castle(king, game, id, Direction::WEST));

    actions
}

/// Get the castle available to `king` toward the rook on the edge of the
/// board in `side`'s direction, if it is available.
fn castle<B: Board>(
    king: &Piece,
    game: &ChessGame<B>,
    id: ActionId,
    side: Direction,
) -> Option<ChessAction> {
    let home = king.color().home_rank(game.height());
    if king.has_moved() || king.position().y != home {
        return None;
    }

    let rook_x = if side == Direction::EAST {
        game.width() - 1
    } else {
        0
    };
    let rook = game.find_piece_by_position(Position::new(rook_x, home))?;
    if rook.kind() != PieceType::Rook || rook.color() != king.color() || rook.has_moved() {
        return None;
    }

    let enemy = !king.color();
    if game.is_tile_under_attack(king.position(), enemy) {
        return None;
    }

    let path = king.path_to(rook.position());
    let between = path.get(1..path.len().saturating_sub(1)).unwrap_or(&[]);
    if between.len() < 2 || between.iter().any(|&p| game.is_tile_occupied(p)) {
        return None;
    }

    let passed = king.position() + side;
    let landing = passed + side;
    if game.is_tile_under_attack(passed, enemy) || game.is_tile_under_attack(landing, enemy) {
        return None;
    }

    let rook_move = Move::new(rook.id(), rook.position(), passed);
    let king_move = Move::new(king.id(), king.position(), landing);
    Some(if side == Direction::EAST {
        ChessAction::castling_short(id, rook_move, king_move)
    } else {
        ChessAction::castling_long(id, rook_move, king_move)
    })
}

pub(crate) fn path(from: Position, to: Position) -> Vec<Position> {
    line_path(from, to, &ALL_DIRECTIONS)
}
