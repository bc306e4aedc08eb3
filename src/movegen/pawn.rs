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

//! Pawns advance one tile (or two from their starting position), capture
//! diagonally forward, and may capture en passant.

use crate::{
    ActionId, ActionKind, Board, ChessAction, ChessGame, Color, Direction, Move, Piece, Position,
};

/// Determine whether a pawn attacks `target`.
/// Pawns only attack the two tiles diagonally in front of them, whether or
/// not anything is there.
pub(crate) fn can_attack_tile(pawn: &Piece, target: Position) -> bool {
    let front = pawn.position() + pawn.color().pawn_direction();
    let (dx, dy) = front.offset_to(target);
    dy == 0 && dx.abs() == 1
}

pub(crate) fn possible_actions<B: Board>(pawn: &Piece, game: &ChessGame<B>) -> Vec<ChessAction> {
    let id = game.next_action_id();
    let from = pawn.position();
    let dir = pawn.color().pawn_direction();
    let promotion_rank = pawn.color().promotion_rank(game.height());
    let mut actions = Vec::new();

    let front = from + dir;
    if game.contains_tile(front) && !game.is_tile_occupied(front) {
        actions.push(ChessAction::basic_move(
            id,
            Move::new(pawn.id(), from, front),
            front.y == promotion_rank,
        ));

        let double = front + dir;
        if !pawn.has_moved() && game.contains_tile(double) && !game.is_tile_occupied(double) {
            actions.push(ChessAction::double_step(id, Move::new(pawn.id(), from, double)));
        }
    }

    for side in [Direction::WEST, Direction::EAST] {
        let target = front + side;
        if let Some(victim) = game.find_piece_by_position(target) {
            if victim.color() != pawn.color() {
                actions.push(ChessAction::capture(
                    id,
                    Move::removal(victim.id(), target),
                    Move::new(pawn.id(), from, target),
                    target.y == promotion_rank,
                ));
            }
        }
    }

    if let Some(action) = en_passant(pawn, game, id) {
        actions.push(action);
    }

    actions
}

/// Get the en passant capture available to `pawn`, if the last action played
/// was an enemy double step which landed right beside it.
fn en_passant<B: Board>(pawn: &Piece, game: &ChessGame<B>, id: ActionId) -> Option<ChessAction> {
    let step = match game.last_action()?.kind() {
        ActionKind::DoubleStep(step) => *step,
        _ => return None,
    };
    let victim = game.find_piece_by_id(step.piece_id())?;
    let from = pawn.position();
    if victim.color() == pawn.color()
        || victim.position() != step.to()
        || victim.position().y != from.y
        || from.offset_to(victim.position()).0.abs() != 1
    {
        return None;
    }

    let target = victim.position() + pawn.color().pawn_direction();
    if game.is_tile_occupied(target) {
        return None;
    }

    Some(ChessAction::en_passant(
        id,
        Move::removal(victim.id(), victim.position()),
        Move::new(pawn.id(), from, target),
    ))
}

/// Get the tiles a pawn of `color` passes over from `from` to `to`: one or
/// two tiles straight ahead, or one tile diagonally ahead.
pub(crate) fn path(color: Color, from: Position, to: Position) -> Vec<Position> {
    let dir = color.pawn_direction();
    let front = from + dir;

    if to == front {
        vec![from, front]
    } else if to == front + dir {
        vec![from, front, to]
    } else if to == front + Direction::WEST || to == front + Direction::EAST {
        vec![from, to]
    } else {
        Vec::new()
    }
}
