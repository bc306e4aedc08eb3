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

//! Generation of the actions available to each type of piece.
//!
//! The actions generated here are pseudo-legal: they obey the movement rules
//! of each piece, but may leave the mover's king in check.
//! `ChessGame::possible_actions` filters them down to the legal ones.

pub(crate) mod bishop;
pub(crate) mod king;
pub(crate) mod knight;
pub(crate) mod pawn;
pub(crate) mod queen;
pub(crate) mod rook;

use super::{Board, ChessAction, ChessGame, Direction, Move, Piece, Position};

/// Walk outward from `piece` along each of `directions`.
/// Every empty tile becomes a basic move; the walk stops at the first
/// occupied tile, which becomes a capture if it holds an enemy.
pub(crate) fn ray_actions<B: Board>(
    piece: &Piece,
    game: &ChessGame<B>,
    directions: &[Direction],
) -> Vec<ChessAction> {
    let id = game.next_action_id();
    let from = piece.position();
    let mut actions = Vec::new();

    for &dir in directions {
        for to in game.ray_tiles(from, dir) {
            match game.find_piece_by_position(to) {
                None => actions.push(ChessAction::basic_move(
                    id,
                    Move::new(piece.id(), from, to),
                    false,
                )),
                Some(other) => {
                    if other.color() != piece.color() {
                        actions.push(ChessAction::capture(
                            id,
                            Move::removal(other.id(), to),
                            Move::new(piece.id(), from, to),
                            false,
                        ));
                    }
                }
            }
        }
    }

    actions
}

/// Determine whether a piece sliding along `directions` from `from` reaches
/// `target` before being blocked.
pub(crate) fn ray_attacks<B: Board>(
    game: &ChessGame<B>,
    from: Position,
    target: Position,
    directions: &[Direction],
) -> bool {
    match from.direction_to(target) {
        Some(dir) if directions.contains(&dir) => game.ray_tiles(from, dir).contains(&target),
        _ => false,
    }
}

/// Get the straight line of tiles from `from` to `to`, inclusive, if the two
/// are connected along one of `directions`.
pub(crate) fn line_path(from: Position, to: Position, directions: &[Direction]) -> Vec<Position> {
    match from.direction_to(to) {
        Some(dir) if directions.contains(&dir) => {
            let mut path = vec![from];
            let mut tile = from;
            while tile != to {
                tile += dir;
                path.push(tile);
            }
            path
        }
        _ => Vec::new(),
    }
}

/// Every single-step direction, for pieces which move like a queen.
pub(crate) const ALL_DIRECTIONS: [Direction; 8] = Direction::KING_STEPS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that a line path is only traced along the allowed directions.
    fn line_paths() {
        let a1 = Position::new(0, 0);
        let h8 = Position::new(7, 7);
        assert_eq!(line_path(a1, h8, &Direction::BISHOP_DIRECTIONS).len(), 8);
        assert!(line_path(a1, h8, &Direction::ROOK_DIRECTIONS).is_empty());
        assert_eq!(
            line_path(h8, Position::new(7, 5), &ALL_DIRECTIONS),
            vec![h8, Position::new(7, 6), Position::new(7, 5)]
        );
        assert!(line_path(a1, a1, &ALL_DIRECTIONS).is_empty());
    }
}
