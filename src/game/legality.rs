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

//! Filtering of the actions pieces generate down to the legal ones.

use super::ChessGame;
use crate::{
    Board, ChessAction, Color, GameEvent, GameResult, GameStatus, Piece, PieceType, Position,
};

impl<B: Board> ChessGame<B> {
    #[must_use]
    /// Get the legal actions of the piece on `position`.
    /// The result is empty if the game is over, the tile is empty, or the
    /// piece on it does not belong to the side to move.
    ///
    /// An en passant capture which removes both pawns from the king's rank,
    /// exposing the king to a rook or queen on that rank, is not filtered
    /// out.
    pub fn possible_actions(&self, position: Position) -> Vec<ChessAction> {
        if self.status == GameStatus::GameOver {
            return Vec::new();
        }
        match self.find_piece_by_position(position) {
            Some(piece) if piece.color() == self.current_turn => self.legal_actions_of(piece),
            _ => Vec::new(),
        }
    }

    #[must_use]
    /// Get every legal action of the side to move.
    pub fn legal_actions(&self) -> Vec<ChessAction> {
        if self.status == GameStatus::GameOver {
            return Vec::new();
        }
        self.pieces(self.current_turn)
            .iter()
            .flat_map(|piece| self.legal_actions_of(piece))
            .collect()
    }

    #[must_use]
    /// Determine whether `piece` is pinned to its king.
    /// If it is, get the pinning piece along with the tiles `piece` may
    /// still move to: every tile from the pinning piece up to, but not
    /// including, the king.
    pub fn pinning_piece(&self, piece: &Piece) -> Option<(Piece, Vec<Position>)> {
        if !piece.is_on_board() || piece.kind() == PieceType::King {
            return None;
        }
        let king = self.king(piece.color())?;
        let dir = king.position().direction_to(piece.position())?;

        let mut tile = king.position() + dir;
        while tile != piece.position() {
            if self.is_tile_occupied(tile) {
                return None;
            }
            tile += dir;
        }

        let beyond = *self.ray_tiles(piece.position(), dir).last()?;
        let attacker = self.find_piece_by_position(beyond)?;
        if attacker.color() == piece.color() {
            return None;
        }
        let slides_along = match attacker.kind() {
            PieceType::Queen => true,
            PieceType::Rook => dir.is_orthogonal(),
            PieceType::Bishop => dir.is_diagonal(),
            _ => false,
        };
        if !slides_along {
            return None;
        }

        let mut path = attacker.path_to(king.position());
        path.retain(|&t| t != king.position());
        Some((*attacker, path))
    }

    /// Get the legal actions of `piece`, regardless of whose turn it is.
    pub(crate) fn legal_actions_of(&self, piece: &Piece) -> Vec<ChessAction> {
        let mut actions = piece.possible_actions(self);
        if actions.is_empty() {
            return actions;
        }

        if let Some((_, pin_path)) = self.pinning_piece(piece) {
            actions.retain(|a| pin_path.contains(&a.primary_move().to()));
        }

        let king = match self.king(piece.color()) {
            Some(king) => *king,
            None => return actions,
        };
        let attackers = self.find_pieces_who_can_attack(king.position(), !piece.color());
        if attackers.is_empty() {
            return actions;
        }

        if piece.kind() == PieceType::King {
            // tiles behind the king on a checking line are still attacked
            actions.retain(|a| {
                let to = a.primary_move().to();
                !attackers
                    .iter()
                    .any(|attacker| on_extended_ray(attacker, king.position(), to))
            });
        } else {
            // every attacker must be captured or have its path to the king
            // blocked
            actions.retain(|a| {
                let to = a.primary_move().to();
                attackers.iter().all(|attacker| {
                    a.kind().victim_id() == Some(attacker.id())
                        || (to != king.position()
                            && attacker.path_to(king.position()).contains(&to))
                })
            });
        }

        actions
    }

    /// Determine whether the side to move has any legal action.
    fn has_legal_action(&self) -> bool {
        self.pieces(self.current_turn)
            .iter()
            .any(|piece| !self.legal_actions_of(piece).is_empty())
    }

    /// Mark the last action with whether it checked or checkmated the
    /// opponent of `mover`, and work out whether the game ended.
    /// The opponent of `mover` must be the side to move.
    pub(super) fn evaluate_position(&mut self, mover: Color) -> Option<GameResult> {
        let king = *self.king(!mover)?;
        let attackers: Vec<Piece> = self
            .find_pieces_who_can_attack(king.position(), mover)
            .into_iter()
            .copied()
            .collect();
        let has_moves = self.has_legal_action();
        let is_check = !attackers.is_empty();

        let pointer = self.action_pointer;
        if let Some((_, ply)) = pointer.and_then(|id| self.ply_mut(id)) {
            ply.action.set_check(is_check);
            ply.action.set_checkmate(is_check && !has_moves);
        }
        if is_check {
            self.emit(GameEvent::KingChecked { king, attackers });
        }

        match (is_check, has_moves) {
            (_, true) => None,
            (false, false) => Some(GameResult::DrawByStalemate),
            (true, false) => Some(GameResult::checkmate_by(mover)),
        }
    }
}

/// Determine whether `to` lies directly behind `king` on the line along which
/// `attacker` slides into it.
fn on_extended_ray(attacker: &Piece, king: Position, to: Position) -> bool {
    match attacker.position().direction_to(king) {
        Some(dir) => to == king + dir && !attacker.path_to(to).is_empty(),
        None => false,
    }
}
