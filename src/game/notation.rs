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

//! Textual descriptions of actions and positions.

use super::ChessGame;
use crate::{ActionId, ActionKind, Board, ChessAction, Piece, PieceType};

impl<B: Board> ChessGame<B> {
    #[must_use]
    /// Get the algebraic notation of `action`, such as `"Nxe5+"`.
    /// The notation is empty if the acting piece does not exist.
    ///
    /// Pawn promotions are written as `"e8=Q"`, or as `"e8"` until the
    /// promotion type is chosen.
    /// En passant captures are written as `"exd6 e.p."`, and castles as
    /// `"O-O"` or `"O-O-O"`.
    pub fn action_notation(&self, action: &ChessAction) -> String {
        let primary = action.primary_move();
        let Some(piece) = self.find_piece_by_id(primary.piece_id()) else {
            return String::new();
        };
        let kind = self.kind_during(piece, action.id());
        let to = self.tile_notation(primary.to());
        let from_file = self.board().file_name(primary.from().x).unwrap_or("");
        let promotion = action
            .promotion_type()
            .map_or_else(String::new, |kind| format!("={}", kind.notation()));

        let body = match action.kind() {
            ActionKind::BasicMove(_) | ActionKind::DoubleStep(_) => {
                if action.is_promotion() {
                    format!("{to}{promotion}")
                } else {
                    format!("{}{to}", kind.notation())
                }
            }
            ActionKind::Capture { .. } => {
                if action.is_promotion() {
                    format!("{from_file}x{to}{promotion}")
                } else if kind == PieceType::Pawn {
                    format!("{from_file}x{to}")
                } else {
                    format!("{}x{to}", kind.notation())
                }
            }
            ActionKind::EnPassant { .. } => format!("{from_file}x{to} e.p."),
            ActionKind::CastlingShort { .. } => "O-O".to_string(),
            ActionKind::CastlingLong { .. } => "O-O-O".to_string(),
        };
        let suffix = match (action.is_check(), action.is_checkmate()) {
            (true, true) => "#",
            (true, false) => "+",
            (false, _) => "",
        };

        format!("{body}{suffix}")
    }

    #[must_use]
    /// Get a string describing where every piece on the board stands.
    ///
    /// Each piece contributes its notation symbol followed by its tile, and
    /// pieces are listed rank by rank, then file by file.
    /// This is used to detect repeated positions.
    /// It does not describe piece colors, castling rights, en passant
    /// availability, or whose turn it is.
    pub fn snapshot(&self) -> String {
        let mut pieces: Vec<&Piece> = self.pieces_on_board().collect();
        pieces.sort_by_key(|p| (p.position().y, p.position().x));

        pieces
            .iter()
            .map(|p| format!("{}{}", p.notation(), self.tile_notation(p.position())))
            .collect()
    }

    /// Get the type `piece` had when the action with id `id` was played.
    /// This differs from its current type only if it was promoted during or
    /// after that action, and the game still reflects the promotion.
    fn kind_during(&self, piece: &Piece, id: ActionId) -> PieceType {
        let promoted_since = (id..self.next_action_id())
            .filter_map(|ply_id| self.ply(ply_id))
            .any(|(_, ply)| ply.promotions.iter().any(|&(promoted, _)| promoted == piece.id()));
        if promoted_since {
            PieceType::Pawn
        } else {
            piece.kind()
        }
    }
}
