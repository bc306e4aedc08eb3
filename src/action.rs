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

//! Actions, which are single plies made of one or two moves.

use super::{Move, PieceId, PieceType};

use std::{
    fmt::{Display, Formatter},
    iter::{once, Chain, Once},
    option::IntoIter,
};

/// The identifier of an action.
/// The `n`th ply of a game (counting from zero) has id `n`.
pub type ActionId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The moves which make up an action, tagged by what kind of action it is.
pub enum ActionKind {
    /// A piece moves to an empty tile.
    BasicMove(Move),
    /// A piece moves onto an enemy piece, removing it from the board.
    Capture { victim: Move, attacker: Move },
    /// A pawn advances two tiles from its starting position.
    DoubleStep(Move),
    /// A pawn captures an enemy pawn which just made a double step past it.
    EnPassant { victim: Move, attacker: Move },
    /// The king and the rook on its east side castle.
    CastlingShort { rook: Move, king: Move },
    /// The king and the rook on its west side castle.
    CastlingLong { rook: Move, king: Move },
}

impl ActionKind {
    #[must_use]
    /// Get the move of the piece performing this action: the attacker for
    /// captures, the king for castling, and the only move otherwise.
    pub const fn primary_move(&self) -> Move {
        match *self {
            ActionKind::BasicMove(m) | ActionKind::DoubleStep(m) => m,
            ActionKind::Capture { attacker, .. } | ActionKind::EnPassant { attacker, .. } => {
                attacker
            }
            ActionKind::CastlingShort { king, .. } | ActionKind::CastlingLong { king, .. } => king,
        }
    }

    #[must_use]
    /// Get the move which accompanies the primary move, if there is one: the
    /// victim's removal for captures, or the rook's move for castling.
    pub const fn secondary_move(&self) -> Option<Move> {
        match *self {
            ActionKind::BasicMove(_) | ActionKind::DoubleStep(_) => None,
            ActionKind::Capture { victim, .. } | ActionKind::EnPassant { victim, .. } => {
                Some(victim)
            }
            ActionKind::CastlingShort { rook, .. } | ActionKind::CastlingLong { rook, .. } => {
                Some(rook)
            }
        }
    }

    #[must_use]
    /// Get the removal of the captured piece, if this action captures.
    pub const fn victim(&self) -> Option<Move> {
        match *self {
            ActionKind::Capture { victim, .. } | ActionKind::EnPassant { victim, .. } => {
                Some(victim)
            }
            _ => None,
        }
    }

    #[must_use]
    /// Get the id of the captured piece, if this action captures.
    pub const fn victim_id(&self) -> Option<PieceId> {
        match self.victim() {
            Some(m) => Some(m.piece_id()),
            None => None,
        }
    }

    #[must_use]
    /// Determine whether this action removes an enemy piece.
    pub const fn is_capture(&self) -> bool {
        matches!(
            self,
            ActionKind::Capture { .. } | ActionKind::EnPassant { .. }
        )
    }

    #[must_use]
    /// Determine whether this action is a castle to either side.
    pub const fn is_castling(&self) -> bool {
        matches!(
            self,
            ActionKind::CastlingShort { .. } | ActionKind::CastlingLong { .. }
        )
    }

    /// Get the moves of this action in the order they are applied.
    /// The accompanying move (if any) comes first, and the primary move last.
    /// To undo the action, apply the reversed moves in reverse order.
    pub fn moves(&self) -> Chain<IntoIter<Move>, Once<Move>> {
        self.secondary_move().into_iter().chain(once(self.primary_move()))
    }

    #[must_use]
    /// Get a short name for this kind of action.
    pub const fn name(&self) -> &'static str {
        match self {
            ActionKind::BasicMove(_) => "basic move",
            ActionKind::Capture { .. } => "capture",
            ActionKind::DoubleStep(_) => "double step",
            ActionKind::EnPassant { .. } => "en passant",
            ActionKind::CastlingShort { .. } => "short castle",
            ActionKind::CastlingLong { .. } => "long castle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A single ply: the moves it is made of, plus what became of the game after
/// it was played.
///
/// The check and checkmate markers and the chosen promotion type are filled
/// in by the game once the action has been played.
pub struct ChessAction {
    id: ActionId,
    kind: ActionKind,
    is_check: bool,
    is_checkmate: bool,
    /// Whether this action brings a pawn to its promotion rank.
    is_promotion: bool,
    /// The type the pawn was promoted to, once the promotion is resolved.
    promotion_type: Option<PieceType>,
}

impl ChessAction {
    #[must_use]
    /// Create an action of the given kind with no check markers.
    pub const fn new(id: ActionId, kind: ActionKind, is_promotion: bool) -> ChessAction {
        ChessAction {
            id,
            kind,
            is_check: false,
            is_checkmate: false,
            is_promotion,
            promotion_type: None,
        }
    }

    #[must_use]
    pub const fn basic_move(id: ActionId, m: Move, is_promotion: bool) -> ChessAction {
        ChessAction::new(id, ActionKind::BasicMove(m), is_promotion)
    }

    #[must_use]
    pub const fn capture(
        id: ActionId,
        victim: Move,
        attacker: Move,
        is_promotion: bool,
    ) -> ChessAction {
        ChessAction::new(id, ActionKind::Capture { victim, attacker }, is_promotion)
    }

    #[must_use]
    pub const fn double_step(id: ActionId, m: Move) -> ChessAction {
        ChessAction::new(id, ActionKind::DoubleStep(m), false)
    }

    #[must_use]
    pub const fn en_passant(id: ActionId, victim: Move, attacker: Move) -> ChessAction {
        ChessAction::new(id, ActionKind::EnPassant { victim, attacker }, false)
    }

    #[must_use]
    pub const fn castling_short(id: ActionId, rook: Move, king: Move) -> ChessAction {
        ChessAction::new(id, ActionKind::CastlingShort { rook, king }, false)
    }

    #[must_use]
    pub const fn castling_long(id: ActionId, rook: Move, king: Move) -> ChessAction {
        ChessAction::new(id, ActionKind::CastlingLong { rook, king }, false)
    }

    #[must_use]
    pub const fn id(&self) -> ActionId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> &ActionKind {
        &self.kind
    }

    #[must_use]
    /// Determine whether this action put the opponent in check.
    pub const fn is_check(&self) -> bool {
        self.is_check
    }

    #[must_use]
    /// Determine whether this action put the opponent in checkmate.
    pub const fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }

    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    #[must_use]
    /// Get the type the promoting pawn was turned into, if the promotion has
    /// been resolved.
    pub const fn promotion_type(&self) -> Option<PieceType> {
        self.promotion_type
    }

    #[must_use]
    /// See [`ActionKind::primary_move`].
    pub const fn primary_move(&self) -> Move {
        self.kind.primary_move()
    }

    /// See [`ActionKind::moves`].
    pub fn moves(&self) -> Chain<IntoIter<Move>, Once<Move>> {
        self.kind.moves()
    }

    #[must_use]
    /// Determine whether `other` describes the same moves as this action,
    /// regardless of id, markers, or promotion choice.
    pub fn same_moves(&self, other: &ChessAction) -> bool {
        self.kind == other.kind && self.is_promotion == other.is_promotion
    }

    pub(crate) fn set_id(&mut self, id: ActionId) {
        self.id = id;
    }

    pub(crate) fn set_check(&mut self, is_check: bool) {
        self.is_check = is_check;
    }

    pub(crate) fn set_checkmate(&mut self, is_checkmate: bool) {
        self.is_checkmate = is_checkmate;
    }

    pub(crate) fn set_promotion_type(&mut self, promotion_type: Option<PieceType>) {
        self.promotion_type = promotion_type;
    }
}

impl Display for ChessAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.kind.name(), self.id, self.primary_move())
    }
}
