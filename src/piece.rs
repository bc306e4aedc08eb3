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

//! Pieces, their types, and dispatch into per-type move generation.

use super::{
    movegen::{bishop, king, knight, pawn, queen, rook},
    Board, ChessAction, ChessGame, Color, Position,
};

use std::fmt::{Display, Formatter};

/// The identifier of a piece.
/// Ids are unique for the whole lifetime of a game, including through
/// capture and promotion.
pub type PieceId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The type of a piece, which determines how it moves.
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Total number of piece types.
    pub const NUM_TYPES: usize = 6;

    /// Array containing all piece types.
    pub const ALL_TYPES: [PieceType; PieceType::NUM_TYPES] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    /// The types a pawn may be promoted to.
    pub const PROMOTION_TYPES: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    #[must_use]
    /// Get the symbol of this type as used in action notation.
    /// Pawns have no symbol.
    pub const fn notation(self) -> &'static str {
        match self {
            PieceType::Pawn => "",
            PieceType::Rook => "R",
            PieceType::Knight => "N",
            PieceType::Bishop => "B",
            PieceType::Queen => "Q",
            PieceType::King => "K",
        }
    }

    #[must_use]
    /// Get the uppercase letter code of this type.
    /// Unlike `notation`, pawns are given the code `P`.
    pub const fn code(self) -> &'static str {
        match self {
            PieceType::Pawn => "P",
            other => other.notation(),
        }
    }

    #[must_use]
    /// Given an uppercase letter code, convert it to a piece type.
    pub const fn from_code(c: char) -> Option<PieceType> {
        match c {
            'P' => Some(PieceType::Pawn),
            'R' => Some(PieceType::Rook),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    #[must_use]
    /// Determine whether a pawn may be promoted to this type.
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceType::Pawn | PieceType::King)
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A single piece in a game.
///
/// A piece which has been captured stays around with its position set to
/// `Position::NONE`.
pub struct Piece {
    id: PieceId,
    kind: PieceType,
    color: Color,
    position: Position,
    /// The number of plies in which this piece has moved.
    move_count: u32,
}

impl Piece {
    #[must_use]
    /// Create a piece which has never moved.
    pub const fn new(id: PieceId, kind: PieceType, color: Color, position: Position) -> Piece {
        Piece {
            id,
            kind,
            color,
            position,
            move_count: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    /// Determine whether this piece has moved at any point in the game's
    /// current history.
    pub const fn has_moved(&self) -> bool {
        self.move_count != 0
    }

    #[must_use]
    /// Determine whether this piece is still on the board.
    pub const fn is_on_board(&self) -> bool {
        !self.position.is_none()
    }

    #[must_use]
    /// Get the symbol of this piece as used in action notation.
    pub const fn notation(&self) -> &'static str {
        self.kind.notation()
    }

    #[must_use]
    /// Get a copy of this piece which has been turned into `kind`, keeping
    /// its id, color, position, and move count.
    pub fn promoted(&self, kind: PieceType) -> Piece {
        Piece { kind, ..*self }
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn increment_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrement_move_count(&mut self) {
        self.move_count = self.move_count.saturating_sub(1);
    }

    #[must_use]
    /// Determine whether this piece attacks `target` in `game`.
    /// Pieces which are off the board attack nothing.
    pub fn can_attack_tile<B: Board>(&self, game: &ChessGame<B>, target: Position) -> bool {
        if !self.is_on_board() || !game.contains_tile(target) || target == self.position {
            return false;
        }
        match self.kind {
            PieceType::Pawn => pawn::can_attack_tile(self, target),
            PieceType::Rook => rook::can_attack_tile(self, game, target),
            PieceType::Knight => knight::can_attack_tile(self, game, target),
            PieceType::Bishop => bishop::can_attack_tile(self, game, target),
            PieceType::Queen => queen::can_attack_tile(self, game, target),
            PieceType::King => king::can_attack_tile(self, target),
        }
    }

    #[must_use]
    /// Get every action this piece could take in `game`, without regard for
    /// whether it would leave its own king in check.
    /// Every action is stamped with the id the game would give its next
    /// action.
    pub fn possible_actions<B: Board>(&self, game: &ChessGame<B>) -> Vec<ChessAction> {
        if !self.is_on_board() {
            return Vec::new();
        }
        match self.kind {
            PieceType::Pawn => pawn::possible_actions(self, game),
            PieceType::Rook => rook::possible_actions(self, game),
            PieceType::Knight => knight::possible_actions(self, game),
            PieceType::Bishop => bishop::possible_actions(self, game),
            PieceType::Queen => queen::possible_actions(self, game),
            PieceType::King => king::possible_actions(self, game),
        }
    }

    #[must_use]
    /// Get the tiles this piece would travel over to get from `from` to `to`,
    /// including both endpoints.
    /// The path is empty if this piece cannot travel between them in one
    /// move, ignoring any obstructions.
    pub fn path(&self, from: Position, to: Position) -> Vec<Position> {
        match self.kind {
            PieceType::Pawn => pawn::path(self.color, from, to),
            PieceType::Rook => rook::path(from, to),
            PieceType::Knight => knight::path(from, to),
            PieceType::Bishop => bishop::path(from, to),
            PieceType::Queen => queen::path(from, to),
            PieceType::King => king::path(from, to),
        }
    }

    #[must_use]
    /// Get the path from this piece's current position to `target`.
    pub fn path_to(&self, target: Position) -> Vec<Position> {
        self.path(self.position, target)
    }
}
