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

//! Notifications emitted by a game as its state changes.
//!
//! A `ChessGame` queues events while it executes an operation.
//! Consumers drain the queue afterwards with `ChessGame::drain_events`, and
//! receive the events in the order the changes happened.

use super::{ActionId, ChessAction, Color, GameResult, Move, Piece};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was relocated.
    /// `is_undo` is set when the move is being rolled back by time travel.
    PieceMoved { piece: Piece, mv: Move, is_undo: bool },
    /// The king of the side to move is attacked by `attackers`.
    KingChecked { king: Piece, attackers: Vec<Piece> },
    /// The game ended.
    GameOver(GameResult),
    /// A pawn reached its promotion rank.
    /// The consumer must answer with `ChessGame::promote_pawn`.
    PawnPromotionRequested(Piece),
    /// A piece changed type, either by promotion or by its promotion being
    /// rolled back.
    PieceUpdated(Piece),
    /// It is now `Color`'s turn.
    TurnChanged(Color),
    /// `action`, played by `color`, was added to the history.
    ActionAdded { color: Color, action: ChessAction },
    /// The markers of an action already in the history changed.
    ActionUpdated { color: Color, action: ChessAction },
    /// `action` was discarded from the history because a new action was
    /// played while the game was rewound.
    ActionRemoved { color: Color, action: ChessAction },
    /// The game now reflects the action with the given id, or no action at
    /// all.
    ActionPointerChanged(Option<ActionId>),
}
