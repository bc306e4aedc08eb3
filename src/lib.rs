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

//! Castellan is a chess rules engine.
//!
//! A [`ChessGame`] validates the actions proposed by its consumer, plays
//! them, and works out check, checkmate, stalemate, and the repetition and
//! fifty-move draws.
//! It keeps its whole history, and can travel back and forth through it.
//! Whatever changes during an operation is reported as a queue of
//! [`GameEvent`]s for a presentation layer to consume.

#![warn(clippy::pedantic)]

// Many module elements are re-exported to make names more ergonomic to access.

mod action;
pub use action::{ActionId, ActionKind, ChessAction};

mod board;
pub use board::{Board, StandardBoard};

mod color;
pub use color::Color;

mod config;
pub use config::GameConfig;

mod direction;
pub use direction::Direction;

mod error;
pub use error::GameError;

mod event;
pub use event::GameEvent;

mod game;
pub use game::ChessGame;

mod movegen;

mod moves;
pub use moves::Move;

pub mod perft;

mod piece;
pub use piece::{Piece, PieceId, PieceType};

mod position;
pub use position::Position;

mod status;
pub use status::{GameResult, GameStatus};
