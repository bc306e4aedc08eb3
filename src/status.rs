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

//! Whether a game is still being played, and how it ended.

use super::Color;

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The way in which a game ended.
pub enum GameResult {
    /// White checkmated Black.
    WhiteWin,
    /// Black checkmated White.
    BlackWin,
    /// The side to move had no legal action but was not in check.
    DrawByStalemate,
    /// The same position was reached too many times.
    DrawByThreefoldRepetition,
    /// Too many full moves were played without a capture or pawn move.
    DrawByFiftyMoveRule,
}

impl GameResult {
    #[must_use]
    /// Get the result of `color` delivering checkmate.
    pub const fn checkmate_by(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWin,
            Color::Black => GameResult::BlackWin,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWin => Some(Color::White),
            GameResult::BlackWin => Some(Color::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }

    #[must_use]
    /// Determine whether this result follows from the position alone (as
    /// opposed to the game's history).
    pub const fn is_positional(self) -> bool {
        matches!(
            self,
            GameResult::WhiteWin | GameResult::BlackWin | GameResult::DrawByStalemate
        )
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GameResult::WhiteWin => "white wins by checkmate",
                GameResult::BlackWin => "black wins by checkmate",
                GameResult::DrawByStalemate => "draw by stalemate",
                GameResult::DrawByThreefoldRepetition => "draw by repetition",
                GameResult::DrawByFiftyMoveRule => "draw by the fifty-move rule",
            }
        )
    }
}
