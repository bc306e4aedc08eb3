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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for the draw rules of a game.
pub struct GameConfig {
    /// The number of times a position must occur for the game to be drawn by
    /// repetition.
    pub repetition_limit: u32,
    /// The number of consecutive full moves without a capture or pawn move
    /// after which the game is drawn.
    pub fifty_move_limit: u32,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> GameConfig {
        GameConfig {
            repetition_limit: 3,
            fifty_move_limit: 50,
        }
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig::new()
    }
}
