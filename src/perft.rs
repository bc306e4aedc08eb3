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

//! Performance testing, or "perft." Perft counts the sequences of legal
//! actions of a given length, and is used for verifying the correctness of
//! move generation along with playing and rewinding actions.

use super::{Board, ChessGame, GameError, PieceType};

use tracing::debug;

use std::time::Instant;

/// Count the sequences of `depth` legal actions which can be played from the
/// current state of `game`.
/// Each choice of promotion type counts as a separate sequence.
///
/// Every action is played with `move_piece` and taken back with
/// `go_to_action`, so `game` is left as it was found, except that any
/// actions after its action pointer are discarded.
///
/// # Errors
///
/// This function will return an `Err` if `game` refuses to play or rewind an
/// action it reported as legal.
pub fn perft<B: Board>(game: &mut ChessGame<B>, depth: u8) -> Result<u64, GameError> {
    let tic = Instant::now();
    let num_nodes = perft_search(game, depth, true)?;
    let time = tic.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let speed = (num_nodes as f64) / time.as_secs_f64();
    debug!(
        depth,
        num_nodes,
        secs = time.as_secs_f64(),
        nodes_per_sec = speed,
        "perft complete"
    );

    Ok(num_nodes)
}

/// The core search algorithm for perft.
fn perft_search<B: Board>(
    game: &mut ChessGame<B>,
    depth: u8,
    divide: bool,
) -> Result<u64, GameError> {
    if depth == 0 {
        return Ok(1);
    }
    if depth == 1 && !divide {
        // bulk counting: each promotion branches four ways
        return Ok(game
            .legal_actions()
            .iter()
            .map(|a| if a.is_promotion() { 4 } else { 1 })
            .sum());
    }

    let origin = game.action_pointer();
    let mut total = 0;
    for action in game.legal_actions() {
        let promotions: &[Option<PieceType>] = if action.is_promotion() {
            &[
                Some(PieceType::Queen),
                Some(PieceType::Rook),
                Some(PieceType::Bishop),
                Some(PieceType::Knight),
            ]
        } else {
            &[None]
        };

        for &promotion in promotions {
            game.move_piece(action)?;
            if let Some(kind) = promotion {
                game.promote_pawn(action.primary_move().piece_id(), kind)?;
            }
            game.clear_events();

            let perft_count = perft_search(game, depth - 1, false)?;
            if divide {
                debug!(action = %game.action_notation(&action), perft_count);
            }
            total += perft_count;

            game.go_to_action(origin)?;
            game.clear_events();
        }
    }

    Ok(total)
}
