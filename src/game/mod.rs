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

//! Full chess games, including pieces, history, and the rules which govern
//! how the game ends.

mod history;
mod legality;
mod notation;

#[cfg(test)]
mod tests;

use super::{
    ActionId, Board, ChessAction, Color, Direction, GameConfig, GameEvent, GameResult,
    GameStatus, Piece, PieceId, PieceType, Position, StandardBoard,
};

use nohash_hasher::IntMap;
use tracing::info;

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    vec::Drain,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One played action, along with the bookkeeping needed to roll it back and
/// replay it exactly.
struct Ply {
    action: ChessAction,
    /// The snapshot of the position after this action, as it was counted
    /// toward repetitions.
    fingerprint: String,
    /// The fifty-move counter before this action was played.
    fifty_move_before: u32,
    /// The fifty-move counter after this action was played.
    fifty_move_after: u32,
    /// The pawns promoted while this was the last action, and what they
    /// became, in order.
    promotions: Vec<(PieceId, PieceType)>,
    /// How the game ended as a result of this action, if it did.
    result: Option<GameResult>,
}

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug)]
/// A game of chess on a board of geometry `B`.
///
/// A `ChessGame` owns every piece and the full history of actions.
/// It can travel back and forth through its history with `go_to_action`;
/// playing a new action while rewound discards the actions after the
/// current one.
///
/// # Examples
///
/// ```
/// use castellan::{Board, ChessGame, GameStatus};
///
/// let mut game = ChessGame::default();
/// let e2 = game.board().parse("e2").unwrap();
/// let e4 = game.board().parse("e4").unwrap();
/// let action = game
///     .possible_actions(e2)
///     .into_iter()
///     .find(|a| a.primary_move().to() == e4)
///     .unwrap();
/// game.move_piece(action).unwrap();
///
/// assert_eq!(game.action_count(), 1);
/// assert_eq!(game.status(), GameStatus::Ongoing);
/// assert_eq!(game.action_notation(game.last_action().unwrap()), "e4");
/// ```
pub struct ChessGame<B: Board = StandardBoard> {
    board: B,
    config: GameConfig,
    /// The pieces of each color, indexed by `Color::index`.
    /// Pieces are never removed from these lists.
    pieces: [Vec<Piece>; 2],
    /// The color and index into `pieces` of every piece, keyed by id.
    index: IntMap<PieceId, (Color, usize)>,
    /// The actions played by each color, in order.
    /// This includes actions after the action pointer if the game has been
    /// rewound.
    plies: [Vec<Ply>; 2],
    /// The number of times each snapshot has been reached by the actions up
    /// to the action pointer.
    snapshots: HashMap<String, u32>,
    /// The number of full moves played without a capture or pawn move.
    fifty_move_counter: u32,
    current_turn: Color,
    /// The id of the last action reflected in the game, or `None` if the game
    /// is at its starting position.
    action_pointer: Option<ActionId>,
    status: GameStatus,
    result: Option<GameResult>,
    /// Events which have not yet been drained by the consumer.
    events: Vec<GameEvent>,
}

impl<B: Board> ChessGame<B> {
    #[must_use]
    /// Construct a new game on `board`, with every piece in its starting
    /// position and the default rules.
    pub fn new(board: B) -> ChessGame<B> {
        ChessGame::with_config(board, GameConfig::default())
    }

    #[must_use]
    /// Construct a new game on `board` using the draw rules in `config`.
    ///
    /// White's pieces are numbered first, starting from id 0, and Black's
    /// numbering continues where White's left off.
    pub fn with_config(board: B, config: GameConfig) -> ChessGame<B> {
        let mut pieces = [Vec::new(), Vec::new()];
        let mut index = IntMap::default();
        let mut next_id: PieceId = 0;

        for color in Color::ALL {
            for (kind, position) in board.initial_placement(color) {
                let list: &mut Vec<Piece> = &mut pieces[color.index()];
                index.insert(next_id, (color, list.len()));
                list.push(Piece::new(next_id, kind, color, position));
                next_id += 1;
            }
        }

        ChessGame {
            board,
            config,
            pieces,
            index,
            plies: [Vec::new(), Vec::new()],
            snapshots: HashMap::new(),
            fifty_move_counter: 0,
            current_turn: Color::White,
            action_pointer: None,
            status: GameStatus::Ongoing,
            result: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn width(&self) -> i8 {
        self.board.width()
    }

    #[must_use]
    pub fn height(&self) -> i8 {
        self.board.height()
    }

    #[must_use]
    /// Get the color whose turn it is.
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    /// Get the way the game ended, or `None` if it is still ongoing.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    /// Get the id of the last action reflected in the game, or `None` if the
    /// game is at its starting position.
    pub fn action_pointer(&self) -> Option<ActionId> {
        self.action_pointer
    }

    #[must_use]
    /// Get the total number of actions in the history, including those after
    /// the action pointer.
    pub fn action_count(&self) -> usize {
        self.plies[0].len() + self.plies[1].len()
    }

    #[must_use]
    /// Get the last action reflected in the game.
    pub fn last_action(&self) -> Option<&ChessAction> {
        self.find_action_by_id(self.action_pointer?)
    }

    #[must_use]
    /// Get the id which the next action played will be given.
    pub fn next_action_id(&self) -> ActionId {
        self.action_pointer.map_or(0, |id| id + 1)
    }

    #[must_use]
    /// Get the number of full moves played without a capture or pawn move.
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    #[must_use]
    /// Get the number of times the position described by `snapshot` has
    /// been reached.
    pub fn repetitions(&self, snapshot: &str) -> u32 {
        self.snapshots.get(snapshot).copied().unwrap_or(0)
    }

    #[must_use]
    /// Get every piece of `color`, including captured ones.
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    /// Get every piece still on the board.
    pub fn pieces_on_board(&self) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .flat_map(|list| list.iter())
            .filter(|p| p.is_on_board())
    }

    #[must_use]
    pub fn find_piece_by_id(&self, id: PieceId) -> Option<&Piece> {
        let &(color, slot) = self.index.get(&id)?;
        self.pieces[color.index()].get(slot)
    }

    #[must_use]
    /// Get the piece standing on `position`, if there is one.
    pub fn find_piece_by_position(&self, position: Position) -> Option<&Piece> {
        if position.is_none() {
            return None;
        }
        self.pieces_on_board().find(|p| p.position() == position)
    }

    #[must_use]
    /// Get every piece of `color` which attacks `position`.
    pub fn find_pieces_who_can_attack(&self, position: Position, color: Color) -> Vec<&Piece> {
        if !self.contains_tile(position) {
            return Vec::new();
        }
        self.pieces[color.index()]
            .iter()
            .filter(|p| p.can_attack_tile(self, position))
            .collect()
    }

    #[must_use]
    /// Get the action with id `id`, whether or not the game has been rewound
    /// past it.
    pub fn find_action_by_id(&self, id: ActionId) -> Option<&ChessAction> {
        self.ply(id).map(|(_, ply)| &ply.action)
    }

    #[must_use]
    /// Get every action in the history, in the order they were played.
    pub fn actions(&self) -> Vec<&ChessAction> {
        (0..self.action_count())
            .filter_map(|id| self.find_action_by_id(id))
            .collect()
    }

    #[must_use]
    /// Get the king of `color`.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces[color.index()]
            .iter()
            .find(|p| p.kind() == PieceType::King && p.is_on_board())
    }

    #[must_use]
    /// Determine whether the king of `color` is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king(color)
            .map_or(false, |k| self.is_tile_under_attack(k.position(), !color))
    }

    #[must_use]
    pub fn contains_tile(&self, position: Position) -> bool {
        self.board.contains(position)
    }

    #[must_use]
    /// Get the name of the tile at `position`, or an empty string if it is
    /// off the board.
    pub fn tile_notation(&self, position: Position) -> String {
        self.board.notation(position)
    }

    #[must_use]
    /// Determine whether any piece of `attacker` attacks `position`.
    pub fn is_tile_under_attack(&self, position: Position, attacker: Color) -> bool {
        self.contains_tile(position)
            && self.pieces[attacker.index()]
                .iter()
                .any(|p| p.can_attack_tile(self, position))
    }

    #[must_use]
    pub fn is_tile_occupied(&self, position: Position) -> bool {
        self.find_piece_by_position(position).is_some()
    }

    #[must_use]
    pub fn is_tile_occupied_by(&self, position: Position, color: Color) -> bool {
        self.find_piece_by_position(position)
            .map_or(false, |p| p.color() == color)
    }

    #[must_use]
    /// Get the tiles on the board adjacent to `position`.
    pub fn surrounding_tiles(&self, position: Position) -> Vec<Position> {
        self.steps_from(position, &Direction::KING_STEPS)
    }

    #[must_use]
    /// Get the tiles on the board a knight's jump away from `position`.
    pub fn l_shape_tiles(&self, position: Position) -> Vec<Position> {
        self.steps_from(position, &Direction::KNIGHT_STEPS)
    }

    #[must_use]
    /// Get the tiles along the rank or file leaving `position` in direction
    /// `dir`, up to and including the first occupied tile.
    ///
    /// # Panics
    ///
    /// This function will panic if `dir` is not a single orthogonal step.
    pub fn orthogonal_tiles(&self, position: Position, dir: Direction) -> Vec<Position> {
        assert!(dir.is_orthogonal(), "{dir:?} is not an orthogonal step");
        self.ray_tiles(position, dir)
    }

    #[must_use]
    /// Get the tiles along the diagonal leaving `position` in direction
    /// `dir`, up to and including the first occupied tile.
    ///
    /// # Panics
    ///
    /// This function will panic if `dir` is not a single diagonal step.
    pub fn diagonal_tiles(&self, position: Position, dir: Direction) -> Vec<Position> {
        assert!(dir.is_diagonal(), "{dir:?} is not a diagonal step");
        self.ray_tiles(position, dir)
    }

    /// Get the tiles leaving `position` in direction `dir`, up to and
    /// including the first occupied tile or the edge of the board.
    pub(crate) fn ray_tiles(&self, position: Position, dir: Direction) -> Vec<Position> {
        let mut tiles = Vec::new();
        let mut tile = position + dir;
        while self.contains_tile(tile) {
            tiles.push(tile);
            if self.is_tile_occupied(tile) {
                break;
            }
            tile += dir;
        }

        tiles
    }

    fn steps_from(&self, position: Position, steps: &[Direction]) -> Vec<Position> {
        steps
            .iter()
            .map(|&step| position + step)
            .filter(|&tile| self.contains_tile(tile))
            .collect()
    }

    /// Take every event queued since the last drain, in the order they
    /// happened.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    #[must_use]
    /// Get the events queued since the last drain without removing them.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Discard every queued event.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Get the ply with id `id` and the color which played it.
    /// Plies alternate colors starting with White, so the `n`th ply is always
    /// at index `n / 2` of its color's list.
    fn ply(&self, id: ActionId) -> Option<(Color, &Ply)> {
        let color = if id % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        self.plies[color.index()]
            .get(id / 2)
            .filter(|ply| ply.action.id() == id)
            .map(|ply| (color, ply))
    }

    fn ply_mut(&mut self, id: ActionId) -> Option<(Color, &mut Ply)> {
        let color = if id % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        self.plies[color.index()]
            .get_mut(id / 2)
            .filter(|ply| ply.action.id() == id)
            .map(|ply| (color, ply))
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        let &(color, slot) = self.index.get(&id)?;
        self.pieces[color.index()].get_mut(slot)
    }

    /// Overwrite the piece with `piece`'s id, keeping its slot.
    fn replace_piece(&mut self, piece: Piece) {
        if let Some(slot) = self.piece_mut(piece.id()) {
            *slot = piece;
        }
    }

    /// Record another occurrence of `snapshot`, returning how many times it
    /// has now occurred.
    fn count_snapshot(&mut self, snapshot: &str) -> u32 {
        let count = self.snapshots.entry(snapshot.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Remove one occurrence of `snapshot`.
    fn uncount_snapshot(&mut self, snapshot: &str) {
        if let Some(count) = self.snapshots.get_mut(snapshot) {
            *count -= 1;
            if *count == 0 {
                self.snapshots.remove(snapshot);
            }
        }
    }

    /// End the game with `result`.
    fn finish(&mut self, result: GameResult) {
        info!(%result, "game over");
        self.status = GameStatus::GameOver;
        self.result = Some(result);
        self.emit(GameEvent::GameOver(result));
    }
}

impl Default for ChessGame<StandardBoard> {
    fn default() -> Self {
        ChessGame::new(StandardBoard)
    }
}

impl<B: Board> Display for ChessGame<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for id in 0..self.next_action_id() {
            if let Some(action) = self.find_action_by_id(id) {
                if id % 2 == 0 {
                    write!(f, "{}. ", id / 2 + 1)?;
                }
                write!(f, "{} ", self.action_notation(action))?;
            }
        }

        Ok(())
    }
}
