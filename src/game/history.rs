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

//! Playing actions, promoting pawns, and traveling through history.

use super::{ChessGame, Ply};
use crate::{
    ActionId, Board, ChessAction, Color, GameError, GameEvent, GameResult, GameStatus, Move,
    PieceId, PieceType,
};

use tracing::{debug, info, trace};

impl<B: Board> ChessGame<B> {
    /// Play `action`, which must be one of the legal actions of its piece.
    ///
    /// The id and check markers of `action` are ignored: the game assigns
    /// the next id and works out check and checkmate itself.
    /// If the game had been rewound, every action after the current one is
    /// discarded first.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if the game is over, if any move of
    /// `action` refers to a piece which does not exist or is not on the
    /// move's origin, or if `action` is not legal.
    /// The game is unchanged when an error is returned.
    pub fn move_piece(&mut self, action: ChessAction) -> Result<(), GameError> {
        if self.status == GameStatus::GameOver {
            debug!(%action, "rejected action after game over");
            return Err(GameError::GameOver);
        }
        for m in action.moves() {
            let piece = self
                .find_piece_by_id(m.piece_id())
                .ok_or(GameError::UnknownPiece(m.piece_id()))?;
            if piece.position() != m.from() {
                debug!(%action, "rejected action with a misplaced piece");
                return Err(GameError::PieceNotAtOrigin {
                    id: m.piece_id(),
                    from: m.from(),
                });
            }
        }
        let primary = action.primary_move();
        if !self
            .possible_actions(primary.from())
            .iter()
            .any(|legal| legal.same_moves(&action))
        {
            debug!(%action, "rejected illegal action");
            return Err(GameError::IllegalAction);
        }
        let is_pawn_move = self
            .find_piece_by_id(primary.piece_id())
            .map_or(false, |p| p.kind() == PieceType::Pawn);

        self.discard_future();

        let mover = self.current_turn;
        let mut action = action;
        action.set_id(self.next_action_id());
        action.set_check(false);
        action.set_checkmate(false);
        action.set_promotion_type(None);
        trace!(%action, "playing action");

        for m in action.moves() {
            self.apply_move(m);
        }
        if action.is_promotion() {
            if let Some(pawn) = self.find_piece_by_id(primary.piece_id()).copied() {
                if pawn.kind() == PieceType::Pawn && pawn.is_on_board() {
                    self.emit(GameEvent::PawnPromotionRequested(pawn));
                }
            }
        }

        let fifty_move_before = self.fifty_move_counter;
        let fifty_move_after = if action.kind().is_capture() || is_pawn_move {
            0
        } else if mover == Color::Black {
            fifty_move_before + 1
        } else {
            fifty_move_before
        };
        let fingerprint = self.snapshot();
        let occurrences = self.count_snapshot(&fingerprint);

        self.plies[mover.index()].push(Ply {
            action,
            fingerprint,
            fifty_move_before,
            fifty_move_after,
            promotions: Vec::new(),
            result: None,
        });
        self.fifty_move_counter = fifty_move_after;
        self.current_turn = !mover;
        self.action_pointer = Some(action.id());
        self.emit(GameEvent::ActionPointerChanged(self.action_pointer));

        let result = if occurrences >= self.config.repetition_limit {
            Some(GameResult::DrawByThreefoldRepetition)
        } else if fifty_move_after >= self.config.fifty_move_limit {
            Some(GameResult::DrawByFiftyMoveRule)
        } else {
            self.evaluate_position(mover)
        };

        let id = action.id();
        if let Some((color, ply)) = self.ply_mut(id) {
            ply.result = result;
            let action = ply.action;
            self.emit(GameEvent::ActionAdded { color, action });
        }
        match result {
            Some(result) => self.finish(result),
            None => self.emit(GameEvent::TurnChanged(self.current_turn)),
        }

        Ok(())
    }

    /// Turn the pawn with id `piece_id` into a piece of type `kind`.
    ///
    /// This is the answer to a `GameEvent::PawnPromotionRequested`, though
    /// any pawn may be promoted.
    /// The promotion belongs to the last action: rewinding past that action
    /// turns the piece back into a pawn, and replaying it promotes it again.
    /// If the game had been rewound, every action after the current one is
    /// discarded first.
    ///
    /// If the promoted pawn made the last action, the chosen type is recorded
    /// on that action.
    /// If that action was a promotion, whether it checked, checkmated or
    /// stalemated the opponent is worked out again with the promoted piece.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `kind` is a pawn or king, or if
    /// `piece_id` does not name a pawn.
    pub fn promote_pawn(&mut self, piece_id: PieceId, kind: PieceType) -> Result<(), GameError> {
        if !kind.is_promotion_target() {
            debug!(%kind, "rejected promotion type");
            return Err(GameError::InvalidPromotionType(kind));
        }
        let pawn = *self
            .find_piece_by_id(piece_id)
            .ok_or(GameError::UnknownPiece(piece_id))?;
        if pawn.kind() != PieceType::Pawn {
            return Err(GameError::NotAPawn(piece_id));
        }

        self.discard_future();
        let promoted = pawn.promoted(kind);
        self.replace_piece(promoted);
        info!(piece_id, %kind, "promoted pawn");
        self.emit(GameEvent::PieceUpdated(promoted));

        let Some(id) = self.action_pointer else {
            return Ok(());
        };
        let fingerprint = self.snapshot();
        let Some((mover, ply)) = self.ply_mut(id) else {
            return Ok(());
        };
        let old_fingerprint = std::mem::replace(&mut ply.fingerprint, fingerprint.clone());
        ply.promotions.push((piece_id, kind));
        if ply.action.primary_move().piece_id() == piece_id {
            ply.action.set_promotion_type(Some(kind));
        }
        let reevaluate =
            ply.action.is_promotion() && ply.result.map_or(true, GameResult::is_positional);
        self.uncount_snapshot(&old_fingerprint);
        self.count_snapshot(&fingerprint);

        if reevaluate {
            let result = self.evaluate_position(mover);
            if let Some((_, ply)) = self.ply_mut(id) {
                ply.result = result;
            }
            match result {
                Some(result) if self.result != Some(result) => self.finish(result),
                Some(_) => (),
                None => {
                    if self.status == GameStatus::GameOver {
                        self.status = GameStatus::Ongoing;
                        self.result = None;
                        self.emit(GameEvent::TurnChanged(self.current_turn));
                    }
                }
            }
        }

        if let Some((color, ply)) = self.ply(id) {
            let action = ply.action;
            self.emit(GameEvent::ActionUpdated { color, action });
        }

        Ok(())
    }

    /// Travel through history to the action with id `target`, or to the
    /// start of the game if `target` is `None`.
    ///
    /// Actions are rolled back or replayed one at a time.
    /// The turn and game status are restored to what they were right after
    /// `target` was first played.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `target` is not the id of an
    /// action in the history, or if the game already reflects `target`.
    pub fn go_to_action(&mut self, target: Option<ActionId>) -> Result<(), GameError> {
        if let Some(id) = target {
            if id >= self.action_count() {
                return Err(GameError::ActionOutOfRange(id));
            }
        }
        if target == self.action_pointer {
            return Err(GameError::AlreadyAtAction);
        }

        let current = self.next_action_id();
        let goal = target.map_or(0, |id| id + 1);
        debug!(?target, pointer = ?self.action_pointer, "traveling through history");
        if goal < current {
            for id in (goal..current).rev() {
                self.rewind_ply(id);
            }
        } else {
            for id in current..goal {
                self.replay_ply(id);
            }
        }

        self.action_pointer = target;
        let (turn, result, is_check) = match target.and_then(|id| self.ply(id)) {
            Some((mover, ply)) => (!mover, ply.result, ply.action.is_check()),
            None => (Color::White, None, false),
        };
        self.current_turn = turn;
        self.result = result;
        self.status = if result.is_some() {
            GameStatus::GameOver
        } else {
            GameStatus::Ongoing
        };

        self.emit(GameEvent::TurnChanged(turn));
        self.emit(GameEvent::ActionPointerChanged(target));
        if is_check {
            if let Some(king) = self.king(turn).copied() {
                let attackers = self
                    .find_pieces_who_can_attack(king.position(), !turn)
                    .into_iter()
                    .copied()
                    .collect();
                self.emit(GameEvent::KingChecked { king, attackers });
            }
        }
        if let Some(result) = result {
            self.emit(GameEvent::GameOver(result));
        }

        Ok(())
    }

    /// Discard every action after the action pointer.
    fn discard_future(&mut self) {
        let next = self.next_action_id();
        if next >= self.action_count() {
            return;
        }

        let mut removed = Vec::new();
        for color in Color::ALL {
            let plies = &mut self.plies[color.index()];
            let keep = plies.iter().take_while(|p| p.action.id() < next).count();
            removed.extend(plies.drain(keep..).map(|p| (color, p.action)));
        }
        removed.sort_by_key(|(_, action)| action.id());

        debug!(count = removed.len(), "discarding rewound actions");
        for (color, action) in removed {
            self.emit(GameEvent::ActionRemoved { color, action });
        }
    }

    /// Move a piece forward along `m`.
    fn apply_move(&mut self, m: Move) {
        if let Some(piece) = self.piece_mut(m.piece_id()) {
            piece.set_position(m.to());
            piece.increment_move_count();
            let piece = *piece;
            self.emit(GameEvent::PieceMoved {
                piece,
                mv: m,
                is_undo: false,
            });
        }
    }

    /// Move a piece back along `m`.
    fn unapply_move(&mut self, m: Move) {
        if let Some(piece) = self.piece_mut(m.piece_id()) {
            piece.set_position(m.from());
            piece.decrement_move_count();
            let piece = *piece;
            self.emit(GameEvent::PieceMoved {
                piece,
                mv: m.reversed(),
                is_undo: true,
            });
        }
    }

    /// Undo the effects of the action with id `id`, which must be the last
    /// action reflected in the game.
    fn rewind_ply(&mut self, id: ActionId) {
        let Some((_, ply)) = self.ply(id) else {
            return;
        };
        let action = ply.action;
        let fingerprint = ply.fingerprint.clone();
        let fifty_move_before = ply.fifty_move_before;
        let promotions = ply.promotions.clone();
        trace!(%action, "rewinding action");

        self.uncount_snapshot(&fingerprint);
        for &(piece_id, _) in promotions.iter().rev() {
            self.set_kind(piece_id, PieceType::Pawn);
        }
        for m in action.moves().rev() {
            self.unapply_move(m);
        }
        self.fifty_move_counter = fifty_move_before;
    }

    /// Redo the effects of the action with id `id`, which must directly
    /// follow the last action reflected in the game.
    fn replay_ply(&mut self, id: ActionId) {
        let Some((_, ply)) = self.ply(id) else {
            return;
        };
        let action = ply.action;
        let fingerprint = ply.fingerprint.clone();
        let fifty_move_after = ply.fifty_move_after;
        let promotions = ply.promotions.clone();
        trace!(%action, "replaying action");

        for m in action.moves() {
            self.apply_move(m);
        }
        for (piece_id, kind) in promotions {
            self.set_kind(piece_id, kind);
        }
        self.count_snapshot(&fingerprint);
        self.fifty_move_counter = fifty_move_after;
    }

    /// Change the type of the piece with id `id`.
    fn set_kind(&mut self, id: PieceId, kind: PieceType) {
        if let Some(piece) = self.find_piece_by_id(id).copied() {
            let updated = piece.promoted(kind);
            self.replace_piece(updated);
            self.emit(GameEvent::PieceUpdated(updated));
        }
    }
}
