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

//! Tests for playing full games.

use super::*;
use crate::{ActionKind, GameError, Move};

/// Get the position of the tile named `name` on a standard board.
fn sq(name: &str) -> Position {
    StandardBoard.parse(name).unwrap()
}

/// Find the legal action which moves the piece on `from` to `to`.
fn find(game: &ChessGame, from: &str, to: &str) -> ChessAction {
    game.possible_actions(sq(from))
        .into_iter()
        .find(|a| a.primary_move().to() == sq(to))
        .unwrap_or_else(|| panic!("no legal action from {from} to {to}"))
}

/// Play the action moving the piece on `from` to `to`.
fn play(game: &mut ChessGame, from: &str, to: &str) {
    let action = find(game, from, to);
    game.move_piece(action).unwrap();
}

/// Play every action in `moves`, in order.
fn play_all(game: &mut ChessGame, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        play(game, from, to);
    }
}

/// Get the notation of the last action played in `game`.
fn last_notation(game: &ChessGame) -> String {
    game.action_notation(game.last_action().unwrap())
}

/// Get the destinations of the legal actions of the piece on `from`.
fn destinations(game: &ChessGame, from: &str) -> Vec<Position> {
    game.possible_actions(sq(from))
        .iter()
        .map(|a| a.primary_move().to())
        .collect()
}

#[test]
/// Test that pieces can be looked up by id, and that ids outside the 32
/// pieces of a standard game find nothing.
fn find_piece_by_id() {
    let game = ChessGame::default();
    let a2 = game.find_piece_by_id(0).unwrap();
    assert_eq!(a2.kind(), PieceType::Pawn);
    assert_eq!(a2.color(), Color::White);
    assert_eq!(a2.position(), sq("a2"));

    let a7 = game.find_piece_by_id(16).unwrap();
    assert_eq!(a7.color(), Color::Black);
    assert_eq!(a7.position(), sq("a7"));

    assert_eq!(game.find_piece_by_id(31).unwrap().kind(), PieceType::King);
    assert!(game.find_piece_by_id(32).is_none());
    assert!(game.find_piece_by_id(100).is_none());
}

#[test]
fn find_piece_by_position() {
    let game = ChessGame::default();
    assert_eq!(
        game.find_piece_by_position(Position::new(0, 0)).unwrap().kind(),
        PieceType::Rook
    );
    assert!(game.find_piece_by_position(Position::NONE).is_none());
    assert!(game.find_piece_by_position(sq("e4")).is_none());
}

#[test]
/// Test that attackers are found only for the requested color.
fn find_attackers() {
    let game = ChessGame::default();
    assert!(game
        .find_pieces_who_can_attack(Position::new(0, 0), Color::Black)
        .is_empty());

    let mut attackers: Vec<PieceId> = game
        .find_pieces_who_can_attack(sq("c3"), Color::White)
        .iter()
        .map(|p| p.id())
        .collect();
    attackers.sort_unstable();
    // the b- and d-pawns and the queenside knight
    assert_eq!(attackers, vec![1, 3, 10]);
}

#[test]
/// Test that actions can only be found once they have been played.
fn find_action_by_id() {
    let mut game = ChessGame::default();
    assert!(game.find_action_by_id(0).is_none());
    assert!(game.last_action().is_none());
    play(&mut game, "e2", "e4");
    assert_eq!(game.find_action_by_id(0).unwrap().id(), 0);
    assert_eq!(game.last_action().unwrap().id(), 0);
    assert!(game.find_action_by_id(1).is_none());
}

#[test]
/// Test which promotions are accepted.
fn promotion_requests() {
    let mut game = ChessGame::default();
    assert_eq!(
        game.promote_pawn(0, PieceType::King),
        Err(GameError::InvalidPromotionType(PieceType::King))
    );
    assert_eq!(
        game.promote_pawn(0, PieceType::Pawn),
        Err(GameError::InvalidPromotionType(PieceType::Pawn))
    );
    assert_eq!(
        game.promote_pawn(8, PieceType::Queen),
        Err(GameError::NotAPawn(8))
    );
    assert_eq!(
        game.promote_pawn(100, PieceType::Queen),
        Err(GameError::UnknownPiece(100))
    );
    assert_eq!(game.promote_pawn(0, PieceType::Queen), Ok(()));
    assert_eq!(game.find_piece_by_id(0).unwrap().kind(), PieceType::Queen);
}

#[test]
/// Test that only the pieces of the side to move have actions.
fn possible_actions_of_side_to_move() {
    let game = ChessGame::default();
    assert_eq!(game.possible_actions(sq("a2")).len(), 2);
    assert!(game.possible_actions(sq("a1")).is_empty());
    assert!(game.possible_actions(sq("a7")).is_empty());
    assert!(game.possible_actions(sq("e4")).is_empty());
    assert_eq!(game.legal_actions().len(), 20);

    for y in 0..8 {
        for x in 0..8 {
            let p = Position::new(x, y);
            let owned = game.is_tile_occupied_by(p, Color::White);
            if !owned {
                assert!(game.possible_actions(p).is_empty());
            }
        }
    }
}

#[test]
/// Test the notation of a pawn push with and without check.
fn pawn_push_notation() {
    let game = ChessGame::default();
    let mut action = find(&game, "a2", "a3");
    assert!(matches!(action.kind(), ActionKind::BasicMove(_)));
    assert_eq!(game.action_notation(&action), "a3");
    action.set_check(true);
    assert_eq!(game.action_notation(&action), "a3+");
    action.set_checkmate(true);
    assert_eq!(game.action_notation(&action), "a3#");
}

#[test]
/// Test the geometric queries on the starting position.
fn starting_geometry() {
    let game = ChessGame::default();
    assert!(!game.is_in_check(Color::White));
    assert!(!game.is_in_check(Color::Black));
    assert!(game.pinning_piece(game.find_piece_by_id(0).unwrap()).is_none());
    assert!(game.contains_tile(Position::new(0, 0)));
    assert!(!game.contains_tile(Position::NONE));
    assert!(game.is_tile_under_attack(Position::new(2, 2), Color::White));
    assert!(!game.is_tile_under_attack(Position::new(3, 3), Color::White));
    assert!(game.is_tile_occupied(Position::new(0, 0)));
    assert!(!game.is_tile_occupied(Position::new(2, 2)));
    assert!(game.is_tile_occupied_by(sq("e8"), Color::Black));
    assert!(!game.is_tile_occupied_by(sq("e8"), Color::White));
    assert_eq!(game.tile_notation(sq("g7")), "g7");
}

#[test]
/// Test that neighboring tiles are clipped to the board.
fn tile_neighborhoods() {
    let game = ChessGame::default();
    assert_eq!(game.surrounding_tiles(Position::new(1, 1)).len(), 8);
    assert_eq!(game.surrounding_tiles(sq("a1")).len(), 3);

    let mut jumps = game.l_shape_tiles(sq("b1"));
    jumps.sort_by_key(|p| (p.y, p.x));
    assert_eq!(jumps, vec![sq("d2"), sq("a3"), sq("c3")]);
}

#[test]
/// Test that rays stop at, and include, the first occupied tile.
fn ray_queries() {
    let game = ChessGame::default();
    assert_eq!(game.orthogonal_tiles(sq("a1"), Direction::NORTH), vec![sq("a2")]);
    assert!(game.orthogonal_tiles(sq("a1"), Direction::WEST).is_empty());
    assert_eq!(
        game.orthogonal_tiles(sq("d4"), Direction::EAST),
        vec![sq("e4"), sq("f4"), sq("g4"), sq("h4")]
    );
    assert_eq!(
        game.diagonal_tiles(sq("d4"), Direction::NORTHEAST),
        vec![sq("e5"), sq("f6"), sq("g7")]
    );
}

#[test]
#[should_panic]
/// Test that asking for an orthogonal ray along a diagonal is a programming
/// error.
fn orthogonal_ray_misuse() {
    let game = ChessGame::default();
    let _ = game.orthogonal_tiles(sq("d4"), Direction::NORTHEAST);
}

#[test]
/// Test that malformed and out-of-turn actions are rejected without changing
/// the game.
fn rejected_actions() {
    let mut game = ChessGame::default();
    let snapshot = game.snapshot();

    let ghost = ChessAction::basic_move(0, Move::new(99, sq("a3"), sq("a4")), false);
    assert_eq!(game.move_piece(ghost), Err(GameError::UnknownPiece(99)));

    let misplaced = ChessAction::basic_move(0, Move::new(0, sq("b2"), sq("b3")), false);
    assert_eq!(
        game.move_piece(misplaced),
        Err(GameError::PieceNotAtOrigin {
            id: 0,
            from: sq("b2")
        })
    );

    let teleport = ChessAction::basic_move(0, Move::new(0, sq("a2"), sq("a5")), false);
    assert_eq!(game.move_piece(teleport), Err(GameError::IllegalAction));

    let black_first = ChessAction::basic_move(0, Move::new(16, sq("a7"), sq("a6")), false);
    assert_eq!(game.move_piece(black_first), Err(GameError::IllegalAction));

    assert_eq!(game.snapshot(), snapshot);
    assert_eq!(game.action_count(), 0);
    assert!(game.pending_events().is_empty());
}

#[test]
/// Test that the game stamps ids and clears caller-provided markers.
fn ids_are_assigned_by_the_game() {
    let mut game = ChessGame::default();
    let mut action = find(&game, "e2", "e4");
    action.set_id(40);
    action.set_check(true);
    game.move_piece(action).unwrap();

    let played = game.last_action().unwrap();
    assert_eq!(played.id(), 0);
    assert!(!played.is_check());
    assert!(matches!(played.kind(), ActionKind::DoubleStep(_)));

    play(&mut game, "e7", "e5");
    assert_eq!(game.last_action().unwrap().id(), 1);
    assert_eq!(game.action_pointer(), Some(1));
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
/// Test the events emitted by playing an action and then rewinding it.
fn events_of_move_and_rewind() {
    let mut game = ChessGame::default();
    play(&mut game, "e2", "e4");
    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(events.len(), 4);
    assert!(matches!(
        events[0],
        GameEvent::PieceMoved { piece, mv, is_undo: false }
            if piece.id() == 4 && piece.position() == sq("e4") && mv.to() == sq("e4")
    ));
    assert_eq!(events[1], GameEvent::ActionPointerChanged(Some(0)));
    assert!(matches!(
        events[2],
        GameEvent::ActionAdded { color: Color::White, action } if action.id() == 0
    ));
    assert_eq!(events[3], GameEvent::TurnChanged(Color::Black));
    assert!(game.pending_events().is_empty());

    game.go_to_action(None).unwrap();
    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0],
        GameEvent::PieceMoved { piece, mv, is_undo: true }
            if piece.position() == sq("e2") && mv.from() == sq("e4") && mv.to() == sq("e2")
    ));
    assert_eq!(events[1], GameEvent::TurnChanged(Color::White));
    assert_eq!(events[2], GameEvent::ActionPointerChanged(None));
}

#[test]
/// Test that the fool's mate ends the game in a win for Black, after which no
/// more actions are accepted.
fn fools_mate() {
    let mut game = ChessGame::default();
    play_all(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    let mate = find(&game, "d8", "h4");
    game.move_piece(mate).unwrap();

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.result(), Some(GameResult::BlackWin));
    assert!(game.last_action().unwrap().is_checkmate());
    assert_eq!(last_notation(&game), "Qh4#");
    assert!(game.is_in_check(Color::White));
    assert!(game.legal_actions().is_empty());
    assert!(game
        .pending_events()
        .contains(&GameEvent::GameOver(GameResult::BlackWin)));

    let push = ChessAction::basic_move(4, Move::new(0, sq("a2"), sq("a3")), false);
    assert_eq!(game.move_piece(push), Err(GameError::GameOver));
}

#[test]
/// Test the scholar's mate, which ends with a capture.
fn scholars_mate() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );
    assert_eq!(game.result(), Some(GameResult::WhiteWin));
    assert_eq!(last_notation(&game), "Qxf7#");
    assert_eq!(game.find_piece_by_id(21).unwrap().position(), Position::NONE);
}

#[test]
/// Test that a king cannot step back along the line of the slider checking
/// it, which makes this position a checkmate.
fn king_cannot_retreat_along_checking_line() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[("e2", "e4"), ("e7", "e5"), ("d1", "h5"), ("e8", "e7")],
    );
    play(&mut game, "h5", "e5");
    assert_eq!(last_notation(&game), "Qxe5#");
    assert_eq!(game.result(), Some(GameResult::WhiteWin));
}

#[test]
/// Test that a check must be answered, here by the only blocking move.
fn check_must_be_answered() {
    let mut game = ChessGame::default();
    play_all(&mut game, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
    assert!(game.last_action().unwrap().is_check());
    assert!(!game.last_action().unwrap().is_checkmate());
    assert_eq!(last_notation(&game), "Qh5+");
    assert!(game.is_in_check(Color::Black));
    assert!(game.pending_events().iter().any(|e| matches!(
        e,
        GameEvent::KingChecked { king, attackers }
            if king.id() == 31 && attackers.len() == 1 && attackers[0].id() == 14
    )));

    let legal = game.legal_actions();
    assert_eq!(legal.len(), 1);
    assert_eq!(legal[0].primary_move().from(), sq("g7"));
    assert_eq!(legal[0].primary_move().to(), sq("g6"));
}

#[test]
/// Test that a pinned piece may only move along the pinning line, including
/// by capturing the pinning piece.
fn pinned_piece() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[("e2", "e4"), ("d7", "d6"), ("d2", "d4"), ("c8", "d7"), ("f1", "b5")],
    );
    let bishop = *game.find_piece_by_position(sq("d7")).unwrap();
    let (pinner, path) = game.pinning_piece(&bishop).unwrap();
    assert_eq!(pinner.position(), sq("b5"));
    assert_eq!(path, vec![sq("b5"), sq("c6"), sq("d7")]);

    let mut targets = destinations(&game, "d7");
    targets.sort_by_key(|p| (p.y, p.x));
    assert_eq!(targets, vec![sq("b5"), sq("c6")]);

    // no slider lines up behind the queen
    let queen = *game.find_piece_by_position(sq("d8")).unwrap();
    assert!(game.pinning_piece(&queen).is_none());
}

#[test]
/// Test that a pawn pinned against its king cannot advance.
fn pinned_pawn() {
    let mut game = ChessGame::default();
    play_all(&mut game, &[("e2", "e4"), ("e7", "e5"), ("d1", "h5")]);
    assert!(game.possible_actions(sq("f7")).is_empty());
}

#[test]
/// Test that castling kingside is offered once the path is clear, and that it
/// moves both the king and the rook.
fn castle_short() {
    let mut game = ChessGame::default();
    assert!(!game
        .possible_actions(sq("e1"))
        .iter()
        .any(|a| a.kind().is_castling()));
    play_all(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
        ],
    );
    let castle = find(&game, "e1", "g1");
    assert!(matches!(
        castle.kind(),
        ActionKind::CastlingShort { rook, king }
            if rook.from() == sq("h1") && rook.to() == sq("f1") && king.to() == sq("g1")
    ));
    assert_eq!(castle.moves().count(), 2);
    game.move_piece(castle).unwrap();

    assert_eq!(last_notation(&game), "O-O");
    assert_eq!(game.find_piece_by_position(sq("g1")).unwrap().kind(), PieceType::King);
    assert_eq!(game.find_piece_by_position(sq("f1")).unwrap().kind(), PieceType::Rook);
    assert!(game.find_piece_by_position(sq("h1")).is_none());
}

#[test]
/// Test that castling queenside moves the king two tiles and the rook to the
/// tile the king passed over.
fn castle_long() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("d2", "d4"),
            ("d7", "d5"),
            ("b1", "c3"),
            ("b8", "c6"),
            ("c1", "f4"),
            ("c8", "f5"),
            ("d1", "d2"),
            ("d8", "d7"),
        ],
    );
    let castle = find(&game, "e1", "c1");
    assert!(matches!(
        castle.kind(),
        ActionKind::CastlingLong { rook, .. } if rook.from() == sq("a1") && rook.to() == sq("d1")
    ));
    game.move_piece(castle).unwrap();
    assert_eq!(last_notation(&game), "O-O-O");

    // black may castle the same way
    let castle = find(&game, "e8", "c8");
    assert!(matches!(castle.kind(), ActionKind::CastlingLong { .. }));
}

#[test]
/// Test that a king which has moved, even if it returned home, cannot castle.
fn no_castle_after_king_moved() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
            ("e1", "e2"),
            ("g8", "f6"),
            ("e2", "e1"),
            ("f6", "g8"),
        ],
    );
    assert!(!game
        .possible_actions(sq("e1"))
        .iter()
        .any(|a| a.kind().is_castling()));
}

#[test]
/// Test that a rook which has moved, even if it returned home, cannot castle.
fn no_castle_after_rook_moved() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
            ("h1", "g1"),
            ("g8", "f6"),
            ("g1", "h1"),
            ("f6", "g8"),
        ],
    );
    assert!(!game
        .possible_actions(sq("e1"))
        .iter()
        .any(|a| a.kind().is_castling()));
}

#[test]
/// Test that a king cannot castle through an attacked tile.
fn no_castle_through_attack() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("e2", "e4"),
            ("b7", "b6"),
            ("g2", "g3"),
            ("c8", "a6"),
            ("f1", "h3"),
            ("b8", "c6"),
            ("g1", "f3"),
            ("c6", "b8"),
        ],
    );
    assert!(game.is_tile_under_attack(sq("f1"), Color::Black));
    assert!(!game.is_tile_occupied(sq("f1")));
    assert!(!game.is_tile_occupied(sq("g1")));
    assert!(!game
        .possible_actions(sq("e1"))
        .iter()
        .any(|a| a.kind().is_castling()));
}

#[test]
/// Test that a king in check cannot castle, even with a clear and safe path,
/// and that castling returns once the check is blocked.
fn no_castle_out_of_check() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("d2", "d3"),
            ("e7", "e6"),
            ("g1", "f3"),
            ("a7", "a6"),
            ("g2", "g3"),
            ("a6", "a5"),
            ("f1", "g2"),
            ("f8", "b4"),
        ],
    );
    assert!(game.is_in_check(Color::White));
    assert!(!game.is_tile_under_attack(sq("f1"), Color::Black));
    assert!(!game.is_tile_under_attack(sq("g1"), Color::Black));
    assert!(!game
        .possible_actions(sq("e1"))
        .iter()
        .any(|a| a.kind().is_castling()));

    play_all(&mut game, &[("c2", "c3"), ("a5", "a4")]);
    assert!(matches!(
        find(&game, "e1", "g1").kind(),
        ActionKind::CastlingShort { .. }
    ));
}

#[test]
/// Test that castling queenside needs every tile between king and rook to be
/// empty, including the one the king never crosses.
fn no_castle_long_past_occupied_tile() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("d2", "d4"),
            ("d7", "d5"),
            ("c1", "f4"),
            ("c8", "f5"),
            ("d1", "d2"),
            ("d8", "d7"),
        ],
    );
    assert!(game.is_tile_occupied(sq("b1")));
    assert!(!game.is_tile_occupied(sq("c1")));
    assert!(!game.is_tile_occupied(sq("d1")));
    assert!(!game
        .possible_actions(sq("e1"))
        .iter()
        .any(|a| a.kind().is_castling()));

    play_all(&mut game, &[("b1", "c3"), ("b8", "c6")]);
    assert!(matches!(
        find(&game, "e1", "c1").kind(),
        ActionKind::CastlingLong { .. }
    ));
}

#[test]
/// Test that en passant is offered right after a double step, and removes the
/// pawn which made it.
fn en_passant() {
    let mut game = ChessGame::default();
    play_all(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
    assert!(matches!(
        game.last_action().unwrap().kind(),
        ActionKind::DoubleStep(_)
    ));

    let capture = find(&game, "e5", "d6");
    assert!(matches!(
        capture.kind(),
        ActionKind::EnPassant { victim, .. } if victim.piece_id() == 19
    ));
    game.move_piece(capture).unwrap();
    assert_eq!(last_notation(&game), "exd6 e.p.");
    assert!(!game.find_piece_by_id(19).unwrap().is_on_board());
    assert!(game.find_piece_by_position(sq("d5")).is_none());

    game.go_to_action(Some(3)).unwrap();
    assert_eq!(game.find_piece_by_id(19).unwrap().position(), sq("d5"));
    assert_eq!(game.find_piece_by_id(4).unwrap().position(), sq("e5"));
}

#[test]
/// Test that en passant is only available immediately after the double step.
fn en_passant_expires() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("e2", "e4"),
            ("a7", "a6"),
            ("e4", "e5"),
            ("d7", "d5"),
            ("h2", "h3"),
            ("a6", "a5"),
        ],
    );
    assert!(!game
        .possible_actions(sq("e5"))
        .iter()
        .any(|a| matches!(a.kind(), ActionKind::EnPassant { .. })));
}

/// Play the opening in which White's a-pawn captures its way to b7, leaving
/// it ready to promote.
fn promotion_game() -> ChessGame {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("a2", "a4"),
            ("b7", "b5"),
            ("a4", "b5"),
            ("a7", "a6"),
            ("b5", "a6"),
            ("c8", "b7"),
            ("a6", "b7"),
            ("b8", "c6"),
        ],
    );
    game
}

#[test]
/// Test that a pawn reaching the last rank asks for a promotion, and that
/// the promotion is recorded on the action.
fn promote_after_capture() {
    let mut game = promotion_game();
    let mut promotions: Vec<bool> = game
        .possible_actions(sq("b7"))
        .iter()
        .map(ChessAction::is_promotion)
        .collect();
    promotions.dedup();
    assert_eq!(promotions, vec![true]);

    game.clear_events();
    play(&mut game, "b7", "a8");
    assert!(game
        .pending_events()
        .iter()
        .any(|e| matches!(e, GameEvent::PawnPromotionRequested(p) if p.id() == 0)));
    assert_eq!(last_notation(&game), "bxa8");

    game.clear_events();
    game.promote_pawn(0, PieceType::Queen).unwrap();
    assert_eq!(game.find_piece_by_id(0).unwrap().kind(), PieceType::Queen);
    assert_eq!(
        game.last_action().unwrap().promotion_type(),
        Some(PieceType::Queen)
    );
    assert_eq!(last_notation(&game), "bxa8=Q");
    assert!(game
        .pending_events()
        .iter()
        .any(|e| matches!(e, GameEvent::ActionUpdated { color: Color::White, .. })));

    // earlier actions of the promoted piece are still written as pawn moves
    assert_eq!(
        game.action_notation(game.find_action_by_id(2).unwrap()),
        "axb5"
    );
    assert_eq!(game.repetitions(&game.snapshot()), 1);
}

#[test]
/// Test that rolling back a promotion turns the piece back into a pawn, and
/// replaying it promotes it again.
fn time_travel_through_promotion() {
    let mut game = promotion_game();
    play(&mut game, "b7", "b8");
    game.promote_pawn(0, PieceType::Knight).unwrap();
    assert_eq!(last_notation(&game), "b8=N");

    game.go_to_action(Some(7)).unwrap();
    let pawn = game.find_piece_by_id(0).unwrap();
    assert_eq!(pawn.kind(), PieceType::Pawn);
    assert_eq!(pawn.position(), sq("b7"));

    game.go_to_action(Some(8)).unwrap();
    let knight = game.find_piece_by_id(0).unwrap();
    assert_eq!(knight.kind(), PieceType::Knight);
    assert_eq!(knight.position(), sq("b8"));
}

#[test]
/// Test that a position occurring for the third time draws the game.
fn threefold_repetition() {
    let mut game = ChessGame::default();
    let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    play_all(&mut game, &shuffle);
    play_all(&mut game, &shuffle);
    assert_eq!(game.status(), GameStatus::Ongoing);

    play(&mut game, "g1", "f3");
    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.result(), Some(GameResult::DrawByThreefoldRepetition));
    assert_eq!(game.repetitions(&game.snapshot()), 3);
    assert!(game.possible_actions(sq("g8")).is_empty());

    let before = game.snapshot();
    let knight = ChessAction::basic_move(9, Move::new(27, sq("g8"), sq("f6")), false);
    assert_eq!(game.move_piece(knight), Err(GameError::GameOver));
    assert_eq!(game.snapshot(), before);

    // rewinding one action reopens the game
    game.go_to_action(Some(7)).unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.result(), None);
    assert_eq!(game.repetitions(&before), 2);

    game.clear_events();
    play(&mut game, "b1", "c3");
    assert_eq!(game.action_count(), 9);
    assert!(game.pending_events().iter().any(|e| matches!(
        e,
        GameEvent::ActionRemoved { color: Color::White, action } if action.id() == 8
    )));
    assert_eq!(game.repetitions(&before), 2);
}

#[test]
/// Test that the fifty-move counter only counts Black's quiet moves and is
/// reset by pawn moves.
fn fifty_move_counter() {
    let mut game = ChessGame::default();
    play(&mut game, "g1", "f3");
    assert_eq!(game.fifty_move_counter(), 0);
    play(&mut game, "g8", "f6");
    assert_eq!(game.fifty_move_counter(), 1);
    play(&mut game, "b1", "c3");
    play(&mut game, "b8", "c6");
    assert_eq!(game.fifty_move_counter(), 2);
    play(&mut game, "e2", "e4");
    assert_eq!(game.fifty_move_counter(), 0);
    play(&mut game, "a8", "b8");
    assert_eq!(game.fifty_move_counter(), 1);

    game.go_to_action(Some(3)).unwrap();
    assert_eq!(game.fifty_move_counter(), 2);
    game.go_to_action(Some(5)).unwrap();
    assert_eq!(game.fifty_move_counter(), 1);
}

#[test]
/// Test that the fifty-move rule draws the game when its limit is reached.
fn fifty_move_draw() {
    let config = GameConfig {
        fifty_move_limit: 2,
        ..GameConfig::default()
    };
    let mut game = ChessGame::with_config(StandardBoard, config);
    play_all(&mut game, &[("g1", "f3"), ("g8", "f6"), ("b1", "c3")]);
    assert_eq!(game.status(), GameStatus::Ongoing);
    play(&mut game, "b8", "c6");
    assert_eq!(game.result(), Some(GameResult::DrawByFiftyMoveRule));
    assert!(game.legal_actions().is_empty());
}

#[test]
/// Test that a capture resets the fifty-move counter.
fn capture_resets_fifty_move_counter() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[("g1", "f3"), ("b8", "c6"), ("b1", "c3"), ("c6", "d4")],
    );
    assert_eq!(game.fifty_move_counter(), 2);
    play(&mut game, "f3", "d4");
    assert_eq!(game.fifty_move_counter(), 0);
}

#[test]
/// Test the quickest known stalemate.
fn stalemate() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[
            ("e2", "e3"),
            ("a7", "a5"),
            ("d1", "h5"),
            ("a8", "a6"),
            ("h5", "a5"),
            ("h7", "h5"),
            ("h2", "h4"),
            ("a6", "h6"),
            ("a5", "c7"),
            ("f7", "f6"),
            ("c7", "d7"),
            ("e8", "f7"),
            ("d7", "b7"),
            ("d8", "d3"),
            ("b7", "b8"),
            ("d3", "h7"),
            ("b8", "c8"),
            ("f7", "g6"),
        ],
    );
    assert_eq!(game.status(), GameStatus::Ongoing);
    play(&mut game, "c8", "e6");
    assert_eq!(game.result(), Some(GameResult::DrawByStalemate));
    assert!(!game.last_action().unwrap().is_check());
    assert!(!game.is_in_check(Color::Black));
    assert_eq!(last_notation(&game), "Qe6");
}

#[test]
/// Test that invalid time travel is rejected.
fn time_travel_errors() {
    let mut game = ChessGame::default();
    assert_eq!(game.go_to_action(None), Err(GameError::AlreadyAtAction));
    assert_eq!(game.go_to_action(Some(0)), Err(GameError::ActionOutOfRange(0)));
    play(&mut game, "e2", "e4");
    assert_eq!(game.go_to_action(Some(0)), Err(GameError::AlreadyAtAction));
    assert_eq!(game.go_to_action(Some(1)), Err(GameError::ActionOutOfRange(1)));
    assert_eq!(game.go_to_action(None), Ok(()));
    assert_eq!(game.go_to_action(Some(0)), Ok(()));
}

#[test]
/// Test that traveling back to a checkmate restores the finished game.
fn time_travel_restores_game_over() {
    let mut game = ChessGame::default();
    play_all(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    game.go_to_action(Some(1)).unwrap();
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert_eq!(game.current_turn(), Color::White);
    assert_eq!(game.find_piece_by_id(30).unwrap().position(), sq("d8"));

    game.clear_events();
    game.go_to_action(Some(3)).unwrap();
    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.result(), Some(GameResult::BlackWin));
    assert_eq!(game.current_turn(), Color::White);
    assert!(game
        .pending_events()
        .iter()
        .any(|e| matches!(e, GameEvent::KingChecked { .. })));
    assert!(game
        .pending_events()
        .contains(&GameEvent::GameOver(GameResult::BlackWin)));
}

#[test]
/// Test the layout of a snapshot of the starting position.
fn starting_snapshot() {
    let game = ChessGame::default();
    let snapshot = game.snapshot();
    assert!(snapshot.starts_with("Ra1Nb1Bc1Qd1Ke1Bf1Ng1Rh1a2b2c2d2e2f2g2h2a7"));
    assert!(snapshot.ends_with("h7Ra8Nb8Bc8Qd8Ke8Bf8Ng8Rh8"));
    assert_eq!(game.repetitions(&snapshot), 0);
}

#[test]
/// Test the move list written by `Display`.
fn display_move_list() {
    let mut game = ChessGame::default();
    play_all(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
    assert_eq!(game.to_string(), "1. e4 e5 2. Nf3 ");
    game.go_to_action(Some(0)).unwrap();
    assert_eq!(game.to_string(), "1. e4 ");
    assert_eq!(game.actions().len(), 3);
}

#[test]
/// Test that queries about tiles far off the board find nothing instead of
/// overflowing.
fn off_board_queries() {
    let game = ChessGame::default();
    let far = [
        Position::new(i8::MIN, 2),
        Position::new(i8::MAX, i8::MAX),
        Position::new(i8::MIN, i8::MIN),
        Position::NONE,
    ];
    for tile in far {
        assert!(game.find_pieces_who_can_attack(tile, Color::White).is_empty());
        assert!(game.find_pieces_who_can_attack(tile, Color::Black).is_empty());
        assert!(!game.is_tile_under_attack(tile, Color::White));
        assert!(game.possible_actions(tile).is_empty());
        assert!(game.find_piece_by_position(tile).is_none());
        assert_eq!(game.tile_notation(tile), "");
        for piece in game.pieces(Color::White) {
            assert!(!piece.can_attack_tile(&game, tile));
        }
    }
    assert!(game.surrounding_tiles(Position::new(i8::MAX, 0)).is_empty());
    assert!(game.l_shape_tiles(Position::new(i8::MIN, i8::MAX)).is_empty());
}

#[test]
/// Test that promoting a pawn other than the one which just moved is undone
/// and redone by time travel along with the action it followed.
fn promotion_of_idle_pawn_follows_history() {
    let mut game = ChessGame::default();
    let initial = game.snapshot();
    play(&mut game, "e2", "e4");
    game.promote_pawn(0, PieceType::Queen).unwrap();
    let promoted = game.snapshot();
    assert!(promoted.contains("Qa2"));
    assert_eq!(game.repetitions(&promoted), 1);
    assert_eq!(game.last_action().unwrap().promotion_type(), None);
    assert_eq!(last_notation(&game), "e4");

    game.go_to_action(None).unwrap();
    assert_eq!(game.find_piece_by_id(0).unwrap().kind(), PieceType::Pawn);
    assert_eq!(game.snapshot(), initial);
    assert_eq!(game.repetitions(&promoted), 0);

    game.go_to_action(Some(0)).unwrap();
    assert_eq!(game.find_piece_by_id(0).unwrap().kind(), PieceType::Queen);
    assert_eq!(game.snapshot(), promoted);
    assert_eq!(game.repetitions(&promoted), 1);
}

#[test]
/// Test that promoting the pawn which just moved, without a promotion, is
/// recorded on its action but does not change how the action is written.
fn promotion_of_acting_pawn_off_the_last_rank() {
    let mut game = ChessGame::default();
    play(&mut game, "e2", "e4");
    game.promote_pawn(4, PieceType::Rook).unwrap();
    assert_eq!(
        game.last_action().unwrap().promotion_type(),
        Some(PieceType::Rook)
    );
    assert_eq!(last_notation(&game), "e4");

    game.go_to_action(None).unwrap();
    let pawn = game.find_piece_by_id(4).unwrap();
    assert_eq!(pawn.kind(), PieceType::Pawn);
    assert_eq!(pawn.position(), sq("e2"));
}

#[test]
/// Test that promoting while rewound discards the actions after the current
/// one.
fn promotion_while_rewound_discards_future() {
    let mut game = ChessGame::default();
    play_all(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    game.go_to_action(Some(0)).unwrap();
    game.clear_events();

    game.promote_pawn(0, PieceType::Bishop).unwrap();
    assert_eq!(game.action_count(), 1);
    assert!(game.pending_events().iter().any(|e| matches!(
        e,
        GameEvent::ActionRemoved { color: Color::Black, action } if action.id() == 1
    )));
    assert_eq!(game.go_to_action(Some(1)), Err(GameError::ActionOutOfRange(1)));
}

/// The state of every piece and counter which time travel must restore.
fn state(game: &ChessGame) -> (String, Vec<Piece>, u32, u32) {
    let snapshot = game.snapshot();
    let pieces = game
        .pieces(Color::White)
        .iter()
        .chain(game.pieces(Color::Black))
        .copied()
        .collect();
    let repetitions = game.repetitions(&snapshot);
    (snapshot, pieces, game.fifty_move_counter(), repetitions)
}

#[test]
/// Test that rewinding a random game to the start and replaying it, either by
/// time travel or by playing the same actions again, reproduces every
/// intermediate state exactly.
fn random_playout_round_trip() {
    for seed in 0..8 {
        let rng = fastrand::Rng::with_seed(seed);
        let mut game = ChessGame::default();
        let initial = state(&game);
        let mut history = vec![initial.clone()];
        let mut played = Vec::new();

        for _ in 0..80 {
            let actions = game.legal_actions();
            if actions.is_empty() {
                break;
            }
            let action = actions[rng.usize(..actions.len())];
            game.move_piece(action).unwrap();
            let promotion = if game
                .pending_events()
                .iter()
                .any(|e| matches!(e, GameEvent::PawnPromotionRequested(_)))
            {
                let kind = PieceType::PROMOTION_TYPES[rng.usize(..4)];
                game.promote_pawn(action.primary_move().piece_id(), kind).unwrap();
                Some(kind)
            } else {
                None
            };
            game.clear_events();
            played.push((action, promotion));
            history.push(state(&game));
        }
        let n = played.len();
        assert!(n > 0);

        game.go_to_action(None).unwrap();
        assert_eq!(state(&game), initial);

        // jump around at random, checking each destination
        for _ in 0..20 {
            let target = rng.usize(..n);
            if game.action_pointer() != Some(target) {
                game.go_to_action(Some(target)).unwrap();
            }
            assert_eq!(state(&game), history[target + 1]);
        }

        game.go_to_action(None).unwrap();
        for (action, promotion) in &played {
            game.move_piece(*action).unwrap();
            if let Some(kind) = promotion {
                game.promote_pawn(action.primary_move().piece_id(), *kind).unwrap();
            }
        }
        assert_eq!(game.action_count(), n);
        assert_eq!(state(&game), history[n]);
    }
}
