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

//! Board geometries: dimensions, starting placement, and tile names.

use super::{Color, PieceType, Position};

/// The geometry of a board on which a game is played.
///
/// A `Board` never holds pieces itself.
/// It describes how large the playing area is, where each side's pieces
/// start, and how tiles are named.
pub trait Board {
    /// Get the number of files on this board.
    fn width(&self) -> i8;

    /// Get the number of ranks on this board.
    fn height(&self) -> i8;

    /// Get the name of the file at `x`, or `None` if `x` is off the board.
    fn file_name(&self, x: i8) -> Option<&'static str>;

    /// Get the name of the rank at `y`, or `None` if `y` is off the board.
    fn rank_name(&self, y: i8) -> Option<&'static str>;

    /// Get the starting positions of the pawns of `color`.
    fn pawn_positions(&self, color: Color) -> Vec<Position>;

    /// Get the starting positions of the rooks of `color`.
    fn rook_positions(&self, color: Color) -> Vec<Position>;

    /// Get the starting positions of the knights of `color`.
    fn knight_positions(&self, color: Color) -> Vec<Position>;

    /// Get the starting positions of the bishops of `color`.
    fn bishop_positions(&self, color: Color) -> Vec<Position>;

    /// Get the starting positions of the queens of `color`.
    fn queen_positions(&self, color: Color) -> Vec<Position>;

    /// Get the starting position of the king of `color`.
    fn king_position(&self, color: Color) -> Position;

    /// Get the total number of pieces `color` starts with.
    fn piece_count(&self, color: Color) -> usize {
        self.initial_placement(color).len()
    }

    /// Get every piece `color` starts with, in creation order: pawns, rooks,
    /// knights, bishops, queens, and finally the king.
    fn initial_placement(&self, color: Color) -> Vec<(PieceType, Position)> {
        let mut placement = Vec::new();
        for (kind, positions) in [
            (PieceType::Pawn, self.pawn_positions(color)),
            (PieceType::Rook, self.rook_positions(color)),
            (PieceType::Knight, self.knight_positions(color)),
            (PieceType::Bishop, self.bishop_positions(color)),
            (PieceType::Queen, self.queen_positions(color)),
        ] {
            placement.extend(positions.into_iter().map(|p| (kind, p)));
        }
        placement.push((PieceType::King, self.king_position(color)));

        placement
    }

    /// Determine whether `position` lies on this board.
    fn contains(&self, position: Position) -> bool {
        (0..self.width()).contains(&position.x) && (0..self.height()).contains(&position.y)
    }

    /// Get the name of the tile at `position`, such as `"e4"`.
    /// The name is empty if `position` is not on the board.
    fn notation(&self, position: Position) -> String {
        match (self.file_name(position.x), self.rank_name(position.y)) {
            (Some(file), Some(rank)) => format!("{file}{rank}"),
            _ => String::new(),
        }
    }

    /// Find the position whose tile name is `name`.
    fn parse(&self, name: &str) -> Option<Position> {
        (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| Position::new(x, y)))
            .find(|&p| self.notation(p) == name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The conventional 8x8 chessboard, with files `a` through `h` and ranks `1`
/// through `8`.
///
/// # Examples
///
/// ```
/// use castellan::{Board, Color, Position, StandardBoard};
///
/// let board = StandardBoard;
/// assert_eq!(board.notation(Position::new(4, 3)), "e4");
/// assert_eq!(board.parse("e4"), Some(Position::new(4, 3)));
/// assert_eq!(board.king_position(Color::Black), Position::new(4, 7));
/// assert_eq!(board.piece_count(Color::White), 16);
/// ```
pub struct StandardBoard;

impl StandardBoard {
    const FILES: &'static str = "abcdefgh";
    const RANKS: &'static str = "12345678";

    /// Get the positions on the home rank of `color` at each of the files in
    /// `xs`.
    fn back_rank(color: Color, xs: &[i8]) -> Vec<Position> {
        let y = color.home_rank(8);
        xs.iter().map(|&x| Position::new(x, y)).collect()
    }
}

/// Get the one-character slice of `names` at `index`.
fn name_at(names: &'static str, index: i8) -> Option<&'static str> {
    let i = usize::try_from(index).ok()?;
    names.get(i..=i)
}

impl Board for StandardBoard {
    fn width(&self) -> i8 {
        8
    }

    fn height(&self) -> i8 {
        8
    }

    fn file_name(&self, x: i8) -> Option<&'static str> {
        name_at(StandardBoard::FILES, x)
    }

    fn rank_name(&self, y: i8) -> Option<&'static str> {
        name_at(StandardBoard::RANKS, y)
    }

    fn pawn_positions(&self, color: Color) -> Vec<Position> {
        let y = color.home_rank(8) + color.pawn_direction().dy();
        (0..8).map(|x| Position::new(x, y)).collect()
    }

    fn rook_positions(&self, color: Color) -> Vec<Position> {
        StandardBoard::back_rank(color, &[0, 7])
    }

    fn knight_positions(&self, color: Color) -> Vec<Position> {
        StandardBoard::back_rank(color, &[1, 6])
    }

    fn bishop_positions(&self, color: Color) -> Vec<Position> {
        StandardBoard::back_rank(color, &[2, 5])
    }

    fn queen_positions(&self, color: Color) -> Vec<Position> {
        StandardBoard::back_rank(color, &[3])
    }

    fn king_position(&self, color: Color) -> Position {
        Position::new(4, color.home_rank(8))
    }
}
