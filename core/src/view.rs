// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render-ready board description.
//!
//! The front-end draws exactly what a [`BoardView`] says; it makes no chess
//! decisions of its own.

use crate::assets::{ImageRef, PieceImages};
use crate::input::Selection;
use crate::snapshot::BoardSnapshot;
use crate::{Color, Piece, Square};

/// Which way the board faces. The side to move is always at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    bottom: Color,
}

impl Orientation {
    pub fn for_color(bottom: Color) -> Self {
        Self { bottom }
    }

    /// Color whose pieces start at the bottom edge
    pub fn bottom(&self) -> Color {
        self.bottom
    }

    /// Square shown at display `row` (0 = top) and `col` (0 = left)
    pub fn square_at(&self, row: u8, col: u8) -> Option<Square> {
        if row >= 8 || col >= 8 {
            return None;
        }
        match self.bottom {
            Color::White => Square::new(col, 7 - row),
            Color::Black => Square::new(7 - col, row),
        }
    }

    /// Display (row, col) of `square`
    pub fn position_of(&self, square: Square) -> (u8, u8) {
        match self.bottom {
            Color::White => (7 - square.rank(), square.file()),
            Color::Black => (square.rank(), 7 - square.file()),
        }
    }

    /// Rank digits top to bottom
    pub fn ranks(&self) -> [char; 8] {
        std::array::from_fn(|row| {
            self.square_at(row as u8, 0)
                .map(|sq| sq.rank_char())
                .unwrap_or('?')
        })
    }

    /// File letters left to right
    pub fn files(&self) -> [char; 8] {
        std::array::from_fn(|col| {
            self.square_at(0, col as u8)
                .map(|sq| sq.file_char())
                .unwrap_or('?')
        })
    }
}

/// Square background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// Everything needed to draw one square
#[derive(Debug, Clone, PartialEq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<Piece>,
    pub image: Option<ImageRef>,
    pub shade: Shade,
    pub selected: bool,
    /// Source or destination of the previous move
    pub last_move: bool,
    /// King of the side to move, in check
    pub in_check: bool,
    /// File letter, drawn on rank-1 squares
    pub file_label: Option<char>,
    /// Rank digit, drawn on a-file squares
    pub rank_label: Option<char>,
}

/// The full board as it should appear
#[derive(Debug, Clone)]
pub struct BoardView {
    pub orientation: Orientation,
    /// 64 squares, row-major from the top-left corner
    pub squares: Vec<SquareView>,
    pub status_line: String,
    pub banner: Option<&'static str>,
}

impl BoardView {
    pub fn build(
        snapshot: &BoardSnapshot,
        active: Color,
        selection: Selection,
        images: &PieceImages,
    ) -> Self {
        let orientation = Orientation::for_color(active);
        let checked_king = if snapshot.is_check() {
            snapshot.king_square(snapshot.side_to_move())
        } else {
            None
        };
        let last_move = snapshot.last_move().map(|m| (m.from, m.to));

        let mut squares = Vec::with_capacity(64);
        for row in 0..8u8 {
            for col in 0..8u8 {
                let Some(square) = orientation.square_at(row, col) else {
                    continue;
                };
                let piece = snapshot.piece_at(square);
                squares.push(SquareView {
                    square,
                    piece,
                    image: piece.map(|p| images.get(p).clone()),
                    // Parity of the display position, invariant under the flip
                    shade: if (row + col) % 2 == 1 {
                        Shade::Dark
                    } else {
                        Shade::Light
                    },
                    selected: selection.square() == Some(square),
                    last_move: last_move.is_some_and(|(from, to)| square == from || square == to),
                    in_check: checked_king == Some(square),
                    file_label: (square.rank() == 0).then(|| square.file_char()),
                    rank_label: (square.file() == 0).then(|| square.rank_char()),
                });
            }
        }

        Self {
            orientation,
            squares,
            status_line: status_line(snapshot),
            banner: termination_banner(snapshot),
        }
    }

    /// Squares of display row `row`, left to right
    pub fn row(&self, row: usize) -> &[SquareView] {
        let start = (row * 8).min(self.squares.len());
        let end = (start + 8).min(self.squares.len());
        &self.squares[start..end]
    }

    pub fn get(&self, square: Square) -> Option<&SquareView> {
        self.squares.iter().find(|view| view.square == square)
    }
}

/// End-of-game message, `None` while the game is on
pub fn termination_banner(snapshot: &BoardSnapshot) -> Option<&'static str> {
    if !snapshot.is_game_over() {
        None
    } else if snapshot.is_checkmate() {
        Some("Checkmate!")
    } else if snapshot.is_draw() {
        Some("Draw!")
    } else {
        Some("Game Over!")
    }
}

/// Whose turn it is, with a check marker
pub fn status_line(snapshot: &BoardSnapshot) -> String {
    let mut line = format!("{} to move", snapshot.side_to_move());
    if snapshot.is_check() {
        line.push_str(" - check");
    }
    line
}
