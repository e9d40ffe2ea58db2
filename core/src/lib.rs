// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chessboard Core - Board State and Move Input
//!
//! This crate provides the GUI-independent half of the chessboard:
//! - Chess vocabulary (squares, pieces, colors)
//! - An adapter over the `shakmaty` rules engine
//! - The board state holder and the gesture state machine
//! - A render-ready view model of the board

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod assets;
pub mod engine;
pub mod input;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod view;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Player color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// White player (moves first)
    White,
    /// Black player
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The rank a pawn of this color promotes on
    pub fn promotion_rank(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Every piece kind, pawn first
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase letter used by UCI promotions and image names
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece of a given kind and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board square, file a..h by rank 1..8 stored zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    /// File index, 0 = a
    file: u8,
    /// Rank index, 0 = rank 1
    rank: u8,
}

impl Square {
    /// Create a square from zero-based file and rank indices
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// File index, 0 = a
    pub fn file(&self) -> u8 {
        self.file
    }

    /// Rank index, 0 = rank 1
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// File letter a..h
    pub fn file_char(&self) -> char {
        (b'a' + self.file) as char
    }

    /// Rank digit 1..8
    pub fn rank_char(&self) -> char {
        (b'1' + self.rank) as char
    }

    /// All 64 squares, a1 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = MoveRejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(MoveRejected::MalformedSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank).ok_or_else(|| MoveRejected::MalformedSquare(s.to_string()))
    }
}

/// Reasons a move attempt is turned down
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    /// Nothing stands on the source square
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The source piece belongs to the side not on move
    #[error("piece on {square} is {color}, not the side to move")]
    WrongColor { square: Square, color: Color },

    /// The rules engine refused the move
    #[error("illegal move {from}{to}: {reason}")]
    Illegal {
        from: Square,
        to: Square,
        reason: String,
    },

    /// A square name could not be parsed
    #[error("malformed square {0:?}")]
    MalformedSquare(String),
}

/// Errors raised while building a position from text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The text is not valid FEN
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The FEN parses but describes an impossible position
    #[error("illegal position: {0}")]
    IllegalPosition(String),
}

pub use assets::{ImageRef, PieceImages};
pub use engine::ChessEngine;
pub use input::{Gesture, InputReconciler, Outcome, Selection};
pub use session::Session;
pub use snapshot::{BoardSnapshot, DrawReason, GameStatus, MoveRecord};
pub use state::BoardState;
pub use view::{BoardView, Orientation, Shade, SquareView};
