// SPDX-License-Identifier: MIT OR Apache-2.0

//! Piece image lookup

use crate::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default piece set
pub const DEFAULT_PIECE_BASE_URL: &str = "https://www.chess.com/chess-themes/pieces/neo/150";

/// Location of a piece image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Table from (kind, color) to image, one entry per piece
#[derive(Debug, Clone)]
pub struct PieceImages {
    table: [ImageRef; 12],
}

impl Default for PieceImages {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_PIECE_BASE_URL)
    }
}

impl PieceImages {
    /// Images named `{w|b}{p|n|b|r|q|k}.png` under `base_url`
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let table = std::array::from_fn(|slot| {
            let piece = piece_for_slot(slot);
            let color = match piece.color {
                Color::White => 'w',
                Color::Black => 'b',
            };
            ImageRef(format!("{base}/{color}{}.png", piece.kind.letter()))
        });
        Self { table }
    }

    pub fn get(&self, piece: Piece) -> &ImageRef {
        &self.table[slot(piece)]
    }
}

fn slot(piece: Piece) -> usize {
    let color = match piece.color {
        Color::White => 0,
        Color::Black => 1,
    };
    color * PieceKind::ALL.len() + piece.kind as usize
}

fn piece_for_slot(slot: usize) -> Piece {
    let color = if slot < PieceKind::ALL.len() {
        Color::White
    } else {
        Color::Black
    };
    Piece::new(PieceKind::ALL[slot % PieceKind::ALL.len()], color)
}
