// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable board snapshots

use crate::engine::ChessEngine;
use crate::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a game ended in a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    /// Fifty moves by each side without a capture or pawn move
    FiftyMoves,
    /// Same position three times
    Repetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMoves => "fifty-move rule",
            DrawReason::Repetition => "threefold repetition",
        })
    }
}

/// Termination state of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

/// A move accepted by the rules engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece that moved, before any promotion
    pub piece: Piece,
    pub promotion: Option<PieceKind>,
    pub captured: Option<Piece>,
}

impl MoveRecord {
    /// Long algebraic form, e.g. `e2e4` or `e7e8q`
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.letter()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uci())
    }
}

/// A fully specified position as reported by the rules engine.
///
/// Snapshots are never edited: an accepted move produces a new one that
/// replaces the old wholesale.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    engine: ChessEngine,
    status: GameStatus,
    in_check: bool,
    fen: String,
    last_move: Option<MoveRecord>,
}

impl BoardSnapshot {
    /// Capture the engine's current verdicts
    pub fn new(engine: ChessEngine, last_move: Option<MoveRecord>) -> Self {
        let status = if engine.is_checkmate() {
            GameStatus::Checkmate {
                winner: engine.side_to_move().opposite(),
            }
        } else if let Some(reason) = engine.draw_reason() {
            GameStatus::Draw(reason)
        } else {
            GameStatus::Ongoing
        };
        let in_check = engine.is_check();
        let fen = engine.fen();

        Self {
            engine,
            status,
            in_check,
            fen,
            last_move,
        }
    }

    /// Rules engine state behind this snapshot
    pub fn engine(&self) -> &ChessEngine {
        &self.engine
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.engine.piece_at(square)
    }

    pub fn side_to_move(&self) -> Color {
        self.engine.side_to_move()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_check(&self) -> bool {
        self.in_check
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate { .. })
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.status, GameStatus::Draw(_))
    }

    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// The move that produced this position
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Square of the king of `color`
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|sq| self.piece_at(*sq) == Some(king))
    }

    /// Every occupied square with its piece
    pub fn pieces(&self) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
            .collect()
    }
}
