// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rules engine adapter
//!
//! Wraps `shakmaty::Chess` behind the handful of operations the board needs.
//! Legality is entirely the engine's call; this module only translates
//! vocabulary and tracks the position history needed for repetition draws.

use crate::snapshot::{DrawReason, MoveRecord};
use crate::{Color, MoveRejected, Piece, PieceKind, PositionError, Square};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Position, Rank, Role};
use tracing::trace;

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// An engine position plus the repetition history leading to it
#[derive(Debug, Clone)]
pub struct ChessEngine {
    pos: Chess,
    /// Repetition keys of every position reached so far, current one last
    seen: Vec<String>,
}

impl Default for ChessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessEngine {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Build a position from FEN text
    pub fn from_fen(text: &str) -> Result<Self, PositionError> {
        let fen: Fen = text
            .trim()
            .parse()
            .map_err(|e| PositionError::InvalidFen(format!("{e}")))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| PositionError::IllegalPosition(format!("{e}")))?;
        Ok(Self::from_position(pos))
    }

    fn from_position(pos: Chess) -> Self {
        let seen = vec![repetition_key(&pos)];
        Self { pos, seen }
    }

    /// The piece standing on `square`, if any
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pos.board().piece_at(to_engine_square(square)).map(from_engine_piece)
    }

    /// Side to move
    pub fn side_to_move(&self) -> Color {
        from_engine_color(self.pos.turn())
    }

    /// Try to play `from -> to`, returning the resulting position.
    ///
    /// `promotion` is the piece requested when a pawn reaches the last rank;
    /// it must be `None` for every other move.
    pub fn attempt_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(Self, MoveRecord), MoveRejected> {
        let piece = self.piece_at(from).ok_or(MoveRejected::EmptySquare(from))?;
        if piece.color != self.side_to_move() {
            return Err(MoveRejected::WrongColor {
                square: from,
                color: piece.color,
            });
        }

        let uci = UciMove::Normal {
            from: to_engine_square(from),
            to: to_engine_square(to),
            promotion: promotion.map(to_engine_role),
        };
        let illegal = |reason: String| MoveRejected::Illegal { from, to, reason };

        let m = uci.to_move(&self.pos).map_err(|e| illegal(format!("{e}")))?;
        let captured = m
            .capture()
            .map(|role| Piece::new(from_engine_role(role), piece.color.opposite()));
        let promoted = m.promotion().map(from_engine_role);

        let pos = self
            .pos
            .clone()
            .play(m)
            .map_err(|e| illegal(format!("{e}")))?;
        trace!(%from, %to, "engine accepted move");

        let mut seen = self.seen.clone();
        seen.push(repetition_key(&pos));

        let record = MoveRecord {
            from,
            to,
            piece,
            promotion: promoted,
            captured,
        };
        Ok((Self { pos, seen }, record))
    }

    /// FEN text of the current position
    pub fn fen(&self) -> String {
        Fen::from_position(&self.pos, EnPassantMode::Legal).to_string()
    }

    /// Whether the side to move is in check
    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    /// Why the game is drawn, if it is
    pub fn draw_reason(&self) -> Option<DrawReason> {
        if self.pos.is_checkmate() {
            None
        } else if self.pos.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if self.pos.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if self.pos.halfmoves() >= FIFTY_MOVE_HALFMOVES {
            Some(DrawReason::FiftyMoves)
        } else if self.repetitions() >= 3 {
            Some(DrawReason::Repetition)
        } else {
            None
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// How many times the current position has occurred
    pub fn repetitions(&self) -> usize {
        match self.seen.last() {
            Some(current) => self.seen.iter().filter(|key| *key == current).count(),
            None => 0,
        }
    }
}

/// Placement, side to move, castling rights and en passant square.
/// Move counters are left out so transpositions compare equal.
fn repetition_key(pos: &Chess) -> String {
    let fen = Fen::from_position(&pos.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

fn to_engine_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(
        File::new(u32::from(square.file())),
        Rank::new(u32::from(square.rank())),
    )
}

fn to_engine_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn from_engine_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn from_engine_color(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn from_engine_piece(piece: shakmaty::Piece) -> Piece {
    Piece::new(from_engine_role(piece.role), from_engine_color(piece.color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn starting_position() {
        let engine = ChessEngine::new();
        assert_eq!(engine.side_to_move(), Color::White);
        assert_eq!(
            engine.piece_at(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            engine.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(engine.piece_at(sq("e4")), None);
        assert!(!engine.is_game_over());
        assert_eq!(
            engine.fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn legal_move_produces_new_position() {
        let engine = ChessEngine::new();
        let (next, record) = engine.attempt_move(sq("g1"), sq("f3"), None).unwrap();

        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.piece_at(sq("g1")), None);
        assert_eq!(record.piece, Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(record.captured, None);
        // The original position is untouched
        assert_eq!(engine.side_to_move(), Color::White);
    }

    #[test]
    fn empty_and_wrong_color_sources() {
        let engine = ChessEngine::new();
        assert_eq!(
            engine.attempt_move(sq("e4"), sq("e5"), None).unwrap_err(),
            MoveRejected::EmptySquare(sq("e4"))
        );
        assert_eq!(
            engine.attempt_move(sq("e7"), sq("e5"), None).unwrap_err(),
            MoveRejected::WrongColor {
                square: sq("e7"),
                color: Color::Black
            }
        );
    }

    #[test]
    fn castling_by_king_destination() {
        let engine =
            ChessEngine::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        let (next, _) = engine.attempt_move(sq("e1"), sq("g1"), None).unwrap();
        assert_eq!(
            next.piece_at(sq("f1")),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(
            next.piece_at(sq("g1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn en_passant_capture_is_recorded() {
        let engine =
            ChessEngine::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let (next, record) = engine.attempt_move(sq("e5"), sq("d6"), None).unwrap();
        assert_eq!(next.piece_at(sq("d5")), None);
        assert_eq!(
            record.captured,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
    }

    #[test]
    fn invalid_fen_is_reported() {
        assert!(matches!(
            ChessEngine::from_fen("not a fen"),
            Err(PositionError::InvalidFen(_))
        ));
        // Both kings missing
        assert!(matches!(
            ChessEngine::from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(PositionError::IllegalPosition(_))
        ));
    }

    #[test]
    fn stalemate_and_insufficient_material() {
        let stalemate = ChessEngine::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(stalemate.draw_reason(), Some(DrawReason::Stalemate));
        assert!(stalemate.is_game_over());
        assert!(!stalemate.is_checkmate());

        let bare_kings = ChessEngine::from_fen("8/8/4k3/8/8/3K4/8/8 w - - 0 1").unwrap();
        assert_eq!(
            bare_kings.draw_reason(),
            Some(DrawReason::InsufficientMaterial)
        );
    }

    #[test]
    fn fifty_move_rule() {
        let engine = ChessEngine::from_fen("4k3/8/8/8/8/8/4P3/R3K3 w - - 100 80").unwrap();
        assert_eq!(engine.draw_reason(), Some(DrawReason::FiftyMoves));
    }

    #[test]
    fn threefold_repetition() {
        let mut engine = ChessEngine::new();
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for _ in 0..2 {
            for (from, to) in shuffle {
                assert!(!engine.is_draw());
                engine = engine.attempt_move(sq(from), sq(to), None).unwrap().0;
            }
        }
        assert_eq!(engine.repetitions(), 3);
        assert_eq!(engine.draw_reason(), Some(DrawReason::Repetition));
    }
}
