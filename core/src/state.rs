// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board state holder

use crate::engine::ChessEngine;
use crate::snapshot::BoardSnapshot;
use crate::{Color, MoveRejected, PieceKind, PositionError, Square};
use tracing::{debug, info};

/// Owns the current snapshot and whose turn it is
#[derive(Debug, Clone)]
pub struct BoardState {
    snapshot: BoardSnapshot,
    active: Color,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Standard starting position, white to move
    pub fn new() -> Self {
        Self::from_engine(ChessEngine::new())
    }

    /// Start from a FEN position; the active color follows the FEN
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self::from_engine(ChessEngine::from_fen(fen)?))
    }

    fn from_engine(engine: ChessEngine) -> Self {
        let snapshot = BoardSnapshot::new(engine, None);
        let active = snapshot.side_to_move();
        Self { snapshot, active }
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Submit `from -> to` to the rules engine.
    ///
    /// Pawns reaching the last rank always promote to a queen. On success the
    /// snapshot is replaced and the active color flips; on failure nothing
    /// changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<BoardSnapshot, MoveRejected> {
        let promotion = self
            .snapshot
            .piece_at(from)
            .filter(|piece| piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank())
            .map(|_| PieceKind::Queen);

        let (engine, record) = match self.snapshot.engine().attempt_move(from, to, promotion) {
            Ok(accepted) => accepted,
            Err(e) => {
                debug!(%from, %to, error = %e, "rules engine rejected move");
                return Err(e);
            }
        };

        info!(mv = %record, by = %self.active, "move accepted");
        self.snapshot = BoardSnapshot::new(engine, Some(record));
        self.active = self.active.opposite();
        debug_assert_eq!(self.active, self.snapshot.side_to_move());

        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceKind};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn accepted_move_flips_active_color() {
        let mut board = BoardState::new();
        let snap = board.apply_move(sq("e2"), sq("e4")).unwrap();

        assert_eq!(board.active_color(), Color::Black);
        assert_eq!(snap.side_to_move(), Color::Black);
        assert_eq!(
            snap.piece_at(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(snap.last_move().map(|m| m.uci()), Some("e2e4".to_string()));
    }

    #[test]
    fn rejected_move_leaves_state_alone() {
        let mut board = BoardState::new();
        let before = board.snapshot().fen().to_string();

        assert!(matches!(
            board.apply_move(sq("e2"), sq("e5")),
            Err(MoveRejected::Illegal { .. })
        ));
        assert_eq!(board.active_color(), Color::White);
        assert_eq!(board.snapshot().fen(), before);
    }

    #[test]
    fn promotion_is_always_a_queen() {
        let mut board = BoardState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let snap = board.apply_move(sq("a7"), sq("a8")).unwrap();
        assert_eq!(
            snap.piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(snap.last_move().and_then(|m| m.promotion), Some(PieceKind::Queen));
    }

    #[test]
    fn black_promotes_on_first_rank() {
        let mut board = BoardState::from_fen("4k3/8/8/8/8/8/6p1/K7 b - - 0 1").unwrap();
        assert_eq!(board.active_color(), Color::Black);
        let snap = board.apply_move(sq("g2"), sq("g1")).unwrap();
        assert_eq!(
            snap.piece_at(sq("g1")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.active_color(), Color::White);
    }
}
