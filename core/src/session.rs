// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session: the single entry point the front-end drives

use crate::assets::PieceImages;
use crate::input::{Gesture, InputReconciler, Outcome, Selection};
use crate::snapshot::{BoardSnapshot, MoveRecord};
use crate::state::BoardState;
use crate::view::BoardView;
use crate::{Color, PositionError};
use tracing::info;

/// Board state, gesture state and move history of one game
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: BoardState,
    input: InputReconciler,
    history: Vec<MoveRecord>,
}

impl Session {
    /// New game from the standard starting position
    pub fn new() -> Self {
        Self::default()
    }

    /// New game from a FEN position
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self {
            board: BoardState::from_fen(fen)?,
            ..Self::default()
        })
    }

    /// Handle one gesture. All state changes go through here.
    pub fn dispatch(&mut self, gesture: Gesture) -> Outcome {
        let outcome = self.input.handle(&mut self.board, gesture);
        if let Outcome::Moved(snapshot) = &outcome {
            if let Some(record) = snapshot.last_move() {
                self.history.push(record.clone());
            }
            if snapshot.is_game_over() {
                info!(status = ?snapshot.status(), "game over");
            }
        }
        outcome
    }

    /// Discard the current game and start over
    pub fn reset(&mut self) {
        info!("new game");
        *self = Self::new();
    }

    /// Replace the current game with a FEN position. On error the current
    /// game is kept.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), PositionError> {
        *self = Self::from_fen(fen)?;
        info!(fen, "position loaded");
        Ok(())
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        self.board.snapshot()
    }

    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    pub fn selection(&self) -> Selection {
        self.input.selection()
    }

    pub fn drag_source(&self) -> Option<crate::Square> {
        self.input.drag_source()
    }

    /// Moves accepted since the game started
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Render-ready view of the current state
    pub fn view(&self, images: &PieceImages) -> BoardView {
        BoardView::build(self.snapshot(), self.active_color(), self.selection(), images)
    }
}
