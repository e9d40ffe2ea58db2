// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gesture handling
//!
//! Turns raw pointer gestures into move attempts. Click and drag share one
//! selection, so a piece picked up by either gesture can be completed by the
//! matching follow-up.

use crate::snapshot::BoardSnapshot;
use crate::state::BoardState;
use crate::{MoveRejected, Square};
use tracing::{debug, info, trace};

/// Pointer gestures on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Click(Square),
    DragStart(Square),
    /// Pointer dragged over a square; cosmetic only
    DragOver(Square),
    Drop(Square),
    /// Drop the current selection without attempting a move
    Deselect,
}

/// Selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    PieceSelected(Square),
}

impl Selection {
    pub fn square(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected(sq) => Some(*sq),
        }
    }
}

/// Result of handling one gesture
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// A friendly piece was picked up
    Selected(Square),
    /// The selection was dropped without a move attempt
    Deselected,
    /// The engine accepted the move; carries the new snapshot
    Moved(BoardSnapshot),
    /// The engine refused the move; the board is unchanged
    Rejected(MoveRejected),
}

/// Gesture state machine
#[derive(Debug, Clone, Default)]
pub struct InputReconciler {
    selection: Selection,
    drag_source: Option<Square>,
}

impl InputReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Square a drag started from, while a drag is in progress
    pub fn drag_source(&self) -> Option<Square> {
        self.drag_source
    }

    /// Feed one gesture through the state machine
    pub fn handle(&mut self, board: &mut BoardState, gesture: Gesture) -> Outcome {
        trace!(?gesture, selection = ?self.selection, "gesture");

        match gesture {
            Gesture::Click(square) => match self.selection {
                Selection::Idle => self.pick_up(board, square, false),
                // A click on the selected square is attempted like any other
                Selection::PieceSelected(from) => self.attempt(board, from, square),
            },
            Gesture::DragStart(square) => self.pick_up(board, square, true),
            Gesture::DragOver(_) => Outcome::Ignored,
            Gesture::Drop(square) => match self.drag_source {
                Some(from) => self.attempt(board, from, square),
                None => Outcome::Ignored,
            },
            Gesture::Deselect => {
                if self.selection == Selection::Idle && self.drag_source.is_none() {
                    Outcome::Ignored
                } else {
                    self.reset();
                    Outcome::Deselected
                }
            }
        }
    }

    /// Clear selection and drag source
    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
        self.drag_source = None;
    }

    fn pick_up(&mut self, board: &BoardState, square: Square, dragging: bool) -> Outcome {
        let friendly = board
            .snapshot()
            .piece_at(square)
            .is_some_and(|piece| piece.color == board.active_color());
        if !friendly {
            return Outcome::Ignored;
        }

        debug!(%square, dragging, "piece selected");
        self.selection = Selection::PieceSelected(square);
        if dragging {
            self.drag_source = Some(square);
        }
        Outcome::Selected(square)
    }

    fn attempt(&mut self, board: &mut BoardState, from: Square, to: Square) -> Outcome {
        let result = board.apply_move(from, to);
        self.reset();

        match result {
            Ok(snapshot) => Outcome::Moved(snapshot),
            Err(e) => {
                info!(%from, %to, reason = %e, "invalid move");
                Outcome::Rejected(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn click_on_empty_square_is_ignored() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        assert!(matches!(
            input.handle(&mut board, Gesture::Click(sq("e4"))),
            Outcome::Ignored
        ));
        assert_eq!(input.selection(), Selection::Idle);
    }

    #[test]
    fn click_on_enemy_piece_is_ignored() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        input.handle(&mut board, Gesture::Click(sq("e7")));
        assert_eq!(input.selection(), Selection::Idle);
    }

    #[test]
    fn second_click_on_selected_square_is_a_rejected_attempt() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        input.handle(&mut board, Gesture::Click(sq("e2")));
        assert_eq!(input.selection(), Selection::PieceSelected(sq("e2")));

        let outcome = input.handle(&mut board, Gesture::Click(sq("e2")));
        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert_eq!(input.selection(), Selection::Idle);
        assert_eq!(board.active_color(), Color::White);
    }

    #[test]
    fn drag_over_changes_nothing() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        input.handle(&mut board, Gesture::DragStart(sq("g1")));
        assert!(matches!(
            input.handle(&mut board, Gesture::DragOver(sq("f3"))),
            Outcome::Ignored
        ));
        assert_eq!(input.drag_source(), Some(sq("g1")));
        assert_eq!(input.selection(), Selection::PieceSelected(sq("g1")));
    }

    #[test]
    fn drop_completes_drag() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        input.handle(&mut board, Gesture::DragStart(sq("g1")));
        let outcome = input.handle(&mut board, Gesture::Drop(sq("f3")));

        assert!(matches!(outcome, Outcome::Moved(_)));
        assert_eq!(input.drag_source(), None);
        assert_eq!(input.selection(), Selection::Idle);
        assert_eq!(board.active_color(), Color::Black);
    }

    #[test]
    fn drop_without_drag_source_is_ignored_even_with_click_selection() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        input.handle(&mut board, Gesture::Click(sq("e2")));
        assert!(matches!(
            input.handle(&mut board, Gesture::Drop(sq("e4"))),
            Outcome::Ignored
        ));
        assert_eq!(input.selection(), Selection::PieceSelected(sq("e2")));
        assert_eq!(board.active_color(), Color::White);
    }

    #[test]
    fn click_move_clears_pending_drag_source() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        // Drag picked up but never dropped, then completed by click
        input.handle(&mut board, Gesture::DragStart(sq("e2")));
        input.handle(&mut board, Gesture::Click(sq("e4")));

        assert_eq!(input.drag_source(), None);
        // A stray drop afterwards must not move anything
        assert!(matches!(
            input.handle(&mut board, Gesture::Drop(sq("e5"))),
            Outcome::Ignored
        ));
        assert_eq!(board.active_color(), Color::Black);
    }

    #[test]
    fn deselect() {
        let mut board = BoardState::new();
        let mut input = InputReconciler::new();
        assert!(matches!(
            input.handle(&mut board, Gesture::Deselect),
            Outcome::Ignored
        ));
        input.handle(&mut board, Gesture::DragStart(sq("b1")));
        assert!(matches!(
            input.handle(&mut board, Gesture::Deselect),
            Outcome::Deselected
        ));
        assert_eq!(input.selection(), Selection::Idle);
        assert_eq!(input.drag_source(), None);
    }
}
