// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board interaction handling
//!
//! Maps egui pointer events on the board to [`Gesture`]s. Decisions about
//! what a gesture means are left to the session.

use chessboard_core::{Gesture, Orientation, Square};
use egui::{Pos2, Rect, Sense, Ui};

/// Board interaction handler
#[derive(Debug, Default)]
pub struct BoardInteraction {
    /// Square under the pointer
    hover: Option<Square>,
    /// Last square a drag-over was reported for
    drag_over: Option<Square>,
    /// Pointer position while a piece is being dragged
    drag_pos: Option<Pos2>,
}

impl BoardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle board interaction for one frame.
    ///
    /// `drag_source` is the session's current drag source; a pointer release
    /// only completes a drag when one is recorded.
    pub fn handle_interaction(
        &mut self,
        ui: &Ui,
        board_rect: Rect,
        orientation: Orientation,
        drag_source: Option<Square>,
    ) -> Vec<Gesture> {
        let response = ui.interact(board_rect, ui.id().with("board"), Sense::click_and_drag());
        let to_square = |pos: Pos2| super::pos_to_square(pos, board_rect, orientation);
        let mut gestures = Vec::new();

        self.hover = response.hover_pos().and_then(to_square);

        if response.clicked() {
            if let Some(square) = response.interact_pointer_pos().and_then(to_square) {
                gestures.push(Gesture::Click(square));
            }
        }

        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let Some(square) = origin.and_then(to_square) {
                gestures.push(Gesture::DragStart(square));
            }
        }

        if drag_source.is_some() {
            let pointer = ui.input(|i| i.pointer.interact_pos());
            self.drag_pos = pointer;

            let over = pointer.and_then(to_square);
            if over != self.drag_over {
                if let Some(square) = over {
                    gestures.push(Gesture::DragOver(square));
                }
            }
            self.drag_over = over;

            // A release can land in the same frame the drag was detected
            if ui.input(|i| i.pointer.any_released() || !i.pointer.any_down()) {
                gestures.push(release_gesture(over));
                self.drag_over = None;
                self.drag_pos = None;
            }
        } else {
            self.drag_over = None;
            self.drag_pos = None;
        }

        gestures
    }

    /// Square under the pointer
    pub fn hover(&self) -> Option<Square> {
        self.hover
    }

    /// Drop target highlighted while dragging
    pub fn drag_over(&self) -> Option<Square> {
        self.drag_over
    }

    /// Where the dragged piece should be drawn
    pub fn drag_pos(&self) -> Option<Pos2> {
        self.drag_pos
    }
}

/// Releasing a dragged piece drops it on the square below, or cancels the
/// drag when the pointer left the board
pub fn release_gesture(target: Option<Square>) -> Gesture {
    match target {
        Some(square) => Gesture::Drop(square),
        None => Gesture::Deselect,
    }
}
