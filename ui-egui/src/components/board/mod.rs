// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board rendering components

mod interaction;
mod renderer;

pub use interaction::{release_gesture, BoardInteraction};
pub use renderer::{BoardRenderer, DragPreview};

use chessboard_core::{Orientation, Square};
use egui::{Pos2, Rect, Vec2};

/// Screen rectangle of `square` inside `board_rect` (the 8x8 area, border excluded)
pub fn square_to_rect(square: Square, board_rect: Rect, orientation: Orientation) -> Rect {
    let cell = board_rect.width() / 8.0;
    let (row, col) = orientation.position_of(square);
    Rect::from_min_size(
        board_rect.min + Vec2::new(col as f32 * cell, row as f32 * cell),
        Vec2::splat(cell),
    )
}

/// Square under screen position `pos`, if it lies on the board
pub fn pos_to_square(pos: Pos2, board_rect: Rect, orientation: Orientation) -> Option<Square> {
    if !board_rect.contains(pos) {
        return None;
    }

    let cell = board_rect.width() / 8.0;
    let rel = pos - board_rect.min;
    let col = (rel.x / cell).floor().clamp(0.0, 7.0) as u8;
    let row = (rel.y / cell).floor().clamp(0.0, 7.0) as u8;
    orientation.square_at(row, col)
}
