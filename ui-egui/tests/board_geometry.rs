// SPDX-License-Identifier: MIT OR Apache-2.0

use chessboard_core::{Color, Gesture, Orientation, Square};
use chessboard_ui_egui::components::board::{pos_to_square, release_gesture, square_to_rect};
use egui::{pos2, Rect, Vec2};

fn board() -> Rect {
    Rect::from_min_size(pos2(10.0, 20.0), Vec2::splat(800.0))
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn white_at_bottom_puts_a8_top_left() {
    let orientation = Orientation::for_color(Color::White);
    assert_eq!(pos_to_square(pos2(15.0, 25.0), board(), orientation), Some(sq("a8")));
    assert_eq!(pos_to_square(pos2(805.0, 815.0), board(), orientation), Some(sq("h1")));
    assert_eq!(pos_to_square(pos2(460.0, 670.0), board(), orientation), Some(sq("e2")));
}

#[test]
fn black_at_bottom_puts_h1_top_left() {
    let orientation = Orientation::for_color(Color::Black);
    assert_eq!(pos_to_square(pos2(15.0, 25.0), board(), orientation), Some(sq("h1")));
    assert_eq!(pos_to_square(pos2(805.0, 815.0), board(), orientation), Some(sq("a8")));
}

#[test]
fn positions_off_the_board_map_to_nothing() {
    let orientation = Orientation::for_color(Color::White);
    assert_eq!(pos_to_square(pos2(5.0, 100.0), board(), orientation), None);
    assert_eq!(pos_to_square(pos2(100.0, 900.0), board(), orientation), None);
}

#[test]
fn square_rect_center_maps_back_to_the_square() {
    for bottom in [Color::White, Color::Black] {
        let orientation = Orientation::for_color(bottom);
        for square in Square::all() {
            let rect = square_to_rect(square, board(), orientation);
            assert_eq!(rect.width(), 100.0);
            assert_eq!(pos_to_square(rect.center(), board(), orientation), Some(square));
        }
    }
}

#[test]
fn release_drops_on_board_and_cancels_off_it() {
    assert_eq!(release_gesture(Some(sq("e4"))), Gesture::Drop(sq("e4")));
    assert_eq!(release_gesture(None), Gesture::Deselect);
}
