// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board rendering logic

use crate::ui_config::{create_font_id, BoardConfig};
use chessboard_core::{BoardView, ImageRef, Shade, Square, SquareView};
use egui::{Align2, Color32, Image, Pos2, Rect, Stroke, Ui, Vec2};

/// A piece following the pointer
#[derive(Debug, Clone, Copy)]
pub struct DragPreview<'a> {
    pub source: Square,
    pub image: &'a ImageRef,
    pub pos: Pos2,
    /// Square the piece would drop on
    pub over: Option<Square>,
}

/// Board renderer component
pub struct BoardRenderer {
    config: BoardConfig,
}

impl BoardRenderer {
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Outer edge length (border included) that fits in `available`
    pub fn desired_size(&self, available: Vec2) -> f32 {
        let border = self.config.border_width * 2.0;
        let square = ((available.min_elem() - border) / 8.0).clamp(16.0, self.config.max_square_size);
        square * 8.0 + border
    }

    /// The 8x8 area inside the border
    pub fn board_rect(&self, outer: Rect) -> Rect {
        outer.shrink(self.config.border_width)
    }

    /// Render the board
    pub fn render(&self, ui: &Ui, outer: Rect, view: &BoardView, drag: Option<DragPreview<'_>>) {
        let painter = ui.painter_at(outer);
        let board_rect = self.board_rect(outer);

        painter.rect_filled(outer, 0.0, Color32::from(self.config.border_color));

        for square in &view.squares {
            let rect = super::square_to_rect(square.square, board_rect, view.orientation);
            let dragged = drag.is_some_and(|d| d.source == square.square);
            let drop_target = drag.and_then(|d| d.over) == Some(square.square);
            self.render_square(ui, &painter, rect, square, dragged, drop_target);
        }

        if let Some(drag) = drag {
            let cell = board_rect.width() / 8.0;
            let rect = Rect::from_center_size(drag.pos, Vec2::splat(cell * self.config.piece_scale));
            Image::new(drag.image.as_str()).paint_at(ui, rect);
        }
    }

    fn render_square(
        &self,
        ui: &Ui,
        painter: &egui::Painter,
        rect: Rect,
        square: &SquareView,
        dragged: bool,
        drop_target: bool,
    ) {
        let cfg = &self.config;
        let background = match square.shade {
            Shade::Light => cfg.light_square,
            Shade::Dark => cfg.dark_square,
        };
        painter.rect_filled(rect, 0.0, Color32::from(background));

        if square.last_move {
            painter.rect_filled(rect, 0.0, Color32::from(cfg.last_move_color));
        }
        if square.in_check {
            painter.circle_filled(rect.center(), rect.width() * 0.45, Color32::from(cfg.check_color));
        }

        if cfg.show_coordinates {
            self.render_labels(painter, rect, square);
        }

        if let Some(image) = &square.image {
            let piece_rect = Rect::from_center_size(rect.center(), rect.size() * cfg.piece_scale);
            let mut piece = Image::new(image.as_str());
            if dragged {
                // The original stays put, faded, while its copy follows the pointer
                piece = piece.tint(Color32::from_white_alpha(110));
            }
            piece.paint_at(ui, piece_rect);
        }

        if square.selected {
            let width = cfg.selection_width;
            painter.rect_stroke(
                rect.shrink(width / 2.0),
                0.0,
                Stroke::new(width, Color32::from(cfg.selection_color)),
            );
        } else if drop_target {
            painter.rect_stroke(
                rect.shrink(1.5),
                0.0,
                Stroke::new(3.0, Color32::from(cfg.drop_target_color)),
            );
        }
    }

    fn render_labels(&self, painter: &egui::Painter, rect: Rect, square: &SquareView) {
        let font = create_font_id(self.config.label_font_size);
        let color = Color32::from(self.config.label_color);
        let inset = rect.width() * 0.05;

        if let Some(file) = square.file_label {
            painter.text(
                rect.left_bottom() + Vec2::new(inset, -inset * 0.5),
                Align2::LEFT_BOTTOM,
                file,
                font.clone(),
                color,
            );
        }
        if let Some(rank) = square.rank_label {
            painter.text(
                rect.right_top() + Vec2::new(-inset, inset * 0.5),
                Align2::RIGHT_TOP,
                rank,
                font,
                color,
            );
        }
    }
}
