// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game status display

use chessboard_core::{BoardView, MoveRecord};
use egui::{RichText, Ui};

/// Side panel with the status line, current FEN and move list
pub struct StatusPanel;

impl StatusPanel {
    pub fn render(ui: &mut Ui, view: &BoardView, fen: &str, history: &[MoveRecord]) {
        ui.heading(&view.status_line);
        ui.separator();

        ui.label("Position");
        ui.add(egui::Label::new(RichText::new(fen).monospace().small()).wrap(true));
        if ui.small_button("Copy FEN").clicked() {
            ui.output_mut(|o| o.copied_text = fen.to_string());
        }

        ui.separator();
        ui.label(format!("Moves: {}", history.len()));

        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .show(ui, |ui| {
                egui::Grid::new("move_history").striped(true).show(ui, |ui| {
                    for (number, pair) in history.chunks(2).enumerate() {
                        ui.label(format!("{}.", number + 1));
                        for record in pair {
                            ui.monospace(record.uci());
                        }
                        ui.end_row();
                    }
                });
            });
    }
}
