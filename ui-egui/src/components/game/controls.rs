// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game control buttons and interactions

use egui::Ui;

/// Requests raised by the control bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    NewGame,
    LoadFen(String),
}

/// Game control buttons
pub struct GameControls;

impl GameControls {
    /// Render the control bar. `fen_input` is the text field buffer and is
    /// kept by the caller between frames.
    pub fn render(ui: &mut Ui, fen_input: &mut String) -> Option<ControlAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("New Game").clicked() {
                action = Some(ControlAction::NewGame);
            }

            ui.separator();

            ui.label("FEN:");
            let field = ui.add(
                egui::TextEdit::singleline(fen_input)
                    .hint_text("paste a position")
                    .desired_width(420.0),
            );
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Load").clicked() || submitted {
                let fen = fen_input.trim();
                if !fen.is_empty() {
                    action = Some(ControlAction::LoadFen(fen.to_string()));
                }
            }
        });

        action
    }
}
