// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main application window

use crate::components::{
    BoardInteraction, BoardRenderer, ControlAction, DragPreview, GameControls, StatusPanel,
};
use crate::ui_config::{create_font_id, UiConfig};
use chessboard_core::{BoardView, Gesture, Outcome, PieceImages, Session};
use egui::{Color32, CursorIcon, RichText, Sense, Vec2};
use tracing::{debug, warn};

/// Room kept under the board for the end-of-game banner
const BANNER_SPACE: f32 = 48.0;

/// Chessboard application
pub struct ChessApp {
    session: Session,
    config: UiConfig,
    images: PieceImages,
    renderer: BoardRenderer,
    interaction: BoardInteraction,
    /// Contents of the FEN field
    fen_input: String,
    /// Last FEN load failure, shown until the next successful load
    load_error: Option<String>,
}

impl ChessApp {
    pub fn new(session: Session, config: UiConfig) -> Self {
        let images = PieceImages::with_base_url(&config.pieces.base_url);
        let renderer = BoardRenderer::new(config.board.clone());
        let fen_input = session.snapshot().fen().to_string();
        Self {
            session,
            config,
            images,
            renderer,
            interaction: BoardInteraction::new(),
            fen_input,
            load_error: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Feed gestures to the session in order. Returns true if anything was
    /// dispatched.
    pub fn apply_gestures(&mut self, gestures: Vec<Gesture>) -> bool {
        let dispatched = !gestures.is_empty();
        for gesture in gestures {
            let outcome = self.session.dispatch(gesture);
            debug!(?gesture, ?outcome, "gesture handled");
            if let Outcome::Moved(snapshot) = &outcome {
                self.fen_input = snapshot.fen().to_string();
            }
        }
        dispatched
    }

    pub fn apply_control(&mut self, action: ControlAction) {
        match action {
            ControlAction::NewGame => {
                self.session.reset();
                self.load_error = None;
            }
            ControlAction::LoadFen(fen) => match self.session.load_fen(&fen) {
                Ok(()) => self.load_error = None,
                Err(e) => {
                    warn!(%e, "rejected FEN");
                    self.load_error = Some(e.to_string());
                }
            },
        }
        self.fen_input = self.session.snapshot().fen().to_string();
    }

    fn render_board(&mut self, ui: &mut egui::Ui, view: &BoardView) -> bool {
        let available = ui.available_size() - Vec2::new(0.0, BANNER_SPACE);
        let size = self.renderer.desired_size(available);

        let mut dispatched = false;
        ui.vertical_centered(|ui| {
            let (outer, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
            let board_rect = self.renderer.board_rect(outer);

            let gestures = self.interaction.handle_interaction(
                ui,
                board_rect,
                view.orientation,
                self.session.drag_source(),
            );
            dispatched = self.apply_gestures(gestures);

            // Draw what the gestures produced, not what the frame started with
            let view = self.session.view(&self.images);
            let drag = self.session.drag_source().and_then(|source| {
                let image = view.get(source)?.image.as_ref()?;
                Some(DragPreview {
                    source,
                    image,
                    pos: self.interaction.drag_pos()?,
                    over: self.interaction.drag_over(),
                })
            });
            self.renderer.render(ui, outer, &view, drag);
            self.update_cursor(ui.ctx(), &view);

            if let Some(banner) = view.banner {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(banner)
                        .font(create_font_id(self.config.window.banner_font_size))
                        .color(Color32::from(self.config.window.banner_color))
                        .strong(),
                );
            }
        });
        dispatched
    }

    fn update_cursor(&self, ctx: &egui::Context, view: &BoardView) {
        if self.session.drag_source().is_some() {
            ctx.set_cursor_icon(CursorIcon::Grabbing);
            return;
        }
        let active = self.session.active_color();
        let movable = self
            .interaction
            .hover()
            .and_then(|square| view.get(square))
            .and_then(|square| square.piece)
            .is_some_and(|piece| piece.color == active);
        if movable {
            ctx.set_cursor_icon(CursorIcon::Grab);
        }
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.session.view(&self.images);

        let mut action = None;
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            action = GameControls::render(ui, &mut self.fen_input);
            if let Some(error) = &self.load_error {
                ui.colored_label(Color32::from_rgb(0xdc, 0x26, 0x26), error);
            }
        });

        egui::SidePanel::right("status")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                StatusPanel::render(
                    ui,
                    &view,
                    self.session.snapshot().fen(),
                    self.session.history(),
                );
            });

        let background = Color32::from(self.config.window.background_color);
        let mut dispatched = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background))
            .show(ctx, |ui| {
                dispatched = self.render_board(ui, &view);
            });

        if let Some(action) = action {
            self.apply_control(action);
            dispatched = true;
        }

        if dispatched || self.session.drag_source().is_some() {
            ctx.request_repaint();
        }
    }
}
