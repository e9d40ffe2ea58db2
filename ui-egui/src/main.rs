// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the egui UI

use anyhow::{Context, Result};
use chessboard_core::Session;
use chessboard_ui_egui::{ChessApp, UiConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chessboard")]
#[command(about = "Interactive chessboard with click and drag move input")]
struct Args {
    #[arg(long, help = "Start from this FEN position instead of the initial one")]
    fen: Option<String>,

    #[arg(long, help = "Path to a JSON UI config")]
    config: Option<PathBuf>,

    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = UiConfig::load_or_default(args.config.as_deref())?;
    let session = match &args.fen {
        Some(fen) => Session::from_fen(fen).with_context(|| format!("loading position {fen}"))?,
        None => Session::new(),
    };
    info!(fen = session.snapshot().fen(), "starting");

    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.initial_size.0, window.initial_size.1])
            .with_min_inner_size([window.min_size.0, window.min_size.1]),
        centered: true,
        ..Default::default()
    };

    let title = window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Box::new(ChessApp::new(session, config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}
