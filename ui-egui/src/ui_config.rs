// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration System
//!
//! Window, board and piece appearance, stored as JSON. Every section has
//! defaults, so a config file only needs the fields it changes.

use anyhow::{Context, Result};
use chessboard_core::assets::DEFAULT_PIECE_BASE_URL;
use egui::{Color32, FontFamily, FontId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete UI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub pieces: PieceConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    pub min_size: (f32, f32),
    pub background_color: SerializableColor,
    /// Color of the end-of-game banner text
    pub banner_color: SerializableColor,
    pub banner_font_size: f32,
}

/// Board visual configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Largest square edge in pixels; the board shrinks to fit the window
    pub max_square_size: f32,
    pub border_width: f32,
    pub border_color: SerializableColor,
    pub light_square: SerializableColor,
    pub dark_square: SerializableColor,
    /// Ring drawn inside the selected square
    pub selection_color: SerializableColor,
    pub selection_width: f32,
    /// Tint over the squares of the previous move
    pub last_move_color: SerializableColor,
    /// Tint over a king in check
    pub check_color: SerializableColor,
    /// Outline of the square under a dragged piece
    pub drop_target_color: SerializableColor,
    pub show_coordinates: bool,
    pub label_color: SerializableColor,
    pub label_font_size: f32,
    /// Piece image edge relative to the square
    pub piece_scale: f32,
}

/// Piece image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceConfig {
    /// Directory URL holding `wp.png` .. `bk.png`
    pub base_url: String,
}

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chessboard".to_string(),
            initial_size: (1000.0, 900.0),
            min_size: (480.0, 480.0),
            background_color: Color32::from_rgb(0x2c, 0x2c, 0x2c).into(),
            banner_color: Color32::WHITE.into(),
            banner_font_size: 24.0,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_square_size: 96.0,
            border_width: 8.0,
            border_color: Color32::from_rgb(0x2c, 0x2c, 0x2c).into(),
            light_square: Color32::from_rgb(0xee, 0xee, 0xd2).into(),
            dark_square: Color32::from_rgb(0x76, 0x96, 0x56).into(),
            selection_color: Color32::from_rgb(0xfa, 0xcc, 0x15).into(), // yellow-400
            selection_width: 4.0,
            last_move_color: Color32::from_rgba_unmultiplied(0xf6, 0xf6, 0x69, 110).into(),
            check_color: Color32::from_rgba_unmultiplied(0xdc, 0x26, 0x26, 140).into(),
            drop_target_color: Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, 160).into(),
            show_coordinates: true,
            label_color: Color32::from_rgb(0x4b, 0x55, 0x63).into(), // gray-600
            label_font_size: 14.0,
            piece_scale: 0.83,
        }
    }
}

impl Default for PieceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PIECE_BASE_URL.to_string(),
        }
    }
}

impl UiConfig {
    /// Load config from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Config from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Helper to create egui FontId from a point size
pub fn create_font_id(size: f32) -> FontId {
    FontId::new(size, FontFamily::Proportional)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.window.initial_size, (1000.0, 900.0));
        assert_eq!(
            Color32::from(config.board.light_square),
            Color32::from_rgb(0xee, 0xee, 0xd2)
        );
        assert_eq!(
            Color32::from(config.board.dark_square),
            Color32::from_rgb(0x76, 0x96, 0x56)
        );
        assert!(config.pieces.base_url.ends_with("/neo/150"));
    }

    #[test]
    fn test_color_conversion() {
        let egui_color = Color32::from_rgb(100, 150, 200);
        let ser_color: SerializableColor = egui_color.into();
        let back_color: Color32 = ser_color.into();
        assert_eq!(egui_color, back_color);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "board": { "max_square_size": 64.0 }, "pieces": { "base_url": "file:///p" } }"#;
        let config: UiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.board.max_square_size, 64.0);
        assert_eq!(config.board.border_width, 8.0);
        assert_eq!(config.pieces.base_url, "file:///p");
        assert_eq!(config.window.title, "Chessboard");
    }

    #[test]
    fn test_no_path_means_defaults() {
        let config = UiConfig::load_or_default(None).unwrap();
        assert_eq!(config.window.title, "Chessboard");
    }
}
