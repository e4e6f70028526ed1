use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overlay settings. All geometry values are in normalized screen units where
/// 0–1 spans the full screen dimension; missing fields in the settings file
/// fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsdSettings {
    /// Column budget for wrapped and pretty entries.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    /// Height of one text line.
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Gap between the screen top and the first text line.
    #[serde(default = "default_top_margin")]
    pub top_margin: f32,
    /// Gap between the last text line and the background panel's bottom edge.
    #[serde(default = "default_bg_gap")]
    pub bg_gap: f32,
    /// Alpha of the black background panel. Defaults to half opacity.
    #[serde(default = "default_bg_alpha")]
    pub bg_alpha: u8,
    /// Label point size.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Optional monospace font file installed into egui on the first tick.
    /// When absent (or unreadable) egui's default monospace is used.
    /// Installation rebuilds the font definitions from egui's defaults, so
    /// applications that register their own fonts should leave this unset
    /// (see [`crate::overlay::install_font`]).
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_wrap_width() -> usize {
    108
}

fn default_line_height() -> f32 {
    0.029
}

fn default_top_margin() -> f32 {
    0.035
}

fn default_bg_gap() -> f32 {
    0.01
}

fn default_bg_alpha() -> u8 {
    128
}

fn default_font_size() -> f32 {
    29.0
}

impl Default for OsdSettings {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            line_height: default_line_height(),
            top_margin: default_top_margin(),
            bg_gap: default_bg_gap(),
            bg_alpha: default_bg_alpha(),
            font_size: default_font_size(),
            font_path: None,
        }
    }
}

impl OsdSettings {
    /// Load settings from a JSON file, falling back to defaults when the file
    /// is missing or empty.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }
}
