use std::path::Path;

use anyhow::Context as _;
use eframe::egui::{
    self, Align2, Color32, FontData, FontDefinitions, FontFamily, FontId, Id, LayerId, Order,
    Rect,
};

use crate::chord::ChordSample;
use crate::console::OsdConsole;
use crate::geometry;
use crate::settings::OsdSettings;

const FONT_NAME: &str = "osd-console-mono";

impl OsdConsole {
    /// Per-frame driver. Call once per frame from the owning update loop:
    /// flushes pending entries to the display, polls the CTRL+backtick
    /// toggle chord, and paints the overlay when visible and non-empty.
    pub fn tick(&mut self, ctx: &egui::Context) {
        if !self.font_ready {
            self.font_ready = true;
            if let Some(path) = self.settings.font_path.clone() {
                if let Err(err) = install_font(ctx, &path) {
                    tracing::warn!(?err, "console font unavailable, using default monospace");
                }
            }
        }

        self.flush();

        let sample = ctx.input(|i| ChordSample {
            backtick_down: i.key_down(egui::Key::Backtick),
            ctrl_down: i.modifiers.ctrl,
        });
        self.handle_chord(sample);

        if self.is_visible() {
            paint(ctx, self.displayed_text(), self.settings());
        }
    }
}

/// Paint the translucent background panel and the text label on the
/// foreground layer, above all application widgets.
fn paint(ctx: &egui::Context, text: &str, settings: &OsdSettings) {
    let Some(geom) = geometry::compute(text, settings) else {
        return;
    };
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("osd-console")));

    let bg = Rect::from_min_size(
        screen.min,
        egui::vec2(screen.width(), geom.bg_height * screen.height()),
    );
    painter.rect_filled(bg, 0.0, Color32::from_rgba_unmultiplied(0, 0, 0, settings.bg_alpha));

    let label_pos = screen.min + egui::vec2(0.0, geom.label_top * screen.height());
    painter.text(
        label_pos,
        Align2::LEFT_TOP,
        text,
        FontId::monospace(settings.font_size),
        Color32::WHITE,
    );
}

/// Register a font file as the preferred monospace face. Called lazily on the
/// first tick when a font path is configured.
///
/// egui offers no way to read back the currently installed definitions, so
/// this rebuilds from [`FontDefinitions::default`]. Applications that
/// register their own fonts should leave `font_path` unset and instead add
/// their monospace face at the head of [`FontFamily::Monospace`] in their own
/// `set_fonts` call; the console picks it up automatically.
pub fn install_font(ctx: &egui::Context, path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read console font {}", path.display()))?;
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_string(), FontData::from_owned(bytes));
    fonts
        .families
        .entry(FontFamily::Monospace)
        .or_default()
        .insert(0, FONT_NAME.to_string());
    ctx.set_fonts(fonts);
    Ok(())
}
