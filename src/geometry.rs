use crate::settings::OsdSettings;

/// Overlay layout for one frame, in normalized screen units measured from the
/// screen top (0 = top edge, 1 = bottom edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayGeometry {
    /// Top edge of the text label.
    pub label_top: f32,
    /// Height of the displayed text block.
    pub text_height: f32,
    /// Height of the background panel, which starts at the screen top and
    /// extends `bg_gap` short of the last text line's clearance.
    pub bg_height: f32,
}

/// Compute the overlay layout for the displayed text. Empty text collapses
/// the overlay entirely.
pub fn compute(text: &str, settings: &OsdSettings) -> Option<OverlayGeometry> {
    if text.is_empty() {
        return None;
    }
    let lines = text.matches('\n').count() + 1;
    let text_height = lines as f32 * settings.line_height;
    Some(OverlayGeometry {
        label_top: settings.top_margin,
        text_height,
        bg_height: text_height + settings.top_margin - settings.bg_gap,
    })
}
