use serde_json::Value;

use crate::chord::{ChordSample, ChordState};
use crate::format::{self, LogEntry};
use crate::settings::OsdSettings;

/// On-screen debug console.
///
/// Owned explicitly by the application; entries logged during a frame
/// accumulate in a pending buffer, and [`OsdConsole::tick`] (called once per
/// frame by the owning loop) flushes them to the overlay. Every entry is also
/// mirrored to the process log under the `osd` target, so output survives
/// even while the overlay is hidden.
pub struct OsdConsole {
    pub(crate) settings: OsdSettings,
    pending: String,
    displayed: String,
    visible: bool,
    chord: ChordState,
    pub(crate) font_ready: bool,
}

impl Default for OsdConsole {
    fn default() -> Self {
        Self::new(OsdSettings::default())
    }
}

impl OsdConsole {
    pub fn new(settings: OsdSettings) -> Self {
        Self {
            settings,
            pending: String::new(),
            displayed: String::new(),
            visible: true,
            chord: ChordState::new(),
            font_ready: false,
        }
    }

    /// Append one entry to the pending buffer, newline-separated from the
    /// previous entry. Entries appear on screen after the next [`tick`].
    ///
    /// [`tick`]: OsdConsole::tick
    pub fn log(&mut self, entry: LogEntry) {
        let text = format::format_entry(&entry, self.settings.wrap_width);
        tracing::info!(target: "osd", "{text}");
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(&text);
    }

    /// Log text verbatim; the caller controls line breaks.
    pub fn log_text(&mut self, text: impl Into<String>) {
        self.log(LogEntry::Text(text.into()));
    }

    /// Log text word-wrapped to the configured column budget.
    pub fn log_wrapped(&mut self, text: impl Into<String>) {
        self.log(LogEntry::Wrapped(text.into()));
    }

    /// Log a structured value. `nest` forces one value per line.
    pub fn log_pretty(&mut self, value: Value, nest: bool) {
        self.log(LogEntry::Pretty { value, nest });
    }

    /// Move the pending buffer into the displayed text, replacing it
    /// wholesale. An empty pending buffer collapses the overlay.
    pub fn flush(&mut self) {
        self.displayed = std::mem::take(&mut self.pending);
    }

    /// Feed this frame's chord key state; flips visibility on a chord edge
    /// and returns whether a toggle happened.
    pub fn handle_chord(&mut self, sample: ChordSample) -> bool {
        if !self.chord.fired(sample) {
            return false;
        }
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "console visibility toggled");
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn settings(&self) -> &OsdSettings {
        &self.settings
    }
}
