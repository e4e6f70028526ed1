//! On-screen debug console overlay for egui applications.
//!
//! Game and tool code logs entries during a frame with [`OsdConsole::log`]
//! (or the `log_text`/`log_wrapped`/`log_pretty` shorthands); the owning
//! frame loop calls [`OsdConsole::tick`] once per frame, which flushes the
//! pending entries into a translucent overlay anchored at the top of the
//! screen and polls CTRL+backtick to toggle visibility.

pub mod chord;
pub mod console;
pub mod format;
pub mod geometry;
pub mod logging;
pub mod overlay;
pub mod settings;

pub use console::OsdConsole;
pub use format::LogEntry;
pub use settings::OsdSettings;
