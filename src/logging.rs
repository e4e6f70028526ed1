use tracing_subscriber::EnvFilter;

/// Initialise logging for binaries embedding the console. Console entries are
/// mirrored to the `osd` target at info level; `debug` additionally surfaces
/// visibility toggles and font fallbacks. `RUST_LOG` overrides both.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
