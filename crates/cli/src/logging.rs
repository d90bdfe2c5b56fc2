use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Initialize tracing with the specified verbosity level and output format.
///
/// Only events from the `reelbase` library and the CLI itself are shown.
/// Not-found lookups and best-effort write failures are reported at WARN,
/// so they stay visible at the default INFO level.
///
/// # Arguments
/// * `json` - If true, output logs in JSON format; otherwise, use human-readable format.
/// * `verbose` - Verbosity level: 0 for INFO, 1 for DEBUG, 2+ for TRACE.
///
/// # Examples
/// ```rust,no_run
/// init_tracing(false, 0); // INFO level, human-readable
/// init_tracing(true, 1); // DEBUG level, JSON
/// ```
pub fn init_tracing(json: bool, verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::new(format!("reelbase={},reelbase_cli={}", level, level));

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output on stdout stays parseable
    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
