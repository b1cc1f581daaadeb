use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide tracing subscriber.
/// Honors `RUST_LOG` when set and otherwise defaults to info level with
/// request tracing from tower-http/axum visible. Writes compact lines to
/// stdout so container log collectors pick everything up.
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    // try_init: tests may install a subscriber more than once
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}
