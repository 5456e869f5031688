//! Diagnostic logging setup.
//!
//! Logging is off unless `LOLCAT_LOG` holds an `EnvFilter` directive such as
//! `debug` or `lolcat=trace`. Logs go to stderr without colors so they never
//! mix with the rainbow on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LOLCAT_LOG";

/// Install the global subscriber if logging was requested.
pub fn init() {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return;
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .finish();
    // A subscriber may already be set when embedded in tests
    let _ = tracing::subscriber::set_global_default(subscriber);
}
