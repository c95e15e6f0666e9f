use super::messages::macros::DEBUG_ENV;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `DTRACK_DEBUG` turns on debug output
/// for this crate, and the default is warnings only. Logs go to stderr so
/// they never mix with exported JSON on stdout.
pub fn init() {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) if std::env::var(DEBUG_ENV).is_ok() => EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME").replace('-', "_"))),
        Err(_) => EnvFilter::new("warn"),
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
