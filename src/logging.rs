// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` is honoured and falls
/// back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
