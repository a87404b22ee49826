// src/version.rs
//! Version string shown by `--version`, kept in sync with `Cargo.toml`.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
