//! Internal debugging utilities for the hash-to-curve paths.
//!
//! Logging is disabled by default to keep the cryptographic core silent.
//! Enable the `h2c-debug` feature (and optionally set the `ECGROUP_H2C_DEBUG`
//! environment variable) to surface diagnostic output during development or
//! advanced troubleshooting.

#[cfg(feature = "h2c-debug")]
use std::sync::OnceLock;

#[cfg(feature = "h2c-debug")]
fn is_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var("ECGROUP_H2C_DEBUG").is_ok())
}

#[cfg(not(feature = "h2c-debug"))]
#[inline(always)]
fn is_enabled() -> bool {
    false
}

/// Emit a lazily constructed debug message when hash-to-curve debugging is
/// enabled.
#[inline(always)]
pub fn log<F>(message: F)
where
    F: FnOnce() -> String,
{
    if is_enabled() {
        eprintln!("{}", message());
    }
}
