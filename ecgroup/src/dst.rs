//! Domain separation tag assembly.
//!
//! Protocol tags follow the layout
//! `<app> || "-V" || nn || "-CS" || nn || "-" || <ciphersuite>`, with the
//! protocol version and per-ciphersuite index rendered as two decimal
//! digits.

/// Compose a protocol DST for the given application string, version, suite
/// index and ciphersuite identifier.
pub(crate) fn compose(app: &[u8], version: u8, index: u8, ciphersuite: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(app.len() + ciphersuite.len() + 10);
    out.extend_from_slice(app);
    out.extend_from_slice(format!("-V{version:02}-CS{index:02}-").as_bytes());
    out.extend_from_slice(ciphersuite.as_bytes());
    out
}
