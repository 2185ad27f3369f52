//! RFC 9380 message expansion and hash-to-field primitives.
//!
//! This crate implements the two expansion routines of RFC 9380 §5.3
//! (`expand_message_xmd` over the fixed-output registry hashes and
//! `expand_message_xof` over the SHAKE functions) and the §5.2
//! `hash_to_field` reduction they feed. The hash functions themselves are
//! selected through [`ecgroup_hash`] identifiers so a caller never names a
//! concrete hasher type.
//!
//! Inputs to every routine here are public values (messages and domain
//! separation tags); the reduction step may therefore use variable-time
//! big-integer arithmetic.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod expand;
pub mod field;

pub use expand::{expand_message_xmd, expand_message_xof};
pub use field::{hash_to_field_xmd, hash_to_field_xof};

/// Errors surfaced by the expansion routines.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ExpandError {
    /// The domain separation tag was empty.
    #[error("zero-length domain separation tag")]
    ZeroLengthDst,

    /// The requested output length exceeds the bound of the primitive.
    #[error("requested expansion length is out of range")]
    ExpansionTooLong,
}

/// Result type for expansion operations.
pub type ExpandResult<T> = Result<T, ExpandError>;
