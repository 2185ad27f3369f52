//! Uniform prime-order elliptic-curve group API with IETF hash-to-curve.
//!
//! This crate exposes seven prime-order groups behind a single tagged
//! [`Group`] handle:
//!
//! - Ristretto255 / SHA-512
//! - Decaf448 / SHAKE-256
//! - NIST P-256 / SHA-256, P-384 / SHA-384, P-521 / SHA-512
//! - Edwards25519 / SHA-512
//! - secp256k1 / SHA-256
//!
//! [`Scalar`] and [`Element`] are owned values manipulated through a small
//! algebraic interface (addition, subtraction, multiplication, negation,
//! inversion, base point, identity, constant-time equality) with canonical
//! binary and hex codecs. Two domain-separated derivation primitives,
//! [`Group::hash_to_group`] and [`Group::hash_to_scalar`], implement the
//! RFC 9380 suites of each curve (Elligator2, simplified SWU with the
//! secp256k1 3-isogeny, and the Ristretto255/Decaf448 one-way maps).
//!
//! All secret-dependent arithmetic is constant-time. Decoding is the only
//! fallible transition: byte strings that are non-canonical, off-curve,
//! outside the prime-order subgroup, or that encode the identity are
//! rejected with a typed [`GroupError`]. Mixing values of two different
//! groups is a programmer bug and panics.

// Allow some clippy lints for cryptographic code
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod dst;
mod element;
mod group;
mod internal;
mod scalar;

pub use element::Element;
pub use group::Group;
pub use scalar::Scalar;

/// Error types for group operations.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// A scalar encoding has the wrong length.
    #[error("invalid scalar length")]
    InvalidScalarLength,

    /// A scalar encoding is not the canonical form of a value below the
    /// group order.
    #[error("invalid scalar encoding")]
    InvalidScalarEncoding,

    /// An element encoding has the wrong length.
    #[error("invalid element length")]
    InvalidElementLength,

    /// An element encoding is non-canonical, off-curve, or outside the
    /// prime-order subgroup.
    #[error("invalid element encoding")]
    InvalidElementEncoding,

    /// An element encoding decodes to the identity.
    #[error("decoded element is the identity")]
    IdentityDecoded,

    /// A domain separation tag of length zero was supplied.
    #[error("zero-length domain separation tag")]
    ZeroLengthDst,

    /// A message expansion was requested beyond the primitive's bound.
    #[error("requested expansion length is out of range")]
    ExpansionTooLong,

    /// A value belonging to one group was passed into an operation of
    /// another group.
    #[error("cross-group value passed into an operation")]
    CastError,

    /// Operands carry the same group tag but incompatible internal fields.
    /// Unreachable by construction; kept for completeness of the contract.
    #[error("operands have mismatched internal fields")]
    FieldMismatch,
}

/// Result type for group operations.
pub type GroupResult<T> = Result<T, GroupError>;

impl From<ecgroup_h2c::ExpandError> for GroupError {
    fn from(err: ecgroup_h2c::ExpandError) -> Self {
        match err {
            ecgroup_h2c::ExpandError::ZeroLengthDst => Self::ZeroLengthDst,
            ecgroup_h2c::ExpandError::ExpansionTooLong => Self::ExpansionTooLong,
        }
    }
}
