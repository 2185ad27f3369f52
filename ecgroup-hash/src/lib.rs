//! Registry of the hash primitives consumed by the group and hash-to-curve
//! layers.
//!
//! Two families are exposed: fixed-output Merkle-Damgård/SHA-2 functions and
//! extensible-output Keccak functions. Each identifier carries the metadata
//! the RFC 9380 expansion routines need (input block size, digest size,
//! target security level) next to a one-shot hashing entry point, so callers
//! never hold a hasher state across the crate boundary.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use digest::{Digest, ExtendableOutput, Update, XofReader};
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Shake128, Shake256};

/// Identifier of a fixed-output hash function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedHash {
    /// SHA-256 (FIPS 180-4), 32-byte digest.
    Sha256,
    /// SHA-384 (FIPS 180-4), 48-byte digest.
    Sha384,
    /// SHA-512 (FIPS 180-4), 64-byte digest.
    Sha512,
}

impl FixedHash {
    /// Input block size in bytes (`s_in_bytes` in RFC 9380 terms).
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha384 | Self::Sha512 => 128,
        }
    }

    /// Digest size in bytes (`b_in_bytes` in RFC 9380 terms).
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Collision-resistance target in bits.
    #[must_use]
    pub const fn security_level(self) -> usize {
        match self {
            Self::Sha256 => 128,
            Self::Sha384 => 192,
            Self::Sha512 => 256,
        }
    }

    /// Canonical identifier string.
    #[must_use]
    pub const fn ident(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Hash the concatenation of `parts` and return the digest.
    #[must_use]
    pub fn hash(self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::Sha256 => digest_fixed::<Sha256>(parts),
            Self::Sha384 => digest_fixed::<Sha384>(parts),
            Self::Sha512 => digest_fixed::<Sha512>(parts),
        }
    }
}

impl core::fmt::Display for FixedHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.ident())
    }
}

/// Identifier of an extensible-output function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Xof {
    /// SHAKE-128 (FIPS 202).
    Shake128,
    /// SHAKE-256 (FIPS 202).
    Shake256,
}

impl Xof {
    /// Target security level in bits.
    #[must_use]
    pub const fn security_level(self) -> usize {
        match self {
            Self::Shake128 => 128,
            Self::Shake256 => 256,
        }
    }

    /// Canonical identifier string.
    #[must_use]
    pub const fn ident(self) -> &'static str {
        match self {
            Self::Shake128 => "SHAKE-128",
            Self::Shake256 => "SHAKE-256",
        }
    }

    /// Absorb the concatenation of `parts` and squeeze `length` bytes.
    #[must_use]
    pub fn digest(self, parts: &[&[u8]], length: usize) -> Vec<u8> {
        match self {
            Self::Shake128 => digest_xof::<Shake128>(parts, length),
            Self::Shake256 => digest_xof::<Shake256>(parts, length),
        }
    }
}

impl core::fmt::Display for Xof {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.ident())
    }
}

fn digest_fixed<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    hasher.finalize().to_vec()
}

fn digest_xof<X: Default + Update + ExtendableOutput>(parts: &[&[u8]], length: usize) -> Vec<u8> {
    let mut hasher = X::default();
    for part in parts {
        Update::update(&mut hasher, part);
    }
    let mut output = vec![0u8; length];
    hasher.finalize_xof().read(&mut output);
    output
}
