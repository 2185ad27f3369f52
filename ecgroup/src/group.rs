//! The tagged group façade.

use crate::dst;
use crate::element::{Element, ElementRepr};
use crate::scalar::{Scalar, ScalarRepr};
use crate::{GroupError, GroupResult};

/// A prime-order group ciphersuite.
///
/// The tag is a cheap, freely copyable handle; all state lives in the
/// [`Scalar`] and [`Element`] values it creates. Every variant pairs a
/// curve with the hash function of its RFC 9380 suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// Ristretto255 with SHA-512.
    Ristretto255Sha512,
    /// Decaf448 with SHAKE-256.
    Decaf448Shake256,
    /// NIST P-256 with SHA-256.
    P256Sha256,
    /// NIST P-384 with SHA-384.
    P384Sha384,
    /// NIST P-521 with SHA-512.
    P521Sha512,
    /// Edwards25519 with SHA-512.
    Edwards25519Sha512,
    /// secp256k1 with SHA-256.
    Secp256k1Sha256,
}

impl Group {
    /// All supported groups, in ciphersuite-index order.
    #[must_use]
    pub const fn all() -> [Group; 7] {
        [
            Group::Ristretto255Sha512,
            Group::Decaf448Shake256,
            Group::P256Sha256,
            Group::P384Sha384,
            Group::P521Sha512,
            Group::Edwards25519Sha512,
            Group::Secp256k1Sha256,
        ]
    }

    /// The fixed per-ciphersuite index used in protocol DSTs.
    #[must_use]
    pub const fn ciphersuite_index(&self) -> u8 {
        match self {
            Group::Ristretto255Sha512 => 1,
            Group::Decaf448Shake256 => 2,
            Group::P256Sha256 => 3,
            Group::P384Sha384 => 4,
            Group::P521Sha512 => 5,
            Group::Edwards25519Sha512 => 6,
            Group::Secp256k1Sha256 => 7,
        }
    }

    /// The hash-to-group (random oracle) ciphersuite identifier.
    #[must_use]
    pub const fn ciphersuite_id(&self) -> &'static str {
        match self {
            Group::Ristretto255Sha512 => "ristretto255_XMD:SHA-512_R255MAP_RO_",
            Group::Decaf448Shake256 => "decaf448_XOF:SHAKE-256_D448MAP_RO_",
            Group::P256Sha256 => "P256_XMD:SHA-256_SSWU_RO_",
            Group::P384Sha384 => "P384_XMD:SHA-384_SSWU_RO_",
            Group::P521Sha512 => "P521_XMD:SHA-512_SSWU_RO_",
            Group::Edwards25519Sha512 => "edwards25519_XMD:SHA-512_ELL2_RO_",
            Group::Secp256k1Sha256 => "secp256k1_XMD:SHA-256_SSWU_RO_",
        }
    }

    /// The encode-to-group (nonuniform) ciphersuite identifier.
    ///
    /// The one-way-map groups consume a full-width uniform expansion, so
    /// their nonuniform construction coincides with the random-oracle one
    /// and shares its identifier.
    #[must_use]
    pub const fn nonuniform_ciphersuite_id(&self) -> &'static str {
        match self {
            Group::Ristretto255Sha512 => "ristretto255_XMD:SHA-512_R255MAP_RO_",
            Group::Decaf448Shake256 => "decaf448_XOF:SHAKE-256_D448MAP_RO_",
            Group::P256Sha256 => "P256_XMD:SHA-256_SSWU_NU_",
            Group::P384Sha384 => "P384_XMD:SHA-384_SSWU_NU_",
            Group::P521Sha512 => "P521_XMD:SHA-512_SSWU_NU_",
            Group::Edwards25519Sha512 => "edwards25519_XMD:SHA-512_ELL2_NU_",
            Group::Secp256k1Sha256 => "secp256k1_XMD:SHA-256_SSWU_NU_",
        }
    }

    /// Canonical scalar encoding length in bytes.
    #[must_use]
    pub const fn scalar_length(&self) -> usize {
        match self {
            Group::Ristretto255Sha512 | Group::Edwards25519Sha512 => 32,
            Group::Decaf448Shake256 => 56,
            Group::P256Sha256 | Group::Secp256k1Sha256 => 32,
            Group::P384Sha384 => 48,
            Group::P521Sha512 => 66,
        }
    }

    /// Canonical element encoding length in bytes.
    #[must_use]
    pub const fn element_length(&self) -> usize {
        match self {
            Group::Ristretto255Sha512 | Group::Edwards25519Sha512 => 32,
            Group::Decaf448Shake256 => 56,
            Group::P256Sha256 | Group::Secp256k1Sha256 => 33,
            Group::P384Sha384 => 49,
            Group::P521Sha512 => 67,
        }
    }

    /// Target security level of the suite, in bits.
    #[must_use]
    pub const fn security_level(&self) -> usize {
        match self {
            Group::Ristretto255Sha512 | Group::Edwards25519Sha512 => 128,
            Group::Decaf448Shake256 => 224,
            Group::P256Sha256 | Group::Secp256k1Sha256 => 128,
            Group::P384Sha384 => 192,
            Group::P521Sha512 => 256,
        }
    }

    /// Cofactor of the represented prime-order group.
    ///
    /// The quotient groups present a prime-order abstraction, so only the
    /// raw Edwards25519 suite reports a cofactor above one; hash-to-group
    /// output always has it cleared.
    #[must_use]
    pub const fn cofactor(&self) -> u64 {
        match self {
            Group::Edwards25519Sha512 => 8,
            _ => 1,
        }
    }

    /// The group order as a lowercase big-endian hex string of the scalar
    /// encoding width.
    #[must_use]
    pub const fn order(&self) -> &'static str {
        match self {
            Group::Ristretto255Sha512 | Group::Edwards25519Sha512 => {
                "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"
            }
            Group::Decaf448Shake256 => {
                "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9\
                 c44edb49aed63690216cc2728dc58f552378c292ab5844f3"
            }
            Group::P256Sha256 => {
                "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
            }
            Group::P384Sha384 => {
                "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf\
                 581a0db248b0a77aecec196accc52973"
            }
            Group::P521Sha512 => {
                "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
                 fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138\
                 6409"
            }
            Group::Secp256k1Sha256 => {
                "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
            }
        }
    }

    /// Compose the protocol DST for hash-to-group / hash-to-scalar use.
    #[must_use]
    pub fn make_dst(&self, app: &[u8], version: u8) -> Vec<u8> {
        dst::compose(app, version, self.ciphersuite_index(), self.ciphersuite_id())
    }

    /// Compose the protocol DST for encode-to-group (nonuniform) use.
    #[must_use]
    pub fn make_dst_nonuniform(&self, app: &[u8], version: u8) -> Vec<u8> {
        dst::compose(
            app,
            version,
            self.ciphersuite_index(),
            self.nonuniform_ciphersuite_id(),
        )
    }

    /// New scalar set to zero.
    #[must_use]
    pub fn new_scalar(&self) -> Scalar {
        Scalar::from_parts(*self, ScalarRepr::zero(*self))
    }

    /// New element set to the identity.
    #[must_use]
    pub fn new_element(&self) -> Element {
        Element::from_parts(*self, ElementRepr::identity(*self))
    }

    /// The canonical generator of the group.
    #[must_use]
    pub fn base(&self) -> Element {
        Element::from_parts(*self, ElementRepr::generator(*self))
    }

    /// Uniformly random non-zero scalar from the OS random source.
    ///
    /// Draws are rejection-sampled until non-zero, so the result is always
    /// invertible. Failure of the random source aborts.
    #[must_use]
    pub fn random_scalar(&self) -> Scalar {
        Scalar::from_parts(*self, ScalarRepr::random(*self))
    }

    /// Hash `input` to a group element with the suite's random-oracle map.
    pub fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> GroupResult<Element> {
        if dst.is_empty() {
            return Err(GroupError::ZeroLengthDst);
        }
        Ok(Element::from_parts(
            *self,
            ElementRepr::hash_to_group(*self, input, dst)?,
        ))
    }

    /// Hash `input` to a group element with the suite's nonuniform map.
    pub fn encode_to_group(&self, input: &[u8], dst: &[u8]) -> GroupResult<Element> {
        if dst.is_empty() {
            return Err(GroupError::ZeroLengthDst);
        }
        Ok(Element::from_parts(
            *self,
            ElementRepr::encode_to_group(*self, input, dst)?,
        ))
    }

    /// Hash `input` to a scalar: `hash_to_field` with the group order as
    /// modulus and the suite's expansion length.
    pub fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> GroupResult<Scalar> {
        if dst.is_empty() {
            return Err(GroupError::ZeroLengthDst);
        }
        Ok(Scalar::from_parts(
            *self,
            ScalarRepr::hash_to_scalar(*self, input, dst)?,
        ))
    }

    /// Decode a canonical scalar encoding.
    pub fn scalar_from_bytes(&self, input: &[u8]) -> GroupResult<Scalar> {
        if input.len() != self.scalar_length() {
            return Err(GroupError::InvalidScalarLength);
        }
        Ok(Scalar::from_parts(*self, ScalarRepr::decode(*self, input)?))
    }

    /// Decode a scalar from its lowercase fixed-width hex form.
    pub fn scalar_from_hex(&self, input: &str) -> GroupResult<Scalar> {
        let bytes = hex::decode(input).map_err(|_| GroupError::InvalidScalarEncoding)?;
        self.scalar_from_bytes(&bytes)
    }

    /// Decode a canonical element encoding.
    ///
    /// Rejects wrong lengths, non-canonical encodings, points off the curve
    /// or outside the prime-order subgroup, and the identity.
    pub fn element_from_bytes(&self, input: &[u8]) -> GroupResult<Element> {
        if input.len() != self.element_length() {
            return Err(GroupError::InvalidElementLength);
        }
        Ok(Element::from_parts(
            *self,
            ElementRepr::decode(*self, input)?,
        ))
    }

    /// Decode an element from its lowercase fixed-width hex form.
    pub fn element_from_hex(&self, input: &str) -> GroupResult<Element> {
        let bytes = hex::decode(input).map_err(|_| GroupError::InvalidElementEncoding)?;
        self.element_from_bytes(&bytes)
    }
}

impl core::fmt::Display for Group {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Group::Ristretto255Sha512 => "Ristretto255/SHA-512",
            Group::Decaf448Shake256 => "Decaf448/SHAKE-256",
            Group::P256Sha256 => "P256/SHA-256",
            Group::P384Sha384 => "P384/SHA-384",
            Group::P521Sha512 => "P521/SHA-512",
            Group::Edwards25519Sha512 => "Edwards25519/SHA-512",
            Group::Secp256k1Sha256 => "secp256k1/SHA-256",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dst_composition_matches_the_pinned_string() {
        let dst = Group::P256Sha256.make_dst(b"app", 1);
        assert_eq!(dst, b"app-V01-CS03-P256_XMD:SHA-256_SSWU_RO_".to_vec());
    }

    #[test]
    fn lengths_are_consistent_with_the_wire_format() {
        for group in Group::all() {
            assert_eq!(group.base().encode().len(), group.element_length());
            assert_eq!(group.new_scalar().encode().len(), group.scalar_length());
            assert_eq!(group.order().len(), 2 * group.scalar_length());
        }
    }

    #[test]
    fn zero_length_dst_is_rejected_everywhere() {
        for group in Group::all() {
            assert_eq!(
                group.hash_to_group(b"msg", b"").unwrap_err(),
                GroupError::ZeroLengthDst
            );
            assert_eq!(
                group.encode_to_group(b"msg", b"").unwrap_err(),
                GroupError::ZeroLengthDst
            );
            assert_eq!(
                group.hash_to_scalar(b"msg", b"").unwrap_err(),
                GroupError::ZeroLengthDst
            );
        }
    }
}
