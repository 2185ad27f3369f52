//! Edwards25519 backend: dalek group arithmetic plus the hand-rolled
//! RFC 9380 Elligator2 suite.

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;
use ecgroup_h2c::hash_to_field_xmd;
use ecgroup_hash::FixedHash;
use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;
use subtle::ConstantTimeEq;

use super::field25519::FieldElement;
use super::{biguint_to_le_bytes, debug, elligator};
use crate::{GroupError, GroupResult};

/// Per-element expansion length for GF(2^255-19) at k = 128.
const FIELD_HASH_LENGTH: usize = 48;

/// p = 2^255 - 19.
static PRIME: Lazy<BigUint> = Lazy::new(|| {
    BigUint::from_str_radix(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
        16,
    )
    .expect("prime constant parses")
});

/// Group order l = 2^252 + 27742317777372353535851937790883648493.
static ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::from_str_radix(
        "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
        16,
    )
    .expect("order constant parses")
});

pub(crate) fn generator() -> EdwardsPoint {
    ED25519_BASEPOINT_POINT
}

/// RFC 9380 edwards25519_XMD:SHA-512_ELL2_RO_.
pub(crate) fn hash_to_group(input: &[u8], dst: &[u8]) -> GroupResult<EdwardsPoint> {
    let u = hash_to_field_xmd(FixedHash::Sha512, input, dst, 2, FIELD_HASH_LENGTH, &PRIME)?;
    let q0 = map_to_point(&u[0]);
    let q1 = map_to_point(&u[1]);
    Ok((q0 + q1).mul_by_cofactor())
}

/// RFC 9380 edwards25519_XMD:SHA-512_ELL2_NU_.
pub(crate) fn encode_to_group(input: &[u8], dst: &[u8]) -> GroupResult<EdwardsPoint> {
    let u = hash_to_field_xmd(FixedHash::Sha512, input, dst, 1, FIELD_HASH_LENGTH, &PRIME)?;
    Ok(map_to_point(&u[0]).mul_by_cofactor())
}

/// Reduce one field hash into the scalar group.
pub(crate) fn hash_to_scalar(input: &[u8], dst: &[u8]) -> GroupResult<Scalar> {
    let u = hash_to_field_xmd(FixedHash::Sha512, input, dst, 1, FIELD_HASH_LENGTH, &ORDER)?;
    Ok(Scalar::from_bytes_mod_order(biguint_to_le_bytes(&u[0])))
}

fn map_to_point(u: &BigUint) -> EdwardsPoint {
    let fe = FieldElement::from_bytes(&biguint_to_le_bytes(u));
    let (x, y) = elligator::map_to_edwards(&fe);
    let mut compressed = y.to_bytes();
    compressed[31] |= x.is_negative().unwrap_u8() << 7;
    debug::log(|| {
        format!(
            "edwards25519 map_to_point:\n  u = {u:064x}\n  compressed = {}",
            hex::encode(compressed)
        )
    });
    CompressedEdwardsY(compressed)
        .decompress()
        .expect("mapped point satisfies the curve equation")
}

/// Decode a canonical compressed point of the prime-order subgroup.
///
/// Rejects non-canonical field encodings (by recompression), points with a
/// torsion component, and the identity.
pub(crate) fn decode_element(bytes: &[u8; 32]) -> GroupResult<EdwardsPoint> {
    let point = CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(GroupError::InvalidElementEncoding)?;
    if !bool::from(point.compress().as_bytes().ct_eq(bytes)) {
        return Err(GroupError::InvalidElementEncoding);
    }
    if point.is_identity() {
        return Err(GroupError::IdentityDecoded);
    }
    if !point.is_torsion_free() {
        return Err(GroupError::InvalidElementEncoding);
    }
    Ok(point)
}

pub(crate) fn decode_scalar(bytes: &[u8; 32]) -> GroupResult<Scalar> {
    Option::from(Scalar::from_canonical_bytes(*bytes)).ok_or(GroupError::InvalidScalarEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::traits::Identity;

    #[test]
    fn generator_matches_pinned_encoding() {
        assert_eq!(
            hex::encode(generator().compress().as_bytes()),
            "5866666666666666666666666666666666666666666666666666666666666666"
        );
    }

    #[test]
    fn identity_is_rejected() {
        let identity = EdwardsPoint::identity().compress();
        assert_eq!(
            decode_element(identity.as_bytes()),
            Err(GroupError::IdentityDecoded)
        );
    }

    #[test]
    fn non_canonical_y_is_rejected() {
        // y = p encodes the same point as y = 0 but is non-canonical
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        assert_eq!(
            decode_element(&bytes),
            Err(GroupError::InvalidElementEncoding)
        );
    }

    #[test]
    fn torsion_points_are_rejected() {
        // the canonical 8-torsion point with y = 0
        let mut bytes = [0u8; 32];
        bytes[0] = 0;
        let result = decode_element(&bytes);
        assert!(matches!(
            result,
            Err(GroupError::InvalidElementEncoding | GroupError::IdentityDecoded)
        ));
    }

    #[test]
    fn hash_and_encode_land_in_the_prime_order_subgroup() {
        let h = hash_to_group(b"input", b"ecgroup edwards25519 test").unwrap();
        assert!(h.is_torsion_free());
        let e = encode_to_group(b"input", b"ecgroup edwards25519 test").unwrap();
        assert!(e.is_torsion_free());
        assert_ne!(h.compress(), e.compress());
    }

    #[test]
    fn scalar_hash_is_reduced() {
        let s = hash_to_scalar(b"input", b"ecgroup edwards25519 test").unwrap();
        // canonical round-trip implies the value is below the order
        assert_eq!(
            Scalar::from_canonical_bytes(s.to_bytes()).unwrap(),
            s
        );
    }
}
