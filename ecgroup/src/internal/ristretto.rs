//! Ristretto255 backend over the dalek prime-order group.

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;
use ecgroup_h2c::{expand_message_xmd, hash_to_field_xmd};
use ecgroup_hash::FixedHash;
use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;

use super::biguint_to_le_bytes;
use crate::{GroupError, GroupResult};

/// Group order, shared with edwards25519.
static ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::from_str_radix(
        "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
        16,
    )
    .expect("order constant parses")
});

// Scalars are shared with edwards25519 (same group order).
pub(crate) use super::edwards25519::decode_scalar;

pub(crate) fn generator() -> RistrettoPoint {
    RISTRETTO_BASEPOINT_POINT
}

/// The one-way map over a 64-byte SHA-512 message expansion (RFC 9496
/// §4.3.4). Representatives inherently clear the cofactor, and the same
/// construction serves the nonuniform variant.
pub(crate) fn hash_to_group(input: &[u8], dst: &[u8]) -> GroupResult<RistrettoPoint> {
    let uniform = expand_message_xmd(FixedHash::Sha512, input, dst, 64)?;
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&uniform);
    Ok(RistrettoPoint::from_uniform_bytes(&wide))
}

pub(crate) fn hash_to_scalar(input: &[u8], dst: &[u8]) -> GroupResult<Scalar> {
    let u = hash_to_field_xmd(FixedHash::Sha512, input, dst, 1, 48, &ORDER)?;
    Ok(Scalar::from_bytes_mod_order(biguint_to_le_bytes(&u[0])))
}

/// Decode a canonical ristretto encoding; the codec itself enforces
/// canonicality, so only the identity needs an explicit check.
pub(crate) fn decode_element(bytes: &[u8; 32]) -> GroupResult<RistrettoPoint> {
    let point = CompressedRistretto(*bytes)
        .decompress()
        .ok_or(GroupError::InvalidElementEncoding)?;
    if point.is_identity() {
        return Err(GroupError::IdentityDecoded);
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::traits::Identity;

    #[test]
    fn generator_matches_pinned_encoding() {
        assert_eq!(
            hex::encode(generator().compress().as_bytes()),
            "e2f2ae0a6abc4e71a884a961c500515f58e30b6aa582dd8db6a65945e08d2d76"
        );
    }

    #[test]
    fn identity_is_rejected() {
        let bytes = RistrettoPoint::identity().compress();
        assert_eq!(
            decode_element(bytes.as_bytes()),
            Err(GroupError::IdentityDecoded)
        );
    }

    #[test]
    fn non_canonical_s_is_rejected() {
        // s = p is a non-canonical field encoding
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        assert_eq!(
            decode_element(&bytes),
            Err(GroupError::InvalidElementEncoding)
        );
        // negative s values are rejected by the codec as well
        let mut negative = [0u8; 32];
        negative[0] = 1;
        assert!(decode_element(&negative).is_err());
    }

    #[test]
    fn round_trip_through_the_codec() {
        let point = hash_to_group(b"round trip", b"ecgroup ristretto test").unwrap();
        let encoded = point.compress();
        let decoded = decode_element(encoded.as_bytes()).unwrap();
        assert_eq!(decoded.compress(), encoded);
    }
}
