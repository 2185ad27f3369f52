//! Decaf448 backend over the Goldilocks prime-order group.

use ecgroup_h2c::{expand_message_xof, hash_to_field_xof};
use ecgroup_hash::Xof;
use ed448_goldilocks::{CompressedDecaf, DecafPoint, DecafScalar as Scalar};
use ed448_goldilocks::elliptic_curve::PrimeField;
use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::Lazy;
use subtle::ConstantTimeEq;

use super::biguint_to_le_bytes;
use crate::{GroupError, GroupResult};

/// Per-element expansion length for the 446-bit scalar field at k = 224.
const SCALAR_HASH_LENGTH: usize = 84;

/// Group order l = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885.
static ORDER: Lazy<BigUint> = Lazy::new(|| {
    BigUint::from_str_radix(
        "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9\
         c44edb49aed63690216cc2728dc58f552378c292ab5844f3",
        16,
    )
    .expect("order constant parses")
});

pub(crate) fn generator() -> DecafPoint {
    DecafPoint::GENERATOR
}

pub(crate) fn identity() -> DecafPoint {
    DecafPoint::IDENTITY
}

pub(crate) fn is_identity(point: &DecafPoint) -> bool {
    bool::from(point.ct_eq(&DecafPoint::IDENTITY))
}

/// The one-way map over a 112-byte SHAKE-256 expansion. Decaf
/// representatives inherently clear the cofactor; the nonuniform variant
/// shares the construction.
pub(crate) fn hash_to_group(input: &[u8], dst: &[u8]) -> GroupResult<DecafPoint> {
    let uniform = expand_message_xof(Xof::Shake256, input, dst, 112)?;
    let mut wide = [0u8; 112];
    wide.copy_from_slice(&uniform);
    Ok(DecafPoint::from_uniform_bytes(&wide))
}

pub(crate) fn hash_to_scalar(input: &[u8], dst: &[u8]) -> GroupResult<Scalar> {
    let u = hash_to_field_xof(Xof::Shake256, input, dst, 1, SCALAR_HASH_LENGTH, &ORDER)?;
    let le: [u8; 56] = biguint_to_le_bytes(&u[0]);
    Ok(scalar_from_reduced_le(&le))
}

/// Build a scalar from 56 little-endian bytes already known to be below the
/// group order.
fn scalar_from_reduced_le(bytes: &[u8; 56]) -> Scalar {
    let mut repr = <Scalar as PrimeField>::Repr::default();
    AsMut::<[u8]>::as_mut(&mut repr)[..56].copy_from_slice(bytes);
    Option::from(Scalar::from_repr(repr)).expect("reduced scalar is canonical")
}

pub(crate) fn decode_scalar(bytes: &[u8; 56]) -> GroupResult<Scalar> {
    let mut repr = <Scalar as PrimeField>::Repr::default();
    AsMut::<[u8]>::as_mut(&mut repr)[..56].copy_from_slice(bytes);
    Option::from(Scalar::from_repr(repr)).ok_or(GroupError::InvalidScalarEncoding)
}

pub(crate) fn encode_scalar(scalar: &Scalar) -> Vec<u8> {
    AsRef::<[u8]>::as_ref(&scalar.to_repr())[..56].to_vec()
}

pub(crate) fn decode_element(bytes: &[u8; 56]) -> GroupResult<DecafPoint> {
    let point = Option::from(CompressedDecaf(*bytes).decompress())
        .ok_or(GroupError::InvalidElementEncoding)?;
    if is_identity(&point) {
        return Err(GroupError::IdentityDecoded);
    }
    Ok(point)
}

pub(crate) fn encode_element(point: &DecafPoint) -> Vec<u8> {
    point.compress().0.to_vec()
}
