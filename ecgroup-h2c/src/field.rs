//! `hash_to_field` (RFC 9380 §5.2).
//!
//! Expanded bytes are consumed in `length`-byte big-endian windows and
//! reduced modulo the target field characteristic. All supported suites hash
//! into a degree-one extension, so each window yields one field element.

use ecgroup_hash::{FixedHash, Xof};
use num_bigint::BigUint;

use crate::expand::{expand_message_xmd, expand_message_xof};
use crate::ExpandResult;

/// Hash `msg` to `count` elements of the field of characteristic `modulus`,
/// expanding with `expand_message_xmd` over `hash`.
///
/// `length` is the per-element expansion length `L = ceil((ceil(log2 p) + k) / 8)`.
///
/// # Errors
///
/// Propagates the expansion errors of [`expand_message_xmd`].
pub fn hash_to_field_xmd(
    hash: FixedHash,
    msg: &[u8],
    dst: &[u8],
    count: usize,
    length: usize,
    modulus: &BigUint,
) -> ExpandResult<Vec<BigUint>> {
    let uniform = expand_message_xmd(hash, msg, dst, count * length)?;
    Ok(reduce_windows(&uniform, length, modulus))
}

/// Hash `msg` to `count` field elements, expanding with
/// `expand_message_xof` over `xof`.
///
/// # Errors
///
/// Propagates the expansion errors of [`expand_message_xof`].
pub fn hash_to_field_xof(
    xof: Xof,
    msg: &[u8],
    dst: &[u8],
    count: usize,
    length: usize,
    modulus: &BigUint,
) -> ExpandResult<Vec<BigUint>> {
    let uniform = expand_message_xof(xof, msg, dst, count * length)?;
    Ok(reduce_windows(&uniform, length, modulus))
}

fn reduce_windows(uniform: &[u8], length: usize, modulus: &BigUint) -> Vec<BigUint> {
    uniform
        .chunks_exact(length)
        .map(|window| BigUint::from_bytes_be(window) % modulus)
        .collect()
}
