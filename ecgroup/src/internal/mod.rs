//! Per-curve backends and shared constant-time helpers.

pub(crate) mod debug;
pub(crate) mod decaf;
pub(crate) mod edwards25519;
pub(crate) mod elligator;
pub(crate) mod field25519;
pub(crate) mod ristretto;
pub(crate) mod weierstrass;

use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable};

/// Abort on cross-group misuse. Mixing two groups is a programmer bug, so
/// no error return is defined for it.
pub(crate) fn cast_panic() -> ! {
    panic!("{}", crate::GroupError::CastError)
}

/// Serialize a reduced big integer into a fixed-width little-endian array.
pub(crate) fn biguint_to_le_bytes<const N: usize>(value: &BigUint) -> [u8; N] {
    let bytes = value.to_bytes_le();
    debug_assert!(bytes.len() <= N);
    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

/// Constant-time `a <= b` over equal-length big-endian encodings.
pub(crate) fn ct_be_less_or_equal(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    // big-integer subtraction b - a, least significant byte first; the final
    // borrow is set exactly when a > b
    let mut borrow = 0i32;
    for i in (0..a.len()).rev() {
        let diff = i32::from(b[i]) - i32::from(a[i]) - borrow;
        borrow = (diff >> 31) & 1;
    }
    borrow == 0
}

/// Square-and-multiply-always exponentiation over the big-endian bits of a
/// canonical scalar encoding. The multiply result is folded in with a
/// constant-time select, so the sequence of operations does not depend on
/// the exponent.
pub(crate) fn pow_square_multiply<T>(base: T, one: T, exponent_be: &[u8]) -> T
where
    T: Copy + core::ops::Mul<Output = T> + ConditionallySelectable,
{
    let mut acc = one;
    for byte in exponent_be {
        for shift in (0..8).rev() {
            acc = acc * acc;
            let with_base = acc * base;
            acc = T::conditional_select(&acc, &with_base, Choice::from((byte >> shift) & 1));
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_compare_orders_correctly() {
        assert!(ct_be_less_or_equal(&[0, 1], &[0, 1]));
        assert!(ct_be_less_or_equal(&[0, 1], &[0, 2]));
        assert!(ct_be_less_or_equal(&[0, 0xff], &[1, 0]));
        assert!(!ct_be_less_or_equal(&[1, 0], &[0, 0xff]));
        assert!(!ct_be_less_or_equal(&[0, 2], &[0, 1]));
    }

    #[test]
    fn biguint_serialization_pads_high_bytes() {
        let out: [u8; 4] = biguint_to_le_bytes(&BigUint::from(0x0102u32));
        assert_eq!(out, [0x02, 0x01, 0, 0]);
    }
}
