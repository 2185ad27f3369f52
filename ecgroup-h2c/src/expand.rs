//! `expand_message_xmd` and `expand_message_xof` (RFC 9380 §5.3).

use digest::Digest;
use digest::core_api::BlockSizeUser;
use digest::{ExtendableOutput, Update, XofReader};
use ecgroup_hash::{FixedHash, Xof};
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Shake128, Shake256};

use crate::{ExpandError, ExpandResult};

/// Prefix hashed over oversized domain separation tags before use.
const OVERSIZE_DST_PREFIX: &[u8] = b"H2C-OVERSIZE-DST-";

/// Longest DST passed through without folding.
const MAX_DST_LENGTH: usize = 255;

/// Upper bound on the output length of either expansion primitive.
const MAX_EXPANSION: usize = u16::MAX as usize;

/// Expand `msg` into `len_in_bytes` uniform bytes with the fixed-output
/// hash `hash`, domain-separated by `dst`.
///
/// # Errors
///
/// `ZeroLengthDst` when `dst` is empty; `ExpansionTooLong` when
/// `len_in_bytes` exceeds `2^16 - 1` or `255 * b_in_bytes`.
pub fn expand_message_xmd(
    hash: FixedHash,
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> ExpandResult<Vec<u8>> {
    match hash {
        FixedHash::Sha256 => xmd::<Sha256>(msg, dst, len_in_bytes),
        FixedHash::Sha384 => xmd::<Sha384>(msg, dst, len_in_bytes),
        FixedHash::Sha512 => xmd::<Sha512>(msg, dst, len_in_bytes),
    }
}

/// Expand `msg` into `len_in_bytes` uniform bytes with the extensible-output
/// function `xof`, domain-separated by `dst`.
///
/// Oversized tags are folded to `2k/8` bytes where `k` is the XOF's target
/// security level.
///
/// # Errors
///
/// `ZeroLengthDst` when `dst` is empty; `ExpansionTooLong` when
/// `len_in_bytes` exceeds `2^16 - 1`.
pub fn expand_message_xof(
    xof: Xof,
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> ExpandResult<Vec<u8>> {
    let k = xof.security_level();
    match xof {
        Xof::Shake128 => xof_impl::<Shake128>(msg, dst, len_in_bytes, k),
        Xof::Shake256 => xof_impl::<Shake256>(msg, dst, len_in_bytes, k),
    }
}

fn xmd<D: Digest + BlockSizeUser>(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> ExpandResult<Vec<u8>> {
    if dst.is_empty() {
        return Err(ExpandError::ZeroLengthDst);
    }
    let b_in_bytes = <D as Digest>::output_size();
    let s_in_bytes = <D as BlockSizeUser>::block_size();
    if len_in_bytes > MAX_EXPANSION || len_in_bytes > 255 * b_in_bytes {
        return Err(ExpandError::ExpansionTooLong);
    }

    let mut dst_prime = if dst.len() > MAX_DST_LENGTH {
        let mut hasher = D::new();
        Digest::update(&mut hasher, OVERSIZE_DST_PREFIX);
        Digest::update(&mut hasher, dst);
        hasher.finalize().to_vec()
    } else {
        dst.to_vec()
    };
    let dst_len = dst_prime.len() as u8;
    dst_prime.push(dst_len);

    let ell = len_in_bytes.div_ceil(b_in_bytes);
    let z_pad = vec![0u8; s_in_bytes];

    let mut hasher = D::new();
    Digest::update(&mut hasher, &z_pad);
    Digest::update(&mut hasher, msg);
    Digest::update(&mut hasher, (len_in_bytes as u16).to_be_bytes());
    Digest::update(&mut hasher, [0u8]);
    Digest::update(&mut hasher, &dst_prime);
    let b_0 = hasher.finalize();

    let mut hasher = D::new();
    Digest::update(&mut hasher, &b_0);
    Digest::update(&mut hasher, [1u8]);
    Digest::update(&mut hasher, &dst_prime);
    let mut b_i = hasher.finalize();

    let mut uniform = Vec::with_capacity(ell * b_in_bytes);
    uniform.extend_from_slice(&b_i);
    for i in 2..=ell {
        let mixed: Vec<u8> = b_0.iter().zip(b_i.iter()).map(|(x, y)| x ^ y).collect();
        let mut hasher = D::new();
        Digest::update(&mut hasher, &mixed);
        Digest::update(&mut hasher, [i as u8]);
        Digest::update(&mut hasher, &dst_prime);
        b_i = hasher.finalize();
        uniform.extend_from_slice(&b_i);
    }
    uniform.truncate(len_in_bytes);
    Ok(uniform)
}

fn xof_impl<X: Default + Update + ExtendableOutput>(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
    security_level: usize,
) -> ExpandResult<Vec<u8>> {
    if dst.is_empty() {
        return Err(ExpandError::ZeroLengthDst);
    }
    if len_in_bytes > MAX_EXPANSION {
        return Err(ExpandError::ExpansionTooLong);
    }

    let mut dst_prime = if dst.len() > MAX_DST_LENGTH {
        let mut hasher = X::default();
        hasher.update(OVERSIZE_DST_PREFIX);
        hasher.update(dst);
        let mut folded = vec![0u8; (2 * security_level).div_ceil(8)];
        hasher.finalize_xof().read(&mut folded);
        folded
    } else {
        dst.to_vec()
    };
    let dst_len = dst_prime.len() as u8;
    dst_prime.push(dst_len);

    let mut hasher = X::default();
    hasher.update(msg);
    hasher.update(&(len_in_bytes as u16).to_be_bytes());
    hasher.update(&dst_prime);
    let mut uniform = vec![0u8; len_in_bytes];
    hasher.finalize_xof().read(&mut uniform);
    Ok(uniform)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    #[test]
    fn xmd_known_answer() {
        let out = expand_message_xmd(FixedHash::Sha256, b"", DST, 0x20).unwrap();
        assert_eq!(
            hex::encode(out),
            "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"
        );
    }

    #[test]
    fn xmd_rejects_empty_dst() {
        assert_eq!(
            expand_message_xmd(FixedHash::Sha512, b"msg", b"", 32),
            Err(ExpandError::ZeroLengthDst)
        );
        assert_eq!(
            expand_message_xof(Xof::Shake256, b"msg", b"", 32),
            Err(ExpandError::ZeroLengthDst)
        );
    }

    #[test]
    fn xmd_rejects_oversized_output() {
        assert_eq!(
            expand_message_xmd(FixedHash::Sha256, b"msg", DST, 0x10000),
            Err(ExpandError::ExpansionTooLong)
        );
        // 255 * 32 is the per-hash ceiling for SHA-256
        assert_eq!(
            expand_message_xmd(FixedHash::Sha256, b"msg", DST, 255 * 32 + 1),
            Err(ExpandError::ExpansionTooLong)
        );
        assert!(expand_message_xmd(FixedHash::Sha256, b"msg", DST, 255 * 32).is_ok());
        assert_eq!(
            expand_message_xof(Xof::Shake128, b"msg", DST, 0x10000),
            Err(ExpandError::ExpansionTooLong)
        );
    }

    #[test]
    fn oversized_dst_is_folded_not_rejected() {
        let long_dst = vec![0x41u8; 300];
        let out = expand_message_xmd(FixedHash::Sha256, b"msg", &long_dst, 32).unwrap();
        assert_eq!(out.len(), 32);
        let out = expand_message_xof(Xof::Shake256, b"msg", &long_dst, 32).unwrap();
        assert_eq!(out.len(), 32);
    }

    #[test]
    fn short_dst_is_accepted() {
        // Below the 16-byte recommended minimum, but only emptiness is fatal.
        assert!(expand_message_xmd(FixedHash::Sha256, b"msg", b"x", 32).is_ok());
    }

    #[test]
    fn output_length_is_domain_separated() {
        let long = expand_message_xmd(FixedHash::Sha256, b"abc", DST, 0x80).unwrap();
        assert_eq!(long.len(), 0x80);
        // len_in_bytes is bound into msg_prime, so prefixes must not agree
        let short = expand_message_xmd(FixedHash::Sha256, b"abc", DST, 0x20).unwrap();
        assert_ne!(&long[..0x20], &short[..]);
    }
}
