//! Field arithmetic in GF(2^255-19).
//!
//! Elements are held in radix-2^51 representation as five 64-bit limbs,
//! so products fit in 128-bit intermediates and reduction folds the top
//! limb back with a multiply by 19. Limbs stay below 2^52 after every
//! public operation.
//!
//! All operations are constant-time: selection is mask-based, equality and
//! sign are computed on the canonical serialization, and inversions and
//! square roots run fixed addition chains.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const LOW_51_BIT_MASK: u64 = (1 << 51) - 1;

/// 16 * p, added before subtraction so limb differences never borrow.
const SIXTEEN_P: [u64; 5] = [
    36_028_797_018_963_664,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
];

/// Field element in GF(2^255-19), five limbs in radix 2^51.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self([0; 5]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0]);

    /// sqrt(-1), the canonical even-parity root.
    pub const SQRT_M1: Self = Self([
        1_718_705_420_411_056,
        234_908_883_556_509,
        2_233_514_472_574_048,
        2_117_202_627_021_982,
        765_476_049_583_133,
    ]);

    /// Load an element from its 32-byte little-endian encoding.
    ///
    /// The top bit of the final byte is ignored, as in every 255-bit
    /// curve25519 codec; callers that require canonical input must compare
    /// against [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let load8 = |offset: usize| -> u64 {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[offset..offset + 8]);
            u64::from_le_bytes(word)
        };

        Self([
            load8(0) & LOW_51_BIT_MASK,
            (load8(6) >> 3) & LOW_51_BIT_MASK,
            (load8(12) >> 6) & LOW_51_BIT_MASK,
            (load8(19) >> 1) & LOW_51_BIT_MASK,
            (load8(24) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Serialize to the canonical 32-byte little-endian encoding, strictly
    /// below 2^255 - 19.
    pub fn to_bytes(self) -> [u8; 32] {
        let mut l = self.reduce().0;

        // Compute the borrow-free quotient of (value + 19) by 2^255; q is 1
        // exactly when the reduced value is >= p, so adding 19q and dropping
        // bit 255 yields the canonical representative.
        let mut q = (l[0] + 19) >> 51;
        q = (l[1] + q) >> 51;
        q = (l[2] + q) >> 51;
        q = (l[3] + q) >> 51;
        q = (l[4] + q) >> 51;

        l[0] += 19 * q;

        let mut carry = l[0] >> 51;
        l[0] &= LOW_51_BIT_MASK;
        l[1] += carry;
        carry = l[1] >> 51;
        l[1] &= LOW_51_BIT_MASK;
        l[2] += carry;
        carry = l[2] >> 51;
        l[2] &= LOW_51_BIT_MASK;
        l[3] += carry;
        carry = l[3] >> 51;
        l[3] &= LOW_51_BIT_MASK;
        l[4] += carry;
        l[4] &= LOW_51_BIT_MASK;

        let mut s = [0u8; 32];
        s[0] = l[0] as u8;
        s[1] = (l[0] >> 8) as u8;
        s[2] = (l[0] >> 16) as u8;
        s[3] = (l[0] >> 24) as u8;
        s[4] = (l[0] >> 32) as u8;
        s[5] = (l[0] >> 40) as u8;
        s[6] = ((l[0] >> 48) | (l[1] << 3)) as u8;
        s[7] = (l[1] >> 5) as u8;
        s[8] = (l[1] >> 13) as u8;
        s[9] = (l[1] >> 21) as u8;
        s[10] = (l[1] >> 29) as u8;
        s[11] = (l[1] >> 37) as u8;
        s[12] = ((l[1] >> 45) | (l[2] << 6)) as u8;
        s[13] = (l[2] >> 2) as u8;
        s[14] = (l[2] >> 10) as u8;
        s[15] = (l[2] >> 18) as u8;
        s[16] = (l[2] >> 26) as u8;
        s[17] = (l[2] >> 34) as u8;
        s[18] = (l[2] >> 42) as u8;
        s[19] = ((l[2] >> 50) | (l[3] << 1)) as u8;
        s[20] = (l[3] >> 7) as u8;
        s[21] = (l[3] >> 15) as u8;
        s[22] = (l[3] >> 23) as u8;
        s[23] = (l[3] >> 31) as u8;
        s[24] = (l[3] >> 39) as u8;
        s[25] = ((l[3] >> 47) | (l[4] << 4)) as u8;
        s[26] = (l[4] >> 4) as u8;
        s[27] = (l[4] >> 12) as u8;
        s[28] = (l[4] >> 20) as u8;
        s[29] = (l[4] >> 28) as u8;
        s[30] = (l[4] >> 36) as u8;
        s[31] = (l[4] >> 44) as u8;
        s
    }

    /// One carry pass; brings every limb below 2^51 + epsilon.
    fn reduce(self) -> Self {
        let mut l = self.0;

        let mut carry = l[0] >> 51;
        l[0] &= LOW_51_BIT_MASK;
        l[1] += carry;
        carry = l[1] >> 51;
        l[1] &= LOW_51_BIT_MASK;
        l[2] += carry;
        carry = l[2] >> 51;
        l[2] &= LOW_51_BIT_MASK;
        l[3] += carry;
        carry = l[3] >> 51;
        l[3] &= LOW_51_BIT_MASK;
        l[4] += carry;
        carry = l[4] >> 51;
        l[4] &= LOW_51_BIT_MASK;
        l[0] += carry * 19;
        carry = l[0] >> 51;
        l[0] &= LOW_51_BIT_MASK;
        l[1] += carry;

        Self(l)
    }

    /// Square the element.
    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    #[inline]
    fn pow2k(self, k: u32) -> Self {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Fixed chain computing (self^(2^250-1), self^11)-derived powers shared
    /// by `invert` and `pow_p58`.
    fn pow22501(self) -> (Self, Self) {
        let t0 = self.square();
        let t1 = t0.square().square();
        let t2 = self * t1;
        let t3 = t0 * t2;
        let t4 = t3.square();
        let t5 = t2 * t4;
        let t6 = t5.pow2k(5);
        let t7 = t6 * t5;
        let t8 = t7.pow2k(10);
        let t9 = t8 * t7;
        let t10 = t9.pow2k(20);
        let t11 = t10 * t9;
        let t12 = t11.pow2k(10);
        let t13 = t12 * t7;
        let t14 = t13.pow2k(50);
        let t15 = t14 * t13;
        let t16 = t15.pow2k(100);
        let t17 = t16 * t15;
        let t18 = t17.pow2k(50);
        let t19 = t18 * t13;

        (t19, t3)
    }

    /// Multiplicative inverse by Fermat's little theorem; zero maps to zero.
    pub fn invert(self) -> Self {
        let (t19, t3) = self.pow22501();
        let t20 = t19.pow2k(5);
        t20 * t3
    }

    /// self^((p-5)/8), the exponent used by the curve25519 square-root
    /// machinery.
    pub fn pow_p58(self) -> Self {
        let (t19, _) = self.pow22501();
        let t20 = t19.pow2k(2);
        t20 * self
    }

    /// RFC 9380 §F.2 square-root ratio for p = 5 (mod 8).
    ///
    /// Returns `(is_square, r)` with `r^2 * v = u` when `u/v` is a square,
    /// and the canonical non-negative root of `sqrt(-1) * u/v` otherwise.
    pub fn sqrt_ratio(u: &Self, v: &Self) -> (Choice, Self) {
        let v3 = v.square() * *v;
        let v7 = v3.square() * *v;
        let mut r = (*u * v3) * (*u * v7).pow_p58();
        let check = *v * r.square();

        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&-*u);
        let flipped_sign_i = check.ct_eq(&-(*u * Self::SQRT_M1));

        let r_prime = r * Self::SQRT_M1;
        r = Self::conditional_select(&r, &r_prime, flipped_sign | flipped_sign_i);

        let r_neg = -r;
        r = Self::conditional_select(&r, &r_neg, r.is_negative());

        (correct_sign | flipped_sign, r)
    }

    /// Constant-time square root: the non-negative root when one exists.
    pub fn sqrt(&self) -> subtle::CtOption<Self> {
        let (is_square, root) = Self::sqrt_ratio(self, &Self::ONE);
        subtle::CtOption::new(root, is_square)
    }

    /// Swap `a` and `b` when `choice` is set, in constant time.
    pub fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        for (x, y) in a.0.iter_mut().zip(b.0.iter_mut()) {
            u64::conditional_swap(x, y, choice);
        }
    }

    /// Constant-time zero test on the canonical encoding.
    pub fn is_zero(&self) -> Choice {
        self.to_bytes().ct_eq(&[0u8; 32])
    }

    /// RFC 9380 `sgn0`: the low bit of the canonical representative.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }
}

impl core::ops::Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut l = self.0;
        for (limb, other) in l.iter_mut().zip(rhs.0.iter()) {
            *limb += other;
        }
        Self(l).reduce()
    }
}

impl core::ops::Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut l = self.0;
        for ((limb, other), p16) in l.iter_mut().zip(rhs.0.iter()).zip(SIXTEEN_P.iter()) {
            *limb = *limb + p16 - other;
        }
        Self(l).reduce()
    }
}

impl core::ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl core::ops::Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3, a4] = self.0;
        let [b0, b1, b2, b3, b4] = rhs.0;

        // Fold the limbs above 2^255 back with the identity 2^255 = 19.
        let b1_19 = b1 * 19;
        let b2_19 = b2 * 19;
        let b3_19 = b3 * 19;
        let b4_19 = b4 * 19;

        let m = |x: u64, y: u64| -> u128 { u128::from(x) * u128::from(y) };

        let mut c0 = m(a0, b0) + m(a1, b4_19) + m(a2, b3_19) + m(a3, b2_19) + m(a4, b1_19);
        let mut c1 = m(a0, b1) + m(a1, b0) + m(a2, b4_19) + m(a3, b3_19) + m(a4, b2_19);
        let mut c2 = m(a0, b2) + m(a1, b1) + m(a2, b0) + m(a3, b4_19) + m(a4, b3_19);
        let mut c3 = m(a0, b3) + m(a1, b2) + m(a2, b1) + m(a3, b0) + m(a4, b4_19);
        let mut c4 = m(a0, b4) + m(a1, b3) + m(a2, b2) + m(a3, b1) + m(a4, b0);

        const MASK: u128 = (1 << 51) - 1;
        c1 += c0 >> 51;
        c0 &= MASK;
        c2 += c1 >> 51;
        c1 &= MASK;
        c3 += c2 >> 51;
        c2 &= MASK;
        c4 += c3 >> 51;
        c3 &= MASK;
        c0 += 19 * (c4 >> 51);
        c4 &= MASK;
        c1 += c0 >> 51;
        c0 &= MASK;

        Self([c0 as u64, c1 as u64, c2 as u64, c3 as u64, c4 as u64])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(value: u64) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        FieldElement::from_bytes(&bytes)
    }

    #[test]
    fn bytes_roundtrip() {
        let one = FieldElement::ONE.to_bytes();
        assert_eq!(one[0], 1);
        assert_eq!(FieldElement::from_bytes(&one).to_bytes(), one);

        // p - 1, the largest canonical value
        let mut p_minus_one = [0xffu8; 32];
        p_minus_one[0] = 0xec;
        p_minus_one[31] = 0x7f;
        assert_eq!(
            FieldElement::from_bytes(&p_minus_one).to_bytes(),
            p_minus_one
        );
    }

    #[test]
    fn non_canonical_input_reduces() {
        // p itself must serialize back as zero
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;
        assert_eq!(FieldElement::from_bytes(&p).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn arithmetic_identities() {
        let a = fe(77);
        let b = fe(13);
        assert_eq!((a + b).to_bytes(), fe(90).to_bytes());
        assert_eq!((a - b).to_bytes(), fe(64).to_bytes());
        assert_eq!((a * b).to_bytes(), fe(1001).to_bytes());
        assert_eq!(a.square().to_bytes(), fe(5929).to_bytes());
        assert_eq!((a + (-a)).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn invert_round_trips() {
        let a = fe(486662);
        assert_eq!((a * a.invert()).to_bytes(), FieldElement::ONE.to_bytes());
        assert_eq!(FieldElement::ZERO.invert().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn sqrt_m1_squares_to_minus_one() {
        let minus_one = -FieldElement::ONE;
        assert_eq!(
            FieldElement::SQRT_M1.square().to_bytes(),
            minus_one.to_bytes()
        );
        // the pinned constant is the even-parity root
        assert_eq!(FieldElement::SQRT_M1.is_negative().unwrap_u8(), 0);
    }

    #[test]
    fn sqrt_ratio_square_case() {
        let (is_square, root) = FieldElement::sqrt_ratio(&fe(4), &FieldElement::ONE);
        assert!(bool::from(is_square));
        assert_eq!(root.to_bytes(), fe(2).to_bytes());
    }

    #[test]
    fn sqrt_ratio_nonsquare_case() {
        // 2 is not a square mod p; the witness root satisfies r^2 = sqrt(-1)*2
        let two = fe(2);
        let (is_square, root) = FieldElement::sqrt_ratio(&two, &FieldElement::ONE);
        assert!(!bool::from(is_square));
        let expected = FieldElement::SQRT_M1 * two;
        assert_eq!(root.square().to_bytes(), expected.to_bytes());
        assert_eq!(root.is_negative().unwrap_u8(), 0);
    }

    #[test]
    fn sqrt_of_four_is_two() {
        let root = fe(4).sqrt().unwrap();
        assert_eq!(root.to_bytes(), fe(2).to_bytes());
        // 2 is a non-residue, so no root exists
        assert!(bool::from(fe(2).sqrt().is_none()));
    }

    #[test]
    fn conditional_swap_is_exact() {
        let mut a = fe(1);
        let mut b = fe(2);
        FieldElement::conditional_swap(&mut a, &mut b, Choice::from(0));
        assert_eq!(a.to_bytes(), fe(1).to_bytes());
        FieldElement::conditional_swap(&mut a, &mut b, Choice::from(1));
        assert_eq!(a.to_bytes(), fe(2).to_bytes());
        assert_eq!(b.to_bytes(), fe(1).to_bytes());
    }

    #[test]
    fn conditional_select_is_exact() {
        let a = fe(1);
        let b = fe(2);
        let picked = FieldElement::conditional_select(&a, &b, Choice::from(1));
        assert_eq!(picked.to_bytes(), b.to_bytes());
        let kept = FieldElement::conditional_select(&a, &b, Choice::from(0));
        assert_eq!(kept.to_bytes(), a.to_bytes());
    }

    #[test]
    fn deep_operation_chain_stays_reduced() {
        let mut acc = fe(3);
        for _ in 0..200 {
            acc = (acc + acc) * acc - FieldElement::ONE;
        }
        // canonical serialization keeps the value below p
        let bytes = acc.to_bytes();
        assert!(bytes[31] & 0x80 == 0);
    }
}
