//! Scalars modulo the group order.

use curve25519_dalek::scalar::Scalar as DalekScalar;
use ed448_goldilocks::DecafScalar as GoldilocksScalar;
use ed448_goldilocks::elliptic_curve::Field as GoldilocksField;
use elliptic_curve::Field;
use rand_core::{OsRng, RngCore};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

use crate::internal::weierstrass::{p256, p384, p521, secp256k1};
use crate::internal::{
    cast_panic, ct_be_less_or_equal, decaf, edwards25519, pow_square_multiply, ristretto,
};
use crate::{Group, GroupResult};

/// A scalar in `[0, n)` for the order `n` of its group.
///
/// Scalars are owned values; arithmetic methods mutate in place and return
/// the receiver for chaining. Mixing scalars of two different groups
/// panics.
#[derive(Clone, Copy)]
pub struct Scalar {
    group: Group,
    repr: ScalarRepr,
}

#[derive(Clone, Copy)]
pub(crate) enum ScalarRepr {
    Ristretto255(DalekScalar),
    Decaf448(GoldilocksScalar),
    P256(p256::Scalar),
    P384(p384::Scalar),
    P521(p521::Scalar),
    Edwards25519(DalekScalar),
    Secp256k1(secp256k1::Scalar),
}

/// Apply one generic expression across matching variant pairs; mixing
/// variants aborts with a cast error.
macro_rules! zip_repr {
    (($lhs:expr, $rhs:expr), |$a:ident, $b:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (ScalarRepr::Ristretto255($a), ScalarRepr::Ristretto255($b)) => $body,
            (ScalarRepr::Decaf448($a), ScalarRepr::Decaf448($b)) => $body,
            (ScalarRepr::P256($a), ScalarRepr::P256($b)) => $body,
            (ScalarRepr::P384($a), ScalarRepr::P384($b)) => $body,
            (ScalarRepr::P521($a), ScalarRepr::P521($b)) => $body,
            (ScalarRepr::Edwards25519($a), ScalarRepr::Edwards25519($b)) => $body,
            (ScalarRepr::Secp256k1($a), ScalarRepr::Secp256k1($b)) => $body,
            _ => cast_panic(),
        }
    };
}

/// Apply one generic expression to the inner scalar of every variant.
macro_rules! map_repr {
    ($value:expr, |$inner:ident| $body:expr) => {
        match $value {
            ScalarRepr::Ristretto255($inner) => $body,
            ScalarRepr::Decaf448($inner) => $body,
            ScalarRepr::P256($inner) => $body,
            ScalarRepr::P384($inner) => $body,
            ScalarRepr::P521($inner) => $body,
            ScalarRepr::Edwards25519($inner) => $body,
            ScalarRepr::Secp256k1($inner) => $body,
        }
    };
}

impl ScalarRepr {
    pub(crate) fn zero(group: Group) -> Self {
        match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(DalekScalar::ZERO),
            Group::Decaf448Shake256 => Self::Decaf448(<GoldilocksScalar as GoldilocksField>::ZERO),
            Group::P256Sha256 => Self::P256(<p256::Scalar as Field>::ZERO),
            Group::P384Sha384 => Self::P384(<p384::Scalar as Field>::ZERO),
            Group::P521Sha512 => Self::P521(<p521::Scalar as Field>::ZERO),
            Group::Edwards25519Sha512 => Self::Edwards25519(DalekScalar::ZERO),
            Group::Secp256k1Sha256 => Self::Secp256k1(<secp256k1::Scalar as Field>::ZERO),
        }
    }

    pub(crate) fn one(group: Group) -> Self {
        match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(DalekScalar::ONE),
            Group::Decaf448Shake256 => Self::Decaf448(<GoldilocksScalar as GoldilocksField>::ONE),
            Group::P256Sha256 => Self::P256(<p256::Scalar as Field>::ONE),
            Group::P384Sha384 => Self::P384(<p384::Scalar as Field>::ONE),
            Group::P521Sha512 => Self::P521(<p521::Scalar as Field>::ONE),
            Group::Edwards25519Sha512 => Self::Edwards25519(DalekScalar::ONE),
            Group::Secp256k1Sha256 => Self::Secp256k1(<secp256k1::Scalar as Field>::ONE),
        }
    }

    /// No supported order is below 2^64, so the conversion never reduces.
    pub(crate) fn from_u64(group: Group, value: u64) -> Self {
        match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(DalekScalar::from(value)),
            Group::Decaf448Shake256 => Self::Decaf448(GoldilocksScalar::from(value)),
            Group::P256Sha256 => Self::P256(p256::Scalar::from(value)),
            Group::P384Sha384 => Self::P384(p384::Scalar::from(value)),
            Group::P521Sha512 => Self::P521(p521::Scalar::from(value)),
            Group::Edwards25519Sha512 => Self::Edwards25519(DalekScalar::from(value)),
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::Scalar::from(value)),
        }
    }

    pub(crate) fn random(group: Group) -> Self {
        match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(random_dalek_scalar()),
            Group::Edwards25519Sha512 => Self::Edwards25519(random_dalek_scalar()),
            Group::Decaf448Shake256 => Self::Decaf448(random_goldilocks_scalar()),
            Group::P256Sha256 => Self::P256(p256::random_scalar()),
            Group::P384Sha384 => Self::P384(p384::random_scalar()),
            Group::P521Sha512 => Self::P521(p521::random_scalar()),
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::random_scalar()),
        }
    }

    pub(crate) fn hash_to_scalar(group: Group, input: &[u8], dst: &[u8]) -> GroupResult<Self> {
        Ok(match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(ristretto::hash_to_scalar(input, dst)?),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::hash_to_scalar(input, dst)?),
            Group::P256Sha256 => Self::P256(p256::hash_to_scalar(input, dst)?),
            Group::P384Sha384 => Self::P384(p384::hash_to_scalar(input, dst)?),
            Group::P521Sha512 => Self::P521(p521::hash_to_scalar(input, dst)?),
            Group::Edwards25519Sha512 => {
                Self::Edwards25519(edwards25519::hash_to_scalar(input, dst)?)
            }
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::hash_to_scalar(input, dst)?),
        })
    }

    /// Caller has validated the input length.
    pub(crate) fn decode(group: Group, bytes: &[u8]) -> GroupResult<Self> {
        Ok(match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(ristretto::decode_scalar(
                &bytes.try_into().expect("length checked"),
            )?),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::decode_scalar(
                &bytes.try_into().expect("length checked"),
            )?),
            Group::P256Sha256 => Self::P256(p256::decode_scalar(bytes)?),
            Group::P384Sha384 => Self::P384(p384::decode_scalar(bytes)?),
            Group::P521Sha512 => Self::P521(p521::decode_scalar(bytes)?),
            Group::Edwards25519Sha512 => Self::Edwards25519(edwards25519::decode_scalar(
                &bytes.try_into().expect("length checked"),
            )?),
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::decode_scalar(bytes)?),
        })
    }

    /// Canonical wire encoding: little-endian for the Edwards-family
    /// groups, big-endian SEC1 widths for the Weierstrass groups.
    pub(crate) fn encode(&self) -> Vec<u8> {
        match self {
            Self::Ristretto255(s) | Self::Edwards25519(s) => s.to_bytes().to_vec(),
            Self::Decaf448(s) => decaf::encode_scalar(s),
            Self::P256(s) => p256::encode_scalar(s),
            Self::P384(s) => p384::encode_scalar(s),
            Self::P521(s) => p521::encode_scalar(s),
            Self::Secp256k1(s) => secp256k1::encode_scalar(s),
        }
    }

    /// The canonical encoding normalized to big-endian, for ordering and
    /// exponent scanning.
    pub(crate) fn encode_be(&self) -> Vec<u8> {
        let mut bytes = self.encode();
        if matches!(
            self,
            Self::Ristretto255(_) | Self::Edwards25519(_) | Self::Decaf448(_)
        ) {
            bytes.reverse();
        }
        bytes
    }

    pub(crate) fn add_assign(&mut self, rhs: &Self) {
        zip_repr!((self, rhs), |a, b| *a = *a + *b);
    }

    pub(crate) fn sub_assign(&mut self, rhs: &Self) {
        zip_repr!((self, rhs), |a, b| *a = *a - *b);
    }

    pub(crate) fn mul_assign(&mut self, rhs: &Self) {
        zip_repr!((self, rhs), |a, b| *a = *a * *b);
    }

    pub(crate) fn neg_assign(&mut self) {
        map_repr!(self, |s| *s = -*s);
    }

    /// Invert in place; zero stays zero.
    pub(crate) fn invert_assign(&mut self) {
        match self {
            Self::Ristretto255(s) | Self::Edwards25519(s) => {
                let inverted = s.invert();
                *s = DalekScalar::conditional_select(
                    &inverted,
                    &DalekScalar::ZERO,
                    s.ct_eq(&DalekScalar::ZERO),
                );
            }
            Self::Decaf448(s) => *s = invert_or_zero_goldilocks(s),
            Self::P256(s) => *s = invert_or_zero(s),
            Self::P384(s) => *s = invert_or_zero(s),
            Self::P521(s) => *s = invert_or_zero(s),
            Self::Secp256k1(s) => *s = invert_or_zero(s),
        }
    }

    /// Square-and-multiply-always over the exponent's canonical big-endian
    /// bits.
    pub(crate) fn pow_assign(&mut self, exponent_be: &[u8]) {
        match self {
            Self::Ristretto255(s) | Self::Edwards25519(s) => {
                *s = pow_square_multiply(*s, DalekScalar::ONE, exponent_be);
            }
            Self::Decaf448(s) => {
                *s = pow_square_multiply(*s, <GoldilocksScalar as GoldilocksField>::ONE, exponent_be);
            }
            Self::P256(s) => *s = pow_square_multiply(*s, <p256::Scalar as Field>::ONE, exponent_be),
            Self::P384(s) => *s = pow_square_multiply(*s, <p384::Scalar as Field>::ONE, exponent_be),
            Self::P521(s) => *s = pow_square_multiply(*s, <p521::Scalar as Field>::ONE, exponent_be),
            Self::Secp256k1(s) => {
                *s = pow_square_multiply(*s, <secp256k1::Scalar as Field>::ONE, exponent_be);
            }
        }
    }

    pub(crate) fn equal(&self, rhs: &Self) -> bool {
        zip_repr!((self, rhs), |a, b| bool::from(a.ct_eq(b)))
    }

    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Self::Ristretto255(s) | Self::Edwards25519(s) => {
                bool::from(s.ct_eq(&DalekScalar::ZERO))
            }
            Self::Decaf448(s) => bool::from(GoldilocksField::is_zero(s)),
            Self::P256(s) => bool::from(Field::is_zero(s)),
            Self::P384(s) => bool::from(Field::is_zero(s)),
            Self::P521(s) => bool::from(Field::is_zero(s)),
            Self::Secp256k1(s) => bool::from(Field::is_zero(s)),
        }
    }
}

/// Uniform non-zero scalar via 64-byte wide reduction, as in the
/// curve25519 suites.
fn random_dalek_scalar() -> DalekScalar {
    let mut wide = Zeroizing::new([0u8; 64]);
    loop {
        OsRng.fill_bytes(wide.as_mut());
        let candidate = DalekScalar::from_bytes_mod_order_wide(&wide);
        if !bool::from(candidate.ct_eq(&DalekScalar::ZERO)) {
            return candidate;
        }
    }
}

fn random_field_scalar<F: Field>() -> F {
    loop {
        let candidate = F::random(&mut OsRng);
        if !bool::from(candidate.is_zero()) {
            return candidate;
        }
    }
}

fn invert_or_zero<F: Field>(scalar: &F) -> F {
    Option::<F>::from(Field::invert(scalar)).unwrap_or(F::ZERO)
}

/// Adapts the crate's `rand_core` 0.6 `OsRng` to the `rand_core` 0.10
/// `Rng` trait expected by `ed448-goldilocks`'s `ff` 0.14 `Field` impl.
struct GoldilocksOsRng;

impl ed448_goldilocks::rand_core::TryRng for GoldilocksOsRng {
    type Error = core::convert::Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Ok(OsRng.next_u32())
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok(OsRng.next_u64())
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        OsRng.fill_bytes(dst);
        Ok(())
    }
}

fn random_goldilocks_scalar() -> GoldilocksScalar {
    loop {
        let candidate = GoldilocksField::random(&mut GoldilocksOsRng);
        if !bool::from(GoldilocksField::is_zero(&candidate)) {
            return candidate;
        }
    }
}

fn invert_or_zero_goldilocks(scalar: &GoldilocksScalar) -> GoldilocksScalar {
    Option::<GoldilocksScalar>::from(GoldilocksField::invert(scalar))
        .unwrap_or(<GoldilocksScalar as GoldilocksField>::ZERO)
}

impl Scalar {
    pub(crate) fn from_parts(group: Group, repr: ScalarRepr) -> Self {
        Self { group, repr }
    }

    pub(crate) fn repr(&self) -> &ScalarRepr {
        &self.repr
    }

    /// The group this scalar belongs to.
    #[must_use]
    pub fn group(&self) -> Group {
        self.group
    }

    /// Set to zero.
    pub fn zero(&mut self) -> &mut Self {
        self.repr = ScalarRepr::zero(self.group);
        self
    }

    /// Set to one.
    pub fn one(&mut self) -> &mut Self {
        self.repr = ScalarRepr::one(self.group);
        self
    }

    /// Set to `value` reduced modulo the group order (a no-op reduction on
    /// every supported curve).
    pub fn set_uint64(&mut self, value: u64) -> &mut Self {
        self.repr = ScalarRepr::from_u64(self.group, value);
        self
    }

    /// Replace with a uniformly random non-zero scalar.
    pub fn random(&mut self) -> &mut Self {
        self.repr = ScalarRepr::random(self.group);
        self
    }

    /// Add `rhs` in place.
    pub fn add(&mut self, rhs: &Scalar) -> &mut Self {
        self.repr.add_assign(&rhs.repr);
        self
    }

    /// Subtract `rhs` in place.
    pub fn subtract(&mut self, rhs: &Scalar) -> &mut Self {
        self.repr.sub_assign(&rhs.repr);
        self
    }

    /// Multiply by `rhs` in place.
    pub fn multiply(&mut self, rhs: &Scalar) -> &mut Self {
        self.repr.mul_assign(&rhs.repr);
        self
    }

    /// Negate in place.
    pub fn negate(&mut self) -> &mut Self {
        self.repr.neg_assign();
        self
    }

    /// Invert in place; zero is left unchanged.
    pub fn invert(&mut self) -> &mut Self {
        self.repr.invert_assign();
        self
    }

    /// Raise to `exponent` in place, scanning the exponent's canonical
    /// encoding with a constant-time square-and-multiply-always ladder.
    pub fn pow(&mut self, exponent: &Scalar) -> &mut Self {
        if self.group != exponent.group {
            crate::internal::cast_panic();
        }
        let exponent_be = exponent.repr.encode_be();
        self.repr.pow_assign(&exponent_be);
        self
    }

    /// Overwrite with a copy of `other` (same group required).
    pub fn set(&mut self, other: &Scalar) -> &mut Self {
        if self.group != other.group {
            crate::internal::cast_panic();
        }
        self.repr = other.repr;
        self
    }

    /// Constant-time equality.
    #[must_use]
    pub fn equal(&self, rhs: &Scalar) -> bool {
        self.repr.equal(&rhs.repr)
    }

    /// Constant-time zero test.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    /// Constant-time `self <= rhs` on the big-endian canonical encodings.
    #[must_use]
    pub fn less_or_equal(&self, rhs: &Scalar) -> bool {
        if self.group != rhs.group {
            crate::internal::cast_panic();
        }
        ct_be_less_or_equal(&self.repr.encode_be(), &rhs.repr.encode_be())
    }

    /// Canonical binary encoding.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.repr.encode()
    }

    /// Lowercase fixed-width hex form of [`Self::encode`].
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode(self.encode())
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.repr = ScalarRepr::zero(self.group);
    }
}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // scalars are routinely secret; do not print the value
        write!(f, "Scalar({})", self.group)
    }
}
