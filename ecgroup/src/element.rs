//! Elements of the prime-order group.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::traits::{Identity, IsIdentity};
use ed448_goldilocks::DecafPoint;
use elliptic_curve::group::Group as _;
use subtle::ConstantTimeEq;

use crate::internal::weierstrass::{p256, p384, p521, secp256k1};
use crate::internal::{cast_panic, decaf, edwards25519, ristretto};
use crate::scalar::{Scalar, ScalarRepr};
use crate::{Group, GroupResult};

/// A point of the prime-order subgroup (or its canonical quotient
/// representative for Ristretto255/Decaf448).
///
/// Elements are owned values; arithmetic methods mutate in place and return
/// the receiver for chaining. The identity is representable and is produced
/// by group operations, but decoding an identity encoding fails. Mixing
/// elements of two different groups panics.
#[derive(Clone, Copy)]
pub struct Element {
    group: Group,
    repr: ElementRepr,
}

#[derive(Clone, Copy)]
pub(crate) enum ElementRepr {
    Ristretto255(RistrettoPoint),
    Decaf448(DecafPoint),
    P256(p256::Point),
    P384(p384::Point),
    P521(p521::Point),
    Edwards25519(EdwardsPoint),
    Secp256k1(secp256k1::Point),
}

macro_rules! zip_points {
    (($lhs:expr, $rhs:expr), |$a:ident, $b:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (ElementRepr::Ristretto255($a), ElementRepr::Ristretto255($b)) => $body,
            (ElementRepr::Decaf448($a), ElementRepr::Decaf448($b)) => $body,
            (ElementRepr::P256($a), ElementRepr::P256($b)) => $body,
            (ElementRepr::P384($a), ElementRepr::P384($b)) => $body,
            (ElementRepr::P521($a), ElementRepr::P521($b)) => $body,
            (ElementRepr::Edwards25519($a), ElementRepr::Edwards25519($b)) => $body,
            (ElementRepr::Secp256k1($a), ElementRepr::Secp256k1($b)) => $body,
            _ => cast_panic(),
        }
    };
}

macro_rules! map_points {
    ($value:expr, |$inner:ident| $body:expr) => {
        match $value {
            ElementRepr::Ristretto255($inner) => $body,
            ElementRepr::Decaf448($inner) => $body,
            ElementRepr::P256($inner) => $body,
            ElementRepr::P384($inner) => $body,
            ElementRepr::P521($inner) => $body,
            ElementRepr::Edwards25519($inner) => $body,
            ElementRepr::Secp256k1($inner) => $body,
        }
    };
}

impl ElementRepr {
    pub(crate) fn identity(group: Group) -> Self {
        match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(RistrettoPoint::identity()),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::identity()),
            Group::P256Sha256 => Self::P256(p256::identity()),
            Group::P384Sha384 => Self::P384(p384::identity()),
            Group::P521Sha512 => Self::P521(p521::identity()),
            Group::Edwards25519Sha512 => Self::Edwards25519(EdwardsPoint::identity()),
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::identity()),
        }
    }

    pub(crate) fn generator(group: Group) -> Self {
        match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(ristretto::generator()),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::generator()),
            Group::P256Sha256 => Self::P256(p256::generator()),
            Group::P384Sha384 => Self::P384(p384::generator()),
            Group::P521Sha512 => Self::P521(p521::generator()),
            Group::Edwards25519Sha512 => Self::Edwards25519(edwards25519::generator()),
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::generator()),
        }
    }

    pub(crate) fn hash_to_group(group: Group, input: &[u8], dst: &[u8]) -> GroupResult<Self> {
        Ok(match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(ristretto::hash_to_group(input, dst)?),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::hash_to_group(input, dst)?),
            Group::P256Sha256 => Self::P256(p256::hash_to_group(input, dst)?),
            Group::P384Sha384 => Self::P384(p384::hash_to_group(input, dst)?),
            Group::P521Sha512 => Self::P521(p521::hash_to_group(input, dst)?),
            Group::Edwards25519Sha512 => {
                Self::Edwards25519(edwards25519::hash_to_group(input, dst)?)
            }
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::hash_to_group(input, dst)?),
        })
    }

    pub(crate) fn encode_to_group(group: Group, input: &[u8], dst: &[u8]) -> GroupResult<Self> {
        Ok(match group {
            // one-way-map groups share the random-oracle construction
            Group::Ristretto255Sha512 => Self::Ristretto255(ristretto::hash_to_group(input, dst)?),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::hash_to_group(input, dst)?),
            Group::P256Sha256 => Self::P256(p256::encode_to_group(input, dst)?),
            Group::P384Sha384 => Self::P384(p384::encode_to_group(input, dst)?),
            Group::P521Sha512 => Self::P521(p521::encode_to_group(input, dst)?),
            Group::Edwards25519Sha512 => {
                Self::Edwards25519(edwards25519::encode_to_group(input, dst)?)
            }
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::encode_to_group(input, dst)?),
        })
    }

    /// Caller has validated the input length.
    pub(crate) fn decode(group: Group, bytes: &[u8]) -> GroupResult<Self> {
        Ok(match group {
            Group::Ristretto255Sha512 => Self::Ristretto255(ristretto::decode_element(
                &bytes.try_into().expect("length checked"),
            )?),
            Group::Decaf448Shake256 => Self::Decaf448(decaf::decode_element(
                &bytes.try_into().expect("length checked"),
            )?),
            Group::P256Sha256 => Self::P256(p256::decode_element(bytes)?),
            Group::P384Sha384 => Self::P384(p384::decode_element(bytes)?),
            Group::P521Sha512 => Self::P521(p521::decode_element(bytes)?),
            Group::Edwards25519Sha512 => Self::Edwards25519(edwards25519::decode_element(
                &bytes.try_into().expect("length checked"),
            )?),
            Group::Secp256k1Sha256 => Self::Secp256k1(secp256k1::decode_element(bytes)?),
        })
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        match self {
            Self::Ristretto255(p) => p.compress().to_bytes().to_vec(),
            Self::Decaf448(p) => decaf::encode_element(p),
            Self::P256(p) => p256::encode_element(p),
            Self::P384(p) => p384::encode_element(p),
            Self::P521(p) => p521::encode_element(p),
            Self::Edwards25519(p) => p.compress().to_bytes().to_vec(),
            Self::Secp256k1(p) => secp256k1::encode_element(p),
        }
    }

    pub(crate) fn add_assign(&mut self, rhs: &Self) {
        zip_points!((self, rhs), |a, b| *a = *a + *b);
    }

    pub(crate) fn sub_assign(&mut self, rhs: &Self) {
        zip_points!((self, rhs), |a, b| *a = *a - *b);
    }

    pub(crate) fn double_assign(&mut self) {
        map_points!(self, |p| *p = *p + *p);
    }

    pub(crate) fn neg_assign(&mut self) {
        map_points!(self, |p| *p = -*p);
    }

    pub(crate) fn mul_assign(&mut self, scalar: &ScalarRepr) {
        match (self, scalar) {
            (Self::Ristretto255(p), ScalarRepr::Ristretto255(s)) => *p = *p * *s,
            (Self::Decaf448(p), ScalarRepr::Decaf448(s)) => *p = *p * *s,
            (Self::P256(p), ScalarRepr::P256(s)) => *p = *p * *s,
            (Self::P384(p), ScalarRepr::P384(s)) => *p = *p * *s,
            (Self::P521(p), ScalarRepr::P521(s)) => *p = *p * *s,
            (Self::Edwards25519(p), ScalarRepr::Edwards25519(s)) => *p = *p * *s,
            (Self::Secp256k1(p), ScalarRepr::Secp256k1(s)) => *p = *p * *s,
            _ => cast_panic(),
        }
    }

    pub(crate) fn is_identity(&self) -> bool {
        match self {
            Self::Ristretto255(p) => p.is_identity(),
            Self::Decaf448(p) => decaf::is_identity(p),
            Self::P256(p) => bool::from(p.is_identity()),
            Self::P384(p) => bool::from(p.is_identity()),
            Self::P521(p) => bool::from(p.is_identity()),
            Self::Edwards25519(p) => p.is_identity(),
            Self::Secp256k1(p) => bool::from(p.is_identity()),
        }
    }

    /// Constant-time comparison on the canonical encodings.
    pub(crate) fn equal(&self, rhs: &Self) -> bool {
        if core::mem::discriminant(self) != core::mem::discriminant(rhs) {
            cast_panic();
        }
        bool::from(self.encode().ct_eq(&rhs.encode()))
    }
}

impl Element {
    pub(crate) fn from_parts(group: Group, repr: ElementRepr) -> Self {
        Self { group, repr }
    }

    /// The group this element belongs to.
    #[must_use]
    pub fn group(&self) -> Group {
        self.group
    }

    /// Set to the identity.
    pub fn identity(&mut self) -> &mut Self {
        self.repr = ElementRepr::identity(self.group);
        self
    }

    /// Set to the canonical generator.
    pub fn base(&mut self) -> &mut Self {
        self.repr = ElementRepr::generator(self.group);
        self
    }

    /// Add `rhs` in place.
    pub fn add(&mut self, rhs: &Element) -> &mut Self {
        self.repr.add_assign(&rhs.repr);
        self
    }

    /// Subtract `rhs` in place.
    pub fn subtract(&mut self, rhs: &Element) -> &mut Self {
        self.repr.sub_assign(&rhs.repr);
        self
    }

    /// Double in place.
    pub fn double(&mut self) -> &mut Self {
        self.repr.double_assign();
        self
    }

    /// Negate in place.
    pub fn negate(&mut self) -> &mut Self {
        self.repr.neg_assign();
        self
    }

    /// Multiply by `scalar` in place (constant-time scalar multiplication).
    pub fn multiply(&mut self, scalar: &Scalar) -> &mut Self {
        if self.group != scalar.group() {
            cast_panic();
        }
        self.repr.mul_assign(scalar.repr());
        self
    }

    /// Overwrite with a copy of `other` (same group required).
    pub fn set(&mut self, other: &Element) -> &mut Self {
        if self.group != other.group {
            cast_panic();
        }
        self.repr = other.repr;
        self
    }

    /// Constant-time equality on canonical encodings.
    #[must_use]
    pub fn equal(&self, rhs: &Element) -> bool {
        self.repr.equal(&rhs.repr)
    }

    /// Whether this element is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.repr.is_identity()
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

impl core::fmt::Debug for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Element({}, {})", self.group, self.hex())
    }
}
