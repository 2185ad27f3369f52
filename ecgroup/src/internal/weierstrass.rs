//! Short-Weierstrass backends: NIST P-256/P-384/P-521 and secp256k1.
//!
//! One macro instantiates a module per curve over the RustCrypto arithmetic
//! crates. Hash-to-curve runs through `elliptic_curve::hash2curve`
//! (simplified SWU; secp256k1 additionally applies its 3-isogeny), which is
//! the same RFC 9380 pipeline as the hand-rolled suites. Elements use the
//! SEC1 compressed codec with the all-zero string standing in for the
//! identity.

macro_rules! weierstrass_backend {
    ($name:ident, $lib:ident, $curve:path, $hash:path, $element_length:expr) => {
        pub(crate) mod $name {
            use elliptic_curve::group::Group as _;
            use elliptic_curve::{Field, PrimeField};
            use elliptic_curve::hash2curve::{ExpandMsgXmd, GroupDigest};
            use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
            use rand_core::OsRng;

            use crate::{GroupError, GroupResult};

            pub(crate) use $lib::ProjectivePoint as Point;
            pub(crate) use $lib::Scalar;

            pub(crate) const ELEMENT_LENGTH: usize = $element_length;

            pub(crate) fn identity() -> Point {
                Point::IDENTITY
            }

            pub(crate) fn generator() -> Point {
                Point::GENERATOR
            }

            pub(crate) fn hash_to_group(input: &[u8], dst: &[u8]) -> GroupResult<Point> {
                Ok(<$curve>::hash_from_bytes::<ExpandMsgXmd<$hash>>(&[input], &[dst])
                    .expect("suite expansion parameters are in range"))
            }

            pub(crate) fn encode_to_group(input: &[u8], dst: &[u8]) -> GroupResult<Point> {
                Ok(<$curve>::encode_from_bytes::<ExpandMsgXmd<$hash>>(&[input], &[dst])
                    .expect("suite expansion parameters are in range"))
            }

            pub(crate) fn hash_to_scalar(input: &[u8], dst: &[u8]) -> GroupResult<Scalar> {
                Ok(<$curve>::hash_to_scalar::<ExpandMsgXmd<$hash>>(&[input], &[dst])
                    .expect("suite expansion parameters are in range"))
            }

            /// Uniform non-zero scalar from the OS random source.
            pub(crate) fn random_scalar() -> Scalar {
                loop {
                    let candidate = <Scalar as Field>::random(&mut OsRng);
                    if !bool::from(candidate.is_zero()) {
                        return candidate;
                    }
                }
            }

            pub(crate) fn decode_scalar(bytes: &[u8]) -> GroupResult<Scalar> {
                let mut repr = $lib::FieldBytes::default();
                repr.copy_from_slice(bytes);
                Option::from(Scalar::from_repr(repr)).ok_or(GroupError::InvalidScalarEncoding)
            }

            pub(crate) fn encode_scalar(scalar: &Scalar) -> Vec<u8> {
                scalar.to_repr().to_vec()
            }

            /// Decode a SEC1 compressed point; the all-zero string is the
            /// identity and is reported as such.
            pub(crate) fn decode_element(bytes: &[u8]) -> GroupResult<Point> {
                if bytes.iter().all(|&byte| byte == 0) {
                    return Err(GroupError::IdentityDecoded);
                }
                let encoded = $lib::EncodedPoint::from_bytes(bytes)
                    .map_err(|_| GroupError::InvalidElementEncoding)?;
                Option::from(Point::from_encoded_point(&encoded))
                    .ok_or(GroupError::InvalidElementEncoding)
            }

            pub(crate) fn encode_element(point: &Point) -> Vec<u8> {
                if bool::from(point.is_identity()) {
                    return vec![0u8; ELEMENT_LENGTH];
                }
                point.to_affine().to_encoded_point(true).as_bytes().to_vec()
            }
        }
    };
}

weierstrass_backend!(p256, p256, p256::NistP256, sha2::Sha256, 33);
weierstrass_backend!(p384, p384, p384::NistP384, sha2::Sha384, 49);
weierstrass_backend!(p521, p521, p521::NistP521, sha2::Sha512, 67);
weierstrass_backend!(secp256k1, k256, k256::Secp256k1, sha2::Sha256, 33);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GroupError;

    #[test]
    fn generators_match_pinned_encodings() {
        assert_eq!(
            hex::encode(p256::encode_element(&p256::generator())),
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
        assert_eq!(
            hex::encode(p384::encode_element(&p384::generator())),
            "03aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38\
             5502f25dbf55296c3a545e3872760ab7"
        );
        assert_eq!(
            hex::encode(p521::encode_element(&p521::generator())),
            "0200c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d\
             3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66"
        );
        assert_eq!(
            hex::encode(secp256k1::encode_element(&secp256k1::generator())),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn identity_encoding_is_all_zero_and_rejected() {
        let encoded = p256::encode_element(&p256::identity());
        assert_eq!(encoded, vec![0u8; 33]);
        assert_eq!(
            p256::decode_element(&encoded),
            Err(GroupError::IdentityDecoded)
        );
    }

    #[test]
    fn uncompressed_tags_are_rejected() {
        let mut bytes = p256::encode_element(&p256::generator());
        bytes[0] = 0x04;
        assert_eq!(
            p256::decode_element(&bytes),
            Err(GroupError::InvalidElementEncoding)
        );
    }

    #[test]
    fn off_curve_x_is_rejected() {
        // x = 1 with tag 02 is not on P-256
        let mut bytes = vec![0u8; 33];
        bytes[0] = 0x02;
        bytes[32] = 0x01;
        assert_eq!(
            p256::decode_element(&bytes),
            Err(GroupError::InvalidElementEncoding)
        );
    }

    #[test]
    fn scalar_codec_round_trips() {
        let scalar = p384::random_scalar();
        let encoded = p384::encode_scalar(&scalar);
        assert_eq!(encoded.len(), 48);
        let decoded = p384::decode_scalar(&encoded).unwrap();
        assert_eq!(p384::encode_scalar(&decoded), encoded);
    }

    #[test]
    fn hash_to_group_is_deterministic_and_valid() {
        let dst = b"ecgroup weierstrass test";
        let a = secp256k1::hash_to_group(b"msg", dst).unwrap();
        let b = secp256k1::hash_to_group(b"msg", dst).unwrap();
        assert_eq!(
            secp256k1::encode_element(&a),
            secp256k1::encode_element(&b)
        );
        let encoded = secp256k1::encode_element(&a);
        assert!(secp256k1::decode_element(&encoded).is_ok());
    }
}
