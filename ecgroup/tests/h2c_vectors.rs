//! Golden-vector tests for the hash-to-curve and hash-to-scalar suites.

use ecgroup::Group;
use serde::Deserialize;

#[derive(Deserialize)]
struct SuiteFile {
    ciphersuite: String,
    dst: String,
    vectors: Vec<SuiteVector>,
}

#[derive(Deserialize)]
struct SuiteVector {
    msg: String,
    encoded: String,
}

#[derive(Deserialize)]
struct ScalarVector {
    group: String,
    dst: String,
    msg: String,
    scalar: String,
}

fn group_for(name: &str) -> Group {
    if name.starts_with("P256_") {
        Group::P256Sha256
    } else if name.starts_with("P384_") {
        Group::P384Sha384
    } else if name.starts_with("P521_") {
        Group::P521Sha512
    } else if name.starts_with("secp256k1_") {
        Group::Secp256k1Sha256
    } else if name.starts_with("edwards25519_") {
        Group::Edwards25519Sha512
    } else if name.starts_with("ristretto255_") {
        Group::Ristretto255Sha512
    } else if name.starts_with("decaf448_") {
        Group::Decaf448Shake256
    } else {
        panic!("unknown suite {name}")
    }
}

#[test]
fn hash_to_group_suite_vectors() {
    for fixture in ecgroup_test_vectors::SUITES {
        let file: SuiteFile = serde_json::from_str(fixture.contents).unwrap();
        assert_eq!(file.ciphersuite, fixture.name);
        let group = group_for(&file.ciphersuite);
        let nonuniform = file.ciphersuite.ends_with("_NU_");
        assert!(!file.vectors.is_empty());
        for vector in &file.vectors {
            let element = if nonuniform {
                group
                    .encode_to_group(vector.msg.as_bytes(), file.dst.as_bytes())
                    .unwrap()
            } else {
                group
                    .hash_to_group(vector.msg.as_bytes(), file.dst.as_bytes())
                    .unwrap()
            };
            assert_eq!(
                element.hex(),
                vector.encoded,
                "{} msg={:?}",
                file.ciphersuite,
                vector.msg
            );
        }
    }
}

#[test]
fn suite_identifiers_have_fixtures() {
    // every group's RO suite (and distinct NU suite) is pinned by a fixture
    for group in Group::all() {
        assert!(
            ecgroup_test_vectors::suite(group.ciphersuite_id()).is_some(),
            "{group}"
        );
        assert!(
            ecgroup_test_vectors::suite(group.nonuniform_ciphersuite_id()).is_some(),
            "{group}"
        );
    }
}

#[test]
fn hash_to_scalar_vectors() {
    let vectors: Vec<ScalarVector> =
        serde_json::from_str(ecgroup_test_vectors::HASH_TO_SCALAR.contents).unwrap();
    assert!(!vectors.is_empty());
    for vector in vectors {
        let group = match vector.group.as_str() {
            "ristretto255" => Group::Ristretto255Sha512,
            "decaf448" => Group::Decaf448Shake256,
            "p256" => Group::P256Sha256,
            "p384" => Group::P384Sha384,
            "p521" => Group::P521Sha512,
            "edwards25519" => Group::Edwards25519Sha512,
            "secp256k1" => Group::Secp256k1Sha256,
            other => panic!("unknown group {other}"),
        };
        let scalar = group
            .hash_to_scalar(vector.msg.as_bytes(), vector.dst.as_bytes())
            .unwrap();
        assert_eq!(
            scalar.hex(),
            vector.scalar,
            "{group} msg={:?}",
            vector.msg
        );
    }
}
