//! Shared golden test vectors for the ecgroup workspace.
//!
//! The fixtures are embedded at compile time so consumers can rely on them
//! without performing any I/O at runtime or maintaining their own copies.
//! Suite files follow the layout of the RFC 9380 vector appendices
//! (ciphersuite string, domain separation tag, message/point rows); the
//! expansion files additionally pin the derived `DST_prime`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// An embedded JSON fixture.
#[derive(Clone, Copy, Debug)]
pub struct Fixture {
    /// Stable fixture name (matches the file name without extension).
    pub name: &'static str,
    /// Raw JSON contents as UTF-8.
    pub contents: &'static str,
}

/// `expand_message_xmd` vectors (per-hash, including oversized-DST cases).
pub const EXPAND_MESSAGE_XMD: Fixture = Fixture {
    name: "expand_message_xmd",
    contents: include_str!("../vectors/expand_message_xmd.json"),
};

/// `expand_message_xof` vectors (per-XOF, including oversized-DST cases).
pub const EXPAND_MESSAGE_XOF: Fixture = Fixture {
    name: "expand_message_xof",
    contents: include_str!("../vectors/expand_message_xof.json"),
};

/// `HashToScalar` vectors for every supported group.
pub const HASH_TO_SCALAR: Fixture = Fixture {
    name: "hash_to_scalar",
    contents: include_str!("../vectors/hash_to_scalar.json"),
};

/// Hash-to-curve and encode-to-curve suite vectors.
pub const SUITES: &[Fixture] = &[
    Fixture {
        name: "P256_XMD:SHA-256_SSWU_RO_",
        contents: include_str!("../vectors/P256_XMD_SHA_256_SSWU_RO_.json"),
    },
    Fixture {
        name: "P256_XMD:SHA-256_SSWU_NU_",
        contents: include_str!("../vectors/P256_XMD_SHA_256_SSWU_NU_.json"),
    },
    Fixture {
        name: "P384_XMD:SHA-384_SSWU_RO_",
        contents: include_str!("../vectors/P384_XMD_SHA_384_SSWU_RO_.json"),
    },
    Fixture {
        name: "P384_XMD:SHA-384_SSWU_NU_",
        contents: include_str!("../vectors/P384_XMD_SHA_384_SSWU_NU_.json"),
    },
    Fixture {
        name: "P521_XMD:SHA-512_SSWU_RO_",
        contents: include_str!("../vectors/P521_XMD_SHA_512_SSWU_RO_.json"),
    },
    Fixture {
        name: "P521_XMD:SHA-512_SSWU_NU_",
        contents: include_str!("../vectors/P521_XMD_SHA_512_SSWU_NU_.json"),
    },
    Fixture {
        name: "secp256k1_XMD:SHA-256_SSWU_RO_",
        contents: include_str!("../vectors/secp256k1_XMD_SHA_256_SSWU_RO_.json"),
    },
    Fixture {
        name: "secp256k1_XMD:SHA-256_SSWU_NU_",
        contents: include_str!("../vectors/secp256k1_XMD_SHA_256_SSWU_NU_.json"),
    },
    Fixture {
        name: "edwards25519_XMD:SHA-512_ELL2_RO_",
        contents: include_str!("../vectors/edwards25519_XMD_SHA_512_ELL2_RO_.json"),
    },
    Fixture {
        name: "edwards25519_XMD:SHA-512_ELL2_NU_",
        contents: include_str!("../vectors/edwards25519_XMD_SHA_512_ELL2_NU_.json"),
    },
    Fixture {
        name: "ristretto255_XMD:SHA-512_R255MAP_RO_",
        contents: include_str!("../vectors/ristretto255_XMD_SHA_512_R255MAP_RO_.json"),
    },
    Fixture {
        name: "decaf448_XOF:SHAKE-256_D448MAP_RO_",
        contents: include_str!("../vectors/decaf448_XOF_SHAKE_256_D448MAP_RO_.json"),
    },
];

/// Look up a suite fixture by its ciphersuite string.
#[must_use]
pub fn suite(name: &str) -> Option<&'static Fixture> {
    SUITES.iter().find(|fixture| fixture.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_nonempty_json() {
        for fixture in SUITES {
            assert!(fixture.contents.trim_start().starts_with('{'));
        }
        assert!(EXPAND_MESSAGE_XMD.contents.trim_start().starts_with('['));
        assert!(EXPAND_MESSAGE_XOF.contents.trim_start().starts_with('['));
        assert!(HASH_TO_SCALAR.contents.trim_start().starts_with('['));
    }

    #[test]
    fn suite_lookup() {
        assert!(suite("P256_XMD:SHA-256_SSWU_RO_").is_some());
        assert!(suite("P256_XMD:SHA-256_SSWU_XX_").is_none());
    }
}
