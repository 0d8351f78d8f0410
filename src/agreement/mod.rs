//! Multi-algorithm key agreement engine
//!
//! One [`ZrtpDh`] instance per exchange: the constructor selects the variant
//! and generates the key pair, the instance exposes the fixed-width public
//! value, validates the peer value and computes the shared secret once, then
//! is discarded.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::dh::ModpDh;
use crate::ecdh::{P256Agreement, P384Agreement};
use crate::error::{Error, Result};
use crate::params::{
    ModpGroup, MODP_2048_BYTE_LENGTH, MODP_3072_BYTE_LENGTH, P256_COORD_BYTES, P384_COORD_BYTES,
};

/// ZRTP public-key algorithm variants (RFC 6189 §5.1.5)
///
/// Closed enumeration with exhaustive dispatch; an unknown wire tag is
/// rejected by [`DhAlgorithm::from_tag`] instead of producing an inert
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DhAlgorithm {
    /// Finite-field DH over the 2048-bit MODP group
    Dh2k,
    /// Finite-field DH over the 3072-bit MODP group
    Dh3k,
    /// ECDH over NIST P-256
    Ec25,
    /// ECDH over NIST P-384
    Ec38,
}

impl DhAlgorithm {
    /// All supported variants
    pub const ALL: [DhAlgorithm; 4] = [
        DhAlgorithm::Dh2k,
        DhAlgorithm::Dh3k,
        DhAlgorithm::Ec25,
        DhAlgorithm::Ec38,
    ];

    /// Decode a 4-character ZRTP algorithm tag.
    ///
    /// The tag must be exactly 4 bytes; shorter or longer input is rejected
    /// rather than read past its end.
    pub fn from_tag(tag: &[u8]) -> Result<Self> {
        match tag {
            b"DH2k" => Ok(DhAlgorithm::Dh2k),
            b"DH3k" => Ok(DhAlgorithm::Dh3k),
            b"EC25" => Ok(DhAlgorithm::Ec25),
            b"EC38" => Ok(DhAlgorithm::Ec38),
            other => Err(Error::UnsupportedAlgorithm {
                tag: other.to_vec(),
            }),
        }
    }

    /// The 4-character ZRTP wire tag
    pub const fn tag(self) -> &'static str {
        match self {
            DhAlgorithm::Dh2k => "DH2k",
            DhAlgorithm::Dh3k => "DH3k",
            DhAlgorithm::Ec25 => "EC25",
            DhAlgorithm::Ec38 => "EC38",
        }
    }

    /// Byte width of the computed shared secret.
    ///
    /// Finite-field variants return the modulus width, EC variants the width
    /// of a single coordinate. The asymmetry is part of the ZRTP contract:
    /// the handshake layer sizes its DHPart payloads from these values.
    pub const fn dh_size(self) -> usize {
        match self {
            DhAlgorithm::Dh2k => MODP_2048_BYTE_LENGTH,
            DhAlgorithm::Dh3k => MODP_3072_BYTE_LENGTH,
            DhAlgorithm::Ec25 => P256_COORD_BYTES,
            DhAlgorithm::Ec38 => P384_COORD_BYTES,
        }
    }

    /// Fixed wire width of a public value
    pub const fn pub_key_size(self) -> usize {
        match self {
            DhAlgorithm::Dh2k => MODP_2048_BYTE_LENGTH,
            DhAlgorithm::Dh3k => MODP_3072_BYTE_LENGTH,
            DhAlgorithm::Ec25 => 2 * P256_COORD_BYTES,
            DhAlgorithm::Ec38 => 2 * P384_COORD_BYTES,
        }
    }
}

enum Engine {
    Modp(ModpDh),
    P256(P256Agreement),
    P384(P384Agreement),
}

/// One Diffie-Hellman exchange.
///
/// Construction generates the private scalar and derives the public value;
/// exactly one agreement is computed per instance. Dropping the instance
/// erases the private scalar's storage.
pub struct ZrtpDh {
    algorithm: DhAlgorithm,
    engine: Engine,
}

impl ZrtpDh {
    /// Create an exchange for `algorithm`, drawing randomness from the
    /// operating system.
    pub fn new(algorithm: DhAlgorithm) -> Result<Self> {
        Self::with_rng(algorithm, &mut OsRng)
    }

    /// Create an exchange for the variant named by a 4-character ZRTP tag
    pub fn from_tag(tag: &[u8]) -> Result<Self> {
        Self::new(DhAlgorithm::from_tag(tag)?)
    }

    /// Create an exchange with a caller-supplied cryptographically secure
    /// random source.
    pub fn with_rng<R: CryptoRng + RngCore>(algorithm: DhAlgorithm, rng: &mut R) -> Result<Self> {
        let engine = match algorithm {
            DhAlgorithm::Dh2k => Engine::Modp(ModpDh::generate(ModpGroup::dh2k(), rng)?),
            DhAlgorithm::Dh3k => Engine::Modp(ModpDh::generate(ModpGroup::dh3k(), rng)?),
            DhAlgorithm::Ec25 => Engine::P256(P256Agreement::generate(rng)),
            DhAlgorithm::Ec38 => Engine::P384(P384Agreement::generate(rng)),
        };
        Ok(ZrtpDh { algorithm, engine })
    }

    /// The variant selected at construction
    pub fn algorithm(&self) -> DhAlgorithm {
        self.algorithm
    }

    /// The local public value in its fixed-width wire encoding
    /// (see [`DhAlgorithm::pub_key_size`])
    pub fn public_key_bytes(&self) -> Vec<u8> {
        match &self.engine {
            Engine::Modp(dh) => dh.public_key_bytes(),
            Engine::P256(ec) => ec.public_key_bytes(),
            Engine::P384(ec) => ec.public_key_bytes(),
        }
    }

    /// Check a peer public value before computing the secret.
    ///
    /// Invalid input is an expected outcome of a handshake with a hostile or
    /// broken peer; it is reported as `false`, never as an error or panic.
    /// Callers must abort the handshake attempt when this returns `false`.
    pub fn validate_peer_key(&self, peer: &[u8]) -> bool {
        match &self.engine {
            Engine::Modp(dh) => dh.validate_peer_key(peer),
            Engine::P256(ec) => ec.validate_peer_key(peer),
            Engine::P384(ec) => ec.validate_peer_key(peer),
        }
    }

    /// Compute the shared secret from a peer public value that has passed
    /// [`validate_peer_key`].
    ///
    /// The result is `dh_size()` bytes and is zeroized when dropped.
    /// Degenerate finite-field values are not re-checked here.
    ///
    /// [`validate_peer_key`]: ZrtpDh::validate_peer_key
    pub fn agree(&self, peer: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        match &self.engine {
            Engine::Modp(dh) => dh.agree(peer),
            Engine::P256(ec) => ec.agree(peer),
            Engine::P384(ec) => ec.agree(peer),
        }
    }
}
