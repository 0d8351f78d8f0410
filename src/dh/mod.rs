//! Finite-field Diffie-Hellman over the RFC 3526 MODP groups
//!
//! Used by the `DH2k` and `DH3k` variants. The private exponent is 256 bits
//! for both group sizes; public values and shared secrets are exported at the
//! full modulus width.

use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};
use crate::params::{ModpGroup, MODP_EXPONENT_BYTES};

/// Canonical storage for the private exponent, erased on drop.
///
/// `BigUint` copies made for modular exponentiation are transient; this buffer
/// is the value that outlives an operation.
#[derive(Zeroize, ZeroizeOnDrop)]
struct PrivateExponent([u8; MODP_EXPONENT_BYTES]);

/// One finite-field key agreement: a 256-bit private exponent and the cached
/// public value `2^priv mod P`.
pub struct ModpDh {
    group: &'static ModpGroup,
    private: PrivateExponent,
    public: BigUint,
}

impl ModpDh {
    /// Generate a key pair for the given MODP group.
    ///
    /// Draws exactly 256 bits from `rng`; an entropy-source failure aborts the
    /// operation, it is never retried with weaker randomness.
    pub fn generate<R: CryptoRng + RngCore>(
        group: &'static ModpGroup,
        rng: &mut R,
    ) -> Result<Self> {
        let mut private = PrivateExponent([0u8; MODP_EXPONENT_BYTES]);
        rng.try_fill_bytes(&mut private.0)?;

        let exponent = BigUint::from_bytes_be(&private.0);
        let public = group.generator.modpow(&exponent, &group.prime);

        Ok(ModpDh {
            group,
            private,
            public,
        })
    }

    /// Public value as big-endian bytes, left-zero-padded to the modulus width
    pub fn public_key_bytes(&self) -> Vec<u8> {
        to_fixed_width_be(&self.public, self.group.modulus_bytes)
    }

    /// Fixed byte width of public values and shared secrets for this group
    pub fn secret_size(&self) -> usize {
        self.group.modulus_bytes
    }

    /// Check a peer public value before it is used for secret computation.
    ///
    /// Rejects values of the wrong wire width and the degenerate group
    /// elements `1` and `P − 1`. This is a minimal safe-prime sanity check,
    /// not full subgroup validation.
    pub fn validate_peer_key(&self, peer: &[u8]) -> bool {
        if peer.len() != self.group.modulus_bytes {
            return false;
        }
        let value = BigUint::from_bytes_be(peer);
        if value.is_one() || value == self.group.prime_minus_one {
            return false;
        }
        true
    }

    /// Compute the shared secret `peer^priv mod P`, exported at the full
    /// modulus width.
    ///
    /// The peer value must have passed [`validate_peer_key`]; degenerate
    /// values are not re-checked here.
    ///
    /// [`validate_peer_key`]: ModpDh::validate_peer_key
    pub fn agree(&self, peer: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if peer.len() != self.group.modulus_bytes {
            return Err(Error::InvalidLength {
                context: "MODP agreement",
                expected: self.group.modulus_bytes,
                actual: peer.len(),
            });
        }

        let peer_value = BigUint::from_bytes_be(peer);
        let exponent = BigUint::from_bytes_be(&self.private.0);
        let secret = peer_value.modpow(&exponent, &self.group.prime);

        Ok(Zeroizing::new(to_fixed_width_be(
            &secret,
            self.group.modulus_bytes,
        )))
    }
}

/// Big-endian export, left-zero-padded to `width` bytes.
///
/// The numeric encoder omits leading zero bytes; the ZRTP wire format
/// requires fixed-width values.
pub(crate) fn to_fixed_width_be(value: &BigUint, width: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= width);
    let mut out = vec![0u8; width];
    out[width - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests;
