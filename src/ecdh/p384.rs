//! ECDH key agreement with NIST P-384 (the ZRTP `EC38` variant)

use ::p384::ecdh::EphemeralSecret;
use ::p384::{EncodedPoint, FieldBytes, PublicKey};
use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::params::{EcCurveParams, P384_COORD_BYTES};

/// One P-384 key agreement: an ephemeral scalar (zeroized on drop by the
/// curve library) and the cached uncompressed public point.
pub struct P384Agreement {
    secret: EphemeralSecret,
    public: EncodedPoint,
}

impl P384Agreement {
    /// Generate a key pair. The private scalar is drawn uniformly from the
    /// curve order by the curve library's own randomized-scalar routine.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let secret = EphemeralSecret::random(rng);
        let public = secret.public_key().to_encoded_point(false);
        P384Agreement { secret, public }
    }

    /// Public value as `x ‖ y`, each coordinate 48 bytes big-endian
    pub fn public_key_bytes(&self) -> Vec<u8> {
        // drop the SEC1 0x04 format byte, ZRTP carries bare coordinates
        self.public.as_bytes()[1..].to_vec()
    }

    /// Fixed byte width of the shared secret (one coordinate)
    pub fn secret_size(&self) -> usize {
        P384_COORD_BYTES
    }

    /// Partial public-key validation of a peer value, per
    /// NIST SP 800-56A §5.6.2.6
    pub fn validate_peer_key(&self, peer: &[u8]) -> bool {
        super::is_valid_affine_point(EcCurveParams::p384(), peer)
    }

    /// Compute the shared secret: scalar multiplication of the peer point by
    /// the private scalar, exported as the 48-byte affine x-coordinate.
    pub fn agree(&self, peer: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if peer.len() != 2 * P384_COORD_BYTES {
            return Err(Error::InvalidLength {
                context: "P-384 agreement",
                expected: 2 * P384_COORD_BYTES,
                actual: peer.len(),
            });
        }

        let (x, y) = peer.split_at(P384_COORD_BYTES);
        let encoded = EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(x),
            FieldBytes::from_slice(y),
            false,
        );
        let peer_key = Option::<PublicKey>::from(PublicKey::from_encoded_point(&encoded)).ok_or(
            Error::InvalidPeerKey {
                context: "P-384 agreement",
            },
        )?;

        let shared = self.secret.diffie_hellman(&peer_key);
        Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
    }
}
