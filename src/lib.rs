//! Diffie-Hellman key agreement core for ZRTP media sessions
//!
//! This crate implements the key-agreement engine a ZRTP endpoint runs once
//! per handshake: key-pair generation, fixed-width public-value serialization,
//! peer public-key validation and shared-secret computation, across the four
//! ZRTP public-key algorithm variants (RFC 6189):
//!
//! | Tag    | Algorithm                        | Public value | Shared secret |
//! |--------|----------------------------------|--------------|---------------|
//! | `DH2k` | DH over the 2048-bit MODP group  | 256 bytes    | 256 bytes     |
//! | `DH3k` | DH over the 3072-bit MODP group  | 384 bytes    | 384 bytes     |
//! | `EC25` | ECDH over NIST P-256             | 64 bytes     | 32 bytes      |
//! | `EC38` | ECDH over NIST P-384             | 96 bytes     | 48 bytes      |
//!
//! One [`ZrtpDh`] instance performs exactly one agreement and is then
//! discarded; private scalars are zeroized when the instance drops. Message
//! framing, key confirmation and SRTP key derivation are layered above this
//! crate.
//!
//! # Example
//!
//! ```
//! use zrtp_dh::{DhAlgorithm, ZrtpDh};
//!
//! let alice = ZrtpDh::new(DhAlgorithm::Ec25)?;
//! let bob = ZrtpDh::new(DhAlgorithm::Ec25)?;
//!
//! // Public values travel inside ZRTP handshake packets.
//! let alice_pub = alice.public_key_bytes();
//! let bob_pub = bob.public_key_bytes();
//!
//! // Each side validates the peer value before computing the secret.
//! assert!(alice.validate_peer_key(&bob_pub));
//! assert!(bob.validate_peer_key(&alice_pub));
//!
//! let s1 = alice.agree(&bob_pub)?;
//! let s2 = bob.agree(&alice_pub)?;
//! assert_eq!(&*s1, &*s2);
//! # Ok::<(), zrtp_dh::Error>(())
//! ```

pub mod agreement;
pub mod dh;
pub mod ecdh;
pub mod error;
pub mod params;

pub use agreement::{DhAlgorithm, ZrtpDh};
pub use error::{Error, Result};
