//! Process-wide group and curve parameter tables
//!
//! The two finite-field groups (RFC 3526 MODP groups 14 and 15) are
//! materialized exactly once per process behind `Lazy` statics and shared
//! read-only by every agreement instance thereafter. The NIST curve constants
//! are used by the peer-point validation path only; curve arithmetic itself
//! lives in the `p256`/`p384` crates.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// Byte length of a DH2k public value and shared secret
pub const MODP_2048_BYTE_LENGTH: usize = 2048 / 8;

/// Byte length of a DH3k public value and shared secret
pub const MODP_3072_BYTE_LENGTH: usize = 3072 / 8;

/// Byte length of the finite-field private exponent.
///
/// Fixed at 256 bits for both MODP groups. This short-exponent choice comes
/// from the ZRTP reference and is a protocol security parameter; it must not
/// be widened to the full modulus size.
pub const MODP_EXPONENT_BYTES: usize = 256 / 8;

/// Generator for both MODP groups
pub const MODP_GENERATOR: u32 = 2;

/// Byte length of one P-256 affine coordinate
pub const P256_COORD_BYTES: usize = 32;

/// Byte length of one P-384 affine coordinate
pub const P384_COORD_BYTES: usize = 48;

/// RFC 3526 group 14 prime, canonical big-endian bytes
pub static MODP_2048_PRIME: [u8; 256] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC9, 0x0F, 0xDA, 0xA2,
    0x21, 0x68, 0xC2, 0x34, 0xC4, 0xC6, 0x62, 0x8B, 0x80, 0xDC, 0x1C, 0xD1,
    0x29, 0x02, 0x4E, 0x08, 0x8A, 0x67, 0xCC, 0x74, 0x02, 0x0B, 0xBE, 0xA6,
    0x3B, 0x13, 0x9B, 0x22, 0x51, 0x4A, 0x08, 0x79, 0x8E, 0x34, 0x04, 0xDD,
    0xEF, 0x95, 0x19, 0xB3, 0xCD, 0x3A, 0x43, 0x1B, 0x30, 0x2B, 0x0A, 0x6D,
    0xF2, 0x5F, 0x14, 0x37, 0x4F, 0xE1, 0x35, 0x6D, 0x6D, 0x51, 0xC2, 0x45,
    0xE4, 0x85, 0xB5, 0x76, 0x62, 0x5E, 0x7E, 0xC6, 0xF4, 0x4C, 0x42, 0xE9,
    0xA6, 0x37, 0xED, 0x6B, 0x0B, 0xFF, 0x5C, 0xB6, 0xF4, 0x06, 0xB7, 0xED,
    0xEE, 0x38, 0x6B, 0xFB, 0x5A, 0x89, 0x9F, 0xA5, 0xAE, 0x9F, 0x24, 0x11,
    0x7C, 0x4B, 0x1F, 0xE6, 0x49, 0x28, 0x66, 0x51, 0xEC, 0xE4, 0x5B, 0x3D,
    0xC2, 0x00, 0x7C, 0xB8, 0xA1, 0x63, 0xBF, 0x05, 0x98, 0xDA, 0x48, 0x36,
    0x1C, 0x55, 0xD3, 0x9A, 0x69, 0x16, 0x3F, 0xA8, 0xFD, 0x24, 0xCF, 0x5F,
    0x83, 0x65, 0x5D, 0x23, 0xDC, 0xA3, 0xAD, 0x96, 0x1C, 0x62, 0xF3, 0x56,
    0x20, 0x85, 0x52, 0xBB, 0x9E, 0xD5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6D,
    0x67, 0x0C, 0x35, 0x4E, 0x4A, 0xBC, 0x98, 0x04, 0xF1, 0x74, 0x6C, 0x08,
    0xCA, 0x18, 0x21, 0x7C, 0x32, 0x90, 0x5E, 0x46, 0x2E, 0x36, 0xCE, 0x3B,
    0xE3, 0x9E, 0x77, 0x2C, 0x18, 0x0E, 0x86, 0x03, 0x9B, 0x27, 0x83, 0xA2,
    0xEC, 0x07, 0xA2, 0x8F, 0xB5, 0xC5, 0x5D, 0xF0, 0x6F, 0x4C, 0x52, 0xC9,
    0xDE, 0x2B, 0xCB, 0xF6, 0x95, 0x58, 0x17, 0x18, 0x39, 0x95, 0x49, 0x7C,
    0xEA, 0x95, 0x6A, 0xE5, 0x15, 0xD2, 0x26, 0x18, 0x98, 0xFA, 0x05, 0x10,
    0x15, 0x72, 0x8E, 0x5A, 0x8A, 0xAC, 0xAA, 0x68, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF,
];

/// RFC 3526 group 15 prime, canonical big-endian bytes
pub static MODP_3072_PRIME: [u8; 384] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC9, 0x0F, 0xDA, 0xA2,
    0x21, 0x68, 0xC2, 0x34, 0xC4, 0xC6, 0x62, 0x8B, 0x80, 0xDC, 0x1C, 0xD1,
    0x29, 0x02, 0x4E, 0x08, 0x8A, 0x67, 0xCC, 0x74, 0x02, 0x0B, 0xBE, 0xA6,
    0x3B, 0x13, 0x9B, 0x22, 0x51, 0x4A, 0x08, 0x79, 0x8E, 0x34, 0x04, 0xDD,
    0xEF, 0x95, 0x19, 0xB3, 0xCD, 0x3A, 0x43, 0x1B, 0x30, 0x2B, 0x0A, 0x6D,
    0xF2, 0x5F, 0x14, 0x37, 0x4F, 0xE1, 0x35, 0x6D, 0x6D, 0x51, 0xC2, 0x45,
    0xE4, 0x85, 0xB5, 0x76, 0x62, 0x5E, 0x7E, 0xC6, 0xF4, 0x4C, 0x42, 0xE9,
    0xA6, 0x37, 0xED, 0x6B, 0x0B, 0xFF, 0x5C, 0xB6, 0xF4, 0x06, 0xB7, 0xED,
    0xEE, 0x38, 0x6B, 0xFB, 0x5A, 0x89, 0x9F, 0xA5, 0xAE, 0x9F, 0x24, 0x11,
    0x7C, 0x4B, 0x1F, 0xE6, 0x49, 0x28, 0x66, 0x51, 0xEC, 0xE4, 0x5B, 0x3D,
    0xC2, 0x00, 0x7C, 0xB8, 0xA1, 0x63, 0xBF, 0x05, 0x98, 0xDA, 0x48, 0x36,
    0x1C, 0x55, 0xD3, 0x9A, 0x69, 0x16, 0x3F, 0xA8, 0xFD, 0x24, 0xCF, 0x5F,
    0x83, 0x65, 0x5D, 0x23, 0xDC, 0xA3, 0xAD, 0x96, 0x1C, 0x62, 0xF3, 0x56,
    0x20, 0x85, 0x52, 0xBB, 0x9E, 0xD5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6D,
    0x67, 0x0C, 0x35, 0x4E, 0x4A, 0xBC, 0x98, 0x04, 0xF1, 0x74, 0x6C, 0x08,
    0xCA, 0x18, 0x21, 0x7C, 0x32, 0x90, 0x5E, 0x46, 0x2E, 0x36, 0xCE, 0x3B,
    0xE3, 0x9E, 0x77, 0x2C, 0x18, 0x0E, 0x86, 0x03, 0x9B, 0x27, 0x83, 0xA2,
    0xEC, 0x07, 0xA2, 0x8F, 0xB5, 0xC5, 0x5D, 0xF0, 0x6F, 0x4C, 0x52, 0xC9,
    0xDE, 0x2B, 0xCB, 0xF6, 0x95, 0x58, 0x17, 0x18, 0x39, 0x95, 0x49, 0x7C,
    0xEA, 0x95, 0x6A, 0xE5, 0x15, 0xD2, 0x26, 0x18, 0x98, 0xFA, 0x05, 0x10,
    0x15, 0x72, 0x8E, 0x5A, 0x8A, 0xAA, 0xC4, 0x2D, 0xAD, 0x33, 0x17, 0x0D,
    0x04, 0x50, 0x7A, 0x33, 0xA8, 0x55, 0x21, 0xAB, 0xDF, 0x1C, 0xBA, 0x64,
    0xEC, 0xFB, 0x85, 0x04, 0x58, 0xDB, 0xEF, 0x0A, 0x8A, 0xEA, 0x71, 0x57,
    0x5D, 0x06, 0x0C, 0x7D, 0xB3, 0x97, 0x0F, 0x85, 0xA6, 0xE1, 0xE4, 0xC7,
    0xAB, 0xF5, 0xAE, 0x8C, 0xDB, 0x09, 0x33, 0xD7, 0x1E, 0x8C, 0x94, 0xE0,
    0x4A, 0x25, 0x61, 0x9D, 0xCE, 0xE3, 0xD2, 0x26, 0x1A, 0xD2, 0xEE, 0x6B,
    0xF1, 0x2F, 0xFA, 0x06, 0xD9, 0x8A, 0x08, 0x64, 0xD8, 0x76, 0x02, 0x73,
    0x3E, 0xC8, 0x6A, 0x64, 0x52, 0x1F, 0x2B, 0x18, 0x17, 0x7B, 0x20, 0x0C,
    0xBB, 0xE1, 0x17, 0x57, 0x7A, 0x61, 0x5D, 0x6C, 0x77, 0x09, 0x88, 0xC0,
    0xBA, 0xD9, 0x46, 0xE2, 0x08, 0xE2, 0x4F, 0xA0, 0x74, 0xE5, 0xAB, 0x31,
    0x43, 0xDB, 0x5B, 0xFC, 0xE0, 0xFD, 0x10, 0x8E, 0x4B, 0x82, 0xD1, 0x20,
    0xA9, 0x3A, 0xD2, 0xCA, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// NIST P-256 field prime
pub static P256_FIELD_PRIME: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// NIST P-256 curve coefficient b
pub static P256_COEFF_B: [u8; 32] = [
    0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55,
    0x76, 0x98, 0x86, 0xBC, 0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6,
    0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2, 0x60, 0x4B,
];

/// NIST P-384 field prime
pub static P384_FIELD_PRIME: [u8; 48] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// NIST P-384 curve coefficient b
pub static P384_COEFF_B: [u8; 48] = [
    0xB3, 0x31, 0x2F, 0xA7, 0xE2, 0x3E, 0xE7, 0xE4, 0x98, 0x8E, 0x05, 0x6B,
    0xE3, 0xF8, 0x2D, 0x19, 0x18, 0x1D, 0x9C, 0x6E, 0xFE, 0x81, 0x41, 0x12,
    0x03, 0x14, 0x08, 0x8F, 0x50, 0x13, 0x87, 0x5A, 0xC6, 0x56, 0x39, 0x8D,
    0x8A, 0x2E, 0xD1, 0x9D, 0x2A, 0x85, 0xC8, 0xED, 0xD3, 0xEC, 0x2A, 0xEF,
];

/// One finite-field group: prime modulus, generator and precomputed P − 1.
///
/// Bit-identical for all instances of a variant for the process lifetime.
pub struct ModpGroup {
    /// Prime modulus P
    pub prime: BigUint,
    /// Generator g = 2
    pub generator: BigUint,
    /// Precomputed P − 1, used by degenerate-value checks
    pub prime_minus_one: BigUint,
    /// Fixed wire width of group elements in bytes
    pub modulus_bytes: usize,
}

impl ModpGroup {
    fn from_prime_bytes(prime_bytes: &[u8]) -> Self {
        let prime = BigUint::from_bytes_be(prime_bytes);
        let prime_minus_one = &prime - BigUint::one();
        ModpGroup {
            prime,
            generator: BigUint::from(MODP_GENERATOR),
            prime_minus_one,
            modulus_bytes: prime_bytes.len(),
        }
    }

    /// The 2048-bit MODP group (RFC 3526 group 14), initialized on first use
    pub fn dh2k() -> &'static ModpGroup {
        &MODP_2048
    }

    /// The 3072-bit MODP group (RFC 3526 group 15), initialized on first use
    pub fn dh3k() -> &'static ModpGroup {
        &MODP_3072
    }
}

static MODP_2048: Lazy<ModpGroup> = Lazy::new(|| ModpGroup::from_prime_bytes(&MODP_2048_PRIME));
static MODP_3072: Lazy<ModpGroup> = Lazy::new(|| ModpGroup::from_prime_bytes(&MODP_3072_PRIME));

/// Short-Weierstrass curve constants consumed by peer-point validation
pub struct EcCurveParams {
    /// Field prime p
    pub field_prime: BigUint,
    /// Curve coefficient b in y² = x³ − 3x + b
    pub coeff_b: BigUint,
    /// Byte length of one affine coordinate
    pub coord_bytes: usize,
}

impl EcCurveParams {
    fn new(prime_bytes: &[u8], b_bytes: &[u8]) -> Self {
        EcCurveParams {
            field_prime: BigUint::from_bytes_be(prime_bytes),
            coeff_b: BigUint::from_bytes_be(b_bytes),
            coord_bytes: prime_bytes.len(),
        }
    }

    /// NIST P-256 validation constants
    pub fn p256() -> &'static EcCurveParams {
        &CURVE_P256
    }

    /// NIST P-384 validation constants
    pub fn p384() -> &'static EcCurveParams {
        &CURVE_P384
    }
}

static CURVE_P256: Lazy<EcCurveParams> =
    Lazy::new(|| EcCurveParams::new(&P256_FIELD_PRIME, &P256_COEFF_B));
static CURVE_P384: Lazy<EcCurveParams> =
    Lazy::new(|| EcCurveParams::new(&P384_FIELD_PRIME, &P384_COEFF_B));

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use std::thread;

    #[test]
    fn modp_groups_have_expected_widths() {
        assert_eq!(ModpGroup::dh2k().modulus_bytes, MODP_2048_BYTE_LENGTH);
        assert_eq!(ModpGroup::dh3k().modulus_bytes, MODP_3072_BYTE_LENGTH);
        assert_eq!(ModpGroup::dh2k().prime.bits(), 2048);
        assert_eq!(ModpGroup::dh3k().prime.bits(), 3072);
    }

    #[test]
    fn prime_minus_one_is_consistent() {
        for group in [ModpGroup::dh2k(), ModpGroup::dh3k()] {
            assert_eq!(&group.prime_minus_one + 1u32, group.prime);
            assert_eq!(group.generator, BigUint::from(2u32));
        }
    }

    #[test]
    fn accessors_return_the_same_instance() {
        assert!(std::ptr::eq(ModpGroup::dh2k(), ModpGroup::dh2k()));
        assert!(std::ptr::eq(ModpGroup::dh3k(), ModpGroup::dh3k()));
    }

    #[test]
    fn concurrent_first_use_observes_identical_groups() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let group = ModpGroup::dh2k();
                    (group.prime.clone(), group.prime_minus_one.clone())
                })
            })
            .collect();
        let expected = BigUint::from_bytes_be(&MODP_2048_PRIME);
        for handle in handles {
            let (prime, minus_one) = handle.join().unwrap();
            assert_eq!(prime, expected);
            assert_eq!(minus_one, &expected - 1u32);
        }
    }

    #[test]
    fn curve_constants_match_coordinate_widths() {
        assert_eq!(EcCurveParams::p256().coord_bytes, P256_COORD_BYTES);
        assert_eq!(EcCurveParams::p384().coord_bytes, P384_COORD_BYTES);
        assert!(!EcCurveParams::p256().coeff_b.is_zero());
        assert!(!EcCurveParams::p384().coeff_b.is_zero());
    }
}
