//! Elliptic-curve Diffie-Hellman over the NIST P-256 and P-384 curves
//!
//! Used by the `EC25` and `EC38` variants. Curve arithmetic comes from the
//! `p256`/`p384` crates; this module adds the ZRTP wire encoding (plain
//! `x ‖ y`, no SEC1 format byte) and partial public-key validation per
//! NIST SP 800-56A §5.6.2.6.

pub mod p256;
pub mod p384;

pub use self::p256::P256Agreement;
pub use self::p384::P384Agreement;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::params::EcCurveParams;

/// Partial public-key validation of an `x ‖ y` encoded affine point.
///
/// Rejects, in order: values of the wrong wire width, the `(0, 0)` encoding
/// of the point at infinity, coordinates outside `[0, p)`, and points that do
/// not satisfy `y² ≡ x³ − 3x + b (mod p)`. The `−3` coefficient is fixed by
/// the NIST short-Weierstrass curve form and must not be generalized to other
/// curve families.
pub(crate) fn is_valid_affine_point(curve: &EcCurveParams, encoded: &[u8]) -> bool {
    if encoded.len() != 2 * curve.coord_bytes {
        return false;
    }
    let (x_bytes, y_bytes) = encoded.split_at(curve.coord_bytes);
    let x = BigUint::from_bytes_be(x_bytes);
    let y = BigUint::from_bytes_be(y_bytes);

    // (0, 0) is the wire representation of the point at infinity
    if x.is_zero() && y.is_zero() {
        return false;
    }

    let p = &curve.field_prime;
    if x >= curve.field_prime || y >= curve.field_prime {
        return false;
    }

    // y^2 ≡ x^3 - 3x + b (mod p), evaluated as ((x^2 - 3) * x + b) mod p
    let lhs = (&y * &y) % p;
    let mut rhs = (&x * &x) % p;
    rhs = (rhs + p - 3u32) % p;
    rhs = (rhs * &x) % p;
    rhs = (rhs + &curve.coeff_b) % p;

    lhs == rhs
}
