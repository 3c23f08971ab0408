//! secp256k1 domain parameters as an immutable value.

use num_bigint::BigUint;
use secp256k1::constants::{CURVE_ORDER, FIELD_SIZE, GENERATOR_X, GENERATOR_Y};

use crate::error::{KeyError, Result};
use crate::key::{PrivateKeyScalar, PublicKeyPoint};

/// Short Weierstrass curve y² = x³ + ax + b over F_p with generator G of order `order`.
///
/// Built once by the caller and passed by reference into the deriver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub gx: BigUint,
    pub gy: BigUint,
    pub order: BigUint,
}

impl Curve {
    pub fn secp256k1() -> Self {
        Self {
            p: BigUint::from_bytes_be(&FIELD_SIZE),
            a: BigUint::from(0u8),
            b: BigUint::from(7u8),
            gx: BigUint::from_bytes_be(&GENERATOR_X),
            gy: BigUint::from_bytes_be(&GENERATOR_Y),
            order: BigUint::from_bytes_be(&CURVE_ORDER),
        }
    }

    /// Reject 0 and anything >= the group order.
    pub fn check_scalar(&self, scalar: &PrivateKeyScalar) -> Result<()> {
        let k = BigUint::from_bytes_be(scalar.as_bytes());
        if k == BigUint::from(0u8) || k >= self.order {
            return Err(KeyError::InvalidScalar);
        }
        Ok(())
    }

    /// True when both coordinates are field elements and the curve equation holds.
    pub fn contains(&self, point: &PublicKeyPoint) -> bool {
        let x = BigUint::from_bytes_be(point.x());
        let y = BigUint::from_bytes_be(point.y());
        if x >= self.p || y >= self.p {
            return false;
        }
        let lhs = (&y * &y) % &self.p;
        let rhs = (&x * &x * &x + &self.a * &x + &self.b) % &self.p;
        lhs == rhs
    }

    pub fn generator(&self) -> PublicKeyPoint {
        PublicKeyPoint::new(to_be32(&self.gx), to_be32(&self.gy))
    }
}

/// Left-pad a value below 2^256 to 32 big-endian bytes.
fn to_be32(v: &BigUint) -> [u8; 32] {
    let bytes = v.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_uint(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    fn scalar(hex_str: &str) -> PrivateKeyScalar {
        let mut b = [0u8; 32];
        hex::decode_to_slice(hex_str, &mut b).unwrap();
        PrivateKeyScalar::from_bytes(b)
    }

    #[test]
    fn secp256k1_constants_match_sec2() {
        let c = Curve::secp256k1();
        let two = BigUint::from(2u8);
        let expected_p = two.pow(256) - two.pow(32) - BigUint::from(977u32);
        assert_eq!(c.p, expected_p);
        assert_eq!(
            c.order,
            hex_uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141")
        );
        assert_eq!(
            c.gx,
            hex_uint("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798")
        );
        assert_eq!(
            c.gy,
            hex_uint("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8")
        );
        assert_eq!(c.a, BigUint::from(0u8));
        assert_eq!(c.b, BigUint::from(7u8));
    }

    #[test]
    fn generator_is_on_curve() {
        let c = Curve::secp256k1();
        assert!(c.contains(&c.generator()));
    }

    #[test]
    fn perturbed_point_is_not_on_curve() {
        let c = Curve::secp256k1();
        let g = c.generator();
        let mut y = *g.y();
        y[31] ^= 1;
        assert!(!c.contains(&PublicKeyPoint::new(*g.x(), y)));
    }

    #[test]
    fn scalar_range() {
        let c = Curve::secp256k1();
        let zero = scalar(&"00".repeat(32));
        let n = scalar("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
        let n_minus_1 = scalar("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140");
        assert_eq!(c.check_scalar(&zero), Err(KeyError::InvalidScalar));
        assert_eq!(c.check_scalar(&n), Err(KeyError::InvalidScalar));
        assert_eq!(c.check_scalar(&n_minus_1), Ok(()));
    }
}
