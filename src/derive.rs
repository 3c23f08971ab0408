//! Scalar multiplication `k · G` through an audited secp256k1 library.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use tracing::debug;

use crate::curve::Curve;
use crate::error::{KeyError, Result};
use crate::key::{PrivateKeyScalar, PublicKeyPoint};

/// Which library performs the point multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// libsecp256k1 via the `secp256k1` crate
    #[default]
    Secp256k1,
    /// RustCrypto `k256`
    K256,
}

impl Backend {
    fn multiply(self, scalar: &PrivateKeyScalar) -> Result<PublicKeyPoint> {
        match self {
            Backend::Secp256k1 => {
                let secp = Secp256k1::signing_only();
                let sk = SecretKey::from_slice(scalar.as_bytes())?;
                let pk = PublicKey::from_secret_key(&secp, &sk);
                PublicKeyPoint::from_uncompressed(&pk.serialize_uncompressed())
            }
            Backend::K256 => {
                let sk = k256::SecretKey::from_slice(scalar.as_bytes())?;
                let pt = sk.public_key().to_encoded_point(false);
                PublicKeyPoint::from_uncompressed(pt.as_bytes())
            }
        }
    }
}

/// Derive the public key for `scalar` on `curve`.
///
/// The scalar range is checked against the curve before the backend runs, and
/// the result must satisfy the curve equation.
pub fn derive_pubkey(curve: &Curve, backend: Backend, scalar: &PrivateKeyScalar) -> Result<PublicKeyPoint> {
    curve.check_scalar(scalar)?;
    let point = backend.multiply(scalar)?;
    if !curve.contains(&point) {
        return Err(KeyError::Backend(format!("{backend:?} returned a point off the curve")));
    }
    debug!(?backend, "derived public key");
    Ok(point)
}
