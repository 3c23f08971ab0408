use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use crate::base58;
use crate::error::{KeyError, Result};
use crate::hash::hash160;

/// Version byte prefixed to a private key before Base58Check (mainnet WIF).
pub const WIF_VERSION: u8 = 0x80;
/// Version byte prefixed to hash160(pubkey) for a mainnet P2PKH address.
pub const ADDRESS_VERSION: u8 = 0x00;
/// Hex characters in a raw 32-byte key.
pub const HEX_KEY_LEN: usize = 64;

const UNCOMPRESSED_TAG: u8 = 0x04;

/// 32-byte big-endian private key (zeroized on drop).
///
/// Range is not checked here; `Curve::check_scalar` does that before derivation.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKeyScalar(Zeroizing<[u8; 32]>);

impl PrivateKeyScalar {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Uppercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.as_bytes())
    }

    /// Base58Check(0x80 || key)
    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(33));
        payload.push(WIF_VERSION);
        payload.extend_from_slice(self.as_bytes());
        base58::encode_check(&payload)
    }
}

impl fmt::Debug for PrivateKeyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyScalar(<redacted>)")
    }
}

/// Affine secp256k1 point, coordinates big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyPoint {
    x: [u8; 32],
    y: [u8; 32],
}

impl PublicKeyPoint {
    pub fn new(x: [u8; 32], y: [u8; 32]) -> Self {
        Self { x, y }
    }

    /// Parse `04 || X || Y`.
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 65 || bytes[0] != UNCOMPRESSED_TAG {
            return Err(KeyError::Backend(format!(
                "expected 65-byte uncompressed point, got {} bytes",
                bytes.len()
            )));
        }
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..]);
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[u8; 32] {
        &self.x
    }

    pub fn y(&self) -> &[u8; 32] {
        &self.y
    }

    /// 65 bytes: 0x04 || X || Y
    pub fn serialize_uncompressed(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0] = UNCOMPRESSED_TAG;
        out[1..33].copy_from_slice(&self.x);
        out[33..].copy_from_slice(&self.y);
        out
    }

    /// Uppercase hex of the uncompressed serialization (130 characters).
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.serialize_uncompressed())
    }

    /// Base58Check(0x00 || hash160(04 || X || Y))
    pub fn address(&self) -> String {
        let mut payload = Vec::with_capacity(21);
        payload.push(ADDRESS_VERSION);
        payload.extend_from_slice(&hash160(&self.serialize_uncompressed()));
        base58::encode_check(&payload)
    }
}

/// Normalize one input line into a private key.
///
/// Whitespace is dropped first. A string starting with `5` and shorter than a
/// hex key is read as uncompressed WIF; anything else must be exactly 64 hex
/// digits, optionally `0x`-prefixed.
pub fn decode_private_key(line: &str) -> Result<PrivateKeyScalar> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(KeyError::invalid_input("empty key"));
    }
    if compact.starts_with('5') && compact.len() < HEX_KEY_LEN {
        debug!(len = compact.len(), "decoding WIF key");
        decode_wif(&compact)
    } else {
        debug!(len = compact.len(), "decoding hex key");
        decode_hex(&compact)
    }
}

fn decode_wif(s: &str) -> Result<PrivateKeyScalar> {
    let payload = Zeroizing::new(base58::decode_check(s)?);
    if payload.len() != 33 {
        return Err(KeyError::invalid_input(format!(
            "WIF payload must be 33 bytes (version + key), got {}",
            payload.len()
        )));
    }
    if payload[0] != WIF_VERSION {
        return Err(KeyError::invalid_input(format!(
            "unsupported WIF version byte 0x{:02x}",
            payload[0]
        )));
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&payload[1..]);
    Ok(PrivateKeyScalar::from_bytes(bytes))
}

fn decode_hex(s: &str) -> Result<PrivateKeyScalar> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() != HEX_KEY_LEN {
        return Err(KeyError::invalid_input(format!(
            "hex key must be {HEX_KEY_LEN} characters, got {}",
            digits.len()
        )));
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| KeyError::invalid_input(format!("bad hex key: {e}")))?;
    Ok(PrivateKeyScalar::from_bytes(bytes))
}
