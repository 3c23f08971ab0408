//! Base58 and Base58Check over arbitrary-precision integers.
//!
//! The byte string is read as one big-endian integer and rewritten in base 58.
//! Leading zero bytes carry no value, so each one is emitted as a literal `'1'`
//! (the zero digit) and restored on decode.

use num_bigint::BigUint;

use crate::error::{KeyError, Result};
use crate::hash::checksum;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const CHECKSUM_LEN: usize = 4;

/// Encode bytes as base58.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|b| **b == 0).count();
    let rest = &data[zeros..];

    let mut out = String::with_capacity(data.len() * 138 / 100 + 1);
    out.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));
    if !rest.is_empty() {
        let digits = BigUint::from_bytes_be(rest).to_radix_be(58);
        out.extend(digits.iter().map(|d| ALPHABET[*d as usize] as char));
    }
    out
}

/// Decode a base58 string. Characters outside the alphabet are rejected.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(s.len());
    for (pos, ch) in s.chars().enumerate() {
        let digit = ch
            .is_ascii()
            .then(|| ALPHABET.iter().position(|&c| c == ch as u8))
            .flatten()
            .ok_or_else(|| {
                KeyError::invalid_input(format!("invalid base58 character {ch:?} at position {pos}"))
            })?;
        digits.push(digit as u8);
    }

    let zeros = digits.iter().take_while(|d| **d == 0).count();
    let mut out = vec![0u8; zeros];
    let rest = &digits[zeros..];
    if !rest.is_empty() {
        let value = BigUint::from_radix_be(rest, 58)
            .ok_or_else(|| KeyError::invalid_input("base58 digit out of range"))?;
        out.extend_from_slice(&value.to_bytes_be());
    }
    Ok(out)
}

/// Append the 4-byte double-SHA256 checksum and encode.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decode and verify the trailing checksum. Returns the payload without it.
pub fn decode_check(s: &str) -> Result<Vec<u8>> {
    let mut data = decode(s)?;
    if data.len() < CHECKSUM_LEN {
        return Err(KeyError::invalid_input(format!(
            "base58check string decodes to {} bytes, need at least {CHECKSUM_LEN}",
            data.len()
        )));
    }
    let split = data.len() - CHECKSUM_LEN;
    let expected = checksum(&data[..split]);
    if expected[..] != data[split..] {
        return Err(KeyError::Checksum {
            expected: hex::encode(expected),
            found: hex::encode(&data[split..]),
        });
    }
    data.truncate(split);
    Ok(data)
}

/// `decode_check` rendered as uppercase hex.
pub fn decode_to_hex(s: &str) -> Result<String> {
    decode_check(s).map(hex::encode_upper)
}
