use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::curve::Curve;
use crate::derive::{derive_pubkey, Backend};
use crate::error::Result;
use crate::key::PrivateKeyScalar;

/// One output value of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Hex,
    Wif,
    Pubkey,
    Address,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Hex, Field::Wif, Field::Pubkey, Field::Address];

    pub fn name(self) -> &'static str {
        match self {
            Field::Hex => "hex",
            Field::Wif => "wif",
            Field::Pubkey => "pubkey",
            Field::Address => "address",
        }
    }
}

/// The set of fields a caller wants back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputRequest {
    pub hex: bool,
    pub wif: bool,
    pub pubkey: bool,
    pub address: bool,
}

impl OutputRequest {
    pub fn all() -> Self {
        Self { hex: true, wif: true, pubkey: true, address: true }
    }

    pub fn with(mut self, field: Field) -> Self {
        match field {
            Field::Hex => self.hex = true,
            Field::Wif => self.wif = true,
            Field::Pubkey => self.pubkey = true,
            Field::Address => self.address = true,
        }
        self
    }

    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Hex => self.hex,
            Field::Wif => self.wif,
            Field::Pubkey => self.pubkey,
            Field::Address => self.address,
        }
    }

    /// Public-key derivation is only needed for these two.
    pub fn needs_point(&self) -> bool {
        self.pubkey || self.address
    }
}

impl FromIterator<Field> for OutputRequest {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

/// Requested values keyed by field, serialized as `{"hex": .., "wif": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormattedKey(BTreeMap<Field, String>);

impl FormattedKey {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build the requested textual forms of `scalar`.
///
/// Fails with `InvalidScalar` when the key is 0 or not below the group order,
/// regardless of which fields were requested.
pub fn format_key(
    curve: &Curve,
    backend: Backend,
    scalar: &PrivateKeyScalar,
    request: OutputRequest,
) -> Result<FormattedKey> {
    curve.check_scalar(scalar)?;

    let mut out = BTreeMap::new();
    if request.hex {
        out.insert(Field::Hex, scalar.to_hex());
    }
    if request.wif {
        out.insert(Field::Wif, scalar.to_wif());
    }
    if request.needs_point() {
        let point = derive_pubkey(curve, backend, scalar)?;
        if request.pubkey {
            out.insert(Field::Pubkey, point.to_hex());
        }
        if request.address {
            out.insert(Field::Address, point.address());
        }
    } else {
        debug!("skipping public key derivation");
    }
    Ok(FormattedKey(out))
}
