//! # keyfmt
//!
//! Offline secp256k1 private key formatter.
//!
//! Reads a private key as 64 hex characters or an uncompressed WIF string and
//! produces any of: the uppercase hex key, the WIF key, the uncompressed public
//! key, and the legacy (version 0) address.
//!
//! ```
//! use keyfmt::{decode_private_key, format_key, Backend, Curve, Field, OutputRequest};
//!
//! let curve = Curve::secp256k1();
//! let key = decode_private_key("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf").unwrap();
//! let out = format_key(&curve, Backend::default(), &key, OutputRequest::all()).unwrap();
//! assert_eq!(out.get(Field::Address), Some("1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm"));
//! ```
//!
//! ## CLI
//!
//! ```bash
//! echo 0000000000000000000000000000000000000000000000000000000000000001 | keyfmt 'Address: %a\nPrivkey: %w'
//! ```

pub mod base58;
pub mod cli;
pub mod curve;
pub mod defaults;
pub mod derive;
pub mod error;
pub mod format;
pub mod hash;
pub mod key;
pub mod process;
pub mod template;

pub use curve::Curve;
pub use derive::{derive_pubkey, Backend};
pub use error::{KeyError, Result};
pub use format::{format_key, Field, FormattedKey, OutputRequest};
pub use key::{decode_private_key, PrivateKeyScalar, PublicKeyPoint};
