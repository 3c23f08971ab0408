//! Central place for CLI default values.

use crate::derive::Backend;

pub struct Defaults;

impl Defaults {
    /* Logging */
    pub const LOG_FILTER: &'static str = "warn";
    pub const VERBOSE_LOG_FILTER: &'static str = "debug";

    /* Key formatting */
    pub const BACKEND: Backend = Backend::Secp256k1;
}
