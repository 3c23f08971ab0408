use clap::Parser;

use crate::defaults::Defaults;
use crate::derive::Backend;

const AFTER_HELP: &str = "\
These variables are supported:
  %h = HEX privkey
  %w = WIF privkey
  %p = public key
  %a = address

Input is one key per line, either 64 hex characters or an uncompressed WIF key.

Examples:
  'Address: %a\\nPrivkey: %w'   output like the vanitygen program
  'a:%w'                       output suitable for importing into Electrum";

/// Read private keys from stdin and print formatted key data
#[derive(Parser, Debug)]
#[command(version, about = "secp256k1 private key formatter (offline)", after_help = AFTER_HELP)]
pub struct Cli {
    /// Format string with %h, %w, %p, %a variables and C-style escapes
    #[arg(required_unless_present = "json")]
    pub format: Option<String>,

    /// Emit one JSON object per key (fields from FORMAT, or all fields)
    #[arg(long)]
    pub json: bool,

    /// Curve arithmetic backend
    #[arg(long, value_enum, default_value_t = Defaults::BACKEND)]
    pub backend: Backend,

    /// Report invalid lines on stderr and continue
    #[arg(long)]
    pub keep_going: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
