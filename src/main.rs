use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

use keyfmt::cli::Cli;
use keyfmt::defaults::Defaults;
use keyfmt::format::OutputRequest;
use keyfmt::process::{run, OutputMode, ProcessOpts};
use keyfmt::template::Template;
use keyfmt::Curve;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = match (cli.json, cli.format) {
        (true, Some(f)) => OutputMode::Json(Template::parse(f).request()),
        (true, None) => OutputMode::Json(OutputRequest::all()),
        (false, Some(f)) => OutputMode::Template(Template::parse(f)),
        (false, None) => bail!("a format string is required unless --json is given"),
    };
    let opts = ProcessOpts {
        backend: cli.backend,
        keep_going: cli.keep_going,
    };
    let curve = Curve::secp256k1();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let summary = run(stdin, stdout, &curve, &mode, &opts).context("processing keys")?;

    if summary.failed > 0 {
        bail!("{} key(s) could not be processed", summary.failed);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { Defaults::VERBOSE_LOG_FILTER } else { Defaults::LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
