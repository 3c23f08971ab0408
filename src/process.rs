use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

use crate::curve::Curve;
use crate::derive::Backend;
use crate::error::KeyError;
use crate::format::{format_key, OutputRequest};
use crate::key::decode_private_key;
use crate::template::Template;

/// How each key is written out.
#[derive(Debug, Clone)]
pub enum OutputMode {
    /// Substitute into a format string, one rendered line per key
    Template(Template),
    /// One JSON object per key with the requested fields
    Json(OutputRequest),
}

impl OutputMode {
    pub fn request(&self) -> OutputRequest {
        match self {
            OutputMode::Template(t) => t.request(),
            OutputMode::Json(r) => *r,
        }
    }
}

/// Options for the line processor
#[derive(Clone, Debug, Default)]
pub struct ProcessOpts {
    pub backend: Backend,
    /// Report bad lines and continue instead of stopping at the first one
    pub keep_going: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub failed: usize,
}

/// Decode, format and render a single input line (without the trailing newline).
pub fn process_line(
    curve: &Curve,
    backend: Backend,
    mode: &OutputMode,
    line: &str,
) -> std::result::Result<Vec<u8>, KeyError> {
    let scalar = decode_private_key(line)?;
    let values = format_key(curve, backend, &scalar, mode.request())?;
    debug!(fields = ?values.iter().map(|(f, _)| f.name()).collect::<Vec<_>>(), "formatted key");
    Ok(match mode {
        OutputMode::Template(t) => t.render(&values),
        OutputMode::Json(_) => serde_json::to_vec(&values).map_err(|e| KeyError::Backend(e.to_string()))?,
    })
}

/// Read keys line by line and write one record per key. Blank lines are skipped.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    curve: &Curve,
    mode: &OutputMode,
    opts: &ProcessOpts,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        let line = line.with_context(|| format!("reading line {lineno}"))?;
        if line.trim().is_empty() {
            debug!(lineno, "skipping blank line");
            continue;
        }

        match process_line(curve, opts.backend, mode, &line) {
            Ok(mut record) => {
                record.push(b'\n');
                writer
                    .write_all(&record)
                    .with_context(|| format!("writing output for line {lineno}"))?;
                summary.written += 1;
            }
            Err(e) if opts.keep_going => {
                error!(lineno, error = %e, "skipping key");
                summary.failed += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("line {lineno}")),
        }
    }

    writer.flush().context("flushing output")?;
    if summary.failed > 0 {
        warn!(failed = summary.failed, written = summary.written, "some keys could not be processed");
    }
    Ok(summary)
}
