// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

use std::io::{BufRead, Write};

use crate::args::Args;
use crate::error::Result;
use unistat_engine::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Notice written to `stderr` when no file is given.
pub const STDIN_NOTICE: &str = "reading from stdin\n";

/// Runs one invocation: validate `args`, scan the input, print the report.
///
/// Nothing is written to `stdout` unless the whole input scanned cleanly.
///
/// # Errors
///
/// Usage errors are returned before any input is opened. Open, read and
/// decode failures come back as [`AppError::Engine`](crate::error::AppError).
pub fn run<R, W, E>(args: Args, stdin: R, stdout: &mut W, stderr: &mut E) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let config = Config::try_from(args)?;

    if config.announces_stdin() {
        writeln!(stderr, "{STDIN_NOTICE}")?;
    }

    let stats = unistat_engine::run(&config, stdin)?;
    presentation::write_report(stdout, &stats)?;
    Ok(())
}
