use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{ArgAction, Parser, ValueHint};
use unistat_core::UNICODE_VERSION;

static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{} (Unicode {}.{}.{})",
        crate::VERSION,
        UNICODE_VERSION.0,
        UNICODE_VERSION.1,
        UNICODE_VERSION.2
    )
});

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "unistat",
    version = crate::VERSION,
    long_version = LONG_VERSION.as_str(),
    about = "Unicode character-category statistics for a file or standard input"
)]
pub struct Args {
    /// File to read. Standard input is read when omitted.
    ///
    /// Only one file is accepted; more is reported as a usage error.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Do not announce that standard input is being read.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
