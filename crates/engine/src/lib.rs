use std::io::BufRead;

pub mod config;
pub mod decoder;
pub mod error;
pub mod input;
pub mod scanner;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::ScanError;
use unistat_core::CharacterStats;

/// Scan the configured input and return its character statistics.
///
/// `stdin` is only read when the configured input is
/// [`InputSource::Stdin`](crate::input::InputSource::Stdin). File handles are
/// closed before this returns, on success and failure alike.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, or if reading or decoding
/// fails part-way. Counts gathered before a failure are discarded.
pub fn run<R: BufRead>(config: &Config, stdin: R) -> Result<CharacterStats> {
    log::debug!("scanning {}", config.input);
    let reader = config.input.open(stdin, config.buffer_capacity)?;

    match scanner::scan(reader) {
        Ok(stats) => {
            log::debug!(
                "scanned {}: {} chars, {} multibyte",
                config.input,
                stats.total,
                stats.multibyte
            );
            Ok(stats)
        }
        Err(ScanError { source, partial }) => {
            log::debug!(
                "scan of {} aborted after {} chars: {source}",
                config.input,
                partial.total
            );
            Err(source)
        }
    }
}
