use std::io::BufRead;

use thiserror::Error;
use unistat_core::CharacterStats;

use crate::decoder::CharReader;
use crate::error::EngineError;

/// A scan that stopped on an error, with the counts gathered up to that point.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ScanError {
    #[source]
    pub source: EngineError,
    pub partial: CharacterStats,
}

/// Decodes `reader` to the end and tallies every character.
///
/// # Errors
///
/// Stops at the first decode or read error. The characters decoded before it
/// are counted in [`ScanError::partial`].
pub fn scan<R: BufRead>(reader: R) -> Result<CharacterStats, ScanError> {
    let mut stats = CharacterStats::new();
    for decoded in CharReader::new(reader) {
        match decoded {
            Ok(d) => stats.record(d.ch, d.len),
            Err(source) => {
                return Err(ScanError {
                    source,
                    partial: stats,
                });
            }
        }
    }
    Ok(stats)
}
