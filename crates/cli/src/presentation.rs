// crates/cli/src/presentation.rs
use std::fmt;
use std::io::{self, Write};

use unistat_core::CharacterStats;

/// Plain-text report: one `label count` row per class, then the multi-byte
/// and total rows, each block followed by a blank line.
pub struct Report<'a>(pub &'a CharacterStats);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        for (class, count) in stats.iter() {
            write_row(f, class.label(), count)?;
        }
        writeln!(f)?;
        write_row(f, "Multibyte:", stats.multibyte)?;
        writeln!(f)?;
        write_row(f, "Total:", stats.total)?;
        writeln!(f)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, count: usize) -> fmt::Result {
    writeln!(f, "{label:<10} {count}")
}

/// Renders the report in full before writing it, so a failed scan never
/// leaves half a report behind.
pub fn write_report<W: Write>(out: &mut W, stats: &CharacterStats) -> io::Result<()> {
    let rendered = Report(stats).to_string();
    out.write_all(rendered.as_bytes())?;
    out.flush()
}
