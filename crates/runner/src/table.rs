use std::io::{self, Write};

use common::types::SizeResult;

/// Width of the separator line under the header.
const SEPARATOR_WIDTH: usize = 45;

pub fn header() -> String {
    format!("{:>10} | {:>10} | {:>10} | Speedup", "Size", "AoS (s)", "SoA (s)")
}

/// Formats one result row. The speedup is printed unguarded, so a zero SoA
/// mean shows up as `inf` or `NaN`.
pub fn format_row(result: &SizeResult) -> String {
    format!(
        "{:>10} | {:>10.6} | {:>10.6} | {:>7.2}x",
        result.n,
        result.aos_mean,
        result.soa_mean,
        result.speedup()
    )
}

/// Writes the header, a separator, and one row per result to `out`.
pub fn render_table<W: Write>(out: &mut W, results: &[SizeResult]) -> io::Result<()> {
    writeln!(out, "{}", header())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for result in results {
        writeln!(out, "{}", format_row(result))?;
    }
    Ok(())
}
