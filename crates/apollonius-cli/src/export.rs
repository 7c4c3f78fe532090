//! CSV and JSON export of generated circles.

use std::io::Write;

use apollonius_gasket::Circle;

use crate::config::OutputFormat;
use crate::error::Result;

/// CSV header line.
pub const CSV_HEADER: &str = "bend, x, y";

/// Write circles in the requested format, followed by a newline.
pub fn write_circles<W: Write>(out: &mut W, circles: &[Circle], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(out, circles),
        OutputFormat::Json => write_json(out, circles),
    }
}

/// One `bend, x, y` row per circle, in input order.
pub fn write_csv<W: Write>(out: &mut W, circles: &[Circle]) -> Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for circle in circles {
        writeln!(
            out,
            "{}, {}, {}",
            unsigned_zero(circle.bend),
            unsigned_zero(circle.center.re),
            unsigned_zero(circle.center.im)
        )?;
    }
    Ok(())
}

// -0 prints as 0
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

/// Pretty-printed JSON array of circles.
pub fn write_json<W: Write>(out: &mut W, circles: &[Circle]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, circles)?;
    writeln!(out)?;
    Ok(())
}
