use std::io::{self, BufWriter, Write};

use serde_json::Value;

/// Pretty-print JSON to stdout.
///
/// Schedules run to 1200 entries, so output goes through one buffered,
/// locked handle instead of a single formatted string.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_json(&mut BufWriter::new(stdout.lock()), value) {
        eprintln!("JSON output error: {}", e);
    }
}

fn write_json<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()
}
