use crate::batch::Batch;
use std::io::{self, Write};
use std::path::Path;

/// Write the dry-run plan as CSV: header `old,new`, then one row per move
/// in batch order, both columns absolute paths.
pub fn write_dry_run_report(batch: &Batch, writer: &mut impl Write) -> io::Result<()> {
    write_record(writer, &["old", "new"])?;

    for plan in batch.plans() {
        let old = path_field(&plan.source);
        let new = path_field(&plan.destination);
        write_record(writer, &[&old, &new])?;
    }

    writer.flush()
}

/// One-line summary after a successful apply
pub fn display_execution_result(moved: usize, writer: &mut impl Write) -> io::Result<()> {
    let noun = if moved == 1 { "entry" } else { "entries" };
    writeln!(writer, "Moved {} {}.", moved, noun)
}

fn path_field(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn write_record(writer: &mut impl Write, fields: &[&str]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_field(writer, field)?;
    }
    writer.write_all(b"\n")
}

fn write_field(writer: &mut impl Write, field: &str) -> io::Result<()> {
    if !needs_quotes(field) {
        return writer.write_all(field.as_bytes());
    }

    writer.write_all(b"\"")?;
    writer.write_all(field.replace('"', "\"\"").as_bytes())?;
    writer.write_all(b"\"")
}

fn needs_quotes(field: &str) -> bool {
    field.starts_with(' ')
        || field.starts_with('\t')
        || field.contains([',', '"', '\r', '\n'])
}
