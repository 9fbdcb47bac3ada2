//! Plain-text backup serialization
//!
//! The last-resort output path: one line per row, the four fields coerced to
//! text and concatenated with no delimiter.

use crate::output::table::FlattenedRow;
use crate::OutputResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes rows to the backup file
///
/// A pre-existing backup file is deleted first, then the rows are appended
/// line by line, so after one failed run the file holds exactly that run's
/// rows in the order the table writer would have used.
pub fn write_backup(rows: &[FlattenedRow], path: &Path) -> OutputResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for row in rows {
        writeln!(file, "{}{}{}{}", row.number, row.section, row.name, row.price)?;
    }

    Ok(())
}
