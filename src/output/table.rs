//! Tabular result serialization
//!
//! The primary artifact is one CSV file per calendar date; re-running on the
//! same date targets the same filename. When the tabular write fails for any
//! reason the flattened rows go to the plain-text backup file instead, and
//! the failure never propagates past this module.

use crate::catalog::{Price, ResultSet, SectionResult};
use crate::config::OutputConfig;
use crate::output::backup::write_backup;
use crate::OutputResult;
use chrono::NaiveDate;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Output column names, in order
pub const COLUMNS: [&str; 4] = ["Number_id", "Section_name", "Product_name", "Price"];

/// One output row after sorting and sequence assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedRow {
    /// 1-based position in the final sorted order, no gaps
    pub number: u64,
    pub section: String,
    pub name: String,
    pub price: Price,
}

/// Flattens a result set into deterministically ordered rows
///
/// Sections sort by label; products within a section are already name-ordered.
/// Sequence numbers are assigned 1..N over the final order.
pub fn flatten_rows(results: &ResultSet) -> Vec<FlattenedRow> {
    let mut sections: Vec<&SectionResult> = results.iter().collect();
    sections.sort_by(|a, b| {
        a.label
            .cmp(&b.label)
            .then_with(|| a.products.keys().next().cmp(&b.products.keys().next()))
    });

    let mut rows = Vec::new();
    let mut number = 0u64;
    for section in sections {
        for (name, price) in &section.products {
            number += 1;
            rows.push(FlattenedRow {
                number,
                section: section.label.clone(),
                name: name.clone(),
                price: price.clone(),
            });
        }
    }
    rows
}

/// Path of the dated table file for a given run date
pub fn table_path(dir: &str, date: NaiveDate) -> PathBuf {
    Path::new(dir).join(format!("{}.csv", date))
}

/// Writes a result set, falling back to the backup file on table failure
///
/// Returns the path of whichever artifact was produced. Only a failure of
/// both writers is an error.
pub fn write_results(results: &ResultSet, config: &OutputConfig) -> OutputResult<PathBuf> {
    let rows = flatten_rows(results);
    let path = table_path(&config.table_dir, chrono::Local::now().date_naive());

    match write_table(&rows, &path) {
        Ok(()) => {
            tracing::debug!("Results saved to {}", path.display());
            Ok(path)
        }
        Err(e) => {
            tracing::error!("Table write to {} failed: {}", path.display(), e);
            if !Path::new(&config.table_dir).is_dir() {
                tracing::warn!(
                    "Table directory {} does not exist; create it to get CSV output",
                    config.table_dir
                );
            }
            let backup = Path::new(&config.backup_path);
            write_backup(&rows, backup)?;
            tracing::debug!("Results saved to backup file {}", backup.display());
            Ok(backup.to_path_buf())
        }
    }
}

/// Serializes rows as CSV with the fixed column layout
pub fn write_table(rows: &[FlattenedRow], path: &Path) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record([
            row.number.to_string(),
            row.section.clone(),
            row.name.clone(),
            row.price.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
