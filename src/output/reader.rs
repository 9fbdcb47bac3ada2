//! Reading saved tables back
//!
//! Counterpart to the writer: loads a previously written dated CSV file into
//! a name-keyed map so later runs can be compared against it, and locates the
//! dated files a directory already holds.

use crate::output::table::COLUMNS;
use crate::{OutputError, OutputResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One row of a saved table, keyed by product name in [`read_table`]'s map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRow {
    pub number: u64,
    pub section: String,
    pub price: String,
}

/// Loads a saved table into a product-name keyed map
///
/// Columns are resolved by header name, not position. Also returns the
/// section label of the first data row, which the writer's ordering makes
/// the alphabetically first section of that run.
pub fn read_table(path: &Path) -> OutputResult<(HashMap<String, SavedRow>, String)> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let column_index = |column: &str| -> OutputResult<usize> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| OutputError::MissingColumn {
                path: path.display().to_string(),
                column: column.to_string(),
            })
    };
    let number_col = column_index(COLUMNS[0])?;
    let section_col = column_index(COLUMNS[1])?;
    let name_col = column_index(COLUMNS[2])?;
    let price_col = column_index(COLUMNS[3])?;

    let malformed = |message: String| OutputError::MalformedRow {
        path: path.display().to_string(),
        message,
    };

    let mut rows = HashMap::new();
    let mut first_section = None;
    for record in reader.records() {
        let record = record?;
        let field = |col: usize| {
            record
                .get(col)
                .ok_or_else(|| malformed(format!("missing field {}", col)))
        };

        let number = field(number_col)?
            .parse::<u64>()
            .map_err(|e| malformed(format!("bad sequence number: {}", e)))?;
        let section = field(section_col)?.to_string();
        let name = field(name_col)?.to_string();
        let price = field(price_col)?.to_string();

        if first_section.is_none() {
            first_section = Some(section.clone());
        }
        rows.insert(name, SavedRow { number, section, price });
    }

    match first_section {
        Some(section) => Ok((rows, section)),
        None => Err(OutputError::EmptyTable(path.display().to_string())),
    }
}

/// Lists the dated table files in a directory, sorted by filename
///
/// Dated filenames start with the century digits, so `20` is the filter;
/// anything else in the directory is ignored.
pub fn find_saved_tables(dir: &Path) -> OutputResult<Vec<PathBuf>> {
    let mut tables = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("20") && name.ends_with(".csv") {
            tables.push(entry.path());
        }
    }
    tables.sort();
    Ok(tables)
}
