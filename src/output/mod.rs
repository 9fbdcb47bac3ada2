//! Output module: persisting and reloading crawl results
//!
//! The primary artifact is a dated CSV table; a plain-text backup file is the
//! fallback when the table cannot be written. The reader side loads saved
//! tables back for comparison across runs.

mod backup;
mod reader;
mod table;

pub use backup::write_backup;
pub use reader::{find_saved_tables, read_table, SavedRow};
pub use table::{flatten_rows, table_path, write_results, write_table, FlattenedRow, COLUMNS};
