//! Roster ingestion for rollqr.
//!
//! Reads the CSV roster with a header row and yields one `RosterEntry` per
//! row whose roll and name are both non-empty after trimming. Rows failing
//! that check are dropped silently; a missing configured column or an
//! unreadable file is fatal.

use std::path::Path;

use csv::ReaderBuilder;

/// One validated roster row. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub roll: String,
    pub name: String,
}

/// Load and validate the roster at `path`.
///
/// Parameters
/// - `path`: CSV file with a header row.
/// - `roll_column` / `name_column`: header names of the two required columns.
///
/// Returns
/// - `Ok(Vec<RosterEntry>)` with the valid rows in file order. Rows where
///   either configured value is empty after trimming are omitted.
/// - `Err(String)` if the file cannot be opened, a configured column is not
///   present in the header, or a record cannot be parsed.
pub fn load_roster(
    path: &Path,
    roll_column: &str,
    name_column: &str,
) -> Result<Vec<RosterEntry>, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| format!("failed to open roster {}: {}", path.display(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("failed to read header row of {}: {}", path.display(), e))?
        .clone();

    let roll_idx = column_index(&headers, roll_column, path)?;
    let name_idx = column_index(&headers, name_column, path)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| format!("failed to read row of {}: {}", path.display(), e))?;

        let roll = record.get(roll_idx).unwrap_or("").trim();
        let name = record.get(name_idx).unwrap_or("").trim();
        if roll.is_empty() || name.is_empty() {
            continue;
        }

        entries.push(RosterEntry {
            roll: roll.to_string(),
            name: name.to_string(),
        });
    }

    Ok(entries)
}

fn column_index(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize, String> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| format!("column '{}' not found in {}", column, path.display()))
}
