use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::types::{ColumnMap, RawUserRow};
use crate::error::UserDataError;

/// Read every data row of a CSV file.
///
/// File-level problems are errors: a missing file, a header without the
/// mapped columns, or no data rows at all. Problems inside a row are left
/// for the record parser.
pub fn read_user_rows(path: &Path, columns: &ColumnMap) -> Result<Vec<RawUserRow>, UserDataError> {
    if !path.exists() {
        return Err(UserDataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(csv::Error::from)?;
    let rows = read_user_rows_from(file, columns)?;

    if rows.is_empty() {
        return Err(UserDataError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), rows = rows.len(), "read input rows");
    Ok(rows)
}

/// Read rows from any reader. Returns an empty list for input without a
/// header or without data rows.
pub fn read_user_rows_from<R: Read>(
    reader: R,
    columns: &ColumnMap,
) -> Result<Vec<RawUserRow>, UserDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let mut positions = Vec::with_capacity(4);
    let mut missing = Vec::new();
    for (field, header) in columns.pairs() {
        match headers.iter().position(|h| h == header) {
            Some(index) => positions.push((field, index)),
            None => missing.push(header.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(UserDataError::MissingColumns { missing });
    }

    let mut rows = Vec::new();
    for (i, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let mut row = RawUserRow::new(i + 1);
        for &(field, index) in &positions {
            // Short rows simply lack the field; the parser reports it
            let Some(bytes) = record.get(index) else {
                continue;
            };
            let value = match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    row.undecodable.push(field);
                    String::from_utf8_lossy(bytes).into_owned()
                }
            };
            row.fields.insert(field.to_string(), value);
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), "parsed CSV records");
    Ok(rows)
}
