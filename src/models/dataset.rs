use std::{fs::File, io::BufReader, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("{path} is missing required column \"{column}\"")]
    MissingColumn { path: String, column: &'static str },
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: csv::Error },
}

/// A CSV row with its required columns resolved by header name.
pub struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a [usize],
}

impl Row<'_> {
    /// Raw text of the n-th required column.
    pub fn text(&self, n: usize) -> &str {
        self.record.get(self.columns[n]).unwrap_or_default()
    }

    /// The n-th required column as a finite float.
    pub fn number(&self, n: usize, column: &str) -> Result<f64, String> {
        let raw = self.text(n);
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(format!("{column} is not a number: {raw:?}")),
        }
    }
}

/// Reads a headed CSV file, mapping each row through `parse`.
///
/// Missing files, missing columns and I/O errors abort the load. Rows that are
/// ragged or rejected by `parse` are skipped with a warning.
pub fn load_rows<T, F>(path: &Path, required: &[&'static str], parse: F) -> Result<Vec<T>, DatasetError>
where
    F: Fn(&Row) -> Result<T, String>,
{
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path_str.clone(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Read {
            path: path_str.clone(),
            source,
        })?
        .clone();

    let mut columns = Vec::with_capacity(required.len());
    for &column in required {
        match headers.iter().position(|h| h == column) {
            Some(idx) => columns.push(idx),
            None => {
                return Err(DatasetError::MissingColumn {
                    path: path_str,
                    column,
                });
            }
        }
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // header is line 1
        let line = idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::UnequalLengths { .. }) => {
                warn!("{}: skipping line {}: {}", path_str, line, e);
                skipped += 1;
                continue;
            }
            Err(source) => {
                return Err(DatasetError::Read {
                    path: path_str,
                    source,
                });
            }
        };

        let row = Row {
            record: &record,
            columns: &columns,
        };
        match parse(&row) {
            Ok(item) => rows.push(item),
            Err(reason) => {
                warn!("{}: skipping line {}: {}", path_str, line, reason);
                skipped += 1;
            }
        }
    }

    info!("{}: loaded {} records, skipped {}", path_str, rows.len(), skipped);
    Ok(rows)
}
