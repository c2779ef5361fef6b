// Dweve treebench - B-Tree/BST benchmark report generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Read benchmark CSV files into typed tables.

use crate::error::{CsvError, Result};
use crate::records::{Record, Table};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Default maximum number of data rows per file.
///
/// The harness writes a few dozen rows; anything in the millions is not a
/// benchmark result file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for reading benchmark CSV files.
///
/// # Examples
///
/// ```
/// use treebench_csv::ReadConfig;
///
/// let config = ReadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from headers and fields (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows to accept (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Read a benchmark table from a file.
///
/// The header row is checked against [`Record::REQUIRED_COLUMNS`] before any
/// row is parsed, so a schema mismatch is reported by column name rather
/// than as a deserialization failure on the first row.
///
/// # Errors
///
/// - [`CsvError::Io`] if the file cannot be opened
/// - [`CsvError::Empty`] if the file has no header row
/// - [`CsvError::MissingColumn`] if a required column is absent
/// - [`CsvError::ParseError`] if a row cannot be converted
/// - [`CsvError::SecurityLimit`] if the file exceeds `max_rows`
///
/// # Examples
///
/// ```no_run
/// use treebench_csv::{read_table, HeightRow, ReadConfig};
///
/// let table = read_table::<HeightRow>("results/height_comparison.csv", &ReadConfig::default())?;
/// println!("{} rows", table.len());
/// # Ok::<(), treebench_csv::CsvError>(())
/// ```
pub fn read_table<R: Record>(path: impl AsRef<Path>, config: &ReadConfig) -> Result<Table<R>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CsvError::io_error(path, e))?;
    read_table_from_reader(BufReader::new(file), path, config)
}

/// Read a benchmark table from an in-memory string.
///
/// `path` is only used for error messages and [`Table::path`].
pub fn read_table_from_str<R: Record>(
    csv: &str,
    path: impl AsRef<Path>,
    config: &ReadConfig,
) -> Result<Table<R>> {
    read_table_from_reader(csv.as_bytes(), path.as_ref(), config)
}

/// Read a benchmark table from any reader.
pub fn read_table_from_reader<R: Record, I: Read>(
    reader: I,
    path: &Path,
    config: &ReadConfig,
) -> Result<Table<R>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(CsvError::Empty {
            path: path.to_path_buf(),
        });
    }

    for column in R::REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(CsvError::missing_column(path, *column));
        }
    }

    let mut rows = Vec::new();
    for (record_idx, result) in csv_reader.deserialize::<R>().enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let row = result.map_err(|e| CsvError::ParseError {
            path: path.to_path_buf(),
            // Header occupies line 1.
            line: e
                .position()
                .map(|p| p.line())
                .unwrap_or(record_idx as u64 + 2),
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    debug!(
        table = R::TABLE,
        rows = rows.len(),
        path = %path.display(),
        "loaded benchmark table"
    );

    Ok(Table::new(path, rows))
}
