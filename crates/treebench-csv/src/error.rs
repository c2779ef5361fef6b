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

//! Error types for benchmark table loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for table loading operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors raised while reading a benchmark CSV file.
///
/// Every variant that relates to a file carries the path so the message
/// printed by the binary points straight at the offending input.
///
/// # Examples
///
/// ```
/// use treebench_csv::CsvError;
///
/// let err = CsvError::MissingColumn {
///     path: "results/height_comparison.csv".into(),
///     column: "BTreeHeight".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Missing required column 'BTreeHeight' in 'results/height_comparison.csv'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The file could not be opened or read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// Kind of the underlying I/O failure
        kind: io::ErrorKind,
        /// The error message
        message: String,
    },

    /// A column the report depends on is absent from the header row.
    #[error("Missing required column '{column}' in '{path}'")]
    MissingColumn {
        /// The file being read
        path: PathBuf,
        /// Name of the missing column
        column: String,
    },

    /// A data row could not be converted into its record type.
    #[error("CSV parse error in '{path}' at line {line}: {message}")]
    ParseError {
        /// The file being read
        path: PathBuf,
        /// Line number where the error occurred (1-based, header is line 1)
        line: u64,
        /// Detailed error message
        message: String,
    },

    /// The file has no header row at all.
    #[error("CSV file '{path}' is empty")]
    Empty {
        /// The file being read
        path: PathBuf,
    },

    /// Row count exceeded the configured limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows
        limit: usize,
        /// Row count encountered
        actual: usize,
    },

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

impl CsvError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            kind: source.kind(),
            message: source.to_string(),
        }
    }

    /// Create a missing column error.
    pub fn missing_column(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }

    /// True when the input file itself is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CsvError::Io {
                kind: io::ErrorKind::NotFound,
                ..
            }
        )
    }
}
