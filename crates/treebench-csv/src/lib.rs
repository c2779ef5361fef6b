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

//! Typed loading of B-Tree/BST benchmark result CSV files.
//!
//! The benchmark harness writes three tables:
//!
//! | File | Row type |
//! |------|----------|
//! | `height_comparison.csv` | [`HeightRow`] |
//! | `disk_io_comparison.csv` | [`DiskIoRow`] |
//! | `benchmark_results.csv` | [`BenchmarkRow`] |
//!
//! Each file is read into a [`Table`] that keeps rows in file order. Columns
//! are matched by header name; required columns are checked up front and a
//! missing one fails with [`CsvError::MissingColumn`].
//!
//! # Examples
//!
//! ```
//! use treebench_csv::{read_table_from_str, BenchmarkRow, ReadConfig, TreeType};
//!
//! let csv = "Scenario,TreeType,NumElements,InsertPerOp_us,SearchPerOp_us,TreeHeight\n\
//!            Random,BTree,1000,0.21,0.11,2\n\
//!            Random,BST,1000,0.35,0.19,21\n";
//!
//! let table = read_table_from_str::<BenchmarkRow>(csv, "benchmark_results.csv", &ReadConfig::default())?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.rows()[1].tree_type, TreeType::Bst);
//! # Ok::<(), treebench_csv::CsvError>(())
//! ```

mod error;
mod reader;
mod records;

pub use error::{CsvError, Result};
pub use reader::{
    read_table, read_table_from_reader, read_table_from_str, ReadConfig, DEFAULT_MAX_ROWS,
};
pub use records::{BenchmarkRow, DiskIoRow, HeightRow, Record, Table, TreeType};
