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

//! Row types for the three benchmark tables.
//!
//! Columns are bound by header name. Extra columns written by the benchmark
//! harness (`InsertTime_us`, `DiskReads`, ...) are ignored.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A benchmark result table schema.
///
/// Implemented by every row type so the reader can check the header row
/// before deserializing anything.
pub trait Record: for<'de> Deserialize<'de> {
    /// Table name used in log lines and error messages.
    const TABLE: &'static str;

    /// Header names that must be present.
    const REQUIRED_COLUMNS: &'static [&'static str];
}

/// One row of `height_comparison.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeightRow {
    #[serde(rename = "NumElements")]
    pub num_elements: u64,
    #[serde(rename = "BTreeHeight")]
    pub btree_height: u32,
    #[serde(rename = "BSTHeight_Best")]
    pub bst_height_best: u32,
    #[serde(rename = "BSTHeight_Avg")]
    pub bst_height_avg: f64,
    /// Degenerate (linked-list) BST height. Written by the harness but not plotted.
    #[serde(rename = "BSTHeight_Worst", default)]
    pub bst_height_worst: Option<u64>,
}

impl Record for HeightRow {
    const TABLE: &'static str = "height_comparison";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "NumElements",
        "BTreeHeight",
        "BSTHeight_Best",
        "BSTHeight_Avg",
    ];
}

/// One row of `disk_io_comparison.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiskIoRow {
    #[serde(rename = "NumElements")]
    pub num_elements: u64,
    #[serde(rename = "BTreeDiskTime_ms")]
    pub btree_disk_time_ms: f64,
    #[serde(rename = "BSTDiskTime_ms")]
    pub bst_disk_time_ms: f64,
    /// BST time divided by B-Tree time.
    #[serde(rename = "Speedup")]
    pub speedup: f64,
}

impl Record for DiskIoRow {
    const TABLE: &'static str = "disk_io_comparison";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "NumElements",
        "BTreeDiskTime_ms",
        "BSTDiskTime_ms",
        "Speedup",
    ];
}

/// The benchmarked structure a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TreeType {
    #[serde(rename = "BTree")]
    BTree,
    #[serde(rename = "BST")]
    Bst,
}

impl TreeType {
    /// Both structures, B-Tree first.
    pub const ALL: [TreeType; 2] = [TreeType::BTree, TreeType::Bst];

    /// Returns the label used in the CSV files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeType::BTree => "BTree",
            TreeType::Bst => "BST",
        }
    }

    /// Returns the human-readable name used on charts.
    pub fn display_name(&self) -> &'static str {
        match self {
            TreeType::BTree => "B-Tree",
            TreeType::Bst => "BST",
        }
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of `benchmark_results.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRow {
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "TreeType")]
    pub tree_type: TreeType,
    #[serde(rename = "NumElements")]
    pub num_elements: u64,
    #[serde(rename = "InsertPerOp_us")]
    pub insert_per_op_us: f64,
    #[serde(rename = "SearchPerOp_us")]
    pub search_per_op_us: f64,
    #[serde(rename = "TreeHeight")]
    pub tree_height: u32,
}

impl Record for BenchmarkRow {
    const TABLE: &'static str = "benchmark_results";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "Scenario",
        "TreeType",
        "NumElements",
        "InsertPerOp_us",
        "SearchPerOp_us",
        "TreeHeight",
    ];
}

/// Rows of one CSV file, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    path: PathBuf,
    rows: Vec<R>,
}

impl<R> Table<R> {
    /// Wraps already-parsed rows.
    pub fn new(path: impl Into<PathBuf>, rows: Vec<R>) -> Self {
        Self {
            path: path.into(),
            rows,
        }
    }

    /// The file the rows were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
