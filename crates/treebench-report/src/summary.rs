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

//! Plain-text summary statistics.
//!
//! The summary is a banner followed by three sections, each a table of
//! group means:
//!
//! 1. insert time per operation by structure and scenario
//! 2. search time per operation by structure and scenario
//! 3. tree height by structure and element count
//!
//! Rows are sorted by key. Values carry six decimals.

use crate::aggregate::group_mean;
use crate::error::{ReportError, Result};
use std::cmp::Ordering;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;
use treebench_csv::{BenchmarkRow, Table, TreeType};

/// Width of the banner and divider lines.
pub const RULE_WIDTH: usize = 70;

pub const TITLE: &str = "BENCHMARK SUMMARY STATISTICS";
pub const INSERT_HEADER: &str = "Average Insert Time per Operation (microseconds):";
pub const SEARCH_HEADER: &str = "Average Search Time per Operation (microseconds):";
pub const HEIGHT_HEADER: &str = "Average Tree Height:";

/// Column gap in section tables.
const GAP: &str = "  ";

/// One key cell of a summary row.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Text(String),
    Count(u64),
}

impl Key {
    fn render(&self) -> String {
        match self {
            Key::Text(s) => s.clone(),
            Key::Count(n) => n.to_string(),
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Key::Count(_))
    }
}

/// A titled table of group means.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub key_columns: Vec<&'static str>,
    pub value_column: &'static str,
    pub rows: Vec<(Vec<Key>, f64)>,
}

impl Section {
    /// Mean for the row whose keys render as `keys`.
    pub fn value(&self, keys: &[&str]) -> Option<f64> {
        self.rows
            .iter()
            .find(|(k, _)| k.len() == keys.len() && k.iter().zip(keys).all(|(a, b)| a.render() == *b))
            .map(|(_, v)| *v)
    }

    fn render(&self, out: &mut String) {
        let mut header: Vec<String> = self.key_columns.iter().map(|s| s.to_string()).collect();
        header.push(self.value_column.to_string());

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|(keys, value)| {
                let mut cells: Vec<String> = keys.iter().map(Key::render).collect();
                cells.push(format!("{:.6}", value));
                cells
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|c| {
                body.iter()
                    .map(|row| row[c].chars().count())
                    .chain(std::iter::once(header[c].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let right_aligned: Vec<bool> = (0..header.len())
            .map(|c| {
                c == self.key_columns.len()
                    || self.rows.first().map_or(false, |(keys, _)| keys[c].is_numeric())
            })
            .collect();

        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for line in std::iter::once(&header).chain(&body) {
            let cells: Vec<String> = line
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    if right_aligned[c] {
                        format!("{:>width$}", cell, width = widths[c])
                    } else {
                        format!("{:<width$}", cell, width = widths[c])
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(GAP).trim_end());
        }
        out.push('\n');
    }
}

/// Computes the three summary sections.
pub fn summarize(rows: &[BenchmarkRow]) -> Vec<Section> {
    let by_scenario = |r: &BenchmarkRow| (r.tree_type, r.scenario.clone());
    let scenario_order = |a: &(TreeType, String), b: &(TreeType, String)| {
        a.0.as_str().cmp(b.0.as_str()).then_with(|| a.1.cmp(&b.1))
    };
    let scenario_rows = |means: Vec<((TreeType, String), f64)>| -> Vec<(Vec<Key>, f64)> {
        means
            .into_iter()
            .map(|((tree, scenario), v)| {
                (vec![Key::Text(tree.as_str().to_string()), Key::Text(scenario)], v)
            })
            .collect()
    };

    let insert = group_mean(rows, by_scenario, |r| r.insert_per_op_us).sorted_by(scenario_order);
    let search = group_mean(rows, by_scenario, |r| r.search_per_op_us).sorted_by(scenario_order);
    let height = group_mean(rows, |r| (r.tree_type, r.num_elements), |r| r.tree_height as f64)
        .sorted_by(|a: &(TreeType, u64), b: &(TreeType, u64)| -> Ordering {
            a.0.as_str().cmp(b.0.as_str()).then(a.1.cmp(&b.1))
        });

    vec![
        Section {
            title: INSERT_HEADER,
            key_columns: vec!["TreeType", "Scenario"],
            value_column: "InsertPerOp_us",
            rows: scenario_rows(insert),
        },
        Section {
            title: SEARCH_HEADER,
            key_columns: vec!["TreeType", "Scenario"],
            value_column: "SearchPerOp_us",
            rows: scenario_rows(search),
        },
        Section {
            title: HEIGHT_HEADER,
            key_columns: vec!["TreeType", "NumElements"],
            value_column: "TreeHeight",
            rows: height
                .into_iter()
                .map(|((tree, n), v)| (vec![Key::Text(tree.as_str().to_string()), Key::Count(n)], v))
                .collect(),
        },
    ]
}

/// Renders the full summary text.
///
/// # Examples
///
/// ```
/// use treebench_csv::{BenchmarkRow, TreeType};
/// use treebench_report::summary::{render_summary, INSERT_HEADER};
///
/// let rows = vec![BenchmarkRow {
///     scenario: "Random".to_string(),
///     tree_type: TreeType::BTree,
///     num_elements: 1000,
///     insert_per_op_us: 0.25,
///     search_per_op_us: 0.125,
///     tree_height: 2,
/// }];
/// let text = render_summary(&rows);
/// assert!(text.contains(INSERT_HEADER));
/// assert!(text.contains("0.250000"));
/// ```
pub fn render_summary(rows: &[BenchmarkRow]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", rule);
    out.push('\n');
    for section in summarize(rows) {
        section.render(&mut out);
    }
    out
}

/// Writes the summary for `table` to `path`, replacing any existing file.
///
/// A table without rows yields the three sections with column headers only.
pub fn write_summary_statistics(table: &Table<BenchmarkRow>, path: &Path) -> Result<()> {
    fs::write(path, render_summary(table.rows())).map_err(|e| ReportError::write(path, e))?;
    info!(path = %path.display(), "wrote summary statistics");
    Ok(())
}
