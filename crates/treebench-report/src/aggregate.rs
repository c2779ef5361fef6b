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

//! Group-by and pivot aggregation over benchmark rows.
//!
//! Rows are folded into an ordered map from group key to a running mean.
//! Groups remember the order in which their key was first seen, which is
//! the order of the insert-grid panels. Pivots and the text summary sort
//! their keys.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use treebench_csv::{BenchmarkRow, TreeType};

/// Distinct values in first-seen order.
pub fn distinct_in_order<T, I>(values: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Distinct scenario names in the order they first appear in the table.
pub fn scenarios_in_order(rows: &[BenchmarkRow]) -> Vec<String> {
    distinct_in_order(rows.iter().map(|r| r.scenario.clone()))
}

/// Running arithmetic mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The mean, or `None` when nothing was pushed.
    pub fn finish(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Means keyed by group, in first-seen key order.
#[derive(Debug, Clone)]
pub struct GroupedMeans<K> {
    keys: Vec<K>,
    accumulators: Vec<MeanAccumulator>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> Default for GroupedMeans<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> GroupedMeans<K> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            accumulators: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds one observation to the group `key`, creating the group if needed.
    pub fn push(&mut self, key: K, value: f64) {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.keys.len();
                self.index.insert(key.clone(), slot);
                self.keys.push(key);
                self.accumulators.push(MeanAccumulator::default());
                slot
            }
        };
        self.accumulators[slot].push(value);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn mean(&self, key: &K) -> Option<f64> {
        self.index
            .get(key)
            .and_then(|&slot| self.accumulators[slot].finish())
    }

    /// Number of observations folded into `key`.
    pub fn count(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.accumulators[slot].count())
            .unwrap_or(0)
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// `(key, mean)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.keys
            .iter()
            .zip(&self.accumulators)
            .filter_map(|(k, acc)| acc.finish().map(|m| (k, m)))
    }

    /// `(key, mean)` pairs ordered by `compare`.
    pub fn sorted_by<F>(&self, mut compare: F) -> Vec<(K, f64)>
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let mut entries: Vec<(K, f64)> = self.iter().map(|(k, m)| (k.clone(), m)).collect();
        entries.sort_by(|a, b| compare(&a.0, &b.0));
        entries
    }
}

/// Folds `rows` into per-group means.
///
/// # Examples
///
/// ```
/// use treebench_report::aggregate::group_mean;
///
/// let rows = vec![("a", 1.0), ("b", 10.0), ("a", 3.0)];
/// let means = group_mean(&rows, |r| r.0, |r| r.1);
/// assert_eq!(means.mean(&"a"), Some(2.0));
/// assert_eq!(means.keys(), &["a", "b"]);
/// ```
pub fn group_mean<'a, R, K, I, KF, VF>(rows: I, key: KF, value: VF) -> GroupedMeans<K>
where
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    K: Eq + Hash + Clone,
    KF: Fn(&R) -> K,
    VF: Fn(&R) -> f64,
{
    let mut groups = GroupedMeans::new();
    for row in rows {
        groups.push(key(row), value(row));
    }
    groups
}

/// A two-dimensional table of means: scenarios down, element counts across.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    row_labels: Vec<String>,
    column_labels: Vec<u64>,
    cells: Vec<Vec<Option<f64>>>,
}

impl Pivot {
    /// Builds a pivot of means.
    ///
    /// Row and column labels are both sorted ascending.
    /// A `(row, column)` pair with no observations is `None`.
    pub fn build<'a, R, I, RF, CF, VF>(rows: I, row_key: RF, column_key: CF, value: VF) -> Self
    where
        R: 'a,
        I: IntoIterator<Item = &'a R>,
        RF: Fn(&R) -> String,
        CF: Fn(&R) -> u64,
        VF: Fn(&R) -> f64,
    {
        let mut groups: GroupedMeans<(String, u64)> = GroupedMeans::new();
        for row in rows {
            groups.push((row_key(row), column_key(row)), value(row));
        }

        let mut row_labels = distinct_in_order(groups.keys().iter().map(|(r, _)| r.clone()));
        row_labels.sort_unstable();
        let mut column_labels = distinct_in_order(groups.keys().iter().map(|(_, c)| *c));
        column_labels.sort_unstable();

        let cells = row_labels
            .iter()
            .map(|r| {
                column_labels
                    .iter()
                    .map(|c| groups.mean(&(r.clone(), *c)))
                    .collect()
            })
            .collect();

        Self {
            row_labels,
            column_labels,
            cells,
        }
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[u64] {
        &self.column_labels
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(column)).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }

    /// Smallest and largest filled cell.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
    }
}

/// Mean search time per operation for one structure, by scenario × element count.
pub fn pivot_search_times(rows: &[BenchmarkRow], tree_type: TreeType) -> Pivot {
    Pivot::build(
        rows.iter().filter(|r| r.tree_type == tree_type),
        |r| r.scenario.clone(),
        |r| r.num_elements,
        |r| r.search_per_op_us,
    )
}
