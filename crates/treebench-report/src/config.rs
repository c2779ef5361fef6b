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

//! Report configuration and fixed artifact names.

use crate::error::{ReportError, Result};
use std::path::{Path, PathBuf};
use treebench_csv::ReadConfig;

/// Input file names, relative to the results directory.
pub mod inputs {
    pub const HEIGHT_COMPARISON: &str = "height_comparison.csv";
    pub const DISK_IO_COMPARISON: &str = "disk_io_comparison.csv";
    pub const BENCHMARK_RESULTS: &str = "benchmark_results.csv";
}

/// Output file names.
pub mod outputs {
    /// Graphs live in this subdirectory of the results directory.
    pub const GRAPHS_DIR: &str = "graphs";
    pub const HEIGHT_COMPARISON: &str = "height_comparison.png";
    pub const DISK_IO_PERFORMANCE: &str = "disk_io_performance.png";
    pub const INSERT_SCENARIOS: &str = "insert_performance_scenarios.png";
    pub const SEARCH_HEATMAP: &str = "search_performance_heatmap.png";
    /// Written next to the input files, not under `graphs/`.
    pub const SUMMARY_STATISTICS: &str = "summary_statistics.txt";
}

/// Default results directory, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Resolution used when saving charts.
pub const DEFAULT_DPI: u32 = 300;

/// Accepted dpi range.
pub const MIN_DPI: u32 = 10;
pub const MAX_DPI: u32 = 600;

/// Configuration for a report run.
///
/// The default reproduces the fixed layout the benchmark harness expects:
/// inputs in `results/`, charts in `results/graphs/`, summary in
/// `results/summary_statistics.txt`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use treebench_report::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.graphs_dir(), Path::new("results/graphs"));
/// assert_eq!(config.dpi, 300);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the input CSV files and the summary output.
    pub results_dir: PathBuf,

    /// Chart resolution in dots per inch.
    pub dpi: u32,

    /// TrueType font used for chart text. When `None`, common system
    /// locations are searched.
    pub font: Option<PathBuf>,

    /// Print progress lines to stdout.
    pub progress: bool,

    /// CSV reader settings shared by all inputs.
    pub read: ReadConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            dpi: DEFAULT_DPI,
            font: None,
            progress: true,
            read: ReadConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Default configuration rooted at another results directory.
    pub fn with_results_dir(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            ..Default::default()
        }
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DPI..=MAX_DPI).contains(&self.dpi) {
            return Err(ReportError::invalid_config(
                "dpi",
                format!("must be between {} and {}, got {}", MIN_DPI, MAX_DPI, self.dpi),
            ));
        }
        Ok(())
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.results_dir.join(name)
    }

    pub fn graphs_dir(&self) -> PathBuf {
        self.results_dir.join(outputs::GRAPHS_DIR)
    }

    pub fn graph_path(&self, name: &str) -> PathBuf {
        self.graphs_dir().join(name)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.results_dir.join(outputs::SUMMARY_STATISTICS)
    }

    /// Every artifact a successful run produces, in the order they are written.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        vec![
            self.graph_path(outputs::HEIGHT_COMPARISON),
            self.graph_path(outputs::DISK_IO_PERFORMANCE),
            self.graph_path(outputs::INSERT_SCENARIOS),
            self.graph_path(outputs::SEARCH_HEATMAP),
            self.summary_path(),
        ]
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }
}
