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

//! Charts and summary statistics for B-Tree/BST benchmark results.
//!
//! Reads the three CSV tables the benchmark harness writes into a results
//! directory and produces:
//!
//! | Artifact | Source |
//! |----------|--------|
//! | `graphs/height_comparison.png` | `height_comparison.csv` |
//! | `graphs/disk_io_performance.png` | `disk_io_comparison.csv` |
//! | `graphs/insert_performance_scenarios.png` | `benchmark_results.csv` |
//! | `graphs/search_performance_heatmap.png` | `benchmark_results.csv` |
//! | `summary_statistics.txt` | `benchmark_results.csv` |
//!
//! # Examples
//!
//! ```no_run
//! use treebench_report::{ReportConfig, ReportGenerator};
//!
//! let config = ReportConfig {
//!     dpi: 150,
//!     progress: false,
//!     ..ReportConfig::with_results_dir("results")
//! };
//! let report = ReportGenerator::new(config).run()?;
//! for path in &report.outputs {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), treebench_report::ReportError>(())
//! ```
//!
//! The individual stages are public too, for callers that only need one
//! artifact: see [`charts`] and [`summary`].

pub mod aggregate;
pub mod charts;
pub mod config;
mod error;
pub mod layout;
mod pipeline;
pub mod summary;
pub mod typeface;

pub use charts::ChartStyle;
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use layout::{Figure, GridLayout};
pub use pipeline::{ReportGenerator, RunReport};
pub use typeface::Typeface;
