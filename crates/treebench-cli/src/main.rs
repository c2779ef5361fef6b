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

//! Benchmark report generator binary.
//!
//! # Usage
//!
//! ```bash
//! # Read results/*.csv, write results/graphs/*.png and results/summary_statistics.txt
//! treebench-report
//!
//! # Another results directory, lower resolution
//! treebench-report --results-dir out --dpi 150
//!
//! # With debug logging
//! RUST_LOG=debug treebench-report
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treebench_report::config::{DEFAULT_DPI, DEFAULT_RESULTS_DIR};
use treebench_report::{ReportConfig, ReportGenerator};

/// Generate charts and summary statistics from B-Tree/BST benchmark results
///
/// Reads height_comparison.csv, disk_io_comparison.csv and
/// benchmark_results.csv from the results directory, writes four PNG
/// charts to <results-dir>/graphs and summary_statistics.txt to the
/// results directory.
#[derive(Parser)]
#[command(name = "treebench-report")]
#[command(author = "Dweve B.V.")]
#[command(version)]
#[command(about = "Generate charts and summary statistics from B-Tree/BST benchmark results")]
struct Cli {
    /// Directory holding the benchmark CSV files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Chart resolution in dots per inch (10-600)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_DPI)]
    dpi: u32,

    /// TrueType font for chart text (default: search system fonts)
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("treebench=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ReportConfig {
        results_dir: cli.results_dir,
        dpi: cli.dpi,
        font: cli.font,
        progress: !cli.quiet,
        ..Default::default()
    };
    debug!(
        results_dir = %config.results_dir.display(),
        dpi = config.dpi,
        "starting report run"
    );

    match ReportGenerator::new(config).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
