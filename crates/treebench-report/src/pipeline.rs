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

//! The report run: read each table, render each artifact, in order.

use crate::charts::{
    render_disk_io_comparison, render_height_comparison, render_insert_scenarios,
    render_search_heatmaps, ChartStyle,
};
use crate::config::{inputs, outputs, ReportConfig};
use crate::error::{ReportError, Result};
use crate::layout::GridLayout;
use crate::summary::write_summary_statistics;
use crate::typeface::Typeface;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use treebench_csv::{read_table, BenchmarkRow, DiskIoRow, HeightRow, Record, Table};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Every artifact written, in write order.
    pub outputs: Vec<PathBuf>,
    /// Grid used for the per-scenario insert chart.
    pub insert_grid: GridLayout,
    /// Whether charts carry text.
    pub with_text: bool,
}

/// Generates all report artifacts from one results directory.
///
/// Stages run strictly in sequence. The first failure ends the run; files
/// written by earlier stages are left in place.
///
/// # Examples
///
/// ```no_run
/// use treebench_report::{ReportConfig, ReportGenerator};
///
/// let report = ReportGenerator::new(ReportConfig::default()).run()?;
/// assert_eq!(report.outputs.len(), 5);
/// # Ok::<(), treebench_report::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Runs every stage.
    pub fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        self.config.validate()?;

        self.progress("📊 Generating comprehensive graphs for blog post...\n");

        let graphs_dir = self.config.graphs_dir();
        fs::create_dir_all(&graphs_dir).map_err(|e| ReportError::create_dir(&graphs_dir, e))?;
        debug!(dir = %graphs_dir.display(), "output directory ready");

        let typeface = Typeface::discover(self.config.font.as_deref())?;
        let style = ChartStyle::new(self.config.dpi, typeface);
        let mut written = Vec::with_capacity(5);

        self.progress("  Generating height comparison graph...");
        let heights: Table<HeightRow> = self.read(inputs::HEIGHT_COMPARISON)?;
        let path = self.config.graph_path(outputs::HEIGHT_COMPARISON);
        render_height_comparison(&heights, &path, &style)?;
        written.push(path);

        self.progress("  Generating disk I/O performance graph...");
        let disk: Table<DiskIoRow> = self.read(inputs::DISK_IO_COMPARISON)?;
        let path = self.config.graph_path(outputs::DISK_IO_PERFORMANCE);
        render_disk_io_comparison(&disk, &path, &style)?;
        written.push(path);

        // Shared by the three remaining stages.
        self.progress("  Generating insert performance by scenario...");
        let bench: Table<BenchmarkRow> = self.read(inputs::BENCHMARK_RESULTS)?;
        let path = self.config.graph_path(outputs::INSERT_SCENARIOS);
        let insert_grid = render_insert_scenarios(&bench, &path, &style)?;
        written.push(path);

        self.progress("  Generating search performance heatmap...");
        let path = self.config.graph_path(outputs::SEARCH_HEATMAP);
        render_search_heatmaps(&bench, &path, &style)?;
        written.push(path);

        self.progress("\n📈 Generating summary statistics...");
        let path = self.config.summary_path();
        write_summary_statistics(&bench, &path)?;
        written.push(path);

        if self.config.progress {
            println!("✅ All graphs generated successfully!");
            println!("\n📁 Output files:");
            for path in &written {
                println!("   - {}", path.display());
            }
        }
        info!(
            artifacts = written.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "report complete"
        );

        Ok(RunReport {
            outputs: written,
            insert_grid,
            with_text: style.typeface.has_text(),
        })
    }

    fn read<R: Record>(&self, name: &str) -> Result<Table<R>> {
        let path = self.config.input_path(name);
        let table: Table<R> = read_table(&path, &self.config.read)?;
        debug!(table = R::TABLE, rows = table.len(), "loaded input");
        Ok(table)
    }

    fn progress(&self, line: &str) {
        if self.config.progress {
            println!("{}", line);
        }
    }
}
