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

//! Insert time per operation, one panel per scenario.

use super::{draw_line_panel, render_png, ChartStyle, LinePanel, Marker, PanelFonts, Series};
use super::{GREEN, RED};
use crate::aggregate::scenarios_in_order;
use crate::error::Result;
use crate::layout::{GridLayout, MAX_GRID_COLUMNS};
use plotters::chart::SeriesLabelPosition;
use std::path::Path;
use tracing::debug;
use treebench_csv::{BenchmarkRow, Table, TreeType};

/// Size of one grid cell.
const CELL_IN: f64 = 6.0;

/// Renders a grid of insert-time panels, one per scenario in the order the
/// scenarios first appear in the table.
///
/// The grid has at most three columns. Trailing cells past the last
/// scenario are left blank; a table without rows yields a single blank
/// cell. Returns the grid that was drawn.
pub fn render_insert_scenarios(
    table: &Table<BenchmarkRow>,
    path: &Path,
    style: &ChartStyle,
) -> Result<GridLayout> {
    let scenarios = scenarios_in_order(table.rows());
    let grid = GridLayout::for_cells(scenarios.len(), MAX_GRID_COLUMNS);
    debug!(
        scenarios = scenarios.len(),
        rows = grid.rows,
        columns = grid.columns,
        "insert scenario grid"
    );

    let panels: Vec<LinePanel> = scenarios
        .iter()
        .map(|scenario| scenario_panel(table.rows(), scenario))
        .collect();

    let theme = style.theme(CELL_IN * grid.columns as f64, CELL_IN * grid.rows as f64);
    render_png(path, &theme, |root| {
        let cells = root.split_evenly((grid.rows, grid.columns));
        for (index, panel) in panels.iter().enumerate() {
            let (row, column) = grid.position(index);
            draw_line_panel(&cells[row * grid.columns + column], &theme, panel)?;
        }
        Ok(())
    })?;

    Ok(grid)
}

fn scenario_panel(rows: &[BenchmarkRow], scenario: &str) -> LinePanel {
    let points = |tree_type: TreeType| -> Vec<(f64, f64)> {
        let mut points: Vec<(f64, f64)> = rows
            .iter()
            .filter(|r| r.scenario == scenario && r.tree_type == tree_type)
            .map(|r| (r.num_elements as f64, r.insert_per_op_us))
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        points
    };

    LinePanel {
        title: format!("{} Insert Pattern", scenario),
        x_desc: "Number of Elements".to_string(),
        y_desc: "Time per Insert (μs)".to_string(),
        fonts: PanelFonts {
            title: 12.0,
            axis: 11.0,
            ticks: 9.0,
            legend: 10.0,
            bold_axis: false,
        },
        series: vec![
            Series {
                label: TreeType::BTree.display_name().to_string(),
                color: GREEN,
                marker: Marker::Circle,
                line_pt: 2.0,
                marker_pt: 8.0,
                points: points(TreeType::BTree),
            },
            Series {
                label: TreeType::Bst.display_name().to_string(),
                color: RED,
                marker: Marker::Square,
                line_pt: 2.0,
                marker_pt: 8.0,
                points: points(TreeType::Bst),
            },
        ],
        reference_y: None,
        legend: Some(SeriesLabelPosition::UpperLeft),
    }
}
