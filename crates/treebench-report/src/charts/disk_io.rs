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

//! Disk search time and B-Tree speedup, side by side.

use super::{draw_line_panel, render_png, ChartStyle, LinePanel, Marker, PanelFonts, Series};
use super::{GREEN, PURPLE, RED};
use crate::error::Result;
use plotters::chart::SeriesLabelPosition;
use std::path::Path;
use treebench_csv::{DiskIoRow, Table};

const WIDTH_IN: f64 = 16.0;
const HEIGHT_IN: f64 = 7.0;

const FONTS: PanelFonts = PanelFonts {
    title: 14.0,
    axis: 14.0,
    ticks: 11.0,
    legend: 12.0,
    bold_axis: true,
};

/// Renders two panels sharing a log-scaled element-count axis: simulated
/// disk time per search for each structure, and the B-Tree speedup with a
/// reference line at 1.0.
///
/// A table without rows produces empty axes.
pub fn render_disk_io_comparison(
    table: &Table<DiskIoRow>,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    let (times, speedup) = panels(table);

    let theme = style.theme(WIDTH_IN, HEIGHT_IN);
    render_png(path, &theme, |root| {
        let areas = root.split_evenly((1, 2));
        draw_line_panel(&areas[0], &theme, &times)?;
        draw_line_panel(&areas[1], &theme, &speedup)
    })
}

fn panels(table: &Table<DiskIoRow>) -> (LinePanel, LinePanel) {
    let mut rows: Vec<&DiskIoRow> = table.iter().collect();
    rows.sort_by_key(|r| r.num_elements);
    let points = |f: fn(&DiskIoRow) -> f64| -> Vec<(f64, f64)> {
        rows.iter().map(|r| (r.num_elements as f64, f(r))).collect()
    };

    let times = LinePanel {
        title: "Disk I/O Time per Search Operation".to_string(),
        x_desc: "Number of Elements".to_string(),
        y_desc: "Search Time (milliseconds)".to_string(),
        fonts: FONTS,
        series: vec![
            Series {
                label: "B-Tree".to_string(),
                color: GREEN,
                marker: Marker::Circle,
                line_pt: 3.0,
                marker_pt: 10.0,
                points: points(|r| r.btree_disk_time_ms),
            },
            Series {
                label: "BST".to_string(),
                color: RED,
                marker: Marker::Square,
                line_pt: 3.0,
                marker_pt: 10.0,
                points: points(|r| r.bst_disk_time_ms),
            },
        ],
        reference_y: None,
        legend: Some(SeriesLabelPosition::UpperLeft),
    };

    let speedup = LinePanel {
        title: "B-Tree Speedup Over BST".to_string(),
        x_desc: "Number of Elements".to_string(),
        y_desc: "Speedup Factor (× faster)".to_string(),
        fonts: FONTS,
        series: vec![Series {
            label: "Speedup".to_string(),
            color: PURPLE,
            marker: Marker::Diamond,
            line_pt: 3.0,
            marker_pt: 10.0,
            points: points(|r| r.speedup),
        }],
        reference_y: Some(1.0),
        legend: None,
    };

    (times, speedup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeface::Typeface;
    use tempfile::TempDir;

    #[test]
    fn test_renders_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("disk.png");
        let rows = [(1000, 0.2, 1.0), (10_000, 0.3, 1.4), (100_000, 0.3, 1.7)]
            .iter()
            .map(|&(n, btree, bst)| DiskIoRow {
                num_elements: n,
                btree_disk_time_ms: btree,
                bst_disk_time_ms: bst,
                speedup: bst / btree,
            })
            .collect();
        let table = Table::new("disk_io_comparison.csv", rows);

        render_disk_io_comparison(&table, &path, &ChartStyle::new(20, Typeface::without_text()))
            .unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_single_row_renders() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("disk.png");
        let table = Table::new(
            "disk_io_comparison.csv",
            vec![DiskIoRow {
                num_elements: 1000,
                btree_disk_time_ms: 0.5,
                bst_disk_time_ms: 0.5,
                speedup: 1.0,
            }],
        );

        render_disk_io_comparison(&table, &path, &ChartStyle::new(20, Typeface::without_text()))
            .unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_speedup_panel_style() {
        let table = Table::new(
            "disk_io_comparison.csv",
            vec![DiskIoRow {
                num_elements: 1000,
                btree_disk_time_ms: 20.0,
                bst_disk_time_ms: 140.0,
                speedup: 7.0,
            }],
        );
        let (times, speedup) = panels(&table);

        assert_eq!(times.series.len(), 2);
        assert_eq!(speedup.series[0].marker, Marker::Diamond);
        assert_eq!(speedup.series[0].marker_pt, 10.0);
        assert_eq!(speedup.reference_y, Some(1.0));
        assert_eq!(speedup.series[0].points, vec![(1000.0, 7.0)]);
    }

    #[test]
    fn test_header_only_table_renders_empty_axes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("disk.png");
        let table: Table<DiskIoRow> = Table::new("disk_io_comparison.csv", Vec::new());

        render_disk_io_comparison(&table, &path, &ChartStyle::new(20, Typeface::without_text()))
            .unwrap();
        assert!(path.is_file());
    }
}
