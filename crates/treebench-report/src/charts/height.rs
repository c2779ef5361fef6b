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

//! Tree height vs element count.

use super::{draw_line_panel, render_png, ChartStyle, LinePanel, Marker, PanelFonts, Series};
use super::{BLUE, GREEN, ORANGE};
use crate::error::Result;
use plotters::chart::SeriesLabelPosition;
use std::path::Path;
use treebench_csv::{HeightRow, Table};

const WIDTH_IN: f64 = 12.0;
const HEIGHT_IN: f64 = 7.0;

/// Renders B-Tree height, BST best-case height and BST average-case height
/// against a log-scaled element count. A table without rows produces
/// empty axes.
pub fn render_height_comparison(
    table: &Table<HeightRow>,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    let mut rows: Vec<&HeightRow> = table.iter().collect();
    rows.sort_by_key(|r| r.num_elements);
    let points = |f: fn(&HeightRow) -> f64| -> Vec<(f64, f64)> {
        rows.iter().map(|r| (r.num_elements as f64, f(r))).collect()
    };

    let panel = LinePanel {
        title: "Tree Height Scaling: B-Tree vs Binary Search Tree".to_string(),
        x_desc: "Number of Elements".to_string(),
        y_desc: "Tree Height (levels)".to_string(),
        fonts: PanelFonts {
            title: 16.0,
            axis: 14.0,
            ticks: 11.0,
            legend: 12.0,
            bold_axis: true,
        },
        series: vec![
            Series {
                label: "B-Tree (degree=100)".to_string(),
                color: GREEN,
                marker: Marker::Circle,
                line_pt: 3.0,
                marker_pt: 10.0,
                points: points(|r| r.btree_height as f64),
            },
            Series {
                label: "BST (Best Case - Balanced)".to_string(),
                color: BLUE,
                marker: Marker::Square,
                line_pt: 2.0,
                marker_pt: 8.0,
                points: points(|r| r.bst_height_best as f64),
            },
            Series {
                label: "BST (Average Case)".to_string(),
                color: ORANGE,
                marker: Marker::Triangle,
                line_pt: 2.0,
                marker_pt: 8.0,
                points: points(|r| r.bst_height_avg),
            },
        ],
        reference_y: None,
        legend: Some(SeriesLabelPosition::UpperLeft),
    };

    let theme = style.theme(WIDTH_IN, HEIGHT_IN);
    render_png(path, &theme, |root| draw_line_panel(root, &theme, &panel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeface::Typeface;
    use tempfile::TempDir;

    fn row(n: u64, btree: u32, best: u32, avg: f64) -> HeightRow {
        HeightRow {
            num_elements: n,
            btree_height: btree,
            bst_height_best: best,
            bst_height_avg: avg,
            bst_height_worst: None,
        }
    }

    #[test]
    fn test_renders_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("height.png");
        let table = Table::new(
            "height_comparison.csv",
            vec![row(1000, 2, 10, 21.5), row(100, 1, 7, 12.0), row(10_000, 2, 14, 30.1)],
        );
        let style = ChartStyle::new(20, Typeface::without_text());

        render_height_comparison(&table, &path, &style).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_header_only_table_renders_empty_axes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("height.png");
        let table: Table<HeightRow> = Table::new("height_comparison.csv", Vec::new());
        let style = ChartStyle::new(20, Typeface::without_text());

        render_height_comparison(&table, &path, &style).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"\x89PNG"));
    }
}
