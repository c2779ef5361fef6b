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

//! Search time heatmaps: scenario × element count, one per structure.

use super::{render_png, Area, ChartStyle, Theme};
use crate::aggregate::{pivot_search_times, Pivot};
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::debug;
use treebench_csv::{BenchmarkRow, Table, TreeType};

const WIDTH_IN: f64 = 16.0;
const HEIGHT_IN: f64 = 6.0;

/// Vertical slices in a colour bar.
const BAR_STEPS: usize = 64;

/// Share of each panel's width given to the colour bar.
const BAR_SHARE: f64 = 0.16;

/// Cells darker than this get white annotations.
const DARK_CELL: f64 = 0.6;

/// A light-to-dark colour ramp through three stops.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ramp([RGBColor; 3]);

pub(crate) const GREENS: Ramp = Ramp([
    RGBColor(247, 252, 245),
    RGBColor(116, 196, 118),
    RGBColor(0, 68, 27),
]);

pub(crate) const REDS: Ramp = Ramp([
    RGBColor(255, 245, 240),
    RGBColor(251, 106, 74),
    RGBColor(103, 0, 13),
]);

impl Ramp {
    /// Colour at `t` in `[0, 1]`; out-of-range values are clamped.
    pub fn at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) } * 2.0;
        let (from, to, f) = if t <= 1.0 {
            (self.0[0], self.0[1], t)
        } else {
            (self.0[1], self.0[2], t - 1.0)
        };
        RGBColor(
            lerp(from.0, to.0, f),
            lerp(from.1, to.1, f),
            lerp(from.2, to.2, f),
        )
    }
}

fn lerp(a: u8, b: u8, f: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * f).round() as u8
}

/// Renders two heatmaps side by side, B-Tree in greens and BST in reds.
///
/// Rows are scenarios in lexicographic order, columns are element counts in
/// ascending order, and each cell holds the mean search time per operation
/// annotated to two decimals. Combinations without measurements stay blank,
/// as does the panel of a structure with no rows.
pub fn render_search_heatmaps(
    table: &Table<BenchmarkRow>,
    path: &Path,
    style: &ChartStyle,
) -> Result<()> {
    let panels = [
        (
            pivot_search_times(table.rows(), TreeType::BTree),
            "B-Tree Search Performance",
            GREENS,
        ),
        (
            pivot_search_times(table.rows(), TreeType::Bst),
            "BST Search Performance",
            REDS,
        ),
    ];

    let theme = style.theme(WIDTH_IN, HEIGHT_IN);
    render_png(path, &theme, |root| {
        let halves = root.split_evenly((1, 2));
        for (area, (pivot, title, ramp)) in halves.iter().zip(&panels) {
            draw_heatmap(area, &theme, title, pivot, ramp)?;
        }
        Ok(())
    })
}

fn draw_heatmap(
    area: &Area<'_>,
    theme: &Theme<'_>,
    title: &str,
    pivot: &Pivot,
    ramp: &Ramp,
) -> Result<()> {
    if pivot.is_empty() {
        debug!(title, "no measurements; leaving heatmap blank");
        return Ok(());
    }

    let rows = pivot.row_labels().len();
    let cols = pivot.column_labels().len();
    let (lo, hi) = pivot.value_range().unwrap_or((0.0, 1.0));
    let norm = |v: f64| if hi > lo { (v - lo) / (hi - lo) } else { 0.5 };
    // Row 0 is drawn at the top.
    let y_of = |i: usize| (rows - 1 - i) as f64;

    let (width, _) = area.dim_in_pixel();
    let bar_width = (width as f64 * BAR_SHARE) as u32;
    let (main, bar) = area.split_horizontally(width - bar_width);

    let text = theme.has_text();
    let x_area = if text { theme.px(36.0) } else { theme.px(6.0) };
    let top = if text { theme.px(30.0) } else { theme.px(8.0) };

    let mut builder = ChartBuilder::on(&main);
    builder.margin(theme.px(8.0)).x_label_area_size(x_area);
    if text {
        builder
            .caption(title, theme.bold(14.0))
            .y_label_area_size(theme.px(90.0));
    } else {
        builder.y_label_area_size(theme.px(6.0));
    }
    let mut chart =
        builder.build_cartesian_2d(-0.5..cols as f64 - 0.5, -0.5..rows as f64 - 0.5)?;

    let columns = pivot.column_labels();
    let scenarios = pivot.row_labels();
    let x_fmt = |x: &f64| {
        cell_index(*x, cols)
            .map(|j| columns[j].to_string())
            .unwrap_or_default()
    };
    let y_fmt = |y: &f64| {
        cell_index(*y, rows)
            .map(|i| scenarios[rows - 1 - i].clone())
            .unwrap_or_default()
    };

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh();
    if text {
        mesh.x_labels(cols)
            .y_labels(rows)
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .x_desc("Number of Elements")
            .y_desc("Scenario")
            .label_style(theme.text(10.0))
            .axis_desc_style(theme.bold(12.0));
    } else {
        mesh.x_labels(0).y_labels(0);
    }
    mesh.draw()?;

    let cells: Vec<(usize, usize, f64)> = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .filter_map(|(i, j)| pivot.get(i, j).map(|v| (i, j, v)))
        .collect();

    chart.draw_series(cells.iter().map(|&(i, j, v)| {
        let (x, y) = (j as f64, y_of(i));
        Rectangle::new(
            [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
            ramp.at(norm(v)).filled(),
        )
    }))?;

    if text {
        let font = theme
            .text(10.0)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(cells.iter().map(|&(i, j, v)| {
            let style = if norm(v) > DARK_CELL {
                font.color(&WHITE)
            } else {
                font.color(&BLACK)
            };
            Text::new(format!("{:.2}", v), (j as f64, y_of(i)), style)
        }))?;
    }

    draw_colour_bar(&bar, theme, (lo, hi), ramp, top, x_area)
}

fn draw_colour_bar(
    area: &Area<'_>,
    theme: &Theme<'_>,
    (lo, hi): (f64, f64),
    ramp: &Ramp,
    top: u32,
    bottom: u32,
) -> Result<()> {
    let (lo, hi) = if hi > lo {
        (lo, hi)
    } else {
        let pad = (hi.abs() * 0.1).max(0.5);
        (lo - pad, hi + pad)
    };

    let text = theme.has_text();
    let mut builder = ChartBuilder::on(area);
    builder
        .margin_top(top)
        .margin_bottom(bottom)
        .margin_left(theme.px(6.0))
        .margin_right(theme.px(4.0));
    if text {
        builder.right_y_label_area_size(theme.px(48.0));
    }
    let mut chart = builder.build_cartesian_2d(0.0..1.0, lo..hi)?;

    let value_fmt = |v: &f64| format!("{:.2}", v);
    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh().disable_x_axis().x_labels(0);
    if text {
        mesh.y_labels(5)
            .y_label_formatter(&value_fmt)
            .y_desc("μs per search")
            .label_style(theme.text(9.0))
            .axis_desc_style(theme.text(10.0));
    } else {
        mesh.y_labels(0);
    }
    mesh.draw()?;

    let step = (hi - lo) / BAR_STEPS as f64;
    chart.draw_series((0..BAR_STEPS).map(|k| {
        let from = lo + step * k as f64;
        let t = (k as f64 + 0.5) / BAR_STEPS as f64;
        Rectangle::new([(0.0, from), (1.0, from + step)], ramp.at(t).filled())
    }))?;

    Ok(())
}

/// Index of the cell centred on `value`, if `value` is a cell centre.
fn cell_index(value: f64, count: usize) -> Option<usize> {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    let index = rounded as usize;
    (index < count).then_some(index)
}
