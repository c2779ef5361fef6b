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

//! PNG chart rendering.
//!
//! # Charts
//!
//! - [`render_height_comparison`]: tree height vs element count
//! - [`render_disk_io_comparison`]: disk search time and B-Tree speedup
//! - [`render_insert_scenarios`]: one insert-time panel per scenario
//! - [`render_search_heatmaps`]: mean search time, scenario × element count
//!
//! Sizes are given in inches and points, matplotlib style, and scaled by
//! the configured dpi. Element counts are always on a log axis.

mod disk_io;
mod heatmap;
mod height;
mod insert;

pub use disk_io::render_disk_io_comparison;
pub use heatmap::render_search_heatmaps;
pub use height::render_height_comparison;
pub use insert::render_insert_scenarios;

use crate::error::Result;
use crate::layout::Figure;
use crate::typeface::{Typeface, FAMILY};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::path::Path;
use tracing::info;

pub(crate) type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub(crate) const GREEN: RGBColor = RGBColor(0, 128, 0);
pub(crate) const BLUE: RGBColor = RGBColor(0, 0, 255);
pub(crate) const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub(crate) const RED: RGBColor = RGBColor(255, 0, 0);
pub(crate) const PURPLE: RGBColor = RGBColor(128, 0, 128);
pub(crate) const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Resolution and font shared by every chart of a run.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub dpi: u32,
    pub typeface: Typeface,
}

impl ChartStyle {
    pub fn new(dpi: u32, typeface: Typeface) -> Self {
        Self { dpi, typeface }
    }

    pub(crate) fn theme(&self, width_in: f64, height_in: f64) -> Theme<'_> {
        Theme {
            figure: Figure::new(width_in, height_in, self.dpi),
            typeface: &self.typeface,
        }
    }
}

/// A figure plus the font it is drawn with.
pub(crate) struct Theme<'t> {
    pub figure: Figure,
    typeface: &'t Typeface,
}

impl Theme<'_> {
    pub fn has_text(&self) -> bool {
        self.typeface.has_text()
    }

    pub fn text(&self, points: f64) -> TextStyle<'static> {
        TextStyle::from((FAMILY, self.figure.pt_f(points)).into_font())
    }

    pub fn bold(&self, points: f64) -> TextStyle<'static> {
        TextStyle::from(
            (FAMILY, self.figure.pt_f(points))
                .into_font()
                .style(FontStyle::Bold),
        )
    }

    pub fn px(&self, points: f64) -> u32 {
        self.figure.pt(points)
    }
}

/// Creates a white canvas at `path`, lets `draw` fill it, and writes the PNG.
pub(crate) fn render_png<F>(path: &Path, theme: &Theme<'_>, draw: F) -> Result<()>
where
    F: FnOnce(&Area<'_>) -> Result<()>,
{
    let root = BitMapBackend::new(path, theme.figure.pixels()).into_drawing_area();
    root.fill(&WHITE)?;
    draw(&root)?;
    root.present()?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

/// Point marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
}

/// One line of a line panel.
pub(crate) struct Series {
    pub label: String,
    pub color: RGBColor,
    pub marker: Marker,
    /// Line width in points.
    pub line_pt: f64,
    /// Marker diameter in points.
    pub marker_pt: f64,
    pub points: Vec<(f64, f64)>,
}

/// Text sizes of a line panel, in points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelFonts {
    pub title: f64,
    pub axis: f64,
    pub ticks: f64,
    pub legend: f64,
    pub bold_axis: bool,
}

/// A line chart with a log-scaled element-count x axis.
pub(crate) struct LinePanel {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub fonts: PanelFonts,
    pub series: Vec<Series>,
    /// Horizontal reference line.
    pub reference_y: Option<f64>,
    pub legend: Option<SeriesLabelPosition>,
}

/// Draws `panel` into `area`.
pub(crate) fn draw_line_panel(area: &Area<'_>, theme: &Theme<'_>, panel: &LinePanel) -> Result<()> {
    let (x_lo, x_hi) = log_bounds(
        panel
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.0)),
    );
    let (y_lo, y_hi) = linear_bounds(
        panel
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .chain(panel.reference_y),
    );

    let mut builder = ChartBuilder::on(area);
    builder.margin(theme.px(8.0));
    if theme.has_text() {
        builder
            .caption(&panel.title, theme.bold(panel.fonts.title))
            .x_label_area_size(theme.px(panel.fonts.axis * 3.2))
            .y_label_area_size(theme.px(panel.fonts.axis * 4.5));
    } else {
        builder
            .x_label_area_size(theme.px(6.0))
            .y_label_area_size(theme.px(6.0));
    }
    let mut chart = builder.build_cartesian_2d((x_lo..x_hi).log_scale(), y_lo..y_hi)?;

    let axis_style = if panel.fonts.bold_axis {
        theme.bold(panel.fonts.axis)
    } else {
        theme.text(panel.fonts.axis)
    };
    if theme.has_text() {
        chart
            .configure_mesh()
            .bold_line_style(BLACK.mix(0.12))
            .light_line_style(BLACK.mix(0.04))
            .axis_style(BLACK.mix(0.6).stroke_width(theme.px(0.8)))
            .x_desc(panel.x_desc.as_str())
            .y_desc(panel.y_desc.as_str())
            .x_label_formatter(&format_count)
            .label_style(theme.text(panel.fonts.ticks))
            .axis_desc_style(axis_style)
            .draw()?;
    } else {
        // Log axes always produce tick labels, so the mesh is skipped
        // entirely when no font is registered.
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_lo, y_lo), (x_hi, y_hi)],
            BLACK.mix(0.6).stroke_width(theme.px(0.8)),
        )))?;
    }

    if let Some(y) = panel.reference_y {
        chart.draw_series(LineSeries::new(
            vec![(x_lo, y), (x_hi, y)],
            GRAY.mix(0.5).stroke_width(theme.px(2.0)),
        ))?;
    }

    for series in &panel.series {
        let color = series.color;
        let width = theme.px(series.line_pt);
        let anno = chart.draw_series(LineSeries::new(
            series.points.iter().copied(),
            color.stroke_width(width),
        ))?;
        if theme.has_text() {
            let sample = theme.px(20.0) as i32;
            anno.label(series.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + sample, y)], color.stroke_width(width))
            });
        }
        draw_markers(&mut chart, theme, series)?;
    }

    if let Some(position) = &panel.legend {
        if theme.has_text() && !panel.series.is_empty() {
            chart
                .configure_series_labels()
                .position(position.clone())
                .margin(theme.px(6.0))
                .legend_area_size(theme.px(24.0))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.3))
                .label_font(theme.text(panel.fonts.legend))
                .draw()?;
        }
    }

    Ok(())
}

fn draw_markers<'a, 'b>(
    chart: &mut ChartContext<'a, BitMapBackend<'b>, Cartesian2d<LogCoord<f64>, RangedCoordf64>>,
    theme: &Theme<'_>,
    series: &Series,
) -> Result<()> {
    let radius = (theme.px(series.marker_pt) / 2).max(1);
    let r = radius as i32;
    let fill = series.color.filled();
    let points = series.points.iter().copied();
    match series.marker {
        Marker::Circle => {
            chart.draw_series(points.map(|p| Circle::new(p, radius, fill)))?;
        }
        Marker::Square => {
            chart.draw_series(
                points.map(|p| EmptyElement::at(p) + Rectangle::new([(-r, -r), (r, r)], fill)),
            )?;
        }
        Marker::Triangle => {
            chart.draw_series(points.map(|p| TriangleMarker::new(p, radius, fill)))?;
        }
        Marker::Diamond => {
            chart.draw_series(points.map(|p| {
                EmptyElement::at(p)
                    + Polygon::new(vec![(0, -r), (r, 0), (0, r), (-r, 0)], fill)
            }))?;
        }
    }
    Ok(())
}

/// Bounds for a log axis, padded so the outermost points clear the frame.
pub(crate) fn log_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((1.0, 10.0));
    (lo / 1.5, hi * 1.5)
}

/// Bounds for a linear axis with a 5% margin on each side.
pub(crate) fn linear_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 1.0));
    let span = hi - lo;
    if span <= f64::EPSILON * hi.abs().max(1.0) {
        let pad = (hi.abs() * 0.1).max(0.5);
        return (lo - pad, hi + pad);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

/// Tick label for an element count: `500`, `10K`, `1M`.
pub(crate) fn format_count(n: &f64) -> String {
    let n = *n;
    if n >= 1_000_000.0 {
        trim_float(n / 1_000_000.0) + "M"
    } else if n >= 1_000.0 {
        trim_float(n / 1_000.0) + "K"
    } else {
        trim_float(n)
    }
}

fn trim_float(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.1}", v)
    }
}
