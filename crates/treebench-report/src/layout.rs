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

//! Figure sizing and subplot grids.

/// Maximum subplot columns in the per-scenario grid.
pub const MAX_GRID_COLUMNS: usize = 3;

/// Points per inch, for converting font sizes to pixels.
const POINTS_PER_INCH: f64 = 72.0;

/// A subplot grid with room for `used` cells.
///
/// The grid is filled row-major; the `unused()` trailing cells are removed
/// from the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
    pub used: usize,
}

impl GridLayout {
    /// Smallest grid with at most `max_columns` columns that holds `cells` cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use treebench_report::layout::GridLayout;
    ///
    /// let grid = GridLayout::for_cells(5, 3);
    /// assert_eq!((grid.rows, grid.columns), (2, 3));
    /// assert_eq!(grid.unused(), 1);
    /// ```
    pub fn for_cells(cells: usize, max_columns: usize) -> Self {
        let columns = cells.clamp(1, max_columns.max(1));
        let rows = ((cells + columns - 1) / columns).max(1);
        Self {
            rows,
            columns,
            used: cells,
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    pub fn unused(&self) -> usize {
        self.capacity() - self.used
    }

    /// Row and column of cell `index`, row-major.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

/// Figure size in inches at a given resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Figure {
    pub fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Canvas size in pixels.
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Converts a size in points to pixels, never less than one.
    pub fn pt(&self, points: f64) -> u32 {
        ((points * self.dpi as f64 / POINTS_PER_INCH).round() as u32).max(1)
    }

    /// Same as [`Figure::pt`] but as a float, for font sizes.
    pub fn pt_f(&self, points: f64) -> f64 {
        (points * self.dpi as f64 / POINTS_PER_INCH).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_for_five_scenarios() {
        let grid = GridLayout::for_cells(5, MAX_GRID_COLUMNS);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.capacity(), 6);
        assert_eq!(grid.unused(), 1);
    }

    #[test]
    fn test_grid_exact_fit() {
        let grid = GridLayout::for_cells(6, MAX_GRID_COLUMNS);
        assert_eq!((grid.rows, grid.columns), (2, 3));
        assert_eq!(grid.unused(), 0);
    }

    #[test]
    fn test_grid_fewer_cells_than_columns() {
        let grid = GridLayout::for_cells(2, MAX_GRID_COLUMNS);
        assert_eq!((grid.rows, grid.columns), (1, 2));
        assert_eq!(grid.unused(), 0);
    }

    #[test]
    fn test_grid_grows_past_six() {
        let grid = GridLayout::for_cells(7, MAX_GRID_COLUMNS);
        assert_eq!((grid.rows, grid.columns), (3, 3));
        assert_eq!(grid.unused(), 2);
    }

    #[test]
    fn test_grid_position() {
        let grid = GridLayout::for_cells(5, 3);
        assert_eq!(grid.position(0), (0, 0));
        assert_eq!(grid.position(2), (0, 2));
        assert_eq!(grid.position(4), (1, 1));
    }

    #[test]
    fn test_figure_pixels() {
        let fig = Figure::new(12.0, 7.0, 300);
        assert_eq!(fig.pixels(), (3600, 2100));
        assert_eq!(fig.pt(12.0), 50);
        assert_eq!(Figure::new(1.0, 1.0, 10).pt(1.0), 1);
    }
}
