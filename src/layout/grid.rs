//! Row/column geometry for a table.
//!
//! Offsets are pre-computed from the row heights and column widths so that
//! rect queries are O(1) and pixel hit testing is O(log n), with an O(1) fast
//! path for the repeated small moves of a drag.

use std::cell::Cell;

use crate::config::TableConfig;
use crate::error::{Axis, GridError, Result};
use crate::types::Region;

/// Position and extent of one row or column along its axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Leading edge in grid pixels
    pub offset: f32,
    /// Height of the row or width of the column
    pub size: f32,
}

/// Rectangle in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Pre-computed geometry for a table
#[derive(Debug, Clone)]
pub struct Grid {
    /// Row heights (0 for hidden rows)
    row_heights: Vec<f32>,
    /// Column widths (0 for hidden columns)
    column_widths: Vec<f32>,
    /// `row_offsets[i]` = y of row i's top edge, plus a final bottom edge.
    /// Summed in f64 and stored as f32, so edges past 2^24 px (about 800k
    /// rows of 20 px) are only resolved to 2 px or coarser.
    row_offsets: Vec<f32>,
    /// `column_offsets[i]` = x of column i's left edge, plus a final right edge
    column_offsets: Vec<f32>,
    num_frozen_rows: u32,
    num_frozen_columns: u32,
    /// Last row bucket hit by `row_at_pixel`
    row_hint: Cell<usize>,
    /// Last column bucket hit by `column_at_pixel`
    column_hint: Cell<usize>,
}

impl Grid {
    /// Build a grid from explicit sizes.
    ///
    /// # Errors
    /// `InvalidConfiguration` if a size is negative or not finite, or if a
    /// frozen count exceeds the number of rows/columns.
    pub fn new(
        row_heights: Vec<f32>,
        column_widths: Vec<f32>,
        num_frozen_rows: u32,
        num_frozen_columns: u32,
    ) -> Result<Self> {
        validate_sizes(Axis::Row, &row_heights)?;
        validate_sizes(Axis::Column, &column_widths)?;
        validate_frozen(Axis::Row, num_frozen_rows, row_heights.len())?;
        validate_frozen(Axis::Column, num_frozen_columns, column_widths.len())?;

        let row_offsets = prefix_sums(&row_heights);
        let column_offsets = prefix_sums(&column_widths);

        log::debug!(
            "grid built: {} rows x {} columns, frozen {}x{}",
            row_heights.len(),
            column_widths.len(),
            num_frozen_rows,
            num_frozen_columns
        );

        Ok(Self {
            row_heights,
            column_widths,
            row_offsets,
            column_offsets,
            num_frozen_rows,
            num_frozen_columns,
            row_hint: Cell::new(0),
            column_hint: Cell::new(0),
        })
    }

    /// Build a grid from a table configuration, filling unspecified sizes
    /// with the configured defaults.
    ///
    /// # Errors
    /// Same conditions as [`Grid::new`].
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        let row_heights = (0..config.num_rows)
            .map(|row| {
                config
                    .row_heights
                    .get(&row)
                    .copied()
                    .unwrap_or(config.default_row_height)
            })
            .collect();
        let column_widths = (0..config.num_columns)
            .map(|col| {
                config
                    .column_widths
                    .get(&col)
                    .copied()
                    .unwrap_or(config.default_column_width)
            })
            .collect();
        Self::new(
            row_heights,
            column_widths,
            config.num_frozen_rows,
            config.num_frozen_columns,
        )
    }

    pub fn num_rows(&self) -> u32 {
        count_u32(self.row_heights.len())
    }

    pub fn num_columns(&self) -> u32 {
        count_u32(self.column_widths.len())
    }

    pub fn num_frozen_rows(&self) -> u32 {
        self.num_frozen_rows
    }

    pub fn num_frozen_columns(&self) -> u32 {
        self.num_frozen_columns
    }

    pub fn row_offsets(&self) -> &[f32] {
        &self.row_offsets
    }

    pub fn column_offsets(&self) -> &[f32] {
        &self.column_offsets
    }

    /// Vertical span of a row.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `row >= num_rows()`.
    pub fn row_rect(&self, row: u32) -> Result<Span> {
        span_at(Axis::Row, &self.row_offsets, &self.row_heights, row)
    }

    /// Horizontal span of a column.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `col >= num_columns()`.
    pub fn column_rect(&self, col: u32) -> Result<Span> {
        span_at(Axis::Column, &self.column_offsets, &self.column_widths, col)
    }

    /// Total height of rows `0..=row`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `row >= num_rows()`.
    pub fn cumulative_height_at(&self, row: u32) -> Result<f32> {
        let span = self.row_rect(row)?;
        Ok(span.offset + span.size)
    }

    /// Total width of columns `0..=col`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `col >= num_columns()`.
    pub fn cumulative_width_at(&self, col: u32) -> Result<f32> {
        let span = self.column_rect(col)?;
        Ok(span.offset + span.size)
    }

    /// Find row at y position, clamped to the valid rows
    pub fn row_at_pixel(&self, y: f32) -> u32 {
        hinted_index_at_pixel(&self.row_offsets, &self.row_hint, y)
    }

    /// Find column at x position, clamped to the valid columns
    pub fn column_at_pixel(&self, x: f32) -> u32 {
        hinted_index_at_pixel(&self.column_offsets, &self.column_hint, x)
    }

    /// Get total height of the grid
    pub fn total_height(&self) -> f32 {
        self.row_offsets.last().copied().unwrap_or(0.0)
    }

    /// Get total width of the grid
    pub fn total_width(&self) -> f32 {
        self.column_offsets.last().copied().unwrap_or(0.0)
    }

    /// Get the total height of frozen rows (returns 0 if no frozen rows)
    pub fn frozen_rows_height(&self) -> f32 {
        self.row_offsets
            .get(self.num_frozen_rows as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Get the total width of frozen columns (returns 0 if no frozen columns)
    pub fn frozen_columns_width(&self) -> f32 {
        self.column_offsets
            .get(self.num_frozen_columns as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Rows intersecting the vertical band `[top, top + height]`, inclusive.
    ///
    /// `None` when the grid has no rows.
    pub fn visible_rows(&self, top: f32, height: f32) -> Option<(u32, u32)> {
        if self.row_heights.is_empty() {
            return None;
        }
        let start = index_at_pixel(&self.row_offsets, top);
        let end = index_at_pixel(&self.row_offsets, top + height.max(0.0));
        Some((start, end))
    }

    /// Columns intersecting the horizontal band `[left, left + width]`, inclusive.
    ///
    /// `None` when the grid has no columns.
    pub fn visible_columns(&self, left: f32, width: f32) -> Option<(u32, u32)> {
        if self.column_widths.is_empty() {
            return None;
        }
        let start = index_at_pixel(&self.column_offsets, left);
        let end = index_at_pixel(&self.column_offsets, left + width.max(0.0));
        Some((start, end))
    }

    /// Bounds of a region in grid coordinates. Unbounded axes cover the
    /// whole grid.
    ///
    /// # Errors
    /// `IndexOutOfRange` if a bounded axis reaches past the table.
    pub fn region_rect(&self, region: &Region) -> Result<Rect> {
        let (y, height) = match region.row_range() {
            Some(rows) => {
                let top = self.row_rect(rows.start())?;
                let bottom = self.cumulative_height_at(rows.end())?;
                (top.offset, bottom - top.offset)
            }
            None => (0.0, self.total_height()),
        };
        let (x, width) = match region.column_range() {
            Some(cols) => {
                let left = self.column_rect(cols.start())?;
                let right = self.cumulative_width_at(cols.end())?;
                (left.offset, right - left.offset)
            }
            None => (0.0, self.total_width()),
        };
        Ok(Rect {
            x,
            y,
            width,
            height,
        })
    }

    /// Resize one row and shift every row below it.
    ///
    /// # Errors
    /// `IndexOutOfRange` for an unknown row, `InvalidConfiguration` for a
    /// negative or non-finite height.
    pub fn set_row_height(&mut self, row: u32, height: f32) -> Result<()> {
        validate_size(Axis::Row, row, height)?;
        let count = self.num_rows();
        let slot = self
            .row_heights
            .get_mut(row as usize)
            .ok_or(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                count,
            })?;
        *slot = height;
        recompute_from(&mut self.row_offsets, &self.row_heights, row as usize);
        self.row_hint.set(0);
        log::debug!("row {row} resized to {height}");
        Ok(())
    }

    /// Resize one column and shift every column to its right.
    ///
    /// # Errors
    /// `IndexOutOfRange` for an unknown column, `InvalidConfiguration` for a
    /// negative or non-finite width.
    pub fn set_column_width(&mut self, col: u32, width: f32) -> Result<()> {
        validate_size(Axis::Column, col, width)?;
        let count = self.num_columns();
        let slot = self
            .column_widths
            .get_mut(col as usize)
            .ok_or(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                count,
            })?;
        *slot = width;
        recompute_from(&mut self.column_offsets, &self.column_widths, col as usize);
        self.column_hint.set(0);
        log::debug!("column {col} resized to {width}");
        Ok(())
    }

    /// Replace every row height. The row count may change.
    ///
    /// # Errors
    /// `InvalidConfiguration` for a bad size or if the frozen row count no
    /// longer fits.
    pub fn set_row_heights(&mut self, row_heights: Vec<f32>) -> Result<()> {
        validate_sizes(Axis::Row, &row_heights)?;
        validate_frozen(Axis::Row, self.num_frozen_rows, row_heights.len())?;
        self.row_offsets = prefix_sums(&row_heights);
        self.row_heights = row_heights;
        self.row_hint.set(0);
        log::debug!("row heights replaced ({} rows)", self.row_heights.len());
        Ok(())
    }

    /// Replace every column width. The column count may change.
    ///
    /// # Errors
    /// `InvalidConfiguration` for a bad size or if the frozen column count no
    /// longer fits.
    pub fn set_column_widths(&mut self, column_widths: Vec<f32>) -> Result<()> {
        validate_sizes(Axis::Column, &column_widths)?;
        validate_frozen(Axis::Column, self.num_frozen_columns, column_widths.len())?;
        self.column_offsets = prefix_sums(&column_widths);
        self.column_widths = column_widths;
        self.column_hint.set(0);
        log::debug!(
            "column widths replaced ({} columns)",
            self.column_widths.len()
        );
        Ok(())
    }

    /// Change the frozen pane counts.
    ///
    /// # Errors
    /// `InvalidConfiguration` if a count exceeds the rows/columns.
    pub fn set_frozen(&mut self, num_frozen_rows: u32, num_frozen_columns: u32) -> Result<()> {
        validate_frozen(Axis::Row, num_frozen_rows, self.row_heights.len())?;
        validate_frozen(Axis::Column, num_frozen_columns, self.column_widths.len())?;
        self.num_frozen_rows = num_frozen_rows;
        self.num_frozen_columns = num_frozen_columns;
        Ok(())
    }
}

/// Largest index `i` with `offsets[i] <= pixel`, clamped to the valid indices.
///
/// `offsets` holds one leading edge per index followed by the trailing edge of
/// the last index, as stored by [`Grid`]. Pixels before the first edge resolve
/// to 0 and pixels past the end resolve to the last index, so dragging beyond
/// the table still lands on a cell. NaN and empty axes resolve to 0.
pub fn index_at_pixel(offsets: &[f32], pixel: f32) -> u32 {
    let count = offsets.len().saturating_sub(1);
    let leading = offsets.get(..count).unwrap_or_default();
    let after = leading.partition_point(|&edge| edge <= pixel);
    count_u32(after.saturating_sub(1))
}

fn hinted_index_at_pixel(offsets: &[f32], hint: &Cell<usize>, pixel: f32) -> u32 {
    let count = offsets.len().saturating_sub(1);
    let bucket = hint.get();
    if let (Some(&lo), Some(&hi)) = (offsets.get(bucket), offsets.get(bucket + 1)) {
        if lo <= pixel && (pixel < hi || bucket + 1 == count) {
            return count_u32(bucket);
        }
    }
    let index = index_at_pixel(offsets, pixel);
    hint.set(index as usize);
    index
}

fn span_at(axis: Axis, offsets: &[f32], sizes: &[f32], index: u32) -> Result<Span> {
    let i = index as usize;
    match (offsets.get(i), sizes.get(i)) {
        (Some(&offset), Some(&size)) => Ok(Span { offset, size }),
        _ => Err(GridError::IndexOutOfRange {
            axis,
            index,
            count: count_u32(sizes.len()),
        }),
    }
}

fn prefix_sums(sizes: &[f32]) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    offsets.push(0.0);
    push_edges(&mut offsets, 0.0, sizes);
    offsets
}

/// Rebuild `offsets[from + 1..]` after `sizes[from]` changed.
fn recompute_from(offsets: &mut Vec<f32>, sizes: &[f32], from: usize) {
    let start = offsets.get(from).copied().unwrap_or(0.0);
    offsets.truncate(from + 1);
    push_edges(offsets, f64::from(start), sizes.get(from..).unwrap_or_default());
}

/// Sums run in f64 and each edge is rounded to f32 once, so the error of an
/// edge stays within half an f32 ulp instead of growing with the row count.
#[allow(clippy::cast_possible_truncation)]
fn push_edges(offsets: &mut Vec<f32>, start: f64, sizes: &[f32]) {
    let mut edge = start;
    for &size in sizes {
        edge += f64::from(size);
        offsets.push(edge as f32);
    }
}

fn validate_size(axis: Axis, index: u32, size: f32) -> Result<()> {
    if size.is_finite() && size >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidConfiguration(format!(
            "{axis} {index} has invalid size {size}"
        )))
    }
}

fn validate_sizes(axis: Axis, sizes: &[f32]) -> Result<()> {
    let count = u32::try_from(sizes.len()).map_err(|_| {
        GridError::InvalidConfiguration(format!("too many {axis}s: {}", sizes.len()))
    })?;
    for (index, &size) in (0..count).zip(sizes) {
        validate_size(axis, index, size)?;
    }
    Ok(())
}

fn validate_frozen(axis: Axis, frozen: u32, count: usize) -> Result<()> {
    if frozen as usize > count {
        return Err(GridError::InvalidConfiguration(format!(
            "{frozen} frozen {axis}s but only {count} {axis}s"
        )));
    }
    Ok(())
}

/// Counts are validated to fit in `u32` at construction.
fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
mod tests {
    use super::*;

    fn uniform(rows: usize, cols: usize) -> Grid {
        Grid::new(vec![20.0; rows], vec![64.0; cols], 0, 0).unwrap()
    }

    #[test]
    fn test_basic_layout() {
        let grid = uniform(11, 6);
        assert_eq!(grid.num_rows(), 11);
        assert_eq!(grid.num_columns(), 6);
        assert_eq!(grid.total_width(), 64.0 * 6.0);
        assert_eq!(grid.total_height(), 20.0 * 11.0);
    }

    #[test]
    fn test_row_and_column_rect() {
        let grid = Grid::new(vec![10.0, 30.0, 5.0], vec![50.0, 70.0], 0, 0).unwrap();
        assert_eq!(grid.row_rect(0).unwrap(), Span { offset: 0.0, size: 10.0 });
        assert_eq!(grid.row_rect(2).unwrap(), Span { offset: 40.0, size: 5.0 });
        assert_eq!(grid.column_rect(1).unwrap(), Span { offset: 50.0, size: 70.0 });
    }

    #[test]
    fn test_rect_out_of_range() {
        let grid = uniform(3, 2);
        match grid.row_rect(3) {
            Err(GridError::IndexOutOfRange { axis, index, count }) => {
                assert_eq!(axis, Axis::Row);
                assert_eq!(index, 3);
                assert_eq!(count, 3);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
        assert!(grid.column_rect(2).is_err());
        assert!(grid.cumulative_width_at(9).is_err());
    }

    #[test]
    fn test_cumulative_sizes_are_inclusive_prefix_sums() {
        let heights = vec![12.0, 0.0, 33.0, 7.0, 21.0];
        let grid = Grid::new(heights.clone(), vec![1.0], 0, 0).unwrap();
        for i in 0..heights.len() {
            let expected: f32 = heights[..=i].iter().sum();
            assert_eq!(grid.cumulative_height_at(i as u32).unwrap(), expected);
        }
    }

    #[test]
    fn test_row_at_pixel() {
        let grid = uniform(11, 6);
        assert_eq!(grid.row_at_pixel(0.0), 0);
        assert_eq!(grid.row_at_pixel(10.0), 0);
        assert_eq!(grid.row_at_pixel(20.0), 1);
        assert_eq!(grid.row_at_pixel(20.0 * 2.5), 2);
    }

    #[test]
    fn test_column_at_pixel() {
        let grid = uniform(11, 6);
        assert_eq!(grid.column_at_pixel(0.0), 0);
        assert_eq!(grid.column_at_pixel(32.0), 0);
        assert_eq!(grid.column_at_pixel(64.0), 1);
        assert_eq!(grid.column_at_pixel(64.0 * 2.5), 2);
    }

    #[test]
    fn test_index_at_pixel_clamps() {
        let grid = uniform(4, 3);
        assert_eq!(grid.row_at_pixel(-1.0), 0);
        assert_eq!(grid.row_at_pixel(-10_000.0), 0);
        assert_eq!(grid.row_at_pixel(80.0), 3);
        assert_eq!(grid.row_at_pixel(1.0e9), 3);
        assert_eq!(grid.column_at_pixel(f32::INFINITY), 2);
        assert_eq!(grid.column_at_pixel(f32::NAN), 0);
        assert_eq!(index_at_pixel(&[], 5.0), 0);
        assert_eq!(index_at_pixel(&[0.0], 5.0), 0);
    }

    #[test]
    fn test_hidden_row_is_skipped() {
        let grid = Grid::new(vec![20.0, 0.0, 20.0], vec![10.0], 0, 0).unwrap();
        // Row 1 has no height; y = 20 belongs to row 2.
        assert_eq!(grid.row_at_pixel(20.0), 2);
        assert_eq!(grid.row_at_pixel(19.9), 0);
    }

    #[test]
    fn test_hint_matches_binary_search() {
        let heights: Vec<f32> = (0..200).map(|i| 5.0 + (i % 7) as f32).collect();
        let grid = Grid::new(heights, vec![10.0], 0, 0).unwrap();
        let offsets = grid.row_offsets().to_vec();
        let mut y = -30.0;
        while y < grid.total_height() + 30.0 {
            assert_eq!(grid.row_at_pixel(y), index_at_pixel(&offsets, y), "y = {y}");
            y += 3.3;
        }
        // Jump backwards after walking forward.
        assert_eq!(grid.row_at_pixel(0.0), 0);
    }

    #[test]
    fn test_frozen_sizes() {
        let grid = Grid::new(vec![10.0, 20.0, 30.0], vec![5.0, 6.0, 7.0], 2, 1).unwrap();
        assert_eq!(grid.frozen_rows_height(), 30.0);
        assert_eq!(grid.frozen_columns_width(), 5.0);

        let unfrozen = uniform(3, 3);
        assert_eq!(unfrozen.frozen_rows_height(), 0.0);
        assert_eq!(unfrozen.frozen_columns_width(), 0.0);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            Grid::new(vec![10.0; 2], vec![10.0; 2], 3, 0),
            Err(GridError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(vec![10.0; 2], vec![10.0; 2], 0, 5),
            Err(GridError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(vec![10.0, -1.0], vec![10.0], 0, 0),
            Err(GridError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(vec![10.0], vec![f32::NAN], 0, 0),
            Err(GridError::InvalidConfiguration(_))
        ));
        // Freezing every row is allowed.
        assert!(Grid::new(vec![10.0; 2], vec![10.0; 2], 2, 2).is_ok());
    }

    #[test]
    fn test_resize_shifts_following_offsets() {
        let mut grid = uniform(5, 5);
        assert_eq!(grid.row_at_pixel(45.0), 2);
        grid.set_row_height(1, 50.0).unwrap();
        assert_eq!(grid.row_offsets(), &[0.0, 20.0, 70.0, 90.0, 110.0, 130.0]);
        assert_eq!(grid.row_at_pixel(45.0), 1);
        assert_eq!(grid.cumulative_height_at(4).unwrap(), 130.0);

        grid.set_column_width(0, 0.0).unwrap();
        assert_eq!(grid.column_rect(1).unwrap().offset, 0.0);
        assert!(grid.set_column_width(5, 10.0).is_err());
        assert!(grid.set_row_height(0, -3.0).is_err());
    }

    #[test]
    fn test_million_fractional_rows_do_not_drift() {
        let height = 20.3_f32;
        let rows = 1_000_000_usize;
        let mut grid = Grid::new(vec![height; rows], vec![64.0], 0, 0).unwrap();
        let exact = |i: usize| i as f64 * f64::from(height);

        // f32 edges near 2e7 are 2 pixels apart.
        assert!((f64::from(grid.total_height()) - exact(rows)).abs() <= 2.0);
        let mid = grid.row_rect(750_000).unwrap().offset;
        assert!((f64::from(mid) - exact(750_000)).abs() <= 1.0);
        assert_eq!(grid.row_at_pixel((exact(rows - 1) + 10.0) as f32), 999_999);

        grid.set_row_height(0, 25.0).unwrap();
        let shifted = exact(rows) + 25.0 - f64::from(height);
        assert!((f64::from(grid.total_height()) - shifted).abs() <= 2.0);
    }

    #[test]
    fn test_replace_sizes_revalidates_frozen() {
        let mut grid = Grid::new(vec![10.0; 4], vec![10.0; 4], 3, 0).unwrap();
        assert!(grid.set_row_heights(vec![10.0; 2]).is_err());
        assert_eq!(grid.num_rows(), 4);
        grid.set_row_heights(vec![15.0; 6]).unwrap();
        assert_eq!(grid.total_height(), 90.0);
        grid.set_column_widths(vec![]).unwrap();
        assert_eq!(grid.num_columns(), 0);
        assert!(grid.set_frozen(7, 0).is_err());
        grid.set_frozen(6, 0).unwrap();
        assert_eq!(grid.frozen_rows_height(), 90.0);
    }

    #[test]
    fn test_visible_ranges() {
        let grid = uniform(100, 10);
        assert_eq!(grid.visible_rows(0.0, 100.0), Some((0, 5)));
        assert_eq!(grid.visible_rows(205.0, 40.0), Some((10, 12)));
        assert_eq!(grid.visible_columns(10_000.0, 50.0), Some((9, 9)));
        let empty = Grid::new(vec![], vec![], 0, 0).unwrap();
        assert_eq!(empty.visible_rows(0.0, 100.0), None);
    }

    #[test]
    fn test_region_rect() {
        let grid = uniform(10, 10);
        let rect = grid.region_rect(&Region::cells(1, 2, 3, 4)).unwrap();
        assert_eq!(
            rect,
            Rect {
                x: 128.0,
                y: 20.0,
                width: 192.0,
                height: 60.0
            }
        );
        let rows = grid.region_rect(&Region::row(9)).unwrap();
        assert_eq!(rows.width, 640.0);
        assert_eq!(rows.y, 180.0);
        assert!(grid.region_rect(&Region::column(10)).is_err());
    }

    #[test]
    fn test_from_config_applies_overrides() {
        let mut config = TableConfig {
            num_rows: 4,
            num_columns: 3,
            num_frozen_rows: 1,
            ..TableConfig::default()
        };
        config.row_heights.insert(2, 45.0);
        config.column_widths.insert(0, 100.0);
        let grid = Grid::from_config(&config).unwrap();
        assert_eq!(grid.row_rect(2).unwrap().size, 45.0);
        assert_eq!(grid.row_rect(3).unwrap().size, config.default_row_height);
        assert_eq!(grid.column_rect(0).unwrap().size, 100.0);
        assert_eq!(grid.frozen_rows_height(), config.default_row_height);
    }
}
