//! Viewport state management for scrolling.

use super::Grid;

/// Viewport state - where the table body sits on screen and how far its
/// scrollable band is scrolled.
///
/// Frozen rows/columns are pinned at the leading edge of the viewport and are
/// never scrolled. The scrollable band starts right after them, so with
/// `scroll_left == 0` the first unfrozen column sits at `frozen_columns_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client x of the viewport's left edge
    pub left: f32,
    /// Client y of the viewport's top edge
    pub top: f32,
    /// Horizontal scroll of the scrollable band in grid pixels
    pub scroll_left: f32,
    /// Vertical scroll of the scrollable band in grid pixels
    pub scroll_top: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create an unsized viewport at the client origin.
    ///
    /// Until [`Viewport::resize`] is called the size is 0x0, so scroll is only
    /// limited by the content and a host's scroll offset survives being set
    /// before the first layout.
    pub fn new() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Move the viewport's origin in client coordinates
    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.left = left;
        self.top = top;
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Clamp scroll position to valid range.
    ///
    /// Scrolling stops once the last row/column is fully visible.
    pub fn clamp_scroll(&mut self, grid: &Grid) {
        let max_left = (grid.total_width() - self.width).max(0.0);
        let max_top = (grid.total_height() - self.height).max(0.0);
        self.scroll_left = self.scroll_left.clamp(0.0, max_left);
        self.scroll_top = self.scroll_top.clamp(0.0, max_top);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, grid: &Grid) {
        self.scroll_left += delta_x;
        self.scroll_top += delta_y;
        self.clamp_scroll(grid);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, scroll_left: f32, scroll_top: f32, grid: &Grid) {
        self.scroll_left = scroll_left;
        self.scroll_top = scroll_top;
        self.clamp_scroll(grid);
    }

    /// Visible scrollable row range (inclusive), excluding the frozen rows.
    pub fn visible_rows(&self, grid: &Grid) -> Option<(u32, u32)> {
        let frozen_height = grid.frozen_rows_height();
        let band = (self.height - frozen_height).max(0.0);
        grid.visible_rows(frozen_height + self.scroll_top, band)
    }

    /// Visible scrollable column range (inclusive), excluding the frozen columns.
    pub fn visible_columns(&self, grid: &Grid) -> Option<(u32, u32)> {
        let frozen_width = grid.frozen_columns_width();
        let band = (self.width - frozen_width).max(0.0);
        grid.visible_columns(frozen_width + self.scroll_left, band)
    }

    /// Convert a grid position of the cell at (`row`, `col`) to client
    /// coordinates, accounting for frozen panes.
    ///
    /// Frozen cells stay at their natural position; scrollable cells move
    /// with the scroll offset.
    pub fn to_client(&self, x: f32, y: f32, row: u32, col: u32, grid: &Grid) -> (f32, f32) {
        let client_x = if col < grid.num_frozen_columns() {
            self.left + x
        } else {
            self.left + x - self.scroll_left
        };
        let client_y = if row < grid.num_frozen_rows() {
            self.top + y
        } else {
            self.top + y - self.scroll_top
        };
        (client_x, client_y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(vec![20.0; 100], vec![50.0; 40], 2, 1).unwrap()
    }

    #[test]
    fn test_clamp_scroll() {
        let grid = grid();
        let mut viewport = Viewport::new();
        viewport.resize(400.0, 300.0);
        viewport.set_scroll(-50.0, 99_999.0, &grid);
        assert_eq!(viewport.scroll_left, 0.0);
        assert_eq!(viewport.scroll_top, 2000.0 - 300.0);

        viewport.scroll_by(100.0, -100.0, &grid);
        assert_eq!(viewport.scroll_left, 100.0);
        assert_eq!(viewport.scroll_top, 1600.0);
    }

    #[test]
    fn test_small_grid_cannot_scroll() {
        let grid = Grid::new(vec![20.0; 3], vec![50.0; 3], 0, 0).unwrap();
        let mut viewport = Viewport::new();
        viewport.resize(800.0, 600.0);
        viewport.set_scroll(30.0, 30.0, &grid);
        assert_eq!((viewport.scroll_left, viewport.scroll_top), (0.0, 0.0));
    }

    #[test]
    fn test_scroll_before_resize_is_kept() {
        let grid = grid();
        let mut viewport = Viewport::new();
        viewport.set_scroll(1500.0, 1200.0, &grid);
        assert_eq!((viewport.scroll_left, viewport.scroll_top), (1500.0, 1200.0));

        viewport.resize(800.0, 600.0);
        viewport.clamp_scroll(&grid);
        assert_eq!((viewport.scroll_left, viewport.scroll_top), (1200.0, 1200.0));
    }

    #[test]
    fn test_visible_ranges_skip_frozen_band() {
        let grid = grid();
        let mut viewport = Viewport::new();
        viewport.resize(200.0, 100.0);
        assert_eq!(viewport.visible_rows(&grid), Some((2, 5)));
        viewport.set_scroll(100.0, 200.0, &grid);
        assert_eq!(viewport.visible_rows(&grid), Some((12, 15)));
        assert_eq!(viewport.visible_columns(&grid), Some((3, 6)));
    }

    #[test]
    fn test_to_client_respects_frozen_panes() {
        let grid = grid();
        let mut viewport = Viewport::new();
        viewport.set_origin(10.0, 5.0);
        viewport.set_scroll(100.0, 60.0, &grid);

        // Frozen corner cell ignores scroll.
        assert_eq!(viewport.to_client(0.0, 20.0, 1, 0, &grid), (10.0, 25.0));
        // Scrollable cell moves with scroll.
        assert_eq!(viewport.to_client(150.0, 100.0, 5, 3, &grid), (60.0, 45.0));
    }
}
