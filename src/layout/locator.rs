//! Client coordinates to cell indices.

use super::{Grid, Viewport};
use crate::types::CellCoord;

/// Resolves a pointer position to the cell under it.
///
/// Implementations must be total: any real-valued input resolves to a valid
/// (clamped) cell so that drags past the table edge keep extending.
pub trait LocateCell {
    fn convert_point_to_cell(&self, client_x: f32, client_y: f32) -> CellCoord;
}

/// Hit tester over a borrowed grid and viewport.
///
/// Holds no state of its own; build one per event so the current scroll
/// position is always used.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    grid: &'a Grid,
    viewport: &'a Viewport,
}

impl<'a> Locator<'a> {
    pub fn new(grid: &'a Grid, viewport: &'a Viewport) -> Self {
        Self { grid, viewport }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Grid x for a client x. Points over the frozen columns are not scrolled.
    pub fn to_grid_x(&self, client_x: f32) -> f32 {
        let local_x = client_x - self.viewport.left;
        if local_x < self.grid.frozen_columns_width() {
            local_x
        } else {
            local_x + self.viewport.scroll_left
        }
    }

    /// Grid y for a client y. Points over the frozen rows are not scrolled.
    pub fn to_grid_y(&self, client_y: f32) -> f32 {
        let local_y = client_y - self.viewport.top;
        if local_y < self.grid.frozen_rows_height() {
            local_y
        } else {
            local_y + self.viewport.scroll_top
        }
    }

    pub fn convert_point_to_row(&self, client_y: f32) -> u32 {
        self.grid.row_at_pixel(self.to_grid_y(client_y))
    }

    pub fn convert_point_to_column(&self, client_x: f32) -> u32 {
        self.grid.column_at_pixel(self.to_grid_x(client_x))
    }
}

impl LocateCell for Locator<'_> {
    fn convert_point_to_cell(&self, client_x: f32, client_y: f32) -> CellCoord {
        CellCoord::new(
            self.convert_point_to_row(client_y),
            self.convert_point_to_column(client_x),
        )
    }
}
