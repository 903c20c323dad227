//! Operations over ordered selections of [`Region`]s.
//!
//! A selection is a plain slice of regions in the order they were added. The
//! last region is the one a drag gesture is currently shaping and, usually,
//! the one that owns the focused cell.

use std::collections::HashSet;

use crate::types::{CellCoord, FocusedCell, Region};

/// Index of the first region in `selection` that fully contains `target`.
///
/// `None` means the target lies outside every selected region.
pub fn find_containing_region(selection: &[Region], target: &Region) -> Option<usize> {
    selection.iter().position(|region| region.contains_region(target))
}

/// Whether any selected region contains the given cell.
pub fn selection_contains_cell(selection: &[Region], row: u32, col: u32) -> bool {
    selection.iter().any(|region| region.contains_cell(row, col))
}

/// Whether `a` and `b` share at least one cell.
pub fn overlaps_region(a: &Region, b: &Region) -> bool {
    a.overlaps(b)
}

/// Canonical focus anchor for a freshly selected region (its top-left cell).
pub fn focus_cell_of(region: &Region) -> CellCoord {
    region.focus_cell()
}

/// Focus for the region at `index`, anchored at that region's top-left cell.
pub fn focused_cell_for(selection: &[Region], index: usize) -> Option<FocusedCell> {
    selection
        .get(index)
        .map(|region| FocusedCell::at(region.focus_cell(), index))
}

/// Copy of `selection` with `region` appended.
pub fn add(selection: &[Region], region: Region) -> Vec<Region> {
    let mut next = Vec::with_capacity(selection.len() + 1);
    next.extend_from_slice(selection);
    next.push(region);
    next
}

/// Copy of `selection` with the last region replaced by `region`.
///
/// Earlier regions keep their positions. An empty selection gets `region` as
/// its only entry.
pub fn update_last(selection: &[Region], region: Region) -> Vec<Region> {
    let mut next = selection.to_vec();
    match next.last_mut() {
        Some(last) => *last = region,
        None => next.push(region),
    }
    next
}

/// Copy of `selection` without the region at `index`.
pub fn remove(selection: &[Region], index: usize) -> Vec<Region> {
    selection
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, region)| *region)
        .collect()
}

/// Whether the last region of `selection` equals `region`.
pub fn last_region_is_equal(selection: &[Region], region: &Region) -> bool {
    selection.last() == Some(region)
}

/// Element-wise equality of two selections, order included.
pub fn regions_equal(a: &[Region], b: &[Region]) -> bool {
    a == b
}

/// Every distinct cell covered by `selection`, in first-seen row-major order.
///
/// Unbounded axes expand to the full table extent. Cells outside the table are
/// dropped.
pub fn unique_cells(selection: &[Region], num_rows: u32, num_cols: u32) -> Vec<CellCoord> {
    let (Some(last_row), Some(last_col)) = (num_rows.checked_sub(1), num_cols.checked_sub(1))
    else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    let mut cells = Vec::new();
    for region in selection {
        let (row_start, row_end) = region
            .row_range()
            .map_or((0, last_row), |r| (r.start(), r.end().min(last_row)));
        let (col_start, col_end) = region
            .column_range()
            .map_or((0, last_col), |c| (c.start(), c.end().min(last_col)));
        if row_start > row_end || col_start > col_end {
            continue;
        }
        for row in row_start..=row_end {
            for col in col_start..=col_end {
                let cell = CellCoord::new(row, col);
                if seen.insert(cell) {
                    cells.push(cell);
                }
            }
        }
    }
    cells
}
