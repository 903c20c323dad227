use std::fmt;

use serde::{Deserialize, Serialize};

/// Shape of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegionCardinality {
    /// Rectangular block of cells (default)
    #[default]
    Cells,
    /// Entire row(s), every column
    FullRows,
    /// Entire column(s), every row
    FullColumns,
    /// Every cell in the table
    FullTable,
}

/// Inclusive, normalized index range (`start <= end`).
///
/// Serialized as a two element array. Deserialization goes through the same
/// normalization as [`IndexRange::new`], so a reversed pair can never be
/// observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct IndexRange {
    start: u32,
    end: u32,
}

impl IndexRange {
    /// Build a range from two endpoints given in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn single(index: u32) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Number of indices covered (at least 1).
    pub fn count(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    pub fn contains(&self, index: u32) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Smallest range covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<[u32; 2]> for IndexRange {
    fn from([a, b]: [u32; 2]) -> Self {
        Self::new(a, b)
    }
}

impl From<IndexRange> for [u32; 2] {
    fn from(range: IndexRange) -> Self {
        [range.start, range.end]
    }
}

/// A selectable area of the table.
///
/// A missing axis means "every index on that axis": a region with only rows is
/// a full-row selection, one with neither axis is the whole table. Regions are
/// immutable values; the constructors normalize reversed endpoints so that the
/// same area built by a click, a drag or a keyboard extension compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Region {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<IndexRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cols: Option<IndexRange>,
}

impl Region {
    /// A single cell.
    pub fn cell(row: u32, col: u32) -> Self {
        Self::cells(row, col, row, col)
    }

    /// A block of cells spanning two corners given in any order.
    pub fn cells(row: u32, col: u32, row2: u32, col2: u32) -> Self {
        Self {
            rows: Some(IndexRange::new(row, row2)),
            cols: Some(IndexRange::new(col, col2)),
        }
    }

    /// The block of cells with `a` and `b` as opposite corners.
    pub fn spanning(a: CellCoord, b: CellCoord) -> Self {
        Self::cells(a.row, a.col, b.row, b.col)
    }

    pub fn row(row: u32) -> Self {
        Self::rows(row, row)
    }

    /// Full rows between `row` and `row2` inclusive.
    pub fn rows(row: u32, row2: u32) -> Self {
        Self {
            rows: Some(IndexRange::new(row, row2)),
            cols: None,
        }
    }

    pub fn column(col: u32) -> Self {
        Self::columns(col, col)
    }

    /// Full columns between `col` and `col2` inclusive.
    pub fn columns(col: u32, col2: u32) -> Self {
        Self {
            rows: None,
            cols: Some(IndexRange::new(col, col2)),
        }
    }

    pub fn table() -> Self {
        Self {
            rows: None,
            cols: None,
        }
    }

    /// A region from optional axes; `None` leaves that axis unbounded.
    pub(crate) fn from_ranges(rows: Option<IndexRange>, cols: Option<IndexRange>) -> Self {
        Self { rows, cols }
    }

    pub const fn row_range(&self) -> Option<IndexRange> {
        self.rows
    }

    pub const fn column_range(&self) -> Option<IndexRange> {
        self.cols
    }

    pub fn cardinality(&self) -> RegionCardinality {
        match (self.rows, self.cols) {
            (Some(_), Some(_)) => RegionCardinality::Cells,
            (Some(_), None) => RegionCardinality::FullRows,
            (None, Some(_)) => RegionCardinality::FullColumns,
            (None, None) => RegionCardinality::FullTable,
        }
    }

    /// Whether the cell at (`row`, `col`) lies inside this region.
    pub fn contains_cell(&self, row: u32, col: u32) -> bool {
        self.rows.map_or(true, |r| r.contains(row)) && self.cols.map_or(true, |c| c.contains(col))
    }

    /// Whether every cell of `inner` also lies in `self`.
    ///
    /// An unbounded axis of `inner` is only contained by an unbounded axis of
    /// `self`, so a cell block never contains a full row.
    pub fn contains_region(&self, inner: &Self) -> bool {
        axis_contains(self.rows, inner.rows) && axis_contains(self.cols, inner.cols)
    }

    /// Whether some cell could belong to both regions.
    pub fn overlaps(&self, other: &Self) -> bool {
        axis_overlaps(self.rows, other.rows) && axis_overlaps(self.cols, other.cols)
    }

    /// Bounding region of `self` and `other`. An axis stays bounded only if it
    /// is bounded in both.
    pub fn union(&self, other: &Self) -> Self {
        let join = |a: Option<IndexRange>, b: Option<IndexRange>| match (a, b) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            _ => None,
        };
        Self {
            rows: join(self.rows, other.rows),
            cols: join(self.cols, other.cols),
        }
    }

    /// Top-left cell, used as the keyboard focus anchor for a fresh region.
    /// Unbounded axes anchor at index 0.
    pub fn focus_cell(&self) -> CellCoord {
        CellCoord {
            row: self.rows.map_or(0, |r| r.start()),
            col: self.cols.map_or(0, |c| c.start()),
        }
    }

    /// Whether every bounded axis fits inside a table of the given size.
    pub fn is_valid_for_table(&self, num_rows: u32, num_cols: u32) -> bool {
        if num_rows == 0 || num_cols == 0 {
            return false;
        }
        self.rows.map_or(true, |r| r.end() < num_rows)
            && self.cols.map_or(true, |c| c.end() < num_cols)
    }

    /// Pull bounded axes back inside a table of the given size.
    ///
    /// Returns `None` for an empty table.
    pub fn clamp_to(&self, num_rows: u32, num_cols: u32) -> Option<Self> {
        let last_row = num_rows.checked_sub(1)?;
        let last_col = num_cols.checked_sub(1)?;
        let clamp = |range: Option<IndexRange>, last: u32| {
            range.map(|r| IndexRange::new(r.start().min(last), r.end().min(last)))
        };
        Some(Self {
            rows: clamp(self.rows, last_row),
            cols: clamp(self.cols, last_col),
        })
    }
}

fn axis_contains(outer: Option<IndexRange>, inner: Option<IndexRange>) -> bool {
    match (outer, inner) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(o), Some(i)) => o.contains_range(&i),
    }
}

fn axis_overlaps(a: Option<IndexRange>, b: Option<IndexRange>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.overlaps(&b),
        _ => true,
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rows, self.cols) {
            (Some(r), Some(c)) => write!(
                f,
                "cells[{}..={}, {}..={}]",
                r.start(),
                r.end(),
                c.start(),
                c.end()
            ),
            (Some(r), None) => write!(f, "rows[{}..={}]", r.start(), r.end()),
            (None, Some(c)) => write!(f, "columns[{}..={}]", c.start(), c.end()),
            (None, None) => f.write_str("table"),
        }
    }
}

/// A (row, column) pair of logical indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// The cell owning keyboard focus, tagged with the index of the selected
/// region it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FocusedCell {
    pub row: u32,
    pub col: u32,
    pub focus_selection_index: usize,
}

impl FocusedCell {
    pub const fn new(row: u32, col: u32, focus_selection_index: usize) -> Self {
        Self {
            row,
            col,
            focus_selection_index,
        }
    }

    /// Focus on `cell` inside the region at `focus_selection_index`.
    pub const fn at(cell: CellCoord, focus_selection_index: usize) -> Self {
        Self::new(cell.row, cell.col, focus_selection_index)
    }

    pub const fn coords(&self) -> CellCoord {
        CellCoord {
            row: self.row,
            col: self.col,
        }
    }
}
