//! Layout engine for computing row/column positions and hit testing.
//!
//! This module handles:
//! - Pre-computing offsets from column widths and row heights
//! - Managing viewport state (origin, scroll position, visible range)
//! - Binary search for efficient cell lookup at client coordinates
//! - Frozen panes that never scroll

mod grid;
mod locator;
mod viewport;

pub use grid::{index_at_pixel, Grid, Rect, Span};
pub use locator::{LocateCell, Locator};
pub use viewport::Viewport;
