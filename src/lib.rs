//! gridsel - grid geometry and selection for virtualized data tables
//!
//! Maps client pixels to cells on variable-size grids with frozen rows and
//! columns, and turns pointer and keyboard input into multi-region selections:
//! - Prefix-sum layout with O(1) repeated hit tests
//! - Cell, row, column and whole-table regions
//! - A pure drag-selection state machine plus an owning controller
//! - Right-click resolution against the current selection
//!
//! # Usage
//!
//! ```
//! use gridsel::interaction::{InteractionEvent, PointerInput, SelectionController};
//! use gridsel::layout::{Grid, Locator, Viewport};
//! use gridsel::Region;
//!
//! let grid = Grid::new(vec![20.0; 100], vec![64.0; 10], 0, 0)?;
//! let viewport = Viewport::new();
//! let mut controller = SelectionController::default();
//!
//! let locator = Locator::new(&grid, &viewport);
//! controller.handle_event(&InteractionEvent::PointerDown(PointerInput::at(10.0, 10.0)), &locator);
//! controller.handle_event(&InteractionEvent::PointerMove(PointerInput::at(140.0, 50.0)), &locator);
//! controller.handle_event(&InteractionEvent::PointerUp, &locator);
//!
//! assert_eq!(controller.selection(), &[Region::cells(0, 0, 2, 2)]);
//! # Ok::<(), gridsel::GridError>(())
//! ```

pub mod config;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod regions;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{SelectionConfig, TableConfig};
pub use error::{Axis, GridError, Result};
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
