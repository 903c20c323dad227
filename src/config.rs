//! Table configuration.
//!
//! Hosts usually describe a table as JSON: counts, default sizes, a sparse map
//! of per-index overrides and the frozen pane counts. Every field has a
//! default so a partial document is enough.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 64.0;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Geometry and selection options for one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub num_rows: u32,
    pub num_columns: u32,
    pub default_row_height: f32,
    pub default_column_width: f32,
    /// Row height overrides by row index
    pub row_heights: HashMap<u32, f32>,
    /// Column width overrides by column index
    pub column_widths: HashMap<u32, f32>,
    /// Number of leading rows excluded from vertical scrolling
    pub num_frozen_rows: u32,
    /// Number of leading columns excluded from horizontal scrolling
    pub num_frozen_columns: u32,
    pub selection: SelectionConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_rows: 0,
            num_columns: 0,
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            row_heights: HashMap::new(),
            column_widths: HashMap::new(),
            num_frozen_rows: 0,
            num_frozen_columns: 0,
            selection: SelectionConfig::default(),
        }
    }
}

impl TableConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    /// Returns `GridError::Json` for malformed input. Geometry is validated
    /// later by [`crate::layout::Grid::from_config`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Selection behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Allow several regions at once (additive click, shift range extension).
    /// When off, every click replaces the selection with a single region.
    pub enable_multiple_selection: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            enable_multiple_selection: true,
        }
    }
}
