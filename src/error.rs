//! Structured error types for gridsel.
//!
//! Only geometry queries and configuration can fail. Pixel lookups and the
//! region algebra are total and never produce an error.

use std::fmt;

/// Which axis of the grid an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// All errors that can occur while building or querying a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A geometry query used an index beyond the current row/column count.
    #[error("{axis} index {index} out of range (count {count})")]
    IndexOutOfRange { axis: Axis, index: u32, count: u32 },

    /// Frozen counts exceed the table, or a size is negative or not finite.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Table configuration could not be parsed.
    #[error("JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
