//! Data types for cells, regions and focus.

mod region;

pub use region::*;
