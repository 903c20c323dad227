//! Right-click resolution.
//!
//! Right-clicking inside the selection keeps it, so the menu acts on every
//! selected region. Right-clicking anywhere else selects just the clicked cell
//! first. The renderer sees the selection the menu will act on; the
//! replacement is only reported back to the host when the renderer actually
//! produced a menu.

use serde::Serialize;

use super::drag_selectable::{Effect, SelectionSnapshot};
use crate::layout::LocateCell;
use crate::regions;
use crate::types::{CellCoord, FocusedCell, Region};

/// What a context menu renderer gets to work with.
///
/// Serializes to the regions and table size only; cell enumeration can be
/// O(rows x columns) and is left to [`MenuContext::unique_cells`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuContext {
    target: Region,
    selected_regions: Vec<Region>,
    num_rows: u32,
    num_columns: u32,
}

impl MenuContext {
    pub fn new(
        target: Region,
        selected_regions: Vec<Region>,
        num_rows: u32,
        num_columns: u32,
    ) -> Self {
        Self {
            target,
            selected_regions,
            num_rows,
            num_columns,
        }
    }

    /// The right-clicked cell as a region.
    pub fn target(&self) -> Region {
        self.target
    }

    /// The selection the menu applies to.
    pub fn selected_regions(&self) -> &[Region] {
        &self.selected_regions
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    /// Every distinct selected cell inside the table, in first-seen order.
    pub fn unique_cells(&self) -> Vec<CellCoord> {
        regions::unique_cells(&self.selected_regions, self.num_rows, self.num_columns)
    }
}

/// Outcome of a right-click.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuResolution<T> {
    /// Renderer output; `None` means no menu is shown
    pub menu: Option<T>,
    /// Selection/focus changes to apply; empty when the selection is kept or
    /// no menu was produced
    pub effects: Vec<Effect>,
    pub context: MenuContext,
}

/// Resolve a right-click at client coordinates against the current selection.
pub fn resolve_context_menu<T, F>(
    locator: &dyn LocateCell,
    client_x: f32,
    client_y: f32,
    current: SelectionSnapshot<'_>,
    num_rows: u32,
    num_columns: u32,
    render: F,
) -> ContextMenuResolution<T>
where
    F: FnOnce(&MenuContext) -> Option<T>,
{
    let cell = locator.convert_point_to_cell(client_x, client_y);
    let target = Region::cell(cell.row, cell.col);

    let replacement = match regions::find_containing_region(current.selection, &target) {
        Some(index) => {
            log::trace!("right-click on {target} inside selected region {index}");
            None
        }
        None => Some((
            vec![target],
            FocusedCell::at(target.focus_cell(), 0),
        )),
    };

    let selected = match &replacement {
        Some((selection, _)) => selection.clone(),
        None => current.selection.to_vec(),
    };
    let context = MenuContext::new(target, selected, num_rows, num_columns);
    let menu = render(&context);

    let effects = match (replacement, menu.is_some()) {
        (Some((selection, focus)), true) => {
            log::debug!("right-click outside selection; selecting {target}");
            vec![
                Effect::Selection(selection),
                Effect::FocusedCell(Some(focus)),
            ]
        }
        _ => Vec::new(),
    };

    ContextMenuResolution {
        menu,
        effects,
        context,
    }
}
