//! Keyboard focus movement and range extension.

use super::drag_selectable::{
    range_anchor, DragSelectable, Effect, InteractionState, SelectionSnapshot, Transition,
};
use crate::regions;
use crate::types::{CellCoord, FocusedCell, IndexRange, Region};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Arrow key: move focus one cell and select just that cell
    Move(Direction),
    /// Shift+arrow: grow or shrink the last region away from the focused cell
    Extend(Direction),
    /// Select the whole table
    SelectAll,
}

impl DragSelectable {
    /// Apply a keyboard command. Commands arriving mid-gesture are ignored.
    pub fn handle_key(
        &self,
        state: InteractionState,
        command: KeyCommand,
        current: SelectionSnapshot<'_>,
        num_rows: u32,
        num_cols: u32,
    ) -> Transition {
        if !state.is_idle() {
            log::trace!("ignoring {command:?} during a drag");
            return Transition::unchanged(state);
        }
        let (Some(last_row), Some(last_col)) = (num_rows.checked_sub(1), num_cols.checked_sub(1))
        else {
            return Transition::unchanged(state);
        };
        let bounds = CellCoord::new(last_row, last_col);

        let effects = match command {
            KeyCommand::SelectAll => vec![
                Effect::Selection(vec![Region::table()]),
                Effect::FocusedCell(Some(FocusedCell::new(0, 0, 0))),
            ],
            KeyCommand::Extend(direction) if self.enable_multiple_selection => {
                match extend(direction, current, bounds) {
                    Some(effects) => effects,
                    None => move_focus(direction, current, bounds),
                }
            }
            KeyCommand::Move(direction) | KeyCommand::Extend(direction) => {
                move_focus(direction, current, bounds)
            }
        };
        Transition {
            state: InteractionState::Idle,
            effects,
        }
    }
}

fn move_focus(
    direction: Direction,
    current: SelectionSnapshot<'_>,
    bounds: CellCoord,
) -> Vec<Effect> {
    let origin = current
        .focused_cell
        .map(|focus| focus.coords())
        .or_else(|| current.selection.last().map(Region::focus_cell))
        .unwrap_or_default();
    let next = step(clamp_cell(origin, bounds), direction, bounds);
    vec![
        Effect::Selection(vec![Region::cell(next.row, next.col)]),
        Effect::FocusedCell(Some(FocusedCell::at(next, 0))),
    ]
}

/// Move the far corner of the last region; `None` when nothing is focused.
fn extend(
    direction: Direction,
    current: SelectionSnapshot<'_>,
    bounds: CellCoord,
) -> Option<Vec<Effect>> {
    if current.focused_cell.is_none() {
        return None;
    }
    let (last_index, anchor) = range_anchor(current)?;
    let last = current.selection.last()?;
    let anchor = clamp_cell(anchor, bounds);

    let far = CellCoord::new(
        far_end(last.row_range(), anchor.row, bounds.row),
        far_end(last.column_range(), anchor.col, bounds.col),
    );
    let far = step(far, direction, bounds);
    // Full rows stay full rows (and likewise for columns and the table).
    let region = Region::from_ranges(
        last.row_range().map(|_| IndexRange::new(anchor.row, far.row)),
        last.column_range().map(|_| IndexRange::new(anchor.col, far.col)),
    );

    let mut effects = Vec::with_capacity(2);
    if !regions::last_region_is_equal(current.selection, &region) {
        effects.push(Effect::Selection(regions::update_last(
            current.selection,
            region,
        )));
    }
    let focus = FocusedCell::at(anchor, last_index);
    if current.focused_cell != Some(focus) {
        effects.push(Effect::FocusedCell(Some(focus)));
    }
    Some(effects)
}

/// End of `range` opposite `anchor`. Unbounded axes span `0..=last`.
fn far_end(range: Option<IndexRange>, anchor: u32, last: u32) -> u32 {
    let range = range.unwrap_or_else(|| IndexRange::new(0, last));
    let (start, end) = (range.start().min(last), range.end().min(last));
    if anchor == end && start != end {
        start
    } else {
        end
    }
}

fn step(cell: CellCoord, direction: Direction, bounds: CellCoord) -> CellCoord {
    match direction {
        Direction::Up => CellCoord::new(cell.row.saturating_sub(1), cell.col),
        Direction::Down => CellCoord::new((cell.row + 1).min(bounds.row), cell.col),
        Direction::Left => CellCoord::new(cell.row, cell.col.saturating_sub(1)),
        Direction::Right => CellCoord::new(cell.row, (cell.col + 1).min(bounds.col)),
    }
}

fn clamp_cell(cell: CellCoord, bounds: CellCoord) -> CellCoord {
    CellCoord::new(cell.row.min(bounds.row), cell.col.min(bounds.col))
}
