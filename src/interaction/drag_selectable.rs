//! Pointer-driven selection.
//!
//! [`DragSelectable::transition`] is a pure function of the current
//! interaction state, one input event and the host's selection. It returns the
//! next state plus a list of [`Effect`]s for the host to apply; the engine
//! itself never stores the selection.

use std::fmt;

use crate::config::SelectionConfig;
use crate::layout::LocateCell;
use crate::regions;
use crate::types::{CellCoord, FocusedCell, Region};

/// Modifier keys that change what a pointer-down does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Add a region instead of replacing the selection (Ctrl/Cmd)
    pub additive: bool,
    /// Extend the last region to the clicked cell (Shift)
    pub range: bool,
}

/// A normalized pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub client_x: f32,
    pub client_y: f32,
    pub modifiers: Modifiers,
}

impl PointerInput {
    pub fn at(client_x: f32, client_y: f32) -> Self {
        Self {
            client_x,
            client_y,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Input events consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp,
    /// Lost pointer capture, window blur or an explicit cancel.
    Cancel,
}

/// The host-owned selection, borrowed for one transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSnapshot<'a> {
    pub selection: &'a [Region],
    pub focused_cell: Option<FocusedCell>,
}

impl<'a> SelectionSnapshot<'a> {
    pub fn new(selection: &'a [Region], focused_cell: Option<FocusedCell>) -> Self {
        Self {
            selection,
            focused_cell,
        }
    }
}

/// State of one drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    /// Cell under the pointer-down; anchor of the in-progress region
    pub activation: CellCoord,
    previous_selection: Vec<Region>,
    previous_focus: Option<FocusedCell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Pointer is down, not moved yet
    Activated(GestureSession),
    /// Pointer is down and has moved at least once
    Extending(GestureSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Activation cell of the gesture in progress, if any.
    pub fn activation_cell(&self) -> Option<CellCoord> {
        match self {
            Self::Idle => None,
            Self::Activated(session) | Self::Extending(session) => Some(session.activation),
        }
    }
}

/// Changes the host should apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Replace the selection
    Selection(Vec<Region>),
    /// Replace the focused cell (`None` clears it)
    FocusedCell(Option<FocusedCell>),
    /// A drag gesture committed
    SelectionEnd,
}

/// Result of a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: InteractionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn new(state: InteractionState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    pub(crate) fn unchanged(state: InteractionState) -> Self {
        Self::new(state, Vec::new())
    }
}

/// Reshapes a candidate region before it enters the selection, e.g. to snap
/// clicks to whole rows.
pub type RegionTransform = Box<dyn Fn(Region, &PointerInput) -> Region>;

/// Turns pointer events into selection and focus updates.
pub struct DragSelectable {
    pub(crate) enable_multiple_selection: bool,
    selected_region_transform: Option<RegionTransform>,
}

impl fmt::Debug for DragSelectable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSelectable")
            .field("enable_multiple_selection", &self.enable_multiple_selection)
            .field(
                "selected_region_transform",
                &self.selected_region_transform.is_some(),
            )
            .finish()
    }
}

impl Default for DragSelectable {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl DragSelectable {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            enable_multiple_selection: config.enable_multiple_selection,
            selected_region_transform: None,
        }
    }

    #[must_use]
    pub fn with_region_transform(
        mut self,
        transform: impl Fn(Region, &PointerInput) -> Region + 'static,
    ) -> Self {
        self.selected_region_transform = Some(Box::new(transform));
        self
    }

    pub fn enable_multiple_selection(&self) -> bool {
        self.enable_multiple_selection
    }

    /// Advance the state machine by one event.
    pub fn transition(
        &self,
        state: InteractionState,
        event: &InteractionEvent,
        current: SelectionSnapshot<'_>,
        locator: &dyn LocateCell,
    ) -> Transition {
        log::trace!("transition from {state:?} on {event:?}");
        match (state, event) {
            (state, InteractionEvent::PointerDown(input)) => {
                let mut next = self.pointer_down(input, current, locator);
                if let Some(activation) = state.activation_cell() {
                    log::debug!(
                        "pointer down during the gesture from {activation:?}; committing it first"
                    );
                    next.effects.insert(0, Effect::SelectionEnd);
                }
                next
            }
            (
                InteractionState::Activated(session) | InteractionState::Extending(session),
                InteractionEvent::PointerMove(input),
            ) => self.pointer_move(session, input, current, locator),
            (
                InteractionState::Activated(session) | InteractionState::Extending(session),
                InteractionEvent::PointerUp,
            ) => {
                log::debug!("selection committed from {:?}", session.activation);
                Transition::new(InteractionState::Idle, vec![Effect::SelectionEnd])
            }
            (
                InteractionState::Activated(session) | InteractionState::Extending(session),
                InteractionEvent::Cancel,
            ) => {
                log::debug!("gesture from {:?} cancelled", session.activation);
                Transition::new(
                    InteractionState::Idle,
                    vec![
                        Effect::Selection(session.previous_selection),
                        Effect::FocusedCell(session.previous_focus),
                    ],
                )
            }
            (
                InteractionState::Idle,
                InteractionEvent::PointerMove(_)
                | InteractionEvent::PointerUp
                | InteractionEvent::Cancel,
            ) => {
                log::trace!("ignoring {event:?} with no active gesture");
                Transition::unchanged(InteractionState::Idle)
            }
        }
    }

    fn pointer_down(
        &self,
        input: &PointerInput,
        current: SelectionSnapshot<'_>,
        locator: &dyn LocateCell,
    ) -> Transition {
        let cell = locator.convert_point_to_cell(input.client_x, input.client_y);
        let region = self.apply_transform(Region::cell(cell.row, cell.col), input);
        let session = GestureSession {
            activation: cell,
            previous_selection: current.selection.to_vec(),
            previous_focus: current.focused_cell,
        };

        if !self.enable_multiple_selection {
            return replace_with(session, region, cell);
        }

        if input.modifiers.range && !current.selection.is_empty() {
            return self.extend_last_region(cell, input, current);
        }

        if input.modifiers.additive {
            if let Some(index) = current.selection.iter().position(|r| *r == region) {
                log::debug!("deselecting {region}");
                let next = regions::remove(current.selection, index);
                let focus = next
                    .len()
                    .checked_sub(1)
                    .and_then(|last| regions::focused_cell_for(&next, last));
                return Transition::new(
                    InteractionState::Idle,
                    vec![Effect::Selection(next), Effect::FocusedCell(focus)],
                );
            }
            let next = regions::add(current.selection, region);
            let index = next.len() - 1;
            return Transition::new(
                InteractionState::Activated(session),
                vec![
                    Effect::Selection(next),
                    Effect::FocusedCell(Some(FocusedCell::at(cell, index))),
                ],
            );
        }

        replace_with(session, region, cell)
    }

    fn pointer_move(
        &self,
        session: GestureSession,
        input: &PointerInput,
        current: SelectionSnapshot<'_>,
        locator: &dyn LocateCell,
    ) -> Transition {
        let target = locator.convert_point_to_cell(input.client_x, input.client_y);
        let region = self.apply_transform(Region::spanning(session.activation, target), input);
        if regions::last_region_is_equal(current.selection, &region) {
            return Transition::unchanged(InteractionState::Extending(session));
        }
        Transition::new(
            InteractionState::Extending(session),
            vec![Effect::Selection(regions::update_last(
                current.selection,
                region,
            ))],
        )
    }

    /// Shift-click: stretch the last region from its anchor to `target`.
    ///
    /// The anchor is the focused cell when it belongs to the last region,
    /// otherwise that region's top-left corner. Completes immediately.
    fn extend_last_region(
        &self,
        target: CellCoord,
        input: &PointerInput,
        current: SelectionSnapshot<'_>,
    ) -> Transition {
        let Some((last_index, anchor)) = range_anchor(current) else {
            return Transition::unchanged(InteractionState::Idle);
        };
        let region = self.apply_transform(Region::spanning(anchor, target), input);
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
        Transition::new(InteractionState::Idle, effects)
    }

    fn apply_transform(&self, region: Region, input: &PointerInput) -> Region {
        match &self.selected_region_transform {
            Some(transform) => transform(region, input),
            None => region,
        }
    }
}

/// Index of the last region and the cell range extension pivots on.
pub(crate) fn range_anchor(current: SelectionSnapshot<'_>) -> Option<(usize, CellCoord)> {
    let last_index = current.selection.len().checked_sub(1)?;
    let last = current.selection.last()?;
    let anchor = match current.focused_cell {
        Some(focus)
            if focus.focus_selection_index == last_index
                && last.contains_cell(focus.row, focus.col) =>
        {
            focus.coords()
        }
        _ => last.focus_cell(),
    };
    Some((last_index, anchor))
}

fn replace_with(session: GestureSession, region: Region, cell: CellCoord) -> Transition {
    Transition::new(
        InteractionState::Activated(session),
        vec![
            Effect::Selection(vec![region]),
            Effect::FocusedCell(Some(FocusedCell::at(cell, 0))),
        ],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::interaction::test_support::{down, down_with, drag_to, selection_of, Identity};

    #[test]
    fn test_pointer_down_replaces_selection() {
        let engine = DragSelectable::default();
        let existing = [Region::cell(9, 9)];
        let t = engine.transition(
            InteractionState::Idle,
            &down(2, 3),
            SelectionSnapshot::new(&existing, None),
            &Identity,
        );
        assert_eq!(t.state.activation_cell(), Some(CellCoord::new(2, 3)));
        assert_eq!(
            t.effects,
            vec![
                Effect::Selection(vec![Region::cell(2, 3)]),
                Effect::FocusedCell(Some(FocusedCell::new(2, 3, 0))),
            ]
        );
    }

    #[test]
    fn test_move_replaces_only_last_region() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cell(0, 0), Region::cell(5, 5)];
        let state = InteractionState::Activated(GestureSession {
            activation: CellCoord::new(5, 5),
            previous_selection: vec![Region::cell(0, 0)],
            previous_focus: None,
        });
        let t = engine.transition(
            state,
            &drag_to(3, 7),
            SelectionSnapshot::new(&selection, None),
            &Identity,
        );
        assert!(matches!(t.state, InteractionState::Extending(_)));
        assert_eq!(
            selection_of(&t.effects).unwrap(),
            &vec![Region::cell(0, 0), Region::cells(3, 5, 5, 7)]
        );
    }

    #[test]
    fn test_move_to_same_region_emits_nothing() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cells(1, 1, 2, 2)];
        let state = InteractionState::Extending(GestureSession {
            activation: CellCoord::new(1, 1),
            previous_selection: Vec::new(),
            previous_focus: None,
        });
        let t = engine.transition(
            state,
            &drag_to(2, 2),
            SelectionSnapshot::new(&selection, None),
            &Identity,
        );
        assert!(t.effects.is_empty());
        assert!(matches!(t.state, InteractionState::Extending(_)));
    }

    #[test]
    fn test_stale_events_in_idle_are_ignored() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cell(1, 1)];
        for event in [
            drag_to(4, 4),
            InteractionEvent::PointerUp,
            InteractionEvent::Cancel,
        ] {
            let t = engine.transition(
                InteractionState::Idle,
                &event,
                SelectionSnapshot::new(&selection, None),
                &Identity,
            );
            assert_eq!(t, Transition::unchanged(InteractionState::Idle));
        }
    }

    #[test]
    fn test_cancel_restores_previous_selection() {
        let engine = DragSelectable::default();
        let before = vec![Region::row(3)];
        let focus = Some(FocusedCell::new(3, 0, 0));
        let t = engine.transition(
            InteractionState::Idle,
            &down(7, 7),
            SelectionSnapshot::new(&before, focus),
            &Identity,
        );
        let during = selection_of(&t.effects).unwrap().clone();
        let t = engine.transition(
            t.state,
            &InteractionEvent::Cancel,
            SelectionSnapshot::new(&during, Some(FocusedCell::new(7, 7, 0))),
            &Identity,
        );
        assert!(t.state.is_idle());
        assert_eq!(
            t.effects,
            vec![Effect::Selection(before), Effect::FocusedCell(focus)]
        );
    }

    #[test]
    fn test_additive_click_on_identical_region_toggles_it_off() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cells(0, 0, 1, 1), Region::cell(4, 4), Region::cell(8, 8)];
        let additive = Modifiers {
            additive: true,
            range: false,
        };
        let t = engine.transition(
            InteractionState::Idle,
            &down_with(4, 4, additive),
            SelectionSnapshot::new(&selection, Some(FocusedCell::new(4, 4, 1))),
            &Identity,
        );
        assert!(t.state.is_idle());
        assert_eq!(
            t.effects,
            vec![
                Effect::Selection(vec![Region::cells(0, 0, 1, 1), Region::cell(8, 8)]),
                Effect::FocusedCell(Some(FocusedCell::new(8, 8, 1))),
            ]
        );
    }

    #[test]
    fn test_toggling_off_last_region_clears_focus() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cell(4, 4)];
        let additive = Modifiers {
            additive: true,
            range: false,
        };
        let t = engine.transition(
            InteractionState::Idle,
            &down_with(4, 4, additive),
            SelectionSnapshot::new(&selection, Some(FocusedCell::new(4, 4, 0))),
            &Identity,
        );
        assert_eq!(
            t.effects,
            vec![Effect::Selection(Vec::new()), Effect::FocusedCell(None)]
        );
    }

    #[test]
    fn test_range_click_uses_focused_cell_as_anchor() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cell(0, 0), Region::cells(2, 2, 3, 3)];
        let range = Modifiers {
            additive: false,
            range: true,
        };
        let t = engine.transition(
            InteractionState::Idle,
            &down_with(6, 1, range),
            SelectionSnapshot::new(&selection, Some(FocusedCell::new(3, 3, 1))),
            &Identity,
        );
        assert!(t.state.is_idle());
        assert_eq!(
            t.effects,
            vec![Effect::Selection(vec![
                Region::cell(0, 0),
                Region::cells(3, 1, 6, 3)
            ])]
        );
    }

    #[test]
    fn test_range_click_without_focus_anchors_top_left() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cells(2, 2, 3, 3)];
        let range = Modifiers {
            additive: false,
            range: true,
        };
        let t = engine.transition(
            InteractionState::Idle,
            &down_with(5, 5, range),
            SelectionSnapshot::new(&selection, None),
            &Identity,
        );
        assert_eq!(
            t.effects,
            vec![
                Effect::Selection(vec![Region::cells(2, 2, 5, 5)]),
                Effect::FocusedCell(Some(FocusedCell::new(2, 2, 0))),
            ]
        );
    }

    #[test]
    fn test_range_click_on_empty_selection_acts_like_click() {
        let engine = DragSelectable::default();
        let range = Modifiers {
            additive: false,
            range: true,
        };
        let t = engine.transition(
            InteractionState::Idle,
            &down_with(5, 5, range),
            SelectionSnapshot::default(),
            &Identity,
        );
        assert!(matches!(t.state, InteractionState::Activated(_)));
        assert_eq!(selection_of(&t.effects).unwrap(), &vec![Region::cell(5, 5)]);
    }

    #[test]
    fn test_single_selection_mode_ignores_modifiers() {
        let engine = DragSelectable::new(SelectionConfig {
            enable_multiple_selection: false,
        });
        let selection = vec![Region::cell(1, 1)];
        for modifiers in [
            Modifiers {
                additive: true,
                range: false,
            },
            Modifiers {
                additive: false,
                range: true,
            },
        ] {
            let t = engine.transition(
                InteractionState::Idle,
                &down_with(1, 1, modifiers),
                SelectionSnapshot::new(&selection, None),
                &Identity,
            );
            assert_eq!(selection_of(&t.effects).unwrap(), &vec![Region::cell(1, 1)]);
            assert!(matches!(t.state, InteractionState::Activated(_)));
        }
    }

    #[test]
    fn test_region_transform_applies_to_click_and_drag() {
        let engine = DragSelectable::default().with_region_transform(|region, _| {
            match region.row_range() {
                Some(rows) => Region::rows(rows.start(), rows.end()),
                None => region,
            }
        });
        let t = engine.transition(
            InteractionState::Idle,
            &down(2, 9),
            SelectionSnapshot::default(),
            &Identity,
        );
        let selection = selection_of(&t.effects).unwrap().clone();
        assert_eq!(selection, vec![Region::row(2)]);
        // Focus still lands on the clicked cell.
        assert!(t
            .effects
            .contains(&Effect::FocusedCell(Some(FocusedCell::new(2, 9, 0)))));

        let t = engine.transition(
            t.state,
            &drag_to(5, 0),
            SelectionSnapshot::new(&selection, None),
            &Identity,
        );
        assert_eq!(selection_of(&t.effects).unwrap(), &vec![Region::rows(2, 5)]);
    }

    #[test]
    fn test_pointer_down_mid_gesture_commits_previous() {
        let engine = DragSelectable::default();
        let selection = vec![Region::cells(0, 0, 4, 3)];
        let state = InteractionState::Extending(GestureSession {
            activation: CellCoord::new(0, 0),
            previous_selection: Vec::new(),
            previous_focus: None,
        });
        let t = engine.transition(
            state,
            &down(7, 7),
            SelectionSnapshot::new(&selection, Some(FocusedCell::new(0, 0, 0))),
            &Identity,
        );
        assert_eq!(t.state.activation_cell(), Some(CellCoord::new(7, 7)));
        assert_eq!(
            t.effects,
            vec![
                Effect::SelectionEnd,
                Effect::Selection(vec![Region::cell(7, 7)]),
                Effect::FocusedCell(Some(FocusedCell::new(7, 7, 0))),
            ]
        );
    }

    #[test]
    fn test_pointer_up_commits() {
        let engine = DragSelectable::default();
        let t = engine.transition(
            InteractionState::Idle,
            &down(1, 1),
            SelectionSnapshot::default(),
            &Identity,
        );
        let t = engine.transition(
            t.state,
            &InteractionEvent::PointerUp,
            SelectionSnapshot::new(&[Region::cell(1, 1)], None),
            &Identity,
        );
        assert!(t.state.is_idle());
        assert_eq!(t.effects, vec![Effect::SelectionEnd]);
    }
}
