//! Owns the selection and drives [`DragSelectable`] for hosts that do not want
//! to keep their own selection state.

use super::drag_selectable::{
    DragSelectable, Effect, InteractionEvent, InteractionState, SelectionSnapshot, Transition,
};
use super::keyboard::KeyCommand;
use super::menu::{resolve_context_menu, ContextMenuResolution, MenuContext};
use crate::config::SelectionConfig;
use crate::layout::LocateCell;
use crate::types::{FocusedCell, Region};

#[derive(Debug, Default)]
pub struct SelectionController {
    selectable: DragSelectable,
    state: InteractionState,
    selection: Vec<Region>,
    focused_cell: Option<FocusedCell>,
}

impl SelectionController {
    pub fn new(config: SelectionConfig) -> Self {
        Self::with_selectable(DragSelectable::new(config))
    }

    pub fn with_selectable(selectable: DragSelectable) -> Self {
        Self {
            selectable,
            state: InteractionState::Idle,
            selection: Vec::new(),
            focused_cell: None,
        }
    }

    pub fn selection(&self) -> &[Region] {
        &self.selection
    }

    pub fn focused_cell(&self) -> Option<FocusedCell> {
        self.focused_cell
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        !self.state.is_idle()
    }

    /// Replace the selection from outside (e.g. programmatic select).
    ///
    /// A focused cell that no longer points into the selection is dropped.
    pub fn set_selection(&mut self, selection: Vec<Region>, focused_cell: Option<FocusedCell>) {
        self.focused_cell = focused_cell.filter(|focus| {
            selection
                .get(focus.focus_selection_index)
                .is_some_and(|region| region.contains_cell(focus.row, focus.col))
        });
        self.selection = selection;
    }

    /// Feed one pointer event through the state machine and apply its effects.
    pub fn handle_event(
        &mut self,
        event: &InteractionEvent,
        locator: &dyn LocateCell,
    ) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let transition = self.selectable.transition(
            state,
            event,
            SelectionSnapshot::new(&self.selection, self.focused_cell),
            locator,
        );
        self.apply(transition)
    }

    pub fn handle_key(&mut self, command: KeyCommand, num_rows: u32, num_cols: u32) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let transition = self.selectable.handle_key(
            state,
            command,
            SelectionSnapshot::new(&self.selection, self.focused_cell),
            num_rows,
            num_cols,
        );
        self.apply(transition)
    }

    /// Resolve a right-click. Returns `None` while a drag is in progress.
    pub fn context_menu<T, F>(
        &mut self,
        locator: &dyn LocateCell,
        client_x: f32,
        client_y: f32,
        num_rows: u32,
        num_cols: u32,
        render: F,
    ) -> Option<ContextMenuResolution<T>>
    where
        F: FnOnce(&MenuContext) -> Option<T>,
    {
        if self.is_dragging() {
            log::debug!("context menu requested mid-drag; ignoring");
            return None;
        }
        let resolution = resolve_context_menu(
            locator,
            client_x,
            client_y,
            SelectionSnapshot::new(&self.selection, self.focused_cell),
            num_rows,
            num_cols,
            render,
        );
        for effect in resolution.effects.iter().cloned() {
            self.apply_effect(effect);
        }
        Some(resolution)
    }

    fn apply(&mut self, transition: Transition) -> Vec<Effect> {
        self.state = transition.state;
        for effect in transition.effects.iter().cloned() {
            self.apply_effect(effect);
        }
        transition.effects
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Selection(selection) => self.selection = selection,
            Effect::FocusedCell(focus) => self.focused_cell = focus,
            Effect::SelectionEnd => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::interaction::keyboard::Direction;
    use crate::interaction::test_support::{down, drag_to, Identity};

    #[test]
    fn test_click_drag_release() {
        let mut controller = SelectionController::default();
        controller.handle_event(&down(1, 1), &Identity);
        assert!(controller.is_dragging());
        controller.handle_event(&drag_to(3, 4), &Identity);
        let effects = controller.handle_event(&InteractionEvent::PointerUp, &Identity);

        assert_eq!(effects, vec![Effect::SelectionEnd]);
        assert!(!controller.is_dragging());
        assert_eq!(controller.selection(), &[Region::cells(1, 1, 3, 4)]);
        assert_eq!(controller.focused_cell(), Some(FocusedCell::new(1, 1, 0)));
    }

    #[test]
    fn test_second_press_without_release_ends_first_drag() {
        let mut controller = SelectionController::default();
        controller.handle_event(&down(0, 0), &Identity);
        controller.handle_event(&drag_to(4, 3), &Identity);
        let effects = controller.handle_event(&down(7, 7), &Identity);

        assert_eq!(effects.first(), Some(&Effect::SelectionEnd));
        assert_eq!(
            effects.iter().filter(|e| **e == Effect::SelectionEnd).count(),
            1
        );
        assert!(controller.is_dragging());
        assert_eq!(controller.selection(), &[Region::cell(7, 7)]);

        let effects = controller.handle_event(&InteractionEvent::PointerUp, &Identity);
        assert_eq!(effects, vec![Effect::SelectionEnd]);
    }

    #[test]
    fn test_set_selection_drops_dangling_focus() {
        let mut controller = SelectionController::default();
        controller.set_selection(vec![Region::cell(2, 2)], Some(FocusedCell::new(2, 2, 3)));
        assert_eq!(controller.focused_cell(), None);
        controller.set_selection(vec![Region::cell(2, 2)], Some(FocusedCell::new(2, 2, 0)));
        assert_eq!(controller.focused_cell(), Some(FocusedCell::new(2, 2, 0)));
    }

    #[test]
    fn test_keys_apply_to_owned_selection() {
        let mut controller = SelectionController::default();
        controller.handle_key(KeyCommand::Move(Direction::Right), 5, 5);
        assert_eq!(controller.selection(), &[Region::cell(0, 1)]);
        controller.handle_key(KeyCommand::Extend(Direction::Down), 5, 5);
        assert_eq!(controller.selection(), &[Region::cells(0, 1, 1, 1)]);
    }

    #[test]
    fn test_context_menu_ignored_while_dragging() {
        let mut controller = SelectionController::default();
        controller.handle_event(&down(0, 0), &Identity);
        let resolution = controller.context_menu(&Identity, 4.0, 4.0, 10, 10, |_| Some(()));
        assert!(resolution.is_none());
        assert_eq!(controller.selection(), &[Region::cell(0, 0)]);
    }

    #[test]
    fn test_context_menu_outside_selects_target() {
        let mut controller = SelectionController::default();
        controller.set_selection(vec![Region::cells(0, 0, 1, 1)], None);
        let resolution = controller
            .context_menu(&Identity, 4.0, 6.0, 10, 10, |ctx| Some(ctx.target()))
            .unwrap();
        assert_eq!(resolution.menu, Some(Region::cell(6, 4)));
        assert_eq!(controller.selection(), &[Region::cell(6, 4)]);
        assert_eq!(controller.focused_cell(), Some(FocusedCell::new(6, 4, 0)));
    }
}
