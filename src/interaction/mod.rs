//! Pointer, keyboard and context-menu handling on top of the layout engine.

mod controller;
mod drag_selectable;
mod keyboard;
mod menu;

pub use controller::SelectionController;
pub use drag_selectable::{
    DragSelectable, Effect, GestureSession, InteractionEvent, InteractionState, Modifiers,
    PointerInput, RegionTransform, SelectionSnapshot, Transition,
};
pub use keyboard::{Direction, KeyCommand};
pub use menu::{resolve_context_menu, ContextMenuResolution, MenuContext};
