//! JavaScript binding.
//!
//! `GridSelection` bundles a grid, its viewport and a selection controller so
//! a host page only forwards raw pointer/keyboard events and reads the
//! selection back as plain objects.

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::TableConfig;
use crate::interaction::{
    Direction, Effect, InteractionEvent, KeyCommand, Modifiers, PointerInput, SelectionController,
};
use crate::layout::{Grid, Locator, Viewport};
use crate::regions;
use crate::types::Region;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn parse_direction(direction: &str) -> Result<Direction, JsValue> {
    match direction {
        "up" | "ArrowUp" => Ok(Direction::Up),
        "down" | "ArrowDown" => Ok(Direction::Down),
        "left" | "ArrowLeft" => Ok(Direction::Left),
        "right" | "ArrowRight" => Ok(Direction::Right),
        other => Err(JsValue::from_str(&format!("Unknown direction: {other}"))),
    }
}

#[wasm_bindgen]
pub struct GridSelection {
    grid: Grid,
    viewport: Viewport,
    controller: SelectionController,
}

#[wasm_bindgen]
impl GridSelection {
    /// Build from a JSON table configuration and the body's size on screen.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, width: f32, height: f32) -> Result<GridSelection, JsValue> {
        console_error_panic_hook::set_once();

        let config = TableConfig::from_json(config_json)?;
        let grid = Grid::from_config(&config)?;
        let mut viewport = Viewport::new();
        viewport.resize(width, height);
        Ok(Self {
            grid,
            viewport,
            controller: SelectionController::new(config.selection),
        })
    }

    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.viewport.set_origin(left, top);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.viewport.clamp_scroll(&self.grid);
    }

    pub fn set_scroll(&mut self, scroll_left: f32, scroll_top: f32) {
        self.viewport
            .set_scroll(scroll_left, scroll_top, &self.grid);
    }

    pub fn set_row_height(&mut self, row: u32, height: f32) -> Result<(), JsValue> {
        self.grid.set_row_height(row, height)?;
        self.viewport.clamp_scroll(&self.grid);
        Ok(())
    }

    pub fn set_column_width(&mut self, col: u32, width: f32) -> Result<(), JsValue> {
        self.grid.set_column_width(col, width)?;
        self.viewport.clamp_scroll(&self.grid);
        Ok(())
    }

    pub fn set_frozen(&mut self, rows: u32, cols: u32) -> Result<(), JsValue> {
        self.grid.set_frozen(rows, cols)?;
        Ok(())
    }

    /// Returns true when the selection or focus changed.
    pub fn pointer_down(&mut self, x: f32, y: f32, additive: bool, range: bool) -> bool {
        let input = PointerInput::at(x, y).with_modifiers(Modifiers { additive, range });
        self.dispatch(&InteractionEvent::PointerDown(input))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(&InteractionEvent::PointerMove(PointerInput::at(x, y)))
    }

    /// Returns true when a drag was committed.
    pub fn pointer_up(&mut self) -> bool {
        let effects = self.run(&InteractionEvent::PointerUp);
        effects.contains(&Effect::SelectionEnd)
    }

    pub fn cancel(&mut self) -> bool {
        self.dispatch(&InteractionEvent::Cancel)
    }

    /// Arrow key handling. `extend` is the shift state.
    pub fn arrow_key(&mut self, direction: &str, extend: bool) -> Result<bool, JsValue> {
        let direction = parse_direction(direction)?;
        let command = if extend {
            KeyCommand::Extend(direction)
        } else {
            KeyCommand::Move(direction)
        };
        let effects =
            self.controller
                .handle_key(command, self.grid.num_rows(), self.grid.num_columns());
        Ok(!effects.is_empty())
    }

    pub fn select_all(&mut self) -> bool {
        let effects = self.controller.handle_key(
            KeyCommand::SelectAll,
            self.grid.num_rows(),
            self.grid.num_columns(),
        );
        !effects.is_empty()
    }

    /// Current selection as an array of `{ rows?: [a, b], cols?: [a, b] }`.
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        to_js(self.controller.selection())
    }

    pub fn focused_cell(&self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.focused_cell())
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Every distinct selected cell as `{ row, col }`, in first-seen order.
    ///
    /// Walks every selected cell, so call it only when a menu action needs
    /// the individual cells.
    pub fn unique_cells(&self) -> Result<JsValue, JsValue> {
        to_js(&regions::unique_cells(
            self.controller.selection(),
            self.grid.num_rows(),
            self.grid.num_columns(),
        ))
    }

    /// Right-click. `render` receives `{ target, selectedRegions, numRows,
    /// numColumns }` and returns menu content, or `null`/`undefined` for no
    /// menu. `render` must not call back into this object; menu actions that
    /// need individual cells call `unique_cells()` once the menu is shown.
    pub fn context_menu(&mut self, x: f32, y: f32, render: &Function) -> Result<JsValue, JsValue> {
        let locator = Locator::new(&self.grid, &self.viewport);
        let mut failure = None;
        let resolution = self.controller.context_menu(
            &locator,
            x,
            y,
            self.grid.num_rows(),
            self.grid.num_columns(),
            |ctx| {
                let rendered = to_js(ctx)
                    .and_then(|arg| render.call1(&JsValue::NULL, &arg));
                match rendered {
                    Ok(value) if value.is_null() || value.is_undefined() => None,
                    Ok(value) => Some(value),
                    Err(e) => {
                        failure = Some(e);
                        None
                    }
                }
            },
        );
        if let Some(e) = failure {
            return Err(e);
        }
        Ok(resolution
            .and_then(|resolution| resolution.menu)
            .unwrap_or(JsValue::NULL))
    }

    /// Client rectangle of a cell, as `[x, y, width, height]`.
    pub fn cell_rect(&self, row: u32, col: u32) -> Result<Vec<f32>, JsValue> {
        let rect = self.grid.region_rect(&Region::cell(row, col))?;
        let (x, y) = self
            .viewport
            .to_client(rect.x, rect.y, row, col, &self.grid);
        Ok(vec![x, y, rect.width, rect.height])
    }
}

impl GridSelection {
    fn run(&mut self, event: &InteractionEvent) -> Vec<Effect> {
        let locator = Locator::new(&self.grid, &self.viewport);
        self.controller.handle_event(event, &locator)
    }

    fn dispatch(&mut self, event: &InteractionEvent) -> bool {
        self.run(event)
            .iter()
            .any(|effect| !matches!(effect, Effect::SelectionEnd))
    }
}
