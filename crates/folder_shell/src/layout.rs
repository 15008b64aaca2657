//! Narrow-viewport icon grid.

use crate::{
    model::{PointerPosition, ShellState, Viewport},
    reducer::RuntimeEffect,
    surface::ShellSurface,
};

/// Grid cell position for the icon at `index`, centered horizontally in its column.
pub fn grid_position(state: &ShellState, viewport: Viewport, index: usize) -> PointerPosition {
    let config = &state.config;
    let columns = config.grid_columns.max(1);
    let cell_width = viewport.width / columns;
    let column = index as i32 % columns;
    let row = index as i32 / columns;
    PointerPosition {
        x: column * cell_width + (cell_width - config.icon_size_px) / 2,
        y: config.grid_top_inset_px + row * config.grid_row_height_px,
    }
}

/// Arranges every icon on the grid when the viewport is narrow; leaves positions untouched
/// otherwise.
pub fn reflow_icons(state: &ShellState, surface: &dyn ShellSurface, effects: &mut Vec<RuntimeEffect>) {
    let viewport = surface.viewport();
    if !state.is_narrow(viewport) {
        return;
    }
    for (index, window_id) in surface.icon_ids().into_iter().enumerate() {
        effects.push(RuntimeEffect::MoveIcon {
            position: grid_position(state, viewport, index),
            window_id,
        });
    }
}
