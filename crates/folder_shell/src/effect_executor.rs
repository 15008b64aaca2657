//! Applies reducer effects to a [`ShellSurface`].

use crate::{reducer::RuntimeEffect, surface::ShellSurface};

pub fn apply_effects(surface: &mut dyn ShellSurface, effects: &[RuntimeEffect]) {
    for effect in effects {
        apply_effect(surface, effect);
    }
}

pub fn apply_effect(surface: &mut dyn ShellSurface, effect: &RuntimeEffect) {
    match effect {
        RuntimeEffect::PlaceWindow { window_id, rect } => surface.set_panel_rect(window_id, *rect),
        RuntimeEffect::SetWindowVisible { window_id, visible } => {
            surface.set_panel_visible(window_id, *visible)
        }
        RuntimeEffect::SetMaximized {
            window_id,
            maximized,
        } => surface.set_panel_maximized(window_id, *maximized),
        RuntimeEffect::RaiseWindow { window_id, order } => {
            surface.set_panel_order(window_id, *order)
        }
        RuntimeEffect::SetActiveWindow(window_id) => surface.set_active_panel(window_id.as_ref()),
        RuntimeEffect::MoveIcon {
            window_id,
            position,
        } => surface.set_icon_position(window_id, *position),
        RuntimeEffect::SelectIcon(window_id) => surface.set_selected_icon(window_id.as_ref()),
        RuntimeEffect::RenderTaskbar(items) => surface.render_taskbar(items.clone()),
    }
}
