//! Window lifecycle transitions used by the shell reducer.
//!
//! Each transition validates its surface lookups before touching [`ShellState`], so a
//! [`ReducerError`] always means nothing changed.

use crate::{
    geometry,
    model::{ShellState, WindowId, WindowRect},
    reducer::{ReducerError, RuntimeEffect},
    surface::ShellSurface,
    taskbar,
};

fn require_panel(
    surface: &dyn ShellSurface,
    window_id: &WindowId,
) -> Result<WindowRect, ReducerError> {
    surface
        .panel_rect(window_id)
        .ok_or_else(|| ReducerError::MissingPanel(window_id.clone()))
}

/// Closed → visible with placement, minimized → visible, visible → re-focused.
pub fn open_window(
    state: &mut ShellState,
    surface: &dyn ShellSurface,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let panel_rect = require_panel(surface, window_id)?;

    if state.registry.is_open(window_id) {
        if state.registry.is_minimized(window_id) {
            state.registry.mark_restored(window_id);
            effects.push(RuntimeEffect::SetWindowVisible {
                window_id: window_id.clone(),
                visible: true,
            });
        }
        bring_to_front(state, window_id, effects);
        taskbar::refresh(state, surface, effects);
        return Ok(());
    }

    let viewport = surface.viewport();
    if !state.is_narrow(viewport) {
        let rect = match state.geometry.get(window_id) {
            Some(saved) => saved,
            None => {
                let position = geometry::cascade_position(
                    &state.config,
                    viewport,
                    (panel_rect.w, panel_rect.h),
                    state.registry.count(),
                );
                let placed = panel_rect.with_position(position);
                state.geometry.save(window_id, placed);
                placed
            }
        };
        effects.push(RuntimeEffect::PlaceWindow {
            window_id: window_id.clone(),
            rect,
        });
    }

    state.registry.mark_open(window_id);
    effects.push(RuntimeEffect::SetWindowVisible {
        window_id: window_id.clone(),
        visible: true,
    });
    bring_to_front(state, window_id, effects);
    taskbar::refresh(state, surface, effects);
    Ok(())
}

/// Visible or minimized → closed. Saved geometry is retained for the next open.
pub fn close_window(
    state: &mut ShellState,
    surface: &dyn ShellSurface,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    if !state.registry.is_open(window_id) {
        return Ok(());
    }
    require_panel(surface, window_id)?;

    state.registry.remove(window_id);
    effects.push(RuntimeEffect::SetMaximized {
        window_id: window_id.clone(),
        maximized: false,
    });
    effects.push(RuntimeEffect::SetWindowVisible {
        window_id: window_id.clone(),
        visible: false,
    });
    if state.focus.release(window_id) {
        effects.push(RuntimeEffect::SetActiveWindow(None));
    }
    taskbar::refresh(state, surface, effects);
    Ok(())
}

pub fn minimize_window(
    state: &mut ShellState,
    surface: &dyn ShellSurface,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    if !state.registry.is_open(window_id) {
        return Ok(());
    }
    require_panel(surface, window_id)?;

    state.registry.mark_minimized(window_id);
    effects.push(RuntimeEffect::SetWindowVisible {
        window_id: window_id.clone(),
        visible: false,
    });
    if state.focus.release(window_id) {
        effects.push(RuntimeEffect::SetActiveWindow(None));
    }
    taskbar::refresh(state, surface, effects);
    Ok(())
}

/// Maximizes a visible window, capturing its on-screen geometry first, or restores the most
/// recently saved geometry if it is already maximized.
pub fn toggle_maximize(
    state: &mut ShellState,
    surface: &dyn ShellSurface,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    if !state.registry.is_open(window_id) || state.registry.is_minimized(window_id) {
        return Ok(());
    }
    let current = require_panel(surface, window_id)?;

    if state.registry.is_maximized(window_id) {
        let restored = state.geometry.get(window_id).unwrap_or(current);
        state.registry.set_maximized(window_id, false);
        effects.push(RuntimeEffect::PlaceWindow {
            window_id: window_id.clone(),
            rect: restored,
        });
        effects.push(RuntimeEffect::SetMaximized {
            window_id: window_id.clone(),
            maximized: false,
        });
    } else {
        state.geometry.save(window_id, current);
        state.registry.set_maximized(window_id, true);
        effects.push(RuntimeEffect::SetMaximized {
            window_id: window_id.clone(),
            maximized: true,
        });
    }
    Ok(())
}

/// Raises a visible window. Closed or minimized windows are left alone.
pub fn focus_window(
    state: &mut ShellState,
    surface: &dyn ShellSurface,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    if !state.registry.is_open(window_id) || state.registry.is_minimized(window_id) {
        return Ok(());
    }
    require_panel(surface, window_id)?;

    bring_to_front(state, window_id, effects);
    taskbar::refresh(state, surface, effects);
    Ok(())
}

/// Gives every open window that was opened in narrow mode a cascade position and saved
/// geometry once the viewport is wide. Windows that already have saved geometry are untouched.
pub fn place_unplaced_windows(
    state: &mut ShellState,
    surface: &dyn ShellSurface,
    effects: &mut Vec<RuntimeEffect>,
) {
    let viewport = surface.viewport();
    if state.is_narrow(viewport) {
        return;
    }
    let unplaced: Vec<(usize, WindowId)> = state
        .registry
        .iter()
        .enumerate()
        .filter(|(_, (window_id, _))| !state.geometry.contains(window_id))
        .map(|(index, (window_id, _))| (index, window_id.clone()))
        .collect();
    for (index, window_id) in unplaced {
        let Some(panel_rect) = surface.panel_rect(&window_id) else {
            continue;
        };
        let position = geometry::cascade_position(
            &state.config,
            viewport,
            (panel_rect.w, panel_rect.h),
            index,
        );
        let placed = panel_rect.with_position(position);
        state.geometry.save(&window_id, placed);
        effects.push(RuntimeEffect::PlaceWindow {
            window_id,
            rect: placed,
        });
    }
}

/// Assigns the next stacking value and the exclusive active marking. Callers refresh the taskbar.
pub(crate) fn bring_to_front(
    state: &mut ShellState,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let order = state.focus.bring_to_front(window_id);
    effects.push(RuntimeEffect::RaiseWindow {
        window_id: window_id.clone(),
        order,
    });
    effects.push(RuntimeEffect::SetActiveWindow(Some(window_id.clone())));
}
