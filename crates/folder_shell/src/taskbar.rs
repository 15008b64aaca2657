//! Taskbar contents derived from the registry, and taskbar click semantics.

use crate::{
    model::{ShellState, TaskbarItem, WindowId},
    reducer::RuntimeEffect,
    surface::ShellSurface,
};

/// What a click on a taskbar item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClick {
    /// Minimized window: reopen and focus it.
    Restore,
    /// Visible, focused window: minimize it.
    Minimize,
    /// Visible window without focus: raise it.
    Focus,
}

/// Builds every taskbar item in open order, resolving titles and glyphs from window metadata.
pub fn build_items(state: &ShellState, surface: &dyn ShellSurface) -> Vec<TaskbarItem> {
    state
        .registry
        .iter()
        .map(|(window_id, open)| {
            let meta = surface.window_meta(window_id);
            let title = meta
                .as_ref()
                .and_then(|meta| meta.title.clone())
                .unwrap_or_else(|| window_id.to_string());
            let glyph = meta
                .and_then(|meta| meta.glyph)
                .unwrap_or_else(|| state.config.fallback_glyph.clone());
            TaskbarItem {
                window_id: window_id.clone(),
                title,
                glyph,
                active: state.focus.is_focused(window_id),
                minimized: open.minimized,
            }
        })
        .collect()
}

/// Emits a full taskbar rebuild when the surface has a taskbar container.
pub fn refresh(state: &ShellState, surface: &dyn ShellSurface, effects: &mut Vec<RuntimeEffect>) {
    if surface.has_taskbar() {
        effects.push(RuntimeEffect::RenderTaskbar(build_items(state, surface)));
    }
}

pub fn resolve_click(state: &ShellState, window_id: &WindowId) -> Option<TaskbarClick> {
    if !state.registry.is_open(window_id) {
        return None;
    }
    if state.registry.is_minimized(window_id) {
        Some(TaskbarClick::Restore)
    } else if state.focus.is_focused(window_id) {
        Some(TaskbarClick::Minimize)
    } else {
        Some(TaskbarClick::Focus)
    }
}
