//! Startup sequence: initial icon layout, first taskbar render, and delayed auto-open.

use std::time::Duration;

use leptos::{set_timeout, Callable, Callback};

use crate::{catalog::ShellManifest, model::WindowId, reducer::ShellAction};

/// Folders flagged to open on startup, in catalog order.
pub fn auto_open_targets(manifest: &ShellManifest) -> Vec<WindowId> {
    manifest
        .folders
        .iter()
        .filter(|folder| folder.open_by_default)
        .map(|folder| folder.window_id())
        .collect()
}

/// Actions dispatched synchronously when the shell mounts.
pub fn startup_actions() -> Vec<ShellAction> {
    vec![ShellAction::ReflowIcons, ShellAction::RefreshTaskbar]
}

/// Runs the startup actions and schedules one delayed `OpenWindow` per auto-open folder.
///
/// Each open fires after the same fixed delay; user input in between is not coordinated with it.
pub(crate) fn install_boot(manifest: &ShellManifest, dispatch: Callback<ShellAction>) {
    for action in startup_actions() {
        dispatch.call(action);
    }
    let delay = Duration::from_millis(manifest.shell.auto_open_delay_ms);
    for window_id in auto_open_targets(manifest) {
        set_timeout(
            move || dispatch.call(ShellAction::OpenWindow { window_id }),
            delay,
        );
    }
}
