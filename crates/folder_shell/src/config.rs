//! Tunable constants for the window manager, loaded from the `[shell]` table of `shell.toml`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Viewports at or below this width switch to narrow mode.
    pub narrow_breakpoint_px: i32,
    /// Height of the reserved taskbar band at the bottom of the viewport.
    pub taskbar_height_px: i32,
    /// Edge length of a folder icon.
    pub icon_size_px: i32,
    /// Per-open-window offset applied to cascade placement.
    pub cascade_step_px: i32,
    pub min_inset_x_px: i32,
    pub min_inset_y_px: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    /// Horizontal extent of a window that must stay on screen while dragging.
    pub window_reach_x_px: i32,
    /// Vertical extent of a window (title bar) that must stay above the taskbar while dragging.
    pub window_reach_y_px: i32,
    /// Pointer travel at which an interaction counts as a drag instead of a click.
    pub drag_threshold_px: i32,
    pub grid_columns: i32,
    pub grid_row_height_px: i32,
    pub grid_top_inset_px: i32,
    pub auto_open_delay_ms: u64,
    pub fallback_glyph: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 640,
            taskbar_height_px: 48,
            icon_size_px: 80,
            cascade_step_px: 30,
            min_inset_x_px: 40,
            min_inset_y_px: 20,
            min_window_width: 320,
            min_window_height: 200,
            window_reach_x_px: 100,
            window_reach_y_px: 50,
            drag_threshold_px: 3,
            grid_columns: 4,
            grid_row_height_px: 100,
            grid_top_inset_px: 20,
            auto_open_delay_ms: 300,
            fallback_glyph: "📄".to_string(),
        }
    }
}
