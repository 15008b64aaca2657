use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{config::ShellConfig, focus::FocusOrder, registry::GeometryStore, registry::WindowRegistry};

/// Stable identity shared by a folder icon, its window panel, and its taskbar entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a capturing pointer, as reported by `PointerEvent.pointerId`.
pub type PointerId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn with_position(self, position: PointerPosition) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    pub fn position(self) -> PointerPosition {
        PointerPosition {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Current viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Registry record for a window that is open (visible or minimized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpenWindowState {
    pub minimized: bool,
    pub maximized: bool,
}

/// Display metadata the presentation layer supplies per window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMeta {
    pub title: Option<String>,
    pub glyph: Option<String>,
}

/// Window control buttons carried in a title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
}

impl WindowControl {
    /// Parses the action identifier attached to a control button.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "close" => Some(Self::Close),
            "minimize" => Some(Self::Minimize),
            "maximize" => Some(Self::Maximize),
            _ => None,
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

/// One rendered taskbar entry, derived from the registry on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarItem {
    pub window_id: WindowId,
    pub title: String,
    pub glyph: String,
    pub active: bool,
    pub minimized: bool,
}

/// Session-wide window-manager state. Constructed once at startup and handed to every
/// controller by reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellState {
    pub config: ShellConfig,
    pub registry: WindowRegistry,
    pub geometry: GeometryStore,
    pub focus: FocusOrder,
    pub selected_icon: Option<WindowId>,
}

impl ShellState {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.focus.focused()
    }

    pub fn is_narrow(&self, viewport: Viewport) -> bool {
        crate::geometry::is_narrow(viewport, self.config.narrow_breakpoint_px)
    }
}
