//! Contract between the window manager and whatever renders it.
//!
//! The reducer only queries a [`ShellSurface`]; [`crate::effect_executor`] pushes the resulting
//! projection back through the setter half of the trait. [`ShellProjection`] is the in-memory
//! implementation used by the leptos components and by tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{PointerPosition, TaskbarItem, Viewport, WindowId, WindowMeta, WindowRect};

/// Presentation-layer lookups and projection setters keyed by window identity.
pub trait ShellSurface {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// On-screen geometry of a window panel, or `None` when no panel exists for `window_id`.
    fn panel_rect(&self, window_id: &WindowId) -> Option<WindowRect>;

    /// Position of a folder icon, or `None` when no icon exists for `window_id`.
    fn icon_position(&self, window_id: &WindowId) -> Option<PointerPosition>;

    /// Identities of every folder icon, in document order.
    fn icon_ids(&self) -> Vec<WindowId>;

    /// Display metadata for a window, if the presentation layer knows it.
    fn window_meta(&self, window_id: &WindowId) -> Option<WindowMeta>;

    fn has_taskbar(&self) -> bool;

    fn set_panel_rect(&mut self, window_id: &WindowId, rect: WindowRect);
    fn set_panel_visible(&mut self, window_id: &WindowId, visible: bool);
    fn set_panel_maximized(&mut self, window_id: &WindowId, maximized: bool);
    fn set_panel_order(&mut self, window_id: &WindowId, order: u64);
    fn set_active_panel(&mut self, window_id: Option<&WindowId>);
    fn set_icon_position(&mut self, window_id: &WindowId, position: PointerPosition);
    fn set_selected_icon(&mut self, window_id: Option<&WindowId>);
    fn render_taskbar(&mut self, items: Vec<TaskbarItem>);
}

/// Render state of one window panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    pub window_id: WindowId,
    pub title: String,
    pub glyph: Option<String>,
    pub body: String,
    pub rect: WindowRect,
    pub visible: bool,
    pub maximized: bool,
    pub active: bool,
    pub order: u64,
}

/// Render state of one folder icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconView {
    pub window_id: WindowId,
    pub label: String,
    pub glyph: String,
    pub position: PointerPosition,
    pub selected: bool,
}

/// In-memory projection of the whole shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellProjection {
    viewport: Viewport,
    panels: HashMap<WindowId, PanelView>,
    icons: Vec<IconView>,
    taskbar: Option<Vec<TaskbarItem>>,
}

impl ShellProjection {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            taskbar: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// A projection without a taskbar container.
    pub fn without_taskbar(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn insert_panel(&mut self, panel: PanelView) {
        self.panels.insert(panel.window_id.clone(), panel);
    }

    pub fn insert_icon(&mut self, icon: IconView) {
        self.icons.retain(|existing| existing.window_id != icon.window_id);
        self.icons.push(icon);
    }

    pub fn panel(&self, window_id: &WindowId) -> Option<&PanelView> {
        self.panels.get(window_id)
    }

    /// Panel identities in a stable order, for keyed rendering.
    pub fn panel_ids(&self) -> Vec<WindowId> {
        let mut ids: Vec<_> = self.panels.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Panels sorted bottom to top.
    pub fn panels_by_order(&self) -> Vec<&PanelView> {
        let mut panels: Vec<_> = self.panels.values().collect();
        panels.sort_by(|a, b| (a.order, &a.window_id).cmp(&(b.order, &b.window_id)));
        panels
    }

    pub fn icon(&self, window_id: &WindowId) -> Option<&IconView> {
        self.icons.iter().find(|icon| &icon.window_id == window_id)
    }

    pub fn icons(&self) -> &[IconView] {
        &self.icons
    }

    pub fn taskbar_items(&self) -> &[TaskbarItem] {
        self.taskbar.as_deref().unwrap_or_default()
    }
}

impl ShellSurface for ShellProjection {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn panel_rect(&self, window_id: &WindowId) -> Option<WindowRect> {
        self.panels.get(window_id).map(|panel| panel.rect)
    }

    fn icon_position(&self, window_id: &WindowId) -> Option<PointerPosition> {
        self.icon(window_id).map(|icon| icon.position)
    }

    fn icon_ids(&self) -> Vec<WindowId> {
        self.icons.iter().map(|icon| icon.window_id.clone()).collect()
    }

    fn window_meta(&self, window_id: &WindowId) -> Option<WindowMeta> {
        self.panels.get(window_id).map(|panel| WindowMeta {
            title: Some(panel.title.clone()).filter(|title| !title.is_empty()),
            glyph: panel.glyph.clone(),
        })
    }

    fn has_taskbar(&self) -> bool {
        self.taskbar.is_some()
    }

    fn set_panel_rect(&mut self, window_id: &WindowId, rect: WindowRect) {
        if let Some(panel) = self.panels.get_mut(window_id) {
            panel.rect = rect;
        }
    }

    fn set_panel_visible(&mut self, window_id: &WindowId, visible: bool) {
        if let Some(panel) = self.panels.get_mut(window_id) {
            panel.visible = visible;
        }
    }

    fn set_panel_maximized(&mut self, window_id: &WindowId, maximized: bool) {
        if let Some(panel) = self.panels.get_mut(window_id) {
            panel.maximized = maximized;
        }
    }

    fn set_panel_order(&mut self, window_id: &WindowId, order: u64) {
        if let Some(panel) = self.panels.get_mut(window_id) {
            panel.order = order;
        }
    }

    fn set_active_panel(&mut self, window_id: Option<&WindowId>) {
        for panel in self.panels.values_mut() {
            panel.active = Some(&panel.window_id) == window_id;
        }
    }

    fn set_icon_position(&mut self, window_id: &WindowId, position: PointerPosition) {
        if let Some(icon) = self.icons.iter_mut().find(|icon| &icon.window_id == window_id) {
            icon.position = position;
        }
    }

    fn set_selected_icon(&mut self, window_id: Option<&WindowId>) {
        for icon in &mut self.icons {
            icon.selected = Some(&icon.window_id) == window_id;
        }
    }

    fn render_taskbar(&mut self, items: Vec<TaskbarItem>) {
        if let Some(taskbar) = self.taskbar.as_mut() {
            *taskbar = items;
        }
    }
}
