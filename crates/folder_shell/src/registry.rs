//! Open-window registry and the saved-geometry store.
//!
//! Both are total over the key space: every operation accepts any [`WindowId`] and redundant
//! calls on already-consistent state are no-ops.

use std::collections::HashMap;

use crate::model::{OpenWindowState, WindowId, WindowRect};

/// Open windows in the order they were opened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRegistry {
    entries: Vec<(WindowId, OpenWindowState)>,
}

impl WindowRegistry {
    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.get(window_id).is_some()
    }

    pub fn is_minimized(&self, window_id: &WindowId) -> bool {
        self.get(window_id).map(|w| w.minimized).unwrap_or(false)
    }

    pub fn is_maximized(&self, window_id: &WindowId) -> bool {
        self.get(window_id).map(|w| w.maximized).unwrap_or(false)
    }

    pub fn get(&self, window_id: &WindowId) -> Option<&OpenWindowState> {
        self.entries
            .iter()
            .find(|(id, _)| id == window_id)
            .map(|(_, state)| state)
    }

    /// Inserts a visible record if none exists.
    pub fn mark_open(&mut self, window_id: &WindowId) {
        if !self.is_open(window_id) {
            self.entries
                .push((window_id.clone(), OpenWindowState::default()));
        }
    }

    pub fn mark_minimized(&mut self, window_id: &WindowId) {
        self.entry_mut(window_id).minimized = true;
    }

    pub fn mark_restored(&mut self, window_id: &WindowId) {
        self.entry_mut(window_id).minimized = false;
    }

    pub fn set_maximized(&mut self, window_id: &WindowId, maximized: bool) {
        if let Some((_, state)) = self.entries.iter_mut().find(|(id, _)| id == window_id) {
            state.maximized = maximized;
        }
    }

    pub fn remove(&mut self, window_id: &WindowId) {
        self.entries.retain(|(id, _)| id != window_id);
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WindowId, &OpenWindowState)> {
        self.entries.iter().map(|(id, state)| (id, state))
    }

    fn entry_mut(&mut self, window_id: &WindowId) -> &mut OpenWindowState {
        let index = match self.entries.iter().position(|(id, _)| id == window_id) {
            Some(index) => index,
            None => {
                self.entries
                    .push((window_id.clone(), OpenWindowState::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }
}

/// Last explicit (non-maximized) geometry per window. Entries outlive close/reopen cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeometryStore {
    saved: HashMap<WindowId, WindowRect>,
}

impl GeometryStore {
    pub fn get(&self, window_id: &WindowId) -> Option<WindowRect> {
        self.saved.get(window_id).copied()
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.saved.contains_key(window_id)
    }

    pub fn save(&mut self, window_id: &WindowId, rect: WindowRect) {
        self.saved.insert(window_id.clone(), rect);
    }
}
