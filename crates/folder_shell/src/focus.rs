//! Focus and stacking order.

use std::collections::HashMap;

use crate::model::WindowId;

/// Monotonic stacking counter plus the explicitly focused window.
///
/// Stacking values are never reused or decremented for the lifetime of the session; the window
/// with the highest value renders on top.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusOrder {
    counter: u64,
    orders: HashMap<WindowId, u64>,
    focused: Option<WindowId>,
}

impl FocusOrder {
    /// Assigns the next stacking value to `window_id` and makes it the only focused window.
    pub fn bring_to_front(&mut self, window_id: &WindowId) -> u64 {
        self.counter += 1;
        self.orders.insert(window_id.clone(), self.counter);
        self.focused = Some(window_id.clone());
        self.counter
    }

    pub fn order(&self, window_id: &WindowId) -> Option<u64> {
        self.orders.get(window_id).copied()
    }

    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, window_id: &WindowId) -> bool {
        self.focused.as_ref() == Some(window_id)
    }

    /// Drops focus if `window_id` holds it. Returns whether focus changed.
    pub fn release(&mut self, window_id: &WindowId) -> bool {
        if self.is_focused(window_id) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }
}
