//! Browser environment queries and pointer plumbing for the leptos presentation layer.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::{PointerPosition, Viewport};

/// Reads the current browser viewport, falling back to a 1024x768 desktop off-browser.
pub fn browser_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);
            return Viewport::new(width, height);
        }
    }

    Viewport::default()
}

pub fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Mouse presses other than the main button never start an interaction.
pub fn is_main_press(ev: &web_sys::PointerEvent) -> bool {
    ev.pointer_type() != "mouse" || ev.button() == 0
}

/// Whether a pointer event started on an element tagged with a control `data-action`.
pub fn event_from_control(ev: &web_sys::PointerEvent) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        {
            return matches!(element.closest("[data-action]"), Ok(Some(_)));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ev;
    false
}

#[cfg(target_arch = "wasm32")]
pub fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

pub fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
