//! Folder shell UI composition: desktop surface, folder icons, window panels, and taskbar.

mod folder;
mod taskbar;
mod window;

use leptos::*;

use self::{folder::FolderIcon, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    host::{
        event_from_control, is_main_press, pointer_from_pointer_event, stop_mouse_event,
        try_set_pointer_capture,
    },
    interaction::PointerTarget,
    model::{WindowControl, WindowId},
    reducer::ShellAction,
    runtime_context::{use_shell_runtime, ShellRuntimeContext},
    surface::ShellSurface,
};

/// Dispatches a pointer-down on a drag affordance and captures the pointer if a session started.
fn begin_pointer_session(
    runtime: ShellRuntimeContext,
    ev: &web_sys::PointerEvent,
    target: PointerTarget,
) {
    let pointer_id = ev.pointer_id();
    runtime.dispatch_action(ShellAction::PointerDown {
        pointer_id,
        target,
        pointer: pointer_from_pointer_event(ev),
        from_control: event_from_control(ev),
    });
    if runtime.is_pointer_active(pointer_id) {
        try_set_pointer_capture(ev);
        ev.prevent_default();
    }
}

#[component]
/// Full-viewport desktop: icon surface, window layer, and taskbar.
///
/// Pointer moves and releases are handled here so a captured pointer keeps driving its session
/// after leaving the element it started on.
pub fn FolderDesktop() -> impl IntoView {
    let runtime = use_shell_runtime();
    let projection = runtime.projection;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer_id = ev.pointer_id();
        if runtime.is_pointer_active(pointer_id) {
            runtime.dispatch_action(ShellAction::PointerMove {
                pointer_id,
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |ev: web_sys::PointerEvent| {
        let pointer_id = ev.pointer_id();
        if runtime.is_pointer_active(pointer_id) {
            runtime.dispatch_action(ShellAction::PointerUp { pointer_id });
        }
    };
    let taskbar_height = runtime
        .state
        .with_untracked(|state| state.config.taskbar_height_px);

    view! {
        <div
            class="folder-desktop"
            class:narrow=move || runtime.is_narrow()
            style=format!("--taskbar-height:{taskbar_height}px;")
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-surface"
                on:click=move |_| runtime.dispatch_action(ShellAction::ClearSelection)
            >
                <For
                    each=move || projection.with(|p| p.icon_ids())
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <FolderIcon window_id=window_id />
                </For>
            </div>
            <div class="window-layer">
                <For
                    each=move || projection.with(|p| p.panel_ids())
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <Taskbar />
        </div>
    }
}
