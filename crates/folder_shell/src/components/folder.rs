use super::*;

#[component]
pub(super) fn FolderIcon(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let icon = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime
                .projection
                .with(|projection| projection.icon(&window_id).cloned())
        })
    };
    let (label, glyph) = icon
        .get_untracked()
        .map(|icon| (icon.label, icon.glyph))
        .unwrap_or_default();

    let begin_drag = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_main_press(&ev) {
                return;
            }
            begin_pointer_session(runtime, &ev, PointerTarget::Folder(window_id.clone()));
        }
    };
    let click = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(ShellAction::FolderClicked {
                window_id: window_id.clone(),
            });
        }
    };
    let double_click = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(ShellAction::FolderDoubleClicked {
                window_id: window_id.clone(),
            });
        }
    };

    view! {
        <button
            class="folder-icon"
            class:selected=move || icon.get().map(|icon| icon.selected).unwrap_or(false)
            style=move || {
                icon.get()
                    .map(|icon| format!("left:{}px;top:{}px;", icon.position.x, icon.position.y))
                    .unwrap_or_default()
            }
            data-window-id=window_id.to_string()
            aria-label=label.clone()
            on:pointerdown=begin_drag
            on:click=click
            on:dblclick=double_click
        >
            <span class="folder-icon-glyph" aria-hidden="true">{glyph}</span>
            <span class="folder-icon-label">{label}</span>
        </button>
    }
}
