use super::*;

use crate::model::TaskbarItem;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let items = Signal::derive(move || {
        runtime
            .projection
            .with(|projection| projection.taskbar_items().to_vec())
    });

    view! {
        <nav class="taskbar" aria-label="Open windows">
            <For
                each=move || items.get()
                key=|item| {
                    (item.window_id.clone(), item.title.clone(), item.active, item.minimized)
                }
                let:item
            >
                <TaskbarButton item=item />
            </For>
        </nav>
    }
}

#[component]
fn TaskbarButton(item: TaskbarItem) -> impl IntoView {
    let runtime = use_shell_runtime();
    let window_id = item.window_id.clone();
    let click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(ShellAction::TaskbarItemClicked {
            window_id: window_id.clone(),
        });
    };

    view! {
        <button
            class="taskbar-item"
            class:active=item.active
            class:minimized=item.minimized
            data-window-id=item.window_id.to_string()
            title=item.title.clone()
            on:click=click
        >
            <span class="taskbar-item-glyph" aria-hidden="true">{item.glyph.clone()}</span>
            <span class="taskbar-item-title">{item.title.clone()}</span>
        </button>
    }
}
