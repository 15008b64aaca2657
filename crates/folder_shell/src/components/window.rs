use super::*;

use crate::surface::PanelView;

fn panel_style(panel: &PanelView, narrow: bool) -> String {
    let display = if panel.visible { "" } else { "display:none;" };
    if panel.maximized || narrow {
        format!("{display}z-index:{};", panel.order)
    } else {
        format!(
            "{display}left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            panel.rect.x, panel.rect.y, panel.rect.w, panel.rect.h, panel.order
        )
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let panel = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime
                .projection
                .with(|projection| projection.panel(&window_id).cloned())
        })
    };
    let (title, glyph, body) = panel
        .get_untracked()
        .map(|panel| {
            let title = if panel.title.is_empty() {
                panel.window_id.to_string()
            } else {
                panel.title
            };
            (title, panel.glyph, panel.body)
        })
        .unwrap_or_default();

    let focus = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_main_press(&ev) {
                return;
            }
            runtime.dispatch_action(ShellAction::FocusWindow {
                window_id: window_id.clone(),
            });
        }
    };
    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_main_press(&ev) {
                return;
            }
            ev.stop_propagation();
            begin_pointer_session(runtime, &ev, PointerTarget::TitleBar(window_id.clone()));
        }
    };
    let titlebar_double_click = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(ShellAction::TitleBarDoubleClicked {
                window_id: window_id.clone(),
            });
        }
    };
    let begin_resize = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_main_press(&ev) {
                return;
            }
            ev.stop_propagation();
            begin_pointer_session(runtime, &ev, PointerTarget::ResizeHandle(window_id.clone()));
        }
    };

    view! {
        <section
            class="desktop-window"
            class:active=move || panel.get().map(|p| p.active).unwrap_or(false)
            class:maximized=move || panel.get().map(|p| p.maximized).unwrap_or(false)
            style=move || {
                let narrow = runtime.is_narrow();
                panel.get().map(|p| panel_style(&p, narrow)).unwrap_or_default()
            }
            data-window-id=window_id.to_string()
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=focus
        >
            <header class="titlebar" on:pointerdown=begin_move on:dblclick=titlebar_double_click>
                <div class="titlebar-title">
                    <span class="titlebar-glyph" aria-hidden="true">{glyph}</span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <WindowControlButton
                        window_id=window_id.clone()
                        control=WindowControl::Minimize
                        label="Minimize window"
                        text="_"
                    />
                    <WindowControlButton
                        window_id=window_id.clone()
                        control=WindowControl::Maximize
                        label="Maximize window"
                        text="□"
                    />
                    <WindowControlButton
                        window_id=window_id.clone()
                        control=WindowControl::Close
                        label="Close window"
                        text="×"
                    />
                </div>
            </header>
            <div class="window-body">
                <p>{body}</p>
            </div>
            <div class="window-resize-handle" aria-hidden="true" on:pointerdown=begin_resize></div>
        </section>
    }
}

#[component]
fn WindowControlButton(
    window_id: WindowId,
    control: WindowControl,
    label: &'static str,
    text: &'static str,
) -> impl IntoView {
    let runtime = use_shell_runtime();
    let click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(ShellAction::WindowControl {
            window_id: window_id.clone(),
            control,
        });
    };

    view! {
        <button
            class="titlebar-control"
            data-action=control.action()
            aria-label=label
            on:dblclick=move |ev| stop_mouse_event(&ev)
            on:click=click
        >
            {text}
        </button>
    }
}
