//! Runtime provider and context wiring for the folder shell.
//!
//! This module owns the long-lived reducer container and the rendered projection, installs the
//! boot sequence, and keeps the projection's viewport in sync with the browser. UI composition
//! stays in [`crate::components`].

use leptos::*;

use crate::{
    boot,
    catalog::ShellManifest,
    effect_executor::apply_effects,
    host::browser_viewport,
    interaction::InteractionState,
    model::{PointerId, ShellState},
    reducer::{reduce_shell, ShellAction},
    surface::{ShellProjection, ShellSurface},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Window-manager state: registry, saved geometry, focus order, selection.
    pub state: RwSignal<ShellState>,
    /// Active pointer sessions and pending click suppressions.
    pub interaction: RwSignal<InteractionState>,
    /// Rendered panels, icons, and taskbar items.
    pub projection: RwSignal<ShellProjection>,
    /// Catalog the shell was mounted with.
    pub manifest: StoredValue<ShellManifest>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }

    /// Whether `pointer_id` currently owns a drag or resize session. Untracked.
    pub fn is_pointer_active(&self, pointer_id: PointerId) -> bool {
        self.interaction
            .with_untracked(|interaction| interaction.is_active(pointer_id))
    }

    /// Tracked narrow-viewport check for view classes.
    pub fn is_narrow(&self) -> bool {
        let viewport = self.projection.with(|projection| projection.viewport());
        self.state.with(|state| state.is_narrow(viewport))
    }
}

fn install_viewport_tracking(runtime: ShellRuntimeContext) {
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = browser_viewport();
        if runtime.projection.with_untracked(|p| p.viewport()) == viewport {
            return;
        }
        runtime
            .projection
            .update(|projection| projection.set_viewport(viewport));
        runtime.dispatch_action(ShellAction::ReflowIcons);
    });
    on_cleanup(move || resize_listener.remove());
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and runs the boot sequence.
pub fn FolderShellProvider(
    /// Folder catalog and shell configuration.
    manifest: ShellManifest,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(ShellState::new(manifest.shell.clone()));
    let interaction = create_rw_signal(InteractionState::default());
    let projection = create_rw_signal(manifest.projection(browser_viewport()));

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_shell = shell.clone();
        let previous_ui = ui.clone();

        let result =
            projection.with_untracked(|surface| reduce_shell(&mut shell, &mut ui, surface, action));
        match result {
            Ok(effects) => {
                if shell != previous_shell {
                    state.set(shell);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !effects.is_empty() {
                    projection.update(|surface| apply_effects(surface, &effects));
                }
            }
            Err(err) => logging::warn!("folder shell dropped action: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        state,
        interaction,
        projection,
        manifest: store_value(manifest),
        dispatch,
    };

    provide_context(runtime);

    install_viewport_tracking(runtime);
    runtime
        .manifest
        .with_value(|manifest| boot::install_boot(manifest, dispatch));

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`FolderShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
