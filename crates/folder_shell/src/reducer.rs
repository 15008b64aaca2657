//! Reducer actions, projection effects, and the transition entry point for the window manager.

use thiserror::Error;

use crate::{
    interaction::{self, InteractionState, PointerTarget},
    layout,
    model::{
        PointerId, PointerPosition, ShellState, TaskbarItem, WindowControl, WindowId, WindowRect,
    },
    surface::ShellSurface,
    taskbar::{self, TaskbarClick},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`].
pub enum ShellAction {
    /// Open (or restore, or re-focus) a window.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize an open window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window, or restore it if already maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise an open window (pointer-down on the window body).
    FocusWindow {
        /// Window to raise.
        window_id: WindowId,
    },
    /// A title bar control button was clicked.
    WindowControl {
        /// Window owning the control.
        window_id: WindowId,
        /// Control that was clicked.
        control: WindowControl,
    },
    /// The title bar was double-clicked.
    TitleBarDoubleClicked {
        /// Window owning the title bar.
        window_id: WindowId,
    },
    /// A taskbar item was clicked.
    TaskbarItemClicked {
        /// Window associated with the item.
        window_id: WindowId,
    },
    /// A folder icon received a click.
    FolderClicked {
        /// Folder identity.
        window_id: WindowId,
    },
    /// A folder icon received a double click.
    FolderDoubleClicked {
        /// Folder identity.
        window_id: WindowId,
    },
    /// Deselect every folder icon.
    ClearSelection,
    /// Pointer pressed on a drag or resize affordance.
    PointerDown {
        /// Capturing pointer.
        pointer_id: PointerId,
        /// Affordance under the pointer.
        target: PointerTarget,
        /// Client coordinates.
        pointer: PointerPosition,
        /// Whether the press started on a window control button.
        from_control: bool,
    },
    /// Pointer moved.
    PointerMove {
        /// Moving pointer.
        pointer_id: PointerId,
        /// Client coordinates.
        pointer: PointerPosition,
    },
    /// Pointer released or cancelled.
    PointerUp {
        /// Released pointer.
        pointer_id: PointerId,
    },
    /// The viewport changed: re-run the narrow icon grid, and place windows opened while narrow
    /// once it is wide.
    ReflowIcons,
    /// Rebuild the taskbar from current state.
    RefreshTaskbar,
}

#[derive(Debug, Clone, PartialEq)]
/// Projection updates emitted by [`reduce_shell`] for the presentation layer to apply.
pub enum RuntimeEffect {
    /// Move/resize a window panel.
    PlaceWindow {
        /// Target window.
        window_id: WindowId,
        /// New geometry.
        rect: WindowRect,
    },
    /// Show or hide a window panel.
    SetWindowVisible {
        /// Target window.
        window_id: WindowId,
        /// Visibility.
        visible: bool,
    },
    /// Toggle maximized display for a window panel.
    SetMaximized {
        /// Target window.
        window_id: WindowId,
        /// Maximized display.
        maximized: bool,
    },
    /// Assign a stacking value.
    RaiseWindow {
        /// Target window.
        window_id: WindowId,
        /// New stacking value.
        order: u64,
    },
    /// Mark exactly one window (or none) active.
    SetActiveWindow(Option<WindowId>),
    /// Move a folder icon.
    MoveIcon {
        /// Target icon.
        window_id: WindowId,
        /// New position.
        position: PointerPosition,
    },
    /// Mark exactly one icon (or none) selected.
    SelectIcon(Option<WindowId>),
    /// Replace the taskbar contents.
    RenderTaskbar(Vec<TaskbarItem>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Missing presentation-layer references. An action that fails with one of these leaves state
/// untouched.
pub enum ReducerError {
    /// No window panel exists for the identity.
    #[error("window panel `{0}` not found")]
    MissingPanel(WindowId),
    /// No folder icon exists for the identity.
    #[error("folder icon `{0}` not found")]
    MissingIcon(WindowId),
}

/// Applies a [`ShellAction`] to the window-manager state and collects the projection effects.
///
/// Redundant transitions (closing a closed window, minimizing a window that is not open, and so
/// on) succeed with no effects.
///
/// # Errors
///
/// Returns [`ReducerError`] when the surface has no element for the referenced identity.
pub fn reduce_shell(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    surface: &dyn ShellSurface,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenWindow { window_id } => {
            window_manager::open_window(state, surface, &window_id, &mut effects)?;
        }
        ShellAction::CloseWindow { window_id } => {
            window_manager::close_window(state, surface, &window_id, &mut effects)?;
        }
        ShellAction::MinimizeWindow { window_id } => {
            window_manager::minimize_window(state, surface, &window_id, &mut effects)?;
        }
        ShellAction::ToggleMaximize { window_id }
        | ShellAction::TitleBarDoubleClicked { window_id } => {
            window_manager::toggle_maximize(state, surface, &window_id, &mut effects)?;
        }
        ShellAction::FocusWindow { window_id } => {
            window_manager::focus_window(state, surface, &window_id, &mut effects)?;
        }
        ShellAction::WindowControl { window_id, control } => match control {
            WindowControl::Close => {
                window_manager::close_window(state, surface, &window_id, &mut effects)?
            }
            WindowControl::Minimize => {
                window_manager::minimize_window(state, surface, &window_id, &mut effects)?
            }
            WindowControl::Maximize => {
                window_manager::toggle_maximize(state, surface, &window_id, &mut effects)?
            }
        },
        ShellAction::TaskbarItemClicked { window_id } => {
            match taskbar::resolve_click(state, &window_id) {
                Some(TaskbarClick::Restore) => {
                    window_manager::open_window(state, surface, &window_id, &mut effects)?
                }
                Some(TaskbarClick::Minimize) => {
                    window_manager::minimize_window(state, surface, &window_id, &mut effects)?
                }
                Some(TaskbarClick::Focus) => {
                    window_manager::focus_window(state, surface, &window_id, &mut effects)?
                }
                None => {}
            }
        }
        ShellAction::FolderClicked { window_id } => {
            interaction::folder_clicked(state, interaction, surface, &window_id, &mut effects)?;
        }
        ShellAction::FolderDoubleClicked { window_id } => {
            if surface.icon_position(&window_id).is_none() {
                return Err(ReducerError::MissingIcon(window_id));
            }
            window_manager::open_window(state, surface, &window_id, &mut effects)?;
        }
        ShellAction::ClearSelection => {
            if state.selected_icon.take().is_some() {
                effects.push(RuntimeEffect::SelectIcon(None));
            }
        }
        ShellAction::PointerDown {
            pointer_id,
            target,
            pointer,
            from_control,
        } => {
            interaction::begin(
                state,
                interaction,
                surface,
                pointer_id,
                target,
                pointer,
                from_control,
                &mut effects,
            )?;
        }
        ShellAction::PointerMove {
            pointer_id,
            pointer,
        } => {
            interaction::update(state, interaction, surface, pointer_id, pointer, &mut effects)?;
        }
        ShellAction::PointerUp { pointer_id } => {
            interaction::end(state, interaction, pointer_id);
        }
        ShellAction::ReflowIcons => {
            layout::reflow_icons(state, surface, &mut effects);
            window_manager::place_unplaced_windows(state, surface, &mut effects);
        }
        ShellAction::RefreshTaskbar => {
            taskbar::refresh(state, surface, &mut effects);
        }
    }

    Ok(effects)
}
