//! Pointer-driven drag and resize sessions.
//!
//! Folder drag, window drag (title bar) and window resize (bottom-right handle) each run an
//! Idle → Active → Idle session keyed by the capturing pointer. Sessions on different targets are
//! independent and may overlap; a target never has more than one active session.

use crate::{
    geometry,
    model::{PointerId, PointerPosition, ShellState, WindowId, WindowRect},
    reducer::{ReducerError, RuntimeEffect},
    surface::ShellSurface,
    window_manager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    FolderDrag,
    WindowDrag,
    WindowResize,
}

/// Affordance a pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Folder(WindowId),
    TitleBar(WindowId),
    ResizeHandle(WindowId),
}

impl PointerTarget {
    pub fn kind(&self) -> SessionKind {
        match self {
            Self::Folder(_) => SessionKind::FolderDrag,
            Self::TitleBar(_) => SessionKind::WindowDrag,
            Self::ResizeHandle(_) => SessionKind::WindowResize,
        }
    }

    pub fn window_id(&self) -> &WindowId {
        match self {
            Self::Folder(id) | Self::TitleBar(id) | Self::ResizeHandle(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionSession {
    pub kind: SessionKind,
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    /// Geometry at pointer-down. Folder sessions use the icon box.
    pub origin: WindowRect,
    /// Last applied geometry.
    pub current: WindowRect,
    /// Latches once the pointer travels past the drag threshold.
    pub moved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    sessions: Vec<(PointerId, InteractionSession)>,
    suppressed_clicks: Vec<WindowId>,
}

impl InteractionState {
    pub fn session(&self, pointer_id: PointerId) -> Option<&InteractionSession> {
        self.sessions
            .iter()
            .find(|(id, _)| *id == pointer_id)
            .map(|(_, session)| session)
    }

    pub fn is_active(&self, pointer_id: PointerId) -> bool {
        self.session(pointer_id).is_some()
    }

    pub fn is_target_active(&self, kind: SessionKind, window_id: &WindowId) -> bool {
        self.sessions
            .iter()
            .any(|(_, session)| session.kind == kind && &session.window_id == window_id)
    }

    /// Whether a drag or resize session already holds this window's rect.
    pub fn is_window_busy(&self, window_id: &WindowId) -> bool {
        self.sessions.iter().any(|(_, session)| {
            session.kind != SessionKind::FolderDrag && &session.window_id == window_id
        })
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Consumes the pending "this click ended a drag" marker for a folder.
    pub fn take_suppressed_click(&mut self, window_id: &WindowId) -> bool {
        let before = self.suppressed_clicks.len();
        self.suppressed_clicks.retain(|id| id != window_id);
        self.suppressed_clicks.len() != before
    }

    fn session_mut(&mut self, pointer_id: PointerId) -> Option<&mut InteractionSession> {
        self.sessions
            .iter_mut()
            .find(|(id, _)| *id == pointer_id)
            .map(|(_, session)| session)
    }
}

/// Handles pointer-down on a drag or resize affordance.
///
/// Presses inside a window raise it whether or not a session starts. Rejected presses (narrow
/// viewport, maximized window drag, press on a control button, busy target) start nothing. A
/// window's title bar and resize handle share its rect, so either one busies both.
#[allow(clippy::too_many_arguments)]
pub fn begin(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    surface: &dyn ShellSurface,
    pointer_id: PointerId,
    target: PointerTarget,
    pointer: PointerPosition,
    from_control: bool,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let window_id = target.window_id().clone();
    let narrow = state.is_narrow(surface.viewport());

    let origin = match &target {
        PointerTarget::Folder(_) => {
            let position = surface
                .icon_position(&window_id)
                .ok_or_else(|| ReducerError::MissingIcon(window_id.clone()))?;
            interaction.take_suppressed_click(&window_id);
            if state.selected_icon.as_ref() != Some(&window_id) {
                state.selected_icon = Some(window_id.clone());
                effects.push(RuntimeEffect::SelectIcon(Some(window_id.clone())));
            }
            WindowRect {
                x: position.x,
                y: position.y,
                w: state.config.icon_size_px,
                h: state.config.icon_size_px,
            }
        }
        PointerTarget::TitleBar(_) | PointerTarget::ResizeHandle(_) => {
            let rect = surface
                .panel_rect(&window_id)
                .ok_or_else(|| ReducerError::MissingPanel(window_id.clone()))?;
            window_manager::focus_window(state, surface, &window_id, effects)?;
            rect
        }
    };

    let rejected = narrow
        || interaction.is_active(pointer_id)
        || match &target {
            PointerTarget::Folder(_) => {
                interaction.is_target_active(SessionKind::FolderDrag, &window_id)
            }
            PointerTarget::TitleBar(_) => {
                from_control
                    || interaction.is_window_busy(&window_id)
                    || !state.registry.is_open(&window_id)
                    || state.registry.is_maximized(&window_id)
            }
            PointerTarget::ResizeHandle(_) => {
                interaction.is_window_busy(&window_id) || !state.registry.is_open(&window_id)
            }
        };
    if rejected {
        return Ok(());
    }

    interaction.sessions.push((
        pointer_id,
        InteractionSession {
            kind: target.kind(),
            window_id,
            pointer_start: pointer,
            origin,
            current: origin,
            moved: false,
        },
    ));
    Ok(())
}

/// Applies a pointer move to the session captured by `pointer_id`, if any.
pub fn update(
    state: &ShellState,
    interaction: &mut InteractionState,
    surface: &dyn ShellSurface,
    pointer_id: PointerId,
    pointer: PointerPosition,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let Some(session) = interaction.session_mut(pointer_id) else {
        return Ok(());
    };
    let config = &state.config;
    let viewport = surface.viewport();
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;

    let next = match session.kind {
        SessionKind::FolderDrag => {
            if surface.icon_position(&session.window_id).is_none() {
                return Err(ReducerError::MissingIcon(session.window_id.clone()));
            }
            let moved = session.origin.offset(dx, dy);
            moved.with_position(geometry::clamp_icon_position(
                config,
                viewport,
                moved.position(),
            ))
        }
        SessionKind::WindowDrag => {
            if surface.panel_rect(&session.window_id).is_none() {
                return Err(ReducerError::MissingPanel(session.window_id.clone()));
            }
            let moved = session.origin.offset(dx, dy);
            moved.with_position(geometry::clamp_window_position(config, viewport, moved))
        }
        SessionKind::WindowResize => {
            if surface.panel_rect(&session.window_id).is_none() {
                return Err(ReducerError::MissingPanel(session.window_id.clone()));
            }
            geometry::clamp_resize(config, session.origin, dx, dy)
        }
    };

    if geometry::exceeds_threshold(dx, dy, config.drag_threshold_px) {
        session.moved = true;
    }
    session.current = next;

    effects.push(match session.kind {
        SessionKind::FolderDrag => RuntimeEffect::MoveIcon {
            window_id: session.window_id.clone(),
            position: next.position(),
        },
        SessionKind::WindowDrag | SessionKind::WindowResize => RuntimeEffect::PlaceWindow {
            window_id: session.window_id.clone(),
            rect: next,
        },
    });
    Ok(())
}

/// Ends the session captured by `pointer_id`. Window drags commit their final geometry; folder
/// drags that moved swallow the click that follows.
pub fn end(state: &mut ShellState, interaction: &mut InteractionState, pointer_id: PointerId) {
    let Some(index) = interaction
        .sessions
        .iter()
        .position(|(id, _)| *id == pointer_id)
    else {
        return;
    };
    let (_, session) = interaction.sessions.remove(index);

    match session.kind {
        SessionKind::WindowDrag => state.geometry.save(&session.window_id, session.current),
        SessionKind::FolderDrag if session.moved => {
            interaction.suppressed_clicks.push(session.window_id)
        }
        SessionKind::FolderDrag | SessionKind::WindowResize => {}
    }
}

/// Single click on a folder: opens in narrow mode unless it ended a drag; ignored otherwise.
pub fn folder_clicked(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    surface: &dyn ShellSurface,
    window_id: &WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    if surface.icon_position(window_id).is_none() {
        return Err(ReducerError::MissingIcon(window_id.clone()));
    }
    if interaction.take_suppressed_click(window_id) {
        return Ok(());
    }
    if state.is_narrow(surface.viewport()) {
        window_manager::open_window(state, surface, window_id, effects)?;
    }
    Ok(())
}
