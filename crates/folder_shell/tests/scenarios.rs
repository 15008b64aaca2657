use folder_shell::{
    apply_effects, boot, reduce_shell, IconView, InteractionState, PanelView, PointerPosition,
    PointerTarget, ReducerError, ShellAction, ShellProjection, ShellState, ShellSurface, Viewport,
    WindowControl, WindowId, WindowRect,
};
use pretty_assertions::assert_eq;

const WIDE: Viewport = Viewport {
    width: 1024,
    height: 768,
};
const NARROW: Viewport = Viewport {
    width: 600,
    height: 900,
};

struct Shell {
    state: ShellState,
    interaction: InteractionState,
    projection: ShellProjection,
}

impl Shell {
    fn new(viewport: Viewport, ids: &[&str]) -> Self {
        let mut projection = ShellProjection::new(viewport);
        for (index, id) in ids.iter().enumerate() {
            projection.insert_panel(PanelView {
                window_id: WindowId::new(*id),
                title: id.to_uppercase(),
                glyph: None,
                body: String::new(),
                rect: WindowRect {
                    x: 0,
                    y: 0,
                    w: 400,
                    h: 300,
                },
                visible: false,
                maximized: false,
                active: false,
                order: 0,
            });
            projection.insert_icon(IconView {
                window_id: WindowId::new(*id),
                label: id.to_string(),
                glyph: "📁".to_string(),
                position: PointerPosition::new(20, 20 + 100 * index as i32),
                selected: false,
            });
        }
        Self {
            state: ShellState::default(),
            interaction: InteractionState::default(),
            projection,
        }
    }

    fn dispatch(&mut self, action: ShellAction) {
        self.try_dispatch(action).expect("action applies");
    }

    fn try_dispatch(&mut self, action: ShellAction) -> Result<(), ReducerError> {
        let effects = reduce_shell(
            &mut self.state,
            &mut self.interaction,
            &self.projection,
            action,
        )?;
        apply_effects(&mut self.projection, &effects);
        Ok(())
    }

    fn open(&mut self, id: &str) {
        self.dispatch(ShellAction::OpenWindow {
            window_id: WindowId::new(id),
        });
    }

    fn panel(&self, id: &str) -> &PanelView {
        self.projection.panel(&WindowId::new(id)).expect("panel")
    }

    fn order(&self, id: &str) -> u64 {
        self.state
            .focus
            .order(&WindowId::new(id))
            .expect("window has been raised")
    }

    fn drag(&mut self, pointer_id: i32, target: PointerTarget, dx: i32, dy: i32) {
        let start = PointerPosition::new(500, 300);
        self.dispatch(ShellAction::PointerDown {
            pointer_id,
            target,
            pointer: start,
            from_control: false,
        });
        self.dispatch(ShellAction::PointerMove {
            pointer_id,
            pointer: PointerPosition::new(start.x + dx, start.y + dy),
        });
        self.dispatch(ShellAction::PointerUp { pointer_id });
    }

    fn active_ids(&self) -> Vec<WindowId> {
        self.projection
            .panels_by_order()
            .into_iter()
            .filter(|panel| panel.active)
            .map(|panel| panel.window_id.clone())
            .collect()
    }
}

fn title_bar(id: &str) -> PointerTarget {
    PointerTarget::TitleBar(WindowId::new(id))
}

#[test]
fn geometry_survives_close_and_reopen() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    let placed = shell.panel("a").rect;

    shell.dispatch(ShellAction::CloseWindow {
        window_id: WindowId::new("a"),
    });
    assert!(!shell.state.registry.is_open(&WindowId::new("a")));
    assert!(!shell.panel("a").visible);

    shell.open("a");
    assert_eq!(shell.panel("a").rect, placed);
}

#[test]
fn drag_commit_is_what_a_reopen_restores() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    let placed = shell.panel("a").rect;

    shell.drag(1, title_bar("a"), -60, 45);
    let dragged = shell.panel("a").rect;
    assert_eq!(dragged, placed.offset(-60, 45));

    shell.dispatch(ShellAction::WindowControl {
        window_id: WindowId::new("a"),
        control: WindowControl::Close,
    });
    shell.open("a");

    assert_eq!(shell.panel("a").rect, dragged);
    assert_eq!(shell.state.geometry.get(&WindowId::new("a")), Some(dragged));
}

#[test]
fn raising_is_monotonic_and_exclusive() {
    let mut shell = Shell::new(WIDE, &["a", "b", "c"]);
    for id in ["a", "b", "c"] {
        shell.open(id);
    }

    let mut last = shell.state.focus.counter();
    for id in ["a", "c", "a", "a", "b", "c"] {
        shell.dispatch(ShellAction::FocusWindow {
            window_id: WindowId::new(id),
        });
        let order = shell.order(id);
        assert!(order > last, "order for {id} must grow past {last}");
        last = order;
        assert_eq!(shell.active_ids(), vec![WindowId::new(id)]);
        assert_eq!(shell.state.focused_window_id(), Some(&WindowId::new(id)));
    }
}

#[test]
fn taskbar_keeps_open_order_while_focus_moves() {
    let mut shell = Shell::new(WIDE, &["a", "b", "c"]);
    for id in ["a", "b", "c"] {
        shell.open(id);
    }

    shell.dispatch(ShellAction::FocusWindow {
        window_id: WindowId::new("b"),
    });

    let items = shell.projection.taskbar_items();
    let ids: Vec<_> = items.iter().map(|item| item.window_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    let active: Vec<_> = items.iter().map(|item| item.active).collect();
    assert_eq!(active, vec![false, true, false]);

    assert!(shell.order("a") < shell.order("c"));
    assert!(shell.order("c") < shell.order("b"));
    assert_eq!(shell.active_ids(), vec![WindowId::new("b")]);
}

#[test]
fn minimized_window_restores_from_taskbar() {
    let mut shell = Shell::new(WIDE, &["a", "b"]);
    shell.open("b");
    shell.open("a");
    let a = WindowId::new("a");

    shell.dispatch(ShellAction::MinimizeWindow {
        window_id: a.clone(),
    });
    assert!(shell.state.registry.is_minimized(&a));
    assert!(!shell.panel("a").visible);
    let item = shell.projection.taskbar_items()[1].clone();
    assert_eq!(item.window_id, a);
    assert!(item.minimized);
    assert!(!item.active);

    shell.dispatch(ShellAction::TaskbarItemClicked {
        window_id: a.clone(),
    });
    assert!(!shell.state.registry.is_minimized(&a));
    assert!(shell.panel("a").visible);
    assert!(shell.panel("a").active);
    assert!(shell.projection.taskbar_items()[1].active);

    // A second click on the focused window's item minimizes it again.
    shell.dispatch(ShellAction::TaskbarItemClicked {
        window_id: a.clone(),
    });
    assert!(shell.state.registry.is_minimized(&a));
}

#[test]
fn maximize_twice_restores_prior_geometry() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    shell.drag(1, title_bar("a"), 25, -30);
    let before = shell.panel("a").rect;

    shell.dispatch(ShellAction::TitleBarDoubleClicked {
        window_id: WindowId::new("a"),
    });
    assert!(shell.panel("a").maximized);

    shell.dispatch(ShellAction::WindowControl {
        window_id: WindowId::new("a"),
        control: WindowControl::Maximize,
    });
    assert!(!shell.panel("a").maximized);
    assert_eq!(shell.panel("a").rect, before);
}

#[test]
fn maximized_window_refuses_title_bar_drag() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    shell.dispatch(ShellAction::ToggleMaximize {
        window_id: WindowId::new("a"),
    });
    let before = shell.panel("a").rect;

    shell.dispatch(ShellAction::PointerDown {
        pointer_id: 4,
        target: title_bar("a"),
        pointer: PointerPosition::new(500, 300),
        from_control: false,
    });
    assert!(!shell.interaction.is_active(4));
    shell.dispatch(ShellAction::PointerMove {
        pointer_id: 4,
        pointer: PointerPosition::new(900, 600),
    });
    assert_eq!(shell.panel("a").rect, before);
}

#[test]
fn drags_far_outside_the_viewport_stay_clamped() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");

    shell.drag(1, title_bar("a"), -5000, -5000);
    let rect = shell.panel("a").rect;
    assert_eq!((rect.x, rect.y), (-400 + 100, 0));

    shell.drag(1, title_bar("a"), 5000, 5000);
    let rect = shell.panel("a").rect;
    assert_eq!((rect.x, rect.y), (1024 - 100, 768 - 48 - 50));

    let icon = PointerTarget::Folder(WindowId::new("a"));
    shell.drag(2, icon.clone(), -5000, -5000);
    assert_eq!(
        shell.projection.icon_position(&WindowId::new("a")),
        Some(PointerPosition::new(0, 0))
    );
    shell.drag(2, icon, 5000, 5000);
    assert_eq!(
        shell.projection.icon_position(&WindowId::new("a")),
        Some(PointerPosition::new(1024 - 80, 768 - 48 - 80))
    );
}

#[test]
fn resize_stops_at_the_size_floor() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    let origin = shell.panel("a").rect;

    shell.drag(
        3,
        PointerTarget::ResizeHandle(WindowId::new("a")),
        -1000,
        -1000,
    );
    let rect = shell.panel("a").rect;
    assert_eq!((rect.w, rect.h), (320, 200));
    assert_eq!((rect.x, rect.y), (origin.x, origin.y));
}

#[test]
fn small_folder_movement_still_counts_as_a_click() {
    let mut shell = Shell::new(WIDE, &["a"]);
    let folder = PointerTarget::Folder(WindowId::new("a"));

    shell.drag(1, folder, 2, -2);
    shell.dispatch(ShellAction::FolderClicked {
        window_id: WindowId::new("a"),
    });
    assert!(!shell.state.registry.is_open(&WindowId::new("a")));

    shell.projection.set_viewport(NARROW);
    shell.dispatch(ShellAction::FolderClicked {
        window_id: WindowId::new("a"),
    });
    assert!(shell.state.registry.is_open(&WindowId::new("a")));
}

#[test]
fn a_real_folder_drag_swallows_the_following_click() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.drag(1, PointerTarget::Folder(WindowId::new("a")), 0, 3);
    assert_eq!(shell.state.selected_icon, Some(WindowId::new("a")));

    shell.projection.set_viewport(NARROW);
    shell.dispatch(ShellAction::FolderClicked {
        window_id: WindowId::new("a"),
    });
    assert!(!shell.state.registry.is_open(&WindowId::new("a")));

    shell.dispatch(ShellAction::FolderClicked {
        window_id: WindowId::new("a"),
    });
    assert!(shell.state.registry.is_open(&WindowId::new("a")));
}

#[test]
fn narrow_viewport_disables_drags_and_opens_on_tap() {
    let mut shell = Shell::new(NARROW, &["a"]);
    let start = shell.projection.icon_position(&WindowId::new("a"));

    shell.drag(1, PointerTarget::Folder(WindowId::new("a")), 40, 40);
    assert_eq!(shell.projection.icon_position(&WindowId::new("a")), start);

    shell.dispatch(ShellAction::FolderClicked {
        window_id: WindowId::new("a"),
    });
    assert!(shell.panel("a").visible);
    assert_eq!(
        shell.panel("a").rect,
        WindowRect {
            x: 0,
            y: 0,
            w: 400,
            h: 300
        }
    );
}

#[test]
fn concurrent_sessions_on_different_windows_are_independent() {
    let mut shell = Shell::new(WIDE, &["a", "b"]);
    shell.open("a");
    shell.open("b");
    let a_before = shell.panel("a").rect;
    let b_before = shell.panel("b").rect;

    shell.dispatch(ShellAction::PointerDown {
        pointer_id: 1,
        target: title_bar("a"),
        pointer: PointerPosition::new(100, 100),
        from_control: false,
    });
    shell.dispatch(ShellAction::PointerDown {
        pointer_id: 2,
        target: PointerTarget::ResizeHandle(WindowId::new("b")),
        pointer: PointerPosition::new(700, 500),
        from_control: false,
    });
    shell.dispatch(ShellAction::PointerMove {
        pointer_id: 1,
        pointer: PointerPosition::new(110, 120),
    });
    shell.dispatch(ShellAction::PointerMove {
        pointer_id: 2,
        pointer: PointerPosition::new(750, 520),
    });
    shell.dispatch(ShellAction::PointerUp { pointer_id: 1 });
    shell.dispatch(ShellAction::PointerUp { pointer_id: 2 });

    assert_eq!(shell.panel("a").rect, a_before.offset(10, 20));
    let b = shell.panel("b").rect;
    assert_eq!((b.x, b.y, b.w, b.h), (b_before.x, b_before.y, 450, 320));
    assert_eq!(shell.interaction.active_count(), 0);
}

#[test]
fn missing_elements_abort_without_side_effects() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    let state = shell.state.clone();
    let projection = shell.projection.clone();

    let ghost = WindowId::new("ghost");
    assert_eq!(
        shell.try_dispatch(ShellAction::OpenWindow {
            window_id: ghost.clone()
        }),
        Err(ReducerError::MissingPanel(ghost.clone()))
    );
    assert_eq!(
        shell.try_dispatch(ShellAction::FolderClicked {
            window_id: ghost.clone()
        }),
        Err(ReducerError::MissingIcon(ghost.clone()))
    );
    assert_eq!(
        shell.try_dispatch(ShellAction::PointerDown {
            pointer_id: 9,
            target: PointerTarget::Folder(ghost.clone()),
            pointer: PointerPosition::new(0, 0),
            from_control: false,
        }),
        Err(ReducerError::MissingIcon(ghost))
    );

    assert_eq!(shell.state, state);
    assert_eq!(shell.projection, projection);
    assert!(!shell.interaction.is_active(9));
}

#[test]
fn builtin_catalog_boots_into_a_consistent_desktop() {
    let manifest = folder_shell::builtin_manifest().expect("builtin manifest");
    let mut shell = Shell {
        state: ShellState::new(manifest.shell.clone()),
        interaction: InteractionState::default(),
        projection: manifest.projection(NARROW),
    };

    for action in boot::startup_actions() {
        shell.dispatch(action);
    }
    let positions: Vec<_> = shell
        .projection
        .icons()
        .iter()
        .map(|icon| icon.position)
        .collect();
    assert_eq!(
        positions,
        vec![
            PointerPosition::new(35, 20),
            PointerPosition::new(185, 20),
            PointerPosition::new(335, 20),
            PointerPosition::new(485, 20),
        ]
    );

    for window_id in boot::auto_open_targets(&manifest) {
        shell.dispatch(ShellAction::OpenWindow { window_id });
    }
    let items = shell.projection.taskbar_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].window_id, WindowId::new("about"));
    assert!(items[0].active);
}

#[test]
fn taskbar_falls_back_to_identity_and_generic_glyph() {
    let manifest = folder_shell::builtin_manifest().expect("builtin manifest");
    let mut shell = Shell {
        state: ShellState::new(manifest.shell.clone()),
        interaction: InteractionState::default(),
        projection: manifest.projection(WIDE),
    };
    shell.open("contact");

    let item = &shell.projection.taskbar_items()[0];
    assert_eq!(item.title, "contact");
    assert_eq!(item.glyph, manifest.shell.fallback_glyph);
}

#[test]
fn resize_in_progress_keeps_the_title_bar_from_undoing_it() {
    let mut shell = Shell::new(WIDE, &["a"]);
    shell.open("a");
    let origin = shell.panel("a").rect;

    shell.dispatch(ShellAction::PointerDown {
        pointer_id: 1,
        target: PointerTarget::ResizeHandle(WindowId::new("a")),
        pointer: PointerPosition::new(700, 500),
        from_control: false,
    });
    shell.dispatch(ShellAction::PointerDown {
        pointer_id: 2,
        target: title_bar("a"),
        pointer: PointerPosition::new(400, 250),
        from_control: false,
    });
    assert_eq!(shell.interaction.active_count(), 1);

    shell.dispatch(ShellAction::PointerMove {
        pointer_id: 1,
        pointer: PointerPosition::new(900, 700),
    });
    shell.dispatch(ShellAction::PointerMove {
        pointer_id: 2,
        pointer: PointerPosition::new(410, 260),
    });
    shell.dispatch(ShellAction::PointerUp { pointer_id: 2 });
    shell.dispatch(ShellAction::PointerUp { pointer_id: 1 });

    let resized = WindowRect {
        w: 600,
        h: 500,
        ..origin
    };
    assert_eq!(shell.panel("a").rect, resized);
    assert_eq!(shell.state.geometry.get(&WindowId::new("a")), Some(origin));
}

#[test]
fn window_opened_while_narrow_is_placed_once_the_viewport_widens() {
    let mut shell = Shell::new(NARROW, &["a", "b"]);
    shell.open("a");
    assert_eq!(shell.state.geometry.get(&WindowId::new("a")), None);

    shell.projection.set_viewport(WIDE);
    shell.dispatch(ShellAction::ReflowIcons);

    let placed = WindowRect {
        x: (1024 - 400) / 2,
        y: (768 - 48 - 300) / 2,
        w: 400,
        h: 300,
    };
    assert_eq!(shell.panel("a").rect, placed);
    assert_eq!(shell.state.geometry.get(&WindowId::new("a")), Some(placed));

    shell.drag(1, title_bar("a"), 10, 10);
    shell.dispatch(ShellAction::ReflowIcons);
    assert_eq!(shell.panel("a").rect, placed.offset(10, 10));
}
