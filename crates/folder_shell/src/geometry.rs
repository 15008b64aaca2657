//! Pure geometry helpers shared by the lifecycle, interaction, and layout controllers.

use crate::{
    config::ShellConfig,
    model::{PointerPosition, Viewport, WindowRect},
};

/// Clamps `value` into `[min, max]`. When the range is empty `min` wins, so callers always get a
/// position whose top-left corner is reachable.
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Returns the area available to windows: the viewport minus the taskbar band.
pub fn work_area(viewport: Viewport, taskbar_height: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.width,
        h: (viewport.height - taskbar_height).max(0),
    }
}

pub fn is_narrow(viewport: Viewport, breakpoint: i32) -> bool {
    viewport.width <= breakpoint
}

/// Whether a pointer delta is large enough to be treated as a drag.
pub fn exceeds_threshold(dx: i32, dy: i32, threshold: i32) -> bool {
    dx.abs() >= threshold || dy.abs() >= threshold
}

/// Default placement for a window opened without saved geometry: centered in the work area,
/// shifted by one cascade step per already-open window, never closer than the minimum inset.
pub fn cascade_position(
    config: &ShellConfig,
    viewport: Viewport,
    size: (i32, i32),
    open_count: usize,
) -> PointerPosition {
    let area = work_area(viewport, config.taskbar_height_px);
    let offset = config.cascade_step_px * open_count as i32;
    PointerPosition {
        x: ((area.w - size.0) / 2 + offset).max(config.min_inset_x_px),
        y: ((area.h - size.1) / 2 + offset).max(config.min_inset_y_px),
    }
}

/// Clamps a dragged window so part of it stays reachable: at least `window_reach_x_px` of its
/// width on either side and its title bar between the top edge and the taskbar.
pub fn clamp_window_position(
    config: &ShellConfig,
    viewport: Viewport,
    rect: WindowRect,
) -> PointerPosition {
    let area = work_area(viewport, config.taskbar_height_px);
    PointerPosition {
        x: clamp(
            rect.x,
            -rect.w + config.window_reach_x_px,
            area.w - config.window_reach_x_px,
        ),
        y: clamp(rect.y, 0, area.h - config.window_reach_y_px),
    }
}

/// Clamps a dragged folder icon fully inside the work area.
pub fn clamp_icon_position(
    config: &ShellConfig,
    viewport: Viewport,
    position: PointerPosition,
) -> PointerPosition {
    let area = work_area(viewport, config.taskbar_height_px);
    PointerPosition {
        x: clamp(position.x, 0, area.w - config.icon_size_px),
        y: clamp(position.y, 0, area.h - config.icon_size_px),
    }
}

/// Applies a bottom-right resize delta with the configured size floor.
pub fn clamp_resize(config: &ShellConfig, origin: WindowRect, dx: i32, dy: i32) -> WindowRect {
    WindowRect {
        w: (origin.w + dx).max(config.min_window_width),
        h: (origin.h + dy).max(config.min_window_height),
        ..origin
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clamp_prefers_minimum_for_empty_range() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(50, 0, 10), 10);
        assert_eq!(clamp(50, 20, 10), 20);
    }

    #[test]
    fn narrow_mode_includes_breakpoint() {
        assert!(is_narrow(Viewport::new(640, 900), 640));
        assert!(!is_narrow(Viewport::new(641, 900), 640));
    }

    #[test]
    fn threshold_uses_either_axis() {
        assert!(!exceeds_threshold(2, -2, 3));
        assert!(exceeds_threshold(3, 0, 3));
        assert!(exceeds_threshold(0, -3, 3));
    }

    #[test]
    fn cascade_centers_then_offsets_and_respects_insets() {
        let config = ShellConfig::default();
        let viewport = Viewport::new(1200, 848);

        assert_eq!(
            cascade_position(&config, viewport, (600, 400), 0),
            PointerPosition::new(300, 200)
        );
        assert_eq!(
            cascade_position(&config, viewport, (600, 400), 2),
            PointerPosition::new(360, 260)
        );

        let tiny = Viewport::new(500, 300);
        assert_eq!(
            cascade_position(&config, tiny, (600, 400), 0),
            PointerPosition::new(40, 20)
        );
    }

    #[test]
    fn window_clamp_keeps_reachable_strip() {
        let config = ShellConfig::default();
        let viewport = Viewport::new(1000, 748);
        let rect = WindowRect {
            x: -5000,
            y: -5000,
            w: 400,
            h: 300,
        };
        assert_eq!(
            clamp_window_position(&config, viewport, rect),
            PointerPosition::new(-300, 0)
        );

        let far = WindowRect {
            x: 5000,
            y: 5000,
            ..rect
        };
        assert_eq!(
            clamp_window_position(&config, viewport, far),
            PointerPosition::new(900, 650)
        );
    }

    #[test]
    fn icon_clamp_stays_inside_work_area() {
        let config = ShellConfig::default();
        let viewport = Viewport::new(800, 600);
        assert_eq!(
            clamp_icon_position(&config, viewport, PointerPosition::new(9000, 9000)),
            PointerPosition::new(720, 472)
        );
        assert_eq!(
            clamp_icon_position(&config, viewport, PointerPosition::new(-10, -10)),
            PointerPosition::new(0, 0)
        );
    }

    #[test]
    fn resize_floors_at_minimum_size() {
        let config = ShellConfig::default();
        let origin = WindowRect {
            x: 10,
            y: 10,
            w: 500,
            h: 400,
        };
        assert_eq!(
            clamp_resize(&config, origin, -1000, -1000),
            WindowRect {
                x: 10,
                y: 10,
                w: 320,
                h: 200
            }
        );
        assert_eq!(clamp_resize(&config, origin, 20, 30).w, 520);
    }
}
