//! Surface placement and interaction flags.

use super::constants::*;

/// Top-left origin of the overlay in screen coordinates plus its fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self::at(0, 0)
    }
}

impl SurfaceGeometry {
    /// Fixed-size geometry at the given origin.
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }

    /// Horizontally centered, `BOTTOM_MARGIN` above the bottom edge of the screen.
    pub fn default_for_screen(screen_width: i32, screen_height: i32) -> Self {
        Self::at(
            (screen_width - SURFACE_WIDTH) / 2,
            screen_height - SURFACE_HEIGHT - BOTTOM_MARGIN,
        )
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

/// Pointer behaviour of the surface.
///
/// `mouse_transparent` forwards every pointer event to the windows beneath;
/// it is independent of `draggable`, callers coordinate the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionMode {
    pub draggable: bool,
    pub mouse_transparent: bool,
}

impl Default for InteractionMode {
    fn default() -> Self {
        Self {
            draggable: true,
            mouse_transparent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_centered_bottom() {
        let g = SurfaceGeometry::default_for_screen(1920, 1080);
        assert_eq!(g.origin(), (560, 880));
        assert_eq!((g.width, g.height), (SURFACE_WIDTH, SURFACE_HEIGHT));
    }

    #[test]
    fn narrow_screen_gives_negative_x() {
        let g = SurfaceGeometry::default_for_screen(600, 400);
        assert_eq!(g.origin(), (-100, 200));
    }

    #[test]
    fn move_keeps_size() {
        let mut g = SurfaceGeometry::at(1, 2);
        g.move_to(-30, 40);
        assert_eq!(g, SurfaceGeometry::at(-30, 40));
    }

    #[test]
    fn interaction_defaults() {
        let m = InteractionMode::default();
        assert!(m.draggable);
        assert!(!m.mouse_transparent);
    }
}
