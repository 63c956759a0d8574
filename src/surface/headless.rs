//! In-memory surface: records what a native window would have been told.

use crate::error::SurfaceError;
use crate::model::{InteractionMode, SurfaceGeometry};
use crate::render::FrameBuffer;

use super::SurfaceBackend;

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    screen: (i32, i32),
    live: bool,
    shown: bool,
    position: (i32, i32),
    click_through: bool,
    capturing: bool,
    /// Windows created over the backend's lifetime.
    pub windows_created: usize,
    /// Successful presents.
    pub presents: usize,
    /// Capture acquisitions / releases.
    pub captures: usize,
    pub releases: usize,
    /// BGRA bytes of the last successful present.
    pub last_frame: Option<Vec<u8>>,
    /// Next `create` fails with `WindowCreation`.
    pub fail_create: bool,
    /// Every `present` fails with `Presentation` while set.
    pub fail_present: bool,
}

impl HeadlessSurface {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen: (screen_width, screen_height),
            live: false,
            shown: false,
            position: (0, 0),
            click_through: false,
            capturing: false,
            windows_created: 0,
            presents: 0,
            captures: 0,
            releases: 0,
            last_frame: None,
            fail_create: false,
            fail_present: false,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn is_click_through(&self) -> bool {
        self.click_through
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl SurfaceBackend for HeadlessSurface {
    fn screen_size(&self) -> (i32, i32) {
        self.screen
    }

    fn create(&mut self, geometry: &SurfaceGeometry, mode: &InteractionMode) -> Result<(), SurfaceError> {
        if self.fail_create {
            self.fail_create = false;
            return Err(SurfaceError::WindowCreation("simulated failure".into()));
        }
        self.live = true;
        self.shown = false;
        self.position = geometry.origin();
        self.click_through = mode.mouse_transparent;
        self.windows_created += 1;
        Ok(())
    }

    fn destroy(&mut self) {
        self.live = false;
        self.shown = false;
        self.capturing = false;
    }

    fn is_live(&self) -> bool {
        self.live
    }

    fn show(&mut self) {
        self.shown = self.live;
    }

    fn hide(&mut self) {
        self.shown = false;
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn move_to(&mut self, x: i32, y: i32) {
        if self.live {
            self.position = (x, y);
        }
    }

    fn present(&mut self, frame: &FrameBuffer, geometry: &SurfaceGeometry) -> Result<(), SurfaceError> {
        if !self.live {
            return Err(SurfaceError::NotCreated);
        }
        if self.fail_present {
            return Err(SurfaceError::Presentation("simulated failure".into()));
        }
        self.position = geometry.origin();
        self.last_frame = Some(frame.to_bgra());
        self.presents += 1;
        Ok(())
    }

    fn set_click_through(&mut self, enabled: bool) {
        if self.live {
            self.click_through = enabled;
        }
    }

    fn capture_pointer(&mut self) {
        if self.live && !self.capturing {
            self.capturing = true;
            self.captures += 1;
        }
    }

    fn release_pointer(&mut self) {
        if self.capturing {
            self.capturing = false;
            self.releases += 1;
        }
    }
}
