//! The native-window seam.
//!
//! [`SurfaceBackend`] is everything the lifecycle manager needs from the OS:
//! a layered, topmost, non-activating window that can be shown, moved,
//! made click-through, given a frame, and asked to capture the pointer.
//!
//! - `platform::windows::Win32Surface`: the real one
//! - [`HeadlessSurface`]: an in-memory stand-in for tests and non-Windows hosts

pub mod headless;

pub use headless::HeadlessSurface;

use crate::error::SurfaceError;
use crate::model::{InteractionMode, SurfaceGeometry};
use crate::render::FrameBuffer;

pub trait SurfaceBackend {
    /// Screen size used for the default placement.
    fn screen_size(&self) -> (i32, i32);

    /// Create the native window at `geometry`, applying `mode`.
    /// Called only while no window is live.
    fn create(&mut self, geometry: &SurfaceGeometry, mode: &InteractionMode) -> Result<(), SurfaceError>;

    /// Destroy the native window. No-op when none is live.
    fn destroy(&mut self);

    fn is_live(&self) -> bool;

    /// Show without activating.
    fn show(&mut self);

    fn hide(&mut self);

    fn is_shown(&self) -> bool;

    /// Reposition without resizing or re-rendering.
    fn move_to(&mut self, x: i32, y: i32);

    /// Replace the visible content with `frame` at `geometry`, in one update.
    fn present(&mut self, frame: &FrameBuffer, geometry: &SurfaceGeometry) -> Result<(), SurfaceError>;

    /// Toggle the pass-through bit that forwards pointer input to windows beneath.
    fn set_click_through(&mut self, enabled: bool);

    fn capture_pointer(&mut self);

    fn release_pointer(&mut self);
}
