//! Desktop lyric overlay: an always-on-top, per-pixel-alpha text surface with
//! outlined glyphs and drag-to-move.
//!
//! Everything except `platform` is free of FFI so tests run as normal
//! integration tests on any host, using [`HeadlessSurface`] in place of a window.

pub mod compositor;
pub mod config;
pub mod error;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod overlay;
pub mod platform;
pub mod render;
pub mod surface;

// Re-export the bridge-facing types for convenience
pub use error::SurfaceError;
pub use interaction::{DragAction, DragState, DragTracker};
pub use model::{Argb, InteractionMode, OverlayContent, OverlayStyle, SurfaceGeometry};
pub use overlay::LyricOverlay;
pub use render::{FontLedger, FontResource, FrameBuffer, GlyphRenderer};
pub use surface::{HeadlessSurface, SurfaceBackend};

#[cfg(target_os = "windows")]
pub use platform::windows::{accent_color, DesktopLyricWindow, Win32Surface};
