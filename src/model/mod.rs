//! Overlay domain model.
//!
//! Pure data (no FFI dependencies): style, content, geometry and
//! interaction flags, plus the constants they default to.
//!
//! Platform-specific window handling lives in `platform::windows`.

pub mod constants;
pub mod geometry;
pub mod style;

pub use constants::*;
pub use geometry::{InteractionMode, SurfaceGeometry};
pub use style::{accent_or_default, Argb, OverlayContent, OverlayStyle};
