//! Glyph rendering (pure Rust, no FFI).
//!
//! - [`glyph`]: text + style → premultiplied pixels
//! - [`font`]: the per-overlay font resource and its live counter
//! - [`frame`]: the off-screen buffer handed to the compositor

pub mod font;
pub mod frame;
pub mod glyph;

pub use font::{FontLedger, FontResource};
pub use frame::FrameBuffer;
pub use glyph::GlyphRenderer;
