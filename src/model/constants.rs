//! Configuration constants and default values.
//!
//! This module contains the overlay's visual defaults, fixed surface
//! dimensions and validation limits.

// === Visual Defaults ===

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE_PX: u32 = 32;

/// Default fill color (ARGB) - white, fully opaque.
pub const DEFAULT_FILL_COLOR: u32 = 0xFFFF_FFFF;

/// Default stroke color (ARGB) - black, fully opaque.
pub const DEFAULT_STROKE_COLOR: u32 = 0xFF00_0000;

/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH_PX: u32 = 2;

/// Preferred display font family. Missing families fall back to sans-serif.
pub const FONT_FAMILY: &str = "Microsoft YaHei";

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// === Surface Geometry ===

/// Overlay surface width in pixels (fixed for the overlay's lifetime).
pub const SURFACE_WIDTH: i32 = 800;

/// Overlay surface height in pixels (fixed for the overlay's lifetime).
pub const SURFACE_HEIGHT: i32 = 100;

/// Gap between the bottom of the surface and the bottom of the screen
/// when the overlay is first placed.
pub const BOTTOM_MARGIN: i32 = 100;

// === Validation Limits ===

/// Largest font size accepted by the setters; bigger values are clamped.
pub const MAX_FONT_SIZE_PX: u32 = 512;

/// Largest stroke width accepted by the setters; bigger values are clamped.
pub const MAX_STROKE_WIDTH_PX: u32 = 64;

// === System Theme ===

/// Accent color used when the OS configuration store cannot be read
/// (Windows 11 default blue).
pub const FALLBACK_ACCENT_COLOR: u32 = 0xFF00_78D4;
