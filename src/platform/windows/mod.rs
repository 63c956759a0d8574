//! Windows implementation using the Win32 API.
//!
//! - `surface`: layered popup window implementing `SurfaceBackend`
//! - `present`: DIB section + `UpdateLayeredWindow`
//! - `window`: window class, window procedure, handle registry
//! - `theme`: system accent color

pub mod present;
pub mod surface;
pub mod theme;
pub mod window;

pub use surface::Win32Surface;
pub use theme::accent_color;
pub use window::DesktopLyricWindow;
