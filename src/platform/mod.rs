//! Platform-specific implementations.
//!
//! Only Windows has a native surface; other hosts use
//! [`HeadlessSurface`](crate::surface::HeadlessSurface).

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;
