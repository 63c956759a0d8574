//! Error type shared by the surface backends.

use std::fmt;

/// Failures raised by a [`SurfaceBackend`](crate::surface::SurfaceBackend).
///
/// Only creation failures ever reach a caller (as `false` from `create()`);
/// the rest are logged and the previous frame stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The native window class could not be registered.
    ClassRegistration(String),
    /// The native window could not be created.
    WindowCreation(String),
    /// The off-screen buffer or its device context could not be allocated.
    BufferAllocation(String),
    /// The compositor rejected the frame.
    Presentation(String),
    /// The surface is not live.
    NotCreated,
}

impl SurfaceError {
    /// True for errors that only cost one frame.
    pub fn is_render_degradation(&self) -> bool {
        matches!(
            self,
            SurfaceError::BufferAllocation(_) | SurfaceError::Presentation(_)
        )
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::ClassRegistration(e) => write!(f, "window class registration failed: {}", e),
            SurfaceError::WindowCreation(e) => write!(f, "window creation failed: {}", e),
            SurfaceError::BufferAllocation(e) => write!(f, "off-screen buffer allocation failed: {}", e),
            SurfaceError::Presentation(e) => write!(f, "layered window update failed: {}", e),
            SurfaceError::NotCreated => write!(f, "surface has not been created"),
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for SurfaceError {
    fn from(e: windows::core::Error) -> Self {
        SurfaceError::WindowCreation(e.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degradation_classification() {
        assert!(SurfaceError::BufferAllocation("dib".into()).is_render_degradation());
        assert!(SurfaceError::Presentation("ulw".into()).is_render_degradation());
        assert!(!SurfaceError::WindowCreation("oom".into()).is_render_degradation());
        assert!(!SurfaceError::NotCreated.is_render_degradation());
    }

    #[test]
    fn display_mentions_cause() {
        let e = SurfaceError::WindowCreation("out of memory".into());
        assert_eq!(e.to_string(), "window creation failed: out of memory");
    }
}
