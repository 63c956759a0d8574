//! Render one frame and hand it to the surface.
//!
//! Everything acquired here (the scratch frame, and inside the Win32 backend
//! the DCs and DIB section) lives only for the duration of the call. A failed
//! frame is logged and dropped; whatever was on screen before stays there.

use crate::model::{OverlayContent, OverlayStyle, SurfaceGeometry};
use crate::render::{FontResource, FrameBuffer, GlyphRenderer};
use crate::surface::SurfaceBackend;

/// Render `content` with `style` and present it at `geometry`.
///
/// Returns whether the new frame reached the screen.
pub fn present_frame<B: SurfaceBackend + ?Sized>(
    renderer: &mut GlyphRenderer,
    backend: &mut B,
    font: &mut FontResource,
    content: &OverlayContent,
    style: &OverlayStyle,
    geometry: &SurfaceGeometry,
) -> bool {
    let (width, height) = (geometry.width.max(0) as u32, geometry.height.max(0) as u32);
    let Some(mut frame) = FrameBuffer::new(width, height) else {
        tracing::warn!(width, height, "could not allocate overlay frame; keeping previous frame");
        return false;
    };

    renderer.render_into(&mut frame, &content.text, style, font);

    match backend.present(&frame, geometry) {
        Ok(()) => {
            tracing::trace!(chars = content.text.chars().count(), "overlay frame presented");
            true
        }
        Err(e) if e.is_render_degradation() => {
            tracing::warn!("overlay frame dropped: {}", e);
            false
        }
        Err(e) => {
            tracing::debug!("overlay frame skipped: {}", e);
            false
        }
    }
}
