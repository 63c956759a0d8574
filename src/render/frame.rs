//! Off-screen pixel buffer handed to the OS compositor.

use tiny_skia::{Pixmap, PremultipliedColorU8};

/// An exactly `width × height` premultiplied RGBA buffer.
///
/// Created fully transparent. Drawing happens through [`FrameBuffer::pixmap_mut`];
/// [`FrameBuffer::write_bgra`] produces the premultiplied BGRA layout
/// `UpdateLayeredWindow` expects.
pub struct FrameBuffer {
    pixmap: Pixmap,
}

impl FrameBuffer {
    /// Allocate a transparent buffer. `None` when a dimension is zero or the
    /// allocation would overflow.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixmap.pixels().len()
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Alpha at `(x, y)`; zero outside the buffer.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    pub fn is_fully_transparent(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Copy into `dst` as premultiplied BGRA, top-down rows.
    ///
    /// `dst` must hold at least `width * height * 4` bytes; extra bytes are left untouched.
    pub fn write_bgra(&self, dst: &mut [u8]) {
        for (out, px) in dst.chunks_exact_mut(4).zip(self.pixmap.pixels()) {
            out[0] = px.blue();
            out[1] = px.green();
            out[2] = px.red();
            out[3] = px.alpha();
        }
    }

    pub fn to_bgra(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.pixel_count() * 4];
        self.write_bgra(&mut out);
        out
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::{Paint, Rect, Transform};

    #[test]
    fn new_buffer_is_transparent_and_sized() {
        let frame = FrameBuffer::new(8, 4).unwrap();
        assert_eq!(frame.pixel_count(), 32);
        assert!(frame.is_fully_transparent());
    }

    #[test]
    fn zero_sized_buffer_is_rejected() {
        assert!(FrameBuffer::new(0, 10).is_none());
    }

    #[test]
    fn bgra_export_swaps_red_and_blue() {
        let mut frame = FrameBuffer::new(2, 1).unwrap();
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 0, 0, 255);
        paint.anti_alias = false;
        frame.pixmap_mut().fill_rect(
            Rect::from_xywh(0.0, 0.0, 1.0, 1.0).unwrap(),
            &paint,
            Transform::identity(),
            None,
        );
        assert_eq!(frame.to_bgra(), vec![0, 0, 255, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn bgra_export_keeps_premultiplication() {
        let mut frame = FrameBuffer::new(1, 1).unwrap();
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 128);
        paint.anti_alias = false;
        frame.pixmap_mut().fill_rect(
            Rect::from_xywh(0.0, 0.0, 1.0, 1.0).unwrap(),
            &paint,
            Transform::identity(),
            None,
        );
        let bgra = frame.to_bgra();
        assert_eq!(bgra[3], 128);
        assert!(bgra[0] <= bgra[3]);
    }

    #[test]
    fn clear_resets_alpha() {
        let mut frame = FrameBuffer::new(1, 1).unwrap();
        frame.pixmap_mut().fill(tiny_skia::Color::WHITE);
        assert!(!frame.is_fully_transparent());
        frame.clear();
        assert!(frame.is_fully_transparent());
    }
}
