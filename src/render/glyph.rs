//! Text rasterization: one centered line, optional outline stroke.
//!
//! Shaping, font fallback and glyph outlines come from cosmic-text;
//! paths, strokes and anti-aliasing from tiny-skia. The output is
//! premultiplied, so it can go straight to a per-pixel-alpha window.

use cosmic_text::{Buffer, CacheKey, Command, FontSystem, Shaping, SwashCache, SwashContent};
use tiny_skia::{FillRule, LineJoin, Mask, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::font::FontResource;
use super::frame::FrameBuffer;
use crate::model::OverlayStyle;

/// A glyph positioned on the canvas (integer origin on the baseline).
struct PlacedGlyph {
    cache_key: CacheKey,
    x: i32,
    y: i32,
}

/// Owns the font database. Glyph rasters live in the [`FontResource`].
///
/// Creating one scans the system fonts, so a live overlay keeps a single
/// renderer and reuses it for every frame.
pub struct GlyphRenderer {
    font_system: FontSystem,
}

impl GlyphRenderer {
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        if font_system.db().is_empty() {
            tracing::warn!("no system fonts found; lyric text will render empty");
        } else {
            tracing::debug!(faces = font_system.db().len(), "font database loaded");
        }
        Self { font_system }
    }

    /// True when at least one font face is installed.
    pub fn has_fonts(&self) -> bool {
        !self.font_system.db().is_empty()
    }

    /// Render into a fresh `width × height` buffer.
    ///
    /// `None` only if the buffer cannot be allocated (zero or oversized dimensions).
    pub fn render(
        &mut self,
        text: &str,
        style: &OverlayStyle,
        font: &mut FontResource,
        width: u32,
        height: u32,
    ) -> Option<FrameBuffer> {
        let mut frame = FrameBuffer::new(width, height)?;
        self.render_into(&mut frame, text, style, font);
        Some(frame)
    }

    /// Clear `frame` to transparent and draw `text` centered in it.
    pub fn render_into(
        &mut self,
        frame: &mut FrameBuffer,
        text: &str,
        style: &OverlayStyle,
        font: &mut FontResource,
    ) {
        frame.clear();
        if text.is_empty() {
            return;
        }

        let glyphs = self.layout_line(text, font, frame.width(), frame.height());
        if glyphs.is_empty() {
            return;
        }

        if style.has_stroke() {
            self.draw_outlined(frame.pixmap_mut(), font.glyph_cache(), &glyphs, style);
        } else {
            self.draw_filled(frame.pixmap_mut(), font.glyph_cache(), &glyphs, style);
        }
    }

    /// Shape a single line and center it in the canvas.
    fn layout_line(
        &mut self,
        text: &str,
        font: &FontResource,
        width: u32,
        height: u32,
    ) -> Vec<PlacedGlyph> {
        // Single-line overlay: line breaks become spaces.
        let line: String = text
            .chars()
            .map(|c| if matches!(c, '\r' | '\n') { ' ' } else { c })
            .collect();

        let mut buffer = Buffer::new(&mut self.font_system, font.metrics());
        buffer.set_text(&mut self.font_system, &line, font.attrs(), Shaping::Advanced);

        let Some(run) = buffer.layout_runs().next() else {
            return Vec::new();
        };

        let origin_x = (width as f32 - run.line_w) / 2.0;
        let line_top = (height as f32 - run.line_height) / 2.0;
        let baseline = line_top + (run.line_y - run.line_top);

        run.glyphs
            .iter()
            .map(|glyph| {
                let physical = glyph.physical((origin_x, baseline), 1.0);
                PlacedGlyph {
                    cache_key: physical.cache_key,
                    x: physical.x,
                    y: physical.y,
                }
            })
            .collect()
    }

    /// Stroke the combined outline path, then fill it on top.
    fn draw_outlined(
        &mut self,
        pixmap: &mut Pixmap,
        cache: &mut SwashCache,
        glyphs: &[PlacedGlyph],
        style: &OverlayStyle,
    ) {
        let mut pb = PathBuilder::new();
        for glyph in glyphs {
            let Some(commands) = cache.get_outline_commands(&mut self.font_system, glyph.cache_key)
            else {
                continue;
            };
            let ox = glyph.x as f32 + glyph.cache_key.x_bin.as_float();
            let oy = glyph.y as f32 + glyph.cache_key.y_bin.as_float();
            // Outlines are y-up around the glyph origin.
            for command in commands {
                match *command {
                    Command::MoveTo(p) => pb.move_to(ox + p.x, oy - p.y),
                    Command::LineTo(p) => pb.line_to(ox + p.x, oy - p.y),
                    Command::QuadTo(c, p) => pb.quad_to(ox + c.x, oy - c.y, ox + p.x, oy - p.y),
                    Command::CurveTo(c1, c2, p) => pb.cubic_to(
                        ox + c1.x,
                        oy - c1.y,
                        ox + c2.x,
                        oy - c2.y,
                        ox + p.x,
                        oy - p.y,
                    ),
                    Command::Close => pb.close(),
                }
            }
        }

        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;

        paint.set_color(style.stroke_color.to_skia());
        let stroke = Stroke {
            width: style.stroke_width_px as f32,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);

        paint.set_color(style.fill_color.to_skia());
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Paint glyph coverage masks with the fill color; no path is built.
    fn draw_filled(
        &mut self,
        pixmap: &mut Pixmap,
        cache: &mut SwashCache,
        glyphs: &[PlacedGlyph],
        style: &OverlayStyle,
    ) {
        let (width, height) = (pixmap.width(), pixmap.height());
        let Some(mut coverage) = Mask::new(width, height) else {
            return;
        };

        for glyph in glyphs {
            let Some(image) = cache.get_image(&mut self.font_system, glyph.cache_key)
            else {
                continue;
            };

            let stride = match image.content {
                SwashContent::Mask => 1,
                SwashContent::Color => 4,
                // Subpixel masks carry one coverage value per channel; use green.
                SwashContent::SubpixelMask => 4,
            };
            let alpha_index = match image.content {
                SwashContent::Mask => 0,
                SwashContent::Color => 3,
                SwashContent::SubpixelMask => 1,
            };

            let glyph_x = glyph.x + image.placement.left;
            let glyph_y = glyph.y - image.placement.top;
            let glyph_w = image.placement.width as usize;
            if glyph_w == 0 {
                continue;
            }

            let data = coverage.data_mut();
            for (row_idx, row) in image.data.chunks(glyph_w * stride).enumerate() {
                let py = glyph_y + row_idx as i32;
                if py < 0 || py >= height as i32 {
                    continue;
                }
                for col_idx in 0..glyph_w {
                    let px = glyph_x + col_idx as i32;
                    if px < 0 || px >= width as i32 {
                        continue;
                    }
                    let Some(&alpha) = row.get(col_idx * stride + alpha_index) else {
                        continue;
                    };
                    let offset = py as usize * width as usize + px as usize;
                    data[offset] = data[offset].max(alpha);
                }
            }
        }

        let Some(rect) = Rect::from_xywh(0.0, 0.0, width as f32, height as f32) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(style.fill_color.to_skia());
        paint.anti_alias = false;
        pixmap.fill_rect(rect, &paint, Transform::identity(), Some(&coverage));
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}
