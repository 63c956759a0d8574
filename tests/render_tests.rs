//! Glyph rendering properties, checked on the public renderer.
//!
//! Tests that need glyphs return early on hosts without any system font.

use desktop_lyric::model::{Argb, OverlayStyle};
use desktop_lyric::{FontLedger, FrameBuffer, GlyphRenderer, HeadlessSurface, LyricOverlay};

const W: u32 = 800;
const H: u32 = 100;

fn render(renderer: &mut GlyphRenderer, text: &str, style: &OverlayStyle) -> FrameBuffer {
    let mut font = FontLedger::new().create(style.font_size_px);
    renderer.render(text, style, &mut font, W, H).unwrap()
}

fn style(stroke_width_px: u32) -> OverlayStyle {
    OverlayStyle {
        font_size_px: 72,
        fill_color: Argb::WHITE,
        stroke_color: Argb::BLACK,
        stroke_width_px,
    }
}

/// Every pixel in the `radius` neighbourhood of (x, y) is fully opaque.
fn deep_inside(frame: &FrameBuffer, x: u32, y: u32, radius: u32) -> bool {
    if x < radius || y < radius || x + radius >= frame.width() || y + radius >= frame.height() {
        return false;
    }
    (y - radius..=y + radius).all(|ny| (x - radius..=x + radius).all(|nx| frame.alpha_at(nx, ny) == 255))
}

#[test]
fn empty_text_is_fully_transparent() {
    let mut renderer = GlyphRenderer::new();
    let frame = render(&mut renderer, "", &style(5));
    assert_eq!((frame.width(), frame.height()), (W, H));
    assert!(frame.is_fully_transparent());
}

#[test]
fn stroke_changes_edges_but_not_interiors() {
    let mut renderer = GlyphRenderer::new();
    if !renderer.has_fonts() {
        return;
    }

    let plain = render(&mut renderer, "HELLO", &style(0));
    let outlined = render(&mut renderer, "HELLO", &style(5));
    assert!(!plain.is_fully_transparent());

    let mut differs = false;
    let mut interior = 0;
    for y in 0..H {
        for x in 0..W {
            if plain.pixel(x, y) != outlined.pixel(x, y) {
                differs = true;
            }
            if deep_inside(&plain, x, y, 3) {
                interior += 1;
                assert_eq!(plain.pixel(x, y), outlined.pixel(x, y), "interior pixel ({x}, {y}) changed");
            }
        }
    }
    assert!(differs, "stroke pass left the frame unchanged");
    assert!(interior > 0, "no interior pixels to compare");
}

#[test]
fn outline_extends_beyond_fill() {
    let mut renderer = GlyphRenderer::new();
    if !renderer.has_fonts() {
        return;
    }
    let count = |f: &FrameBuffer| f.pixmap().pixels().iter().filter(|p| p.alpha() > 0).count();

    let plain = render(&mut renderer, "Lyric", &style(0));
    let outlined = render(&mut renderer, "Lyric", &style(6));
    assert!(count(&outlined) > count(&plain));
}

#[test]
fn fill_color_reaches_the_surface_as_bgra() {
    let mut overlay = LyricOverlay::new(HeadlessSurface::default());
    overlay.create();
    if !GlyphRenderer::new().has_fonts() {
        return;
    }
    overlay.set_stroke_width(0);
    overlay.set_font_size(64);
    overlay.set_fill_color(0xFFFF_0000);
    overlay.set_lyric_text("MMMM");
    overlay.show();

    let bgra = overlay.backend().last_frame.as_ref().unwrap();
    let solid = bgra.chunks_exact(4).find(|px| px[3] == 255).expect("no opaque pixel");
    assert_eq!(solid, &[0, 0, 255, 255]);
}

#[test]
fn half_alpha_fill_reads_back_as_argb() {
    let mut renderer = GlyphRenderer::new();
    if !renderer.has_fonts() {
        return;
    }
    let style = OverlayStyle {
        font_size_px: 64,
        fill_color: Argb(0x80FF_0000),
        stroke_width_px: 0,
        ..style(0)
    };
    let frame = render(&mut renderer, "MMMM", &style);

    let densest = frame
        .pixmap()
        .pixels()
        .iter()
        .max_by_key(|p| p.alpha())
        .copied()
        .unwrap();
    let color = densest.demultiply();
    assert_eq!(
        (color.alpha(), color.red(), color.green(), color.blue()),
        (128, 255, 0, 0)
    );
}

#[test]
fn repeated_renders_do_not_grow_the_glyph_cache() {
    let mut renderer = GlyphRenderer::new();
    let mut font = FontLedger::new().create(32);
    renderer.render("same line", &style(2), &mut font, W, H).unwrap();
    let cached = font.cached_glyphs();
    for _ in 0..20 {
        renderer.render("same line", &style(2), &mut font, W, H).unwrap();
    }
    assert_eq!(font.cached_glyphs(), cached);
}

#[test]
fn transparent_colors_draw_nothing() {
    let mut renderer = GlyphRenderer::new();
    let style = OverlayStyle {
        fill_color: Argb(0x00FF_FFFF),
        stroke_color: Argb(0x0000_0000),
        ..style(4)
    };
    let frame = render(&mut renderer, "invisible", &style);
    assert!(frame.is_fully_transparent());
}

#[test]
fn text_wider_than_surface_is_clipped_not_rejected() {
    let mut renderer = GlyphRenderer::new();
    let long = "la ".repeat(200);
    let frame = render(&mut renderer, &long, &style(2));
    assert_eq!((frame.width(), frame.height()), (W, H));
}
