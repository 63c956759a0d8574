//! Tests for the model layer and the config that feeds it.

use desktop_lyric::config::OverlayConfig;
use desktop_lyric::model::constants::*;
use desktop_lyric::model::{accent_or_default, Argb, InteractionMode, OverlayStyle, SurfaceGeometry};

// === Default Values Tests ===

#[test]
fn style_default_font_size() {
    assert_eq!(OverlayStyle::default().font_size_px, 32);
}

#[test]
fn style_default_colors() {
    let style = OverlayStyle::default();
    assert_eq!(style.fill_color, Argb(0xFFFF_FFFF));
    assert_eq!(style.stroke_color, Argb(0xFF00_0000));
}

#[test]
fn style_default_stroke_width() {
    let style = OverlayStyle::default();
    assert_eq!(style.stroke_width_px, 2);
    assert!(style.has_stroke());
}

#[test]
fn interaction_default_is_draggable_and_clickable() {
    let mode = InteractionMode::default();
    assert!(mode.draggable);
    assert!(!mode.mouse_transparent);
}

// === Geometry Tests ===

#[test]
fn default_placement_is_centered_above_bottom_margin() {
    let g = SurfaceGeometry::default_for_screen(1920, 1080);
    assert_eq!((g.x, g.y), (560, 880));
    assert_eq!((g.width, g.height), (SURFACE_WIDTH, SURFACE_HEIGHT));
}

#[test]
fn default_placement_on_small_screen_can_go_negative() {
    let g = SurfaceGeometry::default_for_screen(640, 150);
    assert_eq!((g.x, g.y), (-80, -50));
}

// === Color Tests ===

#[test]
fn color_channels_are_argb() {
    let (a, r, g, b) = Argb(0x80FF_0000).channels();
    assert_eq!((a, r, g, b), (128, 255, 0, 0));
}

#[test]
fn accent_fallback_is_windows_blue() {
    assert_eq!(accent_or_default(None), Argb(FALLBACK_ACCENT_COLOR));
    assert_eq!(FALLBACK_ACCENT_COLOR, 0xFF00_78D4);
}

// === Config Tests ===

#[test]
fn config_round_trips_through_json() {
    let config = OverlayConfig {
        font_size: 28,
        fill_color: "#FFCC00".into(),
        draggable: false,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: OverlayConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn config_clamps_out_of_range_sizes() {
    let config: OverlayConfig =
        serde_json::from_str(r#"{ "font_size": 0, "stroke_width": 1000 }"#).unwrap();
    let style = config.style();
    assert_eq!(style.font_size_px, 1);
    assert_eq!(style.stroke_width_px, MAX_STROKE_WIDTH_PX);
}

#[test]
fn config_empty_object_is_default() {
    let config: OverlayConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, OverlayConfig::default());
    assert!(!config.debug_logging);
}
