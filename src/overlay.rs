//! Surface lifecycle manager: the object an external UI bridge talks to.
//!
//! `LyricOverlay` exclusively owns the native surface (through its backend),
//! the font resource, the glyph renderer and the current style, text,
//! geometry and interaction values. Per-frame operations never fail from
//! the caller's point of view; only `create()` reports status.

use crate::compositor;
use crate::interaction::{DragAction, DragTracker};
use crate::model::style::px_from_i32;
use crate::model::{Argb, InteractionMode, OverlayContent, OverlayStyle, SurfaceGeometry};
use crate::render::{FontLedger, FontResource, GlyphRenderer};
use crate::surface::SurfaceBackend;

pub struct LyricOverlay<B: SurfaceBackend> {
    backend: B,
    renderer: Option<GlyphRenderer>,
    fonts: FontLedger,
    font: Option<FontResource>,
    style: OverlayStyle,
    content: OverlayContent,
    geometry: SurfaceGeometry,
    mode: InteractionMode,
    drag: DragTracker,
}

impl<B: SurfaceBackend> LyricOverlay<B> {
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, OverlayStyle::default(), InteractionMode::default())
    }

    /// Start from a given style and interaction mode (e.g. loaded from config).
    pub fn with_settings(backend: B, mut style: OverlayStyle, mode: InteractionMode) -> Self {
        style.validate();
        Self {
            backend,
            renderer: None,
            fonts: FontLedger::new(),
            font: None,
            style,
            content: OverlayContent::default(),
            geometry: SurfaceGeometry::default(),
            mode,
            drag: DragTracker::new(),
        }
    }

    // === Lifecycle ===

    /// Create the native surface. Idempotent: returns `true` straight away when live.
    pub fn create(&mut self) -> bool {
        if self.backend.is_live() {
            return true;
        }

        let (sw, sh) = self.backend.screen_size();
        let geometry = SurfaceGeometry::default_for_screen(sw, sh);

        if let Err(e) = self.backend.create(&geometry, &self.mode) {
            tracing::error!("desktop lyric surface creation failed: {}", e);
            return false;
        }

        self.geometry = geometry;
        self.drag.reset();
        self.rebuild_font();
        if self.renderer.is_none() {
            self.renderer = Some(GlyphRenderer::new());
        }
        tracing::info!(x = geometry.x, y = geometry.y, "desktop lyric surface created");
        true
    }

    /// Bridge name for [`create`](Self::create).
    pub fn initialize(&mut self) -> bool {
        self.create()
    }

    /// Release pointer capture, the window and the font. Safe to repeat.
    pub fn destroy(&mut self) {
        self.surface_destroyed();
        if self.backend.is_live() {
            self.backend.destroy();
            tracing::info!("desktop lyric surface destroyed");
        }
        self.font = None;
    }

    pub fn is_created(&self) -> bool {
        self.backend.is_live()
    }

    // === Visibility ===

    /// Render the current state, then show without activating.
    pub fn show(&mut self) {
        if !self.backend.is_live() {
            return;
        }
        self.present();
        self.backend.show();
    }

    pub fn hide(&mut self) {
        if self.backend.is_live() {
            self.backend.hide();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.backend.is_live() && self.backend.is_shown()
    }

    // === Content and style ===

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = OverlayContent::new(text);
        self.refresh();
    }

    /// Bridge name for [`set_text`](Self::set_text).
    pub fn set_lyric_text(&mut self, text: &str) {
        self.set_text(text);
    }

    pub fn set_text_utf16(&mut self, units: &[u16]) {
        self.content = OverlayContent::from_utf16(units);
        self.refresh();
    }

    pub fn text(&self) -> &str {
        &self.content.text
    }

    /// Change the font size, replacing the font resource.
    pub fn set_font_size(&mut self, px: i32) {
        self.style.font_size_px = px_from_i32(px);
        self.style.validate();
        if self.backend.is_live() {
            self.rebuild_font();
        }
        self.refresh();
    }

    pub fn set_fill_color(&mut self, argb: u32) {
        self.style.fill_color = Argb(argb);
        self.refresh();
    }

    /// Bridge name for [`set_fill_color`](Self::set_fill_color).
    pub fn set_text_color(&mut self, argb: u32) {
        self.set_fill_color(argb);
    }

    pub fn set_stroke_color(&mut self, argb: u32) {
        self.style.stroke_color = Argb(argb);
        self.refresh();
    }

    /// Zero disables the outline.
    pub fn set_stroke_width(&mut self, px: i32) {
        self.style.stroke_width_px = px_from_i32(px);
        self.style.validate();
        self.refresh();
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    // === Geometry ===

    /// Move without re-rendering.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.geometry.move_to(x, y);
        if self.backend.is_live() {
            self.backend.move_to(x, y);
        }
    }

    pub fn position(&self) -> (i32, i32) {
        self.geometry.origin()
    }

    /// Bridge name for [`position`](Self::position).
    pub fn get_position(&self) -> (i32, i32) {
        self.position()
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    // === Interaction ===

    pub fn set_draggable(&mut self, draggable: bool) {
        self.mode.draggable = draggable;
    }

    pub fn set_mouse_transparent(&mut self, transparent: bool) {
        self.mode.mouse_transparent = transparent;
        if self.backend.is_live() {
            self.backend.set_click_through(transparent);
        }
    }

    pub fn interaction_mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn drag_tracker(&self) -> &DragTracker {
        &self.drag
    }

    /// Primary button pressed at `screen_pt`.
    pub fn pointer_down(&mut self, screen_pt: (i32, i32)) {
        if !self.backend.is_live() {
            return;
        }
        let action = self
            .drag
            .pointer_down(screen_pt, self.geometry.origin(), self.mode.draggable);
        self.apply(action);
    }

    pub fn pointer_move(&mut self, screen_pt: (i32, i32)) {
        let action = self.drag.pointer_move(screen_pt);
        self.apply(action);
    }

    pub fn pointer_up(&mut self) {
        let action = self.drag.pointer_up();
        self.apply(action);
    }

    /// The OS revoked pointer capture.
    pub fn capture_lost(&mut self) {
        self.drag.capture_lost();
    }

    /// The native window is going away underneath us.
    pub fn surface_destroyed(&mut self) {
        let action = self.drag.surface_destroyed();
        self.apply(action);
    }

    // === Introspection ===

    /// Live font resources (0 before `create()`/after `destroy()`, otherwise 1).
    pub fn live_font_resources(&self) -> usize {
        self.fonts.live()
    }

    /// The live font resource, with its glyph cache.
    pub fn font(&self) -> Option<&FontResource> {
        self.font.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // === Internals ===

    fn apply(&mut self, action: Option<DragAction>) {
        match action {
            Some(DragAction::Capture) => self.backend.capture_pointer(),
            Some(DragAction::MoveTo(x, y)) => {
                self.geometry.move_to(x, y);
                self.backend.move_to(x, y);
            }
            Some(DragAction::Release) => self.backend.release_pointer(),
            None => {}
        }
    }

    /// Drop the old font (and its cached glyphs) before creating the new one;
    /// never two at once.
    fn rebuild_font(&mut self) {
        self.font = None;
        self.font = Some(self.fonts.create(self.style.font_size_px));
    }

    /// Re-present only when the surface is on screen.
    fn refresh(&mut self) {
        if self.is_visible() {
            self.present();
        }
    }

    fn present(&mut self) {
        let (Some(renderer), Some(font)) = (self.renderer.as_mut(), self.font.as_mut()) else {
            return;
        };
        compositor::present_frame(
            renderer,
            &mut self.backend,
            font,
            &self.content,
            &self.style,
            &self.geometry,
        );
    }
}

impl<B: SurfaceBackend> Drop for LyricOverlay<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    fn overlay() -> LyricOverlay<HeadlessSurface> {
        LyricOverlay::new(HeadlessSurface::new(1920, 1080))
    }

    #[test]
    fn create_places_centered_bottom() {
        let mut o = overlay();
        assert!(o.create());
        assert_eq!(o.position(), (560, 880));
        assert_eq!(o.backend().position(), (560, 880));
    }

    #[test]
    fn create_failure_reports_false_and_allocates_nothing() {
        let mut backend = HeadlessSurface::default();
        backend.fail_create = true;
        let mut o = LyricOverlay::new(backend);
        assert!(!o.create());
        assert!(!o.is_created());
        assert_eq!(o.live_font_resources(), 0);
        assert!(o.create());
    }

    #[test]
    fn create_applies_configured_click_through() {
        let mode = InteractionMode {
            draggable: false,
            mouse_transparent: true,
        };
        let mut o = LyricOverlay::with_settings(HeadlessSurface::default(), OverlayStyle::default(), mode);
        o.create();
        assert!(o.backend().is_click_through());
    }

    #[test]
    fn hidden_setters_do_not_present() {
        let mut o = overlay();
        o.create();
        o.set_text("hidden");
        o.set_fill_color(0xFF00_FF00);
        o.set_stroke_width(4);
        assert_eq!(o.backend().presents, 0);
        o.show();
        assert_eq!(o.backend().presents, 1);
        assert_eq!(o.style().stroke_width_px, 4);
    }

    #[test]
    fn visible_setters_present_each_time() {
        let mut o = overlay();
        o.create();
        o.show();
        o.set_text("a");
        o.set_stroke_color(0xFF12_3456);
        o.set_font_size(40);
        assert_eq!(o.backend().presents, 4);
    }

    #[test]
    fn set_position_moves_without_render() {
        let mut o = overlay();
        o.create();
        o.show();
        let presents = o.backend().presents;
        o.set_position(-20, 15);
        assert_eq!(o.get_position(), (-20, 15));
        assert_eq!(o.backend().position(), (-20, 15));
        assert_eq!(o.backend().presents, presents);
    }

    #[test]
    fn negative_sizes_clamp() {
        let mut o = overlay();
        o.set_stroke_width(-3);
        assert_eq!(o.style().stroke_width_px, 0);
        o.set_font_size(-1);
        assert_eq!(o.style().font_size_px, 1);
    }

    #[test]
    fn destroy_while_dragging_releases_capture() {
        let mut o = overlay();
        o.create();
        o.pointer_down((600, 900));
        assert!(o.backend().is_capturing());
        o.destroy();
        assert!(!o.backend().is_capturing());
        assert_eq!(o.backend().releases, 1);
        assert_eq!(o.live_font_resources(), 0);
    }

    #[test]
    fn pointer_events_before_create_are_ignored() {
        let mut o = overlay();
        o.pointer_down((10, 10));
        o.pointer_move((30, 30));
        assert_eq!(o.position(), (0, 0));
        assert_eq!(o.backend().captures, 0);
    }

    #[test]
    fn recreate_after_destroy_accepts_drags_again() {
        let mut o = overlay();
        o.create();
        o.destroy();
        assert!(o.create());
        o.pointer_down((600, 900));
        assert!(o.drag_tracker().is_dragging());
    }
}
