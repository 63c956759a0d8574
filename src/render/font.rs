//! Font resource held by a live overlay.
//!
//! A [`FontResource`] pins the family, weight and pixel size the renderer
//! shapes with, and owns the rasterized glyphs and outlines for that size.
//! Dropping it frees them. Each one is counted by the [`FontLedger`] that
//! created it and uncounted when dropped, so "exactly one live font" is
//! observable.

use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

use cosmic_text::{Attrs, Family, Metrics, SwashCache, Weight};

use crate::model::constants::{FONT_FAMILY, LINE_HEIGHT_FACTOR};

/// Counts font resources that are currently alive.
#[derive(Debug, Clone, Default)]
pub struct FontLedger {
    live: Rc<Cell<usize>>,
}

impl FontLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Create a bold font resource of the display family at `size_px`.
    pub fn create(&self, size_px: u32) -> FontResource {
        self.live.set(self.live.get() + 1);
        tracing::debug!(size_px, live = self.live.get(), "font resource created");
        FontResource {
            size_px: size_px.max(1),
            weight: Weight::BOLD,
            glyphs: SwashCache::new(),
            ledger: Rc::clone(&self.live),
        }
    }
}

/// Bold display font at a fixed pixel size.
#[derive(Debug)]
pub struct FontResource {
    size_px: u32,
    weight: Weight,
    glyphs: SwashCache,
    ledger: Rc<Cell<usize>>,
}

impl FontResource {
    pub fn size_px(&self) -> u32 {
        self.size_px
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Pixel metrics (line height is `LINE_HEIGHT_FACTOR` × size).
    pub fn metrics(&self) -> Metrics {
        let size = self.size_px as f32;
        Metrics::new(size, size * LINE_HEIGHT_FACTOR)
    }

    /// Shaping attributes. cosmic-text falls back to the system sans-serif
    /// when the family is missing and still matches the requested weight.
    pub fn attrs(&self) -> Attrs<'static> {
        Attrs::new().family(Family::Name(FONT_FAMILY)).weight(self.weight)
    }

    pub(crate) fn glyph_cache(&mut self) -> &mut SwashCache {
        &mut self.glyphs
    }

    /// Rasterized images plus outlines held for this font.
    pub fn cached_glyphs(&self) -> usize {
        self.glyphs.image_cache.len() + self.glyphs.outline_command_cache.len()
    }

    /// Distinct pixel sizes present in the glyph cache.
    pub fn cached_sizes_px(&self) -> Vec<f32> {
        let bits: BTreeSet<u32> = self
            .glyphs
            .image_cache
            .keys()
            .chain(self.glyphs.outline_command_cache.keys())
            .map(|key| key.font_size_bits)
            .collect();
        bits.into_iter().map(f32::from_bits).collect()
    }
}

impl Drop for FontResource {
    fn drop(&mut self) {
        self.ledger.set(self.ledger.get().saturating_sub(1));
        tracing::debug!(size_px = self.size_px, live = self.ledger.get(), "font resource released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_live_resources() {
        let ledger = FontLedger::new();
        let a = ledger.create(48);
        assert_eq!(ledger.live(), 1);
        let b = ledger.create(24);
        assert_eq!(ledger.live(), 2);
        drop(a);
        assert_eq!(ledger.live(), 1);
        drop(b);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn metrics_are_in_pixels() {
        let font = FontLedger::new().create(40);
        let m = font.metrics();
        assert_eq!(m.font_size, 40.0);
        assert!((m.line_height - 48.0).abs() < 1e-3);
        assert_eq!(font.weight(), Weight::BOLD);
    }

    #[test]
    fn new_font_starts_with_empty_glyph_cache() {
        let font = FontLedger::new().create(24);
        assert_eq!(font.cached_glyphs(), 0);
        assert!(font.cached_sizes_px().is_empty());
    }

    #[test]
    fn zero_size_is_raised_to_one() {
        assert_eq!(FontLedger::new().create(0).size_px(), 1);
    }
}
