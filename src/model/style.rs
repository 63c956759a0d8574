//! Text style and content (pure Rust, no FFI).

use super::constants::*;

/// A packed 32-bit color laid out as `(A << 24) | (R << 16) | (G << 8) | B`.
///
/// Every value is legal, including zero alpha (laid out but invisible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const WHITE: Self = Self(DEFAULT_FILL_COLOR);
    pub const BLACK: Self = Self(DEFAULT_STROKE_COLOR);
    pub const TRANSPARENT: Self = Self(0);

    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Split into `(a, r, g, b)`.
    pub const fn channels(self) -> (u8, u8, u8, u8) {
        (
            ((self.0 >> 24) & 0xFF) as u8,
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Convert to a tiny-skia color (straight alpha).
    pub fn to_skia(self) -> tiny_skia::Color {
        let (a, r, g, b) = self.channels();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        let (a, r, g, b) = self.channels();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` and surrounding whitespace are optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let t = s.trim();
        let t = t.strip_prefix('#').unwrap_or(t);
        let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_channels(255, byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_channels(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }
}

impl From<u32> for Argb {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Argb> for u32 {
    fn from(c: Argb) -> Self {
        c.0
    }
}

/// Visual style of the lyric line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Font size in pixels.
    pub font_size_px: u32,
    /// Glyph interior color.
    pub fill_color: Argb,
    /// Outline color.
    pub stroke_color: Argb,
    /// Outline width in pixels. Zero disables the stroke pass entirely.
    pub stroke_width_px: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            fill_color: Argb(DEFAULT_FILL_COLOR),
            stroke_color: Argb(DEFAULT_STROKE_COLOR),
            stroke_width_px: DEFAULT_STROKE_WIDTH_PX,
        }
    }
}

impl OverlayStyle {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.font_size_px = self.font_size_px.clamp(1, MAX_FONT_SIZE_PX);
        self.stroke_width_px = self.stroke_width_px.min(MAX_STROKE_WIDTH_PX);
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke_width_px > 0
    }
}

/// Convert a bridge-supplied pixel count; negatives become zero.
pub fn px_from_i32(v: i32) -> u32 {
    v.max(0) as u32
}

/// System accent color, or the fixed fallback when it could not be read.
pub fn accent_or_default(raw: Option<u32>) -> Argb {
    Argb(raw.unwrap_or(FALLBACK_ACCENT_COLOR))
}

/// The text currently shown. Empty means "render nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayContent {
    pub text: String,
}

impl OverlayContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode UTF-16 from the bridge; unpaired surrogates become U+FFFD.
    pub fn from_utf16(units: &[u16]) -> Self {
        Self {
            text: String::from_utf16_lossy(units),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_follow_argb_byte_order() {
        assert_eq!(Argb(0x80FF_0000).channels(), (128, 255, 0, 0));
        assert_eq!(Argb(0x1122_3344).channels(), (0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn from_channels_packs_in_order() {
        assert_eq!(Argb::from_channels(0x11, 0x22, 0x33, 0x44), Argb(0x1122_3344));
    }

    #[test]
    fn zero_alpha_is_legal() {
        let c = Argb(0x00FF_FFFF);
        assert_eq!(c.alpha(), 0);
        assert_eq!(c.to_skia().alpha(), 0.0);
    }

    #[test]
    fn hex_parses_rgb_and_rgba() {
        assert_eq!(Argb::parse_hex("#FF0080"), Some(Argb(0xFFFF_0080)));
        assert_eq!(Argb::parse_hex(" ff000080 "), Some(Argb(0x80FF_0000)));
        assert!(Argb::parse_hex("#FFF").is_none());
        assert!(Argb::parse_hex("#GG0000").is_none());
    }

    #[test]
    fn hex_omits_alpha_when_opaque() {
        assert_eq!(Argb(0xFF33_6699).to_hex(), "#336699");
        assert_eq!(Argb(0xCC11_2233).to_hex(), "#112233CC");
    }

    #[test]
    fn validate_clamps_font_size_and_stroke() {
        let mut style = OverlayStyle {
            font_size_px: 0,
            stroke_width_px: 1000,
            ..Default::default()
        };
        style.validate();
        assert_eq!(style.font_size_px, 1);
        assert_eq!(style.stroke_width_px, MAX_STROKE_WIDTH_PX);
    }

    #[test]
    fn negative_bridge_values_become_zero() {
        assert_eq!(px_from_i32(-5), 0);
        assert_eq!(px_from_i32(24), 24);
    }

    #[test]
    fn accent_falls_back_when_unreadable() {
        assert_eq!(accent_or_default(None), Argb(0xFF00_78D4));
        assert_eq!(accent_or_default(Some(0xC428_6ECB)), Argb(0xC428_6ECB));
    }

    #[test]
    fn utf16_content_is_decoded() {
        let units: Vec<u16> = "歌词 lyric".encode_utf16().collect();
        assert_eq!(OverlayContent::from_utf16(&units).text, "歌词 lyric");
        assert!(OverlayContent::from_utf16(&[]).is_empty());
    }
}
