//! Color type shared by the pool, the rasterizer and every host surface.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color, laid out exactly like one pixel of an RGBA32 texture.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable,
    Serialize, Deserialize,
)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Background written around the circle. Consumers composite by alpha only,
/// so the color channels are zeroed as well.
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse a hex color string like `"#RRGGBB"` or `"#RRGGBBAA"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let s = hex.strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2)?, 16).ok();
        match s.len() {
            6 => Some(Self::opaque(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Format into `#rrggbb` or `#rrggbbaa` (lowercase hex).
    pub fn to_hex(&self, alpha: bool) -> String {
        if alpha {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Default ripple tint.
pub fn default_color() -> Rgba {
    Rgba::opaque(120, 200, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_roundtrip() {
        let h = "#78c8ff";
        let parsed = Rgba::from_hex(h).expect("parsed");
        assert_eq!(parsed, default_color());
        assert_eq!(parsed.to_hex(false), h);

        let h2 = "#11223344";
        let p2 = Rgba::from_hex(h2).expect("parsed2");
        assert_eq!(p2, Rgba::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(p2.to_hex(true), h2);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgba::from_hex("78c8ff").is_none());
        assert!(Rgba::from_hex("#78c8f").is_none());
        assert!(Rgba::from_hex("#zzzzzz").is_none());
        assert!(Rgba::from_hex("#ééé").is_none());
    }

    #[test]
    fn transparent_sentinel_is_all_zero() {
        assert!(TRANSPARENT.is_transparent());
        assert_eq!(bytemuck::cast_slice::<Rgba, u8>(&[TRANSPARENT]), &[0, 0, 0, 0]);
    }
}
