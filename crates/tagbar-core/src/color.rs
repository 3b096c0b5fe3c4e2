//! Paint colors for the toggle button.
//!
//! Label colors are free-form strings and never pass through here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Straight-alpha RGBA, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Opacity
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Fully see-through.
    pub const TRANSPARENT: Self = Self {
        a: 0.0,
        ..Self::BLACK
    };

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color; out-of-range channels are clamped.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        let unit = |v: f32| v.clamp(0.0, 1.0);
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Opaque color; channels are clamped.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) {
            return Err(ColorParseError::InvalidLength);
        }

        let channel = |i: usize| -> Result<f32, ColorParseError> {
            let byte = digits
                .get(i..i + 2)
                .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(ColorParseError::InvalidHex)?;
            Ok(f32::from(byte) / 255.0)
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Blend toward `other`; `t` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: f32, to: f32| (to - from).mul_add(t, from);
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// A pair of digits is not hexadecimal
    #[error("invalid hex characters")]
    InvalidHex,
    /// Not 6 or 8 digits after the optional `#`
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Color::BLACK, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(Color::WHITE, Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(Color::TRANSPARENT, Color::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_new_clamps_each_channel() {
        assert_eq!(
            Color::new(1.5, -0.5, 0.25, 2.0),
            Color::new(1.0, 0.0, 0.25, 1.0)
        );
    }

    #[test]
    fn test_from_hex_accepts_optional_hash() {
        assert_eq!(Color::from_hex("#3377ff"), Color::from_hex("3377ff"));
        assert_eq!(Color::from_hex("00ff00"), Ok(Color::rgb(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_from_hex_alpha_channel() {
        let c = Color::from_hex("#ffffff00").expect("rgba hex");
        assert_eq!(c.a, 0.0);
        assert_eq!(c.r, 1.0);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(Color::from_hex("#12345"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("##123456"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("zz0000"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_from_hex_rejects_sign_prefixed_pairs() {
        assert_eq!(Color::from_hex("#+f+f+f"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("+fffffff"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_from_hex_non_ascii_is_invalid_hex() {
        // 6 bytes, but not on char boundaries for every pair
        assert_eq!(Color::from_hex("ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_lerp_endpoints_and_clamp() {
        let accent = Color::rgb(0.2, 0.4, 0.8);
        assert_eq!(accent.lerp(&Color::WHITE, 0.0), accent);
        assert_eq!(Color::BLACK.lerp(&Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(&Color::WHITE, 3.0), Color::WHITE);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
        assert_eq!(ColorParseError::InvalidHex.to_string(), "invalid hex characters");
    }
}
