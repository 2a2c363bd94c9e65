//! Canonical color value
//!
//! 8-bit sRGB channels plus a floating point alpha in `0.0..=1.0`.

use crate::ColorError;

/// Canonical RGBA color
///
/// Channels are bytes so they are always in range. Alpha is private and only
/// settable through checked constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    a: f32,
}

impl CanonicalColor {
    pub const BLACK: CanonicalColor = CanonicalColor { r: 0, g: 0, b: 0, a: 1.0 };
    pub const WHITE: CanonicalColor = CanonicalColor { r: 255, g: 255, b: 255, a: 1.0 };

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha, rejecting NaN and values outside `0.0..=1.0`
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorError::AlphaOutOfRange(a));
        }
        Ok(Self { r, g, b, a })
    }

    /// Decode `#RRGGBB` (case-insensitive). Anything else yields `None`,
    /// including the 3 and 8 digit forms.
    pub fn from_hex6(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    pub fn alpha(&self) -> f32 {
        self.a
    }

    /// Alpha scaled to a byte: `round(a * 255)`, ties away from zero
    pub fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round() as u8
    }
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self::BLACK
    }
}
