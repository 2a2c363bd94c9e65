//! Output formats
//!
//! The hex form is `#RRGGBBAA` (alpha last) while the packed literal is
//! `Color(0xAARRGGBB)` (alpha first). Both orders are part of the output
//! contract.

use std::fmt;

use crate::model::CanonicalColor;

/// Which of the three outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Rgb,
    Hex,
    PackedLiteral,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [FormatKind::Rgb, FormatKind::Hex, FormatKind::PackedLiteral];

    pub fn label(self) -> &'static str {
        match self {
            FormatKind::Rgb => "RGB",
            FormatKind::Hex => "Hex",
            FormatKind::PackedLiteral => "Packed",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three textual renderings of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedColor {
    /// `rgb(R, G, B)`, alpha never included
    pub rgb: String,
    /// `#RRGGBBAA`, uppercase
    pub hex: String,
    /// `Color(0xAARRGGBB)`, uppercase
    pub packed_literal: String,
}

impl FormattedColor {
    pub fn get(&self, kind: FormatKind) -> &str {
        match kind {
            FormatKind::Rgb => &self.rgb,
            FormatKind::Hex => &self.hex,
            FormatKind::PackedLiteral => &self.packed_literal,
        }
    }
}

/// Format Encoder
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatEncoder;

impl FormatEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, color: &CanonicalColor) -> FormattedColor {
        FormattedColor {
            rgb: self.rgb(color),
            hex: self.hex(color),
            packed_literal: self.packed_literal(color),
        }
    }

    fn rgb(&self, c: &CanonicalColor) -> String {
        format!("rgb({}, {}, {})", c.r, c.g, c.b)
    }

    fn hex(&self, c: &CanonicalColor) -> String {
        // Leading 1 bit keeps the width at 7 digits so leading zero bytes survive
        let packed = (1u32 << 24) | (u32::from(c.r) << 16) | (u32::from(c.g) << 8) | u32::from(c.b);
        let digits = format!("{:X}", packed);
        format!("#{}{:02X}", &digits[1..], c.alpha_byte())
    }

    fn packed_literal(&self, c: &CanonicalColor) -> String {
        format!(
            "Color(0x{:02X}{:02X}{:02X}{:02X})",
            c.alpha_byte(),
            c.r,
            c.g,
            c.b
        )
    }
}
