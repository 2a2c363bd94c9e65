//! tint Color Pipeline
//!
//! Turns free-form color text into a canonical RGBA quadruple and renders it
//! as `rgb(...)`, `#RRGGBBAA` and `Color(0xAARRGGBB)`.
//!
//! # Example
//! ```rust,ignore
//! use tint_color::{ColorParser, FormatEncoder};
//!
//! let color = ColorParser::css().parse("red").unwrap();
//! let out = FormatEncoder::new().encode(&color);
//! assert_eq!(out.hex, "#FF0000FF");
//! ```

mod encoder;
mod model;
mod normalize;
mod parser;
mod resolver;

pub use encoder::{FormatEncoder, FormatKind, FormattedColor};
pub use model::CanonicalColor;
pub use normalize::normalize_punctuation;
pub use parser::ColorParser;
pub use resolver::{ColorResolver, CssColorResolver, FnResolver};

/// Parse and encode in one step using the given resolver
pub fn convert(input: &str, resolver: &dyn ColorResolver) -> Option<FormattedColor> {
    let color = ColorParser::new(resolver).parse(input)?;
    Some(FormatEncoder::new().encode(&color))
}

/// Color construction error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("alpha {0} outside 0.0..=1.0")]
    AlphaOutOfRange(f32),
}
