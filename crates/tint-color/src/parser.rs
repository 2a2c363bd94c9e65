//! Color parser
//!
//! `#RRGGBB` is decoded directly; everything else is handed to the resolver
//! and its normalized hex is decoded the same way.

use crate::model::CanonicalColor;
use crate::normalize::normalize_punctuation;
use crate::resolver::{ColorResolver, CssColorResolver};

/// Color Parser
pub struct ColorParser<R = CssColorResolver> {
    resolver: R,
}

impl<R: ColorResolver> ColorParser<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Resolver shared with anything that needs the same validity judgement
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Parse user input into a canonical color.
    ///
    /// Returns `None` for empty input and for anything that is not a color;
    /// both are normal while the user is still typing. Translucent input such
    /// as `rgba(..., 0.5)` has no conversion and is `None` too.
    pub fn parse(&self, input: &str) -> Option<CanonicalColor> {
        let text = normalize_punctuation(input);
        if text.is_empty() {
            return None;
        }

        if let Some(color) = CanonicalColor::from_hex6(&text) {
            tracing::debug!("Parsed {:?} as direct hex", text);
            return Some(color);
        }

        let hex = self.resolver.resolve(&text)?;
        let color = CanonicalColor::from_hex6(&hex);
        if color.is_none() {
            tracing::warn!("Resolver returned malformed hex {:?} for {:?}", hex, text);
        }
        color
    }
}

impl ColorParser<CssColorResolver> {
    /// Parser backed by the CSS color grammar
    pub fn css() -> Self {
        Self::new(CssColorResolver::new())
    }
}

impl Default for ColorParser<CssColorResolver> {
    fn default() -> Self {
        Self::css()
    }
}
