//! Color resolution
//!
//! A `ColorResolver` decides whether a string is an opaque color and, if so,
//! what sRGB value it names. Both live parsing and history admission go
//! through the same resolver so they never disagree.

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;

/// Maps color text to a lowercase `#rrggbb`, or `None` when the text is not
/// a recognized opaque color.
pub trait ColorResolver {
    fn resolve(&self, text: &str) -> Option<String>;
}

impl<R: ColorResolver + ?Sized> ColorResolver for &R {
    fn resolve(&self, text: &str) -> Option<String> {
        (**self).resolve(text)
    }
}

impl<R: ColorResolver + ?Sized> ColorResolver for Box<R> {
    fn resolve(&self, text: &str) -> Option<String> {
        (**self).resolve(text)
    }
}

/// Resolver backed by a closure
pub struct FnResolver<F>(pub F);

impl<F> ColorResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, text: &str) -> Option<String> {
        (self.0)(text)
    }
}

/// Resolver using the CSS `<color>` grammar
///
/// Accepts named colors, 3/4/6/8 digit hex, `rgb()`/`rgba()`, `hsl()`,
/// `hwb()` and anything else lightningcss can bring into sRGB. A `#rrggbb`
/// answer has no room for alpha, so translucent colors (`transparent`,
/// `rgba(255, 0, 0, 0.5)`, `#ff000080`) are rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct CssColorResolver;

impl CssColorResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ColorResolver for CssColorResolver {
    fn resolve(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let color = match CssColor::parse_string(text) {
            Ok(color) => color,
            Err(e) => {
                tracing::trace!("Not a CSS color {:?}: {:?}", text, e);
                return None;
            }
        };

        let rgba = match color {
            CssColor::RGBA(rgba) => rgba,
            // Depends on the element being styled
            CssColor::CurrentColor => return None,
            other => match other.to_rgb() {
                Ok(CssColor::RGBA(rgba)) => rgba,
                _ => {
                    tracing::debug!("CSS color {:?} has no sRGB form", text);
                    return None;
                }
            },
        };

        if rgba.alpha < u8::MAX {
            tracing::trace!("CSS color {:?} is translucent (alpha {})", text, rgba.alpha);
            return None;
        }

        Some(format!("#{:02x}{:02x}{:02x}", rgba.red, rgba.green, rgba.blue))
    }
}
