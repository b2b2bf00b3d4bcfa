//! Color token resolution.
//!
//! A color token is any CSS color string: a keyword (`"tomato"`,
//! `"RebeccaPurple"`), a hex string (`"#f80"`, `"#33bdf4ff"`) or a functional
//! form such as `"hsl(200,90%,58%)"`. Resolution turns a token into a
//! concrete [`HexColor`] or reports why it could not.
//!
//! ```rust
//! use colortimer::color::{ColorResolver, CssColorResolver};
//! use hex_color::HexColor;
//!
//! let resolver = CssColorResolver;
//! assert_eq!(resolver.resolve("red").unwrap(), HexColor::rgb(255, 0, 0));
//! assert_eq!(resolver.resolve("#0000ff").unwrap(), HexColor::rgb(0, 0, 255));
//! assert!(resolver.resolve("not-a-color").is_err());
//! ```

use hex_color::HexColor;
use thiserror::Error;

/// Errors raised while resolving a color token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The token is not a valid CSS color.
    #[error("unknown color {token:?}")]
    UnknownColor {
        /// The token as it appeared in the color specification.
        token: String,
    },
}

/// Looks up color tokens.
///
/// Implement this to plug in a different color table; the encoding pipeline
/// only depends on the trait.
pub trait ColorResolver {
    /// Resolves a single token to a color.
    fn resolve(&self, token: &str) -> Result<HexColor, ColorError>;
}

/// Resolver for CSS color strings.
///
/// Accepts the CSS named colors (case-insensitive), hex strings in the 3, 4,
/// 6 or 8 digit forms, and the functional notations such as
/// `rgb(255 0 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorResolver;

impl ColorResolver for CssColorResolver {
    fn resolve(&self, token: &str) -> Result<HexColor, ColorError> {
        let [r, g, b, a] = csscolorparser::parse(token)
            .map_err(|_| ColorError::UnknownColor {
                token: token.to_string(),
            })?
            .to_rgba8();
        Ok(HexColor::rgba(r, g, b, a))
    }
}

/// Formats a color as `#rrggbb`, dropping alpha.
///
/// ```rust
/// use colortimer::color::to_hex_string;
/// use hex_color::HexColor;
///
/// assert_eq!(to_hex_string(HexColor::rgb(0x33, 0xbd, 0xf4)), "#33bdf4");
/// ```
pub fn to_hex_string(color: HexColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_colors() {
        let resolver = CssColorResolver;
        assert_eq!(resolver.resolve("red"), Ok(HexColor::rgb(255, 0, 0)));
        assert_eq!(resolver.resolve("green"), Ok(HexColor::rgb(0, 128, 0)));
        assert_eq!(
            resolver.resolve("rebeccapurple"),
            Ok(HexColor::rgb(0x66, 0x33, 0x99))
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let resolver = CssColorResolver;
        assert_eq!(resolver.resolve("DodgerBlue"), resolver.resolve("dodgerblue"));
    }

    #[test]
    fn test_resolve_hex_forms() {
        let resolver = CssColorResolver;
        assert_eq!(resolver.resolve("#33bdf4"), Ok(HexColor::rgb(0x33, 0xbd, 0xf4)));
        assert_eq!(resolver.resolve("#f00"), Ok(HexColor::rgb(255, 0, 0)));
    }

    #[test]
    fn test_unknown_tokens_are_errors() {
        let resolver = CssColorResolver;
        for token in ["", "reddish", "#12", "#gggggg", "rgb(1, 2)"] {
            assert_eq!(
                resolver.resolve(token),
                Err(ColorError::UnknownColor {
                    token: token.to_string()
                }),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_error_message_names_token() {
        let err = CssColorResolver.resolve("blurple").unwrap_err();
        assert_eq!(err.to_string(), "unknown color \"blurple\"");
    }

    #[test]
    fn test_grey_spellings_match() {
        let resolver = CssColorResolver;
        assert_eq!(resolver.resolve("gray"), resolver.resolve("grey"));
        assert_eq!(resolver.resolve("aqua"), resolver.resolve("cyan"));
    }

    #[test]
    fn test_resolve_functional_notation() {
        let resolver = CssColorResolver;
        assert_eq!(resolver.resolve("rgb(255, 0, 0)"), resolver.resolve("red"));
    }
}
