//! RGB color values parsed from theme strings.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Error returned when a theme color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: {0:?}")]
pub struct ParseColorError(pub String);

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

/// Named colors accepted in place of a hex string.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::new(0x00, 0x00, 0x00)),
    ("silver", Color::new(0xC0, 0xC0, 0xC0)),
    ("gray", Color::new(0x80, 0x80, 0x80)),
    ("white", Color::new(0xFF, 0xFF, 0xFF)),
    ("maroon", Color::new(0x80, 0x00, 0x00)),
    ("red", Color::new(0xFF, 0x00, 0x00)),
    ("purple", Color::new(0x80, 0x00, 0x80)),
    ("fuchsia", Color::new(0xFF, 0x00, 0xFF)),
    ("green", Color::new(0x00, 0x80, 0x00)),
    ("lime", Color::new(0x00, 0xFF, 0x00)),
    ("olive", Color::new(0x80, 0x80, 0x00)),
    ("yellow", Color::new(0xFF, 0xFF, 0x00)),
    ("navy", Color::new(0x00, 0x00, 0x80)),
    ("blue", Color::new(0x00, 0x00, 0xFF)),
    ("teal", Color::new(0x00, 0x80, 0x80)),
    ("aqua", Color::new(0x00, 0xFF, 0xFF)),
];

impl Color {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb` or a named color.
    ///
    /// Trailing alpha digits (`#rrggbbaa`, `#rgba`) are accepted and ignored,
    /// since terminals cannot blend.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError(s.to_string());

        let Some(hex) = s.strip_prefix('#') else {
            return NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == s)
                .map(|(_, color)| *color)
                .ok_or_else(err);
        };
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        match hex.len() {
            6 | 8 => Ok(Self::new(
                hex_value(&hex[0..2]).ok_or_else(err)?,
                hex_value(&hex[2..4]).ok_or_else(err)?,
                hex_value(&hex[4..6]).ok_or_else(err)?,
            )),
            3 | 4 => {
                let digit = |i: usize| hex_value(&hex[i..i + 1]).map(|n| n * 0x11);
                Ok(Self::new(
                    digit(0).ok_or_else(err)?,
                    digit(1).ok_or_else(err)?,
                    digit(2).ok_or_else(err)?,
                ))
            }
            _ => Err(err()),
        }
    }
}

fn hex_value(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Color::parse("#1e77d3"), Ok(Color::new(0x1E, 0x77, 0xD3)));
        assert_eq!(Color::parse("#1E77D3"), Ok(Color::new(0x1E, 0x77, 0xD3)));
    }

    #[test]
    fn parse_short_hex() {
        assert_eq!(Color::parse("#ccc"), Ok(Color::new(0xCC, 0xCC, 0xCC)));
        assert_eq!(Color::parse("#f80"), Ok(Color::new(0xFF, 0x88, 0x00)));
    }

    #[test]
    fn parse_named() {
        assert_eq!(Color::parse("white"), Ok(Color::new(0xFF, 0xFF, 0xFF)));
        assert_eq!(Color::parse("black"), Ok(Color::new(0x00, 0x00, 0x00)));
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(Color::parse("#10203040"), Ok(Color::new(0x10, 0x20, 0x30)));
        assert_eq!(Color::parse("#abc8"), Ok(Color::new(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "#+1+2+3", "Whit", "rgb(1,2,3)"] {
            assert_eq!(
                Color::parse(bad),
                Err(ParseColorError(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_is_lowercase_hex() {
        let c: Color = "#ABCDEF".parse().unwrap();
        assert_eq!(c.to_string(), "#abcdef");
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#abcdef\"");
    }
}
