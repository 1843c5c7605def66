use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::GraphGeneratorError;

/// A Graphviz color value
///
/// Either a validated hex string or one of the named constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    pub const BLACK: Color = Color(Cow::Borrowed("black"));
    pub const BLUE: Color = Color(Cow::Borrowed("blue"));
    pub const GREEN: Color = Color(Cow::Borrowed("green"));
    pub const GREY: Color = Color(Cow::Borrowed("grey"));
    pub const RED: Color = Color(Cow::Borrowed("red"));

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`, keeping the original casing
    pub fn from_hex(hex: &str) -> Result<Self, GraphGeneratorError> {
        let valid = hex
            .strip_prefix('#')
            .is_some_and(|digits| {
                matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
            });

        if valid {
            Ok(Self(Cow::Owned(hex.to_string())))
        } else {
            Err(GraphGeneratorError::InvalidColor {
                value: hex.to_string(),
            })
        }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Cow::Owned(format!("#{r:02x}{g:02x}{b:02x}")))
    }

    /// Use the low 24 bits of `rgb` as `0xRRGGBB`
    pub fn from_rgb_int(rgb: u32) -> Self {
        Self(Cow::Owned(format!("#{:06x}", rgb & 0x00ff_ffff)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = GraphGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::BLACK),
            "blue" => Ok(Color::BLUE),
            "green" => Ok(Color::GREEN),
            "grey" | "gray" => Ok(Color::GREY),
            "red" => Ok(Color::RED),
            _ => Color::from_hex(s),
        }
    }
}
