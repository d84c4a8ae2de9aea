//! Module implementing the `Color` type.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use csscolorparser::ParseColorError as CssColorParseError;
use image::Rgba;


/// RGBA color of the text (and its shadow).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Create an opaque color from its RGB channels.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 0xff)
    }

    /// Create a white color.
    #[inline]
    pub fn white() -> Self {
        Color::rgb(0xff, 0xff, 0xff)
    }

    /// Create a black color.
    #[inline]
    pub fn black() -> Self {
        Color::rgb(0x0, 0x0, 0x0)
    }

    /// Create a fully transparent color.
    #[inline]
    pub fn transparent() -> Self {
        Color(0x0, 0x0, 0x0, 0x0)
    }
}

impl Color {
    /// Alpha channel of the color.
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.3
    }

    /// Whether the color is invisible when drawn.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.3 == 0
    }

    #[inline]
    pub(crate) fn to_rgba(&self) -> Rgba<u8> {
        let &Color(r, g, b, a) = self;
        Rgba([r, g, b, a])
    }

    /// Convert to `Rgba` with the alpha channel scaled by glyph coverage (0.0 - 1.0).
    #[inline]
    pub(crate) fn with_coverage(&self, coverage: f32) -> Rgba<u8> {
        let &Color(r, g, b, a) = self;
        let coverage = coverage.max(0.0).min(1.0);
        Rgba([r, g, b, (a as f32 * coverage).round() as u8])
    }
}

impl From<Color> for Rgba<u8> {
    #[inline]
    fn from(color: Color) -> Rgba<u8> {
        color.to_rgba()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let &Color(r, g, b, a) = self;
        write!(fmt, "#{:0>2x}{:0>2x}{:0>2x}{:0>2x}", r, g, b, a)
    }
}


impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let mut s = v.trim().to_lowercase();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        // Other hex prefixes are accepted for full-length colors only.
        for &prefix in ["0x", "$"].iter() {
            if s.starts_with(prefix) {
                let digits = &s[prefix.len()..];
                if digits.len() != 6 && digits.len() != 8 {
                    return Err(ColorParseError::Syntax(v.trim().to_owned()));
                }
                s = format!("#{}", digits);
                break;
            }
        }

        let css_color = csscolorparser::parse(&s).map_err(|e| match e {
            CssColorParseError::InvalidUnknown => ColorParseError::UnknownName(v.trim().to_owned()),
            _ => ColorParseError::Syntax(v.trim().to_owned()),
        })?;
        let [r, g, b, a] = css_color.to_rgba8();
        Ok(Color(r, g, b, a))
    }
}


/// Error that may occur while parsing a `Color`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// Empty color string.
    Empty,
    /// Malformed hex notation or color function.
    Syntax(String),
    /// Neither a CSS color notation nor a known color name.
    UnknownName(String),
}

impl Error for ColorParseError {}

impl fmt::Display for ColorParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::Empty => write!(fmt, "empty color"),
            ColorParseError::Syntax(ref s) => write!(fmt, "invalid color syntax: `{}`", s),
            ColorParseError::UnknownName(ref s) => write!(fmt, "unknown color name: `{}`", s),
        }
    }
}
