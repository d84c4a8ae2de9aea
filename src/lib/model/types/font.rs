//! Module defining font descriptions.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::model::constants::DEFAULT_FONT_FAMILY;


/// Ordered list of font family names, the first available of which is used.
///
/// Parsed from a CSS-like descriptor such as `"BrandFont", Arial`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontFamily(Vec<String>);

impl FontFamily {
    /// Create a family list from given names.
    /// Blank names are skipped.
    pub fn new<I, S>(names: I) -> Result<Self, FontFamilyParseError>
        where I: IntoIterator<Item=S>, S: Into<String>
    {
        let names: Vec<String> = names.into_iter()
            .map(|n| { let n: String = n.into(); n.trim().to_owned() })
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(FontFamilyParseError);
        }
        Ok(FontFamily(names))
    }

    /// Names of the families, in the order of preference.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.0[..]
    }

    /// The most preferred family name.
    #[inline]
    pub fn primary(&self) -> &str {
        &self.0[0]
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        DEFAULT_FONT_FAMILY.parse()
            .unwrap_or_else(|_| FontFamily(vec![DEFAULT_FONT_FAMILY.to_owned()]))
    }
}

impl FromStr for FontFamily {
    type Err = FontFamilyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::new(s.split(',').map(|name| {
            let name = name.trim();
            let quoted = name.len() >= 2 && (
                (name.starts_with('"') && name.ends_with('"')) ||
                (name.starts_with('\'') && name.ends_with('\'')));
            if quoted { &name[1..name.len() - 1] } else { name }
        }))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0.iter().format_with(", ", |name, f| {
            if name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
                f(name)
            } else {
                f(&format_args!("\"{}\"", name))
            }
        }))
    }
}


/// Error for when a font family descriptor names no families at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontFamilyParseError;

impl Error for FontFamilyParseError {}

impl fmt::Display for FontFamilyParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "no font family names given")
    }
}


/// Weight of the font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    /// Numeric (CSS) value of the weight.
    pub fn value(&self) -> u16 {
        match *self {
            FontWeight::Normal => 400,
            FontWeight::Bold => 700,
        }
    }
}


/// Complete description of the font that text is measured & drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontSpec<'f> {
    pub weight: FontWeight,
    /// Size in pixels.
    pub size: u32,
    pub family: &'f FontFamily,
}

impl<'f> FontSpec<'f> {
    /// Bold font of given size.
    #[inline]
    pub fn bold(size: u32, family: &'f FontFamily) -> Self {
        FontSpec{weight: FontWeight::Bold, size, family}
    }
}

impl<'f> fmt::Display for FontSpec<'f> {
    /// Format the font like the CSS `font` shorthand property.
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} {}px {}", self.weight.value(), self.size, self.family)
    }
}
