//! Module for loading fonts used to draw the names.

use std::error::Error;
use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;

use rusttype;

use crate::model::FontFamily;
use super::Loader;
use super::filesystem::{BytesLoader, PathLoader};


/// Extensions of the font files that can be loaded.
pub const FILE_EXTENSIONS: &[&str] = &["ttf", "otf"];


/// Font that names can be drawn with.
pub struct Font {
    name: String,
    inner: rusttype::Font<'static>,
}

impl Font {
    /// Create the font from the content of a font file.
    pub fn from_bytes<N: Into<String>>(name: N, bytes: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        match rusttype::Font::try_from_vec(bytes) {
            Some(inner) => Ok(Font{name, inner}),
            None => Err(FontError::Invalid(name)),
        }
    }

    /// Name of the font, as it was requested.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({:?})", self.name)
    }
}


/// Loader of fonts from a directory of font files.
///
/// A font called `Foo` is loaded from a `Foo.ttf` or `Foo.otf` file.
#[derive(Debug)]
pub struct FontLoader {
    inner: BytesLoader,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::new(
                PathLoader::for_extensions(directory, FILE_EXTENSIONS.iter()))
        }
    }

    /// Load the first font of the family that is available.
    ///
    /// The names of a family are tried in order, like a browser does with CSS `font-family`.
    pub fn load_family(&self, family: &FontFamily) -> Result<Font, FontError> {
        for name in family.names() {
            match self.load(name) {
                Ok(font) => {
                    debug!("Using font `{}` of family {}", name, family);
                    return Ok(font);
                }
                Err(e) => warn!("Font `{}` unavailable, trying the next one: {}", name, e),
            }
        }
        error!("None of the fonts of family {} could be loaded", family);
        Err(FontError::NoneAvailable(family.clone()))
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load<'n>(&self, name: &'n str) -> Result<Font, FontError> {
        let bytes = self.inner.load(name)
            .map_err(|e| FontError::Io(name.to_owned(), e))?;
        let font = Font::from_bytes(name, bytes)?;
        debug!("Font `{}` loaded successfully ({} glyphs)", name, font.glyph_count());
        Ok(font)
    }
}


/// Error that may occur while loading a font.
#[derive(Debug)]
pub enum FontError {
    /// Font file that cannot be found or read.
    Io(String, io::Error),
    /// Font file with unusable content.
    Invalid(String),
    /// Font family without a single font that could be loaded.
    NoneAvailable(FontFamily),
}

impl Error for FontError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            FontError::Io(_, ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontError::Io(ref name, ref e) => write!(fmt, "cannot read font `{}`: {}", name, e),
            FontError::Invalid(ref name) => write!(fmt, "font `{}` is not a valid font file", name),
            FontError::NoneAvailable(ref family) => write!(fmt, "no font of {} available", family),
        }
    }
}
