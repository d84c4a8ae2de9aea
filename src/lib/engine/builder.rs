//! Module implementing the builder for `Engine`.

use std::error::Error as StdError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::model::FontFamily;
use crate::registry::TemplateRegistry;
use crate::resources::{FontError, FontLoader, ImageLoader};
use super::config::Config;
use super::{Engine, TemplateImageLoader};


/// Directory that template images are loaded from by default.
pub const DEFAULT_ASSETS_DIRECTORY: &str = "data";
/// Directory that fonts are loaded from by default.
pub const DEFAULT_FONTS_DIRECTORY: &str = "data/fonts";


/// Builder for `Engine`.
#[derive(Debug)]
#[must_use = "unused builder which must be used"]
pub struct Builder<Il = ImageLoader> {
    image_loader: Il,
    fonts_directory: PathBuf,
    registry: TemplateRegistry,
    config: Config,
}

impl Builder<ImageLoader> {
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}
impl Default for Builder<ImageLoader> {
    fn default() -> Self {
        Builder{
            image_loader: ImageLoader::new(DEFAULT_ASSETS_DIRECTORY),
            fonts_directory: DEFAULT_FONTS_DIRECTORY.into(),
            registry: TemplateRegistry::builtin(),
            config: Config::default(),
        }
    }
}

// Setters.
impl Builder<ImageLoader> {
    /// Set the directory that template images are loaded from.
    #[inline]
    pub fn assets_directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.image_loader = ImageLoader::new(directory); self
    }
}
impl<Il: TemplateImageLoader> Builder<Il> {
    /// Set a custom loader for template images.
    #[inline]
    pub fn image_loader<L: TemplateImageLoader>(self, loader: L) -> Builder<L> {
        Builder{
            image_loader: loader,
            fonts_directory: self.fonts_directory,
            registry: self.registry,
            config: self.config,
        }
    }

    /// Set the directory where the fonts will be loaded from.
    #[inline]
    pub fn fonts_directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.fonts_directory = directory.as_ref().to_owned(); self
    }

    /// Set the font family that names are drawn with.
    #[inline]
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.config.font_family = family; self
    }

    /// Set the size of rendered greetings.
    #[inline]
    pub fn canvas_size(mut self, width: u32, height: u32) -> Self {
        self.config.canvas_width = width;
        self.config.canvas_height = height;
        self
    }

    /// Set the registry of available templates.
    #[inline]
    pub fn registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry; self
    }
}

// Validation & building.
impl<Il: TemplateImageLoader> Builder<Il> {
    /// Build the `Engine`.
    ///
    /// This loads the font, so it fails if none of the font family is available.
    pub fn build(self) -> Result<Engine<Il>, Error> {
        if self.config.canvas_width == 0 || self.config.canvas_height == 0 {
            return Err(Error::EmptyCanvas(self.config.canvas_width, self.config.canvas_height));
        }

        let font_loader = FontLoader::new(&self.fonts_directory);
        let font = font_loader.load_family(&self.config.font_family)?;
        debug!("Engine built with {} template(s), font `{}` and {}x{} canvas",
            self.registry.len(), font.name(),
            self.config.canvas_width, self.config.canvas_height);

        Ok(Engine{
            registry: self.registry,
            image_loader: self.image_loader,
            font: Arc::new(font),
            config: self.config,
        })
    }
}


/// Error that resulted from misconfiguration of the `Engine` via its `Builder`.
#[derive(Debug)]
pub enum Error {
    /// Font that cannot be loaded.
    Font(FontError),
    /// Canvas with no area.
    EmptyCanvas(u32, u32),
}

impl From<FontError> for Error {
    fn from(input: FontError) -> Self {
        Error::Font(input)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Font(ref e) => Some(e),
            Error::EmptyCanvas(..) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Font(ref e) => write!(fmt, "{}", e),
            Error::EmptyCanvas(w, h) => write!(fmt, "invalid canvas size {}x{}", w, h),
        }
    }
}
