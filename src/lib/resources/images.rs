//! Module for loading the background images of templates.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use image::{self, DynamicImage, ImageError};

use super::Loader;


/// Loader of template background images.
///
/// Resource names are image sources relative to the assets directory,
/// e.g. `templates/template1.png`.
#[derive(Clone, Debug)]
pub struct ImageLoader {
    directory: PathBuf,
}

impl ImageLoader {
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        ImageLoader{directory: directory.as_ref().to_owned()}
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the image with given source.
    pub fn path_for(&self, src: &str) -> PathBuf {
        self.directory.join(src.trim_start_matches('/'))
    }
}

impl Loader for ImageLoader {
    type Item = DynamicImage;
    type Err = LoadError;

    fn load<'n>(&self, src: &'n str) -> Result<DynamicImage, LoadError> {
        let path = self.path_for(src);
        trace!("Loading image {}", path.display());
        let img = image::open(&path).map_err(|e| match e {
            ImageError::IoError(e) => LoadError::Io(path.clone(), e),
            e => LoadError::Decode(path.clone(), e),
        })?;
        debug!("Image {} loaded ({}x{})", path.display(), img.width(), img.height());
        Ok(img)
    }
}


/// Error that may occur while loading a template's background.
#[derive(Debug)]
pub enum LoadError {
    /// Template identifier that isn't in the registry.
    UnknownTemplate(String),
    /// Image file that cannot be read.
    Io(PathBuf, io::Error),
    /// Image file that cannot be decoded.
    Decode(PathBuf, ImageError),
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            LoadError::UnknownTemplate(..) => None,
            LoadError::Io(_, ref e) => Some(e),
            LoadError::Decode(_, ref e) => Some(e),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoadError::UnknownTemplate(ref id) => write!(fmt, "unknown template `{}`", id),
            LoadError::Io(ref p, ref e) => write!(fmt, "cannot read image {}: {}", p.display(), e),
            LoadError::Decode(ref p, ref e) =>
                write!(fmt, "cannot decode image {}: {}", p.display(), e),
        }
    }
}
