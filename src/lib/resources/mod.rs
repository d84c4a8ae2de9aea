//! Module handling the resources used for rendering greetings.

mod filesystem;
mod fonts;
mod images;


pub use self::filesystem::{BytesLoader, PathLoader};
pub use self::fonts::{Font, FontError, FontLoader, FILE_EXTENSIONS as FONT_FILE_EXTENSIONS};
pub use self::images::{ImageLoader, LoadError};


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource of given name.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err>;
}

impl<'l, L: Loader + ?Sized> Loader for &'l L {
    type Item = L::Item;
    type Err = L::Err;

    #[inline]
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        (**self).load(name)
    }
}
