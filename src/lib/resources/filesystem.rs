//! Module defining and implementing file system loaders.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{self, MatchOptions, Pattern};

use super::Loader;


/// Loader for file paths from given directory.
///
/// A resource called `foo` is any file named `foo.<ext>` in the directory.
/// If the loader has been given a list of extensions, only those are accepted
/// (regardless of their case) and the earlier ones win when several files match.
#[derive(Clone, Debug)]
pub struct PathLoader {
    directory: PathBuf,
    extensions: Vec<String>,
}

impl PathLoader {
    /// Create a loader which accepts files with any extension.
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        PathLoader{directory: directory.as_ref().to_owned(), extensions: vec![]}
    }

    /// Create a loader which only gives out paths to files
    /// that have one of the extensions given, in the order of preference.
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: AsRef<str>
    {
        let extensions = extensions.into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        PathLoader{directory: directory.as_ref().to_owned(), extensions}
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Rank of the file's extension among the accepted ones (lower is better),
    /// or `None` if the file is not accepted at all.
    fn rank(&self, path: &Path) -> Option<usize> {
        if self.extensions.is_empty() {
            return Some(0);
        }
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.extensions.iter().position(|e| *e == ext)
    }
}

impl Loader for PathLoader {
    type Item = PathBuf;
    type Err = io::Error;

    fn load<'n>(&self, name: &'n str) -> Result<PathBuf, io::Error> {
        // The directory itself may contain glob metacharacters too.
        let directory = Pattern::escape(&self.directory.display().to_string());
        let pattern = Path::new(&directory)
            .join(format!("{}.*", Pattern::escape(name)))
            .display().to_string();
        trace!("Looking for resource `{}` with {}", name, pattern);

        let options = MatchOptions{case_sensitive: false, ..MatchOptions::new()};
        let paths = glob::glob_with(&pattern, options)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut candidates: Vec<(usize, PathBuf)> = paths
            .filter_map(|r| r.map_err(|e| warn!("Unreadable path while globbing: {}", e)).ok())
            .filter_map(|p| self.rank(&p).map(|r| (r, p)))
            .collect();
        candidates.sort();

        match candidates.len() {
            0 => Err(io::Error::new(io::ErrorKind::NotFound,
                format!("resource `{}` not found in {}", name, self.directory.display()))),
            1 => Ok(candidates.remove(0).1),
            _ if self.extensions.is_empty() => Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("ambiguous resource name `{}` matching {} files in {}",
                    name, candidates.len(), self.directory.display()))),
            _ => {
                let (_, path) = candidates.remove(0);
                debug!("Several files for resource `{}`, picked {}", name, path.display());
                Ok(path)
            }
        }
    }
}


/// Wrapper around PathLoader that loads the entire content of the files.
#[derive(Clone, Debug)]
pub struct BytesLoader {
    inner: PathLoader,
}

impl BytesLoader {
    #[inline]
    pub fn new(inner: PathLoader) -> Self {
        BytesLoader{inner}
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        self.inner.directory()
    }
}

impl From<PathLoader> for BytesLoader {
    fn from(input: PathLoader) -> Self {
        Self::new(input)
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    fn load<'n>(&self, name: &'n str) -> Result<Vec<u8>, io::Error> {
        let path = self.inner.load(name)?;
        let bytes = fs::read(&path)?;
        trace!("Read {} byte(s) of resource `{}` from {}", bytes.len(), name, path.display());
        Ok(bytes)
    }
}


#[cfg(test)]
mod tests {
    use std::io;
    use spectral::prelude::*;
    use crate::testing::{data_dir, fonts_dir};
    use super::super::Loader;
    use super::{BytesLoader, PathLoader};

    #[test]
    fn path_by_stem() {
        let loader = PathLoader::new(fonts_dir());
        let path = loader.load("DejaVuSans-Bold").unwrap();
        assert_eq!(fonts_dir().join("DejaVuSans-Bold.ttf"), path);
    }

    #[test]
    fn extensions_are_case_insensitive() {
        let loader = PathLoader::for_extensions(fonts_dir(), &["TTF", ".otf"]);
        assert_that!(loader.load("DejaVuSans-Bold")).is_ok()
            .is_equal_to(fonts_dir().join("DejaVuSans-Bold.ttf"));
    }

    #[test]
    fn path_filtered_by_extension() {
        let loader = PathLoader::for_extensions(fonts_dir(), &["png"]);
        let error = loader.load("DejaVuSans-Bold").unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, error.kind());
    }

    #[test]
    fn path_not_found() {
        let loader = PathLoader::new(data_dir());
        let error = loader.load("no-such-thing").unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, error.kind());
    }

    #[test]
    fn name_is_not_a_pattern() {
        let loader = PathLoader::new(fonts_dir());
        assert_that!(loader.load("*")).is_err();
        assert_that!(loader.load("DejaVu?ans-Bold")).is_err();
    }

    #[test]
    fn bytes() {
        let loader = BytesLoader::new(PathLoader::for_extensions(data_dir(), &["json"]));
        let bytes = loader.load("templates").unwrap();
        assert_eq!(Some(&b'{'), bytes.iter().find(|b| !b.is_ascii_whitespace()));
    }
}
