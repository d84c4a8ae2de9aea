//! Data structures for command-line arguments.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap;
use greeting::{FontFamily, FontFamilyParseError};


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// JSON file with template definitions to use instead of the built-in ones.
    pub templates_file: Option<PathBuf>,
    /// Whether to only list the available templates.
    pub list: bool,

    /// Shareable link (or just its query string) to restore the state from.
    pub link: Option<String>,
    /// Identifier of the template to use.
    pub template: Option<String>,
    /// Name to write onto the greeting.
    pub name: Option<String>,
    /// Text alignment, as given by the user.
    pub align: Option<String>,

    /// Whether to copy the shareable link to the terminal clipboard.
    pub copy_link: bool,
    /// Whether to print the shareable link instead of rendering.
    pub print_link: bool,
    /// Page URL that shareable links are built upon.
    pub base_url: String,

    /// Directory with template background images.
    pub assets_dir: PathBuf,
    /// Directory with font files.
    pub fonts_dir: PathBuf,
    /// Font family to render the name with, if other than the default.
    pub font_family: Option<FontFamily>,

    /// Where to write the rendered greeting to.
    pub output: Output,
}


/// Destination of the rendered greeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Write the PNG to standard output.
    Stdout,
    /// Write the PNG to given file.
    Path(PathBuf),
    /// Write the PNG to the current directory, under the suggested filename.
    Suggested,
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug)]
pub enum ArgsError {
    /// General when parsing the arguments.
    Parse(clap::Error),
    /// Invalid --font descriptor.
    FontFamily(FontFamilyParseError),
}

impl From<clap::Error> for ArgsError {
    fn from(input: clap::Error) -> Self {
        ArgsError::Parse(input)
    }
}

impl From<FontFamilyParseError> for ArgsError {
    fn from(input: FontFamilyParseError) -> Self {
        ArgsError::FontFamily(input)
    }
}

impl Error for ArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ArgsError::Parse(ref e) => Some(e),
            ArgsError::FontFamily(ref e) => Some(e),
        }
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArgsError::Parse(ref e) => write!(fmt, "invalid arguments: {}", e),
            ArgsError::FontFamily(ref e) => write!(fmt, "invalid --font: {}", e),
        }
    }
}
