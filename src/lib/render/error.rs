//! Rendering error.

use std::error::Error;
use std::fmt;


/// Error that may occur while rendering a greeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Background of the template hasn't been loaded yet.
    NotLoaded,
    /// Template identifier that isn't in the registry.
    UnknownTemplate(String),
    /// Text drawn without setting the font first.
    NoFont,
}

impl Error for RenderError {}

impl fmt::Display for RenderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RenderError::NotLoaded => write!(fmt, "template image is not loaded yet"),
            RenderError::UnknownTemplate(ref id) => write!(fmt, "unknown template `{}`", id),
            RenderError::NoFont => write!(fmt, "no font set for drawing text"),
        }
    }
}
