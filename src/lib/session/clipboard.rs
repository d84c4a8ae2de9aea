//! Module defining the clipboard capability.

use std::error::Error;
use std::fmt;
use std::io;


/// Place where the link can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<'c, C: Clipboard + ?Sized> Clipboard for &'c mut C {
    #[inline]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}


/// Error copying to the clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// There is no clipboard to copy to.
    Unavailable,
    /// Access to the clipboard has been denied.
    Denied,
    /// Error writing to the clipboard.
    Io(io::Error),
}

impl From<io::Error> for ClipboardError {
    fn from(input: io::Error) -> Self {
        ClipboardError::Io(input)
    }
}

impl Error for ClipboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ClipboardError::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ClipboardError::Unavailable => write!(fmt, "clipboard is unavailable"),
            ClipboardError::Denied => write!(fmt, "access to the clipboard denied"),
            ClipboardError::Io(ref e) => write!(fmt, "cannot write to the clipboard: {}", e),
        }
    }
}
