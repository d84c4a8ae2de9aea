//! Module defining the status line shown to the user.

use std::fmt;


/// User-facing status of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The link has been copied to the clipboard.
    LinkCopied,
    /// The clipboard is unavailable so the link has to be copied manually.
    CopyManually,
    /// Template images couldn't be loaded.
    LoadFailed,
    /// Export was attempted without a name.
    NameRequired,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match *self {
            Status::LinkCopied => "Link copied, send it to the recipient.",
            Status::CopyManually => "Copy failed, copy the link manually from the address bar.",
            Status::LoadFailed =>
                "Could not load the templates. Check the image names inside the assets directory.",
            Status::NameRequired => "Type a name first.",
        }
    }

    /// Whether the status reports a problem.
    #[inline]
    pub fn is_error(&self) -> bool {
        *self != Status::LinkCopied
    }
}

impl fmt::Display for Status {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.message())
    }
}
