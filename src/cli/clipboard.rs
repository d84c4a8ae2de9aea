//! Module implementing the terminal clipboard.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use greeting::{Clipboard, ClipboardError};
use isatty;


/// Clipboard that goes through the terminal emulator,
/// using the OSC 52 escape sequence.
///
/// Terminals which don't support the sequence just ignore it,
/// so a successful write doesn't guarantee anything has been copied.
pub struct Osc52<W: Write> {
    out: W,
    is_tty: bool,
}

impl Osc52<io::Stderr> {
    /// Clipboard of the terminal attached to standard error.
    #[inline]
    pub fn stderr() -> Self {
        Osc52{out: io::stderr(), is_tty: isatty::stderr_isatty()}
    }
}

impl<W: Write> Osc52<W> {
    #[inline]
    pub fn new(out: W, is_tty: bool) -> Self {
        Osc52{out, is_tty}
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_tty {
            return Err(ClipboardError::Unavailable);
        }
        trace!("Writing {} bytes to the terminal clipboard", text.len());
        write!(self.out, "\x1b]52;c;{}\x07", BASE64.encode(text))?;
        self.out.flush()?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use greeting::{Clipboard, ClipboardError};
    use super::Osc52;

    #[test]
    fn escape_sequence() {
        let mut clipboard = Osc52::new(Vec::new(), true);
        clipboard.write_text("https://example.com/?name=Sara").unwrap();
        let out = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!("\x1b]52;c;aHR0cHM6Ly9leGFtcGxlLmNvbS8/bmFtZT1TYXJh\x07", out);
    }

    #[test]
    fn not_a_terminal() {
        let mut clipboard = Osc52::new(Vec::new(), false);
        match clipboard.write_text("https://example.com/") {
            Err(ClipboardError::Unavailable) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(clipboard.into_inner().is_empty());
    }
}
