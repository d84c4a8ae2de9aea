//! Module implementing the export of rendered greetings.

use std::error::Error;
use std::fmt;
use std::ops::Deref;

use image::{ColorType, ImageEncoder, ImageError};
use image::codecs::png::PngEncoder;
use mime::{self, Mime};
use time::OffsetDateTime;

use crate::model::{sanitize_name, EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX};
use crate::render::{Canvas, RenderError};


/// Exported greeting, ready to be saved.
#[derive(Clone, Debug)]
#[must_use = "unused export which must be saved"]
pub struct Export {
    filename: String,
    bytes: Vec<u8>,
}

impl Export {
    /// Suggested name of the file to save the greeting as.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Raw bytes of the PNG image.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the export into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The MIME type of the exported image.
    #[inline]
    pub fn mime_type(&self) -> Mime {
        mime::IMAGE_PNG
    }
}

impl Deref for Export {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl From<Export> for Vec<u8> {
    fn from(export: Export) -> Self {
        export.into_bytes()
    }
}


/// Export the rendered greeting as PNG.
///
/// Greetings without a name are never exported.
#[inline]
pub fn export(canvas: &Canvas, name: &str) -> Result<Export, ExportError> {
    export_at(canvas, name, now_millis())
}

/// Export the rendered greeting as if it was done at given Unix time (in milliseconds).
pub fn export_at(canvas: &Canvas, name: &str, millis: u64) -> Result<Export, ExportError> {
    if sanitize_name(name).is_empty() {
        debug!("Refusing to export a greeting without a name");
        return Err(ExportError::NameRequired);
    }

    let (width, height) = canvas.dimensions();
    debug!("Encoding {}x{} greeting as PNG...", width, height);
    let mut bytes = vec![];
    PngEncoder::new(&mut bytes)
        .write_image(canvas.as_image().as_raw(), width, height, ColorType::Rgba8)
        .map_err(ExportError::Encode)?;
    trace!("Encoded greeting has {} byte(s)", bytes.len());

    Ok(Export{filename: filename_for(millis), bytes})
}

/// Name of the file that a greeting exported at given time is saved as.
pub fn filename_for(millis: u64) -> String {
    format!("{}-{}.{}", EXPORT_FILE_PREFIX, millis, EXPORT_FILE_EXTENSION)
}

/// Current Unix time in milliseconds.
fn now_millis() -> u64 {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    if millis < 0 { 0 } else { millis as u64 }
}


/// Error that may occur while exporting a greeting.
#[derive(Debug)]
pub enum ExportError {
    /// The name is empty, so there is nothing worth exporting.
    NameRequired,
    /// Error rendering the greeting before export.
    Render(RenderError),
    /// Error encoding the image.
    Encode(ImageError),
}

impl From<RenderError> for ExportError {
    fn from(input: RenderError) -> Self {
        ExportError::Render(input)
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ExportError::NameRequired => None,
            ExportError::Render(ref e) => Some(e),
            ExportError::Encode(ref e) => Some(e),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExportError::NameRequired => write!(fmt, "a name is required to export the greeting"),
            ExportError::Render(ref e) => write!(fmt, "cannot render the greeting: {}", e),
            ExportError::Encode(ref e) => write!(fmt, "failed to encode the final image: {}", e),
        }
    }
}
