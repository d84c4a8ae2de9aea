//! Module defining the raster that greetings are drawn onto.

use std::fmt;

use image::{DynamicImage, Rgba, RgbaImage};


/// RGBA raster with fixed dimensions.
#[derive(Clone)]
pub struct Canvas(RgbaImage);

impl Canvas {
    /// Create a fully transparent canvas.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Canvas(RgbaImage::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    /// Pixel at given coordinates, if they are within the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.width() && y < self.height() {
            Some(*self.0.get_pixel(x, y))
        } else {
            None
        }
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    #[inline]
    pub(crate) fn as_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.0
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.0
    }
}

impl From<Canvas> for DynamicImage {
    fn from(canvas: Canvas) -> Self {
        DynamicImage::ImageRgba8(canvas.0)
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Canvas({}x{})", self.width(), self.height())
    }
}
