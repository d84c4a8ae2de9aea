//! Module with rendering engine configuration.

use crate::model::{FontFamily, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};


/// Structure holding configuration for the `Engine`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Font family that names are drawn with.
    pub font_family: FontFamily,
    /// Width of the rendered greetings, in pixels.
    pub canvas_width: u32,
    /// Height of the rendered greetings, in pixels.
    pub canvas_height: u32,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config {
            font_family: FontFamily::default(),
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}
