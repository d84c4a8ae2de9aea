//! Module defining constants relevant to the data model.

use std::ops::RangeInclusive;

use super::types::{Align, Color, Shadow};


/// Smallest font size (in pixels) that fitting a name will shrink it to.
pub const MIN_FONT_SIZE: u32 = 18;
/// How much the font size shrinks on every fitting step.
pub const FONT_SIZE_STEP: u32 = 2;

/// Maximum length (in Unicode codepoints) of the name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Codepoints of the Arabic Unicode block.
/// Names with any of those are laid out right-to-left.
pub const ARABIC_BLOCK: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Font family descriptor used when none is configured.
pub const DEFAULT_FONT_FAMILY: &str = "\"BrandFont\", DejaVuSans-Bold";

/// Alignment of the name when nothing else has been chosen.
pub const DEFAULT_ALIGN: Align = Align::Center;

/// Width of the rendered greeting.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1080;
/// Height of the rendered greeting.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1350;

/// Soft drop shadow drawn underneath the name.
pub const TEXT_SHADOW: Shadow = Shadow{
    color: Color(0, 0, 0, 46),  // rgba(0,0,0,0.18)
    blur: 6.0,
    offset_x: 0.0,
    offset_y: 2.0,
};

/// Prefix of the file name of exported greetings.
pub const EXPORT_FILE_PREFIX: &str = "greeting";
/// Extension of the file name of exported greetings.
pub const EXPORT_FILE_EXTENSION: &str = "png";
