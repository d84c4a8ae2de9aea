//! Module implementing the layout of the name: fitting its size and direction.

use std::fmt;

use crate::model::{Direction, FontFamily, FontSpec, Template, FONT_SIZE_STEP, MIN_FONT_SIZE};


/// Capability of measuring the rendered width of text.
pub trait Measure {
    /// Width (in pixels) that given text has when drawn with given font.
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;
}

impl<'m, M: Measure + ?Sized> Measure for &'m M {
    #[inline]
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        (**self).text_width(text, font)
    }
}


/// Measure that assumes every character is 0.6em wide.
///
/// Good enough for dry runs and tests where no font is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicMeasure;

impl HeuristicMeasure {
    pub const EM_RATIO: f32 = 0.6;
}

impl Measure for HeuristicMeasure {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        Self::EM_RATIO * font.size as f32 * text.chars().count() as f32
    }
}


/// Find the font size that the text should be drawn with to fit given width.
///
/// Starting from `base_size`, the size shrinks by `FONT_SIZE_STEP` as long as the text
/// is too wide, but it never goes below `MIN_FONT_SIZE`.
/// Text that overflows even at the minimum size is left overflowing.
pub fn fit_font_size<M: Measure>(text: &str, max_width: f32, base_size: u32,
                                 family: &FontFamily, measure: M) -> u32 {
    let mut size = base_size;
    let mut width = measure.text_width(text, &FontSpec::bold(size, family));
    while width > max_width && size > MIN_FONT_SIZE {
        size = size.saturating_sub(FONT_SIZE_STEP).max(MIN_FONT_SIZE);
        width = measure.text_width(text, &FontSpec::bold(size, family));
        trace!("Text of length {} is {}px wide at {}px (max: {}px)",
            text.chars().count(), width, size, max_width);
    }
    if width > max_width {
        debug!("Text of length {} overflows its {}px box even at {}px",
            text.chars().count(), max_width, size);
    }
    size
}


/// Presentation parameters of the name, derived anew for every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FittedText {
    /// Font size (in pixels) that the name is drawn with.
    pub size: u32,
    pub direction: Direction,
}

impl FittedText {
    /// Fit the (sanitized) name into the text box of given template.
    pub fn compute<M: Measure>(text: &str, template: &Template,
                               family: &FontFamily, measure: M) -> Self {
        let size = fit_font_size(
            text, template.text_box.max_width, template.base_font_size, family, measure);
        FittedText{size, direction: Direction::of(text)}
    }
}

impl fmt::Display for FittedText {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}px {}", self.size, self.direction)
    }
}
