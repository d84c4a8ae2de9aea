//! Module defining the text shadow.

use super::color::Color;


/// Drop shadow drawn underneath text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Color of the shadow. Transparent color disables the shadow.
    pub color: Color,
    /// Blur radius, in pixels.
    pub blur: f32,
    /// Horizontal offset of the shadow, in pixels.
    pub offset_x: f32,
    /// Vertical offset of the shadow, in pixels.
    pub offset_y: f32,
}

impl Shadow {
    /// Whether drawing the shadow would have any visible effect.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent()
    }

    /// Standard deviation of the gaussian blur that corresponds to the blur radius.
    #[inline]
    pub fn sigma(&self) -> f32 {
        self.blur.max(0.0) / 2.0
    }
}
