//! Module implementing the drawing context of a canvas.
//!
//! Drawing state (font, fill, alignment, shadow, ...) is set on the context
//! and affects subsequent draws, much like with an HTML canvas.
//! Unlike there, the state can be saved with a guard that restores it when dropped,
//! so that no setting leaks out of the scope it was made for.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use image::{imageops, DynamicImage, Pixel, Rgba, RgbaImage};
use image::imageops::FilterType;

use crate::model::{Align, Color, Direction, Shadow};
use crate::resources::Font;
use super::canvas::Canvas;
use super::error::RenderError;
use super::text;


/// Vertical position of the text relative to the point it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    /// The point is at the text's baseline.
    Alphabetic,
    /// The point is in the middle of the em box.
    Middle,
}

impl Default for Baseline {
    fn default() -> Self {
        Baseline::Alphabetic
    }
}


/// Transient state of the drawing context.
#[derive(Clone)]
pub struct DrawState {
    pub font: Option<Arc<Font>>,
    /// Font size in pixels.
    pub font_size: f32,
    pub fill: Color,
    pub align: Align,
    pub baseline: Baseline,
    pub direction: Direction,
    pub shadow: Option<Shadow>,
}

impl Default for DrawState {
    fn default() -> Self {
        DrawState{
            font: None,
            font_size: 10.0,
            fill: Color::black(),
            align: Align::Left,
            baseline: Baseline::default(),
            direction: Direction::default(),
            shadow: None,
        }
    }
}

impl fmt::Debug for DrawState {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("DrawState")
            .field("font", &self.font.as_ref().map(|f| f.name()))
            .field("font_size", &self.font_size)
            .field("fill", &format_args!("{}", self.fill))
            .field("align", &self.align)
            .field("baseline", &self.baseline)
            .field("direction", &self.direction)
            .field("shadow", &self.shadow)
            .finish()
    }
}


/// Drawing context bound to a canvas.
pub struct DrawingContext<'c> {
    canvas: &'c mut Canvas,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl<'c> DrawingContext<'c> {
    #[inline]
    pub fn new(canvas: &'c mut Canvas) -> Self {
        DrawingContext{canvas, state: DrawState::default(), saved: vec![]}
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }

    #[inline]
    pub fn state(&self) -> &DrawState {
        &self.state
    }
}

// Scoped state.
impl<'c> DrawingContext<'c> {
    /// Save the current drawing state.
    /// It will be restored when the returned guard goes out of scope,
    /// whether normally or through an early return.
    pub fn save<'s>(&'s mut self) -> Saved<'s, 'c> {
        self.saved.push(self.state.clone());
        trace!("Drawing state saved (depth: {})", self.saved.len());
        Saved{ctx: self}
    }

    /// Perform given drawing operations with the shadow applied.
    pub fn with_shadow<F, R>(&mut self, shadow: Shadow, f: F) -> R
        where F: FnOnce(&mut DrawingContext<'c>) -> R
    {
        let mut ctx = self.save();
        ctx.set_shadow(shadow);
        f(&mut *ctx)
    }
}

// Setters.
impl<'c> DrawingContext<'c> {
    #[inline]
    pub fn set_font(&mut self, font: Arc<Font>, size: f32) {
        self.state.font = Some(font);
        self.state.font_size = size;
    }

    #[inline]
    pub fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    #[inline]
    pub fn set_align(&mut self, align: Align) {
        self.state.align = align;
    }

    #[inline]
    pub fn set_baseline(&mut self, baseline: Baseline) {
        self.state.baseline = baseline;
    }

    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.state.direction = direction;
    }

    #[inline]
    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = Some(shadow);
    }

    #[inline]
    pub fn clear_shadow(&mut self) {
        self.state.shadow = None;
    }
}

// Drawing.
impl<'c> DrawingContext<'c> {
    /// Make the whole canvas transparent.
    pub fn clear(&mut self) {
        for px in self.canvas.as_image_mut().pixels_mut() {
            *px = Color::transparent().into();
        }
    }

    /// Draw the image over the whole canvas, stretching it if necessary.
    pub fn draw_image_full(&mut self, img: &DynamicImage) {
        let (width, height) = self.canvas.dimensions();
        let layer: RgbaImage = if img.width() == width && img.height() == height {
            img.to_rgba8()
        } else {
            debug!("Resizing image from {}x{} to {}x{}",
                img.width(), img.height(), width, height);
            img.resize_exact(width, height, FilterType::Triangle).to_rgba8()
        };
        imageops::overlay(self.canvas.as_image_mut(), &layer, 0, 0);
    }

    /// Draw the text at given point, using the current state.
    ///
    /// Horizontal position of the text relative to `x` is determined by the alignment,
    /// vertical position relative to `y` by the baseline.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), RenderError> {
        let font = self.state.font.clone().ok_or(RenderError::NoFont)?;
        let scale = text::scale_for(&font, self.state.font_size);
        let text = self.state.direction.visual_order(text);

        let width = text::text_width(&font, &text, scale);
        let x = match self.state.align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let y = match self.state.baseline {
            Baseline::Alphabetic => y,
            Baseline::Middle => {
                let v_metrics = font.v_metrics(scale);
                y + (v_metrics.ascent + v_metrics.descent) / 2.0  // descent is negative
            }
        };
        trace!("fill_text(<length: {}>, ...) at ({}, {}) with {:?}",
            text.chars().count(), x, y, self.state);

        let glyphs = text::layout(&font, &text, scale, x, y);
        if let Some(shadow) = self.state.shadow.filter(Shadow::is_visible) {
            self.draw_shadow(&glyphs, shadow);
        }

        let fill = self.state.fill;
        let img = self.canvas.as_image_mut();
        text::rasterize(&glyphs, |x, y, v| blend(img, x, y, fill.with_coverage(v)));
        Ok(())
    }

    /// Draw a blurred silhouette of the glyphs.
    fn draw_shadow(&mut self, glyphs: &[rusttype::PositionedGlyph], shadow: Shadow) {
        let bounds = match text::bounds(glyphs) {
            Some(b) => b,
            None => return,
        };
        let sigma = shadow.sigma();
        let pad = (3.0 * sigma).ceil() as i32 + 1;
        let (left, top) = (bounds.min.x - pad, bounds.min.y - pad);
        let width = (bounds.width() + 2 * pad) as u32;
        let height = (bounds.height() + 2 * pad) as u32;

        let Color(r, g, b, _) = shadow.color;
        let mut mask = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 0]));
        text::rasterize(glyphs, |x, y, v| {
            let px = shadow.color.with_coverage(v);
            let (mx, my) = (x - left, y - top);
            if mx >= 0 && my >= 0 && (mx as u32) < width && (my as u32) < height {
                let old = mask.get_pixel_mut(mx as u32, my as u32);
                if px[3] > old[3] {
                    *old = px;
                }
            }
        });
        if sigma > 0.0 {
            mask = imageops::blur(&mask, sigma);
        }
        trace!("Drawing {}x{} shadow of text at ({}, {})", width, height, left, top);

        let dx = left + shadow.offset_x.round() as i32;
        let dy = top + shadow.offset_y.round() as i32;
        let img = self.canvas.as_image_mut();
        for (mx, my, px) in mask.enumerate_pixels() {
            if px[3] > 0 {
                blend(img, dx + mx as i32, dy + my as i32, *px);
            }
        }
    }
}

/// Blend the pixel onto the image, ignoring coordinates outside of it.
#[inline]
fn blend(img: &mut RgbaImage, x: i32, y: i32, px: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.get_pixel_mut(x as u32, y as u32).blend(&px);
    }
}

impl<'c> fmt::Debug for DrawingContext<'c> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("DrawingContext")
            .field("canvas", &self.canvas)
            .field("state", &self.state)
            .field("saved", &self.saved.len())
            .finish()
    }
}


/// Guard of a saved drawing state.
///
/// Dereferences to the drawing context, and restores its saved state when dropped.
#[must_use = "dropping the guard restores the state right away"]
pub struct Saved<'s, 'c> {
    ctx: &'s mut DrawingContext<'c>,
}

impl<'s, 'c> Deref for Saved<'s, 'c> {
    type Target = DrawingContext<'c>;
    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}
impl<'s, 'c> DerefMut for Saved<'s, 'c> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<'s, 'c> Drop for Saved<'s, 'c> {
    fn drop(&mut self) {
        if let Some(state) = self.ctx.saved.pop() {
            self.ctx.state = state;
            trace!("Drawing state restored (depth: {})", self.ctx.saved.len());
        }
    }
}
