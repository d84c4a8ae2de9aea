//! Module implementing the rendering of greetings.

mod canvas;
mod context;
mod error;
mod text;



pub use self::canvas::Canvas;
pub use self::context::{Baseline, DrawState, DrawingContext, Saved};
pub use self::error::RenderError;
pub use self::text::{check as check_glyphs, FontMeasure};


use std::sync::Arc;

use image::DynamicImage;

use crate::engine::Config;
use crate::layout::FittedText;
use crate::model::{RenderState, Template, TEXT_SHADOW};
use crate::resources::Font;


/// Render the greeting: template background with the name on top of it.
///
/// If the (sanitized) name is empty, only the background is drawn.
pub fn render(config: &Config, font: &Arc<Font>,
              template: &Template, background: &DynamicImage,
              state: &RenderState) -> Result<Canvas, RenderError> {
    debug!("Rendering {:?} on a {}x{} canvas",
        state, config.canvas_width, config.canvas_height);

    let name = state.sanitized_name();
    let mut canvas = Canvas::new(config.canvas_width, config.canvas_height);
    {
        let mut ctx = DrawingContext::new(&mut canvas);
        ctx.clear();
        ctx.draw_image_full(background);
        if name.is_empty() {
            debug!("Empty name, drawing just the background");
        } else {
            draw_name(&mut ctx, config, font, template, state, &name)?;
        }
    }
    Ok(canvas)
}

fn draw_name(ctx: &mut DrawingContext, config: &Config, font: &Arc<Font>,
             template: &Template, state: &RenderState, name: &str) -> Result<(), RenderError> {
    check_glyphs(font, name);
    let fitted = FittedText::compute(
        name, template, &config.font_family, FontMeasure::new(font));
    let align = state.align.resolve(fitted.direction);
    debug!("Drawing name of length {} as {} aligned {}",
        name.chars().count(), fitted, align);

    let mut ctx = ctx.save();
    ctx.set_font(font.clone(), fitted.size as f32);
    ctx.set_fill(template.color);
    ctx.set_align(align);
    ctx.set_baseline(Baseline::Middle);
    ctx.set_direction(fitted.direction);
    let text_box = &template.text_box;
    ctx.with_shadow(TEXT_SHADOW, |ctx| ctx.fill_text(name, text_box.x, text_box.y))
}
