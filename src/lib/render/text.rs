//! Module responsible for laying out & rasterizing text.

use std::collections::BTreeSet;

use itertools::Itertools;
use rusttype::{point, GlyphId, PositionedGlyph, Rect, Scale};

use crate::layout::Measure;
use crate::model::FontSpec;
use crate::resources::Font;


/// Check if given font has all the glyphs for given text.
/// Returns the codepoints that are missing (and logs them).
pub fn check(font: &Font, text: &str) -> BTreeSet<u32> {
    let missing: BTreeSet<_> = text.chars()
        .filter(|&ch| font.glyph(ch).id() == GlyphId(0))
        .map(|ch| ch as u32)
        .collect();
    if !missing.is_empty() {
        warn!("Font `{}` is missing glyphs for {} codepoint(s): {}",
            font.name(), missing.len(),
            missing.iter().format_with(", ", |c, f| f(&format_args!("{:#x}", c))));
    }
    missing
}


/// Scale that makes the font's em box `size` pixels tall,
/// like the CSS `font-size` does.
pub fn scale_for(font: &Font, size: f32) -> Scale {
    let v_metrics = font.v_metrics_unscaled();
    let height = v_metrics.ascent - v_metrics.descent;
    let units_per_em = font.units_per_em() as f32;
    if height > 0.0 && units_per_em > 0.0 {
        Scale::uniform(size * height / units_per_em)
    } else {
        Scale::uniform(size)
    }
}

/// Lay out a single line of text, with the caret starting at given point.
pub fn layout(font: &Font, text: &str, scale: Scale,
              x: f32, y: f32) -> Vec<PositionedGlyph<'static>> {
    font.layout(text, scale, point(x, y)).collect()
}

/// Compute the pixel width of given text.
pub fn text_width(font: &Font, text: &str, scale: Scale) -> f32 {
    // Text width is the final X position of the "caret"
    // after laying out all the glyphs, starting from X=0.
    layout(font, text, scale, 0.0, 0.0).last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Pixel bounds of all the glyphs that have any visible shape.
pub fn bounds(glyphs: &[PositionedGlyph]) -> Option<Rect<i32>> {
    glyphs.iter().filter_map(|g| g.pixel_bounding_box()).reduce(|a, b| Rect{
        min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
        max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
    })
}

/// Rasterize the glyphs, calling `f(x, y, coverage)` for every pixel they touch.
pub fn rasterize<F: FnMut(i32, i32, f32)>(glyphs: &[PositionedGlyph], mut f: F) {
    for glyph in glyphs {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            glyph.draw(|x, y, v| f(bbox.min.x + x as i32, bbox.min.y + y as i32, v));
        }
    }
}


/// Measure that uses the actual metrics of a loaded font.
///
/// The font family of the measured `FontSpec` is assumed to be resolved to this font.
#[derive(Clone, Copy, Debug)]
pub struct FontMeasure<'f> {
    font: &'f Font,
}

impl<'f> FontMeasure<'f> {
    #[inline]
    pub fn new(font: &'f Font) -> Self {
        FontMeasure{font}
    }
}

impl<'f> Measure for FontMeasure<'f> {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        text_width(self.font, text, scale_for(self.font, font.size as f32))
    }
}


#[cfg(test)]
mod tests {
    use rusttype::Scale;
    use spectral::prelude::*;
    use crate::layout::Measure;
    use crate::model::{FontFamily, FontSpec};
    use crate::resources::{Font, FontLoader, Loader};
    use crate::testing::fonts_dir;
    use super::{bounds, check, layout, scale_for, text_width, FontMeasure};

    fn font() -> Font {
        FontLoader::new(fonts_dir()).load("DejaVuSans-Bold").unwrap()
    }

    #[test]
    fn width_grows_with_text_and_size() {
        let font = font();
        let scale = Scale::uniform(40.0);
        let short = text_width(&font, "Sara", scale);
        let long = text_width(&font, "Sara Sara", scale);
        assert_that!(short).is_greater_than(0.0);
        assert_that!(long).is_greater_than(short);
        assert_that!(text_width(&font, "Sara", Scale::uniform(80.0))).is_greater_than(short);
        assert_eq!(0.0, text_width(&font, "", scale));
    }

    #[test]
    fn font_measure() {
        let font = font();
        let family = FontFamily::default();
        let measure = FontMeasure::new(&font);
        let width = measure.text_width("Noura", &FontSpec::bold(82, &family));
        assert_eq!(text_width(&font, "Noura", scale_for(&font, 82.0)), width);
    }

    #[test]
    fn scale_is_relative_to_em() {
        let font = font();
        // Ascent & descent of the bundled font span more than its em box.
        let scale = scale_for(&font, 100.0);
        assert_that!(scale.y).is_greater_than(100.0);
        assert_that!(scale.y).is_less_than(150.0);
    }

    #[test]
    fn bounds_of_glyphs() {
        let font = font();
        let glyphs = layout(&font, "Hi", Scale::uniform(40.0), 100.0, 200.0);
        let rect = bounds(&glyphs).unwrap();
        assert_that!(rect.min.x).is_greater_than_or_equal_to(100);
        assert_that!(rect.max.y).is_less_than_or_equal_to(201);
        assert_that!(rect.min.y).is_less_than(200);

        let blank = layout(&font, "   ", Scale::uniform(40.0), 0.0, 0.0);
        assert!(bounds(&blank).is_none());
    }

    #[test]
    fn check_glyphs() {
        let font = font();
        assert!(check(&font, "Sara").is_empty());
        assert!(check(&font, "a\u{4E2D}").contains(&0x4E2D));
    }
}
