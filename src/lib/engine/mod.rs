//! Module which defines the rendering engine.

mod builder;
mod config;

pub use self::builder::{Builder, Error as BuildError,
                        DEFAULT_ASSETS_DIRECTORY, DEFAULT_FONTS_DIRECTORY};
pub use self::config::Config;


use std::fmt;
use std::sync::Arc;

use image::DynamicImage;

use crate::layout::FittedText;
use crate::registry::TemplateRegistry;
use crate::render::{self, Canvas, FontMeasure, RenderError};
use crate::model::{RenderState, Template};
use crate::resources::{Font, ImageLoader, LoadError, Loader};


/// Loader of template background images.
pub trait TemplateImageLoader: Loader<Item=DynamicImage, Err=LoadError> {}
impl<L> TemplateImageLoader for L where L: Loader<Item=DynamicImage, Err=LoadError> {}


/// Greeting rendering engine.
///
/// It holds everything that doesn't change between renders:
/// the templates, the font and the configuration.
/// The state that does change (`RenderState`, loaded backgrounds)
/// is passed explicitly to its methods.
pub struct Engine<Il = ImageLoader>
    where Il: TemplateImageLoader
{
    registry: TemplateRegistry,
    image_loader: Il,
    font: Arc<Font>,
    config: Config,
}

// Accessors.
impl<Il: TemplateImageLoader> Engine<Il> {
    #[inline]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Font that the names are drawn with.
    #[inline]
    pub fn font(&self) -> &Arc<Font> {
        &self.font
    }

    #[inline]
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.registry.get(id)
    }

    /// Measure of text drawn with the engine's font.
    #[inline]
    pub fn measure(&self) -> FontMeasure {
        FontMeasure::new(&self.font)
    }
}

// Rendering.
impl<Il: TemplateImageLoader> Engine<Il> {
    /// Load the background image of given template.
    pub fn load_template(&self, id: &str) -> Result<DynamicImage, LoadError> {
        let template = self.registry.get(id)
            .ok_or_else(|| LoadError::UnknownTemplate(id.to_owned()))?;
        trace!("Loading background of template `{}` from {}", id, template.src);
        self.image_loader.load(&template.src).map_err(|e| {
            error!("Failed to load template `{}`: {}", id, e);
            e
        })
    }

    /// Compute how the name of given state would be drawn.
    ///
    /// Returns `None` if the name is empty and wouldn't be drawn at all.
    pub fn fit(&self, state: &RenderState) -> Result<Option<FittedText>, RenderError> {
        let template = self.lookup(&state.template)?;
        let name = state.sanitized_name();
        if name.is_empty() {
            return Ok(None);
        }
        Ok(Some(FittedText::compute(&name, template, &self.config.font_family, self.measure())))
    }

    /// Render the greeting for given state over the template's loaded background.
    pub fn render(&self, state: &RenderState,
                  background: &DynamicImage) -> Result<Canvas, RenderError> {
        let template = self.lookup(&state.template)?;
        render::render(&self.config, &self.font, template, background, state)
    }

    fn lookup(&self, id: &str) -> Result<&Template, RenderError> {
        self.registry.get(id).ok_or_else(|| RenderError::UnknownTemplate(id.to_owned()))
    }
}

impl<Il: TemplateImageLoader + fmt::Debug> fmt::Debug for Engine<Il> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Engine")
            .field("registry", &self.registry.ids().collect::<Vec<_>>())
            .field("image_loader", &self.image_loader)
            .field("font", &self.font)
            .field("config", &self.config)
            .finish()
    }
}
