//!
//! greeting  -- Personalized greeting images on demand
//!

             extern crate csscolorparser;
#[macro_use] extern crate enum_derive;
             extern crate glob;
             extern crate image;
#[macro_use] extern crate indexmap;
             extern crate itertools;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate macro_attr;
             extern crate mime;
             extern crate rusttype;
             extern crate serde;
#[macro_use] extern crate serde_derive;
             extern crate serde_json;
             extern crate serde_qs;
             extern crate time;
             extern crate url;


#[cfg(test)]              extern crate serde_test;
#[cfg(test)] #[macro_use] extern crate spectral;


mod engine;
mod export;
mod layout;
mod link;
mod model;
mod registry;
mod render;
mod resources;
mod session;


pub use crate::engine::{Builder as EngineBuilder,
                        BuildError as EngineBuildError,
                        Config as EngineConfig,
                        Engine, TemplateImageLoader,
                        DEFAULT_ASSETS_DIRECTORY, DEFAULT_FONTS_DIRECTORY};
pub use crate::export::*;
pub use crate::layout::*;
pub use crate::link::*;
pub use crate::model::*;
pub use crate::registry::*;
pub use crate::render::*;
pub use crate::resources::*;
pub use crate::session::*;


#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for the unit tests.

    use std::path::PathBuf;

    /// Directory with the data files bundled in the repository.
    pub fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..").join("data")
    }

    /// Directory with the bundled fonts.
    pub fn fonts_dir() -> PathBuf {
        data_dir().join("fonts")
    }
}
