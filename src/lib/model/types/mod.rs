//! Module defining the model types.

mod align;
mod color;
mod direction;
mod font;
mod shadow;
mod state;
mod template;

pub use self::align::{Align, Alignment};
pub use self::color::{Color, ColorParseError};
pub use self::direction::{is_arabic, Direction};
pub use self::font::{FontFamily, FontFamilyParseError, FontSpec, FontWeight};
pub use self::shadow::Shadow;
pub use self::state::{sanitize_name, RenderState};
pub use self::template::{Template, TextBox};
