//! Module defining the data model.

mod constants;
mod de;
mod types;

pub use self::constants::*;
pub use self::types::*;
