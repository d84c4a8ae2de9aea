//! Module defining the alignment types.

use std::fmt;
use std::str::FromStr;

use serde::de::{value, Deserialize, IntoDeserializer};

use crate::model::constants::DEFAULT_ALIGN;
use super::direction::Direction;


macro_attr! {
    /// Horizontal alignment of the name relative to the template's anchor point.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Serialize, Deserialize, IterVariants!(Aligns))]
    #[serde(rename_all = "lowercase")]
    pub enum Align {
        /// Anchor point is the left edge of the text.
        Left,
        /// Anchor point is the middle of the text.
        Center,
        /// Anchor point is the right edge of the text.
        Right,
    }
}

impl Align {
    /// Lowercase name of the alignment, as used in links.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl FromStr for Align {
    type Err = ();

    /// Parse the alignment from its exact (lowercase) name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let de: value::StrDeserializer<value::Error> = s.into_deserializer();
        Align::deserialize(de).map_err(|_| ())
    }
}

impl fmt::Display for Align {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}


/// Alignment as carried by the render state.
///
/// Tokens that don't name any `Align` are not rejected.
/// They are kept verbatim (so that they survive a trip through the link)
/// and text is drawn with the default `start` alignment instead,
/// which is left for LTR text and right for RTL text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// One of the recognized alignments.
    Recognized(Align),
    /// Unrecognized token, passed through unchanged.
    Unrecognized(String),
}

impl Alignment {
    /// Interpret an alignment token.
    pub fn parse(s: &str) -> Self {
        match s.parse() {
            Ok(align) => Alignment::Recognized(align),
            Err(()) => Alignment::Unrecognized(s.to_owned()),
        }
    }

    /// The token as it should appear in links.
    pub fn as_str(&self) -> &str {
        match *self {
            Alignment::Recognized(ref a) => a.as_str(),
            Alignment::Unrecognized(ref s) => s.as_str(),
        }
    }

    /// The recognized `Align`, if any.
    #[inline]
    pub fn recognized(&self) -> Option<Align> {
        match *self {
            Alignment::Recognized(a) => Some(a),
            Alignment::Unrecognized(_) => None,
        }
    }

    /// The alignment that text in given direction is actually drawn with.
    pub fn resolve(&self, direction: Direction) -> Align {
        match *self {
            Alignment::Recognized(a) => a,
            Alignment::Unrecognized(ref s) => {
                let start = direction.start();
                warn!("Unrecognized alignment `{}`, drawing {} text aligned {}",
                    s, direction, start);
                start
            }
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Recognized(DEFAULT_ALIGN)
    }
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        Alignment::Recognized(align)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token as T};
    use spectral::prelude::*;
    use crate::model::Direction;
    use super::{Align, Alignment};

    #[test]
    fn align_names() {
        let names: Vec<_> = Align::iter_variants().map(|a| a.as_str()).collect();
        assert_eq!(vec!["left", "center", "right"], names);
        for align in Align::iter_variants() {
            assert_that!(align.as_str().parse::<Align>()).is_ok().is_equal_to(align);
        }
    }

    #[test]
    fn align_wire_form() {
        assert_tokens(&Align::Left, &[T::UnitVariant{name: "Align", variant: "left"}]);
        assert_tokens(&Align::Center, &[T::UnitVariant{name: "Align", variant: "center"}]);
        assert_tokens(&Align::Right, &[T::UnitVariant{name: "Align", variant: "right"}]);
    }

    #[test]
    fn align_parse_is_exact() {
        assert_that!("CENTER".parse::<Align>()).is_err();
        assert_that!(" left".parse::<Align>()).is_err();
        assert_that!("".parse::<Align>()).is_err();
        assert_that!("end".parse::<Align>()).is_err();
    }

    #[test]
    fn alignment_recognized() {
        assert_eq!(Alignment::Recognized(Align::Right), Alignment::parse("right"));
        assert_eq!(Some(Align::Right), Alignment::parse("right").recognized());
        assert_eq!(Align::Right, Alignment::parse("right").resolve(Direction::Ltr));
        assert_eq!(Align::Right, Alignment::parse("right").resolve(Direction::Rtl));
    }

    #[test]
    fn alignment_unrecognized_passes_through() {
        let alignment = Alignment::parse("justify");
        assert_eq!(Alignment::Unrecognized("justify".into()), alignment);
        assert_eq!("justify", alignment.as_str());
        assert_that!(alignment.recognized()).is_none();
    }

    #[test]
    fn alignment_unrecognized_resolves_to_start() {
        let alignment = Alignment::parse("middle");
        assert_eq!(Align::Left, alignment.resolve(Direction::Ltr));
        assert_eq!(Align::Right, alignment.resolve(Direction::Rtl));
    }

    #[test]
    fn alignment_default_is_center() {
        assert_eq!(Alignment::Recognized(Align::Center), Alignment::default());
    }
}
