//! Deserializer for the Color type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Visitor};

use super::super::Color;


const CHANNELS: &[&str] = &["r", "g", "b", "a"];
const EXPECTING_MSG: &str = "CSS color string or array of RGB(A) values";


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        let expected = "3 or 4 channels";

        let mut channels = Vec::with_capacity(CHANNELS.len());
        while let Some(elem) = seq.next_element::<u8>()? {
            channels.push(elem);
            if channels.len() > CHANNELS.len() {
                return Err(de::Error::invalid_length(channels.len(), &expected));
            }
        }
        match channels[..] {
            [r, g, b] => Ok(Color::rgb(r, g, b)),
            [r, g, b, a] => Ok(Color(r, g, b, a)),
            _ => Err(de::Error::invalid_length(channels.len(), &expected)),
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_de_tokens_error, Token as T};
    use super::{Color, EXPECTING_MSG};

    #[test]
    fn must_be_valid_type() {
        assert_de_tokens_error::<Color>(
            &[T::Unit],
            &format!("invalid type: unit value, expected {}", EXPECTING_MSG));
        assert_de_tokens_error::<Color>(
            &[T::Bool(false)],
            &format!("invalid type: boolean `false`, expected {}", EXPECTING_MSG));
    }

    #[test]
    fn can_be_string() {
        assert_de_tokens(&Color::white(), &[T::Str("#ffffff")]);
        assert_de_tokens(&Color(0xf1, 0xe0, 0xe0, 0xff), &[T::Str("#f1e0e0ff")]);
        assert_de_tokens(&Color::black(), &[T::Str("black")]);
        assert_de_tokens_error::<Color>(&[T::Str("uwotm8")], "unknown color name: `uwotm8`");
    }

    #[test]
    fn can_be_rgb_array() {
        assert_de_tokens(&Color::rgb(1, 2, 3), &[
            T::Seq{len: Some(3)}, T::U8(1), T::U8(2), T::U8(3), T::SeqEnd,
        ]);
        assert_de_tokens(&Color(1, 2, 3, 4), &[
            T::Seq{len: Some(4)}, T::U8(1), T::U8(2), T::U8(3), T::U8(4), T::SeqEnd,
        ]);
    }

    #[test]
    fn array_must_have_enough_channels() {
        assert_de_tokens_error::<Color>(
            &[T::Seq{len: Some(2)}, T::U8(1), T::U8(2), T::SeqEnd],
            "invalid length 2, expected 3 or 4 channels");
    }
}
