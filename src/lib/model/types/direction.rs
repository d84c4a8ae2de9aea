//! Module defining the text direction.

use std::borrow::Cow;
use std::fmt;

use crate::model::constants::ARABIC_BLOCK;
use super::align::Align;


/// Whether the text contains any character from the Arabic Unicode block.
///
/// This is a heuristic rather than a script analysis:
/// a single Arabic character is enough to make the whole text RTL.
pub fn is_arabic(text: &str) -> bool {
    text.chars().any(|c| ARABIC_BLOCK.contains(&c))
}

/// Which characters belong to left-to-right runs inside RTL text.
///
/// Arabic characters never do, other letters & digits always do.
/// Whitespace and punctuation only do when surrounded by LTR characters on both sides.
fn ltr_runs(chars: &[char]) -> Vec<bool> {
    let strong: Vec<Option<bool>> = chars.iter().map(|&c| {
        if ARABIC_BLOCK.contains(&c) {
            Some(false)
        } else if c.is_whitespace() || c.is_ascii_punctuation() {
            None
        } else {
            Some(true)
        }
    }).collect();

    strong.iter().enumerate().map(|(i, s)| s.unwrap_or_else(|| {
        let before = strong[..i].iter().rev().find_map(|s| *s);
        let after = strong[i + 1..].iter().find_map(|s| *s);
        before == Some(true) && after == Some(true)
    })).collect()
}


/// Direction in which a text is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Detect the direction of given text.
    #[inline]
    pub fn of(text: &str) -> Self {
        if is_arabic(text) { Direction::Rtl } else { Direction::Ltr }
    }

    #[inline]
    pub fn is_rtl(&self) -> bool {
        *self == Direction::Rtl
    }

    /// Alignment that corresponds to the start of a line in this direction.
    pub fn start(&self) -> Align {
        match *self {
            Direction::Ltr => Align::Left,
            Direction::Rtl => Align::Right,
        }
    }

    /// Reorder the text so that laying out its characters from left to right
    /// shows them in this direction.
    ///
    /// This is not the full bidi algorithm and there is no contextual shaping.
    /// In RTL text, runs of non-Arabic characters (e.g. Latin words or numbers)
    /// keep their reading order, while everything else is reversed.
    pub fn visual_order<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if *self == Direction::Ltr {
            return Cow::Borrowed(text);
        }
        let chars: Vec<char> = text.chars().collect();
        let ltr = ltr_runs(&chars);

        let mut result = String::with_capacity(text.len());
        let mut i = chars.len();
        while i > 0 {
            if ltr[i - 1] {
                let end = i;
                while i > 0 && ltr[i - 1] {
                    i -= 1;
                }
                result.extend(&chars[i..end]);
            } else {
                i -= 1;
                result.push(chars[i]);
            }
        }
        Cow::Owned(result)
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Ltr
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::{is_arabic, Align, Direction};

    #[test]
    fn arabic_text_is_rtl() {
        assert_eq!(Direction::Rtl, Direction::of("نورة"));
        assert_eq!(Direction::Rtl, Direction::of("\u{0600}"));
        assert_eq!(Direction::Rtl, Direction::of("\u{06FF}"));
    }

    #[test]
    fn latin_text_is_ltr() {
        assert_eq!(Direction::Ltr, Direction::of("Noura"));
        assert_eq!(Direction::Ltr, Direction::of(""));
        assert_eq!(Direction::Ltr, Direction::of("Zoë & Łukasz"));
    }

    #[test]
    fn mixed_text_is_rtl() {
        assert_eq!(Direction::Rtl, Direction::of("Sara سارة"));
        assert_eq!(Direction::Rtl, Direction::of("2024 - م"));
    }

    #[test]
    fn outside_of_arabic_block() {
        // Arabic Supplement and presentation forms are not part of the block.
        assert!(!is_arabic("\u{0750}"));
        assert!(!is_arabic("\u{FE8D}"));
        assert!(!is_arabic("\u{05FF}"));
    }

    #[test]
    fn start_alignment() {
        assert_eq!(Align::Left, Direction::Ltr.start());
        assert_eq!(Align::Right, Direction::Rtl.start());
    }

    #[test]
    fn visual_order() {
        assert_eq!("abc", Direction::Ltr.visual_order("abc"));
        assert_eq!("ةراس", Direction::Rtl.visual_order("سارة"));
        assert_eq!("ةروُن", Direction::Rtl.visual_order("نُورة"));
    }

    #[test]
    fn visual_order_keeps_ltr_runs() {
        assert_eq!("2024 ةراس Sara", Direction::Rtl.visual_order("Sara سارة 2024"));
        assert_eq!("ةراس Abdul Rahman", Direction::Rtl.visual_order("Abdul Rahman سارة"));
        assert_eq!("Abdul-Rahman ة", Direction::Rtl.visual_order("ة Abdul-Rahman"));
        assert_eq!(" ةراس", Direction::Rtl.visual_order("سارة "));
    }
}
