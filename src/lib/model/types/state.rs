//! Module implementing the `RenderState` type.

use std::fmt;

use crate::model::constants::MAX_NAME_LENGTH;
use super::align::Alignment;


/// Clean up a name before it's used anywhere:
/// trim surrounding whitespace and keep at most `MAX_NAME_LENGTH` characters.
pub fn sanitize_name(raw: &str) -> String {
    raw.trim().chars().take(MAX_NAME_LENGTH).collect()
}


/// Everything the user has chosen: the template, the name, and its alignment.
///
/// This is the source of truth for both rendering and the shareable link.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderState {
    /// Identifier of the selected template.
    pub template: String,
    /// Name as typed, before sanitization.
    pub name: String,
    /// Alignment of the name.
    pub align: Alignment,
}

impl RenderState {
    /// Create the state for given template, with no name and default alignment.
    #[inline]
    pub fn new<T: Into<String>>(template: T) -> Self {
        RenderState{template: template.into(), ..Default::default()}
    }

    #[inline]
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into(); self
    }

    #[inline]
    pub fn with_align<A: Into<Alignment>>(mut self, align: A) -> Self {
        self.align = align.into(); self
    }
}

impl RenderState {
    /// The name in the only form it is ever rendered, exported, or linked.
    #[inline]
    pub fn sanitized_name(&self) -> String {
        sanitize_name(&self.name)
    }

    /// Whether there is any name to render after sanitization.
    #[inline]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Debug for RenderState {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("RenderState");
        ds.field("template", &self.template);
        if self.has_name() {
            ds.field("name", &self.sanitized_name());
        }
        ds.field("align", &self.align.as_str());
        ds.finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::model::{Align, Alignment, MAX_NAME_LENGTH};
    use super::{sanitize_name, RenderState};

    #[test]
    fn sanitize_trims() {
        assert_eq!("Noura", sanitize_name(" Noura  "));
        assert_eq!("Noura Saad", sanitize_name("\tNoura Saad\n"));
        assert_eq!("", sanitize_name("   "));
    }

    #[test]
    fn sanitize_truncates() {
        let long: String = (0..60).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let name = sanitize_name(&long);
        assert_eq!(MAX_NAME_LENGTH, name.chars().count());
        assert_eq!(&long[..50], name);

        let exact: String = "x".repeat(50);
        assert_eq!(exact, sanitize_name(&exact));
        assert_eq!(exact, sanitize_name(&format!("{}y", exact)));
    }

    #[test]
    fn sanitize_counts_characters_not_bytes() {
        let arabic: String = "ن".repeat(51);
        let name = sanitize_name(&arabic);
        assert_eq!(50, name.chars().count());
        assert_eq!("ن".repeat(50), name);
    }

    #[test]
    fn sanitize_trims_before_truncating() {
        let padded = format!("{}{}", " ".repeat(10), "z".repeat(50));
        assert_eq!("z".repeat(50), sanitize_name(&padded));
    }

    #[test]
    fn state_builders() {
        let state = RenderState::new("template2").with_name("  Sara ").with_align(Align::Left);
        assert_eq!("template2", state.template);
        assert_eq!("  Sara ", state.name);
        assert_eq!("Sara", state.sanitized_name());
        assert_eq!(Alignment::Recognized(Align::Left), state.align);
        assert!(state.has_name());
        assert!(!RenderState::new("template1").with_name(" ").has_name());
    }
}
