//! Module defining the template configuration.

use super::color::Color;


/// Where the name goes on a template.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct TextBox {
    /// Horizontal coordinate of the anchor point.
    pub x: f32,
    /// Vertical coordinate of the anchor point.
    /// The name is vertically centered on it.
    pub y: f32,
    /// Maximum width of the name, in pixels.
    /// Longer names are drawn with a smaller font.
    pub max_width: f32,
}

/// Background image with the rules for placing the name on it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Template {
    /// Source of the background image, relative to the assets directory.
    pub src: String,
    pub text_box: TextBox,
    /// Font size (in pixels) used for names that fit the text box.
    pub base_font_size: u32,
    /// Color of the name.
    pub color: Color,
}


#[cfg(test)]
mod tests {
    use serde_json;
    use crate::model::Color;
    use super::{Template, TextBox};

    #[test]
    fn from_json() {
        let template: Template = serde_json::from_str(r##"{
            "src": "templates/template2.png",
            "text_box": {"x": 540, "y": 1100, "max_width": 820},
            "base_font_size": 82,
            "color": "#f1e0e0ff"
        }"##).unwrap();
        assert_eq!(Template{
            src: "templates/template2.png".into(),
            text_box: TextBox{x: 540.0, y: 1100.0, max_width: 820.0},
            base_font_size: 82,
            color: Color(0xf1, 0xe0, 0xe0, 0xff),
        }, template);
    }

    #[test]
    fn from_json_missing_field() {
        let result = serde_json::from_str::<Template>(r#"{"src": "a.png"}"#);
        assert!(result.is_err());
    }
}
