//! Module implementing the registry of available templates.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde_json;

use crate::model::{Color, Template, TextBox};


lazy_static! {
    /// Templates that are available when no registry file is given.
    static ref BUILTIN: TemplateRegistry = TemplateRegistry{
        templates: indexmap!{
            "template1".to_owned() => Template{
                src: "templates/template1.png".into(),
                text_box: TextBox{x: 540.0, y: 1100.0, max_width: 820.0},
                base_font_size: 82,
                color: Color::white(),
            },
            "template2".to_owned() => Template{
                src: "templates/template2.png".into(),
                text_box: TextBox{x: 540.0, y: 1100.0, max_width: 820.0},
                base_font_size: 82,
                color: Color(0xf1, 0xe0, 0xe0, 0xff),
            },
        },
        default: "template1".into(),
    };
}


/// Static mapping of template identifiers to their definitions.
///
/// Adding a template is a matter of configuration:
/// see `TemplateRegistry::from_json` for the file format.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateRegistry {
    templates: IndexMap<String, Template>,
    default: String,
}

/// On-disk form of the registry.
#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    default: Option<String>,
    templates: IndexMap<String, Template>,
}

// Constructors.
impl TemplateRegistry {
    /// Create a registry from given templates.
    ///
    /// Templates keep the order they are given in.
    /// If `default` is omitted, the first of them is the default.
    pub fn new(templates: IndexMap<String, Template>,
               default: Option<String>) -> Result<Self, RegistryError> {
        let default = match default {
            Some(id) => id,
            None => templates.keys().next().cloned().ok_or(RegistryError::Empty)?,
        };
        if templates.is_empty() {
            return Err(RegistryError::Empty);
        }
        if !templates.contains_key(&default) {
            return Err(RegistryError::UnknownDefault(default));
        }
        for (id, template) in &templates {
            validate(id, template)?;
        }
        Ok(TemplateRegistry{templates, default})
    }

    /// The templates of the standard deployment.
    #[inline]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load the registry from its JSON representation:
    ///
    /// ```json
    /// {"default": "template1",
    ///  "templates": {"template1": {"src": "templates/template1.png",
    ///                              "text_box": {"x": 540, "y": 1100, "max_width": 820},
    ///                              "base_font_size": 82,
    ///                              "color": "#ffffff"}}}
    /// ```
    pub fn from_json<R: Read>(reader: R) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_reader(reader)?;
        debug!("Parsed registry with {} template(s)", file.templates.len());
        TemplateRegistry::new(file.templates, file.default)
    }

    /// Load the registry from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        trace!("Opening template registry {}", path.display());
        let file = File::open(path)?;
        TemplateRegistry::from_json(BufReader::new(file))
    }
}

/// Check that a template definition makes sense.
fn validate(id: &str, template: &Template) -> Result<(), RegistryError> {
    let invalid = |reason| Err(RegistryError::InvalidTemplate(id.to_owned(), reason));
    if id.trim().is_empty() {
        return invalid("blank identifier");
    }
    if template.src.trim().is_empty() {
        return invalid("no image source");
    }
    if !(template.text_box.max_width > 0.0) {
        return invalid("text box width must be positive");
    }
    if template.base_font_size == 0 {
        return invalid("base font size must be positive");
    }
    Ok(())
}

// Lookups.
impl TemplateRegistry {
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Identifiers of all the templates, in order.
    #[inline]
    pub fn ids<'r>(&'r self) -> impl Iterator<Item=&'r str> + 'r {
        self.templates.keys().map(|k| k.as_str())
    }

    #[inline]
    pub fn iter<'r>(&'r self) -> impl Iterator<Item=(&'r str, &'r Template)> + 'r {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Identifier of the template that is selected when nothing else is.
    #[inline]
    pub fn default_id(&self) -> &str {
        &self.default
    }

    /// Given identifier if it names a known template, or the default one otherwise.
    pub fn resolve<'r>(&'r self, id: Option<&'r str>) -> &'r str {
        match id {
            Some(id) if self.contains(id) => id,
            _ => self.default_id(),
        }
    }
}


/// Error while loading or creating the template registry.
#[derive(Debug)]
pub enum RegistryError {
    /// Error reading the registry file.
    Io(io::Error),
    /// Malformed JSON in the registry file.
    Json(serde_json::Error),
    /// Registry with no templates.
    Empty,
    /// Default template that isn't in the registry.
    UnknownDefault(String),
    /// Template with nonsensical definition.
    InvalidTemplate(String, &'static str),
}

impl From<io::Error> for RegistryError {
    fn from(input: io::Error) -> Self {
        RegistryError::Io(input)
    }
}
impl From<serde_json::Error> for RegistryError {
    fn from(input: serde_json::Error) -> Self {
        RegistryError::Json(input)
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            RegistryError::Io(ref e) => Some(e),
            RegistryError::Json(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RegistryError::Io(ref e) => write!(fmt, "cannot read template registry: {}", e),
            RegistryError::Json(ref e) => write!(fmt, "invalid template registry: {}", e),
            RegistryError::Empty => write!(fmt, "no templates defined"),
            RegistryError::UnknownDefault(ref id) =>
                write!(fmt, "default template `{}` is not defined", id),
            RegistryError::InvalidTemplate(ref id, reason) =>
                write!(fmt, "invalid template `{}`: {}", id, reason),
        }
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use crate::model::Color;
    use crate::testing::data_dir;
    use super::{RegistryError, TemplateRegistry};

    #[test]
    fn builtin() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(vec!["template1", "template2"], registry.ids().collect::<Vec<_>>());
        assert_eq!("template1", registry.default_id());

        let template2 = registry.get("template2").unwrap();
        assert_eq!(82, template2.base_font_size);
        assert_eq!(820.0, template2.text_box.max_width);
        assert_eq!(Color(0xf1, 0xe0, 0xe0, 0xff), template2.color);
    }

    #[test]
    fn resolve() {
        let registry = TemplateRegistry::builtin();
        assert_eq!("template2", registry.resolve(Some("template2")));
        assert_eq!("template1", registry.resolve(Some("template9")));
        assert_eq!("template1", registry.resolve(None));
    }

    #[test]
    fn bundled_file_matches_builtin() {
        let registry = TemplateRegistry::from_file(data_dir().join("templates.json"));
        assert_that!(registry).is_ok().is_equal_to(TemplateRegistry::builtin());
    }

    #[test]
    fn default_is_first_when_omitted() {
        let json = r##"{"templates": {
            "zebra": {"src": "z.png", "text_box": {"x": 1, "y": 2, "max_width": 3},
                      "base_font_size": 40, "color": "black"},
            "aurora": {"src": "a.png", "text_box": {"x": 1, "y": 2, "max_width": 3},
                       "base_font_size": 40, "color": "#000"}
        }}"##;
        let registry = TemplateRegistry::from_json(json.as_bytes()).unwrap();
        assert_eq!("zebra", registry.default_id());
        assert_eq!(vec!["zebra", "aurora"], registry.ids().collect::<Vec<_>>());
    }

    #[test]
    fn empty_registry() {
        let result = TemplateRegistry::from_json(r#"{"templates": {}}"#.as_bytes());
        match result {
            Err(RegistryError::Empty) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_default() {
        let json = r##"{"default": "nope", "templates": {
            "t": {"src": "t.png", "text_box": {"x": 1, "y": 2, "max_width": 3},
                  "base_font_size": 40, "color": "#fff"}
        }}"##;
        match TemplateRegistry::from_json(json.as_bytes()) {
            Err(RegistryError::UnknownDefault(ref id)) if id == "nope" => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_template() {
        let json = r##"{"templates": {
            "t": {"src": "t.png", "text_box": {"x": 1, "y": 2, "max_width": 0},
                  "base_font_size": 40, "color": "#fff"}
        }}"##;
        match TemplateRegistry::from_json(json.as_bytes()) {
            Err(RegistryError::InvalidTemplate(ref id, _)) if id == "t" => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_json() {
        let result = TemplateRegistry::from_json("{".as_bytes());
        assert_that!(result).is_err();
    }
}
