//! Module implementing the shareable link which carries the render state.
//!
//! The state is encoded as a query string, e.g. `t=template1&name=Sara&align=center`.



use std::error::Error;
use std::fmt;

use serde_qs;
use url::form_urlencoded;

use crate::model::{sanitize_name, Alignment, RenderState};
use crate::registry::TemplateRegistry;


/// Query of the shareable link.
///
/// All the values are raw: it is up to the caller to validate them
/// before use (see `LinkQuery::apply`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LinkQuery {
    /// Identifier of the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl LinkQuery {
    /// Query that represents given state.
    ///
    /// The name is sanitized, and omitted if that leaves it empty.
    pub fn from_state(state: &RenderState) -> Self {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        LinkQuery{
            t: non_empty(state.template.clone()),
            name: non_empty(state.sanitized_name()),
            align: non_empty(state.align.as_str().to_owned()),
        }
    }

    /// Encode the query as a query string (without the leading `?`).
    pub fn encode(&self) -> Result<String, LinkError> {
        serde_qs::to_string(self).map_err(LinkError::Encode)
    }

    /// Decode the query from a query string or a whole link.
    ///
    /// Only the first value of each key counts, and other keys are ignored.
    /// Invalid percent-encoding is decoded lossily rather than rejected.
    pub fn decode(link: &str) -> Self {
        let query = query_part(link);
        trace!("Decoding link query: {}", query);

        let mut result = LinkQuery::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "t" => &mut result.t,
                "name" => &mut result.name,
                "align" => &mut result.align,
                _ => { trace!("Ignoring link parameter `{}`", key); continue }
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        result
    }

    /// Apply the values from the query onto the state.
    ///
    /// * Template identifiers that aren't in the registry are ignored.
    /// * The name is sanitized.
    /// * Any alignment token is accepted, see `Alignment` for how unrecognized ones are drawn.
    pub fn apply(self, registry: &TemplateRegistry, state: &mut RenderState) {
        if let Some(t) = self.t {
            if registry.contains(&t) {
                state.template = t;
            } else {
                debug!("Ignoring unknown template `{}` in the link", t);
            }
        }
        if let Some(name) = self.name {
            state.name = sanitize_name(&name);
        }
        if let Some(align) = self.align {
            let align = Alignment::parse(&align);
            if align.recognized().is_none() {
                warn!("Unrecognized alignment `{}` in the link, keeping it", align);
            }
            state.align = align;
        }
    }
}


/// Encode the state as a query string of the link.
#[inline]
pub fn encode(state: &RenderState) -> Result<String, LinkError> {
    LinkQuery::from_state(state).encode()
}

/// Decode the query string (or the whole link) into raw values of the state.
#[inline]
pub fn decode(link: &str) -> LinkQuery {
    LinkQuery::decode(link)
}

/// The link that restores given state when opened.
pub fn smart_link(base_url: &str, state: &RenderState) -> Result<String, LinkError> {
    let base = strip_query(base_url);
    let query = encode(state)?;
    if query.is_empty() {
        Ok(base.to_owned())
    } else {
        Ok(format!("{}?{}", base, query))
    }
}

/// The query string part of a link.
///
/// A link without `?` is taken to be just the query string,
/// unless it is clearly an URL.
pub fn query_part(link: &str) -> &str {
    let link = link.trim();
    let link = link.split('#').next().unwrap_or("");
    match link.find('?') {
        Some(i) => &link[i + 1..],
        None if link.contains("://") => "",
        None => link,
    }
}

/// The link without its query string & fragment.
fn strip_query(link: &str) -> &str {
    let link = link.trim();
    match link.find(|c| c == '?' || c == '#') {
        Some(i) => &link[..i],
        None => link,
    }
}


/// Error while encoding the link.
#[derive(Debug)]
pub enum LinkError {
    Encode(serde_qs::Error),
}

impl Error for LinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            LinkError::Encode(ref e) => Some(e),
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LinkError::Encode(ref e) => write!(fmt, "cannot encode the link: {}", e),
        }
    }
}
