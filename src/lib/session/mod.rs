//! Module implementing the session: the state of a greeting being worked on,
//! kept in sync with its shareable link and its template's background.

mod clipboard;
mod status;

#[cfg(test)]
mod tests;


pub use self::clipboard::{Clipboard, ClipboardError};
pub use self::status::Status;


use std::fmt;

use image::DynamicImage;

use crate::engine::{Engine, TemplateImageLoader};
use crate::export::{export, Export, ExportError};
use crate::link::{self, LinkQuery};
use crate::model::{Alignment, RenderState};
use crate::registry::TemplateRegistry;
use crate::render::{Canvas, RenderError};
use crate::resources::LoadError;


/// Handle of a template load in progress.
///
/// It only applies to the session if no other load has begun since.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "the load must be finished with Session::finish_load"]
pub struct LoadTicket {
    generation: u64,
    template: String,
}

impl LoadTicket {
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identifier of the template being loaded.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }
}

/// What happened to a finished template load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The background has been applied.
    Applied,
    /// Another load has begun in the meantime, so the result has been discarded.
    Stale,
}


/// State of a greeting being worked on.
pub struct Session {
    state: RenderState,
    /// Loaded background, with identifier of the template it belongs to.
    background: Option<(String, DynamicImage)>,
    generation: u64,
    link: String,
    status: Option<Status>,
}

impl Session {
    /// Create a session with the default template of the registry selected.
    pub fn new(registry: &TemplateRegistry) -> Self {
        let mut session = Session{
            state: RenderState::new(registry.default_id()),
            background: None,
            generation: 0,
            link: String::new(),
            status: None,
        };
        session.sync_link();
        session
    }
}

// Accessors.
impl Session {
    #[inline]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Current query string of the shareable link.
    #[inline]
    pub fn link(&self) -> &str {
        &self.link
    }

    #[inline]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Whether the background of the selected template is loaded.
    pub fn is_loaded(&self) -> bool {
        self.background.as_ref().map(|&(ref t, _)| *t == self.state.template).unwrap_or(false)
    }
}

// Mutators.
impl Session {
    /// Select the template with given identifier.
    /// Returns whether it was selected, i.e. whether the registry has it.
    pub fn select_template(&mut self, registry: &TemplateRegistry, id: &str) -> bool {
        if !registry.contains(id) {
            debug!("Ignoring selection of unknown template `{}`", id);
            return false;
        }
        self.state.template = id.to_owned();
        self.sync_link();
        true
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.state.name = name.into();
        self.sync_link();
    }

    pub fn set_align<A: Into<Alignment>>(&mut self, align: A) {
        self.state.align = align.into();
        self.sync_link();
    }

    /// Restore the state from the link that the session was started with.
    pub fn hydrate(&mut self, registry: &TemplateRegistry, link: &str) {
        let query = LinkQuery::decode(link);
        debug!("Hydrating session from {:?}", query);
        query.apply(registry, &mut self.state);
        self.sync_link();
    }

    /// Replace the link with one encoding the current state.
    fn sync_link(&mut self) {
        match link::encode(&self.state) {
            Ok(query) => {
                trace!("Link updated: {}", query);
                self.link = query;
            }
            Err(e) => warn!("Cannot update the link, keeping the previous one: {}", e),
        }
    }
}

// Loading templates.
impl Session {
    /// Begin loading the background of the selected template.
    ///
    /// Any load begun earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        trace!("Load #{} of template `{}` begun", self.generation, self.state.template);
        LoadTicket{generation: self.generation, template: self.state.template.clone()}
    }

    /// Finish loading a background with the result of the load.
    pub fn finish_load(&mut self, ticket: LoadTicket,
                       result: Result<DynamicImage, LoadError>) -> Result<LoadOutcome, LoadError> {
        if ticket.generation != self.generation {
            debug!("Discarding stale load #{} of template `{}` (current: #{})",
                ticket.generation, ticket.template, self.generation);
            return Ok(LoadOutcome::Stale);
        }
        match result {
            Ok(img) => {
                debug!("Background of template `{}` loaded", ticket.template);
                self.background = Some((ticket.template, img));
                if self.status == Some(Status::LoadFailed) {
                    self.status = None;
                }
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                error!("Loading template `{}` failed: {}", ticket.template, e);
                self.background = None;
                self.status = Some(Status::LoadFailed);
                Err(e)
            }
        }
    }

    /// Load the background of the selected template.
    pub fn load_current<Il>(&mut self, engine: &Engine<Il>) -> Result<LoadOutcome, LoadError>
        where Il: TemplateImageLoader
    {
        let ticket = self.begin_load();
        let result = engine.load_template(ticket.template());
        self.finish_load(ticket, result)
    }
}

// Actions.
impl Session {
    /// Render the greeting over the loaded background.
    pub fn render<Il>(&self, engine: &Engine<Il>) -> Result<Canvas, RenderError>
        where Il: TemplateImageLoader
    {
        match self.background {
            Some((ref template, ref img)) if *template == self.state.template =>
                engine.render(&self.state, img),
            _ => Err(RenderError::NotLoaded),
        }
    }

    /// Render & export the greeting.
    pub fn export<Il>(&mut self, engine: &Engine<Il>) -> Result<Export, ExportError>
        where Il: TemplateImageLoader
    {
        if !self.state.has_name() {
            self.status = Some(Status::NameRequired);
            return Err(ExportError::NameRequired);
        }
        let canvas = self.render(engine)?;
        let result = export(&canvas, &self.state.sanitized_name());
        if let Ok(ref export) = result {
            info!("Greeting exported as {}", export.filename());
            if self.status == Some(Status::NameRequired) {
                self.status = None;
            }
        }
        result
    }

    /// Copy the shareable link to the clipboard.
    ///
    /// Failure is never an error: the status then tells the user to copy the link manually.
    pub fn copy_link<C: Clipboard>(&mut self, base_url: &str, mut clipboard: C) -> Status {
        let status = match link::smart_link(base_url, &self.state) {
            Ok(url) => match clipboard.write_text(&url) {
                Ok(()) => {
                    debug!("Copied link {}", url);
                    Status::LinkCopied
                }
                Err(e) => {
                    warn!("Copying the link failed: {}", e);
                    Status::CopyManually
                }
            },
            Err(e) => {
                warn!("Cannot build the link to copy: {}", e);
                Status::CopyManually
            }
        };
        self.status = Some(status);
        status
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Session")
            .field("state", &self.state)
            .field("background", &self.background.as_ref().map(|&(ref t, _)| t))
            .field("generation", &self.generation)
            .field("link", &self.link)
            .field("status", &self.status)
            .finish()
    }
}
