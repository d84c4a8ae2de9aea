//! Tests for the session.

use image::{DynamicImage, RgbaImage};
use spectral::prelude::*;

use crate::engine::{Builder, Engine};
use crate::export::ExportError;
use crate::model::{Align, Alignment, Color};
use crate::registry::TemplateRegistry;
use crate::render::RenderError;
use crate::resources::{LoadError, Loader};
use crate::testing::fonts_dir;
use super::{Clipboard, ClipboardError, LoadOutcome, Session, Status};


/// Loader of small solid images, which fails for every template listed in it.
#[derive(Debug, Default)]
struct FakeLoader {
    failing: Vec<&'static str>,
}
impl Loader for FakeLoader {
    type Item = DynamicImage;
    type Err = LoadError;
    fn load<'n>(&self, src: &'n str) -> Result<DynamicImage, LoadError> {
        if self.failing.iter().any(|f| src.contains(f)) {
            return Err(LoadError::UnknownTemplate(src.to_owned()));
        }
        Ok(solid(Color::black()))
    }
}

fn solid(color: Color) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 5, color.into()))
}

fn engine(loader: FakeLoader) -> Engine<FakeLoader> {
    Builder::new()
        .image_loader(loader)
        .fonts_directory(fonts_dir())
        .canvas_size(108, 135)
        .build().unwrap()
}

#[derive(Default)]
struct FakeClipboard {
    text: Option<String>,
    denied: bool,
}
impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Denied);
        }
        self.text = Some(text.to_owned());
        Ok(())
    }
}


#[test]
fn new_session() {
    let registry = TemplateRegistry::builtin();
    let session = Session::new(&registry);
    assert_eq!("template1", session.state().template);
    assert_eq!("t=template1&align=center", session.link());
    assert_that!(session.status()).is_none();
    assert!(!session.is_loaded());
}

#[test]
fn mutators_update_link() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);

    session.set_name("Sara");
    assert_eq!("t=template1&name=Sara&align=center", session.link());
    session.set_align(Align::Right);
    assert_eq!("t=template1&name=Sara&align=right", session.link());
    assert!(session.select_template(&registry, "template2"));
    assert_eq!("t=template2&name=Sara&align=right", session.link());
    session.set_name("   ");
    assert_eq!("t=template2&align=right", session.link());
}

#[test]
fn select_unknown_template() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    assert!(!session.select_template(&registry, "template9"));
    assert_eq!("template1", session.state().template);
    assert_eq!("t=template1&align=center", session.link());
}

#[test]
fn hydrate() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    session.hydrate(&registry, "https://example.com/?t=template2&name=%20Noura%20&align=left");
    assert_eq!("template2", session.state().template);
    assert_eq!("Noura", session.state().name);
    assert_eq!(Alignment::Recognized(Align::Left), session.state().align);
    assert_eq!("t=template2&name=Noura&align=left", session.link());
}

#[test]
fn hydrate_unknown_template_keeps_default() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    session.hydrate(&registry, "?t=template9&name=Sara");
    assert_eq!("template1", session.state().template);
    assert_eq!("Sara", session.state().name);
}

#[test]
fn hydrate_keeps_valid_values_next_to_malformed_ones() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    session.hydrate(&registry, "t=template2&name=%D8%A7%E0&align=right");
    assert_eq!("template2", session.state().template);
    assert_eq!("\u{627}\u{fffd}", session.state().name);
    assert_eq!(Alignment::Recognized(Align::Right), session.state().align);

    let mut session = Session::new(&registry);
    session.hydrate(&registry, "t=template2&t=template1&name[]=x&align=left");
    assert_eq!("template2", session.state().template);
    assert_eq!("", session.state().name);
    assert_eq!("t=template2&align=left", session.link());
}

#[test]
fn load_and_render() {
    let engine = engine(FakeLoader::default());
    let mut session = Session::new(engine.registry());
    assert_eq!(Err(RenderError::NotLoaded), session.render(&engine).map(|_| ()));

    assert_eq!(LoadOutcome::Applied, session.load_current(&engine).unwrap());
    assert!(session.is_loaded());
    let canvas = session.render(&engine).unwrap();
    assert_eq!((108, 135), canvas.dimensions());
}

#[test]
fn selecting_another_template_requires_load() {
    let engine = engine(FakeLoader::default());
    let mut session = Session::new(engine.registry());
    session.load_current(&engine).unwrap();
    session.select_template(engine.registry(), "template2");
    assert!(!session.is_loaded());
    assert_eq!(Err(RenderError::NotLoaded), session.render(&engine).map(|_| ()));
}

#[test]
fn stale_load_is_discarded() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);

    let first = session.begin_load();
    assert_eq!("template1", first.template());
    session.select_template(&registry, "template2");
    let second = session.begin_load();
    assert_that!(second.generation()).is_greater_than(first.generation());

    // The newer load resolves first, then the older one.
    let outcome = session.finish_load(second, Ok(solid(Color::white())));
    assert_eq!(LoadOutcome::Applied, outcome.unwrap());
    let outcome = session.finish_load(first, Ok(solid(Color::black())));
    assert_eq!(LoadOutcome::Stale, outcome.unwrap());

    assert!(session.is_loaded());
    let background = session.background.as_ref().unwrap();
    assert_eq!("template2", background.0);
    assert_eq!(solid(Color::white()).to_rgba8(), background.1.to_rgba8());
}

#[test]
fn stale_failure_is_discarded() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    let first = session.begin_load();
    let second = session.begin_load();
    session.finish_load(second, Ok(solid(Color::white()))).unwrap();
    let outcome = session.finish_load(first, Err(LoadError::UnknownTemplate("x".into())));
    assert_eq!(LoadOutcome::Stale, outcome.unwrap());
    assert_that!(session.status()).is_none();
    assert!(session.is_loaded());
}

#[test]
fn load_failure() {
    let engine = engine(FakeLoader{failing: vec!["template1"]});
    let mut session = Session::new(engine.registry());
    assert_that!(session.load_current(&engine)).is_err();
    assert_eq!(Some(Status::LoadFailed), session.status());
    assert!(!session.is_loaded());

    // Loading another template works & clears the status.
    session.select_template(engine.registry(), "template2");
    assert_that!(session.load_current(&engine)).is_ok();
    assert_that!(session.status()).is_none();
}

#[test]
fn export_requires_name() {
    let engine = engine(FakeLoader::default());
    let mut session = Session::new(engine.registry());
    session.load_current(&engine).unwrap();

    for name in &["", "  \t "] {
        session.set_name(*name);
        match session.export(&engine) {
            Err(ExportError::NameRequired) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(Some(Status::NameRequired), session.status());
    }

    session.set_name("Sara");
    let export = session.export(&engine).unwrap();
    assert_that!(export.filename()).starts_with("greeting-");
    assert_that!(session.status()).is_none();
}

#[test]
fn export_requires_name_for_every_template_and_alignment() {
    let engine = engine(FakeLoader::default());
    let mut session = Session::new(engine.registry());
    for id in engine.registry().ids() {
        session.select_template(engine.registry(), id);
        session.load_current(&engine).unwrap();
        for align in Align::iter_variants() {
            session.set_align(align);
            assert_that!(session.export(&engine)).is_err();
        }
    }
}

#[test]
fn export_not_loaded() {
    let engine = engine(FakeLoader::default());
    let mut session = Session::new(engine.registry());
    session.set_name("Sara");
    match session.export(&engine) {
        Err(ExportError::Render(RenderError::NotLoaded)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn copy_link() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    session.set_name("Sara");

    let mut clipboard = FakeClipboard::default();
    let status = session.copy_link("https://example.com/greet", &mut clipboard);
    assert_eq!(Status::LinkCopied, status);
    assert_eq!(Some(Status::LinkCopied), session.status());
    assert_eq!(Some("https://example.com/greet?t=template1&name=Sara&align=center"),
               clipboard.text.as_ref().map(|s| s.as_str()));
}

#[test]
fn copy_link_denied() {
    let registry = TemplateRegistry::builtin();
    let mut session = Session::new(&registry);
    let status = session.copy_link("https://example.com/", FakeClipboard{denied: true, ..Default::default()});
    assert_eq!(Status::CopyManually, status);
    assert_eq!("Copy failed, copy the link manually from the address bar.", status.message());
}
