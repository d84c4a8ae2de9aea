//!
//! greetsh -- Personalized greetings in the shell
//!

             extern crate base64;
             extern crate clap;
             extern crate exitcode;
             extern crate greeting;
             extern crate isatty;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate slog;
             extern crate slog_envlogger;
             extern crate slog_scope;
             extern crate slog_stdlog;
             extern crate slog_term;

// `log` must be at the end of these declarations because we want to simultaneously:
// * use the standard `log` macros (which would be shadowed by `slog`)
// * be able to initialize the slog logger using slog macros like o!()
#[macro_use] extern crate log;

#[cfg(test)] #[macro_use] extern crate spectral;


mod args;
mod clipboard;
mod logging;


use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::exit;

use greeting::{Alignment, EngineBuilder, Export, ExportError, Session, TemplateRegistry};

use crate::args::{ArgsError, Options, Output};
use crate::clipboard::Osc52;


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("greetsh");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

    /// Git revision the binary was built from, as filled out by the build script.
    static ref REVISION: Option<&'static str> = option_env!("X_GREETSH_REVISION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let code = match e {
            ArgsError::Parse(ref e) if !e.use_stderr() => exitcode::OK,
            _ => exitcode::USAGE,
        };
        print_args_error(e).ok();
        exit(code);
    });

    logging::init(opts.verbosity).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    debug!("{} {} (revision: {})",
        *NAME, VERSION.unwrap_or("<UNKNOWN>"), REVISION.unwrap_or("<UNKNOWN>"));
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let registry = match opts.templates_file {
        Some(ref path) => TemplateRegistry::from_file(path).unwrap_or_else(|e| {
            error!("Failed to load templates from {}: {}", path.display(), e);
            exit(exitcode::CONFIG);
        }),
        None => TemplateRegistry::builtin(),
    };
    if opts.list {
        list_templates(&registry).unwrap_or_else(|e| {
            error!("Failed to list templates: {}", e);
            exit(exitcode::IOERR);
        });
        return;
    }

    let mut session = prepare_session(&opts, &registry);
    if opts.copy_link {
        let status = session.copy_link(&opts.base_url, Osc52::stderr());
        eprintln!("{}", status);
    }
    if opts.print_link {
        match greeting::smart_link(&opts.base_url, session.state()) {
            Ok(link) => println!("{}", link),
            Err(e) => {
                error!("Cannot build the link: {}", e);
                exit(exitcode::SOFTWARE);
            }
        }
        return;
    }

    let export = render(&opts, registry, &mut session);
    write_output(&opts.output, export).unwrap_or_else(|e| {
        error!("Failed to write the greeting: {}", e);
        exit(exitcode::CANTCREAT);
    });
}

/// Print an error that may occur while parsing arguments.
fn print_args_error(e: ArgsError) -> io::Result<()> {
    match e {
        ArgsError::Parse(ref e) =>
            // In case of generic parse error,
            // message provided by the clap library will be the usage string.
            if e.use_stderr() {
                writeln!(&mut io::stderr(), "{}", e.message)
            } else {
                writeln!(&mut io::stdout(), "{}", e.message)
            },
        e => {
            writeln!(&mut io::stderr(), "Failed to parse arguments: {}", e)
        },
    }
}

/// Print the identifiers of available templates, marking the default one.
fn list_templates(registry: &TemplateRegistry) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (id, template) in registry.iter() {
        let marker = if id == registry.default_id() { "*" } else { " " };
        writeln!(out, "{} {}\t{}", marker, id, template.src)?;
    }
    Ok(())
}

/// Create the session with the state requested on the command line.
///
/// Explicit flags take precedence over the values from `--link`.
fn prepare_session(opts: &Options, registry: &TemplateRegistry) -> Session {
    let mut session = Session::new(registry);
    if let Some(ref link) = opts.link {
        session.hydrate(registry, link);
    }
    if let Some(ref template) = opts.template {
        if !session.select_template(registry, template) {
            warn!("Unknown template `{}`, using `{}` instead (available: {})",
                template, session.state().template,
                registry.ids().collect::<Vec<_>>().join(", "));
        }
    }
    if let Some(ref name) = opts.name {
        session.set_name(name.as_str());
    }
    if let Some(ref align) = opts.align {
        session.set_align(Alignment::parse(align));
    }
    debug!("Session prepared: {:?}", session);
    session
}

/// Render & export the greeting of the session.
/// Exits the program if that fails.
fn render(opts: &Options, registry: TemplateRegistry, session: &mut Session) -> Export {
    let mut builder = EngineBuilder::new()
        .assets_directory(&opts.assets_dir)
        .fonts_directory(&opts.fonts_dir)
        .registry(registry);
    if let Some(ref family) = opts.font_family {
        builder = builder.font_family(family.clone());
    }
    let engine = builder.build().unwrap_or_else(|e| {
        error!("Failed to set up rendering: {}", e);
        exit(exitcode::UNAVAILABLE);
    });

    if let Err(e) = session.load_current(&engine) {
        debug!("Load error: {:?}", e);
        if let Some(status) = session.status() {
            eprintln!("{}", status);
        }
        exit(exitcode::UNAVAILABLE);
    }

    session.export(&engine).unwrap_or_else(|e| {
        match e {
            ExportError::NameRequired => {
                if let Some(status) = session.status() {
                    eprintln!("{}", status);
                }
                exit(exitcode::USAGE);
            }
            e => {
                error!("Error while rendering the greeting: {}", e);
                exit(exitcode::SOFTWARE);
            }
        }
    })
}

/// Write the exported greeting to the requested output.
fn write_output(output: &Output, export: Export) -> io::Result<()> {
    match *output {
        Output::Stdout => {
            trace!("Writing {} bytes to standard output...", export.len());
            if isatty::stdout_isatty() {
                warn!("Standard output is a terminal.");
            }
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            stdout.write_all(export.bytes())?;
            stdout.flush()
        }
        Output::Path(ref path) => write_file(path, &export),
        Output::Suggested => write_file(Path::new(export.filename()), &export),
    }
}

fn write_file(path: &Path, export: &Export) -> io::Result<()> {
    trace!("Opening output file {}...", path.display());
    let mut file = fs::OpenOptions::new()
        .create(true).write(true).truncate(true)
        .open(path)?;
    file.write_all(export.bytes())?;
    info!("Greeting ({}) written to {}", export.mime_type(), path.display());
    Ok(())
}
