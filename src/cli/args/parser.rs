//! Module defining the command line argument parser.

use std::convert::TryFrom;
use std::path::PathBuf;

use clap::{self, AppSettings, Arg, ArgMatches};
use greeting::{FontFamily, DEFAULT_ASSETS_DIRECTORY, DEFAULT_FONTS_DIRECTORY};

use crate::{NAME, VERSION};
use super::model::{ArgsError, Options, Output};


impl<'a> TryFrom<ArgMatches<'a>> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches<'a>) -> Result<Self, Self::Error> {
        let verbose_count = matches.occurrences_of(OPT_VERBOSE) as isize;
        let quiet_count = matches.occurrences_of(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let font_family = match matches.value_of(OPT_FONT) {
            Some(f) => Some(f.parse::<FontFamily>()?),
            None => None,
        };

        // Output path can be set explicit to stdout via `-`.
        let output = match matches.value_of(OPT_OUTPUT).map(|p| p.trim()) {
            Some("-") => Output::Stdout,
            Some(p) => Output::Path(PathBuf::from(p)),
            None => Output::Suggested,
        };

        Ok(Options{
            verbosity,
            templates_file: matches.value_of(OPT_TEMPLATES).map(PathBuf::from),
            list: matches.is_present(OPT_LIST),
            link: matches.value_of(OPT_LINK).map(String::from),
            template: matches.value_of(OPT_TEMPLATE).map(|t| t.trim().to_owned()),
            name: matches.value_of(OPT_NAME).map(String::from),
            align: matches.value_of(OPT_ALIGN).map(String::from),
            copy_link: matches.is_present(OPT_COPY_LINK),
            print_link: matches.is_present(OPT_PRINT_LINK),
            base_url: matches.value_of(OPT_BASE_URL).unwrap_or(DEFAULT_BASE_URL).to_owned(),
            assets_dir: PathBuf::from(
                matches.value_of(OPT_ASSETS).unwrap_or(DEFAULT_ASSETS_DIRECTORY)),
            fonts_dir: PathBuf::from(
                matches.value_of(OPT_FONTS).unwrap_or(DEFAULT_FONTS_DIRECTORY)),
            font_family,
            output,
        })
    }
}


// Parser definition

/// Type of the argument parser object
/// (which is called an "App" in clap's silly nomenclature).
pub type Parser<'p> = clap::App<'p, 'p>;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const DEFAULT_BASE_URL: &str = "https://example.com/";

const OPT_TEMPLATE: &str = "template";
const OPT_NAME: &str = "name";
const OPT_ALIGN: &str = "align";
const OPT_LINK: &str = "link";
const OPT_OUTPUT: &str = "output";
const OPT_TEMPLATES: &str = "templates";
const OPT_ASSETS: &str = "assets";
const OPT_FONTS: &str = "fonts";
const OPT_FONT: &str = "font";
const OPT_BASE_URL: &str = "base-url";
const OPT_PRINT_LINK: &str = "print-link";
const OPT_COPY_LINK: &str = "copy-link";
const OPT_LIST: &str = "list";
const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";


/// Create the parser for application's command line.
pub fn create_parser<'p>() -> Parser<'p> {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)

        .setting(AppSettings::StrictUtf8)

        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DontCollapseArgsInUsage)
        .setting(AppSettings::DeriveDisplayOrder)

        // Greeting state.
        .arg(Arg::with_name(OPT_TEMPLATE)
            .long("template").short("t")
            .value_name("ID")
            .help("Template to use")
            .long_help(concat!(
                "Identifier of the template to render the greeting on.\n\n",
                "Unknown identifiers are ignored in favor of the current template. ",
                "Use --list to see what is available.")))
        .arg(Arg::with_name(OPT_NAME)
            .long("name").short("n")
            .value_name("NAME")
            .allow_hyphen_values(true)
            .help("Name to write onto the greeting"))
        .arg(Arg::with_name(OPT_ALIGN)
            .long("align").short("a")
            .value_name("ALIGN")
            .help("Text alignment (left, center, right)")
            .long_help(concat!(
                "Alignment of the name within its text box: left, center or right.\n\n",
                "Any other value is kept as is (e.g. in the shareable link), ",
                "and the name is then aligned to the start of the line: ",
                "left for Latin names, right for Arabic ones.")))
        .arg(Arg::with_name(OPT_LINK)
            .long("link").short("l")
            .value_name("URL")
            .help("Shareable link to restore the greeting from")
            .long_help(concat!(
                "Shareable link (or just its query string) to restore the greeting from.\n\n",
                "Explicit --template, --name and --align flags take precedence over the link.")))

        // Output flags.
        .arg(Arg::with_name(OPT_OUTPUT)
            .long("output").short("o")
            .value_name("PATH")
            .required(false)
            .help("File to write the rendered greeting to")
            .long_help(concat!(
                "What file should the rendered PNG be written to.\n\n",
                "By default, the greeting is saved in the current directory ",
                "as greeting-<timestamp>.png, where the timestamp is in milliseconds. ",
                "When this flag is set to `-` (single dash), the image is written ",
                "to standard output instead.")))
        .arg(Arg::with_name(OPT_PRINT_LINK)
            .long("print-link")
            .conflicts_with(OPT_LIST)
            .help("Print the shareable link instead of rendering"))
        .arg(Arg::with_name(OPT_COPY_LINK)
            .long("copy-link")
            .conflicts_with(OPT_LIST)
            .help("Copy the shareable link to the terminal's clipboard"))
        .arg(Arg::with_name(OPT_BASE_URL)
            .long("base-url")
            .value_name("URL")
            .default_value(DEFAULT_BASE_URL)
            .help("Page URL the shareable link points to"))

        // Resources.
        .arg(Arg::with_name(OPT_TEMPLATES)
            .long("templates")
            .value_name("FILE")
            .help("JSON file with template definitions"))
        .arg(Arg::with_name(OPT_LIST)
            .long("list")
            .help("List available templates and exit"))
        .arg(Arg::with_name(OPT_ASSETS)
            .long("assets")
            .value_name("DIR")
            .default_value(DEFAULT_ASSETS_DIRECTORY)
            .help("Directory with template images"))
        .arg(Arg::with_name(OPT_FONTS)
            .long("fonts")
            .value_name("DIR")
            .default_value(DEFAULT_FONTS_DIRECTORY)
            .help("Directory with font files"))
        .arg(Arg::with_name(OPT_FONT)
            .long("font")
            .value_name("FAMILY")
            .help("Font family to write the name with")
            .long_help(concat!(
                "Comma-separated list of font names to write the name with, ",
                "the first one found in the fonts directory being used.")))

        // Verbosity flags.
        .arg(Arg::with_name(OPT_VERBOSE)
            .long("verbose").short("v")
            .multiple(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::with_name(OPT_QUIET)
            .long("quiet").short("q")
            .multiple(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .help_short("H")
        .version_short("V")
}
