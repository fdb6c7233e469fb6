//! A CLI tool for inspecting the contents of a DICOM file
//! by printing it in a human readable format.
use clap::Parser;
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_dump::{dump_file, ColorMode, DumpOptions};
use dcmcodec_parser::{meta, open_file, DecodeOptions, ReadOptions};
use snafu::Report;
use std::io::{stdout, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{error, Level};

/// Exit code for when an error emerged while reading the DICOM file.
const ERROR_READ: i32 = -2;
/// Exit code for when an error emerged while dumping the file.
const ERROR_PRINT: i32 = -3;

/// Output width when none is given and no terminal is attached.
const DEFAULT_WIDTH: u32 = 120;

/// Dump the contents of DICOM files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file(s) to read
    #[clap(required = true)]
    files: Vec<PathBuf>,
    /// Skip elements which cannot be decoded
    /// instead of failing
    #[clap(long = "lenient")]
    lenient: bool,
    /// Do not print the file meta group
    #[clap(long = "no-meta")]
    no_meta: bool,
    /// Print all values to the end
    #[clap(long = "no-limit", conflicts_with = "width")]
    no_limit: bool,
    /// The width of the display
    /// (default is to check automatically)
    #[clap(short = 'w', long = "width")]
    width: Option<u32>,
    /// The color mode
    #[clap(long = "color", default_value = "auto")]
    color: ColorMode,
    /// Treat attributes missing from the dictionary as UN
    /// when reading implicit VR data sets
    #[clap(long = "unknown-as-un")]
    unknown_as_un: bool,
    /// Stop at the first file which fails
    #[clap(long = "fail-first")]
    fail_first: bool,
    /// Verbose mode
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

impl App {
    fn dump_options(&self) -> DumpOptions {
        let options = DumpOptions::new()
            .no_meta(self.no_meta)
            .color_mode(self.color);
        if self.no_limit {
            return options;
        }
        options.width(self.width.or_else(terminal_width).unwrap_or(DEFAULT_WIDTH))
    }

    fn read_options(&self) -> ReadOptions {
        ReadOptions::new()
            .lenient(self.lenient)
            .decode_options(DecodeOptions::new().unknown_tag_as_un(self.unknown_as_un))
    }
}

fn terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(width, _)| u32::from(width.0))
}

/// Why a single file could not be dumped.
#[derive(Debug)]
enum Failure {
    Read(meta::Error),
    Print(std::io::Error),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Read(_) => ERROR_READ,
            Failure::Print(_) => ERROR_PRINT,
        }
    }

    fn report(&self) {
        match self {
            Failure::Read(e) => eprintln!("{}", Report::from_error(e)),
            // the reader went away, nothing left to say
            Failure::Print(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Failure::Print(e) => eprintln!("[ERROR] {}", Report::from_error(e)),
        }
    }
}

fn main() {
    let app = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if app.verbose { Level::DEBUG } else { Level::WARN })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
    });

    std::process::exit(run(&app));
}

/// Dump every file given, returning the process exit code.
fn run(app: &App) -> i32 {
    let options = app.dump_options();
    let read_options = app.read_options();
    let fail_first = app.files.len() == 1 || app.fail_first;
    let mut failures: i32 = 0;

    for path in &app.files {
        println!("{}: ", path.display());
        if let Err(failure) = dump_path(path, read_options, &options) {
            failure.report();
            if fail_first {
                return failure.exit_code();
            }
            failures += 1;
        }
    }

    failures
}

fn dump_path(path: &Path, read_options: ReadOptions, options: &DumpOptions) -> Result<(), Failure> {
    let file = open_file(path, read_options).map_err(Failure::Read)?;
    tracing::debug!(
        "Read {} elements in {}",
        file.dataset.len(),
        file.transfer_syntax.name()
    );
    dump_file(stdout().lock(), &file, &StandardDataDictionary, options).map_err(Failure::Print)
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }

    #[test]
    fn options_follow_flags() {
        let app = App::parse_from(["dcmcodec-dump", "--no-meta", "-w", "80", "--lenient", "a.dcm"]);
        let options = app.dump_options();
        assert!(options.no_meta);
        assert_eq!(options.width, Some(80));
        assert!(app.read_options().lenient);

        let app = App::parse_from(["dcmcodec-dump", "--no-limit", "a.dcm"]);
        assert_eq!(app.dump_options().width, None);
    }
}
