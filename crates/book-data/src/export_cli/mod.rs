//! CLI support for bulk catalogue export.
//!
//! The `book-export` binary delegates to these functions so argument parsing
//! and export can be exercised in tests without spawning a subprocess.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::export::{write_csv, write_json};
use crate::generator::generate_export;
use crate::request::GenerationRequest;

mod error;

pub use error::CliError;

const DEFAULT_PAGES: u64 = 1;

/// Output encodings supported by the exporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values with one header row.
    #[default]
    Csv,
    /// A pretty-printed JSON array.
    Json,
}

impl FromStr for ExportFormat {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnknownFormat {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

/// Parsed options for the export CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    request: GenerationRequest,
    format: ExportFormat,
}

impl Options {
    /// Returns the generation request the export covers.
    ///
    /// `request().page` holds the number of pages to export, so the export
    /// spans absolute indices `1..=pages * page_size`.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::export_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec!["--pages".to_owned(), "3".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.request().page, 3);
    /// ```
    #[must_use]
    pub const fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Returns the selected output format.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into export options.
///
/// Unspecified flags take the catalogue defaults; `--pages` defaults to 1.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, lacks a value, or its value
/// cannot be parsed.
///
/// # Example
///
/// ```
/// use book_data::export_cli::{ExportFormat, ParseOutcome, parse_args};
///
/// let args = vec![
///     "--seed".to_owned(),
///     "mossy-owl".to_owned(),
///     "--format".to_owned(),
///     "json".to_owned(),
/// ];
///
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// assert_eq!(options.request().seed, "mossy-owl");
/// assert_eq!(options.format(), ExportFormat::Json);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut request = GenerationRequest {
        page: DEFAULT_PAGES,
        ..GenerationRequest::default()
    };
    let mut format = ExportFormat::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--seed" => request.seed = next_value(&mut args, "--seed")?,
            "--locale" => request.locale = next_value(&mut args, "--locale")?,
            "--likes-avg" => {
                let value = next_value(&mut args, "--likes-avg")?;
                request.likes_avg = parse_number(&value, "--likes-avg")?;
            }
            "--reviews-avg" => {
                let value = next_value(&mut args, "--reviews-avg")?;
                request.reviews_avg = parse_number(&value, "--reviews-avg")?;
            }
            "--pages" => {
                let value = next_value(&mut args, "--pages")?;
                request.page = parse_number(&value, "--pages")?;
            }
            "--page-size" => {
                let value = next_value(&mut args, "--page-size")?;
                request.page_size = parse_number(&value, "--page-size")?;
            }
            "--format" => format = next_value(&mut args, "--format")?.parse()?,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options { request, format }))
}

/// Generates the export described by `options` and writes it to `out`.
///
/// Returns the number of books written.
///
/// # Errors
///
/// Returns [`CliError::Generation`] when the options describe an invalid
/// window and [`CliError::Export`] when writing fails. Nothing is written on a
/// validation failure.
///
/// # Example
///
/// ```
/// use book_data::export_cli::{ParseOutcome, parse_args, run_export};
///
/// let args = vec!["--pages".to_owned(), "2".to_owned(), "--page-size".to_owned(), "5".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let mut out = Vec::new();
/// let written = run_export(&options, &mut out).expect("export");
/// assert_eq!(written, 10);
/// ```
pub fn run_export<W: Write>(options: &Options, out: W) -> Result<usize, CliError> {
    let books = generate_export(&options.request)?;
    match options.format {
        ExportFormat::Csv => write_csv(&books, out)?,
        ExportFormat::Json => write_json(&books, out)?,
    }
    Ok(books.len())
}

/// Formats the summary line the CLI prints after a successful export.
#[must_use]
pub fn summary_message(options: &Options, written: usize) -> String {
    format!(
        "Exported {written} books (seed=\"{}\", locale={}, format={})",
        options.request.seed, options.request.locale, options.format
    )
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
