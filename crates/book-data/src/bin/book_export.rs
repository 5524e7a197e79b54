//! Bulk export CLI for the synthetic book catalogue.
//!
//! This binary delegates to `book_data::export_cli` for parsing and export
//! logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use book_data::export_cli::{CliError, ParseOutcome, parse_args, run_export, summary_message};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let written = run_export(&options, io::stdout().lock())?;
            let message = summary_message(&options, written);
            if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
                drop(err);
            }
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: book-export [options]\n",
        "\n",
        "Writes the first <pages> * <page-size> generated books to stdout.\n",
        "\n",
        "Options:\n",
        "  --seed <seed>          Base seed (defaults to 42)\n",
        "  --locale <code>        Locale code: en_US, fr, de (defaults to en_US)\n",
        "  --likes-avg <n>        Average likes per book (defaults to 3.5)\n",
        "  --reviews-avg <n>      Average reviews per book (defaults to 2)\n",
        "  --pages <n>            Number of pages to export (defaults to 1)\n",
        "  --page-size <n>        Books per page (defaults to 20)\n",
        "  --format <csv|json>    Output format (defaults to csv)\n",
        "  -h, --help             Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}
