#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    time::Duration,
};

mod display;
mod file;

use ndl::{BookInfo, Catalog, Config};

use clap::Parser;
use eyre::Context;
use log::{info, trace, warn};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:?}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        isbns,
        file,
        interval,
        timeout,
        json,
        verbosity,
        quiet,
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let isbns = isbn_source(isbns, &file)?;

    let config = Config {
        interval: Duration::from_millis(interval),
        timeout: timeout.map(Duration::from_secs),
        ..Config::default()
    };
    let mut catalog = Catalog::new(config).wrap_err("Cannot create the HTTP client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_batch(&mut catalog, &isbns, json, &mut out)?;

    out.flush()?;
    trace!("Done!");
    Ok(())
}

/// The ISBNs given on the command line, or the contents of the ISBN list file when none are.
fn isbn_source(isbns: Vec<String>, file: &Path) -> eyre::Result<Vec<String>> {
    if isbns.is_empty() {
        trace!("No ISBN given - reading the ISBN list file");
        file::read_isbn_list(file)
    } else {
        Ok(isbns)
    }
}

/// Looks up every ISBN in order and writes one result per ISBN; a failed lookup never stops the
/// batch.
fn run_batch<W: Write>(
    catalog: &mut Catalog,
    isbns: &[String],
    json: bool,
    out: &mut W,
) -> io::Result<()> {
    for isbn in isbns {
        let info = lookup(catalog, isbn);

        if json {
            display::write_json(out, isbn, info.as_ref())?;
        } else if let Some(info) = &info {
            display::write_book_info(out, info)?;
        } else {
            display::write_no_hit(out, isbn)?;
        }
    }
    Ok(())
}

/// Looks up `isbn`, folding every failure and an empty result into `None`.
fn lookup(catalog: &mut Catalog, isbn: &str) -> Option<BookInfo> {
    match catalog.book_info(isbn) {
        Ok(info) if info.is_empty() => {
            info!("No known field found on the detail page of ISBN '{isbn}'");
            None
        }
        Ok(info) => Some(info),
        Err(err) => {
            warn!("Lookup of ISBN '{isbn}' failed: {err}");
            None
        }
    }
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "ndl")]
#[clap(about = "Look up bibliographic information of books by ISBN in the National Diet Library")]
#[clap(version, author)]
struct Cli {
    /// The ISBNs to look up, the ISBN list file is used when none are given
    isbns: Vec<String>,

    /// The ISBN list file, one ISBN per line
    #[clap(short, long, parse(from_os_str), default_value = "isbnlist.txt")]
    file: PathBuf,

    /// Minimum number of milliseconds between two detail page requests
    #[clap(short, long, default_value_t = 1000)]
    interval: u64,

    /// Timeout in seconds of each request, waits indefinitely when not set
    #[clap(short, long)]
    timeout: Option<u64>,

    /// Prints one JSON object per ISBN instead of the text blocks
    #[clap(long)]
    json: bool,

    /// How chatty the program is when looking up ISBNs
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only errors are logged to stderr, results are still written to stdout.
    #[clap(short, long)]
    quiet: bool,
}
