use std::io::{self, Write};

use ndl::BookInfo;
use serde_json::json;

const BANNER_WIDTH: usize = 50;

/// Writes the fields of `info` as a block of `■label` lines followed by indented values.
///
/// Each value has its label text removed, so `出版社:テスト出版` is shown as `:テスト出版`. A
/// padded label such as `注記` keeps its padding in the value.
pub fn write_book_info<W: Write>(out: &mut W, info: &BookInfo) -> io::Result<()> {
    let banner = "*".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}")?;
    for (label, values) in info {
        writeln!(out, "■{label}")?;
        for value in values {
            writeln!(out, "    {}", value.replace(label.as_str(), ""))?;
        }
    }
    writeln!(out, "{banner}")?;
    writeln!(out)
}

pub fn write_no_hit<W: Write>(out: &mut W, isbn: &str) -> io::Result<()> {
    writeln!(out, "{isbn} is no hit.")
}

/// Writes one JSON line for `isbn`, with a `null` info on a no hit.
pub fn write_json<W: Write>(out: &mut W, isbn: &str, info: Option<&BookInfo>) -> io::Result<()> {
    let line = json!({ "isbn": isbn, "info": info });
    writeln!(out, "{line}")
}
