//! Output formatting for translation pairs.
//!
//! Kept apart from the core so the library can be used without printing
//! side effects.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::TranslationPair;

/// Column headers for the table output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub source: String,
    pub target: String,
}

impl Labels {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Print pairs as a bordered two-column table to stdout.
pub fn print_table(pairs: &[TranslationPair], labels: &Labels) -> io::Result<()> {
    write_table(pairs, labels, &mut io::stdout().lock())
}

/// Write pairs as a bordered two-column table.
///
/// Headers are upper-cased and centered, cells are left-aligned. Widths use
/// the Unicode display width so CJK text and umlauts line up.
pub fn write_table<W: Write>(
    pairs: &[TranslationPair],
    labels: &Labels,
    writer: &mut W,
) -> io::Result<()> {
    let headers = [labels.source.to_uppercase(), labels.target.to_uppercase()];

    let mut widths = [headers[0].width(), headers[1].width()];
    for pair in pairs {
        widths[0] = widths[0].max(pair.source.width());
        widths[1] = widths[1].max(pair.target.width());
    }

    let border = format!(
        "+{}+{}+",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1] + 2)
    );

    writeln!(writer, "{}", border)?;
    write!(writer, "|")?;
    for (header, &width) in headers.iter().zip(&widths) {
        let padding = width - header.width();
        let left = padding / 2;
        write!(
            writer,
            " {:left$}{}{:right$} |",
            "",
            header.bold(),
            "",
            left = left,
            right = padding - left
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", border)?;

    if pairs.is_empty() {
        return Ok(());
    }

    for pair in pairs {
        writeln!(
            writer,
            "| {}{:pad_source$} | {}{:pad_target$} |",
            pair.source,
            "",
            pair.target,
            "",
            pad_source = widths[0] - pair.source.width(),
            pad_target = widths[1] - pair.target.width()
        )?;
    }
    writeln!(writer, "{}", border)
}

/// Print pairs as pretty JSON to stdout.
pub fn print_json(pairs: &[TranslationPair]) -> io::Result<()> {
    write_json(pairs, &mut io::stdout().lock())
}

/// Write pairs as a pretty JSON array of `{ "source", "target" }` objects.
pub fn write_json<W: Write>(pairs: &[TranslationPair], writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, pairs)?;
    writeln!(writer)
}

/// Print a note to stderr when a lookup produced nothing.
pub fn print_no_results(term: &str) {
    eprintln!(
        "{} no translations found for \"{}\"",
        "warning:".bold().yellow(),
        term
    );
}
