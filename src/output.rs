//! Output formatting for search results

use crate::index::types::Occurrence;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One query's results, as emitted in JSON mode
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub found: bool,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<&'a [Occurrence]>,
}

impl<'a> SearchReport<'a> {
    pub fn new(query: &'a str, results: Option<&'a [Occurrence]>) -> Self {
        Self {
            query,
            found: results.is_some(),
            count: results.map_or(0, <[_]>::len),
            occurrences: results,
        }
    }

    /// Count-only report
    pub fn count(query: &'a str, count: usize) -> Self {
        Self {
            query,
            found: count > 0,
            count,
            occurrences: None,
        }
    }
}

/// Stdout writer; colors only when requested and stdout is a terminal
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color && io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print one query's occurrences as `path:token:offset` lines under a heading
pub fn print_results<W: WriteColor>(
    out: &mut W,
    query: &str,
    results: Option<&[Occurrence]>,
    documents: &[PathBuf],
) -> io::Result<()> {
    let Some(results) = results else {
        return print_not_found(out, query);
    };

    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(out, "{}", query)?;
    out.reset()?;
    writeln!(out, ": {} occurrence{}", results.len(), plural(results.len()))?;

    for occurrence in results {
        print_occurrence(out, occurrence, documents)?;
    }

    Ok(())
}

fn print_occurrence<W: WriteColor>(
    out: &mut W,
    occurrence: &Occurrence,
    documents: &[PathBuf],
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    match documents.get(occurrence.document_id as usize) {
        Some(path) => write!(out, "{}", path.display())?,
        None => write!(out, "#{}", occurrence.document_id)?,
    }
    out.reset()?;
    write!(out, ":")?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", occurrence.token_id)?;
    out.reset()?;
    write!(out, ":")?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(out, "{}", occurrence.offset)?;
    out.reset()?;

    Ok(())
}

fn print_not_found<W: WriteColor>(out: &mut W, query: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(out, "{}", query)?;
    out.reset()?;
    writeln!(out, ": not found")
}

/// Print `query:count` (for --count)
pub fn print_count<W: WriteColor>(out: &mut W, query: &str, count: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    write!(out, "{}", query)?;
    out.reset()?;
    write!(out, ":")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(out, "{}", count)?;
    out.reset()?;
    Ok(())
}

/// Print one JSON document per line
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Print the document id legend
pub fn print_documents<W: WriteColor>(out: &mut W, documents: &[PathBuf]) -> io::Result<()> {
    for (id, path) in documents.iter().enumerate() {
        print_document(out, id, path)?;
    }
    Ok(())
}

fn print_document<W: WriteColor>(out: &mut W, id: usize, path: &Path) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{:>4}", id)?;
    out.reset()?;
    writeln!(out, "  {}", path.display())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
