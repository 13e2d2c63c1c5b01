//! Output formatting for occurrence results

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// JSON report for a single pattern
#[derive(Debug, Serialize)]
pub struct OccurrenceReport {
    pub pattern: String,
    pub count: usize,
    /// Zero-based, ascending
    pub offsets: Vec<usize>,
}

impl OccurrenceReport {
    pub fn new(pattern: &[u8], offsets: Vec<usize>) -> Self {
        Self {
            pattern: String::from_utf8_lossy(pattern).into_owned(),
            count: offsets.len(),
            offsets,
        }
    }
}

/// Print offsets on one line separated by spaces
pub fn print_offsets<W: Write>(out: &mut W, offsets: &[usize], one_based: bool) -> io::Result<()> {
    let shift = usize::from(one_based);
    let line = offsets
        .iter()
        .map(|&pos| (pos + shift).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line)
}

/// Print the report as a single JSON line
pub fn print_json<W: Write>(out: &mut W, report: &OccurrenceReport) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)
}

/// Print each match with `context` bytes around it, match highlighted
///
/// Lines read `offset:before<match>after`; newlines and other control
/// bytes in the snippet are escaped so each match stays on one line.
pub fn print_context_matches<W: WriteColor>(
    out: &mut W,
    text: &[u8],
    offsets: &[usize],
    pattern_len: usize,
    context: usize,
    one_based: bool,
) -> io::Result<()> {
    for &pos in offsets {
        let match_end = (pos + pattern_len).min(text.len());
        let start = pos.saturating_sub(context);
        let end = (match_end + context).min(text.len());

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", pos + usize::from(one_based))?;
        out.reset()?;
        write!(out, ":")?;

        // Text before match
        write!(out, "{}", escape_snippet(&text[start..pos]))?;

        // The match itself (highlighted)
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", escape_snippet(&text[pos..match_end]))?;
        out.reset()?;

        // Text after match
        writeln!(out, "{}", escape_snippet(&text[match_end..end]))?;
    }

    Ok(())
}

fn escape_snippet(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            b'\t' | b' '..=b'~' => (b as char).to_string(),
            _ => std::ascii::escape_default(b).to_string(),
        })
        .collect()
}
