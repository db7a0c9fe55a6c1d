//! Leading-whitespace normalization pass.

use std::io::{self, Write};

use super::scanner::BolScan;
use super::IndentStyle;

/// Expand tabs in a leading run into spaces using fixed tab stops.
///
/// Each tab advances to the next multiple of `tab_size` columns; the column
/// is the output length so far. Spaces pass through, so the result is a
/// pure-spaces run.
#[must_use]
pub fn untabify(lead: &[u8], tab_size: usize) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(lead.len() * tab_size);
    for &b in lead {
        if b == b'\t' {
            let fill = tab_size - expanded.len() % tab_size;
            expanded.resize(expanded.len() + fill, b' ');
        } else {
            expanded.push(b);
        }
    }
    expanded
}

/// Collapse a pure-spaces leading run into one tab per full tab stop.
///
/// Leftover spaces that do not reach a full stop are kept literally, unless
/// `round` is set, in which case they are dropped.
#[must_use]
pub fn tabify(expanded: &[u8], tab_size: usize, round: bool) -> Vec<u8> {
    let mut lead = vec![b'\t'; expanded.len() / tab_size];
    if !round {
        lead.resize(lead.len() + expanded.len() % tab_size, b' ');
    }
    lead
}

/// Rewrite each line's leading whitespace to `style` and return the new
/// leading space/tab counts.
///
/// Lines are delimited by `\n` only, matching the classifier. The leading
/// run ends at the first byte that is neither space nor tab, at the newline
/// itself, or at end of input; a trailing partial indentation is still
/// converted. Everything after the leading run passes through unchanged up
/// to and including the newline.
pub fn rewrite_indentation<W: Write>(
    contents: &[u8],
    style: IndentStyle,
    tab_size: usize,
    round: bool,
    out: &mut W,
) -> io::Result<BolScan> {
    let mut counts = BolScan::default();
    let mut i = 0;
    while i < contents.len() {
        // Leading run of the current line.
        let lead_start = i;
        while i < contents.len() && (contents[i] == b' ' || contents[i] == b'\t') {
            i += 1;
        }
        emit_lead(
            &contents[lead_start..i],
            style,
            tab_size,
            round,
            &mut counts,
            out,
        )?;

        // Rest of the line, up to and including the newline.
        let rest_start = i;
        while i < contents.len() && contents[i] != b'\n' {
            i += 1;
        }
        if i < contents.len() {
            i += 1;
        }
        out.write_all(&contents[rest_start..i])?;
    }
    Ok(counts)
}

/// Convert one leading run and write it, attributing the emitted
/// composition to `counts`.
fn emit_lead<W: Write>(
    lead: &[u8],
    style: IndentStyle,
    tab_size: usize,
    round: bool,
    counts: &mut BolScan,
    out: &mut W,
) -> io::Result<()> {
    if lead.is_empty() {
        return Ok(());
    }
    let expanded = untabify(lead, tab_size);
    let emitted = match style {
        IndentStyle::Spaces => expanded,
        IndentStyle::Tabs => tabify(&expanded, tab_size, round),
    };
    for &b in &emitted {
        if b == b'\t' {
            counts.tabs += 1;
        } else {
            counts.spaces += 1;
        }
    }
    out.write_all(&emitted)
}
