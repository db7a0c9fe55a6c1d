//! Line-ending normalization pass.

use std::io::{self, Write};

use super::LineEnding;

/// Rewrite every terminator in `contents` to `target` and return the new
/// line count.
///
/// Re-scans with the same CR/CRLF/LF detection as the classifier: every
/// detected terminator, of any original style, is replaced by the target
/// sequence; ordinary bytes pass through unchanged, written as whole runs.
/// The output length differs from the input only in terminator regions.
pub fn rewrite_line_endings<W: Write>(
    contents: &[u8],
    target: LineEnding,
    out: &mut W,
) -> io::Result<usize> {
    let eol = target.as_bytes();
    let mut lines = 1;
    let mut run_start = 0;
    let mut i = 0;
    while i < contents.len() {
        let b = contents[i];
        if b == b'\r' || b == b'\n' {
            out.write_all(&contents[run_start..i])?;
            out.write_all(eol)?;
            lines += 1;
            i += if b == b'\r' && contents.get(i + 1) == Some(&b'\n') {
                2
            } else {
                1
            };
            run_start = i;
        } else {
            i += 1;
        }
    }
    out.write_all(&contents[run_start..])?;
    Ok(lines)
}
