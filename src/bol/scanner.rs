//! Leading-whitespace classification.

/// Space and tab counts inside the leading run of each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BolScan {
    /// Space characters within leading runs
    pub spaces: usize,
    /// Tab characters within leading runs
    pub tabs: usize,
}

impl BolScan {
    /// The label reported for this classification: `tabs`, `spaces`, or
    /// `mixed`. An input with no leading whitespace at all counts as
    /// `spaces`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.tabs > 0 {
            if self.spaces > 0 {
                "mixed"
            } else {
                "tabs"
            }
        } else {
            "spaces"
        }
    }
}

/// Count space and tab characters inside each line's leading run.
///
/// The beginning-of-line flag starts true and is set back to true only by
/// `\n`; a lone `\r` does not start a new line, so a CR-only file has a
/// single leading run. Any other character clears the flag for the rest of
/// the line.
#[must_use]
pub fn scan_indentation(contents: &[u8]) -> BolScan {
    let mut scan = BolScan::default();
    let mut bol = true;
    for &b in contents {
        match b {
            b' ' if bol => scan.spaces += 1,
            b'\t' if bol => scan.tabs += 1,
            b'\n' => bol = true,
            _ => bol = false,
        }
    }
    scan
}
