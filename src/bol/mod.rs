//! Leading-whitespace (beginning of line) classification and rewriting.
//!
//! This module contains the indentation kernel organized into submodules:
//! - [`scanner`]: leading space/tab counting
//! - [`rewriter`]: untabify/tabify rewrite pass
//!
//! Same shape as the line-ending kernel, applied to a two-style alphabet:
//! scan first, resolve the target style, then rewrite.

pub mod rewriter;
pub mod scanner;

pub use rewriter::{rewrite_indentation, tabify, untabify};
pub use scanner::{scan_indentation, BolScan};

/// A concrete indentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tabs,
    Spaces,
}

impl IndentStyle {
    /// The name used in summary lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IndentStyle::Tabs => "tabs",
            IndentStyle::Spaces => "spaces",
        }
    }
}

/// Requested indentation style: a concrete style or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BolChoice {
    Tabs,
    Spaces,
    Auto,
}

impl BolChoice {
    /// Values accepted on the command line.
    pub const VALUES: &'static [&'static str] = &["tabs", "spaces", "auto"];

    /// Parse a CLI token. The CLI layer restricts input to [`Self::VALUES`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "tabs" => Some(BolChoice::Tabs),
            "spaces" => Some(BolChoice::Spaces),
            "auto" => Some(BolChoice::Auto),
            _ => None,
        }
    }

    /// Resolve to a concrete style, picking the dominant one for `auto`.
    /// Spaces win ties.
    #[must_use]
    pub fn resolve(self, scan: &BolScan) -> IndentStyle {
        match self {
            BolChoice::Tabs => IndentStyle::Tabs,
            BolChoice::Spaces => IndentStyle::Spaces,
            BolChoice::Auto => {
                if scan.spaces >= scan.tabs {
                    IndentStyle::Spaces
                } else {
                    IndentStyle::Tabs
                }
            }
        }
    }
}
