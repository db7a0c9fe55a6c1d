//! whitespace-tools - line-ending and indentation normalizers.
//!
//! Two small stream tools built on the same kernel shape:
//! - `ender` classifies and rewrites line endings (CR, LF, CRLF)
//! - `spacer` classifies and rewrites leading whitespace (tabs vs spaces)
//!
//! Both buffer the entire input, classify it in a single pass, and only then
//! rewrite: an `auto` target depends on global statistics, so the first
//! output byte cannot be chosen before the scan has completed.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod bol;
pub mod cli;
pub mod config;
pub mod eol;
pub mod error;
pub mod process;
pub mod report;

// Re-export commonly used types
pub use cli::{
    parse_ender_args, parse_ender_args_from, parse_spacer_args, parse_spacer_args_from, EnderArgs,
    SpacerArgs,
};
pub use config::Config;
pub use error::Result;
