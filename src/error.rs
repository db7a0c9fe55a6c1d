//! Error types and result aliases for whitespace-tools.
//!
//! Once an input buffer is in hand the transformation kernels are total
//! functions and cannot fail, so the crate only ever propagates I/O and
//! configuration errors:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
