//! Beginning of line space fixer entry point.

use std::process::ExitCode;

use whitespace_tools::parse_spacer_args;
use whitespace_tools::process::run_spacer;
use whitespace_tools::report;

fn main() -> ExitCode {
    let args = parse_spacer_args();
    match run_spacer(&args) {
        // Negative codes (usage errors) saturate to the 255 the shell sees.
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)),
        Err(err) => {
            report::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
