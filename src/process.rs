//! Tool pipelines: buffer, scan, resolve, rewrite, report.
//!
//! Each invocation buffers the entire input before writing any output byte:
//! `auto` resolution needs the global statistics from the scan before the
//! target style is known. The scan always runs, even in report-only mode;
//! the rewrite runs only when a new style was requested.
//!
//! The conversion entry points ([`convert_line_endings`],
//! [`convert_indentation`]) are pure buffer-to-sink functions; all file and
//! stream handling lives in [`run_ender`] / [`run_spacer`].

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::bol::{self, BolChoice, BolScan, IndentStyle};
use crate::cli::{EnderArgs, SpacerArgs};
use crate::config::Config;
use crate::eol::{self, EolChoice, EolScan, LineEnding};
use crate::report;
use crate::Result;

/// Exit code for usage errors (missing input file), matching the original
/// tools' `-1`.
pub const USAGE_ERROR: i32 = -1;

/// Outcome of one ender invocation.
#[derive(Debug, Clone)]
pub struct EnderReport {
    /// Classification of the input
    pub scan: EolScan,
    /// Target style and new line count, when a rewrite ran
    pub rewrite: Option<EnderRewrite>,
}

/// Rewrite half of an [`EnderReport`].
#[derive(Debug, Clone, Copy)]
pub struct EnderRewrite {
    pub target: LineEnding,
    pub lines: usize,
}

impl EnderReport {
    /// Render the one-line summary, e.g.
    /// `'in.txt', mixed, 4 lines -> 'out.txt', lf, 4 lines`.
    #[must_use]
    pub fn summary(&self, input: &str, output: &str) -> String {
        let mut msg = format!("'{input}', {}, {} lines", self.scan.label(), self.scan.lines);
        if let Some(rewrite) = &self.rewrite {
            msg.push_str(&format!(
                " -> '{output}', {}, {} lines",
                rewrite.target.label(),
                rewrite.lines
            ));
        }
        msg
    }
}

/// Outcome of one spacer invocation.
#[derive(Debug, Clone)]
pub struct SpacerReport {
    /// Classification of the input
    pub scan: BolScan,
    /// Target style and post-rewrite counts, when a rewrite ran
    pub rewrite: Option<SpacerRewrite>,
}

/// Rewrite half of a [`SpacerReport`].
#[derive(Debug, Clone, Copy)]
pub struct SpacerRewrite {
    pub style: IndentStyle,
    pub counts: BolScan,
}

impl SpacerReport {
    /// Render the one-line summary, e.g. `'in.txt', mixed -> 'out.txt', tabs`.
    #[must_use]
    pub fn summary(&self, input: &str, output: &str) -> String {
        let mut msg = format!("'{input}', {}", self.scan.label());
        if let Some(rewrite) = &self.rewrite {
            msg.push_str(&format!(" -> '{output}', {}", rewrite.counts.label()));
        }
        msg
    }
}

/// Classify `contents` and, when a style was requested, write the converted
/// stream to `out`.
///
/// When the resolved target is already the input's sole style the transform
/// pass is skipped and the buffer is passed through verbatim; the output is
/// byte-identical either way, so the short cut is never taken for mixed
/// input. Nothing is written in report-only mode.
pub fn convert_line_endings<W: Write>(
    contents: &[u8],
    choice: Option<EolChoice>,
    out: &mut W,
) -> io::Result<EnderReport> {
    let scan = eol::scan_line_endings(contents);
    let Some(choice) = choice else {
        return Ok(EnderReport {
            scan,
            rewrite: None,
        });
    };

    let target = choice.resolve(&scan);
    let lines = if scan.is_uniform(target) {
        out.write_all(contents)?;
        scan.lines
    } else {
        eol::rewrite_line_endings(contents, target, out)?
    };

    Ok(EnderReport {
        scan,
        rewrite: Some(EnderRewrite { target, lines }),
    })
}

/// Classify `contents` and, when a style was requested, write the
/// re-indented stream to `out`.
///
/// A file with nothing to convert (target tabs and no leading spaces, or
/// target spaces and no leading tabs) passes through verbatim with its
/// original counts. Nothing is written in report-only mode.
pub fn convert_indentation<W: Write>(
    contents: &[u8],
    choice: Option<BolChoice>,
    config: &Config,
    out: &mut W,
) -> io::Result<SpacerReport> {
    let scan = bol::scan_indentation(contents);
    let Some(choice) = choice else {
        return Ok(SpacerReport {
            scan,
            rewrite: None,
        });
    };

    let style = choice.resolve(&scan);
    let already_conforms = match style {
        IndentStyle::Tabs => scan.spaces == 0,
        IndentStyle::Spaces => scan.tabs == 0,
    };
    let counts = if already_conforms {
        out.write_all(contents)?;
        scan
    } else {
        bol::rewrite_indentation(contents, style, config.tab_size, config.round, out)?
    };

    Ok(SpacerReport {
        scan,
        rewrite: Some(SpacerRewrite { style, counts }),
    })
}

/// Run the ender tool end to end. Returns the process exit code.
pub fn run_ender(args: &EnderArgs) -> Result<i32> {
    let Some(contents) = read_input(args.input.as_deref())? else {
        return Ok(USAGE_ERROR);
    };

    let outcome = if args.new_eol.is_some() {
        let mut output = Vec::with_capacity(contents.len());
        let outcome = convert_line_endings(&contents, args.new_eol, &mut output)?;
        write_output(args.output_file.as_deref(), &output)?;
        outcome
    } else {
        // Report-only: no sink is opened and no byte is written.
        convert_line_endings(&contents, None, &mut io::sink())?
    };

    if args.debug {
        let scan = &outcome.scan;
        eprintln!(
            "[DEBUG] cr: {} lf: {} crlf: {} lines: {}",
            scan.cr, scan.lf, scan.crlf, scan.lines
        );
    }
    if !args.silent {
        report::info(&outcome.summary(
            &report::input_label(args.input.as_deref()),
            &report::output_label(args.output_file.as_deref()),
        ));
    }
    Ok(0)
}

/// Run the spacer tool end to end. Returns the process exit code.
pub fn run_spacer(args: &SpacerArgs) -> Result<i32> {
    let mut config = if let Some(config_path) = &args.config {
        Config::from_toml_file(config_path)?
    } else {
        Config::from_discovered_files(&std::env::current_dir().unwrap_or_default())
    };

    // CLI arguments override file settings
    if let Some(tab_size) = args.tab_size {
        config.tab_size = tab_size;
    }
    if args.round {
        config.round = true;
    }
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    if args.debug {
        eprintln!("[DEBUG] Configuration:");
        eprintln!("[DEBUG]   tab_size: {}", config.tab_size);
        eprintln!("[DEBUG]   round: {}", config.round);
    }
    if args.new_bol.is_none() && (args.round || args.tab_size.is_some()) {
        report::warning("--tab-size and --round have no effect without --new-bol");
    }

    let Some(contents) = read_input(args.input.as_deref())? else {
        return Ok(USAGE_ERROR);
    };

    let outcome = if args.new_bol.is_some() {
        let mut output = Vec::with_capacity(contents.len());
        let outcome = convert_indentation(&contents, args.new_bol, &config, &mut output)?;
        write_output(args.output_file.as_deref(), &output)?;
        outcome
    } else {
        convert_indentation(&contents, None, &config, &mut io::sink())?
    };

    if args.debug {
        eprintln!(
            "[DEBUG] leading spaces: {} tabs: {}",
            outcome.scan.spaces, outcome.scan.tabs
        );
        if let Some(rewrite) = &outcome.rewrite {
            eprintln!("[DEBUG] resolved style: {}", rewrite.style.label());
        }
    }
    if !args.silent {
        report::info(&outcome.summary(
            &report::input_label(args.input.as_deref()),
            &report::output_label(args.output_file.as_deref()),
        ));
    }
    Ok(0)
}

/// Read the whole input, or report a usage error when the path is missing.
fn read_input(path: Option<&Path>) -> Result<Option<Vec<u8>>> {
    match path {
        Some(path) => {
            if !path.exists() {
                report::error(&format!("File '{}' does not exist", path.display()));
                return Ok(None);
            }
            Ok(Some(fs::read(path)?))
        }
        None => {
            let mut contents = Vec::new();
            io::stdin().read_to_end(&mut contents)?;
            Ok(Some(contents))
        }
    }
}

/// Write the full output buffer to the sink, finishing it exactly once.
fn write_output(path: Option<&Path>, output: &[u8]) -> Result<()> {
    match path {
        // Single write; the file is closed on every path out of here.
        Some(path) => fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
