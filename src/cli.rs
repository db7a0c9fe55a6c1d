//! Command-line interfaces for the ender and spacer tools.
//!
//! Defines both CLIs using the clap builder API and converts matches into
//! plain options records handed to the processing pipeline.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};

use crate::bol::BolChoice;
use crate::eol::EolChoice;

/// Options for the line-ending tool.
#[derive(Debug, Clone)]
pub struct EnderArgs {
    /// Input file; stdin when absent
    pub input: Option<PathBuf>,

    /// Output file; stdout when absent
    pub output_file: Option<PathBuf>,

    /// Requested line-ending style; report-only when absent
    pub new_eol: Option<EolChoice>,

    /// Suppress the summary line
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Options for the indentation tool.
#[derive(Debug, Clone)]
pub struct SpacerArgs {
    /// Input file; stdin when absent
    pub input: Option<PathBuf>,

    /// Output file; stdout when absent
    pub output_file: Option<PathBuf>,

    /// Requested indentation style; report-only when absent
    pub new_bol: Option<BolChoice>,

    /// Tab width override for the existing file
    pub tab_size: Option<usize>,

    /// Round leftover spaces down to whole tabs when tabifying
    pub round: bool,

    /// Config file path (overrides auto-discovery)
    pub config: Option<PathBuf>,

    /// Suppress the summary line
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for the ender tool
#[must_use]
pub fn build_ender_cli() -> Command {
    Command::new("ender")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Line ending fixer. Defaults to reading from stdin.")
        .arg(
            Arg::new("input")
                .help("The input file. Defaults to stdin")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-file")
                .short('o')
                .long("output-file")
                .help("The output file. Can be the same as the input file. Defaults to stdout")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("new-eol")
                .short('n')
                .long("new-eol")
                // Earlier releases called this flag --mode; keep it working.
                .short_alias('m')
                .alias("mode")
                .help(
                    "The new line ending, either 'cr', 'lf', 'crlf' or 'auto'. 'auto' uses \
                     the most common ending in the input. If not given the file is only \
                     reported on",
                )
                .value_name("EOL")
                .value_parser(PossibleValuesParser::new(EolChoice::VALUES.iter().copied())),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no summary output)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows terminator counts)")
                .action(ArgAction::SetTrue),
        )
}

/// Build the clap Command for the spacer tool
#[must_use]
pub fn build_spacer_cli() -> Command {
    Command::new("spacer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Beginning of line space fixer. Defaults to reading from stdin.")
        .arg(
            Arg::new("input")
                .help("The input file. Defaults to stdin")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-file")
                .short('o')
                .long("output-file")
                .help("The output file. Can be the same as the input file. Defaults to stdout")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("new-bol")
                .short('n')
                .long("new-bol")
                .help(
                    "The new line spacing, either 'tabs', 'spaces' or 'auto'. 'auto' uses \
                     the most common leading whitespace in the input. If not given the \
                     file is only reported on",
                )
                .value_name("BOL")
                .value_parser(PossibleValuesParser::new(BolChoice::VALUES.iter().copied())),
        )
        .arg(
            Arg::new("tab-size")
                .short('t')
                .long("tab-size")
                .help("The tab size to assume in the existing file, in spaces [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("round")
                .short('r')
                .long("round")
                .help("When tabifying, round leftover spaces down to a whole number of tabs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no summary output)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows effective configuration and counts)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse ender arguments from the command line
#[must_use]
pub fn parse_ender_args() -> EnderArgs {
    ender_args_from_matches(&build_ender_cli().get_matches())
}

/// Parse ender arguments from an iterator (for testing)
#[must_use]
pub fn parse_ender_args_from<I, T>(args: I) -> EnderArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ender_args_from_matches(&build_ender_cli().get_matches_from(args))
}

/// Parse spacer arguments from the command line
#[must_use]
pub fn parse_spacer_args() -> SpacerArgs {
    spacer_args_from_matches(&build_spacer_cli().get_matches())
}

/// Parse spacer arguments from an iterator (for testing)
#[must_use]
pub fn parse_spacer_args_from<I, T>(args: I) -> SpacerArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    spacer_args_from_matches(&build_spacer_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `EnderArgs`
fn ender_args_from_matches(matches: &clap::ArgMatches) -> EnderArgs {
    EnderArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        output_file: matches.get_one::<PathBuf>("output-file").cloned(),
        new_eol: matches
            .get_one::<String>("new-eol")
            .and_then(|s| EolChoice::from_token(s)),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}

/// Convert clap `ArgMatches` to `SpacerArgs`
fn spacer_args_from_matches(matches: &clap::ArgMatches) -> SpacerArgs {
    SpacerArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        output_file: matches.get_one::<PathBuf>("output-file").cloned(),
        new_bol: matches
            .get_one::<String>("new-bol")
            .and_then(|s| BolChoice::from_token(s)),
        tab_size: matches.get_one::<usize>("tab-size").copied(),
        round: matches.get_flag("round"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
