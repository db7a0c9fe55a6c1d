//! End-to-end tests for the indentation tool.
//!
//! The two large fixtures exercise untabify/tabify over a body of mixed
//! leading runs, string-literal lookalikes, and interior tabs that must
//! survive untouched.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use regex::Regex;
use whitespace_tools::bol::{scan_indentation, BolChoice};
use whitespace_tools::parse_spacer_args_from;
use whitespace_tools::process::{convert_indentation, run_spacer, USAGE_ERROR};
use whitespace_tools::Config;

/// Mixed tabs-and-spaces body, tab size 2.
const SPACE1: &str = concat!(
    "    \n",
    "    a\n",
    "\n",
    "\tb\n",
    " \t   c = @\"1\"; c1 = @\"2\"\n",
    "  d; d1\t; d2\n",
    "\t  e\n",
    "\t@\"123\"\n",
    "    @\"1\n",
    "\t1\n",
    "    2\"\n",
    "f\n",
    "\n",
    "    \" @\"\n",
    "\tg\n",
    "\n",
);

/// SPACE1 untabified at tab size 2. Whitespace-only lines keep their
/// expanded leading run.
const SPACE1_SPACES: &str = concat!(
    "    \n",
    "    a\n",
    "\n",
    "  b\n",
    "     c = @\"1\"; c1 = @\"2\"\n",
    "  d; d1\t; d2\n",
    "    e\n",
    "  @\"123\"\n",
    "    @\"1\n",
    "  1\n",
    "    2\"\n",
    "f\n",
    "\n",
    "    \" @\"\n",
    "  g\n",
    "\n",
);

const SPACE2: &str = concat!(
    "a:\n",
    "{\n",
    "\tb: 1,\n",
    "  c: 2,\n",
    " \t d:\t3\n",
    " }\n",
    "\n",
);

/// SPACE2 tabified at tab size 2 with rounding: every full pair of leading
/// spaces becomes one tab, odd leftovers are dropped, interior tabs stay.
const SPACE2_TABS: &str = concat!(
    "a:\n",
    "{\n",
    "\tb: 1,\n",
    "\tc: 2,\n",
    "\td:\t3\n",
    "}\n",
    "\n",
);

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn config(tab_size: usize, round: bool) -> Config {
    Config { tab_size, round }
}

/// Classify without rewriting and return the summary line.
fn classify(input: &str) -> String {
    let mut sink = Vec::new();
    let report =
        convert_indentation(input.as_bytes(), None, &Config::default(), &mut sink).unwrap();
    assert!(sink.is_empty(), "report-only must not write");
    report.summary("<stdin>", "<stdout>")
}

/// Convert and return the output bytes plus the summary line.
fn convert(input: &str, choice: BolChoice, config: &Config) -> (Vec<u8>, String) {
    let mut out = Vec::new();
    let report = convert_indentation(input.as_bytes(), Some(choice), config, &mut out).unwrap();
    (out, report.summary("<stdin>", "<stdout>"))
}

fn assert_summary(summary: &str, pattern: &str) {
    let re = Regex::new(pattern).unwrap();
    assert!(re.is_match(summary), "{summary:?} does not match /{pattern}/");
}

#[test]
fn space1_info() {
    assert_summary(&classify(SPACE1), ", mixed");
}

#[test]
fn space2_info() {
    assert_summary(&classify(SPACE2), ", mixed");
}

#[test]
fn pure_styles_info() {
    assert_summary(&classify("  a\n    b\n"), ", spaces");
    assert_summary(&classify("\ta\n\t\tb\n"), ", tabs");
    // No leading whitespace at all counts as spaces.
    assert_summary(&classify("a\nb\n"), ", spaces");
}

#[test]
fn space1_to_spaces() {
    let (out, summary) = convert(SPACE1, BolChoice::Spaces, &config(2, false));
    assert_eq!(to_hex(&out), to_hex(SPACE1_SPACES.as_bytes()));
    assert_summary(&summary, ", mixed.*spaces");
}

#[test]
fn space2_to_tabs_rounded() {
    let (out, summary) = convert(SPACE2, BolChoice::Tabs, &config(2, true));
    assert_eq!(to_hex(&out), to_hex(SPACE2_TABS.as_bytes()));
    assert_summary(&summary, ", mixed.*tabs");
}

#[test]
fn tabs_without_round_keeps_leftover_spaces() {
    let (out, summary) = convert("   a\n", BolChoice::Tabs, &config(2, false));
    assert_eq!(out, b"\t a\n");
    // One tab and one literal space remain: the result is mixed.
    assert_summary(&summary, ", spaces.*mixed");
}

#[test]
fn auto_resolves_to_dominant_style() {
    // Tabs dominate: one tab per line vs a single stray space run.
    let (out, _) = convert("\ta\n\tb\n \tc\n", BolChoice::Auto, &config(2, true));
    assert_eq!(out, b"\ta\n\tb\n\tc\n");

    // Equal counts resolve to spaces.
    let (out, _) = convert(" a\n\tb\n", BolChoice::Auto, &config(2, false));
    assert_eq!(out, b" a\n  b\n");
}

#[test]
fn cr_does_not_reset_line_start() {
    // Only `\n` opens a new leading run; the tab after `\r` stays put.
    let (out, _) = convert("\t1\r\t2\n", BolChoice::Spaces, &config(2, false));
    assert_eq!(out, b"  1\r\t2\n");

    let scan = scan_indentation(b"\ta\r  b");
    assert_eq!((scan.spaces, scan.tabs), (0, 1));
}

#[test]
fn trailing_partial_indentation_is_converted() {
    let (out, _) = convert("a\n  ", BolChoice::Tabs, &config(2, false));
    assert_eq!(out, b"a\n\t");
}

#[test]
fn conforming_input_passes_through_verbatim() {
    let spaces_only = "  a\n    b\n";
    let (out, summary) = convert(spaces_only, BolChoice::Spaces, &config(2, false));
    assert_eq!(out, spaces_only.as_bytes());
    assert_summary(&summary, ", spaces.*spaces");

    let tabs_only = "\ta\n\t\tb\n";
    let (out, _) = convert(tabs_only, BolChoice::Tabs, &config(2, true));
    assert_eq!(out, tabs_only.as_bytes());
}

#[test]
fn effective_columns_survive_round_trip() {
    // Tabifying and untabifying again lands every line on the same column.
    let (tabbed, _) = convert(SPACE1_SPACES, BolChoice::Tabs, &config(2, false));
    let (respaced, _) = convert(
        std::str::from_utf8(&tabbed).unwrap(),
        BolChoice::Spaces,
        &config(2, false),
    );
    assert_eq!(respaced, SPACE1_SPACES.as_bytes());
}

#[test]
fn converts_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, SPACE2).unwrap();

    let args = parse_spacer_args_from([
        "spacer",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-n",
        "tabs",
        "-t",
        "2",
        "-r",
        "-S",
    ]);
    let code = run_spacer(&args).unwrap();
    assert_eq!(code, 0);
    assert_eq!(std::fs::read(&output).unwrap(), SPACE2_TABS.as_bytes());
}

#[test]
fn config_file_supplies_tab_size() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("whitespace-tools.toml");
    std::fs::write(&config_path, "tab_size = 4\n").unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "    a\n").unwrap();

    let args = parse_spacer_args_from([
        "spacer",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-n",
        "tabs",
        "-c",
        config_path.to_str().unwrap(),
        "-S",
    ]);
    assert_eq!(run_spacer(&args).unwrap(), 0);
    assert_eq!(std::fs::read(&output).unwrap(), b"\ta\n");
}

#[test]
fn cli_tab_size_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("whitespace-tools.toml");
    std::fs::write(&config_path, "tab_size = 4\n").unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "    a\n").unwrap();

    let args = parse_spacer_args_from([
        "spacer",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-n",
        "tabs",
        "-t",
        "2",
        "-c",
        config_path.to_str().unwrap(),
        "-S",
    ]);
    assert_eq!(run_spacer(&args).unwrap(), 0);
    assert_eq!(std::fs::read(&output).unwrap(), b"\t\ta\n");
}

#[test]
fn invalid_tab_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    std::fs::write(&input, "  a\n").unwrap();

    let args = parse_spacer_args_from([
        "spacer",
        input.to_str().unwrap(),
        "-n",
        "tabs",
        "-t",
        "0",
        "-S",
    ]);
    let err = run_spacer(&args).unwrap_err();
    assert!(err.to_string().contains("tab_size"));
}

#[test]
fn report_only_leaves_output_unwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "  a\n").unwrap();

    let args = parse_spacer_args_from([
        "spacer",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "-S",
    ]);
    assert_eq!(run_spacer(&args).unwrap(), 0);
    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let args = parse_spacer_args_from(["spacer", "/no/such/file.txt", "-S"]);
    assert_eq!(run_spacer(&args).unwrap(), USAGE_ERROR);
}
