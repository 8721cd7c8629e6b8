//! CLI argument parsing using clap.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use cctdb_core::DuplicateStepPolicy;

/// cctdb - conformance test workbook to SQL converter
#[derive(Parser, Debug)]
#[command(name = "cctdb")]
#[command(
    about = "Convert a conformance test workbook into a SQL schema and insert script",
    long_about = None
)]
#[command(version)]
pub struct Args {
    /// Workbook to convert (xlsx, xlsm, xlsb, xls or ods)
    #[arg(short, long, value_name = "WORKBOOK")]
    pub input: PathBuf,

    /// Output script file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Schema DDL file replacing the built-in schema
    #[arg(short, long, value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// JSON file declaring the overview and category sheets
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Name of the sheet holding test cases (overrides --layout)
    #[arg(long, value_name = "NAME")]
    pub overview_sheet: Option<String>,

    /// Name of a sheet holding step definitions; repeat in scan order (overrides --layout)
    #[arg(long = "category-sheet", value_name = "NAME")]
    pub category_sheets: Vec<String>,

    /// How to handle a step identifier defined more than once
    #[arg(long, value_enum)]
    pub on_duplicate: Option<DuplicateArg>,

    /// Prefix the script with a generator comment and row counts
    #[arg(long)]
    pub header: bool,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging level (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Duplicate step identifier handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicateArg {
    Reject,
    LastWins,
    FirstWins,
}

impl From<DuplicateArg> for DuplicateStepPolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::Reject => DuplicateStepPolicy::Reject,
            DuplicateArg::LastWins => DuplicateStepPolicy::LastWins,
            DuplicateArg::FirstWins => DuplicateStepPolicy::FirstWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_full_invocation() {
        let args = Args::try_parse_from([
            "cctdb",
            "-i",
            "tests.xlsx",
            "-o",
            "out.sql",
            "--overview-sheet",
            "Step Overview",
            "--category-sheet",
            "BER-TLV",
            "--category-sheet",
            "CMS",
            "--on-duplicate",
            "last-wins",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.input, PathBuf::from("tests.xlsx"));
        assert_eq!(args.output, Some(PathBuf::from("out.sql")));
        assert_eq!(args.overview_sheet.as_deref(), Some("Step Overview"));
        assert_eq!(args.category_sheets, vec!["BER-TLV", "CMS"]);
        assert_eq!(args.on_duplicate, Some(DuplicateArg::LastWins));
        assert_eq!(args.verbose, 2);
        assert!(!args.header);
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["cctdb"]).is_err());
    }

    #[test]
    fn duplicate_arg_maps_to_policy() {
        assert_eq!(
            DuplicateStepPolicy::from(DuplicateArg::FirstWins),
            DuplicateStepPolicy::FirstWins
        );
    }
}
