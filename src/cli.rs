use crate::{
    aggregate::aggregate_locations,
    dictionary::SovDictionary,
    discovery::collect_spreadsheets,
    error::{Result, SovError},
    location::{LocationRow, ParseResult},
    options::ParseOptions,
    parser::SovParser,
    report::{Outcome, format_outcome},
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
#[derive(Debug, Parser)]
#[command(
    name = "sovparse",
    version,
    about = "Parse broker Statement of Values workbooks into normalized locations."
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "SOVPARSE_DICTIONARY",
        help = "JSON header vocabulary to use instead of the built-in one"
    )]
    pub dictionary: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Parse one workbook and print the result")]
    Parse {
        file: PathBuf,
        #[arg(long, help = "Merge building rows that share a location")]
        aggregate: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long, help = "Indent JSON output")]
        pretty: bool,
    },
    #[command(about = "Report which workbooks look like a statement of values")]
    Classify {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    ParseFailed,
}
impl RunStatus {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ParseFailed => 2,
        }
    }
}
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RunStatus> {
    let parser = build_parser(cli.dictionary.as_deref())?;
    match &cli.command {
        Command::Parse {
            file,
            aggregate,
            format,
            pretty,
        } => {
            let parsed = parser.parse_path(file);
            let status = if parsed.is_ok() {
                RunStatus::Success
            } else {
                RunStatus::ParseFailed
            };
            if *aggregate {
                let outcome = Outcome::from(parsed.map(|result| aggregate_locations(&result)));
                emit(out, &outcome, *format, *pretty)?;
            } else {
                emit(out, &Outcome::from(parsed), *format, *pretty)?;
            }
            Ok(status)
        }
        Command::Classify { paths } => {
            for path in collect_spreadsheets(paths)? {
                let verdict = if parser.is_sov_file(&path) {
                    "sov"
                } else {
                    "other"
                };
                writeln!(out, "{verdict}\t{}", path.display()).map_err(SovError::Output)?;
            }
            Ok(RunStatus::Success)
        }
    }
}
fn build_parser(dictionary: Option<&Path>) -> Result<SovParser> {
    let dictionary = match dictionary {
        Some(path) => SovDictionary::from_path(path)?,
        None => SovDictionary::builtin(),
    };
    Ok(SovParser::new(dictionary, ParseOptions::from_env()))
}
fn emit<W, L>(
    out: &mut W,
    outcome: &Outcome<ParseResult<L>>,
    format: OutputFormat,
    pretty: bool,
) -> Result<()>
where
    W: Write,
    L: AsRef<LocationRow> + Serialize,
{
    let written = match format {
        OutputFormat::Json if pretty => serde_json::to_writer_pretty(&mut *out, outcome),
        OutputFormat::Json => serde_json::to_writer(&mut *out, outcome),
        OutputFormat::Text => {
            return writeln!(out, "{}", format_outcome(outcome)).map_err(SovError::Output);
        }
    };
    written.map_err(|e| SovError::Output(e.into()))?;
    writeln!(out).map_err(SovError::Output)
}
