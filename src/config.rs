//! Command-line surface.
//!
//! Usage:
//!   apriori 50 data/transactions.txt data/rules.txt
//!   apriori 2.5 data/transactions.txt data/rules.txt --max-level 3 -vv

use crate::apriori::MiningConfig;
use crate::error::{AprioriError, Result, SupportValueIssue};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "apriori", version)]
#[command(about = "Mine frequent itemsets and association rules from a transaction file")]
struct Args {
    /// Minimum support as a percentage (0 ~ 100)
    #[arg(allow_negative_numbers = true)]
    min_support: String,

    /// Input file: one transaction per line, items separated by tabs
    input: PathBuf,

    /// Output file for the rules
    output: PathBuf,

    /// Count candidate support on a single thread
    #[arg(long)]
    sequential: bool,

    /// Stop after mining itemsets of this size
    #[arg(long, value_name = "K")]
    max_level: Option<NonZeroUsize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mining: MiningConfig,
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: u8,
    pub quiet: bool,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum ParseOutcome {
    Run(Config),
    /// Help or version output; print it and exit successfully.
    Exit(clap::Error),
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = match Args::try_parse_from(args) {
            Ok(args) => args,
            Err(err) => {
                return match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        Ok(ParseOutcome::Exit(err))
                    }
                    _ => Err(AprioriError::InvalidArgumentCount {
                        message: argument_at_fault(&err),
                    }),
                };
            }
        };

        let mut mining = MiningConfig::new(parse_min_support(&args.min_support)?)
            .with_parallel_counting(!args.sequential);
        if let Some(max_level) = args.max_level {
            mining = mining.with_max_level(max_level);
        }

        Ok(ParseOutcome::Run(Config {
            mining,
            input: args.input,
            output: args.output,
            verbose: args.verbose,
            quiet: args.quiet,
        }))
    }

    /// `None` when logging is disabled.
    pub fn log_level(&self) -> Option<Level> {
        if self.quiet {
            return None;
        }
        Some(match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
    }
}

/// Names the missing, surplus or unparseable argument clap rejected.
fn argument_at_fault(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        Some(ContextValue::Strings(args)) => args.join(", "),
        _ => {
            let rendered = err.render().to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            first_line.trim_start_matches("error: ").to_string()
        }
    }
}

/// Parses a minimum support percentage, rejecting non-numbers and values outside 0 ~ 100.
pub fn parse_min_support(raw: &str) -> Result<f64> {
    let invalid = |reason| AprioriError::InvalidSupportValue {
        value: raw.to_string(),
        reason,
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid(SupportValueIssue::NotANumber))?;

    if value.is_nan() {
        return Err(invalid(SupportValueIssue::NotANumber));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(invalid(SupportValueIssue::OutOfRange));
    }

    Ok(value)
}
