use std::path::PathBuf;

use cadence_rule::PatternInput;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use crate::commands::parse_instant;

/// Evaluate calendar recurrence rules.
#[derive(Parser, Debug)]
#[command(name = "cadence", version, about = "Evaluate calendar recurrence rules")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file, instead of `cadence.toml`.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the next occurrences of a schedule.
    Next(NextArgs),
    /// Check whether an instant is on a schedule. Exits 0 if it is, 1 if not.
    Matches(MatchesArgs),
}

/// Include and exclude rules, each `field=expression` pairs separated by `;`,
/// for example `day_of_week=MON-FRI;hour=9;minute=0`.
#[derive(clap::Args, Debug, Clone)]
pub struct RuleArgs {
    /// Include rule. Repeat for a union of rules.
    #[arg(long = "on", value_name = "RULE", required = true)]
    pub on: Vec<PatternInput>,

    /// Exclude rule. Repeat to exclude several rules.
    #[arg(long = "not", value_name = "RULE")]
    pub not: Vec<PatternInput>,
}

#[derive(clap::Args, Debug)]
pub struct NextArgs {
    #[command(flatten)]
    pub rules: RuleArgs,

    /// Start searching after this instant (defaults to now, local time).
    #[arg(long, value_parser = parse_instant)]
    pub from: Option<NaiveDateTime>,

    /// Number of occurrences to print (defaults to `search.count`).
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Search budget per step (defaults to `search.max_tries`).
    #[arg(long)]
    pub max_tries: Option<usize>,

    /// Print a JSON array instead of one instant per line.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct MatchesArgs {
    #[command(flatten)]
    pub rules: RuleArgs,

    /// Instant to check.
    #[arg(long, value_parser = parse_instant)]
    pub at: NaiveDateTime,
}
