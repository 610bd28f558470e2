use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "motoscore",
    version,
    about = "Transparent motorcycle ranking for long-term ownership"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank every record in a JSON batch
    Rank(RankCommand),
    /// Score each record on its own, without ranking
    Score(ScoreCommand),
    /// Compare two ranked vehicles factor by factor
    Compare(CompareCommand),
    /// Validate records without scoring them
    Validate(ValidateCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PillionArg {
    None,
    Primary,
    Secondary,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct RankCommand {
    /// JSON file holding an array of vehicle records
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Overrides scoring.pillion_mode from the config
    #[arg(long, value_enum)]
    pub pillion: Option<PillionArg>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub pillion: Option<PillionArg>,
}

#[derive(Args)]
pub struct CompareCommand {
    pub input: PathBuf,
    /// Ranking position of the first vehicle (1-based)
    pub a: usize,
    /// Ranking position of the second vehicle (1-based)
    pub b: usize,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub pillion: Option<PillionArg>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub input: PathBuf,
}
