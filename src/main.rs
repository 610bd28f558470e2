mod cli;
mod config;
mod engine;
mod error;
mod normalize;
mod report;
mod types;
mod validate;

use crate::error::MotoscoreError;
use crate::types::config::MotoscoreConfig;
use crate::types::record::{PillionMode, VehicleRecord};
use crate::types::report::{ComparisonReport, RankingReport, ScoreReport};
use crate::types::scored::RejectedRecord;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("motoscore={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_records(path: &Path) -> Result<Vec<VehicleRecord>, MotoscoreError> {
    if !path.exists() {
        return Err(MotoscoreError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn pillion_mode(arg: Option<cli::PillionArg>, config: &MotoscoreConfig) -> PillionMode {
    match arg {
        Some(cli::PillionArg::None) => PillionMode::None,
        Some(cli::PillionArg::Primary) => PillionMode::Primary,
        Some(cli::PillionArg::Secondary) => PillionMode::Secondary,
        None => config.pillion_mode(),
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn rank(
    input: &Path,
    mode: PillionMode,
    config: &MotoscoreConfig,
) -> Result<types::scored::Ranking, MotoscoreError> {
    let records = load_records(input)?;
    engine::rank::score_and_rank(
        &records,
        &config.weights(),
        mode,
        config.narrow_spread(),
    )
}

fn run() -> Result<i32, MotoscoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    match cli.command {
        cli::Commands::Rank(cmd) => {
            let loaded = config::load_config(&cwd)?;
            let mode = pillion_mode(cmd.pillion, &loaded);
            let ranking = rank(&cmd.input, mode, &loaded)?;
            let ranking_report = RankingReport::new(ranking, mode);

            let rendered = report::render_ranking(&ranking_report, output_format(cmd.format))?;
            println!("{rendered}");

            if ranking_report.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if ranking_report.has_warnings() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(&cwd)?;
            let mode = pillion_mode(cmd.pillion, &loaded);
            let records = load_records(&cmd.input)?;
            if records.is_empty() {
                return Err(MotoscoreError::EmptyBatch);
            }

            let weights = loaded.weights();
            let mut vehicles = Vec::new();
            let mut rejected = Vec::new();
            for record in &records {
                match engine::score_motorcycle(record, &weights, mode) {
                    Ok(scored) => vehicles.push(scored),
                    Err(MotoscoreError::ValidationFailed { vehicle, issues }) => {
                        rejected.push(RejectedRecord {
                            name: vehicle,
                            issues,
                        });
                    }
                    Err(other) => return Err(other),
                }
            }

            let score_report = ScoreReport::new(vehicles, rejected, mode);
            let rendered = report::render_scores(&score_report, output_format(cmd.format))?;
            println!("{rendered}");

            if score_report.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if score_report.has_warnings() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Compare(cmd) => {
            let loaded = config::load_config(&cwd)?;
            let mode = pillion_mode(cmd.pillion, &loaded);
            let ranking = rank(&cmd.input, mode, &loaded)?;

            let pick = |position: usize| {
                ranking.by_rank_position(position).cloned().ok_or_else(|| {
                    MotoscoreError::InvalidSelection(format!(
                        "position {} must be between 1 and {}",
                        position,
                        ranking.vehicles.len()
                    ))
                })
            };
            let a = pick(cmd.a)?;
            let b = pick(cmd.b)?;

            let rows = engine::compare::compare(&a, &b);
            let summary = engine::compare::summarize(&rows);
            let comparison = ComparisonReport::new(a, b, rows, summary);
            let rendered = report::render_comparison(&comparison, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let records = load_records(&cmd.input)?;
            if records.is_empty() {
                return Err(MotoscoreError::EmptyBatch);
            }

            let mut has_blocking = false;
            let mut has_warnings = false;
            for (index, record) in records.iter().enumerate() {
                let result = validate::validate(record);
                let status = if !result.is_valid() {
                    has_blocking = true;
                    "BLOCKING"
                } else if !result.warnings.is_empty() {
                    has_warnings = true;
                    "WARN"
                } else {
                    "OK"
                };
                println!("{}. {} [{}]", index + 1, record.display_name(), status);
                for issue in &result.errors {
                    println!("  error {issue}");
                }
                for issue in &result.warnings {
                    println!("  warning {issue}");
                }
                if !result.is_valid() {
                    let filled = validate::defaults::fill_missing_data(record);
                    if validate::has_minimum_data(&filled) {
                        println!("  recoverable with default values");
                    }
                }
            }

            if has_blocking {
                Ok(exit_code::BLOCKING)
            } else if has_warnings {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
