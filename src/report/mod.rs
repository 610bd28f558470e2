pub mod json;
pub mod md;

use crate::error::MotoscoreError;
use crate::types::report::{ComparisonReport, RankingReport, ScoreReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_ranking(report: &RankingReport, format: OutputFormat) -> Result<String, MotoscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MotoscoreError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(report)),
    }
}

pub fn render_scores(report: &ScoreReport, format: OutputFormat) -> Result<String, MotoscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MotoscoreError::Json),
        OutputFormat::Md => Ok(md::scores_to_markdown(report)),
    }
}

pub fn render_comparison(
    report: &ComparisonReport,
    format: OutputFormat,
) -> Result<String, MotoscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MotoscoreError::Json),
        OutputFormat::Md => Ok(md::comparison_to_markdown(report)),
    }
}
