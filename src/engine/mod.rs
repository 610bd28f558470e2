pub mod compare;
pub mod rank;
pub mod weights;

use crate::error::{MotoscoreError, Result};
use crate::normalize::{confidences_for, normalize_motorcycle, MAX_FACTOR_SCORE, MIN_FACTOR_SCORE};
use crate::types::factor::{Factor, FactorScores, WeightVector};
use crate::types::record::{PillionMode, VehicleRecord};
use crate::types::scored::ScoredVehicle;
use crate::types::validation::ValidationResult;
use crate::validate::defaults::fill_missing_data;
use crate::validate::validate;
use tracing::debug;
use weights::resolve_weights;

/// A record that passed validation, possibly after default-filling.
#[derive(Debug, Clone)]
pub struct PreparedRecord {
    pub record: VehicleRecord,
    pub validation: ValidationResult,
    pub used_defaults: bool,
}

/// `validate -> (on error) fill -> validate`.
///
/// Both outcomes are values: a usable record with its warnings, or
/// `ValidationFailed` carrying the errors that survived filling.
pub fn prepare_record(raw: &VehicleRecord) -> Result<PreparedRecord> {
    let first = validate(raw);
    if first.is_valid() {
        return Ok(PreparedRecord {
            used_defaults: !raw.defaulted_fields.is_empty(),
            record: raw.clone(),
            validation: first,
        });
    }

    let filled = fill_missing_data(raw);
    let mut second = validate(&filled);
    if !second.is_valid() {
        return Err(MotoscoreError::ValidationFailed {
            vehicle: raw.display_name(),
            issues: second.errors,
        });
    }

    let recovered = first
        .errors
        .iter()
        .map(|issue| issue.code.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    second.warn(
        "DEFAULTS_APPLIED",
        format!("scored over default values after validation errors: {recovered}"),
        None,
    );
    Ok(PreparedRecord {
        record: filled,
        validation: second,
        used_defaults: true,
    })
}

/// Σ(score × weight) / Σ(weight) × 10, rounded to an integer in [0, 100].
pub fn calculate_final_score(scores: &FactorScores, weights: &WeightVector) -> Result<u8> {
    for (factor, score) in scores.iter() {
        if !score.is_finite() || !(MIN_FACTOR_SCORE..=MAX_FACTOR_SCORE).contains(&score) {
            return Err(MotoscoreError::ScoringPrecondition(format!(
                "{} score {score} is outside [{MIN_FACTOR_SCORE}, {MAX_FACTOR_SCORE}]",
                factor.key()
            )));
        }
    }

    let weight_sum = weights.sum();
    if !weight_sum.is_finite() || weight_sum <= 0.0 {
        return Err(MotoscoreError::ScoringPrecondition(format!(
            "weights must have a positive sum (found {weight_sum})"
        )));
    }

    let weighted: f64 = Factor::ALL
        .iter()
        .map(|factor| scores[*factor] * weights[*factor])
        .sum();
    let final_score = (weighted / weight_sum * 10.0).round();
    if !(0.0..=100.0).contains(&final_score) {
        return Err(MotoscoreError::ScoringPrecondition(format!(
            "final score {final_score} is outside [0, 100]"
        )));
    }
    Ok(final_score as u8)
}

/// Scores one record end to end. The rank is left unset.
pub fn score_motorcycle(
    record: &VehicleRecord,
    weights: &WeightVector,
    mode: PillionMode,
) -> Result<ScoredVehicle> {
    let (resolved, weight_validation) = resolve_weights(weights);
    let mut scored = score_with_resolved(record, &resolved, mode)?;
    scored.warnings.extend(weight_validation.warnings);
    Ok(scored)
}

/// Scores one record against an already resolved weight vector.
pub(crate) fn score_with_resolved(
    record: &VehicleRecord,
    weights: &WeightVector,
    mode: PillionMode,
) -> Result<ScoredVehicle> {
    let prepared = prepare_record(record)?;
    let factor_scores = normalize_motorcycle(&prepared.record, mode);
    let final_score = calculate_final_score(&factor_scores, weights)?;
    let confidence = confidences_for(&prepared.record);
    let name = prepared.record.display_name();

    debug!(
        vehicle = %name,
        final_score,
        used_defaults = prepared.used_defaults,
        "scored vehicle"
    );

    Ok(ScoredVehicle {
        name,
        record: prepared.record,
        factor_scores,
        final_score,
        rank: None,
        confidence,
        warnings: prepared.validation.warnings,
        used_defaults: prepared.used_defaults,
    })
}
