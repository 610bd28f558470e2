use super::score_with_resolved;
use super::weights::resolve_weights;
use crate::error::{MotoscoreError, Result};
use crate::types::factor::WeightVector;
use crate::types::record::{PillionMode, VehicleRecord};
use crate::types::scored::{Ranking, RejectedRecord, ScoredVehicle};
use crate::types::validation::ValidationIssue;
use rayon::prelude::*;
use tracing::{info, warn};

/// Scores every record in parallel, then ranks the usable ones.
///
/// Records that fail validation even after default-filling are reported in
/// `rejected` rather than failing the whole batch. Two or more vehicles whose
/// scores span fewer than `narrow_spread` points earn a `NARROW_SPREAD` warning.
pub fn score_and_rank(
    records: &[VehicleRecord],
    weights: &WeightVector,
    mode: PillionMode,
    narrow_spread: u8,
) -> Result<Ranking> {
    if records.is_empty() {
        return Err(MotoscoreError::EmptyBatch);
    }

    let (weights, weight_validation) = resolve_weights(weights);

    let outcomes: Vec<Result<ScoredVehicle>> = records
        .par_iter()
        .map(|record| score_with_resolved(record, &weights, mode))
        .collect();

    let mut vehicles = Vec::new();
    let mut rejected = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(scored) => vehicles.push(scored),
            Err(MotoscoreError::ValidationFailed { vehicle, issues }) => {
                warn!(vehicle = %vehicle, errors = issues.len(), "record rejected");
                rejected.push(RejectedRecord {
                    name: vehicle,
                    issues,
                });
            }
            Err(other) => return Err(other),
        }
    }

    if vehicles.is_empty() {
        return Err(MotoscoreError::EmptyBatch);
    }

    // Stable: exact ties keep input order.
    vehicles.sort_by(|a, b| b.final_score.cmp(&a.final_score));
    assign_ranks(&mut vehicles);

    if vehicles.first().and_then(|vehicle| vehicle.rank) != Some(1) {
        return Err(MotoscoreError::ScoringPrecondition(
            "ranking has no rank-1 entry".to_string(),
        ));
    }

    let mut warnings = weight_validation.warnings;
    if let Some(issue) = spread_warning(&vehicles, narrow_spread) {
        warnings.push(issue);
    }

    info!(
        ranked = vehicles.len(),
        rejected = rejected.len(),
        pillion_mode = %mode,
        "ranked batch"
    );

    Ok(Ranking {
        vehicles,
        rejected,
        weights,
        warnings,
    })
}

/// Competition ranking over vehicles already sorted by descending score:
/// [90, 85, 85, 80] -> [1, 2, 2, 4].
pub fn assign_ranks(vehicles: &mut [ScoredVehicle]) {
    let mut previous: Option<(u8, u32)> = None;
    for (index, vehicle) in vehicles.iter_mut().enumerate() {
        let rank = match previous {
            Some((score, rank)) if score == vehicle.final_score => rank,
            _ => index as u32 + 1,
        };
        vehicle.rank = Some(rank);
        previous = Some((vehicle.final_score, rank));
    }
}

fn spread_warning(vehicles: &[ScoredVehicle], narrow_spread: u8) -> Option<ValidationIssue> {
    if vehicles.len() < 2 {
        return None;
    }
    let best = vehicles.iter().map(|vehicle| vehicle.final_score).max()?;
    let worst = vehicles.iter().map(|vehicle| vehicle.final_score).min()?;
    let spread = best - worst;
    (spread < narrow_spread).then(|| {
        ValidationIssue::new(
            "NARROW_SPREAD",
            format!(
                "final scores span only {spread} points; the ranking is sensitive to weights"
            ),
            None,
        )
    })
}
