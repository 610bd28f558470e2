use super::{finish, MAX_FACTOR_SCORE, MIN_FACTOR_SCORE};
use crate::types::record::{positive, VehicleRecord};

pub const HEAT_BASELINE: f64 = 6.0;

/// Externally supplied heat rating, when it is usable as a factor score.
pub fn usable_heat_rating(record: &VehicleRecord) -> Option<f64> {
    record
        .heat_rating
        .filter(|rating| (MIN_FACTOR_SCORE..=MAX_FACTOR_SCORE).contains(rating))
}

pub fn score_heat_management(record: &VehicleRecord) -> f64 {
    if let Some(rating) = usable_heat_rating(record) {
        return finish(rating);
    }

    let mut score = HEAT_BASELINE;

    if let Some(cc) = positive(record.engine_cc) {
        if cc > 650.0 {
            score -= 2.0;
        } else if cc > 400.0 {
            score -= 1.0;
        } else if cc > 250.0 {
            score -= 0.5;
        }
    }

    if let Some(bhp) = positive(record.power_bhp) {
        if bhp > 60.0 {
            score -= 1.5;
        } else if bhp > 35.0 {
            score -= 1.0;
        } else if bhp > 25.0 {
            score -= 0.5;
        }
    }

    finish(score)
}
