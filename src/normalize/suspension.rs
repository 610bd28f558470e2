use super::{finish, BASELINE};
use crate::types::record::{positive, RearShock, VehicleRecord};

pub fn score_suspension_compliance(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    match record.rear_shock() {
        Some(RearShock::Mono) => score += 2.0,
        Some(RearShock::Twin) => score += 1.0,
        None => {}
    }

    if let Some(mm) = positive(record.rear_travel_mm) {
        if mm >= 150.0 {
            score += 1.0;
        } else if mm >= 120.0 {
            score += 0.5;
        } else if mm < 90.0 {
            score -= 0.5;
        }
    }

    if record.has_inverted_fork() {
        score += 1.0;
    }

    if let Some(mm) = positive(record.ground_clearance_mm) {
        if mm >= 180.0 {
            score += 1.0;
        } else if mm >= 160.0 {
            score += 0.5;
        } else if mm < 140.0 {
            score -= 0.5;
        }
    }

    finish(score)
}
