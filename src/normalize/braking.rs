use super::{finish, BASELINE};
use crate::types::record::{positive, present, AbsType, VehicleRecord};

pub fn score_braking_safety(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    if record.has_front_disc() {
        score += 1.0;
    } else if present(&record.front_brake) {
        score -= 0.5;
    }
    if record.has_rear_disc() {
        score += 0.5;
    }

    match record.abs_type {
        Some(AbsType::DualChannel) => score += 2.0,
        Some(AbsType::SingleChannel) => score += 1.0,
        Some(AbsType::None) | None => {}
    }

    if positive(record.front_tyre_mm).is_some_and(|mm| mm >= 110.0) {
        score += 0.5;
    }
    if positive(record.rear_tyre_mm).is_some_and(|mm| mm >= 150.0) {
        score += 0.5;
    }

    finish(score)
}
