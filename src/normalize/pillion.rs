use super::{finish, BASELINE};
use crate::types::record::{positive, AbsType, PillionMode, RearShock, VehicleRecord};

/// Pillion comfort. `Secondary` mode puts extra weight on mass, rear shock
/// layout and ABS on top of the base rules.
pub fn score_pillion_comfort(record: &VehicleRecord, mode: PillionMode) -> f64 {
    let mut score = BASELINE;
    let shock = record.rear_shock();
    let mass = positive(record.kerb_weight_kg);

    match shock {
        Some(RearShock::Mono) => score += 1.0,
        Some(RearShock::Twin) => score += 0.5,
        None => {}
    }

    if let Some(mm) = positive(record.rear_travel_mm) {
        if mm >= 150.0 {
            score += 1.0;
        } else if mm >= 130.0 {
            score += 0.5;
        }
    }

    // Extra mass settles the bike under two up, but only up to a point.
    if let Some(kg) = mass {
        if kg >= 180.0 {
            score += 1.0;
        } else if kg >= 150.0 {
            score += 0.5;
        }
    }

    if let Some(mm) = positive(record.wheelbase_mm) {
        if mm >= 1400.0 {
            score += 1.0;
        } else if mm >= 1350.0 {
            score += 0.5;
        }
    }

    if positive(record.seat_height_mm).is_some_and(|mm| mm <= 800.0) {
        score += 0.5;
    }

    if mode == PillionMode::Secondary {
        if mass.is_some_and(|kg| kg >= 170.0) {
            score += 0.5;
        }
        match shock {
            Some(RearShock::Mono) => score += 0.5,
            Some(RearShock::Twin) => score -= 0.5,
            None => {}
        }
        match record.abs_type {
            Some(AbsType::DualChannel) => score += 0.5,
            Some(AbsType::SingleChannel) => {}
            Some(AbsType::None) | None => score -= 0.5,
        }
    }

    finish(score)
}
