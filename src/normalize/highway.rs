use super::{finish, BASELINE};
use crate::types::record::{positive, VehicleRecord};

pub fn score_highway_stability(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    if let Some(mm) = positive(record.wheelbase_mm) {
        if mm >= 1400.0 {
            score += 1.0;
        } else if mm >= 1350.0 {
            score += 0.5;
        } else if mm < 1300.0 {
            score -= 0.5;
        }
    }

    if let Some(kg) = positive(record.kerb_weight_kg) {
        if kg >= 180.0 {
            score += 1.0;
        } else if kg >= 150.0 {
            score += 0.5;
        } else if kg < 120.0 {
            score -= 1.0;
        }
    }

    if let Some(bhp) = positive(record.power_bhp) {
        if bhp >= 40.0 {
            score += 1.5;
        } else if bhp >= 25.0 {
            score += 1.0;
        } else if bhp >= 15.0 {
            score += 0.5;
        } else if bhp < 10.0 {
            score -= 1.0;
        }
    }

    if positive(record.rear_tyre_mm).is_some_and(|mm| mm >= 150.0) {
        score += 0.5;
    }

    finish(score)
}
