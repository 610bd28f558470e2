use super::{finish, BASELINE};
use crate::types::record::{positive, VehicleRecord};

/// Sweet band for commuting, in bhp per 100 kg.
pub const TRAFFIC_POWER_BAND: (f64, f64) = (6.0, 10.0);

pub fn score_traffic_ease(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    if let Some(kg) = positive(record.kerb_weight_kg) {
        if kg < 150.0 {
            score += 1.5;
        } else if kg < 170.0 {
            score += 1.0;
        } else if kg < 190.0 {
            score += 0.5;
        } else if kg > 220.0 {
            score -= 1.0;
        }
    }

    if let Some(mm) = positive(record.seat_height_mm) {
        if mm <= 780.0 {
            score += 1.0;
        } else if mm <= 820.0 {
            score += 0.5;
        } else if mm > 850.0 {
            score -= 1.0;
        }
    }

    if let Some(ratio) = record.power_per_100kg() {
        if (TRAFFIC_POWER_BAND.0..=TRAFFIC_POWER_BAND.1).contains(&ratio) {
            score += 1.0;
        }
    }

    if let Some(cc) = positive(record.engine_cc) {
        if cc > 750.0 {
            score -= 1.5;
        } else if cc > 500.0 {
            score -= 1.0;
        }
    }

    finish(score)
}
