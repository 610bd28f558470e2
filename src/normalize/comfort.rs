use super::{finish, BASELINE};
use crate::types::record::{positive, Handlebar, RearShock, VehicleRecord};

pub const COMFORT_SEAT_BAND_MM: (f64, f64) = (760.0, 820.0);

pub fn score_rider_comfort(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    match record.handlebar {
        Some(Handlebar::Upright) => score += 1.5,
        Some(Handlebar::SemiUpright) => score += 0.5,
        Some(Handlebar::ClipOn) => score -= 1.5,
        None => {}
    }

    if let Some(mm) = positive(record.seat_height_mm) {
        if (COMFORT_SEAT_BAND_MM.0..=COMFORT_SEAT_BAND_MM.1).contains(&mm) {
            score += 1.0;
        } else if mm > 850.0 {
            score -= 0.5;
        }
    }

    if let Some(litres) = positive(record.fuel_capacity_l) {
        if litres >= 15.0 {
            score += 1.0;
        } else if litres >= 12.0 {
            score += 0.5;
        } else if litres < 9.0 {
            score -= 0.5;
        }
    }

    if record.rear_shock() == Some(RearShock::Mono) {
        score += 0.5;
    }

    if let Some(mm) = positive(record.ground_clearance_mm) {
        if mm >= 170.0 {
            score += 0.5;
        } else if mm < 150.0 {
            score -= 0.5;
        }
    }

    finish(score)
}
