use super::brands::has_durability_reputation;
use super::{finish, BASELINE};
use crate::types::record::{positive, AbsType, VehicleRecord};

pub const SWEET_DISPLACEMENT_CC: (f64, f64) = (250.0, 500.0);
pub const MODERATE_POWER_BHP: (f64, f64) = (20.0, 50.0);

pub fn score_long_term_suitability(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;
    let mass = positive(record.kerb_weight_kg);

    if let Some(cc) = positive(record.engine_cc) {
        if (SWEET_DISPLACEMENT_CC.0..=SWEET_DISPLACEMENT_CC.1).contains(&cc) {
            score += 1.5;
        } else if cc < 150.0 || cc > 800.0 {
            score -= 0.5;
        }
    }

    if positive(record.power_bhp)
        .is_some_and(|bhp| (MODERATE_POWER_BHP.0..=MODERATE_POWER_BHP.1).contains(&bhp))
    {
        score += 1.0;
    }

    if has_durability_reputation(record.brand.as_deref()) {
        score += 1.0;
    }

    if record.abs_type == Some(AbsType::DualChannel) {
        score += 0.5;
    }

    if positive(record.fuel_capacity_l).is_some_and(|litres| litres >= 13.0) {
        score += 0.5;
    }

    // Versatility: clears rough roads without being a handful.
    if let (Some(clearance), Some(kg)) = (positive(record.ground_clearance_mm), mass) {
        if clearance >= 170.0 && kg <= 200.0 {
            score += 1.0;
        } else if clearance >= 160.0 && kg <= 180.0 {
            score += 0.5;
        }
    }

    finish(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::fixtures::{commuter, roadster};

    #[test]
    fn quarter_litre_class_ages_well() {
        assert_eq!(score_long_term_suitability(&roadster()), 9.5);
    }

    #[test]
    fn tiny_engine_limits_long_term_fit() {
        assert_eq!(score_long_term_suitability(&commuter()), 6.0);
    }

    #[test]
    fn displacement_band_is_inclusive() {
        let mut record = roadster();
        record.engine_cc = Some(500.0);
        assert_eq!(score_long_term_suitability(&record), 9.5);
        record.engine_cc = Some(500.1);
        assert_eq!(score_long_term_suitability(&record), 8.0);
    }
}
