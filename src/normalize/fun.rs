use super::{finish, BASELINE};
use crate::types::record::{positive, Handlebar, VehicleRecord};

pub fn score_fun_engagement(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    if let Some(ratio) = record.power_per_100kg() {
        if ratio >= 25.0 {
            score += 2.5;
        } else if ratio >= 18.0 {
            score += 1.5;
        } else if ratio >= 12.0 {
            score += 0.5;
        } else if ratio < 7.0 {
            score -= 1.0;
        }
    }

    if let Some(cc) = positive(record.engine_cc) {
        if cc >= 600.0 {
            score += 1.0;
        } else if cc >= 300.0 {
            score += 0.5;
        }
    }

    if let Some(kg) = positive(record.kerb_weight_kg) {
        if kg < 150.0 {
            score += 1.0;
        } else if kg < 170.0 {
            score += 0.5;
        } else if kg > 220.0 {
            score -= 1.0;
        }
    }

    if record.handlebar == Some(Handlebar::ClipOn) {
        score += 1.0;
    }

    finish(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::fixtures::{commuter, roadster};

    #[test]
    fn strong_power_to_weight_is_engaging() {
        // 46 bhp / 168 kg = 27.4 bhp per 100 kg
        assert_eq!(score_fun_engagement(&roadster()), 8.5);
    }

    #[test]
    fn light_commuter_gets_only_the_lightness_bonus() {
        assert_eq!(score_fun_engagement(&commuter()), 6.0);
    }

    #[test]
    fn clip_ons_add_engagement() {
        let mut record = roadster();
        record.handlebar = Some(Handlebar::ClipOn);
        assert_eq!(score_fun_engagement(&record), 9.5);
    }
}
