use super::brands::{service_tier, ServiceTier};
use super::{finish, BASELINE};
use crate::types::record::{positive, VehicleRecord};

pub const BUDGET_PRICE_INR: f64 = 150_000.0;
pub const PREMIUM_PRICE_INR: f64 = 400_000.0;
pub const LUXURY_PRICE_INR: f64 = 800_000.0;

pub fn score_ownership_practicality(record: &VehicleRecord) -> f64 {
    let mut score = BASELINE;

    score += match service_tier(record.brand.as_deref()) {
        ServiceTier::Wide => 2.0,
        ServiceTier::Good => 1.0,
        ServiceTier::Moderate => 0.0,
        ServiceTier::Limited => -1.0,
    };

    if let Some(price) = positive(record.price_inr) {
        if price > LUXURY_PRICE_INR {
            score -= 2.0;
        } else if price > PREMIUM_PRICE_INR {
            score -= 1.0;
        } else if price <= BUDGET_PRICE_INR {
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
    fn wide_service_network_and_budget_price() {
        assert_eq!(score_ownership_practicality(&commuter()), 7.5);
    }

    #[test]
    fn mid_tier_brand_at_mid_price() {
        assert_eq!(score_ownership_practicality(&roadster()), 6.0);
    }

    #[test]
    fn exotic_brand_at_luxury_price() {
        let mut record = roadster();
        record.brand = Some("MV Agusta".to_string());
        record.price_inr = Some(2_100_000.0);
        assert_eq!(score_ownership_practicality(&record), 2.0);
    }

    #[test]
    fn price_thresholds_are_exclusive_above() {
        let mut record = roadster();
        record.price_inr = Some(PREMIUM_PRICE_INR);
        assert_eq!(score_ownership_practicality(&record), 6.0);
        record.price_inr = Some(PREMIUM_PRICE_INR + 1.0);
        assert_eq!(score_ownership_practicality(&record), 5.0);
    }
}
