//! Raw specification -> ten 1-10 factor scores.
//!
//! Every factor function starts from a fixed baseline, applies threshold
//! adjustments of fixed size, then clamps and rounds with [`finish`]. There is
//! no interpolation: thresholds and increments are the auditable contract.
//! Inputs that are absent contribute no adjustment.

pub mod braking;
pub mod brands;
pub mod comfort;
pub mod confidence;
pub mod fun;
pub mod heat;
pub mod highway;
pub mod longevity;
pub mod ownership;
pub mod pillion;
pub mod suspension;
pub mod traffic;

pub use braking::score_braking_safety;
pub use comfort::score_rider_comfort;
pub use confidence::confidences_for;
pub use fun::score_fun_engagement;
pub use heat::score_heat_management;
pub use highway::score_highway_stability;
pub use longevity::score_long_term_suitability;
pub use ownership::score_ownership_practicality;
pub use pillion::score_pillion_comfort;
pub use suspension::score_suspension_compliance;
pub use traffic::score_traffic_ease;

use crate::types::factor::{Factor, FactorScores};
use crate::types::record::{PillionMode, VehicleRecord};

pub const MIN_FACTOR_SCORE: f64 = 1.0;
pub const MAX_FACTOR_SCORE: f64 = 10.0;
pub const BASELINE: f64 = 5.0;

pub fn normalize_motorcycle(record: &VehicleRecord, mode: PillionMode) -> FactorScores {
    FactorScores::from_fn(|factor| match factor {
        Factor::TrafficEase => score_traffic_ease(record),
        Factor::BrakingSafety => score_braking_safety(record),
        Factor::PillionComfort => score_pillion_comfort(record, mode),
        Factor::HighwayStability => score_highway_stability(record),
        Factor::RiderComfort => score_rider_comfort(record),
        Factor::SuspensionCompliance => score_suspension_compliance(record),
        Factor::FunEngagement => score_fun_engagement(record),
        Factor::HeatManagement => score_heat_management(record),
        Factor::OwnershipPracticality => score_ownership_practicality(record),
        Factor::LongTermSuitability => score_long_term_suitability(record),
    })
}

/// Clamp to [1, 10] and round to the nearest 0.5.
pub(crate) fn finish(score: f64) -> f64 {
    let clamped = score.clamp(MIN_FACTOR_SCORE, MAX_FACTOR_SCORE);
    (clamped * 2.0).round() / 2.0
}
