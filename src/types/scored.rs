use crate::types::factor::{FactorMap, FactorScores, WeightVector};
use crate::types::record::{Confidence, VehicleRecord};
use crate::types::validation::ValidationIssue;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredVehicle {
    pub name: String,
    pub record: VehicleRecord,
    pub factor_scores: FactorScores,
    pub final_score: u8,
    /// Assigned by the ranker; `None` until the vehicle is ranked in a batch.
    pub rank: Option<u32>,
    pub confidence: FactorMap<Confidence>,
    pub warnings: Vec<ValidationIssue>,
    pub used_defaults: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedRecord {
    pub name: String,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub vehicles: Vec<ScoredVehicle>,
    pub rejected: Vec<RejectedRecord>,
    pub weights: WeightVector,
    pub warnings: Vec<ValidationIssue>,
}

impl Ranking {
    pub fn by_rank_position(&self, position: usize) -> Option<&ScoredVehicle> {
        position
            .checked_sub(1)
            .and_then(|index| self.vehicles.get(index))
    }
}
