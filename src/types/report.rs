use crate::engine::compare::{ComparisonSummary, FactorComparison};
use crate::types::record::PillionMode;
use crate::types::scored::{Ranking, RejectedRecord, ScoredVehicle};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub version: String,
    pub generated_at: String,
    pub pillion_mode: PillionMode,
    #[serde(flatten)]
    pub ranking: Ranking,
}

impl RankingReport {
    pub fn new(ranking: Ranking, pillion_mode: PillionMode) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            pillion_mode,
            ranking,
        }
    }

    pub fn has_blocking(&self) -> bool {
        !self.ranking.rejected.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.ranking.warnings.is_empty()
            || self
                .ranking
                .vehicles
                .iter()
                .any(|vehicle| !vehicle.warnings.is_empty())
    }
}

/// Records scored one at a time, without ranking. Every vehicle carries its
/// own weight warnings.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub version: String,
    pub generated_at: String,
    pub pillion_mode: PillionMode,
    pub vehicles: Vec<ScoredVehicle>,
    pub rejected: Vec<RejectedRecord>,
}

impl ScoreReport {
    pub fn new(
        vehicles: Vec<ScoredVehicle>,
        rejected: Vec<RejectedRecord>,
        pillion_mode: PillionMode,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            pillion_mode,
            vehicles,
            rejected,
        }
    }

    pub fn has_blocking(&self) -> bool {
        !self.rejected.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        self.vehicles
            .iter()
            .any(|vehicle| !vehicle.warnings.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub generated_at: String,
    pub a: ScoredVehicle,
    pub b: ScoredVehicle,
    pub factors: Vec<FactorComparison>,
    pub summary: ComparisonSummary,
}

impl ComparisonReport {
    pub fn new(
        a: ScoredVehicle,
        b: ScoredVehicle,
        factors: Vec<FactorComparison>,
        summary: ComparisonSummary,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            a,
            b,
            factors,
            summary,
        }
    }
}
