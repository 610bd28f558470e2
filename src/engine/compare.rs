use crate::types::factor::{Factor, FactorScores};
use crate::types::scored::ScoredVehicle;
use serde::Serialize;

/// Differences at or below this margin count as a tie.
pub const WIN_MARGIN: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorComparison {
    pub factor: Factor,
    pub score_a: f64,
    pub score_b: f64,
    pub abs_difference: f64,
    pub winner: Winner,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub wins_a: usize,
    pub wins_b: usize,
    pub ties: usize,
    pub largest_differentiator: Option<Factor>,
}

/// Per-factor comparison, largest differentiator first. Equal differences
/// keep canonical factor order.
pub fn compare(a: &ScoredVehicle, b: &ScoredVehicle) -> Vec<FactorComparison> {
    compare_scores(&a.factor_scores, &b.factor_scores)
}

pub fn compare_scores(a: &FactorScores, b: &FactorScores) -> Vec<FactorComparison> {
    let mut rows = Factor::ALL
        .iter()
        .map(|factor| {
            let score_a = a[*factor];
            let score_b = b[*factor];
            let difference = score_a - score_b;
            let winner = if difference > WIN_MARGIN {
                Winner::A
            } else if difference < -WIN_MARGIN {
                Winner::B
            } else {
                Winner::Tie
            };
            FactorComparison {
                factor: *factor,
                score_a,
                score_b,
                abs_difference: difference.abs(),
                winner,
            }
        })
        .collect::<Vec<_>>();
    rows.sort_by(|x, y| y.abs_difference.total_cmp(&x.abs_difference));
    rows
}

pub fn summarize(rows: &[FactorComparison]) -> ComparisonSummary {
    let mut summary = ComparisonSummary {
        largest_differentiator: rows
            .first()
            .filter(|row| row.winner != Winner::Tie)
            .map(|row| row.factor),
        ..ComparisonSummary::default()
    };
    for row in rows {
        match row.winner {
            Winner::A => summary.wins_a += 1,
            Winner::B => summary.wins_b += 1,
            Winner::Tie => summary.ties += 1,
        }
    }
    summary
}
