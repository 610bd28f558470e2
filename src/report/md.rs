use crate::engine::compare::Winner;
use crate::types::factor::Factor;
use crate::types::report::{ComparisonReport, RankingReport, ScoreReport};
use crate::types::validation::ValidationIssue;

pub fn ranking_to_markdown(report: &RankingReport) -> String {
    let ranking = &report.ranking;
    let mut output = String::new();
    output.push_str("# Motorcycle Ranking\n\n");
    output.push_str(&format!(
        "Generated {} (pillion mode: {})\n\n",
        report.generated_at, report.pillion_mode
    ));

    output.push_str("## Ranking\n\n");
    output.push_str("| Rank | Vehicle | Score | Notes |\n|---|---|---|---|\n");
    for vehicle in &ranking.vehicles {
        let rank = vehicle
            .rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-".to_string());
        let notes = if vehicle.used_defaults {
            "scored over default values"
        } else {
            ""
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            rank, vehicle.name, vehicle.final_score, notes
        ));
    }
    output.push('\n');

    output.push_str("## Factor Scores\n\n");
    output.push_str("| Factor |");
    for vehicle in &ranking.vehicles {
        output.push_str(&format!(" {} |", vehicle.name));
    }
    output.push_str(" Weight |\n|---|");
    for _ in &ranking.vehicles {
        output.push_str("---|");
    }
    output.push_str("---|\n");
    for factor in Factor::ALL {
        output.push_str(&format!("| {} |", factor.label()));
        for vehicle in &ranking.vehicles {
            output.push_str(&format!(
                " {:.1} ({}) |",
                vehicle.factor_scores[factor], vehicle.confidence[factor]
            ));
        }
        output.push_str(&format!(" {:.3} |\n", ranking.weights[factor]));
    }
    output.push('\n');

    output.push_str("## Warnings\n\n");
    let mut any_warning = false;
    for issue in &ranking.warnings {
        push_issue(&mut output, "batch", issue);
        any_warning = true;
    }
    for vehicle in &ranking.vehicles {
        for issue in &vehicle.warnings {
            push_issue(&mut output, &vehicle.name, issue);
            any_warning = true;
        }
    }
    if !any_warning {
        output.push_str("- none\n");
    }
    output.push('\n');

    output.push_str("## Rejected\n\n");
    if ranking.rejected.is_empty() {
        output.push_str("- none\n");
    } else {
        for rejected in &ranking.rejected {
            for issue in &rejected.issues {
                push_issue(&mut output, &rejected.name, issue);
            }
        }
    }

    output
}

pub fn scores_to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Motorcycle Scores\n\n");
    output.push_str(&format!(
        "Generated {} (pillion mode: {})\n\n",
        report.generated_at, report.pillion_mode
    ));

    output.push_str("| Vehicle | Score | Notes |\n|---|---|---|\n");
    for vehicle in &report.vehicles {
        let notes = if vehicle.used_defaults {
            "scored over default values"
        } else {
            ""
        };
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            vehicle.name, vehicle.final_score, notes
        ));
    }
    output.push('\n');

    output.push_str("## Warnings\n\n");
    let mut any_warning = false;
    for vehicle in &report.vehicles {
        for issue in &vehicle.warnings {
            push_issue(&mut output, &vehicle.name, issue);
            any_warning = true;
        }
    }
    if !any_warning {
        output.push_str("- none\n");
    }
    output.push('\n');

    output.push_str("## Rejected\n\n");
    if report.rejected.is_empty() {
        output.push_str("- none\n");
    }
    for rejected in &report.rejected {
        for issue in &rejected.issues {
            push_issue(&mut output, &rejected.name, issue);
        }
    }

    output
}

pub fn comparison_to_markdown(report: &ComparisonReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# {} vs {}\n\n",
        report.a.name, report.b.name
    ));
    output.push_str(&format!(
        "Final scores: {} vs {}\n\n",
        report.a.final_score, report.b.final_score
    ));

    output.push_str("| Factor | A | B | Difference | Winner |\n|---|---|---|---|---|\n");
    for row in &report.factors {
        let winner = match row.winner {
            Winner::A => report.a.name.as_str(),
            Winner::B => report.b.name.as_str(),
            Winner::Tie => "tie",
        };
        output.push_str(&format!(
            "| {} | {:.1} | {:.1} | {:.1} | {} |\n",
            row.factor.label(),
            row.score_a,
            row.score_b,
            row.abs_difference,
            winner
        ));
    }
    output.push('\n');

    let summary = &report.summary;
    output.push_str(&format!(
        "Wins: {} {}, {} {}, ties {}\n",
        report.a.name, summary.wins_a, report.b.name, summary.wins_b, summary.ties
    ));
    if let Some(factor) = summary.largest_differentiator {
        output.push_str(&format!("Largest differentiator: {}\n", factor.label()));
    }
    output
}

fn push_issue(output: &mut String, owner: &str, issue: &ValidationIssue) {
    output.push_str(&format!("- {owner}: {issue}\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compare::{compare, summarize};
    use crate::engine::rank::score_and_rank;
    use crate::engine::score_motorcycle;
    use crate::engine::weights::default_weights;
    use crate::types::config::DEFAULT_NARROW_SPREAD;
    use crate::types::scored::RejectedRecord;
    use crate::types::record::{PillionMode, VehicleRecord};
    use crate::validate::fixtures::{commuter, roadster};

    #[test]
    fn markdown_ranking_contains_sections() {
        let nameless = VehicleRecord::default();
        let ranking = score_and_rank(
            &[roadster(), commuter(), nameless],
            &default_weights(),
            PillionMode::None,
            DEFAULT_NARROW_SPREAD,
        )
        .expect("batch should rank");
        let rendered = ranking_to_markdown(&RankingReport::new(ranking, PillionMode::None));

        assert!(rendered.contains("# Motorcycle Ranking"));
        assert!(rendered.contains("| 1 | KTM 390 Duke (2024) | 82 |"));
        assert!(rendered.contains("## Factor Scores"));
        assert!(rendered.contains("Braking & Safety Confidence"));
        assert!(rendered.contains("## Rejected"));
        assert!(rendered.contains("MISSING_BRAND"));
    }

    #[test]
    fn markdown_comparison_names_winners() {
        let ranking = score_and_rank(
            &[roadster(), commuter()],
            &default_weights(),
            PillionMode::None,
            DEFAULT_NARROW_SPREAD,
        )
        .expect("batch should rank");
        let a = ranking.vehicles[0].clone();
        let b = ranking.vehicles[1].clone();
        let rows = compare(&a, &b);
        let summary = summarize(&rows);
        let rendered = comparison_to_markdown(&ComparisonReport::new(a, b, rows, summary));

        assert!(rendered.starts_with("# KTM 390 Duke (2024) vs Hero Splendor Plus (2023)"));
        assert!(rendered.contains("| Highway Stability | 8.0 | 2.5 | 5.5 | KTM 390 Duke (2024) |"));
        assert!(rendered.contains("Largest differentiator: Highway Stability"));
    }

    #[test]
    fn markdown_scores_list_unranked_vehicles() {
        let scored = score_motorcycle(&roadster(), &default_weights(), PillionMode::None)
            .expect("complete record should score");
        let rejected = RejectedRecord {
            name: "unnamed vehicle".to_string(),
            issues: vec![ValidationIssue::new("MISSING_BRAND", "brand is required", None)],
        };
        let rendered =
            scores_to_markdown(&ScoreReport::new(vec![scored], vec![rejected], PillionMode::None));

        assert!(rendered.starts_with("# Motorcycle Scores"));
        assert!(rendered.contains("| KTM 390 Duke (2024) | 82 |"));
        assert!(rendered.contains("- unnamed vehicle: [MISSING_BRAND] brand is required"));
    }
}
