use serde::Serialize;

pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rank::score_and_rank;
    use crate::engine::weights::default_weights;
    use crate::types::config::DEFAULT_NARROW_SPREAD;
    use crate::types::record::PillionMode;
    use crate::types::report::RankingReport;
    use crate::validate::fixtures::{commuter, roadster};

    #[test]
    fn json_report_contains_ranked_vehicles_and_factor_keys() {
        let ranking = score_and_rank(
            &[roadster(), commuter()],
            &default_weights(),
            PillionMode::Secondary,
            DEFAULT_NARROW_SPREAD,
        )
        .expect("batch should rank");
        let report = RankingReport::new(ranking, PillionMode::Secondary);

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"pillion_mode\": \"secondary\""));
        assert!(rendered.contains("\"rank\": 1"));
        assert!(rendered.contains("\"braking_safety\""));
        assert!(rendered.contains("\"generated_at\""));

        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("output should be valid json");
        assert_eq!(parsed["vehicles"].as_array().map(Vec::len), Some(2));
    }
}
