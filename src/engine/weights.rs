use crate::types::factor::{Factor, WeightVector};
use crate::types::validation::ValidationResult;
use tracing::warn;

pub const SUM_TOLERANCE: f64 = 0.01;
pub const SUM_ERROR_TOLERANCE: f64 = 0.05;
pub const CONCENTRATION_LIMIT: f64 = 0.5;
pub const MAX_ZERO_WEIGHTS: usize = 3;

/// The documented default weighting; sums to 1.
pub fn default_weights() -> WeightVector {
    WeightVector::from_fn(|factor| match factor {
        Factor::TrafficEase => 0.15,
        Factor::BrakingSafety => 0.15,
        Factor::PillionComfort => 0.05,
        Factor::HighwayStability => 0.10,
        Factor::RiderComfort => 0.12,
        Factor::SuspensionCompliance => 0.08,
        Factor::FunEngagement => 0.10,
        Factor::HeatManagement => 0.05,
        Factor::OwnershipPracticality => 0.10,
        Factor::LongTermSuitability => 0.10,
    })
}

/// Divides every weight by the vector's sum. A zero (or non-finite) sum
/// yields the default vector.
pub fn normalize_weights(weights: &WeightVector) -> WeightVector {
    let sum = weights.sum();
    if !sum.is_finite() || sum == 0.0 {
        return default_weights();
    }
    weights.map(|_, weight| weight / sum)
}

pub fn validate_weights(weights: &WeightVector) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (factor, weight) in weights.iter() {
        if weight < 0.0 || !weight.is_finite() {
            result.error(
                "NEGATIVE_WEIGHT",
                format!("weight for {} must be a non-negative number (found {weight})", factor.key()),
                Some(factor.key()),
            );
        }
    }

    let sum = weights.sum();
    let drift = (sum - 1.0).abs();
    if drift > SUM_ERROR_TOLERANCE {
        result.error(
            "WEIGHT_SUM",
            format!("weights must sum to 1.0 (found {sum:.3})"),
            None,
        );
    } else if drift > SUM_TOLERANCE {
        result.warn(
            "WEIGHT_SUM_DRIFT",
            format!("weights sum to {sum:.3}; they will be normalized to 1.0"),
            None,
        );
    }

    for (factor, weight) in weights.iter() {
        if weight > CONCENTRATION_LIMIT {
            result.warn(
                "WEIGHT_CONCENTRATION",
                format!(
                    "{} carries {:.0}% of the total weight",
                    factor.key(),
                    weight * 100.0
                ),
                Some(factor.key()),
            );
        }
    }

    let zeros = weights.iter().filter(|(_, weight)| *weight == 0.0).count();
    if zeros > MAX_ZERO_WEIGHTS {
        result.warn(
            "MANY_ZERO_WEIGHTS",
            format!("{zeros} factors have zero weight and are ignored"),
            None,
        );
    }

    result
}

/// Weight vector actually used for scoring, plus what validation found.
///
/// A raw sum away from 1 is cured by normalization and only warned about.
/// Faults normalization cannot cure (negative or non-finite entries, a zero
/// sum) fall back to the default vector, reported as `DEFAULT_WEIGHTS_APPLIED`.
pub fn resolve_weights(weights: &WeightVector) -> (WeightVector, ValidationResult) {
    let raw = validate_weights(weights);
    let sum = weights.sum();
    if sum.is_finite() && sum > 0.0 && !raw.has_code("NEGATIVE_WEIGHT") {
        let normalized = normalize_weights(weights);
        let mut validation = validate_weights(&normalized);
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            validation.warn(
                "WEIGHT_SUM_DRIFT",
                format!("weights sum to {sum:.3}; normalized to 1.0"),
                None,
            );
        }
        return (normalized, validation);
    }

    warn!(
        errors = raw.errors.len(),
        "weight vector rejected, falling back to default weights"
    );
    let codes = raw
        .errors
        .iter()
        .map(|issue| issue.code.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let mut validation = raw;
    validation.warn(
        "DEFAULT_WEIGHTS_APPLIED",
        format!("supplied weights were rejected ({codes}); default weights applied"),
        None,
    );
    (default_weights(), validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sums_to_one(weights: &WeightVector) {
        assert!((weights.sum() - 1.0).abs() < 1e-9, "sum = {}", weights.sum());
    }

    fn safety_heavy() -> WeightVector {
        // 0.9 + 9 * (0.12 / 9) = 1.02
        let mut weights = WeightVector::splat(0.12 / 9.0);
        weights[Factor::BrakingSafety] = 0.9;
        weights
    }

    #[test]
    fn default_weights_sum_to_one() {
        assert_sums_to_one(&default_weights());
        assert!(validate_weights(&default_weights()).warnings.is_empty());
    }

    #[test]
    fn zero_sum_returns_default_vector() {
        assert_eq!(normalize_weights(&WeightVector::splat(0.0)), default_weights());
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut raw = WeightVector::splat(3.0);
        raw[Factor::FunEngagement] = 11.0;
        raw[Factor::HeatManagement] = 0.0;
        let once = normalize_weights(&raw);
        let twice = normalize_weights(&once);
        assert_sums_to_one(&once);
        for (factor, weight) in once.iter() {
            assert!((weight - twice[factor]).abs() < 1e-12, "{factor}");
        }
    }

    #[test]
    fn safety_heavy_vector_normalizes_and_only_warns() {
        let raw = safety_heavy();
        assert_sums_to_one(&normalize_weights(&raw));

        let result = validate_weights(&raw);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.has_code("WEIGHT_SUM_DRIFT"));
        assert!(result.has_code("WEIGHT_CONCENTRATION"));
    }

    #[test]
    fn large_sum_drift_is_an_error() {
        let result = validate_weights(&WeightVector::splat(0.2));
        assert!(result.has_code("WEIGHT_SUM"));
        assert!(!result.is_valid());
    }

    #[test]
    fn negative_weights_are_errors_per_factor() {
        let mut weights = default_weights();
        weights[Factor::TrafficEase] = -0.05;
        weights[Factor::BrakingSafety] = 0.35;
        let result = validate_weights(&weights);
        let negative = result
            .errors
            .iter()
            .filter(|issue| issue.code == "NEGATIVE_WEIGHT")
            .collect::<Vec<_>>();
        assert_eq!(negative.len(), 1);
        assert_eq!(negative[0].field.as_deref(), Some("traffic_ease"));
    }

    #[test]
    fn many_zero_weights_warn() {
        let mut weights = WeightVector::splat(0.0);
        for factor in [
            Factor::TrafficEase,
            Factor::BrakingSafety,
            Factor::RiderComfort,
            Factor::FunEngagement,
            Factor::HighwayStability,
        ] {
            weights[factor] = 0.2;
        }
        let result = validate_weights(&weights);
        assert!(result.is_valid());
        assert!(result.has_code("MANY_ZERO_WEIGHTS"));
    }

    #[test]
    fn resolve_falls_back_on_negative_or_zero_vectors() {
        let mut negative = default_weights();
        negative[Factor::TrafficEase] = -0.1;
        let (weights, validation) = resolve_weights(&negative);
        assert_eq!(weights, default_weights());
        assert!(validation.has_code("NEGATIVE_WEIGHT"));
        assert!(validation.has_code("DEFAULT_WEIGHTS_APPLIED"));

        let (weights, validation) = resolve_weights(&WeightVector::splat(0.0));
        assert_eq!(weights, default_weights());
        assert!(validation.has_code("DEFAULT_WEIGHTS_APPLIED"));
    }

    #[test]
    fn resolve_normalizes_acceptable_vectors() {
        let (weights, validation) = resolve_weights(&safety_heavy());
        assert_sums_to_one(&weights);
        assert!(!validation.has_code("DEFAULT_WEIGHTS_APPLIED"));
        assert!(weights[Factor::BrakingSafety] > 0.88);
    }

    #[test]
    fn resolve_keeps_slider_vectors_far_from_one() {
        let mut sliders = WeightVector::splat(5.0);
        sliders[Factor::FunEngagement] = 10.0;
        let (weights, validation) = resolve_weights(&sliders);
        assert_sums_to_one(&weights);
        assert!((weights[Factor::FunEngagement] - 10.0 / 55.0).abs() < 1e-12);
        assert!((weights[Factor::TrafficEase] - 5.0 / 55.0).abs() < 1e-12);
        assert!(validation.is_valid());
        assert!(validation.has_code("WEIGHT_SUM_DRIFT"));
        assert!(!validation.has_code("WEIGHT_CONCENTRATION"));
        assert!(!validation.has_code("DEFAULT_WEIGHTS_APPLIED"));
    }

    #[test]
    fn resolve_keeps_a_single_override_on_top_of_defaults() {
        let mut weights = default_weights();
        weights[Factor::BrakingSafety] = 0.2;
        let (resolved, validation) = resolve_weights(&weights);
        assert_sums_to_one(&resolved);
        assert!((resolved[Factor::BrakingSafety] - 0.2 / 1.05).abs() < 1e-9);
        assert!(resolved[Factor::BrakingSafety] > 0.15);
        assert!(!validation.has_code("DEFAULT_WEIGHTS_APPLIED"));
    }
}
