use crate::engine::weights::default_weights;
use crate::error::MotoscoreError;
use crate::types::factor::{Factor, WeightVector};
use crate::types::record::PillionMode;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_NARROW_SPREAD: u8 = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotoscoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub weights: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub pillion_mode: Option<PillionMode>,
    pub narrow_spread: Option<i64>,
}

impl MotoscoreConfig {
    /// Raw weight vector: configured keys override the defaults, the rest keep
    /// their default value. Normalization happens at scoring time.
    pub fn weights(&self) -> WeightVector {
        let mut vector = default_weights();
        if let Some(weights) = &self.weights {
            for (key, value) in weights {
                if let Some(factor) = Factor::from_key(key) {
                    vector[factor] = *value;
                }
            }
        }
        vector
    }

    pub fn pillion_mode(&self) -> PillionMode {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.pillion_mode)
            .unwrap_or_default()
    }

    pub fn narrow_spread(&self) -> u8 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.narrow_spread)
            .and_then(|spread| u8::try_from(spread).ok())
            .unwrap_or(DEFAULT_NARROW_SPREAD)
    }

    pub fn validate(&self) -> Result<(), MotoscoreError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| Factor::from_key(key).is_none())
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(MotoscoreError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
            if let Some((key, _)) = weights.iter().find(|(_, value)| !value.is_finite()) {
                return Err(MotoscoreError::ConfigParse(format!(
                    "weights.{key} must be a finite number"
                )));
            }
        }

        if let Some(spread) = self.scoring.as_ref().and_then(|scoring| scoring.narrow_spread) {
            if !(0..=100).contains(&spread) {
                return Err(MotoscoreError::ConfigParse(
                    "scoring.narrow_spread must be between 0 and 100".to_string(),
                ));
            }
        }

        Ok(())
    }
}
