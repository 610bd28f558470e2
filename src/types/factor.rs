use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

pub const FACTOR_COUNT: usize = 10;

/// The ten ownership factors. Declaration order is the canonical order used
/// for iteration, reports and stable tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    TrafficEase,
    BrakingSafety,
    PillionComfort,
    HighwayStability,
    RiderComfort,
    SuspensionCompliance,
    FunEngagement,
    HeatManagement,
    OwnershipPracticality,
    LongTermSuitability,
}

impl Factor {
    pub const ALL: [Factor; FACTOR_COUNT] = [
        Factor::TrafficEase,
        Factor::BrakingSafety,
        Factor::PillionComfort,
        Factor::HighwayStability,
        Factor::RiderComfort,
        Factor::SuspensionCompliance,
        Factor::FunEngagement,
        Factor::HeatManagement,
        Factor::OwnershipPracticality,
        Factor::LongTermSuitability,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Factor::TrafficEase => "traffic_ease",
            Factor::BrakingSafety => "braking_safety",
            Factor::PillionComfort => "pillion_comfort",
            Factor::HighwayStability => "highway_stability",
            Factor::RiderComfort => "rider_comfort",
            Factor::SuspensionCompliance => "suspension_compliance",
            Factor::FunEngagement => "fun_engagement",
            Factor::HeatManagement => "heat_management",
            Factor::OwnershipPracticality => "ownership_practicality",
            Factor::LongTermSuitability => "long_term_suitability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Factor::TrafficEase => "Daily Traffic Ease",
            Factor::BrakingSafety => "Braking & Safety Confidence",
            Factor::PillionComfort => "Pillion Comfort",
            Factor::HighwayStability => "Highway Stability",
            Factor::RiderComfort => "Rider Comfort",
            Factor::SuspensionCompliance => "Suspension Compliance",
            Factor::FunEngagement => "Fun & Engagement",
            Factor::HeatManagement => "Heat Management",
            Factor::OwnershipPracticality => "Ownership Practicality",
            Factor::LongTermSuitability => "Long-Term Suitability",
        }
    }

    pub fn from_key(key: &str) -> Option<Factor> {
        Factor::ALL.into_iter().find(|factor| factor.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly one value per factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorMap<T>([T; FACTOR_COUNT]);

impl<T: Copy> FactorMap<T> {
    #[cfg(test)]
    pub fn splat(value: T) -> Self {
        Self([value; FACTOR_COUNT])
    }

    pub fn from_fn(mut f: impl FnMut(Factor) -> T) -> Self {
        Self(std::array::from_fn(|index| f(Factor::ALL[index])))
    }

    pub fn get(&self, factor: Factor) -> T {
        self.0[factor.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, T)> + '_ {
        Factor::ALL.into_iter().map(move |factor| (factor, self.get(factor)))
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(Factor, T) -> U) -> FactorMap<U> {
        FactorMap::from_fn(|factor| f(factor, self.get(factor)))
    }
}

impl FactorMap<f64> {
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T> Index<Factor> for FactorMap<T> {
    type Output = T;

    fn index(&self, factor: Factor) -> &T {
        &self.0[factor.index()]
    }
}

impl<T> IndexMut<Factor> for FactorMap<T> {
    fn index_mut(&mut self, factor: Factor) -> &mut T {
        &mut self.0[factor.index()]
    }
}

impl<T: Serialize> Serialize for FactorMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FACTOR_COUNT))?;
        for factor in Factor::ALL {
            map.serialize_entry(factor.key(), &self.0[factor.index()])?;
        }
        map.end()
    }
}

pub type FactorScores = FactorMap<f64>;
pub type WeightVector = FactorMap<f64>;
