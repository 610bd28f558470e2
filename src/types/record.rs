use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn downgrade(self) -> Self {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium | Confidence::Low => Confidence::Low,
        }
    }

    pub fn cap(self, ceiling: Confidence) -> Self {
        self.min(ceiling)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbsType {
    DualChannel,
    SingleChannel,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handlebar {
    Upright,
    SemiUpright,
    ClipOn,
}

/// Who rides as passenger, and how much that matters to the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillionMode {
    #[default]
    None,
    Primary,
    Secondary,
}

impl fmt::Display for PillionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PillionMode::None => "none",
            PillionMode::Primary => "primary",
            PillionMode::Secondary => "secondary",
        })
    }
}

/// Record fields that validation, defaulting and confidence tracking refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Brand,
    Model,
    EngineCc,
    PowerBhp,
    TorqueNm,
    KerbWeightKg,
    SeatHeightMm,
    WheelbaseMm,
    GroundClearanceMm,
    FuelCapacityL,
    FrontBrake,
    RearBrake,
    AbsType,
    FrontTyreMm,
    RearTyreMm,
    FrontSuspension,
    RearSuspension,
    RearTravelMm,
    Handlebar,
    PriceInr,
    HeatRating,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::Model => "model",
            Field::EngineCc => "engine_cc",
            Field::PowerBhp => "power_bhp",
            Field::TorqueNm => "torque_nm",
            Field::KerbWeightKg => "kerb_weight_kg",
            Field::SeatHeightMm => "seat_height_mm",
            Field::WheelbaseMm => "wheelbase_mm",
            Field::GroundClearanceMm => "ground_clearance_mm",
            Field::FuelCapacityL => "fuel_capacity_l",
            Field::FrontBrake => "front_brake",
            Field::RearBrake => "rear_brake",
            Field::AbsType => "abs_type",
            Field::FrontTyreMm => "front_tyre_mm",
            Field::RearTyreMm => "rear_tyre_mm",
            Field::FrontSuspension => "front_suspension",
            Field::RearSuspension => "rear_suspension",
            Field::RearTravelMm => "rear_travel_mm",
            Field::Handlebar => "handlebar",
            Field::PriceInr => "price_inr",
            Field::HeatRating => "heat_rating",
        }
    }
}

/// Raw technical specification for one motorcycle, as handed over by discovery.
///
/// Every technical field is optional because discovery may return partial data.
/// Only the defaulter produces modified copies; `defaulted_fields` records
/// which values it substituted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleRecord {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub variant: Option<String>,
    pub year: Option<u16>,

    pub engine_cc: Option<f64>,
    pub power_bhp: Option<f64>,
    pub torque_nm: Option<f64>,
    pub kerb_weight_kg: Option<f64>,

    pub seat_height_mm: Option<f64>,
    pub wheelbase_mm: Option<f64>,
    pub ground_clearance_mm: Option<f64>,
    pub fuel_capacity_l: Option<f64>,

    pub front_brake: Option<String>,
    pub rear_brake: Option<String>,
    pub abs_type: Option<AbsType>,
    pub front_tyre_mm: Option<f64>,
    pub rear_tyre_mm: Option<f64>,

    pub front_suspension: Option<String>,
    pub rear_suspension: Option<String>,
    pub rear_travel_mm: Option<f64>,

    pub handlebar: Option<Handlebar>,
    pub price_inr: Option<f64>,
    pub heat_rating: Option<f64>,

    pub confidence: Option<Confidence>,
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaulted_fields: Vec<Field>,
}

impl VehicleRecord {
    /// Human-readable identity, e.g. "KTM 390 Duke (2024)".
    pub fn display_name(&self) -> String {
        let mut name = [self.brand.as_deref(), self.model.as_deref(), self.variant.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            name = self
                .query
                .clone()
                .unwrap_or_else(|| "unnamed vehicle".to_string());
        }
        match self.year {
            Some(year) => format!("{name} ({year})"),
            None => name,
        }
    }

    pub fn base_confidence(&self) -> Confidence {
        self.confidence.unwrap_or(Confidence::Low)
    }

    pub fn is_defaulted(&self, field: Field) -> bool {
        self.defaulted_fields.contains(&field)
    }

    /// Power-to-mass ratio in bhp per 100 kg.
    pub fn power_per_100kg(&self) -> Option<f64> {
        match (self.power_bhp, self.kerb_weight_kg) {
            (Some(power), Some(mass)) if mass > 0.0 => Some(power / mass * 100.0),
            _ => None,
        }
    }

    pub fn has_front_disc(&self) -> bool {
        is_disc(self.front_brake.as_deref())
    }

    pub fn has_rear_disc(&self) -> bool {
        is_disc(self.rear_brake.as_deref())
    }

    pub fn rear_shock(&self) -> Option<RearShock> {
        let text = self.rear_suspension.as_deref()?.to_ascii_lowercase();
        if text.contains("mono") {
            Some(RearShock::Mono)
        } else if text.contains("twin") || text.contains("dual") {
            Some(RearShock::Twin)
        } else {
            None
        }
    }

    pub fn has_inverted_fork(&self) -> bool {
        self.front_suspension
            .as_deref()
            .map(str::to_ascii_lowercase)
            .map(|text| {
                text.contains("usd") || text.contains("inverted") || text.contains("upside")
            })
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RearShock {
    Mono,
    Twin,
}

fn is_disc(brake: Option<&str>) -> bool {
    brake
        .map(|text| text.to_ascii_lowercase().contains("disc"))
        .unwrap_or(false)
}

/// Treats blank strings as absent.
pub fn present(value: &Option<String>) -> bool {
    value.as_deref().map(|text| !text.trim().is_empty()).unwrap_or(false)
}

/// Treats zero, negative and non-finite numbers as absent.
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|number| number.is_finite() && *number > 0.0)
}
