use super::heat::usable_heat_rating;
use crate::types::factor::{Factor, FactorMap};
use crate::types::record::{positive, Confidence, Field, VehicleRecord};

/// Record fields each factor reads.
pub fn inputs_of(factor: Factor) -> &'static [Field] {
    match factor {
        Factor::TrafficEase => &[
            Field::KerbWeightKg,
            Field::SeatHeightMm,
            Field::PowerBhp,
            Field::EngineCc,
        ],
        Factor::BrakingSafety => &[
            Field::FrontBrake,
            Field::RearBrake,
            Field::AbsType,
            Field::FrontTyreMm,
            Field::RearTyreMm,
        ],
        Factor::PillionComfort => &[
            Field::RearSuspension,
            Field::RearTravelMm,
            Field::KerbWeightKg,
            Field::WheelbaseMm,
            Field::SeatHeightMm,
            Field::AbsType,
        ],
        Factor::HighwayStability => &[
            Field::WheelbaseMm,
            Field::KerbWeightKg,
            Field::PowerBhp,
            Field::RearTyreMm,
        ],
        Factor::RiderComfort => &[
            Field::Handlebar,
            Field::SeatHeightMm,
            Field::FuelCapacityL,
            Field::RearSuspension,
            Field::GroundClearanceMm,
        ],
        Factor::SuspensionCompliance => &[
            Field::RearSuspension,
            Field::RearTravelMm,
            Field::FrontSuspension,
            Field::GroundClearanceMm,
        ],
        Factor::FunEngagement => &[
            Field::PowerBhp,
            Field::KerbWeightKg,
            Field::EngineCc,
            Field::Handlebar,
        ],
        Factor::HeatManagement => &[Field::HeatRating, Field::EngineCc, Field::PowerBhp],
        Factor::OwnershipPracticality => &[Field::Brand, Field::PriceInr],
        Factor::LongTermSuitability => &[
            Field::EngineCc,
            Field::PowerBhp,
            Field::Brand,
            Field::AbsType,
            Field::FuelCapacityL,
            Field::GroundClearanceMm,
            Field::KerbWeightKg,
        ],
    }
}

/// Optional inputs whose absence costs the factor one confidence step.
fn optional_inputs_of(factor: Factor) -> &'static [Field] {
    match factor {
        Factor::PillionComfort | Factor::SuspensionCompliance => &[Field::RearTravelMm],
        Factor::RiderComfort | Factor::FunEngagement => &[Field::Handlebar],
        _ => &[],
    }
}

/// Inputs the factor's score actually consumed for this record. A usable
/// heat rating replaces the displacement and power estimate.
fn consumed_inputs(record: &VehicleRecord, factor: Factor) -> &'static [Field] {
    match factor {
        Factor::HeatManagement if usable_heat_rating(record).is_some() => &[Field::HeatRating],
        _ => inputs_of(factor),
    }
}

fn is_missing(record: &VehicleRecord, field: Field) -> bool {
    match field {
        Field::RearTravelMm => positive(record.rear_travel_mm).is_none(),
        Field::Handlebar => record.handlebar.is_none(),
        _ => false,
    }
}

/// Per-factor confidence derived from the record's source label and data
/// completeness.
pub fn confidences_for(record: &VehicleRecord) -> FactorMap<Confidence> {
    let base = record.base_confidence();
    let has_heat_rating = usable_heat_rating(record).is_some();

    FactorMap::from_fn(|factor| {
        let mut confidence = match factor {
            Factor::OwnershipPracticality | Factor::LongTermSuitability => {
                base.cap(Confidence::Medium)
            }
            Factor::HeatManagement if !has_heat_rating => Confidence::Low,
            _ => base,
        };

        if optional_inputs_of(factor)
            .iter()
            .any(|field| is_missing(record, *field))
        {
            confidence = confidence.downgrade();
        }

        if consumed_inputs(record, factor)
            .iter()
            .any(|field| record.is_defaulted(*field))
        {
            confidence = confidence.downgrade();
        }

        confidence
    })
}
