use crate::types::record::{positive, present, AbsType, Confidence, Field, VehicleRecord};
use tracing::warn;

pub const DEFAULT_ENGINE_CC: f64 = 150.0;
pub const DEFAULT_POWER_BHP: f64 = 10.0;
pub const DEFAULT_KERB_WEIGHT_KG: f64 = 140.0;
pub const DEFAULT_SEAT_HEIGHT_MM: f64 = 780.0;
pub const DEFAULT_WHEELBASE_MM: f64 = 1350.0;
pub const DEFAULT_GROUND_CLEARANCE_MM: f64 = 160.0;
pub const DEFAULT_FUEL_CAPACITY_L: f64 = 12.0;
pub const DEFAULT_FRONT_BRAKE: &str = "disc";
pub const DEFAULT_REAR_BRAKE: &str = "drum";
pub const DEFAULT_FRONT_TYRE_MM: f64 = 100.0;
pub const DEFAULT_REAR_TYRE_MM: f64 = 130.0;
pub const DEFAULT_FRONT_SUSPENSION: &str = "telescopic";
pub const DEFAULT_REAR_SUSPENSION: &str = "twin";

/// Returns a copy of `partial` with conservative fallbacks for every absent
/// field the scorer relies on.
///
/// Substituted fields are appended to `defaulted_fields`. Identity (brand,
/// model), torque, rear travel, handlebar posture, price and heat rating are
/// never invented, and the confidence label is only ever set (to low) when it
/// was missing.
pub fn fill_missing_data(partial: &VehicleRecord) -> VehicleRecord {
    let mut record = partial.clone();
    let mut filled = Vec::new();

    fill_number(&mut record.engine_cc, DEFAULT_ENGINE_CC, Field::EngineCc, &mut filled);
    fill_number(&mut record.power_bhp, DEFAULT_POWER_BHP, Field::PowerBhp, &mut filled);
    fill_number(
        &mut record.kerb_weight_kg,
        DEFAULT_KERB_WEIGHT_KG,
        Field::KerbWeightKg,
        &mut filled,
    );
    fill_number(
        &mut record.seat_height_mm,
        DEFAULT_SEAT_HEIGHT_MM,
        Field::SeatHeightMm,
        &mut filled,
    );
    fill_number(
        &mut record.wheelbase_mm,
        DEFAULT_WHEELBASE_MM,
        Field::WheelbaseMm,
        &mut filled,
    );
    fill_number(
        &mut record.ground_clearance_mm,
        DEFAULT_GROUND_CLEARANCE_MM,
        Field::GroundClearanceMm,
        &mut filled,
    );
    fill_number(
        &mut record.fuel_capacity_l,
        DEFAULT_FUEL_CAPACITY_L,
        Field::FuelCapacityL,
        &mut filled,
    );

    fill_text(&mut record.front_brake, DEFAULT_FRONT_BRAKE, Field::FrontBrake, &mut filled);
    fill_text(&mut record.rear_brake, DEFAULT_REAR_BRAKE, Field::RearBrake, &mut filled);
    if record.abs_type.is_none() {
        record.abs_type = Some(AbsType::None);
        filled.push(Field::AbsType);
    }
    fill_number(
        &mut record.front_tyre_mm,
        DEFAULT_FRONT_TYRE_MM,
        Field::FrontTyreMm,
        &mut filled,
    );
    fill_number(
        &mut record.rear_tyre_mm,
        DEFAULT_REAR_TYRE_MM,
        Field::RearTyreMm,
        &mut filled,
    );

    fill_text(
        &mut record.front_suspension,
        DEFAULT_FRONT_SUSPENSION,
        Field::FrontSuspension,
        &mut filled,
    );
    fill_text(
        &mut record.rear_suspension,
        DEFAULT_REAR_SUSPENSION,
        Field::RearSuspension,
        &mut filled,
    );

    if record.confidence.is_none() {
        record.confidence = Some(Confidence::Low);
    }

    if !filled.is_empty() {
        warn!(
            vehicle = %record.display_name(),
            fields = ?filled.iter().map(|field| field.as_str()).collect::<Vec<_>>(),
            "filled missing specification fields with defaults"
        );
    }
    for field in filled {
        if !record.defaulted_fields.contains(&field) {
            record.defaulted_fields.push(field);
        }
    }
    record
}

fn fill_text(slot: &mut Option<String>, fallback: &str, field: Field, filled: &mut Vec<Field>) {
    if !present(slot) {
        *slot = Some(fallback.to_string());
        filled.push(field);
    }
}

fn fill_number(slot: &mut Option<f64>, fallback: f64, field: Field, filled: &mut Vec<Field>) {
    if positive(*slot).is_none() {
        *slot = Some(fallback);
        filled.push(field);
    }
}
