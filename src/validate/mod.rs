pub mod defaults;

use crate::normalize::heat::usable_heat_rating;
use crate::types::record::{positive, present, Field, VehicleRecord};
use crate::types::validation::ValidationResult;

pub const MAX_PLAUSIBLE_CC: f64 = 2000.0;
pub const MAX_PLAUSIBLE_BHP: f64 = 200.0;
pub const MASS_RANGE_KG: (f64, f64) = (80.0, 400.0);
pub const SEAT_HEIGHT_RANGE_MM: (f64, f64) = (600.0, 1000.0);

/// Checks a raw record for completeness and plausibility.
///
/// Errors mean the record cannot be scored as-is; warnings flag values that
/// are present but suspicious, or optional data that is missing.
pub fn validate(record: &VehicleRecord) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !present(&record.brand) {
        result.error("MISSING_BRAND", "brand is required", Some(Field::Brand.as_str()));
    }
    if !present(&record.model) {
        result.error("MISSING_MODEL", "model is required", Some(Field::Model.as_str()));
    }

    match positive(record.engine_cc) {
        None => result.error(
            "INVALID_DISPLACEMENT",
            "engine displacement must be a positive number",
            Some(Field::EngineCc.as_str()),
        ),
        Some(cc) if cc > MAX_PLAUSIBLE_CC => result.warn(
            "IMPLAUSIBLE_DISPLACEMENT",
            format!("engine displacement {cc} cc is implausibly large"),
            Some(Field::EngineCc.as_str()),
        ),
        Some(_) => {}
    }

    match positive(record.power_bhp) {
        None => result.error(
            "INVALID_POWER",
            "power must be a positive number",
            Some(Field::PowerBhp.as_str()),
        ),
        Some(bhp) if bhp > MAX_PLAUSIBLE_BHP => result.warn(
            "IMPLAUSIBLE_POWER",
            format!("power {bhp} bhp is implausibly high"),
            Some(Field::PowerBhp.as_str()),
        ),
        Some(_) => {}
    }

    if positive(record.torque_nm).is_none() {
        result.warn(
            "MISSING_TORQUE",
            "torque not supplied",
            Some(Field::TorqueNm.as_str()),
        );
    }

    match positive(record.kerb_weight_kg) {
        None => result.error(
            "INVALID_MASS",
            "kerb weight must be a positive number",
            Some(Field::KerbWeightKg.as_str()),
        ),
        Some(kg) if kg < MASS_RANGE_KG.0 || kg > MASS_RANGE_KG.1 => result.warn(
            "MASS_OUT_OF_RANGE",
            format!(
                "kerb weight {kg} kg is outside {}-{} kg",
                MASS_RANGE_KG.0, MASS_RANGE_KG.1
            ),
            Some(Field::KerbWeightKg.as_str()),
        ),
        Some(_) => {}
    }

    match record.seat_height_mm {
        None => result.warn(
            "MISSING_SEAT_HEIGHT",
            "seat height not supplied",
            Some(Field::SeatHeightMm.as_str()),
        ),
        Some(mm) if !(SEAT_HEIGHT_RANGE_MM.0..=SEAT_HEIGHT_RANGE_MM.1).contains(&mm) => result
            .warn(
                "SEAT_HEIGHT_OUT_OF_RANGE",
                format!(
                    "seat height {mm} mm is outside {}-{} mm",
                    SEAT_HEIGHT_RANGE_MM.0, SEAT_HEIGHT_RANGE_MM.1
                ),
                Some(Field::SeatHeightMm.as_str()),
            ),
        Some(_) => {}
    }

    if positive(record.wheelbase_mm).is_none() {
        result.warn(
            "MISSING_WHEELBASE",
            "wheelbase not supplied",
            Some(Field::WheelbaseMm.as_str()),
        );
    }
    if positive(record.ground_clearance_mm).is_none() {
        result.warn(
            "MISSING_GROUND_CLEARANCE",
            "ground clearance not supplied",
            Some(Field::GroundClearanceMm.as_str()),
        );
    }

    if !present(&record.front_brake) {
        result.error(
            "MISSING_FRONT_BRAKE",
            "front brake type is required",
            Some(Field::FrontBrake.as_str()),
        );
    }
    if !present(&record.rear_brake) {
        result.error(
            "MISSING_REAR_BRAKE",
            "rear brake type is required",
            Some(Field::RearBrake.as_str()),
        );
    }
    if record.abs_type.is_none() {
        result.warn("MISSING_ABS", "ABS type not supplied", Some(Field::AbsType.as_str()));
    }

    let front_tyre = positive(record.front_tyre_mm);
    let rear_tyre = positive(record.rear_tyre_mm);
    if front_tyre.is_none() || rear_tyre.is_none() {
        let field = if front_tyre.is_none() {
            Field::FrontTyreMm
        } else {
            Field::RearTyreMm
        };
        result.warn(
            "MISSING_TYRE_WIDTHS",
            "front and rear tyre widths are not both supplied",
            Some(field.as_str()),
        );
    }

    if !present(&record.front_suspension) {
        result.warn(
            "MISSING_FRONT_SUSPENSION",
            "front suspension not described",
            Some(Field::FrontSuspension.as_str()),
        );
    }
    if !present(&record.rear_suspension) {
        result.warn(
            "MISSING_REAR_SUSPENSION",
            "rear suspension not described",
            Some(Field::RearSuspension.as_str()),
        );
    }
    if record.handlebar.is_none() {
        result.warn(
            "MISSING_HANDLEBAR",
            "handlebar posture not supplied",
            Some(Field::Handlebar.as_str()),
        );
    }

    for (field, value) in [
        (Field::FuelCapacityL, record.fuel_capacity_l),
        (Field::RearTravelMm, record.rear_travel_mm),
        (Field::PriceInr, record.price_inr),
    ] {
        if let Some(value) = value.filter(|value| positive(Some(*value)).is_none()) {
            result.warn(
                "NON_POSITIVE_VALUE",
                format!("{} of {value} is ignored", field.as_str()),
                Some(field.as_str()),
            );
        }
    }
    if let Some(rating) = record.heat_rating {
        if usable_heat_rating(record).is_none() {
            result.warn(
                "HEAT_RATING_OUT_OF_RANGE",
                format!("heat rating {rating} is outside 1-10 and is ignored"),
                Some(Field::HeatRating.as_str()),
            );
        }
    }

    result
}

/// Cheap pre-check for the fields scoring cannot do without.
pub fn has_minimum_data(record: &VehicleRecord) -> bool {
    present(&record.brand)
        && present(&record.model)
        && positive(record.engine_cc).is_some()
        && positive(record.power_bhp).is_some()
        && positive(record.kerb_weight_kg).is_some()
        && present(&record.front_brake)
        && present(&record.rear_brake)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::record::{AbsType, Confidence, Handlebar, VehicleRecord};

    /// A fully specified 399 cc naked roadster.
    pub fn roadster() -> VehicleRecord {
        VehicleRecord {
            brand: Some("KTM".to_string()),
            model: Some("390 Duke".to_string()),
            variant: None,
            year: Some(2024),
            engine_cc: Some(399.0),
            power_bhp: Some(46.0),
            torque_nm: Some(39.0),
            kerb_weight_kg: Some(168.0),
            seat_height_mm: Some(820.0),
            wheelbase_mm: Some(1357.0),
            ground_clearance_mm: Some(183.0),
            fuel_capacity_l: Some(15.0),
            front_brake: Some("disc".to_string()),
            rear_brake: Some("disc".to_string()),
            abs_type: Some(AbsType::DualChannel),
            front_tyre_mm: Some(110.0),
            rear_tyre_mm: Some(150.0),
            front_suspension: Some("USD fork".to_string()),
            rear_suspension: Some("mono-shock".to_string()),
            rear_travel_mm: Some(150.0),
            handlebar: Some(Handlebar::Upright),
            price_inr: Some(310_000.0),
            heat_rating: None,
            confidence: Some(Confidence::High),
            query: Some("ktm 390 duke".to_string()),
            defaulted_fields: Vec::new(),
        }
    }

    /// A light 110 cc commuter with drum brakes and twin shocks.
    pub fn commuter() -> VehicleRecord {
        VehicleRecord {
            brand: Some("Hero".to_string()),
            model: Some("Splendor Plus".to_string()),
            variant: None,
            year: Some(2023),
            engine_cc: Some(97.2),
            power_bhp: Some(7.9),
            torque_nm: Some(8.05),
            kerb_weight_kg: Some(112.0),
            seat_height_mm: Some(785.0),
            wheelbase_mm: Some(1236.0),
            ground_clearance_mm: Some(165.0),
            fuel_capacity_l: Some(9.8),
            front_brake: Some("drum".to_string()),
            rear_brake: Some("drum".to_string()),
            abs_type: Some(AbsType::None),
            front_tyre_mm: Some(80.0),
            rear_tyre_mm: Some(80.0),
            front_suspension: Some("telescopic".to_string()),
            rear_suspension: Some("twin shock".to_string()),
            rear_travel_mm: Some(90.0),
            handlebar: Some(Handlebar::Upright),
            price_inr: Some(75_000.0),
            heat_rating: None,
            confidence: Some(Confidence::Medium),
            query: Some("splendor plus".to_string()),
            defaulted_fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::roadster;
    use super::*;

    #[test]
    fn complete_record_validates_clean() {
        let result = validate(&roadster());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert!(has_minimum_data(&roadster()));
    }

    #[test]
    fn missing_required_fields_are_errors() {
        let mut record = roadster();
        record.brand = Some("  ".to_string());
        record.engine_cc = Some(0.0);
        record.power_bhp = None;
        record.kerb_weight_kg = Some(-5.0);
        record.rear_brake = None;

        let result = validate(&record);
        let codes = result
            .errors
            .iter()
            .map(|issue| issue.code.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            codes,
            vec![
                "MISSING_BRAND",
                "INVALID_DISPLACEMENT",
                "INVALID_POWER",
                "INVALID_MASS",
                "MISSING_REAR_BRAKE"
            ]
        );
        assert!(!has_minimum_data(&record));
    }

    #[test]
    fn implausible_values_are_warnings() {
        let mut record = roadster();
        record.engine_cc = Some(2300.0);
        record.power_bhp = Some(240.0);
        record.kerb_weight_kg = Some(420.0);
        record.seat_height_mm = Some(1050.0);

        let result = validate(&record);
        assert!(result.is_valid());
        for code in [
            "IMPLAUSIBLE_DISPLACEMENT",
            "IMPLAUSIBLE_POWER",
            "MASS_OUT_OF_RANGE",
            "SEAT_HEIGHT_OUT_OF_RANGE",
        ] {
            assert!(result.has_code(code), "expected {code}");
        }
    }

    #[test]
    fn missing_torque_wheelbase_and_handlebar_give_three_warnings() {
        let mut record = roadster();
        record.torque_nm = None;
        record.wheelbase_mm = None;
        record.handlebar = None;

        let result = validate(&record);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 3);
        assert!(result.has_code("MISSING_TORQUE"));
        assert!(result.has_code("MISSING_WHEELBASE"));
        assert!(result.has_code("MISSING_HANDLEBAR"));
    }

    #[test]
    fn missing_optional_descriptors_warn_once_each() {
        let mut record = roadster();
        record.seat_height_mm = None;
        record.ground_clearance_mm = None;
        record.abs_type = None;
        record.front_tyre_mm = None;
        record.rear_tyre_mm = None;
        record.front_suspension = None;
        record.rear_suspension = Some(String::new());

        let result = validate(&record);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 6);
        assert_eq!(
            result
                .warnings
                .iter()
                .filter(|issue| issue.code == "MISSING_TYRE_WIDTHS")
                .count(),
            1
        );
    }

    #[test]
    fn non_positive_optional_values_are_not_silently_dropped() {
        let mut record = roadster();
        record.wheelbase_mm = Some(0.0);
        record.ground_clearance_mm = Some(-1.0);
        record.rear_tyre_mm = Some(0.0);
        record.rear_travel_mm = Some(-10.0);
        record.heat_rating = Some(14.0);

        let result = validate(&record);
        assert!(result.is_valid());
        for code in [
            "MISSING_WHEELBASE",
            "MISSING_GROUND_CLEARANCE",
            "MISSING_TYRE_WIDTHS",
            "NON_POSITIVE_VALUE",
            "HEAT_RATING_OUT_OF_RANGE",
        ] {
            assert!(result.has_code(code), "expected {code}");
        }
        let travel = result
            .warnings
            .iter()
            .find(|issue| issue.code == "NON_POSITIVE_VALUE")
            .expect("rear travel should be flagged");
        assert_eq!(travel.field.as_deref(), Some("rear_travel_mm"));
    }
}
