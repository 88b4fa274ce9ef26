/// 1 ft³ = 7.48052 US gal
pub const GALLONS_PER_CUBIC_FOOT: f64 = 7.48052;
/// 1 m³ = 35.3147 ft³
pub const CUBIC_FEET_PER_CUBIC_METER: f64 = 35.3147;

/// ft³ → US gal
pub fn cubic_feet_to_gallons(cubic_feet: f64) -> f64 {
    cubic_feet * GALLONS_PER_CUBIC_FOOT
}

/// m³ → ft³
pub fn cubic_meters_to_cubic_feet(cubic_meters: f64) -> f64 {
    cubic_meters * CUBIC_FEET_PER_CUBIC_METER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_foot_to_gallon_uses_single_factor() {
        assert_eq!(cubic_feet_to_gallons(1.0), GALLONS_PER_CUBIC_FOOT);
    }

    #[test]
    fn cubic_meter_to_cubic_foot_uses_single_factor() {
        assert_eq!(
            cubic_meters_to_cubic_feet(2.0),
            2.0 * CUBIC_FEET_PER_CUBIC_METER
        );
    }
}
