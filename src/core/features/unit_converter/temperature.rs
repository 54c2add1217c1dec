//! Temperature formulas
//!
//! Temperature scales are affine, so they get closed-form pairwise formulas
//! instead of a factor table.

use super::registry::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TryFrom<Unit> for TemperatureUnit {
    type Error = Unit;

    fn try_from(unit: Unit) -> Result<Self, Self::Error> {
        match unit {
            Unit::Celsius => Ok(TemperatureUnit::Celsius),
            Unit::Fahrenheit => Ok(TemperatureUnit::Fahrenheit),
            Unit::Kelvin => Ok(TemperatureUnit::Kelvin),
            other => Err(other),
        }
    }
}

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}
