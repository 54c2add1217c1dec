//! Unit conversion engine
//!
//! String keys coming from the form are resolved once into a typed
//! [`Conversion`]; unknown categories and units fail fast with a
//! [`ConversionError`] instead of falling through to the input value.

pub mod format;
pub mod registry;
pub mod temperature;

use tracing::debug;

use crate::shared::errors::ConversionResult;
use crate::shared::errors::ConversionError;
pub use registry::{Category, CategoryDefinition, ConversionRule, Unit};
use temperature::convert_temperature;

/// A validated conversion: both units are members of `category`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    category: Category,
    from: Unit,
    to: Unit,
}

impl Conversion {
    /// Build from typed units, checking category membership
    pub fn new(category: Category, from: Unit, to: Unit) -> ConversionResult<Self> {
        let definition = category.definition();
        for unit in [from, to] {
            if !definition.contains(unit) {
                return Err(ConversionError::invalid_unit(unit.name(), category.name()));
            }
        }
        Ok(Self { category, from, to })
    }

    /// Resolve category and unit names (or symbols), case-insensitively
    ///
    /// The category is checked first, then `from_unit`, then `to_unit`.
    pub fn resolve(category: &str, from_unit: &str, to_unit: &str) -> ConversionResult<Self> {
        let category: Category = category.parse()?;
        let definition = category.definition();
        let from = definition.resolve_unit(from_unit)?;
        let to = definition.resolve_unit(to_unit)?;
        Ok(Self { category, from, to })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> Unit {
        self.from
    }

    pub fn to_unit(&self) -> Unit {
        self.to
    }

    /// Convert `value` from the source unit to the target unit
    ///
    /// Numeric edge cases (zero, negatives, very large values) are never rejected.
    pub fn apply(&self, value: f64) -> ConversionResult<f64> {
        if self.from == self.to {
            return Ok(value);
        }

        let definition = self.category.definition();
        let result = match definition.rule {
            ConversionRule::Linear { .. } => {
                let base_value = value / definition.factor(self.from)?;
                base_value * definition.factor(self.to)?
            }
            ConversionRule::Temperature => {
                let from = definition.temperature_unit(self.from)?;
                let to = definition.temperature_unit(self.to)?;
                convert_temperature(value, from, to)
            }
        };

        debug!(
            category = %self.category,
            from = %self.from,
            to = %self.to,
            value,
            result,
            "converted"
        );

        Ok(result)
    }
}

/// Convert `value` between two units of `category`, all given by name
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str, category: &str) -> ConversionResult<f64> {
    Conversion::resolve(category, from_unit, to_unit)?.apply(value)
}
