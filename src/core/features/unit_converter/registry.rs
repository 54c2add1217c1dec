//! Unit registry
//!
//! Categories, their member units in display order, and the rule each category
//! converts with. Everything here is static configuration.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;

use super::temperature::TemperatureUnit;
use crate::shared::errors::{ConversionError, ConversionResult};

/// Conversion domains, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    pub fn definition(self) -> &'static CategoryDefinition {
        match self {
            Category::Length => &LENGTH,
            Category::Weight => &WEIGHT,
            Category::Temperature => &TEMPERATURE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConversionError::invalid_category(s))
    }
}

/// Every unit known to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    // Length
    Meters,
    Kilometers,
    Miles,
    Feet,
    Inches,
    // Weight
    Kilograms,
    Grams,
    Pounds,
    Ounces,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 12] = [
        Unit::Meters,
        Unit::Kilometers,
        Unit::Miles,
        Unit::Feet,
        Unit::Inches,
        Unit::Kilograms,
        Unit::Grams,
        Unit::Pounds,
        Unit::Ounces,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Unit::Meters => "Meters",
            Unit::Kilometers => "Kilometers",
            Unit::Miles => "Miles",
            Unit::Feet => "Feet",
            Unit::Inches => "Inches",
            Unit::Kilograms => "Kilograms",
            Unit::Grams => "Grams",
            Unit::Pounds => "Pounds",
            Unit::Ounces => "Ounces",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Kilometers => "km",
            Unit::Miles => "mi",
            Unit::Feet => "ft",
            Unit::Inches => "in",
            Unit::Kilograms => "kg",
            Unit::Grams => "g",
            Unit::Pounds => "lb",
            Unit::Ounces => "oz",
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    /// Extra lookup keys, so temperatures can be typed without the degree sign
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Unit::Celsius => &["C"],
            Unit::Fahrenheit => &["F"],
            _ => &[],
        }
    }

    pub fn category(self) -> Category {
        match self {
            Unit::Meters | Unit::Kilometers | Unit::Miles | Unit::Feet | Unit::Inches => Category::Length,
            Unit::Kilograms | Unit::Grams | Unit::Pounds | Unit::Ounces => Category::Weight,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a category turns one unit into another
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionRule {
    /// `base = value / factor[from]`, `result = base * factor[to]`
    Linear { factors: &'static [(Unit, f64)] },
    /// Closed-form pairwise formulas
    Temperature,
}

impl ConversionRule {
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionRule::Linear { .. } => "linear",
            ConversionRule::Temperature => "temperature",
        }
    }
}

#[derive(Debug)]
pub struct CategoryDefinition {
    pub category: Category,
    pub units: &'static [Unit],
    pub rule: ConversionRule,
}

// Factors are relative to the first entry of each table (the base unit)
static LENGTH: CategoryDefinition = CategoryDefinition {
    category: Category::Length,
    units: &[Unit::Meters, Unit::Kilometers, Unit::Miles, Unit::Feet, Unit::Inches],
    rule: ConversionRule::Linear {
        factors: &[
            (Unit::Meters, 1.0),
            (Unit::Kilometers, 0.001),
            (Unit::Miles, 0.000621371),
            (Unit::Feet, 3.28084),
            (Unit::Inches, 39.3701),
        ],
    },
};

static WEIGHT: CategoryDefinition = CategoryDefinition {
    category: Category::Weight,
    units: &[Unit::Kilograms, Unit::Grams, Unit::Pounds, Unit::Ounces],
    rule: ConversionRule::Linear {
        factors: &[
            (Unit::Kilograms, 1.0),
            (Unit::Grams, 1000.0),
            (Unit::Pounds, 2.20462),
            (Unit::Ounces, 35.274),
        ],
    },
};

static TEMPERATURE: CategoryDefinition = CategoryDefinition {
    category: Category::Temperature,
    units: &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin],
    rule: ConversionRule::Temperature,
};

/// Lowercased name, symbol and aliases of every unit, initialized once at first lookup
static UNIT_REGISTRY: Lazy<HashMap<String, Unit>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for unit in Unit::ALL {
        registry.insert(unit.name().to_lowercase(), unit);
        registry.insert(unit.symbol().to_lowercase(), unit);
        for alias in unit.aliases() {
            registry.insert(alias.to_lowercase(), unit);
        }
    }
    registry
});

impl CategoryDefinition {
    pub fn contains(&self, unit: Unit) -> bool {
        self.units.contains(&unit)
    }

    /// Resolve a unit name or symbol, case-insensitively, within this category
    pub fn resolve_unit(&self, key: &str) -> ConversionResult<Unit> {
        UNIT_REGISTRY
            .get(&key.trim().to_lowercase())
            .copied()
            .filter(|unit| self.contains(*unit))
            .ok_or_else(|| ConversionError::invalid_unit(key, self.category.name()))
    }

    /// Linear factor for `unit`
    pub fn factor(&self, unit: Unit) -> ConversionResult<f64> {
        let factors: &[(Unit, f64)] = match self.rule {
            ConversionRule::Linear { factors } => factors,
            ConversionRule::Temperature => &[],
        };

        factors
            .iter()
            .find(|(candidate, _)| *candidate == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ConversionError::invalid_unit(unit.name(), self.category.name()))
    }

    pub fn temperature_unit(&self, unit: Unit) -> ConversionResult<TemperatureUnit> {
        TemperatureUnit::try_from(unit)
            .map_err(|unit| ConversionError::invalid_unit(unit.name(), self.category.name()))
    }
}
