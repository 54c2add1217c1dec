//! Unit converter command module
//!
//! Wraps the conversion engine into serializable request/response types.

use crate::core::features::unit_converter::format::{format_conversion, format_number};
use crate::core::features::unit_converter::{Category, Conversion, Unit};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::ConverterSettings;
use crate::shared::types::{
    CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, GetCategoriesResponse, GetUnitsResponse, UnitDTO,
};

fn unit_dto(unit: Unit) -> UnitDTO {
    UnitDTO {
        id: unit.symbol().to_string(),
        label: unit.name().to_string(),
        category: unit.category().name().to_string(),
    }
}

fn category_dto(category: Category) -> CategoryDTO {
    let definition = category.definition();
    CategoryDTO {
        id: category.name().to_lowercase(),
        label: category.name().to_string(),
        kind: definition.rule.kind().to_string(),
        units: definition.units.iter().copied().map(unit_dto).collect(),
    }
}

/// Convert units using the registry
pub fn convert_units_command(request: ConvertUnitsRequest, decimal_places: usize) -> AppResult<ConvertUnitsResponse> {
    let conversion = Conversion::resolve(&request.category, &request.from_unit, &request.to_unit)?;
    let result = conversion.apply(request.amount)?;

    let from = conversion.from_unit();
    let to = conversion.to_unit();
    tracing::info!(category = %conversion.category(), %from, %to, amount = request.amount, result, "convert_units");

    Ok(ConvertUnitsResponse {
        result,
        formatted_amount: format_number(request.amount, decimal_places),
        formatted_result: format_number(result, decimal_places),
        category: conversion.category().name().to_string(),
        from_unit: from.name().to_string(),
        to_unit: to.name().to_string(),
        summary: format_conversion(request.amount, from, result, to, decimal_places),
    })
}

/// All categories with their units, in display order
pub fn get_categories_command() -> GetCategoriesResponse {
    GetCategoriesResponse {
        categories: Category::ALL.into_iter().map(category_dto).collect(),
    }
}

/// Units of one category, in display order
pub fn get_units_for_category_command(category: &str) -> AppResult<GetUnitsResponse> {
    let category: Category = category.parse()?;
    Ok(GetUnitsResponse {
        units: category.definition().units.iter().copied().map(unit_dto).collect(),
    })
}

/// Every unit, ordered by category then by display order
pub fn get_all_units_command() -> GetUnitsResponse {
    GetUnitsResponse {
        units: Category::ALL
            .into_iter()
            .flat_map(|category| category.definition().units.iter().copied())
            .map(unit_dto)
            .collect(),
    }
}

/// Default (from, to) pair for a category
///
/// The configured defaults apply when `category` is the configured default
/// category; any other category starts on its first unit for both sides.
pub fn default_units(settings: &ConverterSettings, category: Category) -> (Unit, Unit) {
    if let Ok(conversion) = settings.default_conversion() {
        if conversion.category() == category {
            return (conversion.from_unit(), conversion.to_unit());
        }
    }

    let first = category.definition().units[0];
    (first, first)
}

/// Fill in anything the caller left out from the settings defaults
pub fn build_request(
    settings: &ConverterSettings,
    amount: Option<f64>,
    category: Option<String>,
    from_unit: Option<String>,
    to_unit: Option<String>,
) -> AppResult<ConvertUnitsRequest> {
    let category_name = category.unwrap_or_else(|| settings.preferences.default_category.clone());
    let parsed: Category = category_name.parse()?;
    let (default_from, default_to) = default_units(settings, parsed);

    let amount = amount.unwrap_or(settings.preferences.default_value);
    if !amount.is_finite() {
        return Err(AppError::Validation(format!("Value must be a finite number, got {}", amount)));
    }

    Ok(ConvertUnitsRequest {
        category: category_name,
        from_unit: from_unit.unwrap_or_else(|| default_from.name().to_string()),
        to_unit: to_unit.unwrap_or_else(|| default_to.name().to_string()),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ConversionError;

    fn request(category: &str, from: &str, to: &str, amount: f64) -> ConvertUnitsRequest {
        ConvertUnitsRequest {
            category: category.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            amount,
        }
    }

    #[test]
    fn test_convert_units_command() {
        let response = convert_units_command(request("Length", "Kilometers", "Meters", 1.2345), 2).unwrap();
        assert!((response.result - 1234.5).abs() < 1e-9);
        assert_eq!(response.formatted_amount, "1.23");
        assert_eq!(response.formatted_result, "1,234.50");
        assert_eq!(response.summary, "1.23 Kilometers = 1,234.50 Meters");
    }

    #[test]
    fn test_response_uses_canonical_names() {
        let response = convert_units_command(request("temperature", "°c", "k", 0.0), 2).unwrap();
        assert_eq!(response.category, "Temperature");
        assert_eq!(response.from_unit, "Celsius");
        assert_eq!(response.to_unit, "Kelvin");
        assert_eq!(response.formatted_result, "273.15");
    }

    #[test]
    fn test_convert_units_command_rejects_invalid_unit() {
        let err = convert_units_command(request("Length", "Lightyears", "Meters", 1.0), 2).unwrap_err();
        assert!(matches!(
            err,
            AppError::Conversion(ConversionError::InvalidUnit { ref unit, .. }) if unit == "Lightyears"
        ));
    }

    #[test]
    fn test_get_categories_command() {
        let response = get_categories_command();
        let labels: Vec<&str> = response.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Length", "Weight", "Temperature"]);

        let weight = &response.categories[1];
        assert_eq!(weight.kind, "linear");
        let units: Vec<&str> = weight.units.iter().map(|u| u.label.as_str()).collect();
        assert_eq!(units, ["Kilograms", "Grams", "Pounds", "Ounces"]);
        assert_eq!(response.categories[2].kind, "temperature");
    }

    #[test]
    fn test_get_units_for_category_command() {
        let response = get_units_for_category_command("temperature").unwrap();
        assert_eq!(
            response.units[0],
            UnitDTO {
                id: "°C".to_string(),
                label: "Celsius".to_string(),
                category: "Temperature".to_string(),
            }
        );
        assert_eq!(response.units.len(), 3);

        assert!(get_units_for_category_command("Volume").is_err());
    }

    #[test]
    fn test_get_all_units_command() {
        let response = get_all_units_command();
        assert_eq!(response.units.len(), 12);
        assert_eq!(response.units.first().unwrap().label, "Meters");
        assert_eq!(response.units.last().unwrap().label, "Kelvin");
    }

    #[test]
    fn test_default_units() {
        let settings = ConverterSettings::default();
        assert_eq!(default_units(&settings, Category::Length), (Unit::Meters, Unit::Feet));
        assert_eq!(default_units(&settings, Category::Temperature), (Unit::Celsius, Unit::Celsius));
    }

    #[test]
    fn test_build_request_fills_defaults() {
        let settings = ConverterSettings::default();
        let request = build_request(&settings, None, None, None, None).unwrap();
        assert_eq!(request.category, "Length");
        assert_eq!(request.from_unit, "Meters");
        assert_eq!(request.to_unit, "Feet");
        assert_eq!(request.amount, 0.0);

        let request = build_request(&settings, Some(-4.0), Some("Weight".into()), None, Some("Ounces".into())).unwrap();
        assert_eq!(request.from_unit, "Kilograms");
        assert_eq!(request.to_unit, "Ounces");
        assert_eq!(request.amount, -4.0);
    }

    #[test]
    fn test_build_request_rejects_non_finite_value() {
        let settings = ConverterSettings::default();
        let err = build_request(&settings, Some(f64::NAN), None, None, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_build_request_rejects_unknown_category() {
        let settings = ConverterSettings::default();
        let err = build_request(&settings, Some(1.0), Some("Volume".into()), None, None).unwrap_err();
        assert!(matches!(err, AppError::Conversion(ConversionError::InvalidCategory { .. })));
    }
}
