//! Strict error handling for the conversion engine
//!
//! Every lookup failure in the unit registry surfaces as a `ConversionError`.
//! Nothing falls through to a default value.
//! All errors are serializable so the command layer can hand them to a front end.

use thiserror::Error;
use serde::Serialize;

/// Conversion request errors
///
/// These are caller-contract violations, detected before any arithmetic happens.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ConversionError {
    /// Category name is not part of the configured set
    #[error("Invalid category: '{name}' is not a known category (expected one of Length, Weight, Temperature)")]
    InvalidCategory { name: String },

    /// Unit is not a member of the requested category
    #[error("Invalid unit: '{unit}' is not a {category} unit")]
    InvalidUnit { unit: String, category: String },
}

impl ConversionError {
    pub fn invalid_category(name: impl Into<String>) -> Self {
        ConversionError::InvalidCategory { name: name.into() }
    }

    pub fn invalid_unit(unit: impl Into<String>, category: impl Into<String>) -> Self {
        ConversionError::InvalidUnit {
            unit: unit.into(),
            category: category.into(),
        }
    }
}

// Helper type alias for engine results
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = ConversionError::invalid_unit("Lightyears", "Length");
        assert_eq!(err.to_string(), "Invalid unit: 'Lightyears' is not a Length unit");

        let err = ConversionError::invalid_category("Volume");
        assert!(err.to_string().contains("'Volume'"));
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let err = ConversionError::invalid_unit("Lightyears", "Length");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "InvalidUnit");
        assert_eq!(json["details"]["unit"], "Lightyears");
        assert_eq!(json["details"]["category"], "Length");
    }
}
