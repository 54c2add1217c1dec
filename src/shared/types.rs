use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ConvertUnitsRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_amount: String,
    pub formatted_result: String,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Rendered line, e.g. "1,234.50 Meters = 4,050.20 Feet"
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDTO>,
}

// Rich Unit Data Transfer Object for frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct UnitDTO {
    pub id: String,       // Unit symbol (e.g., "m", "°C")
    pub label: String,    // Display name (e.g., "Meters", "Celsius")
    pub category: String, // Category (e.g., "Length", "Weight")
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct GetCategoriesResponse {
    pub categories: Vec<CategoryDTO>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct CategoryDTO {
    pub id: String,
    pub label: String,
    /// "linear" or "temperature"
    pub kind: String,
    pub units: Vec<UnitDTO>,
}
