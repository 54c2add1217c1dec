use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::core::features::unit_converter::Conversion;
use crate::core::features::unit_converter::format::DEFAULT_DECIMAL_PLACES;
use crate::shared::error::{AppError, AppResult};

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV_VAR: &str = "UNIT_CONVERTER_SETTINGS";

/// Upper bound for `display.decimal_places`
pub const MAX_DECIMAL_PLACES: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
#[serde(default)]
pub struct ConverterSettings {
    pub preferences: UserPreferences,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
#[serde(default)]
pub struct UserPreferences {
    pub default_category: String,
    pub default_from_unit: String,
    pub default_to_unit: String,
    pub default_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "settings.ts")]
#[serde(default)]
pub struct DisplaySettings {
    pub decimal_places: u8,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            preferences: UserPreferences::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_category: "Length".to_string(),
            default_from_unit: "Meters".to_string(),
            default_to_unit: "Feet".to_string(),
            default_value: 0.0,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES as u8,
        }
    }
}

impl ConverterSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        if let Ok(path) = std::env::var(SETTINGS_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }

        ProjectDirs::from("com", "antigravity", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load settings from the default location, creating the file on first run
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "settings file missing, writing defaults");
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings at {}: {}", path.display(), e)))?;

        settings.validate()?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Check that the defaults resolve through the unit registry
    pub fn validate(&self) -> AppResult<()> {
        self.default_conversion()
            .map_err(|e| AppError::Config(format!("Invalid default selection: {}", e)))?;

        if !self.preferences.default_value.is_finite() {
            return Err(AppError::Config("default_value must be a finite number".to_string()));
        }

        if self.display.decimal_places > MAX_DECIMAL_PLACES {
            return Err(AppError::Config(format!(
                "decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.display.decimal_places
            )));
        }

        Ok(())
    }

    pub fn default_conversion(&self) -> AppResult<Conversion> {
        let prefs = &self.preferences;
        Ok(Conversion::resolve(
            &prefs.default_category,
            &prefs.default_from_unit,
            &prefs.default_to_unit,
        )?)
    }

    pub fn decimal_places(&self) -> usize {
        usize::from(self.display.decimal_places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("unit-converter-{}", uuid::Uuid::new_v4()))
            .join("settings.json")
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = ConverterSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.decimal_places(), 2);
        assert_eq!(settings.preferences.default_value, 0.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: ConverterSettings =
            serde_json::from_str(r#"{"preferences":{"default_category":"Weight","default_from_unit":"Kilograms","default_to_unit":"Pounds"}}"#)
                .unwrap();
        assert_eq!(settings.preferences.default_category, "Weight");
        assert_eq!(settings.preferences.default_value, 0.0);
        assert_eq!(settings.display.decimal_places, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unit_outside_category() {
        let mut settings = ConverterSettings::default();
        settings.preferences.default_to_unit = "Celsius".to_string();
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("Celsius"));
    }

    #[test]
    fn test_validate_rejects_too_many_decimals() {
        let mut settings = ConverterSettings::default();
        settings.display.decimal_places = 11;
        assert!(matches!(settings.validate(), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_load_creates_file_with_defaults() {
        let path = temp_settings_path();
        let settings = ConverterSettings::load_from(&path).await.unwrap();
        assert_eq!(settings, ConverterSettings::default());
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let path = temp_settings_path();
        let mut settings = ConverterSettings::default();
        settings.preferences.default_category = "Temperature".to_string();
        settings.preferences.default_from_unit = "Celsius".to_string();
        settings.preferences.default_to_unit = "Kelvin".to_string();
        settings.preferences.default_value = 21.5;
        settings.save_to(&path).await.unwrap();

        let loaded = ConverterSettings::load_from(&path).await.unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    // Single test so the environment variable is never touched concurrently
    #[tokio::test]
    async fn test_settings_path_env_override() {
        std::env::remove_var(SETTINGS_ENV_VAR);
        let default_path = ConverterSettings::get_settings_path().unwrap();
        assert!(default_path.ends_with("settings.json"));

        let path = temp_settings_path();
        std::env::set_var(SETTINGS_ENV_VAR, &path);
        assert_eq!(ConverterSettings::get_settings_path().unwrap(), path);

        let settings = ConverterSettings::load().await.unwrap();
        assert_eq!(settings, ConverterSettings::default());
        assert!(path.exists());

        std::env::remove_var(SETTINGS_ENV_VAR);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let path = temp_settings_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = ConverterSettings::load_from(&path).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
