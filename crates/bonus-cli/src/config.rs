use bonus_calculator::{BonusError, BonusFrequency, BonusResult, CalculationInput, DisplayOptions};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

pub const CONFIG_PATH_ENV: &str = "BONUS_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "bonus.toml";
pub const FORMAT_ENV: &str = "BONUS_FORMAT";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = BonusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(BonusError::invalid_setting(
                "display.format",
                format!("unknown output format '{other}', expected text or json"),
            )),
        }
    }
}

/// Form values used when a flag is not given.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormDefaults {
    pub base_salary: f64,
    pub bonus_percentage: f64,
    pub tax_rate: f64,
    pub deductions: f64,
    pub frequency: BonusFrequency,
    pub include_overtime: bool,
    pub overtime_hours: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            base_salary: 0.0,
            bonus_percentage: 0.0,
            tax_rate: 0.0,
            deductions: 0.0,
            frequency: BonusFrequency::Annual,
            include_overtime: false,
            overtime_hours: 0.0,
        }
    }
}

impl FormDefaults {
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            base_salary: self.base_salary,
            bonus_percentage: self.bonus_percentage,
            tax_rate: self.tax_rate,
            deductions: self.deductions,
            bonus_frequency: self.frequency,
            include_overtime: self.include_overtime,
            overtime_hours: self.overtime_hours,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub advanced: bool,
    pub show_breakdown: bool,
    pub format: OutputFormat,
}

impl DisplayConfig {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions { advanced: self.advanced, show_breakdown: self.show_breakdown }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BonusConfig {
    pub defaults: FormDefaults,
    pub display: DisplayConfig,
}

impl BonusConfig {
    /// Loads from `$BONUS_CONFIG_PATH`, falling back to `bonus.toml`.
    pub fn load() -> BonusResult<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Reads `path` and applies `BONUS_FORMAT`. A missing file yields the
    /// defaults; an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> BonusResult<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` without consulting the environment.
    pub fn read_file(path: &Path) -> BonusResult<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                info!(path = %path.display(), "Loaded configuration file");
                Self::from_toml_str(&contents)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(err) => Err(BonusError::configuration(format!(
                "failed to read '{}': {err}",
                path.display()
            ))),
        }
    }

    pub fn from_toml_str(contents: &str) -> BonusResult<Self> {
        toml::from_str(contents).map_err(|e| BonusError::configuration(e.to_string()))
    }

    pub fn apply_env_overrides(&mut self) -> BonusResult<()> {
        if let Ok(format) = std::env::var(FORMAT_ENV) {
            self.display.format = format.parse()?;
        }
        Ok(())
    }

    /// Rejects defaults the form itself could never produce.
    pub fn validate(&self) -> BonusResult<()> {
        let d = &self.defaults;
        let numbers = [
            ("defaults.base_salary", d.base_salary),
            ("defaults.bonus_percentage", d.bonus_percentage),
            ("defaults.tax_rate", d.tax_rate),
            ("defaults.deductions", d.deductions),
            ("defaults.overtime_hours", d.overtime_hours),
        ];
        for (setting, value) in numbers {
            if !value.is_finite() {
                return Err(BonusError::invalid_setting(setting, format!("{setting} must be finite")));
            }
        }
        for (setting, value) in [
            ("defaults.base_salary", d.base_salary),
            ("defaults.deductions", d.deductions),
            ("defaults.overtime_hours", d.overtime_hours),
        ] {
            if value < 0.0 {
                return Err(BonusError::invalid_setting(
                    setting,
                    format!("{setting} must not be negative, got {value}"),
                ));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> BonusResult<String> {
        toml::to_string_pretty(self).map_err(|e| BonusError::serialization("toml", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = BonusConfig::from_toml_str(
            r#"
[defaults]
base_salary = 85000.0
frequency = "quarterly"

[display]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.base_salary, 85000.0);
        assert_eq!(config.defaults.frequency, BonusFrequency::Quarterly);
        assert_eq!(config.defaults.tax_rate, 0.0);
        assert!(!config.display.advanced);
        assert_eq!(config.display.format, OutputFormat::Json);
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let err = BonusConfig::from_toml_str("[defaults]\nbase_salary = \"lots\"").unwrap_err();
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn negative_defaults_are_rejected() {
        let mut config = BonusConfig::default();
        config.defaults.deductions = -1.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            BonusError::Configuration { setting: Some(ref s), .. } if s == "defaults.deductions"
        ));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = std::env::temp_dir().join("bonus-config-test-missing");
        let config = BonusConfig::read_file(&dir.join("absent.toml")).unwrap();
        assert_eq!(config, BonusConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_file_is_valid() {
        let config = BonusConfig::from_toml_str("").unwrap();
        assert_eq!(config, BonusConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = BonusConfig::default();
        config.defaults.base_salary = 120000.0;
        config.display.show_breakdown = true;
        let text = config.to_toml().unwrap();
        assert_eq!(BonusConfig::from_toml_str(&text).unwrap(), config);
    }
}
