//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax schedule
//! from YAML files.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PaymentFrequency;

use super::types::{
    AllowancesConfig, FrequencyConfig, FrequencyTable, PositionPreset, PositionsConfig,
    PropertyTaxRates, ScheduleConfig, ScheduleMetadata, TaxConfig,
};

/// Months in a year; every frequency must annualise to this.
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Relative slack allowed when checking `periods_per_year * factor`.
///
/// The published factors are rounded (4.33 weeks, 2.17 fortnights).
const ANNUALISATION_TOLERANCE: Decimal = dec!(0.01);

/// Loads and provides access to a tax schedule.
///
/// # Directory Structure
///
/// ```text
/// config/gy2026/
/// ├── schedule.yaml     # Metadata, PAYE rates, deadlines
/// ├── frequencies.yaml  # Per-frequency statutory parameters
/// ├── allowances.yaml   # Insurance premiums, qualification allowances
/// ├── property.yaml     # Property tax rate matrix
/// └── positions.yaml    # Government position presets
/// ```
///
/// # Example
///
/// ```no_run
/// use gy_tax_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gy2026").unwrap();
/// let preset = loader.get_position("nurse-staff").unwrap();
/// println!("{}: {}", preset.title, preset.base_salary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The schedule violates an invariant (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        let frequencies =
            Self::load_yaml::<FrequencyTable<FrequencyConfig>>(&path.join("frequencies.yaml"))?;
        let allowances = Self::load_yaml::<AllowancesConfig>(&path.join("allowances.yaml"))?;
        let property_rates = Self::load_yaml::<PropertyTaxRates>(&path.join("property.yaml"))?;
        let positions = Self::load_yaml::<PositionsConfig>(&path.join("positions.yaml"))?;

        let config = TaxConfig::new(
            schedule.schedule,
            schedule.rates,
            schedule.deadlines,
            frequencies,
            allowances.insurance_premiums,
            allowances.qualification_allowances,
            property_rates,
            positions.positions,
        );
        Self::validate(&config)?;

        debug!(
            path = %path.display(),
            schedule = %config.metadata().name,
            year = config.metadata().year,
            positions = config.positions().len(),
            "Loaded tax configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, applying the same validation as [`load`](Self::load).
    pub fn from_config(config: TaxConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks the invariants the calculations rely on.
    fn validate(config: &TaxConfig) -> EngineResult<()> {
        for (frequency, freq_config) in config.frequencies().iter() {
            if freq_config.factor <= Decimal::ZERO {
                return Err(invalid(frequency, "factor must be positive"));
            }
            if freq_config.periods_per_year == 0 {
                return Err(invalid(frequency, "periods_per_year must be positive"));
            }

            let months = Decimal::from(freq_config.periods_per_year) * freq_config.factor;
            if (months - MONTHS_PER_YEAR).abs() > MONTHS_PER_YEAR * ANNUALISATION_TOLERANCE {
                return Err(invalid(
                    frequency,
                    &format!("periods_per_year x factor is {} months, expected 12", months),
                ));
            }
        }

        if config.rates().gratuity_accrual_months == 0 {
            return Err(EngineError::InvalidConfig {
                message: "gratuity_accrual_months must be positive".to_string(),
            });
        }

        for deadline in config.deadlines() {
            if !(1..=12).contains(&deadline.month) || !(1..=31).contains(&deadline.day) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "deadline '{}' has invalid date {}/{}",
                        deadline.name, deadline.month, deadline.day
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }

    /// Gets a position preset by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gy_tax_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/gy2026")?;
    /// let preset = loader.get_position("it-officer-2")?;
    /// println!("Position: {}", preset.title);
    /// # Ok::<(), gy_tax_engine::error::EngineError>(())
    /// ```
    pub fn get_position(&self, id: &str) -> EngineResult<&PositionPreset> {
        self.config
            .positions()
            .get(id)
            .ok_or_else(|| EngineError::PositionNotFound { id: id.to_string() })
    }
}

fn invalid(frequency: PaymentFrequency, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        message: format!("{} frequency: {}", frequency, message),
    }
}
