//! Configuration loading and management for the tax engine.
//!
//! A [`TaxConfig`] holds every statutory parameter the calculations read:
//! PAYE rates, the per-frequency allowance table, insurance premiums,
//! qualification allowances, property tax rates, deadlines and position
//! presets. It is built once (from YAML or [`TaxConfig::guyana_2026`]) and
//! passed explicitly into each calculation.
//!
//! # Example
//!
//! ```no_run
//! use gy_tax_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/gy2026").unwrap();
//! println!("Loaded schedule: {}", loader.metadata().name);
//! ```

mod builtin;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowancesConfig, FrequencyConfig, FrequencyTable, InsurancePremiums, LocationRates,
    PositionPreset, PositionsConfig, PropertyTaxRates, QualificationAllowances, ScheduleConfig,
    ScheduleMetadata, TaxConfig, TaxDeadline, TaxRates,
};
