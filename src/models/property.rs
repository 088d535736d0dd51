//! Property tax models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Location class of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Georgetown.
    Georgetown,
    /// Other municipalities.
    Municipality,
    /// Rural and NDC areas.
    Rural,
}

/// Use class of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Residential use.
    Residential,
    /// Commercial use.
    Commercial,
}

/// The result of a property tax estimate.
///
/// Invariant: `quarterly_tax = annual_tax / 4` and
/// `monthly_equivalent = annual_tax / 12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTaxResult {
    /// Assessed annual rental value.
    pub annual_rental_value: Decimal,
    /// Location class.
    pub location_type: LocationType,
    /// Property class.
    pub property_type: PropertyType,
    /// Rate applied to the ARV.
    pub tax_rate: Decimal,
    /// Tax for the year.
    pub annual_tax: Decimal,
    /// Tax per quarter.
    pub quarterly_tax: Decimal,
    /// Tax spread over twelve months.
    pub monthly_equivalent: Decimal,
}
