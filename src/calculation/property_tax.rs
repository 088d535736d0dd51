//! Property tax estimate from annual rental value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::TaxConfig;
use crate::models::{LocationType, PropertyTaxResult, PropertyType};

/// Estimates property tax for one property.
///
/// `annual_tax = annual_rental_value * rate`, where the rate comes from the
/// location by property class matrix.
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::calculate_property_tax;
/// use gy_tax_engine::config::TaxConfig;
/// use gy_tax_engine::models::{LocationType, PropertyType};
/// use rust_decimal_macros::dec;
///
/// let config = TaxConfig::guyana_2026();
/// let result = calculate_property_tax(
///     dec!(1200000),
///     LocationType::Georgetown,
///     PropertyType::Residential,
///     &config,
/// );
/// assert_eq!(result.annual_tax, dec!(6000));
/// assert_eq!(result.quarterly_tax, dec!(1500));
/// assert_eq!(result.monthly_equivalent, dec!(500));
/// ```
pub fn calculate_property_tax(
    annual_rental_value: Decimal,
    location_type: LocationType,
    property_type: PropertyType,
    config: &TaxConfig,
) -> PropertyTaxResult {
    let tax_rate = config.property_rates().rate(location_type, property_type);
    let annual_tax = annual_rental_value * tax_rate;

    PropertyTaxResult {
        annual_rental_value,
        location_type,
        property_type,
        tax_rate,
        annual_tax,
        quarterly_tax: annual_tax / dec!(4),
        monthly_equivalent: annual_tax / dec!(12),
    }
}
