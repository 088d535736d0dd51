//! Conversion between a frequency's period amounts and monthly amounts.
//!
//! Each frequency carries a factor relative to monthly: a monthly amount
//! multiplied by the factor gives the per-period amount.

use rust_decimal::Decimal;

use crate::config::TaxConfig;
use crate::models::PaymentFrequency;

/// Converts a monthly amount to the given frequency's period amount.
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::convert_from_monthly;
/// use gy_tax_engine::config::TaxConfig;
/// use gy_tax_engine::models::PaymentFrequency;
/// use rust_decimal_macros::dec;
///
/// let config = TaxConfig::guyana_2026();
/// assert_eq!(convert_from_monthly(dec!(1000), PaymentFrequency::Yearly, &config), dec!(12000));
/// ```
pub fn convert_from_monthly(
    monthly_amount: Decimal,
    frequency: PaymentFrequency,
    config: &TaxConfig,
) -> Decimal {
    monthly_amount * config.frequency(frequency).factor
}

/// Converts a period amount in the given frequency to a monthly amount.
///
/// Inverse of [`convert_from_monthly`].
pub fn convert_to_monthly(amount: Decimal, frequency: PaymentFrequency, config: &TaxConfig) -> Decimal {
    amount / config.frequency(frequency).factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_is_identity() {
        let config = TaxConfig::guyana_2026();
        assert_eq!(
            convert_from_monthly(dec!(123456), PaymentFrequency::Monthly, &config),
            dec!(123456)
        );
        assert_eq!(
            convert_to_monthly(dec!(123456), PaymentFrequency::Monthly, &config),
            dec!(123456)
        );
    }

    #[test]
    fn test_weekly_premium_conversion() {
        let config = TaxConfig::guyana_2026();
        // 4970 / 4.33
        let weekly = convert_from_monthly(dec!(4970), PaymentFrequency::Weekly, &config);
        assert_eq!(weekly.round_dp(2), dec!(1147.81));
    }

    #[test]
    fn test_round_trip_every_frequency() {
        let config = TaxConfig::guyana_2026();
        for frequency in PaymentFrequency::ALL {
            let there = convert_from_monthly(dec!(200000), frequency, &config);
            let back = convert_to_monthly(there, frequency, &config);
            assert!(
                (back - dec!(200000)).abs() < dec!(0.0001),
                "{} round trip gave {}",
                frequency,
                back
            );
        }
    }
}
