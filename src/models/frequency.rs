//! Pay frequency model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::EngineError;

/// How often a salary is paid.
///
/// Every amount in a [`TaxInputs`](super::TaxInputs) is denominated in this
/// frequency's period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    /// Paid per working day.
    Daily,
    /// Paid weekly.
    Weekly,
    /// Paid every two weeks.
    Fortnightly,
    /// Paid monthly.
    #[default]
    Monthly,
    /// Paid once a year.
    Yearly,
}

impl PaymentFrequency {
    /// Every frequency, shortest period first.
    pub const ALL: [PaymentFrequency; 5] = [
        PaymentFrequency::Daily,
        PaymentFrequency::Weekly,
        PaymentFrequency::Fortnightly,
        PaymentFrequency::Monthly,
        PaymentFrequency::Yearly,
    ];

    /// Returns the wire key for this frequency.
    pub fn key(&self) -> &'static str {
        match self {
            PaymentFrequency::Daily => "daily",
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Fortnightly => "fortnightly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Yearly => "yearly",
        }
    }

    /// Parses a frequency key, falling back to monthly when it is not recognised.
    ///
    /// Stored profiles may carry keys this engine does not know. They are
    /// calculated as monthly rather than rejected, and the fallback is logged.
    ///
    /// # Examples
    ///
    /// ```
    /// use gy_tax_engine::models::PaymentFrequency;
    ///
    /// assert_eq!(PaymentFrequency::parse_or_monthly("weekly"), PaymentFrequency::Weekly);
    /// assert_eq!(PaymentFrequency::parse_or_monthly("quarterly"), PaymentFrequency::Monthly);
    /// ```
    pub fn parse_or_monthly(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            warn!(frequency = key, "Unknown payment frequency, calculating as monthly");
            PaymentFrequency::Monthly
        })
    }
}

impl FromStr for PaymentFrequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.key() == s)
            .ok_or_else(|| EngineError::UnknownFrequency { key: s.to_string() })
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_every_key() {
        for frequency in PaymentFrequency::ALL {
            assert_eq!(frequency.key().parse::<PaymentFrequency>().unwrap(), frequency);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_key() {
        match "quarterly".parse::<PaymentFrequency>() {
            Err(EngineError::UnknownFrequency { key }) => assert_eq!(key, "quarterly"),
            other => panic!("Expected UnknownFrequency, got {:?}", other),
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Monthly".parse::<PaymentFrequency>().is_err());
    }

    #[test]
    fn test_parse_or_monthly_falls_back() {
        assert_eq!(
            PaymentFrequency::parse_or_monthly("bi-monthly"),
            PaymentFrequency::Monthly
        );
        assert_eq!(
            PaymentFrequency::parse_or_monthly("fortnightly"),
            PaymentFrequency::Fortnightly
        );
    }

    #[test]
    fn test_serialization_uses_keys() {
        let json = serde_json::to_string(&PaymentFrequency::Fortnightly).unwrap();
        assert_eq!(json, "\"fortnightly\"");
        let parsed: PaymentFrequency = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(parsed, PaymentFrequency::Yearly);
    }
}
