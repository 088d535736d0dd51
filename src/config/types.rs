//! Configuration types for the tax schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files or built in code by
//! [`TaxConfig::guyana_2026`].

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::models::{
    DeadlineKind, InsuranceType, LocationType, PaymentFrequency, PropertyType, QualificationType,
    TaxInputs,
};

/// Metadata about the tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// The jurisdiction the schedule applies to (e.g., "GY").
    pub jurisdiction: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The year of assessment.
    pub year: i32,
    /// URL to the published schedule.
    pub source_url: String,
}

/// Fixed rates that do not vary by pay frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    /// PAYE rate applied to chargeable income up to the threshold.
    pub lower_rate: Decimal,
    /// PAYE rate applied to chargeable income above the threshold.
    pub upper_rate: Decimal,
    /// Share of gross income an insurance premium may offset.
    pub insurance_income_cap: Decimal,
    /// Number of months in one gratuity accrual cycle.
    pub gratuity_accrual_months: u32,
    /// Day of the following month on which NIS contributions are due.
    pub nis_payment_due_day: u32,
}

/// A statutory deadline that recurs on the same calendar day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDeadline {
    /// Short name of the deadline.
    pub name: String,
    /// What is due.
    pub description: String,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// The kind of obligation.
    pub kind: DeadlineKind,
}

/// Root structure of `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Schedule metadata.
    pub schedule: ScheduleMetadata,
    /// Frequency-independent rates.
    pub rates: TaxRates,
    /// Annual filing and payment deadlines.
    #[serde(default)]
    pub deadlines: Vec<TaxDeadline>,
}

/// Statutory parameters for one pay frequency.
///
/// Every amount is denominated in the frequency's own period (a daily
/// config holds per-day amounts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyConfig {
    /// Display label (e.g., "Weekly").
    pub label: String,
    /// Months per period: a period amount equals the monthly amount times this factor.
    #[serde(deserialize_with = "deserialize_factor")]
    pub factor: Decimal,
    /// Minimum personal allowance per period.
    pub personal_allowance: Decimal,
    /// Chargeable income above which the upper PAYE rate applies.
    pub tax_threshold: Decimal,
    /// NIS contribution rate.
    pub nis_rate: Decimal,
    /// Insurable earnings ceiling for NIS.
    pub nis_ceiling: Decimal,
    /// Allowance per qualifying child.
    pub child_allowance: Decimal,
    /// Maximum non-taxable overtime.
    pub overtime_max: Decimal,
    /// Maximum non-taxable second-job income.
    pub second_job_max: Decimal,
    /// Maximum deductible insurance premium.
    pub insurance_max: Decimal,
    /// Suffix used when presenting amounts (e.g., "per week").
    pub period_label: String,
    /// Number of pay periods in a year.
    pub periods_per_year: u32,
}

/// A value held once per pay frequency.
///
/// Lookup is an exhaustive match, so every frequency always has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable<T> {
    /// Daily entry.
    pub daily: T,
    /// Weekly entry.
    pub weekly: T,
    /// Fortnightly entry.
    pub fortnightly: T,
    /// Monthly entry.
    pub monthly: T,
    /// Yearly entry.
    pub yearly: T,
}

impl<T> FrequencyTable<T> {
    /// Returns the entry for a frequency.
    pub fn get(&self, frequency: PaymentFrequency) -> &T {
        match frequency {
            PaymentFrequency::Daily => &self.daily,
            PaymentFrequency::Weekly => &self.weekly,
            PaymentFrequency::Fortnightly => &self.fortnightly,
            PaymentFrequency::Monthly => &self.monthly,
            PaymentFrequency::Yearly => &self.yearly,
        }
    }

    /// Iterates over all entries in frequency order.
    pub fn iter(&self) -> impl Iterator<Item = (PaymentFrequency, &T)> {
        PaymentFrequency::ALL
            .into_iter()
            .map(move |frequency| (frequency, self.get(frequency)))
    }
}

/// Monthly premiums for the fixed health insurance plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePremiums {
    /// Employee-only plan.
    pub employee: Decimal,
    /// Employee plus one dependant.
    pub employee_one: Decimal,
    /// Family plan.
    pub family: Decimal,
}

impl InsurancePremiums {
    /// Returns the monthly premium for a fixed plan.
    ///
    /// `Custom` has no fixed premium and yields `None`.
    pub fn monthly_premium(&self, insurance_type: InsuranceType) -> Option<Decimal> {
        match insurance_type {
            InsuranceType::None => Some(Decimal::ZERO),
            InsuranceType::Employee => Some(self.employee),
            InsuranceType::EmployeeOne => Some(self.employee_one),
            InsuranceType::Family => Some(self.family),
            InsuranceType::Custom => None,
        }
    }
}

/// Non-taxable qualification allowances for one pay frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationAllowances {
    /// ACCA qualification.
    pub acca: Decimal,
    /// Master's degree.
    pub masters: Decimal,
    /// Doctorate.
    pub phd: Decimal,
}

impl QualificationAllowances {
    /// Returns the allowance for a qualification.
    pub fn amount(&self, qualification: QualificationType) -> Decimal {
        match qualification {
            QualificationType::None => Decimal::ZERO,
            QualificationType::Acca => self.acca,
            QualificationType::Masters => self.masters,
            QualificationType::Phd => self.phd,
        }
    }
}

/// Root structure of `allowances.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowancesConfig {
    /// Monthly premiums for the fixed insurance plans.
    pub insurance_premiums: InsurancePremiums,
    /// Qualification allowances, already scaled per frequency.
    pub qualification_allowances: FrequencyTable<QualificationAllowances>,
}

/// Property tax rates for one location class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRates {
    /// Display label of the location class.
    pub label: String,
    /// Rate applied to residential ARV.
    pub residential: Decimal,
    /// Rate applied to commercial ARV.
    pub commercial: Decimal,
}

impl LocationRates {
    /// Returns the rate for a property class.
    pub fn rate(&self, property_type: PropertyType) -> Decimal {
        match property_type {
            PropertyType::Residential => self.residential,
            PropertyType::Commercial => self.commercial,
        }
    }
}

/// The location x property class rate matrix (`property.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTaxRates {
    /// Georgetown.
    pub georgetown: LocationRates,
    /// Other municipalities.
    pub municipality: LocationRates,
    /// Rural and NDC areas.
    pub rural: LocationRates,
}

impl PropertyTaxRates {
    /// Returns the rates for a location class.
    pub fn location(&self, location_type: LocationType) -> &LocationRates {
        match location_type {
            LocationType::Georgetown => &self.georgetown,
            LocationType::Municipality => &self.municipality,
            LocationType::Rural => &self.rural,
        }
    }

    /// Returns the rate for a location and property class.
    pub fn rate(&self, location_type: LocationType, property_type: PropertyType) -> Decimal {
        self.location(location_type).rate(property_type)
    }
}

/// A government position with its published monthly salary and allowances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPreset {
    /// Position title.
    pub title: String,
    /// Monthly basic salary.
    pub base_salary: Decimal,
    /// Taxable allowances by name.
    #[serde(default)]
    pub taxable_allowances: BTreeMap<String, Decimal>,
    /// Non-taxable allowances by name.
    #[serde(default)]
    pub non_taxable_allowances: BTreeMap<String, Decimal>,
}

impl PositionPreset {
    /// Sum of the taxable allowances.
    pub fn total_taxable_allowances(&self) -> Decimal {
        self.taxable_allowances.values().copied().sum()
    }

    /// Sum of the non-taxable allowances.
    pub fn total_non_taxable_allowances(&self) -> Decimal {
        self.non_taxable_allowances.values().copied().sum()
    }

    /// Returns a copy of `inputs` with this position's pay filled in.
    ///
    /// Preset amounts are monthly, so the frequency is switched to monthly.
    /// Every other field of `inputs` is kept.
    pub fn apply(&self, inputs: &TaxInputs) -> TaxInputs {
        TaxInputs {
            payment_frequency: PaymentFrequency::Monthly,
            basic_salary: self.base_salary,
            taxable_allowances: self.total_taxable_allowances(),
            non_taxable_allowances: self.total_non_taxable_allowances(),
            ..inputs.clone()
        }
    }
}

/// Root structure of `positions.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionsConfig {
    /// Map of preset id to position.
    #[serde(default)]
    pub positions: BTreeMap<String, PositionPreset>,
}

/// The complete tax configuration.
///
/// Built once at startup and shared read-only by every calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxConfig {
    metadata: ScheduleMetadata,
    rates: TaxRates,
    deadlines: Vec<TaxDeadline>,
    frequencies: FrequencyTable<FrequencyConfig>,
    insurance_premiums: InsurancePremiums,
    qualification_allowances: FrequencyTable<QualificationAllowances>,
    property_rates: PropertyTaxRates,
    positions: BTreeMap<String, PositionPreset>,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    ///
    /// Deadlines are sorted by calendar date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        metadata: ScheduleMetadata,
        rates: TaxRates,
        deadlines: Vec<TaxDeadline>,
        frequencies: FrequencyTable<FrequencyConfig>,
        insurance_premiums: InsurancePremiums,
        qualification_allowances: FrequencyTable<QualificationAllowances>,
        property_rates: PropertyTaxRates,
        positions: BTreeMap<String, PositionPreset>,
    ) -> Self {
        let mut deadlines = deadlines;
        deadlines.sort_by_key(|d| (d.month, d.day));
        Self {
            metadata,
            rates,
            deadlines,
            frequencies,
            insurance_premiums,
            qualification_allowances,
            property_rates,
            positions,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the frequency-independent rates.
    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }

    /// Returns the annual deadlines, sorted by calendar date.
    pub fn deadlines(&self) -> &[TaxDeadline] {
        &self.deadlines
    }

    /// Returns the whole frequency table.
    pub fn frequencies(&self) -> &FrequencyTable<FrequencyConfig> {
        &self.frequencies
    }

    /// Returns the statutory parameters for a frequency.
    pub fn frequency(&self, frequency: PaymentFrequency) -> &FrequencyConfig {
        self.frequencies.get(frequency)
    }

    /// Returns the fixed insurance premiums.
    pub fn insurance_premiums(&self) -> &InsurancePremiums {
        &self.insurance_premiums
    }

    /// Returns the qualification allowance table.
    pub fn qualification_allowances(&self) -> &FrequencyTable<QualificationAllowances> {
        &self.qualification_allowances
    }

    /// Returns the qualification allowance for a frequency and qualification.
    pub fn qualification_allowance(
        &self,
        frequency: PaymentFrequency,
        qualification: QualificationType,
    ) -> Decimal {
        self.qualification_allowances
            .get(frequency)
            .amount(qualification)
    }

    /// Returns the property tax rate matrix.
    pub fn property_rates(&self) -> &PropertyTaxRates {
        &self.property_rates
    }

    /// Returns all position presets.
    pub fn positions(&self) -> &BTreeMap<String, PositionPreset> {
        &self.positions
    }
}

/// Parses a frequency factor written as a decimal (`"12"`) or a ratio (`"1/21.67"`).
pub(crate) fn parse_factor(text: &str) -> Result<Decimal, String> {
    let parse = |part: &str| {
        Decimal::from_str(part.trim()).map_err(|e| format!("invalid factor '{}': {}", text, e))
    };

    match text.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = parse(numerator)?;
            let denominator = parse(denominator)?;
            if denominator.is_zero() {
                return Err(format!("invalid factor '{}': zero denominator", text));
            }
            Ok(numerator / denominator)
        }
        None => parse(text),
    }
}

fn deserialize_factor<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FactorRepr {
        Text(String),
        Value(Decimal),
    }

    match FactorRepr::deserialize(deserializer)? {
        FactorRepr::Text(text) => parse_factor(&text).map_err(serde::de::Error::custom),
        FactorRepr::Value(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_factor_accepts_ratio() {
        assert_eq!(parse_factor("1/4").unwrap(), dec!(0.25));
        assert_eq!(parse_factor(" 1 / 2.5 ").unwrap(), dec!(0.4));
    }

    #[test]
    fn test_parse_factor_accepts_plain_decimal() {
        assert_eq!(parse_factor("12").unwrap(), dec!(12));
    }

    #[test]
    fn test_parse_factor_rejects_zero_denominator() {
        assert!(parse_factor("1/0").is_err());
        assert!(parse_factor("abc").is_err());
    }

    #[test]
    fn test_frequency_config_deserializes_ratio_factor() {
        let yaml = r#"
label: Daily
factor: "1/21.67"
personal_allowance: 6460
tax_threshold: 8548
nis_rate: 0.056
nis_ceiling: 12923
child_allowance: 462
overtime_max: 2308
second_job_max: 2308
insurance_max: 2308
period_label: per day
periods_per_year: 260
"#;
        let config: FrequencyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.factor, Decimal::ONE / dec!(21.67));
        assert_eq!(config.periods_per_year, 260);
    }

    #[test]
    fn test_frequency_table_lookup_is_exhaustive() {
        let table = FrequencyTable {
            daily: 1,
            weekly: 2,
            fortnightly: 3,
            monthly: 4,
            yearly: 5,
        };
        let values: Vec<i32> = table.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(*table.get(PaymentFrequency::Monthly), 4);
    }

    #[test]
    fn test_custom_insurance_has_no_fixed_premium() {
        let premiums = InsurancePremiums {
            employee: dec!(1469),
            employee_one: dec!(3182),
            family: dec!(4970),
        };
        assert_eq!(premiums.monthly_premium(InsuranceType::Custom), None);
        assert_eq!(
            premiums.monthly_premium(InsuranceType::None),
            Some(Decimal::ZERO)
        );
        assert_eq!(
            premiums.monthly_premium(InsuranceType::EmployeeOne),
            Some(dec!(3182))
        );
    }

    #[test]
    fn test_position_preset_apply_sets_monthly_pay() {
        let preset = PositionPreset {
            title: "Staff Nurse".to_string(),
            base_salary: dec!(220000),
            taxable_allowances: BTreeMap::from([
                ("duty".to_string(), dec!(20000)),
                ("uniform".to_string(), dec!(5000)),
            ]),
            non_taxable_allowances: BTreeMap::from([
                ("travel".to_string(), dec!(8000)),
                ("station".to_string(), dec!(5000)),
            ]),
        };
        let inputs = TaxInputs {
            payment_frequency: PaymentFrequency::Weekly,
            child_count: 2,
            ..TaxInputs::default()
        };

        let applied = preset.apply(&inputs);

        assert_eq!(applied.payment_frequency, PaymentFrequency::Monthly);
        assert_eq!(applied.basic_salary, dec!(220000));
        assert_eq!(applied.taxable_allowances, dec!(25000));
        assert_eq!(applied.non_taxable_allowances, dec!(13000));
        assert_eq!(applied.child_count, 2);
    }
}
