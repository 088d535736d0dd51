//! The built-in 2026 Guyana schedule.
//!
//! These values mirror `config/gy2026/*.yaml` and let library callers compute
//! without touching the filesystem.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::models::DeadlineKind;

use super::types::{
    FrequencyConfig, FrequencyTable, InsurancePremiums, LocationRates, PositionPreset,
    PropertyTaxRates, QualificationAllowances, ScheduleMetadata, TaxConfig, TaxDeadline, TaxRates,
};

impl TaxConfig {
    /// Builds the 2026 Guyana tax schedule.
    ///
    /// # Example
    ///
    /// ```
    /// use gy_tax_engine::config::TaxConfig;
    /// use gy_tax_engine::models::PaymentFrequency;
    /// use rust_decimal_macros::dec;
    ///
    /// let config = TaxConfig::guyana_2026();
    /// assert_eq!(config.frequency(PaymentFrequency::Monthly).tax_threshold, dec!(260000));
    /// ```
    pub fn guyana_2026() -> Self {
        let metadata = ScheduleMetadata {
            jurisdiction: "GY".to_string(),
            name: "Guyana PAYE and NIS Schedule".to_string(),
            year: 2026,
            source_url: "https://www.gra.gov.gy".to_string(),
        };

        let rates = TaxRates {
            lower_rate: dec!(0.25),
            upper_rate: dec!(0.35),
            insurance_income_cap: dec!(0.10),
            gratuity_accrual_months: 6,
            nis_payment_due_day: 14,
        };

        let deadlines = vec![
            deadline(
                "Individual Income Tax Filing",
                "Annual income tax return deadline for individuals",
                4,
                30,
                DeadlineKind::GraFiling,
            ),
            deadline(
                "Company Tax Filing",
                "Annual tax return deadline for companies",
                3,
                31,
                DeadlineKind::GraFiling,
            ),
            deadline(
                "Property Tax Due",
                "Annual property tax payment deadline",
                6,
                30,
                DeadlineKind::PropertyTax,
            ),
        ];

        let frequencies = FrequencyTable {
            daily: frequency(
                "Daily",
                Decimal::ONE / dec!(21.67),
                [dec!(6460), dec!(8548), dec!(12923), dec!(462), dec!(2308)],
                "per day",
                260,
            ),
            weekly: frequency(
                "Weekly",
                Decimal::ONE / dec!(4.33),
                [dec!(32333), dec!(60000), dec!(64615), dec!(2308), dec!(11538)],
                "per week",
                52,
            ),
            fortnightly: frequency(
                "Fortnightly",
                Decimal::ONE / dec!(2.17),
                [dec!(64516), dec!(120000), dec!(129231), dec!(4615), dec!(23077)],
                "per fortnight",
                26,
            ),
            monthly: frequency(
                "Monthly",
                Decimal::ONE,
                [dec!(140000), dec!(260000), dec!(280000), dec!(10000), dec!(50000)],
                "per month",
                12,
            ),
            yearly: frequency(
                "Yearly",
                dec!(12),
                [dec!(1680000), dec!(3120000), dec!(3360000), dec!(120000), dec!(600000)],
                "per year",
                1,
            ),
        };

        let insurance_premiums = InsurancePremiums {
            employee: dec!(1469),
            employee_one: dec!(3182),
            family: dec!(4970),
        };

        let qualification_allowances = FrequencyTable {
            daily: qualifications(dec!(692), dec!(1015), dec!(1477)),
            weekly: qualifications(dec!(3462), dec!(5077), dec!(7385)),
            fortnightly: qualifications(dec!(6923), dec!(10154), dec!(14769)),
            monthly: qualifications(dec!(15000), dec!(22000), dec!(32000)),
            yearly: qualifications(dec!(180000), dec!(264000), dec!(384000)),
        };

        let property_rates = PropertyTaxRates {
            georgetown: location("Georgetown", dec!(0.005), dec!(0.0075)),
            municipality: location("Other Municipalities", dec!(0.004), dec!(0.006)),
            rural: location("Rural / NDC Areas", dec!(0.003), dec!(0.005)),
        };

        TaxConfig::new(
            metadata,
            rates,
            deadlines,
            frequencies,
            insurance_premiums,
            qualification_allowances,
            property_rates,
            positions(),
        )
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self::guyana_2026()
    }
}

fn deadline(name: &str, description: &str, month: u32, day: u32, kind: DeadlineKind) -> TaxDeadline {
    TaxDeadline {
        name: name.to_string(),
        description: description.to_string(),
        month,
        day,
        kind,
    }
}

/// `amounts` is personal allowance, tax threshold, NIS ceiling, child
/// allowance and the shared overtime/second-job/insurance cap.
fn frequency(
    label: &str,
    factor: Decimal,
    amounts: [Decimal; 5],
    period_label: &str,
    periods_per_year: u32,
) -> FrequencyConfig {
    let [personal_allowance, tax_threshold, nis_ceiling, child_allowance, cap] = amounts;
    FrequencyConfig {
        label: label.to_string(),
        factor,
        personal_allowance,
        tax_threshold,
        nis_rate: dec!(0.056),
        nis_ceiling,
        child_allowance,
        overtime_max: cap,
        second_job_max: cap,
        insurance_max: cap,
        period_label: period_label.to_string(),
        periods_per_year,
    }
}

fn qualifications(acca: Decimal, masters: Decimal, phd: Decimal) -> QualificationAllowances {
    QualificationAllowances { acca, masters, phd }
}

fn location(label: &str, residential: Decimal, commercial: Decimal) -> LocationRates {
    LocationRates {
        label: label.to_string(),
        residential,
        commercial,
    }
}

fn position(
    title: &str,
    base_salary: Decimal,
    taxable: &[(&str, Decimal)],
    non_taxable: &[(&str, Decimal)],
) -> PositionPreset {
    let to_map = |items: &[(&str, Decimal)]| {
        items
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect::<BTreeMap<_, _>>()
    };
    PositionPreset {
        title: title.to_string(),
        base_salary,
        taxable_allowances: to_map(taxable),
        non_taxable_allowances: to_map(non_taxable),
    }
}

fn positions() -> BTreeMap<String, PositionPreset> {
    let zero = Decimal::ZERO;
    [
        (
            "it-officer-2",
            position(
                "IT Officer II",
                dec!(247451),
                &[("duty", dec!(15000)), ("uniform", dec!(5000))],
                &[("travel", zero), ("telecom", zero)],
            ),
        ),
        (
            "it-officer-3",
            position(
                "IT Officer III",
                dec!(266000),
                &[("duty", dec!(15000)), ("uniform", dec!(5000))],
                &[("travel", zero), ("telecom", zero)],
            ),
        ),
        (
            "ict-tech-1",
            position(
                "ICT Technician I",
                dec!(222804),
                &[("duty", zero), ("uniform", dec!(5000))],
                &[("travel", dec!(5000)), ("telecom", dec!(5000))],
            ),
        ),
        (
            "ict-tech-2",
            position(
                "ICT Technician II",
                dec!(176564),
                &[("duty", dec!(12000)), ("uniform", dec!(5000))],
                &[("travel", zero), ("telecom", zero)],
            ),
        ),
        (
            "ict-tech-3",
            position(
                "ICT Technician III",
                dec!(148051),
                &[("duty", dec!(10000)), ("uniform", dec!(5000))],
                &[("travel", zero), ("telecom", zero)],
            ),
        ),
        (
            "assist-ict-eng-3",
            position(
                "Assistant ICT Engineer III",
                dec!(308540),
                &[("duty", zero), ("uniform", dec!(5000))],
                &[("travel", dec!(5000)), ("telecom", dec!(5000))],
            ),
        ),
        (
            "ict-eng-3",
            position(
                "ICT Engineer III",
                dec!(393301),
                &[("uniform", dec!(5000))],
                &[("travel", dec!(10000)), ("telecom", dec!(5000))],
            ),
        ),
        (
            "admin-officer-2",
            position(
                "Administrative Officer II",
                dec!(180000),
                &[("duty", dec!(10000)), ("uniform", dec!(3000))],
                &[("travel", zero), ("telecom", zero)],
            ),
        ),
        (
            "accounts-clerk-1",
            position(
                "Accounts Clerk I",
                dec!(150000),
                &[("duty", dec!(8000)), ("uniform", dec!(3000))],
                &[("travel", zero), ("telecom", zero)],
            ),
        ),
        (
            "teacher-primary",
            position(
                "Primary School Teacher",
                dec!(185000),
                &[("duty", zero), ("uniform", zero)],
                &[("travel", dec!(15000)), ("station", dec!(5000))],
            ),
        ),
        (
            "nurse-staff",
            position(
                "Staff Nurse",
                dec!(220000),
                &[("duty", dec!(20000)), ("uniform", dec!(5000))],
                &[("travel", dec!(8000)), ("station", dec!(5000))],
            ),
        ),
    ]
    .into_iter()
    .map(|(id, preset)| (id.to_string(), preset))
    .collect()
}
