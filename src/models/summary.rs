//! Tax summary and NIS pension models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A previously stored calculation counted towards year-to-date totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCalculation {
    /// Calendar year the calculation belongs to.
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// NIS contribution recorded.
    pub nis_contribution: Decimal,
    /// PAYE recorded.
    pub income_tax: Decimal,
}

/// How year-to-date totals were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearToDateBasis {
    /// Summed from recorded calculations.
    Recorded,
    /// Estimated as the monthly figure times the month number.
    Estimated,
}

/// Rounded tax position for display.
///
/// All money is rounded to whole dollars; the effective rate to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Monthly NIS.
    pub monthly_nis: Decimal,
    /// Monthly PAYE.
    pub monthly_paye: Decimal,
    /// Monthly net pay.
    pub monthly_net_pay: Decimal,
    /// Monthly gross income.
    pub monthly_gross_income: Decimal,
    /// NIS paid so far this year.
    pub ytd_nis: Decimal,
    /// PAYE paid so far this year.
    pub ytd_paye: Decimal,
    /// NIS plus PAYE so far this year.
    pub ytd_total_tax: Decimal,
    /// Source of the year-to-date figures.
    pub ytd_basis: YearToDateBasis,
    /// Effective tax rate, percent.
    pub effective_tax_rate: Decimal,
    /// Annual NIS.
    pub annual_nis: Decimal,
    /// Annual PAYE.
    pub annual_paye: Decimal,
    /// Annual net pay.
    pub annual_net_pay: Decimal,
    /// Annual net pay plus gratuity and vacation allowance.
    pub annual_total: Decimal,
}

/// Progress towards NIS old-age pension eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisPensionProgress {
    /// Years of contributions.
    pub years_worked: Decimal,
    /// Weekly contributions made.
    pub contributions: Decimal,
    /// Weekly contributions required.
    pub required_contributions: u32,
    /// Percent of the requirement met, at most 100.
    pub percent_complete: Decimal,
    /// Weekly contributions still needed.
    pub weeks_remaining: Decimal,
    /// Years still needed, one decimal place.
    pub years_remaining: Decimal,
}

impl NisPensionProgress {
    /// Returns true once the contribution requirement is met.
    pub fn is_eligible(&self) -> bool {
        self.weeks_remaining.is_zero()
    }
}
