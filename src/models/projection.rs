//! Salary increase projection models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxResults;

/// One simulated month after a salary increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryProjection {
    /// Month number, starting at 1.
    pub month: u32,
    /// Three-letter month name (month 1 is January).
    pub label: String,
    /// Monthly gross income.
    pub gross_income: Decimal,
    /// Monthly net pay.
    pub net_pay: Decimal,
    /// Monthly NIS.
    pub nis: Decimal,
    /// Monthly PAYE.
    pub paye: Decimal,
    /// Whether a gratuity cycle closes in this month.
    pub is_gratuity_month: bool,
    /// Gratuity plus any vacation allowance paid this month.
    pub gratuity_amount: Decimal,
    /// Net pay plus `gratuity_amount`.
    pub total_pay: Decimal,
}

/// Before/after comparison of a salary increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryIncreaseProjection {
    /// The percentage applied to basic salary.
    pub increase_percent: Decimal,
    /// Results for the current salary.
    pub current: TaxResults,
    /// Results after the increase.
    pub projected: TaxResults,
    /// Change in per-period net pay.
    pub net_pay_difference: Decimal,
    /// Change in the annual grand total.
    pub annual_total_difference: Decimal,
    /// Month-by-month take-home after the increase.
    pub projections: Vec<SalaryProjection>,
}
