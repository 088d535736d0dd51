//! Tax calculation result models.
//!
//! This module contains the [`TaxResults`] type and the groups of figures it
//! is made of. Figures are in the input's pay frequency unless the group
//! says otherwise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FrequencyConfig;

use super::{PaymentFrequency, QualificationType};

/// Income components, echoed from the inputs with the derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// Basic salary per period.
    pub basic_salary: Decimal,
    /// Basic salary converted to a monthly amount.
    pub monthly_basic_salary: Decimal,
    /// Taxable allowances per period.
    pub taxable_allowances: Decimal,
    /// Non-taxable allowances per period, including the qualification allowance.
    pub non_taxable_allowances: Decimal,
    /// The qualification held.
    pub qualification_type: QualificationType,
    /// Qualification allowance per period.
    pub qualification_allowance: Decimal,
    /// Annual vacation allowance.
    pub vacation_allowance: Decimal,
    /// Overtime income per period.
    pub overtime_income: Decimal,
    /// Second-job income per period.
    pub second_job_income: Decimal,
    /// Sum of every income component.
    pub gross_income: Decimal,
    /// Gross income less the non-taxable allowances, overtime and second-job allowances.
    pub taxable_calculation_base: Decimal,
}

/// Allowances and deductions applied against income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// The greater of the statutory minimum and a third of gross income.
    pub personal_allowance: Decimal,
    /// NIS contribution.
    pub nis_contribution: Decimal,
    /// Number of qualifying children.
    pub child_count: u32,
    /// Child allowance.
    pub child_allowance: Decimal,
    /// Non-taxable portion of overtime.
    pub overtime_allowance: Decimal,
    /// Non-taxable portion of second-job income.
    pub second_job_allowance: Decimal,
    /// Insurance premium for the period before capping.
    pub insurance_premium: Decimal,
    /// Insurance premium actually deducted.
    pub insurance_deduction: Decimal,
    /// Loan repayment.
    pub loan_payment: Decimal,
    /// Credit union deduction.
    pub credit_union_deduction: Decimal,
}

/// Per-period figures converted to monthly amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyEquivalents {
    /// Monthly gross income.
    pub gross_income: Decimal,
    /// Monthly net pay.
    pub net_pay: Decimal,
    /// Monthly NIS contribution.
    pub nis: Decimal,
    /// Monthly PAYE.
    pub paye: Decimal,
}

/// Gratuity accrual and the package paid in months 6 and 12.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityPackage {
    /// Gratuity as a percentage of basic salary.
    pub rate: Decimal,
    /// Gratuity accrued each month.
    pub monthly_accrual: Decimal,
    /// Gratuity paid at the end of each accrual cycle.
    pub six_month_gratuity: Decimal,
    /// Monthly net pay plus gratuity.
    pub month_six_total: Decimal,
    /// Month six total plus the vacation allowance.
    pub month_twelve_total: Decimal,
}

/// Figures annualised over the frequency's periods per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualTotals {
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Annual NIS.
    pub nis: Decimal,
    /// Annual PAYE.
    pub paye: Decimal,
    /// Annual net pay.
    pub net_pay: Decimal,
    /// Gratuity paid across both accrual cycles.
    pub gratuity_total: Decimal,
    /// Net pay plus gratuity plus vacation allowance.
    pub total: Decimal,
}

/// The complete result of a tax calculation.
///
/// Produced by [`calculate_tax`](crate::calculation::calculate_tax); never
/// constructed independently.
///
/// Invariant: `net_pay = gross_income - nis_contribution - income_tax -
/// loan_payment - credit_union_deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResults {
    /// The frequency the per-period figures are expressed in.
    pub payment_frequency: PaymentFrequency,
    /// The statutory parameters used.
    pub frequency_config: FrequencyConfig,
    /// Income components.
    pub income: IncomeBreakdown,
    /// Allowances and deductions.
    pub deductions: StatutoryDeductions,
    /// Chargeable income, never negative.
    pub taxable_income: Decimal,
    /// PAYE for the period.
    pub income_tax: Decimal,
    /// Take-home pay for the period.
    pub net_pay: Decimal,
    /// NIS, PAYE, loan and credit union deductions combined.
    pub total_deductions: Decimal,
    /// Monthly equivalents.
    pub monthly: MonthlyEquivalents,
    /// Gratuity package.
    pub gratuity: GratuityPackage,
    /// Annual rollups.
    pub annual: AnnualTotals,
    /// (Annual PAYE + annual NIS) / annual gross income, as a percentage.
    pub effective_tax_rate: Decimal,
}
