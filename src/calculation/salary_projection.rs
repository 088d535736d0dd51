//! Salary increase projection.

use chrono::Month;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculation::calculate_tax;
use crate::config::TaxConfig;
use crate::models::{SalaryIncreaseProjection, SalaryProjection, TaxInputs, TaxResults};

/// Default projection horizon in months.
pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

const VACATION_INTERVAL_MONTHS: u32 = 12;

/// Projects take-home pay after a percentage increase to basic salary.
///
/// Computes the current position, the position with
/// `basic_salary * (1 + increase_percent / 100)`, and a month-by-month series
/// of the increased monthly figures. Every month carries the same net pay;
/// months that close a gratuity cycle (6, 12, ...) add the six-month
/// gratuity, and every twelfth month also adds the vacation allowance.
///
/// # Arguments
///
/// * `inputs` - The current salary profile
/// * `increase_percent` - The increase applied to basic salary, in percent
/// * `months` - Number of months to project (see [`DEFAULT_PROJECTION_MONTHS`])
/// * `config` - The tax schedule
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::project_salary_increase;
/// use gy_tax_engine::config::TaxConfig;
/// use gy_tax_engine::models::TaxInputs;
/// use rust_decimal_macros::dec;
///
/// let config = TaxConfig::guyana_2026();
/// let inputs = TaxInputs { basic_salary: dec!(200000), ..TaxInputs::default() };
///
/// let projection = project_salary_increase(&inputs, dec!(10), 12, &config);
/// assert_eq!(projection.projected.income.basic_salary, dec!(220000));
/// assert_eq!(projection.projections.len(), 12);
/// assert!(projection.projections[5].is_gratuity_month);
/// ```
pub fn project_salary_increase(
    inputs: &TaxInputs,
    increase_percent: Decimal,
    months: u32,
    config: &TaxConfig,
) -> SalaryIncreaseProjection {
    let current = calculate_tax(inputs, config);

    let increased = TaxInputs {
        basic_salary: inputs.basic_salary * (Decimal::ONE + increase_percent / dec!(100)),
        ..inputs.clone()
    };
    let projected = calculate_tax(&increased, config);

    let gratuity_interval = config.rates().gratuity_accrual_months;
    let projections = (1..=months)
        .map(|month| projected_month(month, &projected, gratuity_interval, increased.vacation_allowance))
        .collect();

    SalaryIncreaseProjection {
        increase_percent,
        net_pay_difference: projected.net_pay - current.net_pay,
        annual_total_difference: projected.annual.total - current.annual.total,
        current,
        projected,
        projections,
    }
}

fn projected_month(
    month: u32,
    projected: &TaxResults,
    gratuity_interval: u32,
    vacation_allowance: Decimal,
) -> SalaryProjection {
    let is_gratuity_month = month % gratuity_interval == 0;
    let gratuity = if is_gratuity_month {
        projected.gratuity.six_month_gratuity
    } else {
        Decimal::ZERO
    };
    let vacation = if month % VACATION_INTERVAL_MONTHS == 0 {
        vacation_allowance
    } else {
        Decimal::ZERO
    };

    SalaryProjection {
        month,
        label: month_label(month),
        gross_income: projected.monthly.gross_income,
        net_pay: projected.monthly.net_pay,
        nis: projected.monthly.nis,
        paye: projected.monthly.paye,
        is_gratuity_month,
        gratuity_amount: gratuity + vacation,
        total_pay: projected.monthly.net_pay + gratuity + vacation,
    }
}

/// Three-letter month name; month 1 is January and the names wrap after 12.
fn month_label(month: u32) -> String {
    let index = ((month + 11) % 12) as u8;
    Month::try_from(index + 1)
        .map(|m| m.name()[..3].to_string())
        .unwrap_or_default()
}
