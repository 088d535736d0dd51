//! PAYE, NIS and net pay calculation.
//!
//! All figures are computed in the input's own pay frequency and then
//! converted to monthly and annual equivalents.
//!
//! ## Order of operations
//!
//! 1. Qualification allowance is added to the non-taxable allowances.
//! 2. Insurance premium is resolved (custom, or the plan's monthly premium
//!    converted to the pay frequency).
//! 3. Gross income is summed, unclamped.
//! 4. Each deduction is computed independently from gross income.
//! 5. Chargeable income is clamped at zero and taxed in two brackets.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculation::{convert_from_monthly, convert_to_monthly};
use crate::config::{FrequencyConfig, TaxConfig, TaxRates};
use crate::models::{
    AnnualTotals, GratuityPackage, IncomeBreakdown, MonthlyEquivalents, StatutoryDeductions,
    TaxInputs, TaxResults,
};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Calculates the full tax position for one salary profile.
///
/// This function never fails and never validates. Call
/// [`TaxInputs::validate`] first when the inputs come from outside the
/// process; negative amounts produce meaningless but finite results.
///
/// # Arguments
///
/// * `inputs` - The salary profile, denominated in `inputs.payment_frequency`
/// * `config` - The tax schedule supplying rates, thresholds and allowances
///
/// # Returns
///
/// A [`TaxResults`] in which
/// `net_pay = gross_income - nis_contribution - income_tax - loan_payment - credit_union_deduction`
/// and `taxable_income >= 0`.
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::calculate_tax;
/// use gy_tax_engine::config::TaxConfig;
/// use gy_tax_engine::models::TaxInputs;
/// use rust_decimal_macros::dec;
///
/// let config = TaxConfig::guyana_2026();
/// let inputs = TaxInputs {
///     basic_salary: dec!(200000),
///     ..TaxInputs::default()
/// };
///
/// let results = calculate_tax(&inputs, &config);
/// assert_eq!(results.deductions.nis_contribution, dec!(11200));
/// assert_eq!(results.taxable_income, dec!(48800));
/// assert_eq!(results.income_tax, dec!(12200));
/// assert_eq!(results.net_pay, dec!(176600));
/// ```
pub fn calculate_tax(inputs: &TaxInputs, config: &TaxConfig) -> TaxResults {
    let frequency = inputs.payment_frequency;
    let frequency_config = config.frequency(frequency);
    let rates = config.rates();

    let qualification_allowance = config.qualification_allowance(frequency, inputs.qualification_type);
    let non_taxable_allowances = inputs.non_taxable_allowances + qualification_allowance;

    let insurance_premium = match config.insurance_premiums().monthly_premium(inputs.insurance_type) {
        Some(monthly) => convert_from_monthly(monthly, frequency, config),
        None => inputs.custom_insurance_premium,
    };

    let gross_income = inputs.basic_salary
        + inputs.taxable_allowances
        + non_taxable_allowances
        + inputs.overtime_income
        + inputs.second_job_income;

    let deductions = statutory_deductions(inputs, gross_income, insurance_premium, frequency_config, rates);

    let taxable_calculation_base = gross_income
        - non_taxable_allowances
        - deductions.overtime_allowance
        - deductions.second_job_allowance;

    let taxable_income = (taxable_calculation_base
        - deductions.personal_allowance
        - deductions.nis_contribution
        - deductions.child_allowance
        - deductions.insurance_deduction)
        .max(Decimal::ZERO);

    let income_tax = paye(taxable_income, frequency_config.tax_threshold, rates);

    let nis = deductions.nis_contribution;
    let total_deductions = nis + income_tax + inputs.loan_payment + inputs.credit_union_deduction;
    let net_pay = gross_income - nis - income_tax - inputs.loan_payment - inputs.credit_union_deduction;

    let monthly = MonthlyEquivalents {
        gross_income: convert_to_monthly(gross_income, frequency, config),
        net_pay: convert_to_monthly(net_pay, frequency, config),
        nis: convert_to_monthly(nis, frequency, config),
        paye: convert_to_monthly(income_tax, frequency, config),
    };

    let monthly_basic_salary = convert_to_monthly(inputs.basic_salary, frequency, config);
    let gratuity = gratuity_package(inputs, monthly_basic_salary, monthly.net_pay, rates);

    let periods = Decimal::from(frequency_config.periods_per_year);
    let cycles_per_year = MONTHS_PER_YEAR / Decimal::from(rates.gratuity_accrual_months);
    let gratuity_total = gratuity.six_month_gratuity * cycles_per_year;
    let annual_net_pay = net_pay * periods;
    let annual = AnnualTotals {
        gross_income: gross_income * periods,
        nis: nis * periods,
        paye: income_tax * periods,
        net_pay: annual_net_pay,
        gratuity_total,
        total: annual_net_pay + gratuity_total + inputs.vacation_allowance,
    };

    let effective_tax_rate = if annual.gross_income > Decimal::ZERO {
        (annual.paye + annual.nis) / annual.gross_income * dec!(100)
    } else {
        Decimal::ZERO
    };

    TaxResults {
        payment_frequency: frequency,
        frequency_config: frequency_config.clone(),
        income: IncomeBreakdown {
            basic_salary: inputs.basic_salary,
            monthly_basic_salary,
            taxable_allowances: inputs.taxable_allowances,
            non_taxable_allowances,
            qualification_type: inputs.qualification_type,
            qualification_allowance,
            vacation_allowance: inputs.vacation_allowance,
            overtime_income: inputs.overtime_income,
            second_job_income: inputs.second_job_income,
            gross_income,
            taxable_calculation_base,
        },
        deductions,
        taxable_income,
        income_tax,
        net_pay,
        total_deductions,
        monthly,
        gratuity,
        annual,
        effective_tax_rate,
    }
}

fn statutory_deductions(
    inputs: &TaxInputs,
    gross_income: Decimal,
    insurance_premium: Decimal,
    frequency_config: &FrequencyConfig,
    rates: &TaxRates,
) -> StatutoryDeductions {
    // Rate applies to the lesser of income and ceiling.
    let nis_contribution = (gross_income * frequency_config.nis_rate)
        .min(frequency_config.nis_ceiling * frequency_config.nis_rate);

    let insurance_deduction = insurance_premium
        .min(gross_income * rates.insurance_income_cap)
        .min(frequency_config.insurance_max);

    StatutoryDeductions {
        personal_allowance: frequency_config.personal_allowance.max(gross_income / dec!(3)),
        nis_contribution,
        child_count: inputs.child_count,
        child_allowance: Decimal::from(inputs.child_count) * frequency_config.child_allowance,
        overtime_allowance: inputs.overtime_income.min(frequency_config.overtime_max),
        second_job_allowance: inputs.second_job_income.min(frequency_config.second_job_max),
        insurance_premium,
        insurance_deduction,
        loan_payment: inputs.loan_payment,
        credit_union_deduction: inputs.credit_union_deduction,
    }
}

/// Two-bracket marginal PAYE on chargeable income.
fn paye(taxable_income: Decimal, threshold: Decimal, rates: &TaxRates) -> Decimal {
    if taxable_income <= threshold {
        taxable_income * rates.lower_rate
    } else {
        threshold * rates.lower_rate + (taxable_income - threshold) * rates.upper_rate
    }
}

fn gratuity_package(
    inputs: &TaxInputs,
    monthly_basic_salary: Decimal,
    monthly_net_pay: Decimal,
    rates: &TaxRates,
) -> GratuityPackage {
    let monthly_accrual = monthly_basic_salary * (inputs.gratuity_rate / dec!(100));
    let six_month_gratuity = monthly_accrual * Decimal::from(rates.gratuity_accrual_months);
    let month_six_total = monthly_net_pay + six_month_gratuity;

    GratuityPackage {
        rate: inputs.gratuity_rate,
        monthly_accrual,
        six_month_gratuity,
        month_six_total,
        month_twelve_total: month_six_total + inputs.vacation_allowance,
    }
}
