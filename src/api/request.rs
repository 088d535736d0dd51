//! Request types for the tax engine API.
//!
//! Amounts may be sent as JSON numbers or strings. Enumerated fields are
//! strict, except `payment_frequency`, which falls back to monthly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    InsuranceType, LoanState, LocationType, MAX_AMOUNT, PaymentFrequency, PropertyType,
    QualificationType, RecordedCalculation, TaxInputs,
};

/// Largest salary increase a projection accepts, in percent.
const MAX_INCREASE_PERCENT: Decimal = dec!(1000);

/// Longest NIS contribution history accepted, in years.
const MAX_YEARS_WORKED: Decimal = dec!(100);

/// A salary profile as submitted by a client.
///
/// When `position_id` names a government position preset, its basic salary
/// and allowance totals replace the submitted ones and the profile is
/// calculated as monthly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxInputsRequest {
    /// Frequency key; unknown keys are calculated as monthly.
    #[serde(default = "default_frequency")]
    pub payment_frequency: String,
    /// Optional position preset id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,
    /// Basic salary per period.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Taxable allowances per period.
    #[serde(default)]
    pub taxable_allowances: Decimal,
    /// Non-taxable allowances per period.
    #[serde(default)]
    pub non_taxable_allowances: Decimal,
    /// Annual vacation allowance.
    #[serde(default)]
    pub vacation_allowance: Decimal,
    /// Qualification held.
    #[serde(default)]
    pub qualification_type: QualificationType,
    /// Overtime income per period.
    #[serde(default)]
    pub overtime_income: Decimal,
    /// Second-job income per period.
    #[serde(default)]
    pub second_job_income: Decimal,
    /// Qualifying children.
    #[serde(default)]
    pub child_count: u32,
    /// Loan repayment per period.
    #[serde(default)]
    pub loan_payment: Decimal,
    /// Credit union deduction per period.
    #[serde(default)]
    pub credit_union_deduction: Decimal,
    /// Insurance plan.
    #[serde(default)]
    pub insurance_type: InsuranceType,
    /// Premium per period for a custom plan.
    #[serde(default)]
    pub custom_insurance_premium: Decimal,
    /// Gratuity rate in percent; defaults to the standard rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gratuity_rate: Option<Decimal>,
    /// Gratuity accrual period in months; defaults to the schedule's period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gratuity_period: Option<u32>,
}

fn default_frequency() -> String {
    PaymentFrequency::Monthly.key().to_string()
}

impl TaxInputsRequest {
    /// Resolves the request into validated [`TaxInputs`].
    ///
    /// # Returns
    ///
    /// Returns `PositionNotFound` for an unknown `position_id`, or
    /// `InvalidInput` if the resolved inputs fail validation.
    pub fn into_inputs(self, loader: &ConfigLoader) -> EngineResult<TaxInputs> {
        let defaults = TaxInputs::default();
        let mut inputs = TaxInputs {
            payment_frequency: PaymentFrequency::parse_or_monthly(&self.payment_frequency),
            basic_salary: self.basic_salary,
            taxable_allowances: self.taxable_allowances,
            non_taxable_allowances: self.non_taxable_allowances,
            vacation_allowance: self.vacation_allowance,
            qualification_type: self.qualification_type,
            overtime_income: self.overtime_income,
            second_job_income: self.second_job_income,
            child_count: self.child_count,
            loan_payment: self.loan_payment,
            credit_union_deduction: self.credit_union_deduction,
            insurance_type: self.insurance_type,
            custom_insurance_premium: self.custom_insurance_premium,
            gratuity_rate: self.gratuity_rate.unwrap_or(defaults.gratuity_rate),
            gratuity_period: self
                .gratuity_period
                .unwrap_or(loader.config().rates().gratuity_accrual_months),
        };

        if let Some(position_id) = &self.position_id {
            inputs = loader.get_position(position_id)?.apply(&inputs);
        }

        inputs.validate(loader.config())?;
        Ok(inputs)
    }
}

/// Request body for `POST /tax/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCalculationRequest {
    /// The salary profile.
    pub profile: TaxInputsRequest,
}

/// Request body for `POST /tax/project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryProjectionRequest {
    /// The current salary profile.
    pub profile: TaxInputsRequest,
    /// Increase applied to basic salary, in percent.
    pub increase_percent: Decimal,
    /// Months to project; defaults to 12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<u32>,
}

impl SalaryProjectionRequest {
    /// Checks that `increase_percent` lies between -100 and 1000.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_range(
            "increase_percent",
            self.increase_percent,
            dec!(-100),
            MAX_INCREASE_PERCENT,
        )
    }
}

/// Request body for `POST /tax/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSummaryRequest {
    /// The salary profile.
    pub profile: TaxInputsRequest,
    /// Summary date; defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    /// Calculations already recorded, used for year-to-date totals.
    #[serde(default)]
    pub records: Vec<RecordedCalculation>,
    /// Years of NIS contributions, for pension progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_worked: Option<Decimal>,
}

impl TaxSummaryRequest {
    /// Checks recorded amounts against [`MAX_AMOUNT`] and `years_worked`
    /// against 0 to 100.
    pub fn validate(&self) -> EngineResult<()> {
        for record in &self.records {
            ensure_range(
                "records.nis_contribution",
                record.nis_contribution,
                Decimal::ZERO,
                MAX_AMOUNT,
            )?;
            ensure_range(
                "records.income_tax",
                record.income_tax,
                Decimal::ZERO,
                MAX_AMOUNT,
            )?;
        }
        if let Some(years_worked) = self.years_worked {
            ensure_range("years_worked", years_worked, Decimal::ZERO, MAX_YEARS_WORKED)?;
        }
        Ok(())
    }
}

/// Request body for `POST /tax/property`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyTaxRequest {
    /// Assessed annual rental value.
    pub annual_rental_value: Decimal,
    /// Location class.
    pub location_type: LocationType,
    /// Property class.
    pub property_type: PropertyType,
}

impl PropertyTaxRequest {
    /// Checks that the ARV lies between 0 and [`MAX_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        ensure_range(
            "annual_rental_value",
            self.annual_rental_value,
            Decimal::ZERO,
            MAX_AMOUNT,
        )
    }
}

/// Request body for `POST /loans/payoff`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffRequest {
    /// The loan.
    pub loan: LoanState,
    /// Date the payoff date is counted from; defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    /// Simulation horizon in months; defaults to 120.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_months: Option<u32>,
}

/// Request body for `POST /loans/extra-payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentsRequest {
    /// The loan.
    pub loan: LoanState,
    /// Extra amount paid on each extra month.
    pub extra_amount: Decimal,
    /// Months between extra payments.
    pub every_months: u32,
    /// First plan month carrying an extra payment.
    pub start_month: u32,
    /// Simulation horizon in months; defaults to 120.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_months: Option<u32>,
    /// Date the payment plan starts from; defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    /// Length of the payment plan; defaults to 6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_months: Option<u32>,
}

fn ensure_range(field: &str, value: Decimal, min: Decimal, max: Decimal) -> EngineResult<()> {
    if value < min || value > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}
