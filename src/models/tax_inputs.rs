//! Salary profile inputs for the tax calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::TaxConfig;
use crate::error::{EngineError, EngineResult};

use super::PaymentFrequency;

/// Largest amount any single monetary input may carry.
///
/// Keeps every derived figure, including daily amounts annualised over 260
/// periods and balances compounded over the longest simulation, inside
/// `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000);

/// Professional qualification attracting a non-taxable allowance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationType {
    /// No qualification allowance.
    #[default]
    None,
    /// ACCA.
    Acca,
    /// Master's degree.
    Masters,
    /// Doctorate.
    Phd,
}

/// Health insurance plan whose premium is deductible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsuranceType {
    /// No insurance.
    #[default]
    None,
    /// Employee only.
    Employee,
    /// Employee plus one dependant.
    EmployeeOne,
    /// Family plan.
    Family,
    /// A premium supplied by the caller in `custom_insurance_premium`.
    Custom,
}

/// One salary profile, with every amount in the `payment_frequency` period.
///
/// `vacation_allowance` is an annual lump sum and is not frequency-scaled.
///
/// # Example
///
/// ```
/// use gy_tax_engine::models::{PaymentFrequency, TaxInputs};
/// use rust_decimal_macros::dec;
///
/// let inputs = TaxInputs {
///     payment_frequency: PaymentFrequency::Monthly,
///     basic_salary: dec!(200000),
///     ..TaxInputs::default()
/// };
/// assert_eq!(inputs.gratuity_rate, dec!(22.5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxInputs {
    /// The pay frequency the amounts are expressed in.
    #[serde(default)]
    pub payment_frequency: PaymentFrequency,
    /// Basic salary per period.
    pub basic_salary: Decimal,
    /// Taxable allowances per period.
    #[serde(default)]
    pub taxable_allowances: Decimal,
    /// Non-taxable allowances per period, excluding the qualification allowance.
    #[serde(default)]
    pub non_taxable_allowances: Decimal,
    /// Annual vacation allowance, paid once in month 12.
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
    /// Number of qualifying children.
    #[serde(default)]
    pub child_count: u32,
    /// Loan repayment deducted from pay per period.
    #[serde(default)]
    pub loan_payment: Decimal,
    /// Credit union deduction per period.
    #[serde(default)]
    pub credit_union_deduction: Decimal,
    /// Insurance plan.
    #[serde(default)]
    pub insurance_type: InsuranceType,
    /// Premium per period when `insurance_type` is `Custom`.
    #[serde(default)]
    pub custom_insurance_premium: Decimal,
    /// Gratuity as a percentage of basic salary.
    #[serde(default = "default_gratuity_rate")]
    pub gratuity_rate: Decimal,
    /// Gratuity accrual period in months.
    #[serde(default = "default_gratuity_period")]
    pub gratuity_period: u32,
}

fn default_gratuity_rate() -> Decimal {
    dec!(22.5)
}

fn default_gratuity_period() -> u32 {
    6
}

impl Default for TaxInputs {
    fn default() -> Self {
        Self {
            payment_frequency: PaymentFrequency::Monthly,
            basic_salary: Decimal::ZERO,
            taxable_allowances: Decimal::ZERO,
            non_taxable_allowances: Decimal::ZERO,
            vacation_allowance: Decimal::ZERO,
            qualification_type: QualificationType::None,
            overtime_income: Decimal::ZERO,
            second_job_income: Decimal::ZERO,
            child_count: 0,
            loan_payment: Decimal::ZERO,
            credit_union_deduction: Decimal::ZERO,
            insurance_type: InsuranceType::None,
            custom_insurance_premium: Decimal::ZERO,
            gratuity_rate: default_gratuity_rate(),
            gratuity_period: default_gratuity_period(),
        }
    }
}

impl TaxInputs {
    /// Checks the inputs before they are handed to the calculation.
    ///
    /// The calculation itself trusts its inputs; callers at a trust boundary
    /// run this first.
    ///
    /// # Returns
    ///
    /// Returns `InvalidInput` if:
    /// - Any monetary field is negative or above [`MAX_AMOUNT`]
    /// - `gratuity_rate` is above 100
    /// - `gratuity_period` differs from the schedule's accrual period
    pub fn validate(&self, config: &TaxConfig) -> EngineResult<()> {
        let monetary = [
            ("basic_salary", self.basic_salary),
            ("taxable_allowances", self.taxable_allowances),
            ("non_taxable_allowances", self.non_taxable_allowances),
            ("vacation_allowance", self.vacation_allowance),
            ("overtime_income", self.overtime_income),
            ("second_job_income", self.second_job_income),
            ("loan_payment", self.loan_payment),
            ("credit_union_deduction", self.credit_union_deduction),
            ("custom_insurance_premium", self.custom_insurance_premium),
            ("gratuity_rate", self.gratuity_rate),
        ];

        if let Some((field, _)) = monetary.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if let Some((field, _)) = monetary.iter().find(|(_, value)| *value > MAX_AMOUNT) {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not exceed {}", MAX_AMOUNT),
            });
        }

        if self.gratuity_rate > dec!(100) {
            return Err(EngineError::InvalidInput {
                field: "gratuity_rate".to_string(),
                message: "must be a percentage between 0 and 100".to_string(),
            });
        }

        let accrual_months = config.rates().gratuity_accrual_months;
        if self.gratuity_period != accrual_months {
            return Err(EngineError::InvalidInput {
                field: "gratuity_period".to_string(),
                message: format!("must be {} months", accrual_months),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TaxConfig {
        TaxConfig::guyana_2026()
    }

    #[test]
    fn test_default_inputs_are_valid() {
        assert!(TaxInputs::default().validate(&config()).is_ok());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let inputs = TaxInputs {
            basic_salary: dec!(-1),
            ..TaxInputs::default()
        };
        match inputs.validate(&config()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "basic_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_loan_payment_is_rejected() {
        let inputs = TaxInputs {
            basic_salary: dec!(100000),
            loan_payment: dec!(-500),
            ..TaxInputs::default()
        };
        match inputs.validate(&config()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "loan_payment"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_above_maximum_is_rejected() {
        let inputs = TaxInputs {
            payment_frequency: PaymentFrequency::Daily,
            basic_salary: dec!(1000000000000000000000000000),
            ..TaxInputs::default()
        };
        match inputs.validate(&config()) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "basic_salary");
                assert!(message.contains("1000000000000"), "got: {}", message);
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_every_field_at_maximum_calculates_daily() {
        let inputs = TaxInputs {
            payment_frequency: PaymentFrequency::Daily,
            basic_salary: MAX_AMOUNT,
            taxable_allowances: MAX_AMOUNT,
            non_taxable_allowances: MAX_AMOUNT,
            vacation_allowance: MAX_AMOUNT,
            qualification_type: QualificationType::Phd,
            overtime_income: MAX_AMOUNT,
            second_job_income: MAX_AMOUNT,
            child_count: u32::MAX,
            loan_payment: MAX_AMOUNT,
            credit_union_deduction: MAX_AMOUNT,
            insurance_type: InsuranceType::Custom,
            custom_insurance_premium: MAX_AMOUNT,
            gratuity_rate: dec!(100),
            ..TaxInputs::default()
        };
        assert!(inputs.validate(&config()).is_ok());

        let results = crate::calculation::calculate_tax(&inputs, &config());
        assert!(results.annual.gross_income > MAX_AMOUNT);
        assert!(results.effective_tax_rate > Decimal::ZERO);
    }

    #[test]
    fn test_gratuity_rate_above_hundred_is_rejected() {
        let inputs = TaxInputs {
            gratuity_rate: dec!(120),
            ..TaxInputs::default()
        };
        assert!(inputs.validate(&config()).is_err());
    }

    #[test]
    fn test_gratuity_period_must_match_schedule() {
        let inputs = TaxInputs {
            gratuity_period: 3,
            ..TaxInputs::default()
        };
        match inputs.validate(&config()) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "gratuity_period");
                assert!(message.contains('6'));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let inputs: TaxInputs = serde_json::from_str(r#"{"basic_salary": 150000}"#).unwrap();
        assert_eq!(inputs.basic_salary, dec!(150000));
        assert_eq!(inputs.payment_frequency, PaymentFrequency::Monthly);
        assert_eq!(inputs.gratuity_rate, dec!(22.5));
        assert_eq!(inputs.gratuity_period, 6);
        assert_eq!(inputs.insurance_type, InsuranceType::None);
    }

    #[test]
    fn test_insurance_type_uses_kebab_case() {
        let insurance: InsuranceType = serde_json::from_str("\"employee-one\"").unwrap();
        assert_eq!(insurance, InsuranceType::EmployeeOne);
        assert!(serde_json::from_str::<InsuranceType>("\"premium\"").is_err());
    }

    #[test]
    fn test_qualification_type_uses_lowercase() {
        let qualification: QualificationType = serde_json::from_str("\"phd\"").unwrap();
        assert_eq!(qualification, QualificationType::Phd);
    }
}
