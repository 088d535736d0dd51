//! Loan state and extra payment plan models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::MAX_AMOUNT;

/// Highest annual interest rate a loan may carry (50%).
///
/// A loan whose balance grows between extra payments compounds for up to
/// 600 simulated months; this bound keeps that growth inside `Decimal` range.
pub const MAX_ANNUAL_INTEREST_RATE: Decimal = dec!(0.5);

/// A loan as seen by the payoff projector.
///
/// The projector only simulates this state; the stored balance is updated by
/// whoever records real payments.
///
/// # Example
///
/// ```
/// use gy_tax_engine::models::LoanState;
/// use rust_decimal_macros::dec;
///
/// let loan = LoanState::new(dec!(1200000), dec!(0.12), dec!(50000));
/// assert_eq!(loan.monthly_rate(), dec!(0.01));
/// assert_eq!(loan.monthly_interest(), dec!(12000));
/// assert!(loan.is_amortizing());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanState {
    /// Outstanding balance.
    pub current_balance: Decimal,
    /// Annual interest rate as a fraction (0.12 is 12%).
    pub annual_interest_rate: Decimal,
    /// Regular monthly payment.
    pub monthly_payment: Decimal,
}

impl LoanState {
    /// Creates a new loan state.
    pub fn new(current_balance: Decimal, annual_interest_rate: Decimal, monthly_payment: Decimal) -> Self {
        Self {
            current_balance,
            annual_interest_rate,
            monthly_payment,
        }
    }

    /// Monthly interest rate.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_interest_rate / dec!(12)
    }

    /// Interest charged on the current balance for one month.
    pub fn monthly_interest(&self) -> Decimal {
        self.current_balance * self.monthly_rate()
    }

    /// Returns true if the regular payment reduces the balance.
    ///
    /// A loan with nothing outstanding is treated as amortizing.
    pub fn is_amortizing(&self) -> bool {
        self.current_balance <= Decimal::ZERO || self.monthly_payment > self.monthly_interest()
    }

    /// Checks that balance, rate and payment are not negative and within bounds.
    ///
    /// Balance and payment may not exceed [`MAX_AMOUNT`]; the rate may not
    /// exceed [`MAX_ANNUAL_INTEREST_RATE`].
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("current_balance", self.current_balance, MAX_AMOUNT),
            (
                "annual_interest_rate",
                self.annual_interest_rate,
                MAX_ANNUAL_INTEREST_RATE,
            ),
            ("monthly_payment", self.monthly_payment, MAX_AMOUNT),
        ];
        for (field, value, max) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
            if value > max {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not exceed {}", max),
                });
            }
        }
        Ok(())
    }
}

/// A fixed extra payment made every `every_months` months from `start_month`.
///
/// Months are counted from 1. The extra payment falls in month `m` when
/// `m >= start_month` and `(m - start_month) % every_months == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraPaymentPlan {
    amount: Decimal,
    every_months: u32,
    start_month: u32,
}

impl ExtraPaymentPlan {
    /// Creates a validated extra payment plan.
    ///
    /// # Returns
    ///
    /// Returns `InvalidInput` if `amount` is negative or above
    /// [`MAX_AMOUNT`], or if `every_months` or `start_month` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gy_tax_engine::models::ExtraPaymentPlan;
    /// use rust_decimal_macros::dec;
    ///
    /// let plan = ExtraPaymentPlan::new(dec!(250000), 6, 6).unwrap();
    /// assert!(!plan.is_extra_month(5));
    /// assert!(plan.is_extra_month(6));
    /// assert!(plan.is_extra_month(12));
    /// assert!(!plan.is_extra_month(13));
    /// ```
    pub fn new(amount: Decimal, every_months: u32, start_month: u32) -> EngineResult<Self> {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "amount".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if amount > MAX_AMOUNT {
            return Err(EngineError::InvalidInput {
                field: "amount".to_string(),
                message: format!("must not exceed {}", MAX_AMOUNT),
            });
        }
        if every_months == 0 {
            return Err(EngineError::InvalidInput {
                field: "every_months".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if start_month == 0 {
            return Err(EngineError::InvalidInput {
                field: "start_month".to_string(),
                message: "months are counted from 1".to_string(),
            });
        }
        Ok(Self {
            amount,
            every_months,
            start_month,
        })
    }

    /// The extra amount paid in an extra month.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Months between extra payments.
    pub fn every_months(&self) -> u32 {
        self.every_months
    }

    /// First month carrying an extra payment.
    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns true if `month` carries an extra payment.
    pub fn is_extra_month(&self, month: u32) -> bool {
        month >= self.start_month && (month - self.start_month) % self.every_months == 0
    }

    /// The extra amount paid in `month`, zero outside extra months.
    pub fn extra_for(&self, month: u32) -> Decimal {
        if self.is_extra_month(month) {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_not_covering_interest_is_not_amortizing() {
        let loan = LoanState::new(dec!(1000000), dec!(0.12), dec!(10000));
        assert!(!loan.is_amortizing());

        let loan = LoanState::new(dec!(1000000), dec!(0.12), dec!(10001));
        assert!(loan.is_amortizing());
    }

    #[test]
    fn test_zero_balance_is_amortizing() {
        let loan = LoanState::new(Decimal::ZERO, dec!(0.12), Decimal::ZERO);
        assert!(loan.is_amortizing());
    }

    #[test]
    fn test_zero_payment_on_interest_free_loan_is_not_amortizing() {
        let loan = LoanState::new(dec!(5000), Decimal::ZERO, Decimal::ZERO);
        assert!(!loan.is_amortizing());
    }

    #[test]
    fn test_validate_rejects_negative_balance() {
        let loan = LoanState::new(dec!(-1), dec!(0.1), dec!(100));
        match loan.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "current_balance"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_amounts_above_maximum() {
        let loan = LoanState::new(dec!(1000000000000000000000000000), dec!(0.1), dec!(100));
        match loan.validate() {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "current_balance");
                assert!(message.contains("1000000000000"), "got: {}", message);
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        let loan = LoanState::new(dec!(100000), dec!(12), dec!(5000));
        match loan.validate() {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "annual_interest_rate")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        assert!(ExtraPaymentPlan::new(MAX_AMOUNT + Decimal::ONE, 6, 6).is_err());
    }

    #[test]
    fn test_loan_at_bounds_simulates_without_overflow() {
        // Balance grows every month the extra payment is absent.
        let loan = LoanState::new(MAX_AMOUNT, MAX_ANNUAL_INTEREST_RATE, Decimal::ZERO);
        assert!(loan.validate().is_ok());
        let plan = ExtraPaymentPlan::new(dec!(1), 600, 600).unwrap();

        let schedule = crate::calculation::simulate_amortization(&loan, Some(&plan), 600);
        assert_eq!(schedule.months(), 600);
        assert!(schedule.final_balance().unwrap() > MAX_AMOUNT);

        let rows = crate::calculation::build_payment_plan(&loan, &plan, 1, 600);
        assert_eq!(rows.len(), 600);
    }

    #[test]
    fn test_plan_rejects_zero_interval() {
        assert!(ExtraPaymentPlan::new(dec!(100), 0, 1).is_err());
        assert!(ExtraPaymentPlan::new(dec!(100), 1, 0).is_err());
        assert!(ExtraPaymentPlan::new(dec!(-100), 1, 1).is_err());
    }

    #[test]
    fn test_monthly_plan_pays_every_month_from_start() {
        let plan = ExtraPaymentPlan::new(dec!(100), 1, 3).unwrap();
        let months: Vec<u32> = (1..=6).filter(|m| plan.is_extra_month(*m)).collect();
        assert_eq!(months, vec![3, 4, 5, 6]);
        assert_eq!(plan.extra_for(2), Decimal::ZERO);
        assert_eq!(plan.extra_for(3), dec!(100));
    }
}
