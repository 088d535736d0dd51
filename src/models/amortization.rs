//! Loan payoff projection models.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month count reported to consumers that cannot represent a loan that never pays off.
pub const NON_AMORTIZING_SENTINEL_MONTHS: u32 = 999;

/// Closed-form payoff estimate for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutlook {
    /// The regular payment pays the loan off.
    Amortizing {
        /// Whole months until payoff (the final month may be partial).
        months_remaining: u32,
        /// Unrounded month count from the amortization formula.
        exact_months: f64,
    },
    /// The regular payment does not cover the monthly interest.
    NonAmortizing {
        /// Interest charged on the current balance for one month.
        monthly_interest: Decimal,
        /// The regular monthly payment.
        monthly_payment: Decimal,
    },
}

impl PayoffOutlook {
    /// Whole months until payoff, or `None` if the loan never pays off.
    pub fn months_remaining(&self) -> Option<u32> {
        match self {
            PayoffOutlook::Amortizing {
                months_remaining, ..
            } => Some(*months_remaining),
            PayoffOutlook::NonAmortizing { .. } => None,
        }
    }

    /// Months until payoff, using [`NON_AMORTIZING_SENTINEL_MONTHS`] for a loan that never pays off.
    pub fn months_or_sentinel(&self) -> u32 {
        self.months_remaining()
            .unwrap_or(NON_AMORTIZING_SENTINEL_MONTHS)
    }

    /// Returns true if the regular payment does not cover interest.
    pub fn is_non_amortizing(&self) -> bool {
        matches!(self, PayoffOutlook::NonAmortizing { .. })
    }

    /// The date the loan is paid off when counting from `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gy_tax_engine::models::PayoffOutlook;
    ///
    /// let outlook = PayoffOutlook::Amortizing { months_remaining: 3, exact_months: 2.4 };
    /// let from = NaiveDate::from_ymd_opt(2026, 11, 30).unwrap();
    /// assert_eq!(outlook.projected_payoff_date(from), NaiveDate::from_ymd_opt(2027, 2, 28));
    /// ```
    pub fn projected_payoff_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.months_remaining()
            .and_then(|months| from.checked_add_months(Months::new(months)))
    }
}

/// One month of a simulated amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number, starting at 1.
    pub month: u32,
    /// Regular payment applied.
    pub payment: Decimal,
    /// Extra payment applied.
    pub extra_payment: Decimal,
    /// Interest charged.
    pub interest: Decimal,
    /// Principal repaid.
    pub principal: Decimal,
    /// Balance after the payment.
    pub balance: Decimal,
}

/// How a simulated schedule ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleOutcome {
    /// The balance reached zero.
    PaidOff,
    /// The month cap was reached with a balance outstanding.
    HorizonReached,
    /// The regular payment does not cover interest; nothing was simulated.
    NonAmortizing,
}

/// A month-by-month amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// The simulated months.
    pub rows: Vec<AmortizationRow>,
    /// Interest charged over all simulated months.
    pub total_interest: Decimal,
    /// How the simulation ended.
    pub outcome: ScheduleOutcome,
}

impl AmortizationSchedule {
    /// Number of simulated months.
    pub fn months(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Balance after the last simulated month.
    pub fn final_balance(&self) -> Option<Decimal> {
        self.rows.last().map(|row| row.balance)
    }

    /// Balance at the end of each simulated month.
    pub fn balance_series(&self) -> Vec<Decimal> {
        self.rows.iter().map(|row| row.balance).collect()
    }

    /// Condenses the schedule to its totals.
    pub fn summary(&self) -> AmortizationSummary {
        AmortizationSummary {
            months: self.months(),
            total_interest: self.total_interest,
            outcome: self.outcome,
        }
    }
}

/// Totals of a simulated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    /// Months simulated.
    pub months: u32,
    /// Interest charged.
    pub total_interest: Decimal,
    /// How the simulation ended.
    pub outcome: ScheduleOutcome,
}

/// What an extra payment plan saves over the regular schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSavings {
    /// Months cut from the schedule.
    pub months_saved: u32,
    /// Interest avoided.
    pub interest_saved: Decimal,
}

/// Regular schedule versus the same loan with extra payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPaymentComparison {
    /// The regular schedule.
    pub regular: AmortizationSummary,
    /// The schedule with extra payments.
    pub with_extra: AmortizationSummary,
    /// Savings, absent when the regular payment does not amortize the loan.
    pub savings: Option<PayoffSavings>,
}

/// Where a planned payment is funded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSource {
    /// Regular salary.
    Salary,
    /// A gratuity payout funding the extra payment.
    Gratuity,
}

/// One month of a short-range payment plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlanRow {
    /// Plan month, starting at 1.
    pub month: u32,
    /// Calendar month name.
    pub month_name: String,
    /// Regular payment.
    pub regular_payment: Decimal,
    /// Extra payment.
    pub extra_payment: Decimal,
    /// Regular plus extra.
    pub total_payment: Decimal,
    /// Principal repaid.
    pub principal_paid: Decimal,
    /// Interest charged.
    pub interest_paid: Decimal,
    /// Balance after the payment.
    pub remaining_balance: Decimal,
    /// Funding source.
    pub source: PaymentSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_non_amortizing_uses_sentinel() {
        let outlook = PayoffOutlook::NonAmortizing {
            monthly_interest: dec!(1000),
            monthly_payment: dec!(900),
        };
        assert_eq!(outlook.months_remaining(), None);
        assert_eq!(outlook.months_or_sentinel(), 999);
        assert!(outlook.is_non_amortizing());
        assert_eq!(
            outlook.projected_payoff_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            None
        );
    }

    #[test]
    fn test_outlook_serializes_with_status_tag() {
        let outlook = PayoffOutlook::Amortizing {
            months_remaining: 12,
            exact_months: 11.5,
        };
        let json = serde_json::to_value(&outlook).unwrap();
        assert_eq!(json["status"], "amortizing");
        assert_eq!(json["months_remaining"], 12);
    }

    #[test]
    fn test_schedule_summary_and_series() {
        let schedule = AmortizationSchedule {
            rows: vec![
                AmortizationRow {
                    month: 1,
                    payment: dec!(600),
                    extra_payment: Decimal::ZERO,
                    interest: dec!(10),
                    principal: dec!(590),
                    balance: dec!(410),
                },
                AmortizationRow {
                    month: 2,
                    payment: dec!(600),
                    extra_payment: Decimal::ZERO,
                    interest: dec!(4.1),
                    principal: dec!(410),
                    balance: Decimal::ZERO,
                },
            ],
            total_interest: dec!(14.1),
            outcome: ScheduleOutcome::PaidOff,
        };

        assert_eq!(schedule.balance_series(), vec![dec!(410), Decimal::ZERO]);
        assert_eq!(schedule.final_balance(), Some(Decimal::ZERO));
        let summary = schedule.summary();
        assert_eq!(summary.months, 2);
        assert_eq!(summary.total_interest, dec!(14.1));
    }
}
