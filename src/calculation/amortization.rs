//! Loan payoff projection.
//!
//! Two methods are provided. [`project_payoff`] uses the closed-form
//! amortization formula and is used when the regular payment is the only
//! payment. [`simulate_amortization`] walks the loan month by month and is
//! used whenever extra payments must be placed on specific months.
//!
//! A loan whose payment does not exceed the monthly interest never pays
//! off. Both methods report that as a distinct outcome instead of a
//! month count.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::models::{
    AmortizationRow, AmortizationSchedule, ExtraPaymentComparison, ExtraPaymentPlan, LoanState,
    PayoffOutlook, PayoffSavings, ScheduleOutcome,
};

/// Default simulation horizon in months.
pub const DEFAULT_SIMULATION_MONTHS: u32 = 120;

/// Upper bound on the simulation horizon.
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Estimates the months remaining on a loan with the closed-form formula
/// `n = -ln(1 - rP/A) / ln(1 + r)`.
///
/// # Returns
///
/// [`PayoffOutlook::NonAmortizing`] when `monthly_payment <= balance * monthly_rate`,
/// otherwise [`PayoffOutlook::Amortizing`] with the month count rounded up.
/// A payoff too far out to count in a `u32` is also reported as
/// `NonAmortizing`.
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::project_payoff;
/// use gy_tax_engine::models::LoanState;
/// use rust_decimal_macros::dec;
///
/// let loan = LoanState::new(dec!(1000000), dec!(0.12), dec!(50000));
/// let outlook = project_payoff(&loan);
/// assert_eq!(outlook.months_remaining(), Some(23));
///
/// let stuck = LoanState::new(dec!(1000000), dec!(0.12), dec!(10000));
/// assert!(project_payoff(&stuck).is_non_amortizing());
/// ```
pub fn project_payoff(loan: &LoanState) -> PayoffOutlook {
    if loan.current_balance <= Decimal::ZERO {
        return PayoffOutlook::Amortizing {
            months_remaining: 0,
            exact_months: 0.0,
        };
    }

    if !loan.is_amortizing() {
        debug!(
            balance = %loan.current_balance,
            monthly_payment = %loan.monthly_payment,
            "Loan payment does not cover monthly interest"
        );
        return PayoffOutlook::NonAmortizing {
            monthly_interest: loan.monthly_interest(),
            monthly_payment: loan.monthly_payment,
        };
    }

    // 1 - rP/A in Decimal: in f64 it cancels to zero when the payment
    // clears interest by less than f64 precision.
    let exact_months = if loan.monthly_rate().is_zero() {
        loan.current_balance
            .checked_div(loan.monthly_payment)
            .and_then(|months| months.to_f64())
    } else {
        let unpaid_share =
            (loan.monthly_payment - loan.monthly_interest()) / loan.monthly_payment;
        unpaid_share
            .to_f64()
            .zip(loan.monthly_rate().to_f64())
            .map(|(share, rate)| -share.ln() / rate.ln_1p())
    };

    match exact_months.filter(|months| months.is_finite() && *months <= f64::from(u32::MAX)) {
        Some(exact_months) => PayoffOutlook::Amortizing {
            months_remaining: exact_months.ceil() as u32,
            exact_months,
        },
        None => {
            debug!(
                balance = %loan.current_balance,
                monthly_payment = %loan.monthly_payment,
                "Loan payoff lies beyond any representable month count"
            );
            PayoffOutlook::NonAmortizing {
                monthly_interest: loan.monthly_interest(),
                monthly_payment: loan.monthly_payment,
            }
        }
    }
}

/// Simulates a loan month by month, optionally with extra payments.
///
/// Each month charges `balance * annual_rate / 12` interest, applies the
/// regular payment plus any extra payment, and never takes the balance
/// below zero. The simulation stops when the balance reaches zero or after
/// `max_months` months (capped at [`MAX_SIMULATION_MONTHS`]).
///
/// When the regular payment does not cover interest and no extra payments
/// are planned, nothing is simulated and the outcome is
/// [`ScheduleOutcome::NonAmortizing`].
///
/// # Arguments
///
/// * `loan` - Balance, rate and regular payment
/// * `extra` - Optional periodic extra payment
/// * `max_months` - Horizon, see [`DEFAULT_SIMULATION_MONTHS`]
pub fn simulate_amortization(
    loan: &LoanState,
    extra: Option<&ExtraPaymentPlan>,
    max_months: u32,
) -> AmortizationSchedule {
    let has_extra = extra.is_some_and(|plan| plan.amount() > Decimal::ZERO);
    if !loan.is_amortizing() && !has_extra {
        debug!(
            balance = %loan.current_balance,
            monthly_payment = %loan.monthly_payment,
            "Skipping simulation of non-amortizing loan"
        );
        return AmortizationSchedule {
            rows: Vec::new(),
            total_interest: Decimal::ZERO,
            outcome: ScheduleOutcome::NonAmortizing,
        };
    }

    let horizon = max_months.min(MAX_SIMULATION_MONTHS);
    let monthly_rate = loan.monthly_rate();
    let mut balance = loan.current_balance;
    let mut total_interest = Decimal::ZERO;
    let mut rows = Vec::new();

    for month in 1..=horizon {
        if balance <= Decimal::ZERO {
            break;
        }

        let interest = balance * monthly_rate;
        let extra_payment = extra.map_or(Decimal::ZERO, |plan| plan.extra_for(month));
        let principal = (loan.monthly_payment + extra_payment - interest).min(balance);
        balance = (balance - principal).max(Decimal::ZERO);
        total_interest += interest;

        rows.push(AmortizationRow {
            month,
            payment: loan.monthly_payment,
            extra_payment,
            interest,
            principal,
            balance,
        });
    }

    let outcome = if balance <= Decimal::ZERO {
        ScheduleOutcome::PaidOff
    } else {
        ScheduleOutcome::HorizonReached
    };

    AmortizationSchedule {
        rows,
        total_interest,
        outcome,
    }
}

/// Compares the regular schedule against the same loan with extra payments.
///
/// Savings are only reported when the regular schedule amortizes; a loan
/// that never pays off has no baseline to save against.
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::{compare_extra_payments, DEFAULT_SIMULATION_MONTHS};
/// use gy_tax_engine::models::{ExtraPaymentPlan, LoanState};
/// use rust_decimal_macros::dec;
///
/// let loan = LoanState::new(dec!(1000000), dec!(0.12), dec!(50000));
/// let plan = ExtraPaymentPlan::new(dec!(200000), 6, 6).unwrap();
///
/// let comparison = compare_extra_payments(&loan, &plan, DEFAULT_SIMULATION_MONTHS);
/// let savings = comparison.savings.unwrap();
/// assert!(savings.months_saved > 0);
/// assert!(savings.interest_saved > dec!(0));
/// ```
pub fn compare_extra_payments(
    loan: &LoanState,
    plan: &ExtraPaymentPlan,
    max_months: u32,
) -> ExtraPaymentComparison {
    let regular = simulate_amortization(loan, None, max_months);
    let with_extra = simulate_amortization(loan, Some(plan), max_months);

    let savings = match regular.outcome {
        ScheduleOutcome::NonAmortizing => None,
        ScheduleOutcome::PaidOff | ScheduleOutcome::HorizonReached => Some(PayoffSavings {
            months_saved: regular.months().saturating_sub(with_extra.months()),
            interest_saved: regular.total_interest - with_extra.total_interest,
        }),
    };

    ExtraPaymentComparison {
        regular: regular.summary(),
        with_extra: with_extra.summary(),
        savings,
    }
}
