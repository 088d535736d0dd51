//! Short-range loan payment plan with extra payments funded by gratuity.

use chrono::Month;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ExtraPaymentPlan, LoanState, PaymentPlanRow, PaymentSource};

/// Default number of months in a payment plan.
pub const DEFAULT_PLAN_MONTHS: u32 = 6;

/// Builds a month-by-month payment plan starting in calendar month `first_month`.
///
/// Plan months are numbered from 1. A month that falls on the extra payment
/// plan pays the extra amount, funded from gratuity; every other month pays
/// only the regular payment from salary. The plan ends early once the
/// balance reaches zero. Money in the returned rows is rounded to whole
/// dollars; the running balance is not.
///
/// # Arguments
///
/// * `loan` - Balance, rate and regular payment
/// * `plan` - The extra payment schedule
/// * `first_month` - Calendar month (1 = January) of plan month 1; later months wrap
/// * `months` - Plan length, see [`DEFAULT_PLAN_MONTHS`]
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::build_payment_plan;
/// use gy_tax_engine::models::{ExtraPaymentPlan, LoanState, PaymentSource};
/// use rust_decimal_macros::dec;
///
/// let loan = LoanState::new(dec!(1000000), dec!(0.12), dec!(50000));
/// let plan = ExtraPaymentPlan::new(dec!(200000), 3, 3).unwrap();
///
/// let rows = build_payment_plan(&loan, &plan, 11, 6);
/// assert_eq!(rows[0].month_name, "November");
/// assert_eq!(rows[2].month_name, "January");
/// assert_eq!(rows[2].source, PaymentSource::Gratuity);
/// assert_eq!(rows[2].total_payment, dec!(250000));
/// ```
pub fn build_payment_plan(
    loan: &LoanState,
    plan: &ExtraPaymentPlan,
    first_month: u32,
    months: u32,
) -> Vec<PaymentPlanRow> {
    let monthly_rate = loan.monthly_rate();
    let mut remaining = loan.current_balance;
    let mut rows = Vec::new();

    for month in 1..=months {
        let is_extra_month = plan.is_extra_month(month);
        let extra_payment = plan.extra_for(month);
        let interest = remaining * monthly_rate;
        let total_payment = loan.monthly_payment + extra_payment;
        let principal = (total_payment - interest).min(remaining);
        remaining = (remaining - principal).max(Decimal::ZERO);

        rows.push(PaymentPlanRow {
            month,
            month_name: calendar_month_name(first_month % 12 + month - 1),
            regular_payment: whole(loan.monthly_payment),
            extra_payment: whole(extra_payment),
            total_payment: whole(total_payment),
            principal_paid: whole(principal),
            interest_paid: whole(interest),
            remaining_balance: whole(remaining),
            source: if is_extra_month {
                PaymentSource::Gratuity
            } else {
                PaymentSource::Salary
            },
        });

        if remaining.is_zero() {
            break;
        }
    }

    rows
}

fn calendar_month_name(month: u32) -> String {
    let index = ((month + 11) % 12) as u8;
    Month::try_from(index + 1)
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}

fn whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
