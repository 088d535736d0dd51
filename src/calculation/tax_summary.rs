//! Rounded tax summaries and NIS pension progress.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::{
    NisPensionProgress, RecordedCalculation, TaxResults, TaxSummary, YearToDateBasis,
};

/// Weekly NIS contributions required for an old-age pension.
pub const NIS_PENSION_CONTRIBUTIONS: u32 = 750;

/// Weekly contributions credited per year worked.
pub const NIS_WEEKS_PER_YEAR: u32 = 52;

/// Summarises a tax position for display on `as_of`.
///
/// Year-to-date NIS and PAYE are summed from the recorded calculations that
/// fall in `as_of`'s year. When there are none they are estimated as the
/// monthly figure times the month number of `as_of`.
///
/// Money is rounded to whole dollars, half away from zero. The effective
/// rate is rounded to one decimal place.
pub fn summarize_tax(
    results: &TaxResults,
    as_of: NaiveDate,
    records: &[RecordedCalculation],
) -> TaxSummary {
    let this_year: Vec<&RecordedCalculation> = records
        .iter()
        .filter(|record| record.year == as_of.year())
        .collect();

    let (ytd_nis, ytd_paye, ytd_basis) = if this_year.is_empty() {
        let months_elapsed = Decimal::from(as_of.month());
        (
            results.monthly.nis * months_elapsed,
            results.monthly.paye * months_elapsed,
            YearToDateBasis::Estimated,
        )
    } else {
        (
            this_year.iter().map(|record| record.nis_contribution).sum(),
            this_year.iter().map(|record| record.income_tax).sum(),
            YearToDateBasis::Recorded,
        )
    };

    TaxSummary {
        monthly_nis: whole(results.monthly.nis),
        monthly_paye: whole(results.monthly.paye),
        monthly_net_pay: whole(results.monthly.net_pay),
        monthly_gross_income: whole(results.monthly.gross_income),
        ytd_nis: whole(ytd_nis),
        ytd_paye: whole(ytd_paye),
        ytd_total_tax: whole(ytd_nis + ytd_paye),
        ytd_basis,
        effective_tax_rate: results
            .effective_tax_rate
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        annual_nis: whole(results.annual.nis),
        annual_paye: whole(results.annual.paye),
        annual_net_pay: whole(results.annual.net_pay),
        annual_total: whole(results.annual.total),
    }
}

/// Progress towards the weekly contributions required for an NIS pension.
///
/// # Examples
///
/// ```
/// use gy_tax_engine::calculation::nis_pension_progress;
/// use rust_decimal_macros::dec;
///
/// let progress = nis_pension_progress(dec!(10));
/// assert_eq!(progress.contributions, dec!(520));
/// assert_eq!(progress.weeks_remaining, dec!(230));
/// assert_eq!(progress.years_remaining, dec!(4.4));
/// assert!(!progress.is_eligible());
/// ```
pub fn nis_pension_progress(years_worked: Decimal) -> NisPensionProgress {
    let years_worked = years_worked.max(Decimal::ZERO);
    let required = Decimal::from(NIS_PENSION_CONTRIBUTIONS);
    let weeks_per_year = Decimal::from(NIS_WEEKS_PER_YEAR);

    let contributions = years_worked * weeks_per_year;
    let weeks_remaining = (required - contributions).max(Decimal::ZERO);

    NisPensionProgress {
        years_worked,
        contributions,
        required_contributions: NIS_PENSION_CONTRIBUTIONS,
        percent_complete: (contributions / required * dec!(100)).min(dec!(100)),
        weeks_remaining,
        years_remaining: (weeks_remaining / weeks_per_year)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
    }
}

fn whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
