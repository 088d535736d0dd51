//! Core data models for the tax and loan engine.
//!
//! Inputs are validated value records; results are derived by the functions
//! in [`calculation`](crate::calculation) and never mutated afterwards.

mod amortization;
mod calendar;
mod frequency;
mod loan;
mod projection;
mod property;
mod summary;
mod tax_inputs;
mod tax_results;

pub use amortization::{
    AmortizationRow, AmortizationSchedule, AmortizationSummary, ExtraPaymentComparison,
    NON_AMORTIZING_SENTINEL_MONTHS, PaymentPlanRow, PaymentSource, PayoffOutlook, PayoffSavings,
    ScheduleOutcome,
};
pub use calendar::{CalendarEvent, DeadlineKind, Urgency};
pub use frequency::PaymentFrequency;
pub use loan::{ExtraPaymentPlan, LoanState, MAX_ANNUAL_INTEREST_RATE};
pub use projection::{SalaryIncreaseProjection, SalaryProjection};
pub use property::{LocationType, PropertyTaxResult, PropertyType};
pub use summary::{NisPensionProgress, RecordedCalculation, TaxSummary, YearToDateBasis};
pub use tax_inputs::{InsuranceType, MAX_AMOUNT, QualificationType, TaxInputs};
pub use tax_results::{
    AnnualTotals, GratuityPackage, IncomeBreakdown, MonthlyEquivalents, StatutoryDeductions,
    TaxResults,
};
