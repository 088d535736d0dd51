//! Calculation logic for the tax and loan engine.
//!
//! Every function here is pure: it reads a [`TaxConfig`](crate::config::TaxConfig)
//! or a loan record and returns a freshly built result. Nothing is mutated
//! and nothing fails for in-range input.

mod amortization;
mod conversion;
mod payment_plan;
mod property_tax;
mod salary_projection;
mod tax;
mod tax_calendar;
mod tax_summary;

pub use amortization::{
    DEFAULT_SIMULATION_MONTHS, MAX_SIMULATION_MONTHS, compare_extra_payments, project_payoff,
    simulate_amortization,
};
pub use conversion::{convert_from_monthly, convert_to_monthly};
pub use payment_plan::{DEFAULT_PLAN_MONTHS, build_payment_plan};
pub use property_tax::calculate_property_tax;
pub use salary_projection::{DEFAULT_PROJECTION_MONTHS, project_salary_increase};
pub use tax::calculate_tax;
pub use tax_calendar::{RECENT_OVERDUE_DAYS, upcoming_deadlines};
pub use tax_summary::{
    NIS_PENSION_CONTRIBUTIONS, NIS_WEEKS_PER_YEAR, nis_pension_progress, summarize_tax,
};
