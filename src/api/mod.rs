//! HTTP API for the tax engine.
//!
//! A thin `axum` router over the calculation functions. Handlers hold no
//! state beyond the shared, read-only tax schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ExtraPaymentsRequest, PayoffRequest, PropertyTaxRequest, SalaryProjectionRequest,
    TaxCalculationRequest, TaxInputsRequest, TaxSummaryRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ExtraPaymentsResponse, PayoffResponse,
    TaxSummaryResponse,
};
pub use state::AppState;
