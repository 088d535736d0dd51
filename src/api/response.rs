//! Response types for the tax engine API.
//!
//! This module defines the response bodies, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AmortizationSummary, CalendarEvent, ExtraPaymentComparison, NisPensionProgress,
    PaymentPlanRow, PayoffOutlook, TaxResults, TaxSummary,
};

/// Response body for `POST /tax/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique id of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the results.
    pub engine_version: String,
    /// The tax results.
    pub results: TaxResults,
}

/// Response body for `POST /tax/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSummaryResponse {
    /// Date the summary was produced for.
    pub as_of: NaiveDate,
    /// Rounded tax position.
    pub summary: TaxSummary,
    /// Pension progress, when years worked were supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nis_pension: Option<NisPensionProgress>,
    /// Statutory deadlines relative to `as_of`.
    pub deadlines: Vec<CalendarEvent>,
}

/// Response body for `POST /loans/payoff`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResponse {
    /// Closed-form payoff estimate.
    pub outlook: PayoffOutlook,
    /// Months remaining, 999 when the loan never pays off.
    pub months_remaining: u32,
    /// Projected payoff date, absent when the loan never pays off.
    pub projected_payoff_date: Option<NaiveDate>,
    /// Totals of the month-by-month simulation.
    pub schedule: AmortizationSummary,
    /// Balance at the end of each simulated month.
    pub balance_series: Vec<Decimal>,
}

/// Response body for `POST /loans/extra-payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentsResponse {
    /// Regular versus extra payment schedules.
    pub comparison: ExtraPaymentComparison,
    /// Month-by-month plan starting from the request date.
    pub payment_plan: Vec<PaymentPlanRow>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration is inconsistent",
                    message,
                ),
            },
            EngineError::UnknownFrequency { key } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "UNKNOWN_FREQUENCY",
                    message,
                    format!(
                        "'{}' is not one of daily, weekly, fortnightly, monthly, yearly",
                        key
                    ),
                ),
            ),
            EngineError::PositionNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "POSITION_NOT_FOUND",
                    message,
                    format!("No position preset has the id '{}'", id),
                ),
            },
            EngineError::InvalidInput { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details("VALIDATION_ERROR", message, format!("field: {}", field)),
            ),
        }
    }
}
