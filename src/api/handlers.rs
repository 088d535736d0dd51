//! HTTP request handlers for the tax engine API.
//!
//! Every handler decodes its body, resolves and validates the inputs, and
//! calls one of the pure calculation functions. Nothing is persisted.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    DEFAULT_PLAN_MONTHS, DEFAULT_PROJECTION_MONTHS, DEFAULT_SIMULATION_MONTHS,
    MAX_SIMULATION_MONTHS, build_payment_plan, calculate_property_tax, calculate_tax,
    compare_extra_payments, nis_pension_progress, project_payoff, project_salary_increase,
    simulate_amortization, summarize_tax, upcoming_deadlines,
};
use crate::error::EngineError;
use crate::models::{
    ExtraPaymentPlan, LoanState, PropertyTaxResult, SalaryIncreaseProjection, TaxInputs,
};

use super::request::{
    ExtraPaymentsRequest, PayoffRequest, PropertyTaxRequest, SalaryProjectionRequest,
    TaxCalculationRequest, TaxInputsRequest, TaxSummaryRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ExtraPaymentsResponse, PayoffResponse,
    TaxSummaryResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tax/calculate", post(calculate_handler))
        .route("/tax/project", post(project_handler))
        .route("/tax/summary", post(summary_handler))
        .route("/tax/property", post(property_handler))
        .route("/loans/payoff", post(payoff_handler))
        .route("/loans/extra-payments", post(extra_payments_handler))
        .with_state(state)
}

/// Handler for POST /tax/calculate.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxCalculationRequest>, JsonRejection>,
) -> ApiResult<CalculationResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax calculation request");

    let request = decode(payload, correlation_id)?;
    let inputs = resolve_profile(request.profile, &state, correlation_id)?;

    let start_time = Instant::now();
    let results = calculate_tax(&inputs, state.config().config());
    info!(
        correlation_id = %correlation_id,
        frequency = %inputs.payment_frequency,
        gross_income = %results.income.gross_income,
        net_pay = %results.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Tax calculation completed"
    );

    Ok(Json(CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        results,
    }))
}

/// Handler for POST /tax/project.
async fn project_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryProjectionRequest>, JsonRejection>,
) -> ApiResult<SalaryIncreaseProjection> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary projection request");

    let request = decode(payload, correlation_id)?;
    request
        .validate()
        .map_err(|err| reject(err, correlation_id))?;
    let inputs = resolve_profile(request.profile, &state, correlation_id)?;
    let months = request
        .months
        .unwrap_or(DEFAULT_PROJECTION_MONTHS)
        .min(MAX_SIMULATION_MONTHS);

    let start_time = Instant::now();
    let projection =
        project_salary_increase(&inputs, request.increase_percent, months, state.config().config());
    info!(
        correlation_id = %correlation_id,
        increase_percent = %request.increase_percent,
        months,
        net_pay_difference = %projection.net_pay_difference,
        duration_us = start_time.elapsed().as_micros(),
        "Salary projection completed"
    );

    Ok(Json(projection))
}

/// Handler for POST /tax/summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxSummaryRequest>, JsonRejection>,
) -> ApiResult<TaxSummaryResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax summary request");

    let request = decode(payload, correlation_id)?;
    request
        .validate()
        .map_err(|err| reject(err, correlation_id))?;
    let inputs = resolve_profile(request.profile, &state, correlation_id)?;
    let as_of = request.as_of.unwrap_or_else(today);
    let config = state.config().config();

    let start_time = Instant::now();
    let results = calculate_tax(&inputs, config);
    let summary = summarize_tax(&results, as_of, &request.records);
    let deadlines = upcoming_deadlines(as_of, config);
    info!(
        correlation_id = %correlation_id,
        as_of = %as_of,
        records = request.records.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Tax summary completed"
    );

    Ok(Json(TaxSummaryResponse {
        as_of,
        summary,
        nis_pension: request.years_worked.map(nis_pension_progress),
        deadlines,
    }))
}

/// Handler for POST /tax/property.
async fn property_handler(
    State(state): State<AppState>,
    payload: Result<Json<PropertyTaxRequest>, JsonRejection>,
) -> ApiResult<PropertyTaxResult> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing property tax request");

    let request = decode(payload, correlation_id)?;
    request
        .validate()
        .map_err(|err| reject(err, correlation_id))?;

    let result = calculate_property_tax(
        request.annual_rental_value,
        request.location_type,
        request.property_type,
        state.config().config(),
    );
    info!(
        correlation_id = %correlation_id,
        annual_tax = %result.annual_tax,
        "Property tax calculation completed"
    );

    Ok(Json(result))
}

/// Handler for POST /loans/payoff.
async fn payoff_handler(
    payload: Result<Json<PayoffRequest>, JsonRejection>,
) -> ApiResult<PayoffResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing loan payoff request");

    let request = decode(payload, correlation_id)?;
    let loan = validated_loan(request.loan, correlation_id)?;
    let as_of = request.as_of.unwrap_or_else(today);

    let start_time = Instant::now();
    let outlook = project_payoff(&loan);
    let schedule =
        simulate_amortization(&loan, None, request.max_months.unwrap_or(DEFAULT_SIMULATION_MONTHS));
    info!(
        correlation_id = %correlation_id,
        months_remaining = outlook.months_or_sentinel(),
        outcome = ?schedule.outcome,
        duration_us = start_time.elapsed().as_micros(),
        "Loan payoff projection completed"
    );

    Ok(Json(PayoffResponse {
        months_remaining: outlook.months_or_sentinel(),
        projected_payoff_date: outlook.projected_payoff_date(as_of),
        outlook,
        balance_series: schedule.balance_series(),
        schedule: schedule.summary(),
    }))
}

/// Handler for POST /loans/extra-payments.
async fn extra_payments_handler(
    payload: Result<Json<ExtraPaymentsRequest>, JsonRejection>,
) -> ApiResult<ExtraPaymentsResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing extra payment request");

    let request = decode(payload, correlation_id)?;
    let loan = validated_loan(request.loan, correlation_id)?;
    let plan = ExtraPaymentPlan::new(request.extra_amount, request.every_months, request.start_month)
        .map_err(|err| reject(err, correlation_id))?;
    let as_of = request.as_of.unwrap_or_else(today);
    let plan_months = request
        .plan_months
        .unwrap_or(DEFAULT_PLAN_MONTHS)
        .min(MAX_SIMULATION_MONTHS);

    let start_time = Instant::now();
    let comparison = compare_extra_payments(
        &loan,
        &plan,
        request.max_months.unwrap_or(DEFAULT_SIMULATION_MONTHS),
    );
    let payment_plan = build_payment_plan(&loan, &plan, as_of.month(), plan_months);
    info!(
        correlation_id = %correlation_id,
        regular_months = comparison.regular.months,
        extra_months = comparison.with_extra.months,
        duration_us = start_time.elapsed().as_micros(),
        "Extra payment comparison completed"
    );

    Ok(Json(ExtraPaymentsResponse {
        comparison,
        payment_plan,
    }))
}

/// Unwraps a JSON body, mapping extractor rejections to API errors.
fn decode<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn resolve_profile(
    profile: TaxInputsRequest,
    state: &AppState,
    correlation_id: Uuid,
) -> Result<TaxInputs, ApiErrorResponse> {
    profile
        .into_inputs(state.config())
        .map_err(|err| reject(err, correlation_id))
}

fn validated_loan(loan: LoanState, correlation_id: Uuid) -> Result<LoanState, ApiErrorResponse> {
    loan.validate().map_err(|err| reject(err, correlation_id))?;
    Ok(loan)
}

fn reject(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    err.into()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
