//! Integration tests for the tax engine HTTP API.
//!
//! This test suite drives the router end to end:
//! - Tax calculation across frequencies and presets
//! - Salary increase projection
//! - Tax summary, pension progress and deadlines
//! - Property tax
//! - Loan payoff and extra payments
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use gy_tax_engine::api::{AppState, create_router};
use gy_tax_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/gy2026").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", value));
    assert_eq!(
        decimal(actual).normalize(),
        decimal(expected).normalize(),
        "Expected {}, got {}",
        expected,
        actual
    );
}

fn assert_decimal_rounded(value: &Value, dp: u32, expected: &str) {
    let actual = decimal(value.as_str().unwrap()).round_dp(dp);
    assert_eq!(actual, decimal(expected), "Expected {}, got {}", expected, actual);
}

// =============================================================================
// SECTION 1: Tax Calculation
// =============================================================================

#[tokio::test]
async fn test_monthly_200k_end_to_end() {
    let router = create_router_for_test();
    let request = json!({
        "profile": {
            "payment_frequency": "monthly",
            "basic_salary": 200000,
            "taxable_allowances": 0,
            "non_taxable_allowances": 0,
            "vacation_allowance": 0,
            "qualification_type": "none",
            "overtime_income": 0,
            "second_job_income": 0,
            "child_count": 0,
            "loan_payment": 0,
            "credit_union_deduction": 0,
            "insurance_type": "none",
            "custom_insurance_premium": 0,
            "gratuity_rate": 22.5,
            "gratuity_period": 6
        }
    });

    let (status, body) = post(router, "/tax/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["results"];
    assert_decimal(&results["income"]["gross_income"], "200000");
    assert_decimal(&results["deductions"]["personal_allowance"], "140000");
    assert_decimal(&results["deductions"]["nis_contribution"], "11200");
    assert_decimal(&results["taxable_income"], "48800");
    assert_decimal(&results["income_tax"], "12200");
    assert_decimal(&results["net_pay"], "176600");
    assert!(body["calculation_id"].is_string());
    assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_fortnightly_profile_annualised() {
    let router = create_router_for_test();
    let request = json!({
        "profile": {
            "payment_frequency": "fortnightly",
            "basic_salary": "100000"
        }
    });

    let (status, body) = post(router, "/tax/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["results"];
    assert_eq!(results["payment_frequency"], "fortnightly");
    assert_eq!(results["frequency_config"]["periods_per_year"], 26);
    // Personal allowance 64516, NIS 5600
    assert_decimal(&results["taxable_income"], "29884");
    assert_decimal(&results["income_tax"], "7471");
    assert_decimal(&results["net_pay"], "86929");
    assert_decimal(&results["annual"]["net_pay"], "2260154");
    assert_decimal_rounded(&results["monthly"]["gross_income"], 2, "217000.00");
}

#[tokio::test]
async fn test_unknown_frequency_calculated_as_monthly() {
    let router = create_router_for_test();
    let request = json!({
        "profile": {
            "payment_frequency": "quarterly",
            "basic_salary": "200000"
        }
    });

    let (status, body) = post(router, "/tax/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["payment_frequency"], "monthly");
    assert_decimal(&body["results"]["net_pay"], "176600");
}

#[tokio::test]
async fn test_position_preset_profile() {
    let router = create_router_for_test();
    let request = json!({
        "profile": {
            "payment_frequency": "weekly",
            "position_id": "it-officer-3"
        }
    });

    let (status, body) = post(router, "/tax/calculate", request).await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["results"];
    assert_eq!(results["payment_frequency"], "monthly");
    assert_decimal(&results["income"]["gross_income"], "286000");
    assert_decimal(&results["deductions"]["nis_contribution"], "15680");
    assert_decimal(&results["income_tax"], "32580");
    assert_decimal(&results["net_pay"], "237740");
}

#[tokio::test]
async fn test_zero_salary_is_all_zero() {
    let router = create_router_for_test();
    let (status, body) = post(router, "/tax/calculate", json!({"profile": {}})).await;

    assert_eq!(status, StatusCode::OK);
    let results = &body["results"];
    assert_decimal(&results["net_pay"], "0");
    assert_decimal(&results["income_tax"], "0");
    assert_decimal(&results["deductions"]["nis_contribution"], "0");
    assert_decimal(&results["effective_tax_rate"], "0");
}

// =============================================================================
// SECTION 2: Salary Projection
// =============================================================================

#[tokio::test]
async fn test_projection_twelve_months() {
    let router = create_router_for_test();
    let request = json!({
        "profile": { "basic_salary": "200000", "vacation_allowance": "50000" },
        "increase_percent": "10"
    });

    let (status, body) = post(router, "/tax/project", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&body["net_pay_difference"], "14160");
    let months = body["projections"].as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0]["label"], "Jan");
    assert_eq!(months[5]["is_gratuity_month"], true);
    assert_decimal(&months[5]["gratuity_amount"], "297000");
    assert_decimal(&months[11]["gratuity_amount"], "347000");
    assert_decimal(&months[11]["total_pay"], "537760");
    assert_decimal(&months[3]["total_pay"], "190760");
}

#[tokio::test]
async fn test_projection_custom_horizon() {
    let router = create_router_for_test();
    let request = json!({
        "profile": { "basic_salary": "200000" },
        "increase_percent": 5,
        "months": 24
    });

    let (status, body) = post(router, "/tax/project", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["projections"].as_array().unwrap().len(), 24);
}

// =============================================================================
// SECTION 3: Tax Summary
// =============================================================================

#[tokio::test]
async fn test_summary_with_estimated_ytd() {
    let router = create_router_for_test();
    let request = json!({
        "profile": { "basic_salary": "200000" },
        "as_of": "2026-10-18",
        "years_worked": "10"
    });

    let (status, body) = post(router, "/tax/summary", request).await;

    assert_eq!(status, StatusCode::OK);
    let summary = &body["summary"];
    assert_eq!(summary["ytd_basis"], "estimated");
    assert_decimal(&summary["ytd_nis"], "112000");
    assert_decimal(&summary["ytd_paye"], "122000");
    assert_decimal(&summary["effective_tax_rate"], "11.7");

    assert_decimal(&body["nis_pension"]["weeks_remaining"], "230");

    let deadlines = body["deadlines"].as_array().unwrap();
    assert_eq!(deadlines[0]["kind"], "nis_payment");
    assert_eq!(deadlines[0]["urgency"], "overdue");
    assert_eq!(deadlines[0]["date"], "2026-10-14");
}

#[tokio::test]
async fn test_summary_with_recorded_ytd() {
    let router = create_router_for_test();
    let request = json!({
        "profile": { "basic_salary": "200000" },
        "as_of": "2026-03-01",
        "records": [
            { "year": 2026, "month": 1, "nis_contribution": "11000", "income_tax": "12000" },
            { "year": 2026, "month": 2, "nis_contribution": "11000", "income_tax": "12000" }
        ]
    });

    let (status, body) = post(router, "/tax/summary", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["ytd_basis"], "recorded");
    assert_decimal(&body["summary"]["ytd_total_tax"], "46000");
    assert!(body.get("nis_pension").is_none());
}

// =============================================================================
// SECTION 4: Property Tax
// =============================================================================

#[tokio::test]
async fn test_property_tax_georgetown_commercial() {
    let router = create_router_for_test();
    let request = json!({
        "annual_rental_value": "2000000",
        "location_type": "georgetown",
        "property_type": "commercial"
    });

    let (status, body) = post(router, "/tax/property", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&body["tax_rate"], "0.0075");
    assert_decimal(&body["annual_tax"], "15000");
    assert_decimal(&body["quarterly_tax"], "3750");
    assert_decimal(&body["monthly_equivalent"], "1250");
}

// =============================================================================
// SECTION 5: Loans
// =============================================================================

#[tokio::test]
async fn test_payoff_projection() {
    let router = create_router_for_test();
    let request = json!({
        "loan": {
            "current_balance": "1000000",
            "annual_interest_rate": "0.12",
            "monthly_payment": "50000"
        },
        "as_of": "2026-10-18"
    });

    let (status, body) = post(router, "/loans/payoff", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outlook"]["status"], "amortizing");
    assert_eq!(body["months_remaining"], 23);
    assert_eq!(body["projected_payoff_date"], "2028-09-18");
    assert_eq!(body["schedule"]["outcome"], "paid_off");
    assert_eq!(body["balance_series"].as_array().unwrap().len(), 23);
}

#[tokio::test]
async fn test_payoff_non_amortizing() {
    let router = create_router_for_test();
    let request = json!({
        "loan": {
            "current_balance": "1000000",
            "annual_interest_rate": "0.12",
            "monthly_payment": "8000"
        }
    });

    let (status, body) = post(router, "/loans/payoff", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outlook"]["status"], "non_amortizing");
    assert_eq!(body["months_remaining"], 999);
    assert!(body["projected_payoff_date"].is_null());
    assert_eq!(body["schedule"]["outcome"], "non_amortizing");
    assert!(body["balance_series"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_extra_payments_comparison_and_plan() {
    let router = create_router_for_test();
    let request = json!({
        "loan": {
            "current_balance": "1000000",
            "annual_interest_rate": "0.12",
            "monthly_payment": "50000"
        },
        "extra_amount": "200000",
        "every_months": 6,
        "start_month": 6,
        "as_of": "2026-10-18"
    });

    let (status, body) = post(router, "/loans/extra-payments", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comparison"]["regular"]["months"], 23);
    let months_saved = body["comparison"]["savings"]["months_saved"].as_u64().unwrap();
    assert!(months_saved > 0);

    let plan = body["payment_plan"].as_array().unwrap();
    assert_eq!(plan.len(), 6);
    assert_eq!(plan[0]["month_name"], "October");
    assert_eq!(plan[0]["source"], "salary");
    assert_eq!(plan[5]["month_name"], "March");
    assert_eq!(plan[5]["source"], "gratuity");
    assert_decimal(&plan[5]["total_payment"], "250000");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let router = create_router_for_test();
    let (status, body) = post_raw(router, "/tax/calculate", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_loan_field() {
    let router = create_router_for_test();
    let request = json!({
        "loan": { "current_balance": "1000", "annual_interest_rate": "0.1" }
    });

    let (status, body) = post(router, "/loans/payoff", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("monthly_payment"));
}

#[tokio::test]
async fn test_unknown_position_is_404() {
    let router = create_router_for_test();
    let request = json!({ "profile": { "position_id": "astronaut" } });

    let (status, body) = post(router, "/tax/calculate", request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "POSITION_NOT_FOUND");
}

#[tokio::test]
async fn test_gratuity_period_must_match_schedule() {
    let router = create_router_for_test();
    let request = json!({ "profile": { "basic_salary": "1000", "gratuity_period": 12 } });

    let (status, body) = post(router, "/tax/calculate", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"], "field: gratuity_period");
}

#[tokio::test]
async fn test_zero_extra_payment_interval_rejected() {
    let router = create_router_for_test();
    let request = json!({
        "loan": {
            "current_balance": "1000",
            "annual_interest_rate": "0.1",
            "monthly_payment": "100"
        },
        "extra_amount": "100",
        "every_months": 0,
        "start_month": 1
    });

    let (status, body) = post(router, "/loans/extra-payments", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "field: every_months");
}
