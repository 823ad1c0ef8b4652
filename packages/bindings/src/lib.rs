use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use amortization_core::loan::{self, AmortizationOptions, LoanTerms};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// `{"terms": {...}, "options": {...}}`; options may be omitted.
#[derive(Deserialize)]
struct LoanRequest {
    terms: LoanTerms,
    #[serde(default)]
    options: AmortizationOptions,
}

fn parse_request(input_json: &str) -> NapiResult<LoanRequest> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_amortization(input_json: String) -> NapiResult<String> {
    let req = parse_request(&input_json)?;
    let output = loan::compute_amortization(&req.terms, &req.options).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn periodic_payment(input_json: String) -> NapiResult<String> {
    let req = parse_request(&input_json)?;
    let output = loan::quote_payment(&req.terms, &req.options).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Amount as a decimal string; anything unparseable renders as `N/A`.
#[napi]
pub fn format_vnd(amount: String) -> String {
    amortization_core::format::format_vnd(amount.trim().parse::<Decimal>().ok())
}
