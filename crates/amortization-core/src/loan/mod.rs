//! Fixed-installment loan amortization.
//!
//! Data flows one way: [`validation`] → [`rate`] → [`payment`] →
//! [`schedule`] → [`summary`]. [`amortization::compute_amortization`] is the
//! only entry point that runs the whole pipeline; the stages are public so
//! callers can reuse them individually.

pub mod amortization;
pub mod payment;
pub mod policy;
pub mod rate;
pub mod schedule;
pub mod summary;
pub mod terms;
pub mod validation;
pub mod views;

pub use amortization::{
    compute_amortization, compute_amortization_default, quote_payment, AmortizationOutput,
    PaymentQuote,
};
pub use policy::{AmortizationOptions, RoundingPolicy, ValidationPolicy};
pub use schedule::AmortizationEntry;
pub use summary::LoanSummary;
pub use terms::LoanTerms;
