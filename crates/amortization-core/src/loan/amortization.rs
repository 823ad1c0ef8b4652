use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::AmortizationError;
use crate::loan::policy::{AmortizationOptions, RoundingPolicy};
use crate::loan::schedule::{self, AmortizationEntry};
use crate::loan::summary::{self, LoanSummary};
use crate::loan::terms::LoanTerms;
use crate::loan::{payment, rate, validation};
use crate::types::*;
use crate::AmortizationResult;

/// Full result of one amortization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub periodic_rate: Rate,
    pub summary: LoanSummary,
    pub schedule: Vec<AmortizationEntry>,
}

/// Instalment only, without the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub periodic_rate: Rate,
    pub periodic_payment: Money,
    pub total_periods: u32,
}

/// Validate, then solve the rate and instalment that both entry points share.
fn solve(terms: &LoanTerms, options: &AmortizationOptions) -> AmortizationResult<(Rate, Money)> {
    validation::validate(terms, &options.validation)?;
    options.minor_unit()?;

    let periodic_rate = rate::periodic_rate(terms.annual_rate_percent, terms.periods_per_year)?;
    let exact = payment::periodic_payment(terms.principal, periodic_rate, terms.total_periods)?;

    let periodic_payment = match options.rounding {
        RoundingPolicy::PerPeriod => options.round_money(exact),
        RoundingPolicy::Exact | RoundingPolicy::SummaryOnly => exact,
    };
    if periodic_payment <= Decimal::ZERO {
        return Err(AmortizationError::Computation(format!(
            "instalment {exact} rounds to zero at {} decimal places",
            options.currency_decimals
        )));
    }

    Ok((periodic_rate, periodic_payment))
}

/// Periodic rate and instalment for `terms`, without building the schedule.
pub fn quote_payment(
    terms: &LoanTerms,
    options: &AmortizationOptions,
) -> AmortizationResult<ComputationOutput<PaymentQuote>> {
    let start = Instant::now();
    let (periodic_rate, periodic_payment) = solve(terms, options)?;

    let quote = PaymentQuote {
        periodic_rate,
        periodic_payment,
        total_periods: terms.total_periods,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-installment (annuity) payment",
        &serde_json::json!({
            "terms": terms,
            "options": options,
        }),
        Vec::new(),
        elapsed,
        quote,
    ))
}

/// Compute the instalment, the period-by-period schedule and the summary
/// for `terms`.
///
/// Every call is independent: validation failures return no partial
/// result, and the schedule is built from scratch each time.
pub fn compute_amortization(
    terms: &LoanTerms,
    options: &AmortizationOptions,
) -> AmortizationResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let (periodic_rate, periodic_payment) = solve(terms, options)?;
    debug!(
        "amortizing {} over {} periods at {} per period, instalment {}",
        terms.principal, terms.total_periods, periodic_rate, periodic_payment
    );

    let schedule = schedule::generate_schedule(
        terms.principal,
        periodic_rate,
        terms.total_periods,
        periodic_payment,
        options,
    )?;

    let generated = schedule.len() as u32;
    if generated < terms.total_periods {
        warn!(
            "loan paid off early at period {generated} of {}",
            terms.total_periods
        );
        warnings.push(format!(
            "Balance reached zero at period {generated} of {}; remaining periods omitted",
            terms.total_periods
        ));
    }

    let mut summary = summary::summarize(terms.principal, periodic_payment, &schedule)?;
    if options.rounding == RoundingPolicy::SummaryOnly {
        summary = summary.rounded(options);
    }

    let output = AmortizationOutput {
        periodic_rate,
        summary,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-installment (annuity) amortization",
        &serde_json::json!({
            "terms": terms,
            "options": options,
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// [`compute_amortization`] with default options.
pub fn compute_amortization_default(
    principal: Money,
    annual_rate_percent: Decimal,
    total_periods: u32,
    periods_per_year: u32,
) -> AmortizationResult<ComputationOutput<AmortizationOutput>> {
    let terms = LoanTerms {
        principal,
        annual_rate_percent,
        total_periods,
        periods_per_year,
    };
    compute_amortization(&terms, &AmortizationOptions::default())
}
