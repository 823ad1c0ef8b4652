use rust_decimal::Decimal;

use crate::error::{AmortizationError, ValidationErrors};
use crate::loan::policy::ValidationPolicy;
use crate::loan::terms::LoanTerms;
use crate::AmortizationResult;

/// Check every field of `terms` against `policy`.
///
/// Fields are checked independently; all violations are returned together
/// in a single [`AmortizationError::Validation`].
pub fn validate(terms: &LoanTerms, policy: &ValidationPolicy) -> AmortizationResult<()> {
    let mut errors = ValidationErrors::default();

    if terms.principal <= Decimal::ZERO {
        errors.push("principal", "Principal must be greater than zero");
    }

    let rate = terms.annual_rate_percent;
    if policy.allow_zero_rate {
        if rate < Decimal::ZERO {
            errors.push("annual_rate_percent", "Annual rate must not be negative");
        }
    } else if rate <= Decimal::ZERO {
        errors.push("annual_rate_percent", "Annual rate must be greater than zero");
    }
    if rate > policy.max_rate_percent {
        errors.push(
            "annual_rate_percent",
            format!("Annual rate must not exceed {}%", policy.max_rate_percent),
        );
    }

    if terms.total_periods == 0 {
        errors.push("total_periods", "Term must be at least one period");
    }

    if terms.periods_per_year == 0 {
        errors.push(
            "periods_per_year",
            "Payment frequency must be at least one period per year",
        );
    } else {
        let max_periods = u64::from(policy.max_term_years) * u64::from(terms.periods_per_year);
        if u64::from(terms.total_periods) > max_periods {
            errors.push(
                "total_periods",
                format!(
                    "Term must not exceed {} years ({} periods)",
                    policy.max_term_years, max_periods
                ),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AmortizationError::Validation(errors))
    }
}
