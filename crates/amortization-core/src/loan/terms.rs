use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, PaymentFrequency};

fn default_periods_per_year() -> u32 {
    PaymentFrequency::Monthly.periods_per_year()
}

/// Inputs for one amortization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: Money,
    /// Annual nominal rate in percent (12 = 12%)
    pub annual_rate_percent: Decimal,
    /// Number of scheduled payments
    pub total_periods: u32,
    /// Payments per year (12 = monthly)
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate_percent: Decimal, total_periods: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            total_periods,
            periods_per_year: default_periods_per_year(),
        }
    }

    /// Term given in whole years; saturates rather than wrapping on absurd input
    /// so the validator can reject it.
    pub fn from_years(
        principal: Money,
        annual_rate_percent: Decimal,
        years: u32,
        frequency: PaymentFrequency,
    ) -> Self {
        let periods_per_year = frequency.periods_per_year();
        Self {
            principal,
            annual_rate_percent,
            total_periods: years.saturating_mul(periods_per_year),
            periods_per_year,
        }
    }
}
