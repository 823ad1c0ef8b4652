use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::types::Money;
use crate::AmortizationResult;

/// When monetary figures are rounded to the currency's minor unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Full decimal precision throughout.
    #[default]
    Exact,
    /// Payment and each period's interest are rounded before the split;
    /// a residual balance below one minor unit is paid off immediately.
    PerPeriod,
    /// Schedule kept exact, summary figures rounded.
    SummaryOnly,
}

/// Accepted input ranges for a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Accept a 0% rate (payment becomes principal / periods).
    pub allow_zero_rate: bool,
    /// Inclusive upper bound on the annual rate, in percent.
    pub max_rate_percent: Decimal,
    /// Inclusive upper bound on the term, in years.
    pub max_term_years: u32,
}

impl ValidationPolicy {
    /// Rate must be strictly positive.
    pub fn strict() -> Self {
        Self {
            allow_zero_rate: false,
            max_rate_percent: dec!(100),
            max_term_years: 100,
        }
    }

    /// Same bounds as [`strict`](Self::strict) but a 0% rate is accepted.
    pub fn lenient() -> Self {
        Self {
            allow_zero_rate: true,
            ..Self::strict()
        }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::strict()
    }
}

/// Caller-selected policies for one amortization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmortizationOptions {
    pub rounding: RoundingPolicy,
    pub validation: ValidationPolicy,
    /// Minor-unit decimal places of the currency (0 for VND).
    pub currency_decimals: u32,
}

impl Default for AmortizationOptions {
    fn default() -> Self {
        Self {
            rounding: RoundingPolicy::Exact,
            validation: ValidationPolicy::strict(),
            currency_decimals: 0,
        }
    }
}

impl AmortizationOptions {
    pub fn round_money(&self, amount: Money) -> Money {
        amount.round_dp_with_strategy(self.currency_decimals, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Smallest representable currency amount, e.g. 1 for VND or 0.01 for USD.
    ///
    /// Fails with `InvalidInput` when `currency_decimals` exceeds the decimal
    /// scale limit of 28.
    pub fn minor_unit(&self) -> AmortizationResult<Money> {
        Decimal::try_new(1, self.currency_decimals).map_err(|_| AmortizationError::InvalidInput {
            field: "currency_decimals".into(),
            reason: format!(
                "Currency decimals must be at most {}, got {}",
                Decimal::MAX_SCALE,
                self.currency_decimals
            ),
        })
    }
}
