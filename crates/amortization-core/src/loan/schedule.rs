use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::loan::policy::{AmortizationOptions, RoundingPolicy};
use crate::types::{Money, Rate};
use crate::AmortizationResult;

/// A single period in the amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based period number
    pub period: u32,
    pub starting_balance: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
}

impl AmortizationEntry {
    /// Cash paid in this period. In range for every entry built by
    /// [`generate_schedule`].
    pub fn payment(&self) -> Money {
        self.principal_portion + self.interest_portion
    }
}

/// Build the period-by-period schedule for a fixed instalment.
///
/// The running balance is carried from one period to the next. On the
/// final period, or whenever the nominal principal portion exceeds what is
/// still owed, the principal portion is set to the remaining balance so the
/// schedule always closes at exactly zero. The loop stops as soon as the
/// balance reaches zero, which may be before `total_periods`.
pub fn generate_schedule(
    principal: Money,
    periodic_rate: Rate,
    total_periods: u32,
    periodic_payment: Money,
    options: &AmortizationOptions,
) -> AmortizationResult<Vec<AmortizationEntry>> {
    if principal <= Decimal::ZERO {
        return Err(AmortizationError::Computation(
            "schedule requires a positive principal".into(),
        ));
    }
    if periodic_payment <= Decimal::ZERO {
        return Err(AmortizationError::Computation(format!(
            "periodic payment {periodic_payment} is not positive"
        )));
    }
    if total_periods == 0 {
        return Err(AmortizationError::InvalidInput {
            field: "total_periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    let per_period = options.rounding == RoundingPolicy::PerPeriod;
    let minor_unit = options.minor_unit()?;

    let mut entries = Vec::with_capacity(total_periods as usize);
    let mut balance = principal;

    for period in 1..=total_periods {
        let starting_balance = balance;

        let mut interest_portion = starting_balance
            .checked_mul(periodic_rate)
            .ok_or_else(|| out_of_range(period, "interest"))?;
        if per_period {
            interest_portion = options.round_money(interest_portion);
        }

        let mut principal_portion = periodic_payment
            .checked_sub(interest_portion)
            .ok_or_else(|| out_of_range(period, "principal portion"))?;
        if principal_portion < Decimal::ZERO && period < total_periods {
            return Err(AmortizationError::Computation(format!(
                "period {period}: payment {periodic_payment} does not cover interest {interest_portion}"
            )));
        }

        if period == total_periods || starting_balance < principal_portion {
            principal_portion = starting_balance;
        }

        let mut ending_balance = (starting_balance - principal_portion).max(Decimal::ZERO);

        // Sub-unit residue left by rounding cannot be paid; clear it now.
        if per_period && !ending_balance.is_zero() && ending_balance < minor_unit {
            debug!("period {period}: sweeping residual balance {ending_balance}");
            principal_portion = starting_balance;
            ending_balance = Decimal::ZERO;
        }

        // Keeps AmortizationEntry::payment() in range.
        if principal_portion.checked_add(interest_portion).is_none() {
            return Err(out_of_range(period, "payment"));
        }

        entries.push(AmortizationEntry {
            period,
            starting_balance,
            principal_portion,
            interest_portion,
            ending_balance,
        });

        balance = ending_balance;
        if balance.is_zero() {
            break;
        }
    }

    Ok(entries)
}

fn out_of_range(period: u32, what: &str) -> AmortizationError {
    AmortizationError::Computation(format!("period {period}: {what} exceeds decimal range"))
}
