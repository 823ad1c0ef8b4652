use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmortizationError;
use crate::loan::policy::AmortizationOptions;
use crate::loan::schedule::AmortizationEntry;
use crate::types::Money;
use crate::AmortizationResult;

/// Headline figures for a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub periodic_payment: Money,
    /// Cash actually paid across the generated periods
    pub total_paid: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub periods_generated: u32,
}

impl LoanSummary {
    /// Copy with every monetary figure rounded to the currency's minor unit.
    pub fn rounded(&self, options: &AmortizationOptions) -> Self {
        Self {
            periodic_payment: options.round_money(self.periodic_payment),
            total_paid: options.round_money(self.total_paid),
            total_principal: options.round_money(self.total_principal),
            total_interest: options.round_money(self.total_interest),
            periods_generated: self.periods_generated,
        }
    }
}

/// Totals are summed from the entries themselves, so a shortened or
/// corrected final instalment is reflected exactly. Totals beyond decimal
/// range are a [`AmortizationError::Computation`].
pub fn summarize(
    principal: Money,
    periodic_payment: Money,
    schedule: &[AmortizationEntry],
) -> AmortizationResult<LoanSummary> {
    let total_principal = checked_total(schedule.iter().map(|e| e.principal_portion), "principal")?;
    let interest = checked_total(schedule.iter().map(|e| e.interest_portion), "interest")?;
    let total_paid = total_principal
        .checked_add(interest)
        .ok_or_else(|| too_large("amount paid"))?;
    let total_interest = total_paid
        .checked_sub(principal)
        .ok_or_else(|| too_large("interest"))?;

    Ok(LoanSummary {
        periodic_payment,
        total_paid,
        total_principal,
        total_interest,
        periods_generated: schedule.len() as u32,
    })
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>, what: &str) -> AmortizationResult<Decimal> {
    amounts
        .try_fold(Decimal::ZERO, |acc, x| acc.checked_add(x))
        .ok_or_else(|| too_large(what))
}

fn too_large(what: &str) -> AmortizationError {
    AmortizationError::Computation(format!("total {what} exceeds decimal range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(period: u32, start: Decimal, principal: Decimal, interest: Decimal) -> AmortizationEntry {
        AmortizationEntry {
            period,
            starting_balance: start,
            principal_portion: principal,
            interest_portion: interest,
            ending_balance: start - principal,
        }
    }

    #[test]
    fn test_sums_entries_not_nominal_payment() {
        // Nominal instalment 550, final period shortened to 520.
        let sched = vec![
            entry(1, dec!(1000), dec!(500), dec!(50)),
            entry(2, dec!(500), dec!(500), dec!(20)),
        ];
        let s = summarize(dec!(1000), dec!(550), &sched).unwrap();
        assert_eq!(s.total_paid, dec!(1070));
        assert_eq!(s.total_principal, dec!(1000));
        assert_eq!(s.total_interest, dec!(70));
        assert_eq!(s.periods_generated, 2);
        assert_eq!(s.periodic_payment, dec!(550));
    }

    #[test]
    fn test_empty_schedule() {
        let s = summarize(dec!(1000), dec!(100), &[]).unwrap();
        assert_eq!(s.total_paid, Decimal::ZERO);
        assert_eq!(s.periods_generated, 0);
    }

    #[test]
    fn test_totals_beyond_decimal_range() {
        let sched = vec![entry(1, Decimal::MAX, Decimal::MAX, dec!(1))];
        let err = summarize(Decimal::MAX, Decimal::MAX, &sched).unwrap_err();
        assert!(matches!(err, AmortizationError::Computation(_)));
    }

    #[test]
    fn test_rounded() {
        let s = LoanSummary {
            periodic_payment: dec!(2149390.0378),
            total_paid: dec!(128963402.27),
            total_principal: dec!(100000000),
            total_interest: dec!(28963402.5),
            periods_generated: 60,
        };
        let r = s.rounded(&AmortizationOptions::default());
        assert_eq!(r.periodic_payment, dec!(2149390));
        assert_eq!(r.total_paid, dec!(128963402));
        assert_eq!(r.total_interest, dec!(28963403));
        assert_eq!(r.periods_generated, 60);
    }
}
