use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::AmortizationError;
use crate::types::{Money, Rate};
use crate::AmortizationResult;

/// Fixed instalment that repays `principal` in exactly `total_periods`
/// equal payments at `periodic_rate` (annuity formula).
///
/// A zero rate degenerates to straight division. Otherwise the payment is
/// `P * r / (1 - v^n)` with discount factor `v = 1 / (1 + r)`; `v^n` only
/// shrinks toward zero, so the full 1200-period range stays representable.
/// An instalment beyond decimal range is reported as
/// [`AmortizationError::Computation`] rather than clamped.
pub fn periodic_payment(
    principal: Money,
    periodic_rate: Rate,
    total_periods: u32,
) -> AmortizationResult<Money> {
    if principal <= Decimal::ZERO {
        return Err(AmortizationError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if total_periods == 0 {
        return Err(AmortizationError::InvalidInput {
            field: "total_periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }
    if periodic_rate < Decimal::ZERO {
        return Err(AmortizationError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "Periodic rate must not be negative".into(),
        });
    }

    let nper = Decimal::from(total_periods);

    if periodic_rate.is_zero() {
        return Ok(principal / nper);
    }

    // Raise v itself: a negative exponent on (1 + r) would still form (1 + r)^n.
    let discount = Decimal::ONE
        .checked_add(periodic_rate)
        .and_then(|growth| Decimal::ONE.checked_div(growth))
        .and_then(|v| v.checked_powi(i64::from(total_periods)))
        .ok_or_else(|| {
            AmortizationError::Computation(format!(
                "discount factor (1 + {periodic_rate})^-{total_periods} is not representable"
            ))
        })?;

    let denominator = Decimal::ONE - discount;
    if denominator <= Decimal::ZERO {
        return Err(AmortizationError::Computation(
            "annuity denominator is zero; periodic rate too small to resolve".into(),
        ));
    }

    let payment = principal
        .checked_mul(periodic_rate)
        .and_then(|interest| interest.checked_div(denominator))
        .ok_or_else(|| {
            AmortizationError::Computation("periodic payment is not representable".into())
        })?;

    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_five_year_monthly_payment() {
        let pmt = periodic_payment(dec!(100000000), dec!(0.00875), 60).unwrap();
        // Annuity at 10.5% / 12 over 60 months: ~2,149,390
        assert!((pmt - dec!(2149390)).abs() < dec!(1), "got {pmt}");
    }

    #[test]
    fn test_thirty_five_year_monthly_payment() {
        let pmt = periodic_payment(dec!(1000000000), dec!(0.01), 420).unwrap();
        assert!((pmt - dec!(10155498)).abs() < dec!(1), "got {pmt}");
    }

    #[test]
    fn test_zero_rate_is_simple_division() {
        let pmt = periodic_payment(dec!(1200000), Decimal::ZERO, 12).unwrap();
        assert_eq!(pmt, dec!(100000));
    }

    #[test]
    fn test_single_period_repays_principal_plus_interest() {
        let pmt = periodic_payment(dec!(1000), dec!(0.05), 1).unwrap();
        assert!((pmt - dec!(1050)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_maximum_rate_over_hundred_years() {
        // 100% annual over 1200 months: v^n vanishes and the payment is the interest.
        let r = Decimal::ONE / dec!(12);
        let pmt = periodic_payment(dec!(1000000), r, 1200).unwrap();
        let interest = dec!(1000000) * r;
        assert!(pmt >= interest);
        assert!((pmt - interest).abs() < dec!(0.0001), "got {pmt}");
    }

    #[test]
    fn test_unrepresentable_payment_is_computation_error() {
        let err = periodic_payment(Decimal::MAX, dec!(0.5), 1).unwrap_err();
        assert!(matches!(err, AmortizationError::Computation(_)));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            periodic_payment(Decimal::ZERO, dec!(0.01), 12),
            Err(AmortizationError::InvalidInput { .. })
        ));
        assert!(matches!(
            periodic_payment(dec!(1000), dec!(0.01), 0),
            Err(AmortizationError::InvalidInput { .. })
        ));
        assert!(matches!(
            periodic_payment(dec!(1000), dec!(-0.01), 12),
            Err(AmortizationError::InvalidInput { .. })
        ));
    }
}
