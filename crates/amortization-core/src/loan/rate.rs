use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::AmortizationError;
use crate::types::Rate;
use crate::AmortizationResult;

/// Convert an annual nominal rate in percent (12 = 12%) into the rate
/// applied to a single payment period.
pub fn periodic_rate(annual_rate_percent: Decimal, periods_per_year: u32) -> AmortizationResult<Rate> {
    if periods_per_year == 0 {
        return Err(AmortizationError::InvalidInput {
            field: "periods_per_year".into(),
            reason: "Payment frequency must be at least one period per year".into(),
        });
    }

    Ok(annual_rate_percent / dec!(100) / Decimal::from(periods_per_year))
}
