use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use amortization_core::loan::views::SchedulePage;
use amortization_core::loan::{
    self, AmortizationOptions, LoanTerms, RoundingPolicy, ValidationPolicy,
};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoundingArg {
    Exact,
    PerPeriod,
    SummaryOnly,
}

impl From<RoundingArg> for RoundingPolicy {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::Exact => RoundingPolicy::Exact,
            RoundingArg::PerPeriod => RoundingPolicy::PerPeriod,
            RoundingArg::SummaryOnly => RoundingPolicy::SummaryOnly,
        }
    }
}

/// JSON request body accepted via --input or stdin.
#[derive(Debug, Deserialize)]
struct LoanRequest {
    terms: LoanTerms,
    #[serde(default)]
    options: AmortizationOptions,
}

/// Loan terms and policies shared by every loan command
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual nominal rate in percent (e.g. 10.5)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Number of payments
    #[arg(long, conflicts_with = "years")]
    pub periods: Option<u32>,

    /// Term in whole years (multiplied by --periods-per-year)
    #[arg(long)]
    pub years: Option<u32>,

    /// Payments per year
    #[arg(long, default_value_t = 12)]
    pub periods_per_year: u32,

    /// Rounding policy
    #[arg(long, value_enum, default_value = "exact")]
    pub rounding: RoundingArg,

    /// Accept a 0% annual rate
    #[arg(long)]
    pub allow_zero_rate: bool,

    /// Currency minor-unit decimal places (0 for VND)
    #[arg(long, default_value_t = 0)]
    pub currency_decimals: u32,
}

impl LoanArgs {
    fn into_request(self) -> Result<(LoanTerms, AmortizationOptions), Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            let req: LoanRequest = input::file::read_json(path)?;
            return Ok((req.terms, req.options));
        }
        if let Some(data) = input::stdin::read_stdin()? {
            let req: LoanRequest = serde_json::from_value(data)?;
            return Ok((req.terms, req.options));
        }
        self.terms_from_flags()
    }

    fn terms_from_flags(&self) -> Result<(LoanTerms, AmortizationOptions), Box<dyn std::error::Error>> {
        let principal = self
            .principal
            .ok_or("--principal is required (or provide --input)")?;
        let annual_rate_percent = self
            .annual_rate
            .ok_or("--annual-rate is required (or provide --input)")?;
        let total_periods = match (self.periods, self.years) {
            (Some(n), _) => n,
            (None, Some(y)) => y.saturating_mul(self.periods_per_year),
            (None, None) => return Err("--periods or --years is required (or provide --input)".into()),
        };

        let terms = LoanTerms {
            principal,
            annual_rate_percent,
            total_periods,
            periods_per_year: self.periods_per_year,
        };
        let options = AmortizationOptions {
            rounding: self.rounding.into(),
            validation: if self.allow_zero_rate {
                ValidationPolicy::lenient()
            } else {
                ValidationPolicy::strict()
            },
            currency_decimals: self.currency_decimals,
        };
        Ok((terms, options))
    }
}

/// Arguments for the full schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Only emit this 0-based page of the schedule
    #[arg(long)]
    pub page: Option<usize>,

    /// Entries per page when --page is given
    #[arg(long, default_value_t = 12)]
    pub page_size: usize,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (terms, options) = args.loan.into_request()?;
    let output = loan::compute_amortization(&terms, &options)?;

    let page = match args.page {
        Some(p) => Some(SchedulePage::of(&output.result.schedule, p, args.page_size)?),
        None => None,
    };

    let mut value = serde_json::to_value(output)?;
    if let Some(page) = page {
        let result = &mut value["result"];
        result["schedule"] = serde_json::to_value(&page.entries)?;
        result["page"] = serde_json::json!({
            "page": page.page,
            "page_size": page.page_size,
            "total_pages": page.total_pages,
            "total_entries": page.total_entries,
        });
    }
    Ok(value)
}

/// Arguments for the payment quote
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (terms, options) = args.loan.into_request()?;
    let result = loan::quote_payment(&terms, &options)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn flags() -> LoanArgs {
        LoanArgs {
            input: None,
            principal: Some(dec!(100000000)),
            annual_rate: Some(dec!(10.5)),
            periods: None,
            years: Some(5),
            periods_per_year: 12,
            rounding: RoundingArg::PerPeriod,
            allow_zero_rate: true,
            currency_decimals: 0,
        }
    }

    #[test]
    fn test_request_from_json_defaults_options() {
        let req: LoanRequest = serde_json::from_str(
            r#"{"terms": {"principal": "1000000", "annual_rate_percent": "12", "total_periods": 12}}"#,
        )
        .unwrap();
        assert_eq!(req.terms.periods_per_year, 12);
        assert_eq!(req.options, AmortizationOptions::default());
    }

    #[test]
    fn test_rounding_arg_conversion() {
        assert_eq!(RoundingPolicy::from(RoundingArg::SummaryOnly), RoundingPolicy::SummaryOnly);
        assert_eq!(RoundingPolicy::from(RoundingArg::PerPeriod), RoundingPolicy::PerPeriod);
    }

    #[test]
    fn test_years_expand_to_periods() {
        let (terms, options) = flags().terms_from_flags().unwrap();
        assert_eq!(terms.total_periods, 60);
        assert_eq!(terms.principal, dec!(100000000));
        assert_eq!(options.rounding, RoundingPolicy::PerPeriod);
        assert!(options.validation.allow_zero_rate);
    }

    #[test]
    fn test_explicit_periods_with_quarterly_frequency() {
        let mut args = flags();
        args.years = None;
        args.periods = Some(20);
        args.periods_per_year = 4;
        args.allow_zero_rate = false;
        let (terms, options) = args.terms_from_flags().unwrap();
        assert_eq!(terms.total_periods, 20);
        assert_eq!(terms.periods_per_year, 4);
        assert_eq!(options.validation, ValidationPolicy::strict());
    }

    #[test]
    fn test_missing_flags() {
        let mut args = flags();
        args.principal = None;
        assert!(args.terms_from_flags().is_err());

        let mut args = flags();
        args.years = None;
        assert!(args.terms_from_flags().is_err());
    }
}
