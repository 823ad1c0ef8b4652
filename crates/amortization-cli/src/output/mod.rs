pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use amortization_core::format::format_vnd;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Result fields holding currency amounts.
const MONEY_FIELDS: &[&str] = &[
    "periodic_payment",
    "total_paid",
    "total_principal",
    "total_interest",
    "starting_balance",
    "principal_portion",
    "interest_portion",
    "ending_balance",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` object of the computation envelope, or the value itself.
fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Render `value`, formatting known money fields as `1,000 VND`.
fn display(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        let amount = value.as_str().and_then(|s| s.parse::<Decimal>().ok());
        return format_vnd(amount);
    }
    plain(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_fields_get_currency_format() {
        assert_eq!(display("total_paid", &json!("1000000000.4")), "1,000,000,000 VND");
        assert_eq!(display("total_paid", &Value::Null), "N/A");
        assert_eq!(display("period", &json!(7)), "7");
    }

    #[test]
    fn test_result_of_unwraps_envelope() {
        let v = json!({"result": {"a": 1}, "warnings": []});
        assert_eq!(result_of(&v), &json!({"a": 1}));
        assert_eq!(result_of(&json!(3)), &json!(3));
    }
}
