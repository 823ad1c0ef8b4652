use serde_json::Value;

use super::{display, plain, result_of};

/// Print just the instalment, falling back to the first result field.
pub fn print_minimal(value: &Value) {
    let result = result_of(value);

    let payment = result
        .get("periodic_payment")
        .or_else(|| result.get("summary").and_then(|s| s.get("periodic_payment")));
    if let Some(p) = payment {
        println!("{}", display("periodic_payment", p));
        return;
    }

    if let Some((key, val)) = result.as_object().and_then(|m| m.iter().next()) {
        println!("{}: {}", key, plain(val));
        return;
    }

    println!("{}", plain(result));
}
