use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{display, plain, result_of};

const SCHEDULE_HEADERS: [&str; 5] = ["Period", "Starting balance", "Principal", "Interest", "Ending balance"];
const SCHEDULE_KEYS: [&str; 5] = [
    "period",
    "starting_balance",
    "principal_portion",
    "interest_portion",
    "ending_balance",
];

/// Format output as tables using the tabled crate.
///
/// Scalar result fields and the `summary` object go into a Field/Value
/// table; a `schedule` array is printed as its own table underneath.
pub fn print_table(value: &Value) {
    let result = result_of(value);

    match result {
        Value::Object(map) => {
            println!("{}", field_table(map));

            if let Some(Value::Array(schedule)) = map.get("schedule") {
                println!();
                println!("{}", schedule_table(schedule));
            }
        }
        _ => println!("{}", plain(result)),
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        match val {
            Value::Array(_) => continue,
            Value::Object(inner) => {
                for (k, v) in inner {
                    builder.push_record([k.as_str(), &display(k, v)]);
                }
            }
            _ => builder.push_record([key.as_str(), &display(key, val)]),
        }
    }
    builder.build()
}

fn schedule_table(schedule: &[Value]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_HEADERS);
    for entry in schedule {
        let row: Vec<String> = SCHEDULE_KEYS
            .iter()
            .map(|k| entry.get(*k).map(|v| display(k, v)).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    builder.build()
}
