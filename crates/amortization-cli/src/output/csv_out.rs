use serde_json::Value;
use std::io;

use super::{plain, result_of};

const SCHEDULE_COLUMNS: [&str; 5] = [
    "period",
    "starting_balance",
    "principal_portion",
    "interest_portion",
    "ending_balance",
];

/// Write output as CSV to stdout.
///
/// A schedule is exported one row per period with unformatted decimal
/// values; anything else becomes a two-column field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let result = result_of(value);

    if let Some(Value::Array(schedule)) = result.get("schedule") {
        write_schedule(&mut wtr, schedule);
    } else if let Value::Object(map) = result {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in map {
            let _ = wtr.write_record([key.as_str(), &plain(val)]);
        }
    } else {
        let _ = wtr.write_record([&plain(result)]);
    }

    let _ = wtr.flush();
}

fn write_schedule<W: io::Write>(wtr: &mut csv::Writer<W>, schedule: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_COLUMNS);
    for entry in schedule {
        let row: Vec<String> = SCHEDULE_COLUMNS
            .iter()
            .map(|c| entry.get(*c).map(plain).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&row);
    }
}
