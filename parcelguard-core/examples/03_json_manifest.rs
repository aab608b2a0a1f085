//! JSON Manifest Example
//!
//! Sorts parcels described in a JSON document. Each field is taken as a
//! `serde_json::Value` so strings, booleans and nulls reach the validator
//! and fail with the right error kind instead of failing to decode.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_json_manifest --features json
//! ```

use parcelguard_core::{classify_raw, Field, RawMeasurement, SortResult};
use serde_json::Value;

const MANIFEST: &str = r#"[
    {"id": "A-100", "width": 30, "height": 20, "length": 10, "mass": 2.5},
    {"id": "A-101", "width": 100, "height": 100, "length": 100, "mass": 1},
    {"id": "A-102", "width": "150", "height": 100, "length": 100, "mass": 20},
    {"id": "A-103", "width": true, "height": 10, "length": 10, "mass": 1},
    {"id": "A-104", "width": 10, "height": 10, "length": 10}
]"#;

fn sort_entry(entry: &Value) -> SortResult<&'static str> {
    let [width, height, length, mass] = Field::ALL
        .map(|f| entry.get(f.as_str()).map_or(RawMeasurement::Null, RawMeasurement::from));

    classify_raw(width, height, length, mass).map(|category| category.as_str())
}

fn main() {
    println!("ParcelGuard JSON Manifest Example");
    println!("=================================\n");

    let manifest: Vec<Value> = match serde_json::from_str(MANIFEST) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("manifest is not valid JSON: {}", e);
            return;
        }
    };

    for entry in &manifest {
        let id = entry.get("id").and_then(Value::as_str).unwrap_or("?");

        match sort_entry(entry) {
            Ok(label) => println!("{:<8} {}", id, label),
            Err(e) => println!("{:<8} ERROR {:?}: {}", id, e.kind(), e),
        }
    }
}
