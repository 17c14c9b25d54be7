//! Test data fixtures.

use serde_json::{Value, json};

/// Three lesson products with distinct text and numeric fields.
pub fn products() -> Vec<Value> {
    vec![
        json!({"subject": "Math", "location": "NYC", "price": 20, "availability": 5}),
        json!({"subject": "English", "location": "London", "price": 15, "availability": 20}),
        json!({"subject": "Music", "location": "Paris", "price": 30.0, "availability": 0}),
    ]
}
