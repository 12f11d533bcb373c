//! Key and value transforms, and hstore values holding JSON.
//!
//! Run with: cargo run --example transforms

use serde_hstore::{loads, Dumper, HstoreMap};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let settings = vec![
        ("Theme", " dark "),
        ("Font-Size", "14"),
        ("Nickname", ""),
    ];

    // Normalise keys, trim values and store empty values as NULL
    let mut dumper = Dumper::new()
        .key_map(|k: &str| k.to_lowercase().replace('-', "_"))
        .value_map(|v: &str| {
            let v = v.trim();
            if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        });
    let text = dumper.dumps(settings);
    println!("transformed:\n{}\n", text);

    // Values are plain text, so structured data can ride along as JSON
    let layout = serde_json::json!({ "columns": 2, "sidebar": true });
    let text = Dumper::new().dumps(vec![("layout", layout.to_string())]);
    println!("with JSON value:\n{}\n", text);

    let map: HstoreMap = loads(&text)?;
    let decoded: serde_json::Value = serde_json::from_str(map.get_str("layout").unwrap_or("null"))?;
    assert_eq!(decoded, layout);
    println!("✓ JSON value survived the round-trip");

    Ok(())
}
