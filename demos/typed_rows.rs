//! Mapping hstore columns onto typed structs with Serde.
//!
//! Run with: cargo run --example typed_rows

use serde::{Deserialize, Serialize};
use serde_hstore::{from_str, to_string_with_options, HstoreOptions, NullToken};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
enum Kind {
    City,
    Town,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Place {
    name: String,
    kind: Kind,
    population: u32,
    website: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let rows = [
        r#""name"=>"Oslo", "kind"=>"City", "population"=>"709037", "website"=>"oslo.kommune.no""#,
        r#""name"=>"Røros", "kind"=>"Town", "population"=>"5600", "website"=>NULL"#,
    ];

    let places = rows
        .iter()
        .map(|row| from_str::<Place>(row))
        .collect::<Result<Vec<_>, _>>()?;
    for place in &places {
        println!("{:?}", place);
    }

    // Numbers are only written when coercion is enabled
    let options = HstoreOptions::new()
        .with_null_token(NullToken::Strict)
        .with_coerce_scalars(true);
    let text = to_string_with_options(&places[1], options)?;
    println!("\nserialized: {}", text);

    let back: Place = from_str(&text)?;
    assert_eq!(back, places[1]);
    println!("✓ Round-trip successful");

    Ok(())
}
