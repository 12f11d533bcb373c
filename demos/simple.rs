//! Basic hstore encoding and decoding.
//!
//! Run with: cargo run --example simple

use serde_hstore::{dumps, loads, HstoreMap, Pair};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tags = vec![
        ("name", Some("Norge/Noreg")),
        ("name:ja", Some("ノルウェー")),
        ("motto", Some("\"Alt for Norge\"")),
        ("capital", None),
    ];

    let text = dumps(tags.clone());
    println!("hstore output:\n{}\n", text);

    // Every pair, in order
    let pairs: Vec<Pair> = loads(&text)?;
    for (key, value) in &pairs {
        println!("{:>10} = {}", key, value.as_deref().unwrap_or("NULL"));
    }

    // Last value wins per key
    let map: HstoreMap = loads(r#""a"=>"1", "a"=>"2", "b": NULL"#)?;
    println!("\nmapping form: {:?}", map);
    assert_eq!(map.get_str("a"), Some("2"));

    assert_eq!(pairs.len(), tags.len());
    println!("✓ Round-trip successful");

    Ok(())
}
