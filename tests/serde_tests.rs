use serde::{Deserialize, Serialize};
use serde_hstore::{
    from_reader, from_slice, from_str, to_string, to_string_with_options, to_writer, Error,
    HstoreMap, HstoreOptions,
};
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Place {
    name: String,
    population: u32,
    capital: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Kind {
    City,
    Town,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Tagged {
    name: String,
    kind: Kind,
    note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Flags {
    active: bool,
    grade: char,
    ratio: f64,
}

fn oslo() -> Place {
    Place {
        name: "Oslo".to_string(),
        population: 700_000,
        capital: None,
    }
}

#[test]
fn test_struct_rejects_numbers_by_default() {
    let result = to_string(&oslo());
    match result {
        Err(Error::TypeMismatch {
            key,
            expected,
            found,
        }) => {
            assert_eq!(key.as_deref(), Some("population"));
            assert_eq!(expected, "string");
            assert_eq!(found, "u32");
        }
        other => panic!("expected type mismatch, got {:?}", other),
    }
}

#[test]
fn test_struct_roundtrip_with_coercion() {
    let options = HstoreOptions::new().with_coerce_scalars(true);
    let text = to_string_with_options(&oslo(), options).unwrap();
    assert_eq!(text, r#""name"=>"Oslo","population"=>"700000","capital"=>NULL"#);

    let back: Place = from_str(&text).unwrap();
    assert_eq!(back, oslo());
}

#[test]
fn test_text_only_struct() {
    let tagged = Tagged {
        name: "Bergen".to_string(),
        kind: Kind::City,
        note: Some("rainy".to_string()),
    };
    let text = to_string(&tagged).unwrap();
    assert_eq!(text, r#""name"=>"Bergen","kind"=>"City","note"=>"rainy""#);

    let back: Tagged = from_str(&text).unwrap();
    assert_eq!(back, tagged);
}

#[test]
fn test_unknown_enum_variant() {
    let result: Result<Tagged, Error> = from_str(r#""name"=>"Moss","kind"=>"Village""#);
    assert!(result.is_err());
}

#[test]
fn test_missing_option_field_is_none() {
    let tagged: Tagged = from_str(r#""kind"=>"Town","name"=>"Røros""#).unwrap();
    assert_eq!(
        tagged,
        Tagged {
            name: "Røros".to_string(),
            kind: Kind::Town,
            note: None,
        }
    );
}

#[test]
fn test_missing_required_field() {
    let result: Result<Place, Error> = from_str(r#""name"=>"Oslo""#);
    assert!(result.is_err());
}

#[test]
fn test_parse_failure_carries_key() {
    let result: Result<Place, Error> = from_str(r#""name"=>"Oslo","population"=>"many""#);
    match result {
        Err(Error::TypeMismatch { key, expected, .. }) => {
            assert_eq!(key.as_deref(), Some("population"));
            assert_eq!(expected, "u32");
        }
        other => panic!("expected type mismatch, got {:?}", other),
    }
}

#[test]
fn test_coerced_scalars() {
    let flags = Flags {
        active: true,
        grade: 'A',
        ratio: 1.5,
    };
    assert!(matches!(
        to_string(&flags),
        Err(Error::TypeMismatch { found, .. }) if found == "bool"
    ));

    let options = HstoreOptions::new().with_coerce_scalars(true);
    let text = to_string_with_options(&flags, options).unwrap();
    assert_eq!(text, r#""active"=>"true","grade"=>"A","ratio"=>"1.5""#);

    let back: Flags = from_str(&text).unwrap();
    assert_eq!(back, flags);
}

#[test]
fn test_sequence_of_pairs() {
    let pairs = vec![("a", Some("1")), ("a", Some("2")), ("b", None)];
    let text = to_string(&pairs).unwrap();
    assert_eq!(text, r#""a"=>"1","a"=>"2","b"=>NULL"#);

    let back: Vec<(String, Option<String>)> = from_str(&text).unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(back[1], ("a".to_string(), Some("2".to_string())));
    assert_eq!(back[2], ("b".to_string(), None));
}

#[test]
fn test_btreemap_and_hashmap() {
    let mut map = BTreeMap::new();
    map.insert("x", "1");
    map.insert("y", "2");
    assert_eq!(to_string(&map).unwrap(), r#""x"=>"1","y"=>"2""#);

    let decoded: HashMap<String, u32> = from_str(r#""x"=>"1","y"=>"2""#).unwrap();
    assert_eq!(decoded["y"], 2);
}

#[test]
fn test_null_into_required_string_fails() {
    let result: Result<HashMap<String, String>, Error> = from_str(r#""a"=>NULL"#);
    assert!(result.is_err());
}

#[test]
fn test_nested_values_rejected() {
    #[derive(Serialize)]
    struct WithList {
        tags: Vec<String>,
    }

    let result = to_string(&WithList {
        tags: vec!["a".to_string()],
    });
    assert!(matches!(result, Err(Error::UnsupportedType(_))));
}

#[test]
fn test_top_level_shapes() {
    assert!(matches!(to_string(&42), Err(Error::UnsupportedType(_))));
    assert!(matches!(to_string("text"), Err(Error::UnsupportedType(_))));
    assert_eq!(to_string(&()).unwrap(), "");
    assert_eq!(to_string(&Option::<Place>::None).unwrap(), "");
}

#[test]
fn test_pair_with_three_elements_rejected() {
    let triples = vec![("a", "b", "c")];
    assert!(matches!(
        to_string(&triples),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_hstore_map_serde() {
    let map = serde_hstore::hstore! { "b" => "2", "a" => NULL };
    let text = to_string(&map).unwrap();
    assert_eq!(text, r#""b"=>"2","a"=>NULL"#);

    let back: HstoreMap = from_str(&text).unwrap();
    assert_eq!(back, map);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"b":"2","a":null}"#);
    let from_json: HstoreMap = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, map);
}

#[test]
fn test_byte_and_stream_entry_points() {
    let tagged: Tagged = from_slice(br#""name"=>"Oslo","kind"=>"City""#).unwrap();
    assert_eq!(tagged.kind, Kind::City);

    let bad: Result<Tagged, Error> = from_slice(b"\"name\"=>\"\xff\"");
    assert!(matches!(bad, Err(Error::Encoding { position: 9, .. })));

    let mut buffer = Vec::new();
    to_writer(&mut buffer, &tagged).unwrap();
    let back: Tagged = from_reader(Cursor::new(buffer)).unwrap();
    assert_eq!(back, tagged);
}

#[test]
fn test_malformed_document_fails_before_visiting() {
    let result: Result<HashMap<String, String>, Error> = from_str(r#""a"=>"1","b"=>"#);
    assert!(matches!(result, Err(Error::Malformed { .. })));
}
