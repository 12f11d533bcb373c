use serde_hstore::{dump, dumps, load, loads, loads_bytes, Dumper, Error, HstoreMap, Pair};
use std::collections::HashMap;
use std::io::Cursor;

fn pair(key: &str, value: Option<&str>) -> Pair {
    (key.to_string(), value.map(str::to_string))
}

#[test]
fn test_empty() {
    let map: HstoreMap = loads("").unwrap();
    assert!(map.is_empty());

    let pairs: Vec<Pair> = loads("").unwrap();
    assert!(pairs.is_empty());

    assert_eq!(dumps(HstoreMap::new()), "");
}

#[test]
fn test_simple() {
    let map: HashMap<String, Option<String>> = loads(r#""key" => "value""#).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["key"].as_deref(), Some("value"));

    let map: HashMap<String, Option<String>> =
        loads(r#""key" => "value", "key2" => "value2""#).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["key2"].as_deref(), Some("value2"));
}

#[test]
fn test_escaped_double_quote() {
    let map: HstoreMap = loads(r#""k\"ey" => "va\"lue""#).unwrap();
    assert_eq!(map.get_str("k\"ey"), Some("va\"lue"));
}

#[test]
fn test_null_spellings() {
    let map: HstoreMap = loads(r#""key" => null"#).unwrap();
    assert_eq!(map.get("key"), Some(&None));

    let map: HstoreMap = loads(r#""key" => NULL"#).unwrap();
    assert_eq!(map.get("key"), Some(&None));

    let pairs: Vec<Pair> = loads(r#""key0" => "value0", "key" => NULL, "key2": "value2""#).unwrap();
    assert_eq!(
        pairs,
        vec![
            pair("key0", Some("value0")),
            pair("key", None),
            pair("key2", Some("value2")),
        ]
    );
}

#[test]
fn test_duplicate_keys() {
    let input = r#""a"=>"1","a"=>"2""#;

    let map: HstoreMap = loads(input).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get_str("a"), Some("2"));

    let pairs: Vec<Pair> = loads(input).unwrap();
    assert_eq!(pairs, vec![pair("a", Some("1")), pair("a", Some("2"))]);
}

#[test]
fn test_utf8_sequence_preserves_order() {
    let input = r#""name"=>"Norge/Noreg", "name:af"=>"Noorweë", "name:ar"=>"النرويج", "name:be"=>"Нарвегія", "name:el"=>"Νορβηγία", "name:ja"=>"ノルウェー", "name:th"=>"ประเทศนอร์เวย์", "name:zh_pyt"=>"Nuówēi", "official_name:vi"=>"Vương quốc Na Uy""#;
    let pairs: Vec<Pair> = loads(input).unwrap();
    assert_eq!(
        pairs,
        vec![
            pair("name", Some("Norge/Noreg")),
            pair("name:af", Some("Noorweë")),
            pair("name:ar", Some("النرويج")),
            pair("name:be", Some("Нарвегія")),
            pair("name:el", Some("Νορβηγία")),
            pair("name:ja", Some("ノルウェー")),
            pair("name:th", Some("ประเทศนอร์เวย์")),
            pair("name:zh_pyt", Some("Nuówēi")),
            pair("official_name:vi", Some("Vương quốc Na Uy")),
        ]
    );
}

#[test]
fn test_decode_failure_key() {
    let result: Result<HstoreMap, Error> = loads_bytes(b"\"\x01\xb6\xc3\xa4\xc3\xa5\"=>\"123\"");
    assert!(matches!(result, Err(Error::Encoding { position: 2, .. })));
}

#[test]
fn test_decode_failure_value() {
    let result: Result<HstoreMap, Error> = loads_bytes(b"\"key\"=>\"\x01\xb6\xc3\xa4\xc3\xa5\"");
    assert!(matches!(result, Err(Error::Encoding { position: 9, .. })));
}

#[test]
fn test_round_trip_double_quotes() {
    let map = serde_hstore::hstore! { "key_\"quoted\"_string" => "value_\"quoted\"_string" };
    let text = dumps(&map);
    assert_eq!(
        text,
        r#""key_\"quoted\"_string"=>"value_\"quoted\"_string""#
    );
    let back: HstoreMap = loads(&text).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_round_trip_escaped_characters() {
    let map = serde_hstore::hstore! { "key_\\escaped\\_string" => "value_\\escaped\\_string" };
    let back: HstoreMap = loads(&dumps(&map)).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_load_escape_with_dquote() {
    let map: HstoreMap = loads(r#""failing"=>"some test \\\"""#).unwrap();
    assert_eq!(map.get_str("failing"), Some("some test \\\""));
}

#[test]
fn test_dumps_hashmap_contains_every_pair() {
    let mut map: HashMap<String, Option<String>> = HashMap::new();
    map.insert("key".to_string(), Some("value".to_string()));
    map.insert("key2".to_string(), Some("value2".to_string()));
    map.insert("key3".to_string(), None);

    let text = dumps(&map);
    let expected = [r#""key"=>"value""#, r#""key2"=>"value2""#, r#""key3"=>NULL"#];
    for fragment in expected {
        assert!(text.contains(fragment), "{} missing from {}", fragment, text);
    }
    assert_eq!(text.len(), expected.join(",").len());
}

#[test]
fn test_key_map_upper() {
    let text = Dumper::new()
        .key_map(|k: &str| k.to_uppercase())
        .dumps(vec![("a", "b")]);
    assert_eq!(text, r#""A"=>"b""#);
}

#[test]
fn test_value_map_json() {
    let values = [("a", serde_json::json!([0, 1, 2])), ("b", serde_json::json!(2))];
    let rendered: Vec<(&str, String)> = values
        .iter()
        .map(|(k, v)| (*k, v.to_string()))
        .collect();
    let text = Dumper::new()
        .value_map(|v: &str| Some(v.replace(',', ", ")))
        .dumps(rendered);
    assert_eq!(text, r#""a"=>"[0, 1, 2]","b"=>"2""#);

    let map: HstoreMap = loads(&text).unwrap();
    let decoded: serde_json::Value = serde_json::from_str(map.get_str("a").unwrap()).unwrap();
    assert_eq!(decoded, serde_json::json!([0, 1, 2]));
}

#[test]
fn test_malformed_input_returns_no_partial_result() {
    let result: Result<Vec<Pair>, Error> = loads(r#""a"=>"1","b"=>"#);
    match result {
        Err(Error::Malformed { position, .. }) => assert_eq!(position, 14),
        other => panic!("expected malformed error, got {:?}", other),
    }
}

#[test]
fn test_stream_helpers() {
    let mut buffer = Vec::new();
    dump(&mut buffer, vec![("a", Some("1")), ("b", None)]).unwrap();
    assert_eq!(buffer, br#""a"=>"1","b"=>NULL"#.to_vec());

    let pairs: Vec<Pair> = load(Cursor::new(buffer)).unwrap();
    assert_eq!(pairs, vec![pair("a", Some("1")), pair("b", None)]);
}
