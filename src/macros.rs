/// Builds an [`HstoreMap`](crate::HstoreMap) from `key => value` entries.
///
/// Values may be any expression convertible into `String`; the bare token
/// `NULL` stores a null value.
///
/// ```rust
/// use serde_hstore::{dumps, hstore};
///
/// let map = hstore! {
///     "name" => "Norge",
///     "population" => 5_550_000.to_string(),
///     "capital" => NULL,
/// };
/// assert_eq!(
///     dumps(&map),
///     r#""name"=>"Norge","population"=>"5550000","capital"=>NULL"#
/// );
/// ```
#[macro_export]
macro_rules! hstore {
    (@insert $map:ident;) => {};

    (@insert $map:ident; $key:expr => NULL $(, $($rest:tt)*)?) => {
        $map.insert(::std::string::String::from($key), ::std::option::Option::None);
        $crate::hstore!(@insert $map; $($($rest)*)?);
    };

    (@insert $map:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $map.insert(
            ::std::string::String::from($key),
            ::std::option::Option::Some(::std::string::String::from($value)),
        );
        $crate::hstore!(@insert $map; $($($rest)*)?);
    };

    // Handle empty map
    () => {
        $crate::HstoreMap::new()
    };

    ($($entries:tt)+) => {{
        let mut map = $crate::HstoreMap::new();
        $crate::hstore!(@insert map; $($entries)+);
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::HstoreMap;

    #[test]
    fn test_hstore_macro_empty() {
        assert_eq!(hstore!(), HstoreMap::new());
    }

    #[test]
    fn test_hstore_macro_entries() {
        let map = hstore! {
            "a" => "1",
            "b" => NULL,
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Some("1".to_string())));
        assert_eq!(map.get("b"), Some(&None));
    }
}
