//! Mapping form of a decoded hstore document.
//!
//! [`HstoreMap`] wraps an [`IndexMap`] so that keys are unique (the last
//! write for a duplicated key wins) while iteration still follows the order
//! in which keys were first seen. That order is a convenience, not part of
//! the hstore format: PostgreSQL itself does not preserve it.
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{loads, HstoreMap};
//!
//! let map: HstoreMap = loads(r#""a"=>"1", "b"=>NULL, "a"=>"2""#).unwrap();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("a"), Some(&Some("2".to_string())));
//! assert_eq!(map.get("b"), Some(&None));
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An ordered map of hstore keys to optional values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HstoreMap(IndexMap<String, Option<String>>);

impl HstoreMap {
    /// Creates an empty `HstoreMap`.
    #[must_use]
    pub fn new() -> Self {
        HstoreMap(IndexMap::new())
    }

    /// Creates an empty `HstoreMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HstoreMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::HstoreMap;
    ///
    /// let mut map = HstoreMap::new();
    /// assert!(map.insert("key".to_string(), Some("1".to_string())).is_none());
    /// assert_eq!(map.insert("key".to_string(), None), Some(Some("1".to_string())));
    /// ```
    pub fn insert(&mut self, key: String, value: Option<String>) -> Option<Option<String>> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// `Some(&None)` means the key is present with a null value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.0.get(key)
    }

    /// Returns the value as a string slice, flattening absent keys and null
    /// values into `None`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Returns `true` if the map contains the key, null or not.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Option<String>> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Option<String>> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Option<String>> {
        self.0.iter()
    }
}

impl From<HashMap<String, Option<String>>> for HstoreMap {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        HstoreMap(map.into_iter().collect())
    }
}

impl From<HstoreMap> for HashMap<String, Option<String>> {
    fn from(map: HstoreMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for HstoreMap {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HstoreMap {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Option<String>)> for HstoreMap {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        HstoreMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Option<String>)> for HstoreMap {
    fn extend<T: IntoIterator<Item = (String, Option<String>)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl Serialize for HstoreMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HstoreMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HstoreMapVisitor;

        impl<'de> Visitor<'de> for HstoreMapVisitor {
            type Value = HstoreMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of strings to optional strings")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<HstoreMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = HstoreMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(HstoreMapVisitor)
    }
}
