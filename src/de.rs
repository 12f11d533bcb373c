//! hstore decoding.
//!
//! This module provides the [`Parser`], a pull iterator over the pairs of an
//! hstore string, and the serde [`Deserializer`] built on top of it.
//!
//! ## Overview
//!
//! - **Single pass**: the input is walked left to right exactly once
//! - **Quote aware**: key and value spans end at the first unescaped `"`
//! - **Lenient separators**: anything between a key and its value (`=>`,
//!   spaces, `:`) is skipped
//! - **All or nothing**: [`loads`](crate::loads) fails the whole call on the
//!   first malformed pair
//!
//! ## Usage
//!
//! ```rust
//! use serde_hstore::{Parser, Pair};
//!
//! let mut parser = Parser::new(r#""a"=>"1", "b"=>NULL"#);
//! assert_eq!(parser.next(), Some(Ok(("a".to_string(), Some("1".to_string())))));
//! assert_eq!(parser.next(), Some(Ok(("b".to_string(), None))));
//! assert_eq!(parser.next(), None);
//! ```

use crate::escape::unescape;
use crate::options::NullToken;
use crate::scan::{find_byte, find_unescaped};
use crate::{Error, HstoreOptions, Pair, Result};
use serde::de::{self, DeserializeSeed, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use tracing::{debug, trace};

/// A pull parser yielding the pairs of an hstore string in order.
///
/// After the first error the parser is exhausted and yields `None`.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    null_token: NullToken,
    failed: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &HstoreOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, options: &HstoreOptions) -> Self {
        Parser {
            input,
            position: 0,
            null_token: options.null_token,
            failed: false,
        }
    }

    /// Byte offset at which the next pair will be searched for.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    fn parse_pair(&mut self) -> Result<Option<Pair>> {
        let bytes = self.input.as_bytes();

        let Some(key_open) = find_byte(bytes, self.position, b'"') else {
            // Trailing residue without a quote is not an error.
            self.position = bytes.len();
            return Ok(None);
        };
        let key_start = key_open + 1;
        let key_end = find_unescaped(bytes, key_start, b'"')
            .ok_or_else(|| Error::malformed(key_open, "unterminated key"))?;

        let mut cursor = key_end + 1;
        let value_span = loop {
            match bytes.get(cursor) {
                Some(b'"') => {
                    let value_start = cursor + 1;
                    let value_end = find_unescaped(bytes, value_start, b'"')
                        .ok_or_else(|| Error::malformed(cursor, "unterminated value"))?;
                    self.position = value_end + 1;
                    break Some((value_start, value_end));
                }
                Some(b'N' | b'n') => {
                    let consumed = self
                        .null_token
                        .match_len(&bytes[cursor..])
                        .ok_or_else(|| Error::malformed(cursor, "expected NULL"))?;
                    self.position = cursor + consumed;
                    break None;
                }
                Some(_) => cursor += 1,
                None => {
                    return Err(Error::malformed(
                        cursor,
                        "expected a quoted value or NULL after key",
                    ))
                }
            }
        };

        let key = unescape(&self.input[key_start..key_end]).into_owned();
        let value = value_span.map(|(start, end)| unescape(&self.input[start..end]).into_owned());
        trace!(offset = key_open, null = value.is_none(), "decoded hstore pair");
        Ok(Some((key, value)))
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Pair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.parse_pair() {
            Ok(pair) => pair.map(Ok),
            Err(err) => {
                debug!(error = %err, "rejected malformed hstore input");
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Decodes a whole document into any collection of pairs.
///
/// The target collection decides the output shape: `Vec<Pair>` keeps every
/// pair in order, map types keep the last value per key.
pub(crate) fn collect_pairs<C>(input: &str, options: &HstoreOptions) -> Result<C>
where
    C: FromIterator<Pair>,
{
    let mut count = 0usize;
    let collected = Parser::with_options(input, options)
        .inspect(|_| count += 1)
        .collect::<Result<C>>()?;
    debug!(pairs = count, bytes = input.len(), "decoded hstore document");
    Ok(collected)
}

/// The serde deserializer for hstore documents.
///
/// The document is decoded up front, so malformed input is reported before
/// any value is visited. It is then presented either as a map (for structs
/// and maps) or as a sequence of `(key, value)` tuples.
pub struct Deserializer {
    pairs: Vec<Pair>,
}

impl Deserializer {
    /// Decodes `input` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if the input is not a valid hstore document.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        Self::from_str_with_options(input, &HstoreOptions::default())
    }

    /// Decodes `input` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if the input is not a valid hstore document.
    pub fn from_str_with_options(input: &str, options: &HstoreOptions) -> Result<Self> {
        Ok(Deserializer {
            pairs: collect_pairs(input, options)?,
        })
    }

    /// Wraps an already-decoded document.
    #[must_use]
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Deserializer { pairs }
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer::new(self.pairs))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(PairSeqDeserializer::new(self.pairs))
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.pairs.is_empty() {
            visitor.visit_unit()
        } else {
            Err(Error::unsupported_type("expected an empty hstore document"))
        }
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit_struct tuple tuple_struct enum identifier
    }
}

struct MapDeserializer {
    iter: std::vec::IntoIter<Pair>,
    value: Option<(String, Option<String>)>,
}

impl MapDeserializer {
    fn new(pairs: Vec<Pair>) -> Self {
        MapDeserializer {
            iter: pairs.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some((key.clone(), value));
                seed.deserialize(ScalarDeserializer::key(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some((key, value)) => seed
                .deserialize(ScalarDeserializer::value(value))
                .map_err(|e| e.with_key(&key)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct PairSeqDeserializer {
    iter: std::vec::IntoIter<Pair>,
}

impl PairSeqDeserializer {
    fn new(pairs: Vec<Pair>) -> Self {
        PairSeqDeserializer {
            iter: pairs.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for PairSeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(pair) => seed.deserialize(PairDeserializer(pair)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Presents one pair as a two-element sequence.
struct PairDeserializer(Pair);

impl<'de> de::Deserializer<'de> for PairDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let (key, value) = self.0;
        visitor.visit_seq(PairElements {
            key: Some(key),
            value: Some(value),
        })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct PairElements {
    key: Option<String>,
    value: Option<Option<String>>,
}

impl<'de> de::SeqAccess<'de> for PairElements {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        if let Some(key) = self.key.take() {
            return seed.deserialize(ScalarDeserializer::key(key)).map(Some);
        }
        match self.value.take() {
            Some(value) => seed.deserialize(ScalarDeserializer::value(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(usize::from(self.key.is_some()) + usize::from(self.value.is_some()))
    }
}

/// Deserializes a single key or value.
///
/// Text is handed to the visitor as a string; primitive targets parse it.
struct ScalarDeserializer {
    value: Option<String>,
}

impl ScalarDeserializer {
    fn key(key: String) -> Self {
        ScalarDeserializer { value: Some(key) }
    }

    fn value(value: Option<String>) -> Self {
        ScalarDeserializer { value }
    }

    fn text(self, expected: &str) -> Result<String> {
        self.value
            .ok_or_else(|| Error::type_mismatch(None, expected, "NULL"))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident : $ty:ty,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: Visitor<'de>,
            {
                let text = self.text(stringify!($ty))?;
                match text.parse::<$ty>() {
                    Ok(parsed) => visitor.$visit(parsed),
                    Err(_) => Err(Error::type_mismatch(
                        None,
                        stringify!($ty),
                        &format!("{:?}", text),
                    )),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ScalarDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Some(text) => visitor.visit_string(text),
            None => visitor.visit_unit(),
        }
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool: bool,
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
        deserialize_char => visit_char: char,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.value.is_some() {
            visitor.visit_some(self)
        } else {
            visitor.visit_none()
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            None => visitor.visit_unit(),
            Some(text) => Err(Error::type_mismatch(None, "NULL", &format!("{:?}", text))),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let text = self.text("enum variant")?;
        visitor.visit_enum(text.into_deserializer())
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("hstore values cannot hold sequences"))
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_type("hstore values cannot hold maps"))
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf tuple tuple_struct struct identifier
    }
}
