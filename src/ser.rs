//! hstore encoding.
//!
//! This module provides the [`Dumper`], which writes ordered `(key, value)`
//! pairs as an hstore string, and the serde [`Serializer`] built on the same
//! pair writer.
//!
//! ## Overview
//!
//! - Every key and non-null value is quoted and escaped
//! - Null values are written as a bare `NULL`
//! - Pairs are joined with `,` and no whitespace, the way PostgreSQL prints them
//! - An empty input produces an empty string
//!
//! ## Usage
//!
//! ```rust
//! use serde_hstore::{dumps, Dumper};
//!
//! assert_eq!(dumps(vec![("a", Some("1")), ("b", None)]), r#""a"=>"1","b"=>NULL"#);
//!
//! let upper = Dumper::new()
//!     .key_map(|k: &str| k.to_uppercase())
//!     .dumps(vec![("a", "b")]);
//! assert_eq!(upper, r#""A"=>"b""#);
//! ```

use crate::escape::write_escaped;
use crate::{Error, HstoreOptions, Pair, Result};
use serde::ser::{self, Impossible, Serialize};
use std::borrow::Cow;
use std::io;
use tracing::debug;

/// Values that can be written as an hstore value: text, or null.
///
/// Implemented for string types (always non-null), `Option`s of them, and
/// references to either, so `&HashMap<String, Option<String>>`,
/// `Vec<(&str, &str)>` and `Vec<(String, Option<String>)>` all encode
/// directly.
pub trait AsScalar {
    /// Returns the value text, or `None` for a null value.
    fn as_scalar(&self) -> Option<&str>;
}

impl AsScalar for str {
    fn as_scalar(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsScalar for String {
    fn as_scalar(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsScalar for Cow<'_, str> {
    fn as_scalar(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: AsRef<str>> AsScalar for Option<T> {
    fn as_scalar(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}

impl<T: AsScalar + ?Sized> AsScalar for &T {
    fn as_scalar(&self) -> Option<&str> {
        (**self).as_scalar()
    }
}

/// Appends one `"key"=>"value"` (or `"key"=>NULL`) pair to `out`.
pub(crate) fn write_pair(out: &mut String, key: &str, value: Option<&str>) {
    out.push('"');
    write_escaped(out, key);
    out.push_str("\"=>");
    match value {
        Some(value) => {
            out.push('"');
            write_escaped(out, value);
            out.push('"');
        }
        None => out.push_str("NULL"),
    }
}

/// Writes pairs as hstore text, optionally transforming keys and values.
///
/// Transforms receive and return plain (unescaped) text. The value transform
/// only sees non-null values and may return `None` to write `NULL`.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::Dumper;
///
/// let mut dumper = Dumper::new()
///     .key_map(|k: &str| format!("app.{}", k))
///     .value_map(|v: &str| if v.is_empty() { None } else { Some(v.trim().to_string()) });
///
/// let text = dumper.dumps(vec![("name", " Alice "), ("nickname", "")]);
/// assert_eq!(text, r#""app.name"=>"Alice","app.nickname"=>NULL"#);
/// ```
pub struct Dumper<K = fn(&str) -> String, V = fn(&str) -> Option<String>> {
    key_map: Option<K>,
    value_map: Option<V>,
}

impl Dumper {
    /// Creates a dumper without transforms.
    #[must_use]
    pub fn new() -> Self {
        Dumper {
            key_map: None,
            value_map: None,
        }
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Dumper<K, V>
where
    K: FnMut(&str) -> String,
    V: FnMut(&str) -> Option<String>,
{
    /// Sets the transform applied to every key before escaping.
    #[must_use]
    pub fn key_map<F>(self, key_map: F) -> Dumper<F, V>
    where
        F: FnMut(&str) -> String,
    {
        Dumper {
            key_map: Some(key_map),
            value_map: self.value_map,
        }
    }

    /// Sets the transform applied to every non-null value before escaping.
    #[must_use]
    pub fn value_map<F>(self, value_map: F) -> Dumper<K, F>
    where
        F: FnMut(&str) -> Option<String>,
    {
        Dumper {
            key_map: self.key_map,
            value_map: Some(value_map),
        }
    }

    /// Encodes `pairs` in order.
    pub fn dumps<I, Key, Val>(&mut self, pairs: I) -> String
    where
        I: IntoIterator<Item = (Key, Val)>,
        Key: AsRef<str>,
        Val: AsScalar,
    {
        let mut out = String::new();
        let count = self.write_pairs(&mut out, pairs);
        debug!(pairs = count, bytes = out.len(), "encoded hstore document");
        out
    }

    /// Encodes `pairs` and writes the result to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn dump<W, I, Key, Val>(&mut self, mut writer: W, pairs: I) -> Result<()>
    where
        W: io::Write,
        I: IntoIterator<Item = (Key, Val)>,
        Key: AsRef<str>,
        Val: AsScalar,
    {
        let text = self.dumps(pairs);
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }

    fn write_pairs<I, Key, Val>(&mut self, out: &mut String, pairs: I) -> usize
    where
        I: IntoIterator<Item = (Key, Val)>,
        Key: AsRef<str>,
        Val: AsScalar,
    {
        let mut count = 0;
        for (key, value) in pairs {
            if count > 0 {
                out.push(',');
            }
            let key = match self.key_map.as_mut() {
                Some(key_map) => Cow::Owned(key_map(key.as_ref())),
                None => Cow::Borrowed(key.as_ref()),
            };
            let value = match (value.as_scalar(), self.value_map.as_mut()) {
                (None, _) => None,
                (Some(text), Some(value_map)) => value_map(text).map(Cow::Owned),
                (Some(text), None) => Some(Cow::Borrowed(text)),
            };
            write_pair(out, &key, value.as_deref());
            count += 1;
        }
        count
    }
}

/// The serde serializer for hstore documents.
///
/// Accepts maps, structs and sequences of `(key, value)` pairs at the top
/// level. Values must be text, `None`/unit (written as `NULL`) or unit enum
/// variants (written as the variant name). Booleans and numbers are rejected
/// with [`Error::TypeMismatch`] unless
/// [`HstoreOptions::coerce_scalars`] is set.
///
/// ```rust
/// use serde::Serialize;
/// use serde_hstore::{HstoreOptions, Serializer};
///
/// let mut serializer = Serializer::new(HstoreOptions::new());
/// vec![("a", Some("1")), ("b", None)].serialize(&mut serializer).unwrap();
/// assert_eq!(serializer.into_inner(), r#""a"=>"1","b"=>NULL"#);
/// ```
pub struct Serializer {
    output: String,
    options: HstoreOptions,
    count: usize,
}

impl Serializer {
    pub fn new(options: HstoreOptions) -> Self {
        Serializer {
            output: String::with_capacity(128),
            options,
            count: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Number of pairs written so far.
    pub fn pairs_written(&self) -> usize {
        self.count
    }

    fn push_pair(&mut self, key: &str, value: Option<&str>) {
        if self.count > 0 {
            self.output.push(',');
        }
        write_pair(&mut self.output, key, value);
        self.count += 1;
    }

    fn scalar(&self) -> ScalarSerializer {
        ScalarSerializer {
            coerce: self.options.coerce_scalars,
        }
    }
}

macro_rules! reject_primitives {
    ($context:literal; $($method:ident: $ty:ty,)*) => {
        $(
            fn $method(self, _v: $ty) -> Result<Self::Ok> {
                Err(Error::unsupported_type(concat!(
                    $context,
                    ", found ",
                    stringify!($ty)
                )))
            }
        )*
    };
}

const DOCUMENT_SHAPE: &str = "an hstore document must be a map, a struct or a sequence of pairs";
const PAIR_SHAPE: &str = "sequence elements must be (key, value) pairs";

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = PairSeqSerializer<'a>;
    type SerializeTuple = PairSeqSerializer<'a>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    reject_primitives! {
        "an hstore document must be a map, a struct or a sequence of pairs";
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::unsupported_type(&format!(
            "{}, found enum variant {}",
            DOCUMENT_SHAPE, variant
        )))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(&format!(
            "{}, found enum variant {}",
            DOCUMENT_SHAPE, variant
        )))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(PairSeqSerializer { ser: self })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(PairSeqSerializer { ser: self })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type(&format!(
            "{}, found tuple struct {}",
            DOCUMENT_SHAPE, name
        )))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!(
            "{}, found enum variant {}",
            DOCUMENT_SHAPE, variant
        )))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            ser: self,
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(StructSerializer { ser: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!(
            "{}, found enum variant {}",
            DOCUMENT_SHAPE, variant
        )))
    }
}

pub struct MapSerializer<'a> {
    ser: &'a mut Serializer,
    current_key: Option<String>,
}

impl<'a> ser::SerializeMap for MapSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_text(key, self.ser.scalar())?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        let value = value
            .serialize(self.ser.scalar())
            .map_err(|e| e.with_key(&key))?;
        self.ser.push_pair(&key, value.as_deref());
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

pub struct StructSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> ser::SerializeStruct for StructSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let value = value
            .serialize(self.ser.scalar())
            .map_err(|e| e.with_key(key))?;
        self.ser.push_pair(key, value.as_deref());
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

pub struct PairSeqSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> PairSeqSerializer<'a> {
    fn push<T>(&mut self, element: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let (key, value) = element.serialize(PairSerializer {
            scalar: self.ser.scalar(),
        })?;
        self.ser.push_pair(&key, value.as_deref());
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for PairSeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for PairSeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

fn key_text<T>(key: &T, scalar: ScalarSerializer) -> Result<String>
where
    T: ?Sized + Serialize,
{
    key.serialize(scalar)?
        .ok_or_else(|| Error::type_mismatch(None, "string key", "NULL"))
}

/// Serializes one `(key, value)` element of a top-level sequence.
struct PairSerializer {
    scalar: ScalarSerializer,
}

impl ser::Serializer for PairSerializer {
    type Ok = Pair;
    type Error = Error;

    type SerializeSeq = PairElementSerializer;
    type SerializeTuple = PairElementSerializer;
    type SerializeTupleStruct = Impossible<Pair, Error>;
    type SerializeTupleVariant = Impossible<Pair, Error>;
    type SerializeMap = Impossible<Pair, Error>;
    type SerializeStruct = Impossible<Pair, Error>;
    type SerializeStructVariant = Impossible<Pair, Error>;

    reject_primitives! {
        "sequence elements must be (key, value) pairs";
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type(&format!("{}, found NULL", PAIR_SHAPE)))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(Error::unsupported_type(&format!("{}, found unit", PAIR_SHAPE)))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, variant)))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, variant)))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(PairElementSerializer::new(self.scalar))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        if len != 2 {
            return Err(Error::unsupported_type(&format!(
                "{}, found a tuple of {}",
                PAIR_SHAPE, len
            )));
        }
        Ok(PairElementSerializer::new(self.scalar))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, name)))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type(&format!("{}, found a map", PAIR_SHAPE)))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, name)))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(&format!("{}, found {}", PAIR_SHAPE, variant)))
    }
}

struct PairElementSerializer {
    scalar: ScalarSerializer,
    key: Option<String>,
    value: Option<Option<String>>,
}

impl PairElementSerializer {
    fn new(scalar: ScalarSerializer) -> Self {
        PairElementSerializer {
            scalar,
            key: None,
            value: None,
        }
    }

    fn element<T>(&mut self, element: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let Some(key) = self.key.as_deref() else {
            self.key = Some(key_text(element, self.scalar)?);
            return Ok(());
        };
        if self.value.is_some() {
            return Err(Error::unsupported_type(&format!(
                "{}, found more than two elements",
                PAIR_SHAPE
            )));
        }
        let value = element
            .serialize(self.scalar)
            .map_err(|e| e.with_key(key))?;
        self.value = Some(value);
        Ok(())
    }

    fn finish(self) -> Result<Pair> {
        match (self.key, self.value) {
            (Some(key), Some(value)) => Ok((key, value)),
            _ => Err(Error::unsupported_type(&format!(
                "{}, found fewer than two elements",
                PAIR_SHAPE
            ))),
        }
    }
}

impl ser::SerializeSeq for PairElementSerializer {
    type Ok = Pair;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl ser::SerializeTuple for PairElementSerializer {
    type Ok = Pair;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// Serializes a single key or value into its text, `None` meaning `NULL`.
#[derive(Clone, Copy)]
struct ScalarSerializer {
    coerce: bool,
}

macro_rules! coerce_primitives {
    ($($method:ident: $ty:ty,)*) => {
        $(
            fn $method(self, v: $ty) -> Result<Self::Ok> {
                if self.coerce {
                    Ok(Some(v.to_string()))
                } else {
                    Err(Error::type_mismatch(None, "string", stringify!($ty)))
                }
            }
        )*
    };
}

const NESTED: &str = "hstore values cannot be nested";

impl ser::Serializer for ScalarSerializer {
    type Ok = Option<String>;
    type Error = Error;

    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = Impossible<Option<String>, Error>;
    type SerializeStruct = Impossible<Option<String>, Error>;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    coerce_primitives! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        let text = std::str::from_utf8(v).map_err(Error::encoding)?;
        Ok(Some(text.to_string()))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Some(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::type_mismatch(None, "string", variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_type(NESTED))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_type(NESTED))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_type(NESTED))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type(NESTED))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_type(NESTED))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_type(NESTED))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type(NESTED))
    }
}
