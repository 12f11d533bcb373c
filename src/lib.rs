//! # serde_hstore
//!
//! An encoder and decoder for the PostgreSQL `hstore` text format, with Serde
//! integration.
//!
//! ## What is hstore?
//!
//! `hstore` is PostgreSQL's flat key/value column type. Its text form is a
//! comma-separated list of `"key"=>"value"` pairs; a value may also be the
//! bare token `NULL`. Inside quotes, `"` and `\` are escaped with a
//! backslash:
//!
//! ```text
//! "name"=>"Norge","motto"=>"\"Alt for Norge\"","capital"=>NULL
//! ```
//!
//! There is no nesting: keys and values are always text.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_hstore = "0.1"
//! ```
//!
//! ### Pairs in, pairs out
//!
//! ```rust
//! use serde_hstore::{dumps, loads, HstoreMap, Pair};
//!
//! let text = dumps(vec![("a", Some("1")), ("b", None)]);
//! assert_eq!(text, r#""a"=>"1","b"=>NULL"#);
//!
//! // The target collection picks the shape: a sequence keeps every pair...
//! let pairs: Vec<Pair> = loads(&text).unwrap();
//! assert_eq!(pairs[1], ("b".to_string(), None));
//!
//! // ...a map keeps the last value for each key.
//! let map: HstoreMap = loads(r#""a"=>"1","a"=>"2""#).unwrap();
//! assert_eq!(map.get_str("a"), Some("2"));
//! ```
//!
//! ### Typed structs
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_hstore::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Tags {
//!     name: String,
//!     website: Option<String>,
//! }
//!
//! let tags = Tags { name: "Oslo".to_string(), website: None };
//! let text = to_string(&tags).unwrap();
//! assert_eq!(text, r#""name"=>"Oslo","website"=>NULL"#);
//!
//! let back: Tags = from_str(&text).unwrap();
//! assert_eq!(tags, back);
//! ```
//!
//! ## Decoding rules
//!
//! - Anything between a key and its value is skipped, so `"a" => "1"` and
//!   `"a":"1"` both decode
//! - Text after the last complete pair that contains no quote is ignored
//! - A missing closing quote, or a key with no value before the end of the
//!   input, fails the whole call with [`Error::Malformed`]
//! - By default any unquoted `N`/`n` after a key marks a null value; see
//!   [`NullToken`] for the strict alternative
//!
//! ## Performance Characteristics
//!
//! - **Encoding**: O(n) in the output length
//! - **Decoding**: single pass, O(n) for ordinary input; long runs of
//!   backslashes in front of many quotes degrade to O(n²)
//! - No global state: every call is independent and thread safe

pub mod de;
pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod scan;
pub mod ser;

pub use de::{Deserializer, Parser};
pub use error::{Error, Result};
pub use map::HstoreMap;
pub use options::{HstoreOptions, NullToken};
pub use ser::{AsScalar, Dumper, Serializer};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use tracing::debug;

/// One decoded `(key, value)` entry; `None` is a null value.
pub type Pair = (String, Option<String>);

/// Decodes an hstore string into any collection of pairs.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{loads, Pair};
/// use std::collections::HashMap;
///
/// let pairs: Vec<Pair> = loads(r#""a"=>"1", "a"=>"2""#).unwrap();
/// assert_eq!(pairs.len(), 2);
///
/// let map: HashMap<String, Option<String>> = loads(r#""a"=>"1", "a"=>"2""#).unwrap();
/// assert_eq!(map["a"].as_deref(), Some("2"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Malformed`] if a key or value is unterminated or a key
/// has no value. No partial result is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn loads<C>(input: &str) -> Result<C>
where
    C: FromIterator<Pair>,
{
    de::collect_pairs(input, &HstoreOptions::default())
}

/// Decodes an hstore string with custom options.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the input is not a valid hstore document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn loads_with_options<C>(input: &str, options: &HstoreOptions) -> Result<C>
where
    C: FromIterator<Pair>,
{
    de::collect_pairs(input, options)
}

/// Decodes hstore bytes, which must be valid UTF-8.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{loads_bytes, Error, Pair};
///
/// let pairs: Vec<Pair> = loads_bytes(b"\"k\"=>\"v\"").unwrap();
/// assert_eq!(pairs, vec![("k".to_string(), Some("v".to_string()))]);
///
/// let bad: Result<Vec<Pair>, Error> = loads_bytes(b"\"k\"=>\"\xff\"");
/// assert!(matches!(bad, Err(Error::Encoding { position: 6, .. })));
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] for invalid UTF-8 and [`Error::Malformed`]
/// for invalid hstore.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn loads_bytes<C>(bytes: &[u8]) -> Result<C>
where
    C: FromIterator<Pair>,
{
    let input = std::str::from_utf8(bytes).map_err(Error::encoding)?;
    loads(input)
}

/// Reads and decodes an hstore document from an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the errors of
/// [`loads_bytes`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<R, C>(mut reader: R) -> Result<C>
where
    R: io::Read,
    C: FromIterator<Pair>,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    loads_bytes(&bytes)
}

/// Encodes pairs as an hstore string.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::dumps;
///
/// assert_eq!(dumps(vec![("a\"b", "c\\d")]), r#""a\"b"=>"c\\d""#);
/// assert_eq!(dumps(Vec::<(&str, &str)>::new()), "");
/// ```
#[must_use]
pub fn dumps<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsScalar,
{
    Dumper::new().dumps(pairs)
}

/// Encodes pairs and writes them to `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dump<W, I, K, V>(writer: W, pairs: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsScalar,
{
    Dumper::new().dump(writer, pairs)
}

/// Serialize any flat `T: Serialize` (map, struct or sequence of pairs) to an
/// hstore string.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::to_string;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("a", Some("1"));
/// map.insert("b", None);
/// assert_eq!(to_string(&map).unwrap(), r#""a"=>"1","b"=>NULL"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if a key or value is not text and
/// [`Error::UnsupportedType`] if the value is not flat.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, HstoreOptions::default())
}

/// Serialize any flat `T: Serialize` to an hstore string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{to_string_with_options, HstoreOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let options = HstoreOptions::new().with_coerce_scalars(true);
/// let text = to_string_with_options(&Point { x: 1, y: 2 }, options).unwrap();
/// assert_eq!(text, r#""x"=>"1","y"=>"2""#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as hstore.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: HstoreOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    debug!(
        pairs = serializer.pairs_written(),
        "serialized hstore document"
    );
    Ok(serializer.into_inner())
}

/// Serialize any flat `T: Serialize` to a writer in hstore format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from hstore text.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#""x"=>"1", "y"=>"2""#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid hstore or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &HstoreOptions::default())
}

/// Deserialize an instance of type `T` from hstore text with custom options.
///
/// # Errors
///
/// Returns an error if the input is not valid hstore or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &HstoreOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let deserializer = Deserializer::from_str_with_options(s, options)?;
    T::deserialize(deserializer)
}

/// Deserialize an instance of type `T` from hstore bytes.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the bytes are not valid UTF-8, otherwise the
/// errors of [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(Error::encoding)?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of hstore.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the errors of
/// [`from_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}
