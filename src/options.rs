//! Configuration options for hstore encoding and decoding.
//!
//! - [`HstoreOptions`]: Main configuration struct
//! - [`NullToken`]: How the decoder recognises an unquoted `NULL` value
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{loads_with_options, HstoreOptions, NullToken, Pair};
//!
//! let options = HstoreOptions::new().with_null_token(NullToken::Strict);
//! let pairs: Vec<Pair> = loads_with_options(r#""a"=>NULL"#, &options).unwrap();
//! assert_eq!(pairs, vec![("a".to_string(), None)]);
//!
//! // Strict mode rejects anything that merely starts with `n`
//! let result: Result<Vec<Pair>, _> = loads_with_options(r#""a"=>nope"#, &options);
//! assert!(result.is_err());
//! ```

/// How the decoder recognises a null value.
///
/// PostgreSQL writes null values as a bare `NULL`. The decoder has always
/// treated any unquoted `N` or `n` after a key as the start of that token
/// without checking the rest of it; [`NullToken::Lenient`] keeps that
/// behavior, [`NullToken::Strict`] requires all four letters.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::NullToken;
///
/// assert_eq!(NullToken::default(), NullToken::Lenient);
/// assert_eq!(NullToken::Strict.as_str(), "NULL");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NullToken {
    /// A single `N`/`n` marks the value as null.
    #[default]
    Lenient,
    /// The value must be `NULL`, compared ASCII case-insensitively.
    Strict,
}

impl NullToken {
    /// Returns the canonical spelling written by the encoder.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        "NULL"
    }

    /// Number of bytes consumed once a null token has been recognised at the
    /// start of `rest`, or `None` if `rest` is not accepted as a null token.
    pub(crate) fn match_len(&self, rest: &[u8]) -> Option<usize> {
        match self {
            NullToken::Lenient => match rest.first() {
                Some(b'N' | b'n') => Some(1),
                _ => None,
            },
            NullToken::Strict => {
                let token = self.as_str().as_bytes();
                match rest.get(..token.len()) {
                    Some(head) if head.eq_ignore_ascii_case(token) => Some(token.len()),
                    _ => None,
                }
            }
        }
    }
}

/// Configuration options for hstore encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_hstore::{HstoreOptions, NullToken};
///
/// // Defaults: lenient null sniffing, no scalar coercion
/// let options = HstoreOptions::new();
/// assert_eq!(options.null_token, NullToken::Lenient);
/// assert!(!options.coerce_scalars);
///
/// // Render numbers and booleans as text when serializing structs
/// let options = HstoreOptions::new().with_coerce_scalars(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HstoreOptions {
    pub null_token: NullToken,
    pub coerce_scalars: bool,
}

impl HstoreOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that accept only a complete `NULL` token and refuse to
    /// coerce non-text scalars.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::{HstoreOptions, NullToken};
    ///
    /// let options = HstoreOptions::strict();
    /// assert_eq!(options.null_token, NullToken::Strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        HstoreOptions {
            null_token: NullToken::Strict,
            coerce_scalars: false,
        }
    }

    /// Sets how the decoder recognises null values.
    #[must_use]
    pub fn with_null_token(mut self, null_token: NullToken) -> Self {
        self.null_token = null_token;
        self
    }

    /// Sets whether booleans and numbers are written as their text
    /// form by the serde serializer instead of being rejected.
    #[must_use]
    pub fn with_coerce_scalars(mut self, coerce: bool) -> Self {
        self.coerce_scalars = coerce;
        self
    }
}
