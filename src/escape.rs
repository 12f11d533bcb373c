//! Backslash escaping for quoted hstore literals.
//!
//! Inside a quoted key or value, `"` and `\` are written as `\"` and `\\`.
//! [`escape`] produces the literal body (without the surrounding quotes) and
//! [`unescape`] reverses it.
//!
//! ```rust
//! use serde_hstore::escape::{escape, unescape};
//!
//! assert_eq!(escape(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
//! assert_eq!(unescape(r#"say \"hi\" \\o/"#), r#"say "hi" \o/"#);
//! ```
//!
//! Unescaping is lenient: a backslash in front of any other character is
//! dropped and the character kept, so `\a` reads as `a`.

use std::borrow::Cow;

/// Escapes `s` for use between double quotes.
///
/// Backslashes are doubled first, then quotes are prefixed with a backslash.
/// Returns the input unchanged (borrowed) when there is nothing to escape.
#[must_use]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !needs_escape(s) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    write_escaped(&mut out, s);
    Cow::Owned(out)
}

/// Appends the escaped form of `s` to `out`.
pub fn write_escaped(out: &mut String, s: &str) {
    if !needs_escape(s) {
        out.push_str(s);
        return;
    }
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
}

/// Reverses [`escape`] on a literal body taken from between two quotes.
///
/// `\\` yields one backslash, `\x` yields `x` for any other `x`, and a lone
/// trailing backslash is dropped.
#[must_use]
pub fn unescape(body: &str) -> Cow<'_, str> {
    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            // The escaped character, including a second backslash, is kept verbatim.
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[inline]
fn needs_escape(s: &str) -> bool {
    s.bytes().any(|b| b == b'\\' || b == b'"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_is_borrowed() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert!(matches!(unescape("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn test_escape_orders_backslash_before_quote() {
        assert_eq!(escape("\\\""), "\\\\\\\"");
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("c\\d"), "c\\\\d");
    }

    #[test]
    fn test_unescape_pairs() {
        assert_eq!(unescape("\\\\"), "\\");
        assert_eq!(unescape("\\\\\\\\"), "\\\\");
        assert_eq!(unescape("\\\""), "\"");
        assert_eq!(unescape("some test \\\\\\\""), "some test \\\"");
    }

    #[test]
    fn test_unescape_is_lenient() {
        assert_eq!(unescape("abc\\\"def\\\\ghi\\ajkl"), "abc\"def\\ghiajkl");
        assert_eq!(unescape("trailing\\"), "trailing");
    }

    #[test]
    fn test_roundtrip_awkward_inputs() {
        for s in ["", "\\", "\\\\\\", "\"", "\"\"", "\\\"", "x\\y\"z", "é\\\"ü"] {
            assert_eq!(unescape(&escape(s)), s);
        }
    }

    #[test]
    fn test_write_escaped_appends() {
        let mut out = String::from("\"");
        write_escaped(&mut out, "a\"b");
        out.push('"');
        assert_eq!(out, "\"a\\\"b\"");
    }
}
