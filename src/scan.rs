//! Delimiter scanning over the raw bytes of an hstore string.
//!
//! Both functions work on byte offsets and return `None` when nothing is
//! found. They never allocate.
//!
//! The delimiters of interest (`"` and `\`) are ASCII, so they never occur
//! inside a multi-byte UTF-8 sequence and every offset returned for a `str`'s
//! bytes is a valid char boundary.
//!
//! Looking backwards over escapes makes [`find_unescaped`] quadratic for
//! inputs with long runs of backslashes before many quotes. Real hstore values
//! do not hit this.

/// Returns the offset of the first `needle` at or after `from`.
#[inline]
#[must_use]
pub fn find_byte(haystack: &[u8], from: usize, needle: u8) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

/// Returns the offset of the first `needle` at or after `from` that is not
/// escaped.
///
/// A `needle` is escaped when it is preceded by an odd number of consecutive
/// backslashes. Backslashes before `from` are not counted.
///
/// ```rust
/// use serde_hstore::scan::find_unescaped;
///
/// let buf = br#"ab\"cd\\"ef"#;
/// assert_eq!(find_unescaped(buf, 0, b'"'), Some(8));
/// assert_eq!(find_unescaped(br#"a\"b"#, 0, b'"'), None);
/// ```
#[must_use]
pub fn find_unescaped(haystack: &[u8], from: usize, needle: u8) -> Option<usize> {
    let mut cursor = from;
    while let Some(found) = find_byte(haystack, cursor, needle) {
        let backslashes = haystack[from..found]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count();
        if backslashes % 2 == 0 {
            return Some(found);
        }
        cursor = found + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_byte() {
        assert_eq!(find_byte(b"abc\"", 0, b'"'), Some(3));
        assert_eq!(find_byte(b"\"abc\"", 1, b'"'), Some(4));
        assert_eq!(find_byte(b"abc", 0, b'"'), None);
        assert_eq!(find_byte(b"", 0, b'"'), None);
    }

    #[test]
    fn test_find_byte_out_of_bounds_start() {
        assert_eq!(find_byte(b"ab", 2, b'a'), None);
        assert_eq!(find_byte(b"ab", 10, b'a'), None);
    }

    #[test]
    fn test_unescaped_plain_quote() {
        assert_eq!(find_unescaped(b"key\"=>", 0, b'"'), Some(3));
    }

    #[test]
    fn test_unescaped_skips_odd_backslashes() {
        assert_eq!(find_unescaped(b"a\\\"b\"", 0, b'"'), Some(4));
        assert_eq!(find_unescaped(b"a\\\\\\\"b\"", 0, b'"'), Some(6));
    }

    #[test]
    fn test_unescaped_accepts_even_backslashes() {
        assert_eq!(find_unescaped(b"a\\\\\"", 0, b'"'), Some(3));
        assert_eq!(find_unescaped(b"\\\\\\\\\"", 0, b'"'), Some(4));
    }

    #[test]
    fn test_unescaped_does_not_count_before_start() {
        // The backslash at offset 0 belongs to the previous span.
        assert_eq!(find_unescaped(b"\\\"", 1, b'"'), Some(1));
    }

    #[test]
    fn test_unescaped_not_found() {
        assert_eq!(find_unescaped(b"a\\\"", 0, b'"'), None);
        assert_eq!(find_unescaped(b"", 0, b'"'), None);
        assert_eq!(find_unescaped(b"abc", 5, b'"'), None);
    }
}
