//! Decamelize Module
//!
//! Splits compound identifiers (`fooBar`, `parseHTTPResponse2Xml`) into
//! separate words by inserting a space wherever a lowercase letter or a
//! digit is immediately followed by an uppercase letter. The inserted
//! space is ordinary whitespace, so the normalizer later treats it like
//! any other word boundary.

use crate::options::SlugOptions;

/// Insert a space at each lowercase/digit → uppercase transition.
///
/// Boundaries are ASCII-only: transliteration has not run yet, and the
/// non-ASCII letters the tables produce digraphs for (`Ж` → `Zh`) must
/// not be split mid-sequence. Range-exempt characters never participate.
pub(crate) fn split_camel_case(text: &str, options: &SlugOptions) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(prev) = prev
            && (prev.is_ascii_lowercase() || prev.is_ascii_digit())
            && ch.is_ascii_uppercase()
            && !options.is_exempt(prev)
            && !options.is_exempt(ch)
        {
            out.push(' ');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}
