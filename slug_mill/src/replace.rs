//! Custom Replacement Module
//!
//! Applies caller-supplied substitutions before any built-in table runs,
//! which is what lets a caller override default transliterations (say,
//! `ü` → `ue` vs `u`) or teach the pipeline new symbols. Patterns are
//! always literal substrings; nothing here compiles user input into a
//! pattern language.

use crate::options::SlugOptions;

/// Apply each `(from, to)` pair in list order. Every pair runs as its own
/// left-to-right scan, so later pairs observe the output of earlier ones.
pub(crate) fn apply_custom_replacements(text: &str, options: &SlugOptions) -> String {
    let mut working = text.to_string();
    for (from, to) in &options.custom_replacements {
        working = replace_literal(&working, from, to, options);
    }
    working
}

/// Single left-to-right literal scan. A match that touches a
/// range-exempted character is left alone: exempt code points must reach
/// the output verbatim no matter what replacements are configured.
fn replace_literal(text: &str, from: &str, to: &str, options: &SlugOptions) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find(from) {
        let start = cursor + offset;
        let end = start + from.len();
        out.push_str(&text[cursor..start]);
        if text[start..end].chars().any(|ch| options.is_exempt(ch)) {
            out.push_str(&text[start..end]);
        } else {
            out.push_str(to);
        }
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
