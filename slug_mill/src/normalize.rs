//! Normalize Module
//!
//! The last pipeline stage: case folding, stripping, and joining. Tokens
//! are collected and joined rather than patched in place, so doubled,
//! leading, or trailing separators cannot occur by construction, and the
//! separator works as a literal string of any length (including empty).

use crate::options::SlugOptions;

/// Collapse `text` into separator-joined word tokens.
///
/// A word character is an ASCII alphanumeric or a range-exempt character.
/// Exempt characters are kept verbatim; everything else ends the current
/// token. Non-exempt word characters fold to ASCII lowercase when the
/// `lowercase` option is on. An input with no word characters yields the
/// empty string.
pub(crate) fn normalize(text: &str, options: &SlugOptions) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if options.is_exempt(ch) {
            current.push(ch);
        } else if ch.is_ascii_alphanumeric() {
            current.push(if options.lowercase {
                ch.to_ascii_lowercase()
            } else {
                ch
            });
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens.join(&options.separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::UnicodeRange;

    #[test]
    fn collapses_runs_and_trims_edges() {
        let options = SlugOptions::default();
        assert_eq!(normalize("  foo   bar  ", &options), "foo-bar");
        assert_eq!(normalize("[foo] [bar]", &options), "foo-bar");
        assert_eq!(normalize("!!!", &options), "");
    }

    #[test]
    fn lowercases_only_when_asked() {
        let lower = SlugOptions::default();
        let keep = SlugOptions {
            lowercase: false,
            ..SlugOptions::default()
        };
        assert_eq!(normalize("Foo Bar2", &lower), "foo-bar2");
        assert_eq!(normalize("Foo Bar2", &keep), "Foo-Bar2");
    }

    #[test]
    fn separator_is_a_literal_of_any_length() {
        let dot = SlugOptions {
            separator: ".".to_string(),
            ..SlugOptions::default()
        };
        assert_eq!(normalize("[foo] [bar]", &dot), "foo.bar");

        let wide = SlugOptions {
            separator: "--".to_string(),
            ..SlugOptions::default()
        };
        assert_eq!(normalize("a b", &wide), "a--b");

        let none = SlugOptions {
            separator: String::new(),
            ..SlugOptions::default()
        };
        assert_eq!(normalize("a b c", &none), "abc");
    }

    #[test]
    fn exempt_characters_are_word_characters() {
        let options = SlugOptions {
            unicode_range: Some(UnicodeRange::new(0x4E00, 0x9FFF).unwrap()),
            ..SlugOptions::default()
        };
        assert_eq!(normalize("爱就是答案", &options), "爱就是答案");
        assert_eq!(normalize("foo 爱 bar", &options), "foo-爱-bar");
        // Adjacent exempt and ASCII word characters share a token.
        assert_eq!(normalize("foo爱bar", &options), "foo爱bar");
    }

    #[test]
    fn exempt_characters_dodge_case_folding() {
        // A range over ASCII uppercase proves the exemption beats folding.
        let options = SlugOptions {
            unicode_range: Some(UnicodeRange::new('A' as u32, 'Z' as u32).unwrap()),
            ..SlugOptions::default()
        };
        assert_eq!(normalize("FooBAR", &options), "FooBAR");
        assert_eq!(normalize("Foo bar", &options), "Foo-bar");
    }
}
