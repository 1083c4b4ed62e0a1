#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! slug_mill: turn free text into URL- and filename-safe slugs.
//!
//! The pipeline is a single pass over the input with no I/O and no shared
//! mutable state:
//!
//! 1. caller-supplied literal replacements ([`SlugOptions::custom_replacements`])
//! 2. camelCase splitting ([`SlugOptions::decamelize`])
//! 3. transliteration (emoji and symbol words, then per-script letter tables)
//! 4. normalization (case folding, stripping, separator joining)
//!
//! Characters inside a configured [`UnicodeRange`] skip steps 1-3 entirely
//! and survive normalization verbatim, which lets whole scripts (CJK,
//! Devanagari, ...) pass through untouched.
//!
//! ```
//! use slug_mill::{SlugOptions, slugify, slugify_with};
//!
//! assert_eq!(slugify("I ♥ Dogs"), "i-love-dogs");
//!
//! let options = SlugOptions { separator: "_".into(), ..SlugOptions::default() };
//! assert_eq!(slugify_with("Déjà Vu!", &options).unwrap(), "deja_vu");
//! ```

mod decamelize;
mod emoji;
mod normalize;
pub mod options;
mod replace;
mod translit;

pub use options::{SlugOptions, UnicodeRange};

use thiserror::Error;

pub const SLUG_MILL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration problems reported before any transformation begins.
///
/// Valid text never fails: unmapped characters are dropped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// A custom replacement has an empty `from` string, which would match
    /// everywhere and never terminate a left-to-right scan.
    #[error("custom replacement pattern is empty")]
    EmptyReplacementPattern,
    /// Range bounds were given in the wrong order.
    #[error("unicode range bounds are reversed: {low:#06X} > {high:#06X}")]
    ReversedRange { low: u32, high: u32 },
    /// A range bound is a surrogate or lies beyond U+10FFFF.
    #[error("{0:#06X} is not a valid Unicode scalar value")]
    InvalidCodePoint(u32),
}

/// Slugify `text` with default options.
///
/// Defaults: `-` separator, lowercasing and camelCase splitting on, no
/// custom replacements, no unicode range exemption. The output contains
/// only lowercase ASCII letters, digits, and the separator.
pub fn slugify(text: &str) -> String {
    run_pipeline(text, &SlugOptions::default())
}

/// Slugify `text` with caller-supplied options.
///
/// # Errors
///
/// Returns a [`SlugError`] when the options fail validation (see
/// [`SlugOptions::validate`]). Valid options never fail on any input text.
pub fn slugify_with(text: &str, options: &SlugOptions) -> Result<String, SlugError> {
    options.validate()?;
    Ok(run_pipeline(text, options))
}

/// The pipeline proper. Options must already be validated.
fn run_pipeline(text: &str, options: &SlugOptions) -> String {
    let mut working = replace::apply_custom_replacements(text, options);
    if options.decamelize {
        working = decamelize::split_camel_case(&working, options);
    }
    let transliterated = translit::transliterate(&working, options);
    let slug = normalize::normalize(&transliterated, options);

    if options.preserve_leading_underscore && text.starts_with('_') {
        format!("_{slug}")
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_basics() {
        assert_eq!(slugify("Foo Bar"), "foo-bar");
        assert_eq!(slugify("foo bar baz"), "foo-bar-baz");
        assert_eq!(slugify("[foo] [bar]"), "foo-bar");
        assert_eq!(slugify("Foo & Bar"), "foo-and-bar");
        assert_eq!(slugify("I ♥ Dogs"), "i-love-dogs");
        assert_eq!(slugify("foo🦄"), "foo-unicorn");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   $#%   "), "");
    }

    #[test]
    fn idempotent_under_default_options() {
        for s in ["Foo Bar", "fooBar 123 $#%", "I ♥ 🦄", "Hællæ, hva skjera?"] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once, "re-slugifying {s:?} changed output");
        }
    }

    #[test]
    fn invalid_replacement_rejected_before_transformation() {
        let options = SlugOptions {
            custom_replacements: vec![(String::new(), "x".into())],
            ..SlugOptions::default()
        };
        assert_eq!(
            slugify_with("anything", &options),
            Err(SlugError::EmptyReplacementPattern)
        );
    }

    #[test]
    fn preserve_leading_underscore_flag() {
        let options = SlugOptions {
            preserve_leading_underscore: true,
            ..SlugOptions::default()
        };
        assert_eq!(slugify_with("_foo bar", &options).unwrap(), "_foo-bar");
        assert_eq!(slugify_with("foo bar", &options).unwrap(), "foo-bar");
        // Off by default: the underscore is just another separator run.
        assert_eq!(slugify("_foo bar"), "foo-bar");
    }

    #[test]
    fn version_is_set() {
        assert!(!SLUG_MILL_VERSION.is_empty());
    }
}
