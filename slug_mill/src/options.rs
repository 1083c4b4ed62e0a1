//! Options Module
//!
//! Resolves caller configuration into a fully populated, immutable value
//! object. Every field has a default, so callers only name what they want
//! to change; `Deserialize` lets a front end load the same options from a
//! TOML file.

use serde::Deserialize;

use crate::SlugError;

/// An inclusive code-point interval whose members bypass replacement,
/// decamelization, transliteration, and case folding.
///
/// Construct through [`UnicodeRange::new`] so reversed bounds and
/// non-scalar code points are rejected up front. Deserializes from a
/// `[low, high]` pair with the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "(u32, u32)")]
pub struct UnicodeRange {
    low: u32,
    high: u32,
}

impl UnicodeRange {
    /// Build a validated inclusive range `[low, high]`.
    ///
    /// # Errors
    ///
    /// [`SlugError::InvalidCodePoint`] if either bound is a surrogate or
    /// exceeds U+10FFFF; [`SlugError::ReversedRange`] if `low > high`.
    pub fn new(low: u32, high: u32) -> Result<Self, SlugError> {
        if char::from_u32(low).is_none() {
            return Err(SlugError::InvalidCodePoint(low));
        }
        if char::from_u32(high).is_none() {
            return Err(SlugError::InvalidCodePoint(high));
        }
        if low > high {
            return Err(SlugError::ReversedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Whether `ch` falls inside the exempted interval.
    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        self.low <= cp && cp <= self.high
    }
}

impl TryFrom<(u32, u32)> for UnicodeRange {
    type Error = SlugError;

    fn try_from((low, high): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

/// Per-call configuration for [`crate::slugify_with`].
///
/// Immutable once handed to the pipeline; unspecified fields take the
/// defaults shown on each field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    /// Literal string joining output tokens. Default `-`. May be empty
    /// (tokens concatenate) or multi-character; it is never interpreted
    /// as a pattern.
    pub separator: String,
    /// Fold non-exempt word characters to lowercase. Default `true`.
    pub lowercase: bool,
    /// Split camelCase boundaries into separate words. Default `true`.
    pub decamelize: bool,
    /// Ordered literal `(from, to)` substitutions applied before every
    /// built-in table, so callers can override any default mapping.
    /// Default empty.
    pub custom_replacements: Vec<(String, String)>,
    /// Keep a single leading `_` from the input. Default `false`.
    pub preserve_leading_underscore: bool,
    /// Code points to pass through verbatim. Default `None` (no exemption).
    pub unicode_range: Option<UnicodeRange>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            lowercase: true,
            decamelize: true,
            custom_replacements: Vec::new(),
            preserve_leading_underscore: false,
            unicode_range: None,
        }
    }
}

impl SlugOptions {
    /// Fail fast on configuration the pipeline cannot honor.
    ///
    /// # Errors
    ///
    /// [`SlugError::EmptyReplacementPattern`] when any custom replacement
    /// `from` is the empty string. Range bounds are validated at
    /// [`UnicodeRange`] construction, so a populated `unicode_range` is
    /// already sound by the time it lands here.
    pub fn validate(&self) -> Result<(), SlugError> {
        for (from, _) in &self.custom_replacements {
            if from.is_empty() {
                return Err(SlugError::EmptyReplacementPattern);
            }
        }
        Ok(())
    }

    /// Whether `ch` is exempted by the configured unicode range.
    pub(crate) fn is_exempt(&self, ch: char) -> bool {
        self.unicode_range.is_some_and(|range| range.contains(ch))
    }
}
