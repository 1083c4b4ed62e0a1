//! Per-script transliteration behavior, checked through the public API
//! with `lowercase: false` and a space separator so letter case and
//! digraphs are visible in the output.

use slug_mill::{SlugOptions, slugify, slugify_with};

fn translit(text: &str) -> String {
    let options = SlugOptions {
        lowercase: false,
        separator: " ".to_string(),
        ..SlugOptions::default()
    };
    slugify_with(text, &options).expect("options should be valid")
}

#[test]
fn test_german_umlauts() {
    assert_eq!(translit("ä ö ü Ä Ö Ü ß"), "ae oe ue Ae Oe Ue ss");
    assert_eq!(slugify("schöne Grüße"), "schoene-gruesse");
}

#[test]
fn test_vietnamese() {
    assert_eq!(translit("ố Ừ Đ"), "o U D");
    assert_eq!(slugify("Việt Nam"), "viet-nam");
}

#[test]
fn test_arabic() {
    assert_eq!(translit("ث س و"), "th s w");
}

#[test]
fn test_persian_farsi() {
    assert_eq!(translit("چ ی پ"), "ch y p");
}

#[test]
fn test_urdu() {
    assert_eq!(translit("ٹ ڈ ھ"), "t d h");
}

#[test]
fn test_pashto() {
    assert_eq!(translit("ګ ړ څ"), "g r c");
}

#[test]
fn test_russian() {
    assert_eq!(translit("Ж п ю"), "Zh p yu");
    assert_eq!(slugify("Привет мир"), "privet-mir");
}

#[test]
fn test_romanian() {
    assert_eq!(translit("ș Ț"), "s t");
}

#[test]
fn test_turkish() {
    assert_eq!(translit("İ ı Ş ş Ç ç Ğ ğ"), "i i s s c c g g");
}

#[test]
fn test_arabic_indic_digits() {
    assert_eq!(slugify("صفحة ٤٢"), "sfhh-42");
}
