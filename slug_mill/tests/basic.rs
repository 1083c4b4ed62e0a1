use slug_mill::slugify;

#[test]
fn test_main_scenarios() {
    assert_eq!(slugify("Foo Bar"), "foo-bar");
    assert_eq!(slugify("foo bar baz"), "foo-bar-baz");
    assert_eq!(slugify("foo bar "), "foo-bar");
    assert_eq!(slugify("       foo bar"), "foo-bar");
    assert_eq!(slugify("[foo] [bar]"), "foo-bar");
    assert_eq!(slugify("Foo ÿ"), "foo-y");
    assert_eq!(slugify("FooBar"), "foo-bar");
    assert_eq!(slugify("fooBar"), "foo-bar");
    assert_eq!(slugify("UNICORNS AND RAINBOWS"), "unicorns-and-rainbows");
    assert_eq!(slugify("Foo & Bar"), "foo-and-bar");
    assert_eq!(slugify("Hællæ, hva skjera?"), "haellae-hva-skjera");
    assert_eq!(slugify("Foo Bar2"), "foo-bar2");
    assert_eq!(slugify("I ♥ Dogs"), "i-love-dogs");
    assert_eq!(slugify("Déjà Vu!"), "deja-vu");
    assert_eq!(slugify("fooBar 123 $#%"), "foo-bar-123");
    assert_eq!(slugify("foo🦄"), "foo-unicorn");
    assert_eq!(slugify("🦄🦄🦄"), "unicorn-unicorn-unicorn");
    assert_eq!(slugify("foo&bar"), "foo-and-bar");
}

#[test]
fn test_empty_and_symbol_only_input() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("    "), "");
    assert_eq!(slugify("$#%!"), "");
}

#[test]
fn test_default_output_charset() {
    // With default options the output is lowercase ASCII alphanumerics
    // joined by '-', whatever goes in.
    for input in [
        "Foo Bar!",
        "파티 time 🎉",
        "ÅNGSTRÖM unit",
        "tabs\tand\nnewlines",
        "中文 mixed with English",
    ] {
        let slug = slugify(input);
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "{input:?} produced {slug:?}"
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}

#[test]
fn test_idempotence() {
    for input in [
        "Foo Bar",
        "fooBar 123 $#%",
        "I ♥ 🦄",
        "Déjà Vu!",
        "UNICORNS AND RAINBOWS",
        "ä ö ü ß",
    ] {
        let once = slugify(input);
        assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
    }
}
