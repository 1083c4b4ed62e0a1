//! Emoji & Symbol Words Module
//!
//! Maps symbols and emoji to short English words. Every target is padded
//! with spaces so the substitution always tokenizes as its own word, even
//! when the source character sits flush against letters (`foo🦄` →
//! `foo unicorn ` → `foo-unicorn`).
//!
//! The slices below are the source of truth; the merged map is built once
//! and first insertion wins, so earlier rows shadow later ones.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Symbols with a conventional word reading.
///
/// `%` is deliberately absent: bare symbol runs like `$#%` are expected to
/// vanish from output, so callers who want ` percent ` opt in through a
/// custom replacement.
static SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', " and "),
    ('♥', " love "),
    ('❤', " love "),
    ('♡', " love "),
];

/// Emoji with a single descriptive word (or short phrase).
static EMOJI_WORDS: &[(char, &str)] = &[
    ('🦄', " unicorn "),
    ('🌈', " rainbow "),
    ('🐶', " dog "),
    ('🐱', " cat "),
    ('🐴', " horse "),
    ('🦊', " fox "),
    ('🐻', " bear "),
    ('🐼', " panda "),
    ('🦁', " lion "),
    ('🐸', " frog "),
    ('🐢', " turtle "),
    ('🦋', " butterfly "),
    ('🌞', " sun "),
    ('🌙', " moon "),
    ('⭐', " star "),
    ('🌟', " star "),
    ('⚡', " lightning "),
    ('🔥', " fire "),
    ('❄', " snowflake "),
    ('🌊', " wave "),
    ('🌹', " rose "),
    ('🌲', " tree "),
    ('🍀', " clover "),
    ('🍕', " pizza "),
    ('🍔', " burger "),
    ('🍺', " beer "),
    ('☕', " coffee "),
    ('🎂', " cake "),
    ('🎉', " party "),
    ('🎁', " gift "),
    ('🎸', " guitar "),
    ('🎵', " music "),
    ('🚀', " rocket "),
    ('🚗', " car "),
    ('✈', " airplane "),
    ('⚓', " anchor "),
    ('🏠', " house "),
    ('💡', " idea "),
    ('💰', " money "),
    ('💎', " diamond "),
    ('📚', " books "),
    ('🔑', " key "),
    ('⏰', " alarm clock "),
    ('☂', " umbrella "),
    ('⚽', " soccer "),
    ('🏆', " trophy "),
    ('😀', " smile "),
    ('😂', " joy "),
    ('😎', " cool "),
    ('😢', " cry "),
    ('😡', " angry "),
    ('👍', " thumbs up "),
    ('👎', " thumbs down "),
    ('👋', " wave "),
    ('💪', " muscle "),
    ('💩', " poop "),
    ('👑', " crown "),
    ('💀', " skull "),
    ('👻', " ghost "),
    ('🤖', " robot "),
];

lazy_static! {
    static ref WORD_MAP: HashMap<char, &'static str> = {
        let mut map = HashMap::with_capacity(SYMBOL_WORDS.len() + EMOJI_WORDS.len());
        for &(ch, word) in SYMBOL_WORDS.iter().chain(EMOJI_WORDS.iter()) {
            map.entry(ch).or_insert(word);
        }
        map
    };
}

/// The padded word for `ch`, if it has one.
pub(crate) fn word_for(ch: char) -> Option<&'static str> {
    WORD_MAP.get(&ch).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_space_padded() {
        for &(ch, word) in SYMBOL_WORDS.iter().chain(EMOJI_WORDS.iter()) {
            assert!(
                word.starts_with(' ') && word.ends_with(' '),
                "{ch} maps to unpadded {word:?}"
            );
        }
    }

    #[test]
    fn no_table_row_is_shadowed() {
        // Ambiguous rows would make the first-wins merge silently drop
        // entries, so the slices themselves must be duplicate-free.
        let total = SYMBOL_WORDS.len() + EMOJI_WORDS.len();
        assert_eq!(WORD_MAP.len(), total);
    }

    #[test]
    fn lookups() {
        assert_eq!(word_for('🦄'), Some(" unicorn "));
        assert_eq!(word_for('&'), Some(" and "));
        assert_eq!(word_for('♥'), Some(" love "));
        assert_eq!(word_for('%'), None);
        assert_eq!(word_for('a'), None);
    }
}
