//! Transliteration Module
//!
//! Per-script letter tables mapping one code point to one ASCII string
//! (possibly a digraph, possibly empty). The tables are flat data: no
//! context-sensitive phonetics, just a deterministic lookup per character.
//!
//! Table order matters. The merge below is first-insertion-wins, and the
//! Turkish rows sit ahead of the generic Latin rows on purpose: observed
//! behavior maps `Ç` to `c`, not `C`, so the Turkish reading of the shared
//! code points must shadow the generic one. Within the data itself each
//! code point appears exactly once, which `tables_have_no_duplicate_rows`
//! enforces.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::emoji;
use crate::options::SlugOptions;

/// German umlauts and eszett expand to digraphs rather than bare vowels.
static GERMAN: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
    ('ẞ', "SS"),
];

/// Turkish letters, capitals included, resolve to lowercase ASCII.
static TURKISH: &[(char, &str)] = &[
    ('İ', "i"),
    ('ı', "i"),
    ('Ş', "s"),
    ('ş', "s"),
    ('Ç', "c"),
    ('ç', "c"),
    ('Ğ', "g"),
    ('ğ', "g"),
];

/// Romanian comma-below letters follow the Turkish convention for capitals.
static ROMANIAN: &[(char, &str)] = &[
    ('ă', "a"),
    ('Ă', "A"),
    ('ș', "s"),
    ('Ș', "s"),
    ('ț', "t"),
    ('Ț', "t"),
];

static VIETNAMESE: &[(char, &str)] = &[
    ('đ', "d"),
    ('Đ', "D"),
    // a with tone marks (plain, breve, and circumflex bases)
    ('ạ', "a"),
    ('ả', "a"),
    ('ấ', "a"),
    ('ầ', "a"),
    ('ẩ', "a"),
    ('ẫ', "a"),
    ('ậ', "a"),
    ('ắ', "a"),
    ('ằ', "a"),
    ('ẳ', "a"),
    ('ẵ', "a"),
    ('ặ', "a"),
    ('Ạ', "A"),
    ('Ả', "A"),
    ('Ấ', "A"),
    ('Ầ', "A"),
    ('Ẩ', "A"),
    ('Ẫ', "A"),
    ('Ậ', "A"),
    ('Ắ', "A"),
    ('Ằ', "A"),
    ('Ẳ', "A"),
    ('Ẵ', "A"),
    ('Ặ', "A"),
    // e
    ('ẹ', "e"),
    ('ẻ', "e"),
    ('ẽ', "e"),
    ('ế', "e"),
    ('ề', "e"),
    ('ể', "e"),
    ('ễ', "e"),
    ('ệ', "e"),
    ('Ẹ', "E"),
    ('Ẻ', "E"),
    ('Ẽ', "E"),
    ('Ế', "E"),
    ('Ề', "E"),
    ('Ể', "E"),
    ('Ễ', "E"),
    ('Ệ', "E"),
    // i
    ('ị', "i"),
    ('ỉ', "i"),
    ('ĩ', "i"),
    ('Ị', "I"),
    ('Ỉ', "I"),
    ('Ĩ', "I"),
    // o (plain, horn, and circumflex bases)
    ('ọ', "o"),
    ('ỏ', "o"),
    ('ố', "o"),
    ('ồ', "o"),
    ('ổ', "o"),
    ('ỗ', "o"),
    ('ộ', "o"),
    ('ớ', "o"),
    ('ờ', "o"),
    ('ở', "o"),
    ('ỡ', "o"),
    ('ợ', "o"),
    ('ơ', "o"),
    ('Ọ', "O"),
    ('Ỏ', "O"),
    ('Ố', "O"),
    ('Ồ', "O"),
    ('Ổ', "O"),
    ('Ỗ', "O"),
    ('Ộ', "O"),
    ('Ớ', "O"),
    ('Ờ', "O"),
    ('Ở', "O"),
    ('Ỡ', "O"),
    ('Ợ', "O"),
    ('Ơ', "O"),
    // u (plain and horn bases)
    ('ụ', "u"),
    ('ủ', "u"),
    ('ũ', "u"),
    ('ứ', "u"),
    ('ừ', "u"),
    ('ử', "u"),
    ('ữ', "u"),
    ('ự', "u"),
    ('ư', "u"),
    ('Ụ', "U"),
    ('Ủ', "U"),
    ('Ũ', "U"),
    ('Ứ', "U"),
    ('Ừ', "U"),
    ('Ử', "U"),
    ('Ữ', "U"),
    ('Ự', "U"),
    ('Ư', "U"),
    // y
    ('ỳ', "y"),
    ('ỵ', "y"),
    ('ỷ', "y"),
    ('ỹ', "y"),
    ('Ỳ', "Y"),
    ('Ỵ', "Y"),
    ('Ỷ', "Y"),
    ('Ỹ', "Y"),
];

static ARABIC: &[(char, &str)] = &[
    ('ء', "e"),
    ('ا', "a"),
    ('أ', "a"),
    ('إ', "i"),
    ('آ', "a"),
    ('ؤ', "w"),
    ('ئ', "y"),
    ('ب', "b"),
    ('ة', "h"),
    ('ت', "t"),
    ('ث', "th"),
    ('ج', "j"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ذ', "dh"),
    ('ر', "r"),
    ('ز', "z"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "d"),
    ('ط', "t"),
    ('ظ', "z"),
    ('ع', "aa"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "q"),
    ('ك', "k"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ه', "h"),
    ('و', "w"),
    ('ى', "a"),
    ('ي', "y"),
    // Arabic-Indic digits
    ('٠', "0"),
    ('١', "1"),
    ('٢', "2"),
    ('٣', "3"),
    ('٤', "4"),
    ('٥', "5"),
    ('٦', "6"),
    ('٧', "7"),
    ('٨', "8"),
    ('٩', "9"),
];

/// Letters (and digits) Persian adds on top of the Arabic script.
static PERSIAN: &[(char, &str)] = &[
    ('پ', "p"),
    ('چ', "ch"),
    ('ژ', "zh"),
    ('ک', "k"),
    ('گ', "g"),
    ('ی', "y"),
    ('۰', "0"),
    ('۱', "1"),
    ('۲', "2"),
    ('۳', "3"),
    ('۴', "4"),
    ('۵', "5"),
    ('۶', "6"),
    ('۷', "7"),
    ('۸', "8"),
    ('۹', "9"),
];

static URDU: &[(char, &str)] = &[
    ('ٹ', "t"),
    ('ڈ', "d"),
    ('ڑ', "r"),
    ('ں', "n"),
    ('ہ', "h"),
    ('ھ', "h"),
    ('ے', "e"),
];

static PASHTO: &[(char, &str)] = &[
    ('ټ', "t"),
    ('ډ', "d"),
    ('ړ', "r"),
    ('ڼ', "n"),
    ('ښ', "x"),
    ('ګ', "g"),
    ('څ', "c"),
    ('ځ', "z"),
    ('ۍ', "ai"),
    ('ې', "e"),
    ('ۀ', "e"),
];

/// Russian Cyrillic. Hard and soft signs map to nothing; digraph targets
/// keep the source letter's case on their first letter only.
static RUSSIAN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ё', "Yo"),
    ('Ж', "Zh"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "Y"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "Kh"),
    ('Ц', "Ts"),
    ('Ч', "Ch"),
    ('Ш', "Sh"),
    ('Щ', "Sch"),
    ('Ъ', ""),
    ('Ы', "Y"),
    ('Ь', ""),
    ('Э', "E"),
    ('Ю', "Yu"),
    ('Я', "Ya"),
];

/// Latin-extended fallback rows: diacritics collapse to the base letter,
/// ligatures to digraphs. Code points with a language-specific reading
/// above (Turkish cedillas, Vietnamese horns, Romanian breve) are absent
/// here so the merge stays unambiguous.
static LATIN: &[(char, &str)] = &[
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Å', "A"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('å', "a"),
    ('Æ', "AE"),
    ('æ', "ae"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('Ð', "D"),
    ('ð', "d"),
    ('Ñ', "N"),
    ('ñ', "n"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ø', "O"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ø', "o"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('Ý', "Y"),
    ('ý', "y"),
    ('Ÿ', "Y"),
    ('ÿ', "y"),
    ('Þ', "Th"),
    ('þ', "th"),
    ('Œ', "Oe"),
    ('œ', "oe"),
    ('Š', "S"),
    ('š', "s"),
    ('Ž', "Z"),
    ('ž', "z"),
    ('Ā', "A"),
    ('ā', "a"),
    ('Ē', "E"),
    ('ē', "e"),
    ('Ī', "I"),
    ('ī', "i"),
    ('Ō', "O"),
    ('ō', "o"),
    ('Ū', "U"),
    ('ū', "u"),
    ('Ą', "A"),
    ('ą', "a"),
    ('Ę', "E"),
    ('ę', "e"),
    ('Ė', "E"),
    ('ė', "e"),
    ('Į', "I"),
    ('į', "i"),
    ('Ų', "U"),
    ('ų', "u"),
    ('Ĉ', "C"),
    ('ĉ', "c"),
    ('Ć', "C"),
    ('ć', "c"),
    ('Č', "C"),
    ('č', "c"),
    ('Ċ', "C"),
    ('ċ', "c"),
    ('Ď', "D"),
    ('ď', "d"),
    ('Ĕ', "E"),
    ('ĕ', "e"),
    ('Ě', "E"),
    ('ě', "e"),
    ('Ĝ', "G"),
    ('ĝ', "g"),
    ('Ġ', "G"),
    ('ġ', "g"),
    ('Ģ', "G"),
    ('ģ', "g"),
    ('Ĥ', "H"),
    ('ĥ', "h"),
    ('Ħ', "H"),
    ('ħ', "h"),
    ('Ĭ', "I"),
    ('ĭ', "i"),
    ('Ĵ', "J"),
    ('ĵ', "j"),
    ('Ķ', "K"),
    ('ķ', "k"),
    ('Ĺ', "L"),
    ('ĺ', "l"),
    ('Ļ', "L"),
    ('ļ', "l"),
    ('Ľ', "L"),
    ('ľ', "l"),
    ('Ł', "L"),
    ('ł', "l"),
    ('Ń', "N"),
    ('ń', "n"),
    ('Ņ', "N"),
    ('ņ', "n"),
    ('Ň', "N"),
    ('ň', "n"),
    ('Ŋ', "Ng"),
    ('ŋ', "ng"),
    ('Ŏ', "O"),
    ('ŏ', "o"),
    ('Ő', "O"),
    ('ő', "o"),
    ('Ŕ', "R"),
    ('ŕ', "r"),
    ('Ř', "R"),
    ('ř', "r"),
    ('Ś', "S"),
    ('ś', "s"),
    ('Ŝ', "S"),
    ('ŝ', "s"),
    ('Ţ', "T"),
    ('ţ', "t"),
    ('Ť', "T"),
    ('ť', "t"),
    ('Ŧ', "T"),
    ('ŧ', "t"),
    ('Ŭ', "U"),
    ('ŭ', "u"),
    ('Ů', "U"),
    ('ů', "u"),
    ('Ű', "U"),
    ('ű', "u"),
    ('Ŵ', "W"),
    ('ŵ', "w"),
    ('Ŷ', "Y"),
    ('ŷ', "y"),
    ('Ź', "Z"),
    ('ź', "z"),
    ('Ż', "Z"),
    ('ż', "z"),
    ('µ', "u"),
];

static TABLES: &[&[(char, &str)]] = &[
    GERMAN, TURKISH, ROMANIAN, VIETNAMESE, ARABIC, PERSIAN, URDU, PASHTO, RUSSIAN, LATIN,
];

lazy_static! {
    static ref LETTER_MAP: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        for table in TABLES {
            for &(ch, replacement) in *table {
                map.entry(ch).or_insert(replacement);
            }
        }
        map
    };
}

/// One pass over `text`, replacing each character with its table entry.
///
/// Lookup order per character: range exemption (kept verbatim), emoji and
/// symbol words, letter tables. Characters with no entry pass through
/// untouched; the normalizer later strips whatever is not a word
/// character, so an unmapped code point is dropped rather than erroring.
pub(crate) fn transliterate(text: &str, options: &SlugOptions) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if options.is_exempt(ch) {
            out.push(ch);
        } else if let Some(word) = emoji::word_for(ch) {
            out.push_str(word);
        } else if let Some(replacement) = LETTER_MAP.get(&ch) {
            out.push_str(replacement);
        } else {
            out.push(ch);
        }
    }
    out
}
