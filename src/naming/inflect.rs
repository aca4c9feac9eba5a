//! English noun inflection used to derive resource names.

/// Pluggable singular/plural naming service
///
/// Implementations must be idempotent in the sense the resolver relies on:
/// `singularize(pluralize(singularize(w))) == singularize(w)` for every word
/// they are expected to handle. Route declarations are resolved once at
/// startup, so implementations are free to be simple and allocation heavy.
pub trait Inflector: Send + Sync {
    /// Singular form of `word` (already lower-cased by the caller)
    fn singularize(&self, word: &str) -> String;

    /// Plural form of `word` (already lower-cased by the caller)
    fn pluralize(&self, word: &str) -> String;
}

/// Words whose singular and plural forms are identical
const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
];

/// (singular, plural) pairs the suffix rules get wrong
///
/// Nouns ending in `che` are listed because `ches` otherwise reads as a
/// `ch` stem plus `es` (`churches`).
const IRREGULAR: &[(&str, &str)] = &[
    ("ache", "aches"),
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("avalanche", "avalanches"),
    ("bus", "buses"),
    ("cache", "caches"),
    ("campus", "campuses"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("headache", "headaches"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("mouse", "mice"),
    ("moustache", "moustaches"),
    ("movie", "movies"),
    ("niche", "niches"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("shelf", "shelves"),
    ("status", "statuses"),
    ("thesis", "theses"),
    ("tooth", "teeth"),
    ("virus", "viruses"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Endings that take `es` in the plural (and lose it again when singularized)
const SIBILANT_ENDINGS: &[&str] = &["ss", "sh", "ch", "x", "zz"];

/// Rule-based English inflector
///
/// Irregular pairs and uncountable nouns are matched on the whole word;
/// everything else goes through a small set of suffix rules:
///
/// - consonant + `y` ↔ `ies` (`category` ↔ `categories`)
/// - `ss`/`sh`/`ch`/`x`/`zz` ↔ `+es` (`box` ↔ `boxes`)
/// - anything else ↔ `+s`
///
/// A stem that lands on an irregular plural is singularized once more
/// (`mens` → `man`). A plural that would not singularize back to its input
/// (`cooky` → `cookies` → `cookie`) is replaced by a plain `+s` or `+es`
/// form, or by the word itself when neither round-trips.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Byte before a suffix of length `suffix_len`, if any
fn byte_before(word: &str, suffix_len: usize) -> Option<u8> {
    word.len()
        .checked_sub(suffix_len + 1)
        .and_then(|i| word.as_bytes().get(i).copied())
}

fn irregular_singular(word: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(_, plural)| *plural == word)
        .map(|(singular, _)| *singular)
}

fn irregular_plural(word: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(singular, _)| *singular == word)
        .map(|(_, plural)| *plural)
}

fn suffix_singular(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if byte_before(word, 3).is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if SIBILANT_ENDINGS.iter().any(|end| stem.ends_with(end)) {
            return stem.to_string();
        }
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn suffix_plural(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        if byte_before(word, 1).is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    if SIBILANT_ENDINGS.iter().any(|end| word.ends_with(end)) || word.ends_with('s') {
        return format!("{word}es");
    }
    format!("{word}s")
}

impl Inflector for EnglishInflector {
    fn singularize(&self, word: &str) -> String {
        if UNCOUNTABLE.contains(&word) {
            return word.to_string();
        }
        if let Some(singular) = irregular_singular(word) {
            return singular.to_string();
        }
        if irregular_plural(word).is_some() {
            return word.to_string();
        }

        let stem = suffix_singular(word);
        match irregular_singular(&stem) {
            Some(singular) => singular.to_string(),
            None => stem,
        }
    }

    fn pluralize(&self, word: &str) -> String {
        if UNCOUNTABLE.contains(&word) {
            return word.to_string();
        }
        if let Some(plural) = irregular_plural(word) {
            return plural.to_string();
        }
        if irregular_singular(word).is_some() {
            return word.to_string();
        }

        [suffix_plural(word), format!("{word}s"), format!("{word}es")]
            .into_iter()
            .find(|plural| self.singularize(plural) == word)
            .unwrap_or_else(|| word.to_string())
    }
}
