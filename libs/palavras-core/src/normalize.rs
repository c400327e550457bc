//! String normalization shared by answer matching and word search.
//!
//! Two lenient transformations live here:
//! - accent folding (`avião` -> `aviao`)
//! - leading article removal (`le chien` -> `chien`, `a casa` -> `casa`)

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Leading articles, longest first so `de la` wins over shorter prefixes.
///
/// Portuguese: o, a, os, as, um, uma, uns, umas.
/// French: le, la, les, l', un, une, des, du, de la, de l'.
const ARTICLES: &[&str] = &[
    "de la", "de l'", "umas", "uma", "uns", "les", "une", "des", "os", "as", "um", "le", "la",
    "l'", "un", "du", "o", "a",
];

/// Elided forms that attach directly to the next word (`l'obligation`).
const ELIDED_ARTICLES: &[&str] = &["de l'", "l'"];

/// Remove accents by decomposing to NFD and dropping combining marks.
///
/// Input that the platform already decomposed is handled the same way.
pub fn fold_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Strip at most one leading article, then trim.
///
/// An article only counts when it is followed by whitespace or is the whole string.
/// Elided forms are tried last since they have no separator.
pub fn strip_article(s: &str) -> String {
    let s = s.trim().replace('\u{2019}', "'");

    for article in ARTICLES {
        if let Some(rest) = strip_prefix_ignore_case(&s, article) {
            if rest.is_empty() {
                return String::new();
            }
            if rest.starts_with(char::is_whitespace) {
                return rest.trim().to_string();
            }
        }
    }

    for article in ELIDED_ARTICLES {
        if let Some(rest) = strip_prefix_ignore_case(&s, article) {
            return rest.trim().to_string();
        }
    }

    s
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercased, accent-free, whitespace-collapsed key for searching and sorting.
pub fn search_key(s: &str) -> String {
    normalize_whitespace(&fold_accents(&s.to_lowercase()))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
