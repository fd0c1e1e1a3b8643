use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Locale-style text ordering: letters compare by their base form first, with
/// accents stripped and case folded, then a lowercase letter sorts before its
/// uppercase twin, then raw code points decide.
///
/// Each stage is a lexicographic comparison of a key derived from the string,
/// so the result is a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

/// NFD, combining marks dropped, lowercased.
fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn case_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
