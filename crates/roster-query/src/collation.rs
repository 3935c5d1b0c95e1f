//! Locale-style string ordering for display names.
//!
//! Compares in levels, the way a collator does for Latin scripts:
//!
//! 1. base letters, ignoring case, Latin accents (precomposed or written as
//!    combining marks) and expanding `ß`, `æ`, `œ`
//! 2. accents (unaccented before accented)
//! 3. case (lowercase before uppercase)
//! 4. raw code points, so distinct strings never compare equal

use std::cmp::Ordering;

/// Compare two strings for human-facing ascending order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_marks(a).cmp(case_marks(b)))
        .then_with(|| a.cmp(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s)
        .filter(|c| !is_combining_mark(*c))
        .flat_map(|c| {
            let (first, second) = expand(strip_accent(c));
            std::iter::once(first).chain(second)
        })
}

/// Combining Diacritical Marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{300}'..='\u{36f}').contains(&c)
}

fn expand(c: char) -> (char, Option<char>) {
    match c {
        'ß' => ('s', Some('s')),
        'æ' => ('a', Some('e')),
        'œ' => ('o', Some('e')),
        other => (other, None),
    }
}

fn case_marks(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn strip_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
