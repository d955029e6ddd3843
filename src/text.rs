//! Word and letter helpers for the Russian and Latin alphabets.

const ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюяabcdefghijklmnopqrstuvwxyz";

// A character counts as a letter when its lowercase form is a single
// alphabet character.
fn char_is_letter(c: char) -> bool {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => ALPHABET.contains(l),
        _ => false,
    }
}

/// `true` if `s` is exactly one Russian or Latin letter, in either case.
///
/// ```
/// assert!(temalib::is_letter("a"));
/// assert!(!temalib::is_letter("5"));
/// assert!(!temalib::is_letter("ab"));
/// ```
pub fn is_letter(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => char_is_letter(c),
        _ => false,
    }
}

/// `true` if every character of `word` is a Russian or Latin letter.
///
/// An empty string counts as a word.
pub fn is_word(word: &str) -> bool {
    word.chars().all(char_is_letter)
}

/// Rewrite every run of letters so it starts with `h` followed by the
/// run's first letter uppercased, with the rest lowercased.
///
/// ```
/// assert_eq!(temalib::h_autocorrect("hello world"), "hHello hWorld");
/// ```
pub fn h_autocorrect(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut run_start = true;
    for c in input.chars() {
        if !char_is_letter(c) {
            out.push(c);
            run_start = true;
        } else if run_start {
            out.push('h');
            out.extend(c.to_uppercase());
            run_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
