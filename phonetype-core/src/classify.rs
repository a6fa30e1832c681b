//! Dialable character classification
//!
//! A dialable character is an ASCII digit or `+`. Everything else that shows
//! up in a formatted number (space, `-`, `(`, `)`) is a separator.

/// Classification of characters in a phone number buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII digit 0-9
    Digit,
    /// The international prefix marker `+`
    Plus,
    /// Any other character
    Separator,
}

/// Classify a single character
#[inline]
pub fn classify(ch: char) -> CharClass {
    match ch {
        '0'..='9' => CharClass::Digit,
        '+' => CharClass::Plus,
        _ => CharClass::Separator,
    }
}

/// Check if a character is dialable (digit or `+`)
#[inline]
pub fn is_dialable(ch: char) -> bool {
    !is_separator(ch)
}

/// Check if a character is a separator
#[inline]
pub fn is_separator(ch: char) -> bool {
    classify(ch) == CharClass::Separator
}

/// Check if any character in `text` is a separator
pub fn has_separator(text: &str) -> bool {
    text.chars().any(is_separator)
}

/// Count dialable characters in `text`
pub fn dialable_count(text: &str) -> usize {
    text.chars().filter(|&ch| is_dialable(ch)).count()
}

/// Strip everything but ASCII digits
pub fn normalize_digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Strip separators, keeping digits and `+`
pub fn dialable_only(text: &str) -> String {
    text.chars().filter(|&ch| is_dialable(ch)).collect()
}
