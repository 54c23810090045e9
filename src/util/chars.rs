//! Character classification
//!
//! C-locale classification: only ASCII characters are ever classified as
//! anything, so every predicate is false for non-ASCII input.

/// Space, tab, newline, vertical tab, form feed or carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Space or horizontal tab.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// `a-z` or `A-Z`.
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `0-9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `0-9`, `a-f` or `A-F`.
pub fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Alphabetic or digit.
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// ASCII control characters, including DEL.
pub fn is_control(c: char) -> bool {
    c.is_ascii_control()
}

/// Printable characters other than space.
pub fn is_graphical(c: char) -> bool {
    c.is_ascii_graphic()
}

/// Graphical characters and space.
pub fn is_printable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

/// `a-z`.
pub fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// `A-Z`.
pub fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Graphical characters that are not alphanumeric.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}
