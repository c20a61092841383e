//! Word validity.
//!
//! A valid word is a non-empty token made only of letters (general category
//! `L*`, any script), apostrophes and hyphens. Where the apostrophes and
//! hyphens appear does not matter.
//!
//! `char::is_alphabetic` is not used: the Alphabetic property also covers
//! combining vowel signs and letter numerals such as `Ⅻ`.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Whether `c` is a letter (`Lu`, `Ll`, `Lt`, `Lm` or `Lo`).
pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Whether `c` is a letter or a number (`Nd`, `Nl` or `No`).
pub(crate) fn is_letter_or_number(c: char) -> bool {
    is_letter(c)
        || matches!(
            get_general_category(c),
            GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
}

/// Token separator: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whether `token` is a valid word.
#[must_use]
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| is_letter(c) || c == '\'' || c == '-')
}

/// Split `text` on whitespace and keep the valid words, in order.
#[must_use]
pub fn valid_words(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|t| !t.is_empty() && is_word(t))
        .collect()
}
