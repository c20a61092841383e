//! Credit scoring rules.
//!
//! Each rule is a pure function of the message text and the billing
//! parameters. Lengths and positions count Unicode scalar values, including
//! whitespace and punctuation.

use std::collections::HashSet;

use crate::credit::Credit;
use crate::parameters::BillingParameters;
use crate::words::{is_letter_or_number, valid_words};

/// `char_credit_cost` for every character of `text`.
#[must_use]
pub fn character_count_rule(text: &str, params: &BillingParameters) -> Credit {
    params.char_credit_cost() * text.chars().count()
}

/// Tiered cost for each valid word, by word length.
#[must_use]
pub fn word_length_multiplier_rule(text: &str, params: &BillingParameters) -> Credit {
    valid_words(text)
        .into_iter()
        .map(|word| match word.chars().count() {
            1..=3 => params.one_to_three_word_length_cost(),
            4..=7 => params.four_to_seven_word_length_cost(),
            _ => params.eight_plus_word_length_cost(),
        })
        .sum()
}

/// `length_penalty_credits` once `text` is strictly longer than the threshold.
#[must_use]
pub fn length_penalty_rule(text: &str, params: &BillingParameters) -> Credit {
    if text.chars().count() > params.length_penalty_threshold() {
        params.length_penalty_credits()
    } else {
        Credit::zero()
    }
}

/// `unique_words_bonus` when there is at least one valid word and no valid
/// word repeats. Comparison is case-sensitive.
#[must_use]
pub fn unique_words_bonus_rule(text: &str, params: &BillingParameters) -> Credit {
    let words = valid_words(text);
    let mut seen = HashSet::with_capacity(words.len());
    if !words.is_empty() && words.iter().all(|w| seen.insert(*w)) {
        params.unique_words_bonus()
    } else {
        Credit::zero()
    }
}

/// `vowel_cost` for each vowel at a 1-based position divisible by three.
#[must_use]
pub fn vowels_bonus_rule(text: &str, params: &BillingParameters) -> Credit {
    let hits = text
        .chars()
        .enumerate()
        .filter(|&(i, c)| (i + 1) % 3 == 0 && params.is_vowel(c))
        .count();
    params.vowel_cost() * hits
}

/// `palindrome_multiplier` if the lowercased letters and numbers of
/// `text` read the same in both directions, otherwise `1`.
///
/// Text with no letters or numbers is not a palindrome.
#[must_use]
pub fn palindrome_multiplier_rule(text: &str, params: &BillingParameters) -> u32 {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|&c| is_letter_or_number(c))
        .flat_map(char::to_lowercase)
        .collect();

    if !cleaned.is_empty() && cleaned.iter().eq(cleaned.iter().rev()) {
        params.palindrome_multiplier()
    } else {
        1
    }
}
