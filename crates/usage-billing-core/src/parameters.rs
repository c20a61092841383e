//! Billing parameters consumed by every scoring rule.
//!
//! [`BillingParameters`] can only be obtained through validation (or from its
//! `Default`), so a value in hand is always usable. The serde form goes through
//! [`BillingParametersConfig`] and is validated on deserialization.

use std::collections::BTreeSet;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::credit::Credit;
use crate::error::{BillingError, Result};

/// Vowels recognised by the vowel bonus unless configured otherwise.
pub const DEFAULT_VOWELS: &str = "aeiouAEIOU";

/// Validated, immutable cost constants for credit scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BillingParametersConfig",
    into = "BillingParametersConfig"
)]
pub struct BillingParameters {
    base_credit_cost: Credit,
    char_credit_cost: Credit,
    length_penalty_threshold: usize,
    one_to_three_word_length_cost: Credit,
    four_to_seven_word_length_cost: Credit,
    eight_plus_word_length_cost: Credit,
    length_penalty_credits: Credit,
    unique_words_bonus: Credit,
    palindrome_multiplier: u32,
    vowel_cost: Credit,
    vowels: BTreeSet<char>,
}

impl Default for BillingParameters {
    fn default() -> Self {
        Self {
            base_credit_cost: Credit::from_int(1),
            char_credit_cost: Credit::new(dec!(0.05)),
            length_penalty_threshold: 100,
            one_to_three_word_length_cost: Credit::new(dec!(0.1)),
            four_to_seven_word_length_cost: Credit::new(dec!(0.2)),
            eight_plus_word_length_cost: Credit::new(dec!(0.3)),
            length_penalty_credits: Credit::from_int(5),
            unique_words_bonus: Credit::from_int(2),
            palindrome_multiplier: 2,
            vowel_cost: Credit::new(dec!(0.3)),
            vowels: DEFAULT_VOWELS.chars().collect(),
        }
    }
}

impl BillingParameters {
    /// Flat cost charged for every message before any rule applies.
    #[must_use]
    pub const fn base_credit_cost(&self) -> Credit {
        self.base_credit_cost
    }

    /// Cost per character of message text.
    #[must_use]
    pub const fn char_credit_cost(&self) -> Credit {
        self.char_credit_cost
    }

    /// Texts longer than this many characters incur the length penalty.
    #[must_use]
    pub const fn length_penalty_threshold(&self) -> usize {
        self.length_penalty_threshold
    }

    /// Cost of a valid word of 1 to 3 characters.
    #[must_use]
    pub const fn one_to_three_word_length_cost(&self) -> Credit {
        self.one_to_three_word_length_cost
    }

    /// Cost of a valid word of 4 to 7 characters.
    #[must_use]
    pub const fn four_to_seven_word_length_cost(&self) -> Credit {
        self.four_to_seven_word_length_cost
    }

    /// Cost of a valid word of 8 or more characters.
    #[must_use]
    pub const fn eight_plus_word_length_cost(&self) -> Credit {
        self.eight_plus_word_length_cost
    }

    /// Flat charge for texts over the length threshold.
    #[must_use]
    pub const fn length_penalty_credits(&self) -> Credit {
        self.length_penalty_credits
    }

    /// Discount for texts whose valid words are all distinct.
    #[must_use]
    pub const fn unique_words_bonus(&self) -> Credit {
        self.unique_words_bonus
    }

    /// Factor applied to the whole score of a palindrome.
    #[must_use]
    pub const fn palindrome_multiplier(&self) -> u32 {
        self.palindrome_multiplier
    }

    /// Charge per vowel found at a position divisible by three.
    #[must_use]
    pub const fn vowel_cost(&self) -> Credit {
        self.vowel_cost
    }

    /// The configured vowel set (never empty).
    #[must_use]
    pub const fn vowels(&self) -> &BTreeSet<char> {
        &self.vowels
    }

    /// Whether `c` is in the configured vowel set.
    #[must_use]
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }
}

/// Unvalidated billing parameters, as read from a configuration file.
///
/// Cost fields accept JSON numbers or decimal strings. Integer fields are
/// signed so that negative values are reported as configuration errors
/// rather than parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingParametersConfig {
    /// See [`BillingParameters::base_credit_cost`].
    pub base_credit_cost: Credit,
    /// See [`BillingParameters::char_credit_cost`].
    pub char_credit_cost: Credit,
    /// See [`BillingParameters::length_penalty_threshold`].
    pub length_penalty_threshold: i64,
    /// See [`BillingParameters::one_to_three_word_length_cost`].
    pub one_to_three_word_length_cost: Credit,
    /// See [`BillingParameters::four_to_seven_word_length_cost`].
    pub four_to_seven_word_length_cost: Credit,
    /// See [`BillingParameters::eight_plus_word_length_cost`].
    pub eight_plus_word_length_cost: Credit,
    /// See [`BillingParameters::length_penalty_credits`].
    pub length_penalty_credits: Credit,
    /// See [`BillingParameters::unique_words_bonus`].
    pub unique_words_bonus: Credit,
    /// See [`BillingParameters::palindrome_multiplier`].
    pub palindrome_multiplier: i64,
    /// See [`BillingParameters::vowel_cost`].
    pub vowel_cost: Credit,
    /// Every character of this string is a vowel.
    #[serde(default = "default_vowels")]
    pub vowels: String,
}

fn default_vowels() -> String {
    DEFAULT_VOWELS.to_string()
}

impl Default for BillingParametersConfig {
    fn default() -> Self {
        BillingParameters::default().into()
    }
}

impl TryFrom<BillingParametersConfig> for BillingParameters {
    type Error = BillingError;

    fn try_from(config: BillingParametersConfig) -> Result<Self> {
        let length_penalty_threshold = usize::try_from(config.length_penalty_threshold)
            .map_err(|_| {
                BillingError::Configuration(format!(
                    "length penalty threshold cannot be negative: {}",
                    config.length_penalty_threshold
                ))
            })?;

        if config.palindrome_multiplier < 0 {
            return Err(BillingError::Configuration(format!(
                "palindrome multiplier cannot be negative: {}",
                config.palindrome_multiplier
            )));
        }
        let palindrome_multiplier = u32::try_from(config.palindrome_multiplier).map_err(|_| {
            BillingError::Configuration(format!(
                "palindrome multiplier is too large: {}",
                config.palindrome_multiplier
            ))
        })?;

        let vowels: BTreeSet<char> = config.vowels.chars().collect();
        if vowels.is_empty() {
            return Err(BillingError::Configuration(
                "vowel set cannot be empty".into(),
            ));
        }

        Ok(Self {
            base_credit_cost: config.base_credit_cost,
            char_credit_cost: config.char_credit_cost,
            length_penalty_threshold,
            one_to_three_word_length_cost: config.one_to_three_word_length_cost,
            four_to_seven_word_length_cost: config.four_to_seven_word_length_cost,
            eight_plus_word_length_cost: config.eight_plus_word_length_cost,
            length_penalty_credits: config.length_penalty_credits,
            unique_words_bonus: config.unique_words_bonus,
            palindrome_multiplier,
            vowel_cost: config.vowel_cost,
            vowels,
        })
    }
}

impl From<BillingParameters> for BillingParametersConfig {
    fn from(params: BillingParameters) -> Self {
        Self {
            base_credit_cost: params.base_credit_cost,
            char_credit_cost: params.char_credit_cost,
            length_penalty_threshold: i64::try_from(params.length_penalty_threshold)
                .unwrap_or(i64::MAX),
            one_to_three_word_length_cost: params.one_to_three_word_length_cost,
            four_to_seven_word_length_cost: params.four_to_seven_word_length_cost,
            eight_plus_word_length_cost: params.eight_plus_word_length_cost,
            length_penalty_credits: params.length_penalty_credits,
            unique_words_bonus: params.unique_words_bonus,
            palindrome_multiplier: i64::from(params.palindrome_multiplier),
            vowel_cost: params.vowel_cost,
            vowels: params.vowels.into_iter().collect(),
        }
    }
}
