//! Composition of the scoring rules into a single credit amount.

use std::sync::Arc;

use crate::credit::Credit;
use crate::parameters::BillingParameters;
use crate::rules::{
    character_count_rule, length_penalty_rule, palindrome_multiplier_rule,
    unique_words_bonus_rule, vowels_bonus_rule, word_length_multiplier_rule,
};

/// Anything that can price a message from its text.
///
/// [`CreditCalculator`] is the production implementation; the trait lets the
/// usage aggregation be exercised with alternate pricing.
pub trait CreditPricing: Send + Sync {
    /// Credits charged for a message with this text.
    fn calculate_credits(&self, text: &str) -> Credit;
}

/// Contribution of each rule to a message's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditBreakdown {
    /// Base cost.
    pub base: Credit,
    /// Character count rule.
    pub characters: Credit,
    /// Word length multiplier rule.
    pub word_lengths: Credit,
    /// Vowel bonus.
    pub vowels: Credit,
    /// Length penalty.
    pub length_penalty: Credit,
    /// Unique words bonus (subtracted).
    pub unique_words_bonus: Credit,
    /// Palindrome multiplier applied to the running total.
    pub palindrome_multiplier: u32,
    /// Total before the one-credit floor.
    pub raw_total: Credit,
    /// Final charge.
    pub total: Credit,
}

/// Prices message text with the rule set and a fixed billing configuration.
#[derive(Debug, Clone)]
pub struct CreditCalculator {
    params: Arc<BillingParameters>,
}

impl CreditCalculator {
    /// Create a calculator for the given parameters.
    #[must_use]
    pub fn new(params: Arc<BillingParameters>) -> Self {
        Self { params }
    }

    /// The parameters this calculator prices with.
    #[must_use]
    pub fn parameters(&self) -> &BillingParameters {
        &self.params
    }

    /// Evaluate every rule for `text`.
    ///
    /// The additive and subtractive terms are summed first, the palindrome
    /// multiplier scales that sum, and only then is the result floored at one
    /// credit.
    #[must_use]
    pub fn breakdown(&self, text: &str) -> CreditBreakdown {
        let params = self.params.as_ref();

        let base = params.base_credit_cost();
        let characters = character_count_rule(text, params);
        let word_lengths = word_length_multiplier_rule(text, params);
        let vowels = vowels_bonus_rule(text, params);
        let length_penalty = length_penalty_rule(text, params);
        let unique_words_bonus = unique_words_bonus_rule(text, params);
        let palindrome_multiplier = palindrome_multiplier_rule(text, params);

        let mut raw_total = base;
        raw_total += characters;
        raw_total += word_lengths;
        raw_total += vowels;
        raw_total += length_penalty;
        raw_total -= unique_words_bonus;
        raw_total *= palindrome_multiplier;

        CreditBreakdown {
            base,
            characters,
            word_lengths,
            vowels,
            length_penalty,
            unique_words_bonus,
            palindrome_multiplier,
            raw_total,
            total: raw_total.max(Credit::from_int(1)),
        }
    }
}

impl Default for CreditCalculator {
    fn default() -> Self {
        Self::new(Arc::new(BillingParameters::default()))
    }
}

impl CreditPricing for CreditCalculator {
    fn calculate_credits(&self, text: &str) -> Credit {
        let breakdown = self.breakdown(text);
        tracing::trace!(
            raw_total = %breakdown.raw_total,
            total = %breakdown.total,
            palindrome_multiplier = breakdown.palindrome_multiplier,
            "Credits calculated"
        );
        breakdown.total
    }
}
