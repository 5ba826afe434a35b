//! Rule-aware entry point.

use core::cmp::Ordering;

use crate::classify::{Classification, classify_with};
use crate::compare::{compare_classified, compare_with};
use crate::error::ParseError;
use crate::hand::{Hand, parse_hand_with};
use crate::options::RuleOptions;
use crate::result::{Outcome, Showdown};

/// Parses, classifies, and compares hands under one set of [`RuleOptions`].
///
/// The free functions ([`parse_hand`](crate::parse_hand), [`classify`](crate::classify),
/// [`compare`](crate::compare)) are equivalent to an evaluator built with
/// `RuleOptions::default()`.
///
/// # Example
///
/// ```
/// use pokrs::{Evaluator, Outcome, RuleOptions};
///
/// let evaluator = Evaluator::new(RuleOptions::default().with_ace_low_straight(true));
/// let wheel = evaluator.parse("AS 2H 3D 4C 5S").unwrap();
/// let trips = evaluator.parse("KS KH KD 9C 2S").unwrap();
/// assert_eq!(evaluator.outcome(&wheel, &trips), Outcome::Win);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    /// Rule options.
    pub options: RuleOptions,
}

impl Evaluator {
    /// Creates an evaluator with the given rules.
    #[must_use]
    pub const fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    /// Parses a hand.
    ///
    /// # Errors
    ///
    /// See [`parse_hand_with`].
    pub fn parse(&self, input: &str) -> Result<Hand, ParseError> {
        parse_hand_with(input, &self.options)
    }

    /// Classifies a hand.
    #[must_use]
    pub fn classify(&self, hand: &Hand) -> Classification {
        classify_with(hand, &self.options)
    }

    /// Compares two hands; `Greater` means `a` is stronger.
    #[must_use]
    pub fn compare(&self, a: &Hand, b: &Hand) -> Ordering {
        compare_with(a, b, &self.options)
    }

    /// Returns the outcome of `a` against `b`.
    #[must_use]
    pub fn outcome(&self, a: &Hand, b: &Hand) -> Outcome {
        self.showdown(a, b).outcome
    }

    /// Classifies both hands and compares them.
    #[must_use]
    pub fn showdown(&self, a: &Hand, b: &Hand) -> Showdown {
        let a_class = self.classify(a);
        let b_class = self.classify(b);
        let outcome = Outcome::from(compare_classified(&a_class, &b_class, &self.options));
        log::debug!(
            "showdown {a} ({}) vs {b} ({}): {outcome:?}",
            a_class.category(),
            b_class.category()
        );

        Showdown {
            outcome,
            category: a_class.category(),
            opponent_category: b_class.category(),
        }
    }

    /// Parses two hands and returns the outcome of the first against the second.
    ///
    /// # Errors
    ///
    /// Returns the first parse error encountered.
    pub fn compare_str(&self, a: &str, b: &str) -> Result<Outcome, ParseError> {
        let a = self.parse(a)?;
        let b = self.parse(b)?;
        Ok(self.outcome(&a, &b))
    }
}
