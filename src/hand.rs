//! Five-card hand representation and parsing.

use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank, Suit, parse_card};
use crate::error::ParseError;
use crate::options::RuleOptions;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A five-card poker hand.
///
/// Cards are always stored sorted ascending by rank (ties broken by suit), so
/// `cards()[0]` is the lowest card and `cards()[4]` the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the hand, ascending.
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five cards, sorting them.
    ///
    /// Duplicate cards are accepted.
    #[must_use]
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Returns the cards in ascending order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the ranks in ascending order.
    #[must_use]
    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.cards.map(|card| card.rank)
    }

    /// Returns the rank of the highest card.
    #[must_use]
    pub const fn highest_rank(&self) -> Rank {
        self.cards[HAND_SIZE - 1].rank
    }

    /// Returns the rank of the lowest card.
    #[must_use]
    pub const fn lowest_rank(&self) -> Rank {
        self.cards[0].rank
    }

    /// Returns the first card that appears more than once, if any.
    #[must_use]
    pub fn duplicate(&self) -> Option<Card> {
        self.cards
            .iter()
            .enumerate()
            .find(|(i, card)| self.cards[..*i].contains(card))
            .map(|(_, card)| *card)
    }
}

/// Parses a hand of five space-separated card tokens, e.g. `"AS QS TS KS JS"`.
///
/// Duplicate cards are accepted; use [`parse_hand_with`] to reject them.
///
/// # Errors
///
/// Returns [`ParseError::InvalidHandFormat`] if the input is blank or does not
/// split on single spaces into exactly five non-empty tokens. Card errors from
/// [`parse_card`] are propagated unchanged.
///
/// # Example
///
/// ```
/// use pokrs::{Rank, parse_hand};
///
/// let hand = parse_hand("JS KS QS TS AS").unwrap();
/// assert_eq!(hand.highest_rank(), Rank::Ace);
/// assert_eq!(hand.to_string(), "TS JS QS KS AS");
/// ```
pub fn parse_hand(input: &str) -> Result<Hand, ParseError> {
    parse_hand_with(input, &RuleOptions::default())
}

/// Parses a hand, applying the validation selected in `options`.
///
/// # Errors
///
/// Same as [`parse_hand`], plus [`ParseError::DuplicateCard`] when
/// [`RuleOptions::reject_duplicate_cards`] is set and a card repeats.
pub fn parse_hand_with(input: &str, options: &RuleOptions) -> Result<Hand, ParseError> {
    if input.trim().is_empty()
        || input.split(' ').count() != HAND_SIZE
        || input.split(' ').any(str::is_empty)
    {
        return Err(ParseError::InvalidHandFormat);
    }

    let mut cards = [Card::new(Rank::Two, Suit::Clubs); HAND_SIZE];
    for (slot, token) in cards.iter_mut().zip(input.split(' ')) {
        *slot = parse_card(token)?;
    }

    let hand = Hand::new(cards);
    if options.reject_duplicate_cards {
        if let Some(card) = hand.duplicate() {
            log::warn!("rejecting hand {input:?}: {card} appears twice");
            return Err(ParseError::DuplicateCard(card));
        }
    }

    Ok(hand)
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hand(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
