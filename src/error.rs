//! Error types for parsing and evaluation.

use thiserror::Error;

use crate::card::Card;
use crate::category::Category;

/// Errors that can occur while parsing a card or a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is blank or does not split into exactly five cards.
    #[error("invalid hand: expected 5 space-separated cards, e.g. \"2S 2H 4H 5S 4C\"")]
    InvalidHandFormat,
    /// A card token is not exactly two characters.
    #[error("card must be two characters")]
    InvalidCardFormat,
    /// The rank character is not one of `23456789TJQKA`.
    #[error("unknown rank character: {0:?}")]
    UnknownRank(char),
    /// The suit character is not one of `CDHS`.
    #[error("unknown suit character: {0:?}")]
    UnknownSuit(char),
    /// The same card appears twice in one hand.
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when reading category-specific data from a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The accessor does not apply to the classified category.
    #[error("invalid category state: expected {expected}, found {found}")]
    InvalidCategoryState {
        /// Category the accessor supports.
        expected: Category,
        /// Category the hand was classified as.
        found: Category,
    },
}
