//! Hand classification.

use alloc::vec::Vec;

use crate::card::Rank;
use crate::category::Category;
use crate::error::CategoryError;
use crate::frequency::RankFrequency;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::RuleOptions;

/// Ranks of the ace-low straight, in hand order.
const WHEEL: [Rank; HAND_SIZE] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

/// The category of a hand together with the data needed to break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    category: Category,
    frequency: RankFrequency,
    /// Hand ranks, highest first.
    ranks: [Rank; HAND_SIZE],
    /// Top card of the hand; Five for an ace-low straight.
    high_card: Rank,
}

impl Classification {
    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the per-rank card counts.
    #[must_use]
    pub const fn frequency(&self) -> &RankFrequency {
        &self.frequency
    }

    /// Returns the hand ranks, highest first.
    #[must_use]
    pub const fn ranks(&self) -> &[Rank; HAND_SIZE] {
        &self.ranks
    }

    /// Returns the rank of the card that decides single-card tie-breaks.
    ///
    /// This is the highest card, except for an ace-low straight where it is the Five.
    #[must_use]
    pub const fn high_card(&self) -> Rank {
        self.high_card
    }

    /// Returns the ranks that occur once, highest first.
    #[must_use]
    pub fn kickers(&self) -> Vec<Rank> {
        self.frequency.ranks_with_count(1)
    }

    /// Returns the paired rank of a [`Category::Pair`] hand.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::InvalidCategoryState`] for any other category.
    pub fn pair_rank(&self) -> Result<Rank, CategoryError> {
        self.expect_category(Category::Pair)?;
        self.first_with_count(Category::Pair, 2)
    }

    /// Returns the `(higher, lower)` pair ranks of a [`Category::TwoPair`] hand.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::InvalidCategoryState`] for any other category.
    pub fn two_pair_ranks(&self) -> Result<(Rank, Rank), CategoryError> {
        self.expect_category(Category::TwoPair)?;
        match self.frequency.ranks_with_count(2).as_slice() {
            &[high, low] => Ok((high, low)),
            _ => Err(self.invalid(Category::TwoPair)),
        }
    }

    /// Returns the `(triple, pair)` ranks of a [`Category::FullHouse`] hand.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::InvalidCategoryState`] for any other category.
    pub fn full_house_ranks(&self) -> Result<(Rank, Rank), CategoryError> {
        self.expect_category(Category::FullHouse)?;
        let triple = self.first_with_count(Category::FullHouse, 3)?;
        let pair = self.first_with_count(Category::FullHouse, 2)?;
        Ok((triple, pair))
    }

    fn expect_category(&self, expected: Category) -> Result<(), CategoryError> {
        if self.category == expected {
            Ok(())
        } else {
            Err(self.invalid(expected))
        }
    }

    fn first_with_count(&self, expected: Category, count: u8) -> Result<Rank, CategoryError> {
        self.frequency
            .ranks_with_count(count)
            .first()
            .copied()
            .ok_or_else(|| self.invalid(expected))
    }

    const fn invalid(&self, expected: Category) -> CategoryError {
        CategoryError::InvalidCategoryState {
            expected,
            found: self.category,
        }
    }
}

/// Classifies a hand using the default rules.
///
/// # Example
///
/// ```
/// use pokrs::{Category, classify, parse_hand};
///
/// let hand = parse_hand("KS KH KD 2S 2C").unwrap();
/// assert_eq!(classify(&hand).category(), Category::FullHouse);
/// ```
#[must_use]
pub fn classify(hand: &Hand) -> Classification {
    classify_with(hand, &RuleOptions::default())
}

/// Classifies a hand under the given rules.
///
/// Categories are tested strongest first and the first match wins.
#[must_use]
pub fn classify_with(hand: &Hand, options: &RuleOptions) -> Classification {
    let first_suit = hand.cards()[0].suit;
    let is_flush = hand.cards().iter().all(|card| card.suit == first_suit);
    let straight_high = straight_high(hand, options);
    let frequency = RankFrequency::from_hand(hand);

    let category = match (is_flush, straight_high) {
        (true, Some(Rank::Ace)) => Category::RoyalFlush,
        (true, Some(_)) => Category::StraightFlush,
        (true, None) => Category::Flush,
        (false, Some(_)) => Category::Straight,
        (false, None) => grouped_category(&frequency),
    };

    let mut ranks = hand.ranks();
    ranks.reverse();
    let classification = Classification {
        category,
        frequency,
        ranks,
        high_card: straight_high.unwrap_or_else(|| hand.highest_rank()),
    };
    log::trace!("{hand} classified as {category}");
    classification
}

/// Returns the top rank if the hand is a straight.
fn straight_high(hand: &Hand, options: &RuleOptions) -> Option<Rank> {
    let ranks = hand.ranks();
    if ranks
        .windows(2)
        .all(|pair| pair[0].ordinal() + 1 == pair[1].ordinal())
    {
        return Some(hand.highest_rank());
    }
    if options.ace_low_straight && ranks == WHEEL {
        return Some(Rank::Five);
    }
    None
}

/// Categories decided purely by rank multiplicity.
fn grouped_category(frequency: &RankFrequency) -> Category {
    if frequency.contains_count(4) {
        Category::FourOfAKind
    } else if frequency.contains_count(3) && frequency.contains_count(2) {
        Category::FullHouse
    } else if frequency.contains_count(3) {
        Category::ThreeOfAKind
    } else if frequency.ranks_counted(2) == 2 {
        Category::TwoPair
    } else if frequency.contains_count(2) {
        Category::Pair
    } else {
        Category::HighCard
    }
}
