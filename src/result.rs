//! Comparison result types.

use core::cmp::Ordering;

use crate::category::Category;

/// Outcome of a hand against an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The hand is stronger.
    Win,
    /// The hand is weaker.
    Loss,
    /// Both hands are equally strong.
    Tie,
}

impl Outcome {
    /// Returns the outcome from the opponent's point of view.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::Win,
            Ordering::Less => Self::Loss,
            Ordering::Equal => Self::Tie,
        }
    }
}

/// Result of comparing a hand against an opponent's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    /// The outcome for the first hand.
    pub outcome: Outcome,
    /// Category of the first hand.
    pub category: Category,
    /// Category of the opponent's hand.
    pub opponent_category: Category,
}
