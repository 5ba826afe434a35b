//! Per-rank card counts.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Rank;
use crate::hand::Hand;

/// How many cards of each rank a hand holds.
///
/// Only ranks present in the hand have an entry, so every stored count is in `1..=4`
/// for a hand without duplicate cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankFrequency {
    /// Rank -> number of cards with that rank.
    counts: HashMap<Rank, u8>,
}

impl RankFrequency {
    /// Counts the ranks of a hand.
    #[must_use]
    pub fn from_hand(hand: &Hand) -> Self {
        let mut counts = HashMap::new();
        for card in hand.cards() {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Returns how many cards hold `rank` (0 when absent).
    #[must_use]
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    /// Returns whether any rank occurs exactly `count` times.
    #[must_use]
    pub fn contains_count(&self, count: u8) -> bool {
        self.counts.values().any(|&c| c == count)
    }

    /// Returns how many distinct ranks occur exactly `count` times.
    #[must_use]
    pub fn ranks_counted(&self, count: u8) -> usize {
        self.counts.values().filter(|&&c| c == count).count()
    }

    /// Returns the ranks occurring exactly `count` times, highest first.
    #[must_use]
    pub fn ranks_with_count(&self, count: u8) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self
            .counts
            .iter()
            .filter(|&(_, &c)| c == count)
            .map(|(&rank, _)| rank)
            .collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }

    /// Returns the number of distinct ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns whether no ranks were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(rank, count)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.counts.iter().map(|(&rank, &count)| (rank, count))
    }
}
