//! Hand comparison and tie-breaking.

use core::cmp::Ordering;

use crate::card::Rank;
use crate::category::Category;
use crate::classify::{Classification, classify_with};
use crate::error::CategoryError;
use crate::hand::Hand;
use crate::options::RuleOptions;

/// Compares two hands using the default rules.
///
/// `Greater` means `a` is the stronger hand. `Ordering as i8` gives the
/// conventional `-1`/`0`/`1` form.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use pokrs::{compare, parse_hand};
///
/// let royal = parse_hand("AS QS TS KS JS").unwrap();
/// let straight_flush = parse_hand("KD QD JD TD 9D").unwrap();
/// assert_eq!(compare(&royal, &straight_flush), Ordering::Greater);
/// assert_eq!(compare(&straight_flush, &royal) as i8, -1);
/// ```
#[must_use]
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    compare_with(a, b, &RuleOptions::default())
}

/// Compares two hands under the given rules.
#[must_use]
pub fn compare_with(a: &Hand, b: &Hand, options: &RuleOptions) -> Ordering {
    let ordering = compare_classified(
        &classify_with(a, options),
        &classify_with(b, options),
        options,
    );
    log::debug!("{a} vs {b}: {ordering:?}");
    ordering
}

/// Compares two already classified hands.
///
/// A stronger category always wins; equal categories go to [`tie_break`].
#[must_use]
pub fn compare_classified(
    a: &Classification,
    b: &Classification,
    options: &RuleOptions,
) -> Ordering {
    match a.category().cmp(&b.category()) {
        Ordering::Equal => tie_break(a, b, options)
            .expect("both hands share a category, so its tie-break data is present"),
        decided => {
            log::debug!("decided by category: {} vs {}", a.category(), b.category());
            decided
        }
    }
}

/// Orders two hands of the same category by that category's discriminators.
///
/// Discriminators are compared most significant first; the first difference decides.
///
/// # Errors
///
/// Returns [`CategoryError::InvalidCategoryState`] if the hands are of different
/// categories, or if a classification lacks the data its category requires.
pub fn tie_break(
    a: &Classification,
    b: &Classification,
    options: &RuleOptions,
) -> Result<Ordering, CategoryError> {
    if a.category() != b.category() {
        return Err(CategoryError::InvalidCategoryState {
            expected: a.category(),
            found: b.category(),
        });
    }

    let ordering = match a.category() {
        Category::HighCard => compare_descending(a.ranks(), b.ranks()),
        Category::Pair => a
            .pair_rank()?
            .cmp(&b.pair_rank()?)
            .then_with(|| compare_descending(&a.kickers(), &b.kickers())),
        Category::TwoPair => {
            let (a_high, a_low) = a.two_pair_ranks()?;
            let (b_high, b_low) = b.two_pair_ranks()?;
            a_high
                .cmp(&b_high)
                .then(a_low.cmp(&b_low))
                .then_with(|| compare_descending(&a.kickers(), &b.kickers()))
        }
        Category::FullHouse => {
            let (a_triple, a_pair) = a.full_house_ranks()?;
            let (b_triple, b_pair) = b.full_house_ranks()?;
            let ordering = a_triple.cmp(&b_triple);
            if options.full_house_pair_kicker {
                ordering.then(a_pair.cmp(&b_pair))
            } else {
                ordering
            }
        }
        Category::ThreeOfAKind
        | Category::FourOfAKind
        | Category::Straight
        | Category::Flush
        | Category::StraightFlush
        | Category::RoyalFlush => a.high_card().cmp(&b.high_card()),
    };
    Ok(ordering)
}

/// Compares two rank lists already sorted highest first, pairwise.
fn compare_descending(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
