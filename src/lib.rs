//! A five-card poker hand classifier and comparator with optional `no_std` support.
//!
//! Hands are parsed from strings such as `"AS QS TS KS JS"`, classified into one
//! of ten [`Category`] values, and ordered with [`compare`], which applies
//! category-specific tie-breaks when both hands share a category.
//!
//! # Example
//!
//! ```
//! use core::cmp::Ordering;
//! use pokrs::{Category, classify, compare, parse_hand};
//!
//! let full_house = parse_hand("KS KH KD 2S 2C").unwrap();
//! let flush = parse_hand("2H 3H 5H 6H 7H").unwrap();
//! assert_eq!(classify(&full_house).category(), Category::FullHouse);
//! assert_eq!(compare(&full_house, &flush), Ordering::Greater);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod classify;
pub mod compare;
pub mod error;
pub mod evaluator;
pub mod frequency;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, Rank, Suit, parse_card};
pub use category::Category;
pub use classify::{Classification, classify, classify_with};
pub use compare::{compare, compare_classified, compare_with, tie_break};
pub use error::{CategoryError, ParseError};
pub use evaluator::Evaluator;
pub use frequency::RankFrequency;
pub use hand::{HAND_SIZE, Hand, parse_hand, parse_hand_with};
pub use options::RuleOptions;
pub use result::{Outcome, Showdown};
