//! Hand parsing, classification, and comparison tests.

use core::cmp::Ordering;

use pokrs::{
    Card, Category, CategoryError, Evaluator, Hand, Outcome, ParseError, Rank, RuleOptions, Suit,
    classify, compare, parse_card, parse_hand, tie_break,
};

fn hand(input: &str) -> Hand {
    parse_hand(input).unwrap()
}

fn category(input: &str) -> Category {
    classify(&hand(input)).category()
}

fn assert_win(winner: &str, loser: &str) {
    assert_eq!(
        compare(&hand(winner), &hand(loser)),
        Ordering::Greater,
        "{winner} should beat {loser}"
    );
    assert_eq!(compare(&hand(loser), &hand(winner)), Ordering::Less);
}

fn assert_tie(a: &str, b: &str) {
    assert_eq!(compare(&hand(a), &hand(b)), Ordering::Equal, "{a} should tie {b}");
}

#[test]
fn parse_card_tokens() {
    assert_eq!(parse_card("TS"), Ok(Card::new(Rank::Ten, Suit::Spades)));
    assert_eq!(parse_card("2C"), Ok(Card::new(Rank::Two, Suit::Clubs)));
    assert_eq!("AD".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Diamonds)));

    assert_eq!(parse_card(""), Err(ParseError::InvalidCardFormat));
    assert_eq!(parse_card("A"), Err(ParseError::InvalidCardFormat));
    assert_eq!(parse_card("10S"), Err(ParseError::InvalidCardFormat));
    assert_eq!(parse_card("1S"), Err(ParseError::UnknownRank('1')));
    assert_eq!(parse_card("tS"), Err(ParseError::UnknownRank('t')));
    assert_eq!(parse_card("AX"), Err(ParseError::UnknownSuit('X')));
    assert_eq!(parse_card("As"), Err(ParseError::UnknownSuit('s')));
}

#[test]
fn card_codes_round_trip() {
    for rank in Rank::ALL {
        assert_eq!(Rank::from_char(rank.to_char()), Some(rank));
    }
    for suit in Suit::ALL {
        assert_eq!(Suit::from_char(suit.to_char()), Some(suit));
    }
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "QH");
    assert!(Rank::Ace > Rank::King);
    assert!(Rank::Two < Rank::Three);
}

#[test]
fn parse_hand_errors() {
    assert_eq!(parse_hand("2S 3H 4H 5S"), Err(ParseError::InvalidHandFormat));
    assert_eq!(parse_hand("2S 3H 4H 5S 6C 7D"), Err(ParseError::InvalidHandFormat));
    assert_eq!(parse_hand(""), Err(ParseError::InvalidHandFormat));
    assert_eq!(parse_hand("   "), Err(ParseError::InvalidHandFormat));
    assert_eq!(parse_hand("2S  3H 4H 5S"), Err(ParseError::InvalidHandFormat));
    assert_eq!(parse_hand("2S 3H 4H 5S 6C "), Err(ParseError::InvalidHandFormat));
    assert_eq!(parse_hand("2S 3H 4H 5S 10C"), Err(ParseError::InvalidCardFormat));
    assert_eq!(parse_hand("2S 3H 4H 5S 1C"), Err(ParseError::UnknownRank('1')));
    assert_eq!(parse_hand("2S 3H 4Z 5S 6C"), Err(ParseError::UnknownSuit('Z')));
}

#[test]
fn hand_is_sorted_ascending() {
    let parsed = hand("JS KS QS TS AS");
    assert_eq!(parsed.to_string(), "TS JS QS KS AS");
    assert_eq!(parsed.lowest_rank(), Rank::Ten);
    assert_eq!(parsed.highest_rank(), Rank::Ace);
    assert_eq!(
        parsed.ranks(),
        [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
    );

    assert_eq!(hand("AS QS TS KS JS"), parsed);
    assert_eq!("AS QS TS KS JS".parse::<Hand>(), Ok(parsed));
}

#[test]
fn duplicate_cards_are_accepted_by_default() {
    let parsed = hand("AS AS 2C 3D 4H");
    assert_eq!(parsed.duplicate(), Some(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!(classify(&parsed).category(), Category::Pair);
    assert_eq!(hand("2C 3D 4H 5S 7C").duplicate(), None);
}

#[test]
fn duplicate_cards_can_be_rejected() {
    let evaluator = Evaluator::new(RuleOptions::default().with_reject_duplicate_cards(true));
    assert_eq!(
        evaluator.parse("AS 2C AS 3D 4H"),
        Err(ParseError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)))
    );
    assert!(evaluator.parse("AS AH 2C 3D 4H").is_ok());
}

#[test]
fn classifies_every_category() {
    assert_eq!(category("AS QS TS KS JS"), Category::RoyalFlush);
    assert_eq!(category("KD QD JD TD 9D"), Category::StraightFlush);
    assert_eq!(category("AS AD AC AH JD"), Category::FourOfAKind);
    assert_eq!(category("2S AH 2H AS AC"), Category::FullHouse);
    assert_eq!(category("AS 3S 4S 8S 2S"), Category::Flush);
    assert_eq!(category("3D 4C 5H 6H 2S"), Category::Straight);
    assert_eq!(category("AH AC 5H 6H AS"), Category::ThreeOfAKind);
    assert_eq!(category("2S 2H 4H 5S 4C"), Category::TwoPair);
    assert_eq!(category("AH AC 5H 6H 7S"), Category::Pair);
    assert_eq!(category("2S AH 4H 5S KC"), Category::HighCard);
}

#[test]
fn ace_low_straight_is_off_by_default() {
    assert_eq!(category("AS 2H 3D 4C 5S"), Category::HighCard);
    assert_eq!(category("AH 2H 3H 4H 5H"), Category::Flush);
    assert_eq!(category("QS KH AD 2C 3S"), Category::HighCard);
}

#[test]
fn ace_low_straight_when_enabled() {
    let evaluator = Evaluator::new(RuleOptions::default().with_ace_low_straight(true));

    let wheel = evaluator.parse("AS 2H 3D 4C 5S").unwrap();
    let classification = evaluator.classify(&wheel);
    assert_eq!(classification.category(), Category::Straight);
    assert_eq!(classification.high_card(), Rank::Five);

    let steel_wheel = evaluator.parse("AH 2H 3H 4H 5H").unwrap();
    assert_eq!(
        evaluator.classify(&steel_wheel).category(),
        Category::StraightFlush
    );

    let six_high = evaluator.parse("2S 3H 4H 5S 6C").unwrap();
    assert_eq!(evaluator.compare(&wheel, &six_high), Ordering::Less);
    assert_eq!(
        evaluator.compare_str("AS 2H 3D 4C 5S", "KS KH KD 9C 2S"),
        Ok(Outcome::Win)
    );
}

#[test]
fn frequency_counts_ranks() {
    let classification = classify(&hand("KS KH KD 2S 2C"));
    let frequency = classification.frequency();
    assert_eq!(frequency.count(Rank::King), 3);
    assert_eq!(frequency.count(Rank::Two), 2);
    assert_eq!(frequency.count(Rank::Ace), 0);
    assert_eq!(frequency.len(), 2);
    assert!(frequency.contains_count(3));
    assert!(!frequency.contains_count(1));
    assert_eq!(frequency.ranks_counted(3), 1);
    assert_eq!(frequency.ranks_counted(1), 0);
    assert_eq!(classify(&hand("2S 2H 4H 5S 4C")).frequency().ranks_counted(2), 2);
    assert_eq!(frequency.iter().map(|(_, count)| u32::from(count)).sum::<u32>(), 5);
}

#[test]
fn category_order_and_names() {
    assert!(Category::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(Category::HighCard.ordinal(), 0);
    assert_eq!(Category::RoyalFlush.ordinal(), 9);
    assert_eq!(Category::FullHouse.to_string(), "full house");
}

#[test]
fn category_accessors_reject_other_categories() {
    let pair = classify(&hand("AH AC 5H 6H 7S"));
    assert_eq!(pair.pair_rank(), Ok(Rank::Ace));
    assert_eq!(pair.kickers(), vec![Rank::Seven, Rank::Six, Rank::Five]);
    assert_eq!(
        pair.full_house_ranks(),
        Err(CategoryError::InvalidCategoryState {
            expected: Category::FullHouse,
            found: Category::Pair,
        })
    );
    assert!(pair.two_pair_ranks().is_err());

    let full_house = classify(&hand("KS KH KD 2S 2C"));
    assert_eq!(full_house.full_house_ranks(), Ok((Rank::King, Rank::Two)));

    let two_pair = classify(&hand("QD QS AS AH 2C"));
    assert_eq!(two_pair.two_pair_ranks(), Ok((Rank::Ace, Rank::Queen)));

    assert_eq!(
        tie_break(&pair, &full_house, &RuleOptions::default()),
        Err(CategoryError::InvalidCategoryState {
            expected: Category::Pair,
            found: Category::FullHouse,
        })
    );
}

#[test]
fn royal_flush() {
    assert_win("AS QS TS KS JS", "KD QD JD TD 9D");
    assert_win("AS QS TS KS JS", "7H 7C 7D 7S JH");
    assert_tie("AS QS TS KS JS", "AH QH TH KH JH");
}

#[test]
fn straight_flush() {
    assert_win("KS AS TS QS JS", "2H 3H 4H 5H 6H");
    assert_win("2H 3H 4H 5H 6H", "AS AD AC AH JD");
    assert_win("KD QD JD TD 9D", "2H 3H 4H 5H 6H");
}

#[test]
fn four_of_a_kind() {
    assert_win("AS AH 2H AD AC", "JS JD JC JH 3D");
    assert_win("JS JD JC JH AD", "2S AH 2H AS AC");
    // Ties go to the highest card in the hand, not the rank of the four.
    assert_win("2S 2H 2D 2C AS", "3S 3H 3D 3C KS");
}

#[test]
fn full_house() {
    assert_win("2S AH 2H AS AC", "2H 3H 5H 6H 7H");
    assert_win("KS KH KD 2S 2C", "JS JH JD AS AC");
}

#[test]
fn full_house_pair_is_ignored_by_default() {
    assert_tie("KS KH KD 2S 2C", "KC KH KD AS AC");

    let evaluator = Evaluator::new(RuleOptions::default().with_full_house_pair_kicker(true));
    let low = evaluator.parse("KS KH KD 2S 2C").unwrap();
    let high = evaluator.parse("KC KH KD AS AC").unwrap();
    assert_eq!(evaluator.compare(&high, &low), Ordering::Greater);
    assert_eq!(evaluator.outcome(&low, &high), Outcome::Loss);
}

#[test]
fn flush() {
    assert_win("AS 3S 4S 8S 2S", "2H 3H 5H 6H 7H");
    assert_win("2H 3H 5H 6H 7H", "2S 3H 4H 5S 6C");
}

#[test]
fn straight() {
    assert_tie("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S");
    assert_win("2S 3H 4H 5S 6C", "AH AC 5H 6H AS");
    assert_win("TS JH QH KS AC", "9D TC JH QH KD");
}

#[test]
fn three_of_a_kind() {
    assert_win("AH AC 5H 6H AS", "2S 2H 4H 5S 4C");
    assert_win("AH AC 5H 6H AS", "KH KC KD QH JS");
    // Ties go to the highest card in the hand, not the rank of the three.
    assert_win("2S 2H 2D AC KS", "3S 3H 3D QC JS");
}

#[test]
fn two_pair() {
    assert_win("2S 2H 4H 5S 4C", "AH AC 5H 6H 7S");
    assert_win("KS KD QD QC 5C", "KS KH QD QS 2C");
    assert_win("QD QS AS AH 2C", "KS KD QD QC 5C");
    assert_win("AS AH 9D 9C 2S", "AD AC 8H 8S KC");
    assert_tie("AS AH 9D 9C 2S", "AD AC 9H 9S 2C");
}

#[test]
fn pair() {
    assert_win("AH AC 5H 6H 7S", "6S AD 7H 4S AS");
    assert_win("AH AC 5H 6H 7S", "2S AH 4H 5S KC");
    assert_win("3H 3C 4D 5S 6C", "2S 2D AH KS QC");
    assert_win("2S 2H KD QC JS", "2C 2D KH QS TS");
    assert_tie("9S 9H KD QC JS", "9C 9D KH QS JC");
}

#[test]
fn high_card() {
    assert_win("7H 3C TH 6H 9S", "2S 3H 6H 7S 9C");
    assert_win("4S 5H 6H TS AC", "3S 5H 6H TS AC");
    assert_tie("2S AH 4H 5S 6C", "AD 4C 5H 6H 2C");
}

#[test]
fn showdown_reports_categories() {
    let evaluator = Evaluator::default();
    let royal = hand("AS QS TS KS JS");
    let quads = hand("7H 7C 7D 7S JH");

    let showdown = evaluator.showdown(&royal, &quads);
    assert_eq!(showdown.outcome, Outcome::Win);
    assert_eq!(showdown.category, Category::RoyalFlush);
    assert_eq!(showdown.opponent_category, Category::FourOfAKind);

    assert_eq!(evaluator.outcome(&quads, &royal), Outcome::Loss);
    assert_eq!(evaluator.outcome(&quads, &quads), Outcome::Tie);
    assert_eq!(
        evaluator.compare_str("2S 3H 4H 5S", "AS QS TS KS JS"),
        Err(ParseError::InvalidHandFormat)
    );
}

#[test]
fn outcome_from_ordering() {
    assert_eq!(Outcome::from(Ordering::Greater), Outcome::Win);
    assert_eq!(Outcome::from(Ordering::Less), Outcome::Loss);
    assert_eq!(Outcome::from(Ordering::Equal), Outcome::Tie);
    assert_eq!(Outcome::Win.reverse(), Outcome::Loss);
    assert_eq!(Outcome::Tie.reverse(), Outcome::Tie);
    assert_eq!(compare(&hand("AS QS TS KS JS"), &hand("KD QD JD TD 9D")) as i8, 1);
}
