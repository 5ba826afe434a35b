//! Rule options.

/// Optional rule variations for parsing, classification, and comparison.
///
/// Every option is off by default. Use the builder methods to enable them:
///
/// ```
/// use pokrs::RuleOptions;
///
/// let options = RuleOptions::default()
///     .with_ace_low_straight(true)
///     .with_full_house_pair_kicker(true)
///     .with_reject_duplicate_cards(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleOptions {
    /// Whether A-2-3-4-5 counts as a straight with a top card of Five.
    pub ace_low_straight: bool,
    /// Whether full houses with the same triple are ordered by their pair.
    pub full_house_pair_kicker: bool,
    /// Whether parsing rejects a hand that contains the same card twice.
    pub reject_duplicate_cards: bool,
}

impl RuleOptions {
    /// Sets whether the ace-low straight (the "wheel") is recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_ace_low_straight(true);
    /// assert!(options.ace_low_straight);
    /// ```
    #[must_use]
    pub const fn with_ace_low_straight(mut self, enabled: bool) -> Self {
        self.ace_low_straight = enabled;
        self
    }

    /// Sets whether the pair rank breaks ties between full houses.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_full_house_pair_kicker(true);
    /// assert!(options.full_house_pair_kicker);
    /// ```
    #[must_use]
    pub const fn with_full_house_pair_kicker(mut self, enabled: bool) -> Self {
        self.full_house_pair_kicker = enabled;
        self
    }

    /// Sets whether duplicate cards are rejected while parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use pokrs::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_reject_duplicate_cards(true);
    /// assert!(options.reject_duplicate_cards);
    /// ```
    #[must_use]
    pub const fn with_reject_duplicate_cards(mut self, enabled: bool) -> Self {
        self.reject_duplicate_cards = enabled;
        self
    }
}
