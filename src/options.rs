//! Game configuration options.

/// Score at which the dealer stops drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// Highest stand threshold a table accepts.
const MAX_STANDS_ON: u8 = 21;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(18)
///     .with_dealer_plays_out(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Dealer score at or above which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Whether standing runs the dealer's whole draw loop instead of
    /// a single draw.
    pub dealer_plays_out: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
            dealer_plays_out: false,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's stand threshold.
    ///
    /// Values above 21 are clamped to 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    ///
    /// let clamped = GameOptions::default().with_dealer_stands_on(30);
    /// assert_eq!(clamped.dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = if score > MAX_STANDS_ON {
            MAX_STANDS_ON
        } else {
            score
        };
        self
    }

    /// Sets whether standing plays out the dealer's hand in full.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_plays_out(true);
    /// assert!(options.dealer_plays_out);
    /// ```
    #[must_use]
    pub const fn with_dealer_plays_out(mut self, plays_out: bool) -> Self {
        self.dealer_plays_out = plays_out;
        self
    }
}
