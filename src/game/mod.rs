//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::build_deck;
use crate::error::ActionError;
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use actions::{player_hits, player_stands};
pub use dealer::{dealer_play, determine_result};
pub use state::{GameState, Turn};

/// Shuffles a fresh deck with `rng` and deals the opening hands.
#[expect(
    clippy::missing_panics_doc,
    reason = "a full deck always covers the opening deal"
)]
#[must_use]
pub fn setup_game_with_rng<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let deck = build_deck().shuffled(rng);
    GameState::deal(deck).expect("a full deck always covers the opening deal")
}

/// Shuffles a fresh deck from thread-local entropy and deals the opening
/// hands.
#[cfg(feature = "std")]
#[must_use]
pub fn setup_game() -> GameState {
    setup_game_with_rng(&mut rand::rng())
}

/// A blackjack table that deals games from its own random number generator.
///
/// The table holds the [`GameOptions`] applied to stand decisions; the game
/// states it hands out are plain values the caller threads through actions.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Game, GameOptions, Turn};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let state = game.setup();
    /// assert_eq!(state.turn(), Turn::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        debug!(seed, "table seeded");
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a new game seeded from thread-local entropy.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Starts a new game: fresh deck, fresh shuffle, opening hands dealt.
    pub fn setup(&mut self) -> GameState {
        setup_game_with_rng(&mut self.rng)
    }

    /// Discards the current game and starts a new one.
    ///
    /// Same as [`Game::setup`]; nothing from the previous game carries over.
    pub fn reset(&mut self) -> GameState {
        self.setup()
    }

    /// Player action: Hit.
    ///
    /// # Errors
    ///
    /// See [`GameState::hit`].
    pub fn hit(&self, state: &GameState) -> Result<GameState, ActionError> {
        state.hit()
    }

    /// Player action: Stand, using this table's dealer rules.
    ///
    /// With [`GameOptions::dealer_plays_out`] set, the dealer keeps drawing
    /// until reaching the stand threshold instead of drawing at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// while the dealer must draw.
    pub fn stand(&self, state: &GameState) -> Result<GameState, ActionError> {
        let threshold = self.options.dealer_stands_on;
        let next = state.stand_on(threshold)?;

        if self.options.dealer_plays_out {
            Ok(next.dealer_play_to(threshold)?)
        } else {
            Ok(next)
        }
    }
}
