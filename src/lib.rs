//! A two-party blackjack rules engine with optional `no_std` support.
//!
//! The crate covers deck building and shuffling, hand scoring, the player and
//! dealer turns, and adjudication. Every action takes a [`GameState`] by
//! reference and returns the next one, leaving the original untouched.
//!
//! # Example
//!
//! ```
//! use bjcore::{Game, GameOptions, GameResult, Turn};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let state = game.setup();
//! let state = game.hit(&state).unwrap();
//! let state = game.stand(&state).unwrap();
//!
//! assert_eq!(state.turn(), Turn::DealerTurn);
//! assert_ne!(state.result(), GameResult::NoResult);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, rank_value};
pub use deck::{Deck, build_deck, draw, shuffle};
pub use error::{ActionError, DealError, DealerError, DrawError};
#[cfg(feature = "std")]
pub use game::setup_game;
pub use game::{
    Game, GameState, Turn, dealer_play, determine_result, player_hits, player_stands,
    setup_game_with_rng,
};
pub use hand::{BLACKJACK, Hand, is_blackjack, score};
pub use options::{DEALER_STANDS_ON, GameOptions};
pub use result::GameResult;
