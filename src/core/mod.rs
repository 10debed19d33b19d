//! Core engine types: cards, RNG, configuration, errors, numeric codec.
//!
//! These are the leaf building blocks. Piles, the deck, and the game are
//! assembled from them.

pub mod card;
pub mod codec;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, CardShape, Children, Color, Location, PileId, Rank, Suit};
pub use config::{foundation_reward, GameConfig, FOUNDATION_REWARDS};
pub use error::{Error, Result};
pub use rng::GameRng;
