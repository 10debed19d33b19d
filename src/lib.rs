//! # rust-klondike
//!
//! A deterministic Klondike solitaire rule engine for agents and
//! reinforcement-learning environments.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every hand is a pure function of its seed. Each deck
//!    owns its generator, so games never share random state.
//!
//! 2. **Legality in the cards**: Every card knows which children it allows
//!    for its current location. Move generation is a cross product of
//!    targets and sources filtered through that rule.
//!
//! 3. **Observer-safe**: Face-down cards never leak through `Observation`
//!    or rendering.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles use `im::Vector`, so a `Game`
//!   clones in O(1) for look-ahead search.
//!
//! - **Owner handles**: Cards carry a `PileId` naming their container
//!   instead of a back-pointer. The game resolves it through a closed match.
//!
//! ## Modules
//!
//! - `core`: Cards, numeric encoding, RNG, configuration, errors
//! - `piles`: Tableau columns and foundations behind the `Pile` trait
//! - `deck`: Stock and waste, shuffle, draw and rebuild
//! - `game`: Orchestration, scoring, observations
//! - `env`: Gym-style step/reset wrapper
//! - `render`: Text rendering
//!
//! ```
//! use rust_klondike::{Game, Pile};
//!
//! let mut game = Game::new(Some(7));
//! assert_eq!(game.tableaus()[6].len(), 7);
//!
//! let reward = game.draw();
//! assert_eq!(reward, 0.0);
//! assert_eq!(game.state().flatten().len(), 201);
//! ```

pub mod core;
pub mod deck;
pub mod env;
pub mod game;
pub mod piles;
pub mod render;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, CardShape, Color, Error, GameConfig, GameRng, Location, PileId, Rank, Result, Suit,
};

pub use crate::deck::Deck;

pub use crate::piles::{Foundation, Pile, Tableau};

pub use crate::game::{Game, Move, Observation};

pub use crate::env::{SolitaireEnv, Step};
