//! Gym-style environment over a single game.
//!
//! ## Action space
//!
//! - `0` ends the episode
//! - `1` draws from the stock
//! - `2..=9` plays legal-move slot `action - 2` of the current observation
//!
//! Slot `i` is the `i`-th entry of `Game::legal_moves`, the same order the
//! observation encodes. An empty slot is a no-op with zero reward.
//! `resolve` maps an encoded id pair from an older observation back to a
//! live move.

use log::debug;

use crate::core::codec::{self, EMPTY};
use crate::core::{Error, GameConfig, GameRng, Result};
use crate::game::{Game, Move, Observation, MOVE_SLOTS};

/// Action that ends the episode.
pub const END_ACTION: usize = 0;
/// Action that draws from the stock.
pub const DRAW_ACTION: usize = 1;
/// First action that plays a legal-move slot.
pub const FIRST_MOVE_ACTION: usize = 2;
/// Size of the action space.
pub const ACTION_COUNT: usize = FIRST_MOVE_ACTION + MOVE_SLOTS;

/// Outcome of one `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
}

/// Episode wrapper around a `Game`.
#[derive(Clone, Debug)]
pub struct SolitaireEnv {
    config: GameConfig,
    game: Game,
    steps: u64,
    done: bool,
}

impl SolitaireEnv {
    /// An environment with a freshly dealt game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let game = Game::with_config(config.clone());
        Self {
            config,
            game,
            steps: 0,
            done: false,
        }
    }

    /// Deal a new game. `None` keeps the configured seed, or picks a random
    /// one if there is none.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        let mut config = self.config.clone();
        if seed.is_some() {
            config.seed = seed;
        }
        self.game = Game::with_config(config);
        self.steps = 0;
        self.done = false;
        debug!("env reset (seed {:?})", self.game.seed());
        self.game.state()
    }

    /// Apply `action` and report the new observation.
    pub fn step(&mut self, action: usize) -> Result<Step> {
        if action >= ACTION_COUNT {
            return Err(Error::InvalidAction(action));
        }

        let reward = match action {
            END_ACTION => {
                self.done = true;
                0.0
            }
            DRAW_ACTION => self.game.draw(),
            slot => match self.game.legal_moves().get(slot - FIRST_MOVE_ACTION).copied() {
                Some(mv) => self.game.move_cards(mv)?,
                None => 0.0,
            },
        };

        self.steps += 1;
        self.done |= self.game.is_won();

        Ok(Step {
            observation: self.game.state(),
            reward,
            done: self.done,
        })
    }

    /// The live move named by a `(target, source)` id pair, if it is legal.
    #[must_use]
    pub fn resolve(&self, target: u8, source: u8) -> Option<Move> {
        if target == EMPTY || source == EMPTY {
            return None;
        }
        let (target_rank, target_suit) = codec::decode(target)?;
        let (source_rank, source_suit) = codec::decode(source)?;
        let mv = Move::new(
            self.game.find_card(target_rank, target_suit)?,
            self.game.find_card(source_rank, source_suit)?,
        );
        self.game.legal_moves().contains(&mv).then_some(mv)
    }

    /// A uniformly random action among draw and the occupied move slots.
    pub fn random_action(&self, rng: &mut GameRng) -> usize {
        let occupied = self.game.state().move_count();
        let choice = rng.below(occupied + 1);
        if choice == 0 {
            DRAW_ACTION
        } else {
            FIRST_MOVE_ACTION + choice - 1
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        self.game.state()
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.game.render()
    }
}
