//! Game configuration.
//!
//! `GameConfig` holds the seed and the scoring knobs of a hand. The defaults
//! reproduce standard draw-three Klondike scoring:
//!
//! | Event                                        | Reward |
//! |----------------------------------------------|--------|
//! | card played from the waste                   | +20    |
//! | hidden tableau card uncovered                | +20    |
//! | draw on an empty stock after 3 rebuilds      | -20    |
//! | card onto / off a foundation                 | ± rank table |

use serde::{Deserialize, Serialize};

use super::card::Rank;

/// Foundation reward per rank, Ace first.
pub const FOUNDATION_REWARDS: [f32; 13] = [
    100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0, 10.0, 10.0, 10.0,
];

/// Reward for moving a card of `rank` onto a foundation.
#[must_use]
pub const fn foundation_reward(rank: Rank) -> f32 {
    FOUNDATION_REWARDS[rank.index()]
}

/// Configuration for a single hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Cards moved from stock to waste per draw.
    pub draw_count: usize,

    /// Rebuilds allowed before drawing on an empty stock is penalised.
    pub free_rebuilds: u32,

    /// Bonus for playing the top waste card.
    pub waste_bonus: f32,

    /// Bonus for a move that uncovers a hidden tableau card.
    pub reveal_bonus: f32,

    /// Reward (negative) for drawing on an exhausted stock.
    pub exhausted_draw_penalty: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: 3,
            free_rebuilds: 3,
            waste_bonus: 20.0,
            reveal_bonus: 20.0,
            exhausted_draw_penalty: -20.0,
        }
    }
}

impl GameConfig {
    /// Default configuration with an unseeded shuffle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of cards per draw (at least 1).
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count.max(1);
        self
    }

    /// Set how many rebuilds are free before the draw penalty applies.
    #[must_use]
    pub fn with_free_rebuilds(mut self, rebuilds: u32) -> Self {
        self.free_rebuilds = rebuilds;
        self
    }

    /// Set the waste and reveal bonuses.
    #[must_use]
    pub fn with_bonuses(mut self, waste: f32, reveal: f32) -> Self {
        self.waste_bonus = waste;
        self.reveal_bonus = reveal;
        self
    }

    /// Set the exhausted-draw penalty.
    #[must_use]
    pub fn with_exhausted_draw_penalty(mut self, penalty: f32) -> Self {
        self.exhausted_draw_penalty = penalty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.draw_count, 3);
        assert_eq!(config.free_rebuilds, 3);
        assert_eq!(config.waste_bonus, 20.0);
        assert_eq!(config.reveal_bonus, 20.0);
        assert_eq!(config.exhausted_draw_penalty, -20.0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_seed(9)
            .with_draw_count(0)
            .with_free_rebuilds(1)
            .with_bonuses(5.0, 15.0)
            .with_exhausted_draw_penalty(-1.0);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.draw_count, 1);
        assert_eq!(config.free_rebuilds, 1);
        assert_eq!(config.waste_bonus, 5.0);
        assert_eq!(config.reveal_bonus, 15.0);
        assert_eq!(config.exhausted_draw_penalty, -1.0);
    }

    #[test]
    fn test_foundation_reward_table() {
        assert_eq!(foundation_reward(Rank::Ace), 100.0);
        assert_eq!(foundation_reward(Rank::Two), 90.0);
        assert_eq!(foundation_reward(Rank::Nine), 20.0);
        assert_eq!(foundation_reward(Rank::Ten), 10.0);
        assert_eq!(foundation_reward(Rank::King), 10.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
