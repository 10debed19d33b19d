//! Piles: tableau columns and foundations.
//!
//! Both variants share the `Pile` contract:
//! - index 0 always holds the pile's placeholder, so a pile is never empty
//! - the *target* is the last card
//! - the *sources* are the cards that may move away as a run
//!
//! Cards are stored in `im::Vector` so cloning a whole game for look-ahead
//! is O(1).

pub mod foundation;
pub mod tableau;

pub use foundation::Foundation;
pub use tableau::Tableau;

use im::Vector;

use crate::core::{Card, Error, PileId, Rank, Result, Suit};

/// Shared behaviour of tableau columns and foundations.
pub trait Pile {
    /// Handle identifying this pile in the game's pile table.
    fn id(&self) -> PileId;

    /// The permanent placeholder at index 0.
    fn placeholder(&self) -> Card;

    /// All cards, placeholder first.
    fn cards(&self) -> &Vector<Card>;

    /// Cards that may move away, bottom of the run first.
    fn sources(&self) -> Vec<Card>;

    /// Append a run whose head is an allowable child of the target.
    fn add(&mut self, run: Vec<Card>) -> Result<()>;

    /// Remove the last played card. Never removes the placeholder.
    fn pop(&mut self) -> Option<Card>;

    /// Remove and return the suffix starting at `card`.
    fn split(&mut self, card: &Card) -> Result<Vec<Card>>;

    /// First card matching `rank` and `suit` that an observer could name.
    fn find(&self, rank: Option<Rank>, suit: Option<Suit>) -> Option<Card>;

    /// The last card in the pile.
    fn target(&self) -> Card {
        self.cards().back().copied().unwrap_or_else(|| self.placeholder())
    }

    /// Whether `card` may head a run added to this pile.
    fn accepts(&self, card: &Card) -> bool {
        self.target().allows(card)
    }

    /// Number of played cards, placeholder excluded.
    fn len(&self) -> usize {
        self.cards().len().saturating_sub(1)
    }

    /// Whether only the placeholder remains.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check that `run` is non-empty and its head may go on `target`.
pub(crate) fn check_run(target: &Card, run: &[Card]) -> Result<()> {
    match run.first() {
        Some(head) if target.allows(head) => Ok(()),
        Some(head) => Err(Error::IllegalMove {
            target: target.to_string(),
            source: head.to_string(),
        }),
        None => Err(Error::IllegalMove {
            target: target.to_string(),
            source: "empty run".to_string(),
        }),
    }
}
