//! Fixed-shape numeric snapshot of a game.
//!
//! Every sequence is padded with the `0` sentinel to its slot count and
//! truncated if longer. Face-down cards appear as the hidden id, so the
//! snapshot never reveals what an observer could not see.

use serde::{Deserialize, Serialize};

use super::Game;
use crate::core::codec::{self, EMPTY};
use crate::core::{Error, Result, Suit};
use crate::piles::Pile;

/// Stock slots.
pub const STOCK_SLOTS: usize = 24;
/// Waste slots.
pub const WASTE_SLOTS: usize = 24;
/// Slots per tableau column, placeholder included.
pub const TABLEAU_SLOTS: usize = 19;
/// Legal-move slots.
pub const MOVE_SLOTS: usize = 8;
/// Length of `Observation::flatten`.
pub const OBSERVATION_LEN: usize =
    STOCK_SLOTS + WASTE_SLOTS + 4 + super::TABLEAU_COUNT * TABLEAU_SLOTS + MOVE_SLOTS * 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Stock ids, front first.
    pub deck: [u8; STOCK_SLOTS],
    /// Waste ids, playable card first.
    pub waste: [u8; WASTE_SLOTS],
    /// Top id of each foundation, in suit order.
    pub foundations: [(Suit, u8); 4],
    /// Column ids from the placeholder up.
    pub tableaus: [[u8; TABLEAU_SLOTS]; super::TABLEAU_COUNT],
    /// `(target, source)` id pairs of the first legal moves.
    pub legal_moves: [(u8, u8); MOVE_SLOTS],
}

fn padded<T: Copy, const N: usize>(items: impl IntoIterator<Item = T>, fill: T) -> [T; N] {
    let mut slots = [fill; N];
    for (slot, item) in slots.iter_mut().zip(items) {
        *slot = item;
    }
    slots
}

impl Observation {
    pub(crate) fn from_game(game: &Game) -> Self {
        let deck = padded(game.deck().stock().iter().map(codec::encode), EMPTY);
        let waste = padded(game.deck().waste().iter().map(codec::encode), EMPTY);
        let foundations = Suit::ALL.map(|suit| (suit, codec::encode(&game.foundation(suit).target())));
        let tableaus = game
            .tableaus()
            .each_ref()
            .map(|t| padded(t.cards().iter().map(codec::encode), EMPTY));
        let legal_moves = padded(
            game.legal_moves()
                .iter()
                .map(|mv| (codec::encode(&mv.target), codec::encode(&mv.source))),
            (EMPTY, EMPTY),
        );

        Self {
            deck,
            waste,
            foundations,
            tableaus,
            legal_moves,
        }
    }

    /// Top id of the foundation for `suit`.
    #[must_use]
    pub fn foundation(&self, suit: Suit) -> u8 {
        self.foundations[suit.index()].1
    }

    /// Number of occupied legal-move slots.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.legal_moves.iter().take_while(|m| **m != (EMPTY, EMPTY)).count()
    }

    /// All ids in one vector: stock, waste, foundations, tableaus, then
    /// move pairs as target, source.
    #[must_use]
    pub fn flatten(&self) -> Vec<u8> {
        let mut flat = Vec::with_capacity(OBSERVATION_LEN);
        flat.extend_from_slice(&self.deck);
        flat.extend_from_slice(&self.waste);
        flat.extend(self.foundations.iter().map(|&(_, id)| id));
        for column in &self.tableaus {
            flat.extend_from_slice(column);
        }
        for &(target, source) in &self.legal_moves {
            flat.push(target);
            flat.push(source);
        }
        flat
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Encoding(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| Error::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{HIDDEN, TABLEAU_PLACEHOLDER};

    #[test]
    fn test_initial_observation() {
        let game = Game::new(Some(1));
        let obs = game.state();

        assert!(obs.deck.iter().all(|&id| id == HIDDEN));
        assert!(obs.waste.iter().all(|&id| id == EMPTY));
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(obs.foundations[i], (*suit, 53 + i as u8));
        }
        for (i, column) in obs.tableaus.iter().enumerate() {
            assert_eq!(column[0], TABLEAU_PLACEHOLDER);
            assert!(column[1..=i].iter().all(|&id| id == HIDDEN));
            assert!((1..=52).contains(&column[i + 1]));
            assert!(column[i + 2..].iter().all(|&id| id == EMPTY));
        }
    }

    #[test]
    fn test_waste_is_visible() {
        let mut game = Game::new(Some(1));
        game.draw();
        let obs = game.state();
        assert!(obs.waste[..3].iter().all(|&id| (1..=52).contains(&id)));
        assert_eq!(obs.waste[3], EMPTY);
        assert_eq!(obs.deck[20], HIDDEN);
        assert_eq!(obs.deck[21], EMPTY);
    }

    #[test]
    fn test_legal_moves_are_encoded_in_order() {
        let mut game = Game::new(Some(11));
        game.draw();
        let moves = game.legal_moves();
        let obs = game.state();

        assert_eq!(obs.move_count(), moves.len().min(MOVE_SLOTS));
        for (slot, mv) in obs.legal_moves.iter().zip(&moves) {
            assert_eq!(*slot, (codec::encode(&mv.target), codec::encode(&mv.source)));
        }
    }

    #[test]
    fn test_flatten_layout() {
        let game = Game::new(Some(3));
        let obs = game.state();
        let flat = obs.flatten();

        assert_eq!(flat.len(), OBSERVATION_LEN);
        assert_eq!(OBSERVATION_LEN, 201);
        assert_eq!(&flat[..STOCK_SLOTS], &obs.deck);
        assert_eq!(flat[48], 53);
        assert_eq!(flat[52], TABLEAU_PLACEHOLDER);
    }

    #[test]
    fn test_bytes_round_trip() {
        let obs = Game::new(Some(5)).state();
        let bytes = obs.to_bytes().unwrap();
        assert_eq!(Observation::from_bytes(&bytes).unwrap(), obs);
        assert!(matches!(Observation::from_bytes(&bytes[..4]), Err(Error::Encoding(_))));
    }
}
