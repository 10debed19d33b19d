//! Tableau columns.
//!
//! Cards build down in alternating colors. Only the face-up suffix of a
//! column can move, and removing cards always turns the new top face-up.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{check_run, Pile};
use crate::core::{Card, Error, Location, PileId, Rank, Result, Suit};

/// One of the seven tableau columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    index: u8,
    cards: Vector<Card>,
}

impl Tableau {
    /// An empty column.
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self::with_cards(index, std::iter::empty())
    }

    /// A column holding `cards` bottom first. The top card is turned face-up.
    #[must_use]
    pub fn with_cards(index: u8, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut tableau = Self {
            index,
            cards: Vector::new(),
        };
        let placeholder = tableau.placeholder();
        tableau.cards.push_back(placeholder);
        tableau.cards.extend(cards);
        tableau.refresh();
        tableau
    }

    /// Zero-based column index.
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    /// The card directly below `card`, if `card` is in this column.
    ///
    /// The placeholder sits below the first played card; nothing sits below
    /// the placeholder itself.
    #[must_use]
    pub fn parent_of(&self, card: &Card) -> Option<Card> {
        let position = self.cards.iter().position(|c| c.same_card(card))?;
        position.checked_sub(1).and_then(|i| self.cards.get(i).copied())
    }

    /// Relink every card to this column and reveal the top.
    fn refresh(&mut self) {
        let id = self.id();
        for card in self.cards.iter_mut() {
            *card = card.at(Location::Tableau);
            card.owner = Some(id);
        }
        if let Some(top) = self.cards.back_mut() {
            top.hidden = false;
        }
    }
}

impl Pile for Tableau {
    fn id(&self) -> PileId {
        PileId::Tableau(self.index)
    }

    fn placeholder(&self) -> Card {
        let mut card = Card::tableau_placeholder();
        card.owner = Some(self.id());
        card
    }

    fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    fn sources(&self) -> Vec<Card> {
        if self.is_empty() {
            return vec![self.target()];
        }

        let mut run: Vec<Card> = self
            .cards
            .iter()
            .rev()
            .take_while(|c| !c.is_hidden() && !c.is_placeholder())
            .copied()
            .collect();
        run.reverse();
        run
    }

    fn add(&mut self, run: Vec<Card>) -> Result<()> {
        check_run(&self.target(), &run)?;
        self.cards.extend(run);
        self.refresh();
        Ok(())
    }

    fn pop(&mut self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        let card = self.cards.pop_back();
        self.refresh();
        card
    }

    fn split(&mut self, card: &Card) -> Result<Vec<Card>> {
        let index = self
            .cards
            .iter()
            .position(|c| c.same_card(card))
            .ok_or_else(|| Error::SourceNotFound(format!("{} in {}", card, self.id())))?;

        let run: Vec<Card> = self.cards.split_off(index).into_iter().collect();
        if self.cards.is_empty() {
            let placeholder = self.placeholder();
            self.cards.push_back(placeholder);
        }
        self.refresh();
        Ok(run)
    }

    fn find(&self, rank: Option<Rank>, suit: Option<Suit>) -> Option<Card> {
        match (rank, suit) {
            (Some(_), Some(_)) => self
                .cards
                .iter()
                .find(|c| c.matches(rank, suit) && !c.is_hidden())
                .copied(),
            (None, None) => Some(self.target()).filter(Card::is_placeholder),
            _ => None,
        }
    }
}
