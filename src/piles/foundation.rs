//! Foundations: one per suit, built up from Ace to King.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{check_run, Pile};
use crate::core::{Card, Error, Location, PileId, Rank, Result, Suit};

/// A single-suit foundation pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    cards: Vector<Card>,
}

impl Foundation {
    /// An empty foundation for `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self::with_cards(suit, std::iter::empty())
    }

    /// A foundation already holding `cards`, Ace first. Not validated.
    #[must_use]
    pub fn with_cards(suit: Suit, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut foundation = Self {
            suit,
            cards: Vector::new(),
        };
        let placeholder = foundation.placeholder();
        foundation.cards.push_back(placeholder);
        foundation.cards.extend(cards);
        foundation.refresh();
        foundation
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Whether the foundation runs all the way to the King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.target().rank() == Some(Rank::King)
    }

    /// Every card is face-up and linked to this foundation.
    fn refresh(&mut self) {
        let id = self.id();
        for card in self.cards.iter_mut() {
            *card = card.at(Location::Foundation);
            card.hidden = false;
            card.owner = Some(id);
        }
    }
}

impl Pile for Foundation {
    fn id(&self) -> PileId {
        PileId::Foundation(self.suit.index() as u8)
    }

    fn placeholder(&self) -> Card {
        let mut card = Card::foundation_placeholder(self.suit);
        card.owner = Some(self.id());
        card
    }

    fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    fn sources(&self) -> Vec<Card> {
        vec![self.target()]
    }

    /// Foundations take one card at a time.
    fn add(&mut self, run: Vec<Card>) -> Result<()> {
        check_run(&self.target(), &run)?;
        if run.len() > 1 {
            return Err(Error::IllegalMove {
                target: self.target().to_string(),
                source: format!("run of {} headed by {}", run.len(), run[0]),
            });
        }
        self.cards.extend(run);
        self.refresh();
        Ok(())
    }

    fn pop(&mut self) -> Option<Card> {
        if self.is_empty() {
            return None;
        }
        self.cards.pop_back()
    }

    /// Foundations only ever give up their top card.
    fn split(&mut self, card: &Card) -> Result<Vec<Card>> {
        if self.is_empty() || !self.target().same_card(card) {
            return Err(Error::SourceNotFound(format!("{} on top of {}", card, self.id())));
        }
        Ok(self.pop().into_iter().collect())
    }

    fn find(&self, rank: Option<Rank>, suit: Option<Suit>) -> Option<Card> {
        self.cards.iter().find(|c| c.matches(rank, suit)).copied()
    }
}
