//! Stock and waste: shuffling, dealing, drawing, and rebuilding.
//!
//! ## Draw cycle
//!
//! - `draw` moves up to `draw_count` cards from the front of the stock to the
//!   front of the waste, face-up. Only `waste[0]` is playable.
//! - Drawing on an empty stock rebuilds it instead.
//! - `rebuild` returns every waste card to the stock and sorts the stock by
//!   each card's position in the order captured at the first shuffle, so
//!   every pass through an untouched stock repeats the same sequence.
//!
//! ```
//! use rust_klondike::deck::Deck;
//!
//! let mut deck = Deck::shuffled(1);
//! deck.draw();
//! assert_eq!(deck.stock().len(), 49);
//! assert_eq!(deck.waste().len(), 3);
//! ```

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{Card, CardShape, Error, GameRng, Location, PileId, Rank, Result, Suit};

/// Default number of cards per draw.
pub const DRAW_COUNT: usize = 3;

/// The face-down stock and face-up waste.
#[derive(Clone, Debug)]
pub struct Deck {
    stock: Vector<Card>,
    waste: Vector<Card>,
    shuffle_order: Option<Vec<CardShape>>,
    order_index: FxHashMap<CardShape, usize>,
    rebuild_count: u32,
    draw_count: usize,
    rng: GameRng,
}

impl Deck {
    /// An unshuffled 52-card stock whose generator is seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_cards(Card::standard_deck(), GameRng::new(seed))
    }

    /// A stock shuffled with `seed`.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new(seed);
        deck.shuffle(seed);
        deck
    }

    /// A stock in exactly the given order, front first.
    ///
    /// The order is captured as if it came out of a shuffle, so rebuilds
    /// restore it.
    #[must_use]
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut deck = Self::from_cards(cards, GameRng::new(0));
        deck.capture_order();
        deck
    }

    fn from_cards(cards: Vec<Card>, rng: GameRng) -> Self {
        let stock = cards.into_iter().map(Self::to_stock).collect();
        Self {
            stock,
            waste: Vector::new(),
            shuffle_order: None,
            order_index: FxHashMap::default(),
            rebuild_count: 0,
            draw_count: DRAW_COUNT,
            rng,
        }
    }

    /// Set the number of cards moved per draw (at least 1).
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count.max(1);
        self
    }

    fn to_stock(card: Card) -> Card {
        let mut card = card.at(Location::Deck).face_down();
        card.owner = Some(PileId::Stock);
        card
    }

    fn to_waste(card: Card) -> Card {
        let mut card = card.at(Location::Waste);
        card.hidden = false;
        card.owner = Some(PileId::Waste);
        card
    }

    fn capture_order(&mut self) {
        let order: Vec<CardShape> = self.stock.iter().filter_map(Card::shape).collect();
        self.order_index = order.iter().enumerate().map(|(i, &shape)| (shape, i)).collect();
        self.shuffle_order = Some(order);
    }

    /// Reseed this deck's generator and permute the stock.
    ///
    /// The first shuffle fixes the order that every later rebuild restores.
    pub fn shuffle(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        let mut cards: Vec<Card> = self.stock.iter().copied().collect();
        self.rng.shuffle(&mut cards);
        self.stock = cards.into_iter().collect();

        if self.shuffle_order.is_none() {
            self.capture_order();
        }
        debug!("shuffled {} cards with seed {}", self.stock.len(), seed);
    }

    /// Remove up to `count` cards from the front of the stock.
    ///
    /// An empty stock is rebuilt first. Never fails; the count is clamped.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        if self.stock.is_empty() {
            self.rebuild();
        }
        let count = count.min(self.stock.len());
        let dealt: Vec<Card> = (0..count).filter_map(|_| self.stock.pop_front()).collect();
        debug!("dealt {} cards, {} left in stock", dealt.len(), self.stock.len());
        dealt
    }

    /// Turn up to `draw_count` cards from stock onto the front of the waste.
    ///
    /// On an empty stock this rebuilds instead of drawing.
    pub fn draw(&mut self) {
        if self.stock.is_empty() {
            self.rebuild();
            return;
        }
        let dealt = self.deal(self.draw_count);
        for card in dealt.into_iter().rev() {
            self.waste.push_front(Self::to_waste(card));
        }
    }

    /// Return the waste to the stock in the captured shuffle order.
    pub fn rebuild(&mut self) {
        let mut cards: Vec<Card> = self.stock.iter().chain(self.waste.iter()).copied().collect();
        if self.shuffle_order.is_some() {
            let index = &self.order_index;
            cards.sort_by_key(|card| card.shape().and_then(|s| index.get(&s).copied()).unwrap_or(usize::MAX));
        }

        self.stock = cards.into_iter().map(Self::to_stock).collect();
        self.waste = Vector::new();
        self.rebuild_count += 1;
        debug!("rebuilt stock ({} cards), rebuild #{}", self.stock.len(), self.rebuild_count);
    }

    /// The playable waste card, if any.
    #[must_use]
    pub fn sources(&self) -> Vec<Card> {
        self.waste.front().copied().into_iter().collect()
    }

    /// Remove the top waste card, which must be `card`.
    pub fn take_waste(&mut self, card: &Card) -> Result<Card> {
        let on_top = self.waste.front().is_some_and(|top| top.same_card(card));
        if on_top {
            if let Some(taken) = self.waste.pop_front() {
                return Ok(taken);
            }
        }
        Err(Error::SourceNotFound(format!("{} on top of the waste", card)))
    }

    /// First visible stock card, then any waste card, matching rank and suit.
    #[must_use]
    pub fn find(&self, rank: Option<Rank>, suit: Option<Suit>) -> Option<Card> {
        self.stock
            .iter()
            .find(|c| c.matches(rank, suit) && !c.is_hidden())
            .or_else(|| self.waste.iter().find(|c| c.matches(rank, suit)))
            .copied()
    }

    /// Face-down cards, front first.
    #[must_use]
    pub fn stock(&self) -> &Vector<Card> {
        &self.stock
    }

    /// Face-up cards, most recently drawn block first.
    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    /// Order captured by the first shuffle.
    #[must_use]
    pub fn shuffle_order(&self) -> Option<&[CardShape]> {
        self.shuffle_order.as_deref()
    }

    /// Times the stock has been refilled from the waste.
    #[must_use]
    pub fn rebuild_count(&self) -> u32 {
        self.rebuild_count
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Stock and waste size together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.len() + self.waste.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
