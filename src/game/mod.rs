//! Game orchestration: one deck, four foundations, seven tableau columns.
//!
//! ## Turn loop
//!
//! A controller repeatedly reads `legal_moves()` (or decides to `draw()`),
//! executes one move with `move_cards`, and re-reads `state()`. A move must
//! come from the current `legal_moves()` snapshot: `move_cards` trusts it and
//! only the target pile's own acceptance check stands between a stale move
//! and the board.
//!
//! ```
//! use rust_klondike::Game;
//!
//! let mut game = Game::new(Some(1));
//! for _ in 0..100 {
//!     match game.legal_moves().first().copied() {
//!         Some(mv) => game.move_cards(mv).unwrap(),
//!         None => game.draw(),
//!     };
//! }
//! ```

mod observation;

pub use observation::{
    Observation, MOVE_SLOTS, OBSERVATION_LEN, STOCK_SLOTS, TABLEAU_SLOTS, WASTE_SLOTS,
};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    foundation_reward, Card, Error, GameConfig, GameRng, Location, PileId, Rank, Result, Suit,
};
use crate::deck::Deck;
use crate::piles::{Foundation, Pile, Tableau};

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundations.
pub const FOUNDATION_COUNT: usize = 4;

/// A move: place the run headed by `source` onto `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub target: Card,
    pub source: Card,
}

impl Move {
    #[must_use]
    pub const fn new(target: Card, source: Card) -> Self {
        Self { target, source }
    }
}

/// A single hand of Klondike.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    deck: Deck,
    foundations: [Foundation; FOUNDATION_COUNT],
    tableaus: [Tableau; TABLEAU_COUNT],
    score: f32,
}

impl Game {
    /// Deal a new hand with default scoring. `None` picks a random seed.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let mut config = GameConfig::new();
        config.seed = seed;
        Self::with_config(config)
    }

    /// Deal a new hand. An unseeded config gets a random seed, recorded in
    /// the game's config so the hand can be replayed.
    #[must_use]
    pub fn with_config(mut config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        config.seed = Some(seed);
        Self::deal(Deck::shuffled(seed), config)
    }

    /// Deal the tableau from `deck` as it stands: column `i` takes the next
    /// `i + 1` cards, and only its top card is turned face-up.
    #[must_use]
    pub fn deal(deck: Deck, config: GameConfig) -> Self {
        let mut deck = deck.with_draw_count(config.draw_count);
        let tableaus: [Tableau; TABLEAU_COUNT] =
            std::array::from_fn(|i| Tableau::with_cards(i as u8, deck.deal(i + 1)));
        let foundations = Suit::ALL.map(Foundation::new);

        info!(
            "dealt new hand (seed {:?}, {} cards in stock)",
            config.seed,
            deck.stock().len()
        );

        Self {
            config,
            deck,
            foundations,
            tableaus,
            score: 0.0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the shuffle, if the deck was shuffled by the game.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn tableaus(&self) -> &[Tableau; TABLEAU_COUNT] {
        &self.tableaus
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation; FOUNDATION_COUNT] {
        &self.foundations
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    /// Rewards accumulated by `draw` and `move_cards`.
    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Whether every foundation is topped by its King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Every normal card in play: stock, waste, foundations, then tableaus.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.deck
            .stock()
            .iter()
            .chain(self.deck.waste().iter())
            .chain(self.foundations.iter().flat_map(|f| f.cards().iter()))
            .chain(self.tableaus.iter().flat_map(|t| t.cards().iter()))
            .filter(|c| !c.is_placeholder())
            .copied()
            .collect()
    }

    fn pile(&self, id: PileId) -> Option<&dyn Pile> {
        match id {
            PileId::Tableau(i) => self.tableaus.get(i as usize).map(|t| t as &dyn Pile),
            PileId::Foundation(i) => self.foundations.get(i as usize).map(|f| f as &dyn Pile),
            PileId::Stock | PileId::Waste => None,
        }
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut dyn Pile> {
        match id {
            PileId::Tableau(i) => self.tableaus.get_mut(i as usize).map(|t| t as &mut dyn Pile),
            PileId::Foundation(i) => self
                .foundations
                .get_mut(i as usize)
                .map(|f| f as &mut dyn Pile),
            PileId::Stock | PileId::Waste => None,
        }
    }

    // === Move discovery ===

    /// Top card of every tableau, then of every foundation.
    #[must_use]
    pub fn targets(&self) -> Vec<Card> {
        self.tableaus
            .iter()
            .map(Pile::target)
            .chain(self.foundations.iter().map(Pile::target))
            .collect()
    }

    /// Movable runs of every tableau and foundation, then the waste top.
    #[must_use]
    pub fn sources(&self) -> Vec<Card> {
        self.tableaus
            .iter()
            .flat_map(Pile::sources)
            .chain(self.foundations.iter().flat_map(Pile::sources))
            .chain(self.deck.sources())
            .collect()
    }

    /// Every (target, source) pair where the source is an allowable child of
    /// the target, in target-then-source order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let sources = self.sources();
        let mut moves = Vec::new();

        for target in self.targets() {
            let children = target.allowable_children();
            if children.is_empty() {
                continue;
            }
            let single_only = target.location() == Location::Foundation;
            moves.extend(
                sources
                    .iter()
                    .filter(|s| !s.is_hidden() && s.shape().is_some_and(|shape| children.contains(&shape)))
                    .filter(|s| !single_only || self.is_top(s))
                    .map(|&source| Move::new(target, source)),
            );
        }

        trace!("{} legal moves", moves.len());
        moves
    }

    // === Execution ===

    /// Execute `mv`, returning its reward and adding it to the score.
    ///
    /// The target pile checks the source before anything is removed, so a
    /// rejected move leaves the game untouched.
    pub fn move_cards(&mut self, mv: Move) -> Result<f32> {
        let Move { target, source } = mv;
        let illegal = || Error::IllegalMove {
            target: target.to_string(),
            source: source.to_string(),
        };

        let target_id = target.owner().ok_or_else(illegal)?;
        let accepts = self.pile(target_id).is_some_and(|pile| pile.accepts(&source));
        let fits = target_id.location() != Location::Foundation || self.is_top(&source);
        if !accepts || !fits {
            return Err(illegal());
        }

        let reward = self.get_move_reward(mv);

        let run = match source.owner() {
            Some(PileId::Waste) => vec![self.deck.take_waste(&source)?],
            Some(id @ (PileId::Tableau(_) | PileId::Foundation(_))) => self
                .pile_mut(id)
                .ok_or_else(|| Error::SourceNotFound(format!("{} in {}", source, id)))?
                .split(&source)?,
            Some(PileId::Stock) | None => {
                return Err(Error::SourceNotFound(format!("{} is not playable", source)))
            }
        };

        let count = run.len();
        self.pile_mut(target_id).ok_or_else(illegal)?.add(run)?;
        self.score += reward;

        debug!("moved {} card(s) {} -> {} (reward {})", count, source, target, reward);
        Ok(reward)
    }

    /// Draw from the stock, returning the draw reward and adding it to the
    /// score. The reward is judged before drawing.
    pub fn draw(&mut self) -> f32 {
        let reward = self.get_draw_reward();
        self.deck.draw();
        self.score += reward;
        debug!(
            "drew: {} in stock, {} in waste (reward {})",
            self.deck.stock().len(),
            self.deck.waste().len(),
            reward
        );
        reward
    }

    // === Scoring ===

    /// Reward for `mv` judged against the current state.
    ///
    /// - onto a foundation: + rank table
    /// - off a foundation: - rank table
    /// - from the waste: + waste bonus
    /// - uncovering a hidden tableau card: + reveal bonus
    #[must_use]
    pub fn get_move_reward(&self, mv: Move) -> f32 {
        let Move { target, source } = mv;
        let table = source.rank().map_or(0.0, foundation_reward);
        let mut reward = 0.0;

        if target.location() == Location::Foundation {
            reward += table;
        }
        if source.location() == Location::Foundation {
            reward -= table;
        }

        match source.location() {
            Location::Deck | Location::Waste => reward += self.config.waste_bonus,
            Location::Tableau if self.reveals_hidden(&source) => reward += self.config.reveal_bonus,
            _ => {}
        }

        reward
    }

    /// Whether `card` would move alone, with nothing stacked on it.
    fn is_top(&self, card: &Card) -> bool {
        match card.owner() {
            Some(PileId::Tableau(i)) => self
                .tableaus
                .get(i as usize)
                .is_some_and(|t| t.target().same_card(card)),
            Some(PileId::Waste | PileId::Foundation(_)) => true,
            Some(PileId::Stock) | None => false,
        }
    }

    /// Whether moving `source` away uncovers a face-down card.
    fn reveals_hidden(&self, source: &Card) -> bool {
        match source.owner() {
            Some(PileId::Tableau(i)) => self
                .tableaus
                .get(i as usize)
                .and_then(|t| t.parent_of(source))
                .is_some_and(|parent| parent.is_hidden()),
            _ => false,
        }
    }

    /// Penalty for drawing on an exhausted stock once the free rebuilds are
    /// used up, zero otherwise.
    #[must_use]
    pub fn get_draw_reward(&self) -> f32 {
        if self.deck.stock().is_empty() && self.deck.rebuild_count() >= self.config.free_rebuilds {
            self.config.exhausted_draw_penalty
        } else {
            0.0
        }
    }

    // === Lookup ===

    /// First card an observer could name with `rank` and `suit`, searching
    /// foundations, then tableaus, then the deck.
    #[must_use]
    pub fn find_card(&self, rank: Option<Rank>, suit: Option<Suit>) -> Option<Card> {
        self.foundations
            .iter()
            .find_map(|f| f.find(rank, suit))
            .or_else(|| self.tableaus.iter().find_map(|t| t.find(rank, suit)))
            .or_else(|| self.deck.find(rank, suit))
    }

    /// Fixed-shape numeric snapshot for external consumers.
    #[must_use]
    pub fn state(&self) -> Observation {
        Observation::from_game(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardShape;

    fn shape(rank: Rank, suit: Suit) -> Option<CardShape> {
        Some(CardShape::new(rank, suit))
    }

    #[test]
    fn test_initial_layout() {
        let game = Game::new(Some(1));

        for (i, tableau) in game.tableaus().iter().enumerate() {
            assert_eq!(tableau.len(), i + 1);
            assert!(!tableau.target().is_hidden());
            let hidden = tableau.cards().iter().filter(|c| c.is_hidden()).count();
            assert_eq!(hidden, i);
        }
        for foundation in game.foundations() {
            assert!(foundation.is_empty());
        }
        assert_eq!(game.deck().stock().len(), 24);
        assert!(game.deck().waste().is_empty());
        assert_eq!(game.score(), 0.0);
    }

    #[test]
    fn test_unseeded_game_records_seed() {
        let game = Game::new(None);
        let seed = game.seed().unwrap();
        let replay = Game::new(Some(seed));
        assert_eq!(game.state(), replay.state());
    }

    #[test]
    fn test_targets_order() {
        let game = Game::new(Some(4));
        let targets = game.targets();
        assert_eq!(targets.len(), 11);
        for (i, target) in targets.iter().take(TABLEAU_COUNT).enumerate() {
            assert_eq!(target.owner(), Some(PileId::Tableau(i as u8)));
        }
        for (i, target) in targets.iter().skip(TABLEAU_COUNT).enumerate() {
            assert_eq!(target.owner(), Some(PileId::Foundation(i as u8)));
            assert!(target.is_placeholder());
        }
    }

    #[test]
    fn test_sources_include_waste_top() {
        let mut game = Game::new(Some(4));
        let before = game.sources().len();
        game.draw();
        let sources = game.sources();
        assert_eq!(sources.len(), before + 1);
        assert_eq!(sources.last().and_then(Card::owner), Some(PileId::Waste));
    }

    #[test]
    fn test_legal_moves_are_allowed_children() {
        let mut game = Game::new(Some(2));
        for _ in 0..5 {
            game.draw();
            for mv in game.legal_moves() {
                assert!(mv.target.allows(&mv.source));
            }
        }
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new(Some(3));
        let before = game.state();
        let tableau = game.tableaus()[0].target();
        let other = game.tableaus()[1].target();

        // Two random tops almost never fit, and a placeholder never does.
        let placeholder = game.foundations()[0].target();
        let result = game.move_cards(Move::new(tableau, placeholder));
        assert!(result.is_err());
        if !tableau.allows(&other) {
            assert!(game.move_cards(Move::new(tableau, other)).is_err());
        }
        assert_eq!(game.state(), before);
        assert_eq!(game.score(), 0.0);
    }

    #[test]
    fn test_stock_card_cannot_move() {
        let mut game = Game::new(Some(8));
        let buried = game.deck().stock()[0];
        let target = game.foundation(Suit::Spades).target();
        let result = game.move_cards(Move::new(target, buried));
        assert!(result.is_err());
        assert_eq!(game.deck().stock().len(), 24);
    }

    /// Spade foundation up to 7♠, column 0 holding 8♠ under 7♥.
    fn buried_eight() -> Game {
        let mut game = Game::new(Some(12));
        game.foundations[0] = Foundation::with_cards(
            Suit::Spades,
            Rank::ALL[..7].iter().map(|&r| Card::normal(r, Suit::Spades)),
        );
        game.tableaus[0] = Tableau::with_cards(
            0,
            vec![Card::normal(Rank::Eight, Suit::Spades), Card::normal(Rank::Seven, Suit::Hearts)],
        );
        game
    }

    #[test]
    fn test_foundation_never_offered_a_run() {
        let game = buried_eight();
        let eight = game.tableaus()[0].cards()[1];

        let offered = game.legal_moves().into_iter().any(|mv| {
            mv.target.location() == Location::Foundation && mv.source == eight
        });
        assert!(!offered);
        for mv in game.legal_moves() {
            if mv.target.location() == Location::Foundation {
                assert!(game.is_top(&mv.source));
            }
        }
    }

    #[test]
    fn test_foundation_rejects_run_move() {
        let mut game = buried_eight();
        let eight = game.tableaus()[0].cards()[1];
        let seven = game.foundation(Suit::Spades).target();

        let result = game.move_cards(Move::new(seven, eight));
        assert!(matches!(result, Err(Error::IllegalMove { .. })));
        assert_eq!(game.foundation(Suit::Spades).len(), 7);
        assert_eq!(game.tableaus()[0].len(), 2);
        assert_eq!(game.score(), 0.0);
    }

    #[test]
    fn test_foundation_takes_uncovered_top() {
        let mut game = buried_eight();
        let seven_hearts = game.tableaus()[0].target();
        let red_target = game.foundation(Suit::Spades).target();
        // 7♥ is not the next spade, so only the 8♠ can follow once uncovered.
        assert!(game.move_cards(Move::new(red_target, seven_hearts)).is_err());

        game.tableaus[0].pop();
        let eight = game.tableaus()[0].target();
        let mv = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.target.location() == Location::Foundation && mv.source == eight)
            .unwrap();
        assert_eq!(game.move_cards(mv).unwrap(), 30.0);
        assert_eq!(game.foundation(Suit::Spades).len(), 8);
    }

    #[test]
    fn test_draw_reward_after_free_rebuilds() {
        let mut game = Game::new(Some(5));
        let mut rebuilds_seen = 0;

        while game.deck().rebuild_count() < 3 {
            if game.deck().stock().is_empty() {
                assert_eq!(game.get_draw_reward(), 0.0);
                rebuilds_seen += 1;
            }
            assert_eq!(game.draw(), 0.0);
        }
        assert_eq!(rebuilds_seen, 3);

        while !game.deck().stock().is_empty() {
            assert_eq!(game.draw(), 0.0);
        }
        assert_eq!(game.get_draw_reward(), -20.0);
        assert_eq!(game.draw(), -20.0);
        assert_eq!(game.score(), -20.0);
    }

    #[test]
    fn test_find_card_search_order() {
        let game = Game::new(Some(6));

        let top = game.tableaus()[3].target();
        let found = game.find_card(top.rank(), top.suit()).unwrap();
        assert_eq!(found, top);

        let placeholder = game.find_card(None, Some(Suit::Diamonds)).unwrap();
        assert_eq!(placeholder.owner(), Some(PileId::Foundation(3)));

        // No column is empty yet.
        assert!(game.find_card(None, None).is_none());

        let hidden = game.tableaus()[6].cards()[1];
        assert!(hidden.is_hidden());
        assert!(game.find_card(hidden.rank(), hidden.suit()).is_none());
    }

    #[test]
    fn test_cards_counts_every_card_once() {
        let game = Game::new(Some(9));
        let mut shapes: Vec<_> = game.cards().iter().filter_map(Card::shape).collect();
        assert_eq!(shapes.len(), 52);
        shapes.sort();
        shapes.dedup();
        assert_eq!(shapes.len(), 52);
        assert_eq!(shapes.first().copied(), shape(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn test_is_won() {
        let mut game = Game::new(Some(1));
        assert!(!game.is_won());
        game.foundations = Suit::ALL.map(|suit| {
            Foundation::with_cards(suit, Rank::ALL.iter().map(move |&r| Card::normal(r, suit)))
        });
        assert!(game.is_won());
    }
}
