//! Card model: ranks, suits, locations, and the placement rule.
//!
//! A `Card` takes one of three shapes:
//! - **normal**: rank and suit both present
//! - **foundation placeholder**: suit only, always located in a foundation
//! - **tableau placeholder**: neither rank nor suit, always located in a tableau
//!
//! Placeholders are synthetic anchors for empty piles. They are never counted
//! among the 52 playing cards.
//!
//! ## Ownership handle
//!
//! Each card carries an optional `PileId` naming the container that currently
//! holds it. The handle is resolved through the owning `Game`; cards never
//! point back at their pile.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::{Error, Result};

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    const SYMBOLS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];

    /// Zero-based position in `Rank::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rank one below this one, if any.
    #[must_use]
    pub const fn lower(self) -> Option<Rank> {
        match self {
            Rank::Ace => None,
            _ => Some(Self::ALL[self as usize - 1]),
        }
    }

    /// The rank one above this one, if any.
    #[must_use]
    pub const fn higher(self) -> Option<Rank> {
        match self {
            Rank::King => None,
            _ => Some(Self::ALL[self as usize + 1]),
        }
    }

    /// Single-character symbol (`A`, `2`..`9`, `T`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> char {
        Self::SYMBOLS[self as usize]
    }

    /// Parse a rank from its symbol.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        Self::SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| Error::InvalidCard(format!("rank '{}' is not one of A23456789TJQK", symbol)))
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => Err(Error::InvalidCard(format!("rank '{}' is not a single symbol", s))),
        }
    }
}

/// Card color, used for tableau alternation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Card suit. Declaration order (s, h, c, d) is the canonical suit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    const SYMBOLS: [char; 4] = ['s', 'h', 'c', 'd'];

    /// Zero-based position in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        Self::SYMBOLS[self as usize]
    }

    /// Unicode suit glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2665}',
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// The two suits of the opposite color, in canonical order.
    #[must_use]
    pub const fn opposite(self) -> [Suit; 2] {
        match self.color() {
            Color::Black => [Suit::Hearts, Suit::Diamonds],
            Color::Red => [Suit::Spades, Suit::Clubs],
        }
    }

    /// Parse a suit from its symbol.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        Self::SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| Error::InvalidCard(format!("suit '{}' is not one of shcd", symbol)))
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => Err(Error::InvalidCard(format!("suit '{}' is not a single symbol", s))),
        }
    }
}

/// Rule context of a card. Decides which children it allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Tableau,
    Foundation,
    Deck,
    Waste,
}

impl Location {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Location::Tableau => "tableau",
            Location::Foundation => "foundation",
            Location::Deck => "deck",
            Location::Waste => "waste",
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tableau" => Ok(Location::Tableau),
            "foundation" => Ok(Location::Foundation),
            "deck" => Ok(Location::Deck),
            "waste" => Ok(Location::Waste),
            _ => Err(Error::InvalidCard(format!(
                "location '{}' is not one of tableau, foundation, deck, waste",
                s
            ))),
        }
    }
}

/// Handle naming the container that owns a card.
///
/// Resolved through the game's pile table. Indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Tableau(u8),
    Foundation(u8),
}

impl PileId {
    /// The rule context of cards held by this pile.
    #[must_use]
    pub const fn location(self) -> Location {
        match self {
            PileId::Stock => Location::Deck,
            PileId::Waste => Location::Waste,
            PileId::Tableau(_) => Location::Tableau,
            PileId::Foundation(_) => Location::Foundation,
        }
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Tableau(i) => write!(f, "Tableau({})", i),
            PileId::Foundation(i) => write!(f, "Foundation({})", i),
        }
    }
}

/// Rank and suit of a normal card, used as a legality key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardShape {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardShape {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

/// Allowable children of a card: at most four shapes (kings on an empty column).
pub type Children = SmallVec<[CardShape; 4]>;

/// A playing card or pile placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Option<Rank>,
    suit: Option<Suit>,
    pub(crate) hidden: bool,
    pub(crate) location: Location,
    pub(crate) owner: Option<PileId>,
}

impl Card {
    /// A face-up normal card located in the deck.
    #[must_use]
    pub const fn normal(rank: Rank, suit: Suit) -> Self {
        Self {
            rank: Some(rank),
            suit: Some(suit),
            hidden: false,
            location: Location::Deck,
            owner: None,
        }
    }

    /// The anchor of an empty foundation: only the Ace of `suit` may go on it.
    #[must_use]
    pub const fn foundation_placeholder(suit: Suit) -> Self {
        Self {
            rank: None,
            suit: Some(suit),
            hidden: false,
            location: Location::Foundation,
            owner: None,
        }
    }

    /// The anchor of an empty tableau column: any King may go on it.
    #[must_use]
    pub const fn tableau_placeholder() -> Self {
        Self {
            rank: None,
            suit: None,
            hidden: false,
            location: Location::Tableau,
            owner: None,
        }
    }

    /// Build a card from textual parts.
    ///
    /// Placeholder shapes override `location`. A rank without a suit is not a
    /// valid shape.
    pub fn parse(rank: Option<&str>, suit: Option<&str>, location: &str, hidden: bool) -> Result<Self> {
        let rank = rank.map(str::parse::<Rank>).transpose()?;
        let suit = suit.map(str::parse::<Suit>).transpose()?;
        let location = location.parse::<Location>()?;

        let mut card = match (rank, suit) {
            (Some(r), Some(s)) => Self::normal(r, s).at(location),
            (None, Some(s)) => Self::foundation_placeholder(s),
            (None, None) => Self::tableau_placeholder(),
            (Some(r), None) => {
                return Err(Error::InvalidCard(format!("rank '{}' without a suit", r.symbol())))
            }
        };
        card.hidden = hidden;
        Ok(card)
    }

    /// The 52 normal cards, suit-major then rank-minor, face-up.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::normal(rank, suit)))
            .collect()
    }

    /// Same card turned face-down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Same card with a different rule context. Placeholders keep theirs.
    #[must_use]
    pub const fn at(mut self, location: Location) -> Self {
        if self.rank.is_some() {
            self.location = location;
        }
        self
    }

    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// The container currently holding this card, if it has been placed.
    #[must_use]
    pub const fn owner(&self) -> Option<PileId> {
        self.owner
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.rank.is_none()
    }

    /// Rank and suit for normal cards, `None` for placeholders.
    #[must_use]
    pub const fn shape(&self) -> Option<CardShape> {
        match (self.rank, self.suit) {
            (Some(rank), Some(suit)) => Some(CardShape::new(rank, suit)),
            _ => None,
        }
    }

    /// Whether `other` names the same physical card (rank and suit), ignoring
    /// visibility, location, and owner.
    #[must_use]
    pub fn same_card(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// Whether this card matches the given rank and suit.
    #[must_use]
    pub fn matches(&self, rank: Option<Rank>, suit: Option<Suit>) -> bool {
        self.rank == rank && self.suit == suit
    }

    /// Shapes that may legally be placed on this card.
    ///
    /// Depends only on the card's own rank, suit, and location.
    #[must_use]
    pub fn allowable_children(&self) -> Children {
        let mut children = Children::new();

        match (self.location, self.rank, self.suit) {
            (Location::Tableau, Some(rank), Some(suit)) => {
                // Aces take nothing in the tableau
                if let Some(lower) = rank.lower() {
                    for child_suit in suit.opposite() {
                        children.push(CardShape::new(lower, child_suit));
                    }
                }
            }
            (Location::Tableau, None, None) => {
                for child_suit in Suit::ALL {
                    children.push(CardShape::new(Rank::King, child_suit));
                }
            }
            (Location::Foundation, Some(rank), Some(suit)) => {
                if let Some(higher) = rank.higher() {
                    children.push(CardShape::new(higher, suit));
                }
            }
            (Location::Foundation, None, Some(suit)) => {
                children.push(CardShape::new(Rank::Ace, suit));
            }
            _ => {}
        }

        children
    }

    /// Whether `child` may be placed on this card.
    ///
    /// Face-down cards and placeholders are never acceptable children.
    #[must_use]
    pub fn allows(&self, child: &Card) -> bool {
        if child.hidden {
            return false;
        }
        child
            .shape()
            .is_some_and(|shape| self.allowable_children().contains(&shape))
    }
}
