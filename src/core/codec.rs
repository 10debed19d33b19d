//! Numeric card encoding for observation consumers.
//!
//! ## ID Layout
//!
//! - `0`: padding sentinel, "no card here"
//! - `1..=52`: normal cards, suit-major (s, h, c, d) then rank-minor (A..K)
//! - `53..=56`: empty-foundation placeholders for s, h, c, d
//! - `57`: empty-tableau placeholder
//! - `58`: any face-down card, whatever its identity
//!
//! Both directions are `const` tables built at compile time.
//!
//! ```
//! use rust_klondike::core::{codec, Card, Rank, Suit};
//!
//! assert_eq!(codec::encode(&Card::normal(Rank::Ace, Suit::Spades)), 1);
//! assert_eq!(codec::encode(&Card::normal(Rank::King, Suit::Diamonds)), 52);
//! assert_eq!(codec::encode(&Card::normal(Rank::King, Suit::Diamonds).face_down()), codec::HIDDEN);
//! assert_eq!(codec::decode(14), Some((Some(Rank::Ace), Some(Suit::Hearts))));
//! ```

use super::card::{Card, Rank, Suit};

/// Padding sentinel.
pub const EMPTY: u8 = 0;
/// Id of the spades foundation placeholder; the other suits follow in order.
pub const FOUNDATION_PLACEHOLDER: u8 = 53;
/// Id of the empty-tableau placeholder.
pub const TABLEAU_PLACEHOLDER: u8 = 57;
/// Id of every face-down card.
pub const HIDDEN: u8 = 58;
/// Number of distinct ids, sentinel included.
pub const ID_COUNT: usize = 59;

/// Rank and suit of a card or placeholder.
pub type CardKey = (Option<Rank>, Option<Suit>);

// Rows are suits then "no suit"; columns are ranks then "no rank".
const ENCODE: [[u8; 14]; 5] = build_encode();
const DECODE: [Option<CardKey>; ID_COUNT] = build_decode();

const fn build_encode() -> [[u8; 14]; 5] {
    let mut table = [[EMPTY; 14]; 5];
    let mut s = 0;
    while s < 4 {
        let mut r = 0;
        while r < 13 {
            table[s][r] = (1 + s * 13 + r) as u8;
            r += 1;
        }
        table[s][13] = FOUNDATION_PLACEHOLDER + s as u8;
        s += 1;
    }
    table[4][13] = TABLEAU_PLACEHOLDER;
    table
}

const fn build_decode() -> [Option<CardKey>; ID_COUNT] {
    let mut table: [Option<CardKey>; ID_COUNT] = [None; ID_COUNT];
    let mut s = 0;
    while s < 4 {
        let mut r = 0;
        while r < 13 {
            table[1 + s * 13 + r] = Some((Some(Rank::ALL[r]), Some(Suit::ALL[s])));
            r += 1;
        }
        table[FOUNDATION_PLACEHOLDER as usize + s] = Some((None, Some(Suit::ALL[s])));
        s += 1;
    }
    table[TABLEAU_PLACEHOLDER as usize] = Some((None, None));
    table
}

/// Id of a rank/suit pair, `None` for a rank without a suit.
#[must_use]
pub const fn encode_key(rank: Option<Rank>, suit: Option<Suit>) -> Option<u8> {
    let row = match suit {
        Some(s) => s.index(),
        None => 4,
    };
    let col = match rank {
        Some(r) => r.index(),
        None => 13,
    };
    match ENCODE[row][col] {
        EMPTY => None,
        id => Some(id),
    }
}

/// Id of a card as seen by an observer. Face-down cards never leak identity.
#[must_use]
pub const fn encode(card: &Card) -> u8 {
    if card.is_hidden() {
        return HIDDEN;
    }
    match encode_key(card.rank(), card.suit()) {
        Some(id) => id,
        None => EMPTY,
    }
}

/// Rank/suit pair behind an id. `None` for the sentinel, the hidden id, and
/// anything out of range.
#[must_use]
pub const fn decode(id: u8) -> Option<CardKey> {
    if (id as usize) < ID_COUNT {
        DECODE[id as usize]
    } else {
        None
    }
}
