//! Deck integration tests: shuffling, the draw cycle, and rebuilds.

use rust_klondike::{Card, CardShape, Deck, Location, PileId};

fn shapes<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<CardShape> {
    cards.into_iter().filter_map(Card::shape).collect()
}

/// Draw until the stock is empty, returning the waste.
fn drain(deck: &mut Deck) -> Vec<CardShape> {
    while !deck.stock().is_empty() {
        deck.draw();
    }
    shapes(deck.waste())
}

// =============================================================================
// Shuffling
// =============================================================================

/// Same seed, same order; different seeds, different orders.
#[test]
fn test_shuffle_determinism() {
    let a = Deck::shuffled(12345);
    let b = Deck::shuffled(12345);
    let c = Deck::shuffled(54321);

    assert_eq!(shapes(a.stock()), shapes(b.stock()));
    assert_ne!(shapes(a.stock()), shapes(c.stock()));
}

/// Interleaved decks do not disturb each other's generators.
#[test]
fn test_interleaved_decks_are_independent() {
    let mut a = Deck::new(0);
    let mut b = Deck::new(0);
    let mut reference = Deck::new(0);

    a.shuffle(7);
    b.shuffle(8);
    a.shuffle(9);
    reference.shuffle(7);
    reference.shuffle(9);

    assert_eq!(shapes(a.stock()), shapes(reference.stock()));
}

/// Every shuffled deck holds the 52 distinct cards face-down.
#[test]
fn test_shuffled_deck_contents() {
    let deck = Deck::shuffled(3);
    let mut seen = shapes(deck.stock());
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 52);
    for card in deck.stock() {
        assert!(card.is_hidden());
        assert_eq!(card.location(), Location::Deck);
        assert_eq!(card.owner(), Some(PileId::Stock));
    }
}

// =============================================================================
// Draw cycle
// =============================================================================

/// Drawing on an empty stock rebuilds it instead of drawing.
#[test]
fn test_draw_on_empty_stock_rebuilds() {
    let mut deck = Deck::shuffled(1);
    drain(&mut deck);
    assert_eq!(deck.waste().len(), 52);

    deck.draw();

    assert_eq!(deck.stock().len(), 52);
    assert!(deck.waste().is_empty());
    assert_eq!(deck.rebuild_count(), 1);
}

/// A rebuilt stock repeats the first pass exactly.
#[test]
fn test_cycle_is_idempotent() {
    let mut deck = Deck::shuffled(21);
    let original = shapes(deck.stock());
    let first = drain(&mut deck);

    deck.rebuild();
    assert_eq!(shapes(deck.stock()), original);

    let second = drain(&mut deck);
    assert_eq!(first, second);
}

/// Rebuilding after some cards have left the deck keeps the rest in order.
#[test]
fn test_rebuild_after_removal_keeps_order() {
    let mut deck = Deck::shuffled(5);
    let original = shapes(deck.stock());

    deck.draw();
    let taken = deck.waste()[0];
    deck.take_waste(&taken).unwrap();
    drain(&mut deck);
    deck.rebuild();

    let expected: Vec<CardShape> = original
        .into_iter()
        .filter(|s| Some(*s) != taken.shape())
        .collect();
    assert_eq!(shapes(deck.stock()), expected);
}

/// A one-card draw count turns one card at a time.
#[test]
fn test_single_card_draw() {
    let mut deck = Deck::shuffled(2).with_draw_count(1);
    deck.draw();
    assert_eq!(deck.waste().len(), 1);
    assert_eq!(deck.stock().len(), 51);
}

/// The last draw of a pass turns whatever is left.
#[test]
fn test_short_final_draw() {
    let mut deck = Deck::shuffled(2);
    deck.deal(50);
    deck.draw();
    assert_eq!(deck.waste().len(), 2);
    assert!(deck.stock().is_empty());
}

/// `deal` clamps to what is left.
#[test]
fn test_deal_clamps() {
    let mut deck = Deck::shuffled(2);
    assert_eq!(deck.deal(60).len(), 52);
    assert!(deck.is_empty());
}

/// The stacked order is what rebuilds restore.
#[test]
fn test_stacked_deck_rebuild() {
    let cards = Card::standard_deck();
    let expected = shapes(&cards);
    let mut deck = Deck::stacked(cards);

    drain(&mut deck);
    deck.rebuild();
    assert_eq!(shapes(deck.stock()), expected);
    assert_eq!(deck.shuffle_order(), Some(expected.as_slice()));
}
