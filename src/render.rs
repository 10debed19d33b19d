//! Plain-text rendering for terminals and logs.
//!
//! Face-down cards print as `##`, so a rendered game shows exactly what a
//! player at the table would see.

use std::fmt;

use crate::core::Card;
use crate::game::{Game, Move};
use crate::piles::Pile;

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank(), self.suit()) {
            _ if self.is_hidden() => write!(f, "##"),
            (Some(rank), Some(suit)) => write!(f, "{}{}", rank.symbol(), suit.glyph()),
            (None, Some(suit)) => write!(f, "[{}]", suit.glyph()),
            _ => write!(f, "[ ]"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

fn write_cards<'a>(f: &mut fmt::Formatter<'_>, cards: impl Iterator<Item = &'a Card>) -> fmt::Result {
    for (i, card) in cards.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", card)?;
    }
    Ok(())
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score())?;
        write!(
            f,
            "Stock: {} (rebuilt {}x) | Waste: ",
            self.deck().stock().len(),
            self.deck().rebuild_count()
        )?;
        write_cards(f, self.deck().waste().iter().take(self.deck().draw_count()))?;
        writeln!(f)?;

        write!(f, "Foundations: ")?;
        write_cards(f, self.foundations().iter().filter_map(|p| p.cards().back()))?;
        writeln!(f)?;

        for tableau in self.tableaus() {
            write!(f, "T{}: ", tableau.index() + 1)?;
            write_cards(f, tableau.cards().iter().filter(|c| !c.is_placeholder() || tableau.is_empty()))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Game {
    /// Text dump of the table. Does not touch the game.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}
