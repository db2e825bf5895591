//! Draw-without-replacement deck over the active theme.
//!
//! Every card index of the active theme is either still available or already
//! drawn in the current cycle. Once the available set runs dry it is refilled
//! with the full index range, so cards repeat across cycles but never within
//! one.

use tracing::{debug, info};

use super::{
    card::{SpectrumCard, Theme},
    themes,
};

pub struct Deck {
    theme: Theme,
    available: Vec<usize>,
    rng: fastrand::Rng,
}

impl Deck {
    pub fn new(theme: Theme) -> Self {
        Self::with_rng(theme, fastrand::Rng::new())
    }

    /// Build a deck with an explicit random source (seeded in tests).
    pub fn with_rng(theme: Theme, rng: fastrand::Rng) -> Self {
        let mut deck = Self {
            theme,
            available: Vec::new(),
            rng,
        };
        deck.refill();
        deck
    }

    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Number of cards left before the next refill.
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    /// Replace the active theme, discarding all draw history.
    pub fn set_theme(&mut self, theme: Theme) {
        info!(theme = %theme.name, cards = theme.len(), "Active theme changed");
        self.theme = theme;
        self.refill();
    }

    /// Draw a card not yet seen in this cycle.
    ///
    /// Returns `None` only when the active theme has no cards at all.
    pub fn draw(&mut self) -> Option<SpectrumCard> {
        if self.theme.is_empty() {
            return None;
        }
        if self.available.is_empty() {
            debug!(theme = %self.theme.name, "Deck exhausted, starting a new cycle");
            self.refill();
        }

        let slot = self.rng.usize(..self.available.len());
        let index = self.available.swap_remove(slot);
        self.theme.cards.get(index).cloned()
    }

    fn refill(&mut self) {
        self.available = (0..self.theme.len()).collect();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(themes::general())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn numbered_theme(name: &str, count: usize) -> Theme {
        Theme::new(
            name,
            (0..count)
                .map(|i| SpectrumCard::new(format!("{name} L{i}"), format!("{name} R{i}")))
                .collect(),
        )
    }

    #[test]
    fn test_full_cycle_draws_each_card_once() {
        let theme = numbered_theme("t", 7);
        let mut deck = Deck::with_rng(theme, fastrand::Rng::with_seed(3));

        let drawn: Vec<SpectrumCard> = (0..7).filter_map(|_| deck.draw()).collect();
        let unique: HashSet<&str> = drawn.iter().map(|c| c.left.as_str()).collect();

        assert_eq!(drawn.len(), 7);
        assert_eq!(unique.len(), 7, "No card should repeat within a cycle");
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_exhausted_deck_refills_on_next_draw() {
        let theme = numbered_theme("t", 3);
        let mut deck = Deck::with_rng(theme.clone(), fastrand::Rng::with_seed(11));
        for _ in 0..3 {
            deck.draw();
        }

        let card = deck.draw().expect("refill should make a card available");
        assert!(theme.cards.contains(&card));
        assert_eq!(deck.remaining(), 2, "Refill then draw leaves N-1 cards");
    }

    #[test]
    fn test_second_cycle_is_also_complete() {
        let theme = numbered_theme("t", 5);
        let mut deck = Deck::with_rng(theme, fastrand::Rng::with_seed(42));
        for _ in 0..5 {
            deck.draw();
        }
        let second: HashSet<String> = (0..5).filter_map(|_| deck.draw()).map(|c| c.left).collect();
        assert_eq!(second.len(), 5);
    }

    #[test]
    fn test_theme_switch_resets_availability() {
        let mut deck = Deck::with_rng(numbered_theme("old", 4), fastrand::Rng::with_seed(1));
        deck.draw();
        deck.draw();

        let new_theme = numbered_theme("new", 6);
        deck.set_theme(new_theme.clone());
        assert_eq!(deck.remaining(), 6);

        for _ in 0..12 {
            let card = deck.draw().expect("theme has cards");
            assert!(
                new_theme.cards.contains(&card),
                "Draw after switch must come from the new theme"
            );
        }
    }

    #[test]
    fn test_empty_theme_draws_nothing() {
        let mut deck = Deck::new(Theme::new("empty", Vec::new()));
        assert!(deck.draw().is_none());
    }
}
