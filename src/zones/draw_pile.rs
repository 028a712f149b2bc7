//! The stock and waste.
//!
//! `DrawPile` is a state machine over three decks:
//! - `cards`: the face-down stock, tail = next card to draw
//! - `discards`: revealed cards that were passed over
//! - `revealed`: the visible window, at most `draw_pile_size` cards
//!
//! Each call to [`DrawPile::advance`] produces the next window:
//!
//! 1. If the window is empty but discards are not, the most recent discard
//!    is shown again as a one-card window.
//! 2. Otherwise the window folds into the discards. When the stock is empty
//!    the discards are reversed, turned face down and become the stock
//!    again (one loop). Then up to `draw_pile_size` cards come off the stock,
//!    turned face up with the card that was deepest in the stock on top.
//!
//! Recycling past `max_loops` exhausts the pile: the current window stays
//! playable, but no new windows are dealt.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// Stock, waste and the visible window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Deck,
    discards: Deck,
    revealed: Deck,
    loops: u32,
    max_loops: Option<u32>,
    draw_pile_size: usize,
    exhausted: bool,
}

impl DrawPile {
    /// Create an empty draw pile.
    #[must_use]
    pub fn new(draw_pile_size: usize, max_loops: Option<u32>) -> Self {
        assert!(draw_pile_size > 0, "Draw pile size must be at least 1");
        Self {
            cards: Deck::new(),
            discards: Deck::new(),
            revealed: Deck::new(),
            loops: 0,
            max_loops,
            draw_pile_size,
            exhausted: false,
        }
    }

    /// Put cards into the stock.
    pub fn load(&mut self, cards: Deck) {
        self.cards.add(cards);
    }

    /// Shuffle the stock.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.cards.shuffle(rng);
    }

    /// Take the top stock card (used by the deal).
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.draw()
    }

    /// Produce the next window.
    ///
    /// Returns `None` when nothing new can be shown: the pile is exhausted
    /// or holds no cards at all.
    pub fn advance(&mut self) -> Option<&Deck> {
        if self.revealed.is_empty() && !self.discards.is_empty() {
            self.revealed = self.discards.split_top(1);
            debug!("Reshowing discard {}", self.revealed);
            return Some(&self.revealed);
        }

        if self.exhausted {
            debug!("Draw pile is exhausted after {} loops", self.loops);
            return None;
        }

        if self.cards.is_empty() {
            if self.revealed.is_empty() {
                debug!("Draw pile is empty");
                return None;
            }
            if !self.can_recycle() {
                info!(
                    "Stock recycled {} times, no more loops allowed",
                    self.loops
                );
                self.exhausted = true;
                return None;
            }
            self.fold_revealed();
            self.recycle();
        } else {
            self.fold_revealed();
        }

        let mut window = self.cards.split_top(self.draw_pile_size);
        window.flip();
        window.reverse();
        debug!(
            "Revealed [{}], stock {} discards {}",
            window,
            self.cards.len(),
            self.discards.len()
        );
        self.revealed = window;
        Some(&self.revealed)
    }

    fn can_recycle(&self) -> bool {
        self.max_loops.map_or(true, |max| self.loops < max)
    }

    fn fold_revealed(&mut self) {
        let window = self.revealed.take();
        self.discards.add(window);
    }

    fn recycle(&mut self) {
        let mut discards = self.discards.take();
        discards.reverse();
        discards.flip();
        self.cards.add(discards);
        self.loops += 1;
        info!("Recycled discards into the stock (loop {})", self.loops);
    }

    /// The window needs a reshow before the player can see a card.
    #[must_use]
    pub fn needs_reshow(&self) -> bool {
        self.revealed.is_empty() && !self.discards.is_empty()
    }

    /// The playable card: top of the window.
    #[must_use]
    pub fn playable(&self) -> Option<&Card> {
        self.revealed.top()
    }

    /// Take the playable card out of the window.
    pub fn take_playable(&mut self) -> Result<Card> {
        self.revealed.draw()
    }

    /// Return a card to the window it was taken from.
    pub fn return_playable(&mut self, card: Card) {
        self.revealed.add(card);
    }

    #[must_use]
    pub fn revealed(&self) -> &Deck {
        &self.revealed
    }

    #[must_use]
    pub fn stock(&self) -> &Deck {
        &self.cards
    }

    #[must_use]
    pub fn discards(&self) -> &Deck {
        &self.discards
    }

    #[must_use]
    pub fn loops(&self) -> u32 {
        self.loops
    }

    #[must_use]
    pub fn max_loops(&self) -> Option<u32> {
        self.max_loops
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.draw_pile_size
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Cards across stock, discards and window.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.cards.len() + self.discards.len() + self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn pile_of(ranks: &[Rank], size: usize, max_loops: Option<u32>) -> DrawPile {
        let mut pile = DrawPile::new(size, max_loops);
        pile.load(ranks.iter().map(|&r| Card::new(Suit::Clubs, r)).collect());
        pile
    }

    fn names(deck: &Deck) -> Vec<String> {
        deck.iter().map(Card::name).collect()
    }

    #[test]
    fn test_window_order_and_orientation() {
        use Rank::*;
        let mut pile = pile_of(&[Ace, Two, Three, Four, Five], 3, None);

        let window = pile.advance().unwrap().clone();
        // Stock tail was 5C; it lands at the bottom of the window.
        assert_eq!(names(&window), vec!["5C", "4C", "3C"]);
        assert_eq!(window.face_up_count(), 3);
        assert_eq!(pile.playable(), Some(&Card::new(Suit::Clubs, Three)));

        let window = pile.advance().unwrap().clone();
        assert_eq!(names(&window), vec!["2C", "AC"]);
        assert_eq!(pile.discards().len(), 3);
        assert_eq!(pile.stock().len(), 0);
    }

    #[test]
    fn test_recycle_restores_stock_order() {
        use Rank::*;
        let mut pile = pile_of(&[Ace, Two, Three, Four], 2, None);
        let original = pile.stock().clone();

        pile.advance();
        pile.advance();
        assert_eq!(pile.loops(), 0);

        // Third advance recycles.
        let window = pile.advance().unwrap().clone();
        assert_eq!(pile.loops(), 1);
        assert_eq!(names(&window), vec!["4C", "3C"]);
        assert_eq!(pile.stock(), &Deck::from_cards(original.iter().take(2).copied()));
        assert_eq!(pile.stock().face_up_count(), 0);
    }

    #[test]
    fn test_reshow_after_window_played_out() {
        use Rank::*;
        let mut pile = pile_of(&[Ace, Two, Three, Four], 2, None);
        pile.advance();
        pile.advance();
        // Play both cards of the second window.
        pile.take_playable().unwrap();
        pile.take_playable().unwrap();
        assert!(pile.needs_reshow());

        let window = pile.advance().unwrap().clone();
        assert_eq!(names(&window), vec!["3C"]);
        assert_eq!(pile.discards().len(), 1);
    }

    #[test]
    fn test_zero_loops_passes_once() {
        use Rank::*;
        let mut pile = pile_of(&[Ace, Two, Three, Four, Five, Six], 3, Some(0));
        assert!(pile.advance().is_some());
        assert!(pile.advance().is_some());
        assert!(pile.advance().is_none());
        assert!(pile.is_exhausted());
        // The last window stays playable.
        assert_eq!(pile.playable(), Some(&Card::new(Suit::Clubs, Ace)));
        assert!(pile.advance().is_none());
        assert_eq!(pile.total_len(), 6);
    }

    #[test]
    fn test_empty_pile_advances_to_nothing() {
        let mut pile = DrawPile::new(3, None);
        assert!(pile.advance().is_none());
        assert!(!pile.is_exhausted());
    }

    #[test]
    fn test_return_playable() {
        use Rank::*;
        let mut pile = pile_of(&[Ace, Two], 3, None);
        pile.advance();
        let card = pile.take_playable().unwrap();
        pile.return_playable(card);
        assert_eq!(pile.playable(), Some(&card));
        assert_eq!(pile.total_len(), 2);
    }
}
