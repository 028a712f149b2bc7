//! Ordered card sequences.
//!
//! `Deck` is the sequence core every pile is built on. Cards are appended
//! and popped at the tail only; the tail is the top of the pile.
//!
//! Cards live in an `im::Vector`, so cloning a deck (and with it a whole
//! board) is O(1) and copy-on-write: the clone never observes later
//! mutation of the original.
//!
//! ## Splits
//!
//! ```
//! use rust_klondike::cards::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::from_cards([
//!     Card::new(Suit::Hearts, Rank::Ace),
//!     Card::new(Suit::Hearts, Rank::Two),
//!     Card::new(Suit::Hearts, Rank::Three),
//! ]);
//! let original = deck.clone();
//!
//! let two = Card::new(Suit::Hearts, Rank::Two);
//! let tail = deck.split_after(&two, true).unwrap();
//! assert_eq!(tail.len(), 2);
//! assert_eq!(deck.len(), 1);
//!
//! deck.add(tail);
//! assert_eq!(deck, original);
//! ```

use std::fmt;

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::error::{CardRejection, Result, SolitaireError};
use crate::core::rng::GameRng;

/// An ordered sequence of cards. Index 0 is the bottom.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards, first card at the bottom.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The standard 52-card deck, face down, suit by suit from Ace to King.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_cards(
            Suit::all().flat_map(|suit| Rank::all().map(move |rank| Card::new(suit, rank))),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// The top (tail) card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// The bottom card.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Append a card, or every card of another deck in order.
    pub fn add(&mut self, cards: impl Into<Deck>) {
        let other = cards.into();
        trace!("Appending {} to {}", other, self);
        self.cards.append(other.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop_back().ok_or(SolitaireError::EmptyDeck)
    }

    /// Fail with `InvalidCard` unless `card` is in the deck.
    pub fn must_contain(&self, card: &Card) -> Result<usize> {
        self.position(card)
            .ok_or_else(|| CardRejection::NotInDeck { card: *card }.into())
    }

    fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Split off `card` and everything above it (`include`), or only what
    /// is above it (`!include`). The returned deck keeps its order.
    pub fn split_after(&mut self, card: &Card, include: bool) -> Result<Deck> {
        let index = self.must_contain(card)?;
        let at = if include { index } else { index + 1 };
        let tail = self.cards.split_off(at);
        debug!("Split {} cards after {} (include={})", tail.len(), card, include);
        Ok(Deck { cards: tail })
    }

    /// Split off everything below `card`, plus `card` itself when `include`.
    /// The deck keeps the rest.
    pub fn split_before(&mut self, card: &Card, include: bool) -> Result<Deck> {
        let index = self.must_contain(card)?;
        let at = if include { index + 1 } else { index };
        let rest = self.cards.split_off(at);
        let head = std::mem::replace(&mut self.cards, rest);
        debug!("Split {} cards before {} (include={})", head.len(), card, include);
        Ok(Deck { cards: head })
    }

    /// Split off the top `count` cards (fewer if the deck is shorter).
    pub fn split_top(&mut self, count: usize) -> Deck {
        let at = self.cards.len().saturating_sub(count);
        Deck {
            cards: self.cards.split_off(at),
        }
    }

    /// Remove every card, leaving the deck empty.
    pub fn take(&mut self) -> Deck {
        std::mem::take(self)
    }

    /// Uniform random permutation in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Toggle the orientation of every card.
    pub fn flip(&mut self) {
        for card in self.cards.iter_mut() {
            card.flip();
        }
    }

    /// Turn the top card face up. Returns true if it was face down.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Reverse the order of the cards.
    pub fn reverse(&mut self) {
        self.cards = self.cards.iter().rev().copied().collect();
    }

    /// The face-up cards, in order.
    pub fn face_up_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|c| c.face_up)
    }

    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.face_up_cards().count()
    }

    /// Same cards in the same order, each facing the same way.
    ///
    /// `==` compares rank and suit only.
    #[must_use]
    pub fn is_identical_to(&self, other: &Deck) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a == b && a.face_up == b.face_up)
    }

    /// Index of the first card of the face-up tail run.
    ///
    /// Equals `len()` when the top card is face down or the deck is empty.
    #[must_use]
    pub fn face_up_start(&self) -> usize {
        let run = self.cards.iter().rev().take_while(|c| c.face_up).count();
        self.cards.len() - run
    }
}

impl From<Card> for Deck {
    fn from(card: Card) -> Self {
        Deck {
            cards: Vector::unit(card),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Deck::from_cards(iter)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.cards.iter().map(Card::name).collect();
        write!(f, "{}", names.join(", "))
    }
}
