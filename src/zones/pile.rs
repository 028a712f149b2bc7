//! Rule-checked piles.
//!
//! A `Pile<P>` is a [`Deck`] plus the `AcceptancePolicy` that guards it.
//! The tableau and foundation types are aliases over the two policies.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::error::{Result, SolitaireError};
use crate::rules::{AcceptancePolicy, StackingRule, VictoryRule};

/// Cards in a completed foundation.
pub const FULL_SUIT: usize = 13;

/// A tableau column.
pub type StackingDeck = Pile<StackingRule>;

/// A foundation pile.
pub type VictoryDeck = Pile<VictoryRule>;

/// A deck guarded by an acceptance policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile<P> {
    deck: Deck,
    policy: P,
}

impl<P: AcceptancePolicy + Default> Pile<P> {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    /// Wrap existing cards without checking them (used by the deal).
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            policy: P::default(),
        }
    }
}

impl<P: AcceptancePolicy> Pile<P> {
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.deck.top()
    }

    /// Check `run` against the policy without placing it.
    pub fn accepts(&self, run: &Deck) -> Result<()> {
        self.policy.check(&self.deck, run)
    }

    /// Place `run` on top if the policy allows it.
    pub fn add(&mut self, run: &Deck) -> Result<()> {
        self.accepts(run)?;
        debug!("Added {} onto [{}]", run, self.deck);
        self.deck.add(run.clone());
        Ok(())
    }

    /// Place a single card if the policy allows it.
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        self.add(&Deck::from(card))
    }

    /// Put back cards that were taken from this pile. Not rule-checked.
    pub fn restore(&mut self, run: Deck) {
        self.deck.add(run);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.deck.draw()
    }

    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.deck.face_up_count()
    }

    /// Split off the face-up tail run from `position` (0 = lowest card of
    /// the run) through the top.
    pub fn split_face_up(&mut self, position: usize) -> Result<Deck> {
        let start = self.deck.face_up_start();
        let run_len = self.deck.len() - start;
        if position >= run_len {
            return Err(SolitaireError::invalid_input(format!(
                "No face-up card at position {} (have {})",
                position, run_len
            )));
        }
        Ok(self.deck.split_top(run_len - position))
    }

    /// Turn the top card face up. Returns true if it was face down.
    pub fn reveal_top(&mut self) -> bool {
        self.deck.reveal_top()
    }
}

impl VictoryDeck {
    /// All thirteen ranks are in place.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == FULL_SUIT
    }
}
